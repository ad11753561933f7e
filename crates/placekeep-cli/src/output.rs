use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use placekeep_types::Place;

/// Whether plain-format output should be colored
pub fn use_color() -> bool {
    std::io::stdout().is_terminal()
}

/// Truncate for column display, respecting UTF-8 character boundaries
fn truncate_for_display(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars - 3).collect();
        format!("{}...", truncated)
    }
}

pub fn print_places_table(places: &[Place], color: bool) {
    if places.is_empty() {
        let msg = "No places saved yet. Add one with 'placekeep place add'.";
        if color {
            println!("{}", msg.bright_black());
        } else {
            println!("{}", msg);
        }
        return;
    }

    let header = format!(
        "{:>6}  {:<28} {:<36} {}",
        "ID", "TITLE", "ADDRESS", "COORDINATE"
    );
    if color {
        println!("{}", header.bold());
    } else {
        println!("{}", header);
    }

    for place in places {
        println!(
            "{:>6}  {:<28} {:<36} {}",
            place.id,
            truncate_for_display(&place.title, 28),
            truncate_for_display(&place.address, 36),
            place.location
        );
    }
}

pub fn print_place_details(place: &Place, color: bool) {
    let rows = [
        ("id", place.id.to_string()),
        ("title", place.title.clone()),
        ("address", place.address.clone()),
        ("coordinate", place.location.to_string()),
        ("image", place.image_uri.clone()),
    ];

    for (label, value) in rows {
        if color {
            println!("{:>10}  {}", label.bright_black(), value);
        } else {
            println!("{:>10}  {}", label, value);
        }
    }
}
