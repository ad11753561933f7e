pub mod place;

pub use place::*;
