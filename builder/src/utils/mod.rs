mod flex_match;

pub use flex_match::*;
