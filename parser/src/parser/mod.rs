mod ordering;
mod utils;

pub use ordering::ordering;
