/// We may eventually make this configurable
pub const INDENT_SPACER: &str = "  ";

pub const LIST_SEPARATOR: &str = ", ";
pub const ALL_COLUMNS: &str = "*";
