pub const ORDERING_SEPARATOR: char = ',';
pub const PATH_SEPARATOR: char = '.';

pub const DB_IDENTIFIER_QUOTE: char = '"';
pub const RAW_EXPRESSION_QUOTE: char = '`';
pub const STRING_ESCAPE_PREFIX: char = '\\';

pub const CALL_OPEN: char = '(';
pub const CALL_CLOSE: char = ')';

pub const KEYWORD_ASC: &str = "asc";
pub const KEYWORD_DESC: &str = "desc";

/// Function names accepted as a request for random ordering, compared without regard to case.
pub const RANDOM_FUNCTIONS: [&str; 2] = ["random", "rand"];
