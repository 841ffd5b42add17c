use std::error;
use std::fmt;

use super::msg;
use crate::sql::dialect_names;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind) -> Error {
        Error { kind }
    }

    /// Return the kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

/// The kind of an error that can occur while building a query.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    EmptyTableName,
    EmptyColumnName,
    /// A column reference with more parts than `table.column`
    InvalidColumnName(String),
    EmptyExpression,
    /// Ordering text could not be parsed. Holds the parser's description of the problem.
    InvalidOrdering(String),
    UnknownDialect(String),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let message = match &self.kind {
            ErrorKind::EmptyTableName => msg::empty_table_name(),
            ErrorKind::EmptyColumnName => msg::empty_column_name(),
            ErrorKind::InvalidColumnName(name) => msg::invalid_column_name(name),
            ErrorKind::EmptyExpression => msg::empty_expression(),
            ErrorKind::InvalidOrdering(reason) => msg::invalid_ordering(reason),
            ErrorKind::UnknownDialect(name) => msg::unknown_dialect(name, &dialect_names()),
        };
        write!(f, "{message}")
    }
}
