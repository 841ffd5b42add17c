pub fn empty_table_name() -> String {
    "A query requires a table name.".to_string()
}

pub fn empty_column_name() -> String {
    "Column names must not be empty.".to_string()
}

pub fn invalid_column_name(name: &str) -> String {
    format!(
        "Column `{}` has too many parts. Use `column` or `table.column`.",
        name
    )
}

pub fn empty_expression() -> String {
    "Ordering expressions must not be empty.".to_string()
}

pub fn invalid_ordering(reason: &str) -> String {
    reason.to_string()
}

pub fn unknown_dialect(name: &str, supported: &[&str]) -> String {
    format!(
        "Dialect `{}` is not supported. Use one of: {}.",
        name,
        supported.join(", ")
    )
}
