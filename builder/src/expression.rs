use orderly_parser::ast::SortTarget;
use serde::{Deserialize, Serialize};

/// A column, optionally qualified by the table it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnRef {
    pub table: Option<String>,
    pub name: String,
}

impl ColumnRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            table: None,
            name: name.into(),
        }
    }

    pub fn qualified(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            name: name.into(),
        }
    }

    /// True when either the column name or the table qualifier holds nothing but whitespace
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
            || self
                .table
                .as_ref()
                .map(|t| t.trim().is_empty())
                .unwrap_or(false)
    }

    /// True when a part still holds a `.` after the table was split off, as happens for
    /// `schema.table.column`
    pub fn has_nested_path(&self) -> bool {
        self.name.contains('.')
            || self
                .table
                .as_ref()
                .map(|t| t.contains('.'))
                .unwrap_or(false)
    }

    fn display_path(&self) -> String {
        match &self.table {
            Some(table) => format!("{table}.{}", self.name),
            None => self.name.clone(),
        }
    }
}

impl std::fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_path())
    }
}

/// `"users.name"` becomes the `name` column of the `users` table. Only the first `.` separates
/// the table from the column.
impl From<&str> for ColumnRef {
    fn from(reference: &str) -> Self {
        match reference.split_once('.') {
            Some((table, name)) => ColumnRef::qualified(table, name),
            None => ColumnRef::new(reference),
        }
    }
}

impl From<String> for ColumnRef {
    fn from(reference: String) -> Self {
        ColumnRef::from(reference.as_str())
    }
}

/// SQL supplied by the caller. The clause never looks inside an expression; only the renderer
/// does.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "sql", rename_all = "lowercase")]
pub enum Expression {
    /// Emitted verbatim
    Raw(String),
    /// The dialect's random-number function
    Random,
}

impl Expression {
    pub fn raw(sql: impl Into<String>) -> Self {
        Expression::Raw(sql.into())
    }

    pub fn random() -> Self {
        Expression::Random
    }

    pub fn is_blank(&self) -> bool {
        match self {
            Expression::Raw(sql) => sql.trim().is_empty(),
            Expression::Random => false,
        }
    }
}

/// Anything an ORDER BY item can refer to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orderable {
    Column(ColumnRef),
    Expression(Expression),
}

impl From<ColumnRef> for Orderable {
    fn from(column: ColumnRef) -> Self {
        Orderable::Column(column)
    }
}

impl From<&str> for Orderable {
    fn from(reference: &str) -> Self {
        Orderable::Column(reference.into())
    }
}

impl From<String> for Orderable {
    fn from(reference: String) -> Self {
        Orderable::Column(reference.into())
    }
}

impl From<Expression> for Orderable {
    fn from(expression: Expression) -> Self {
        Orderable::Expression(expression)
    }
}

impl From<SortTarget> for Orderable {
    fn from(target: SortTarget) -> Self {
        match target {
            SortTarget::Column { table, name } => Orderable::Column(ColumnRef { table, name }),
            SortTarget::Raw(sql) => Orderable::Expression(Expression::Raw(sql)),
        }
    }
}
