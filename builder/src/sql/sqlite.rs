use super::dialect::Dialect;

/// SQLite accepts the same identifier quoting as Postgres.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sqlite();

impl Dialect for Sqlite {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{}""#, ident.replace('"', r#""""#))
    }

    fn random_function(&self) -> &'static str {
        "RANDOM()"
    }
}
