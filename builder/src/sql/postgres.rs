use super::dialect::Dialect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Postgres();

impl Dialect for Postgres {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{}""#, ident.replace('"', r#""""#))
    }

    fn random_function(&self) -> &'static str {
        "RANDOM()"
    }
}
