use super::dialect::Dialect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MySql();

impl Dialect for MySql {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn quote_identifier(&self, ident: &str) -> String {
        format!("`{}`", ident.replace('`', "``"))
    }

    fn random_function(&self) -> &'static str {
        "RAND()"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_identifier() {
        assert_eq!(MySql().quote_identifier("name"), "`name`");
        assert_eq!(MySql().quote_identifier("a`b"), "`a``b`");
    }
}
