use crate::{
    errors::{Error, ErrorKind},
    sql::{find_dialect, Dialect, Postgres},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// The whole query on one line
    Inline,
    /// One keyword per line, with the body of each clause indented beneath it
    Indented,
}

impl Default for Layout {
    fn default() -> Self {
        Layout::Inline
    }
}

pub struct Options {
    pub dialect: Box<dyn Dialect>,
    pub layout: Layout,
}

impl Options {
    pub fn for_dialect(name: &str) -> Result<Self, Error> {
        let dialect = find_dialect(name)
            .ok_or_else(|| Error::new(ErrorKind::UnknownDialect(name.to_string())))?;
        Ok(Self {
            dialect,
            layout: Layout::default(),
        })
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            dialect: Box::new(Postgres()),
            layout: Layout::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_dialect() {
        let options = Options::for_dialect("MySQL").unwrap();
        assert_eq!(options.dialect.name(), "mysql");
        assert_eq!(options.layout, Layout::Inline);

        let err = Options::for_dialect("oracle").err().unwrap();
        assert_eq!(err.kind(), &ErrorKind::UnknownDialect("oracle".to_string()));
        assert_eq!(
            err.to_string(),
            "Dialect `oracle` is not supported. Use one of: postgres, mysql, sqlite."
        );
    }
}
