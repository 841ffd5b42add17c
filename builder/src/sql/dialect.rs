use itertools::Itertools;

use crate::utils::FlexLookup;

use super::{MySql, Postgres, Sqlite};

pub trait Dialect {
    /// Name used when reporting which dialect rendered a query
    fn name(&self) -> &'static str;

    /// Quote a table or column for use in SQL.
    fn quote_identifier(&self, ident: &str) -> String;

    /// Render a table and column reference
    fn table_column(&self, table: &str, column: &str) -> String {
        let quoted_table = self.quote_identifier(table);
        let quoted_column = self.quote_identifier(column);
        format!("{}.{}", quoted_table, quoted_column)
    }

    /// The function call producing a random value per row, as used in `ORDER BY`
    fn random_function(&self) -> &'static str;
}

type DialectConstructor = fn() -> Box<dyn Dialect>;

fn postgres() -> Box<dyn Dialect> {
    Box::new(Postgres())
}

fn mysql() -> Box<dyn Dialect> {
    Box::new(MySql())
}

fn sqlite() -> Box<dyn Dialect> {
    Box::new(Sqlite())
}

const DIALECTS: [(&str, DialectConstructor); 6] = [
    ("postgres", postgres),
    ("postgresql", postgres),
    ("pg", postgres),
    ("mysql", mysql),
    ("mariadb", mysql),
    ("sqlite", sqlite),
];

/// Find a dialect by name. Case and punctuation are ignored, so `PostgreSQL`, `postgres` and `my_sql`
/// all resolve.
pub fn find_dialect(name: &str) -> Option<Box<dyn Dialect>> {
    let name = name.trim_end_matches(char::is_numeric);
    DIALECTS[..].flex_find(name).map(|construct| construct())
}

/// The name of every supported dialect, once each, in lookup-table order
pub fn dialect_names() -> Vec<&'static str> {
    DIALECTS
        .iter()
        .map(|(_, construct)| construct().name())
        .unique()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_of(name: &str) -> Option<&'static str> {
        find_dialect(name).map(|d| d.name())
    }

    #[test]
    fn test_find_dialect() {
        assert_eq!(name_of("postgres"), Some("postgres"));
        assert_eq!(name_of("PostgreSQL"), Some("postgres"));
        assert_eq!(name_of("pg"), Some("postgres"));
        assert_eq!(name_of("My_SQL"), Some("mysql"));
        assert_eq!(name_of("MariaDB"), Some("mysql"));
        assert_eq!(name_of("sqlite3"), Some("sqlite"));
        assert_eq!(name_of("oracle"), None);
        assert_eq!(name_of(""), None);
    }

    #[test]
    fn test_dialect_names() {
        assert_eq!(dialect_names(), vec!["postgres", "mysql", "sqlite"]);
        for name in dialect_names() {
            assert_eq!(name_of(name), Some(name));
        }
    }

    #[test]
    fn test_table_column() {
        assert_eq!(Postgres().table_column("users", "name"), r#""users"."name""#);
        assert_eq!(MySql().table_column("users", "name"), "`users`.`name`");
    }
}
