use orderly_parser::{ast::Directive, parse};
use tracing::debug;

use crate::{
    clauses::OrderByClause,
    errors::{Error, ErrorKind},
    expression::{ColumnRef, Expression, Orderable},
    options::Options,
    rendering::Render,
    types::OrderType,
};

/// Builds a `SELECT` over one table. Ordering requests are checked here, before they reach the
/// [`OrderByClause`], which accepts anything it is given.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    table: String,
    columns: Vec<ColumnRef>,
    order_by: OrderByClause,
}

impl QueryBuilder {
    pub fn new(table: impl Into<String>) -> Result<Self, Error> {
        let table = table.into();
        if table.trim().is_empty() {
            return Err(Error::new(ErrorKind::EmptyTableName));
        }
        Ok(Self {
            table,
            columns: Vec::new(),
            order_by: OrderByClause::new(),
        })
    }

    /// Add result columns. Without any, every column is selected.
    pub fn select<I, C>(&mut self, columns: I) -> Result<&mut Self, Error>
    where
        I: IntoIterator<Item = C>,
        C: Into<ColumnRef>,
    {
        let columns = columns.into_iter().map(Into::into).collect::<Vec<_>>();
        for column in &columns {
            check_column(column)?;
        }
        self.columns.extend(columns);
        Ok(self)
    }

    pub fn order_by(
        &mut self,
        column: impl Into<ColumnRef>,
        order_type: OrderType,
    ) -> Result<&mut Self, Error> {
        let column = column.into();
        check_column(&column)?;
        self.order_by.add_column(column, order_type);
        Ok(self)
    }

    pub fn order_by_asc(&mut self, column: impl Into<ColumnRef>) -> Result<&mut Self, Error> {
        self.order_by(column, OrderType::Asc)
    }

    pub fn order_by_desc(&mut self, column: impl Into<ColumnRef>) -> Result<&mut Self, Error> {
        self.order_by(column, OrderType::Desc)
    }

    /// Order by a piece of SQL that is emitted as written.
    pub fn order_by_raw(
        &mut self,
        sql: impl Into<String>,
        order_type: OrderType,
    ) -> Result<&mut Self, Error> {
        let expression = Expression::raw(sql);
        if expression.is_blank() {
            return Err(Error::new(ErrorKind::EmptyExpression));
        }
        self.order_by.add_column(expression, order_type);
        Ok(self)
    }

    pub fn in_random_order(&mut self) -> &mut Self {
        self.order_by.add_random(Expression::random());
        self
    }

    /// Apply ordering written as text, e.g. `name, created_at desc, random()`.
    ///
    /// Either every directive is applied or, on error, none are.
    pub fn apply_ordering(&mut self, text: &str) -> Result<&mut Self, Error> {
        let directives =
            parse(text).map_err(|reason| Error::new(ErrorKind::InvalidOrdering(reason)))?;
        debug!(count = directives.len(), "applying ordering directives");

        let requests = directives
            .into_iter()
            .map(|directive| match directive {
                Directive::Random => None,
                Directive::Sort { target, direction } => {
                    Some((Orderable::from(target), OrderType::from(direction)))
                }
            })
            .collect::<Vec<_>>();
        for (target, _) in requests.iter().flatten() {
            check_orderable(target)?;
        }

        for request in requests {
            match request {
                Some((target, order_type)) => self.order_by.add_column(target, order_type),
                None => self.order_by.add_random(Expression::random()),
            }
        }
        Ok(self)
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn columns(&self) -> &[ColumnRef] {
        &self.columns
    }

    pub fn order_by_clause(&self) -> &OrderByClause {
        &self.order_by
    }

    pub fn to_sql(&self, options: &Options) -> String {
        debug!(
            dialect = options.dialect.name(),
            table = %self.table,
            order_items = self.order_by.columns().len(),
            "rendering query"
        );
        format!("{};", self.render(options))
    }
}

/// Checks a column given through the builder's methods, where a string is split on `.`.
/// Quoted identifiers from ordering text may legitimately contain dots, so only blankness is
/// checked for those (see [`check_orderable`]).
fn check_column(column: &ColumnRef) -> Result<(), Error> {
    if column.is_blank() {
        return Err(Error::new(ErrorKind::EmptyColumnName));
    }
    if column.has_nested_path() {
        return Err(Error::new(ErrorKind::InvalidColumnName(column.to_string())));
    }
    Ok(())
}

fn check_orderable(target: &Orderable) -> Result<(), Error> {
    match target {
        Orderable::Column(column) if column.is_blank() => {
            Err(Error::new(ErrorKind::EmptyColumnName))
        }
        Orderable::Expression(expression) if expression.is_blank() => {
            Err(Error::new(ErrorKind::EmptyExpression))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Clause, Priority};

    #[test]
    fn test_rejects_blank_names() {
        assert_eq!(
            QueryBuilder::new("  ").unwrap_err().kind(),
            &ErrorKind::EmptyTableName
        );

        let mut query = QueryBuilder::new("users").unwrap();
        assert_eq!(
            query.order_by_asc("").unwrap_err().kind(),
            &ErrorKind::EmptyColumnName
        );
        assert_eq!(
            query.order_by_raw(" ", OrderType::Asc).unwrap_err().kind(),
            &ErrorKind::EmptyExpression
        );
        assert_eq!(
            query.select(["id", ""]).unwrap_err().kind(),
            &ErrorKind::EmptyColumnName
        );
        assert!(query.order_by_clause().is_empty());
        assert!(query.columns().is_empty());
    }

    #[test]
    fn test_rejects_three_part_names() {
        let mut query = QueryBuilder::new("users").unwrap();
        assert_eq!(
            query.order_by_asc("public.users.name").unwrap_err().kind(),
            &ErrorKind::InvalidColumnName("public.users.name".to_string())
        );
        assert_eq!(
            query.select(["public.users.id"]).unwrap_err().kind(),
            &ErrorKind::InvalidColumnName("public.users.id".to_string())
        );
        assert!(matches!(
            query.apply_ordering("public.users.name").unwrap_err().kind(),
            ErrorKind::InvalidOrdering(_)
        ));
        assert!(query.order_by_clause().is_empty());

        query.order_by_asc("users.name").unwrap();
        assert_eq!(
            query.to_sql(&Options::default()),
            r#"SELECT * FROM "users" ORDER BY "users"."name" ASC;"#
        );
    }

    #[test]
    fn test_chained_ordering() -> Result<(), Error> {
        let mut query = QueryBuilder::new("users")?;
        query
            .select(["id", "name"])?
            .order_by_asc("name")?
            .in_random_order()
            .order_by_desc("age")?;
        let items = query.order_by_clause().columns();
        assert_eq!(items.len(), 3);
        assert_eq!(items[1].priority(), Priority::Random);
        assert_eq!(items[2].index(), 2);
        assert_eq!(
            query.to_sql(&Options::default()),
            r#"SELECT "id", "name" FROM "users" ORDER BY RANDOM(), "name" ASC, "age" DESC;"#
        );
        Ok(())
    }

    #[test]
    fn test_apply_ordering() -> Result<(), Error> {
        let mut query = QueryBuilder::new("users")?;
        query.order_by_desc("id")?;
        query.apply_ordering("users.name, `length(bio)` desc, rand()")?;
        let items = query.order_by_clause().columns();
        assert_eq!(items.len(), 4);
        assert_eq!(
            items[1].expression(),
            &Orderable::Column(ColumnRef::qualified("users", "name"))
        );
        assert_eq!(items[2].order_type(), Some(OrderType::Desc));
        assert_eq!(items[3].expression(), &Orderable::from(Expression::random()));
        assert_eq!(items[3].index(), 3);
        Ok(())
    }

    #[test]
    fn test_apply_ordering_is_all_or_nothing() {
        let mut query = QueryBuilder::new("users").unwrap();
        let err = query.apply_ordering("name, age sideways").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidOrdering(_)));

        let err = query.apply_ordering(r#"name, """#).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::EmptyColumnName);
        assert!(query.order_by_clause().is_empty());
    }

    #[test]
    fn test_select_all_without_ordering() {
        let query = QueryBuilder::new("users").unwrap();
        assert_eq!(query.to_sql(&Options::default()), r#"SELECT * FROM "users";"#);
    }
}
