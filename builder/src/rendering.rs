use std::cmp::Reverse;

use itertools::Itertools;

use crate::{
    clauses::{Clause, OrderByClause, OrderItem},
    constants::{ALL_COLUMNS, INDENT_SPACER, LIST_SEPARATOR},
    expression::{ColumnRef, Expression, Orderable},
    options::{Layout, Options},
    query::QueryBuilder,
};

pub trait Render {
    fn render(&self, options: &Options) -> String;
}

/// The order in which items are written into SQL: higher priority first, then request order.
///
/// The sort is stable and keyed on the index as well, so the result does not depend on the
/// order of `items` beyond what the indices already say.
pub fn emission_order(items: &[OrderItem]) -> Vec<&OrderItem> {
    items
        .iter()
        .sorted_by_key(|item| (Reverse(item.priority()), item.index()))
        .collect()
}

impl Render for ColumnRef {
    fn render(&self, options: &Options) -> String {
        match &self.table {
            Some(table) => options.dialect.table_column(table, &self.name),
            None => options.dialect.quote_identifier(&self.name),
        }
    }
}

impl Render for Expression {
    fn render(&self, options: &Options) -> String {
        match self {
            Expression::Raw(sql) => sql.clone(),
            Expression::Random => options.dialect.random_function().to_string(),
        }
    }
}

impl Render for Orderable {
    fn render(&self, options: &Options) -> String {
        match self {
            Orderable::Column(column) => column.render(options),
            Orderable::Expression(expression) => expression.render(options),
        }
    }
}

impl Render for OrderItem {
    fn render(&self, options: &Options) -> String {
        let expression = self.expression().render(options);
        match self.order_type() {
            Some(order_type) => format!("{expression} {order_type}"),
            None => expression,
        }
    }
}

impl Render for OrderByClause {
    fn render(&self, options: &Options) -> String {
        if self.is_empty() {
            return String::new();
        }
        let items = emission_order(self.columns())
            .into_iter()
            .map(|item| item.render(options))
            .collect_vec();
        match options.layout {
            Layout::Inline => format!("ORDER BY {}", items.join(LIST_SEPARATOR)),
            Layout::Indented => format!("ORDER BY\n{}", indent(items.join(",\n"))),
        }
    }
}

impl Render for QueryBuilder {
    fn render(&self, options: &Options) -> String {
        let columns = if self.columns().is_empty() {
            vec![ALL_COLUMNS.to_string()]
        } else {
            self.columns().iter().map(|c| c.render(options)).collect()
        };
        let table = options.dialect.quote_identifier(self.table());
        let order = self.order_by_clause().render(options);
        let parts = match options.layout {
            Layout::Inline => [
                format!("SELECT {}", columns.join(LIST_SEPARATOR)),
                format!("FROM {table}"),
                order,
            ],
            Layout::Indented => [
                format!("SELECT\n{}", indent(columns.join(",\n"))),
                format!("FROM {table}"),
                order,
            ],
        };
        let separator = match options.layout {
            Layout::Inline => " ",
            Layout::Indented => "\n",
        };
        parts.into_iter().filter(|s| !s.is_empty()).join(separator)
    }
}

fn indent(s: String) -> String {
    s.lines()
        .map(|line| format!("{}{}", INDENT_SPACER, line))
        .join("\n")
}
