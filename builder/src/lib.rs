mod clauses;
mod constants;
mod errors;
mod expression;
mod options;
mod query;
mod rendering;
mod sql;
mod types;
mod utils;


pub use clauses::{Clause, OrderByClause, OrderItem};
pub use errors::{Error, ErrorKind};
pub use expression::{ColumnRef, Expression, Orderable};
pub use options::{Layout, Options};
pub use query::QueryBuilder;
pub use rendering::{emission_order, Render};
pub use sql::{dialect_names, find_dialect, Dialect, MySql, Postgres, Sqlite};
pub use types::{OrderType, Priority};
