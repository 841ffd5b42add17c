mod dialect;
mod mysql;
mod postgres;
mod sqlite;

pub use dialect::*;
pub use mysql::*;
pub use postgres::*;
pub use sqlite::*;
