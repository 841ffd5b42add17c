mod clause;
mod order_by;
mod order_item;

pub use clause::Clause;
pub use order_by::OrderByClause;
pub use order_item::OrderItem;
