use tracing::trace;

use crate::{
    expression::{Expression, Orderable},
    types::{OrderType, Priority},
};

use super::{Clause, OrderItem};

/// Accumulates ORDER BY directives in the order they are requested.
///
/// Every item receives the next value of an internal counter as its index, so items can always
/// be put back into request order within a priority class. The clause itself never sorts:
/// [`columns`](Self::columns) hands back items exactly as they were added, and the renderer
/// decides the emission order (see [`emission_order`](crate::emission_order)).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderByClause {
    items: Vec<OrderItem>,
    counter: usize,
}

impl OrderByClause {
    pub fn new() -> Self {
        Self::default()
    }

    /// Order by a column or expression in the given direction.
    pub fn add_column(&mut self, expression: impl Into<Orderable>, order_type: OrderType) {
        let index = self.next_index();
        self.push(OrderItem::new(
            expression,
            Some(order_type),
            Priority::Normal,
            index,
        ));
    }

    /// Order by a random expression. It takes precedence over column orderings when rendered.
    pub fn add_random(&mut self, expression: Expression) {
        let index = self.next_index();
        self.push(OrderItem::new(expression, None, Priority::Random, index));
    }

    /// All items added so far, in insertion order.
    pub fn columns(&self) -> &[OrderItem] {
        &self.items
    }

    fn next_index(&mut self) -> usize {
        let index = self.counter;
        self.counter += 1;
        index
    }

    fn push(&mut self, item: OrderItem) {
        trace!(index = item.index(), priority = ?item.priority(), "order item added");
        self.items.push(item);
    }
}

impl Clause for OrderByClause {
    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
