use serde::{Deserialize, Serialize};

use crate::{
    expression::Orderable,
    types::{OrderType, Priority},
};

/// One ordering directive, fixed at the moment it was added to a clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    expression: Orderable,
    /// Absent for random ordering, where a direction means nothing
    order_type: Option<OrderType>,
    priority: Priority,
    /// Position among the items of the owning clause. Breaks ties between items of the same
    /// priority.
    index: usize,
}

impl OrderItem {
    pub fn new(
        expression: impl Into<Orderable>,
        order_type: Option<OrderType>,
        priority: Priority,
        index: usize,
    ) -> Self {
        Self {
            expression: expression.into(),
            order_type,
            priority,
            index,
        }
    }

    pub fn expression(&self) -> &Orderable {
        &self.expression
    }

    pub fn order_type(&self) -> Option<OrderType> {
        self.order_type
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColumnRef, Expression};

    #[test]
    fn test_accessors() {
        let item = OrderItem::new("users.name", Some(OrderType::Desc), Priority::Normal, 3);
        assert_eq!(
            item.expression(),
            &Orderable::Column(ColumnRef::qualified("users", "name"))
        );
        assert_eq!(item.order_type(), Some(OrderType::Desc));
        assert_eq!(item.priority(), Priority::Normal);
        assert_eq!(item.index(), 3);
    }

    #[test]
    fn test_no_validation() {
        let item = OrderItem::new(Expression::raw(""), None, Priority::Random, 0);
        assert_eq!(item.expression(), &Orderable::Expression(Expression::raw("")));
        assert_eq!(item.order_type(), None);
    }

    #[test]
    fn test_serialize() {
        let item = OrderItem::new(Expression::random(), None, Priority::Random, 1);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "expression": { "expression": { "kind": "random" } },
                "order_type": null,
                "priority": "random",
                "index": 1,
            })
        );
    }
}
