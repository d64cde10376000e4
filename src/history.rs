//! Order History - LIFO log of completed orders.

use rust_decimal::Decimal;

use crate::order::Order;

/// Stack of completed orders; the most recent completion is on top.
#[derive(Clone, Debug, Default)]
pub struct OrderHistoryLog {
    entries: Vec<Order>,
}

impl OrderHistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a completed order on top.
    ///
    /// # Complexity
    /// O(1) amortized
    #[inline]
    pub fn push(&mut self, order: Order) -> &Order {
        let top = self.entries.len();
        self.entries.push(order);
        &self.entries[top]
    }

    /// Most recently completed order
    #[inline]
    pub fn top(&self) -> Option<&Order> {
        self.entries.last()
    }

    /// Completed orders, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Order> + '_ {
        self.entries.iter().rev()
    }

    /// Sum of every completed order's total
    pub fn total_revenue(&self) -> Decimal {
        self.entries.iter().map(|order| order.total).sum()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
