//! # Order Repository
//!
//! In-memory order listing and fulfillment status changes.
//!
//! ## Status Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Status Flow                                    │
//! │                                                                         │
//! │  ┌─────────┐    ┌────────────┐    ┌─────────┐    ┌───────────┐         │
//! │  │ Pending │───►│ Processing │───►│ Shipped │───►│ Delivered │ (final) │
//! │  └────┬────┘    └─────┬──────┘    └────┬────┘    └───────────┘         │
//! │       │               │                │                                │
//! │       └───────────────┴────────────────┴──────► Cancelled (final)      │
//! │                                                                         │
//! │  The back-office dropdown may jump between non-terminal statuses       │
//! │  freely; Delivered and Cancelled are frozen.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};
use nova_core::{CoreError, Order, OrderStatus};

/// First order number issued by a fresh repository ("NV-1001").
const FIRST_ORDER_NUMBER: u32 = 1001;

/// Repository for order data.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    orders: Vec<Order>,
    next_number: u32,
}

impl OrderRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        OrderRepository {
            orders: Vec::new(),
            next_number: FIRST_ORDER_NUMBER,
        }
    }

    /// Creates a repository over pre-seeded orders, continuing the order
    /// number sequence after the highest seeded one.
    pub fn with_orders(orders: Vec<Order>) -> Self {
        let next_number = orders
            .iter()
            .filter_map(|o| o.order_number.strip_prefix("NV-"))
            .filter_map(|n| n.parse::<u32>().ok())
            .max()
            .map_or(FIRST_ORDER_NUMBER, |max| max + 1);

        OrderRepository {
            orders,
            next_number,
        }
    }

    /// Issues the next order number ("NV-1042").
    pub fn next_order_number(&mut self) -> String {
        let number = format!("NV-{}", self.next_number);
        self.next_number += 1;
        number
    }

    /// Lists all orders, most recent first (the back-office table order).
    pub fn list(&self) -> Vec<Order> {
        let mut orders = self.orders.clone();
        orders.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
        orders
    }

    /// Lists orders in a given status, most recent first.
    pub fn list_by_status(&self, status: OrderStatus) -> Vec<Order> {
        let mut orders: Vec<Order> = self
            .orders
            .iter()
            .filter(|o| o.status == status)
            .cloned()
            .collect();
        orders.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
        orders
    }

    /// Gets an order by its ID.
    pub fn get_by_id(&self, id: &str) -> Option<Order> {
        self.orders.iter().find(|o| o.id == id).cloned()
    }

    /// Inserts an order (checkout or seed). Order numbers come from
    /// [`Self::next_order_number`], so collisions cannot arise here.
    pub fn insert(&mut self, order: Order) -> Order {
        debug!(order_number = %order.order_number, "Inserting order");
        self.orders.push(order.clone());
        order
    }

    /// Moves an order to a new fulfillment status.
    ///
    /// ## Behavior
    /// - Same status: no-op, returns the order unchanged
    /// - Terminal order (Delivered/Cancelled): `CoreError::OrderClosed`
    /// - Otherwise: status set, `updated_at` bumped
    pub fn update_status(&mut self, id: &str, next: OrderStatus) -> CatalogResult<Order> {
        debug!(id = %id, next = %next.label(), "Updating order status");

        let order = self
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| CatalogError::not_found("Order", id))?;

        if order.status == next {
            return Ok(order.clone());
        }

        if order.status.is_terminal() {
            return Err(CoreError::OrderClosed {
                order_number: order.order_number.clone(),
                status: order.status,
            }
            .into());
        }

        order.status = next;
        order.updated_at = Utc::now();
        Ok(order.clone())
    }

    /// Counts all orders.
    pub fn count(&self) -> usize {
        self.orders.len()
    }
}

impl Default for OrderRepository {
    fn default() -> Self {
        OrderRepository::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn test_order(number: &str, status: OrderStatus, days_ago: i64) -> Order {
        let placed = Utc::now() - Duration::days(days_ago);
        Order {
            id: format!("o-{}", number),
            order_number: number.to_string(),
            customer_id: "u-1".to_string(),
            customer_name: "Dana Fox".to_string(),
            status,
            items: Vec::new(),
            subtotal_cents: 10_000,
            shipping_cents: 999,
            total_cents: 10_999,
            placed_at: placed,
            updated_at: placed,
        }
    }

    fn seeded() -> OrderRepository {
        OrderRepository::with_orders(vec![
            test_order("NV-1001", OrderStatus::Delivered, 10),
            test_order("NV-1002", OrderStatus::Shipped, 5),
            test_order("NV-1003", OrderStatus::Pending, 1),
        ])
    }

    #[test]
    fn test_list_is_most_recent_first() {
        let repo = seeded();
        let numbers: Vec<String> = repo.list().into_iter().map(|o| o.order_number).collect();
        assert_eq!(numbers, vec!["NV-1003", "NV-1002", "NV-1001"]);
    }

    #[test]
    fn test_list_by_status() {
        let repo = seeded();
        assert_eq!(repo.list_by_status(OrderStatus::Shipped).len(), 1);
        assert_eq!(repo.list_by_status(OrderStatus::Cancelled).len(), 0);
    }

    #[test]
    fn test_order_number_sequence_continues_after_seed() {
        let mut repo = seeded();
        assert_eq!(repo.next_order_number(), "NV-1004");
        assert_eq!(repo.next_order_number(), "NV-1005");

        let mut fresh = OrderRepository::new();
        assert_eq!(fresh.next_order_number(), "NV-1001");
    }

    #[test]
    fn test_update_status_moves_forward() {
        let mut repo = seeded();
        let updated = repo
            .update_status("o-NV-1003", OrderStatus::Processing)
            .unwrap();
        assert_eq!(updated.status, OrderStatus::Processing);
        assert!(updated.updated_at > updated.placed_at);
    }

    #[test]
    fn test_update_status_same_status_is_noop() {
        let mut repo = seeded();
        let before = repo.get_by_id("o-NV-1003").unwrap();
        let after = repo
            .update_status("o-NV-1003", OrderStatus::Pending)
            .unwrap();
        assert_eq!(after.updated_at, before.updated_at);
    }

    #[test]
    fn test_update_status_rejects_terminal_orders() {
        let mut repo = seeded();
        let err = repo
            .update_status("o-NV-1001", OrderStatus::Pending)
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Core(CoreError::OrderClosed { .. })
        ));
    }

    #[test]
    fn test_update_status_unknown_id() {
        let mut repo = seeded();
        let err = repo
            .update_status("o-missing", OrderStatus::Shipped)
            .unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { .. }));
    }
}
