//! Order mutators - pipeline moves and the checkout builder

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use desk_core::{Order, OrderItem, OrderStatus, PaymentStatus};
use desk_state::{OrderPipeline, PipelineTransition};

use crate::error::{Result, StoreError};
use crate::store::DeskStore;

/// Customer reference on a draft: an existing directory entry or
/// details typed in at checkout.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "snake_case")]
pub enum CustomerRef {
    Existing(Uuid),
    New { name: String, phone: String },
}

/// Everything checkout collects before an order exists.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OrderDraft {
    pub customer: CustomerRef,
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub payment_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Conversation the order was taken in, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<Uuid>,
}

impl OrderDraft {
    pub fn new(customer: CustomerRef, items: Vec<OrderItem>) -> Self {
        Self {
            customer,
            items,
            payment_method: String::new(),
            notes: None,
            conversation_id: None,
        }
    }
}

impl DeskStore {
    /// Move an order to an explicitly named status.
    ///
    /// The pipeline rules apply: the target must be the next forward
    /// status or a cancellation from a non-terminal one. The order is
    /// untouched on error.
    pub fn update_order_status(
        &mut self,
        id: Uuid,
        status: OrderStatus,
    ) -> Result<PipelineTransition> {
        let order = self.order_mut(id).ok_or(StoreError::OrderNotFound(id))?;

        let from = order.status;
        OrderPipeline::validate(from, status)?;
        order.status = status;

        let transition = PipelineTransition { from, to: status };
        tracing::info!(
            order_id = %id,
            from = transition.from.as_str(),
            to = transition.to.as_str(),
            "DeskStore: Order status updated"
        );

        Ok(transition)
    }

    /// Advance an order one step along the fulfillment pipeline.
    pub fn advance_order(&mut self, id: Uuid) -> Result<PipelineTransition> {
        let order = self.order_mut(id).ok_or(StoreError::OrderNotFound(id))?;

        let transition = OrderPipeline::advance(order.status)?;
        order.status = transition.to;

        tracing::info!(
            order_id = %id,
            from = transition.from.as_str(),
            to = transition.to.as_str(),
            "DeskStore: Order advanced"
        );

        Ok(transition)
    }

    /// Cancel an order. Only non-terminal orders can be canceled;
    /// completed ones stay completed.
    pub fn cancel_order(&mut self, id: Uuid) -> Result<PipelineTransition> {
        let order = self.order_mut(id).ok_or(StoreError::OrderNotFound(id))?;

        let transition = OrderPipeline::cancel(order.status)?;
        order.status = transition.to;

        tracing::info!(
            order_id = %id,
            from = transition.from.as_str(),
            "DeskStore: Order canceled"
        );

        Ok(transition)
    }

    /// Build and insert an order from a checkout draft.
    ///
    /// Validates the draft first; nothing is inserted on failure. The
    /// total is derived from the items, never taken from the caller,
    /// and the order starts at the head of the pipeline with payment
    /// pending.
    pub fn create_order(&mut self, draft: OrderDraft) -> Result<Uuid> {
        if draft.items.is_empty() {
            return Err(StoreError::EmptyCart);
        }
        for item in &draft.items {
            if item.quantity == 0 {
                return Err(StoreError::InvalidQuantity {
                    item: item.name.clone(),
                });
            }
        }

        let (customer_name, customer_phone) = match &draft.customer {
            CustomerRef::Existing(customer_id) => {
                let customer = self
                    .customer(*customer_id)
                    .ok_or(StoreError::CustomerNotFound(*customer_id))?;
                (customer.name.clone(), customer.phone.clone())
            }
            CustomerRef::New { name, phone } => {
                if name.trim().is_empty() || phone.trim().is_empty() {
                    return Err(StoreError::CustomerDetailsRequired);
                }
                (name.clone(), phone.clone())
            }
        };

        let total = draft.items.iter().map(OrderItem::subtotal).sum();
        let order = Order {
            id: Uuid::new_v4(),
            customer_name,
            customer_phone,
            items: draft.items,
            total,
            status: OrderStatus::New,
            payment_status: PaymentStatus::Pending,
            payment_method: draft.payment_method,
            notes: draft.notes,
            conversation_id: draft.conversation_id,
            created_at: Utc::now(),
        };
        let order_id = order.id;

        tracing::info!(
            order_id = %order_id,
            customer = %order.customer_name,
            items = order.items.len(),
            total = order.total,
            "DeskStore: Order created"
        );

        self.orders.push(order);
        Ok(order_id)
    }

    /// Insert a pre-built order, re-checking the construction
    /// invariants the builder would have enforced.
    pub fn add_order(&mut self, order: Order) -> Result<Uuid> {
        if self.order(order.id).is_some() {
            return Err(StoreError::DuplicateOrder(order.id));
        }
        if order.items.is_empty() {
            return Err(StoreError::EmptyCart);
        }
        for item in &order.items {
            if item.quantity == 0 {
                return Err(StoreError::InvalidQuantity {
                    item: item.name.clone(),
                });
            }
        }

        let expected = order.derived_total();
        if order.total != expected {
            return Err(StoreError::TotalMismatch {
                expected,
                actual: order.total,
            });
        }

        let order_id = order.id;
        tracing::info!(
            order_id = %order_id,
            status = order.status.as_str(),
            total = order.total,
            "DeskStore: Order inserted"
        );

        self.orders.push(order);
        Ok(order_id)
    }
}
