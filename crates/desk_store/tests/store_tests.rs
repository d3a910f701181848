//! Tests for seeding, accessors, and derived queries end to end

use chrono::{DateTime, Utc};
use desk_core::{ConversationMode, MessageSender, OrderItem, OrderStatus, Presence};
use desk_store::{
    ConversationFilter, CustomerRef, DeskStore, OrderDraft, OrderFilter, StoreSeed,
};

const SEED_JSON: &str = r#"{
  "current_user": {
    "id": "0b8f4c70-6f64-4d0e-9bd1-95a7c2f0a001",
    "name": "Maya Chen",
    "email": "maya@desk.example",
    "role": "admin",
    "last_seen": "2026-08-20T09:00:00Z"
  },
  "team": [
    {
      "id": "0b8f4c70-6f64-4d0e-9bd1-95a7c2f0a002",
      "name": "Sarah Kim",
      "email": "sarah@desk.example",
      "role": "operator",
      "presence": "online",
      "last_seen": "2026-08-20T08:45:00Z",
      "invited_at": "2026-06-01T12:00:00Z"
    }
  ],
  "conversations": [
    {
      "id": "0b8f4c70-6f64-4d0e-9bd1-95a7c2f0a003",
      "customer_name": "Lena Park",
      "customer_phone": "+1 555 0101",
      "last_message": "Where is my order?",
      "last_message_at": "2026-08-20T08:58:00Z"
    }
  ],
  "orders": [
    {
      "id": "0b8f4c70-6f64-4d0e-9bd1-95a7c2f0a004",
      "customer_name": "Lena Park",
      "customer_phone": "+1 555 0101",
      "items": [{ "name": "Americano", "quantity": 2, "unit_price": 450 }],
      "total": 900,
      "payment_status": "paid",
      "created_at": "2026-08-20T08:30:00Z"
    }
  ],
  "notifications": [
    {
      "id": "0b8f4c70-6f64-4d0e-9bd1-95a7c2f0a005",
      "kind": "order",
      "title": "New order",
      "body": "Order #1042 placed",
      "created_at": "2026-08-20T08:30:00Z"
    }
  ]
}"#;

fn store_from_json() -> DeskStore {
    let seed: StoreSeed = serde_json::from_str(SEED_JSON).unwrap();
    DeskStore::new(seed)
}

#[test]
fn test_json_seed_exposes_entities() {
    let store = store_from_json();

    assert_eq!(store.current_user().name, "Maya Chen");
    assert_eq!(store.team().len(), 1);
    assert_eq!(store.team()[0].user.presence, Presence::Online);
    assert_eq!(store.conversations().len(), 1);
    assert_eq!(store.orders().len(), 1);
    assert_eq!(store.customers().len(), 0);
    assert_eq!(store.notifications().len(), 1);
}

#[test]
fn test_json_seed_fills_defaults() {
    let store = store_from_json();

    let conversation = &store.conversations()[0];
    assert_eq!(conversation.mode, ConversationMode::Ai);
    assert!(conversation.assigned_agent.is_none());
    assert!(conversation.messages.is_empty());
    assert_eq!(conversation.unread_count, 0);

    let order = &store.orders()[0];
    assert_eq!(order.status, OrderStatus::New);
    assert_eq!(order.payment_method, "");

    assert!(!store.notifications()[0].read);
}

#[test]
fn test_deserialized_store_accepts_mutations() {
    let mut store = store_from_json();
    let conversation_id = store.conversations()[0].id;
    let agent_id = store.team()[0].id();

    store
        .update_conversation_mode(conversation_id, ConversationMode::Human, Some(agent_id))
        .unwrap();
    store
        .add_message(conversation_id, "I am on it.", MessageSender::Human)
        .unwrap();

    let conversation = store.conversation(conversation_id).unwrap();
    assert_eq!(conversation.mode, ConversationMode::Human);
    assert_eq!(store.assigned_agent_name(conversation), Some("Sarah Kim"));
    assert_eq!(conversation.last_message, "I am on it.");
}

#[test]
fn test_dashboard_over_seeded_data() {
    let mut store = store_from_json();

    // A fresh order created now must not leak into a past day's figures.
    store
        .create_order(OrderDraft::new(
            CustomerRef::New {
                name: "Omar Haddad".to_string(),
                phone: "+1 555 0102".to_string(),
            },
            vec![OrderItem::new("Espresso", 1, 400)],
        ))
        .unwrap();

    let seeded_day: DateTime<Utc> = "2026-08-20T12:00:00Z".parse().unwrap();
    let snapshot = store.dashboard(seeded_day);

    assert_eq!(snapshot.orders_today, 1);
    assert_eq!(snapshot.open_conversations, 1);
    assert_eq!(snapshot.revenue, 900);
    assert_eq!(snapshot.low_stock_products, 0);
}

#[test]
fn test_filters_over_seeded_data() {
    let store = store_from_json();

    let by_name = ConversationFilter {
        query: "lena".to_string(),
        ..Default::default()
    };
    assert_eq!(store.filter_conversations(&by_name).len(), 1);

    let by_preview = ConversationFilter {
        query: "where is my".to_string(),
        ..Default::default()
    };
    assert_eq!(store.filter_conversations(&by_preview).len(), 1);

    let no_hit = ConversationFilter {
        query: "refund".to_string(),
        ..Default::default()
    };
    assert!(store.filter_conversations(&no_hit).is_empty());

    let new_orders = OrderFilter {
        status: Some(OrderStatus::New),
        ..Default::default()
    };
    assert_eq!(store.filter_orders(&new_orders).len(), 1);
}

#[test]
fn test_notification_flow() {
    let mut store = store_from_json();
    assert_eq!(store.unread_notification_count(), 1);

    let id = store.notifications()[0].id;
    store.mark_notification_read(id).unwrap();
    assert_eq!(store.unread_notification_count(), 0);

    // Bulk marking with nothing unread reports zero.
    assert_eq!(store.mark_all_notifications_read(), 0);
}

#[test]
fn test_order_status_counts_follow_mutations() {
    let mut store = store_from_json();
    let order_id = store.orders()[0].id;

    store.advance_order(order_id).unwrap();

    let counts = store.order_status_counts();
    assert_eq!(counts.get(&OrderStatus::Confirmed), Some(&1));
    assert_eq!(counts.get(&OrderStatus::New), None);
}
