use actor_framework::ActorClient;
use async_trait::async_trait;
use std::sync::Arc;
use tableside::analytics::DashboardSummary;
use tableside::cart_actor::{CartError, MemoryStore, SnapshotStore, StorageError};
use tableside::config::AppConfig;
use tableside::lifecycle::OrderSystem;
use tableside::model::{
    CartItem, CartSnapshot, CustomerId, Money, OrderCreate, OrderId, OrderLine, OrderStatus,
    PaymentStatus, OrderUpdate, RestaurantId,
};
use tableside::order_actor::{CheckoutRequest, OrderError};

fn menu() -> [CartItem; 3] {
    [
        CartItem::new("biryani", "Chicken biryani", Money(25000)).with_category("mains"),
        CartItem::new("naan", "Garlic naan", Money(4000)).with_category("breads"),
        CartItem::new("lassi", "Mango lassi", Money(18000)),
    ]
}

fn checkout_request(customer: Option<CustomerId>) -> CheckoutRequest {
    CheckoutRequest {
        restaurant: RestaurantId::from("spice-route"),
        table: "T4".into(),
        customer,
        customer_name: Some("Asha".into()),
    }
}

/// Every slot operation fails.
struct BrokenStore;

#[async_trait]
impl SnapshotStore for BrokenStore {
    async fn load(&self, key: &str) -> Result<Option<CartSnapshot>, StorageError> {
        Err(StorageError::Io {
            key: key.to_string(),
            source: std::io::Error::other("quota exceeded"),
        })
    }

    async fn save(&self, key: &str, _snapshot: &CartSnapshot) -> Result<(), StorageError> {
        Err(StorageError::Io {
            key: key.to_string(),
            source: std::io::Error::other("quota exceeded"),
        })
    }
}

/// Integration test: cart → checkout → kitchen → loyalty, all real actors.
#[tokio::test]
async fn test_cart_to_completed_order_flow() {
    let store = Arc::new(MemoryStore::new());
    let system = OrderSystem::with_store(&AppConfig::default(), store.clone());
    let restaurant = RestaurantId::from("spice-route");
    let mut kitchen = system.feed.subscribe_restaurant(&restaurant);

    let customer = system.loyalty_client.enroll("Asha").await.unwrap();

    // Fill the cart: biryani, naan twice, lassi
    let (cart_id, opened) = system.cart_client.open("table-4").await.unwrap();
    assert!(opened.is_empty());
    let [biryani, naan, lassi] = menu();
    system.cart_client.add_item(cart_id, biryani).await.unwrap();
    system.cart_client.add_item(cart_id, naan.clone()).await.unwrap();
    system.cart_client.add_item(cart_id, naan).await.unwrap();
    let view = system.cart_client.add_item(cart_id, lassi).await.unwrap();

    assert_eq!(view.items.len(), 3);
    assert_eq!(view.summary.item_count, 4);
    assert_eq!(view.summary.subtotal, Money(51000));
    assert_eq!(view.summary.tax, Money(4080));
    assert_eq!(view.summary.total, Money(55080));
    assert!(store.raw("cart:table-4").is_some());

    // Checkout snapshots the cart and empties it
    let receipt = system
        .order_client
        .checkout(&system.cart_client, cart_id, checkout_request(Some(customer)))
        .await
        .unwrap();
    let order_id = receipt.order_id;
    assert!(receipt.cart.unwrap().is_empty());
    assert!(system.cart_client.view(cart_id).await.unwrap().is_empty());

    let placed = kitchen.recv().await.unwrap();
    assert_eq!(placed.order_id, order_id);
    assert_eq!(placed.from, None);
    assert_eq!(placed.to, OrderStatus::Pending);

    let mut tracker = system.feed.subscribe_order(order_id);

    // Kitchen walks the order through
    for status in [OrderStatus::Preparing, OrderStatus::Ready] {
        let outcome = system.order_client.transition(order_id, status).await.unwrap();
        assert_eq!(outcome.to, status);
        assert!(outcome.reward.is_none());
    }
    let done = system
        .order_client
        .transition(order_id, OrderStatus::Completed)
        .await
        .unwrap();
    assert_eq!(done.display.icon, "check-circle");
    let reward = done.reward.expect("completion credits loyalty");
    assert_eq!(reward.cashback, Money(2550));
    assert!(done.notice.is_none());

    // Both rooms saw the changes, in order
    for expected in [OrderStatus::Preparing, OrderStatus::Ready, OrderStatus::Completed] {
        assert_eq!(kitchen.recv().await.unwrap().to, expected);
        assert_eq!(tracker.recv().await.unwrap().to, expected);
    }

    let order = system.order_client.get(order_id).await.unwrap().unwrap();
    assert_eq!(order.amount, Money(51000));
    assert_eq!(order.history.len(), 3);
    assert_eq!(order.items.iter().find(|l| l.id.0 == "lassi").unwrap().category, "uncategorized");
    assert_eq!(system.loyalty_client.balance(customer).await.unwrap(), Money(2550));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_reopened_session_restores_saved_cart() {
    let store = Arc::new(MemoryStore::new());
    let system = OrderSystem::with_store(&AppConfig::default(), store);

    let (first, _) = system.cart_client.open("booth-2").await.unwrap();
    let [biryani, naan, _] = menu();
    system.cart_client.add_item(first, biryani).await.unwrap();
    system.cart_client.add_item(first, naan).await.unwrap();
    system
        .cart_client
        .update_quantity(first, "naan".into(), 3)
        .await
        .unwrap();

    let (second, restored) = system.cart_client.open("booth-2").await.unwrap();
    assert_ne!(first, second);
    assert_eq!(restored.summary.subtotal, Money(25000 + 3 * 4000));
    assert_eq!(restored.summary.item_count, 4);
    assert!(restored.notice.is_none());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_corrupt_snapshot_is_reported_not_fatal() {
    let store = Arc::new(MemoryStore::new());
    store.put_raw("cart:booth-3", "{\"items\": 42");
    let system = OrderSystem::with_store(&AppConfig::default(), store);

    let (cart_id, view) = system.cart_client.open("booth-3").await.unwrap();
    assert!(view.is_empty());
    assert!(view.notice.is_some());

    // The notice is shown once, and the cart works normally
    let [biryani, ..] = menu();
    let view = system.cart_client.add_item(cart_id, biryani).await.unwrap();
    assert!(view.notice.is_none());
    assert_eq!(view.summary.subtotal, Money(25000));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_storage_failures_never_block_the_cart() {
    let system = OrderSystem::with_store(&AppConfig::default(), Arc::new(BrokenStore));

    let (cart_id, opened) = system.cart_client.open("table-1").await.unwrap();
    assert_eq!(opened.notice.as_deref(), Some("Your saved cart could not be loaded"));

    let [biryani, ..] = menu();
    let view = system.cart_client.add_item(cart_id, biryani).await.unwrap();
    assert!(view.changed);
    assert_eq!(view.summary.subtotal, Money(25000));
    assert_eq!(view.notice.as_deref(), Some("Your cart could not be saved on this device"));

    // A read-only view does not retry the write
    assert!(system.cart_client.view(cart_id).await.unwrap().notice.is_none());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_oversized_snapshot_is_repaired_and_other_carts_keep_working() {
    let store = Arc::new(MemoryStore::new());
    store.put_raw(
        "cart:booth-9",
        r#"{"items":[{"id":"a","name":"A","price":18446744073709551615,"quantity":2}],"total":0}"#,
    );
    let system = OrderSystem::with_store(&AppConfig::default(), store);

    let (_, view) = system.cart_client.open("booth-9").await.unwrap();
    assert!(view.is_empty());
    assert_eq!(view.summary.subtotal, Money::ZERO);
    assert_eq!(
        view.notice.as_deref(),
        Some("Some items in your saved cart could not be restored")
    );

    let (other, _) = system.cart_client.open("booth-10").await.unwrap();
    let [biryani, ..] = menu();
    let view = system.cart_client.add_item(other, biryani).await.unwrap();
    assert_eq!(view.summary.subtotal, Money(25000));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_oversized_add_is_rejected_and_actor_survives() {
    let system = OrderSystem::with_store(&AppConfig::default(), Arc::new(MemoryStore::new()));
    let (cart_id, _) = system.cart_client.open("table-7").await.unwrap();
    let gold = CartItem::new("gold", "Gold leaf platter", Money(u64::MAX / 2 + 1));

    system.cart_client.add_item(cart_id, gold.clone()).await.unwrap();
    let err = system.cart_client.add_item(cart_id, gold).await.unwrap_err();
    assert_eq!(err, CartError::AmountTooLarge { id: "gold".into() });

    let view = system.cart_client.view(cart_id).await.unwrap();
    assert_eq!(view.items[0].quantity, 1);
    assert_eq!(view.summary.subtotal, Money(u64::MAX / 2 + 1));

    system.shutdown().await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_item_added_during_checkout_is_never_lost() {
    let system = OrderSystem::with_store(&AppConfig::default(), Arc::new(MemoryStore::new()));
    let [biryani, naan, _] = menu();

    for round in 0..100 {
        let (cart_id, _) = system
            .cart_client
            .open(&format!("race-{round}"))
            .await
            .unwrap();
        system.cart_client.add_item(cart_id, biryani.clone()).await.unwrap();

        let carts = system.cart_client.clone();
        let late = naan.clone();
        let adder = tokio::spawn(async move { carts.add_item(cart_id, late).await });
        let receipt = system
            .order_client
            .checkout(&system.cart_client, cart_id, checkout_request(None))
            .await
            .unwrap();
        adder.await.unwrap().unwrap();

        let order = system.order_client.get(receipt.order_id).await.unwrap().unwrap();
        let cart = system.cart_client.view(cart_id).await.unwrap();
        let ordered = order.items.iter().filter(|l| l.id.0 == "naan").count();
        let left = cart.items.iter().filter(|l| l.id.0 == "naan").count();
        assert_eq!(ordered + left, 1, "naan lost or duplicated in round {round}");
        assert!(cart.items.iter().all(|l| l.id.0 != "biryani"));
    }

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_checkout_reports_cart_storage_notice() {
    let system = OrderSystem::with_store(&AppConfig::default(), Arc::new(BrokenStore));
    let (cart_id, _) = system.cart_client.open("table-8").await.unwrap();
    let [biryani, ..] = menu();
    system.cart_client.add_item(cart_id, biryani).await.unwrap();

    let receipt = system
        .order_client
        .checkout(&system.cart_client, cart_id, checkout_request(None))
        .await
        .unwrap();

    let cart = receipt.cart.unwrap();
    assert!(cart.is_empty());
    assert_eq!(cart.notice.as_deref(), Some("Your cart could not be saved on this device"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_invalid_quantity_leaves_cart_untouched() {
    let system = OrderSystem::with_store(&AppConfig::default(), Arc::new(MemoryStore::new()));
    let (cart_id, _) = system.cart_client.open("table-2").await.unwrap();
    let [biryani, ..] = menu();
    system.cart_client.add_item(cart_id, biryani).await.unwrap();

    let err = system
        .cart_client
        .update_quantity(cart_id, "biryani".into(), 0)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        CartError::InvalidQuantity {
            id: "biryani".into(),
            quantity: 0
        }
    );
    assert_eq!(err.to_string(), "Quantity for biryani must be at least 1 (got 0)");

    let view = system.cart_client.view(cart_id).await.unwrap();
    assert_eq!(view.items[0].quantity, 1);
    assert_eq!(view.summary.subtotal, Money(25000));

    // Removing an unknown item changes nothing
    let view = system
        .cart_client
        .remove_item(cart_id, "zzz".into())
        .await
        .unwrap();
    assert!(!view.changed);
    assert_eq!(view.summary.subtotal, Money(25000));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_checkout_of_empty_cart_creates_nothing() {
    let system = OrderSystem::with_store(&AppConfig::default(), Arc::new(MemoryStore::new()));
    let (cart_id, _) = system.cart_client.open("table-5").await.unwrap();

    let err = system
        .order_client
        .checkout(&system.cart_client, cart_id, checkout_request(None))
        .await
        .unwrap_err();

    assert_eq!(err, OrderError::Validation("cart is empty".into()));
    assert!(system.order_client.list().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_customer_rejects_order_and_keeps_cart() {
    let system = OrderSystem::with_store(&AppConfig::default(), Arc::new(MemoryStore::new()));
    let (cart_id, _) = system.cart_client.open("table-6").await.unwrap();
    let [biryani, ..] = menu();
    system.cart_client.add_item(cart_id, biryani).await.unwrap();

    let err = system
        .order_client
        .checkout(&system.cart_client, cart_id, checkout_request(Some(CustomerId(99))))
        .await
        .unwrap_err();

    assert!(matches!(err, OrderError::Validation(msg) if msg.contains("customer_99")));
    assert!(!system.cart_client.view(cart_id).await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_restaurant_listing_dashboard_and_no_deletes() {
    let system = OrderSystem::with_store(&AppConfig::default(), Arc::new(MemoryStore::new()));
    let line = |id: &str, cents: u64, quantity: u32| OrderLine {
        id: id.into(),
        name: id.to_string(),
        price: Money(cents),
        quantity,
        image: String::new(),
        category: "mains".into(),
    };
    let place = |restaurant: &str, lines: Vec<OrderLine>| OrderCreate {
        restaurant: restaurant.into(),
        table: "T1".into(),
        amount: lines.iter().map(OrderLine::line_total).sum(),
        items: lines,
        customer: None,
        customer_name: None,
    };

    let first = system
        .order_client
        .place_order(place("spice-route", vec![line("dal", 900, 2)]))
        .await
        .unwrap();
    let second = system
        .order_client
        .place_order(place("spice-route", vec![line("naan", 400, 1)]))
        .await
        .unwrap();
    system
        .order_client
        .place_order(place("noodle-bar", vec![line("ramen", 1500, 1)]))
        .await
        .unwrap();

    system
        .order_client
        .transition(first, OrderStatus::Completed)
        .await
        .unwrap();
    let paid = system
        .order_client
        .update_order(
            first,
            OrderUpdate {
                payment_status: Some(PaymentStatus::Paid),
                customer_name: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(paid.payment_status, PaymentStatus::Paid);

    let restaurant = RestaurantId::from("spice-route");
    let all = system
        .order_client
        .list_for_restaurant(&restaurant, None)
        .await
        .unwrap();
    assert_eq!(all.iter().map(|o| o.id).collect::<Vec<OrderId>>(), vec![second, first]);

    let pending = system
        .order_client
        .list_for_restaurant(&restaurant, Some(OrderStatus::Pending))
        .await
        .unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, second);

    let summary = DashboardSummary::from_orders(&all);
    assert_eq!(summary.revenue, Money(1800));
    assert_eq!(summary.open_orders, 1);

    // Orders are never deleted
    assert!(matches!(
        system.order_client.delete(first).await,
        Err(OrderError::Validation(_))
    ));
    assert!(system.order_client.get(first).await.unwrap().is_some());

    system.shutdown().await.unwrap();
}
