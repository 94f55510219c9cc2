//! Demo run: a customer fills a cart, checks out, and the kitchen walks the
//! order to completion while the dashboard follows the live feed.

use actor_framework::tracing::setup_tracing;
use dotenvy::dotenv;
use std::time::Duration;
use tableside::analytics::DashboardSummary;
use tableside::config;
use tableside::demo::simulate_progression;
use tableside::errors::Result;
use tableside::lifecycle::OrderSystem;
use tableside::model::{CartItem, Money, RestaurantId};
use tableside::order_actor::CheckoutRequest;
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let config = config::load()?;
    setup_tracing(&config.log_level);

    info!("Starting tableside demo");
    let system = OrderSystem::new(&config);
    let restaurant = RestaurantId::from("spice-route");
    let mut kitchen = system.feed.subscribe_restaurant(&restaurant);

    let customer = system.loyalty_client.enroll("Asha").await?;

    let span = tracing::info_span!("cart", session = "table-4");
    let cart_id = async {
        let (cart_id, restored) = system.cart_client.open("table-4").await?;
        if let Some(notice) = restored.notice {
            info!(%notice, "Cart notice");
        }
        for item in [
            CartItem::new("biryani", "Chicken biryani", Money(25000)).with_category("mains"),
            CartItem::new("naan", "Garlic naan", Money(4000)).with_category("breads"),
            CartItem::new("naan", "Garlic naan", Money(4000)).with_category("breads"),
            CartItem::new("lassi", "Mango lassi", Money(18000)),
        ] {
            system.cart_client.add_item(cart_id, item).await?;
        }
        let view = system.cart_client.view(cart_id).await?;
        info!(
            items = view.summary.item_count,
            subtotal = %view.summary.subtotal,
            tax = %view.summary.tax,
            total = %view.summary.total,
            "Cart ready"
        );
        Ok::<_, tableside::errors::Error>(cart_id)
    }
    .instrument(span)
    .await?;

    let receipt = system
        .order_client
        .checkout(
            &system.cart_client,
            cart_id,
            CheckoutRequest {
                restaurant: restaurant.clone(),
                table: "T4".into(),
                customer: Some(customer),
                customer_name: Some("Asha".into()),
            },
        )
        .await?;
    let order_id = receipt.order_id;
    if let Some(notice) = receipt.cart.and_then(|cart| cart.notice) {
        warn!(%notice, "Cart notice after checkout");
    }
    info!(%order_id, "Order placed");

    let span = tracing::info_span!("kitchen", %order_id);
    let (applied, stopped) = simulate_progression(
        &system.order_client,
        order_id,
        Duration::from_millis(config.demo_step_ms),
    )
    .instrument(span)
    .await;
    if let Some(e) = stopped {
        error!(error = %e, "Progression stopped early");
    }
    if let Some(reward) = applied.last().and_then(|o| o.reward.as_ref()) {
        info!(cashback = %reward.cashback, balance = %reward.balance, "Loyalty credited");
    }

    while let Ok(event) = kitchen.try_recv() {
        info!(
            order_id = %event.order_id,
            status = %event.to,
            icon = event.display.icon,
            eta = %event.display.eta,
            "Feed"
        );
    }

    let orders = system
        .order_client
        .list_for_restaurant(&restaurant, None)
        .await?;
    let summary = DashboardSummary::from_orders(&orders);
    info!(
        orders = summary.total_orders,
        revenue = %summary.revenue,
        average_ticket = %summary.average_ticket,
        "Dashboard"
    );

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
