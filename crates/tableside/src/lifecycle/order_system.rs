use crate::cart_actor::{CartContext, FileStore, MemoryStore, SnapshotStore};
use crate::clients::{CartClient, LoyaltyClient, OrderClient};
use crate::config::AppConfig;
use crate::errors::{Error, Result};
use crate::order_actor::{OrderContext, OrderFeed};
use std::sync::Arc;
use tracing::{error, info};

/// The runtime orchestrator for the restaurant ordering system.
///
/// # Architecture
///
/// - **Cart Actor**: one cart per browsing session, snapshotted to a slot
/// - **Loyalty Actor**: customer accounts and rewards
/// - **Order Actor**: placed orders and their status; credits loyalty on completion
/// - **Order Feed**: live events per restaurant and per order (not an actor)
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new(&config::load()?);
/// let (cart_id, _) = system.cart_client.open("table-4").await?;
/// system.cart_client.add_item(cart_id, item).await?;
/// let receipt = system.order_client.checkout(&system.cart_client, cart_id, request).await?;
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    pub cart_client: CartClient,
    pub order_client: OrderClient,
    pub loyalty_client: LoyaltyClient,
    pub feed: OrderFeed,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    /// Starts every actor, storing cart snapshots as configured.
    pub fn new(config: &AppConfig) -> Self {
        let store: Arc<dyn SnapshotStore> = match &config.snapshot_dir {
            Some(dir) => {
                info!(dir = %dir.display(), "Cart snapshots on disk");
                Arc::new(FileStore::new(dir))
            }
            None => Arc::new(MemoryStore::new()),
        };
        Self::with_store(config, store)
    }

    /// Starts every actor with the given snapshot slot store.
    pub fn with_store(config: &AppConfig, store: Arc<dyn SnapshotStore>) -> Self {
        // 1. Create actors (no dependencies yet)
        let (cart_actor, cart_client) = crate::cart_actor::new();
        let (loyalty_actor, loyalty_client) = crate::loyalty_actor::new();
        let (order_actor, order_client) = crate::order_actor::new();
        let cart_client = CartClient::new(cart_client);
        let loyalty_client = LoyaltyClient::new(loyalty_client);
        let order_client = OrderClient::new(order_client);
        let feed = OrderFeed::new(config.event_capacity);

        // 2. Start actors with injected context
        let cart_handle = tokio::spawn(cart_actor.run(CartContext {
            store,
            tax_rate_bps: config.tax_rate_bps,
        }));
        let loyalty_handle = tokio::spawn(loyalty_actor.run(config.loyalty.clone()));
        let order_handle = tokio::spawn(order_actor.run(OrderContext {
            loyalty: loyalty_client.clone(),
            feed: feed.clone(),
            policy: config.transition_policy,
        }));

        info!(policy = ?config.transition_policy, tax_rate_bps = config.tax_rate_bps, "Order system started");
        Self {
            cart_client,
            order_client,
            loyalty_client,
            feed,
            handles: vec![cart_handle, order_handle, loyalty_handle],
        }
    }

    /// Drops every client and waits for the actors to finish.
    ///
    /// Clones of the clients held elsewhere keep their actors alive, and this
    /// waits for them too.
    pub async fn shutdown(self) -> Result<()> {
        info!("Shutting down system...");

        drop(self.cart_client);
        drop(self.order_client);
        drop(self.loyalty_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(Error::ActorTask(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
