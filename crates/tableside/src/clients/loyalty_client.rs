//! # Loyalty Client
//!
//! High-level API for the `LoyaltyAccount` actor.
use crate::loyalty_actor::{LoyaltyAction, LoyaltyActionResult, LoyaltyError};
use crate::model::{CustomerId, LoyaltyAccount, LoyaltyCreate, Money, OrderId, PurchaseReward};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Loyalty actor.
#[derive(Clone)]
pub struct LoyaltyClient {
    inner: ResourceClient<LoyaltyAccount>,
}

impl LoyaltyClient {
    pub fn new(inner: ResourceClient<LoyaltyAccount>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn enroll(&self, name: &str) -> Result<CustomerId, LoyaltyError> {
        debug!("Sending request");
        self.inner
            .create(LoyaltyCreate {
                name: name.to_string(),
            })
            .await
            .map_err(Self::map_error)
    }

    /// Credits a completed order. Each order is credited at most once.
    #[instrument(skip(self))]
    pub async fn record_purchase(
        &self,
        customer: CustomerId,
        order_id: OrderId,
        amount: Money,
    ) -> Result<PurchaseReward, LoyaltyError> {
        debug!("Recording purchase");
        match self
            .inner
            .perform_action(customer, LoyaltyAction::RecordPurchase { order_id, amount })
            .await
        {
            Ok(LoyaltyActionResult::RecordPurchase(reward)) => Ok(reward),
            Ok(_) => unreachable!("RecordPurchase action must return RecordPurchase result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Debits the balance and returns what is left.
    #[instrument(skip(self))]
    pub async fn redeem(&self, customer: CustomerId, amount: Money) -> Result<Money, LoyaltyError> {
        debug!("Redeeming balance");
        match self
            .inner
            .perform_action(customer, LoyaltyAction::Redeem(amount))
            .await
        {
            Ok(LoyaltyActionResult::Redeem(left)) => Ok(left),
            Ok(_) => unreachable!("Redeem action must return Redeem result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    #[instrument(skip(self))]
    pub async fn balance(&self, customer: CustomerId) -> Result<Money, LoyaltyError> {
        match self
            .inner
            .perform_action(customer, LoyaltyAction::Balance)
            .await
        {
            Ok(LoyaltyActionResult::Balance(balance)) => Ok(balance),
            Ok(_) => unreachable!("Balance action must return Balance result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[async_trait]
impl ActorClient<LoyaltyAccount> for LoyaltyClient {
    type Error = LoyaltyError;

    fn inner(&self) -> &ResourceClient<LoyaltyAccount> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<LoyaltyError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => LoyaltyError::NotFound(id),
            Err(other) => LoyaltyError::ActorCommunicationError(other.to_string()),
        }
    }
}
