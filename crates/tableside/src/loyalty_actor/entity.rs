//! [`ActorEntity`] implementation for [`LoyaltyAccount`].
//!
//! The actor's context is the [`LoyaltyProgram`] every account is credited
//! under.

use super::actions::{LoyaltyAction, LoyaltyActionResult};
use super::error::LoyaltyError;
use crate::model::{CustomerId, LoyaltyAccount, LoyaltyCreate, LoyaltyProgram, LoyaltyUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

#[async_trait]
impl ActorEntity for LoyaltyAccount {
    type Id = CustomerId;
    type Create = LoyaltyCreate;
    type Update = LoyaltyUpdate;
    type Action = LoyaltyAction;
    type ActionResult = LoyaltyActionResult;
    type Context = LoyaltyProgram;
    type Error = LoyaltyError;

    fn from_create_params(id: CustomerId, params: LoyaltyCreate) -> Result<Self, LoyaltyError> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(LoyaltyError::Validation("customer name is empty".into()));
        }
        Ok(LoyaltyAccount::new(id, name))
    }

    async fn on_update(&mut self, update: LoyaltyUpdate, _ctx: &LoyaltyProgram) -> Result<(), LoyaltyError> {
        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err(LoyaltyError::Validation("customer name is empty".into()));
            }
            self.name = name;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: LoyaltyAction,
        program: &LoyaltyProgram,
    ) -> Result<LoyaltyActionResult, LoyaltyError> {
        match action {
            LoyaltyAction::RecordPurchase { order_id, amount } => {
                let reward = self.record_purchase(order_id, amount, program, Utc::now())?;
                info!(
                    customer = %self.id,
                    %order_id,
                    credited = %reward.credited(),
                    balance = %reward.balance,
                    "Purchase recorded"
                );
                Ok(LoyaltyActionResult::RecordPurchase(reward))
            }
            LoyaltyAction::Redeem(amount) => self.redeem(amount).map(LoyaltyActionResult::Redeem),
            LoyaltyAction::Balance => Ok(LoyaltyActionResult::Balance(self.balance)),
        }
    }
}
