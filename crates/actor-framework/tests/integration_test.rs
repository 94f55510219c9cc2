use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
use async_trait::async_trait;

// --- Test Entity: a kitchen ticket ---

#[derive(Clone, Debug, PartialEq)]
struct Ticket {
    id: u32,
    dish: String,
    fired: bool,
    pinned: bool,
}

#[derive(Debug)]
struct TicketCreate {
    dish: String,
}

#[derive(Debug)]
struct TicketUpdate {
    dish: Option<String>,
    pinned: Option<bool>,
}

#[derive(Debug)]
enum TicketAction {
    Fire,
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum TicketError {
    #[error("dish name is empty")]
    EmptyDish,
    #[error("ticket is pinned")]
    Pinned,
    #[error("kitchen closed")]
    KitchenClosed,
}

/// Context: whether the kitchen accepts new tickets.
struct Kitchen {
    open: bool,
}

#[async_trait]
impl ActorEntity for Ticket {
    type Id = u32;
    type Create = TicketCreate;
    type Update = TicketUpdate;
    type Action = TicketAction;
    type ActionResult = bool;
    type Context = Kitchen;
    type Error = TicketError;

    fn from_create_params(id: u32, params: TicketCreate) -> Result<Self, Self::Error> {
        if params.dish.is_empty() {
            return Err(TicketError::EmptyDish);
        }
        Ok(Self {
            id,
            dish: params.dish,
            fired: false,
            pinned: false,
        })
    }

    async fn on_create(&mut self, ctx: &Kitchen) -> Result<(), Self::Error> {
        if ctx.open {
            Ok(())
        } else {
            Err(TicketError::KitchenClosed)
        }
    }

    async fn on_update(&mut self, update: TicketUpdate, _ctx: &Kitchen) -> Result<(), Self::Error> {
        if let Some(dish) = update.dish {
            self.dish = dish;
        }
        if let Some(pinned) = update.pinned {
            self.pinned = pinned;
        }
        Ok(())
    }

    async fn on_delete(&self, _ctx: &Kitchen) -> Result<(), Self::Error> {
        if self.pinned {
            Err(TicketError::Pinned)
        } else {
            Ok(())
        }
    }

    async fn handle_action(&mut self, action: TicketAction, _ctx: &Kitchen) -> Result<bool, Self::Error> {
        match action {
            TicketAction::Fire => {
                let changed = !self.fired;
                self.fired = true;
                Ok(changed)
            }
        }
    }
}

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    let handle = tokio::spawn(actor.run(Kitchen { open: true }));

    // Create
    let id: u32 = client
        .create(TicketCreate { dish: "Paneer tikka".into() })
        .await
        .unwrap();
    assert_eq!(id, 1);

    // Action twice: only the first changes state
    assert!(client.perform_action(id, TicketAction::Fire).await.unwrap());
    assert!(!client.perform_action(id, TicketAction::Fire).await.unwrap());

    // Update
    let updated = client
        .update(id, TicketUpdate { dish: Some("Dal makhani".into()), pinned: None })
        .await
        .unwrap();
    assert_eq!(updated.dish, "Dal makhani");
    assert!(updated.fired);

    // List
    let second = client.create(TicketCreate { dish: "Naan".into() }).await.unwrap();
    assert_eq!(second, 2);
    let mut all = client.list().await.unwrap();
    all.sort_by_key(|t| t.id);
    assert_eq!(all.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);

    // Delete
    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_create_rejections_carry_the_entity_error() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(Kitchen { open: true }));

    let err = client
        .create(TicketCreate { dish: String::new() })
        .await
        .unwrap_err();
    assert_eq!(err.entity_error::<TicketError>(), Some(&TicketError::EmptyDish));

    // The rejected create consumed id 1
    let id = client.create(TicketCreate { dish: "Lassi".into() }).await.unwrap();
    assert_eq!(id, 2);
}

#[tokio::test]
async fn test_on_create_hook_can_veto() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(Kitchen { open: false }));

    let err = client
        .create(TicketCreate { dish: "Soup".into() })
        .await
        .unwrap_err();
    assert_eq!(
        err.into_entity_error::<TicketError>().unwrap(),
        TicketError::KitchenClosed
    );
    assert!(client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_on_delete_hook_can_veto() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(Kitchen { open: true }));

    let id = client.create(TicketCreate { dish: "Soup".into() }).await.unwrap();
    client
        .update(id, TicketUpdate { dish: None, pinned: Some(true) })
        .await
        .unwrap();

    let err = client.delete(id).await.unwrap_err();
    assert_eq!(err.entity_error::<TicketError>(), Some(&TicketError::Pinned));
    assert!(client.get(id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_missing_ids_report_not_found() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(Kitchen { open: true }));

    assert!(client.get(7).await.unwrap().is_none());
    assert!(matches!(
        client.perform_action(7, TicketAction::Fire).await,
        Err(FrameworkError::NotFound(id)) if id == "7"
    ));
    assert!(matches!(
        client.update(7, TicketUpdate { dish: None, pinned: None }).await,
        Err(FrameworkError::NotFound(_))
    ));
    assert!(matches!(client.delete(7).await, Err(FrameworkError::NotFound(_))));
}

#[tokio::test]
async fn test_client_reports_closed_actor() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    drop(actor);

    assert!(client.is_closed());
    assert!(matches!(client.list().await, Err(FrameworkError::ActorClosed)));
}
