use async_trait::async_trait;
use resource_store::{ActorEntity, FrameworkError, ResourceActor};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Ticket {
    id: u32,
    owner: String,
    title: String,
    locked: bool,
}

#[derive(Debug)]
struct TicketCreate {
    owner: String,
    title: String,
    locked: bool,
}

#[derive(Debug, Default)]
struct TicketFilter {
    id: Option<u32>,
    owner: Option<String>,
}

#[derive(Debug, thiserror::Error)]
enum TicketError {
    #[error("Ticket needs a title")]
    MissingTitle,
    #[error("Ticket {0} is locked")]
    Locked(u32),
}

#[async_trait]
impl ActorEntity for Ticket {
    type Id = u32;
    type Create = TicketCreate;
    type Filter = TicketFilter;
    type Context = ();
    type Error = TicketError;

    fn from_create_params(id: u32, params: TicketCreate) -> Result<Self, Self::Error> {
        if params.title.is_empty() {
            return Err(TicketError::MissingTitle);
        }
        Ok(Self {
            id,
            owner: params.owner,
            title: params.title,
            locked: params.locked,
        })
    }

    fn matches(&self, filter: &TicketFilter) -> bool {
        filter.id.map_or(true, |id| id == self.id)
            && filter.owner.as_ref().map_or(true, |owner| *owner == self.owner)
    }

    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        if self.locked {
            return Err(TicketError::Locked(self.id));
        }
        Ok(())
    }
}

fn ticket(owner: &str, title: &str) -> TicketCreate {
    TicketCreate {
        owner: owner.to_string(),
        title: title.to_string(),
        locked: false,
    }
}

// --- Tests ---

#[tokio::test]
async fn test_store_full_lifecycle() {
    let (actor, client) = ResourceActor::new(10);
    tokio::spawn(actor.run(()));

    // 1. Create
    let first: u32 = client.create(ticket("alice", "Restock shelf")).await.unwrap();
    let second: u32 = client.create(ticket("bob", "Count pallets")).await.unwrap();
    assert_eq!(first, 1);
    assert_eq!(second, 2);

    // 2. Get
    let fetched: Ticket = client.get(first).await.unwrap().unwrap();
    assert_eq!(fetched.title, "Restock shelf");

    // 3. FindMany scoped by owner
    let alice_tickets = client
        .find_many(TicketFilter {
            owner: Some("alice".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(alice_tickets.len(), 1);
    assert_eq!(alice_tickets[0].id, first);

    // 4. DeleteMany with a filter that matches nothing is not an error
    let removed = client
        .delete_many(TicketFilter {
            id: Some(first),
            owner: Some("bob".into()),
        })
        .await
        .unwrap();
    assert_eq!(removed, 0);
    assert!(client.get(first).await.unwrap().is_some());

    // 5. DeleteMany scoped to the owner removes the row
    let removed = client
        .delete_many(TicketFilter {
            id: Some(first),
            owner: Some("alice".into()),
        })
        .await
        .unwrap();
    assert_eq!(removed, 1);
    assert!(client.get(first).await.unwrap().is_none());
    assert!(client.get(second).await.unwrap().is_some());
}

#[tokio::test]
async fn test_rejected_create_is_reported_as_entity_error() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    let result = client.create(ticket("alice", "")).await;
    match result {
        Err(FrameworkError::EntityError(e)) => assert_eq!(e.to_string(), "Ticket needs a title"),
        other => panic!("Expected EntityError, got {:?}", other),
    }

    // A rejected create does not consume an id
    let id = client.create(ticket("alice", "Valid")).await.unwrap();
    assert_eq!(id, 1);
}

#[tokio::test]
async fn test_failing_delete_hook_removes_nothing() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    client.create(ticket("alice", "Open")).await.unwrap();
    client
        .create(TicketCreate {
            owner: "alice".into(),
            title: "Frozen".into(),
            locked: true,
        })
        .await
        .unwrap();

    let result = client
        .delete_many(TicketFilter {
            owner: Some("alice".into()),
            ..Default::default()
        })
        .await;
    assert!(matches!(result, Err(FrameworkError::EntityError(_))));

    let remaining = client.find_many(TicketFilter::default()).await.unwrap();
    assert_eq!(remaining.len(), 2);
}

#[tokio::test]
async fn test_racing_deletes_remove_the_row_once() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    let id = client.create(ticket("alice", "Shared")).await.unwrap();

    let mut handles = vec![];
    for _ in 0..5 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client
                .delete_many(TicketFilter {
                    id: Some(id),
                    owner: Some("alice".into()),
                })
                .await
        }));
    }

    let mut total = 0;
    for handle in handles {
        total += handle.await.unwrap().unwrap();
    }
    assert_eq!(total, 1, "Exactly one delete should remove the row");
}

#[tokio::test]
async fn test_closed_actor_is_reported() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    drop(actor);

    let result = client.find_many(TicketFilter::default()).await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));
}
