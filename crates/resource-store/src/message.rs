//! # Store Messages
//!
//! The request protocol between [`ResourceClient`](crate::ResourceClient) and
//! [`ResourceActor`](crate::ResourceActor).

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a store actor.
///
/// - **Create**: builds a row from [`ActorEntity::Create`]; the store assigns the id.
/// - **Get**: fetches a row by id.
/// - **FindMany**: returns clones of every row matching an [`ActorEntity::Filter`].
/// - **DeleteMany**: removes every row matching a filter and reports how many went.
///   Zero matches is a successful response.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    FindMany {
        filter: T::Filter,
        respond_to: Response<Vec<T>>,
    },
    DeleteMany {
        filter: T::Filter,
        respond_to: Response<usize>,
    },
}
