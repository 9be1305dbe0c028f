use std::sync::Arc;

/// Identifier of the user (actor) recorded in creator, modifier and deleter fields
pub type UserId = i64;

/// Resolves the actor on whose behalf an entity is being saved
pub trait ActorProvider: Send + Sync {
    /// Returns the current user, or `None` for anonymous or system changes
    fn current_user_id(&self) -> Option<UserId>;
}

impl<A: ActorProvider + ?Sized> ActorProvider for Arc<A> {
    fn current_user_id(&self) -> Option<UserId> {
        (**self).current_user_id()
    }
}

/// No authenticated actor; audit actor fields stay empty
#[derive(Debug, Clone, Copy, Default)]
pub struct AnonymousActor;

impl ActorProvider for AnonymousActor {
    fn current_user_id(&self) -> Option<UserId> {
        None
    }
}

/// Always reports the same user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedActor(pub UserId);

impl ActorProvider for FixedActor {
    fn current_user_id(&self) -> Option<UserId> {
        Some(self.0)
    }
}
