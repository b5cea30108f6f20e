// Actor context - who is performing the current unit of work
// Each unit of work gets its own task-local cell; nothing is shared between requests

use std::cell::Cell;
use std::future::Future;
use thiserror::Error;

use crate::types::ActorId;

tokio::task_local! {
    static CURRENT_ACTOR: Cell<Option<ActorId>>;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContextError {
    #[error("No unit of work is active on this task; wrap the call in ActorContext::scope")]
    NoUnitOfWork,
}

/// Task-scoped holder of the current actor.
///
/// A unit of work is opened with [`ActorContext::scope`] (async) or
/// [`ActorContext::sync_scope`] and ends when the wrapped future or closure
/// finishes, which drops the cell. Reads outside any unit of work return `None`.
pub struct ActorContext;

impl ActorContext {
    /// Run `fut` as a unit of work with a fresh actor cell
    pub async fn scope<F>(actor: Option<ActorId>, fut: F) -> F::Output
    where
        F: Future,
    {
        CURRENT_ACTOR.scope(Cell::new(actor), fut).await
    }

    /// Run `f` as a unit of work with a fresh actor cell
    pub fn sync_scope<R, F>(actor: Option<ActorId>, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        CURRENT_ACTOR.sync_scope(Cell::new(actor), f)
    }

    /// Store the actor for the current unit of work, replacing any previous value
    pub fn set(actor: ActorId) -> Result<(), ContextError> {
        CURRENT_ACTOR
            .try_with(|cell| cell.set(Some(actor)))
            .map_err(|_| ContextError::NoUnitOfWork)
    }

    /// Current actor, or `None` when unset or outside a unit of work
    pub fn get() -> Option<ActorId> {
        CURRENT_ACTOR.try_with(Cell::get).ok().flatten()
    }

    /// Forget the actor for the current unit of work
    pub fn clear() {
        // Outside a unit of work there is nothing to clear
        let _ = CURRENT_ACTOR.try_with(|cell| cell.set(None));
    }

    pub fn in_unit_of_work() -> bool {
        CURRENT_ACTOR.try_with(|_| ()).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_outside_unit_of_work_is_none() {
        assert_eq!(ActorContext::get(), None);
        assert!(!ActorContext::in_unit_of_work());
    }

    #[test]
    fn test_set_outside_unit_of_work_fails() {
        assert_eq!(ActorContext::set(ActorId(1)), Err(ContextError::NoUnitOfWork));
        // clear is a no-op there
        ActorContext::clear();
    }

    #[test]
    fn test_sync_scope_set_get_clear() {
        ActorContext::sync_scope(None, || {
            assert!(ActorContext::in_unit_of_work());
            assert_eq!(ActorContext::get(), None);

            ActorContext::set(ActorId(3)).unwrap();
            assert_eq!(ActorContext::get(), Some(ActorId(3)));

            ActorContext::set(ActorId(4)).unwrap();
            assert_eq!(ActorContext::get(), Some(ActorId(4)));

            ActorContext::clear();
            assert_eq!(ActorContext::get(), None);
        });
        assert_eq!(ActorContext::get(), None);
    }

    #[tokio::test]
    async fn test_scope_survives_await_points() {
        let seen = ActorContext::scope(Some(ActorId(42)), async {
            tokio::task::yield_now().await;
            ActorContext::get()
        })
        .await;
        assert_eq!(seen, Some(ActorId(42)));
        assert_eq!(ActorContext::get(), None);
    }

    #[tokio::test]
    async fn test_nested_scope_shadows_and_restores() {
        ActorContext::scope(Some(ActorId(1)), async {
            let inner = ActorContext::scope(Some(ActorId(2)), async { ActorContext::get() }).await;
            assert_eq!(inner, Some(ActorId(2)));
            assert_eq!(ActorContext::get(), Some(ActorId(1)));
        })
        .await;
    }

    #[tokio::test]
    async fn test_spawned_task_does_not_inherit_actor() {
        let handle = ActorContext::scope(Some(ActorId(5)), async {
            tokio::spawn(async { ActorContext::get() })
        })
        .await;
        assert_eq!(handle.await.unwrap(), None);
    }
}
