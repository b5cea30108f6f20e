// Persistence boundary - mapper operations and the auto-fill decorator around them

pub mod memory;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::autofill::{AutoFill, AutoFillEngine, AutoFillError, MapperOperation};

pub use memory::{InMemoryMapper, Keyed};

#[derive(Debug, Error)]
pub enum MapperError {
    #[error(transparent)]
    AutoFill(#[from] AutoFillError),

    #[error("Operation '{0}' requires an entity argument")]
    MissingEntity(&'static str),

    #[error("Operation '{0}' requires an entity with an id")]
    MissingId(&'static str),

    #[error("Record {id} not found for '{operation}'")]
    NotFound { operation: &'static str, id: i64 },
}

/// A persistence-layer executor for entities of type `E`.
/// The entity, when present, is the operation's first argument.
#[async_trait]
pub trait Mapper<E>: Send + Sync
where
    E: Send,
{
    /// Run `op`, returning the number of affected rows
    async fn execute(&self, op: &MapperOperation, entity: Option<&mut E>) -> Result<u64, MapperError>;
}

#[async_trait]
impl<E, M> Mapper<E> for Arc<M>
where
    E: Send,
    M: Mapper<E> + ?Sized,
{
    async fn execute(&self, op: &MapperOperation, entity: Option<&mut E>) -> Result<u64, MapperError> {
        (**self).execute(op, entity).await
    }
}

/// Decorator that runs the auto-fill engine before delegating to the wrapped mapper.
///
/// Enrichment finishes before the inner mapper is polled; a configuration
/// error returns immediately and the inner mapper never sees the call.
pub struct AutoFilled<M> {
    engine: Arc<AutoFillEngine>,
    inner: M,
}

impl<M> AutoFilled<M> {
    pub fn new(engine: Arc<AutoFillEngine>, inner: M) -> Self {
        Self { engine, inner }
    }

    pub fn inner(&self) -> &M {
        &self.inner
    }
}

#[async_trait]
impl<E, M> Mapper<E> for AutoFilled<M>
where
    E: AutoFill + Send,
    M: Mapper<E>,
{
    async fn execute(&self, op: &MapperOperation, mut entity: Option<&mut E>) -> Result<u64, MapperError> {
        self.engine
            .intercept(op, entity.as_deref_mut().map(|e| e as &mut dyn AutoFill))?;
        self.inner.execute(op, entity).await
    }
}
