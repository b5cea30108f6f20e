// Auto-fill engine - fills audit fields on the first argument of marked mapper operations
// Runs synchronously and inline, strictly before the mapper operation body

use std::sync::Arc;

use crate::autofill::clock::{Clock, SystemClock};
use crate::autofill::error::AutoFillError;
use crate::autofill::operation::{MapperOperation, MAPPER_NAMESPACE};
use crate::autofill::traits::AutoFill;
use crate::config::AutoFillConfig;
use crate::context::ActorContext;
use crate::mapper::AutoFilled;
use crate::types::{ActorId, OperationType, Timestamp};

/// Interception engine for audit auto-fill
pub struct AutoFillEngine {
    clock: Arc<dyn Clock>,
    log_values: bool,
}

impl AutoFillEngine {
    pub fn new(config: &AutoFillConfig) -> Self {
        Self {
            clock: Arc::new(SystemClock),
            log_values: config.log_values,
        }
    }

    /// Replace the wall clock (frozen clocks in tests, replays)
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Namespace shared by every interceptable operation descriptor
    pub fn namespace(&self) -> &'static str {
        MAPPER_NAMESPACE
    }

    /// Wrap a mapper so every call through it is intercepted
    pub fn wrap<M>(self: Arc<Self>, inner: M) -> AutoFilled<M> {
        AutoFilled::new(self, inner)
    }

    /// Interception criterion: the operation lives in the mapper namespace and carries a marker.
    /// Returns the marker kind when the operation must be intercepted.
    pub fn pointcut(&self, op: &MapperOperation) -> Option<OperationType> {
        let kind = op.marker?;
        if op.namespace != MAPPER_NAMESPACE {
            tracing::warn!(
                "Marked operation '{}' lives in namespace '{}', not '{}' - audit fields will not be filled",
                op.name, op.namespace, MAPPER_NAMESPACE
            );
            return None;
        }
        Some(kind)
    }

    /// Intercept a call to `op` whose first argument is `entity`.
    ///
    /// Unmarked operations and operations outside the mapper namespace pass
    /// through untouched, as do calls without an entity argument.
    pub fn intercept(
        &self,
        op: &MapperOperation,
        entity: Option<&mut dyn AutoFill>,
    ) -> Result<(), AutoFillError> {
        let Some(kind) = self.pointcut(op) else {
            tracing::trace!("Auto-fill skipped - '{}' is not a marked mapper operation", op.name);
            return Ok(());
        };

        let Some(entity) = entity else {
            tracing::debug!("Auto-fill skipped - '{}' was called without an entity", op.name);
            return Ok(());
        };

        tracing::info!(
            "Auto-filling audit fields: operation={}, kind={:?}, entity={}",
            op.name, kind, entity.entity_name()
        );

        self.fill_for(op.name, kind, entity)
    }

    /// Fill `entity` for `kind` directly, for callers that carry the marker themselves
    pub fn fill(&self, kind: OperationType, entity: &mut dyn AutoFill) -> Result<(), AutoFillError> {
        self.fill_for("<direct>", kind, entity)
    }

    fn fill_for(
        &self,
        operation: &'static str,
        kind: OperationType,
        entity: &mut dyn AutoFill,
    ) -> Result<(), AutoFillError> {
        // Check the whole required set first so a failure never leaves a half-filled entity
        let missing = entity.capabilities().missing(kind.required_fields());
        if !missing.is_empty() {
            let error = AutoFillError::MissingCapability {
                entity: entity.entity_name(),
                operation,
                kind,
                missing,
            };
            tracing::error!("Auto-fill configuration error: {}", error);
            return Err(error);
        }

        let now = self.clock.now();
        let actor = ActorContext::get();
        if actor.is_none() {
            tracing::debug!("No actor in context for '{}' - audit users left unknown", operation);
        }

        match kind {
            OperationType::Create => {
                entity.set_create_time(now);
                entity.set_update_time(now);
                entity.set_create_user(actor);
                entity.set_update_user(actor);
            }
            OperationType::Modify => {
                entity.set_update_time(now);
                entity.set_update_user(actor);
            }
        }

        if self.log_values {
            self.log_filled(entity.entity_name(), kind, now, actor);
        }

        Ok(())
    }

    fn log_filled(&self, entity: &str, kind: OperationType, now: Timestamp, actor: Option<ActorId>) {
        let actor = actor.map(|id| id.to_string()).unwrap_or_else(|| "unknown".to_string());
        tracing::debug!(
            "Auto-filled {}: kind={:?}, time={}, user={}",
            entity, kind, now.to_rfc3339(), actor
        );
    }
}

impl Default for AutoFillEngine {
    fn default() -> Self {
        Self::new(&AutoFillConfig::default())
    }
}
