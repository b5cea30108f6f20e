use thiserror::Error;

use crate::autofill::traits::FillField;
use crate::types::OperationType;

/// Auto-fill failures. These are structural mismatches between a marker and
/// the entity it is applied to, so they are never retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AutoFillError {
    #[error(
        "Entity '{entity}' cannot be auto-filled for {kind:?} operation '{operation}': missing {}",
        join_fields(.missing)
    )]
    MissingCapability {
        entity: &'static str,
        operation: &'static str,
        kind: OperationType,
        missing: Vec<FillField>,
    },
}

fn join_fields(fields: &[FillField]) -> String {
    fields
        .iter()
        .map(|field| field.setter_name())
        .collect::<Vec<_>>()
        .join(", ")
}
