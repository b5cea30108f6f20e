use crate::types::OperationType;

/// Namespace of the persistence-layer operations eligible for auto-fill
pub const MAPPER_NAMESPACE: &str = "mapper";

/// What the persistence layer runs for an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement {
    Insert,
    Update,
    Delete,
}

/// Static description of a persistence operation, including its auto-fill marker.
///
/// Descriptors are built with `const fn`s so the marker is fixed where the
/// operation is defined:
///
/// ```ignore
/// pub const INSERT: MapperOperation =
///     MapperOperation::new(MAPPER_NAMESPACE, "employee.insert", Statement::Insert)
///         .auto_fill(OperationType::Create);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapperOperation {
    pub namespace: &'static str,
    pub name: &'static str,
    pub statement: Statement,
    pub marker: Option<OperationType>,
}

impl MapperOperation {
    /// Unmarked operation - never intercepted
    pub const fn new(namespace: &'static str, name: &'static str, statement: Statement) -> Self {
        Self {
            namespace,
            name,
            statement,
            marker: None,
        }
    }

    /// Attach the auto-fill marker
    pub const fn auto_fill(self, kind: OperationType) -> Self {
        Self {
            marker: Some(kind),
            ..self
        }
    }

    pub fn is_marked(&self) -> bool {
        self.marker.is_some()
    }
}
