// Audit field auto-fill for mapper operations
// Markers declare the operation kind, the engine fills the entity before the mapper runs

pub mod traits;
pub mod clock;
pub mod operation;
pub mod engine;
pub mod error;

// Re-export core types
pub use traits::*;
pub use clock::*;
pub use operation::*;
pub use engine::*;
pub use error::*;
