//! Audit auto-fill for persistence operations.
//!
//! Mapper operations carry an [`OperationType`](types::OperationType) marker.
//! Wrapping a mapper with [`AutoFillEngine::wrap`](autofill::AutoFillEngine::wrap)
//! fills `create_time`/`update_time`/`create_user`/`update_user` on the entity
//! argument before the mapper runs, taking the actor from the task-scoped
//! [`ActorContext`](context::ActorContext).

pub mod auth;
pub mod autofill;
pub mod config;
pub mod context;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod middleware;
pub mod models;
pub mod types;
