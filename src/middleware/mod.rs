pub mod actor;
pub mod response;

pub use actor::actor_context_middleware;
pub use response::{ApiResponse, ApiResult};
