//! HTTP shell around the lab analysis engine.
//!
//! The router is composable: `lab_api_router()` returns a `Router`
//! that can be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::{build_router, lab_api_router};
pub use server::{start_api_server, ApiServer};
pub use types::ApiContext;
