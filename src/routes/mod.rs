//! Routers: common (health/ready/version) and the /api/v1 resources.

mod api;
mod common;

pub use api::api_routes;
pub use common::common_routes;
