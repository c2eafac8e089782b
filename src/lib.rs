//! Akdemia API: gym-management REST backend.

pub mod config;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod mapper;
pub mod migration;
pub mod model;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;

pub use config::Settings;
pub use error::ApiError;
pub use migration::apply_migrations;
pub use routes::{api_routes, common_routes};
pub use state::AppState;
