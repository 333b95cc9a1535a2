//! In-memory projects API library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod projects;

pub use config::schema::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use projects::{Project, ProjectId, ProjectInput, ProjectStore};
