//! Typed client for the projects API.

pub mod client;

pub use client::{Project, ProjectsClient, SdkError};
