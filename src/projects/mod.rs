//! Project domain subsystem.
//!
//! # Data Flow
//! ```text
//! handler
//!     → id.rs (mint / validate identifiers)
//!     → model.rs (Project, ProjectInput)
//!     → store.rs (ordered in-memory collection)
//! ```

pub mod id;
pub mod model;
pub mod store;

pub use id::{is_valid_format, ProjectId};
pub use model::{Project, ProjectInput};
pub use store::{ProjectStore, SharedStore};
