//! Project record and the payload clients send to create or replace one.

use serde::{Deserialize, Serialize};

use crate::projects::id::ProjectId;

/// A single project record.
///
/// `title` and `owner` are optional: a client that omits them gets a
/// project without those fields, and they are left out of its JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl Project {
    /// Build a project from an id and a client payload.
    pub fn from_input(id: ProjectId, input: ProjectInput) -> Self {
        Self {
            id,
            title: input.title,
            owner: input.owner,
        }
    }

    /// Case-sensitive substring match on the title.
    pub fn title_contains(&self, needle: &str) -> bool {
        self.title
            .as_deref()
            .map(|title| title.contains(needle))
            .unwrap_or(false)
    }
}

/// Body accepted by create and update.
///
/// Unknown keys (including a client-supplied `id`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectInput {
    pub title: Option<String>,
    pub owner: Option<String>,
}

impl ProjectInput {
    pub fn new(title: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            owner: Some(owner.into()),
        }
    }
}
