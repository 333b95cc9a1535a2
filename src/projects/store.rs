//! In-memory project store.
//!
//! # Responsibilities
//! - Hold every project for the lifetime of the process
//! - Preserve insertion order across append, replace and remove
//!
//! # Design Decisions
//! - Plain `Vec`; positions returned by `find_index_by_id` are only valid
//!   until the next mutation
//! - No duplicate-id check on append: ids come from `ProjectId::generate`
//! - Shared through `SharedStore`, a mutex the handlers hold only for
//!   synchronous lookup-and-mutate steps

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::projects::id::ProjectId;
use crate::projects::model::Project;

/// Ordered collection of projects.
#[derive(Debug, Default, Clone)]
pub struct ProjectStore {
    projects: Vec<Project>,
}

impl ProjectStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All projects, or those whose title contains `filter_title`.
    ///
    /// An empty filter behaves like no filter.
    pub fn list(&self, filter_title: Option<&str>) -> Vec<Project> {
        match filter_title.filter(|t| !t.is_empty()) {
            Some(needle) => self
                .projects
                .iter()
                .filter(|p| p.title_contains(needle))
                .cloned()
                .collect(),
            None => self.projects.clone(),
        }
    }

    pub fn append(&mut self, project: Project) {
        self.projects.push(project);
    }

    /// Position of the first project with `id`.
    pub fn find_index_by_id(&self, id: &ProjectId) -> Option<usize> {
        self.projects.iter().position(|p| p.id == *id)
    }

    /// Overwrite the record at `index`, returning the previous one.
    ///
    /// Returns `None` (and changes nothing) if `index` is out of bounds.
    pub fn replace_at(&mut self, index: usize, project: Project) -> Option<Project> {
        let slot = self.projects.get_mut(index)?;
        Some(std::mem::replace(slot, project))
    }

    /// Remove the record at `index`, shifting later records forward.
    pub fn remove_at(&mut self, index: usize) -> Option<Project> {
        if index < self.projects.len() {
            Some(self.projects.remove(index))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

/// Store handle shared by every handler.
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<ProjectStore>>,
}

impl SharedStore {
    pub fn new(store: ProjectStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Lock the store.
    ///
    /// A poisoned lock is recovered: every store operation leaves the
    /// `Vec` in a consistent state even if a handler panicked afterwards.
    pub fn lock(&self) -> MutexGuard<'_, ProjectStore> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
