// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The project collection and its persistence.
//!
//! The store owns the ordered list of projects shown in the gallery and
//! mirrors the whole list to the key-value store after every change. A
//! failed write keeps the in-memory change; the persisted copy is then
//! stale until the next successful write.

use super::project::Project;
use super::seed::default_projects;
use crate::io::storage::{KeyValueStore, StorageError, PROJECTS_KEY};
use serde_json::Value;
use std::rc::Rc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("a project with id {0} already exists")]
    DuplicateId(String),

    /// The in-memory collection changed but could not be written.
    #[error("failed to persist projects: {0}")]
    Persist(#[from] StorageError),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Ordered project collection backed by a key-value store.
pub struct ProjectStore {
    backend: Rc<dyn KeyValueStore>,
    projects: Vec<Project>,
}

impl ProjectStore {
    /// Load the persisted collection, falling back to the default seed.
    ///
    /// Missing, unparseable and non-array values all resolve to the seed.
    /// Every element goes through the legacy video migration. The resolved
    /// collection is written back once; a failure there is only logged.
    /// When any stored element could not be read, storage is left untouched.
    pub fn load(backend: Rc<dyn KeyValueStore>) -> Self {
        let Loaded { projects, skipped } = read_collection(backend.as_ref());
        let store = Self { backend, projects };
        if skipped > 0 {
            log::warn!(
                "Leaving stored projects untouched; {} record(s) could not be read",
                skipped
            );
        } else if let Err(e) = store.persist() {
            log::error!("Failed to save projects after load: {}", e);
        }
        store
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Insert a project at the front of the collection.
    pub fn add(&mut self, project: Project) -> Result<()> {
        if self.contains(&project.id) {
            return Err(StoreError::DuplicateId(project.id));
        }
        log::info!("Adding project {} ({})", project.id, project.title);
        self.projects.insert(0, project);
        self.persist()
    }

    /// Replace the project with the given id. Returns `Ok(false)` and leaves
    /// the collection untouched when no project matches.
    pub fn update(&mut self, id: &str, project: Project) -> Result<bool> {
        let Some(slot) = self.projects.iter_mut().find(|p| p.id == id) else {
            log::debug!("Update for unknown project {} ignored", id);
            return Ok(false);
        };
        log::info!("Updating project {}", id);
        *slot = project;
        self.persist()?;
        Ok(true)
    }

    /// Remove the project with the given id. Returns `Ok(false)` when absent.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        if self.projects.len() == before {
            return Ok(false);
        }
        log::info!("Deleted project {}, total: {}", id, self.projects.len());
        self.persist()?;
        Ok(true)
    }

    /// Serialize the full collection to the backend.
    pub fn persist(&self) -> Result<()> {
        let json = serde_json::to_string(&self.projects).map_err(StorageError::from)?;
        self.backend.set(PROJECTS_KEY, &json)?;
        Ok(())
    }
}

/// Result of reading the stored collection.
struct Loaded {
    projects: Vec<Project>,
    /// Stored elements that could not be decoded.
    skipped: usize,
}

impl Loaded {
    fn seed() -> Self {
        Self {
            projects: default_projects(),
            skipped: 0,
        }
    }
}

fn read_collection(backend: &dyn KeyValueStore) -> Loaded {
    let saved = match backend.get(PROJECTS_KEY) {
        Ok(Some(saved)) => saved,
        Ok(None) => return Loaded::seed(),
        Err(e) => {
            log::error!("Failed to read projects from storage: {}", e);
            return Loaded::seed();
        }
    };

    let parsed: Value = match serde_json::from_str(&saved) {
        Ok(value) => value,
        Err(e) => {
            log::error!("Failed to parse stored projects: {}", e);
            return Loaded::seed();
        }
    };

    let Value::Array(elements) = parsed else {
        log::warn!("Stored projects are corrupted (not an array). Resetting to defaults.");
        return Loaded::seed();
    };

    let total = elements.len();
    let projects: Vec<Project> = elements
        .into_iter()
        .filter_map(Project::from_persisted)
        .collect();
    let skipped = total - projects.len();
    if skipped > 0 {
        log::warn!("Skipped {} unreadable project record(s)", skipped);
    }
    Loaded { projects, skipped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::storage::MemoryStore;

    fn memory() -> Rc<MemoryStore> {
        Rc::new(MemoryStore::new())
    }

    fn project(id: &str, title: &str) -> Project {
        Project {
            id: id.to_string(),
            title: title.to_string(),
            ..Default::default()
        }
    }

    fn persisted(backend: &MemoryStore) -> Vec<Project> {
        let raw = backend.get(PROJECTS_KEY).unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn test_load_empty_backend_uses_seed() {
        let backend = memory();
        let store = ProjectStore::load(backend.clone());
        assert_eq!(store.projects(), default_projects().as_slice());
        // The seed is written back on load
        assert_eq!(persisted(&backend).len(), 6);
    }

    #[test]
    fn test_load_object_falls_back_to_exact_seed() {
        let backend = memory();
        backend.set(PROJECTS_KEY, r#"{"id": "1", "title": "Not a list"}"#).unwrap();

        let store = ProjectStore::load(backend.clone());
        assert_eq!(store.projects(), default_projects().as_slice());
    }

    #[test]
    fn test_load_garbage_falls_back_to_seed() {
        let backend = memory();
        backend.set(PROJECTS_KEY, "{not json").unwrap();
        let store = ProjectStore::load(backend);
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn test_load_migrates_legacy_records() {
        let backend = memory();
        backend
            .set(
                PROJECTS_KEY,
                r#"[{"id": "a", "title": "A", "videoUrl": "https://youtu.be/dQw4w9WgXcQ"},
                    {"id": "b", "title": "B"},
                    42]"#,
            )
            .unwrap();

        let store = ProjectStore::load(backend);
        assert_eq!(store.len(), 2);
        assert_eq!(
            store.get("a").unwrap().video_urls,
            vec!["https://youtu.be/dQw4w9WgXcQ"]
        );
        assert!(store.get("b").unwrap().video_urls.is_empty());
    }

    #[test]
    fn test_load_accepts_hand_edited_records() {
        let backend = memory();
        backend
            .set(
                PROJECTS_KEY,
                r#"[{"id": "a", "title": "Hand edited", "year": 2023, "description": null},
                    {"id": "b", "title": "Null gallery", "year": "2022", "galleryImages": null}]"#,
            )
            .unwrap();

        let store = ProjectStore::load(backend.clone());
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("a").unwrap().year, "2023");
        assert_eq!(store.get("a").unwrap().description, "");
        assert!(store.get("b").unwrap().gallery_images.is_empty());

        let saved = persisted(&backend);
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0].year, "2023");
    }

    #[test]
    fn test_load_keeps_storage_when_records_are_skipped() {
        let backend = memory();
        let raw = r#"[{"id": "a", "title": "A", "videoUrl": "https://youtu.be/dQw4w9WgXcQ"}, 42]"#;
        backend.set(PROJECTS_KEY, raw).unwrap();

        let store = ProjectStore::load(backend.clone());
        assert_eq!(store.len(), 1);
        assert_eq!(backend.get(PROJECTS_KEY).unwrap().unwrap(), raw);
    }

    #[test]
    fn test_add_prepends_and_persists_across_reload() {
        let backend = memory();
        let mut store = ProjectStore::load(backend.clone());
        store.add(project("new", "Fresh Work")).unwrap();

        assert_eq!(store.len(), 7);
        assert_eq!(store.projects()[0].id, "new");

        let reloaded = ProjectStore::load(backend);
        assert_eq!(reloaded.len(), 7);
        assert_eq!(reloaded.projects()[0].title, "Fresh Work");
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut store = ProjectStore::load(memory());
        let err = store.add(project("1", "Again")).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId(id) if id == "1"));
        assert_eq!(store.len(), 6);
        assert_eq!(store.get("1").unwrap().title, "Container");
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut store = ProjectStore::load(memory());
        let mut edited = store.get("3").unwrap().clone();
        edited.title = "You Are Very Special".into();

        assert!(store.update("3", edited).unwrap());
        assert_eq!(store.projects()[2].title, "You Are Very Special");
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn test_update_after_delete_does_not_resurrect() {
        let backend = memory();
        let mut store = ProjectStore::load(backend.clone());
        let removed = store.get("2").unwrap().clone();

        assert!(store.delete("2").unwrap());
        assert!(!store.update("2", removed).unwrap());
        assert_eq!(store.len(), 5);
        assert!(!store.contains("2"));
        assert_eq!(persisted(&backend).len(), 5);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut store = ProjectStore::load(memory());
        assert!(!store.delete("nope").unwrap());
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let backend = memory();
        let mut store = ProjectStore::load(backend.clone());
        backend.set_simulate_write_error(true);

        let err = store.add(project("new", "Unsaved")).unwrap_err();
        assert!(matches!(err, StoreError::Persist(_)));
        assert_eq!(store.projects()[0].id, "new");

        // The stored snapshot is the stale one
        backend.set_simulate_write_error(false);
        assert_eq!(persisted(&backend).len(), 6);
    }

    #[test]
    fn test_quota_failure_surfaces_as_persist_error() {
        let backend = Rc::new(MemoryStore::with_quota(64 * 1024));
        let mut store = ProjectStore::load(backend);
        let mut big = project("big", "Huge");
        big.cover_image = format!("data:image/png;base64,{}", "A".repeat(128 * 1024));

        let err = store.add(big).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Persist(StorageError::QuotaExceeded { .. })
        ));
        assert_eq!(store.len(), 7);
    }
}
