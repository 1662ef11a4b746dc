// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Draft-based project editing.
//!
//! The editor holds at most one unsaved draft. Field edits and media
//! attachments only touch the draft; the project store changes on save.

use crate::config::UploadLimits;
use crate::io::media::{read_media_file, MediaError};
use crate::models::project::Project;
use crate::models::store::{ProjectStore, StoreError};
use chrono::{Datelike, Local};
use std::path::{Path, PathBuf};

/// Cover used for freshly created drafts.
pub const PLACEHOLDER_COVER: &str = "https://picsum.photos/800/600";

/// What a save did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// No draft, or the draft lacks an id or title. Nothing changed.
    Incomplete,
    Added,
    Updated,
}

/// Single-draft editor over the project store.
pub struct AdminEditor {
    draft: Option<Project>,
    limits: UploadLimits,
}

impl AdminEditor {
    pub fn new(limits: UploadLimits) -> Self {
        Self { draft: None, limits }
    }

    pub fn draft(&self) -> Option<&Project> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut Project> {
        self.draft.as_mut()
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// Start editing a copy of an existing project.
    pub fn begin_edit(&mut self, project: &Project) {
        log::info!("Editing project {}", project.id);
        self.draft = Some(project.clone());
    }

    /// Start a new draft with a timestamp id and placeholder fields.
    pub fn begin_create(&mut self) {
        let now = Local::now();
        self.begin_create_with(now.timestamp_millis().to_string(), now.year());
    }

    fn begin_create_with(&mut self, id: String, year: i32) {
        log::info!("Creating project {}", id);
        self.draft = Some(Project {
            id,
            title: "New Project".to_string(),
            category: "Drama".to_string(),
            year: year.to_string(),
            description: String::new(),
            cover_image: PLACEHOLDER_COVER.to_string(),
            gallery_images: Vec::new(),
            video_urls: Vec::new(),
            cast_and_crew: Some(String::new()),
        });
    }

    /// Drop the draft without saving.
    pub fn cancel(&mut self) {
        self.draft = None;
    }

    /// Forget the draft if it is the project that was just deleted.
    pub fn project_deleted(&mut self, id: &str) {
        if self.draft.as_ref().is_some_and(|d| d.id == id) {
            self.draft = None;
        }
    }

    /// Write the draft into the store: update when its id exists, add otherwise.
    ///
    /// Silently does nothing for a draft without id or title. The draft is
    /// cleared once the store has taken it, even if persisting then fails.
    pub fn save(&mut self, store: &mut ProjectStore) -> Result<SaveOutcome, StoreError> {
        let ready = self
            .draft
            .as_ref()
            .is_some_and(|d| !d.id.is_empty() && !d.title.is_empty());
        if !ready {
            return Ok(SaveOutcome::Incomplete);
        }
        let Some(project) = self.draft.take() else {
            return Ok(SaveOutcome::Incomplete);
        };

        if store.contains(&project.id) {
            let id = project.id.clone();
            store.update(&id, project)?;
            Ok(SaveOutcome::Updated)
        } else {
            store.add(project)?;
            Ok(SaveOutcome::Added)
        }
    }

    /// Replace the draft's cover with an embedded image.
    pub fn attach_cover(&mut self, path: &Path) -> Result<(), MediaError> {
        let Some(draft) = self.draft.as_mut() else {
            return Ok(());
        };
        let payload = read_media_file(path, self.limits.cover_image_bytes)?;
        log::info!("Attached cover {} ({} bytes)", payload.name, payload.bytes.len());
        draft.cover_image = payload.to_data_uri();
        Ok(())
    }

    /// Append embedded gallery images. Files over the limit are skipped and
    /// returned as errors; the rest are still attached.
    pub fn attach_gallery(&mut self, paths: &[PathBuf]) -> Vec<MediaError> {
        let Some(draft) = self.draft.as_mut() else {
            return Vec::new();
        };
        let mut rejected = Vec::new();
        for path in paths {
            match read_media_file(path, self.limits.gallery_image_bytes) {
                Ok(payload) => draft.gallery_images.push(payload.to_data_uri()),
                Err(e) => {
                    log::warn!("Gallery image rejected: {}", e);
                    rejected.push(e);
                }
            }
        }
        rejected
    }

    /// Append an embedded video file.
    pub fn attach_video(&mut self, path: &Path) -> Result<(), MediaError> {
        let Some(draft) = self.draft.as_mut() else {
            return Ok(());
        };
        let payload = read_media_file(path, self.limits.video_bytes)?;
        log::info!("Attached video {} ({} bytes)", payload.name, payload.bytes.len());
        draft.video_urls.push(payload.to_data_uri());
        Ok(())
    }

    /// Add an empty video link for the operator to fill in.
    pub fn add_video_field(&mut self) {
        if let Some(draft) = self.draft.as_mut() {
            draft.video_urls.push(String::new());
        }
    }

    pub fn set_video_url(&mut self, index: usize, value: impl Into<String>) {
        if let Some(url) = self.draft.as_mut().and_then(|d| d.video_urls.get_mut(index)) {
            *url = value.into();
        }
    }

    pub fn remove_video_url(&mut self, index: usize) {
        if let Some(draft) = self.draft.as_mut() {
            if index < draft.video_urls.len() {
                draft.video_urls.remove(index);
            }
        }
    }

    pub fn remove_gallery_image(&mut self, index: usize) {
        if let Some(draft) = self.draft.as_mut() {
            if index < draft.gallery_images.len() {
                draft.gallery_images.remove(index);
            }
        }
    }

    /// Replace the description of draft `draft_id` with polished text.
    ///
    /// Returns `false`, leaving the editor alone, when that draft is no
    /// longer open.
    pub fn apply_polished(&mut self, draft_id: &str, text: String) -> bool {
        match self.draft.as_mut() {
            Some(draft) if draft.id == draft_id => {
                draft.description = text;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::storage::MemoryStore;
    use std::rc::Rc;

    fn store() -> ProjectStore {
        ProjectStore::load(Rc::new(MemoryStore::new()))
    }

    fn tiny_limits() -> UploadLimits {
        UploadLimits {
            cover_image_bytes: 8,
            gallery_image_bytes: 4,
            video_bytes: 6,
        }
    }

    #[test]
    fn test_create_and_save_adds_to_front() {
        let mut store = store();
        let mut editor = AdminEditor::new(UploadLimits::default());

        editor.begin_create_with("1700000000000".into(), 2025);
        let draft = editor.draft().unwrap();
        assert_eq!(draft.title, "New Project");
        assert_eq!(draft.category, "Drama");
        assert_eq!(draft.year, "2025");
        assert_eq!(draft.cover_image, PLACEHOLDER_COVER);
        assert!(draft.video_urls.is_empty());

        assert_eq!(editor.save(&mut store).unwrap(), SaveOutcome::Added);
        assert!(!editor.is_editing());
        assert_eq!(store.len(), 7);
        assert_eq!(store.projects()[0].id, "1700000000000");
    }

    #[test]
    fn test_begin_create_uses_timestamp_id() {
        let mut editor = AdminEditor::new(UploadLimits::default());
        editor.begin_create();
        let draft = editor.draft().unwrap();
        assert!(draft.id.parse::<i64>().unwrap() > 0);
        assert_eq!(draft.year.len(), 4);
    }

    #[test]
    fn test_edit_and_save_updates_in_place() {
        let mut store = store();
        let mut editor = AdminEditor::new(UploadLimits::default());

        editor.begin_edit(store.get("4").unwrap());
        editor.draft_mut().unwrap().title = "Logoverse (revival)".into();
        assert_eq!(editor.save(&mut store).unwrap(), SaveOutcome::Updated);

        assert_eq!(store.len(), 6);
        assert_eq!(store.projects()[3].title, "Logoverse (revival)");
    }

    #[test]
    fn test_save_without_title_is_silent_noop() {
        let mut store = store();
        let mut editor = AdminEditor::new(UploadLimits::default());

        assert_eq!(editor.save(&mut store).unwrap(), SaveOutcome::Incomplete);

        editor.begin_create_with("99".into(), 2024);
        editor.draft_mut().unwrap().title.clear();
        assert_eq!(editor.save(&mut store).unwrap(), SaveOutcome::Incomplete);
        assert!(editor.is_editing(), "draft kept for further editing");
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn test_polished_text_only_reaches_its_own_draft() {
        let store = store();
        let mut editor = AdminEditor::new(UploadLimits::default());

        editor.begin_create_with("1".into(), 2025);
        assert!(editor.apply_polished("1", "Polished".into()));
        assert_eq!(editor.draft().unwrap().description, "Polished");

        // A reply for a draft that was closed meanwhile is dropped
        let other = store.projects()[0].clone();
        editor.begin_edit(&other);
        assert!(!editor.apply_polished("1", "Stale".into()));
        assert_eq!(editor.draft().unwrap().description, other.description);

        editor.cancel();
        assert!(!editor.apply_polished(&other.id, "Late".into()));
        assert!(editor.draft().is_none());
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut store = store();
        let mut editor = AdminEditor::new(UploadLimits::default());
        editor.begin_edit(store.get("1").unwrap());
        editor.draft_mut().unwrap().title = "Changed".into();
        editor.cancel();

        assert!(!editor.is_editing());
        assert_eq!(editor.save(&mut store).unwrap(), SaveOutcome::Incomplete);
        assert_eq!(store.get("1").unwrap().title, "Container");
    }

    #[test]
    fn test_save_with_failed_write_keeps_memory_and_clears_draft() {
        let backend = Rc::new(MemoryStore::new());
        let mut store = ProjectStore::load(backend.clone());
        let mut editor = AdminEditor::new(UploadLimits::default());
        backend.set_simulate_write_error(true);

        editor.begin_create_with("42".into(), 2025);
        let err = editor.save(&mut store).unwrap_err();
        assert!(matches!(err, StoreError::Persist(_)));
        assert!(store.contains("42"));
        assert!(!editor.is_editing());
    }

    #[test]
    fn test_deleting_edited_project_clears_draft() {
        let store = store();
        let mut editor = AdminEditor::new(UploadLimits::default());
        editor.begin_edit(store.get("2").unwrap());

        editor.project_deleted("3");
        assert!(editor.is_editing());
        editor.project_deleted("2");
        assert!(!editor.is_editing());
    }

    #[test]
    fn test_video_field_helpers() {
        let mut editor = AdminEditor::new(UploadLimits::default());
        editor.begin_create_with("1".into(), 2025);

        editor.add_video_field();
        editor.add_video_field();
        editor.set_video_url(0, "https://youtu.be/dQw4w9WgXcQ");
        editor.set_video_url(1, "https://vimeo.com/1");
        editor.set_video_url(5, "ignored");
        editor.remove_video_url(0);
        editor.remove_video_url(9);

        assert_eq!(editor.draft().unwrap().video_urls, vec!["https://vimeo.com/1"]);
    }

    #[test]
    fn test_oversized_cover_leaves_draft_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let big = dir.path().join("big.jpg");
        std::fs::write(&big, vec![1u8; 9]).unwrap();
        let small = dir.path().join("small.png");
        std::fs::write(&small, b"abc").unwrap();

        let mut editor = AdminEditor::new(tiny_limits());
        editor.begin_create_with("1".into(), 2025);

        let err = editor.attach_cover(&big).unwrap_err();
        assert!(matches!(err, MediaError::TooLarge { .. }));
        assert_eq!(editor.draft().unwrap().cover_image, PLACEHOLDER_COVER);

        editor.attach_cover(&small).unwrap();
        assert_eq!(editor.draft().unwrap().cover_image, "data:image/png;base64,YWJj");
    }

    #[test]
    fn test_gallery_reports_rejections_and_keeps_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let ok = dir.path().join("a.png");
        std::fs::write(&ok, b"abc").unwrap();
        let big = dir.path().join("b.png");
        std::fs::write(&big, b"abcdef").unwrap();

        let mut editor = AdminEditor::new(tiny_limits());
        editor.begin_create_with("1".into(), 2025);
        let rejected = editor.attach_gallery(&[ok, big]);

        assert_eq!(rejected.len(), 1);
        assert!(rejected[0].to_string().contains("b.png"));
        assert_eq!(editor.draft().unwrap().gallery_images, vec!["data:image/png;base64,YWJj"]);

        editor.remove_gallery_image(0);
        assert!(editor.draft().unwrap().gallery_images.is_empty());
    }

    #[test]
    fn test_video_upload_appends_and_respects_limit() {
        let dir = tempfile::tempdir().unwrap();
        let clip = dir.path().join("clip.mp4");
        std::fs::write(&clip, b"abc").unwrap();
        let long = dir.path().join("long.mp4");
        std::fs::write(&long, vec![0u8; 7]).unwrap();

        let mut editor = AdminEditor::new(tiny_limits());
        editor.begin_create_with("1".into(), 2025);
        editor.attach_video(&clip).unwrap();
        assert!(editor.attach_video(&long).is_err());

        assert_eq!(editor.draft().unwrap().video_urls, vec!["data:video/mp4;base64,YWJj"]);
    }

    #[test]
    fn test_attachments_without_draft_are_ignored() {
        let mut editor = AdminEditor::new(tiny_limits());
        assert!(editor.attach_cover(Path::new("/nonexistent")).is_ok());
        assert!(editor.attach_gallery(&[PathBuf::from("/nonexistent")]).is_empty());
        editor.add_video_field();
        assert!(editor.draft().is_none());
    }
}
