// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module owns the project store, the sign-in gate and the draft
//! editor, routes between the public showcase and the operator dashboard,
//! and carries out the actions the UI components hand back.

use crate::auth::AuthGate;
use crate::config::AppConfig;
use crate::editor::{AdminEditor, SaveOutcome};
use crate::io::media::MediaError;
use crate::io::polish::{polisher_from_env, TextPolisher};
use crate::io::storage::{FileStore, KeyValueStore, MemoryStore};
use crate::models::store::{ProjectStore, StoreError};
use crate::ui::admin::{self, AdminAction, PolishState};
use crate::ui::backdrop::Backdrop;
use crate::ui::images::ImageCache;
use crate::ui::{gallery, login, project_view};
use std::rc::Rc;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;

const SAVE_FAILED: &str = "Save failed. The data might be too large for storage. \
Try using external image/video URLs.\n\nThe change is kept until the application closes.";

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Showcase,
    Login,
    Admin,
}

/// Modal message for the operator.
struct Notice {
    title: &'static str,
    message: String,
    error: bool,
}

impl Notice {
    fn info(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            title,
            message: message.into(),
            error: false,
        }
    }

    fn error(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            title,
            message: message.into(),
            error: true,
        }
    }
}

/// Main application state.
pub struct PortfolioApp {
    config: AppConfig,
    store: ProjectStore,
    auth: AuthGate,
    editor: AdminEditor,

    /// Optional description rewriting service
    polisher: Option<Arc<dyn TextPolisher>>,

    /// In-flight polish request and the draft it was started for
    polish_job: Option<(String, Receiver<anyhow::Result<String>>)>,

    backdrop: Backdrop,
    images: ImageCache,

    route: Route,

    /// Project open in the detail window
    selected: Option<String>,

    password: String,
    login_failed: bool,

    /// Project awaiting delete confirmation
    pending_delete: Option<String>,

    notice: Option<Notice>,
}

impl PortfolioApp {
    pub fn new(config: AppConfig) -> Self {
        let (backend, storage_notice) = open_backend(&config);
        let store = ProjectStore::load(backend.clone());
        log::info!("Loaded {} projects", store.len());

        Self {
            auth: AuthGate::new(backend, config.admin.password.clone()),
            editor: AdminEditor::new(config.uploads),
            polisher: polisher_from_env(&config.polish),
            polish_job: None,
            backdrop: Backdrop::new(config.background.clone()),
            images: ImageCache::new(),
            route: Route::Showcase,
            selected: None,
            password: String::new(),
            login_failed: false,
            pending_delete: None,
            notice: storage_notice,
            store,
            config,
        }
    }

    /// Go to the dashboard, or the sign-in prompt when not signed in.
    fn open_admin(&mut self) {
        self.selected = None;
        self.route = if self.auth.is_authenticated() {
            Route::Admin
        } else {
            Route::Login
        };
    }

    fn submit_login(&mut self) {
        if self.auth.login(&self.password) {
            self.password.clear();
            self.login_failed = false;
            self.route = Route::Admin;
        } else {
            self.login_failed = true;
        }
    }

    fn media_rejected(&mut self, errors: &[MediaError]) {
        if errors.is_empty() {
            return;
        }
        let mut message: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        message.push("Use a smaller file or an external URL instead.".to_string());
        self.notice = Some(Notice::error("File rejected", message.join("\n")));
    }

    fn store_failed(&mut self, error: StoreError) {
        log::error!("{}", error);
        self.notice = Some(match error {
            StoreError::Persist(_) => Notice::error("Save failed", SAVE_FAILED),
            StoreError::DuplicateId(_) => Notice::error("Save failed", error.to_string()),
        });
    }

    /// Send the draft description off for polishing on a worker thread.
    fn start_polish(&mut self) {
        let (Some(polisher), Some(draft)) = (&self.polisher, self.editor.draft()) else {
            return;
        };
        if self.polish_job.is_some() || draft.description.trim().is_empty() {
            return;
        }

        let polisher = Arc::clone(polisher);
        let text = draft.description.clone();
        let (sender, receiver) = channel();
        self.polish_job = Some((draft.id.clone(), receiver));

        std::thread::spawn(move || {
            let _ = sender.send(polisher.polish(&text));
        });
    }

    fn poll_polish(&mut self, ctx: &egui::Context) {
        if let Some((ref draft_id, ref receiver)) = self.polish_job {
            if let Ok(result) = receiver.try_recv() {
                let draft_id = draft_id.clone();
                self.polish_job = None;
                match result {
                    Ok(text) => {
                        if self.editor.apply_polished(&draft_id, text) {
                            log::info!("Description polished");
                        } else {
                            log::info!("Dropping polished text for closed draft {}", draft_id);
                        }
                    }
                    Err(e) => {
                        log::error!("Polish failed: {:#}", e);
                        self.notice = Some(Notice::error(
                            "Polish failed",
                            "AI Generation failed. Check your API Key.",
                        ));
                    }
                }
            } else {
                ctx.request_repaint();
            }
        }
    }

    fn handle_admin(&mut self, action: AdminAction) {
        match action {
            AdminAction::None => {}
            AdminAction::Logout => {
                self.auth.logout();
                self.editor.cancel();
                self.pending_delete = None;
                self.route = Route::Showcase;
            }
            AdminAction::AddNew => self.editor.begin_create(),
            AdminAction::Edit(id) => {
                if let Some(project) = self.store.get(&id) {
                    self.editor.begin_edit(project);
                }
            }
            AdminAction::RequestDelete(id) => self.pending_delete = Some(id),
            AdminAction::CancelDelete => self.pending_delete = None,
            AdminAction::ConfirmDelete(id) => {
                self.pending_delete = None;
                let result = self.store.delete(&id);
                self.editor.project_deleted(&id);
                if let Err(e) = result {
                    self.store_failed(e);
                }
            }
            AdminAction::Save => match self.editor.save(&mut self.store) {
                Ok(SaveOutcome::Incomplete) => {}
                Ok(SaveOutcome::Added) | Ok(SaveOutcome::Updated) => {
                    self.notice = Some(Notice::info("Saved", "Project saved successfully!"));
                }
                Err(e) => self.store_failed(e),
            },
            AdminAction::Cancel => self.editor.cancel(),
            AdminAction::PickCover => {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Images", &["jpg", "jpeg", "png", "gif", "webp", "bmp"])
                    .pick_file()
                {
                    if let Err(e) = self.editor.attach_cover(&path) {
                        self.media_rejected(&[e]);
                    }
                }
            }
            AdminAction::PickGallery => {
                if let Some(paths) = rfd::FileDialog::new()
                    .add_filter("Images", &["jpg", "jpeg", "png", "gif", "webp", "bmp"])
                    .pick_files()
                {
                    let rejected = self.editor.attach_gallery(&paths);
                    self.media_rejected(&rejected);
                }
            }
            AdminAction::PickVideo => {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Videos", &["mp4", "m4v", "webm", "mov", "ogv"])
                    .pick_file()
                {
                    if let Err(e) = self.editor.attach_video(&path) {
                        self.media_rejected(&[e]);
                    }
                }
            }
            AdminAction::AddVideoField => self.editor.add_video_field(),
            AdminAction::SetVideoUrl(index, url) => self.editor.set_video_url(index, url),
            AdminAction::RemoveVideo(index) => self.editor.remove_video_url(index),
            AdminAction::RemoveGalleryImage(index) => self.editor.remove_gallery_image(index),
            AdminAction::Polish => self.start_polish(),
        }
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = &self.notice else {
            return;
        };
        let mut dismissed = false;

        egui::Window::new(notice.title)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.set_max_width(420.0);
                if notice.error {
                    ui.colored_label(egui::Color32::from_rgb(220, 80, 80), &notice.message);
                } else {
                    ui.label(&notice.message);
                }
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.notice = None;
        }
    }
}

/// Open the on-disk store, falling back to memory with a warning for the
/// operator.
fn open_backend(config: &AppConfig) -> (Rc<dyn KeyValueStore>, Option<Notice>) {
    let quota = config.storage.quota_bytes;
    let opened = config
        .data_dir()
        .and_then(|dir| FileStore::open(dir, quota).map_err(anyhow::Error::from));

    match opened {
        Ok(store) => {
            log::info!("Storing projects in {}", store.root().display());
            (Rc::new(store), None)
        }
        Err(e) => {
            log::error!("{:#}. Changes will not be kept", e);
            let notice = Notice::error(
                "Storage unavailable",
                "The data directory could not be opened. Changes will be lost when the application closes.",
            );
            (Rc::new(MemoryStore::with_quota(quota)), Some(notice))
        }
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.images.poll(ctx);
        self.poll_polish(ctx);

        // The backdrop only animates on the public screens
        match self.route {
            Route::Admin => self.backdrop.stop(),
            Route::Showcase | Route::Login => self.backdrop.start(),
        }
        self.backdrop.show(ctx);

        let transparent = self.backdrop.is_running();
        let panel_frame = |margin: egui::Margin| {
            if transparent {
                egui::Frame::none().inner_margin(margin)
            } else {
                egui::Frame::central_panel(&ctx.style()).inner_margin(margin)
            }
        };

        // Header
        egui::TopBottomPanel::top("header")
            .frame(panel_frame(egui::Margin::symmetric(48.0, 14.0)))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let brand = egui::RichText::new(&self.config.site.owner)
                        .size(18.0)
                        .strong()
                        .color(egui::Color32::WHITE);
                    if ui.add(egui::Label::new(brand).sense(egui::Sense::click())).clicked()
                        && self.route != Route::Admin
                    {
                        self.route = Route::Showcase;
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        match self.route {
                            Route::Showcase => {
                                if ui.button("Director Access").clicked() {
                                    self.open_admin();
                                }
                            }
                            Route::Admin => {
                                if ui.button("View Site").clicked() {
                                    self.route = Route::Showcase;
                                }
                            }
                            Route::Login => {}
                        }
                    });
                });
            });

        match self.route {
            Route::Showcase | Route::Login => {
                egui::CentralPanel::default()
                    .frame(panel_frame(egui::Margin::symmetric(48.0, 0.0)))
                    .show(ctx, |ui| {
                        if let Some(id) =
                            gallery::show(ui, &self.config.site, self.store.projects(), &mut self.images)
                        {
                            log::debug!("Opening project {}", id);
                            self.selected = Some(id);
                        }
                    });
            }
            Route::Admin => {
                let polish = PolishState {
                    available: self.polisher.is_some(),
                    busy: self.polish_job.is_some(),
                };
                let action = egui::CentralPanel::default()
                    .frame(panel_frame(egui::Margin::symmetric(48.0, 16.0)))
                    .show(ctx, |ui| {
                        admin::show(
                            ui,
                            self.store.projects(),
                            &mut self.editor,
                            self.pending_delete.as_deref(),
                            polish,
                            &mut self.images,
                        )
                    })
                    .inner;
                self.handle_admin(action);
            }
        }

        if self.route == Route::Login {
            match login::show(ctx, &mut self.password, &mut self.login_failed) {
                login::LoginAction::Submit => self.submit_login(),
                login::LoginAction::Back => {
                    self.password.clear();
                    self.login_failed = false;
                    self.route = Route::Showcase;
                }
                login::LoginAction::None => {}
            }
        }

        if let Some(id) = self.selected.clone() {
            match self.store.get(&id) {
                Some(project) => {
                    if !project_view::show(ctx, project, &mut self.images) {
                        self.selected = None;
                    }
                }
                None => self.selected = None,
            }
        }

        self.show_notice(ctx);

        // Escape dismisses the topmost overlay
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            if self.notice.is_some() {
                self.notice = None;
            } else if self.pending_delete.is_some() {
                self.pending_delete = None;
            } else {
                self.selected = None;
            }
        }
    }
}
