// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Operator dashboard: project list and the draft editing form.
//!
//! Plain field edits write straight into the draft. Anything that touches
//! the store, the file system or the network is returned as an action for
//! the application to carry out.

use super::images::{paint_cover, ImageCache};
use crate::editor::AdminEditor;
use crate::io::media;
use crate::models::embed;
use crate::models::project::Project;

/// Result of dashboard interaction.
pub enum AdminAction {
    None,
    Logout,
    AddNew,
    Edit(String),
    RequestDelete(String),
    ConfirmDelete(String),
    CancelDelete,
    Save,
    Cancel,
    PickCover,
    PickGallery,
    PickVideo,
    AddVideoField,
    SetVideoUrl(usize, String),
    RemoveVideo(usize),
    RemoveGalleryImage(usize),
    Polish,
}

/// Whether description polishing can be offered right now.
#[derive(Debug, Clone, Copy)]
pub struct PolishState {
    pub available: bool,
    pub busy: bool,
}

const DANGER: egui::Color32 = egui::Color32::from_rgb(220, 80, 80);

/// Display the dashboard.
pub fn show(
    ui: &mut egui::Ui,
    projects: &[Project],
    editor: &mut AdminEditor,
    pending_delete: Option<&str>,
    polish: PolishState,
    images: &mut ImageCache,
) -> AdminAction {
    let mut action = AdminAction::None;

    ui.horizontal(|ui| {
        ui.heading("Dashboard");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Logout").clicked() {
                action = AdminAction::Logout;
            }
        });
    });
    ui.separator();

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            let form_action = if editor.is_editing() {
                form(ui, editor, polish, images)
            } else {
                list(ui, projects, images)
            };
            if !matches!(form_action, AdminAction::None) {
                action = form_action;
            }
        });

    if let Some(id) = pending_delete {
        let confirm = confirm_delete(ui.ctx(), id, projects);
        if !matches!(confirm, AdminAction::None) {
            action = confirm;
        }
    }

    action
}

fn list(ui: &mut egui::Ui, projects: &[Project], images: &mut ImageCache) -> AdminAction {
    let mut action = AdminAction::None;

    if ui.button("➕ Add New Project").clicked() {
        action = AdminAction::AddNew;
    }
    ui.add_space(8.0);

    if projects.is_empty() {
        ui.label(egui::RichText::new("No projects.").weak());
    }

    for project in projects {
        ui.horizontal(|ui| {
            paint_cover(ui, images, &project.cover_image, egui::vec2(96.0, 60.0));
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&project.title).strong());
                ui.label(
                    egui::RichText::new(format!("{} · {}", project.category, project.year)).weak(),
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(egui::RichText::new("Delete").color(DANGER)).clicked() {
                    action = AdminAction::RequestDelete(project.id.clone());
                }
                if ui.button("Edit").clicked() {
                    action = AdminAction::Edit(project.id.clone());
                }
            });
        });
        ui.separator();
    }

    action
}

fn confirm_delete(ctx: &egui::Context, id: &str, projects: &[Project]) -> AdminAction {
    let mut action = AdminAction::None;
    let title = projects
        .iter()
        .find(|p| p.id == id)
        .map(|p| p.title.as_str())
        .unwrap_or("this project");

    egui::Window::new("Delete Project")
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(format!("Are you sure you want to delete \"{title}\"?"));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button(egui::RichText::new("Delete").color(DANGER)).clicked() {
                    action = AdminAction::ConfirmDelete(id.to_string());
                }
                if ui.button("Cancel").clicked() {
                    action = AdminAction::CancelDelete;
                }
            });
        });

    action
}

fn form(
    ui: &mut egui::Ui,
    editor: &mut AdminEditor,
    polish: PolishState,
    images: &mut ImageCache,
) -> AdminAction {
    let mut action = AdminAction::None;
    let Some(draft) = editor.draft_mut() else {
        return action;
    };

    egui::Grid::new("draft_fields")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label("Title");
            ui.add(egui::TextEdit::singleline(&mut draft.title).desired_width(420.0));
            ui.end_row();

            ui.label("Category");
            ui.add(egui::TextEdit::singleline(&mut draft.category).desired_width(420.0));
            ui.end_row();

            ui.label("Year");
            ui.add(egui::TextEdit::singleline(&mut draft.year).desired_width(120.0));
            ui.end_row();
        });

    // Description
    ui.add_space(12.0);
    ui.horizontal(|ui| {
        ui.label("Description");
        if polish.available {
            if polish.busy {
                ui.spinner();
                ui.label(egui::RichText::new("Polishing...").weak());
            } else {
                let enabled = !draft.description.trim().is_empty();
                if ui.add_enabled(enabled, egui::Button::new("✨ Polish")).clicked() {
                    action = AdminAction::Polish;
                }
            }
        }
    });
    ui.add_enabled(
        !polish.busy,
        egui::TextEdit::multiline(&mut draft.description)
            .desired_rows(5)
            .desired_width(f32::INFINITY),
    );

    // Credits
    ui.add_space(12.0);
    ui.label("Cast & Crew");
    ui.add(
        egui::TextEdit::multiline(draft.cast_and_crew.get_or_insert_with(String::new))
            .hint_text("One credit per line")
            .desired_rows(4)
            .desired_width(f32::INFINITY),
    );

    // Cover
    ui.add_space(12.0);
    ui.label("Cover Image");
    ui.horizontal(|ui| {
        paint_cover(ui, images, &draft.cover_image, egui::vec2(160.0, 100.0));
        ui.vertical(|ui| {
            if ui.button("Upload Cover...").clicked() {
                action = AdminAction::PickCover;
            }
            if media::is_data_uri(&draft.cover_image) {
                ui.label(egui::RichText::new("Embedded image").weak());
            } else {
                ui.add(
                    egui::TextEdit::singleline(&mut draft.cover_image)
                        .hint_text("Image URL")
                        .desired_width(360.0),
                );
            }
        });
    });

    // Gallery
    ui.add_space(12.0);
    ui.label(format!("Gallery ({})", draft.gallery_images.len()));
    ui.horizontal_wrapped(|ui| {
        for (i, image) in draft.gallery_images.iter().enumerate() {
            ui.vertical(|ui| {
                paint_cover(ui, images, image, egui::vec2(96.0, 60.0));
                if ui.small_button("Remove").clicked() {
                    action = AdminAction::RemoveGalleryImage(i);
                }
            });
        }
        if ui.button("Add Images...").clicked() {
            action = AdminAction::PickGallery;
        }
    });

    // Videos
    ui.add_space(12.0);
    ui.label("Videos");
    for (i, url) in draft.video_urls.iter().enumerate() {
        ui.horizontal(|ui| {
            if media::is_data_uri(url) {
                let size = media::data_uri_size(url).unwrap_or(0);
                ui.label(format!("Embedded video file ({:.1} MB)", size as f64 / (1024.0 * 1024.0)));
            } else {
                let mut value = url.clone();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut value)
                        .hint_text("YouTube, Vimeo or video file URL")
                        .desired_width(420.0),
                );
                if response.changed() {
                    action = AdminAction::SetVideoUrl(i, value);
                }
            }
            if ui.small_button("✖").on_hover_text("Remove video").clicked() {
                action = AdminAction::RemoveVideo(i);
            }
        });
        if let Some(reason) = embed::normalize(url).and_then(|v| v.error) {
            ui.colored_label(DANGER, reason);
        }
    }
    ui.horizontal(|ui| {
        if ui.button("Add Video Link").clicked() {
            action = AdminAction::AddVideoField;
        }
        if ui.button("Upload Video...").clicked() {
            action = AdminAction::PickVideo;
        }
    });

    ui.add_space(16.0);
    ui.separator();
    ui.horizontal(|ui| {
        if ui.button("Save").clicked() {
            action = AdminAction::Save;
        }
        if ui.button("Cancel").clicked() {
            action = AdminAction::Cancel;
        }
    });

    action
}
