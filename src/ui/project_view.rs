// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Detail window for a single project.
//!
//! Shows the cover, description, every playable video, credits and the
//! gallery. Videos that cannot be embedded are listed with their reason and
//! the raw link so nothing the operator entered is hidden.

use super::images::{paint_cover, paint_fit, ImageCache};
use crate::io::media;
use crate::models::embed::{self, VideoHost};
use crate::models::project::Project;

const ACCENT: egui::Color32 = egui::Color32::from_rgb(217, 119, 6);

/// Display the project window. Returns `false` once the viewer closes it.
pub fn show(ctx: &egui::Context, project: &Project, images: &mut ImageCache) -> bool {
    let mut open = true;
    let mut close_clicked = false;

    egui::Window::new(egui::RichText::new(&project.title).size(22.0).strong())
        .id(egui::Id::new(("project_view", project.id.as_str())))
        .open(&mut open)
        .collapsible(false)
        .default_size([900.0, 680.0])
        .vscroll(true)
        .show(ctx, |ui| {
            body(ui, project, images);
            ui.add_space(12.0);
            if ui.button("Close").clicked() {
                close_clicked = true;
            }
        });

    open && !close_clicked
}

fn section(ui: &mut egui::Ui, title: &str) {
    ui.add_space(16.0);
    ui.label(egui::RichText::new(title).size(13.0).color(ACCENT));
    ui.separator();
}

fn body(ui: &mut egui::Ui, project: &Project, images: &mut ImageCache) {
    let width = ui.available_width().max(200.0);
    paint_fit(ui, images, &project.cover_image, egui::vec2(width, width * 0.5));

    ui.add_space(8.0);
    ui.label(
        egui::RichText::new(format!("{}  ·  {}", project.category, project.year))
            .color(egui::Color32::from_gray(160)),
    );

    section(ui, "ABOUT THE WORK");
    if project.description.trim().is_empty() {
        ui.label(egui::RichText::new("No description yet.").weak());
    } else {
        ui.label(&project.description);
    }

    let videos: Vec<&str> = project.videos().collect();
    if !videos.is_empty() {
        section(ui, "VIDEO");
        for (index, raw) in videos.into_iter().enumerate() {
            video_entry(ui, index, raw);
        }
    }

    if let Some(credits) = project.cast_and_crew.as_deref().filter(|c| !c.trim().is_empty()) {
        section(ui, "CAST & CREW");
        for line in credits.lines().filter(|l| !l.trim().is_empty()) {
            ui.label(line.trim());
        }
    }

    if !project.gallery_images.is_empty() {
        section(ui, "GALLERY");
        let tile = ((width - 12.0) / 2.0).max(100.0);
        egui::Grid::new(("gallery", project.id.as_str()))
            .spacing([12.0, 12.0])
            .show(ui, |ui| {
                for (i, image) in project.gallery_images.iter().enumerate() {
                    paint_cover(ui, images, image, egui::vec2(tile, tile * 0.6));
                    if i % 2 == 1 {
                        ui.end_row();
                    }
                }
            });
    }
}

fn video_entry(ui: &mut egui::Ui, index: usize, raw: &str) {
    let Some(video) = embed::normalize(raw) else {
        return;
    };

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(format!("{}.", index + 1)).weak());

        if !video.valid {
            let reason = video.error.as_deref().unwrap_or("Unrecognised video link");
            ui.colored_label(egui::Color32::from_rgb(220, 80, 80), format!("Video unavailable: {reason}"));
            ui.hyperlink_to("Open original link", raw);
            return;
        }

        if video.is_embed() {
            let label = match video.host {
                VideoHost::YouTube => "▶ Watch on YouTube",
                _ => "▶ Watch on Vimeo",
            };
            ui.hyperlink_to(label, &video.url);
        } else if media::is_data_uri(&video.url) {
            let size = media::data_uri_size(&video.url).unwrap_or(0);
            ui.label(format!("Embedded video ({:.1} MB)", size as f64 / (1024.0 * 1024.0)));
            if ui.button("Save As...").clicked() {
                save_embedded_video(&video.url, index);
            }
        } else {
            ui.hyperlink_to("▶ Play video file", &video.url);
        }
    });
}

/// Write an embedded video out to a file picked by the viewer.
fn save_embedded_video(uri: &str, index: usize) {
    let (mime, bytes) = match media::decode_data_uri(uri) {
        Ok(decoded) => decoded,
        Err(e) => {
            log::error!("Embedded video {} is unreadable: {}", index + 1, e);
            return;
        }
    };
    let extension = match mime.as_str() {
        "video/webm" => "webm",
        "video/quicktime" => "mov",
        "video/ogg" => "ogv",
        _ => "mp4",
    };

    if let Some(path) = rfd::FileDialog::new()
        .add_filter("Video", &[extension])
        .set_file_name(format!("video-{}.{}", index + 1, extension))
        .save_file()
    {
        match std::fs::write(&path, bytes) {
            Ok(()) => log::info!("Saved embedded video to {}", path.display()),
            Err(e) => log::error!("Failed to save video: {}", e),
        }
    }
}
