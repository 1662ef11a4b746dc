// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Public showcase: hero text, a wrapping grid of project cards, the
//! about section and the footer.

use super::images::{paint_cover, ImageCache};
use crate::config::SiteConfig;
use crate::models::project::Project;
use chrono::{Datelike, Local};

const ACCENT: egui::Color32 = egui::Color32::from_rgb(217, 119, 6);

const CARD_WIDTH: f32 = 340.0;
const CARD_HEIGHT: f32 = 220.0;

/// Display the showcase and return the id of a clicked project.
pub fn show(
    ui: &mut egui::Ui,
    site: &SiteConfig,
    projects: &[Project],
    images: &mut ImageCache,
) -> Option<String> {
    let mut opened = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            hero(ui, site);

            if projects.is_empty() {
                ui.label(egui::RichText::new("No works yet.").weak());
            } else {
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing = egui::vec2(28.0, 28.0);
                    for project in projects {
                        if card(ui, project, images).clicked() {
                            opened = Some(project.id.clone());
                        }
                    }
                });
            }

            about(ui, site);
            footer(ui, site);
        });

    opened
}

fn hero(ui: &mut egui::Ui, site: &SiteConfig) {
    ui.add_space(96.0);
    ui.label(
        egui::RichText::new(&site.name)
            .size(56.0)
            .color(egui::Color32::WHITE),
    );
    ui.label(
        egui::RichText::new(&site.headline)
            .size(56.0)
            .italics()
            .color(ACCENT),
    );
    ui.add_space(16.0);
    ui.horizontal(|ui| {
        ui.add_space(4.0);
        ui.separator();
        ui.add(
            egui::Label::new(
                egui::RichText::new(&site.tagline)
                    .size(18.0)
                    .color(egui::Color32::from_gray(200)),
            )
            .wrap(),
        );
    });
    ui.add_space(64.0);
}

fn about(ui: &mut egui::Ui, site: &SiteConfig) {
    ui.add_space(96.0);
    ui.vertical_centered(|ui| {
        ui.set_max_width(720.0);
        egui::Frame::none()
            .fill(egui::Color32::from_black_alpha(110))
            .rounding(24.0)
            .inner_margin(egui::Margin::same(40.0))
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new(&site.about_title)
                        .size(32.0)
                        .color(egui::Color32::WHITE),
                );
                ui.add_space(20.0);
                ui.label(
                    egui::RichText::new(&site.about)
                        .size(17.0)
                        .color(egui::Color32::from_gray(200)),
                );
            });
    });
}

fn footer(ui: &mut egui::Ui, site: &SiteConfig) {
    ui.add_space(64.0);
    ui.separator();
    ui.vertical_centered(|ui| {
        ui.add_space(16.0);
        ui.label(
            egui::RichText::new(site.footer(Local::now().year()).to_uppercase())
                .size(11.0)
                .color(egui::Color32::from_gray(110)),
        );
        ui.add_space(32.0);
    });
}

fn card(ui: &mut egui::Ui, project: &Project, images: &mut ImageCache) -> egui::Response {
    ui.vertical(|ui| {
        ui.set_width(CARD_WIDTH);
        let cover = paint_cover(ui, images, &project.cover_image, egui::vec2(CARD_WIDTH, CARD_HEIGHT));
        if cover.hovered() {
            ui.painter().rect_stroke(
                cover.rect,
                0.0,
                egui::Stroke::new(1.0, ACCENT),
            );
        }

        ui.add_space(6.0);
        let title = ui.add(
            egui::Label::new(
                egui::RichText::new(&project.title)
                    .size(18.0)
                    .color(egui::Color32::WHITE),
            )
            .sense(egui::Sense::click()),
        );
        ui.label(
            egui::RichText::new(format!("{}  ·  {}", project.category, project.year))
                .size(12.0)
                .color(egui::Color32::from_gray(150)),
        );
        cover.union(title)
    })
    .inner
    .on_hover_cursor(egui::CursorIcon::PointingHand)
}
