// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Hosts the stage-light renderer behind every panel.
//!
//! Each frame the pointer position and viewport size are fed to the
//! renderer, the finished raster is uploaded to a texture and stretched
//! across the background layer. Repaints are only requested while running.

use crate::render::background::{BackgroundConfig, BackgroundRenderer};

pub struct Backdrop {
    renderer: BackgroundRenderer,
    texture: Option<egui::TextureHandle>,
    viewport: egui::Vec2,
}

impl Backdrop {
    pub fn new(config: BackgroundConfig) -> Self {
        Self {
            renderer: BackgroundRenderer::from_entropy(config),
            texture: None,
            viewport: egui::Vec2::ZERO,
        }
    }

    pub fn start(&mut self) {
        self.renderer.start();
    }

    pub fn stop(&mut self) {
        self.renderer.stop();
    }

    pub fn is_running(&self) -> bool {
        self.renderer.is_running()
    }

    /// Advance the animation one frame and paint it behind the UI.
    pub fn show(&mut self, ctx: &egui::Context) {
        if !self.renderer.is_running() {
            return;
        }

        let screen = ctx.screen_rect();
        if screen.size() != self.viewport {
            self.viewport = screen.size();
            self.renderer.resize(screen.width(), screen.height());
        }

        if let Some(pos) = ctx.input(|i| i.pointer.latest_pos()) {
            self.renderer.set_target(pos.x - screen.min.x, pos.y - screen.min.y);
        }

        let Some(surface) = self.renderer.tick() else {
            return;
        };
        let image = egui::ColorImage::from_rgba_premultiplied(
            [surface.width(), surface.height()],
            &surface.to_rgba8(),
        );

        if let Some(texture) = &mut self.texture {
            texture.set(image, egui::TextureOptions::LINEAR);
        } else {
            self.texture = Some(ctx.load_texture("backdrop", image, egui::TextureOptions::LINEAR));
        }
        let Some(texture) = &self.texture else {
            return;
        };

        let painter = ctx.layer_painter(egui::LayerId::background());
        painter.rect_filled(screen, 0.0, egui::Color32::BLACK);
        painter.image(
            texture.id(),
            screen,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );

        ctx.request_repaint();
    }
}

impl Drop for Backdrop {
    fn drop(&mut self) {
        self.renderer.stop();
    }
}
