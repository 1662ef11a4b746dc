// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Texture cache for cover and gallery images.
//!
//! Images are fetched and decoded on background threads; finished results
//! come back over a channel and are uploaded as textures on the UI thread.

use crate::io::media::{self, LoadedImage};
use crate::util::geometry::{cover_uv, fit_within};
use std::collections::HashMap;
use std::sync::mpsc::{channel, Receiver, Sender};

type LoadResult = (String, Result<LoadedImage, String>);

enum Slot {
    Loading,
    Ready(egui::TextureHandle),
    Failed(String),
}

/// Current state of one image reference.
pub enum ImageState<'a> {
    Loading,
    Ready(&'a egui::TextureHandle),
    Failed(&'a str),
}

pub struct ImageCache {
    slots: HashMap<String, Slot>,
    sender: Sender<LoadResult>,
    receiver: Receiver<LoadResult>,
    loaded: usize,
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageCache {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self {
            slots: HashMap::new(),
            sender,
            receiver,
            loaded: 0,
        }
    }

    /// Upload images that finished loading. Call once per frame.
    pub fn poll(&mut self, ctx: &egui::Context) {
        while let Ok((key, result)) = self.receiver.try_recv() {
            let slot = match result {
                Ok(image) => {
                    let size = [image.width as usize, image.height as usize];
                    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &image.pixels);
                    self.loaded += 1;
                    let texture = ctx.load_texture(
                        format!("image-{}", self.loaded),
                        color_image,
                        egui::TextureOptions::LINEAR,
                    );
                    Slot::Ready(texture)
                }
                Err(e) => {
                    log::warn!("Failed to load image {}: {}", short(&key), e);
                    Slot::Failed(e)
                }
            };
            self.slots.insert(key, slot);
        }

        // Keep frames coming while anything is still in flight
        if self.slots.values().any(|s| matches!(s, Slot::Loading)) {
            ctx.request_repaint();
        }
    }

    /// Look up an image, starting a background load on first sight.
    pub fn get(&mut self, reference: &str) -> ImageState<'_> {
        let key = cache_key(reference);
        if !self.slots.contains_key(&key) {
            self.spawn_load(key.clone(), reference.to_string());
        }
        match self.slots.get(&key) {
            Some(Slot::Ready(texture)) => ImageState::Ready(texture),
            Some(Slot::Failed(e)) => ImageState::Failed(e),
            _ => ImageState::Loading,
        }
    }

    fn spawn_load(&mut self, key: String, reference: String) {
        self.slots.insert(key.clone(), Slot::Loading);
        let sender = self.sender.clone();
        std::thread::spawn(move || {
            let result = media::load_image(&reference).map_err(|e| e.to_string());
            let _ = sender.send((key, result));
        });
    }
}

/// Lookup key for a reference. Long `data:` URIs are reduced to their
/// length plus head and tail so lookups stay cheap every frame.
fn cache_key(reference: &str) -> String {
    const EDGE: usize = 96;
    let len = reference.len();
    if !media::is_data_uri(reference) || len <= EDGE * 2 {
        return reference.to_string();
    }
    match (reference.get(..EDGE), reference.get(len - EDGE..)) {
        (Some(head), Some(tail)) => format!("{head}..{tail}#{len}"),
        _ => reference.to_string(),
    }
}

/// Shortened reference for log lines; data URIs can be megabytes long.
fn short(reference: &str) -> String {
    if media::is_data_uri(reference) {
        let mime = reference
            .split(';')
            .next()
            .unwrap_or("data:")
            .trim_start_matches("data:");
        format!("<embedded {mime}>")
    } else {
        reference.to_string()
    }
}

/// Paint an image cropped to fill `size`, with placeholders while loading or
/// after a failure. The returned response senses clicks.
pub fn paint_cover(
    ui: &mut egui::Ui,
    images: &mut ImageCache,
    reference: &str,
    size: egui::Vec2,
) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    let painter = ui.painter();

    match images.get(reference) {
        ImageState::Ready(texture) => {
            let tex = texture.size_vec2();
            let (min, max) = cover_uv((tex.x, tex.y), (size.x, size.y));
            painter.image(
                texture.id(),
                rect,
                egui::Rect::from_min_max(egui::pos2(min.0, min.1), egui::pos2(max.0, max.1)),
                egui::Color32::WHITE,
            );
        }
        ImageState::Loading => {
            painter.rect_filled(rect, 4.0, egui::Color32::from_gray(25));
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "Loading...",
                egui::FontId::proportional(12.0),
                egui::Color32::from_gray(120),
            );
        }
        ImageState::Failed(_) => {
            painter.rect_filled(rect, 4.0, egui::Color32::from_gray(25));
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "Image unavailable",
                egui::FontId::proportional(12.0),
                egui::Color32::from_gray(120),
            );
        }
    }

    response
}

/// Paint a whole image scaled to fit inside `max`, keeping its aspect ratio.
pub fn paint_fit(ui: &mut egui::Ui, images: &mut ImageCache, reference: &str, max: egui::Vec2) {
    let size = match images.get(reference) {
        ImageState::Ready(texture) => {
            let tex = texture.size_vec2();
            let (w, h) = fit_within((tex.x, tex.y), (max.x, max.y));
            egui::vec2(w, h)
        }
        _ => max,
    };
    ui.vertical_centered(|ui| {
        paint_cover(ui, images, reference, size);
    });
}
