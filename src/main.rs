// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Proscenium - theatre portfolio gallery
//!
//! A cross-platform desktop application showing a director's body of work
//! over an animated stage-light backdrop, with a password-gated editor for
//! maintaining the project collection.

mod app;
mod auth;
mod config;
mod editor;
mod io;
mod models;
mod render;
mod ui;
mod util;

use anyhow::Result;
use app::PortfolioApp;
use config::AppConfig;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = AppConfig::load();
    let title = format!("{} Portfolio", config.site.owner.trim_end_matches('.'));

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title(title),
        ..Default::default()
    };

    let app = PortfolioApp::new(config);

    // Run the application
    eframe::run_native(
        "Proscenium",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
