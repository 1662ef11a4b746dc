// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application configuration.
//!
//! Settings live in an optional `config.yaml` in the platform config
//! directory. Every field has a default, so a partial file (or none at all)
//! is fine.

use crate::io::storage::DEFAULT_QUOTA_BYTES;
use crate::render::background::BackgroundConfig;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const MIB: u64 = 1024 * 1024;

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub site: SiteConfig,
    pub background: BackgroundConfig,
    pub admin: AdminConfig,
    pub storage: StorageConfig,
    pub uploads: UploadLimits,
    pub polish: PolishConfig,
}

/// Public-facing text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Name shown in the header and window title.
    pub owner: String,
    /// Hero heading, first line.
    pub name: String,
    /// Hero heading, second line.
    pub headline: String,
    pub tagline: String,
    pub about_title: String,
    pub about: String,
    /// Holder named in the footer copyright line.
    pub copyright_holder: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: "QINGBIAO JIA.".to_string(),
            name: "Qingbiao JIA".to_string(),
            headline: "Silence & Noise".to_string(),
            tagline: "A collection of theatrical works exploring the human condition through \
                      translating embodied micro-events into minimalist, tech-mediated stage texts."
                .to_string(),
            about_title: "About the Director".to_string(),
            about: "Focused on the intersection of text and performance art. I specialise in \
                    cross-media creation and studio-based methods that combine embodied practice \
                    with low-intrusive sensing to generate reproducible artistic outcomes. My work \
                    produces both public performance and shareable research tools that bridge \
                    artistic rigour and pedagogical utility."
                .to_string(),
            copyright_holder: "Qingbiao Jia".to_string(),
        }
    }
}

impl SiteConfig {
    /// Footer line for the given year.
    pub fn footer(&self, year: i32) -> String {
        format!("© {} {}. All rights reserved.", year, self.copyright_holder)
    }
}

/// Operator sign-in settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Shared secret compared verbatim against the entered password.
    pub password: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            password: "admin".to_string(),
        }
    }
}

/// Where the gallery data is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Overrides the platform data directory.
    pub data_dir: Option<PathBuf>,
    pub quota_bytes: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            quota_bytes: DEFAULT_QUOTA_BYTES,
        }
    }
}

/// Largest media files the editor will embed, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadLimits {
    pub cover_image_bytes: u64,
    pub gallery_image_bytes: u64,
    pub video_bytes: u64,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            cover_image_bytes: 3 * MIB,
            gallery_image_bytes: 2 * MIB,
            video_bytes: 5 * MIB,
        }
    }
}

/// Description polishing service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolishConfig {
    /// Environment variable holding the API key. Polishing is off when unset.
    pub api_key_env: String,
    pub model: String,
}

impl Default for PolishConfig {
    fn default() -> Self {
        Self {
            api_key_env: "API_KEY".to_string(),
            model: "gemini-2.5-flash".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let mut config: AppConfig = serde_yaml::from_str(yaml)?;
        config.background.sanitize();
        Ok(config)
    }

    /// Read a YAML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_yaml(&yaml).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Load `config.yaml` from the platform config directory.
    ///
    /// A missing file yields the defaults; a broken one is logged and also
    /// yields the defaults.
    pub fn load() -> Self {
        let Some(path) = project_dirs().map(|dirs| dirs.config_dir().join("config.yaml")) else {
            log::warn!("No home directory found, using default configuration");
            return Self::default();
        };
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::from_file(&path) {
            Ok(config) => {
                log::info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{:#}. Using default configuration", e);
                Self::default()
            }
        }
    }

    /// Directory holding the persisted gallery data.
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.storage.data_dir {
            return Ok(dir.clone());
        }
        project_dirs()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .context("Could not determine a data directory")
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "proscenium")
}
