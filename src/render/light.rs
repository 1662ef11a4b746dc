// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drifting ambient lights.

use super::surface::Rgb;
use rand::Rng;
use std::f32::consts::TAU;

/// How far past the viewport edge a light may drift before turning back.
pub const BOUNCE_MARGIN: f32 = 400.0;

/// A slowly drifting coloured light that breathes in brightness.
#[derive(Debug, Clone, PartialEq)]
pub struct AmbientLight {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
    pub color: Rgb,
    pub phase: f32,
    pub phase_speed: f32,
}

impl AmbientLight {
    /// A light at a random spot inside `width` x `height`, coloured by
    /// `color_index` into `palette` (wrapping).
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        width: f32,
        height: f32,
        color_index: usize,
        palette: &[Rgb],
    ) -> Self {
        let color = if palette.is_empty() {
            Rgb::WHITE
        } else {
            palette[color_index % palette.len()]
        };
        Self {
            x: rng.random::<f32>() * width,
            y: rng.random::<f32>() * height,
            vx: (rng.random::<f32>() - 0.5) * 0.3,
            vy: (rng.random::<f32>() - 0.5) * 0.3,
            radius: rng.random::<f32>() * 400.0 + 300.0,
            color,
            phase: rng.random::<f32>() * TAU,
            phase_speed: 0.002 + rng.random::<f32>() * 0.005,
        }
    }

    /// Advance one frame, turning around once past the margin.
    pub fn update(&mut self, width: f32, height: f32) {
        self.x += self.vx;
        self.y += self.vy;
        self.phase += self.phase_speed;

        if self.x < -BOUNCE_MARGIN || self.x > width + BOUNCE_MARGIN {
            self.vx = -self.vx;
        }
        if self.y < -BOUNCE_MARGIN || self.y > height + BOUNCE_MARGIN {
            self.vy = -self.vy;
        }
    }

    /// Brightness multiplier in [0.6, 1.0].
    pub fn pulse(&self) -> f32 {
        0.8 + self.phase.sin() * 0.2
    }
}
