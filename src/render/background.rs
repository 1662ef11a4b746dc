// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Stage-light backdrop animation.
//!
//! The renderer owns a set of drifting ambient lights and a spotlight that
//! eases toward the pointer. Each tick clears the surface, adds every light
//! with screen compositing, then scatters a few film-grain dots on top.
//!
//! Coordinates are logical viewport units. The raster itself is allocated at
//! `render_scale` times the viewport and is upscaled for display.

use super::light::AmbientLight;
use super::surface::{soft_light_stops, CompositeMode, Rgb, Surface};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Spotlight halo: large, faint, warm white.
const HALO_RADIUS: f32 = 700.0;
const HALO_COLOR: Rgb = Rgb::new(255, 220, 180);
const HALO_INTENSITY: f32 = 0.12;

/// Spotlight core: small, brighter, pure white.
const CORE_RADIUS: f32 = 120.0;
const CORE_INTENSITY: f32 = 0.15;

/// Peak opacity of an ambient light before its pulse is applied.
const AMBIENT_INTENSITY: f32 = 0.25;

/// Backdrop tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    /// Fraction of the remaining distance the spotlight covers each frame.
    /// Smaller values feel heavier.
    pub follow_ease: f32,
    pub ambient_light_count: usize,
    /// Film grain opacity, 0-255.
    pub noise_intensity: u8,
    pub noise_dots: usize,
    /// Raster resolution relative to the viewport.
    pub render_scale: f32,
    pub palette: Vec<Rgb>,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            follow_ease: 0.05,
            ambient_light_count: 4,
            noise_intensity: 18,
            noise_dots: 200,
            render_scale: 0.25,
            palette: vec![
                Rgb::new(217, 119, 6),  // amber
                Rgb::new(0, 120, 150),  // deep cyan
                Rgb::new(180, 20, 60),  // velvet red
                Rgb::new(80, 50, 120),  // muted purple
            ],
        }
    }
}

impl BackgroundConfig {
    /// Pull out-of-range values back into range.
    pub fn sanitize(&mut self) {
        if !(self.follow_ease > 0.0 && self.follow_ease <= 1.0) {
            let clamped = if self.follow_ease > 1.0 { 1.0 } else { 0.01 };
            log::warn!(
                "follow_ease {} outside (0, 1], using {}",
                self.follow_ease,
                clamped
            );
            self.follow_ease = clamped;
        }
        if !(self.render_scale > 0.0 && self.render_scale <= 1.0) {
            log::warn!("render_scale {} outside (0, 1], using 0.25", self.render_scale);
            self.render_scale = 0.25;
        }
    }
}

/// A point in logical viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The animated backdrop.
///
/// Generic over the random source so tests can seed it.
pub struct BackgroundRenderer<R: Rng = StdRng> {
    config: BackgroundConfig,
    rng: R,
    surface: Option<Surface>,
    width: f32,
    height: f32,
    lights: Vec<AmbientLight>,
    current: Point,
    target: Point,
    centred: bool,
    running: bool,
}

impl BackgroundRenderer<StdRng> {
    /// A renderer seeded from the operating system.
    pub fn from_entropy(config: BackgroundConfig) -> Self {
        Self::new(config, StdRng::from_os_rng())
    }
}

impl<R: Rng> BackgroundRenderer<R> {
    /// Create an idle renderer with no surface. Call [`resize`](Self::resize)
    /// and [`start`](Self::start) before ticking.
    pub fn new(mut config: BackgroundConfig, rng: R) -> Self {
        config.sanitize();
        Self {
            config,
            rng,
            surface: None,
            width: 0.0,
            height: 0.0,
            lights: Vec::new(),
            current: Point::default(),
            target: Point::default(),
            centred: false,
            running: false,
        }
    }

    pub fn config(&self) -> &BackgroundConfig {
        &self.config
    }

    pub fn lights(&self) -> &[AmbientLight] {
        &self.lights
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Eased spotlight position.
    pub fn spotlight(&self) -> Point {
        self.current
    }

    pub fn target(&self) -> Point {
        self.target
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Begin animating.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        log::debug!("Backdrop started");
        self.running = true;
    }

    /// Stop animating. [`tick`](Self::tick) does nothing until restarted.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        log::debug!("Backdrop stopped");
        self.running = false;
    }

    /// Pointer moved: the spotlight will ease toward this point.
    pub fn set_target(&mut self, x: f32, y: f32) {
        self.target = Point::new(x, y);
    }

    /// Reallocate the raster for a new viewport and scatter fresh lights.
    ///
    /// A zero-sized viewport leaves the renderer without a surface; ticks
    /// are then no-ops.
    pub fn resize(&mut self, width: f32, height: f32) {
        let scale = self.config.render_scale;
        let raster_w = (width * scale).round().max(0.0) as usize;
        let raster_h = (height * scale).round().max(0.0) as usize;

        self.surface = Surface::new(raster_w, raster_h);
        if self.surface.is_none() {
            log::warn!("No drawing surface for a {}x{} viewport", width, height);
            self.width = 0.0;
            self.height = 0.0;
            self.lights.clear();
            return;
        }

        self.width = width;
        self.height = height;
        // The spotlight starts at the centre of the first usable viewport.
        if !self.centred {
            let centre = Point::new(width / 2.0, height / 2.0);
            self.current = centre;
            self.target = centre;
            self.centred = true;
        }

        self.lights.clear();
        for i in 0..self.config.ambient_light_count {
            let light = AmbientLight::new(&mut self.rng, width, height, i, &self.config.palette);
            self.lights.push(light);
        }
        log::debug!(
            "Backdrop resized to {}x{} (raster {}x{}), {} lights",
            width,
            height,
            raster_w,
            raster_h,
            self.lights.len()
        );
    }

    /// Draw one frame. Returns the finished surface, or `None` when stopped
    /// or without a surface.
    pub fn tick(&mut self) -> Option<&Surface> {
        if !self.running {
            return None;
        }
        let surface = self.surface.as_mut()?;
        let scale = self.config.render_scale;

        surface.clear();
        surface.set_mode(CompositeMode::Screen);

        let ease = self.config.follow_ease;
        self.current.x += (self.target.x - self.current.x) * ease;
        self.current.y += (self.target.y - self.current.y) * ease;

        for light in &mut self.lights {
            light.update(self.width, self.height);
            let intensity = AMBIENT_INTENSITY * light.pulse();
            surface.fill_radial(
                light.x * scale,
                light.y * scale,
                light.radius * scale,
                light.color,
                &soft_light_stops(intensity),
            );
        }

        let (sx, sy) = (self.current.x * scale, self.current.y * scale);
        surface.fill_radial(sx, sy, HALO_RADIUS * scale, HALO_COLOR, &soft_light_stops(HALO_INTENSITY));
        surface.fill_radial(sx, sy, CORE_RADIUS * scale, Rgb::WHITE, &soft_light_stops(CORE_INTENSITY));

        surface.set_mode(CompositeMode::SourceOver);
        let grain = self.config.noise_intensity as f32 / 255.0;
        let (w, h) = (surface.width() as f32, surface.height() as f32);
        for _ in 0..self.config.noise_dots {
            let x = (self.rng.random::<f32>() * w).floor();
            let y = (self.rng.random::<f32>() * h).floor();
            surface.fill_rect(x, y, 1.0, 1.0, Rgb::WHITE, grain);
        }

        Some(&*surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer(seed: u64) -> BackgroundRenderer {
        BackgroundRenderer::new(BackgroundConfig::default(), StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_tick_without_surface_or_start_does_nothing() {
        let mut r = renderer(1);
        r.start();
        assert!(r.tick().is_none());

        let mut r = renderer(1);
        r.resize(400.0, 300.0);
        assert!(r.tick().is_none(), "not started yet");
    }

    /// Raster coordinates and alpha of every pixel the frame touched.
    fn lit_pixels(surface: &Surface) -> Vec<(usize, usize, [f32; 4])> {
        let mut lit = Vec::new();
        for y in 0..surface.height() {
            for x in 0..surface.width() {
                let p = surface.pixel(x, y);
                if p[3] > 0.0 {
                    lit.push((x, y, p));
                }
            }
        }
        lit
    }

    #[test]
    fn test_grain_scatters_faint_white_dots_each_frame() {
        let config = BackgroundConfig {
            ambient_light_count: 0,
            follow_ease: 1.0,
            ..BackgroundConfig::default()
        };
        let dots = config.noise_dots;
        let grain = config.noise_intensity as f32 / 255.0;
        let mut r = BackgroundRenderer::new(config, StdRng::seed_from_u64(11));
        r.resize(2000.0, 2000.0);
        // Park the spotlight far off the surface so only grain remains
        r.set_target(-5000.0, -5000.0);
        r.start();

        let first = lit_pixels(r.tick().unwrap());
        let second = lit_pixels(r.tick().unwrap());

        for frame in [&first, &second] {
            assert!(!frame.is_empty());
            assert!(frame.len() <= dots);
            let mut exact = 0;
            for (_, _, p) in frame.iter() {
                // White, premultiplied: colour channels track alpha
                assert!((p[0] - p[3]).abs() < 1e-5);
                assert!(p[3] >= grain - 1e-5);
                if (p[3] - grain).abs() < 1e-5 {
                    exact += 1;
                }
            }
            // Overlapping dots are rare on a 500x500 raster
            assert!(exact * 10 >= frame.len() * 9);
        }

        let positions = |frame: &[(usize, usize, [f32; 4])]| -> Vec<(usize, usize)> {
            frame.iter().map(|&(x, y, _)| (x, y)).collect()
        };
        assert_ne!(positions(&first), positions(&second));
    }

    #[test]
    fn test_resize_regenerates_lights_within_bounds() {
        let mut r = renderer(2);
        r.resize(1280.0, 720.0);
        assert_eq!(r.lights().len(), 4);

        let before = r.lights().to_vec();
        r.resize(640.0, 480.0);
        assert_eq!(r.lights().len(), r.config().ambient_light_count);
        assert_ne!(r.lights(), before.as_slice());
        for light in r.lights() {
            assert!((0.0..=640.0).contains(&light.x));
            assert!((0.0..=480.0).contains(&light.y));
        }

        let surface = r.surface().unwrap();
        assert_eq!((surface.width(), surface.height()), (160, 120));
    }

    #[test]
    fn test_zero_viewport_leaves_renderer_inert() {
        let mut r = renderer(3);
        r.resize(0.0, 0.0);
        r.start();
        assert!(r.surface().is_none());
        assert!(r.lights().is_empty());
        assert!(r.tick().is_none());
    }

    #[test]
    fn test_spotlight_eases_toward_target() {
        let mut r = renderer(4);
        r.resize(400.0, 400.0);
        r.start();
        assert_eq!(r.spotlight(), Point::new(200.0, 200.0));

        r.set_target(300.0, 100.0);
        r.tick();
        let p = r.spotlight();
        assert!((p.x - 205.0).abs() < 1e-4);
        assert!((p.y - 195.0).abs() < 1e-4);

        for _ in 0..500 {
            r.tick();
        }
        let p = r.spotlight();
        assert!((p.x - 300.0).abs() < 0.01);
        assert!((p.y - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_resize_keeps_pointer_after_first_allocation() {
        let mut r = renderer(5);
        r.resize(400.0, 400.0);
        r.set_target(10.0, 10.0);
        r.resize(800.0, 800.0);
        assert_eq!(r.target(), Point::new(10.0, 10.0));
        assert_eq!(r.spotlight(), Point::new(200.0, 200.0));
    }

    #[test]
    fn test_frame_lights_centre_and_restores_mode() {
        let mut r = renderer(6);
        r.resize(400.0, 400.0);
        r.start();
        let surface = r.tick().unwrap();

        assert_eq!(surface.mode(), CompositeMode::SourceOver);
        // The spotlight sits at the centre at first
        let centre = surface.pixel(50, 50);
        assert!(centre[3] > 0.2, "centre alpha {}", centre[3]);
    }

    #[test]
    fn test_ticks_advance_lights() {
        let mut r = renderer(7);
        r.resize(400.0, 400.0);
        r.start();
        let before = r.lights()[0].clone();
        r.tick();
        let after = &r.lights()[0];
        assert!((after.x - (before.x + before.vx)).abs() < 1e-4);
        assert!((after.phase - (before.phase + before.phase_speed)).abs() < 1e-6);
    }

    #[test]
    fn test_same_seed_same_frame() {
        let frame = |seed| {
            let mut r = renderer(seed);
            r.resize(200.0, 120.0);
            r.start();
            r.tick();
            r.tick().unwrap().to_rgba8()
        };
        assert_eq!(frame(9), frame(9));
    }

    #[test]
    fn test_stop_halts_ticks() {
        let mut r = renderer(8);
        r.resize(200.0, 200.0);
        r.start();
        assert!(r.tick().is_some());
        r.stop();
        assert!(!r.is_running());
        assert!(r.tick().is_none());
        r.start();
        assert!(r.tick().is_some());
    }
}
