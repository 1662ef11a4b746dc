// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Software raster surface for the stage-light backdrop.
//!
//! A small 2D canvas: premultiplied RGBA pixels in `[0, 1]`, a current
//! compositing mode, radial-gradient discs and solid rectangles. The egui
//! layer uploads the result as a texture.

/// How drawn pixels combine with what is already on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositeMode {
    /// Ordinary alpha blending.
    #[default]
    SourceOver,
    /// Additive-style lightening: overlapping light brightens, never darkens.
    Screen,
}

/// An 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
}

/// A colour stop at `offset` (0 at the centre, 1 at the rim) with an alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub alpha: f32,
}

/// Stops used for every light: a bright core fading to nothing at the rim.
pub fn soft_light_stops(intensity: f32) -> [GradientStop; 4] {
    [
        GradientStop { offset: 0.0, alpha: intensity },
        GradientStop { offset: 0.3, alpha: intensity * 0.5 },
        GradientStop { offset: 0.7, alpha: intensity * 0.1 },
        GradientStop { offset: 1.0, alpha: 0.0 },
    ]
}

/// Alpha of a gradient at `t` (distance / radius), linearly interpolated.
pub fn gradient_alpha(stops: &[GradientStop], t: f32) -> f32 {
    let Some(first) = stops.first() else {
        return 0.0;
    };
    if t <= first.offset {
        return first.alpha;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            if span <= f32::EPSILON {
                return b.alpha;
            }
            let k = (t - a.offset) / span;
            return a.alpha + (b.alpha - a.alpha) * k;
        }
    }
    stops.last().map_or(0.0, |s| s.alpha)
}

/// RGBA raster with premultiplied alpha.
#[derive(Debug, Clone)]
pub struct Surface {
    width: usize,
    height: usize,
    pixels: Vec<[f32; 4]>,
    mode: CompositeMode,
}

impl Surface {
    /// Allocate a transparent surface. Returns `None` for a zero-sized area.
    pub fn new(width: usize, height: usize) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels: vec![[0.0; 4]; width * height],
            mode: CompositeMode::SourceOver,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn mode(&self) -> CompositeMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: CompositeMode) {
        self.mode = mode;
    }

    /// Clear to transparent black.
    pub fn clear(&mut self) {
        self.pixels.fill([0.0; 4]);
    }

    /// Premultiplied pixel at (x, y).
    pub fn pixel(&self, x: usize, y: usize) -> [f32; 4] {
        self.pixels[y * self.width + x]
    }

    /// Fill a disc with a radial gradient centred on (cx, cy).
    pub fn fill_radial(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb, stops: &[GradientStop]) {
        if radius <= 0.0 {
            return;
        }
        let Some((x0, y0, x1, y1)) = self.clip(cx - radius, cy - radius, cx + radius, cy + radius) else {
            return;
        };

        let rgb = unit_rgb(color);
        for y in y0..y1 {
            let py = y as f32 + 0.5 - cy;
            for x in x0..x1 {
                let px = x as f32 + 0.5 - cx;
                let t = (px * px + py * py).sqrt() / radius;
                if t >= 1.0 {
                    continue;
                }
                let alpha = gradient_alpha(stops, t);
                if alpha <= 0.0 {
                    continue;
                }
                self.blend(x, y, rgb, alpha);
            }
        }
    }

    /// Fill an axis-aligned rectangle with a flat colour.
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb, alpha: f32) {
        let Some((x0, y0, x1, y1)) = self.clip(x, y, x + w, y + h) else {
            return;
        };
        let rgb = unit_rgb(color);
        for py in y0..y1 {
            for px in x0..x1 {
                self.blend(px, py, rgb, alpha);
            }
        }
    }

    /// 8-bit premultiplied RGBA bytes, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|p| p.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8))
            .collect()
    }

    /// Integer pixel bounds covering [x0, x1) x [y0, y1), clipped to the surface.
    fn clip(&self, x0: f32, y0: f32, x1: f32, y1: f32) -> Option<(usize, usize, usize, usize)> {
        let left = x0.floor().max(0.0);
        let top = y0.floor().max(0.0);
        let right = x1.ceil().min(self.width as f32);
        let bottom = y1.ceil().min(self.height as f32);
        if right <= left || bottom <= top {
            return None;
        }
        Some((left as usize, top as usize, right as usize, bottom as usize))
    }

    fn blend(&mut self, x: usize, y: usize, rgb: [f32; 3], alpha: f32) {
        let alpha = alpha.clamp(0.0, 1.0);
        let src = [rgb[0] * alpha, rgb[1] * alpha, rgb[2] * alpha, alpha];
        let dst = &mut self.pixels[y * self.width + x];
        match self.mode {
            CompositeMode::SourceOver => {
                for i in 0..4 {
                    dst[i] = src[i] + dst[i] * (1.0 - alpha);
                }
            }
            // Premultiplied screen with source-over: s + d - s * d on every channel.
            CompositeMode::Screen => {
                for i in 0..4 {
                    dst[i] = src[i] + dst[i] - src[i] * dst[i];
                }
            }
        }
    }
}

fn unit_rgb(color: Rgb) -> [f32; 3] {
    [
        color.r as f32 / 255.0,
        color.g as f32 / 255.0,
        color.b as f32 / 255.0,
    ]
}
