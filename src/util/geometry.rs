// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides the aspect-ratio math used to place images inside
//! cards and panels.

/// Largest size with the content's aspect ratio that fits inside `available`.
pub fn fit_within(content: (f32, f32), available: (f32, f32)) -> (f32, f32) {
    let (cw, ch) = content;
    let (aw, ah) = available;
    if cw <= 0.0 || ch <= 0.0 || aw <= 0.0 || ah <= 0.0 {
        return (0.0, 0.0);
    }

    let content_aspect = cw / ch;
    let available_aspect = aw / ah;
    if content_aspect > available_aspect {
        // Content is wider - fit to width
        (aw, aw / content_aspect)
    } else {
        // Content is taller - fit to height
        (ah * content_aspect, ah)
    }
}

/// Normalized texture coordinates (min, max) that crop the content to fill a
/// `target`-shaped area without distortion, keeping the centre.
pub fn cover_uv(content: (f32, f32), target: (f32, f32)) -> ((f32, f32), (f32, f32)) {
    let (cw, ch) = content;
    let (tw, th) = target;
    if cw <= 0.0 || ch <= 0.0 || tw <= 0.0 || th <= 0.0 {
        return ((0.0, 0.0), (1.0, 1.0));
    }

    let content_aspect = cw / ch;
    let target_aspect = tw / th;
    if content_aspect > target_aspect {
        // Too wide: trim the sides
        let visible = target_aspect / content_aspect;
        let margin = (1.0 - visible) / 2.0;
        ((margin, 0.0), (1.0 - margin, 1.0))
    } else {
        // Too tall: trim top and bottom
        let visible = content_aspect / target_aspect;
        let margin = (1.0 - visible) / 2.0;
        ((0.0, margin), (1.0, 1.0 - margin))
    }
}
