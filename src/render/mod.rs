// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Software rendering for the animated backdrop.

pub mod background;
pub mod light;
pub mod surface;
