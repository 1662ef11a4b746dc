// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations: local persistence, media files and remote services.

pub mod media;
pub mod polish;
pub mod storage;
