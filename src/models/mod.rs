// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Gallery data: project records, the default seed, the persisted
//! collection and video reference normalization.

pub mod embed;
pub mod project;
pub mod seed;
pub mod store;
