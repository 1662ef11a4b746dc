// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the portfolio application.

pub mod admin;
pub mod backdrop;
pub mod gallery;
pub mod images;
pub mod login;
pub mod project_view;
