// Copyright (c) 2018-2021 Thomas Kramer.
// SPDX-FileCopyrightText: 2022 Thomas Kramer
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Error types reported by the public API.

use thiserror::Error;

/// Failure modes of tessellation construction.
///
/// All of these are detected up front; a successfully constructed
/// tessellation always runs to completion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VoronoiError {
    /// The bounding rectangle is empty or inverted on at least one axis.
    #[error("invalid bounding rectangle: x range {min_x}..{max_x}, y range {min_y}..{max_y}")]
    InvalidBounds {
        /// Lower x bound as given.
        min_x: f64,
        /// Lower y bound as given.
        min_y: f64,
        /// Upper x bound as given.
        max_x: f64,
        /// Upper y bound as given.
        max_y: f64,
    },
}
