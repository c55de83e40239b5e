// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Failure results.
//!
//! Degenerate geometry and "no event" outcomes are ordinary return values
//! (`Option`, non-finite deltas, [`RiseSetEvent`](crate::RiseSetEvent));
//! only an exhausted rise/set search is an error.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    #[error("no rise or set found within {iterations} days")]
    Exhausted { iterations: u32 },
}
