// Copyright 2026 the Hunt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registration errors.

use core::fmt;

/// Errors from [`Hunter::register`](crate::hunter::Hunter::register) and the
/// backend entry points built on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HuntError {
    /// The targets or the configuration passed to a registration call were
    /// malformed. The payload names what was wrong.
    InvalidArgument(&'static str),
}

impl fmt::Display for HuntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(what) => write!(f, "invalid argument: {what}"),
        }
    }
}

impl core::error::Error for HuntError {}
