// Copyright 2026 the Hunt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entry identity.

use core::fmt;

/// A handle to an entry in a [`Registry`](super::Registry).
///
/// Ids are handed out in registration order and never reused, so a handle to
/// an evicted entry simply stops resolving.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrackedId(pub(crate) u64);

impl TrackedId {
    /// Returns the raw sequence number (for diagnostics only).
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for TrackedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrackedId({})", self.0)
    }
}
