// Copyright 2026 the Hunt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracked entries, the registry that holds them, and visibility evaluation.
//!
//! A *tracked entry* pairs a [`Target`](crate::backend::Target) with the
//! configuration it was registered with and its current visibility state.
//! Each entry has:
//!
//! - An identity ([`TrackedId`]) assigned at registration and never reused.
//! - Configuration copied from the registering
//!   [`HuntConfig`](crate::config::HuntConfig): offset, persistence and the
//!   enter/leave callbacks.
//! - A `visible` flag written only by [`evaluate`](Registry::evaluate).
//!
//! The [`Registry`] keeps entries densely in registration order. Registering
//! the same target twice yields two independent entries.

mod entry;
mod evaluate;
mod id;
mod registry;

pub use entry::Tracked;
pub use evaluate::VisibilityChanges;
pub use id::TrackedId;
pub use registry::Registry;
