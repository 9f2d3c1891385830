// Copyright 2026 the Hunt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-visibility tracking core.
//!
//! `hunt_core` detects when registered targets enter or leave the viewport
//! and invokes per-target callbacks on each transition. It is `no_std`
//! compatible (with `alloc`) and knows nothing about a particular platform:
//! geometry and frame scheduling come from the [`Target`](backend::Target)
//! and [`FrameHost`](backend::FrameHost) traits.
//!
//! # Architecture
//!
//! ```text
//!   register(targets, config) ──► Registry ──► evaluate()
//!                                                 ▲
//!   scroll ──► DebounceScheduler ──► frame ───────┘
//!   resize ──► Viewport
//! ```
//!
//! **[`tracked`]**: The registry of [`Tracked`](tracked::Tracked) entries and
//! the visibility evaluator that fires enter/leave callbacks and evicts
//! non-persistent entries after they leave.
//!
//! **[`scheduler`]**: Single-slot frame scheduler that coalesces scroll
//! bursts into one evaluation once scrolling has been quiet for the
//! configured debounce threshold.
//!
//! **[`hunter`]**: [`Hunter`](hunter::Hunter), the service object that owns
//! the registry, viewport and scheduler and exposes the registration entry
//! point.
//!
//! **[`backend`]**: Host contract traits implemented by platform crates.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types,
//! with the zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod config;
pub mod error;
pub mod hunter;
pub mod scheduler;
pub mod time;
pub mod trace;
pub mod tracked;
pub mod viewport;

#[cfg(test)]
mod testing;

pub use error::HuntError;
pub use hunter::Hunter;
