//! Adapter utilities for the `toolbar-overflow` crate.
//!
//! The `toolbar-overflow` crate is UI-agnostic and focuses on the fitting math and state. This
//! crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - Resize subscriptions (observe both regions once, unobserve on teardown)
//! - Coalescing of resize notifications between frames
//! - Offline natural-width metrics for hosts without a layout engine
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod event;
mod metrics;
mod observer;

#[cfg(test)]
mod tests;

pub use controller::{Controller, ControllerOptions};
pub use event::{ResizeEvent, ResizeQueue, Rounding};
pub use metrics::CellMetrics;
pub use observer::{ResizeObserver, Subscription};
