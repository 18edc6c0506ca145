//! A headless responsive-toolbar overflow engine.
//!
//! For adapter-level utilities (resize subscriptions, event coalescing, offline metrics), see the
//! `toolbar-overflow-adapter` crate.
//!
//! Given an ordered collection of items and a container of variable width, the engine decides
//! how many items fit into the visible row and routes the rest to an overflow trigger. It keeps
//! an externally selected "active" item visible even when it would otherwise overflow.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the container's available width (and resize notifications)
//! - natural (unconstrained) widths of items and of the closed trigger
//! - rendering of items and of the trigger
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod active;
mod fit;
mod options;
mod partition;
mod render;
mod shadow;
mod toolbar;
mod trigger;
mod types;


pub use active::ActiveIndexState;
pub use fit::{compute_fit_count, compute_fit_count_with_total};
pub use options::{OnChangeCallback, ToolbarOptions};
pub use partition::{Partition, fill_priority_order, priority_order};
pub use render::{OverflowView, ToolbarRenderer};
pub use shadow::{MeasureNatural, WidthTable};
pub use toolbar::ResponsiveToolbar;
pub use trigger::RecalcTrigger;
pub use types::{MissingMeasurement, RecalcOutcome, Region, TriggerProps};
