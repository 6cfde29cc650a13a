#![forbid(unsafe_code)]
//! Deterministic sequence normalization for waveform bar displays, plus
//! membership diff and grouping utilities for list reconciliation.
//!
//! `wavebars` fits variable-length amplitude data into an exact number of
//! visual bars by stride-sampling and value-replication — never by averaging
//! or interpolation, so every bar is a value that actually occurred in the
//! input. Alongside the resampler it carries the generic sequence utilities
//! its callers need: membership-based diffing for deciding whether a list
//! changed, and key-derived grouping with caller-controlled flattening order.
//!
//! Everything is a pure, synchronous function over slices; nothing mutates
//! its arguments and nothing is retained across calls.
//!
//! # Quick Start
//!
//! ```
//! // Fit a waveform of arbitrary length into exactly 64 bars.
//! let amplitudes: Vec<f32> = (0..44100)
//!     .map(|i| (2.0 * std::f32::consts::PI * 440.0 * i as f32 / 44100.0).sin().abs())
//!     .collect();
//!
//! let bars = wavebars::resample(&amplitudes, 64)?;
//! assert_eq!(bars.len(), 64);
//! # Ok::<(), wavebars::SequenceError>(())
//! ```
//!
//! # Reconciliation
//!
//! ```
//! let previous = vec!["intro", "drop", "outro"];
//! let next = vec!["intro", "breakdown", "drop"];
//!
//! if wavebars::has_diff(&previous, &next) {
//!     let d = wavebars::diff(&previous, &next);
//!     assert_eq!(d.added, vec!["breakdown"]);
//!     assert_eq!(d.removed, vec!["outro"]);
//! }
//! ```

pub mod error;
pub mod grouping;
pub mod resample;
pub mod set;

pub use error::SequenceError;
pub use grouping::{group_by, order_by, Grouping};
pub use resample::{fast_clone, resample, seed, trim_or_fill};
pub use set::{diff, has_diff, has_order_change, merge, union, Diff};
