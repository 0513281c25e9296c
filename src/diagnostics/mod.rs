// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module: an explicit, observable record of advisory events.
//!
//! Missing translations, locale switches and preference write failures are
//! logged through `tracing` and also recorded here so hosts and tests can
//! inspect exactly what happened.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event carrying a [`DiagnosticEventKind`]
//! - [`DiagnosticsHandle`]: Shared, cheap-to-clone access to the buffer
//! - [`BufferCapacity`]: Newtype for validated buffer capacity bounds

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::DiagnosticsHandle;
pub use events::{DiagnosticEvent, DiagnosticEventKind};
