// SPDX-License-Identifier: MPL-2.0
//! Single-threaded reactive cells.
//!
//! - [`Observable`]: shared, version-tracked value with change notification
//! - [`ReadOnly`]: a handle onto an observable that cannot write it
//! - [`Computed`]: a value derived from an observable, recomputed on change
//! - [`Subscription`]: RAII guard that unsubscribes on drop
//!
//! # Invariants
//!
//! 1. Version increments exactly once per mutation that changes the value.
//! 2. Subscribers are notified in registration order.
//! 3. Setting a value equal to the current value is a no-op (no version bump,
//!    no notifications).
//! 4. A [`Computed`] value always equals its derivation applied to the
//!    current source value.

mod computed;
mod observable;

pub use computed::Computed;
pub use observable::{Observable, ReadOnly, Subscription};
