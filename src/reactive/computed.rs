// SPDX-License-Identifier: MPL-2.0
//! Values derived from an [`Observable`].

use std::fmt;

use super::{Observable, ReadOnly, Subscription};

/// A value computed from a source observable.
///
/// The derivation runs once on creation and again on every change of the
/// source. Consumers read it or subscribe to it like any other observable,
/// but cannot write it. Dropping the `Computed` detaches it from the source.
pub struct Computed<T> {
    output: Observable<T>,
    _link: Subscription,
}

impl<T: fmt::Debug> fmt::Debug for Computed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Computed")
            .field("output", &self.output)
            .finish_non_exhaustive()
    }
}

impl<T: Clone + PartialEq + 'static> Computed<T> {
    pub fn new<S, F>(source: &Observable<S>, derive: F) -> Self
    where
        S: Clone + PartialEq + 'static,
        F: Fn(&S) -> T + 'static,
    {
        let output = Observable::new(source.with(&derive));
        let sink = output.clone();
        let link = source.subscribe(move |value| sink.set(derive(value)));
        Self {
            output,
            _link: link,
        }
    }

    #[must_use]
    pub fn get(&self) -> T {
        self.output.get()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.output.with(f)
    }

    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        self.output.subscribe(callback)
    }

    /// Bumps only when the derived value actually changes.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.output.version()
    }

    /// A cloneable read handle that stays live while this `Computed` is.
    #[must_use]
    pub fn read_only(&self) -> ReadOnly<T> {
        self.output.read_only()
    }
}
