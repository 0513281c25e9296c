// SPDX-License-Identifier: MPL-2.0
//! Shared handle onto the diagnostic event buffer.
//!
//! Everything in the localization core runs on the UI thread, so the buffer
//! lives behind `Rc<RefCell<..>>` and every clone of the handle sees the
//! same events.

use std::cell::RefCell;
use std::rc::Rc;

use super::{BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind};

/// Handle for recording and inspecting diagnostic events.
///
/// Cheap to clone; all clones share one bounded buffer.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    buffer: Rc<RefCell<CircularBuffer<DiagnosticEvent>>>,
}

impl DiagnosticsHandle {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            buffer: Rc::new(RefCell::new(CircularBuffer::new(capacity))),
        }
    }

    /// Records a lookup whose key path did not reach a string leaf.
    pub fn log_missing_translation(&self, key_path: &str) {
        self.record(DiagnosticEventKind::MissingTranslation {
            key_path: key_path.to_owned(),
        });
    }

    pub fn log_locale_changed(&self, from: &str, to: &str) {
        self.record(DiagnosticEventKind::LocaleChanged {
            from: from.to_owned(),
            to: to.to_owned(),
        });
    }

    pub fn log_preference_write_failed(&self, message: impl Into<String>) {
        self.record(DiagnosticEventKind::PreferenceWriteFailed {
            message: message.into(),
        });
    }

    pub fn record(&self, kind: DiagnosticEventKind) {
        self.buffer.borrow_mut().push(DiagnosticEvent::new(kind));
    }

    /// Snapshot of the retained events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.buffer.borrow().iter().cloned().collect()
    }

    /// Retained event kinds, oldest first.
    #[must_use]
    pub fn kinds(&self) -> Vec<DiagnosticEventKind> {
        self.buffer.borrow().iter().map(|e| e.kind.clone()).collect()
    }

    /// Key paths of retained missing-translation events, oldest first.
    #[must_use]
    pub fn missing_keys(&self) -> Vec<String> {
        self.buffer
            .borrow()
            .iter()
            .filter_map(|e| match &e.kind {
                DiagnosticEventKind::MissingTranslation { key_path } => Some(key_path.clone()),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.borrow().is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.borrow().capacity()
    }

    pub fn clear(&self) {
        self.buffer.borrow_mut().clear();
    }
}

impl Default for DiagnosticsHandle {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}
