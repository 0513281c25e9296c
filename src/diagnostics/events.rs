// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for the localization core.
//!
//! Every event here is advisory. None of them signal a failure the host
//! has to handle.

use std::time::Instant;

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock)
    pub timestamp: Instant,
    /// The type and data of the event
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEventKind {
    /// A key path did not resolve to a string; the key itself was displayed.
    MissingTranslation {
        /// The key path exactly as the caller passed it.
        key_path: String,
    },

    /// The active locale changed through an explicit switch.
    LocaleChanged { from: String, to: String },

    /// The chosen locale could not be saved. The next start falls back
    /// through the resolution chain.
    PreferenceWriteFailed { message: String },
}

impl DiagnosticEventKind {
    /// Short stable identifier, handy for filtering.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DiagnosticEventKind::MissingTranslation { .. } => "missing_translation",
            DiagnosticEventKind::LocaleChanged { .. } => "locale_changed",
            DiagnosticEventKind::PreferenceWriteFailed { .. } => "preference_write_failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_event_keeps_kind() {
        let kind = DiagnosticEventKind::MissingTranslation {
            key_path: "toolbar.nope".into(),
        };
        let event = DiagnosticEvent::new(kind.clone());
        assert_eq!(event.kind, kind);
    }

    #[test]
    fn kind_names_are_distinct() {
        let names = [
            DiagnosticEventKind::MissingTranslation {
                key_path: String::new(),
            }
            .name(),
            DiagnosticEventKind::LocaleChanged {
                from: String::new(),
                to: String::new(),
            }
            .name(),
            DiagnosticEventKind::PreferenceWriteFailed {
                message: String::new(),
            }
            .name(),
        ];
        assert_ne!(names[0], names[1]);
        assert_ne!(names[1], names[2]);
        assert_ne!(names[0], names[2]);
    }
}
