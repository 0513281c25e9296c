// SPDX-License-Identifier: MPL-2.0
//! Sample catalogs and log capture shared by the i18n tests.

use std::io;
use std::sync::{Arc, Mutex};

use super::catalog::LocaleCatalog;
use super::dictionary::Dictionary;
use crate::domain::locale::LocaleInfo;

/// A three-leaf toolbar dictionary whose `toolbar.save` reads `save`.
pub(crate) fn sample_dictionary(save: &str) -> Dictionary {
    let (bold, italic) = if save == "保存" {
        ("加粗", "斜体")
    } else {
        ("Bold", "Italic")
    };
    [
        ("toolbar.save", save),
        ("toolbar.bold", bold),
        ("toolbar.italic", italic),
    ]
    .into_iter()
    .collect()
}

/// `zh-CN` (default) and `en-US`, structurally identical.
pub(crate) fn sample_catalog() -> LocaleCatalog {
    LocaleCatalog::new(vec![
        (LocaleInfo::new("zh-CN", "中文"), sample_dictionary("保存")),
        (LocaleInfo::new("en-US", "English"), sample_dictionary("Save")),
    ])
    .expect("sample catalog is valid")
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("log buffer poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with a plain-text `tracing` subscriber scoped to this thread
/// and returns everything it logged.
pub(crate) fn capture_logs(f: impl FnOnce()) -> String {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .without_time()
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = buffer.0.lock().expect("log buffer poisoned").clone();
    String::from_utf8_lossy(&bytes).into_owned()
}
