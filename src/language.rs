use std::sync::Arc;

use crate::models::Language;
use crate::storage::{LANGUAGE_KEY, SnapshotStore};

/// Current UI language, mirrored to storage as its two-letter code.
pub struct LanguageStore {
    current: Language,
    storage: Arc<dyn SnapshotStore>,
}

impl LanguageStore {
    /// Hydrates from the `language` key; unknown codes fall back to the
    /// configured default.
    pub fn new(storage: Arc<dyn SnapshotStore>, default: Language) -> Self {
        let current = match storage.load(LANGUAGE_KEY) {
            Ok(Some(code)) => Language::from_code(code.trim()).unwrap_or_else(|| {
                tracing::warn!(code = %code.trim(), "unknown language code in storage, using default");
                default
            }),
            Ok(None) => default,
            Err(err) => {
                tracing::warn!(error = %err, "language snapshot unreadable, using default");
                default
            }
        };
        Self { current, storage }
    }

    pub fn current(&self) -> Language {
        self.current
    }

    pub fn set(&mut self, language: Language) {
        if self.current == language {
            return;
        }
        self.current = language;
        if let Err(err) = self.storage.save(LANGUAGE_KEY, language.code()) {
            tracing::warn!(error = %err, "language snapshot write failed");
        }
    }
}
