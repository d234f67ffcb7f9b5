//! Translation catalog backed by embedded JSON locale files.
//!
//! Locale files hold nested objects; they are flattened into dotted keys at
//! load time so lookups match the key convention used by schemas
//! (`validation.sample.nameRequired`). The catalog is built once and
//! read-only afterwards, so concurrent readers need no locking.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde_json::Value;

use keel_core::i18n::{Language, Translator};

static CATALOG: LazyLock<JsonCatalog> = LazyLock::new(JsonCatalog::load);

/// Flattened per-language translation tables.
pub struct JsonCatalog {
    tables: HashMap<Language, HashMap<String, String>>,
}

impl JsonCatalog {
    /// The process-wide catalog, built on first use from the embedded
    /// locale files.
    pub fn global() -> &'static JsonCatalog {
        &CATALOG
    }

    fn load() -> Self {
        let mut tables = HashMap::new();
        for (lang, source) in [
            (Language::En, include_str!("../../locales/en.json")),
            (Language::Tr, include_str!("../../locales/tr.json")),
        ] {
            match serde_json::from_str::<Value>(source) {
                Ok(root) => {
                    let mut table = HashMap::new();
                    flatten(&root, String::new(), &mut table);
                    tables.insert(lang, table);
                }
                Err(err) => {
                    tracing::error!("Invalid locale file for {}: {}", lang.code(), err);
                    tables.insert(lang, HashMap::new());
                }
            }
        }
        Self { tables }
    }
}

impl Translator for JsonCatalog {
    fn translate(&self, key: &str, lang: Language) -> Option<String> {
        self.tables.get(&lang)?.get(key).cloned()
    }
}

/// Flatten nested objects into dotted keys; leaf strings become entries,
/// anything else is skipped.
fn flatten(value: &Value, prefix: String, table: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (name, child) in map {
                let key = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{prefix}.{name}")
                };
                flatten(child, key, table);
            }
        }
        Value::String(text) if !prefix.is_empty() => {
            table.insert(prefix, text.clone());
        }
        _ => {}
    }
}
