// src/utils/template.rs

use std::{fs, path::Path};

const DEFAULT_PAGE: &str = include_str!("../../templates/index.html");

/// The index page, with `{key}` placeholders filled per request.
#[derive(Debug, Clone)]
pub struct PageTemplate {
    source: String,
}

impl Default for PageTemplate {
    fn default() -> Self {
        Self {
            source: DEFAULT_PAGE.to_string(),
        }
    }
}

impl PageTemplate {
    /// Loads a template from disk, falling back to the built-in page if it cannot be read.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(source) => {
                tracing::info!("Loaded page template from {}", path.display());
                Self { source }
            }
            Err(e) => {
                tracing::warn!(
                    "Could not read page template {}: {}; using built-in page",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn render(&self, pairs: &[(&str, &str)]) -> String {
        fill_template(&self.source, pairs)
    }
}

/// Replaces each `{key}` in the template with its value. No escaping is applied.
pub fn fill_template(tpl: &str, pairs: &[(&str, &str)]) -> String {
    let mut out = tpl.to_string();
    for (key, value) in pairs {
        out = out.replace(&format!("{{{}}}", key), value);
    }
    out
}
