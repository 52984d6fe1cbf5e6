//! Static pre-render of the landing page.
//!
//! Resolves [`PageMeta`] from defaults, an optional JSON file and individual
//! overrides, renders the document with [`storefront::render_page`] and writes
//! it to disk.

pub mod error;

use error::{RenderError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use storefront::types::PageMeta;

/// Field-level overrides applied on top of the loaded metadata.
#[derive(Clone, Debug, Default)]
pub struct MetaOverrides {
    pub title: Option<String>,
    pub description: Option<String>,
    pub lang: Option<String>,
}

impl MetaOverrides {
    pub fn apply(self, meta: &mut PageMeta) {
        if let Some(title) = self.title {
            meta.title = title;
        }
        if let Some(description) = self.description {
            meta.description = description;
        }
        if let Some(lang) = self.lang {
            meta.lang = lang;
        }
    }
}

/// Read a `PageMeta` JSON file; absent fields keep their defaults.
pub fn load_meta(path: &Path) -> Result<PageMeta> {
    let raw = fs::read_to_string(path).map_err(|source| RenderError::ReadMeta {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| RenderError::ParseMeta {
        path: path.to_path_buf(),
        source,
    })
}

/// Defaults, then the file at `meta_path` (if any), then `overrides`.
pub fn resolve_meta(meta_path: Option<&Path>, overrides: MetaOverrides) -> Result<PageMeta> {
    let mut meta = match meta_path {
        Some(path) => load_meta(path)?,
        None => PageMeta::default(),
    };
    overrides.apply(&mut meta);
    Ok(meta)
}

/// Render the page and write it to `out`, creating parent directories.
///
/// Returns the number of bytes written.
pub fn write_page(meta: &PageMeta, out: &Path) -> Result<usize> {
    let html = storefront::render_page(meta);

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| RenderError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(out, &html).map_err(|source| RenderError::Write {
        path: out.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %out.display(), bytes = html.len(), "page written");
    Ok(html.len())
}

/// Default output location.
pub fn default_out() -> PathBuf {
    PathBuf::from("dist").join("index.html")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resolves_defaults_without_file() {
        let meta = resolve_meta(None, MetaOverrides::default()).unwrap();
        assert_eq!(meta, PageMeta::default());
    }

    #[test]
    fn overrides_win_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meta.json");
        fs::write(&path, r#"{"title": "From File", "lang": "en"}"#).unwrap();

        let overrides = MetaOverrides {
            title: Some("From Flag".into()),
            ..Default::default()
        };
        let meta = resolve_meta(Some(&path), overrides).unwrap();

        assert_eq!(meta.title, "From Flag");
        assert_eq!(meta.lang, "en");
        assert_eq!(meta.description, PageMeta::default().description);
    }

    #[test]
    fn missing_meta_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_meta(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, RenderError::ReadMeta { .. }));
    }

    #[test]
    fn malformed_meta_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meta.json");
        fs::write(&path, "{ title: oops").unwrap();

        let err = load_meta(&path).unwrap_err();
        assert!(matches!(err, RenderError::ParseMeta { .. }));
        assert!(err.to_string().contains("meta.json"));
    }

    #[test]
    fn writes_document_creating_directories() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("site").join("public").join("index.html");

        let bytes = write_page(&PageMeta::default(), &out).unwrap();

        let html = fs::read_to_string(&out).unwrap();
        assert_eq!(html.len(), bytes);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"id="testimonials""#));
    }
}
