//! Selector-based access to parsed hero pages.
//!
//! The indexing code only ever asks a document for the text of the elements matching a CSS
//! selector, so parsing sits behind [`HtmlDocument`] and file access behind [`DocumentLoader`].

use crate::error::{IndexError, Result};
use scraper::{Html, Selector};
use std::fs;
use std::path::Path;

/// Metadata labels of the hero infobox.
pub const LABEL_SELECTOR: &str = ".pi-data-label";
/// Metadata values of the hero infobox; the first one is the hero name.
pub const VALUE_SELECTOR: &str = ".pi-data-value";
pub const PARAGRAPH_SELECTOR: &str = "p";
pub const TITLE_SELECTOR: &str = ".page-header__title";

pub trait HtmlDocument {
    /// Text content of every element matching `selector`, in document order.
    fn select_text(&self, selector: &str) -> Result<Vec<String>>;
}

pub trait DocumentLoader {
    type Document: HtmlDocument;

    fn load(&self, path: &Path) -> Result<Self::Document>;
}

pub struct ScraperDocument {
    html: Html,
}

impl ScraperDocument {
    pub fn parse(source: &str) -> Self {
        Self { html: Html::parse_document(source) }
    }
}

impl HtmlDocument for ScraperDocument {
    fn select_text(&self, selector: &str) -> Result<Vec<String>> {
        let sel = Selector::parse(selector).map_err(|e| IndexError::Selector {
            selector: selector.to_string(),
            reason: e.to_string(),
        })?;
        Ok(self
            .html
            .select(&sel)
            .map(|node| node.text().collect::<String>())
            .collect())
    }
}

/// Reads UTF-8 files from disk and parses them with `scraper`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScraperLoader;

impl DocumentLoader for ScraperLoader {
    type Document = ScraperDocument;

    fn load(&self, path: &Path) -> Result<ScraperDocument> {
        let source = fs::read_to_string(path).map_err(|e| IndexError::io(path, e))?;
        Ok(ScraperDocument::parse(&source))
    }
}

/// Raw hero name: the first infobox value.
pub fn hero_name<D: HtmlDocument + ?Sized>(doc: &D, document: &str) -> Result<String> {
    doc.select_text(VALUE_SELECTOR)?
        .into_iter()
        .next()
        .ok_or_else(|| IndexError::MissingField {
            document: document.to_string(),
            selector: VALUE_SELECTOR.to_string(),
        })
}

/// Page heading with surrounding whitespace trimmed and inner spaces turned into `_`.
pub fn page_title<D: HtmlDocument + ?Sized>(doc: &D) -> Result<Option<String>> {
    Ok(doc
        .select_text(TITLE_SELECTOR)?
        .into_iter()
        .next()
        .map(|raw| raw.trim().replace(' ', "_")))
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    /// In-memory document keyed by selector.
    #[derive(Debug, Clone, Default)]
    pub struct FakeDocument {
        nodes: HashMap<&'static str, Vec<String>>,
    }

    impl FakeDocument {
        pub fn hero(name: &str, paragraphs: &[&str]) -> Self {
            let mut nodes = HashMap::new();
            nodes.insert(VALUE_SELECTOR, vec![name.to_string()]);
            nodes.insert(PARAGRAPH_SELECTOR, paragraphs.iter().map(|p| p.to_string()).collect());
            Self { nodes }
        }

        pub fn with(mut self, selector: &'static str, texts: &[&str]) -> Self {
            self.nodes.insert(selector, texts.iter().map(|t| t.to_string()).collect());
            self
        }
    }

    impl HtmlDocument for FakeDocument {
        fn select_text(&self, selector: &str) -> Result<Vec<String>> {
            Ok(self.nodes.get(selector).cloned().unwrap_or_default())
        }
    }

    /// Serves [`FakeDocument`]s by file name.
    #[derive(Debug, Default)]
    pub struct FakeLoader {
        pub docs: HashMap<PathBuf, FakeDocument>,
    }

    impl FakeLoader {
        pub fn insert(&mut self, dir: &Path, name: &str, doc: FakeDocument) {
            self.docs.insert(dir.join(name), doc);
        }
    }

    impl DocumentLoader for FakeLoader {
        type Document = FakeDocument;

        fn load(&self, path: &Path) -> Result<FakeDocument> {
            self.docs.get(path).cloned().ok_or_else(|| {
                IndexError::io(path, std::io::Error::from(std::io::ErrorKind::NotFound))
            })
        }
    }
}
