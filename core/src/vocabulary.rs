use crate::catalog::Catalog;
use crate::error::{IndexError, Result};
use crate::html::{self, DocumentLoader, HtmlDocument, PARAGRAPH_SELECTOR};
use crate::stopwords::StopwordClassifier;
use crate::tokenizer::{prepare_hero_name, tokenize};
use crate::TermId;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub id: TermId,
    pub text: String,
}

/// Pulls the indexable terms out of one document.
pub struct TermExtractor<'a, S: StopwordClassifier + ?Sized> {
    stopwords: &'a S,
    language: &'a str,
}

impl<'a, S: StopwordClassifier + ?Sized> TermExtractor<'a, S> {
    pub fn new(stopwords: &'a S, language: &'a str) -> Self {
        Self { stopwords, language }
    }

    /// Distinct non-stopword paragraph tokens in order of first occurrence.
    pub fn body_terms<D: HtmlDocument + ?Sized>(&self, doc: &D) -> Result<Vec<String>> {
        let mut seen = HashSet::new();
        let mut terms = Vec::new();
        for paragraph in doc.select_text(PARAGRAPH_SELECTOR)? {
            for token in tokenize(&paragraph) {
                if self.stopwords.is_stopword(&token, self.language) {
                    continue;
                }
                if seen.insert(token.clone()) {
                    terms.push(token);
                }
            }
        }
        Ok(terms)
    }

    /// Body terms followed by the document's prepared hero name. The hero name skips stopword
    /// filtering and is kept even when it normalizes to the empty string.
    pub fn extract<D: HtmlDocument + ?Sized>(&self, doc: &D, document: &str) -> Result<Vec<String>> {
        let mut terms = self.body_terms(doc)?;
        let hero = prepare_hero_name(&html::hero_name(doc, document)?);
        if !terms.contains(&hero) {
            terms.push(hero);
        }
        Ok(terms)
    }
}

/// Distinct terms of the whole collection with IDs 0..N in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: Vec<String>,
    ids: HashMap<String, TermId>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the term's ID, assigning the next one if the term is new.
    pub fn insert(&mut self, term: &str) -> TermId {
        if let Some(&id) = self.ids.get(term) {
            return id;
        }
        let id = self.terms.len() as TermId;
        self.terms.push(term.to_string());
        self.ids.insert(term.to_string(), id);
        id
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn get(&self, term: &str) -> Option<TermId> {
        self.ids.get(term).copied()
    }

    /// Reverse lookup that treats a missing term as an internal inconsistency.
    pub fn id_of(&self, term: &str) -> Result<TermId> {
        self.get(term).ok_or_else(|| IndexError::lookup("vocabulary", term))
    }

    pub fn text_of(&self, id: TermId) -> Option<&str> {
        self.terms.get(id as usize).map(String::as_str)
    }

    pub fn ids(&self) -> impl Iterator<Item = TermId> {
        0..self.terms.len() as TermId
    }

    pub fn iter(&self) -> impl Iterator<Item = Term> + '_ {
        self.terms
            .iter()
            .enumerate()
            .map(|(i, text)| Term { id: i as TermId, text: text.clone() })
    }
}

/// One pass over the catalog, unioning every document's terms.
pub fn build_vocabulary<L, S>(catalog: &Catalog, loader: &L, extractor: &TermExtractor<'_, S>) -> Result<Vocabulary>
where
    L: DocumentLoader,
    S: StopwordClassifier + ?Sized,
{
    let mut vocabulary = Vocabulary::new();
    for doc in catalog.iter() {
        let parsed = loader.load(&catalog.path_of(doc))?;
        for term in extractor.extract(&parsed, &doc.name)? {
            vocabulary.insert(&term);
        }
        tracing::info!(document = %doc.name, "indexed vocabulary");
    }
    tracing::info!(num_terms = vocabulary.len(), "vocabulary built");
    Ok(vocabulary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::testing::{FakeDocument, FakeLoader};
    use crate::stopwords::EnglishStopwords;
    use std::path::Path;

    fn extractor() -> TermExtractor<'static, EnglishStopwords> {
        TermExtractor::new(&EnglishStopwords, "english")
    }

    #[test]
    fn extract_filters_stopwords_and_adds_hero() {
        let doc = FakeDocument::hero("Thor Odinson", &["Thor is a God of Thunder.", "Thunder, again: 1999!"]);
        let terms = extractor().extract(&doc, "A.html").unwrap();
        assert_eq!(terms, vec!["thor", "god", "thunder", "thorodinson"]);
    }

    #[test]
    fn hero_already_in_body_is_not_repeated() {
        let doc = FakeDocument::hero("Thor", &["Thor rules"]);
        assert_eq!(extractor().extract(&doc, "A.html").unwrap(), vec!["thor", "rules"]);
    }

    #[test]
    fn empty_hero_name_is_still_a_term() {
        let doc = FakeDocument::hero("(Earth-616)", &["Nameless wanderer"]);
        assert_eq!(extractor().extract(&doc, "A.html").unwrap(), vec!["nameless", "wanderer", ""]);
    }

    #[test]
    fn missing_hero_field_fails() {
        let doc = FakeDocument::default();
        assert!(matches!(extractor().extract(&doc, "X.html"), Err(IndexError::MissingField { .. })));
    }

    #[test]
    fn vocabulary_is_deterministic_and_first_seen() {
        let root = Path::new("docs");
        let mut loader = FakeLoader::default();
        loader.insert(root, "A.html", FakeDocument::hero("Thor Odinson", &["Thor is a God of Thunder"]));
        loader.insert(root, "B.html", FakeDocument::hero("Loki Laufeyson", &["Loki is the God of Mischief"]));
        let catalog = Catalog::from_names(root, ["A.html", "B.html"]);

        let first = build_vocabulary(&catalog, &loader, &extractor()).unwrap();
        let second = build_vocabulary(&catalog, &loader, &extractor()).unwrap();
        let texts: Vec<String> = first.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["thor", "god", "thunder", "thorodinson", "loki", "mischief", "lokilaufeyson"]);
        assert_eq!(first.iter().collect::<Vec<_>>(), second.iter().collect::<Vec<_>>());
        assert_eq!(first.id_of("god").unwrap(), 1);
        assert!(matches!(first.id_of("odin"), Err(IndexError::Lookup { .. })));
    }
}
