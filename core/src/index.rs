use crate::catalog::{build_catalog, Catalog};
use crate::config::IndexConfig;
use crate::error::{IndexError, Result};
use crate::html::{page_title, DocumentLoader, HtmlDocument};
use crate::stopwords::StopwordClassifier;
use crate::vocabulary::{build_vocabulary, TermExtractor, Vocabulary};
use crate::{DocId, TermId};
use std::collections::BTreeMap;

/// term_id -> IDs of the documents containing the term, each at most once, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingsTable {
    lists: BTreeMap<TermId, Vec<DocId>>,
}

impl PostingsTable {
    /// Seeds an empty list for every vocabulary ID so the keyspace matches the vocabulary.
    pub fn base(vocabulary: &Vocabulary) -> Self {
        Self { lists: vocabulary.ids().map(|id| (id, Vec::new())).collect() }
    }

    pub fn get(&self, term_id: TermId) -> Option<&[DocId]> {
        self.lists.get(&term_id).map(Vec::as_slice)
    }

    /// Records `doc_id` under `term_id` unless it is already there.
    pub fn add(&mut self, term_id: TermId, doc_id: DocId) -> Result<()> {
        let list = self
            .lists
            .get_mut(&term_id)
            .ok_or_else(|| IndexError::lookup("postings", term_id))?;
        if !list.contains(&doc_id) {
            list.push(doc_id);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = TermId> + '_ {
        self.lists.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TermId, &[DocId])> {
        self.lists.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    /// Total number of (term, document) pairs.
    pub fn num_postings(&self) -> usize {
        self.lists.values().map(Vec::len).sum()
    }
}

/// Posts one document: re-extracts its terms and records its ID under each of them.
pub fn add_document_postings<D, S>(
    postings: &mut PostingsTable,
    document: &str,
    parsed: &D,
    vocabulary: &Vocabulary,
    catalog: &Catalog,
    extractor: &TermExtractor<'_, S>,
) -> Result<()>
where
    D: HtmlDocument + ?Sized,
    S: StopwordClassifier + ?Sized,
{
    if let Some(title) = page_title(parsed)? {
        if format!("{title}.html") != document {
            tracing::warn!(document, %title, "page title does not match file name");
        }
    }
    let doc_id = catalog.id_of(document)?;
    for term in extractor.extract(parsed, document)? {
        postings.add(vocabulary.id_of(&term)?, doc_id)?;
    }
    Ok(())
}

/// Catalog, vocabulary and postings of one collection.
#[derive(Debug, Clone)]
pub struct HeroIndex {
    pub catalog: Catalog,
    pub vocabulary: Vocabulary,
    pub postings: PostingsTable,
}

impl HeroIndex {
    /// Builds the postings for an existing catalog: vocabulary pass, seeding, then one posting pass.
    pub fn from_catalog<L, S>(catalog: Catalog, loader: &L, stopwords: &S, language: &str) -> Result<Self>
    where
        L: DocumentLoader,
        S: StopwordClassifier + ?Sized,
    {
        let extractor = TermExtractor::new(stopwords, language);
        let vocabulary = build_vocabulary(&catalog, loader, &extractor)?;
        let mut postings = PostingsTable::base(&vocabulary);
        for doc in catalog.iter() {
            let parsed = loader.load(&catalog.path_of(doc))?;
            add_document_postings(&mut postings, &doc.name, &parsed, &vocabulary, &catalog, &extractor)?;
            tracing::info!(document = %doc.name, "posted document");
        }
        tracing::info!(
            num_docs = catalog.len(),
            num_terms = vocabulary.len(),
            num_postings = postings.num_postings(),
            "postings table built"
        );
        Ok(Self { catalog, vocabulary, postings })
    }

    /// Document names for `hero`, see [`crate::query::search`].
    pub fn search(&self, hero: &str) -> Result<Vec<&str>> {
        crate::query::search(&self.postings, &self.vocabulary, &self.catalog, hero)
    }
}

/// Full build from the documents directory named in `config`.
pub fn build_index<L, S>(config: &IndexConfig, loader: &L, stopwords: &S) -> Result<HeroIndex>
where
    L: DocumentLoader,
    S: StopwordClassifier + ?Sized,
{
    let catalog = build_catalog(&config.documents_dir, config.sort_documents)?;
    HeroIndex::from_catalog(catalog, loader, stopwords, &config.language)
}
