//! Append-only, human-readable dumps of the index tables.
//!
//! Every record is one `"<key> : <value>\n"` line. Files are created on first use and appended to
//! afterwards; a failed write leaves whatever was already flushed in place.

use crate::catalog::Catalog;
use crate::error::{IndexError, Result};
use crate::heroes::{hero_record, HeroRecord};
use crate::html::DocumentLoader;
use crate::index::PostingsTable;
use crate::vocabulary::Vocabulary;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::fs::{create_dir_all, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct MetaFile {
    pub num_docs: u32,
    pub num_terms: u32,
    pub num_postings: u64,
    pub created_at: String,
    pub version: u32,
}

pub struct OutputPaths {
    pub root: PathBuf,
}

impl OutputPaths {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }
    pub fn documents(&self) -> PathBuf { self.root.join("documents.txt") }
    pub fn vocabulary(&self) -> PathBuf { self.root.join("vocabulary.txt") }
    pub fn postings(&self) -> PathBuf { self.root.join("postings.txt") }
    pub fn heroes(&self) -> PathBuf { self.root.join("heroes.txt") }
    pub fn meta(&self) -> PathBuf { self.root.join("meta.json") }
}

/// Buffered appender that keeps the path around for error reporting.
struct Appender {
    path: PathBuf,
    out: BufWriter<std::fs::File>,
}

impl Appender {
    fn open(path: PathBuf) -> Result<Self> {
        if let Some(dir) = path.parent() {
            create_dir_all(dir).map_err(|e| IndexError::io(dir, e))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| IndexError::io(&path, e))?;
        Ok(Self { path, out: BufWriter::new(file) })
    }

    fn record(&mut self, key: impl Display, value: impl Display) -> Result<()> {
        writeln!(self.out, "{key} : {value}").map_err(|e| IndexError::io(&self.path, e))
    }

    fn blank(&mut self) -> Result<()> {
        writeln!(self.out).map_err(|e| IndexError::io(&self.path, e))
    }

    fn finish(mut self) -> Result<()> {
        self.out.flush().map_err(|e| IndexError::io(&self.path, e))
    }
}

pub fn save_documents(paths: &OutputPaths, catalog: &Catalog) -> Result<()> {
    let mut out = Appender::open(paths.documents())?;
    for doc in catalog.iter() {
        out.record(doc.id, &doc.name)?;
        tracing::info!(doc_id = doc.id, document = %doc.name, "saved document");
    }
    out.finish()
}

pub fn save_vocabulary(paths: &OutputPaths, vocabulary: &Vocabulary) -> Result<()> {
    let mut out = Appender::open(paths.vocabulary())?;
    for term in vocabulary.iter() {
        out.record(term.id, term.text)?;
    }
    out.finish()?;
    tracing::info!(num_terms = vocabulary.len(), "saved vocabulary");
    Ok(())
}

pub fn save_postings(paths: &OutputPaths, postings: &PostingsTable) -> Result<()> {
    let mut out = Appender::open(paths.postings())?;
    for (term_id, docs) in postings.iter() {
        out.record(term_id, format_args!("{docs:?}"))?;
    }
    out.finish()?;
    tracing::info!(num_terms = postings.len(), "saved postings");
    Ok(())
}

/// Appends every document's hero record followed by a blank line.
///
/// Only the last document's record is returned; callers should treat it as diagnostic output.
pub fn save_heroes<L: DocumentLoader>(paths: &OutputPaths, catalog: &Catalog, loader: &L) -> Result<Option<HeroRecord>> {
    let mut out = Appender::open(paths.heroes())?;
    let mut last = None;
    for doc in catalog.iter() {
        let record = hero_record(&loader.load(&catalog.path_of(doc))?)?;
        for (label, value) in &record.fields {
            out.record(label, value)?;
        }
        out.blank()?;
        tracing::info!(document = %doc.name, fields = record.len(), "saved hero information");
        last = Some(record);
    }
    out.finish()?;
    Ok(last)
}

pub fn save_meta(paths: &OutputPaths, meta: &MetaFile) -> Result<()> {
    let path = paths.meta();
    create_dir_all(&paths.root).map_err(|e| IndexError::io(&paths.root, e))?;
    let json = serde_json::to_string_pretty(meta)
        .map_err(|e| IndexError::io(&path, std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;
    std::fs::write(&path, json).map_err(|e| IndexError::io(&path, e))
}

impl MetaFile {
    pub fn for_index(catalog: &Catalog, vocabulary: &Vocabulary, postings: &PostingsTable) -> Self {
        Self {
            num_docs: catalog.len() as u32,
            num_terms: vocabulary.len() as u32,
            num_postings: postings.num_postings() as u64,
            created_at: time::OffsetDateTime::now_utc()
                .format(&time::format_description::well_known::Rfc3339)
                .unwrap_or_default(),
            version: 1,
        }
    }
}
