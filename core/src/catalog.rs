use crate::error::{IndexError, Result};
use crate::DocId;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: DocId,
    /// File name relative to the collection directory.
    pub name: String,
}

/// Documents of one collection, numbered 0..N in enumeration order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    root: PathBuf,
    docs: Vec<Document>,
    ids: HashMap<String, DocId>,
}

/// File names of the regular files directly inside `dir`, symlinks to files included.
///
/// Unsorted listings come back in whatever order the file system yields them, so IDs derived from
/// them are only reproducible on the same directory. Pass `sorted` for file-name order.
pub fn list_documents(dir: &Path, sorted: bool) -> Result<Vec<String>> {
    let mut walker = WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true);
    if sorted {
        walker = walker.sort_by_file_name();
    }
    let mut names = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            IndexError::io(path, e.into())
        })?;
        if entry.file_type().is_file() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(names)
}

pub fn build_catalog(dir: &Path, sorted: bool) -> Result<Catalog> {
    let catalog = Catalog::from_names(dir, list_documents(dir, sorted)?);
    for doc in catalog.iter() {
        tracing::info!(doc_id = doc.id, document = %doc.name, "catalogued document");
    }
    Ok(catalog)
}

impl Catalog {
    pub fn from_names<I, S>(root: &Path, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog = Catalog { root: root.to_path_buf(), ..Default::default() };
        for name in names {
            let name = name.into();
            let id = catalog.docs.len() as DocId;
            catalog.ids.insert(name.clone(), id);
            catalog.docs.push(Document { id, name });
        }
        catalog
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.docs.iter()
    }

    pub fn path_of(&self, doc: &Document) -> PathBuf {
        self.root.join(&doc.name)
    }

    /// Reverse lookup by file name; an unknown name means the tables are out of sync.
    pub fn id_of(&self, name: &str) -> Result<DocId> {
        self.ids.get(name).copied().ok_or_else(|| IndexError::lookup("catalog", name))
    }

    pub fn name_of(&self, id: DocId) -> Result<&str> {
        self.docs
            .get(id as usize)
            .map(|d| d.name.as_str())
            .ok_or_else(|| IndexError::lookup("catalog", id))
    }
}
