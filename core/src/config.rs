use std::path::PathBuf;

pub const DEFAULT_DOCUMENTS_DIR: &str = "./HTMLDocuments";
pub const DEFAULT_LANGUAGE: &str = "english";

#[derive(Debug, Clone)]
pub struct IndexConfig {
    /// Directory holding the HTML collection.
    pub documents_dir: PathBuf,
    /// Directory the dump files are appended to.
    pub output_dir: PathBuf,
    /// Assign document IDs in file-name order instead of directory-listing order.
    pub sort_documents: bool,
    /// Language handed to the stopword classifier.
    pub language: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            documents_dir: PathBuf::from(DEFAULT_DOCUMENTS_DIR),
            output_dir: PathBuf::from("."),
            sort_documents: false,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl IndexConfig {
    pub fn new<P: Into<PathBuf>>(documents_dir: P) -> Self {
        Self { documents_dir: documents_dir.into(), ..Self::default() }
    }

    pub fn with_output_dir<P: Into<PathBuf>>(mut self, output_dir: P) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn sorted(mut self, sort_documents: bool) -> Self {
        self.sort_documents = sort_documents;
        self
    }
}
