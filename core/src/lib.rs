pub mod catalog;
pub mod config;
pub mod error;
pub mod heroes;
pub mod html;
pub mod index;
pub mod persist;
pub mod query;
pub mod stopwords;
pub mod tokenizer;
pub mod vocabulary;

pub use catalog::{Catalog, Document};
pub use config::IndexConfig;
pub use error::{IndexError, Result};
pub use heroes::HeroRecord;
pub use html::{DocumentLoader, HtmlDocument, ScraperDocument, ScraperLoader};
pub use index::{build_index, HeroIndex, PostingsTable};
pub use query::search;
pub use stopwords::{EnglishStopwords, StopwordClassifier};
pub use vocabulary::{Term, Vocabulary};

pub type TermId = u32;
pub type DocId = u32;
