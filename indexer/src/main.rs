use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use heroindex_core::catalog::build_catalog;
use heroindex_core::config::DEFAULT_DOCUMENTS_DIR;
use heroindex_core::persist::{save_documents, save_heroes, save_meta, save_postings, save_vocabulary, MetaFile, OutputPaths};
use heroindex_core::{build_index, EnglishStopwords, HeroIndex, IndexConfig, ScraperLoader};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_HERO: &str = "Thor Odinson";

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Build an inverted index over a directory of hero pages and look heroes up", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Dump heroes, documents, vocabulary and postings, then run one hero query
    Run {
        #[command(flatten)]
        source: SourceArgs,
        /// Directory the dump files are appended to
        #[arg(long, default_value = ".")]
        output: PathBuf,
        /// Hero to look up once the dumps are written
        #[arg(long, default_value = DEFAULT_HERO)]
        hero: String,
        /// Also write meta.json with table sizes
        #[arg(long, default_value_t = false)]
        meta: bool,
    },
    /// Build the index in memory and list the documents mentioning a hero
    Search {
        #[command(flatten)]
        source: SourceArgs,
        #[arg(long)]
        hero: String,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Directory of HTML documents
    #[arg(long, default_value = DEFAULT_DOCUMENTS_DIR)]
    documents: PathBuf,
    /// Number documents in file-name order instead of directory-listing order
    #[arg(long, default_value_t = false)]
    sorted: bool,
}

impl SourceArgs {
    fn config(&self) -> IndexConfig {
        IndexConfig::new(&self.documents).sorted(self.sorted)
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run { source, output, hero, meta }) => run(source.config().with_output_dir(output), &hero, meta),
        Some(Commands::Search { source, hero }) => {
            let index = build_index(&source.config(), &ScraperLoader, &EnglishStopwords)?;
            report(&index, &hero)
        }
        None => run(IndexConfig::default(), DEFAULT_HERO, false),
    }
}

fn run(config: IndexConfig, hero: &str, write_meta: bool) -> Result<()> {
    let paths = OutputPaths::new(&config.output_dir);
    let catalog = build_catalog(&config.documents_dir, config.sort_documents)?;

    let last = save_heroes(&paths, &catalog, &ScraperLoader)?;
    tracing::debug!(?last, "last hero record");
    save_documents(&paths, &catalog)?;

    let index = HeroIndex::from_catalog(catalog, &ScraperLoader, &EnglishStopwords, &config.language)?;
    save_vocabulary(&paths, &index.vocabulary)?;
    save_postings(&paths, &index.postings)?;
    if write_meta {
        save_meta(&paths, &MetaFile::for_index(&index.catalog, &index.vocabulary, &index.postings))?;
    }
    tracing::info!(output = %config.output_dir.display(), "index dumps written");

    report(&index, hero)
}

/// Prints matching document names, one per line. An unknown hero is reported, not raised.
fn report(index: &HeroIndex, hero: &str) -> Result<()> {
    match index.search(hero) {
        Ok(names) => {
            for name in names {
                println!("{name}");
            }
            Ok(())
        }
        Err(e) if e.is_not_found() => {
            println!("no documents found for hero {hero:?}");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
