use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use word_index::{
    index_documents, IndexSettings, IndexStrategy, InvertedIndex, SplitMode, Tokenizer,
    TokenizerConfig, WordIndex,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    /// Match query words against document words (wildcards and groups allowed)
    Words,
    /// Tokenize the query and look its features up in the inverted index
    Features,
}

#[derive(Parser)]
#[command(name = "word-index")]
#[command(about = "Index a directory of text documents and answer queries from stdin", long_about = None)]
struct Args {
    /// Directory whose files are indexed, one document per file
    #[arg(long, env = "WORD_INDEX_DOCS")]
    docs: PathBuf,

    /// Word index strategy (regexp, binary, interpolation, matrix)
    #[arg(long, env = "WORD_INDEX_STRATEGY")]
    strategy: Option<IndexStrategy>,

    /// JSON settings file
    #[arg(long, env = "WORD_INDEX_SETTINGS")]
    settings: Option<PathBuf>,

    /// Query mode
    #[arg(long, value_enum, default_value = "words")]
    mode: Mode,

    /// Write the inverted index snapshot here after building it
    #[arg(long)]
    save: Option<PathBuf>,

    /// Split on Unicode word boundaries instead of whitespace and punctuation
    #[arg(long)]
    unicode_words: bool,

    /// Print every match instead of the first
    #[arg(long)]
    all: bool,
}

fn load_settings(path: Option<&Path>) -> Result<IndexSettings> {
    let Some(path) = path else {
        return Ok(IndexSettings::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading settings {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing settings {}", path.display()))
}

fn read_documents(dir: &Path) -> Result<(Vec<PathBuf>, Vec<String>)> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("reading directory {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file())
        .collect();
    paths.sort();

    let mut kept = Vec::with_capacity(paths.len());
    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        match fs::read_to_string(&path) {
            Ok(text) => {
                documents.push(text);
                kept.push(path);
            }
            Err(e) => warn!("Skipping {}: {}", path.display(), e),
        }
    }
    Ok((kept, documents))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    info!("Starting word-index v{}", word_index::VERSION);

    let mut settings = load_settings(args.settings.as_deref())?;
    if let Some(strategy) = args.strategy {
        settings = settings.with_strategy(strategy);
    }
    if args.unicode_words {
        let tokenizer = TokenizerConfig {
            split_mode: SplitMode::UnicodeWords,
            ..settings.tokenizer.clone()
        };
        settings = settings.with_tokenizer(tokenizer);
    }
    info!("  Strategy: {}", settings.strategy);
    info!("  Split mode: {:?}", settings.tokenizer.split_mode);

    let (paths, documents) = read_documents(&args.docs)?;
    info!("Read {} documents from {}", documents.len(), args.docs.display());

    let tokenizer = Tokenizer::new(&settings.tokenizer);
    let features = InvertedIndex::from_documents(&documents, &tokenizer);
    info!("Inverted index holds {} features", features.len());

    if let Some(path) = &args.save {
        let file = fs::File::create(path)
            .with_context(|| format!("creating snapshot {}", path.display()))?;
        features.save(io::BufWriter::new(file))?;
    }

    let words = index_documents(settings.strategy, &documents, &tokenizer);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in io::stdin().lock().lines() {
        let query = line?;
        let query = query.trim();
        if query.is_empty() {
            continue;
        }

        let hits: Vec<usize> = match args.mode {
            Mode::Words if args.all => words.find_all(query),
            Mode::Words => words.find(query).into_iter().collect(),
            Mode::Features => {
                let terms = tokenizer.tokenize(query);
                let found = features.find(&terms);
                let ids = found
                    .iter()
                    .filter_map(|&id| usize::try_from(id - 1).ok());
                if args.all {
                    ids.collect()
                } else {
                    ids.take(1).collect()
                }
            }
        };

        if hits.is_empty() {
            writeln!(out, "{}\t(no match)", query)?;
        }
        for hit in hits {
            let name = paths
                .get(hit)
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            writeln!(out, "{}\t{}\t{}", query, hit, name)?;
        }
    }

    Ok(())
}
