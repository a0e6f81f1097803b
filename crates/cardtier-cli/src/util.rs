use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use cardtier_catalog::{Catalog, Language, LoaderOptions};
use cardtier_evaluator::{
    ranking::{self, RankedCatalog},
    scoring::CardScorer,
};

use crate::schema::scoring_model::ScoringModel;

/// Writes `value` as pretty JSON to `path`, or to stdout when `path` is
/// `None`.
pub fn save_json<T>(value: &T, path: Option<&Path>) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            write_json(&mut BufWriter::new(file), value)
                .with_context(|| format!("Failed to write JSON to {}", path.display()))?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => {
            write_json(&mut io::stdout().lock(), value).context("Failed to write JSON to stdout")?;
        }
    }
    Ok(())
}

fn write_json<W, T>(writer: &mut W, value: &T) -> anyhow::Result<()>
where
    W: Write,
    T: serde::Serialize,
{
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Read scoring weight overrides from a JSON file
pub fn read_scoring_model_file<P>(path: P) -> anyhow::Result<ScoringModel>
where
    P: AsRef<Path>,
{
    read_json_file("scoring model", path)
}

/// Read and normalize a raw card catalog document
///
/// # Errors
///
/// Returns error if the file is missing or is not a card catalog document.
/// Loosely typed card records are coerced, not reported as errors.
pub fn read_catalog_file<P>(path: P, options: LoaderOptions) -> anyhow::Result<Catalog>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).with_context(|| {
        format!(
            "Failed to open card catalog file: {} (fetch the card list into this location and retry)",
            path.display()
        )
    })?;
    let catalog = Catalog::from_reader(BufReader::new(file), options)
        .with_context(|| format!("Failed to load card catalog file: {}", path.display()))?;
    Ok(catalog)
}

/// One loaded catalog together with the ranking computed from it.
#[derive(Debug)]
pub struct Snapshot {
    pub language: Language,
    pub catalog: Catalog,
    pub ranked: RankedCatalog,
    pub scorer: CardScorer,
    pub model_name: Option<String>,
}

/// Where a snapshot comes from and how it is scored.
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    pub path: PathBuf,
    pub language: Language,
    pub options: LoaderOptions,
    pub weights: Option<PathBuf>,
}

impl Snapshot {
    pub fn new(
        language: Language,
        catalog: Catalog,
        scorer: CardScorer,
        model_name: Option<String>,
    ) -> Self {
        let ranked = ranking::rank_catalog_with(&scorer, catalog.cards().iter().cloned());
        Self {
            language,
            catalog,
            ranked,
            scorer,
            model_name,
        }
    }

    /// Loads the catalog and ranks every card in it.
    pub fn load(source: &SnapshotSource) -> anyhow::Result<Self> {
        let (scorer, model_name) = match &source.weights {
            Some(path) => {
                let model = read_scoring_model_file(path)?;
                let scorer = model.to_scorer().with_context(|| {
                    format!("Invalid scoring model file: {}", path.display())
                })?;
                tracing::info!(name = %model.name, "using scoring weight overrides");
                (scorer, Some(model.name))
            }
            None => (CardScorer::default(), None),
        };

        tracing::info!(path = %source.path.display(), language = %source.language, "loading catalog");
        let catalog = read_catalog_file(&source.path, source.options)?;
        tracing::info!(cards = catalog.len(), "catalog loaded");

        let snapshot = Self::new(source.language, catalog, scorer, model_name);
        let cuts = snapshot.ranked.cut_points();
        tracing::info!(
            cards = snapshot.ranked.len(),
            p90 = cuts.p90,
            p75 = cuts.p75,
            p50 = cuts.p50,
            p25 = cuts.p25,
            "ranked catalog"
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn test_write_json_is_pretty_with_trailing_newline() {
        let mut buf = Vec::new();
        write_json(&mut buf, &BTreeMap::from([("a", 1)])).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "{\n  \"a\": 1\n}\n");
    }

    #[test]
    fn test_missing_catalog_file_mentions_path() {
        let err = read_catalog_file("no/such/cards_en.json", LoaderOptions::default()).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("no/such/cards_en.json"), "{message}");
    }
}
