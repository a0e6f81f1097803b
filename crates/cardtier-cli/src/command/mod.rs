use std::path::PathBuf;

use cardtier_catalog::{Faction, Language, LoaderOptions, Rarity};
use cardtier_evaluator::view::{CardFilter, SortKey};
use clap::{Parser, Subcommand};

use crate::util::{Snapshot, SnapshotSource};

use self::{
    browse::BrowseArg, export::ExportArg, rank::RankArg, show::ShowArg, stats::StatsArg,
    strategy::StrategyArg, tiers::TiersArg,
};

mod browse;
mod export;
mod rank;
mod show;
mod stats;
mod strategy;
mod tiers;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(flatten)]
    catalog: CatalogArg,
    /// What mode to run the program in (default: browse)
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print the ranked card list
    Rank(#[clap(flatten)] RankArg),
    /// Print the tier list
    Tiers(#[clap(flatten)] TiersArg),
    /// Print the archetype summary and key cards of a class
    Strategy(#[clap(flatten)] StrategyArg),
    /// Print one card with its score breakdown
    Show(#[clap(flatten)] ShowArg),
    /// Print the score distribution and tier cut points
    Stats(#[clap(flatten)] StatsArg),
    /// Write the ranked catalog as JSON
    Export(#[clap(flatten)] ExportArg),
    /// Browse rankings, tiers, and strategies in the terminal
    Browse(#[clap(flatten)] BrowseArg),
}

/// Catalog location and scoring options, accepted by every mode.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct CatalogArg {
    /// Directory holding `cards_en.json` / `cards_cht.json`
    #[arg(long, global = true, default_value = "./public")]
    data_dir: PathBuf,
    /// Catalog language: `en`, `cht`, or a locale tag such as `zh-TW`
    #[arg(long, global = true, default_value = "en")]
    lang: Language,
    /// Catalog file to load instead of the one picked from --data-dir and --lang
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Keep token cards in the catalog
    #[arg(long, global = true)]
    keep_tokens: bool,
    /// Read evolved attack/health from the catalog instead of treating them as 0
    #[arg(long, global = true)]
    evolved_stats: bool,
    /// Scoring weight override file (JSON)
    #[arg(long, global = true)]
    weights: Option<PathBuf>,
}

impl CatalogArg {
    fn source(&self) -> SnapshotSource {
        let path = self
            .catalog
            .clone()
            .unwrap_or_else(|| self.data_dir.join(self.lang.catalog_file_name()));
        SnapshotSource {
            path,
            language: self.lang,
            options: LoaderOptions {
                keep_tokens: self.keep_tokens,
                evolved_stats: self.evolved_stats,
            },
            weights: self.weights.clone(),
        }
    }

    pub(crate) fn load(&self) -> anyhow::Result<Snapshot> {
        Snapshot::load(&self.source())
    }
}

/// Filter and sort options for card lists.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ViewArg {
    /// Only cards of this class (name or id)
    #[arg(long)]
    faction: Option<Faction>,
    /// Only cards of this cost; 8 or more matches every cost of 8+
    #[arg(long)]
    cost: Option<u32>,
    /// Only cards of this rarity (name or id)
    #[arg(long)]
    rarity: Option<Rarity>,
    /// Only cards whose name or ability text contains this text
    #[arg(long)]
    search: Option<String>,
    /// Sort order: rank, cost, atk, life, rarity, name
    #[arg(long, default_value_t)]
    sort: SortKey,
    /// Maximum number of cards to print
    #[arg(long)]
    limit: Option<usize>,
}

impl ViewArg {
    pub(crate) fn filter(&self) -> CardFilter {
        CardFilter {
            faction: self.faction,
            cost: self.cost,
            rarity: self.rarity,
            search: self.search.clone(),
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    let catalog = &args.catalog;
    match args.mode.unwrap_or(Mode::Browse(BrowseArg::default())) {
        Mode::Rank(arg) => rank::run(catalog, &arg)?,
        Mode::Tiers(arg) => tiers::run(catalog, &arg)?,
        Mode::Strategy(arg) => strategy::run(catalog, &arg)?,
        Mode::Show(arg) => show::run(catalog, &arg)?,
        Mode::Stats(arg) => stats::run(catalog, &arg)?,
        Mode::Export(arg) => export::run(catalog, &arg)?,
        Mode::Browse(arg) => browse::run(catalog, &arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    fn parse(args: &[&str]) -> CommandArgs {
        CommandArgs::try_parse_from(std::iter::once("cardtier").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_defaults_to_browse_with_english_catalog() {
        let args = parse(&[]);
        assert!(args.mode.is_none());
        let source = args.catalog.source();
        assert_eq!(source.path, PathBuf::from("./public/cards_en.json"));
        assert_eq!(source.language, Language::En);
        assert_eq!(source.options, LoaderOptions::default());
    }

    #[test]
    fn test_global_catalog_flags_after_subcommand() {
        let args = parse(&["rank", "--lang", "zh-TW", "--data-dir", "data", "--keep-tokens"]);
        let source = args.catalog.source();
        assert_eq!(source.path, PathBuf::from("data/cards_cht.json"));
        assert_eq!(source.language, Language::Cht);
        assert!(source.options.keep_tokens);
        assert!(!source.options.evolved_stats);
    }

    #[test]
    fn test_explicit_catalog_path_wins() {
        let args = parse(&["--catalog", "snapshot.json", "--lang", "cht", "stats"]);
        assert_eq!(args.catalog.source().path, PathBuf::from("snapshot.json"));
    }

    #[test]
    fn test_view_flags() {
        let args = parse(&[
            "rank", "--faction", "dragoncraft", "--cost", "9", "--rarity", "4", "--sort", "LIFE",
            "--search", "storm", "--limit", "5",
        ]);
        let Some(Mode::Rank(rank)) = args.mode else {
            panic!("expected rank mode");
        };
        let filter = rank.view.filter();
        assert_eq!(filter.faction, Some(Faction::Dragoncraft));
        assert_eq!(filter.cost, Some(9));
        assert_eq!(filter.rarity, Some(Rarity::Legendary));
        assert_eq!(filter.search.as_deref(), Some("storm"));
        assert_eq!(rank.view.sort, SortKey::Life);
        assert_eq!(rank.view.limit, Some(5));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let bad = [
            &["rank", "--faction", "neutral"][..],
            &["rank", "--sort", "power"][..],
            &["strategy"][..],
            &["show", "abc"][..],
        ];
        for args in bad {
            let result =
                CommandArgs::try_parse_from(std::iter::once("cardtier").chain(args.iter().copied()));
            assert!(result.is_err(), "{args:?}");
        }
    }
}
