use std::path::PathBuf;

use crate::{
    command::CatalogArg,
    present,
    schema::report::{RankingReport, ReportCard},
    util,
};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ExportArg {
    /// Output file path (default: stdout)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(catalog: &CatalogArg, arg: &ExportArg) -> anyhow::Result<()> {
    let snapshot = catalog.load()?;

    let cards = snapshot
        .ranked
        .iter()
        .map(|ranked| ReportCard {
            ranked,
            tribe_name: snapshot.catalog.tribe_name(&ranked.card),
            set_name: snapshot.catalog.set_name(&ranked.card),
            image_url: present::image_url(&ranked.card, snapshot.language),
        })
        .collect::<Vec<_>>();
    let report = RankingReport {
        generated_at: chrono::Utc::now(),
        language: snapshot.language,
        scoring_model: snapshot.model_name.as_deref(),
        cut_points: snapshot.ranked.cut_points(),
        cards,
    };

    eprintln!("Exporting {} ranked cards...", report.cards.len());
    util::save_json(&report, arg.output.as_deref())?;
    Ok(())
}
