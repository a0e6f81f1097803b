use cardtier_evaluator::tier::Tier;

use crate::command::{CatalogArg, ViewArg, rank};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct TiersArg {
    #[command(flatten)]
    pub(crate) view: ViewArg,
}

pub(crate) fn run(catalog: &CatalogArg, arg: &TiersArg) -> anyhow::Result<()> {
    let snapshot = catalog.load()?;
    let cut_points = snapshot.ranked.cut_points();

    // --limit applies to each tier row, not to the whole list
    let unlimited = ViewArg {
        limit: None,
        ..arg.view.clone()
    };
    let cards = rank::select(snapshot.ranked.cards(), &arg.view.filter(), &unlimited);

    for tier in Tier::ALL {
        let rows = cards
            .iter()
            .filter(|ranked| ranked.tier == tier)
            .collect::<Vec<_>>();
        let threshold = match cut_points.threshold(tier) {
            Some(score) => format!(">= {score:.2}"),
            None => format!("<  {:.2}", cut_points.p25),
        };
        println!("[{tier}] {threshold} ({} cards)", rows.len());
        if rows.is_empty() {
            println!("    -");
        }
        let limit = arg.view.limit.unwrap_or(usize::MAX);
        for ranked in rows.iter().take(limit) {
            println!("    {:>6.2}  {}", ranked.score, ranked.card.name);
        }
    }
    Ok(())
}
