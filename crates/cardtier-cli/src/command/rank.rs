use cardtier_evaluator::{
    ranking::RankedCard,
    view::{self, CardFilter},
};

use crate::{
    command::{CatalogArg, ViewArg},
    present,
};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct RankArg {
    #[command(flatten)]
    pub(crate) view: ViewArg,
}

pub(crate) fn run(catalog: &CatalogArg, arg: &RankArg) -> anyhow::Result<()> {
    let snapshot = catalog.load()?;
    let filter = arg.view.filter();
    let rows = select(snapshot.ranked.cards(), &filter, &arg.view);

    println!(
        "{:>4}  {:<4} {:>7}  {:>4}  {:<11} {:<9} {:>7}  Name",
        "#", "Tier", "Score", "Cost", "Class", "Rarity", "Stats"
    );
    for (rank, ranked) in rows.iter().enumerate() {
        let card = &ranked.card;
        println!(
            "{:>4}  {:<4} {:>7.2}  {:>4}  {:<11} {:<9} {:>7}  {}",
            rank + 1,
            ranked.tier,
            ranked.score,
            card.cost,
            card.faction,
            card.rarity,
            present::stats_label(card),
            card.name,
        );
    }
    eprintln!(
        "{} of {} cards shown",
        rows.len(),
        snapshot.ranked.len()
    );
    Ok(())
}

/// Applies the filter, sort order, and limit of a view.
pub(crate) fn select<'a>(
    cards: &'a [RankedCard],
    filter: &CardFilter,
    view_arg: &ViewArg,
) -> Vec<&'a RankedCard> {
    let mut rows = view::sort_cards(&view::filter_cards(cards, filter), view_arg.sort);
    if let Some(limit) = view_arg.limit {
        rows.truncate(limit);
    }
    rows
}
