use cardtier_catalog::Faction;
use cardtier_evaluator::strategy;

use crate::{command::CatalogArg, present};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct StrategyArg {
    /// Class name or id
    faction: Faction,
}

pub(crate) fn run(catalog: &CatalogArg, arg: &StrategyArg) -> anyhow::Result<()> {
    let snapshot = catalog.load()?;
    let strategy = strategy::strategize(arg.faction.id(), &snapshot.ranked);

    println!("{} - {}", arg.faction, strategy.archetype);
    println!();
    println!("{}", strategy.description);
    println!();
    println!("Tips:");
    for tip in strategy.tips {
        println!("  * {tip}");
    }
    println!();
    println!("Key cards:");
    if strategy.key_cards.is_empty() {
        println!("  (no cards in this catalog)");
    }
    for ranked in &strategy.key_cards {
        let card = &ranked.card;
        println!(
            "  [{}] {:>6.2}  {:>2} PP  {:>7}  {}",
            ranked.tier,
            ranked.score,
            card.cost,
            present::stats_label(card),
            card.name
        );
    }
    Ok(())
}
