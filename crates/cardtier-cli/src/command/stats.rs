use cardtier_catalog::Faction;
use cardtier_evaluator::{
    ranking::{self, RankedCard},
    tier::Tier,
};
use cardtier_stats::{descriptive::DescriptiveStats, percentiles::Percentiles};

use crate::command::CatalogArg;

const PERCENTILE_POINTS: [f32; 7] = [5.0, 10.0, 25.0, 50.0, 75.0, 90.0, 95.0];

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct StatsArg {}

pub(crate) fn run(catalog: &CatalogArg, _arg: &StatsArg) -> anyhow::Result<()> {
    let snapshot = catalog.load()?;
    let ranked = &snapshot.ranked;
    let scores = ranked.iter().map(|r| r.score).collect::<Vec<_>>();

    println!("Score Distribution ({} cards, {})", ranked.len(), snapshot.language);
    println!("==================================");
    let Some(stats) = DescriptiveStats::new(scores.iter().copied()) else {
        println!("  (empty catalog)");
        return Ok(());
    };
    println!("  Mean:   {:10.2}", stats.mean);
    println!("  Median: {:10.2}", stats.median);
    println!("  Min:    {:10.2}", stats.min);
    println!("  Max:    {:10.2}", stats.max);
    println!("  StdDev: {:10.2}", stats.std_dev);
    let percentiles = Percentiles::new(&scores, &PERCENTILE_POINTS);
    for (p, value) in percentiles.iter() {
        println!("  P{p:02}:    {value:10.2}");
    }
    println!();

    let cut_points = ranked.cut_points();
    println!("Tier Cut Points");
    println!("===============");
    println!(
        "  S >= {:.2}  A >= {:.2}  B >= {:.2}  C >= {:.2}",
        cut_points.p90, cut_points.p75, cut_points.p50, cut_points.p25
    );
    println!();

    println!("Tier Counts");
    println!("===========");
    print!("  {:<12}", "Class");
    for tier in Tier::ALL {
        print!(" {tier:>5}");
    }
    println!(" {:>6} {:>7}", "Total", "Mean");
    print_tier_row("All", &ranked.iter().collect::<Vec<_>>());
    for faction in Faction::ALL {
        let cards = ranked.faction_cards(*faction).collect::<Vec<_>>();
        print_tier_row(&faction.to_string(), &cards);
    }
    Ok(())
}

fn print_tier_row(label: &str, cards: &[&RankedCard]) {
    print!("  {label:<12}");
    for (_, count) in ranking::tier_counts(cards.iter().copied()) {
        print!(" {count:>5}");
    }
    let mean = DescriptiveStats::new(cards.iter().map(|r| r.score)).map_or(f32::NAN, |s| s.mean);
    println!(" {:>6} {mean:>7.2}", cards.len());
}
