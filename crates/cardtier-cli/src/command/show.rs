use anyhow::Context as _;

use crate::{command::CatalogArg, present};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ShowArg {
    /// Card id
    card_id: u32,
}

pub(crate) fn run(catalog: &CatalogArg, arg: &ShowArg) -> anyhow::Result<()> {
    let snapshot = catalog.load()?;
    let ranked = snapshot
        .ranked
        .find(arg.card_id)
        .with_context(|| format!("Card {} not found in catalog", arg.card_id))?;
    for line in present::detail_lines(&snapshot, ranked) {
        println!("{line}");
    }
    Ok(())
}
