use cardtier_catalog::Faction;

use crate::command::CatalogArg;

use self::app::App;

mod app;
mod screens;
mod widgets;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct BrowseArg {
    /// Class shown first on every tab (name or id)
    #[arg(long)]
    faction: Option<Faction>,
}

pub(crate) fn run(catalog: &CatalogArg, arg: &BrowseArg) -> anyhow::Result<()> {
    let snapshot = catalog.load()?;
    eprintln!(
        "Loaded {} cards ({})",
        snapshot.ranked.len(),
        snapshot.language
    );

    let mut terminal = ratatui::init();
    let app_result = App::new(snapshot, arg.faction).run(&mut terminal);
    ratatui::restore();
    app_result
}
