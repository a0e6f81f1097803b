use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

mod command;
mod present;
mod schema;
mod util;

#[cfg(test)]
mod test_util {
    use cardtier_catalog::{Card, CardKind, Catalog, Faction, Language, Rarity};
    use cardtier_evaluator::scoring::CardScorer;

    use crate::util::Snapshot;

    /// A vanilla Bronze 1-cost 1/1 Forestcraft follower.
    pub(crate) fn card(id: u32, name: &str) -> Card {
        Card {
            id,
            name: name.to_owned(),
            faction: Faction::Forestcraft,
            kind: CardKind::Follower,
            tribe: 0,
            rarity: Rarity::Bronze,
            cost: 1,
            attack: 1,
            health: 1,
            evolved_attack: 0,
            evolved_health: 0,
            ability_text: String::new(),
            evolved_ability_text: String::new(),
            is_token: false,
            set_id: 0,
            image_hash: String::new(),
        }
    }

    pub(crate) fn snapshot(cards: Vec<Card>) -> Snapshot {
        Snapshot::new(
            Language::En,
            Catalog::from_cards(cards),
            CardScorer::default(),
            None,
        )
    }
}

fn main() -> anyhow::Result<()> {
    // stderr keeps stdout clean for reports; default to warn so the browser stays quiet
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    command::run()
}
