//! Text helpers shared by the report commands and the browser.

use cardtier_catalog::{Card, Language};
use cardtier_evaluator::{ranking::RankedCard, scoring::MatchedRule};

use crate::util::Snapshot;

const IMAGE_BASE_URL: &str = "https://shadowverse-wb.com/uploads/card_image";

/// Converts ability-text markup to plain text.
///
/// `<br>` variants become line breaks, every other tag is dropped, and the
/// common entities are decoded.
pub(crate) fn strip_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let after = &rest[start..];
        let Some(end) = after.find('>') else {
            // unterminated tag: keep the text as is
            out.push_str(after);
            rest = "";
            break;
        };
        if is_line_break(&after[1..end]) {
            out.push('\n');
        }
        rest = &after[end + 1..];
    }
    out.push_str(rest);

    out.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .trim()
        .to_owned()
}

/// Matches `br`, `br/`, `br /`, case-insensitively.
fn is_line_break(tag: &str) -> bool {
    let tag = tag.trim_end_matches('/').trim_end();
    tag.eq_ignore_ascii_case("br")
}

/// Evolved ability text worth showing, or `None` when it repeats the base text.
pub(crate) fn evolved_text(card: &Card) -> Option<String> {
    let evolved = strip_markup(&card.evolved_ability_text);
    (!evolved.is_empty() && evolved != strip_markup(&card.ability_text)).then_some(evolved)
}

/// Official card image URL; empty when the card has no image hash.
pub(crate) fn image_url(card: &Card, language: Language) -> String {
    if card.image_hash.is_empty() {
        return String::new();
    }
    format!(
        "{IMAGE_BASE_URL}/{}/card/{}.png",
        language.image_segment(),
        card.image_hash
    )
}

/// `atk/hp` for followers, `-` for everything else.
pub(crate) fn stats_label(card: &Card) -> String {
    if card.kind.is_follower() {
        format!("{}/{}", card.attack, card.health)
    } else {
        "-".to_owned()
    }
}

/// Full description of one ranked card: attributes, plain ability text,
/// tier and rank, and the score breakdown.
pub(crate) fn detail_lines(snapshot: &Snapshot, ranked: &RankedCard) -> Vec<String> {
    let card = &ranked.card;
    let mut lines = vec![format!("{} (#{})", card.name, card.id)];
    lines.push(format!("  Class:   {}", card.faction));
    lines.push(format!("  Type:    {}", card.kind));
    lines.push(format!("  Rarity:  {}", card.rarity));
    if let Some(tribe) = snapshot.catalog.tribe_name(card) {
        lines.push(format!("  Tribe:   {tribe}"));
    }
    if let Some(set) = snapshot.catalog.set_name(card) {
        lines.push(format!("  Set:     {set}"));
    }
    lines.push(format!("  Cost:    {}", card.cost));
    if card.kind.is_follower() {
        lines.push(format!("  Stats:   {}", stats_label(card)));
    }
    let image_url = image_url(card, snapshot.language);
    if !image_url.is_empty() {
        lines.push(format!("  Image:   {image_url}"));
    }

    let ability = strip_markup(&card.ability_text);
    if !ability.is_empty() {
        lines.push(String::new());
        lines.push("Ability:".to_owned());
        lines.extend(ability.lines().map(|line| format!("  {line}")));
    }
    if let Some(evolved) = evolved_text(card) {
        lines.push(String::new());
        lines.push("Evolved:".to_owned());
        lines.extend(evolved.lines().map(|line| format!("  {line}")));
    }

    let position = snapshot
        .ranked
        .iter()
        .position(|r| r.card.id == card.id)
        .map_or(0, |i| i + 1);
    lines.push(String::new());
    lines.push(format!(
        "Tier {}  score {:.2}  rank {} of {}",
        ranked.tier,
        ranked.score,
        position,
        snapshot.ranked.len()
    ));

    let breakdown = snapshot.scorer.breakdown(card);
    push_rules(&mut lines, "Keywords", &breakdown.keywords);
    push_rules(&mut lines, "Phrases", &breakdown.phrases);
    for (label, value) in [
        ("Versatility", breakdown.versatility),
        ("Stats", breakdown.stat_term),
        ("Low cost", breakdown.low_cost_premium),
        ("Rarity", breakdown.rarity_bonus),
        ("Token", breakdown.token_penalty),
    ] {
        if value != 0.0 {
            lines.push(format!("  {label:<20} {value:+6.2}"));
        }
    }
    lines.push(format!("  {:<20} {:+6.2}", "Total", breakdown.total));
    lines
}

fn push_rules(lines: &mut Vec<String>, label: &str, rules: &[MatchedRule]) {
    for rule in rules {
        let name = format!("{label}: {}", rule.name);
        lines.push(format!("  {name:<20} {:+6.2}", rule.weight));
    }
}
