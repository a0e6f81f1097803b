use cardtier_evaluator::tier::Tier;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// A key (or `/`-separated keys) and what it does on the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct KeyHint {
    keys: &'static str,
    action: &'static str,
}

impl KeyHint {
    pub(crate) const fn new(keys: &'static str, action: &'static str) -> Self {
        Self { keys, action }
    }
}

const KEYCAP_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Cyan);
const ACTION_STYLE: Style = Style::new().fg(Color::Gray);

/// Footer line rendering each hint as a highlighted keycap followed by its
/// action.
pub(crate) fn help_line(hints: &[KeyHint]) -> Line<'static> {
    hints
        .iter()
        .enumerate()
        .flat_map(|(i, hint)| {
            let gap = if i == 0 { "" } else { "  " };
            [
                Span::raw(gap),
                Span::styled(format!(" {} ", hint.keys), KEYCAP_STYLE),
                Span::styled(format!(" {}", hint.action), ACTION_STYLE),
            ]
        })
        .collect::<Line>()
        .centered()
}

pub(crate) const fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::S => Color::Red,
        Tier::A => Color::Rgb(255, 140, 0),
        Tier::B => Color::Blue,
        Tier::C => Color::Green,
        Tier::D => Color::Gray,
    }
}

/// `[S]`-style label in the tier's color.
pub(crate) fn tier_badge(tier: Tier) -> Span<'static> {
    Span::styled(
        format!("[{tier}]"),
        Style::new()
            .fg(tier_color(tier))
            .add_modifier(Modifier::BOLD),
    )
}

pub(crate) const HIGHLIGHT_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
pub(crate) const HIGHLIGHT_SYMBOL: &str = ">> ";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_line_layout() {
        let line = help_line(&[KeyHint::new("↑/↓", "Select"), KeyHint::new("q", "Quit")]);
        assert_eq!(line.to_string(), " ↑/↓  Select   q  Quit");
        assert_eq!(line.spans[1].style, KEYCAP_STYLE);
        assert_eq!(line.spans[2].style, ACTION_STYLE);
        assert!(help_line(&[]).spans.is_empty());
    }

    #[test]
    fn test_tier_badge_text() {
        assert_eq!(tier_badge(Tier::S).content, "[S]");
        assert_eq!(tier_badge(Tier::D).style.fg, Some(tier_color(Tier::D)));
    }
}
