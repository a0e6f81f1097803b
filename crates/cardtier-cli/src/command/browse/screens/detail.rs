use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Text},
    widgets::{Block, Paragraph, Wrap},
};

use crate::{
    command::browse::widgets::{self, KeyHint},
    present,
    util::Snapshot,
};

pub(crate) const KEY_HINTS: &[KeyHint] = &[
    KeyHint::new("↑/↓", "Scroll"),
    KeyHint::new("Enter/Esc/Backspace", "Back"),
];

/// Full description of one card, shown over the tabs.
#[derive(Debug)]
pub(crate) struct DetailScreen {
    card_id: u32,
    scroll: u16,
}

impl DetailScreen {
    pub(crate) fn new(card_id: u32) -> Self {
        Self { card_id, scroll: 0 }
    }

    pub(crate) fn draw(&self, frame: &mut Frame, area: Rect, data: &Snapshot) {
        let Some(ranked) = data.ranked.find(self.card_id) else {
            let text = Text::from(format!("CARD {} NOT FOUND", self.card_id))
                .centered()
                .style(Color::Red);
            frame.render_widget(text, area);
            return;
        };

        let block = Block::bordered()
            .border_style(Style::new().fg(widgets::tier_color(ranked.tier)))
            .title(Line::from(vec![
                widgets::tier_badge(ranked.tier),
                format!(" {} (#{})", ranked.card.name, ranked.card.id).into(),
            ]));
        let lines = present::detail_lines(data, ranked)
            .into_iter()
            .skip(1)
            .map(Line::from)
            .collect::<Vec<_>>();
        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .block(block);
        frame.render_widget(paragraph, area);
    }

    /// Returns `true` when the screen should close.
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') => {
                return true;
            }
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            _ => {}
        }
        false
    }
}
