use cardtier_catalog::Faction;
use cardtier_evaluator::{ranking::RankedCard, tier::Tier};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, List, ListItem, ListState, StatefulWidget, Widget},
};

use super::{Action, cycle_option, navigate};
use crate::{
    command::browse::widgets::{self, KeyHint},
    util::Snapshot,
};

pub(crate) const KEY_HINTS: &[KeyHint] = &[
    KeyHint::new("↑/↓", "Select"),
    KeyHint::new("←/→", "Tier"),
    KeyHint::new("f/F", "Class"),
    KeyHint::new("Enter", "Details"),
    KeyHint::new("Tab", "Next tab"),
    KeyHint::new("q/Esc", "Quit"),
];

/// Cards laid out in one column per tier.
#[derive(Debug)]
pub(crate) struct TierListScreen {
    faction: Option<Faction>,
    tier: Tier,
    selected: usize,
}

impl TierListScreen {
    pub(crate) fn new(faction: Option<Faction>) -> Self {
        Self {
            faction,
            tier: Tier::S,
            selected: 0,
        }
    }

    fn column<'a>(&self, data: &'a Snapshot, tier: Tier) -> Vec<&'a RankedCard> {
        data.ranked
            .by_tier(tier)
            .filter(|ranked| self.faction.is_none_or(|f| ranked.card.faction == f))
            .collect()
    }

    pub(crate) fn draw(&self, frame: &mut Frame, area: Rect, data: &Snapshot) {
        let faction = self
            .faction
            .map_or_else(|| "All classes".to_owned(), |f| f.to_string());
        let block = Block::bordered().title(format!("Tier List: {faction}"));
        let columns = Layout::horizontal([Constraint::Fill(1); 5]).split(block.inner(area));
        frame.render_widget(block, area);

        let cut_points = data.ranked.cut_points();
        for (tier, column_area) in Tier::ALL.into_iter().zip(columns.iter()) {
            let threshold = match cut_points.threshold(tier) {
                Some(score) => format!(">= {score:.2}"),
                None => format!("< {:.2}", cut_points.p25),
            };
            frame.render_widget(
                TierColumn {
                    tier,
                    threshold,
                    rows: &self.column(data, tier),
                    selected: (tier == self.tier).then_some(self.selected),
                },
                *column_area,
            );
        }
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent, data: &Snapshot) -> Action {
        let rows = self.column(data, self.tier);
        if let Some(selected) = navigate(self.selected, rows.len(), key.code) {
            self.selected = selected;
            return Action::Handled;
        }
        match key.code {
            KeyCode::Enter => {
                return rows
                    .get(self.selected)
                    .map_or(Action::Handled, |ranked| Action::OpenCard(ranked.card.id));
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.tier = Tier::ALL[self.tier.index().saturating_sub(1)];
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.tier = Tier::ALL[usize::min(self.tier.index() + 1, Tier::ALL.len() - 1)];
            }
            KeyCode::Char('f') => self.faction = cycle_option(Faction::ALL, self.faction, true),
            KeyCode::Char('F') => self.faction = cycle_option(Faction::ALL, self.faction, false),
            _ => return Action::Ignored,
        }
        self.selected = 0;
        Action::Handled
    }
}

struct TierColumn<'a> {
    tier: Tier,
    threshold: String,
    rows: &'a [&'a RankedCard],
    selected: Option<usize>,
}

impl Widget for TierColumn<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let color = widgets::tier_color(self.tier);
        let block = Block::bordered()
            .border_style(Style::new().fg(color))
            .title(Line::from(vec![
                widgets::tier_badge(self.tier),
                format!(" {}", self.rows.len()).into(),
            ]))
            .title_bottom(self.threshold);

        let items = self
            .rows
            .iter()
            .map(|ranked| ListItem::new(format!("{:>6.2} {}", ranked.score, ranked.card.name)))
            .collect::<Vec<_>>();
        let list = List::new(items)
            .block(block)
            .highlight_style(widgets::HIGHLIGHT_STYLE)
            .highlight_symbol(widgets::HIGHLIGHT_SYMBOL);

        let mut list_state = ListState::default();
        if let Some(selected) = self.selected
            && !self.rows.is_empty()
        {
            list_state.select(Some(usize::min(selected, self.rows.len() - 1)));
        }
        StatefulWidget::render(list, area, buf, &mut list_state);
    }
}
