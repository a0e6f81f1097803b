use cardtier_catalog::Faction;
use cardtier_evaluator::strategy::{self, Strategy};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap},
};

use super::{Action, cycle_value, navigate};
use crate::{
    command::browse::widgets::{self, KeyHint},
    util::Snapshot,
};

pub(crate) const KEY_HINTS: &[KeyHint] = &[
    KeyHint::new("↑/↓", "Select"),
    KeyHint::new("←/→", "Class"),
    KeyHint::new("Enter", "Details"),
    KeyHint::new("Tab", "Next tab"),
    KeyHint::new("q/Esc", "Quit"),
];

/// Archetype summary and key cards of one class.
#[derive(Debug)]
pub(crate) struct StrategyScreen {
    faction: Faction,
    selected: usize,
}

impl StrategyScreen {
    pub(crate) fn new(faction: Option<Faction>) -> Self {
        Self {
            faction: faction.unwrap_or(Faction::Forestcraft),
            selected: 0,
        }
    }

    fn strategy<'a>(&self, data: &'a Snapshot) -> Strategy<'a> {
        strategy::strategize(self.faction.id(), &data.ranked)
    }

    pub(crate) fn draw(&self, frame: &mut Frame, area: Rect, data: &Snapshot) {
        let strategy = self.strategy(data);
        let [summary_area, key_cards_area] =
            Layout::vertical([Constraint::Length(10), Constraint::Fill(1)]).areas(area);

        frame.render_widget(
            Summary {
                faction: self.faction,
                strategy: &strategy,
            },
            summary_area,
        );
        frame.render_widget(
            KeyCards {
                strategy: &strategy,
                selected: self.selected,
            },
            key_cards_area,
        );
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent, data: &Snapshot) -> Action {
        let strategy = self.strategy(data);
        if let Some(selected) = navigate(self.selected, strategy.key_cards.len(), key.code) {
            self.selected = selected;
            return Action::Handled;
        }
        match key.code {
            KeyCode::Enter => {
                return strategy
                    .key_cards
                    .get(self.selected)
                    .map_or(Action::Handled, |ranked| Action::OpenCard(ranked.card.id));
            }
            KeyCode::Left | KeyCode::Char('h' | 'F') => {
                self.faction = cycle_value(Faction::ALL, self.faction, false);
            }
            KeyCode::Right | KeyCode::Char('l' | 'f') => {
                self.faction = cycle_value(Faction::ALL, self.faction, true);
            }
            _ => return Action::Ignored,
        }
        self.selected = 0;
        Action::Handled
    }
}

struct Summary<'a> {
    faction: Faction,
    strategy: &'a Strategy<'a>,
}

impl Widget for Summary<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let heading = Style::new().add_modifier(Modifier::BOLD);
        let mut lines = vec![
            Line::from(Span::styled(self.strategy.archetype, heading)),
            Line::raw(self.strategy.description),
            Line::raw(""),
        ];
        lines.extend(
            self.strategy
                .tips
                .iter()
                .map(|tip| Line::raw(format!("* {tip}"))),
        );

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::bordered().title(format!("Strategy: {}", self.faction)))
            .render(area, buf);
    }
}

struct KeyCards<'a> {
    strategy: &'a Strategy<'a>,
    selected: usize,
}

impl Widget for KeyCards<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let items = self
            .strategy
            .key_cards
            .iter()
            .map(|ranked| {
                ListItem::new(Line::from(vec![
                    widgets::tier_badge(ranked.tier),
                    Span::raw(format!(
                        " {:>6.2} {:>3}  {}",
                        ranked.score, ranked.card.cost, ranked.card.name
                    )),
                ]))
            })
            .collect::<Vec<_>>();
        let list = List::new(items)
            .block(Block::bordered().title("Key Cards"))
            .highlight_style(widgets::HIGHLIGHT_STYLE)
            .highlight_symbol(widgets::HIGHLIGHT_SYMBOL);

        let mut list_state = ListState::default();
        let len = self.strategy.key_cards.len();
        if len > 0 {
            list_state.select(Some(usize::min(self.selected, len - 1)));
        }
        StatefulWidget::render(list, area, buf, &mut list_state);
    }
}
