use cardtier_catalog::{Faction, Rarity};
use cardtier_evaluator::{
    ranking::RankedCard,
    view::{self, COST_BUCKET_MIN, CardFilter, SortKey},
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use super::{Action, cycle_option, cycle_value, navigate};
use crate::{
    command::browse::widgets::{self, KeyHint},
    present,
    util::Snapshot,
};

const COST_FILTERS: [u32; 9] = [0, 1, 2, 3, 4, 5, 6, 7, COST_BUCKET_MIN];

const KEY_HINTS: &[KeyHint] = &[
    KeyHint::new("↑/↓", "Select"),
    KeyHint::new("Enter", "Details"),
    KeyHint::new("f/c/r", "Class/Cost/Rarity"),
    KeyHint::new("s", "Sort"),
    KeyHint::new("/", "Search"),
    KeyHint::new("x", "Clear"),
    KeyHint::new("Tab", "Next tab"),
    KeyHint::new("q/Esc", "Quit"),
];

const SEARCH_KEY_HINTS: &[KeyHint] = &[
    KeyHint::new("Enter/Esc", "Done"),
    KeyHint::new("Backspace", "Delete"),
];

/// The full ranked list with interactive filter and sort.
#[derive(Debug, Default)]
pub(crate) struct RankingsScreen {
    filter: CardFilter,
    sort: SortKey,
    selected: usize,
    editing_search: bool,
}

impl RankingsScreen {
    pub(crate) fn new(faction: Option<Faction>) -> Self {
        Self {
            filter: CardFilter {
                faction,
                ..CardFilter::default()
            },
            ..Self::default()
        }
    }

    pub(crate) fn key_hints(&self) -> &'static [KeyHint] {
        if self.editing_search {
            SEARCH_KEY_HINTS
        } else {
            KEY_HINTS
        }
    }

    fn rows<'a>(&self, data: &'a Snapshot) -> Vec<&'a RankedCard> {
        let filtered = view::filter_cards(data.ranked.cards(), &self.filter);
        view::sort_cards(&filtered, self.sort)
    }

    pub(crate) fn draw(&self, frame: &mut Frame, area: Rect, data: &Snapshot) {
        let [filter_area, list_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).areas(area);

        let rows = self.rows(data);
        frame.render_widget(
            FilterBar {
                filter: &self.filter,
                sort: self.sort,
                editing_search: self.editing_search,
            },
            filter_area,
        );
        frame.render_widget(
            RankedList {
                title: format!("Rankings ({}/{})", rows.len(), data.ranked.len()),
                rows: &rows,
                selected: self.selected,
            },
            list_area,
        );
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent, data: &Snapshot) -> Action {
        if self.editing_search {
            self.handle_search_key(key);
            return Action::Handled;
        }

        let rows = self.rows(data);
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
            KeyCode::Char('f') => {
                self.filter.faction = cycle_option(Faction::ALL, self.filter.faction, true);
            }
            KeyCode::Char('F') => {
                self.filter.faction = cycle_option(Faction::ALL, self.filter.faction, false);
            }
            KeyCode::Char('c') => {
                self.filter.cost = cycle_option(&COST_FILTERS, self.filter.cost, true);
            }
            KeyCode::Char('C') => {
                self.filter.cost = cycle_option(&COST_FILTERS, self.filter.cost, false);
            }
            KeyCode::Char('r') => {
                self.filter.rarity = cycle_option(Rarity::ALL, self.filter.rarity, true);
            }
            KeyCode::Char('R') => {
                self.filter.rarity = cycle_option(Rarity::ALL, self.filter.rarity, false);
            }
            KeyCode::Char('s') => self.sort = cycle_value(&SortKey::ALL, self.sort, true),
            KeyCode::Char('S') => self.sort = cycle_value(&SortKey::ALL, self.sort, false),
            KeyCode::Char('/') => self.editing_search = true,
            KeyCode::Char('x') => {
                self.filter = CardFilter::default();
                self.sort = SortKey::default();
            }
            _ => return Action::Ignored,
        }
        self.selected = 0;
        Action::Handled
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.editing_search = false,
            KeyCode::Backspace => {
                if let Some(search) = &mut self.filter.search {
                    search.pop();
                }
                if self.filter.search.as_deref() == Some("") {
                    self.filter.search = None;
                }
            }
            KeyCode::Char(c) => self
                .filter
                .search
                .get_or_insert_with(String::new)
                .push(c),
            _ => return,
        }
        self.selected = 0;
    }
}

struct FilterBar<'a> {
    filter: &'a CardFilter,
    sort: SortKey,
    editing_search: bool,
}

impl Widget for FilterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let faction = self
            .filter
            .faction
            .map_or_else(|| "All".to_owned(), |f| f.to_string());
        let cost = match self.filter.cost {
            None => "All".to_owned(),
            Some(cost) if cost >= COST_BUCKET_MIN => format!("{COST_BUCKET_MIN}+"),
            Some(cost) => cost.to_string(),
        };
        let rarity = self
            .filter
            .rarity
            .map_or_else(|| "All".to_owned(), |r| r.to_string());
        let search = self.filter.search.as_deref().unwrap_or_default();

        let label = Style::new().fg(Color::DarkGray);
        let mut spans = vec![
            Span::styled("Class: ", label),
            Span::raw(faction),
            Span::styled("  Cost: ", label),
            Span::raw(cost),
            Span::styled("  Rarity: ", label),
            Span::raw(rarity),
            Span::styled("  Sort: ", label),
            Span::raw(self.sort.to_string()),
            Span::styled("  Search: ", label),
            Span::raw(search.to_owned()),
        ];
        if self.editing_search {
            spans.push(Span::styled("_", widgets::HIGHLIGHT_STYLE));
        }

        Paragraph::new(Line::from(spans))
            .block(Block::bordered().title("Filter"))
            .render(area, buf);
    }
}

struct RankedList<'a> {
    title: String,
    rows: &'a [&'a RankedCard],
    selected: usize,
}

impl Widget for RankedList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let items = self
            .rows
            .iter()
            .map(|ranked| {
                let card = &ranked.card;
                ListItem::new(Line::from(vec![
                    widgets::tier_badge(ranked.tier),
                    Span::raw(format!(
                        " {:>6.2} {:>3}  {:<28} {:<12} {:<9} {}",
                        ranked.score,
                        card.cost,
                        card.name,
                        card.faction,
                        card.rarity,
                        present::stats_label(card),
                    )),
                ]))
            })
            .collect::<Vec<_>>();

        let list = List::new(items)
            .block(Block::bordered().title(self.title))
            .highlight_style(widgets::HIGHLIGHT_STYLE)
            .highlight_symbol(widgets::HIGHLIGHT_SYMBOL);

        let mut list_state = ListState::default();
        if !self.rows.is_empty() {
            list_state.select(Some(usize::min(self.selected, self.rows.len() - 1)));
        }
        StatefulWidget::render(list, area, buf, &mut list_state);
    }
}
