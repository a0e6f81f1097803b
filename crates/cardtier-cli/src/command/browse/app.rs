use cardtier_catalog::Faction;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    widgets::Tabs,
};

use super::{
    screens::{
        Action,
        detail::{self, DetailScreen},
        rankings::RankingsScreen,
        strategy::{self, StrategyScreen},
        tier_list::{self, TierListScreen},
    },
    widgets::{self, KeyHint},
};
use crate::util::Snapshot;

#[derive(Debug)]
pub struct App {
    data: Snapshot,
    screen: Screen,
    tab: Tab,
    rankings: RankingsScreen,
    tier_list: TierListScreen,
    strategy: StrategyScreen,
}

#[derive(Debug)]
enum Screen {
    Browsing,
    Detail(DetailScreen),
    Exiting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Rankings,
    TierList,
    Strategy,
}

impl Tab {
    const ALL: [Self; 3] = [Self::Rankings, Self::TierList, Self::Strategy];

    const fn title(self) -> &'static str {
        match self {
            Self::Rankings => "Rankings",
            Self::TierList => "Tier List",
            Self::Strategy => "Strategy",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }

    const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    const fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl App {
    pub fn new(data: Snapshot, faction: Option<Faction>) -> Self {
        Self {
            data,
            screen: Screen::Browsing,
            tab: Tab::Rankings,
            rankings: RankingsScreen::new(faction),
            tier_list: TierListScreen::new(faction),
            strategy: StrategyScreen::new(faction),
        }
    }

    pub(crate) fn run(&mut self, terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
        while !matches!(self.screen, Screen::Exiting) {
            terminal.draw(|f| self.draw(f))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn key_hints(&self) -> &'static [KeyHint] {
        match (&self.screen, self.tab) {
            (Screen::Detail(_), _) => detail::KEY_HINTS,
            (_, Tab::Rankings) => self.rankings.key_hints(),
            (_, Tab::TierList) => tier_list::KEY_HINTS,
            (_, Tab::Strategy) => strategy::KEY_HINTS,
        }
    }

    fn draw(&self, frame: &mut Frame) {
        if matches!(self.screen, Screen::Exiting) {
            return;
        }

        let [tabs_area, main_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let tabs = Tabs::new(Tab::ALL.map(Tab::title))
            .select(self.tab.index())
            .style(Style::new().fg(Color::DarkGray))
            .highlight_style(widgets::HIGHLIGHT_STYLE);
        frame.render_widget(tabs, tabs_area);

        match &self.screen {
            Screen::Browsing => match self.tab {
                Tab::Rankings => self.rankings.draw(frame, main_area, &self.data),
                Tab::TierList => self.tier_list.draw(frame, main_area, &self.data),
                Tab::Strategy => self.strategy.draw(frame, main_area, &self.data),
            },
            Screen::Detail(detail) => detail.draw(frame, main_area, &self.data),
            Screen::Exiting => { /* Nothing to draw */ }
        }

        frame.render_widget(widgets::help_line(self.key_hints()), help_area);
    }

    fn handle_events(&mut self) -> anyhow::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        match &mut self.screen {
            Screen::Browsing => {
                let action = match self.tab {
                    Tab::Rankings => self.rankings.handle_key(key_event, &self.data),
                    Tab::TierList => self.tier_list.handle_key(key_event, &self.data),
                    Tab::Strategy => self.strategy.handle_key(key_event, &self.data),
                };
                match action {
                    Action::Handled => {}
                    Action::OpenCard(card_id) => {
                        self.screen = Screen::Detail(DetailScreen::new(card_id));
                    }
                    Action::Ignored => self.handle_global_key(key_event),
                }
            }
            Screen::Detail(detail) => {
                if detail.handle_key(key_event) {
                    self.screen = Screen::Browsing;
                }
            }
            Screen::Exiting => { /* No input handling when exiting */ }
        }
    }

    fn handle_global_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => self.screen = Screen::Exiting,
            KeyCode::Tab => self.tab = self.tab.next(),
            KeyCode::BackTab => self.tab = self.tab.prev(),
            KeyCode::Char('1') => self.tab = Tab::Rankings,
            KeyCode::Char('2') => self.tab = Tab::TierList,
            KeyCode::Char('3') => self.tab = Tab::Strategy,
            _ => {}
        }
    }
}
