use crossterm::event::KeyCode;

pub(crate) mod detail;
pub(crate) mod rankings;
pub(crate) mod strategy;
pub(crate) mod tier_list;

/// Rows moved by PageUp/PageDown.
const PAGE: usize = 10;

/// Outcome of a key press handed to a tab screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    Handled,
    /// Not a key this screen uses; the app may handle it.
    Ignored,
    OpenCard(u32),
}

/// New selection after a navigation key, or `None` if `code` does not move
/// the selection.
fn navigate(selected: usize, len: usize, code: KeyCode) -> Option<usize> {
    let last = len.saturating_sub(1);
    let next = match code {
        KeyCode::Up | KeyCode::Char('k') => selected.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => usize::min(selected + 1, last),
        KeyCode::PageUp => selected.saturating_sub(PAGE),
        KeyCode::PageDown => usize::min(selected + PAGE, last),
        KeyCode::Home | KeyCode::Char('g') => 0,
        KeyCode::End | KeyCode::Char('G') => last,
        _ => return None,
    };
    Some(next)
}

/// Steps through `None`, then every value of `all`, then back to `None`.
fn cycle_option<T>(all: &[T], current: Option<T>, forward: bool) -> Option<T>
where
    T: Copy + PartialEq,
{
    let position = current.and_then(|value| all.iter().position(|v| *v == value));
    let next = match (position, forward) {
        (None, true) => (!all.is_empty()).then_some(0),
        (None, false) => all.len().checked_sub(1),
        (Some(i), true) => Some(i + 1).filter(|&i| i < all.len()),
        (Some(i), false) => i.checked_sub(1),
    };
    next.map(|i| all[i])
}

/// Steps through `all`, wrapping around at either end.
fn cycle_value<T>(all: &[T], current: T, forward: bool) -> T
where
    T: Copy + PartialEq,
{
    let len = all.len();
    let position = all.iter().position(|v| *v == current).unwrap_or(0);
    let next = if forward {
        (position + 1) % len
    } else {
        (position + len - 1) % len
    };
    all[next]
}
