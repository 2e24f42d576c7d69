//! The host container that owns and drives action items.

use crate::action::Action;
use crate::event::Event;
use crate::shell::Shell;

use web_time::Instant;

/// A popup menu: an ordered collection of heterogeneous [`Action`]s.
///
/// The menu is the sole mutator of its items. It tracks which row the pointer
/// is over, flips highlights accordingly, activates the hovered row on
/// release, and disposes every row when dismissed. All events reach the view
/// layer as `(row index, event)` pairs.
///
/// # Example
/// ```
/// use popup_menu_core::{ActionItem, Color, Event, PopupMenu, Shell};
///
/// let mut menu = PopupMenu::new();
/// menu.push(ActionItem::new(Color::WHITE).with_title("Copy"));
/// menu.push(ActionItem::new(Color::WHITE).with_title("Paste"));
///
/// let mut events: Vec<(usize, Event)> = Vec::new();
/// let mut shell = Shell::new(&mut events);
/// menu.pointer_moved(Some(1), &mut shell);
///
/// assert_eq!(events, vec![(1, Event::HighlightChanged(true))]);
/// ```
#[derive(Default)]
pub struct PopupMenu {
    items: Vec<Box<dyn Action>>,
    hovered: Option<usize>,
}

impl PopupMenu {
    /// Creates an empty [`PopupMenu`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            hovered: None,
        }
    }

    /// Appends an [`Action`] to the menu.
    pub fn push(&mut self, action: impl Action + 'static) {
        self.items.push(Box::new(action));
    }

    /// Returns the number of actions in the menu.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the menu contains no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the [`Action`] at the given row, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&dyn Action> {
        self.items.get(index).map(Box::as_ref)
    }

    /// Returns the row currently under the pointer, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Handles the pointer moving to the given row (or off the menu).
    ///
    /// The newly hovered row gains its highlight, every other row loses its
    /// own. The gesture is captured while the pointer is over a row.
    pub fn pointer_moved(&mut self, over: Option<usize>, shell: &mut Shell<'_, (usize, Event)>) {
        let over = over.filter(|index| *index < self.items.len());

        for (index, item) in self.items.iter_mut().enumerate() {
            forward(index, item.as_mut(), shell, |item, shell| {
                item.set_highlighted(Some(index) == over, shell);
            });
        }

        self.hovered = over;

        if over.is_some() {
            shell.capture_event();
        }
    }

    /// Handles the pointer being released.
    ///
    /// The hovered row, if any, pulses selected and loses its highlight.
    pub fn pointer_released(&mut self, now: Instant, shell: &mut Shell<'_, (usize, Event)>) {
        let Some(index) = self.hovered.take() else {
            return;
        };

        log::debug!("menu: row {index} activated");

        if let Some(item) = self.items.get_mut(index) {
            forward(index, item.as_mut(), shell, |item, shell| {
                item.notify_selected(true, now, shell);
                item.set_highlighted(false, shell);
            });
        }

        shell.capture_event();
    }

    /// Advances the clock of every row.
    ///
    /// Pending pulse exits settle here.
    pub fn tick(&mut self, now: Instant, shell: &mut Shell<'_, (usize, Event)>) {
        for (index, item) in self.items.iter_mut().enumerate() {
            forward(index, item.as_mut(), shell, |item, shell| {
                item.tick(now, shell);
            });
        }
    }

    /// Dismisses the menu, disposing every row.
    ///
    /// Disposal cancels pending pulse exits; no row publishes anything
    /// afterwards.
    pub fn dismiss(&mut self) {
        log::debug!("menu: dismissed");

        for item in &mut self.items {
            item.dispose();
        }

        self.hovered = None;
    }
}

/// Runs an item operation against a private event buffer and republishes its
/// events tagged with the row index.
fn forward(
    index: usize,
    item: &mut dyn Action,
    shell: &mut Shell<'_, (usize, Event)>,
    operation: impl FnOnce(&mut dyn Action, &mut Shell<'_, Event>),
) {
    let mut events = Vec::new();
    let mut item_shell = Shell::new(&mut events);

    operation(item, &mut item_shell);

    for event in events {
        shell.publish((index, event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ActionItem, SETTLE_DELAY};
    use crate::color::Color;
    use crate::event::{Pulse, Status};

    fn menu_of(titles: &[&str]) -> PopupMenu {
        let mut menu = PopupMenu::new();

        for title in titles {
            menu.push(ActionItem::new(Color::WHITE).with_title(*title));
        }

        menu
    }

    fn simulate(menu: &mut PopupMenu, run: impl FnOnce(&mut PopupMenu, &mut Shell<'_, (usize, Event)>)) -> Vec<(usize, Event)> {
        let mut events = Vec::new();
        let mut shell = Shell::new(&mut events);
        run(menu, &mut shell);
        events
    }

    #[test]
    fn hover_handoff_between_rows() {
        let mut menu = menu_of(&["Copy", "Paste"]);

        let events = simulate(&mut menu, |menu, shell| {
            menu.pointer_moved(Some(0), shell);
            menu.pointer_moved(Some(1), shell);
        });

        assert_eq!(
            events,
            vec![
                (0, Event::HighlightChanged(true)),
                (0, Event::HighlightChanged(false)),
                (1, Event::HighlightChanged(true)),
            ]
        );
        assert_eq!(menu.hovered(), Some(1));
    }

    #[test]
    fn pointer_off_the_menu_clears_the_highlight() {
        let mut menu = menu_of(&["Copy"]);

        let events = simulate(&mut menu, |menu, shell| {
            menu.pointer_moved(Some(0), shell);
            menu.pointer_moved(None, shell);
        });

        assert_eq!(
            events,
            vec![
                (0, Event::HighlightChanged(true)),
                (0, Event::HighlightChanged(false)),
            ]
        );
        assert_eq!(menu.hovered(), None);
    }

    #[test]
    fn out_of_range_rows_are_ignored() {
        let mut menu = menu_of(&["Copy"]);

        let events = simulate(&mut menu, |menu, shell| {
            menu.pointer_moved(Some(7), shell);
            assert_eq!(shell.event_status(), Status::Ignored);
        });

        assert!(events.is_empty());
        assert_eq!(menu.hovered(), None);
    }

    #[test]
    fn gesture_over_a_row_is_captured() {
        let mut menu = menu_of(&["Copy"]);

        let _ = simulate(&mut menu, |menu, shell| {
            menu.pointer_moved(Some(0), shell);
            assert!(shell.is_event_captured());
        });
    }

    #[test]
    fn release_pulses_the_hovered_row() {
        let mut menu = menu_of(&["Copy", "Paste"]);
        let now = Instant::now();

        let events = simulate(&mut menu, |menu, shell| {
            menu.pointer_moved(Some(1), shell);
            menu.pointer_released(now, shell);
            menu.tick(now + SETTLE_DELAY, shell);
        });

        assert_eq!(
            events,
            vec![
                (1, Event::HighlightChanged(true)),
                (1, Event::SelectedPulse(Pulse::Enter)),
                (1, Event::HighlightChanged(false)),
                (1, Event::SelectedPulse(Pulse::Exit)),
            ]
        );
        assert_eq!(menu.hovered(), None);
    }

    #[test]
    fn release_without_hover_does_nothing() {
        let mut menu = menu_of(&["Copy"]);
        let now = Instant::now();

        let events = simulate(&mut menu, |menu, shell| {
            menu.pointer_released(now, shell);
            assert_eq!(shell.event_status(), Status::Ignored);
        });

        assert!(events.is_empty());
    }

    #[test]
    fn dismissal_cancels_pending_pulses() {
        let mut menu = menu_of(&["Copy"]);
        let now = Instant::now();

        let events = simulate(&mut menu, |menu, shell| {
            menu.pointer_moved(Some(0), shell);
            menu.pointer_released(now, shell);
            menu.dismiss();
            menu.tick(now + SETTLE_DELAY * 10, shell);
        });

        assert_eq!(
            events,
            vec![
                (0, Event::HighlightChanged(true)),
                (0, Event::SelectedPulse(Pulse::Enter)),
                (0, Event::HighlightChanged(false)),
            ]
        );
        assert!(menu.get(0).is_some_and(Action::is_disposed));
    }

    #[test]
    fn dismissed_menu_ignores_gestures() {
        let mut menu = menu_of(&["Copy"]);
        menu.dismiss();

        let events = simulate(&mut menu, |menu, shell| {
            menu.pointer_moved(Some(0), shell);
        });

        assert!(events.is_empty());
    }

    #[test]
    fn rows_are_enumerable() {
        let menu = menu_of(&["Copy", "Paste", "Delete"]);

        assert_eq!(menu.len(), 3);
        assert!(!menu.is_empty());
        assert_eq!(menu.get(1).and_then(Action::title), Some("Paste"));
        assert!(menu.get(3).is_none());
    }
}
