//! Action items and the capability interface a menu uses to drive them.

use crate::color::Color;
use crate::event::{Event, Pulse};
use crate::font::Font;
use crate::icon;
use crate::shell::Shell;

use web_time::{Duration, Instant};

/// How long the selected look is held before an activated item settles back
/// to its resting state.
pub const SETTLE_DELAY: Duration = Duration::from_millis(200);

/// The capability interface of one selectable row in a popup menu.
///
/// A [`PopupMenu`] stores heterogeneous actions behind this trait and forwards
/// gesture events to whichever one is under the pointer. Implementations are
/// plain state models; they publish [`Event`]s through the [`Shell`] and leave
/// drawing to the host.
///
/// [`PopupMenu`]: crate::PopupMenu
pub trait Action {
    /// Returns the text label of the action, if any.
    fn title(&self) -> Option<&str>;

    /// Returns the icon of the action, if any.
    fn icon(&self) -> Option<&icon::Handle>;

    /// Returns the tint [`Color`] of the label and icon.
    fn tint_color(&self) -> Color;

    /// Returns the [`Font`] of the label.
    fn font(&self) -> Font;

    /// Returns the corner radius of the row background.
    fn corner_radius(&self) -> f32;

    /// Returns whether the pointer is currently over the action.
    fn is_highlighted(&self) -> bool;

    /// Returns whether the action is inside its selection pulse.
    fn is_selected(&self) -> bool;

    /// Sets the highlight flag.
    ///
    /// Publishes [`Event::HighlightChanged`] only when the value actually
    /// changes; repeated calls with the same value are no-ops.
    fn set_highlighted(&mut self, value: bool, shell: &mut Shell<'_, Event>);

    /// Activates the action.
    ///
    /// When `animated` is true, publishes [`Pulse::Enter`] immediately and
    /// arms the matching [`Pulse::Exit`] for `now + `[`SETTLE_DELAY`]; the
    /// exit is delivered by [`Action::tick`]. When `animated` is false,
    /// nothing is published.
    fn notify_selected(&mut self, animated: bool, now: Instant, shell: &mut Shell<'_, Event>);

    /// Advances the action's clock.
    ///
    /// Publishes the pending [`Pulse::Exit`] once `now` reaches the armed
    /// deadline. The host is expected to call this from its redraw/timer
    /// loop while a pulse is pending.
    fn tick(&mut self, now: Instant, shell: &mut Shell<'_, Event>);

    /// Marks the action as dead.
    ///
    /// Every later operation is a guaranteed no-op; in particular, a pending
    /// pulse exit is cancelled and never published.
    fn dispose(&mut self);

    /// Returns whether [`Action::dispose`] has been called.
    fn is_disposed(&self) -> bool;
}

/// A tappable row of a popup menu: an optional icon next to an optional
/// title, tinted with a single color.
///
/// Content (title, icon, tint) is fixed at construction; only the highlight
/// and selection flags change while the menu is up.
///
/// # Example
/// ```
/// use popup_menu_core::{Action, ActionItem, Color};
///
/// let item = ActionItem::new(Color::from_rgb8(0xe7, 0x4c, 0x3c))
///     .with_title("Delete")
///     .with_icon("icons/trash.png");
///
/// assert_eq!(item.title(), Some("Delete"));
/// assert!(!item.is_highlighted());
/// ```
#[derive(Debug, Clone)]
pub struct ActionItem {
    title: Option<String>,
    icon: Option<icon::Handle>,
    tint_color: Color,
    font: Font,
    corner_radius: f32,
    highlighted: bool,
    selected: bool,
    pulse_deadline: Option<Instant>,
    disposed: bool,
}

impl ActionItem {
    /// The default corner radius of the row background.
    pub const DEFAULT_CORNER_RADIUS: f32 = 4.0;

    /// Creates a new [`ActionItem`] with the given tint [`Color`] and no
    /// title or icon.
    #[must_use]
    pub fn new(tint_color: Color) -> Self {
        Self {
            title: None,
            icon: None,
            tint_color,
            font: Font::DEFAULT,
            corner_radius: Self::DEFAULT_CORNER_RADIUS,
            highlighted: false,
            selected: false,
            pulse_deadline: None,
            disposed: false,
        }
    }

    /// Sets the title of the [`ActionItem`].
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the icon of the [`ActionItem`].
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<icon::Handle>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets the [`Font`] of the [`ActionItem`].
    #[must_use]
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Sets the corner radius of the [`ActionItem`].
    #[must_use]
    pub fn with_corner_radius(mut self, corner_radius: f32) -> Self {
        self.corner_radius = corner_radius;
        self
    }
}

impl Action for ActionItem {
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn icon(&self) -> Option<&icon::Handle> {
        self.icon.as_ref()
    }

    fn tint_color(&self) -> Color {
        self.tint_color
    }

    fn font(&self) -> Font {
        self.font
    }

    fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn set_highlighted(&mut self, value: bool, shell: &mut Shell<'_, Event>) {
        if self.disposed || self.highlighted == value {
            return;
        }

        log::trace!("action {:?}: highlighted = {value}", self.title);

        self.highlighted = value;
        shell.publish(Event::HighlightChanged(value));
    }

    fn notify_selected(&mut self, animated: bool, now: Instant, shell: &mut Shell<'_, Event>) {
        if self.disposed || !animated {
            return;
        }

        log::trace!("action {:?}: selected", self.title);

        // Re-activation before the exit fired re-arms the deadline; the
        // earlier pulse never gets a second enter or a stray exit.
        self.selected = true;
        self.pulse_deadline = Some(now + SETTLE_DELAY);
        shell.publish(Event::SelectedPulse(Pulse::Enter));
    }

    fn tick(&mut self, now: Instant, shell: &mut Shell<'_, Event>) {
        if self.disposed {
            return;
        }

        if let Some(deadline) = self.pulse_deadline
            && now >= deadline
        {
            self.pulse_deadline = None;
            self.selected = false;
            shell.publish(Event::SelectedPulse(Pulse::Exit));
        }
    }

    fn dispose(&mut self) {
        if self.disposed {
            return;
        }

        log::debug!("action {:?}: disposed", self.title);

        self.disposed = true;
        self.pulse_deadline = None;
        self.highlighted = false;
        self.selected = false;
    }

    fn is_disposed(&self) -> bool {
        self.disposed
    }
}
