//! Events published by action items.

/// A state transition of an action item.
///
/// The view layer hosting the menu translates these into actual drawing and
/// animation; the model only records that the transition happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The highlight flag changed to the given value.
    ///
    /// Published on pointer enter/leave, never twice in a row for the same
    /// value.
    HighlightChanged(bool),

    /// One phase of the selection pulse.
    SelectedPulse(Pulse),
}

/// A phase of the two-phase selection pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pulse {
    /// The item just got activated; show the selected look.
    Enter,

    /// The settle delay elapsed; return to the resting look.
    Exit,
}

/// The status of a gesture after being processed by a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The gesture was **NOT** over any action item.
    Ignored,

    /// The gesture was handled by an action item.
    Captured,
}

impl Status {
    /// Merges two [`Status`] into one.
    ///
    /// `Captured` takes precedence over `Ignored`:
    ///
    /// ```
    /// use popup_menu_core::event::Status;
    ///
    /// assert_eq!(Status::Ignored.merge(Status::Ignored), Status::Ignored);
    /// assert_eq!(Status::Ignored.merge(Status::Captured), Status::Captured);
    /// assert_eq!(Status::Captured.merge(Status::Ignored), Status::Captured);
    /// assert_eq!(Status::Captured.merge(Status::Captured), Status::Captured);
    /// ```
    #[must_use]
    pub fn merge(self, b: Self) -> Self {
        match self {
            Status::Ignored => b,
            Status::Captured => Status::Captured,
        }
    }
}
