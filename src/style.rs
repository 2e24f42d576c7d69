//! Styling of action items.

use crate::action::Action;
use crate::color::Color;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The fixed layout parameters of an action row, in density-independent
/// points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Metrics {
    /// Left padding of the title text.
    pub text_left_padding: f32,
    /// Left padding of the icon.
    pub icon_left_padding: f32,
    /// Side length of the square icon.
    pub icon_size: f32,
}

impl Metrics {
    /// The metrics every action row uses.
    pub const DEFAULT: Metrics = Metrics {
        text_left_padding: 25.0,
        icon_left_padding: 18.0,
        icon_size: 27.0,
    };
}

impl Default for Metrics {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The appearance of an action row, resolved from its current state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// The [`Color`] of the title text.
    pub text_color: Color,
    /// The [`Color`] the icon is tinted with.
    pub icon_color: Color,
    /// The background of the row, if any.
    ///
    /// `None` while the row rests; the contrasting backdrop while it is
    /// highlighted or pulsing.
    pub background: Option<Color>,
    /// The corner radius of the background.
    pub corner_radius: f32,
}

/// Produces the current [`Style`] of an action.
///
/// Text and icon always use the action's tint; the backdrop appears only for
/// the highlighted and pulsing states and is the black-or-white shade that
/// contrasts best with the tint.
#[must_use]
pub fn resolve(action: &dyn Action) -> Style {
    let tint = action.tint_color();

    let background = if action.is_highlighted() || action.is_selected() {
        Some(tint.contrasting_backdrop().color())
    } else {
        None
    };

    Style {
        text_color: tint,
        icon_color: tint,
        background,
        corner_radius: action.corner_radius(),
    }
}
