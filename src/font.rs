//! Opaque text styling handles.

/// A font that can be used to draw an action title.
///
/// The model never interprets this value; it is carried through to whatever
/// text renderer the host embeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Font {
    /// The [`Family`] of the [`Font`].
    pub family: Family,
    /// The [`Weight`] of the [`Font`].
    pub weight: Weight,
}

impl Font {
    /// A non-monospaced font with normal weight.
    pub const DEFAULT: Font = Font {
        family: Family::SansSerif,
        weight: Weight::Normal,
    };

    /// A monospaced font with normal weight.
    pub const MONOSPACE: Font = Font {
        family: Family::Monospace,
        weight: Weight::Normal,
    };

    /// Creates a [`Font`] with the given [`Family`].
    #[must_use]
    pub const fn with_family(family: Family) -> Font {
        Font {
            family,
            weight: Weight::Normal,
        }
    }
}

/// A font family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Family {
    /// Glyphs are generally sans serif.
    #[default]
    SansSerif,
    /// Glyphs have finishing strokes.
    Serif,
    /// Glyphs have the same fixed width.
    Monospace,
    /// A specific font family by name.
    Name(&'static str),
}

/// The weight of some text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Weight {
    /// Light weight.
    Light,
    /// Normal weight.
    #[default]
    Normal,
    /// Medium weight.
    Medium,
    /// Bold weight.
    Bold,
}
