//! The headless model of a popup action menu.
//!
//! This crate contains nothing that draws. It models the rows of a popup
//! menu — title, icon, tint, and the two interaction flags every row has —
//! and publishes [`Event`]s whenever a gesture changes one of them. A host
//! view layer owns the actual widgets and turns the events into rendering
//! and animation with whatever GUI toolkit it is built on.
//!
//! # Overview
//!
//! - [`ActionItem`] is one tappable row. Its content is fixed at
//!   construction; only the highlight and selection flags move afterwards.
//! - [`Action`] is the capability interface a menu drives rows through, so
//!   heterogeneous rows can live in one container.
//! - [`PopupMenu`] owns the rows, forwards pointer gestures, and disposes
//!   everything on dismissal.
//! - [`Shell`] carries published events back to the host, the same way a
//!   widget tree hands messages up to its runtime.
//!
//! # Example
//! ```
//! use popup_menu_core::{ActionItem, Color, Event, PopupMenu, Pulse, Shell};
//! use web_time::Instant;
//!
//! let mut menu = PopupMenu::new();
//! menu.push(
//!     ActionItem::new(Color::from_rgb8(0x3c, 0x8c, 0xe7)).with_title("Share"),
//! );
//!
//! let mut events: Vec<(usize, Event)> = Vec::new();
//! let mut shell = Shell::new(&mut events);
//!
//! let now = Instant::now();
//! menu.pointer_moved(Some(0), &mut shell);
//! menu.pointer_released(now, &mut shell);
//!
//! assert_eq!(
//!     events,
//!     vec![
//!         (0, Event::HighlightChanged(true)),
//!         (0, Event::SelectedPulse(Pulse::Enter)),
//!         (0, Event::HighlightChanged(false)),
//!     ],
//! );
//! ```
//!
//! The selection pulse settles on the host's clock: keep calling
//! [`PopupMenu::tick`] and the matching [`Pulse::Exit`] arrives once the
//! settle delay elapses. Dismissing the menu first cancels it.
pub mod action;
pub mod color;
pub mod event;
pub mod font;
pub mod icon;
pub mod menu;
pub mod shell;
pub mod style;

pub use action::{Action, ActionItem, SETTLE_DELAY};
pub use color::{Backdrop, Color};
pub use event::{Event, Pulse};
pub use font::Font;
pub use menu::PopupMenu;
pub use shell::Shell;
pub use style::{Metrics, Style};
