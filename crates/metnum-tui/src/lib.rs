//! # metnum-tui
//!
//! Interactive terminal front-end using ratatui with Elm architecture.
//! Calculations run on worker threads and report back through a
//! crossbeam channel, so the event loop never blocks on the network.

pub mod bridge;
pub mod chart;
pub mod fields;
pub mod footer;
pub mod form_panel;
pub mod header;
pub mod home;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod navigation;
pub mod overlay;
pub mod results;
pub mod styles;
pub mod toast;

pub use bridge::{ui_handles, TuiBusyIndicator, TuiNotifier, TuiResultPresenter};
pub use messages::TuiMessage;
pub use model::TuiApp;
pub use navigation::{Navigator, View};
