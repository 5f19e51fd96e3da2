//! # metnum-cli
//!
//! CLI output, notifications, busy spinner and shell completion.

pub mod busy;
pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use busy::SpinnerBusyIndicator;
pub use presenter::{CliNotifier, CliResultPresenter};
