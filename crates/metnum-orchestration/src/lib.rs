//! # metnum-orchestration
//!
//! Feature controllers (calculate and compare), the interfaces front-ends
//! implement to show results, comparison reports and form persistence.

pub mod busy;
pub mod chart;
pub mod comparison;
pub mod controllers;
pub mod interfaces;
pub mod persistence;

pub use busy::BusyGuard;
pub use chart::ChartData;
pub use comparison::{ComparisonReport, MethodOutcome};
pub use controllers::{
    Controllers, DifferentiationController, IntegrationController, InterpolationController,
};
pub use interfaces::{
    BusyIndicator, NotificationLevel, Notifier, NullBusyIndicator, NullNotifier, NullPresenter,
    ResultPresenter, UiHandles,
};
pub use persistence::{ConfigManager, ConfigStore, FileStore, MemoryStore, StoreError};
