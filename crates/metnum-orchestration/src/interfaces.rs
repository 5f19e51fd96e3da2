//! Interfaces the front-ends implement.

use std::sync::Arc;

use metnum_core::{Feature, ResultEnvelope};

use crate::chart::ChartData;
use crate::comparison::ComparisonReport;

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a formatted single-method result.
    fn present_result(&self, feature: Feature, text: &str, envelope: &ResultEnvelope);

    /// Present a comparison across every method of a feature.
    fn present_comparison(&self, feature: Feature, report: &ComparisonReport);

    /// Present an error in the feature's result area.
    fn present_error(&self, feature: Feature, message: &str);

    /// Present chart data for an interpolation result.
    fn present_chart(&self, _chart: &ChartData) {}
}

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Transient feedback (toasts in the TUI, status lines in the CLI).
pub trait Notifier: Send + Sync {
    fn notify(&self, level: NotificationLevel, message: &str);
}

/// Busy overlay or spinner.
pub trait BusyIndicator: Send + Sync {
    fn show(&self, message: &str);
    fn hide(&self);
}

/// The three UI collaborators a controller talks to.
#[derive(Clone)]
pub struct UiHandles {
    pub presenter: Arc<dyn ResultPresenter>,
    pub notifier: Arc<dyn Notifier>,
    pub busy: Arc<dyn BusyIndicator>,
}

impl UiHandles {
    #[must_use]
    pub fn new(
        presenter: Arc<dyn ResultPresenter>,
        notifier: Arc<dyn Notifier>,
        busy: Arc<dyn BusyIndicator>,
    ) -> Self {
        Self {
            presenter,
            notifier,
            busy,
        }
    }

    /// Handles that discard everything.
    #[must_use]
    pub fn null() -> Self {
        Self::new(
            Arc::new(NullPresenter),
            Arc::new(NullNotifier),
            Arc::new(NullBusyIndicator),
        )
    }
}

/// Null presenter (does nothing).
pub struct NullPresenter;

impl ResultPresenter for NullPresenter {
    fn present_result(&self, _feature: Feature, _text: &str, _envelope: &ResultEnvelope) {}
    fn present_comparison(&self, _feature: Feature, _report: &ComparisonReport) {}
    fn present_error(&self, _feature: Feature, _message: &str) {}
}

/// Null notifier (does nothing).
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _level: NotificationLevel, _message: &str) {}
}

/// Null busy indicator (does nothing).
pub struct NullBusyIndicator;

impl BusyIndicator for NullBusyIndicator {
    fn show(&self, _message: &str) {}
    fn hide(&self) {}
}
