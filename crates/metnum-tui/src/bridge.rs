//! Bridge between the controllers and TUI messages.
//!
//! Controllers run on worker threads; these adapters turn their UI calls
//! into messages the event loop applies on the UI thread.

use std::sync::Arc;

use crossbeam_channel::Sender;

use metnum_core::{Feature, ResultEnvelope};
use metnum_orchestration::{
    BusyIndicator, ChartData, ComparisonReport, NotificationLevel, Notifier, ResultPresenter,
    UiHandles,
};

use crate::messages::TuiMessage;

/// TUI result presenter.
pub struct TuiResultPresenter {
    tx: Sender<TuiMessage>,
    decimals: usize,
}

impl TuiResultPresenter {
    #[must_use]
    pub fn new(tx: Sender<TuiMessage>, decimals: usize) -> Self {
        Self { tx, decimals }
    }
}

impl ResultPresenter for TuiResultPresenter {
    fn present_result(&self, feature: Feature, text: &str, _envelope: &ResultEnvelope) {
        let _ = self.tx.try_send(TuiMessage::Result {
            feature,
            text: text.to_string(),
        });
    }

    fn present_comparison(&self, feature: Feature, report: &ComparisonReport) {
        let _ = self.tx.try_send(TuiMessage::Comparison {
            feature,
            text: report.render(self.decimals),
        });
    }

    fn present_error(&self, feature: Feature, message: &str) {
        let _ = self.tx.try_send(TuiMessage::Error {
            feature,
            message: message.to_string(),
        });
    }

    fn present_chart(&self, chart: &ChartData) {
        let _ = self.tx.try_send(TuiMessage::Chart(chart.clone()));
    }
}

/// TUI notifier (toasts).
pub struct TuiNotifier {
    tx: Sender<TuiMessage>,
}

impl TuiNotifier {
    #[must_use]
    pub fn new(tx: Sender<TuiMessage>) -> Self {
        Self { tx }
    }
}

impl Notifier for TuiNotifier {
    fn notify(&self, level: NotificationLevel, message: &str) {
        let _ = self.tx.try_send(TuiMessage::Notify {
            level,
            message: message.to_string(),
        });
    }
}

/// TUI busy overlay.
pub struct TuiBusyIndicator {
    tx: Sender<TuiMessage>,
}

impl TuiBusyIndicator {
    #[must_use]
    pub fn new(tx: Sender<TuiMessage>) -> Self {
        Self { tx }
    }
}

impl BusyIndicator for TuiBusyIndicator {
    fn show(&self, message: &str) {
        let _ = self.tx.try_send(TuiMessage::BusyShow(message.to_string()));
    }

    fn hide(&self) {
        let _ = self.tx.try_send(TuiMessage::BusyHide);
    }
}

/// UI handles that forward every controller call to `tx`.
#[must_use]
pub fn ui_handles(tx: &Sender<TuiMessage>, decimals: usize) -> UiHandles {
    UiHandles::new(
        Arc::new(TuiResultPresenter::new(tx.clone(), decimals)),
        Arc::new(TuiNotifier::new(tx.clone())),
        Arc::new(TuiBusyIndicator::new(tx.clone())),
    )
}
