//! Spinner shown while a request is in flight.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use parking_lot::Mutex;

use metnum_orchestration::BusyIndicator;

const TICK: Duration = Duration::from_millis(100);

/// Busy indicator drawing an indicatif spinner on stderr.
///
/// Disabled in quiet mode; indicatif hides it by itself when stderr is not
/// a terminal.
pub struct SpinnerBusyIndicator {
    enabled: bool,
    bar: Mutex<Option<ProgressBar>>,
}

impl SpinnerBusyIndicator {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            bar: Mutex::new(None),
        }
    }

    /// Whether a spinner is currently active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.bar.lock().is_some()
    }
}

impl BusyIndicator for SpinnerBusyIndicator {
    fn show(&self, message: &str) {
        if !self.enabled {
            return;
        }
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg} [{elapsed}]") {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(TICK);
        if let Some(previous) = self.bar.lock().replace(bar) {
            previous.finish_and_clear();
        }
    }

    fn hide(&self) {
        if let Some(bar) = self.bar.lock().take() {
            bar.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_then_hide() {
        let busy = SpinnerBusyIndicator::new(true);
        busy.show("Calculando integral...");
        assert!(busy.is_active());
        busy.hide();
        assert!(!busy.is_active());
    }

    #[test]
    fn disabled_never_activates() {
        let busy = SpinnerBusyIndicator::new(false);
        busy.show("x");
        assert!(!busy.is_active());
        busy.hide();
    }

    #[test]
    fn hide_without_show() {
        SpinnerBusyIndicator::new(true).hide();
    }
}
