//! CLI result presenter and notifier.

use std::io::{self, Write};

use parking_lot::Mutex;

use metnum_core::{format_list, format_number, Feature, ResultEnvelope, ResultValue};
use metnum_orchestration::{ComparisonReport, NotificationLevel, Notifier, ResultPresenter};

use crate::ui;

/// CLI result presenter.
///
/// Results go to the configured writer (stdout by default); errors always
/// go to stderr.
pub struct CliResultPresenter {
    verbose: bool,
    quiet: bool,
    decimals: usize,
    out: Mutex<Box<dyn Write + Send>>,
}

impl CliResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, decimals: usize) -> Self {
        Self::with_writer(verbose, quiet, decimals, Box::new(io::stdout()))
    }

    #[must_use]
    pub fn with_writer(
        verbose: bool,
        quiet: bool,
        decimals: usize,
        out: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            verbose,
            quiet,
            decimals,
            out: Mutex::new(out),
        }
    }

    fn emit(&self, text: &str) {
        let mut out = self.out.lock();
        if let Err(e) = writeln!(out, "{text}").and_then(|()| out.flush()) {
            tracing::warn!(error = %e, "failed to write result");
        }
    }

    /// Just the value, for scripting.
    fn bare_value(&self, envelope: &ResultEnvelope) -> String {
        match &envelope.result {
            Some(ResultValue::Scalar(v)) => format_number(*v, self.decimals),
            Some(ResultValue::Series(vs)) => format_list(vs, self.decimals),
            None => String::new(),
        }
    }
}

impl ResultPresenter for CliResultPresenter {
    fn present_result(&self, feature: Feature, text: &str, envelope: &ResultEnvelope) {
        if self.quiet {
            self.emit(&self.bare_value(envelope));
            return;
        }

        self.emit(&ui::header_line(feature.label()));
        self.emit(text);

        if self.verbose {
            match serde_json::to_string_pretty(envelope) {
                Ok(json) => self.emit(&format!("\nRespuesta del servidor:\n{json}")),
                Err(e) => tracing::debug!(error = %e, "could not re-serialize envelope"),
            }
        }
    }

    fn present_comparison(&self, feature: Feature, report: &ComparisonReport) {
        if self.quiet {
            for row in &report.rows {
                let value = match &row.outcome {
                    Ok(env) => self.bare_value(env),
                    Err(e) => format!("error: {e}"),
                };
                self.emit(&format!("{}\t{value}", row.key));
            }
            return;
        }

        self.emit(&ui::header_line(feature.label()));
        self.emit(&report.render(self.decimals));
    }

    fn present_error(&self, _feature: Feature, message: &str) {
        ui::print_error(message);
    }
}

/// Notifications as status lines on stderr.
///
/// Errors are skipped: the presenter already reports them.
pub struct CliNotifier {
    quiet: bool,
}

impl CliNotifier {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Notifier for CliNotifier {
    fn notify(&self, level: NotificationLevel, message: &str) {
        match level {
            NotificationLevel::Error => {}
            NotificationLevel::Warning => ui::print_warning(message),
            _ if self.quiet => {}
            NotificationLevel::Success => ui::print_success(message),
            NotificationLevel::Info => ui::print_info(message),
        }
    }
}
