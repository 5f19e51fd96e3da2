//! Feature controllers.
//!
//! Each controller runs the same two flows. `calculate` validates locally,
//! makes one remote call and renders the envelope. `compare` validates the
//! shared parameters once, then calls the server for every method in
//! enumeration order, capturing failures per method.

use metnum_client::ApiClient;
use metnum_core::{
    format_number, format_result, DifferentiationForm, DifferentiationMethod,
    DifferentiationRequest, Feature, FormatOptions, IntegrationForm, IntegrationMethod,
    IntegrationRequest, InterpolationForm, InterpolationMethod, InterpolationRequest, Method,
    MetnumError, RemoteError, ResultEnvelope, ResultValue,
};

use crate::busy::BusyGuard;
use crate::chart::ChartData;
use crate::comparison::{ComparisonReport, MethodOutcome, DIFFERENTIATION_RECOMMENDATION};
use crate::interfaces::{NotificationLevel, UiHandles};

/// State shared by the three controllers.
#[derive(Clone)]
struct Context {
    api: ApiClient,
    ui: UiHandles,
    format: FormatOptions,
}

impl Context {
    /// Report a local validation failure and pass it on.
    fn local<T>(&self, feature: Feature, gathered: Result<T, MetnumError>) -> Result<T, MetnumError> {
        gathered.map_err(|err| {
            tracing::debug!(%feature, error = %err, "local validation failed");
            self.fail(feature, &err.to_string());
            err
        })
    }

    /// Turn a remote reply into a successful envelope, rendering either
    /// the result or the error.
    fn remote(
        &self,
        feature: Feature,
        reply: Result<ResultEnvelope, RemoteError>,
    ) -> Result<ResultEnvelope, MetnumError> {
        match reply.and_then(require_success) {
            Ok(envelope) => {
                let text = format_result(&envelope, &self.format);
                self.ui.presenter.present_result(feature, &text, &envelope);
                self.ui.notifier.notify(
                    NotificationLevel::Success,
                    &summarize(feature, &envelope, self.format.decimals),
                );
                Ok(envelope)
            }
            Err(err) => {
                tracing::warn!(%feature, error = %err, "remote call failed");
                self.fail(feature, &err.to_string());
                Err(err.into())
            }
        }
    }

    fn fail(&self, feature: Feature, message: &str) {
        self.ui.presenter.present_error(feature, message);
        self.ui.notifier.notify(NotificationLevel::Error, message);
    }

    fn finish_comparison(&self, report: ComparisonReport) -> ComparisonReport {
        let total = report.rows.len();
        let failed = report.failures();
        tracing::info!(feature = %report.feature, total, failed, "comparison finished");

        self.ui.presenter.present_comparison(report.feature, &report);
        let (level, message) = if failed == 0 {
            (
                NotificationLevel::Success,
                format!("Comparación completada: {total} métodos"),
            )
        } else if failed == total {
            (
                NotificationLevel::Error,
                "Todos los métodos fallaron".to_string(),
            )
        } else {
            (
                NotificationLevel::Warning,
                format!("Comparación completada: {failed} de {total} métodos con error"),
            )
        };
        self.ui.notifier.notify(level, &message);
        report
    }
}

/// A 2xx envelope still counts as a failure when it carries an error.
fn require_success(envelope: ResultEnvelope) -> Result<ResultEnvelope, RemoteError> {
    match envelope.failure_message() {
        Some(message) => Err(RemoteError::Server(message)),
        None => Ok(envelope),
    }
}

/// One-line summary for the success notification.
fn summarize(feature: Feature, envelope: &ResultEnvelope, decimals: usize) -> String {
    match (&envelope.result, feature) {
        (Some(ResultValue::Series(values)), _) => {
            format!("{} completada: {} puntos evaluados", feature.label(), values.len())
        }
        (Some(ResultValue::Scalar(v)), Feature::Integration) => {
            format!("Integral ≈ {}", format_number(*v, decimals))
        }
        (Some(ResultValue::Scalar(v)), Feature::Differentiation) => {
            format!("Derivada ≈ {}", format_number(*v, decimals))
        }
        _ => format!("{} completada", feature.label()),
    }
}

/// Interpolation: `linear`, `newton`, `lagrange`, `spline`.
#[derive(Clone)]
pub struct InterpolationController {
    ctx: Context,
}

impl InterpolationController {
    pub fn calculate(&self, form: &InterpolationForm) -> Result<ResultEnvelope, MetnumError> {
        let feature = Feature::Interpolation;
        let _busy = BusyGuard::show(self.ctx.ui.busy.as_ref(), "Calculando interpolación...");
        let request = self.ctx.local(feature, InterpolationRequest::from_form(form))?;
        let envelope = self.ctx.remote(feature, self.ctx.api.interpolate(&request))?;
        if let Some(chart) = ChartData::from_interpolation(&request, &envelope) {
            self.ctx.ui.presenter.present_chart(&chart);
        }
        Ok(envelope)
    }

    pub fn compare(&self, form: &InterpolationForm) -> Result<ComparisonReport, MetnumError> {
        let feature = Feature::Interpolation;
        let _busy = BusyGuard::show(self.ctx.ui.busy.as_ref(), "Comparando métodos...");
        let base = self.ctx.local(
            feature,
            InterpolationRequest::gather(form, InterpolationMethod::ALL[0]),
        )?;
        let rows = InterpolationMethod::ALL
            .iter()
            .map(|&m| {
                let reply = self
                    .ctx
                    .api
                    .interpolate(&base.with_method(m))
                    .and_then(require_success);
                MethodOutcome::new(m.key(), m.label(), reply)
            })
            .collect();
        Ok(self.ctx.finish_comparison(ComparisonReport::new(feature, rows)))
    }
}

/// Integration: `trapecio`, `simpson13`, `simpson38`, `gauss`.
#[derive(Clone)]
pub struct IntegrationController {
    ctx: Context,
}

impl IntegrationController {
    pub fn calculate(&self, form: &IntegrationForm) -> Result<ResultEnvelope, MetnumError> {
        let feature = Feature::Integration;
        let _busy = BusyGuard::show(self.ctx.ui.busy.as_ref(), "Calculando integral...");
        let request = self.ctx.local(feature, IntegrationRequest::from_form(form))?;
        self.ctx.remote(feature, self.ctx.api.integrate(&request))
    }

    pub fn compare(&self, form: &IntegrationForm) -> Result<ComparisonReport, MetnumError> {
        let feature = Feature::Integration;
        let _busy = BusyGuard::show(self.ctx.ui.busy.as_ref(), "Comparando métodos...");
        let base = self.ctx.local(
            feature,
            IntegrationRequest::gather(form, IntegrationMethod::ALL[0]),
        )?;
        let rows = IntegrationMethod::ALL
            .iter()
            .map(|&m| {
                let reply = self
                    .ctx
                    .api
                    .integrate(&base.with_method(m))
                    .and_then(require_success);
                MethodOutcome::new(m.key(), m.label(), reply)
            })
            .collect();
        Ok(self.ctx.finish_comparison(ComparisonReport::new(feature, rows)))
    }
}

/// Differentiation: `adelante`, `atras`, `centrada`.
#[derive(Clone)]
pub struct DifferentiationController {
    ctx: Context,
}

impl DifferentiationController {
    pub fn calculate(&self, form: &DifferentiationForm) -> Result<ResultEnvelope, MetnumError> {
        let feature = Feature::Differentiation;
        let _busy = BusyGuard::show(self.ctx.ui.busy.as_ref(), "Calculando derivada...");
        let request = self.ctx.local(feature, DifferentiationRequest::from_form(form))?;
        self.ctx.remote(feature, self.ctx.api.derive(&request))
    }

    /// Compare every scheme. When a successful response carries an exact
    /// value, each row also reports its absolute error.
    pub fn compare(&self, form: &DifferentiationForm) -> Result<ComparisonReport, MetnumError> {
        let feature = Feature::Differentiation;
        let _busy = BusyGuard::show(self.ctx.ui.busy.as_ref(), "Comparando métodos...");
        let base = self.ctx.local(
            feature,
            DifferentiationRequest::gather(form, DifferentiationMethod::ALL[0]),
        )?;
        let rows = DifferentiationMethod::ALL
            .iter()
            .map(|&m| {
                let reply = self
                    .ctx
                    .api
                    .derive(&base.with_method(m))
                    .and_then(require_success);
                MethodOutcome::new(m.key(), m.label(), reply)
            })
            .collect();
        let report = ComparisonReport::new(feature, rows)
            .with_exact_errors()
            .with_recommendation(DIFFERENTIATION_RECOMMENDATION);
        Ok(self.ctx.finish_comparison(report))
    }
}

/// The three controllers, built once and shared by every front-end.
#[derive(Clone)]
pub struct Controllers {
    pub interpolation: InterpolationController,
    pub integration: IntegrationController,
    pub differentiation: DifferentiationController,
}

impl Controllers {
    #[must_use]
    pub fn new(api: ApiClient, ui: UiHandles, format: FormatOptions) -> Self {
        let ctx = Context { api, ui, format };
        Self {
            interpolation: InterpolationController { ctx: ctx.clone() },
            integration: IntegrationController { ctx: ctx.clone() },
            differentiation: DifferentiationController { ctx },
        }
    }
}
