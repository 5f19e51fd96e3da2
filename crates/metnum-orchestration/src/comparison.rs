//! Comparison of every method of a feature.

use metnum_core::{
    format_number, format_preview, Feature, RemoteError, ResultEnvelope, ResultValue,
};

/// Accuracy guidance appended to differentiation comparisons.
pub const DIFFERENTIATION_RECOMMENDATION: &str = "La diferencia centrada suele ser la más \
precisa (error O(h²)); las diferencias hacia adelante y hacia atrás tienen error O(h).";

/// Outcome of one method's remote call.
#[derive(Debug, Clone)]
pub struct MethodOutcome {
    /// Method key sent to the server.
    pub key: &'static str,
    /// Human-readable method name.
    pub label: &'static str,
    /// The successful envelope or the error that call ended with.
    pub outcome: Result<ResultEnvelope, RemoteError>,
    /// `|value - exact|`, when an exact value is known.
    pub abs_error: Option<f64>,
}

impl MethodOutcome {
    #[must_use]
    pub fn new(
        key: &'static str,
        label: &'static str,
        outcome: Result<ResultEnvelope, RemoteError>,
    ) -> Self {
        Self {
            key,
            label,
            outcome,
            abs_error: None,
        }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Scalar result of a successful call.
    #[must_use]
    pub fn scalar(&self) -> Option<f64> {
        self.outcome
            .as_ref()
            .ok()?
            .result
            .as_ref()?
            .as_scalar()
    }
}

/// Rows in method enumeration order, plus differentiation extras.
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    pub feature: Feature,
    pub rows: Vec<MethodOutcome>,
    /// Reference value taken from the first successful response carrying one.
    pub exact: Option<f64>,
    pub recommendation: Option<&'static str>,
}

impl ComparisonReport {
    #[must_use]
    pub fn new(feature: Feature, rows: Vec<MethodOutcome>) -> Self {
        Self {
            feature,
            rows,
            exact: None,
            recommendation: None,
        }
    }

    /// Take the exact value from the first successful row that has one and
    /// fill in every row's absolute error against it.
    #[must_use]
    pub fn with_exact_errors(mut self) -> Self {
        self.exact = self
            .rows
            .iter()
            .filter_map(|r| r.outcome.as_ref().ok())
            .find_map(|env| env.exact);

        if let Some(exact) = self.exact {
            for row in &mut self.rows {
                row.abs_error = row.scalar().map(|v| (v - exact).abs());
            }
        }
        self
    }

    #[must_use]
    pub fn with_recommendation(mut self, text: &'static str) -> Self {
        self.recommendation = Some(text);
        self
    }

    #[must_use]
    pub fn successes(&self) -> usize {
        self.rows.iter().filter(|r| r.is_ok()).count()
    }

    #[must_use]
    pub fn failures(&self) -> usize {
        self.rows.len() - self.successes()
    }

    /// Render as text: one line per method, successes marked `✅` and
    /// failures `❌`.
    #[must_use]
    pub fn render(&self, decimals: usize) -> String {
        let width = self.rows.iter().map(|r| r.label.chars().count()).max().unwrap_or(0);
        let mut lines = vec![format!("Comparación de métodos: {}", self.feature.label())];

        if let Some(exact) = self.exact {
            lines.push(format!("Valor exacto: {}", format_number(exact, decimals)));
        }

        for row in &self.rows {
            let label = format!("{:<width$}", row.label);
            match &row.outcome {
                Ok(env) => {
                    let value = match &env.result {
                        Some(ResultValue::Scalar(v)) => format_number(*v, decimals),
                        Some(ResultValue::Series(vs)) => format_preview(vs, decimals),
                        None => "-".to_string(),
                    };
                    let error = row
                        .abs_error
                        .map(|e| format!("  (error: {})", format_number(e, decimals)))
                        .unwrap_or_default();
                    lines.push(format!("✅ {label}  {value}{error}"));
                }
                Err(err) => lines.push(format!("❌ {label}  Error: {err}")),
            }
        }

        if let Some(text) = self.recommendation {
            lines.push(String::new());
            lines.push(format!("Recomendación: {text}"));
        }
        lines.join("\n")
    }
}
