//! Number and result formatting.

use serde_json::Value;

use crate::constants::{
    DEFAULT_DECIMALS, PAIR_LIMIT, PREVIEW_LIMIT, SCIENTIFIC_DIGITS, SCIENTIFIC_LOWER_BOUND,
    SCIENTIFIC_UPPER_BOUND,
};
use crate::envelope::{ResultEnvelope, ResultValue};

/// Formatting knobs shared by every renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Decimals kept in fixed-point output.
    pub decimals: usize,
    /// Include pros/cons, complexity and integration steps.
    pub details: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
            details: false,
        }
    }
}

/// Format a number for display.
///
/// Very small (nonzero) or very large magnitudes use scientific notation
/// with three fractional digits; everything else is rounded to `decimals`
/// places with trailing zeros removed.
#[must_use]
pub fn format_number(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let magnitude = value.abs();
    if (magnitude > 0.0 && magnitude < SCIENTIFIC_LOWER_BOUND) || magnitude > SCIENTIFIC_UPPER_BOUND
    {
        return format_scientific(value);
    }

    let fixed = format!("{value:.decimals$}");
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Scientific notation with an explicitly signed exponent, e.g. `1.235e+11`.
fn format_scientific(value: f64) -> String {
    let raw = format!("{value:.SCIENTIFIC_DIGITS$e}");
    match raw.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => raw,
    }
}

/// Format a list of numbers as `[a, b, c]`.
#[must_use]
pub fn format_list(values: &[f64], decimals: usize) -> String {
    let items: Vec<String> = values.iter().map(|&v| format_number(v, decimals)).collect();
    format!("[{}]", items.join(", "))
}

/// Like [`format_list`], but shows at most the first few values.
#[must_use]
pub fn format_preview(values: &[f64], decimals: usize) -> String {
    let shown: Vec<String> = values
        .iter()
        .take(PREVIEW_LIMIT)
        .map(|&v| format_number(v, decimals))
        .collect();
    let elision = if values.len() > PREVIEW_LIMIT { ", …" } else { "" };
    format!("[{}{elision}]", shown.join(", "))
}

/// Render a result envelope as display text.
#[must_use]
pub fn format_result(envelope: &ResultEnvelope, opts: &FormatOptions) -> String {
    if let Some(message) = envelope.failure_message() {
        return format!("Error: {message}");
    }

    let mut sections: Vec<Vec<String>> = Vec::new();

    match &envelope.result {
        Some(ResultValue::Series(values)) => {
            sections.push(format_series(values, envelope.query_points().as_deref(), opts));
        }
        Some(ResultValue::Scalar(value)) => {
            sections.push(vec![format!(
                "Resultado: {}",
                format_number(*value, opts.decimals)
            )]);
        }
        None => sections.push(vec!["Resultado: (sin valor)".to_string()]),
    }

    let mut about = Vec::new();
    if let Some(name) = envelope.method_name() {
        about.push(format!("Método: {name}"));
    }
    if let Some(formula) = &envelope.formula {
        about.push(format!("Fórmula aplicada: {formula}"));
    }
    if let Some(exp) = &envelope.explanation {
        if let Some(d) = &exp.description {
            about.push(format!("Descripción: {d}"));
        }
        if let Some(f) = &exp.formula {
            about.push(format!("Fórmula: {f}"));
        }
        if let Some(a) = &exp.accuracy {
            about.push(format!("Precisión: {a}"));
        }
        if opts.details {
            if !exp.pros.is_empty() {
                about.push(format!("Ventajas: {}", exp.pros.join(", ")));
            }
            if !exp.cons.is_empty() {
                about.push(format!("Desventajas: {}", exp.cons.join(", ")));
            }
            if let Some(c) = &exp.complexity {
                about.push(format!("Complejidad: {c}"));
            }
            if let Some(r) = &exp.recommendation {
                about.push(format!("Recomendación: {r}"));
            }
        }
    }
    if !about.is_empty() {
        sections.push(about);
    }

    if opts.details && !envelope.steps.is_empty() {
        let mut steps = vec!["Pasos:".to_string()];
        for step in &envelope.steps {
            if let Some(desc) = &step.description {
                steps.push(format!("  [{}] {desc}", step.label()));
            }
            if let Some(formula) = &step.formula {
                steps.push(format!("      {formula}"));
            }
        }
        sections.push(steps);
    }

    if let Some(input) = &envelope.input {
        let mut params = vec!["Parámetros:".to_string()];
        for (key, value) in input {
            params.push(format!("  {key}: {}", format_value(value, opts.decimals)));
        }
        sections.push(params);
    }

    sections
        .into_iter()
        .map(|lines| lines.join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn format_series(values: &[f64], query_points: Option<&[f64]>, opts: &FormatOptions) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!(
        "Resultados ({} valores): {}",
        values.len(),
        format_preview(values, opts.decimals)
    ));

    lines.push("Evaluación en los puntos:".to_string());
    for (i, &v) in values.iter().enumerate().take(PAIR_LIMIT) {
        let point = query_points
            .and_then(|q| q.get(i))
            .map_or_else(|| format!("#{}", i + 1), |&p| format_number(p, opts.decimals));
        lines.push(format!(
            "  P({point}) → {}",
            format_number(v, opts.decimals)
        ));
    }
    if values.len() > PAIR_LIMIT {
        lines.push(format!("  … y {} puntos más", values.len() - PAIR_LIMIT));
    }
    lines
}

fn format_value(value: &Value, decimals: usize) -> String {
    match value {
        Value::Number(n) => n
            .as_f64()
            .map_or_else(|| n.to_string(), |v| format_number(v, decimals)),
        Value::String(s) => s.clone(),
        Value::Array(items) => {
            let rendered: Vec<String> = items.iter().map(|v| format_value(v, decimals)).collect();
            format!("[{}]", rendered.join(", "))
        }
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}
