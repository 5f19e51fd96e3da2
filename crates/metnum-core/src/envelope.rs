//! Result envelope returned by the computation server.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A computed value: one number, or one number per query point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultValue {
    Scalar(f64),
    Series(Vec<f64>),
}

impl ResultValue {
    #[must_use]
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(v) => Some(*v),
            Self::Series(_) => None,
        }
    }

    #[must_use]
    pub fn as_series(&self) -> Option<&[f64]> {
        match self {
            Self::Series(v) => Some(v),
            Self::Scalar(_) => None,
        }
    }
}

/// Explanation block attached to successful results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Explanation {
    /// Display name of the method, e.g. "Splines Cúbicos Naturales".
    pub method: Option<String>,
    pub description: Option<String>,
    pub formula: Option<String>,
    pub accuracy: Option<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub complexity: Option<String>,
    pub recommendation: Option<String>,
    pub use_case: Option<String>,
    pub degree: Option<u32>,
}

/// One entry of the step-by-step trace integration results carry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Step {
    /// A step number or a tag such as "final".
    pub step: Value,
    pub description: Option<String>,
    pub formula: Option<String>,
}

impl Step {
    /// Step label without JSON quoting.
    #[must_use]
    pub fn label(&self) -> String {
        match &self.step {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

/// Response body of every computation endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultEnvelope {
    pub success: bool,
    pub result: Option<ResultValue>,
    /// Method key echoed by the server.
    pub method: Option<String>,
    pub explanation: Option<Explanation>,
    /// The parameters the server actually used.
    pub input: Option<Map<String, Value>>,
    pub error: Option<String>,
    /// Finite-difference formula (differentiation only).
    pub formula: Option<String>,
    pub steps: Vec<Step>,
    pub points_count: Option<usize>,
    /// Analytic reference value, when the server can compute one.
    pub exact: Option<f64>,
}

impl ResultEnvelope {
    /// A successful envelope with the given result, for tests and fakes.
    #[must_use]
    pub fn success(result: ResultValue) -> Self {
        Self {
            success: true,
            result: Some(result),
            ..Self::default()
        }
    }

    /// An error envelope.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// The error message if the server reported a failure.
    ///
    /// An envelope with neither `success` nor `error` set counts as a
    /// failure with a generic message.
    #[must_use]
    pub fn failure_message(&self) -> Option<String> {
        if let Some(err) = &self.error {
            return Some(err.clone());
        }
        if self.success {
            None
        } else {
            Some("El servidor no devolvió un resultado".to_string())
        }
    }

    /// Human-readable method name: the explanation's, else the key.
    #[must_use]
    pub fn method_name(&self) -> Option<&str> {
        self.explanation
            .as_ref()
            .and_then(|e| e.method.as_deref())
            .or(self.method.as_deref())
    }

    /// Query points from the input echo.
    #[must_use]
    pub fn query_points(&self) -> Option<Vec<f64>> {
        self.input_series("xq")
    }

    /// A numeric array from the input echo.
    #[must_use]
    pub fn input_series(&self, key: &str) -> Option<Vec<f64>> {
        let values = self.input.as_ref()?.get(key)?.as_array()?;
        values.iter().map(Value::as_f64).collect()
    }
}
