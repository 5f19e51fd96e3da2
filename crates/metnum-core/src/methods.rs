//! Method enumerations for the three features.
//!
//! The order of `ALL` is the order compare runs and renders methods in.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{ENDPOINT_DERIVE, ENDPOINT_INTEGRATE, ENDPOINT_INTERPOLATE};
use crate::error::ValidationError;

/// Common behaviour of the method enumerations.
pub trait Method: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Every method, in comparison order.
    const ALL: &'static [Self];

    /// Key sent to the server.
    fn key(self) -> &'static str;

    /// Human-readable name.
    fn label(self) -> &'static str;

    /// Look a method up by key, ignoring case and surrounding whitespace.
    fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.key().eq_ignore_ascii_case(key))
    }

    /// The method after this one, wrapping around.
    fn next(self) -> Self {
        let all = Self::ALL;
        let idx = all.iter().position(|&m| m == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// The method before this one, wrapping around.
    fn prev(self) -> Self {
        let all = Self::ALL;
        let idx = all.iter().position(|&m| m == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

/// Parse a method key, producing the message shown to the user on failure.
pub fn parse_method<M: Method>(key: &str) -> Result<M, ValidationError> {
    M::from_key(key).ok_or_else(|| {
        let valid: Vec<&str> = M::ALL.iter().map(|m| m.key()).collect();
        ValidationError::new(format!(
            "Método inválido: '{}'. Usa {}",
            key.trim(),
            valid.join(", ")
        ))
    })
}

/// Interpolation methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationMethod {
    Linear,
    Newton,
    Lagrange,
    Spline,
}

impl Method for InterpolationMethod {
    const ALL: &'static [Self] = &[Self::Linear, Self::Newton, Self::Lagrange, Self::Spline];

    fn key(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Newton => "newton",
            Self::Lagrange => "lagrange",
            Self::Spline => "spline",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Linear => "Lineal",
            Self::Newton => "Newton",
            Self::Lagrange => "Lagrange",
            Self::Spline => "Spline cúbico",
        }
    }
}

/// Quadrature rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationMethod {
    Trapecio,
    Simpson13,
    Simpson38,
    Gauss,
}

impl Method for IntegrationMethod {
    const ALL: &'static [Self] = &[
        Self::Trapecio,
        Self::Simpson13,
        Self::Simpson38,
        Self::Gauss,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Trapecio => "trapecio",
            Self::Simpson13 => "simpson13",
            Self::Simpson38 => "simpson38",
            Self::Gauss => "gauss",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Trapecio => "Trapecio",
            Self::Simpson13 => "Simpson 1/3",
            Self::Simpson38 => "Simpson 3/8",
            Self::Gauss => "Gauss-Legendre",
        }
    }
}

/// Finite-difference schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifferentiationMethod {
    Adelante,
    Atras,
    Centrada,
}

impl Method for DifferentiationMethod {
    const ALL: &'static [Self] = &[Self::Adelante, Self::Atras, Self::Centrada];

    fn key(self) -> &'static str {
        match self {
            Self::Adelante => "adelante",
            Self::Atras => "atras",
            Self::Centrada => "centrada",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Adelante => "Hacia adelante",
            Self::Atras => "Hacia atrás",
            Self::Centrada => "Centrada",
        }
    }
}

/// The three features the server offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feature {
    Interpolation,
    Integration,
    Differentiation,
}

impl Feature {
    /// Every feature, in navigation order.
    pub const ALL: [Feature; 3] = [
        Feature::Interpolation,
        Feature::Integration,
        Feature::Differentiation,
    ];

    /// Human-readable name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Interpolation => "Interpolación",
            Self::Integration => "Integración",
            Self::Differentiation => "Derivación",
        }
    }

    /// Endpoint path on the computation server.
    #[must_use]
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Interpolation => ENDPOINT_INTERPOLATE,
            Self::Integration => ENDPOINT_INTEGRATE,
            Self::Differentiation => ENDPOINT_DERIVE,
        }
    }

    /// Method keys in comparison order.
    #[must_use]
    pub fn method_keys(self) -> Vec<&'static str> {
        match self {
            Self::Interpolation => InterpolationMethod::ALL.iter().map(|m| m.key()).collect(),
            Self::Integration => IntegrationMethod::ALL.iter().map(|m| m.key()).collect(),
            Self::Differentiation => DifferentiationMethod::ALL
                .iter()
                .map(|m| m.key())
                .collect(),
        }
    }

    /// Display label for a method key of this feature, or the key itself.
    #[must_use]
    pub fn method_label(self, key: &str) -> String {
        let label = match self {
            Self::Interpolation => InterpolationMethod::from_key(key).map(Method::label),
            Self::Integration => IntegrationMethod::from_key(key).map(Method::label),
            Self::Differentiation => DifferentiationMethod::from_key(key).map(Method::label),
        };
        label.map_or_else(|| key.to_string(), str::to_string)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
