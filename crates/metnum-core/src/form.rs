//! Form field table and form state.
//!
//! Every input the front-ends show has a stable identifier. The identifiers
//! double as keys of the persisted snapshot, so renaming one drops the
//! user's saved value for it.

use std::collections::BTreeMap;

use crate::methods::{
    parse_method, DifferentiationMethod, Feature, IntegrationMethod, InterpolationMethod,
};
use crate::parse::{parse_integer, parse_number, parse_number_list};
use crate::validate::validate_function;

/// Field identifiers.
pub mod ids {
    pub const INTERP_METHOD: &str = "interp-method";
    pub const INTERP_X: &str = "interp-x";
    pub const INTERP_Y: &str = "interp-y";
    pub const INTERP_XQ: &str = "interp-xq";

    pub const INTEG_METHOD: &str = "integ-method";
    pub const INTEG_FUNCTION: &str = "integ-function";
    pub const INTEG_A: &str = "integ-a";
    pub const INTEG_B: &str = "integ-b";
    pub const INTEG_N: &str = "integ-n";

    pub const DERIV_METHOD: &str = "deriv-method";
    pub const DERIV_FUNCTION: &str = "deriv-function";
    pub const DERIV_X: &str = "deriv-x";
    pub const DERIV_H: &str = "deriv-h";
    pub const DERIV_ORDER: &str = "deriv-order";
}

/// What a field holds, which decides how it is checked on blur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Method,
    NumberList,
    Expression,
    Number,
    Integer,
}

/// Static description of one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub feature: Feature,
    pub default: &'static str,
}

impl FieldSpec {
    /// Advisory check run when the field loses focus.
    ///
    /// Returns the message to show next to the field. Never blocks a
    /// calculation; the controllers validate again before sending.
    pub fn check(&self, value: &str) -> Result<(), String> {
        match self.kind {
            FieldKind::NumberList => parse_number_list(value)
                .map(drop)
                .map_err(|e| e.to_string()),
            FieldKind::Expression => validate_function(value)
                .map(drop)
                .map_err(|e| e.to_string()),
            FieldKind::Number => {
                if value.trim().is_empty() {
                    return Err("Campo obligatorio".to_string());
                }
                parse_number(value).map(drop).map_err(|e| e.to_string())
            }
            FieldKind::Integer => {
                if value.trim().is_empty() {
                    return Err("Campo obligatorio".to_string());
                }
                parse_integer(value).map(drop).map_err(|e| e.to_string())
            }
            FieldKind::Method => check_method(self.feature, value),
        }
    }
}

fn check_method(feature: Feature, value: &str) -> Result<(), String> {
    let result = match feature {
        Feature::Interpolation => parse_method::<InterpolationMethod>(value).map(drop),
        Feature::Integration => parse_method::<IntegrationMethod>(value).map(drop),
        Feature::Differentiation => parse_method::<DifferentiationMethod>(value).map(drop),
    };
    result.map_err(|e| e.to_string())
}

/// Every field, grouped by feature in display order.
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        id: ids::INTERP_METHOD,
        label: "Método",
        kind: FieldKind::Method,
        feature: Feature::Interpolation,
        default: "linear",
    },
    FieldSpec {
        id: ids::INTERP_X,
        label: "Valores x",
        kind: FieldKind::NumberList,
        feature: Feature::Interpolation,
        default: "0, 1, 2, 3",
    },
    FieldSpec {
        id: ids::INTERP_Y,
        label: "Valores y",
        kind: FieldKind::NumberList,
        feature: Feature::Interpolation,
        default: "0, 1, 4, 9",
    },
    FieldSpec {
        id: ids::INTERP_XQ,
        label: "Puntos a evaluar",
        kind: FieldKind::NumberList,
        feature: Feature::Interpolation,
        default: "0.5, 1.5, 2.5",
    },
    FieldSpec {
        id: ids::INTEG_METHOD,
        label: "Método",
        kind: FieldKind::Method,
        feature: Feature::Integration,
        default: "trapecio",
    },
    FieldSpec {
        id: ids::INTEG_FUNCTION,
        label: "Función f(x)",
        kind: FieldKind::Expression,
        feature: Feature::Integration,
        default: "x^2",
    },
    FieldSpec {
        id: ids::INTEG_A,
        label: "Límite inferior a",
        kind: FieldKind::Number,
        feature: Feature::Integration,
        default: "0",
    },
    FieldSpec {
        id: ids::INTEG_B,
        label: "Límite superior b",
        kind: FieldKind::Number,
        feature: Feature::Integration,
        default: "1",
    },
    FieldSpec {
        id: ids::INTEG_N,
        label: "Subdivisiones n",
        kind: FieldKind::Integer,
        feature: Feature::Integration,
        default: "10",
    },
    FieldSpec {
        id: ids::DERIV_METHOD,
        label: "Método",
        kind: FieldKind::Method,
        feature: Feature::Differentiation,
        default: "centrada",
    },
    FieldSpec {
        id: ids::DERIV_FUNCTION,
        label: "Función f(x)",
        kind: FieldKind::Expression,
        feature: Feature::Differentiation,
        default: "sin(x)",
    },
    FieldSpec {
        id: ids::DERIV_X,
        label: "Punto x",
        kind: FieldKind::Number,
        feature: Feature::Differentiation,
        default: "1",
    },
    FieldSpec {
        id: ids::DERIV_H,
        label: "Paso h",
        kind: FieldKind::Number,
        feature: Feature::Differentiation,
        default: "0.001",
    },
    FieldSpec {
        id: ids::DERIV_ORDER,
        label: "Orden",
        kind: FieldKind::Integer,
        feature: Feature::Differentiation,
        default: "1",
    },
];

/// Look up a field by identifier.
#[must_use]
pub fn field(id: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|f| f.id == id)
}

/// Fields of one feature, in display order.
pub fn fields_for(feature: Feature) -> impl Iterator<Item = &'static FieldSpec> {
    FIELDS.iter().filter(move |f| f.feature == feature)
}

/// Raw interpolation inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterpolationForm {
    pub method: String,
    pub x: String,
    pub y: String,
    pub xq: String,
}

/// Raw integration inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrationForm {
    pub method: String,
    pub function: String,
    pub a: String,
    pub b: String,
    pub n: String,
}

/// Raw differentiation inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DifferentiationForm {
    pub method: String,
    pub function: String,
    pub x: String,
    pub h: String,
    pub order: String,
}

/// Current string value of every field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    values: BTreeMap<String, String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    /// A form holding every field's default value.
    #[must_use]
    pub fn new() -> Self {
        let values = FIELDS
            .iter()
            .map(|f| (f.id.to_string(), f.default.to_string()))
            .collect();
        Self { values }
    }

    /// Value of a field; unknown identifiers read as empty.
    #[must_use]
    pub fn get(&self, id: &str) -> &str {
        self.values.get(id).map_or("", String::as_str)
    }

    /// Set a known field. Returns false for unknown identifiers.
    pub fn set(&mut self, id: &str, value: impl Into<String>) -> bool {
        match self.values.get_mut(id) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Copy of every field value, keyed by identifier.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.values.clone()
    }

    /// Restore values from a snapshot, ignoring unknown identifiers.
    ///
    /// Returns how many fields were restored.
    pub fn restore(&mut self, snapshot: &BTreeMap<String, String>) -> usize {
        let mut restored = 0;
        for (id, value) in snapshot {
            if self.set(id, value.clone()) {
                restored += 1;
            } else {
                tracing::debug!(field = %id, "ignoring unknown field in saved config");
            }
        }
        restored
    }

    #[must_use]
    pub fn interpolation_form(&self) -> InterpolationForm {
        InterpolationForm {
            method: self.get(ids::INTERP_METHOD).to_string(),
            x: self.get(ids::INTERP_X).to_string(),
            y: self.get(ids::INTERP_Y).to_string(),
            xq: self.get(ids::INTERP_XQ).to_string(),
        }
    }

    #[must_use]
    pub fn integration_form(&self) -> IntegrationForm {
        IntegrationForm {
            method: self.get(ids::INTEG_METHOD).to_string(),
            function: self.get(ids::INTEG_FUNCTION).to_string(),
            a: self.get(ids::INTEG_A).to_string(),
            b: self.get(ids::INTEG_B).to_string(),
            n: self.get(ids::INTEG_N).to_string(),
        }
    }

    #[must_use]
    pub fn differentiation_form(&self) -> DifferentiationForm {
        DifferentiationForm {
            method: self.get(ids::DERIV_METHOD).to_string(),
            function: self.get(ids::DERIV_FUNCTION).to_string(),
            x: self.get(ids::DERIV_X).to_string(),
            h: self.get(ids::DERIV_H).to_string(),
            order: self.get(ids::DERIV_ORDER).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{DifferentiationRequest, IntegrationRequest, InterpolationRequest};

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<&str> = FIELDS.iter().map(|f| f.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), FIELDS.len());
    }

    #[test]
    fn every_feature_has_a_method_field() {
        for feature in Feature::ALL {
            assert!(fields_for(feature).any(|f| f.kind == FieldKind::Method));
        }
    }

    #[test]
    fn defaults_build_valid_requests() {
        let form = FormState::new();
        assert!(InterpolationRequest::from_form(&form.interpolation_form()).is_ok());
        assert!(IntegrationRequest::from_form(&form.integration_form()).is_ok());
        assert!(DifferentiationRequest::from_form(&form.differentiation_form()).is_ok());
    }

    #[test]
    fn defaults_pass_blur_checks() {
        let form = FormState::new();
        for spec in FIELDS {
            assert!(spec.check(form.get(spec.id)).is_ok(), "{}", spec.id);
        }
    }

    #[test]
    fn set_unknown_field() {
        let mut form = FormState::new();
        assert!(!form.set("nope", "1"));
        assert_eq!(form.get("nope"), "");
    }

    #[test]
    fn snapshot_restore() {
        let mut form = FormState::new();
        form.set(ids::INTEG_FUNCTION, "cos(x)");
        let snap = form.snapshot();

        let mut fresh = FormState::new();
        assert_eq!(fresh.restore(&snap), FIELDS.len());
        assert_eq!(fresh, form);
    }

    #[test]
    fn restore_skips_unknown() {
        let mut snap = BTreeMap::new();
        snap.insert("legacy-field".to_string(), "1".to_string());
        snap.insert(ids::DERIV_H.to_string(), "0.01".to_string());
        let mut form = FormState::new();
        assert_eq!(form.restore(&snap), 1);
        assert_eq!(form.get(ids::DERIV_H), "0.01");
    }

    #[test]
    fn blur_checks() {
        let list = field(ids::INTERP_X).unwrap();
        assert!(list.check("1, 2, 3").is_ok());
        assert!(list.check("1, b").unwrap_err().contains("\"b\""));

        let expr = field(ids::DERIV_FUNCTION).unwrap();
        assert!(expr.check("").is_err());
        assert!(expr.check("x;1").is_err());

        let number = field(ids::INTEG_A).unwrap();
        assert_eq!(number.check(" ").unwrap_err(), "Campo obligatorio");

        let method = field(ids::INTEG_METHOD).unwrap();
        assert!(method.check("gauss").is_ok());
        assert!(method.check("linear").is_err());
    }

    #[test]
    fn feature_forms_read_fields() {
        let mut form = FormState::new();
        form.set(ids::INTERP_XQ, "7");
        assert_eq!(form.interpolation_form().xq, "7");
        form.set(ids::DERIV_ORDER, "3");
        assert_eq!(form.differentiation_form().order, "3");
    }
}
