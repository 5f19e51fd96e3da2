//! Request DTOs sent to the computation server.
//!
//! Each request is gathered from the raw strings of its form, then
//! validated locally. A request that passes `validate` is one the server
//! accepts as far as the client can tell.

use serde::Serialize;

use crate::constants::{MAX_ORDER, MAX_STEP, MAX_SUBDIVISIONS, MIN_ORDER, MIN_STEP};
use crate::error::{MetnumError, ValidationError};
use crate::form::{DifferentiationForm, IntegrationForm, InterpolationForm};
use crate::methods::{
    parse_method, DifferentiationMethod, IntegrationMethod, InterpolationMethod,
};
use crate::parse::{parse_integer, parse_number, parse_number_list};
use crate::validate::validate_function;

/// Interpolation request: `{method, x, y, xq}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterpolationRequest {
    pub method: InterpolationMethod,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub xq: Vec<f64>,
}

impl InterpolationRequest {
    /// Gather and validate a request from the form, using the form's method.
    pub fn from_form(form: &InterpolationForm) -> Result<Self, MetnumError> {
        let method = parse_method(&form.method)?;
        Self::gather(form, method)
    }

    /// Gather and validate a request from the form with an explicit method.
    pub fn gather(
        form: &InterpolationForm,
        method: InterpolationMethod,
    ) -> Result<Self, MetnumError> {
        let x = parse_number_list(required("x", &form.x)?)?;
        let y = parse_number_list(required("y", &form.y)?)?;
        let xq = parse_number_list(required("xq", &form.xq)?)?;
        let request = Self { method, x, y, xq };
        request.validate()?;
        Ok(request)
    }

    /// Same data, different method.
    #[must_use]
    pub fn with_method(&self, method: InterpolationMethod) -> Self {
        Self {
            method,
            ..self.clone()
        }
    }

    /// Check the invariants the server relies on.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.x.is_empty() || self.y.is_empty() {
            return Err(ValidationError::new("x e y no pueden estar vacíos"));
        }
        if self.x.len() != self.y.len() {
            return Err(ValidationError::new(format!(
                "x e y deben tener la misma cantidad de valores (x: {}, y: {})",
                self.x.len(),
                self.y.len()
            )));
        }
        if self.x.len() < 2 {
            return Err(ValidationError::new(
                "Se requieren al menos 2 puntos para interpolar",
            ));
        }
        if self.xq.is_empty() {
            return Err(ValidationError::new(
                "Debe indicar al menos un punto a evaluar (xq)",
            ));
        }
        let all_finite = self
            .x
            .iter()
            .chain(&self.y)
            .chain(&self.xq)
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(ValidationError::new(
                "Todos los valores deben ser números finitos",
            ));
        }
        if has_duplicates(&self.x) {
            return Err(ValidationError::new("Los valores de x deben ser únicos"));
        }
        Ok(())
    }
}

/// Integration request: `{method, function, a, b, n}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntegrationRequest {
    pub method: IntegrationMethod,
    pub function: String,
    pub a: f64,
    pub b: f64,
    pub n: u32,
}

impl IntegrationRequest {
    pub fn from_form(form: &IntegrationForm) -> Result<Self, MetnumError> {
        let method = parse_method(&form.method)?;
        Self::gather(form, method)
    }

    pub fn gather(form: &IntegrationForm, method: IntegrationMethod) -> Result<Self, MetnumError> {
        let function = validate_function(&form.function)?;
        let a = parse_number(required("a", &form.a)?)?;
        let b = parse_number(required("b", &form.b)?)?;
        let n = parse_integer(required("n", &form.n)?)?;
        let n = subdivisions(n)?;
        let request = Self {
            method,
            function,
            a,
            b,
            n,
        };
        request.validate()?;
        Ok(request)
    }

    #[must_use]
    pub fn with_method(&self, method: IntegrationMethod) -> Self {
        Self {
            method,
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_function(&self.function)?;
        if !self.a.is_finite() || !self.b.is_finite() {
            return Err(ValidationError::new("Los límites deben ser números finitos"));
        }
        if self.a >= self.b {
            return Err(ValidationError::new("a debe ser menor que b"));
        }
        subdivisions(i64::from(self.n))?;
        Ok(())
    }
}

/// Differentiation request: `{method, function, x, h, order}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DifferentiationRequest {
    pub method: DifferentiationMethod,
    pub function: String,
    pub x: f64,
    pub h: f64,
    pub order: u8,
}

impl DifferentiationRequest {
    pub fn from_form(form: &DifferentiationForm) -> Result<Self, MetnumError> {
        let method = parse_method(&form.method)?;
        Self::gather(form, method)
    }

    pub fn gather(
        form: &DifferentiationForm,
        method: DifferentiationMethod,
    ) -> Result<Self, MetnumError> {
        let function = validate_function(&form.function)?;
        let x = parse_number(required("x", &form.x)?)?;
        let h = parse_number(required("h", &form.h)?)?;
        let order = parse_integer(required("orden", &form.order)?)?;
        let order = derivative_order(order)?;
        let request = Self {
            method,
            function,
            x,
            h,
            order,
        };
        request.validate()?;
        Ok(request)
    }

    #[must_use]
    pub fn with_method(&self, method: DifferentiationMethod) -> Self {
        Self {
            method,
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_function(&self.function)?;
        if !self.x.is_finite() {
            return Err(ValidationError::new("x debe ser un número finito"));
        }
        if self.h.is_nan() || self.h <= 0.0 {
            return Err(ValidationError::new("h debe ser positivo"));
        }
        if self.h < MIN_STEP {
            return Err(ValidationError::new(format!(
                "h es demasiado pequeño (mínimo {MIN_STEP:e})"
            )));
        }
        if self.h > MAX_STEP {
            return Err(ValidationError::new(format!(
                "h es demasiado grande (máximo {MAX_STEP})"
            )));
        }
        derivative_order(i64::from(self.order))?;
        Ok(())
    }
}

fn required<'a>(label: &str, raw: &'a str) -> Result<&'a str, ValidationError> {
    if raw.trim().is_empty() {
        Err(ValidationError::new(format!(
            "El campo {label} es obligatorio"
        )))
    } else {
        Ok(raw)
    }
}

fn subdivisions(n: i64) -> Result<u32, ValidationError> {
    if n < 1 {
        return Err(ValidationError::new("n debe ser un entero positivo"));
    }
    if n > MAX_SUBDIVISIONS {
        return Err(ValidationError::new(format!(
            "n no puede ser mayor que {MAX_SUBDIVISIONS}"
        )));
    }
    u32::try_from(n).map_err(|_| ValidationError::new("n debe ser un entero positivo"))
}

fn derivative_order(order: i64) -> Result<u8, ValidationError> {
    if !(MIN_ORDER..=MAX_ORDER).contains(&order) {
        return Err(ValidationError::new(format!(
            "El orden debe estar entre {MIN_ORDER} y {MAX_ORDER}"
        )));
    }
    u8::try_from(order).map_err(|_| ValidationError::new("orden inválido"))
}

#[allow(clippy::float_cmp)]
fn has_duplicates(values: &[f64]) -> bool {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted.windows(2).any(|w| w[0] == w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interp_form(x: &str, y: &str, xq: &str) -> InterpolationForm {
        InterpolationForm {
            method: "linear".into(),
            x: x.into(),
            y: y.into(),
            xq: xq.into(),
        }
    }

    fn integ_form(a: &str, b: &str, n: &str) -> IntegrationForm {
        IntegrationForm {
            method: "simpson13".into(),
            function: "x^2".into(),
            a: a.into(),
            b: b.into(),
            n: n.into(),
        }
    }

    fn deriv_form(h: &str, order: &str) -> DifferentiationForm {
        DifferentiationForm {
            method: "centrada".into(),
            function: "sin(x)".into(),
            x: "1".into(),
            h: h.into(),
            order: order.into(),
        }
    }

    fn validation_message(err: MetnumError) -> String {
        match err {
            MetnumError::Validation(v) => v.message,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn interpolation_valid() {
        let req = InterpolationRequest::from_form(&interp_form("0,1,2", "0,1,4", "0.5")).unwrap();
        assert_eq!(req.method, InterpolationMethod::Linear);
        assert_eq!(req.x, vec![0.0, 1.0, 2.0]);
        assert_eq!(req.xq, vec![0.5]);
    }

    #[test]
    fn interpolation_length_mismatch() {
        let err = InterpolationRequest::from_form(&interp_form("0,1,2", "0,1", "0.5")).unwrap_err();
        assert!(validation_message(err).contains("misma cantidad"));
    }

    #[test]
    fn interpolation_needs_two_points() {
        let err = InterpolationRequest::from_form(&interp_form("1", "1", "0.5")).unwrap_err();
        assert!(validation_message(err).contains("al menos 2"));
    }

    #[test]
    fn interpolation_duplicate_x() {
        let err = InterpolationRequest::from_form(&interp_form("0,1,1", "0,1,2", "0.5")).unwrap_err();
        assert!(validation_message(err).contains("únicos"));
    }

    #[test]
    fn interpolation_missing_field() {
        let err = InterpolationRequest::from_form(&interp_form("0,1", "0,1", " ")).unwrap_err();
        assert_eq!(validation_message(err), "El campo xq es obligatorio");
    }

    #[test]
    fn interpolation_parse_error_propagates() {
        let err = InterpolationRequest::from_form(&interp_form("0,a", "0,1", "0.5")).unwrap_err();
        assert!(matches!(err, MetnumError::Parse(p) if p.token == "a"));
    }

    #[test]
    fn interpolation_bad_method() {
        let mut form = interp_form("0,1", "0,1", "0.5");
        form.method = "cubic".into();
        assert!(InterpolationRequest::from_form(&form).is_err());
    }

    #[test]
    fn interpolation_serializes_wire_names() {
        let req = InterpolationRequest::from_form(&interp_form("0,1", "2,3", "0.5")).unwrap();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"method": "linear", "x": [0.0, 1.0], "y": [2.0, 3.0], "xq": [0.5]})
        );
    }

    #[test]
    fn integration_bounds_equal() {
        let err = IntegrationRequest::from_form(&integ_form("1", "1", "10")).unwrap_err();
        assert_eq!(validation_message(err), "a debe ser menor que b");
    }

    #[test]
    fn integration_subdivisions() {
        let err = IntegrationRequest::from_form(&integ_form("0", "1", "0")).unwrap_err();
        assert!(validation_message(err).contains("entero positivo"));
        let err = IntegrationRequest::from_form(&integ_form("0", "1", "10001")).unwrap_err();
        assert!(validation_message(err).contains("10000"));
    }

    #[test]
    fn integration_valid_and_with_method() {
        let req = IntegrationRequest::from_form(&integ_form("0", "2", "10")).unwrap();
        assert_eq!(req.n, 10);
        let gauss = req.with_method(IntegrationMethod::Gauss);
        assert_eq!(gauss.method, IntegrationMethod::Gauss);
        assert_eq!(gauss.function, "x^2");
    }

    #[test]
    fn integration_rejects_unsafe_function() {
        let mut form = integ_form("0", "1", "10");
        form.function = "x;rm".into();
        assert!(matches!(
            IntegrationRequest::from_form(&form),
            Err(MetnumError::Validation(_))
        ));
    }

    #[test]
    fn differentiation_step_checks() {
        let err = DifferentiationRequest::from_form(&deriv_form("0", "1")).unwrap_err();
        assert_eq!(validation_message(err), "h debe ser positivo");
        let err = DifferentiationRequest::from_form(&deriv_form("-0.1", "1")).unwrap_err();
        assert_eq!(validation_message(err), "h debe ser positivo");
        let err = DifferentiationRequest::from_form(&deriv_form("2", "1")).unwrap_err();
        assert!(validation_message(err).contains("demasiado grande"));
    }

    #[test]
    fn differentiation_order_range() {
        for bad in ["0", "5"] {
            let err = DifferentiationRequest::from_form(&deriv_form("0.01", bad)).unwrap_err();
            assert!(validation_message(err).contains("entre 1 y 4"));
        }
        let req = DifferentiationRequest::from_form(&deriv_form("0.01", "4")).unwrap();
        assert_eq!(req.order, 4);
    }

    #[test]
    fn differentiation_serializes_wire_names() {
        let req = DifferentiationRequest::from_form(&deriv_form("0.001", "2")).unwrap();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["method"], "centrada");
        assert_eq!(json["function"], "sin(x)");
        assert_eq!(json["order"], 2);
    }
}
