//! Chart data for interpolation results.

use metnum_core::{InterpolationRequest, Method, ResultEnvelope};

/// Data points and interpolated curve, ready for plotting.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    /// Display name of the method that produced the curve.
    pub method: String,
    /// The `(x, y)` pairs the user supplied.
    pub points: Vec<(f64, f64)>,
    /// `(xq, value)` pairs, sorted by `xq`.
    pub curve: Vec<(f64, f64)>,
}

impl ChartData {
    /// Pair the request's points with the envelope's series result.
    ///
    /// Returns `None` when the envelope has no series result.
    #[must_use]
    pub fn from_interpolation(request: &InterpolationRequest, envelope: &ResultEnvelope) -> Option<Self> {
        let values = envelope.result.as_ref()?.as_series()?;

        let points = request
            .x
            .iter()
            .copied()
            .zip(request.y.iter().copied())
            .collect();
        let mut curve: Vec<(f64, f64)> = request
            .xq
            .iter()
            .copied()
            .zip(values.iter().copied())
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .collect();
        curve.sort_by(|a, b| a.0.total_cmp(&b.0));

        let method = envelope
            .method_name()
            .unwrap_or(request.method.key())
            .to_string();

        Some(Self {
            method,
            points,
            curve,
        })
    }

    /// Axis bounds covering both series, padded by 5%.
    #[must_use]
    pub fn bounds(&self) -> ([f64; 2], [f64; 2]) {
        let all = self.points.iter().chain(&self.curve);
        let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
        for &(x, y) in all {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
        if !x_min.is_finite() {
            return ([0.0, 1.0], [0.0, 1.0]);
        }
        (pad(x_min, x_max), pad(y_min, y_max))
    }
}

fn pad(min: f64, max: f64) -> [f64; 2] {
    let span = max - min;
    if span <= f64::EPSILON {
        return [min - 1.0, max + 1.0];
    }
    let margin = span * 0.05;
    [min - margin, max + margin]
}

#[cfg(test)]
mod tests {
    use super::*;
    use metnum_core::{InterpolationMethod, ResultValue};

    fn request() -> InterpolationRequest {
        InterpolationRequest {
            method: InterpolationMethod::Spline,
            x: vec![0.0, 1.0, 2.0],
            y: vec![0.0, 1.0, 4.0],
            xq: vec![1.5, 0.5],
        }
    }

    #[test]
    fn pairs_and_sorts_curve() {
        let env = ResultEnvelope::success(ResultValue::Series(vec![2.25, 0.25]));
        let chart = ChartData::from_interpolation(&request(), &env).unwrap();
        assert_eq!(chart.points, vec![(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)]);
        assert_eq!(chart.curve, vec![(0.5, 0.25), (1.5, 2.25)]);
        assert_eq!(chart.method, "spline");
    }

    #[test]
    fn scalar_result_has_no_chart() {
        let env = ResultEnvelope::success(ResultValue::Scalar(1.0));
        assert!(ChartData::from_interpolation(&request(), &env).is_none());
    }

    #[test]
    fn bounds_are_padded() {
        let env = ResultEnvelope::success(ResultValue::Series(vec![2.25, 0.25]));
        let chart = ChartData::from_interpolation(&request(), &env).unwrap();
        let (x, y) = chart.bounds();
        assert!(x[0] < 0.0 && x[1] > 2.0);
        assert!(y[0] < 0.0 && y[1] > 4.0);
    }

    #[test]
    fn flat_series_gets_unit_margin() {
        assert_eq!(pad(3.0, 3.0), [2.0, 4.0]);
    }
}
