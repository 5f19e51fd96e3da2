//! Constants shared by the client, the controllers and the front-ends.

/// Endpoint for interpolation requests.
pub const ENDPOINT_INTERPOLATE: &str = "/api/interpolate";

/// Endpoint for numerical integration requests.
pub const ENDPOINT_INTEGRATE: &str = "/api/integrate";

/// Endpoint for numerical differentiation requests.
pub const ENDPOINT_DERIVE: &str = "/api/derive";

/// Endpoint the server exposes to check that it is alive and accepting JSON.
pub const ENDPOINT_VALIDATE: &str = "/api/validate";

/// Server address used when nothing is configured (Flask's default port).
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Default number of decimals for fixed-point display.
pub const DEFAULT_DECIMALS: usize = 6;

/// Values smaller than this (and nonzero) switch to scientific notation.
pub const SCIENTIFIC_LOWER_BOUND: f64 = 1e-10;

/// Values larger than this switch to scientific notation.
pub const SCIENTIFIC_UPPER_BOUND: f64 = 1e10;

/// Fractional digits used in scientific notation.
pub const SCIENTIFIC_DIGITS: usize = 3;

/// Number of values shown in the preview line of a sequence result.
pub const PREVIEW_LIMIT: usize = 6;

/// Number of `xq -> value` lines shown for a sequence result.
pub const PAIR_LIMIT: usize = 10;

/// Largest subdivision count the server accepts.
pub const MAX_SUBDIVISIONS: i64 = 10_000;

/// Smallest step size the server accepts.
pub const MIN_STEP: f64 = 1e-12;

/// Largest step size the server accepts.
pub const MAX_STEP: f64 = 1.0;

/// Derivative orders supported by the finite-difference formulas.
pub const MIN_ORDER: i64 = 1;
pub const MAX_ORDER: i64 = 4;

/// Name of the persisted form snapshot.
pub const STORAGE_KEY: &str = "metodos_numericos_config";

/// Exit codes for the command-line front-end.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// The server answered with an error.
    pub const ERROR_REMOTE: i32 = 1;
    /// The server could not be reached or the request timed out.
    pub const ERROR_TRANSPORT: i32 = 2;
    /// Local parsing or validation rejected the input.
    pub const ERROR_INPUT: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scientific_bounds_are_ordered() {
        assert!(SCIENTIFIC_LOWER_BOUND < 1.0);
        assert!(SCIENTIFIC_UPPER_BOUND > 1.0);
    }

    #[test]
    fn step_bounds_are_ordered() {
        assert!(MIN_STEP < MAX_STEP);
        assert!(MIN_ORDER < MAX_ORDER);
    }

    #[test]
    fn endpoints_are_rooted() {
        for endpoint in [
            ENDPOINT_INTERPOLATE,
            ENDPOINT_INTEGRATE,
            ENDPOINT_DERIVE,
            ENDPOINT_VALIDATE,
        ] {
            assert!(endpoint.starts_with("/api/"));
        }
    }
}
