//! Application configuration from CLI flags and environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::builder::TypedValueParser;
use clap::{Args, Parser, Subcommand};

use metnum_core::constants::{DEFAULT_DECIMALS, DEFAULT_SERVER_URL};
use metnum_core::{DifferentiationForm, FormatOptions, IntegrationForm, InterpolationForm};

/// Client for a numerical-methods server: interpolation, integration and
/// differentiation.
#[derive(Parser, Debug)]
#[command(name = "metnum", version, about)]
pub struct AppConfig {
    /// Base URL of the numerical-methods server.
    #[arg(long, global = true, default_value = DEFAULT_SERVER_URL, env = "METNUM_SERVER")]
    pub server: String,

    /// Decimals shown in results.
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_DECIMALS,
        env = "METNUM_DECIMALS",
        value_parser = clap::value_parser!(u8).range(0..=15).map(usize::from)
    )]
    pub decimals: usize,

    /// Request timeout (e.g. "30s", "500ms", "2m"). No timeout by default.
    #[arg(long, global = true)]
    pub timeout: Option<String>,

    /// Verbose output (server response, timing, info logs).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Show pros, cons, complexity and steps of the method.
    #[arg(short, long, global = true)]
    pub details: bool,

    /// Quiet mode (only output the value).
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Also write the rendered result to this file.
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// File holding the saved form inputs of the TUI.
    #[arg(long, global = true, env = "METNUM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Do not restore or save form inputs in the TUI.
    #[arg(long, global = true)]
    pub no_save: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interpolate at query points from (x, y) pairs.
    Interpolate(InterpolateArgs),
    /// Integrate a function over [a, b].
    Integrate(IntegrateArgs),
    /// Differentiate a function at a point.
    Derive(DeriveArgs),
    /// Check that the server is reachable.
    Check,
    /// Launch the interactive TUI (default).
    Tui,
    /// Generate shell completion.
    Completion {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args, Debug)]
pub struct InterpolateArgs {
    /// linear, newton, lagrange or spline.
    #[arg(short, long, default_value = "linear")]
    pub method: String,
    /// Comma-separated x values.
    #[arg(short = 'x', long = "x", allow_hyphen_values = true)]
    pub x: String,
    /// Comma-separated y values.
    #[arg(short = 'y', long = "y", allow_hyphen_values = true)]
    pub y: String,
    /// Comma-separated query points.
    #[arg(long = "xq", allow_hyphen_values = true)]
    pub xq: String,
    /// Run every method and compare.
    #[arg(short, long)]
    pub compare: bool,
}

impl InterpolateArgs {
    #[must_use]
    pub fn form(&self) -> InterpolationForm {
        InterpolationForm {
            method: self.method.clone(),
            x: self.x.clone(),
            y: self.y.clone(),
            xq: self.xq.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub struct IntegrateArgs {
    /// trapecio, simpson13, simpson38 or gauss.
    #[arg(short, long, default_value = "trapecio")]
    pub method: String,
    /// Integrand in x, e.g. "x^2".
    #[arg(short, long, allow_hyphen_values = true)]
    pub function: String,
    /// Lower bound.
    #[arg(short = 'a', allow_hyphen_values = true)]
    pub a: String,
    /// Upper bound.
    #[arg(short = 'b', allow_hyphen_values = true)]
    pub b: String,
    /// Number of subintervals.
    #[arg(short = 'n', default_value = "10")]
    pub n: String,
    /// Run every method and compare.
    #[arg(short, long)]
    pub compare: bool,
}

impl IntegrateArgs {
    #[must_use]
    pub fn form(&self) -> IntegrationForm {
        IntegrationForm {
            method: self.method.clone(),
            function: self.function.clone(),
            a: self.a.clone(),
            b: self.b.clone(),
            n: self.n.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub struct DeriveArgs {
    /// adelante, atras or centrada.
    #[arg(short, long, default_value = "centrada")]
    pub method: String,
    /// Function of x, e.g. "sin(x)".
    #[arg(short, long, allow_hyphen_values = true)]
    pub function: String,
    /// Point where the derivative is evaluated.
    #[arg(short = 'x', long = "x", allow_hyphen_values = true)]
    pub x: String,
    /// Step size.
    #[arg(long = "h", default_value = "0.001")]
    pub h: String,
    /// Derivative order (1 to 4).
    #[arg(long, default_value = "1")]
    pub order: String,
    /// Run every method and compare.
    #[arg(short, long)]
    pub compare: bool,
}

impl DeriveArgs {
    #[must_use]
    pub fn form(&self) -> DifferentiationForm {
        DifferentiationForm {
            method: self.method.clone(),
            function: self.function.clone(),
            x: self.x.clone(),
            h: self.h.clone(),
            order: self.order.clone(),
        }
    }
}

/// Invalid configuration values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("duración inválida: '{0}' (usa p. ej. 30s, 500ms, 2m)")]
    Duration(String),
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse the timeout flag, if given.
    pub fn timeout_duration(&self) -> Result<Option<Duration>, ConfigError> {
        self.timeout
            .as_deref()
            .map(|s| parse_duration(s).ok_or_else(|| ConfigError::Duration(s.to_string())))
            .transpose()
    }

    #[must_use]
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            decimals: self.decimals,
            details: self.details,
        }
    }
}

/// Parse a duration string like "5m", "1h", "30s", "250ms".
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(60)?))
    } else if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(3600)?))
    } else if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(Duration::from_millis(n))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(Duration::from_secs(n))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(Duration::from_secs(n))
    }
}
