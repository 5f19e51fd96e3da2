//! Error handling and exit codes.

use metnum_core::constants::exit_codes;
use metnum_core::MetnumError;

use crate::config::ConfigError;

/// Exit code for an error that ended the run.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> u8 {
    let code = if let Some(err) = err.downcast_ref::<MetnumError>() {
        err.exit_code()
    } else if err.downcast_ref::<ConfigError>().is_some() {
        exit_codes::ERROR_INPUT
    } else {
        exit_codes::ERROR_REMOTE
    };
    u8::try_from(code).unwrap_or(1)
}

/// Print the error unless the controllers already showed it, and return
/// its exit code.
pub fn report(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<MetnumError>().is_none() {
        metnum_cli::ui::print_error(&format!("{err:#}"));
    }
    exit_code(err)
}
