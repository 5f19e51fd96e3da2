//! Application entry point and dispatch.
//!
//! The controllers are built once here, wired to the front-end that was
//! asked for, and handed to it.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;

use metnum_cli::output::{format_duration, write_to_file};
use metnum_cli::{ui, CliNotifier, CliResultPresenter, SpinnerBusyIndicator};
use metnum_client::ApiClient;
use metnum_core::{format_result, MetnumError, RemoteError};
use metnum_orchestration::{ConfigManager, Controllers, FileStore, UiHandles};
use metnum_tui::TuiApp;

use crate::config::{AppConfig, Command};
use crate::version::full_version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    match &config.command {
        Some(Command::Completion { shell }) => {
            let mut cmd = <AppConfig as clap::CommandFactory>::command();
            metnum_cli::completion::generate_completion(&mut cmd, *shell, &mut std::io::stdout());
            Ok(())
        }
        Some(Command::Check) => run_check(config, &api_client(config)?),
        Some(command @ (Command::Interpolate(_) | Command::Integrate(_) | Command::Derive(_))) => {
            run_cli(config, api_client(config)?, command)
        }
        Some(Command::Tui) | None => run_tui(config, api_client(config)?),
    }
}

fn api_client(config: &AppConfig) -> Result<ApiClient> {
    let timeout = config.timeout_duration()?;
    tracing::info!(server = %config.server, ?timeout, "connecting");
    let api = ApiClient::http(config.server.as_str(), timeout).map_err(MetnumError::from)?;
    Ok(api)
}

fn run_cli(config: &AppConfig, api: ApiClient, command: &Command) -> Result<()> {
    let ui_handles = UiHandles::new(
        Arc::new(CliResultPresenter::new(
            config.verbose,
            config.quiet,
            config.decimals,
        )),
        Arc::new(CliNotifier::new(config.quiet)),
        Arc::new(SpinnerBusyIndicator::new(!config.quiet)),
    );
    let format = config.format_options();
    let controllers = Controllers::new(api, ui_handles, format);

    if config.verbose {
        ui::print_info(&full_version());
    }
    let start = Instant::now();

    let rendered = match command {
        Command::Interpolate(args) if args.compare => controllers
            .interpolation
            .compare(&args.form())?
            .render(config.decimals),
        Command::Interpolate(args) => {
            format_result(&controllers.interpolation.calculate(&args.form())?, &format)
        }
        Command::Integrate(args) if args.compare => controllers
            .integration
            .compare(&args.form())?
            .render(config.decimals),
        Command::Integrate(args) => {
            format_result(&controllers.integration.calculate(&args.form())?, &format)
        }
        Command::Derive(args) if args.compare => controllers
            .differentiation
            .compare(&args.form())?
            .render(config.decimals),
        Command::Derive(args) => format_result(
            &controllers.differentiation.calculate(&args.form())?,
            &format,
        ),
        Command::Check | Command::Tui | Command::Completion { .. } => return Ok(()),
    };

    if config.verbose {
        ui::print_info(&format!("Tiempo: {}", format_duration(start.elapsed())));
    }
    if let Some(path) = &config.output {
        write_to_file(path, &rendered)?;
        if !config.quiet {
            ui::print_success(&format!("Resultado guardado en {}", path.display()));
        }
    }
    Ok(())
}

fn run_check(config: &AppConfig, api: &ApiClient) -> Result<()> {
    match api.check() {
        Ok(status) if status.valid => {
            if !config.quiet {
                ui::print_success(&format!("Servidor disponible en {}", config.server));
                if config.verbose && !status.message.is_empty() {
                    ui::print_info(&status.message);
                }
            }
            Ok(())
        }
        Ok(status) => {
            ui::print_error(&status.message);
            Err(MetnumError::from(RemoteError::Server(status.message)).into())
        }
        Err(err) => {
            ui::print_error(&format!("Servidor no disponible en {}: {err}", config.server));
            Err(MetnumError::from(err).into())
        }
    }
}

fn run_tui(config: &AppConfig, api: ApiClient) -> Result<()> {
    let (tx, rx) = crossbeam_channel::unbounded();
    let controllers = Controllers::new(
        api,
        metnum_tui::ui_handles(&tx, config.decimals),
        config.format_options(),
    );

    let mut app = TuiApp::new(controllers, tx, rx);
    if !config.no_save {
        let store = config
            .config
            .clone()
            .map_or_else(FileStore::default_location, FileStore::new);
        tracing::info!(path = %store.path().display(), "form inputs persisted");
        app = app.with_config(ConfigManager::new(Arc::new(store)));
    }

    app.run()?;
    Ok(())
}
