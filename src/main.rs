// SPDX-License-Identifier: MPL-2.0
use locale_greeter::app::{self, App, Flags};
use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn,locale_greeter=info")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            tracing::error!("invalid arguments: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let app = match App::from_flags(&flags) {
        Ok(app) => app,
        Err(err) => {
            tracing::error!("failed to start: {}", err);
            return ExitCode::FAILURE;
        }
    };

    match app::run(app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("application error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }
    Ok(flags)
}
