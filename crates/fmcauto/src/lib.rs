//! Shared plumbing behind the `avi-nat` and `avi-create-object` binaries.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

use std::future::Future;

use crate::cli::CommonOpts;
use crate::config::Config;
use crate::error::CliError;

/// Common `main` body: load config, set up logging, run, exit with the
/// error's code on failure.
pub async fn run_main<F, Fut>(common: &CommonOpts, run: F)
where
    F: FnOnce(Config) -> Fut,
    Fut: Future<Output = Result<(), CliError>>,
{
    let (cfg, cfg_error) = match config::load_config() {
        Ok(cfg) => (cfg, None),
        Err(err) => (Config::default(), Some(err)),
    };
    let log_file = logging::log_path(common, cfg.defaults.log_file.as_deref());
    let guard = logging::init(common, &log_file);

    // Only reportable once the subscriber is up.
    if let Some(err) = cfg_error {
        tracing::warn!(
            path = %config::config_path().display(),
            "ignoring unreadable config file: {err}"
        );
    }

    if let Err(err) = run(cfg).await {
        let code = err.exit_code();
        tracing::error!(code, "{err}");
        eprintln!("{:?}", miette::Report::new(err));
        // process::exit skips destructors
        drop(guard);
        std::process::exit(code);
    }
}
