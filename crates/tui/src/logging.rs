use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// Where log output should go for a given run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File,
    Disabled,
}

impl LogTarget {
    /// The TUI owns the terminal, so it only logs when a file was requested.
    pub fn for_run(config: &AppConfig, interactive: bool) -> Self {
        match (config.log_file().is_some(), interactive) {
            (true, _) => LogTarget::File,
            (false, true) => LogTarget::Disabled,
            (false, false) => LogTarget::Stderr,
        }
    }
}

/// `--log` / `DESKBOOK_LOG` take full directive lists and win over `RUST_LOG`,
/// which is only consulted when neither is set.
pub fn build_filter(config: &AppConfig) -> Result<EnvFilter> {
    let builder = EnvFilter::builder().with_default_directive(LevelFilter::INFO.into());
    if config.log_filter_is_explicit() {
        return builder
            .parse(config.log_filter())
            .with_context(|| format!("invalid log filter '{}'", config.log_filter()));
    }
    Ok(builder.from_env_lossy())
}

pub fn init_tracing(config: &AppConfig, interactive: bool) -> Result<()> {
    let env_filter = build_filter(config)?;

    match LogTarget::for_run(config, interactive) {
        LogTarget::Disabled => {}
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact()
                .try_init();
        }
        LogTarget::File => {
            let Some(path) = config.log_file() else {
                return Ok(());
            };
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .compact()
                .try_init();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigOverrides;

    fn config_with_filter(filter: &str) -> AppConfig {
        AppConfig::discover(ConfigOverrides {
            log_filter: Some(filter.into()),
            ..Default::default()
        })
        .unwrap()
    }

    fn config_with(log_file: Option<&str>) -> AppConfig {
        AppConfig::discover(ConfigOverrides {
            individual_desks: Some(10),
            team_desks: Some(5),
            log_filter: Some("info".into()),
            log_file: log_file.map(Into::into),
        })
        .unwrap()
    }

    #[test]
    fn interactive_runs_without_file_stay_silent() {
        let config = config_with(None);
        assert_eq!(LogTarget::for_run(&config, true), LogTarget::Disabled);
        assert_eq!(LogTarget::for_run(&config, false), LogTarget::Stderr);
    }

    #[test]
    fn log_file_wins_for_every_surface() {
        let config = config_with(Some("deskbook.log"));
        assert_eq!(LogTarget::for_run(&config, true), LogTarget::File);
        assert_eq!(LogTarget::for_run(&config, false), LogTarget::File);
    }

    #[test]
    fn comma_separated_directives_are_accepted() {
        let config = config_with_filter("warn,deskbook_core=debug");
        let filter = build_filter(&config).unwrap();
        let rendered = filter.to_string();
        assert!(rendered.contains("deskbook_core=debug"));
        assert!(rendered.contains("warn"));
    }

    #[test]
    fn malformed_filter_is_reported() {
        let config = config_with_filter("deskbook_core=loud");
        let err = build_filter(&config).unwrap_err();
        assert!(err.to_string().contains("invalid log filter"));
    }
}
