use std::env;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

static ENV_INDIVIDUAL_DESKS: &str = "DESKBOOK_INDIVIDUAL_DESKS";
static ENV_TEAM_DESKS: &str = "DESKBOOK_TEAM_DESKS";
static ENV_LOG: &str = "DESKBOOK_LOG";

pub const DEFAULT_INDIVIDUAL_DESKS: u32 = 10;
pub const DEFAULT_TEAM_DESKS: u32 = 5;
pub const DEFAULT_LOG_FILTER: &str = "info";
pub const MAX_DESKS: u32 = 999;

/// How many desks of each kind are seeded. Individual desks take the low ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    pub individual_desks: u32,
    pub team_desks: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            individual_desks: DEFAULT_INDIVIDUAL_DESKS,
            team_desks: DEFAULT_TEAM_DESKS,
        }
    }
}

impl LayoutConfig {
    pub fn new(individual_desks: u32, team_desks: u32) -> Result<Self> {
        let layout = Self {
            individual_desks,
            team_desks,
        };
        layout.validate()?;
        Ok(layout)
    }

    pub fn total(&self) -> u32 {
        self.individual_desks.saturating_add(self.team_desks)
    }

    fn validate(&self) -> Result<()> {
        let total = self.total();
        if total == 0 {
            return Err(anyhow!("Desk layout must contain at least one desk"));
        }
        if total > MAX_DESKS {
            return Err(anyhow!(
                "Desk layout has {} desks; at most {} are supported",
                total,
                MAX_DESKS
            ));
        }
        Ok(())
    }
}

/// Values supplied on the command line; they win over the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub individual_desks: Option<u32>,
    pub team_desks: Option<u32>,
    pub log_filter: Option<String>,
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    layout: LayoutConfig,
    log_filter: String,
    log_filter_explicit: bool,
    log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_filter_explicit: false,
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Construct [`AppConfig`] by resolving each setting from the provided overrides,
    /// environment variables, and built-in defaults, in that order.
    pub fn discover(overrides: ConfigOverrides) -> Result<Self> {
        Self::resolve(overrides, |key| env::var(key).ok())
    }

    /// Construct [`AppConfig`] with an explicit layout and default logging.
    pub fn from_layout(layout: LayoutConfig) -> Result<Self> {
        layout.validate()?;
        Ok(Self {
            layout,
            ..Self::default()
        })
    }

    fn resolve<F>(overrides: ConfigOverrides, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let individual_desks = resolve_count(
            overrides.individual_desks,
            ENV_INDIVIDUAL_DESKS,
            DEFAULT_INDIVIDUAL_DESKS,
            &lookup,
        )?;
        let team_desks =
            resolve_count(overrides.team_desks, ENV_TEAM_DESKS, DEFAULT_TEAM_DESKS, &lookup)?;
        let layout = LayoutConfig::new(individual_desks, team_desks)?;

        let explicit_filter = overrides.log_filter.or_else(|| lookup(ENV_LOG));
        let log_filter_explicit = explicit_filter.is_some();
        let log_filter = explicit_filter.unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            layout,
            log_filter,
            log_filter_explicit,
            log_file: overrides.log_file,
        })
    }

    pub fn layout(&self) -> LayoutConfig {
        self.layout
    }

    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// True when the filter came from `--log` or the environment rather than the default.
    pub fn log_filter_is_explicit(&self) -> bool {
        self.log_filter_explicit
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }
}

fn resolve_count<F>(explicit: Option<u32>, key: &str, default: u32, lookup: &F) -> Result<u32>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = explicit {
        return Ok(value);
    }

    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .with_context(|| format!("{} must be a non-negative integer, got '{}'", key, raw)),
        None => Ok(default),
    }
}
