//! This module handles the initial setup of the application.
use super::args::AppArgs;
use crate::config::MergeConfig;
use crate::entry::TimestampStyle;
use crate::merge::{MergeStrategy, StrategyKind};
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Contains everything needed to run a merge.
///
/// This struct is created by the `prepare` function and handed to the run
/// step in `app`.
pub struct PreparedApp {
    /// The command-line arguments.
    pub args: AppArgs,
    /// The strategy chosen from flags, config or defaults.
    pub strategy: Box<dyn MergeStrategy>,
    /// How timestamps are written to the output.
    pub style: TimestampStyle,
}

/// Prepares the application for running.
///
/// This function performs the following steps:
/// 1. Loads the config file, if one was given.
/// 2. Configures logging.
/// 3. Picks the merge strategy and timestamp style.
/// 4. Prints a start banner.
///
/// # Errors
///
/// This function will return an error if the config file cannot be loaded or
/// its `log_filter` is not a valid filter directive.
pub fn prepare(args: AppArgs) -> Result<PreparedApp> {
    let config = MergeConfig::load_optional(args.config.as_deref())?;

    configure_logging(args.verbose, config.log_filter.as_deref())?;

    let kind = resolve_strategy(&args, &config);
    let style = resolve_style(&args, &config);
    let strategy = kind.build();

    print_start_banner(&args, strategy.as_ref(), style);

    Ok(PreparedApp {
        args,
        strategy,
        style,
    })
}

/// Flags win over the config file, which wins over the built-in default.
fn resolve_strategy(args: &AppArgs, config: &MergeConfig) -> StrategyKind {
    args.strategy.or(config.strategy).unwrap_or_default()
}

fn resolve_style(args: &AppArgs, config: &MergeConfig) -> TimestampStyle {
    args.style.or(config.style).unwrap_or_default()
}

/// Configures logging for the application.
///
/// `RUST_LOG` takes precedence, then the config file's filter, then a level
/// picked from `--verbose`.
fn configure_logging(verbose: bool, config_filter: Option<&str>) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => resolve_filter(verbose, config_filter)?,
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
    Ok(())
}

/// Builds the filter used when `RUST_LOG` is not set.
fn resolve_filter(verbose: bool, config_filter: Option<&str>) -> Result<EnvFilter> {
    match config_filter {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid log_filter '{directives}' in config")),
        None if verbose => Ok(EnvFilter::new("info,log_merge=debug")),
        None => Ok(EnvFilter::new("warn,log_merge=info")),
    }
}

/// Prints a banner with startup information.
fn print_start_banner(args: &AppArgs, strategy: &dyn MergeStrategy, style: TimestampStyle) {
    let Some((output, inputs)) = args.paths.split_last() else {
        return;
    };
    println!("Merging {} log file(s)", inputs.len());
    for (i, input) in inputs.iter().enumerate() {
        println!("  Input {}: {}", i + 1, input.display());
    }
    println!("Output: {}", output.display());
    println!("Strategy: {}", strategy.name());
    println!("Timestamp style: {:?}", style);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(extra: &[&str]) -> AppArgs {
        let mut argv = vec!["log-merge"];
        argv.extend_from_slice(extra);
        argv.extend_from_slice(&["a.log", "out.log"]);
        AppArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_apply_without_flags_or_config() {
        let config = MergeConfig::default();
        assert_eq!(resolve_strategy(&args(&[]), &config), StrategyKind::Sort);
        assert_eq!(resolve_style(&args(&[]), &config), TimestampStyle::Padded);
    }

    #[test]
    fn config_overrides_defaults() {
        let config = MergeConfig {
            strategy: Some(StrategyKind::Insertion),
            style: Some(TimestampStyle::Compact),
            log_filter: None,
        };
        assert_eq!(resolve_strategy(&args(&[]), &config), StrategyKind::Insertion);
        assert_eq!(resolve_style(&args(&[]), &config), TimestampStyle::Compact);
    }

    #[test]
    fn config_log_filter_must_parse() {
        let err = resolve_filter(false, Some("info,log_merge=loudest")).unwrap_err();
        assert!(err.to_string().contains("invalid log_filter"), "{err}");

        assert!(resolve_filter(false, Some("debug,log_merge=trace")).is_ok());
        assert!(resolve_filter(true, None).is_ok());
    }

    #[test]
    fn flags_override_config() {
        let config = MergeConfig {
            strategy: Some(StrategyKind::Insertion),
            style: Some(TimestampStyle::Compact),
            log_filter: None,
        };
        let args = args(&["--strategy", "sort", "--style", "padded"]);
        assert_eq!(resolve_strategy(&args, &config), StrategyKind::Sort);
        assert_eq!(resolve_style(&args, &config), TimestampStyle::Padded);
    }
}
