use crate::entry::TimestampStyle;
use crate::merge::StrategyKind;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "log-merge")]
#[command(about = "Merge timestamped log files into one chronologically ordered log")]
pub struct AppArgs {
    #[arg(
        required = true,
        num_args = 2..,
        value_name = "PATHS",
        help = "Input log files followed by the output log file"
    )]
    pub paths: Vec<PathBuf>,

    #[arg(long, value_enum, help = "Merge strategy (default: sort)")]
    pub strategy: Option<StrategyKind>,

    #[arg(long, value_enum, help = "Timestamp rendering in the output (default: padded)")]
    pub style: Option<TimestampStyle>,

    #[arg(long, help = "Config file path")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Log debug details and per-file timings")]
    pub verbose: bool,
}

impl AppArgs {
    pub fn from_cli() -> Self {
        <Self as Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_path_is_kept_in_order() {
        let args = AppArgs::try_parse_from(["log-merge", "a.log", "b.log", "out.log"]).unwrap();
        assert_eq!(
            args.paths,
            vec![
                PathBuf::from("a.log"),
                PathBuf::from("b.log"),
                PathBuf::from("out.log")
            ]
        );
        assert_eq!(args.strategy, None);
        assert!(!args.verbose);
    }

    #[test]
    fn a_single_path_is_rejected() {
        assert!(AppArgs::try_parse_from(["log-merge", "out.log"]).is_err());
    }

    #[test]
    fn strategy_and_style_flags_parse() {
        let args = AppArgs::try_parse_from([
            "log-merge",
            "--strategy",
            "insertion",
            "--style",
            "compact",
            "-v",
            "a.log",
            "out.log",
        ])
        .unwrap();
        assert_eq!(args.strategy, Some(StrategyKind::Insertion));
        assert_eq!(args.style, Some(TimestampStyle::Compact));
        assert!(args.verbose);
    }
}
