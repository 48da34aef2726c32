pub mod args;
mod setup;

pub use args::AppArgs;

use crate::merge::MergeReport;
use anyhow::{Context, Result};

pub async fn launch() -> Result<()> {
    launch_with_args(AppArgs::from_cli()).await.map(|_| ())
}

pub async fn launch_with_args(args: AppArgs) -> Result<MergeReport> {
    let setup::PreparedApp {
        args,
        strategy,
        style,
    } = setup::prepare(args)?;

    let report = strategy
        .run(&args.paths, style)
        .await
        .with_context(|| format!("{} merge failed", strategy.name()))?;

    println!(
        "Merged {} log entries from {} file(s) in {}ms.",
        report.entries,
        report.files,
        report.elapsed.as_millis()
    );

    Ok(report)
}
