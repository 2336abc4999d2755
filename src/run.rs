use std::path::{Path, PathBuf};

use crate::rewrite::RewriteRule;
use crate::walk::{DirectoryRewriter, RewriteSummary};

/// Configuration for a single batch run.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub directory: PathBuf,
    pub dry_run: bool,
}

// Rewrite every `.dart` file under the configured directory, calling
// `on_fixed` with each changed file, and return a printable summary line.
pub fn fix_directory<F>(config: &RunConfig, on_fixed: F) -> anyhow::Result<String>
where
    F: FnMut(&Path),
{
    let rewriter = DirectoryRewriter::new(RewriteRule::opacity_fix(), config.directory.clone())
        .with_dry_run(config.dry_run);
    let summary = rewriter.walk_files(on_fixed)?;

    log::info!(
        "Scanned {} .dart files under {}, {} changed",
        summary.files_scanned,
        config.directory.display(),
        summary.files_changed,
    );

    Ok(format_summary(&summary, config.dry_run))
}

fn format_summary(summary: &RewriteSummary, dry_run: bool) -> String {
    let num_files_fixed = summary.files_changed;
    let prefix = if num_files_fixed != 1 { "s" } else { "" };
    if dry_run {
        format!("Found {num_files_fixed} file{prefix} to fix\n")
    } else {
        format!("Success: {num_files_fixed} file{prefix} fixed\n")
    }
}
