use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::rewrite::{RewriteRule, rewrite_file};

/// Counts accumulated over one traversal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RewriteSummary {
    /// Files that matched the suffix filter and were read.
    pub files_scanned: usize,
    /// Files whose content changed (or would change, with dry run set).
    pub files_changed: usize,
}

/// Walks a directory tree and applies a rewrite rule to every matching file.
///
/// Traversal is serial and unordered, and descends into hidden directories,
/// ignored paths, and git metadata alike. Each file is fully processed before
/// the next is opened. The first read or write failure aborts the walk;
/// entries that cannot be traversed at all are logged and skipped.
#[derive(Clone, Debug)]
pub struct DirectoryRewriter {
    rule: RewriteRule,
    root_dir: PathBuf,
    dry_run: bool,
}

impl DirectoryRewriter {
    pub fn new(rule: RewriteRule, root_dir: PathBuf) -> Self {
        Self {
            rule,
            root_dir,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Rewrites every file under the root whose name matches the rule's
    /// suffix, invoking `on_changed` with the path of each changed file.
    ///
    /// A nonexistent root is not an error and yields an empty summary.
    pub fn walk_files<F>(&self, mut on_changed: F) -> anyhow::Result<RewriteSummary>
    where
        F: FnMut(&Path),
    {
        let mut summary = RewriteSummary::default();

        let walker = WalkBuilder::new(&self.root_dir)
            .standard_filters(false)
            .build();

        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!("Skipping unreadable entry: {err}");
                    continue;
                }
            };

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            if !self.rule.matches_path(entry.path()) {
                continue;
            }

            summary.files_scanned += 1;
            if rewrite_file(entry.path(), &self.rule, self.dry_run)? {
                summary.files_changed += 1;
                on_changed(entry.path());
            }
        }

        Ok(summary)
    }
}
