use std::borrow::Cow;
use std::fs;
use std::path::Path;

use anyhow::Context;
use regex::Regex;

/// Matches `.withValues(alpha: <expr>)` calls, capturing the alpha expression.
///
/// The capture is any run of characters excluding a closing parenthesis, so a
/// match always ends at the first `)` after `alpha:`. Expressions that contain
/// their own parentheses are cut short at that point. This mirrors the
/// behavior of the migration this tool reverses and is kept as-is; see the
/// tests pinning it down.
pub const WITH_VALUES_PATTERN: &str = r"\.withValues\(\s*alpha:\s*([^)]+)\)";

const WITH_OPACITY_TEMPLATE: &str = ".withOpacity($1)";

const DART_SUFFIX: &str = ".dart";

/// A single find-and-replace rule plus the filename suffix it applies to.
#[derive(Clone, Debug)]
pub struct RewriteRule {
    pattern: Regex,
    replacement: String,
    suffix: String,
}

impl RewriteRule {
    pub fn new(pattern: Regex, replacement: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            pattern,
            replacement: replacement.into(),
            suffix: suffix.into(),
        }
    }

    /// The built-in rule: rewrite `.withValues(alpha: X)` to `.withOpacity(X)`
    /// in `.dart` files.
    pub fn opacity_fix() -> Self {
        // The pattern is a constant that is covered by tests, so `unwrap` here is fine.
        let pattern = Regex::new(WITH_VALUES_PATTERN).unwrap();
        Self::new(pattern, WITH_OPACITY_TEMPLATE, DART_SUFFIX)
    }

    /// Whether the final component of `path` ends with this rule's suffix.
    /// The comparison is case-sensitive, and a file named exactly `.dart`
    /// matches.
    pub fn matches_path(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(&self.suffix))
    }

    /// Replaces every non-overlapping match in `content` in a single pass.
    pub fn apply<'a>(&self, content: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(content, self.replacement.as_str())
    }
}

/// Applies `rule` to the file at `path`, overwriting it in place when the
/// substitution changes its content. Returns whether the content changed.
///
/// The file is read as UTF-8 in full; the first read or write failure aborts
/// with the path attached to the error. With `dry_run` set, a changed file is
/// still reported but never written.
pub fn rewrite_file(path: &Path, rule: &RewriteRule, dry_run: bool) -> anyhow::Result<bool> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file contents: {}", path.display()))?;

    let new_content = rule.apply(&content);
    if new_content == content {
        return Ok(false);
    }

    if !dry_run {
        fs::write(path, new_content.as_ref())
            .with_context(|| format!("Failed to write file contents: {}", path.display()))?;
    }
    Ok(true)
}
