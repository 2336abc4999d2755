pub mod logging;
pub mod rewrite;
pub mod run;
pub mod walk;

pub use rewrite::{RewriteRule, rewrite_file};
pub use run::{RunConfig, fix_directory};
pub use walk::{DirectoryRewriter, RewriteSummary};
