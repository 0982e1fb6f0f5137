//! Staged diff retrieval through the git CLI.

pub mod staged;
pub mod subprocess;

pub use staged::{StagedDiff, retrieve_staged_diff};
pub use subprocess::{GitExecutor, SystemGit};
