//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use git2::Repository;
use tempfile::TempDir;

use diffscribe::{GenerateError, GitError, GitExecutor, TextGenerator};

/// Diff used by scenarios that stage a new helper function.
pub const HELPER_DIFF: &str = "diff --git a/src/lib.rs b/src/lib.rs
index 3b18e51..a9c1f2d 100644
--- a/src/lib.rs
+++ b/src/lib.rs
@@ -1,3 +1,7 @@
 pub fn existing() {}
+
+pub fn helper(value: u32) -> u32 {
+    value * 2
+}
";

/// What the fake git reports.
pub enum FakeRepoState {
    Repository { staged: String },
    NotARepository,
    NotInstalled,
}

/// In-memory [`GitExecutor`] that never spawns a process.
pub struct FakeGit {
    state: FakeRepoState,
    diff_calls: AtomicU32,
}

impl FakeGit {
    pub fn with_staged(diff: &str) -> Self {
        Self::new(FakeRepoState::Repository {
            staged: diff.to_string(),
        })
    }

    pub fn new(state: FakeRepoState) -> Self {
        Self {
            state,
            diff_calls: AtomicU32::new(0),
        }
    }

    pub fn diff_calls(&self) -> u32 {
        self.diff_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GitExecutor for FakeGit {
    async fn check_repository(&self) -> Result<(), GitError> {
        match &self.state {
            FakeRepoState::Repository { .. } => Ok(()),
            FakeRepoState::NotARepository => Err(GitError::NotARepository),
            FakeRepoState::NotInstalled => Err(GitError::NotInstalled),
        }
    }

    async fn staged_diff(&self) -> Result<String, GitError> {
        self.diff_calls.fetch_add(1, Ordering::SeqCst);
        match &self.state {
            FakeRepoState::Repository { staged } => Ok(staged.clone()),
            FakeRepoState::NotARepository => Err(GitError::NotARepository),
            FakeRepoState::NotInstalled => Err(GitError::NotInstalled),
        }
    }
}

/// Deterministic [`TextGenerator`] that records every prompt it receives.
pub struct FakeGenerator {
    reply: String,
    prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn complete(&self, prompt: &str) -> Result<String, GenerateError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.reply.trim().to_string())
    }
}

/// Gemini response body with a single text candidate.
pub fn gemini_text_response(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP",
            "index": 0
        }],
        "modelVersion": "gemini-2.0-flash"
    })
}

/// Write an executable shell script standing in for a real binary.
#[cfg(unix)]
pub fn create_mock_script(dir: &Path, name: &str, script_content: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script_path = dir.join(name);
    {
        let mut file = File::create(&script_path).expect("Failed to create mock script");
        file.write_all(script_content.as_bytes())
            .expect("Failed to write mock script");
    }

    let mut perms = fs::metadata(&script_path)
        .expect("Failed to get metadata")
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&script_path, perms).expect("Failed to set permissions");

    script_path
}

/// A throwaway git repository for tests that run the real git binary.
pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new empty git repository in a temp directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");
        Self { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file in the work tree without staging it.
    pub fn write(&self, name: &str, content: &str) {
        fs::write(self.dir.path().join(name), content).expect("Failed to write test file");
    }

    /// Write a file and add it to the index.
    pub fn stage(&self, name: &str, content: &str) {
        self.write(name, content);
        let mut index = self.repo.index().expect("Failed to get index");
        index.add_path(Path::new(name)).expect("Failed to add file");
        index.write().expect("Failed to write index");
    }
}
