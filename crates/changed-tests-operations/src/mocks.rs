use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use changed_tests_git::{CommitInfo, GitError, MergeBase};

use crate::Result;
use crate::TestInvocation;
use crate::traits::{FileProbe, GitProvider, TestRunner};

pub struct MockGitProvider {
    root: PathBuf,
    commits: HashMap<String, String>,
    merge_bases: HashMap<String, MergeBase>,
    changed: Vec<PathBuf>,
    head: Option<CommitInfo>,
    diffed_against: Mutex<Vec<String>>,
}

impl MockGitProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: PathBuf::from("/mock/repo"),
            commits: HashMap::new(),
            merge_bases: HashMap::new(),
            changed: Vec::new(),
            head: Some(CommitInfo {
                sha: "head".to_string(),
                time: 1_700_000_000,
            }),
            diffed_against: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_revision(mut self, refspec: &str) -> Self {
        let sha = format!("sha-{refspec}");
        self.merge_bases
            .entry(refspec.to_string())
            .or_insert_with(|| MergeBase::Revision { sha: sha.clone() });
        self.commits.insert(refspec.to_string(), sha);
        self
    }

    #[must_use]
    pub fn with_merge_base(mut self, refspec: &str, merge_base: MergeBase) -> Self {
        self.merge_bases.insert(refspec.to_string(), merge_base);
        self
    }

    #[must_use]
    pub fn with_changed_files(mut self, paths: &[&str]) -> Self {
        self.changed = paths.iter().map(PathBuf::from).collect();
        self
    }

    #[must_use]
    pub fn with_head_time(mut self, time: i64) -> Self {
        self.head = Some(CommitInfo {
            sha: "head".to_string(),
            time,
        });
        self
    }

    #[must_use]
    pub fn without_head(mut self) -> Self {
        self.head = None;
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn diffed_against(&self) -> Vec<String> {
        self.diffed_against.lock().expect("mutex poisoned").clone()
    }
}

impl Default for MockGitProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for MockGitProvider {
    fn repository_root(&self, _start_path: &Path) -> Result<PathBuf> {
        Ok(self.root.clone())
    }

    fn resolve_commit(&self, _repo_root: &Path, refspec: &str) -> Result<Option<String>> {
        Ok(self.commits.get(refspec).cloned())
    }

    fn merge_base_with_head(&self, _repo_root: &Path, refspec: &str) -> Result<MergeBase> {
        self.merge_bases.get(refspec).cloned().ok_or_else(|| {
            GitError::RefNotFound {
                refspec: refspec.to_string(),
            }
            .into()
        })
    }

    fn changed_files(&self, _repo_root: &Path, base: &str) -> Result<Vec<PathBuf>> {
        self.diffed_against
            .lock()
            .expect("mutex poisoned")
            .push(base.to_string());
        Ok(self.changed.clone())
    }

    fn head_commit(&self, _repo_root: &Path) -> Result<CommitInfo> {
        self.head.clone().ok_or_else(|| GitError::UnbornHead.into())
    }
}

#[derive(Default)]
pub struct MockFileProbe {
    existing: HashSet<PathBuf>,
}

impl MockFileProbe {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks paths relative to `root` as existing.
    #[must_use]
    pub fn with_files(mut self, root: &Path, paths: &[&str]) -> Self {
        self.existing.extend(paths.iter().map(|p| root.join(p)));
        self
    }
}

impl FileProbe for MockFileProbe {
    fn exists(&self, path: &Path) -> bool {
        self.existing.contains(path)
    }
}

pub struct MockTestRunner {
    exit_code: i32,
    invocations: Mutex<Vec<TestInvocation>>,
}

impl MockTestRunner {
    #[must_use]
    pub fn new() -> Self {
        Self::exiting_with(0)
    }

    #[must_use]
    pub fn exiting_with(exit_code: i32) -> Self {
        Self {
            exit_code,
            invocations: Mutex::new(Vec::new()),
        }
    }

    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn invocations(&self) -> Vec<TestInvocation> {
        self.invocations.lock().expect("mutex poisoned").clone()
    }
}

impl Default for MockTestRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRunner for MockTestRunner {
    fn run(&self, invocation: &TestInvocation) -> Result<i32> {
        self.invocations
            .lock()
            .expect("mutex poisoned")
            .push(invocation.clone());
        Ok(self.exit_code)
    }
}
