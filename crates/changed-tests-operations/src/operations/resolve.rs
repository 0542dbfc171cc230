use std::path::Path;

use changed_tests_git::MergeBase;
use tracing::{debug, warn};

use crate::traits::GitProvider;
use crate::{OperationError, ResolvedRevision, Result};

pub struct ResolveInput<'a> {
    /// Revision given on the command line, if any.
    pub requested: Option<&'a str>,
    /// Probed in order when nothing was requested.
    pub defaults: &'a [String],
}

pub struct ResolveRevisionOperation<G> {
    git_provider: G,
}

impl<G> ResolveRevisionOperation<G>
where
    G: GitProvider,
{
    pub fn new(git_provider: G) -> Self {
        Self { git_provider }
    }

    /// # Errors
    ///
    /// Returns [`OperationError::NoSuchRevision`] if the requested revision is
    /// not a commit, [`OperationError::NoDefaultRevision`] if no default
    /// candidate is, or a git error if the repository cannot be read.
    pub fn execute(&self, repo_root: &Path, input: &ResolveInput<'_>) -> Result<ResolvedRevision> {
        let revision = match input.requested {
            Some(requested) => {
                if self
                    .git_provider
                    .resolve_commit(repo_root, requested)?
                    .is_none()
                {
                    return Err(OperationError::NoSuchRevision {
                        revision: requested.to_string(),
                    });
                }
                requested.to_string()
            }
            None => self.first_default(repo_root, input.defaults)?,
        };

        let merge_base = self.git_provider.merge_base_with_head(repo_root, &revision)?;
        if merge_base == MergeBase::Unrelated {
            warn!(%revision, "revision shares no history with HEAD, diffing against it directly");
        }

        Ok(ResolvedRevision {
            revision,
            merge_base,
        })
    }

    fn first_default(&self, repo_root: &Path, defaults: &[String]) -> Result<String> {
        for candidate in defaults {
            if self
                .git_provider
                .resolve_commit(repo_root, candidate)?
                .is_some()
            {
                debug!(%candidate, "using default revision");
                return Ok(candidate.clone());
            }
            debug!(%candidate, "default revision not found");
        }

        Err(OperationError::NoDefaultRevision {
            candidates: defaults.to_vec(),
        })
    }
}
