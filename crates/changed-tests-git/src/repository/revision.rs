use git2::{ErrorCode, ObjectType, Oid};

use crate::{GitError, MergeBase, Result};

use super::Repository;

impl Repository {
    /// Resolves `refspec` to the sha of a commit. Annotated tags are peeled.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RefNotFound`] if nothing matches `refspec`, or
    /// [`GitError::NotACommit`] if it names a tree or blob.
    pub fn resolve_commit(&self, refspec: &str) -> Result<String> {
        Ok(self.commit_oid(refspec)?.to_string())
    }

    #[must_use]
    pub fn resolves_to_commit(&self, refspec: &str) -> bool {
        self.commit_oid(refspec).is_ok()
    }

    /// # Errors
    ///
    /// Returns an error if `refspec` is not a commit or `HEAD` has no commits.
    pub fn merge_base_with_head(&self, refspec: &str) -> Result<MergeBase> {
        let revision = self.commit_oid(refspec)?;
        let head = self.commit_oid("HEAD").map_err(|_| GitError::UnbornHead)?;

        match self.inner.merge_base(revision, head) {
            Ok(base) if base == revision => Ok(MergeBase::Revision {
                sha: base.to_string(),
            }),
            Ok(base) => Ok(MergeBase::Ancestor {
                sha: base.to_string(),
            }),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(MergeBase::Unrelated),
            Err(e) => Err(e.into()),
        }
    }

    fn commit_oid(&self, refspec: &str) -> Result<Oid> {
        let object = self
            .inner
            .revparse_single(refspec)
            .map_err(|_| GitError::RefNotFound {
                refspec: refspec.to_string(),
            })?;

        match object.kind() {
            Some(ObjectType::Commit) => Ok(object.id()),
            Some(ObjectType::Tag) => object
                .peel_to_commit()
                .map(|commit| commit.id())
                .map_err(|_| GitError::NotACommit {
                    refspec: refspec.to_string(),
                    kind: ObjectType::Tag.str().to_string(),
                }),
            kind => Err(GitError::NotACommit {
                refspec: refspec.to_string(),
                kind: kind
                    .as_ref()
                    .map_or("unknown object", ObjectType::str)
                    .to_string(),
            }),
        }
    }
}
