use crate::error::{GcalError, Result};
use crate::model::AuthoredCommit;
use chrono::{DateTime, FixedOffset};
use gix::{ObjectId, Repository};
use std::path::{Path, PathBuf};

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Open the repository at exactly `path`; parent directories are not searched.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let repo = gix::open(&path).map_err(|e| GcalError::repo_open(&path, e))?;
        Ok(Self { repo, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn head_id(&self) -> Result<ObjectId> {
        let mut head = self
            .repo
            .head()
            .map_err(|e| GcalError::head_resolve(&self.path, e))?;
        let head_commit = head
            .peel_to_commit_in_place()
            .map_err(|e| GcalError::head_resolve(&self.path, e))?;
        Ok(head_commit.id)
    }

    /// Visit every commit reachable from HEAD that was authored by `email`.
    /// Order across branches is whatever the walk yields. Author time is only
    /// decoded for matching commits.
    pub fn for_each_commit_by<F>(&self, email: &str, mut f: F) -> Result<()>
    where
        F: FnMut(AuthoredCommit),
    {
        let head_id = self.head_id()?;
        let walk = self
            .repo
            .rev_walk([head_id])
            .all()
            .map_err(|e| GcalError::walk(&self.path, e))?;

        for info in walk {
            let info = info.map_err(|e| GcalError::walk(&self.path, e))?;
            let commit = self
                .repo
                .find_commit(info.id)
                .map_err(|e| GcalError::walk(&self.path, e))?;
            let author = commit.author().map_err(|e| GcalError::walk(&self.path, e))?;
            if author.email != email {
                continue;
            }

            let time = author.time().map_err(|e| GcalError::walk(&self.path, e))?;
            let authored_at =
                to_datetime(time.seconds, time.offset).map_err(|e| GcalError::walk(&self.path, e))?;

            f(AuthoredCommit {
                author_email: email.to_string(),
                authored_at,
            });
        }

        Ok(())
    }
}

/// Author time in the author's recorded UTC offset.
fn to_datetime(seconds: i64, offset: i32) -> Result<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(offset)
        .ok_or_else(|| GcalError::InvalidDate(format!("Invalid UTC offset: {offset}")))?;
    DateTime::from_timestamp(seconds, 0)
        .map(|utc| utc.with_timezone(&offset))
        .ok_or_else(|| GcalError::InvalidDate(format!("Invalid timestamp: {seconds}")))
}
