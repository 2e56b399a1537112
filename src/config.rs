//! Repository list file: one repository path per line.
//!
//! Lives at `~/.gcalrepos` unless a path is given on the command line.

use crate::error::{GcalError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const REPO_LIST_FILE_NAME: &str = ".gcalrepos";

pub struct RepoList {
    path: PathBuf,
}

impl RepoList {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    /// The explicit `path` if given, otherwise the dotfile in the home directory.
    pub fn locate(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Ok(Self::new(p)),
            None => {
                let home = dirs::home_dir().ok_or(GcalError::NoHomeDir)?;
                Ok(Self::new(home.join(REPO_LIST_FILE_NAME)))
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the list. A missing file is an error.
    pub fn load(&self) -> Result<Vec<PathBuf>> {
        let content = fs::read_to_string(&self.path).map_err(|source| GcalError::Config {
            path: self.path.clone(),
            source,
        })?;
        Ok(parse_lines(&content))
    }

    /// Read the list, treating a missing file as empty.
    pub fn load_or_default(&self) -> Result<Vec<PathBuf>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(parse_lines(&content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(source) => Err(GcalError::Config { path: self.path.clone(), source }),
        }
    }

    /// Merge `found` into the stored list, keeping existing order.
    /// Returns the paths that were not already present.
    pub fn append(&self, found: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut repos = self.load_or_default()?;
        let mut added = Vec::new();

        for path in found {
            if !repos.contains(path) {
                repos.push(path.clone());
                added.push(path.clone());
            }
        }

        if !added.is_empty() {
            self.save(&repos)?;
        }
        Ok(added)
    }

    fn save(&self, repos: &[PathBuf]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut content = String::new();
        for repo in repos {
            content.push_str(&repo.to_string_lossy());
            content.push('\n');
        }
        fs::write(&self.path, content).map_err(|source| GcalError::Config {
            path: self.path.clone(),
            source,
        })
    }
}

pub fn parse_lines(content: &str) -> Vec<PathBuf> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect()
}
