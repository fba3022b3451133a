use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{GuardError, Result};

/// Candidate file listings taken from a repository.
pub trait RepoFiles {
    /// Every path recorded in the index.
    ///
    /// # Errors
    /// Returns an error if the index cannot be read.
    fn tracked_files(&self) -> Result<Vec<PathBuf>>;

    /// Paths whose index entry differs from HEAD (added or modified).
    ///
    /// # Errors
    /// Returns an error if the index or HEAD cannot be read.
    fn staged_files(&self) -> Result<Vec<PathBuf>>;

    /// Paths tracked in HEAD whose work-tree content differs from HEAD.
    /// Deleted files are not listed.
    ///
    /// # Errors
    /// Returns an error if HEAD or one of its blobs cannot be read.
    fn modified_files(&self) -> Result<Vec<PathBuf>>;
}

/// Git access through gix. Returned paths are joined onto the work tree.
pub struct GitRepo {
    repo_path: PathBuf,
    workdir: PathBuf,
}

impl GitRepo {
    /// Open the repository containing `path`.
    ///
    /// # Errors
    /// Returns an error if no git repository is found.
    pub fn discover(path: &Path) -> Result<Self> {
        let repo = gix::discover(path)
            .map_err(|e| GuardError::Git(format!("Failed to discover git repository: {e}")))?;
        let workdir = repo
            .workdir()
            .ok_or_else(|| GuardError::Git("Repository has no working directory".into()))?
            .to_path_buf();
        Ok(Self {
            repo_path: repo.path().to_path_buf(),
            workdir,
        })
    }

    #[must_use]
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn open_repo(&self) -> Result<gix::Repository> {
        gix::open(&self.repo_path)
            .map_err(|e| GuardError::Git(format!("Failed to open git repository: {e}")))
    }

    fn open_index(repo: &gix::Repository) -> Result<gix::index::File> {
        repo.open_index()
            .map_err(|e| GuardError::Git(format!("Failed to open git index: {e}")))
    }

    fn collect_tree_paths(
        tree: &gix::Tree<'_>,
        prefix: &Path,
        paths: &mut HashMap<PathBuf, gix::ObjectId>,
    ) -> Result<()> {
        for entry in tree.iter() {
            let entry =
                entry.map_err(|e| GuardError::Git(format!("Failed to read tree entry: {e}")))?;
            let name = std::str::from_utf8(entry.filename())
                .map_err(|e| GuardError::Git(format!("Invalid filename encoding: {e}")))?;
            let path = prefix.join(name);

            match entry.mode().kind() {
                gix::object::tree::EntryKind::Blob
                | gix::object::tree::EntryKind::BlobExecutable => {
                    paths.insert(path, entry.oid().into());
                }
                gix::object::tree::EntryKind::Tree => {
                    let subtree = entry
                        .object()
                        .map_err(|e| GuardError::Git(format!("Failed to get subtree object: {e}")))?
                        .into_tree();
                    Self::collect_tree_paths(&subtree, &path, paths)?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Blob ids of HEAD's tree; empty for a repository without commits.
    fn head_blobs(repo: &gix::Repository) -> Result<HashMap<PathBuf, gix::ObjectId>> {
        let mut blobs = HashMap::new();
        if let Ok(commit) = repo.head_commit() {
            let tree = commit
                .tree()
                .map_err(|e| GuardError::Git(format!("Failed to get HEAD tree: {e}")))?;
            Self::collect_tree_paths(&tree, Path::new(""), &mut blobs)?;
        } else {
            debug!("Repository has no HEAD commit; every index entry counts as staged");
        }
        Ok(blobs)
    }
}

impl RepoFiles for GitRepo {
    fn tracked_files(&self) -> Result<Vec<PathBuf>> {
        let repo = self.open_repo()?;
        let index = Self::open_index(&repo)?;

        let files: BTreeSet<PathBuf> = index
            .entries()
            .iter()
            .map(|entry| {
                let path = String::from_utf8_lossy(entry.path(&index)).to_string();
                self.workdir.join(path)
            })
            .collect();

        debug!(count = files.len(), "Listed tracked files");
        Ok(files.into_iter().collect())
    }

    fn staged_files(&self) -> Result<Vec<PathBuf>> {
        let repo = self.open_repo()?;
        let index = Self::open_index(&repo)?;
        let head = Self::head_blobs(&repo)?;

        let mut staged = BTreeSet::new();
        for entry in index.entries() {
            let path = PathBuf::from(String::from_utf8_lossy(entry.path(&index)).to_string());
            let is_staged = head.get(&path).is_none_or(|head_id| *head_id != entry.id);
            if is_staged {
                staged.insert(self.workdir.join(path));
            }
        }

        debug!(count = staged.len(), "Listed staged files");
        Ok(staged.into_iter().collect())
    }

    fn modified_files(&self) -> Result<Vec<PathBuf>> {
        let repo = self.open_repo()?;
        let head = Self::head_blobs(&repo)?;

        let mut modified = BTreeSet::new();
        for (path, id) in head {
            let full = self.workdir.join(&path);
            let Ok(content) = std::fs::read(&full) else {
                continue;
            };
            let blob = repo
                .find_object(id)
                .map_err(|e| GuardError::Git(format!("Failed to read blob {id}: {e}")))?;
            if blob.data != content {
                modified.insert(full);
            }
        }

        debug!(count = modified.len(), "Listed modified work-tree files");
        Ok(modified.into_iter().collect())
    }
}
