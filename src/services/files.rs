//! File system service
//!
//! Path normalization and directory traversal behind `GET /list-files`.
//! Everything here is blocking I/O; the API layer runs it on the blocking pool.

use std::env;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Parameters of a single listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRequest {
    /// Directory to list; may be relative or start with `~`
    pub directory: String,
    /// Descend into subdirectories
    pub recursive: bool,
    /// Report directories alongside files
    pub include_dirs: bool,
    /// Extension filters such as `.txt`; empty means every file passes
    pub file_types: Vec<String>,
}

impl ListRequest {
    /// Shallow listing of `directory` with no filters
    pub fn new(directory: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            ..Default::default()
        }
    }
}

/// File system service
pub struct FileService;

impl FileService {
    /// Turn a user-supplied path into a clean absolute path
    ///
    /// Expands a leading `~`, anchors relative paths at the working directory
    /// and folds `.`/`..` segments lexically. Symlinks are left alone and the
    /// path does not need to exist.
    pub fn normalize_path(path_str: &str) -> PathBuf {
        normalize_with_home(path_str, home_dir())
    }

    /// List paths under `request.directory`
    ///
    /// # Returns
    /// Absolute path strings in traversal order. A directory that does not
    /// exist, is not a directory, or cannot be opened yields an empty list.
    /// Unreadable subtrees met along the way are skipped.
    pub fn list_files(request: &ListRequest) -> Vec<String> {
        let root = Self::normalize_path(&request.directory);
        list_under(&root, request)
    }
}

fn normalize_with_home(path_str: &str, home: Option<PathBuf>) -> PathBuf {
    let expanded = expand_home(path_str, home);

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        match env::current_dir() {
            Ok(cwd) => cwd.join(expanded),
            Err(e) => {
                warn!(error = %e, "Cannot read working directory, leaving path relative");
                expanded
            }
        }
    };

    lexical_clean(&absolute)
}

/// Walk an already-normalized root
fn list_under(root: &Path, request: &ListRequest) -> Vec<String> {
    if !root.is_dir() {
        debug!(path = %root.display(), "Not a directory, returning empty listing");
        return Vec::new();
    }

    let max_depth = if request.recursive { usize::MAX } else { 1 };
    let mut paths = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).max_depth(max_depth) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(
                    path = ?e.path(),
                    error = %e,
                    "Skipping unreadable entry during traversal"
                );
                continue;
            }
        };

        let path = entry.path();
        // Symlinked directories count as directories but are never descended.
        let is_dir =
            entry.file_type().is_dir() || (entry.path_is_symlink() && path.is_dir());

        if is_dir {
            if request.include_dirs {
                paths.push(path.to_string_lossy().into_owned());
            }
            continue;
        }

        // Shallow listings only report regular files; deep walks report
        // every non-directory entry.
        if !request.recursive && !path.is_file() {
            continue;
        }

        if matches_file_types(entry.file_name(), &request.file_types) {
            paths.push(path.to_string_lossy().into_owned());
        }
    }

    debug!(
        path = %root.display(),
        recursive = request.recursive,
        include_dirs = request.include_dirs,
        file_types = ?request.file_types,
        count = paths.len(),
        "Listed files"
    );

    paths
}

/// Extension of a file name, dot included
///
/// Leading dots belong to the name (`.bashrc` has no extension); a name
/// without a dot has the empty extension.
pub fn extension_of(name: &str) -> &str {
    let stem_start = name.len() - name.trim_start_matches('.').len();
    match name[stem_start..].rfind('.') {
        Some(i) => &name[stem_start + i..],
        None => "",
    }
}

/// Whether a file name passes the extension filter
pub fn matches_file_types(name: &OsStr, file_types: &[String]) -> bool {
    if file_types.is_empty() {
        return true;
    }
    let name = name.to_string_lossy();
    let ext = extension_of(&name);
    file_types.iter().any(|t| t == ext)
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE")) // Windows fallback
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}

/// Replace a leading `~` or `~/` with `home`; `~user` is left untouched
fn expand_home(path_str: &str, home: Option<PathBuf>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(path_str);
    };

    if path_str == "~" {
        return home;
    }

    match path_str.strip_prefix("~/") {
        Some(rest) => home.join(rest.trim_start_matches('/')),
        None => PathBuf::from(path_str),
    }
}

fn lexical_clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last_is_normal =
                    matches!(out.components().next_back(), Some(Component::Normal(_)));
                if last_is_normal {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }

    out
}
