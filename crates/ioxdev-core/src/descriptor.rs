//! Locating the workspace's plugin descriptor file
//!
//! At most one descriptor is treated as authoritative per command run. The
//! search is bounded to the first match; resolution happens fresh on every
//! run and is never cached, since the workspace may change between commands.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File suffix marking a plugin descriptor
pub const DESCRIPTOR_SUFFIX: &str = ".iox_plugin.json";

/// Reference to the authoritative descriptor file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorRef {
    /// Absolute path of the descriptor
    pub path: PathBuf,
}

/// Result of a descriptor search.
///
/// `NoWorkspace` (nothing open at all) is distinct from `NotFound` (workspace
/// open, no descriptor present) so callers can pick the right recovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(DescriptorRef),
    NotFound,
    NoWorkspace,
}

/// Find the authoritative descriptor under `workspace_root`.
///
/// The walk is sorted by file name, so the pick between several matching
/// files is stable for a given directory tree. Only a single root is
/// searched.
pub fn resolve(workspace_root: Option<&Path>) -> Resolution {
    let Some(root) = workspace_root else {
        return Resolution::NoWorkspace;
    };
    if !root.is_dir() {
        return Resolution::NoWorkspace;
    }

    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if entry.file_type().is_file()
            && entry
                .file_name()
                .to_string_lossy()
                .ends_with(DESCRIPTOR_SUFFIX)
        {
            return Resolution::Found(DescriptorRef {
                path: entry.into_path(),
            });
        }
    }

    Resolution::NotFound
}
