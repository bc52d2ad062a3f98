//! ``src/fs/dir_lister.rs``
//!
//! # `DirectoryLister`: one level of a directory, split into ready and pending
//!
//! Entries whose name is already in the translation cache come back labelled;
//! every other entry comes back marked `resolving` together with a
//! [`ResolutionJob`] for its name.
//!
//! Listing is synchronous: it runs on the event loop during navigation and
//! only touches one local directory.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use tracing::{info, warn};

use crate::{
    cache::translation_cache::TranslationCache, error::AppError, fs::entry::Entry,
    tasks::resolution_task::ResolutionJob,
};

#[derive(Debug, Clone, Default)]
pub struct Listing {
    pub entries: Vec<Entry>,
    pub pending: Vec<ResolutionJob>,
}

pub struct DirectoryLister {
    cache: Arc<TranslationCache>,
    show_hidden: bool,
}

impl DirectoryLister {
    pub fn new(cache: Arc<TranslationCache>, show_hidden: bool) -> Self {
        Self { cache, show_hidden }
    }

    pub fn list(&self, path: &Path) -> Result<Listing, AppError> {
        let read_dir = fs::read_dir(path)
            .map_err(|e| AppError::navigation_failed(path, e.to_string()))?;

        let mut children: Vec<(String, PathBuf, bool)> = Vec::new();
        for dir_entry in read_dir {
            let dir_entry = match dir_entry {
                Ok(dir_entry) => dir_entry,
                Err(e) => {
                    warn!("Skipping unreadable entry in {:?}: {}", path, e);
                    continue;
                }
            };

            let name: String = dir_entry.file_name().to_string_lossy().into_owned();
            if !self.show_hidden && name.starts_with('.') {
                continue;
            }

            let is_dir = dir_entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            children.push((name, dir_entry.path(), is_dir));
        }

        children.sort_by(|a, b| a.0.cmp(&b.0));

        let mut listing = Listing {
            entries: Vec::with_capacity(children.len()),
            pending: Vec::new(),
        };
        for (name, entry_path, is_dir) in children {
            match self.cache.peek(&name) {
                Some(translated) => {
                    listing
                        .entries
                        .push(Entry::resolved(name, entry_path, is_dir, &translated));
                }
                None => {
                    listing.pending.push(ResolutionJob { name: name.clone() });
                    listing.entries.push(Entry::pending(name, entry_path, is_dir));
                }
            }
        }

        info!(
            marker = "DIR_LIST",
            operation_type = "list_complete",
            path = %path.display(),
            entries = listing.entries.len(),
            pending = listing.pending.len(),
            "Directory listed"
        );

        Ok(listing)
    }
}
