//! src/fs/entry.rs
//! ============================================================================
//! # Entry: one child of the listed directory
//!
//! Identity inside a listing is the file name. `translation` carries the
//! display label once resolved.

use std::path::PathBuf;

pub const FILE_TAG: &str = "Fichier";
pub const DIR_TAG: &str = "Dossier";
pub const PENDING_LABEL: &str = "Traduction en cours...";

/// Display capability shared by everything the list widget can show.
pub trait ListItem {
    fn title(&self) -> String;

    fn description(&self) -> String;

    /// Text the substring filter matches against.
    fn filter_value(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub translation: Option<String>,
    pub resolving: bool,
}

impl Entry {
    /// Entry whose translation is already known.
    pub fn resolved(name: String, path: PathBuf, is_dir: bool, translated: &str) -> Self {
        Self {
            translation: Some(format_label(is_dir, translated)),
            resolving: false,
            name,
            path,
            is_dir,
        }
    }

    /// Entry waiting for a resolution job.
    pub fn pending(name: String, path: PathBuf, is_dir: bool) -> Self {
        Self {
            name,
            path,
            is_dir,
            translation: None,
            resolving: true,
        }
    }

    pub fn apply_translation(&mut self, translated: &str) {
        self.translation = Some(format_label(self.is_dir, translated));
        self.resolving = false;
    }
}

impl ListItem for Entry {
    fn title(&self) -> String {
        if self.resolving {
            format!("{} ⏳", self.name)
        } else if self.is_dir {
            format!("{} 📁", self.name)
        } else {
            self.name.clone()
        }
    }

    fn description(&self) -> String {
        self.translation
            .clone()
            .unwrap_or_else(|| PENDING_LABEL.to_string())
    }

    fn filter_value(&self) -> &str {
        &self.name
    }
}

/// `"Dossier → Bureau"`, `"Fichier → rapport.txt"`.
pub fn format_label(is_dir: bool, translated: &str) -> String {
    let tag = if is_dir { DIR_TAG } else { FILE_TAG };
    format!("{tag} → {translated}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_entry_shows_placeholder() {
        let entry = Entry::pending("notes".into(), PathBuf::from("/tmp/notes"), false);
        assert_eq!(entry.title(), "notes ⏳");
        assert_eq!(entry.description(), PENDING_LABEL);
    }

    #[test]
    fn applied_translation_clears_resolving() {
        let mut entry = Entry::pending("Desktop".into(), PathBuf::from("/home/u/Desktop"), true);
        entry.apply_translation("Bureau");
        assert!(!entry.resolving);
        assert_eq!(entry.title(), "Desktop 📁");
        assert_eq!(entry.description(), "Dossier → Bureau");
        assert_eq!(entry.filter_value(), "Desktop");
    }
}
