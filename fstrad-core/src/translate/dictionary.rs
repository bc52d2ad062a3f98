//! src/translate/dictionary.rs
//! ============================================================================
//! # StaticDictionary: built-in translations for common folder names
//!
//! Loaded once at startup and read-only afterwards. Lookups are exact first,
//! then case-insensitive through a pre-folded index.

use std::collections::{BTreeMap, HashMap};

/// French names for the folders most users have under `$HOME` and `/`.
const FRENCH_DEFAULTS: &[(&str, &str)] = &[
    ("Desktop", "Bureau"),
    ("Documents", "Documents"),
    ("Downloads", "Téléchargements"),
    ("Pictures", "Images"),
    ("Music", "Musique"),
    ("Videos", "Vidéos"),
    ("Home", "Accueil"),
    ("Folder", "Dossier"),
    ("File", "Fichier"),
    ("Public", "Public"),
    ("Templates", "Modèles"),
    ("Library", "Bibliothèque"),
    ("Applications", "Applications"),
    ("Movies", "Films"),
    ("bin", "binaire"),
    ("src", "source"),
    ("pkg", "paquets"),
    ("tmp", "temporaire"),
    ("opt", "optionnel"),
    ("usr", "utilisateur"),
    ("var", "variable"),
    ("etc", "configuration"),
];

#[derive(Debug, Clone, Default)]
pub struct StaticDictionary {
    exact: HashMap<String, String>,
    /// lowercased key → translation; when two keys fold to the same form the
    /// alphabetically smallest original key wins.
    folded: HashMap<String, String>,
}

impl StaticDictionary {
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let exact: HashMap<String, String> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        let mut sorted: Vec<(&String, &String)> = exact.iter().collect();
        sorted.sort();

        let mut folded = HashMap::with_capacity(exact.len());
        for (key, value) in sorted {
            folded
                .entry(key.to_lowercase())
                .or_insert_with(|| value.clone());
        }

        Self { exact, folded }
    }

    /// Built-in French table with `extra` entries layered on top.
    pub fn french_with(extra: &BTreeMap<String, String>) -> Self {
        let pairs = FRENCH_DEFAULTS
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .chain(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self::new(pairs)
    }

    pub fn french() -> Self {
        Self::french_with(&BTreeMap::new())
    }

    pub fn lookup_exact(&self, name: &str) -> Option<&str> {
        self.exact.get(name).map(String::as_str)
    }

    pub fn lookup_folded(&self, name: &str) -> Option<&str> {
        self.folded
            .get(&name.to_lowercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.exact.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_lookup_is_case_sensitive() {
        let dict = StaticDictionary::french();
        assert_eq!(dict.lookup_exact("Desktop"), Some("Bureau"));
        assert_eq!(dict.lookup_exact("desktop"), None);
    }

    #[test]
    fn folded_lookup_ignores_case() {
        let dict = StaticDictionary::french();
        assert_eq!(dict.lookup_folded("DESKTOP"), Some("Bureau"));
        assert_eq!(dict.lookup_folded("Src"), Some("source"));
        assert_eq!(dict.lookup_folded("nothing-here"), None);
    }

    #[test]
    fn extra_entries_override_builtins() {
        let mut extra = BTreeMap::new();
        extra.insert("Music".to_string(), "Musiques".to_string());
        extra.insert("Projects".to_string(), "Projets".to_string());

        let dict = StaticDictionary::french_with(&extra);
        assert_eq!(dict.lookup_exact("Music"), Some("Musiques"));
        assert_eq!(dict.lookup_folded("projects"), Some("Projets"));
        assert_eq!(dict.len(), FRENCH_DEFAULTS.len() + 1);
    }

    #[test]
    fn folding_collision_is_deterministic() {
        let dict = StaticDictionary::new([("TMP", "A"), ("tmp", "B")]);
        // "TMP" < "tmp" in byte order
        assert_eq!(dict.lookup_folded("Tmp"), Some("A"));
        assert_eq!(dict.lookup_exact("tmp"), Some("B"));
    }
}
