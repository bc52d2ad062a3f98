//! src/translate/resolver.rs
//! ============================================================================
//! # NameResolver: cache → dictionary → remote, never failing
//!
//! `resolve` always produces a usable name. The tiers short-circuit in order:
//!
//! 1. exact cache hit
//! 2. exact dictionary hit
//! 3. case-insensitive dictionary hit
//! 4. untranslatable stems (≤ 1 char, or no ASCII letter) map to themselves
//! 5. remote lookup of the stem, extension re-appended
//!
//! Every outcome except a cache hit is written back to the cache, including
//! the identity mapping used when the remote side fails.

use std::{sync::Arc, time::Duration};

use tokio::task::JoinError;
use tracing::{debug, info, warn};

use crate::{
    cache::translation_cache::TranslationCache,
    config::TranslatorConfig,
    error::TranslateError,
    translate::{dictionary::StaticDictionary, remote::RemoteTranslator},
};

pub struct NameResolver {
    cache: Arc<TranslationCache>,
    dictionary: Arc<StaticDictionary>,
    remote: Arc<dyn RemoteTranslator>,
    source_locale: String,
    target_locale: String,
    timeout: Duration,
}

impl NameResolver {
    pub fn new(
        cache: Arc<TranslationCache>,
        dictionary: Arc<StaticDictionary>,
        remote: Arc<dyn RemoteTranslator>,
        config: &TranslatorConfig,
    ) -> Self {
        Self {
            cache,
            dictionary,
            remote,
            source_locale: config.source_locale.clone(),
            target_locale: config.target_locale.clone(),
            timeout: config.timeout,
        }
    }

    pub fn cache(&self) -> &Arc<TranslationCache> {
        &self.cache
    }

    pub async fn resolve(&self, name: &str) -> String {
        if let Some(hit) = self.cache.get(name) {
            return hit;
        }

        if let Some(found) = self
            .dictionary
            .lookup_exact(name)
            .or_else(|| self.dictionary.lookup_folded(name))
        {
            let found = found.to_string();
            self.cache.set(name, &found);
            return found;
        }

        let (stem, extension) = split_extension(name);
        if !is_translatable(stem) {
            self.cache.set(name, name);
            return name.to_string();
        }

        match self.remote_lookup(stem).await {
            Ok(translated) => {
                let translated = format!("{translated}{extension}");
                info!(
                    marker = "RESOLVE",
                    operation_type = "remote_success",
                    original = name,
                    translated = %translated,
                    "Remote translation resolved"
                );
                self.cache.set(name, &translated);
                translated
            }
            Err(e) => {
                warn!(
                    marker = "RESOLVE",
                    operation_type = "remote_fallback",
                    original = name,
                    error = %e,
                    "Remote translation failed, keeping original name"
                );
                self.cache.set(name, name);
                name.to_string()
            }
        }
    }

    /// Runs the remote call on its own task so a panic surfaces as a
    /// [`JoinError`] here instead of unwinding through the resolver, and
    /// bounds it with the configured timeout.
    async fn remote_lookup(&self, stem: &str) -> Result<String, TranslateError> {
        let remote = Arc::clone(&self.remote);
        let text = stem.to_string();
        let source = self.source_locale.clone();
        let target = self.target_locale.clone();

        debug!(stem, "dispatching remote lookup");
        let handle = tokio::spawn(async move { remote.translate(&text, &source, &target).await });
        let abort = handle.abort_handle();

        let joined: Result<Result<String, TranslateError>, JoinError> =
            match tokio::time::timeout(self.timeout, handle).await {
                Ok(joined) => joined,
                Err(_) => {
                    abort.abort();
                    return Err(TranslateError::Timeout(self.timeout));
                }
            };

        let translated = joined.map_err(|e| TranslateError::Panicked(e.to_string()))??;
        let translated = translated.trim();
        if translated.is_empty() {
            return Err(TranslateError::Empty);
        }
        Ok(translated.to_string())
    }
}

/// Splits `name` at its last `.`; the extension keeps the dot.
///
/// `"report.txt"` → `("report", ".txt")`, `"Makefile"` → `("Makefile", "")`,
/// `".bashrc"` → `("", ".bashrc")`.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) => name.split_at(idx),
        None => (name, ""),
    }
}

fn is_translatable(stem: &str) -> bool {
    stem.chars().nth(1).is_some() && stem.chars().any(|c| c.is_ascii_alphabetic())
}
