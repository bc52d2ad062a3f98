//! src/model/app_state.rs
//! ============================================================================
//! # AppState: the browser's session and its state machine
//!
//! Owned by the event loop. Every input, whether a key press or a background
//! result, goes through [`AppState::handle_action`] or
//! [`AppState::handle_task_result`], which mutate the session and return at
//! most one [`Command`] for the dispatcher.
//!
//! ```text
//!  Browsing ──Enter (translation known)──▶ ConfirmingRename
//!     ▲                                        │  Esc: back, status cleared
//!     │                                        │  Enter: RenameJob, in flight
//!     └──────────── RenameComplete ────────────┘
//! ```

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use tracing::{debug, info, warn};

use crate::{
    cache::translation_cache::TranslationCache,
    controller::{
        actions::{Action, Command, KeyContext},
        event_loop::TaskResult,
    },
    error::AppError,
    fs::{
        dir_lister::DirectoryLister,
        entry::{Entry, ListItem},
    },
    model::ui_state::{RedrawFlag, TextInput, UIState},
    tasks::rename_task::RenameJob,
};

pub const STATUS_NO_TRANSLATION: &str = "✗ Pas de traduction disponible";
pub const STATUS_RENAMING: &str = "Renommage en cours...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameDialog {
    pub entry: Entry,
    pub proposed_name: String,
    pub input: TextInput,
    /// Set once the job is dispatched; the dialog then ignores input until
    /// the result arrives.
    pub in_flight: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Browsing,
    ConfirmingRename(RenameDialog),
}

pub struct AppState {
    pub current_path: PathBuf,
    pub entries: Vec<Entry>,
    pub mode: Mode,
    pub status_message: Option<String>,
    pub ui: UIState,
    pub should_quit: bool,

    /// Bumped every time `entries` is replaced by a fresh listing.
    pub listing_generation: u64,

    lister: DirectoryLister,
    cache: Arc<TranslationCache>,
}

impl AppState {
    pub fn new(lister: DirectoryLister, cache: Arc<TranslationCache>, start: PathBuf) -> Self {
        Self {
            current_path: start,
            entries: Vec::new(),
            mode: Mode::Browsing,
            status_message: None,
            ui: UIState::new(),
            should_quit: false,
            listing_generation: 0,
            lister,
            cache,
        }
    }

    /// Initial listing of the start directory.
    pub fn start(&mut self) -> Option<Command> {
        let start = self.current_path.clone();
        self.navigate_to(start)
    }

    /// Replaces the listing with `path`'s children. Selection, filter and
    /// status are reset. An unreadable directory leaves an empty listing and
    /// an error status.
    pub fn navigate_to(&mut self, path: PathBuf) -> Option<Command> {
        self.current_path = path;
        self.status_message = None;
        self.ui.clear_filter();
        self.relist()
    }

    pub fn key_context(&self) -> KeyContext {
        match self.mode {
            Mode::ConfirmingRename(_) => KeyContext::ConfirmingRename,
            Mode::Browsing if self.ui.filter_editing => KeyContext::Filtering,
            Mode::Browsing => KeyContext::Browsing,
        }
    }

    pub fn handle_action(&mut self, action: Action) -> Option<Command> {
        if action == Action::Quit {
            info!(marker = "APP_STATE", operation_type = "quit", "Quit requested");
            self.should_quit = true;
            return None;
        }
        if let Action::Resize(_, height) = action {
            // Header, column titles, status and help lines.
            self.ui.page_size = usize::from(height.saturating_sub(6)).max(1);
            self.ui.request_redraw(RedrawFlag::All);
            return None;
        }

        match self.mode {
            Mode::ConfirmingRename(_) => self.handle_dialog_action(action),
            Mode::Browsing => self.handle_browsing_action(action),
        }
    }

    fn handle_browsing_action(&mut self, action: Action) -> Option<Command> {
        let visible = self.visible_indices().len();
        let page = self.ui.page_size as isize;

        match action {
            Action::MoveSelectionUp => self.ui.move_selection(-1, visible),
            Action::MoveSelectionDown => self.ui.move_selection(1, visible),
            Action::PageUp => self.ui.move_selection(-page, visible),
            Action::PageDown => self.ui.move_selection(page, visible),
            Action::SelectFirst => self.ui.reset_selection(),
            Action::SelectLast => self.ui.move_selection(isize::MAX, visible),

            Action::EnterSelected => {
                let target = self
                    .selected_entry()
                    .filter(|entry| entry.is_dir)
                    .map(|entry| entry.path.clone())?;
                return self.navigate_to(target);
            }
            Action::GoToParent => {
                let parent = parent_dir(&self.current_path)?;
                return self.navigate_to(parent);
            }
            Action::ReloadDirectory => {
                self.status_message = None;
                return self.relist();
            }

            Action::RequestRename => self.request_rename(),

            Action::StartFilter => {
                self.ui.filter_editing = true;
                self.ui.request_redraw(RedrawFlag::StatusBar);
            }
            Action::FilterInput(ch) => {
                self.ui.filter.insert(ch);
                self.ui.reset_selection();
            }
            Action::FilterBackspace => {
                self.ui.filter.backspace();
                self.ui.reset_selection();
            }
            Action::AcceptFilter => {
                self.ui.filter_editing = false;
                self.ui.request_redraw(RedrawFlag::StatusBar);
            }
            Action::ClearFilter => self.ui.clear_filter(),

            _ => {}
        }
        None
    }

    fn request_rename(&mut self) {
        let Some(entry) = self.selected_entry().cloned() else {
            return;
        };

        let proposed = match self.cache.peek(&entry.name) {
            Some(t) if !t.is_empty() && t != entry.name => t,
            _ => {
                self.status_message = Some(STATUS_NO_TRANSLATION.to_string());
                self.ui.request_redraw(RedrawFlag::StatusBar);
                return;
            }
        };

        debug!(
            marker = "APP_STATE",
            operation_type = "rename_prompt",
            entry_name = %entry.name,
            proposed = %proposed,
            "Opening rename dialog"
        );
        self.mode = Mode::ConfirmingRename(RenameDialog {
            input: TextInput::with_value(&proposed),
            proposed_name: proposed,
            entry,
            in_flight: false,
        });
        self.status_message = None;
        self.ui.request_redraw(RedrawFlag::All);
    }

    fn handle_dialog_action(&mut self, action: Action) -> Option<Command> {
        let Mode::ConfirmingRename(dialog) = &mut self.mode else {
            return None;
        };
        if dialog.in_flight {
            return None;
        }

        match action {
            Action::CancelRename => {
                self.mode = Mode::Browsing;
                self.status_message = None;
            }
            Action::ConfirmRename => {
                let new_name = if dialog.input.is_empty() {
                    dialog.proposed_name.clone()
                } else {
                    dialog.input.value().to_string()
                };

                if let Err(reason) = validate_new_name(&new_name) {
                    self.status_message = Some(format!("✗ Erreur: {reason}"));
                    self.ui.request_redraw(RedrawFlag::StatusBar);
                    return None;
                }

                let source_path = dialog.entry.path.clone();
                let destination_path = source_path
                    .parent()
                    .unwrap_or_else(|| Path::new(""))
                    .join(&new_name);

                dialog.in_flight = true;
                self.status_message = Some(STATUS_RENAMING.to_string());
                self.ui.request_redraw(RedrawFlag::All);
                return Some(Command::Rename(RenameJob {
                    source_path,
                    destination_path,
                }));
            }
            Action::InputChar(ch) => {
                dialog.input.insert(ch);
            }
            Action::InputBackspace => {
                dialog.input.backspace();
            }
            Action::InputDelete => {
                dialog.input.delete();
            }
            Action::InputLeft => dialog.input.move_left(),
            Action::InputRight => dialog.input.move_right(),
            Action::InputHome => dialog.input.move_home(),
            Action::InputEnd => dialog.input.move_end(),
            _ => return None,
        }

        self.ui.request_redraw(RedrawFlag::Overlay);
        None
    }

    pub fn handle_task_result(&mut self, result: TaskResult) -> Option<Command> {
        match result {
            TaskResult::Resolved { name, translation } => {
                self.apply_resolution(&name, &translation);
                None
            }
            TaskResult::RenameComplete {
                source_path,
                destination_path,
                success,
                error_detail,
            } => {
                self.mode = Mode::Browsing;

                if success {
                    match self.try_relist() {
                        Ok(command) => {
                            self.status_message = Some(format!(
                                "✓ Renommé: {} → {}",
                                file_name_of(&source_path),
                                file_name_of(&destination_path)
                            ));
                            command
                        }
                        Err(e) => {
                            self.show_listing_error(&e);
                            None
                        }
                    }
                } else {
                    let detail = error_detail.unwrap_or_else(|| "inconnue".to_string());
                    warn!(
                        marker = "APP_STATE",
                        operation_type = "rename_failed",
                        source = %source_path.display(),
                        detail = %detail,
                        "Rename failed"
                    );
                    self.status_message = Some(format!("✗ Erreur: {detail}"));
                    self.ui.request_redraw(RedrawFlag::All);
                    None
                }
            }
        }
    }

    fn apply_resolution(&mut self, name: &str, translation: &str) {
        match self.entries.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => {
                entry.apply_translation(translation);
                self.ui.request_redraw(RedrawFlag::Main);
            }
            None => debug!(
                marker = "APP_STATE",
                operation_type = "stale_result",
                entry_name = name,
                "Dropping resolution for entry not in current listing"
            ),
        }
    }

    /// Re-reads `current_path` without touching the filter. A failed read
    /// leaves an empty listing and an error status.
    fn relist(&mut self) -> Option<Command> {
        match self.try_relist() {
            Ok(command) => command,
            Err(e) => {
                self.show_listing_error(&e);
                None
            }
        }
    }

    fn try_relist(&mut self) -> Result<Option<Command>, AppError> {
        self.listing_generation += 1;
        self.ui.request_redraw(RedrawFlag::All);

        match self.lister.list(&self.current_path) {
            Ok(listing) => {
                self.entries = listing.entries;
                let visible = self.visible_indices().len();
                self.ui.clamp_selection(visible);
                Ok((!listing.pending.is_empty()).then_some(Command::Resolve(listing.pending)))
            }
            Err(e) => {
                warn!(
                    marker = "APP_STATE",
                    operation_type = "list_failed",
                    path = %self.current_path.display(),
                    error = %e,
                    "Directory listing failed"
                );
                self.entries.clear();
                self.ui.reset_selection();
                Err(e)
            }
        }
    }

    fn show_listing_error(&mut self, error: &AppError) {
        self.status_message = Some(format!("✗ Erreur: {}", listing_error_detail(error)));
        self.ui.request_redraw(RedrawFlag::StatusBar);
    }

    /// Indices into `entries` that pass the substring filter.
    pub fn visible_indices(&self) -> Vec<usize> {
        let needle = self.ui.filter.value().to_lowercase();
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| {
                needle.is_empty() || entry.filter_value().to_lowercase().contains(&needle)
            })
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        let idx = *self.visible_indices().get(self.ui.selected)?;
        self.entries.get(idx)
    }

    pub fn title(&self) -> String {
        format!("Navigateur de fichiers - {}", self.current_path.display())
    }

    pub fn cache(&self) -> &Arc<TranslationCache> {
        &self.cache
    }
}

fn validate_new_name(name: &str) -> Result<(), &'static str> {
    if name == "." || name == ".." {
        return Err("nom invalide");
    }
    if name.contains('/') || name.contains(std::path::MAIN_SEPARATOR) {
        return Err("le nom ne peut pas contenir de séparateur de chemin");
    }
    Ok(())
}

/// Parent directory; `None` at a root. A bare relative name has parent `.`.
fn parent_dir(path: &Path) -> Option<PathBuf> {
    let parent = path.parent()?;
    if !parent.as_os_str().is_empty() {
        return Some(parent.to_path_buf());
    }
    (path != Path::new(".")).then(|| PathBuf::from("."))
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn listing_error_detail(error: &AppError) -> String {
    match error {
        AppError::NavigationFailed { reason, .. } => reason.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::TranslatorConfig,
        controller::job_dispatcher::JobDispatcher,
        error::TranslateError,
        tasks::rename_task::execute_rename,
        translate::{dictionary::StaticDictionary, remote::RemoteTranslator, resolver::NameResolver},
    };
    use async_trait::async_trait;
    use std::fs;
    use tokio::sync::mpsc;

    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir(dir.path().join("Desktop")).expect("mkdir");
        fs::write(dir.path().join("report.txt"), b"q3").expect("write");
        fs::write(dir.path().join("xyz123"), b"").expect("write");
        dir
    }

    fn state_at(path: &Path, cache: Arc<TranslationCache>) -> AppState {
        let lister = DirectoryLister::new(Arc::clone(&cache), false);
        AppState::new(lister, cache, path.to_path_buf())
    }

    fn select(state: &mut AppState, name: &str) {
        let pos = state
            .visible_indices()
            .iter()
            .position(|&i| state.entries[i].name == name)
            .expect("entry visible");
        state.ui.selected = pos;
    }

    fn dir_names(path: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(path)
            .expect("read_dir")
            .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn start_lists_and_requests_resolution() {
        let dir = fixture();
        let mut state = state_at(dir.path(), Arc::new(TranslationCache::new()));

        match state.start() {
            Some(Command::Resolve(jobs)) => assert_eq!(jobs.len(), 3),
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(state.listing_generation, 1);
        assert!(state.entries.iter().all(|e| e.resolving));
    }

    #[test]
    fn results_for_previous_directory_are_dropped() {
        let dir = fixture();
        let other = dir.path().join("Desktop");
        fs::write(other.join("beta.txt"), b"").expect("write");
        let mut state = state_at(dir.path(), Arc::new(TranslationCache::new()));

        let Some(Command::Resolve(old_jobs)) = state.start() else {
            panic!("expected resolution jobs");
        };
        state.navigate_to(other);
        let before = state.entries.clone();
        assert!(before.iter().all(|e| e.resolving));

        for job in old_jobs {
            let command = state.handle_task_result(TaskResult::Resolved {
                translation: format!("{}-fr", job.name),
                name: job.name,
            });
            assert_eq!(command, None);
        }

        assert_eq!(state.entries, before);
        let names: Vec<(&str, bool)> = state
            .entries
            .iter()
            .map(|e| (e.name.as_str(), e.resolving))
            .collect();
        assert_eq!(names, [("beta.txt", true)]);
    }

    #[test]
    fn resolution_updates_matching_entry() {
        let dir = fixture();
        let mut state = state_at(dir.path(), Arc::new(TranslationCache::new()));
        state.start();

        state.handle_task_result(TaskResult::Resolved {
            name: "Desktop".into(),
            translation: "Bureau".into(),
        });

        let desktop = state
            .entries
            .iter()
            .find(|e| e.name == "Desktop")
            .expect("desktop");
        assert!(!desktop.resolving);
        assert_eq!(desktop.translation.as_deref(), Some("Dossier → Bureau"));
    }

    #[test]
    fn unknown_translation_blocks_rename() {
        let dir = fixture();
        let cache = Arc::new(TranslationCache::new());
        cache.set("xyz123", "xyz123");
        let mut state = state_at(dir.path(), cache);
        state.start();
        select(&mut state, "xyz123");

        assert_eq!(state.handle_action(Action::RequestRename), None);
        assert_eq!(state.mode, Mode::Browsing);
        assert_eq!(state.status_message.as_deref(), Some(STATUS_NO_TRANSLATION));

        select(&mut state, "report.txt");
        state.handle_action(Action::RequestRename);
        assert_eq!(state.mode, Mode::Browsing);
    }

    #[test]
    fn cancel_returns_to_browsing() {
        let dir = fixture();
        let cache = Arc::new(TranslationCache::new());
        cache.set("Desktop", "Bureau");
        let mut state = state_at(dir.path(), cache);
        state.start();
        select(&mut state, "Desktop");

        state.handle_action(Action::RequestRename);
        assert_eq!(state.key_context(), KeyContext::ConfirmingRename);

        assert_eq!(state.handle_action(Action::CancelRename), None);
        assert_eq!(state.mode, Mode::Browsing);
        assert_eq!(state.status_message, None);
        assert!(dir.path().join("Desktop").is_dir());
    }

    #[test]
    fn empty_input_falls_back_to_proposed_name() {
        let dir = fixture();
        let cache = Arc::new(TranslationCache::new());
        cache.set("report.txt", "rapport.txt");
        let mut state = state_at(dir.path(), cache);
        state.start();
        select(&mut state, "report.txt");
        state.handle_action(Action::RequestRename);

        state.handle_action(Action::InputHome);
        for _ in 0..20 {
            state.handle_action(Action::InputDelete);
        }

        let command = state.handle_action(Action::ConfirmRename);
        assert_eq!(
            command,
            Some(Command::Rename(RenameJob {
                source_path: dir.path().join("report.txt"),
                destination_path: dir.path().join("rapport.txt"),
            }))
        );
        assert_eq!(state.status_message.as_deref(), Some(STATUS_RENAMING));

        match &state.mode {
            Mode::ConfirmingRename(dialog) => assert!(dialog.in_flight),
            other => panic!("unexpected mode: {other:?}"),
        }
        assert_eq!(state.handle_action(Action::ConfirmRename), None);
        assert_eq!(state.handle_action(Action::CancelRename), None);
        assert!(matches!(state.mode, Mode::ConfirmingRename(_)));
    }

    #[test]
    fn separator_in_new_name_is_rejected() {
        let dir = fixture();
        let cache = Arc::new(TranslationCache::new());
        cache.set("Desktop", "Bureau");
        let mut state = state_at(dir.path(), cache);
        state.start();
        select(&mut state, "Desktop");
        state.handle_action(Action::RequestRename);
        state.handle_action(Action::InputChar('/'));

        assert_eq!(state.handle_action(Action::ConfirmRename), None);
        assert!(
            state
                .status_message
                .as_deref()
                .is_some_and(|s| s.starts_with("✗ Erreur"))
        );
    }

    #[tokio::test]
    async fn successful_rename_refreshes_once() {
        let dir = fixture();
        let cache = Arc::new(TranslationCache::new());
        cache.set("report.txt", "rapport.txt");
        let mut state = state_at(dir.path(), Arc::clone(&cache));
        state.start();
        select(&mut state, "report.txt");
        state.handle_action(Action::RequestRename);

        let Some(Command::Rename(job)) = state.handle_action(Action::ConfirmRename) else {
            panic!("expected rename command");
        };
        let generation = state.listing_generation;
        let before = dir_names(dir.path());

        let outcome = execute_rename(&job).await;
        state.handle_task_result(TaskResult::rename_outcome(job, outcome));

        assert_eq!(state.listing_generation, generation + 1);
        assert_eq!(state.mode, Mode::Browsing);
        assert_eq!(
            state.status_message.as_deref(),
            Some("✓ Renommé: report.txt → rapport.txt")
        );

        let after = dir_names(dir.path());
        assert_eq!(before.len(), after.len());
        let changed: Vec<_> = before.iter().filter(|n| !after.contains(n)).collect();
        assert_eq!(changed, ["report.txt"]);
        assert!(state.entries.iter().any(|e| e.name == "rapport.txt"));
    }

    #[tokio::test]
    async fn failed_rename_keeps_listing() {
        let dir = fixture();
        let cache = Arc::new(TranslationCache::new());
        cache.set("report.txt", "rapport.txt");
        fs::write(dir.path().join("rapport.txt"), b"existing").expect("write");
        let mut state = state_at(dir.path(), Arc::clone(&cache));
        state.start();
        select(&mut state, "report.txt");
        state.handle_action(Action::RequestRename);

        let Some(Command::Rename(job)) = state.handle_action(Action::ConfirmRename) else {
            panic!("expected rename command");
        };
        let generation = state.listing_generation;
        let entries = state.entries.clone();
        let before = dir_names(dir.path());

        let outcome = execute_rename(&job).await;
        assert_eq!(state.handle_task_result(TaskResult::rename_outcome(job, outcome)), None);

        assert_eq!(state.mode, Mode::Browsing);
        assert_eq!(state.listing_generation, generation);
        assert_eq!(state.entries, entries);
        assert_eq!(dir_names(dir.path()), before);
        let status = state.status_message.clone().unwrap_or_default();
        assert!(status.starts_with("✗ Erreur: "));
        assert!(status.contains("existe déjà"));
    }

    #[test]
    fn unreadable_directory_shows_error_and_empty_listing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("gone");
        let mut state = state_at(&missing, Arc::new(TranslationCache::new()));

        assert_eq!(state.start(), None);
        assert!(state.entries.is_empty());
        assert_eq!(state.current_path, missing);
        assert!(
            state
                .status_message
                .as_deref()
                .is_some_and(|s| s.starts_with("✗ Erreur: "))
        );
    }

    #[test]
    fn navigation_into_and_out_of_directories() {
        let dir = fixture();
        fs::write(dir.path().join("Desktop").join("notes.md"), b"").expect("write");
        let mut state = state_at(dir.path(), Arc::new(TranslationCache::new()));
        state.start();

        select(&mut state, "report.txt");
        assert_eq!(state.handle_action(Action::EnterSelected), None);
        assert_eq!(state.current_path, dir.path());

        select(&mut state, "Desktop");
        assert!(state.handle_action(Action::EnterSelected).is_some());
        assert_eq!(state.current_path, dir.path().join("Desktop"));
        assert_eq!(state.entries.len(), 1);
        assert_eq!(state.ui.selected, 0);

        state.handle_action(Action::GoToParent);
        assert_eq!(state.current_path, dir.path());
    }

    #[test]
    fn successful_rename_with_unreadable_directory_reports_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("gone");
        let mut state = state_at(&missing, Arc::new(TranslationCache::new()));
        state.start();

        let command = state.handle_task_result(TaskResult::RenameComplete {
            source_path: missing.join("a"),
            destination_path: missing.join("b"),
            success: true,
            error_detail: None,
        });

        assert_eq!(command, None);
        assert_eq!(state.mode, Mode::Browsing);
        assert!(state.entries.is_empty());
        let status = state.status_message.clone().unwrap_or_default();
        assert!(status.starts_with("✗ Erreur: "), "status was {status:?}");
    }

    #[test]
    fn parent_of_relative_name_is_current_dir() {
        assert_eq!(parent_dir(Path::new("projects")), Some(PathBuf::from(".")));
        assert_eq!(parent_dir(Path::new(".")), None);
        assert_eq!(parent_dir(Path::new("/")), None);
        assert_eq!(parent_dir(Path::new("a/b")), Some(PathBuf::from("a")));
    }

    #[test]
    fn parent_of_root_is_noop() {
        let mut state = state_at(Path::new("/"), Arc::new(TranslationCache::new()));
        state.start();
        let generation = state.listing_generation;
        assert_eq!(state.handle_action(Action::GoToParent), None);
        assert_eq!(state.current_path, PathBuf::from("/"));
        assert_eq!(state.listing_generation, generation);
    }

    #[test]
    fn filter_narrows_selection() {
        let dir = fixture();
        let mut state = state_at(dir.path(), Arc::new(TranslationCache::new()));
        state.start();

        state.handle_action(Action::StartFilter);
        assert_eq!(state.key_context(), KeyContext::Filtering);
        for ch in "REP".chars() {
            state.handle_action(Action::FilterInput(ch));
        }
        state.handle_action(Action::AcceptFilter);

        assert_eq!(state.key_context(), KeyContext::Browsing);
        assert_eq!(state.visible_indices().len(), 1);
        assert_eq!(state.selected_entry().map(|e| e.name.as_str()), Some("report.txt"));

        state.handle_action(Action::ClearFilter);
        assert_eq!(state.visible_indices().len(), 3);
    }

    struct EchoTranslator;

    #[async_trait]
    impl RemoteTranslator for EchoTranslator {
        async fn translate(&self, text: &str, _: &str, _: &str) -> Result<String, TranslateError> {
            Ok(format!("{text}-fr"))
        }
    }

    #[tokio::test]
    async fn dispatched_resolutions_land_in_listing() {
        let dir = tempfile::tempdir().expect("tempdir");
        for i in 0..32 {
            fs::write(dir.path().join(format!("file{i:02}.txt")), b"").expect("write");
        }

        let cache = Arc::new(TranslationCache::new());
        let resolver = Arc::new(NameResolver::new(
            Arc::clone(&cache),
            Arc::new(StaticDictionary::french()),
            Arc::new(EchoTranslator),
            &TranslatorConfig::default(),
        ));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let dispatcher = JobDispatcher::new(resolver, tx);

        let mut state = state_at(dir.path(), Arc::clone(&cache));
        for handle in dispatcher.dispatch(state.start()) {
            handle.await.expect("join");
        }
        while let Ok(result) = rx.try_recv() {
            state.handle_task_result(result);
        }

        assert_eq!(cache.len(), 32);
        assert!(state.entries.iter().all(|e| !e.resolving));
        let first = &state.entries[0];
        assert_eq!(first.translation.as_deref(), Some("Fichier → file00-fr.txt"));
    }
}
