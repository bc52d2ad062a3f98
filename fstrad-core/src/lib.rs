pub mod error;
pub use error::{AppError, TranslateError};

pub mod config;
pub use config::Config;

pub mod logging;
pub use logging::Logger;

pub mod cache {
    pub mod translation_cache;
    pub use translation_cache::{CacheStatsSnapshot, TranslationCache};
}

pub mod translate {
    pub mod dictionary;
    pub use dictionary::StaticDictionary;

    pub mod remote;
    pub use remote::{GoogleTranslator, RemoteTranslator};

    pub mod resolver;
    pub use resolver::NameResolver;
}

pub mod fs {
    pub mod entry;
    pub use entry::{Entry, ListItem};

    pub mod dir_lister;
    pub use dir_lister::{DirectoryLister, Listing};
}

pub mod tasks {
    pub mod rename_task;
    pub use rename_task::RenameJob;

    pub mod resolution_task;
    pub use resolution_task::ResolutionJob;
}

pub mod controller {
    pub mod actions;
    pub use actions::{Action, Command, KeyContext};

    pub mod event_loop;
    pub use event_loop::{AppEvent, EventLoop, TaskResult};

    pub mod job_dispatcher;
    pub use job_dispatcher::JobDispatcher;
}

pub mod model {
    pub mod app_state;
    pub use app_state::{AppState, Mode, RenameDialog};

    pub mod ui_state;
    pub use ui_state::{RedrawFlag, TextInput, UIState};
}

pub mod view {
    pub mod theme;

    pub mod ui;
    pub use ui::View;

    pub mod components {
        pub mod object_table;
        pub use object_table::EntryTable;
        pub mod rename_dialog;
        pub use rename_dialog::RenameDialogOverlay;
        pub mod status_bar;
        pub use status_bar::StatusBar;
    }
}
