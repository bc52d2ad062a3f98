//! src/main.rs
//! Translating file browser: lists a directory, shows the French name of
//! every entry and renames on request.

use std::{
    env,
    io::{self, Stdout},
    panic::PanicHookInfo,
    path::PathBuf,
    process::ExitCode,
    sync::Arc,
    thread,
    time::Instant,
};

use anyhow::{Context, Result};
use crossterm::{
    event::Event as TerminalEvent,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use directories::BaseDirs;
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use tokio::{
    signal,
    sync::{Notify, mpsc},
};
use tracing::{debug, error, info, warn};

use fstrad_core::{
    Logger,
    cache::translation_cache::TranslationCache,
    config::Config,
    controller::{
        actions::Action,
        event_loop::{AppEvent, EventLoop, TaskResult},
        job_dispatcher::JobDispatcher,
    },
    fs::dir_lister::DirectoryLister,
    model::app_state::AppState,
    translate::{
        dictionary::StaticDictionary, remote::GoogleTranslator, resolver::NameResolver,
    },
    view::ui::View,
};

type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => {
            println!("Au revoir! 👋");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Erreur: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let config = Config::load().await.unwrap_or_else(|e| {
        eprintln!("Configuration ignorée ({e:#}), valeurs par défaut utilisées");
        Config::default()
    });

    let _log_guard =
        Logger::init_tracing(&config.logging).context("Failed to initialize logging")?;
    info!("Starting fstrad");

    setup_panic_handler();

    let start_path = resolve_start_path().await;
    let app = App::new(config, start_path).context("Failed to initialize application")?;
    app.run().await.context("Application runtime error")?;

    info!("Application exited cleanly");
    Ok(())
}

struct App {
    terminal: AppTerminal,
    state: AppState,
    event_loop: EventLoop,
    dispatcher: JobDispatcher,
    shutdown: Arc<Notify>,
}

impl App {
    fn new(config: Config, start_path: PathBuf) -> Result<Self> {
        let cache = Arc::new(TranslationCache::new());
        let dictionary = Arc::new(StaticDictionary::french_with(&config.dictionary));
        let remote = Arc::new(
            GoogleTranslator::new(&config.translator)
                .context("Failed to build translation client")?,
        );
        let resolver = Arc::new(NameResolver::new(
            Arc::clone(&cache),
            dictionary,
            remote,
            &config.translator,
        ));

        let (task_tx, task_rx) = mpsc::unbounded_channel::<TaskResult>();
        let dispatcher = JobDispatcher::new(resolver, task_tx);

        let lister = DirectoryLister::new(Arc::clone(&cache), config.show_hidden);
        let state = AppState::new(lister, cache, start_path);

        // Terminal last: errors above must not leave the screen in raw mode.
        let terminal = setup_terminal().context("Failed to initialize terminal")?;
        let event_loop = EventLoop::new(task_rx);

        info!(
            show_hidden = config.show_hidden,
            source = %config.translator.source_locale,
            target = %config.translator.target_locale,
            "Application initialized"
        );

        Ok(Self {
            terminal,
            state,
            event_loop,
            dispatcher,
            shutdown: Arc::new(Notify::new()),
        })
    }

    async fn run(mut self) -> Result<()> {
        self.setup_shutdown_handler();

        let initial = self.state.start();
        self.dispatcher.dispatch(initial);

        while !self.state.should_quit {
            self.render()?;

            tokio::select! {
                _ = self.shutdown.notified() => {
                    info!("Shutdown signal received");
                    break;
                }

                event = self.event_loop.next_event() => match event {
                    Some(AppEvent::Terminal(terminal_event)) => {
                        self.handle_terminal_event(terminal_event);
                    }
                    Some(AppEvent::Task(result)) => {
                        let command = self.state.handle_task_result(result);
                        self.dispatcher.dispatch(command);
                    }
                    None => {
                        warn!("Terminal event stream closed");
                        break;
                    }
                },
            }
        }

        self.log_final_metrics();
        Ok(())
    }

    fn handle_terminal_event(&mut self, event: TerminalEvent) {
        let action = match event {
            TerminalEvent::Key(key) => Action::from_key(key, self.state.key_context()),
            TerminalEvent::Resize(width, height) => Some(Action::Resize(width, height)),
            _ => None,
        };

        if let Some(action) = action {
            debug!("Handling action: {:?}", action);
            let command = self.state.handle_action(action);
            self.dispatcher.dispatch(command);
        }
    }

    fn render(&mut self) -> Result<()> {
        if !self.state.ui.needs_redraw() {
            return Ok(());
        }

        let start = Instant::now();
        let state = &mut self.state;
        self.terminal
            .draw(|frame: &mut Frame<'_>| View::redraw(frame, state))
            .context("Failed to draw terminal")?;

        let duration = start.elapsed();
        if duration.as_millis() > 16 {
            warn!("Slow render: {}ms (target: <16ms)", duration.as_millis());
        }
        Ok(())
    }

    fn log_final_metrics(&self) {
        let stats = self.state.cache().stats();
        let (terminal_events, task_results) = self.event_loop.counts();

        info!("Final metrics:");
        info!(
            "  Cache: {} entries, {} hits, {} misses, hit rate {:.1}%",
            self.state.cache().len(),
            stats.hits,
            stats.misses,
            stats.hit_rate() * 100.0
        );
        info!("  Terminal events: {}", terminal_events);
        info!("  Task results: {}", task_results);
    }

    fn setup_shutdown_handler(&self) {
        let shutdown: Arc<Notify> = Arc::clone(&self.shutdown);

        tokio::spawn(async move {
            #[cfg(unix)]
            {
                use tokio::signal::unix::{SignalKind, signal as unix_signal};

                let mut sigterm = match unix_signal(SignalKind::terminate()) {
                    Ok(sigterm) => sigterm,
                    Err(e) => {
                        warn!("Failed to create SIGTERM handler: {}", e);
                        return;
                    }
                };

                tokio::select! {
                    _ = sigterm.recv() => info!("Received SIGTERM"),
                    _ = signal::ctrl_c() => info!("Received Ctrl+C"),
                }
            }

            #[cfg(not(unix))]
            {
                if let Err(e) = signal::ctrl_c().await {
                    warn!("Failed to listen for Ctrl+C: {}", e);
                    return;
                }
                info!("Received Ctrl+C");
            }

            shutdown.notify_one();
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Err(e) = cleanup_terminal(&mut self.terminal) {
            warn!("Failed to cleanup terminal: {}", e);
        }
    }
}

/// First CLI argument, else the home directory, else the working directory.
async fn resolve_start_path() -> PathBuf {
    let requested = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));

    match tokio::fs::canonicalize(&requested).await {
        Ok(path) => path,
        Err(e) => {
            warn!("Cannot canonicalize {}: {}", requested.display(), e);
            requested
        }
    }
}

fn setup_terminal() -> Result<AppTerminal> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    info!("Terminal setup complete");
    Ok(terminal)
}

fn cleanup_terminal(terminal: &mut AppTerminal) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    info!("Terminal cleanup complete");
    Ok(())
}

/// Panics on runtime worker threads come from isolated remote lookups and are
/// recovered as `JoinError`s, so only a main-thread panic restores the
/// terminal.
fn setup_panic_handler() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info: &PanicHookInfo<'_>| {
        if thread::current().name() != Some("main") {
            error!("Background task panicked: {}", panic_info);
            return;
        }

        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);

        error!("Application panicked: {}", panic_info);
        original_hook(panic_info);
    }));
}
