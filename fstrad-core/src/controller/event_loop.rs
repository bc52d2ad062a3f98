//! src/controller/event_loop.rs
//! ============================================================================
//! # EventLoop: one queue for terminal input and background results
//!
//! Workers never touch `AppState`; they post a [`TaskResult`] on the task
//! channel. [`EventLoop::next_event`] merges that channel with the crossterm
//! event stream so the caller handles exactly one event at a time.

use std::path::PathBuf;

use crossterm::event::{Event as TermEvent, EventStream};
use futures::StreamExt;
use tokio::sync::mpsc;
use tracing::warn;

use crate::{
    error::AppError,
    tasks::rename_task::{RenameJob, failure_detail},
};

/// Immutable completion message posted by a background job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskResult {
    Resolved {
        name: String,
        translation: String,
    },

    RenameComplete {
        source_path: PathBuf,
        destination_path: PathBuf,
        success: bool,
        error_detail: Option<String>,
    },
}

impl TaskResult {
    pub fn rename_outcome(job: RenameJob, outcome: Result<(), AppError>) -> Self {
        let error_detail = outcome.as_ref().err().map(failure_detail);
        Self::RenameComplete {
            source_path: job.source_path,
            destination_path: job.destination_path,
            success: outcome.is_ok(),
            error_detail,
        }
    }
}

#[derive(Debug)]
pub enum AppEvent {
    Terminal(TermEvent),
    Task(TaskResult),
}

pub struct EventLoop {
    task_rx: mpsc::UnboundedReceiver<TaskResult>,
    event_stream: EventStream,
    tasks_seen: u64,
    terminal_seen: u64,
}

impl EventLoop {
    pub fn new(task_rx: mpsc::UnboundedReceiver<TaskResult>) -> Self {
        Self {
            task_rx,
            event_stream: EventStream::new(),
            tasks_seen: 0,
            terminal_seen: 0,
        }
    }

    /// Waits for the next event from either source. `None` once the terminal
    /// stream has ended.
    pub async fn next_event(&mut self) -> Option<AppEvent> {
        loop {
            tokio::select! {
                Some(result) = self.task_rx.recv() => {
                    self.tasks_seen += 1;
                    return Some(AppEvent::Task(result));
                }

                maybe_event = self.event_stream.next() => match maybe_event {
                    Some(Ok(event)) => {
                        self.terminal_seen += 1;
                        return Some(AppEvent::Terminal(event));
                    }
                    Some(Err(e)) => warn!("Terminal event error: {}", e),
                    None => return None,
                },
            }
        }
    }

    /// `(terminal events, task results)` handled so far.
    pub fn counts(&self) -> (u64, u64) {
        (self.terminal_seen, self.tasks_seen)
    }
}
