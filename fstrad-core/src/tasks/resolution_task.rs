//! ``src/tasks/resolution_task.rs``
//! ============================================================================
//! # Resolution Task: translate one name off the event loop
//!
//! Each job is its own Tokio task. The only shared state it touches is the
//! translation cache, through the resolver. Completion is reported as
//! [`TaskResult::Resolved`]; the receiver decides whether the result is still
//! relevant.

use std::{sync::Arc, time::Instant};

use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{Instrument, debug, warn};

use crate::{controller::event_loop::TaskResult, translate::resolver::NameResolver};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionJob {
    pub name: String,
}

pub fn spawn_resolution_task(
    job: ResolutionJob,
    resolver: Arc<NameResolver>,
    task_tx: mpsc::UnboundedSender<TaskResult>,
) -> JoinHandle<()> {
    let span = tracing::debug_span!("resolution", operation_type = "resolve", entry_name = %job.name);

    tokio::spawn(
        async move {
            let started = Instant::now();
            let translation = resolver.resolve(&job.name).await;

            debug!(
                marker = "RESOLUTION_TASK",
                operation_type = "resolve_complete",
                duration_us = started.elapsed().as_micros(),
                "Resolution finished"
            );

            if task_tx
                .send(TaskResult::Resolved {
                    name: job.name,
                    translation,
                })
                .is_err()
            {
                warn!("Event loop gone; dropping resolution result");
            }
        }
        .instrument(span),
    )
}
