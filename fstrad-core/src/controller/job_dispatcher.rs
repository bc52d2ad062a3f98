//! JobDispatcher: runs the side effects that state transitions ask for.
//!
//! Every job becomes its own Tokio task and reports back on the shared
//! `TaskResult` channel. The dispatcher never waits for a job and makes no
//! promise about completion order.

use std::sync::Arc;

use tokio::{sync::mpsc::UnboundedSender, task::JoinHandle};
use tracing::{debug, info};

use crate::{
    controller::{actions::Command, event_loop::TaskResult},
    tasks::{
        rename_task::{RenameJob, spawn_rename_task},
        resolution_task::{ResolutionJob, spawn_resolution_task},
    },
    translate::resolver::NameResolver,
};

pub struct JobDispatcher {
    resolver: Arc<NameResolver>,
    task_tx: UnboundedSender<TaskResult>,
}

impl JobDispatcher {
    pub fn new(resolver: Arc<NameResolver>, task_tx: UnboundedSender<TaskResult>) -> Self {
        Self { resolver, task_tx }
    }

    pub fn dispatch(&self, command: Option<Command>) -> Vec<JoinHandle<()>> {
        match command {
            Some(Command::Resolve(jobs)) => self.resolve_all(jobs),
            Some(Command::Rename(job)) => vec![self.rename(job)],
            None => Vec::new(),
        }
    }

    pub fn resolve_all(&self, jobs: Vec<ResolutionJob>) -> Vec<JoinHandle<()>> {
        if jobs.is_empty() {
            return Vec::new();
        }
        debug!(
            marker = "JOB_DISPATCH",
            operation_type = "resolve_batch",
            jobs = jobs.len(),
            "Dispatching resolution jobs"
        );

        jobs.into_iter()
            .map(|job| spawn_resolution_task(job, Arc::clone(&self.resolver), self.task_tx.clone()))
            .collect()
    }

    pub fn rename(&self, job: RenameJob) -> JoinHandle<()> {
        info!(
            marker = "JOB_DISPATCH",
            operation_type = "rename",
            source = %job.source_path.display(),
            destination = %job.destination_path.display(),
            "Dispatching rename"
        );
        spawn_rename_task(job, self.task_tx.clone())
    }
}
