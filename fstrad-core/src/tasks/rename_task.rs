//! ``src/tasks/rename_task.rs``
//! ============================================================================
//! # Rename Task: one user-confirmed rename, executed in the background
//!
//! The rename is a single `rename(2)` call, so the filesystem either shows the
//! old name or the new one. An existing destination is refused rather than
//! replaced.

use std::{
    fs::Metadata,
    io::{Error, ErrorKind},
    path::{Path, PathBuf},
};

use tokio::{fs as TokioFs, sync::mpsc, task::JoinHandle};
use tracing::{info, warn};

use crate::{controller::event_loop::TaskResult, error::AppError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameJob {
    pub source_path: PathBuf,
    pub destination_path: PathBuf,
}

pub fn spawn_rename_task(
    job: RenameJob,
    task_tx: mpsc::UnboundedSender<TaskResult>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let outcome = execute_rename(&job).await;
        let result = TaskResult::rename_outcome(job, outcome);

        if task_tx.send(result).is_err() {
            warn!("Event loop gone; dropping rename result");
        }
    })
}

pub async fn execute_rename(job: &RenameJob) -> Result<(), AppError> {
    let RenameJob {
        source_path,
        destination_path,
    } = job;

    let fail = |e: Error| AppError::file_operation_failed("rename", source_path, e.to_string());

    TokioFs::symlink_metadata(source_path).await.map_err(fail)?;

    if destination_taken(source_path, destination_path).await {
        return Err(fail(Error::new(
            ErrorKind::AlreadyExists,
            format!("{} existe déjà", destination_path.display()),
        )));
    }

    TokioFs::rename(source_path, destination_path)
        .await
        .map_err(fail)?;

    info!(
        marker = "RENAME_TASK",
        operation_type = "rename_success",
        source = %source_path.display(),
        destination = %destination_path.display(),
        "Rename completed"
    );
    Ok(())
}

/// True when `destination` names a different, existing object.
async fn destination_taken(source: &Path, destination: &Path) -> bool {
    let Ok(dest_meta) = TokioFs::symlink_metadata(destination).await else {
        return false;
    };
    if source == destination {
        return false;
    }

    match TokioFs::symlink_metadata(source).await {
        Ok(src_meta) => !same_object(&src_meta, &dest_meta),
        Err(_) => true,
    }
}

// Case-only renames on case-insensitive filesystems resolve both paths to
// the same inode.
#[cfg(unix)]
fn same_object(a: &Metadata, b: &Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;
    a.dev() == b.dev() && a.ino() == b.ino()
}

#[cfg(not(unix))]
fn same_object(_: &Metadata, _: &Metadata) -> bool {
    false
}

/// Text shown to the user for a failed rename.
pub fn failure_detail(error: &AppError) -> String {
    match error {
        AppError::FileOperationFailed { reason, .. } => reason.clone(),
        other => other.to_string(),
    }
}
