//! Error types for the hubpack commands

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the command layer itself
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("No pipeline_json_file configured; pipeline-json needs an exported pipeline")]
    MissingPipelineFile,

    #[error("Exported pipeline '{}' does not exist", .0.display())]
    PipelineFileNotFound(PathBuf),
}
