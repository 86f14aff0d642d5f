use cinedex_catalog::ValidationError;
use cinedex_db::OperationError;
use cinedex_transfer::TransferError;
use thiserror::Error;

/// Errors that can occur while running a menu command.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error on the console
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Bad year, rating, or empty field
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// Record operation failed (includes "not found")
    #[error("{0}")]
    Operation(#[from] OperationError),

    /// Bulk import or export failed
    #[error("{0}")]
    Transfer(#[from] TransferError),

    /// Standard input was closed while a prompt was waiting
    #[error("input closed")]
    EndOfInput,
}
