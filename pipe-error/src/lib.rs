use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipeError>;

/// Errors surfaced by the chunk pipe.
///
/// All of them are raised synchronously to the immediate caller; the pipe
/// performs no retries and no internal recovery.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipeError {
    /// A sub-range write named bytes outside the caller's slice. Nothing
    /// was written.
    #[error(
        "invalid range: offset {offset} + len {len} exceeds slice of {buf_len} bytes"
    )]
    InvalidRange {
        offset: usize,
        len: usize,
        buf_len: usize,
    },
    /// A write was attempted after the writer was closed.
    #[error("writer is closed")]
    Closed,
    /// The opposite end of the channel is gone; the blocked operation was
    /// abandoned without a partial enqueue or dequeue.
    #[error("channel disconnected")]
    Disconnected,
}

impl From<PipeError> for std::io::Error {
    fn from(e: PipeError) -> Self {
        let kind = match e {
            PipeError::InvalidRange { .. } => std::io::ErrorKind::InvalidInput,
            PipeError::Closed => std::io::ErrorKind::BrokenPipe,
            PipeError::Disconnected => std::io::ErrorKind::NotConnected,
        };
        std::io::Error::new(kind, e)
    }
}
