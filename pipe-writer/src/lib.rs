//! # Pipe Writer
//!
//! `pipe-writer` provides [`ChunkWriter`], the producer-side adapter of the
//! chunk pipe. One thread writes bytes through the conventional blocking
//! writer interface; a second thread takes the resulting chunks from the
//! shared [`pipe_channel`] at its own pace.
//!
//! Bytes accumulate in a fixed-size buffer owned exclusively by the writer.
//! Whenever the buffer fills, its contents are copied out and enqueued as
//! one chunk; `close` flushes the remainder and enqueues the zero-length
//! terminator chunk. A full channel stalls the writer instead of growing
//! memory, so a slow consumer applies backpressure all the way back to the
//! producing thread.
//!
//! ## Usage contract
//!
//! The consumer must call [`pipe_channel::ChunkReceiver::take`] until it
//! receives an empty chunk and then stop. A producer that fails before
//! `close` never enqueues the terminator; dropping the writer disconnects
//! the channel, so such a consumer observes
//! [`pipe_error::PipeError::Disconnected`] instead of blocking forever. The
//! orchestrating code is expected to join both threads together.

mod writer;

pub use writer::{ChunkWriter, DEFAULT_BUFFER_SIZE};
