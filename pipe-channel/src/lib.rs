//! # Pipe Channel
//!
//! `pipe-channel` is the bounded FIFO connecting exactly one producer thread
//! to exactly one consumer thread. Elements are opaque byte [`Chunk`]s; the
//! zero-length chunk is reserved as the end-of-stream terminator and is only
//! ever the last element a well-behaved producer sends.
//!
//! The channel is a thin wrapper around [`std::sync::mpsc::sync_channel`],
//! which already provides the required contract: `put` blocks while the
//! queue holds `capacity` chunks, `take` blocks while it is empty, and both
//! preserve strict FIFO order. The wrapper pins the surface down to the two
//! blocking operations and maps disconnection into [`PipeError::Disconnected`].

use std::sync::mpsc::{sync_channel, Receiver, SyncSender};

use pipe_error::{PipeError, Result};

/// One channel element: an immutable, finite byte sequence.
///
/// A chunk of length 0 carries no payload and signals that no further
/// chunks will arrive.
pub type Chunk = Vec<u8>;

/// Default channel capacity, in chunks.
pub const DEFAULT_CAPACITY: usize = 4096;

/// Creates a bounded chunk channel with the given capacity.
///
/// The capacity is fixed for the channel's lifetime. Panics if `capacity`
/// is zero.
pub fn channel(capacity: usize) -> (ChunkSender, ChunkReceiver) {
    assert!(capacity > 0, "Capacity can't be zero");

    let (tx, rx) = sync_channel(capacity);
    (ChunkSender { tx }, ChunkReceiver { rx })
}

/// Creates a bounded chunk channel with [`DEFAULT_CAPACITY`].
pub fn default_channel() -> (ChunkSender, ChunkReceiver) {
    channel(DEFAULT_CAPACITY)
}

/// The producer half of the channel.
///
/// Deliberately not `Clone`: the channel serves exactly one producer.
pub struct ChunkSender {
    tx: SyncSender<Chunk>,
}

impl ChunkSender {
    /// Enqueues `chunk`, blocking while the channel is full.
    ///
    /// Fails with [`PipeError::Disconnected`] if the receiving half has
    /// been dropped; in that case nothing was enqueued.
    pub fn put(&self, chunk: Chunk) -> Result<()> {
        log::trace!("channel: putting chunk of {} bytes", chunk.len());

        self.tx
            .send(chunk)
            .map_err(|_| PipeError::Disconnected)
    }
}

/// The consumer half of the channel.
pub struct ChunkReceiver {
    rx: Receiver<Chunk>,
}

impl ChunkReceiver {
    /// Removes and returns the oldest chunk, blocking while the channel is
    /// empty.
    ///
    /// Fails with [`PipeError::Disconnected`] if the sending half has been
    /// dropped and every buffered chunk has already been taken.
    pub fn take(&self) -> Result<Chunk> {
        let chunk = self
            .rx
            .recv()
            .map_err(|_| PipeError::Disconnected)?;

        log::trace!("channel: took chunk of {} bytes", chunk.len());
        Ok(chunk)
    }
}
