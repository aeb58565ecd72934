use pipe_channel::{Chunk, ChunkSender};
use pipe_error::{PipeError, Result};

/// Default size of the accumulation buffer, in bytes.
pub const DEFAULT_BUFFER_SIZE: usize = 16 * 1024;

/// The write-oriented half of the chunk pipe.
///
/// Accumulates written bytes into a fixed-size buffer and pushes each full
/// buffer onto the channel as one chunk. The buffer is owned exclusively by
/// this writer and is never shared with the consumer: every enqueued chunk
/// is a fresh copy, so callers are free to reuse their own slices after a
/// write returns.
///
/// `close` flushes any partial buffer as a final short chunk, then enqueues
/// the zero-length terminator. After that the writer is closed and every
/// write fails with [`PipeError::Closed`]. A second `close` is a no-op.
pub struct ChunkWriter {
    sender: ChunkSender,
    buf: Box<[u8]>,
    /// Fill cursor; always `<= buf.len()`.
    cursor: usize,
    closed: bool,
}

impl ChunkWriter {
    /// Wraps the sending half of a channel into a writer using
    /// [`DEFAULT_BUFFER_SIZE`].
    pub fn new(sender: ChunkSender) -> Self {
        Self::with_buffer_size(sender, DEFAULT_BUFFER_SIZE)
    }

    /// Wraps the sending half of a channel into a writer with a custom
    /// accumulation-buffer size.
    ///
    /// Panics if `buffer_size` is zero.
    pub fn with_buffer_size(sender: ChunkSender, buffer_size: usize) -> Self {
        assert!(buffer_size > 0, "Buffer size can't be zero");

        Self {
            sender,
            buf: vec![0u8; buffer_size].into_boxed_slice(),
            cursor: 0,
            closed: false,
        }
    }

    /// Appends a single byte, truncated to the low 8 bits of `value`.
    ///
    /// Out-of-range integers are masked, not rejected: writing `-1`
    /// reaches the consumer as `0xFF`. Blocks if the append fills the
    /// buffer and the channel is full.
    pub fn write_byte(&mut self, value: i32) -> Result<()> {
        self.check_open()?;

        self.buf[self.cursor] = value as u8;
        self.cursor += 1;
        if self.cursor == self.buf.len() {
            self.flush_buffer()?;
        }
        Ok(())
    }

    /// Appends every byte of `buf`, flushing full chunks as needed.
    ///
    /// A single call may enqueue several chunks when `buf` is larger than
    /// the room left in the accumulation buffer. An empty slice is a
    /// successful no-op: no chunk is enqueued and the cursor is untouched.
    pub fn write_bytes(&mut self, buf: &[u8]) -> Result<()> {
        self.check_open()?;

        let mut rest = buf;
        while !rest.is_empty() {
            let room = self.buf.len() - self.cursor;
            let n = room.min(rest.len());
            self.buf[self.cursor..self.cursor + n]
                .copy_from_slice(&rest[..n]);
            self.cursor += n;
            rest = &rest[n..];

            if self.cursor == self.buf.len() {
                self.flush_buffer()?;
            }
        }
        Ok(())
    }

    /// Appends `len` bytes of `buf` starting at `offset`.
    ///
    /// Fails with [`PipeError::InvalidRange`] if the range falls outside
    /// `buf`; nothing is written in that case.
    pub fn write_range(
        &mut self,
        buf: &[u8],
        offset: usize,
        len: usize,
    ) -> Result<()> {
        let end = offset
            .checked_add(len)
            .filter(|&end| end <= buf.len())
            .ok_or(PipeError::InvalidRange {
                offset,
                len,
                buf_len: buf.len(),
            })?;

        self.write_bytes(&buf[offset..end])
    }

    /// Flushes the partial buffer, enqueues the terminator chunk and closes
    /// the writer.
    ///
    /// The writer is marked closed before anything is enqueued, so even if
    /// the consumer is already gone every later write fails with
    /// [`PipeError::Closed`]. Calling `close` again is a no-op.
    pub fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;

        if self.cursor > 0 {
            self.flush_buffer()?;
        }
        log::debug!("writer: closing, sending terminator");
        self.sender.put(Chunk::new())
    }

    fn check_open(&self) -> Result<()> {
        if self.closed {
            return Err(PipeError::Closed);
        }
        Ok(())
    }

    /// Copies `buf[..cursor]` into a fresh chunk, enqueues it and resets
    /// the cursor. Blocks while the channel is full.
    fn flush_buffer(&mut self) -> Result<()> {
        log::debug!("writer: flushing chunk of {} bytes", self.cursor);

        let chunk = self.buf[..self.cursor].to_vec();
        self.cursor = 0;
        self.sender.put(chunk)
    }
}

/// The conventional blocking output-stream surface.
///
/// `write` always consumes the whole slice (blocking on a full channel);
/// `flush` is a no-op, since chunk boundaries are drawn only at buffer
/// capacity and at `close`.
impl std::io::Write for ChunkWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.write_bytes(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
