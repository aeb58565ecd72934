use anyhow::{Context, Result};
use crc32fast::Hasher;
use std::{env, fs, thread};

use pipe_channel::default_channel;
use pipe_writer::ChunkWriter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
    }
}

/// Pipes a file through the chunk bridge: the main thread writes the file's
/// bytes, a consumer thread drains chunks, and both sides report byte
/// counts and CRC-32 checksums that must match.
fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        println!("Usage:");
        println!(" cargo run --example cli <file>");
        return Ok(());
    }

    let data = fs::read(&args[1])
        .with_context(|| format!("Failed to read {}", &args[1]))?;

    let (tx, rx) = default_channel();
    let mut writer = ChunkWriter::new(tx);

    let consumer = thread::spawn(move || {
        let mut sum = Hasher::new();
        let mut chunks = 0usize;
        let mut bytes = 0usize;
        loop {
            let chunk = rx.take()?;
            if chunk.is_empty() {
                return Ok::<_, pipe_error::PipeError>((
                    sum.finalize(),
                    chunks,
                    bytes,
                ));
            }
            sum.update(&chunk);
            chunks += 1;
            bytes += chunk.len();
        }
    });

    let mut sum = Hasher::new();
    sum.update(&data);
    writer.write_bytes(&data)?;
    writer.close()?;

    let (received_sum, chunks, bytes) = consumer
        .join()
        .expect("Consumer thread panicked")?;

    println!("wrote    {} bytes (crc32 {:08x})", data.len(), sum.finalize());
    println!(
        "received {} bytes in {} chunks (crc32 {:08x})",
        bytes, chunks, received_sum
    );
    Ok(())
}
