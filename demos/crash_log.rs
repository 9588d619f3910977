// demos/crash_log.rs
//! A flight-recorder log: keep the last few records, dump them newest first.
//!
//! Run with `RUST_LOG=trace` to see eviction events.

use circstack::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut storage = [0u8; 96];
    let mut log = BlockRing::with_config(&mut storage, FrameConfig::secure());

    for tick in 0..40u32 {
        let record = format!("tick={tick} heap={}", 4096 - tick * 37);
        log.write(record.as_bytes());
    }

    println!("Newest record: {:?} bytes", log.peek_len());

    let mut record = [0u8; 64];
    loop {
        match log.try_read(&mut record) {
            Ok(n) => println!("  {}", String::from_utf8_lossy(&record[..usize::from(n)])),
            Err(RingError::Empty) => break,
            Err(err) => {
                println!("  (stopped: {err})");
                break;
            }
        }
    }

    log.clear();
    println!("Cleared, bytes used: {}", log.bytes_used());
    Ok(())
}
