// demos/basic_usage.rs
//! Basic usage of the byte ring and the block ring

use circstack::prelude::*;

fn main() -> Result<()> {
    println!("=== Byte Ring ===\n");

    let mut storage = [0u8; 16];
    let mut ring = ByteRing::try_new(&mut storage)?;

    ring.write(b"Hello, ");
    ring.write(b"World!");
    println!("Ring length: {}/{}", ring.len(), ring.capacity());

    let mut lifo = [0u8; 6];
    ring.peek(&mut lifo);
    println!("Peek LIFO:  {:?}", String::from_utf8_lossy(&lifo));

    let mut fifo = [0u8; 6];
    ring.peek_fifo(&mut fifo);
    println!("Peek FIFO:  {:?}", String::from_utf8_lossy(&fifo));

    // Overflow: only the newest 16 bytes stay
    ring.write(b" This sentence is longer than the ring.");
    let (first, second) = ring.as_slices();
    println!(
        "After overflow: {:?}{:?}",
        String::from_utf8_lossy(first),
        String::from_utf8_lossy(second)
    );

    ring.burn();
    println!("Burned, empty: {}", ring.is_empty());

    println!("\n=== Block Ring ===\n");

    let mut storage = [0u8; 32];
    let mut blocks = BlockRing::new(&mut storage);
    blocks.write(b"first");
    blocks.write(b"second");
    blocks.write(b"third");
    println!("Bytes used: {}", blocks.bytes_used());

    let mut record = [0u8; 16];
    while let Ok(n) = blocks.try_read(&mut record) {
        println!(
            "Popped {} bytes: {:?}",
            n,
            String::from_utf8_lossy(&record[..usize::from(n)])
        );
    }

    Ok(())
}
