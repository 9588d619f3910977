// src/ring/io.rs
//! `std::io::Write` adapter so a ring can sit behind any writer API.

use std::io;

use super::ByteRing;

/// Writes never fail and always accept the whole buffer; older bytes are
/// evicted as needed.
impl io::Write for ByteRing<'_> {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        ByteRing::write(self, buf);
        Ok(buf.len())
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_write_fmt_keeps_tail() {
        let mut storage = [0u8; 8];
        let mut ring = ByteRing::new(&mut storage);
        write!(ring, "boot ok; temp={}", 42).unwrap();
        ring.flush().unwrap();

        let mut out = [0u8; 8];
        assert_eq!(ring.read_fifo(&mut out), 8);
        assert_eq!(&out, b" temp=42");
    }

    #[test]
    fn test_write_all_large_input() {
        let mut storage = [0u8; 4];
        let mut ring = ByteRing::new(&mut storage);
        ring.write_all(&[7u8; 1000]).unwrap();
        assert!(ring.is_full());
    }
}
