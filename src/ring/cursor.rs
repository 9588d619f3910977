// src/ring/cursor.rs
//! Cursor state and the LIFO/FIFO take algorithms.
//!
//! The cursor is the only mutable state a read touches. Peeks copy it,
//! run the same take, and drop the copy.

/// Position of the newest byte and how many valid bytes end there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Cursor {
    /// Offset just past the most recently written byte, in `[0, capacity)`
    pub(crate) top: u16,
    /// Valid bytes ending at `top`, read cyclically backward
    pub(crate) length: u16,
}

impl Cursor {
    /// Returns the `n` bytes nearest `top` in write order, as at most two
    /// spans. `n` must not exceed `length`.
    #[inline]
    pub(crate) fn window<'s>(&self, storage: &'s [u8], n: u16) -> (&'s [u8], &'s [u8]) {
        debug_assert!(n <= self.length);
        let top = usize::from(self.top);
        let n = usize::from(n);
        if n <= top {
            (&storage[top - n..top], &[])
        } else {
            let wrapped = n - top;
            (&storage[storage.len() - wrapped..], &storage[..top])
        }
    }

    /// Moves `top` back by `n` and forgets those bytes.
    #[inline]
    fn rewind(&mut self, n: u16, capacity: usize) {
        let top = usize::from(self.top);
        let n_usize = usize::from(n);
        self.top = ((top + capacity - n_usize) % capacity) as u16;
        self.length -= n;
    }

    /// Removes up to `dest.len()` bytes, newest first.
    pub(crate) fn take_lifo(&mut self, storage: &[u8], dest: &mut [u8]) -> u16 {
        let n = clamp(dest.len(), self.length);
        let (older, newer) = self.window(storage, n);
        for (slot, byte) in dest
            .iter_mut()
            .zip(newer.iter().rev().chain(older.iter().rev()))
        {
            *slot = *byte;
        }
        self.rewind(n, storage.len());
        n
    }

    /// Removes the same window as [`take_lifo`](Self::take_lifo) but keeps
    /// write order.
    pub(crate) fn take_fifo(&mut self, storage: &[u8], dest: &mut [u8]) -> u16 {
        let n = clamp(dest.len(), self.length);
        let (older, newer) = self.window(storage, n);
        dest[..older.len()].copy_from_slice(older);
        dest[older.len()..older.len() + newer.len()].copy_from_slice(newer);
        self.rewind(n, storage.len());
        n
    }

    /// Removes up to `n` bytes without copying them anywhere.
    pub(crate) fn skip(&mut self, n: u16, capacity: usize) -> u16 {
        let n = n.min(self.length);
        self.rewind(n, capacity);
        n
    }
}

/// Clamps a requested transfer size to what the cursor holds.
#[inline]
fn clamp(requested: usize, length: u16) -> u16 {
    u16::try_from(requested).map_or(length, |r| r.min(length))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_contiguous() {
        let storage = *b"abcdefgh";
        let cursor = Cursor { top: 5, length: 5 };
        assert_eq!(cursor.window(&storage, 3), (&b"cde"[..], &b""[..]));
    }

    #[test]
    fn test_window_wrapped() {
        let storage = *b"abcdefgh";
        let cursor = Cursor { top: 2, length: 6 };
        assert_eq!(cursor.window(&storage, 5), (&b"fgh"[..], &b"ab"[..]));
    }

    #[test]
    fn test_take_on_copy_leaves_original() {
        let storage = *b"abcdefgh";
        let cursor = Cursor { top: 2, length: 6 };

        let mut snapshot = cursor;
        let mut out = [0u8; 4];
        assert_eq!(snapshot.take_lifo(&storage, &mut out), 4);
        assert_eq!(&out, b"bahg");
        assert_eq!(snapshot, Cursor { top: 6, length: 2 });
        assert_eq!(cursor, Cursor { top: 2, length: 6 });
    }

    #[test]
    fn test_take_fifo_clamps() {
        let storage = *b"abcdefgh";
        let mut cursor = Cursor { top: 1, length: 3 };
        let mut out = [0u8; 8];
        assert_eq!(cursor.take_fifo(&storage, &mut out), 3);
        assert_eq!(&out[..3], b"gha");
        assert_eq!(cursor, Cursor { top: 6, length: 0 });
    }

    #[test]
    fn test_skip() {
        let mut cursor = Cursor { top: 0, length: 8 };
        assert_eq!(cursor.skip(3, 8), 3);
        assert_eq!(cursor, Cursor { top: 5, length: 5 });
        assert_eq!(cursor.skip(100, 8), 5);
        assert_eq!(cursor.length, 0);
    }
}
