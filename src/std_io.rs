extern crate std;

use core::ptr;
use std::io::{IoSlice, Write};

use crate::fallback::BackingAlloc;
use crate::placed_vec::PlacedVec;

/// Write is implemented for `PlacedVec<u8, N, A>` by appending to the vector.
///
/// The vector grows as needed, so `write` always accepts the whole buffer;
/// small writes stay in place and larger ones spill to the fallback.
impl<const N: usize, A: BackingAlloc> Write for PlacedVec<u8, N, A> {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.reserve(buf.len());
        unsafe {
            ptr::copy_nonoverlapping(buf.as_ptr(), self.as_mut_ptr().add(self.len()), buf.len());
            self.set_len(self.len() + buf.len());
        }
        Ok(buf.len())
    }

    #[inline(always)]
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }

    #[inline]
    fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> std::io::Result<usize> {
        let total: usize = bufs.iter().map(|buf| buf.len()).sum();
        self.reserve(total);
        for buf in bufs {
            unsafe {
                ptr::copy_nonoverlapping(
                    buf.as_ptr(),
                    self.as_mut_ptr().add(self.len()),
                    buf.len(),
                );
                self.set_len(self.len() + buf.len());
            }
        }
        Ok(total)
    }

    #[inline]
    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> {
        self.write(buf).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::io::{IoSlice, Write};

    use crate::PlacedVec;

    #[test]
    fn small_writes_stay_in_place() {
        let mut vec: PlacedVec<u8, 8> = PlacedVec::new();
        assert_eq!(vec.write(b"hi").unwrap(), 2);
        assert_eq!(vec.write(b" there").unwrap(), 6);
        assert!(vec.is_in_place());
        assert_eq!(vec, *b"hi there");
        vec.flush().unwrap();
    }

    #[test]
    fn large_write_spills() {
        let mut vec: PlacedVec<u8, 4> = PlacedVec::new();
        vec.write_all(b"hello world").unwrap();
        assert!(!vec.is_in_place());
        assert_eq!(vec, *b"hello world");
    }

    #[test]
    fn vectored_write_appends_every_buffer() {
        let mut vec: PlacedVec<u8, 4> = PlacedVec::new();
        let bufs = [
            IoSlice::new(b"ab"),
            IoSlice::new(b""),
            IoSlice::new(b"cdef"),
        ];
        assert_eq!(vec.write_vectored(&bufs).unwrap(), 6);
        assert_eq!(vec, *b"abcdef");
    }
}
