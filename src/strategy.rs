use core::alloc::Layout;
use core::ptr::NonNull;

use crate::fallback::{AllocErr, BackingAlloc};
use crate::place::Place;

/// The active storage block of a container: either its own inline region or
/// a block from the fallback allocator.
///
/// The inline case deliberately carries no pointer. The owner resolves it
/// against its own [`Place`] on every access, so the selector stays correct
/// when the owner is moved to a new location.
pub(crate) enum Block<T> {
    InPlace,
    Fallback(NonNull<T>),
}

impl<T> Clone for Block<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Block<T> {}

/// Decides, per storage request, whether the inline region or the fallback
/// allocator serves it.
///
/// The strategy itself is stateless beyond the fallback instance it carries;
/// the descriptor is borrowed per call from the owning container, which is
/// what makes it impossible to end up bound to another instance's buffer.
pub(crate) struct PlaceAlloc<A> {
    fallback: A,
}

impl<A: BackingAlloc> PlaceAlloc<A> {
    #[inline]
    pub(crate) const fn new(fallback: A) -> Self {
        Self { fallback }
    }

    #[inline]
    pub(crate) const fn fallback(&self) -> &A {
        &self.fallback
    }

    /// Allocate storage for `cap` elements of `T`.
    ///
    /// The inline region is granted iff the descriptor is enabled, currently
    /// free, and `cap` fits its capacity; every other request is delegated
    /// to the fallback. Zero-size requests (`cap == 0` or zero-sized `T`)
    /// never reach the fallback allocator.
    pub(crate) fn allocate<T, const N: usize>(
        &self,
        place: &mut Place<T, N>,
        cap: usize,
    ) -> Result<Block<T>, AllocErr> {
        if place.acquire(cap) {
            return Ok(Block::InPlace);
        }
        let layout = Layout::array::<T>(cap).map_err(|_| AllocErr::CapacityOverflow)?;
        if layout.size() == 0 {
            return Ok(Block::Fallback(NonNull::dangling()));
        }
        let ptr = self.fallback.allocate(layout)?;
        Ok(Block::Fallback(ptr.cast()))
    }

    /// Release a block previously returned by
    /// [`allocate`](PlaceAlloc::allocate).
    ///
    /// # Safety
    /// `block` must have been produced by `allocate` with the same `place`
    /// and the same `cap`, and must not be released twice.
    pub(crate) unsafe fn release<T, const N: usize>(
        &self,
        place: &mut Place<T, N>,
        block: Block<T>,
        cap: usize,
    ) {
        match block {
            Block::InPlace => place.release(),
            Block::Fallback(ptr) => {
                // `cap` produced a valid layout when the block was allocated.
                let layout = unsafe { Layout::array::<T>(cap).unwrap_unchecked() };
                if layout.size() != 0 {
                    // SAFETY: guaranteed by the caller.
                    unsafe { self.fallback.deallocate(ptr.cast(), layout) };
                }
            }
        }
    }

    /// True iff the descriptor's inline region currently backs a block,
    /// i.e. the last retained allocation was satisfied in place.
    #[inline(always)]
    pub(crate) const fn is_in_place<T, const N: usize>(&self, place: &Place<T, N>) -> bool {
        place.is_used()
    }
}

#[cfg(test)]
mod tests {
    use super::{Block, PlaceAlloc};
    use crate::fallback::Heap;
    use crate::place::Place;

    #[test]
    fn fitting_request_lands_in_place() {
        let strategy = PlaceAlloc::new(Heap);
        let mut place = Place::<u64, 4>::new();

        let block = strategy.allocate(&mut place, 4).unwrap();
        assert!(matches!(block, Block::InPlace));
        assert!(strategy.is_in_place(&place));

        unsafe { strategy.release(&mut place, block, 4) };
        assert!(!strategy.is_in_place(&place));
    }

    #[test]
    fn oversized_request_goes_to_fallback() {
        let strategy = PlaceAlloc::new(Heap);
        let mut place = Place::<u64, 4>::new();

        let block = strategy.allocate(&mut place, 5).unwrap();
        assert!(matches!(block, Block::Fallback(_)));
        assert!(!strategy.is_in_place(&place));

        unsafe { strategy.release(&mut place, block, 5) };
    }

    #[test]
    fn occupied_region_forces_fallback() {
        let strategy = PlaceAlloc::new(Heap);
        let mut place = Place::<u64, 4>::new();

        let first = strategy.allocate(&mut place, 2).unwrap();
        assert!(matches!(first, Block::InPlace));

        // The region backs one block at a time; a concurrent request must
        // not alias it.
        let second = strategy.allocate(&mut place, 2).unwrap();
        assert!(matches!(second, Block::Fallback(_)));

        unsafe {
            strategy.release(&mut place, second, 2);
            strategy.release(&mut place, first, 2);
        }
    }

    #[test]
    fn disabled_region_forces_fallback() {
        let strategy = PlaceAlloc::new(Heap);
        let mut place = Place::<u64, 4>::new();

        place.disable();
        let block = strategy.allocate(&mut place, 2).unwrap();
        assert!(matches!(block, Block::Fallback(_)));
        unsafe { strategy.release(&mut place, block, 2) };

        place.enable();
        let block = strategy.allocate(&mut place, 2).unwrap();
        assert!(matches!(block, Block::InPlace));
        unsafe { strategy.release(&mut place, block, 2) };
    }

    #[test]
    fn zero_size_request_never_touches_fallback() {
        let strategy = PlaceAlloc::new(Heap);

        // Zero capacity while the region is occupied.
        let mut place = Place::<u64, 4>::new();
        let held = strategy.allocate(&mut place, 4).unwrap();
        let empty = strategy.allocate(&mut place, 0).unwrap();
        assert!(matches!(empty, Block::Fallback(_)));
        unsafe {
            strategy.release(&mut place, empty, 0);
            strategy.release(&mut place, held, 4);
        }

        // Zero-sized element type, any capacity.
        let mut place = Place::<(), 4>::new();
        place.disable();
        let block = strategy.allocate(&mut place, 1024).unwrap();
        assert!(matches!(block, Block::Fallback(_)));
        unsafe { strategy.release(&mut place, block, 1024) };
    }
}
