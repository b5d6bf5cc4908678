use core::alloc::Layout;
use core::fmt;
use core::ptr::NonNull;

/// Error value for a failed storage request.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AllocErr {
    /// The requested capacity does not fit in `usize` arithmetic or in a
    /// valid [`Layout`].
    CapacityOverflow,
    /// The fallback allocator could not provide `layout`.
    Fallback {
        /// The layout that was requested.
        layout: Layout,
    },
}

impl fmt::Display for AllocErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocErr::CapacityOverflow => f.write_str("capacity overflow"),
            AllocErr::Fallback { layout } => write!(
                f,
                "fallback allocation of {} bytes failed",
                layout.size()
            ),
        }
    }
}

impl core::error::Error for AllocErr {}

/// Turn an allocation result into the value, aborting the usual way on
/// failure: panic on overflow, [`handle_alloc_error`] on exhaustion.
///
/// [`handle_alloc_error`]: alloc::alloc::handle_alloc_error
#[inline]
pub(crate) fn infallible<T>(result: Result<T, AllocErr>) -> T {
    match result {
        Ok(x) => x,
        Err(AllocErr::CapacityOverflow) => panic!("capacity overflow"),
        Err(AllocErr::Fallback { layout }) => alloc::alloc::handle_alloc_error(layout),
    }
}

/// The allocator consulted once a request cannot be satisfied in place.
///
/// Implementations must hand back blocks that stay valid until `deallocate`
/// is called with the same pointer and layout.
pub trait BackingAlloc {
    /// Allocate a block for `layout`.
    ///
    /// `layout.size()` is never zero: zero-size requests are short-circuited
    /// before they reach the fallback.
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocErr>;

    /// Release a block previously returned by
    /// [`allocate`](BackingAlloc::allocate).
    ///
    /// # Safety
    /// `ptr` must have been returned by `allocate` on this same allocator
    /// with this same `layout`, and must not be released twice.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
}

/// The global heap, via [`alloc::alloc`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Heap;

impl BackingAlloc for Heap {
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocErr> {
        debug_assert!(layout.size() != 0);
        // SAFETY: the layout is non-zero-sized.
        let raw = unsafe { alloc::alloc::alloc(layout) };
        NonNull::new(raw).ok_or(AllocErr::Fallback { layout })
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: guaranteed by the caller.
        unsafe { alloc::alloc::dealloc(ptr.as_ptr(), layout) }
    }
}

impl<A: BackingAlloc> BackingAlloc for &A {
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocErr> {
        (**self).allocate(layout)
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: guaranteed by the caller.
        unsafe { (**self).deallocate(ptr, layout) }
    }
}
