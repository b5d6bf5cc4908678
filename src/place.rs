use core::mem::MaybeUninit;

/// A fixed region of `N` elements' worth of uninitialized storage, embedded
/// directly in the owning container.
///
/// The region inherits the storage duration of whatever holds it: a container
/// on a stack frame keeps its small elements on that stack frame.
pub(crate) struct InlineBuffer<T, const N: usize> {
    data: [MaybeUninit<T>; N],
}

impl<T, const N: usize> InlineBuffer<T, N> {
    #[inline]
    pub(crate) const fn new() -> Self {
        Self {
            // SAFETY: Full buffer uninitialized to internal uninitialized is safe.
            data: unsafe { MaybeUninit::<[MaybeUninit<T>; N]>::uninit().assume_init() },
        }
    }

    #[inline(always)]
    pub(crate) const fn as_ptr(&self) -> *const T {
        &raw const self.data as *const T
    }

    #[inline(always)]
    pub(crate) const fn as_mut_ptr(&mut self) -> *mut T {
        &raw mut self.data as *mut T
    }
}

/// Checkout state for a single inline region.
///
/// A `Place` owns its [`InlineBuffer`] as a plain value member instead of
/// recording its address. The owning container resolves the buffer through
/// `self` on every access, so relocating the container can never leave the
/// descriptor referring to stale memory.
///
/// The region can back at most one allocation at a time (`is_used`), and the
/// owner may temporarily withdraw it from service entirely (`is_enabled`).
pub(crate) struct Place<T, const N: usize> {
    buf: InlineBuffer<T, N>,
    is_used: bool,
    is_enabled: bool,
}

impl<T, const N: usize> Place<T, N> {
    #[inline]
    pub(crate) const fn new() -> Self {
        Self {
            buf: InlineBuffer::new(),
            is_used: false,
            is_enabled: true,
        }
    }

    /// The inline capacity, in elements.
    #[inline(always)]
    pub(crate) const fn capacity(&self) -> usize {
        N
    }

    /// Try to check out the inline region for `cap` elements.
    ///
    /// Succeeds (and marks the region used) iff the region is enabled,
    /// currently free, and `cap` fits within `N`.
    #[inline]
    pub(crate) const fn acquire(&mut self, cap: usize) -> bool {
        if self.is_enabled && !self.is_used && cap <= N {
            self.is_used = true;
            true
        } else {
            false
        }
    }

    /// Return the inline region to the free state.
    #[inline(always)]
    pub(crate) const fn release(&mut self) {
        self.is_used = false;
    }

    #[inline(always)]
    pub(crate) const fn is_used(&self) -> bool {
        self.is_used
    }

    /// Forbid inline checkout until [`enable`](Place::enable) is called,
    /// regardless of capacity fit. An allocation already backed by the region
    /// is unaffected.
    #[inline(always)]
    pub(crate) const fn disable(&mut self) {
        self.is_enabled = false;
    }

    #[inline(always)]
    pub(crate) const fn enable(&mut self) {
        self.is_enabled = true;
    }

    #[inline(always)]
    pub(crate) const fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    #[inline(always)]
    pub(crate) const fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }
}
