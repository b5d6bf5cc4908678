use core::{fmt, iter::FusedIterator, mem, ptr, slice};

use crate::fallback::{AllocErr, BackingAlloc, Heap, infallible};
use crate::place::Place;
use crate::strategy::{Block, PlaceAlloc};
use crate::utils::cold_path;

/// A growable vector whose storage lives inside its own footprint while the
/// capacity stays within `N`, and in the fallback allocator once it does not.
///
/// Up to `N` elements there is zero heap traffic: the backing region is a
/// plain field of the vector, so a `PlacedVec` on a stack frame keeps its
/// elements on that stack frame, and one embedded in a larger structure keeps
/// them inline. Growth beyond `N` transparently switches to blocks from the
/// fallback allocator `A` (the global heap by default), and
/// [`put_in_place`](PlacedVec::put_in_place) can bring the data back home
/// once the element count fits again.
///
/// Most methods are similar to [`Vec`](alloc::vec::Vec); the differences are
/// the three placement operations and the fact that a freshly constructed
/// vector already has capacity `N`.
///
/// # Examples
///
/// ```
/// use placedvec::PlacedVec;
///
/// let mut vec: PlacedVec<i32, 4> = PlacedVec::new();
/// assert!(vec.is_in_place());
/// assert_eq!(vec.capacity(), 4);
///
/// vec.extend([1, 2, 3, 4]);
/// assert!(vec.is_in_place());
///
/// // The fifth element does not fit in place any more.
/// vec.push(5);
/// assert!(!vec.is_in_place());
///
/// // Shrink back below the inline capacity and reclaim the region.
/// vec.pop();
/// vec.pop();
/// assert!(vec.put_in_place());
/// assert!(vec.is_in_place());
/// assert_eq!(vec, [1, 2, 3]);
/// ```
pub struct PlacedVec<T, const N: usize = 8, A: BackingAlloc = Heap> {
    place: Place<T, N>,
    strategy: PlaceAlloc<A>,
    block: Block<T>,
    cap: usize,
    len: usize,
}

unsafe impl<T, const N: usize, A> Send for PlacedVec<T, N, A>
where
    T: Send,
    A: BackingAlloc + Send,
{
}
unsafe impl<T, const N: usize, A> Sync for PlacedVec<T, N, A>
where
    T: Sync,
    A: BackingAlloc + Sync,
{
}

/// Creates a [`PlacedVec`] containing the arguments.
///
/// The syntax is similar to [`vec!`](https://doc.rust-lang.org/std/macro.vec.html).
/// If the number of elements exceeds the inline capacity, the vector starts
/// out on the fallback allocator instead.
///
/// # Examples
///
/// ```
/// # use placedvec::{placedvec, PlacedVec};
/// let vec: PlacedVec<String, 10> = placedvec![];
/// let vec: PlacedVec<i64, 10> = placedvec![1; 5]; // Need to support Clone.
/// let vec: PlacedVec<_, 10> = placedvec![1, 2, 3, 4];
/// ```
#[macro_export]
macro_rules! placedvec {
    [] => { $crate::PlacedVec::new() };
    [$elem:expr; $n:expr] => { $crate::PlacedVec::from_elem($elem, $n) };
    [$($item:expr),+ $(,)?] => { $crate::PlacedVec::from_buf([ $($item),+ ]) };
}

impl<T, const N: usize> PlacedVec<T, N> {
    /// Constructs a new, empty `PlacedVec` backed by the global heap.
    ///
    /// Capacity `N` is reserved up front out of the inline region, so the
    /// fresh vector is in place and appending up to `N` elements performs no
    /// fallback allocation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use placedvec::PlacedVec;
    /// let vec: PlacedVec<i32, 8> = PlacedVec::new();
    /// assert!(vec.is_in_place());
    /// assert_eq!(vec.capacity(), 8);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::new_in(Heap)
    }

    /// Constructs a new, empty `PlacedVec` with at least the specified
    /// capacity.
    ///
    /// A capacity of `N` or less is served by the inline region; anything
    /// larger starts out on the fallback allocator.
    ///
    /// # Examples
    ///
    /// ```
    /// # use placedvec::PlacedVec;
    /// let vec: PlacedVec<i32, 5> = PlacedVec::with_capacity(4);
    /// assert!(vec.is_in_place());
    ///
    /// let vec: PlacedVec<i32, 5> = PlacedVec::with_capacity(10);
    /// assert!(!vec.is_in_place());
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_in(capacity, Heap)
    }

    /// Creates a `PlacedVec` from an array.
    ///
    /// If the array is longer than `N`, the vector starts out on the
    /// fallback allocator.
    ///
    /// # Examples
    ///
    /// ```
    /// # use placedvec::PlacedVec;
    /// let vec: PlacedVec<i32, 5> = PlacedVec::from_buf([1, 2, 3]);
    /// assert_eq!(vec.len(), 3);
    /// assert!(vec.is_in_place());
    /// ```
    #[inline]
    pub fn from_buf<const P: usize>(arr: [T; P]) -> Self {
        let mut vec = Self::with_capacity(P);
        unsafe {
            ptr::copy_nonoverlapping(arr.as_ptr(), vec.as_mut_ptr(), P);
            vec.set_len(P);
        }
        mem::forget(arr);
        vec
    }
}

impl<T: Clone, const N: usize> PlacedVec<T, N> {
    /// Creates a `PlacedVec` with `num` copies of `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use placedvec::PlacedVec;
    /// let vec: PlacedVec<i32, 5> = PlacedVec::from_elem(1, 4);
    /// assert_eq!(vec, [1, 1, 1, 1]);
    /// ```
    pub fn from_elem(elem: T, num: usize) -> Self {
        let mut vec = Self::with_capacity(num);
        if num != 0 {
            let base_ptr = vec.as_mut_ptr();
            unsafe {
                for index in 1..num {
                    ptr::write(base_ptr.add(index), elem.clone());
                }
                // Reduce one copy.
                ptr::write(base_ptr, elem);
                vec.set_len(num);
            }
        }
        vec
    }
}

impl<T, const N: usize, A: BackingAlloc> PlacedVec<T, N, A> {
    /// Constructs a new, empty `PlacedVec` with the given fallback allocator.
    ///
    /// The fallback is only consulted once the capacity exceeds `N`.
    #[inline]
    pub fn new_in(fallback: A) -> Self {
        Self::with_capacity_in(N, fallback)
    }

    /// Constructs a new, empty `PlacedVec` with at least the specified
    /// capacity and the given fallback allocator.
    ///
    /// The capacity is raised to `N` if the request is smaller, so the
    /// inline region is never left idle on construction.
    pub fn with_capacity_in(capacity: usize, fallback: A) -> Self {
        let mut place = Place::new();
        let strategy = PlaceAlloc::new(fallback);
        let cap = if capacity > N { capacity } else { N };
        let block = infallible(strategy.allocate(&mut place, cap));
        Self {
            place,
            strategy,
            block,
            cap,
            len: 0,
        }
    }

    /// Returns the inline capacity `N`.
    ///
    /// This is a compile-time constant of the type and is independent of
    /// where the data currently lives.
    ///
    /// # Examples
    ///
    /// ```
    /// # use placedvec::PlacedVec;
    /// let mut vec: PlacedVec<i32, 8> = PlacedVec::new();
    /// vec.extend(0..100);
    /// assert_eq!(vec.size_in_place(), 8);
    /// ```
    #[inline(always)]
    pub const fn size_in_place(&self) -> usize {
        self.place.capacity()
    }

    /// Returns `true` if the active storage is the inline region.
    ///
    /// # Examples
    ///
    /// ```
    /// # use placedvec::{placedvec, PlacedVec};
    /// let mut vec: PlacedVec<i32, 4> = placedvec![1, 2, 3, 4];
    /// assert!(vec.is_in_place());
    ///
    /// vec.push(5);
    /// assert!(!vec.is_in_place());
    /// ```
    #[inline(always)]
    pub const fn is_in_place(&self) -> bool {
        self.strategy.is_in_place(&self.place)
    }

    /// Attempts to move the active storage back to the inline region.
    ///
    /// Returns `true` if the data ends up in place with capacity `N`, which
    /// requires the current element count to be at most `N`. Returns `false`
    /// (leaving elements, order, and length untouched) when the vector is
    /// too long.
    ///
    /// The routine first forces the buffer onto the fallback by requesting
    /// capacity `N + 1`, shrinks it to the exact element count, and then
    /// resets the capacity to `N` so the request is eligible for the inline
    /// region. While the shrink runs with an element count other than `N`,
    /// the region is temporarily disabled: otherwise the shrink itself would
    /// land in place with a capacity below `N` and occupy the region, and
    /// the final reset would bounce back to the fallback.
    ///
    /// # Examples
    ///
    /// ```
    /// # use placedvec::{placedvec, PlacedVec};
    /// let mut vec: PlacedVec<i32, 4> = placedvec![1, 2, 3, 4, 5];
    /// assert!(!vec.is_in_place());
    ///
    /// // Still too long to come home.
    /// assert!(!vec.put_in_place());
    ///
    /// vec.truncate(3);
    /// assert!(vec.put_in_place());
    /// assert!(vec.is_in_place());
    /// assert_eq!(vec, [1, 2, 3]);
    /// ```
    pub fn put_in_place(&mut self) -> bool {
        if self.is_in_place() && self.cap == N {
            return true;
        }
        if self.len > N {
            return false;
        }
        // Force the next buffer off the inline region.
        infallible(self.try_grow_to(N + 1));
        if self.len != N {
            self.place.disable();
        }
        infallible(self.try_realloc(self.len));
        self.place.enable();
        infallible(self.try_realloc(N));
        self.is_in_place()
    }

    /// Returns the number of elements in the vector.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector contains no elements.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the total number of elements the vector can hold without
    /// reallocating. Never below `N` except transiently inside a coercion.
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns a raw pointer to the vector's active buffer.
    ///
    /// The pointer refers to the inline region or to a fallback block
    /// depending on where the data currently lives; any operation that
    /// changes the capacity may move it.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        match self.block {
            Block::InPlace => self.place.as_ptr(),
            Block::Fallback(ptr) => ptr.as_ptr(),
        }
    }

    /// Returns a raw mutable pointer to the vector's active buffer.
    #[inline]
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        match self.block {
            Block::InPlace => self.place.as_mut_ptr(),
            Block::Fallback(ptr) => ptr.as_ptr(),
        }
    }

    /// Extracts a slice containing the entire vector.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    /// Extracts a mutable slice containing the entire vector.
    #[inline]
    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }

    /// Forces the length of the vector to `new_len`.
    ///
    /// # Safety
    /// - `new_len` must be less than or equal to the capacity.
    /// - The elements at `..new_len` must be initialized.
    #[inline(always)]
    pub const unsafe fn set_len(&mut self, new_len: usize) {
        debug_assert!(new_len <= self.cap);
        self.len = new_len;
    }

    /// Appends an element to the back of the vector, growing through the
    /// fallback allocator if the capacity is exhausted.
    ///
    /// # Examples
    ///
    /// ```
    /// # use placedvec::PlacedVec;
    /// let mut vec: PlacedVec<i32, 4> = PlacedVec::new();
    /// vec.push(1);
    /// vec.push(2);
    /// assert_eq!(vec, [1, 2]);
    /// ```
    #[inline]
    pub fn push(&mut self, value: T) {
        if self.len == self.cap {
            self.grow_one();
        }
        unsafe {
            ptr::write(self.as_mut_ptr().add(self.len), value);
        }
        self.len += 1;
    }

    /// Removes the last element from the vector and returns it, or `None`
    /// if it is empty. Never moves the remaining data.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            cold_path();
            None
        } else {
            self.len -= 1;
            unsafe { Some(ptr::read(self.as_ptr().add(self.len))) }
        }
    }

    /// Inserts an element at position `index`, shifting all elements after
    /// it to the right.
    ///
    /// # Panics
    /// Panics if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use placedvec::{placedvec, PlacedVec};
    /// let mut vec: PlacedVec<_, 4> = placedvec!['a', 'b', 'c'];
    /// vec.insert(1, 'd');
    /// assert_eq!(vec, ['a', 'd', 'b', 'c']);
    /// ```
    pub fn insert(&mut self, index: usize, element: T) {
        assert!(index <= self.len, "insertion index should be <= len");
        if self.len == self.cap {
            self.grow_one();
        }
        unsafe {
            let base_ptr = self.as_mut_ptr().add(index);
            if index < self.len {
                ptr::copy(base_ptr, base_ptr.add(1), self.len - index);
            }
            ptr::write(base_ptr, element);
        }
        self.len += 1;
    }

    /// Removes and returns the element at position `index`, shifting all
    /// elements after it to the left.
    ///
    /// Worst-case O(n); use [`swap_remove`](PlacedVec::swap_remove) when the
    /// order does not matter.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(index < self.len, "removal index should be < len");
        unsafe {
            let base_ptr = self.as_mut_ptr().add(index);
            let value = ptr::read(base_ptr);
            ptr::copy(base_ptr.add(1), base_ptr, self.len - index - 1);
            self.len -= 1;
            value
        }
    }

    /// Removes an element from the vector and returns it, replacing it with
    /// the last element. O(1), does not preserve ordering.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    pub fn swap_remove(&mut self, index: usize) -> T {
        assert!(index < self.len, "removal index should be < len");
        unsafe {
            let base_ptr = self.as_mut_ptr();
            let value = ptr::read(base_ptr.add(index));
            ptr::copy(base_ptr.add(self.len - 1), base_ptr.add(index), 1);
            self.len -= 1;
            value
        }
    }

    /// Shortens the vector, keeping the first `len` elements and dropping
    /// the rest. Capacity and placement are unaffected.
    pub fn truncate(&mut self, len: usize) {
        if self.len > len {
            unsafe {
                let tail = ptr::slice_from_raw_parts_mut(
                    self.as_mut_ptr().add(len),
                    self.len - len,
                );
                self.len = len;
                ptr::drop_in_place(tail);
            }
        }
    }

    /// Clears the vector, removing all values. Capacity and placement are
    /// unaffected.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Reserves capacity for at least `additional` more elements.
    ///
    /// Once the resulting capacity exceeds `N` the data moves to the
    /// fallback allocator.
    ///
    /// # Panics
    /// Panics on capacity overflow; aborts on fallback exhaustion.
    ///
    /// # Examples
    ///
    /// ```
    /// # use placedvec::PlacedVec;
    /// let mut vec: PlacedVec<i32, 8> = PlacedVec::new();
    /// vec.reserve(5);
    /// assert!(vec.is_in_place());
    ///
    /// vec.reserve(10);
    /// assert!(!vec.is_in_place());
    /// assert!(vec.capacity() >= 10);
    /// ```
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        infallible(self.try_reserve(additional));
    }

    /// Fallible [`reserve`](PlacedVec::reserve): a fallback-allocator
    /// failure is handed back to the caller unmodified, and the vector is
    /// left exactly as it was.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), AllocErr> {
        let min_cap = self
            .len
            .checked_add(additional)
            .ok_or(AllocErr::CapacityOverflow)?;
        self.try_grow_to(min_cap)
    }

    /// Shrinks the capacity to the current element count.
    ///
    /// Note that the inline region cannot serve a second allocation while it
    /// is occupied, so calling this on an in-place vector moves the data to
    /// the fallback. Use [`put_in_place`](PlacedVec::put_in_place) to compact
    /// and come home in one step.
    pub fn shrink_to_fit(&mut self) {
        if self.cap > self.len {
            infallible(self.try_realloc(self.len));
        }
    }

    /// Grow-only capacity request; a no-op when `min_cap` already fits.
    #[inline]
    fn try_grow_to(&mut self, min_cap: usize) -> Result<(), AllocErr> {
        if min_cap > self.cap {
            self.try_realloc(min_cap)
        } else {
            Ok(())
        }
    }

    /// Amortized single-element growth.
    fn grow_one(&mut self) {
        let new_cap = self
            .cap
            .checked_add((self.cap >> 1) + 4)
            .ok_or(AllocErr::CapacityOverflow);
        let new_cap = infallible(new_cap);
        infallible(self.try_realloc(new_cap));
    }

    /// Moves the active storage to a fresh block of exactly `new_cap`
    /// elements (`new_cap >= len`).
    ///
    /// Both the acquisition and the release go through the strategy; the old
    /// block is released only after the elements have moved, so the
    /// descriptor's `is_used` gate keeps the two from ever sharing the
    /// inline region.
    fn try_realloc(&mut self, new_cap: usize) -> Result<(), AllocErr> {
        debug_assert!(new_cap >= self.len);
        if new_cap == self.cap {
            return Ok(());
        }
        let new_block = self.strategy.allocate(&mut self.place, new_cap)?;
        let dst = match new_block {
            Block::InPlace => self.place.as_mut_ptr(),
            Block::Fallback(ptr) => ptr.as_ptr(),
        };
        unsafe {
            ptr::copy_nonoverlapping(self.as_ptr(), dst, self.len);
            let old = mem::replace(&mut self.block, new_block);
            self.strategy.release(&mut self.place, old, self.cap);
        }
        self.cap = new_cap;
        Ok(())
    }
}

impl<T: Clone, const N: usize, A: BackingAlloc> PlacedVec<T, N, A> {
    /// Extends the vector by cloning all elements from the given slice.
    pub fn extend_from_slice(&mut self, other: &[T]) {
        self.reserve(other.len());
        for item in other {
            unsafe {
                ptr::write(self.as_mut_ptr().add(self.len), item.clone());
            }
            self.len += 1;
        }
    }
}

impl<T, const N: usize, A: BackingAlloc> Drop for PlacedVec<T, N, A> {
    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.as_mut_ptr(), self.len));
            self.strategy.release(&mut self.place, self.block, self.cap);
        }
    }
}

impl<T, const N: usize> Default for PlacedVec<T, N> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize, A: BackingAlloc + Clone> Clone for PlacedVec<T, N, A> {
    /// Deep copy with an independent inline region.
    ///
    /// The copy's storage strategy is bound to the copy's own descriptor, so
    /// the two vectors never alias inline storage: a source that is in place
    /// yields a copy that is independently in place.
    ///
    /// # Examples
    ///
    /// ```
    /// # use placedvec::{placedvec, PlacedVec};
    /// let vec: PlacedVec<i32, 5> = placedvec![1, 2, 3];
    /// let copy = vec.clone();
    ///
    /// assert!(copy.is_in_place());
    /// assert_ne!(vec.as_ptr(), copy.as_ptr());
    /// assert_eq!(vec, copy);
    /// ```
    fn clone(&self) -> Self {
        let mut vec = Self::with_capacity_in(self.len, self.strategy.fallback().clone());
        vec.extend_from_slice(self.as_slice());
        vec
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.extend_from_slice(source.as_slice());
    }
}

impl<T, const N: usize, A: BackingAlloc> Extend<T> for PlacedVec<T, N, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: 'a + Clone, const N: usize, A: BackingAlloc> Extend<&'a T> for PlacedVec<T, N, A> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item.clone());
        }
    }
}

impl<T, const N: usize> FromIterator<T> for PlacedVec<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<T, const N: usize, const P: usize> From<[T; P]> for PlacedVec<T, N> {
    #[inline]
    fn from(value: [T; P]) -> Self {
        Self::from_buf(value)
    }
}

impl<T: Clone, const N: usize> From<&[T]> for PlacedVec<T, N> {
    fn from(value: &[T]) -> Self {
        let mut vec = Self::with_capacity(value.len());
        vec.extend_from_slice(value);
        vec
    }
}

impl<T: Clone, const N: usize, const P: usize> From<&[T; P]> for PlacedVec<T, N> {
    #[inline]
    fn from(value: &[T; P]) -> Self {
        Self::from(value.as_slice())
    }
}

crate::utils::impl_common_traits!(PlacedVec<T, N, A>);

impl<T, U, const N: usize, A, B> PartialEq<PlacedVec<U, N, B>> for PlacedVec<T, N, A>
where
    T: PartialEq<U>,
    A: BackingAlloc,
    B: BackingAlloc,
{
    #[inline]
    fn eq(&self, other: &PlacedVec<U, N, B>) -> bool {
        PartialEq::eq(self.as_slice(), other.as_slice())
    }
}

/// An iterator that consumes a [`PlacedVec`] and yields its items by value.
///
/// # Examples
///
/// ```
/// # use placedvec::{placedvec, PlacedVec};
/// let vec: PlacedVec<&'static str, 3> = placedvec!["1", "2", "3"];
/// let mut iter = vec.into_iter();
///
/// assert_eq!(iter.next(), Some("1"));
/// let rest: Vec<&'static str> = iter.collect();
/// assert_eq!(rest, ["2", "3"]);
/// ```
pub struct IntoIter<T, const N: usize, A: BackingAlloc = Heap> {
    vec: PlacedVec<T, N, A>,
    index: usize,
}

impl<T, const N: usize, A: BackingAlloc> IntoIterator for PlacedVec<T, N, A> {
    type Item = T;
    type IntoIter = IntoIter<T, N, A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            vec: self,
            index: 0,
        }
    }
}

impl<T, const N: usize, A: BackingAlloc> Iterator for IntoIter<T, N, A> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.index < self.vec.len {
            let value = unsafe { ptr::read(self.vec.as_ptr().add(self.index)) };
            self.index += 1;
            Some(value)
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.vec.len - self.index;
        (remaining, Some(remaining))
    }
}

impl<T, const N: usize, A: BackingAlloc> DoubleEndedIterator for IntoIter<T, N, A> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.index < self.vec.len {
            self.vec.len -= 1;
            unsafe { Some(ptr::read(self.vec.as_ptr().add(self.vec.len))) }
        } else {
            None
        }
    }
}

impl<T, const N: usize, A: BackingAlloc> ExactSizeIterator for IntoIter<T, N, A> {
    #[inline]
    fn len(&self) -> usize {
        self.vec.len - self.index
    }
}

impl<T, const N: usize, A: BackingAlloc> FusedIterator for IntoIter<T, N, A> {}

impl<T: fmt::Debug, const N: usize, A: BackingAlloc> fmt::Debug for IntoIter<T, N, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter")
            .field(&&self.vec.as_slice()[self.index..])
            .finish()
    }
}

impl<T, const N: usize, A: BackingAlloc> Drop for IntoIter<T, N, A> {
    fn drop(&mut self) {
        // Drop the unconsumed elements; the vector's own drop then only
        // releases the block.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.vec.as_mut_ptr().add(self.index),
                self.vec.len - self.index,
            ));
            self.vec.len = 0;
        }
    }
}
