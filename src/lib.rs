//! # placedvec
//!
//! A growable vector with `N` elements of storage embedded in the vector
//! object itself.
//!
//! [`PlacedVec<T, N>`] keeps its elements inside its own footprint while the
//! capacity stays within `N`, so small vectors live wherever the vector
//! lives: on the stack, inside a struct, inside another collection's node.
//! Growth beyond `N` transparently switches to a fallback allocator (the
//! global heap by default, or any [`BackingAlloc`] you plug in), and
//! [`put_in_place`](PlacedVec::put_in_place) moves the data back into the
//! object once it fits again.
//!
//! Three things distinguish it from a plain small-vector type:
//!
//! - The inline region is managed as a real allocation with a checkout
//!   state, so "inline or fallback" is decided per storage request rather
//!   than hardwired into each method.
//! - The inline block carries no self-referential pointer; it is re-derived
//!   from the owning object on every access, so moving the vector is always
//!   sound.
//! - The round trip is explicit: [`is_in_place`](PlacedVec::is_in_place)
//!   tells you where the data is, [`size_in_place`](PlacedVec::size_in_place)
//!   how much fits, and [`put_in_place`](PlacedVec::put_in_place) brings it
//!   home.
//!
//! This crate is `no_std` (requires `alloc`).
//!
//! ## Example
//!
//! ```
//! use placedvec::{placedvec, PlacedVec};
//!
//! let mut vec: PlacedVec<i32, 4> = placedvec![1, 2, 3, 4];
//! assert!(vec.is_in_place());
//!
//! vec.push(5); // exceeds the inline capacity, moves to the heap
//! assert!(!vec.is_in_place());
//!
//! vec.truncate(2);
//! assert!(vec.put_in_place()); // fits again, comes back home
//! assert!(vec.is_in_place());
//! assert_eq!(vec, [1, 2]);
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std::io::Write` for `PlacedVec<u8, N, A>`.
//! - `serde`: `Serialize`/`Deserialize` via `serde_core`.
#![no_std]

extern crate alloc;

mod fallback;
mod place;
mod strategy;
mod utils;

pub mod placed_vec;

#[cfg(feature = "serde")]
mod serde;
#[cfg(feature = "std")]
mod std_io;

pub use fallback::{AllocErr, BackingAlloc, Heap};
pub use placed_vec::{IntoIter, PlacedVec};
