// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A priority queue whose ordering polarity can be switched at runtime.
//!
//! A `PolarityHeap` is a binary heap stored in a `Vec` that surfaces either its smallest
//! ([`Polarity::MinFirst`]) or its greatest ([`Polarity::MaxFirst`]) item. Calling
//! [`toggle`](struct.PolarityHeap.html#method.toggle) flips the polarity and rebuilds the heap in
//! place, keeping every stored item. Besides the usual push/peek/pop, items can be removed or
//! replaced anywhere in the heap.
//!
//! Insertion has amortized `O(log n)` time complexity. Popping the top item is `O(log n)` and
//! retrieving it is `O(1)`. Toggling is `O(n)`. Removing or replacing an arbitrary item locates it
//! with a linear scan, so those operations are `O(n)`.
//!
//! # Examples
//!
//! ```
//! use polarity_heap::{PolarityHeap, Polarity};
//!
//! let mut heap = PolarityHeap::<i32>::with_capacity_and_polarity(3, Polarity::MinFirst);
//! heap.extend(vec![3, 1, 5, 4, 2]);
//! assert_eq!(heap.top(), Ok(&1));
//!
//! heap.toggle();
//! assert_eq!(heap.polarity(), Polarity::MaxFirst);
//! assert_eq!(heap.pop(), Ok(5));
//! assert_eq!(heap.pop(), Ok(4));
//! ```

extern crate compare;
extern crate thiserror;
#[cfg(test)] extern crate rand;

use std::cmp::{self, Ordering};
use std::fmt::{self, Debug, Display};
use std::iter;
use std::mem;
use std::ops::{Deref, DerefMut};
use std::slice;
use std::vec;

use compare::{Compare, Natural, natural};
use thiserror::Error;

// The heap is stored as a complete binary tree laid out level by level in
// a Vec. The children of the node at offset `i` live at `2i + 1` and
// `2i + 2`, its parent at `(i - 1) / 2`:
//
//            0
//          /   \
//         1     2
//        / \   / \
//       3   4 5   6
//
// All comparisons go through a `PriorityOrder`, for which `Greater` means
// "has higher priority". A parent never has lower priority than its
// children.

fn parent(x: usize) -> usize {
    debug_assert!(x > 0);
    (x - 1) / 2
}

/// Moves the item at `pos` toward the root while it has higher priority than its parent.
///
/// Returns the final position of the item.
fn sift_up<T, C: Compare<T>>(v: &mut [T], mut pos: usize, cmp: &C) -> usize {
    while pos > 0 {
        let par = parent(pos);
        if !cmp.compares_gt(&v[pos], &v[par]) { break; }
        v.swap(pos, par);
        pos = par;
    }
    pos
}

/// Moves the item at `pos` toward the leaves while one of its children dominates it.
///
/// On ties between the two children the left one is preferred.
fn sift_down<T, C: Compare<T>>(v: &mut [T], mut pos: usize, cmp: &C) -> usize {
    loop {
        let left = 2 * pos + 1;
        let right = left + 1;
        let mut dominant = pos;
        if left < v.len() && cmp.compares_gt(&v[left], &v[dominant]) { dominant = left; }
        if right < v.len() && cmp.compares_gt(&v[right], &v[dominant]) { dominant = right; }
        if dominant == pos { return pos; }
        v.swap(pos, dominant);
        pos = dominant;
    }
}

/// Restores the item at `pos` after it has been overwritten with an unrelated item.
///
/// The new item may belong above or below `pos`, so try upward first.
fn resift<T, C: Compare<T>>(v: &mut [T], pos: usize, cmp: &C) {
    if sift_up(v, pos, cmp) == pos {
        sift_down(v, pos, cmp);
    }
}

/// Bottom-up heap construction: sift every internal node down, last parent first.
fn heapify<T, C: Compare<T>>(v: &mut [T], cmp: &C) {
    for pos in (0..v.len() / 2).rev() {
        sift_down(v, pos, cmp);
    }
}

/// Whether a heap surfaces its smallest or its greatest item first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// The smallest item has the highest priority.
    MinFirst,
    /// The greatest item has the highest priority.
    MaxFirst,
}

impl Polarity {
    /// Returns the opposite polarity.
    pub fn toggled(self) -> Polarity {
        match self {
            Polarity::MinFirst => Polarity::MaxFirst,
            Polarity::MaxFirst => Polarity::MinFirst,
        }
    }
}

impl Default for Polarity {
    fn default() -> Polarity { Polarity::MinFirst }
}

impl Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Polarity::MinFirst => "Min",
            Polarity::MaxFirst => "Max",
        })
    }
}

/// A priority order derived from a base order and a polarity.
///
/// `compare(a, b)` returns `Greater` when `a` has higher priority than `b`. Under
/// `MaxFirst` this is the base order itself, under `MinFirst` its reverse. Switching polarity
/// re-binds the strategy without touching the base order.
#[derive(Clone, Copy, Debug, Default)]
pub struct PriorityOrder<C> {
    order: C,
    polarity: Polarity,
}

impl<C> PriorityOrder<C> {
    /// Returns the priority order for `order` under `polarity`.
    pub fn new(order: C, polarity: Polarity) -> PriorityOrder<C> {
        PriorityOrder { order: order, polarity: polarity }
    }

    /// Returns the polarity this order is bound to.
    pub fn polarity(&self) -> Polarity { self.polarity }

    /// Returns the base order.
    pub fn base(&self) -> &C { &self.order }

    fn toggle(&mut self) {
        self.polarity = self.polarity.toggled();
    }
}

impl<T: ?Sized, C: Compare<T>> Compare<T> for PriorityOrder<C> {
    fn compare(&self, l: &T, r: &T) -> Ordering {
        match self.polarity {
            Polarity::MaxFirst => self.order.compare(l, r),
            Polarity::MinFirst => self.order.compare(r, l),
        }
    }
}

/// The ways a heap operation can fail.
///
/// A failed operation leaves the heap untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum HeapError {
    /// The operation needs at least one item but the heap is empty.
    #[error("heap is empty")]
    EmptyHeap,
    /// No stored item is equal to the one asked for.
    #[error("element not found in heap")]
    ElementNotFound,
}

/// A key bound to an opaque payload.
///
/// Ordering and equality only look at `key`, so a heap of `Keyed` items is ordered by key and
/// the payload can be swapped out with
/// [`replace_value`](struct.PolarityHeap.html#method.replace_value) without disturbing the
/// heap.
#[derive(Clone, Copy, Debug)]
pub struct Keyed<K, V> {
    /// The part the heap is ordered by.
    pub key: K,
    /// The payload carried along with the key.
    pub value: V,
}

impl<K, V> Keyed<K, V> {
    /// Binds `value` to `key`.
    pub fn new(key: K, value: V) -> Keyed<K, V> {
        Keyed { key: key, value: value }
    }
}

impl<K: PartialEq, V> PartialEq for Keyed<K, V> {
    fn eq(&self, other: &Self) -> bool { self.key == other.key }
}

impl<K: Eq, V> Eq for Keyed<K, V> {}

impl<K: PartialOrd, V> PartialOrd for Keyed<K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { self.key.partial_cmp(&other.key) }
}

impl<K: Ord, V> Ord for Keyed<K, V> {
    fn cmp(&self, other: &Self) -> Ordering { self.key.cmp(&other.key) }
}

/// A priority queue with a switchable min/max polarity, implemented with a binary heap.
///
/// It is a logic error for an item to be modified in such a way that the
/// item's ordering relative to any other item, as determined by the heap's
/// comparator, changes while it is in the heap. This is normally only
/// possible through `Cell`, `RefCell`, global state, I/O, or unsafe code.
#[derive(Clone)]
pub struct PolarityHeap<T, C: Compare<T> = Natural<T>> {
    data: Vec<T>,
    cmp: PriorityOrder<C>,
}

impl<T, C: Compare<T> + Default> Default for PolarityHeap<T, C> {
    #[inline]
    fn default() -> PolarityHeap<T, C> {
        Self::with_comparator(Polarity::default(), C::default())
    }
}

impl<T: Ord> PolarityHeap<T> {
    /// Returns an empty min-first heap ordered according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// use polarity_heap::{PolarityHeap, Polarity};
    ///
    /// let heap = PolarityHeap::<u32>::new();
    /// assert!(heap.is_empty());
    /// assert_eq!(heap.polarity(), Polarity::MinFirst);
    /// ```
    pub fn new() -> PolarityHeap<T> { Self::with_polarity(Polarity::default()) }

    /// Returns an empty min-first heap with the given capacity.
    pub fn with_capacity(capacity: usize) -> PolarityHeap<T> {
        Self::with_capacity_and_polarity(capacity, Polarity::default())
    }

    /// Returns an empty heap with the given polarity, ordered according to the natural order
    /// of its items.
    pub fn with_polarity(polarity: Polarity) -> PolarityHeap<T> {
        Self::with_comparator(polarity, natural())
    }

    /// Returns an empty heap with the given capacity and polarity, ordered according to the
    /// natural order of its items.
    ///
    /// The heap will be able to hold `capacity` items without reallocating. Once full, each
    /// insertion that needs room doubles the capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use polarity_heap::{PolarityHeap, Polarity};
    ///
    /// let mut heap = PolarityHeap::with_capacity_and_polarity(2, Polarity::MaxFirst);
    /// assert!(heap.capacity() >= 2);
    ///
    /// heap.insert(1);
    /// heap.insert(3);
    /// heap.insert(2);
    /// assert!(heap.capacity() >= 4);
    /// assert_eq!(heap.top(), Ok(&3));
    /// ```
    pub fn with_capacity_and_polarity(capacity: usize, polarity: Polarity) -> PolarityHeap<T> {
        Self::with_capacity_and_comparator(capacity, polarity, natural())
    }
}

impl<T: Ord> From<Vec<T>> for PolarityHeap<T> {
    /// Returns a min-first heap containing all the items of the given vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use polarity_heap::PolarityHeap;
    ///
    /// let heap = PolarityHeap::from(vec![5, 1, 6, 4]);
    /// assert_eq!(heap.len(), 4);
    /// assert_eq!(heap.top(), Ok(&1));
    /// ```
    fn from(vec: Vec<T>) -> PolarityHeap<T> {
        Self::from_vec_and_comparator(vec, Polarity::default(), natural())
    }
}

impl<T, C: Compare<T>> PolarityHeap<T, C> {
    /// Returns an empty heap with the given polarity over the given base order.
    ///
    /// # Examples
    ///
    /// ```
    /// use polarity_heap::{PolarityHeap, Polarity};
    ///
    /// // Order strings by length.
    /// let mut heap = PolarityHeap::with_comparator(
    ///     Polarity::MaxFirst,
    ///     |l: &&str, r: &&str| l.len().cmp(&r.len()),
    /// );
    /// heap.insert("ab");
    /// heap.insert("abcd");
    /// heap.insert("a");
    /// assert_eq!(heap.pop(), Ok("abcd"));
    /// ```
    pub fn with_comparator(polarity: Polarity, cmp: C) -> PolarityHeap<T, C> {
        PolarityHeap { data: vec![], cmp: PriorityOrder::new(cmp, polarity) }
    }

    /// Returns an empty heap with the given capacity and polarity over the given base order.
    pub fn with_capacity_and_comparator(capacity: usize, polarity: Polarity, cmp: C)
                                        -> PolarityHeap<T, C> {
        PolarityHeap {
            data: Vec::with_capacity(capacity),
            cmp: PriorityOrder::new(cmp, polarity),
        }
    }

    /// Returns a heap containing all the items of the given vector, with the given polarity
    /// over the given base order.
    pub fn from_vec_and_comparator(mut vec: Vec<T>, polarity: Polarity, cmp: C)
                                   -> PolarityHeap<T, C> {
        let cmp = PriorityOrder::new(cmp, polarity);
        heapify(&mut vec, &cmp);
        let heap = PolarityHeap { data: vec, cmp: cmp };
        debug_assert!(heap.is_valid());
        heap
    }

    /// Returns the current polarity.
    pub fn polarity(&self) -> Polarity { self.cmp.polarity() }

    /// Returns the priority order the heap is currently arranged by.
    pub fn order(&self) -> &PriorityOrder<C> { &self.cmp }

    /// Returns an iterator visiting all items in the heap in array order.
    pub fn iter(&self) -> Iter<T> {
        debug_assert!(self.is_valid());
        Iter(self.data.iter())
    }

    /// Returns a read-only view of the items in array order, which is not sorted order.
    pub fn as_slice(&self) -> &[T] { &self.data }

    /// Returns a copy of the items in array order, which is not sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use polarity_heap::PolarityHeap;
    ///
    /// let mut heap = PolarityHeap::new();
    /// heap.extend(vec![3, 1, 2]);
    /// assert_eq!(heap.to_vec(), vec![1, 3, 2]);
    /// ```
    pub fn to_vec(&self) -> Vec<T> where T: Clone { self.data.clone() }

    /// Returns a reference to the item with the highest priority.
    ///
    /// Fails with `EmptyHeap` if the heap is empty.
    pub fn top(&self) -> Result<&T, HeapError> {
        debug_assert!(self.is_valid());
        self.data.first().ok_or(HeapError::EmptyHeap)
    }

    /// Returns a guard giving mutable access to the item with the highest priority.
    ///
    /// The heap is repaired when the guard is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use polarity_heap::PolarityHeap;
    ///
    /// let mut heap = PolarityHeap::from(vec![2, 1, 3]);
    /// *heap.top_mut().unwrap() = 5;
    /// assert_eq!(heap.top(), Ok(&2));
    /// ```
    pub fn top_mut(&mut self) -> Result<TopMut<T, C>, HeapError> {
        debug_assert!(self.is_valid());
        if self.data.is_empty() { return Err(HeapError::EmptyHeap); }
        Ok(TopMut { heap: self, sifted: false })
    }

    /// Returns the number of items the heap can hold without reallocation.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves capacity for at least `additional` more items to be inserted into the heap.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    fn grow_if_full(&mut self) {
        let capacity = self.data.capacity();
        if self.data.len() == capacity {
            self.data.reserve_exact(cmp::max(capacity, 1));
        }
    }

    /// Inserts an item into the heap.
    pub fn insert(&mut self, item: T) {
        debug_assert!(self.is_valid());
        self.grow_if_full();
        self.data.push(item);
        let last = self.data.len() - 1;
        sift_up(&mut self.data, last, &self.cmp);
        debug_assert!(self.is_valid());
    }

    /// Removes the item with the highest priority from the heap and returns it.
    ///
    /// Fails with `EmptyHeap` if the heap is empty.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        debug_assert!(self.is_valid());
        if self.data.is_empty() { return Err(HeapError::EmptyHeap); }
        let top = self.data.swap_remove(0);
        sift_down(&mut self.data, 0, &self.cmp);
        debug_assert!(self.is_valid());
        Ok(top)
    }

    /// Flips the polarity and rearranges the heap for it.
    ///
    /// The set of stored items does not change. Toggling an empty heap only flips the polarity.
    ///
    /// # Examples
    ///
    /// ```
    /// use polarity_heap::{PolarityHeap, Polarity};
    ///
    /// let mut heap = PolarityHeap::from(vec![3, 1, 5, 4, 2]);
    /// heap.toggle();
    /// assert_eq!(heap.polarity(), Polarity::MaxFirst);
    /// assert_eq!(heap.into_sorted_vec(), vec![5, 4, 3, 2, 1]);
    /// ```
    pub fn toggle(&mut self) {
        self.cmp.toggle();
        heapify(&mut self.data, &self.cmp);
        debug_assert!(self.is_valid());
    }

    /// Consumes the heap and returns its items as a vector in array order.
    pub fn into_vec(self) -> Vec<T> { self.data }

    /// Consumes the heap and returns its items in the order `pop` would yield them.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut vec = Vec::with_capacity(self.data.len());
        while let Ok(item) = self.pop() {
            vec.push(item);
        }
        vec
    }

    /// Returns the number of items in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap contains no items.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Checks if the heap is valid.
    ///
    /// The heap is valid if no item has higher priority than its parent under the current
    /// polarity.
    fn is_valid(&self) -> bool {
        (1..self.data.len()).all(|i| !self.cmp.compares_gt(&self.data[i], &self.data[parent(i)]))
    }
}

impl<T: PartialEq, C: Compare<T>> PolarityHeap<T, C> {
    fn position(&self, item: &T) -> Option<usize> {
        self.data.iter().position(|x| x == item)
    }

    /// Returns `true` if an item equal to `item` is stored in the heap.
    pub fn contains(&self, item: &T) -> bool {
        self.position(item).is_some()
    }

    /// Removes the first stored item, in array order, that is equal to `item` and returns it.
    ///
    /// Fails with `EmptyHeap` if the heap is empty and with `ElementNotFound` if no stored
    /// item is equal to `item`. The lookup is a linear scan.
    ///
    /// # Examples
    ///
    /// ```
    /// use polarity_heap::{PolarityHeap, HeapError};
    ///
    /// let mut heap = PolarityHeap::from(vec![4, 2, 8]);
    /// assert_eq!(heap.remove(&4), Ok(4));
    /// assert_eq!(heap.remove(&4), Err(HeapError::ElementNotFound));
    /// assert_eq!(heap.len(), 2);
    /// ```
    pub fn remove(&mut self, item: &T) -> Result<T, HeapError> {
        debug_assert!(self.is_valid());
        if self.data.is_empty() { return Err(HeapError::EmptyHeap); }
        let pos = self.position(item).ok_or(HeapError::ElementNotFound)?;
        let removed = self.data.swap_remove(pos);
        if pos < self.data.len() {
            resift(&mut self.data, pos, &self.cmp);
        }
        debug_assert!(self.is_valid());
        Ok(removed)
    }

    /// Replaces the first stored item, in array order, that is equal to `old` with `new`.
    ///
    /// Returns the replaced item, or `None` if no stored item is equal to `old`, in which case
    /// the heap is left as it was and `new` is dropped. Fails with `EmptyHeap` if the heap is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use polarity_heap::PolarityHeap;
    ///
    /// let mut heap = PolarityHeap::from(vec![4, 2, 8]);
    /// assert_eq!(heap.replace_key(&8, 1), Ok(Some(8)));
    /// assert_eq!(heap.top(), Ok(&1));
    /// assert_eq!(heap.replace_key(&8, 0), Ok(None));
    /// assert_eq!(heap.top(), Ok(&1));
    /// ```
    pub fn replace_key(&mut self, old: &T, new: T) -> Result<Option<T>, HeapError> {
        debug_assert!(self.is_valid());
        if self.data.is_empty() { return Err(HeapError::EmptyHeap); }
        let pos = match self.position(old) {
            Some(pos) => pos,
            None => return Ok(None),
        };
        let promoted = self.cmp.compares_gt(&new, &self.data[pos]);
        let previous = mem::replace(&mut self.data[pos], new);
        if promoted {
            sift_up(&mut self.data, pos, &self.cmp);
        } else {
            sift_down(&mut self.data, pos, &self.cmp);
        }
        debug_assert!(self.is_valid());
        Ok(Some(previous))
    }
}

impl<K: PartialEq, V, C: Compare<Keyed<K, V>>> PolarityHeap<Keyed<K, V>, C> {
    /// Replaces the payload of the first stored entry, in array order, whose key equals `key`.
    ///
    /// Returns the previous payload, or `None` if no entry has that key. The key is kept, so a
    /// key-only order is not affected; an order that also reads the payload gets the entry
    /// sifted back into place. Fails with `EmptyHeap` if the heap is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use polarity_heap::{Keyed, PolarityHeap};
    ///
    /// let mut heap = PolarityHeap::new();
    /// heap.insert(Keyed::new(2, "two"));
    /// heap.insert(Keyed::new(1, "one"));
    ///
    /// assert_eq!(heap.replace_value(&2, "deux"), Ok(Some("two")));
    /// assert_eq!(heap.replace_value(&7, "sept"), Ok(None));
    /// assert_eq!(heap.pop().map(|e| e.value), Ok("one"));
    /// assert_eq!(heap.pop().map(|e| e.value), Ok("deux"));
    /// ```
    pub fn replace_value(&mut self, key: &K, value: V) -> Result<Option<V>, HeapError> {
        debug_assert!(self.is_valid());
        if self.data.is_empty() { return Err(HeapError::EmptyHeap); }
        let pos = match self.data.iter().position(|entry| entry.key == *key) {
            Some(pos) => pos,
            None => return Ok(None),
        };
        let previous = mem::replace(&mut self.data[pos].value, value);
        resift(&mut self.data, pos, &self.cmp);
        debug_assert!(self.is_valid());
        Ok(Some(previous))
    }
}

impl<T: Debug, C: Compare<T>> Debug for PolarityHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T, C: Compare<T> + Default> iter::FromIterator<T> for PolarityHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> PolarityHeap<T, C> {
        PolarityHeap::from_vec_and_comparator(iter.into_iter().collect(),
                                              Polarity::default(),
                                              C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for PolarityHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.insert(elem);
        }
    }
}

impl<'a, T: 'a + Copy, C: Compare<T>> Extend<&'a T> for PolarityHeap<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().map(|&item| item));
    }
}

/// An iterator over a `PolarityHeap` in array order.
///
/// Acquire through [`PolarityHeap::iter`](struct.PolarityHeap.html#method.iter).
pub struct Iter<'a, T: 'a>(slice::Iter<'a, T>);

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Iter<'a, T> { Iter(self.0.clone()) }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    #[inline] fn next(&mut self) -> Option<&'a T> { self.0.next() }
    #[inline] fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> { self.0.next_back() }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// A consuming iterator over a `PolarityHeap` in array order.
///
/// Acquire through [`IntoIterator::into_iter`](
/// https://doc.rust-lang.org/stable/std/iter/trait.IntoIterator.html#tymethod.into_iter).
pub struct IntoIter<T>(vec::IntoIter<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> { self.0.next_back() }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T, C: Compare<T>> IntoIterator for PolarityHeap<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> IntoIter<T> { IntoIter(self.data.into_iter()) }
}

impl<'a, T, C: Compare<T>> IntoIterator for &'a PolarityHeap<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

/// Mutable access to the top item of a `PolarityHeap`.
///
/// Acquire through [`PolarityHeap::top_mut`](struct.PolarityHeap.html#method.top_mut). The
/// item is sifted back into place when the guard is dropped.
pub struct TopMut<'a, T: 'a, C: 'a + Compare<T> = Natural<T>> {
    heap: &'a mut PolarityHeap<T, C>,
    sifted: bool,
}

impl<'a, T: 'a, C: Compare<T>> Drop for TopMut<'a, T, C> {
    fn drop(&mut self) {
        if !self.sifted {
            sift_down(&mut self.heap.data, 0, &self.heap.cmp);
        }
    }
}

impl<'a, T: 'a, C: Compare<T>> Deref for TopMut<'a, T, C> {
    type Target = T;
    fn deref(&self) -> &T { &self.heap.data[0] }
}

impl<'a, T: 'a, C: Compare<T>> DerefMut for TopMut<'a, T, C> {
    fn deref_mut(&mut self) -> &mut T { &mut self.heap.data[0] }
}

impl<'a, T: 'a, C: Compare<T>> TopMut<'a, T, C> {
    /// Removes the top item from the heap and returns it.
    pub fn pop(mut self) -> T {
        let top = self.heap.data.swap_remove(0);
        sift_down(&mut self.heap.data, 0, &self.heap.cmp);
        self.sifted = true;
        top
    }
}
