// SPDX-FileCopyrightText: 2024 Nils Jochem
// SPDX-License-Identifier: MPL-2.0
use std::ops::{Index, IndexMut};

/// An owning, growable buffer of base 10000 limbs in little endian order.
///
/// Unlike `Vec` the capacity is managed by hand: `push_back` doubles
/// (0 -> 1 -> 2 -> 4 ...), `reserve` grows to exactly the requested slot
/// count and nothing ever shrinks the allocation. Slots in `[len, capacity)`
/// hold unspecified values.
#[derive(Default)]
pub struct LimbBuf {
    len: usize,
    buf: Box<[u32]>,
}

impl LimbBuf {
    pub const fn len(&self) -> usize {
        self.len
    }
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// appends a limb, doubling the capacity when full
    pub fn push_back(&mut self, limb: u32) {
        if self.len == self.capacity() {
            self.grow_to(if self.capacity() == 0 {
                1
            } else {
                self.capacity() * 2
            });
        }
        self.buf[self.len] = limb;
        self.len += 1;
    }
    /// removes and returns the most significant limb
    ///
    /// # Panics
    /// when the buffer is empty
    pub fn pop_back(&mut self) -> u32 {
        assert!(self.len > 0, "pop_back on empty buffer");
        self.len -= 1;
        self.buf[self.len]
    }

    /// forgets all limbs, keeping the allocation
    pub fn clear(&mut self) {
        self.len = 0;
    }
    /// grows the storage to at least `cap` slots, never shrinks
    pub fn reserve(&mut self, cap: usize) {
        if cap > self.capacity() {
            self.grow_to(cap);
        }
    }
    /// grows with zero-fill or truncates without deallocating
    pub fn resize(&mut self, new_len: usize) {
        if self.len < new_len {
            self.reserve(new_len);
            // the tail may hold stale limbs from an earlier truncation
            self.buf[self.len..new_len].fill(0);
        }
        self.len = new_len;
    }

    fn grow_to(&mut self, cap: usize) {
        let mut buf = vec![0; cap].into_boxed_slice();
        buf[..self.len].copy_from_slice(self.as_slice());
        self.buf = buf;
    }

    /// # Panics
    /// when the buffer is empty
    pub fn back(&self) -> u32 {
        self.as_slice()[self.len - 1]
    }
    /// # Panics
    /// when the buffer is empty
    pub fn back_mut(&mut self) -> &mut u32 {
        &mut self.buf[self.len - 1]
    }

    /// drops most significant zero limbs, returns whether nothing is left
    pub fn truncate_leading_zeros(&mut self) -> bool {
        while !self.is_empty() && self.back() == 0 {
            self.pop_back();
        }
        self.is_empty()
    }

    /// moves the limbs out, leaving `self` valid-empty with capacity 0
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.buf[..self.len]
    }
    pub fn as_mut_slice(&mut self) -> &mut [u32] {
        &mut self.buf[..self.len]
    }
    pub fn iter(&self) -> impl ExactSizeIterator<Item = u32> + DoubleEndedIterator + '_ {
        self.as_slice().iter().copied()
    }
    pub fn view(&self) -> LimbSlice<'_> {
        LimbSlice::new(self.as_slice())
    }
}

impl Clone for LimbBuf {
    fn clone(&self) -> Self {
        let mut buf = vec![0; self.capacity()].into_boxed_slice();
        buf[..self.len].copy_from_slice(self.as_slice());
        Self { len: self.len, buf }
    }
}
impl std::fmt::Debug for LimbBuf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
impl PartialEq for LimbBuf {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl Eq for LimbBuf {}
impl std::hash::Hash for LimbBuf {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl Index<usize> for LimbBuf {
    type Output = u32;

    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}
impl IndexMut<usize> for LimbBuf {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl From<&[u32]> for LimbBuf {
    fn from(limbs: &[u32]) -> Self {
        Self {
            len: limbs.len(),
            buf: Box::from(limbs),
        }
    }
}
impl<const N: usize> From<[u32; N]> for LimbBuf {
    fn from(limbs: [u32; N]) -> Self {
        Self::from(limbs.as_slice())
    }
}
impl From<LimbSlice<'_>> for LimbBuf {
    fn from(view: LimbSlice<'_>) -> Self {
        Self::from(view.as_slice())
    }
}
impl FromIterator<u32> for LimbBuf {
    fn from_iter<T: IntoIterator<Item = u32>>(iter: T) -> Self {
        let buf: Box<[u32]> = iter.into_iter().collect();
        Self {
            len: buf.len(),
            buf,
        }
    }
}

/// A non-owning window over a contiguous limb range.
///
/// Indexing past the end reads as zero, so a short operand behaves like one
/// padded with zero limbs; the arithmetic kernels lean on that.
#[derive(Debug, Clone, Copy, Default)]
pub struct LimbSlice<'a> {
    limbs: &'a [u32],
}

impl<'a> LimbSlice<'a> {
    pub const fn new(limbs: &'a [u32]) -> Self {
        Self { limbs }
    }

    pub const fn len(self) -> usize {
        self.limbs.len()
    }
    pub const fn is_empty(self) -> bool {
        self.limbs.is_empty()
    }

    /// the limb at `index`, or 0 past the end
    pub fn get(self, index: usize) -> u32 {
        self.limbs.get(index).copied().unwrap_or(0)
    }

    /// splits at the midpoint into (low, high), the low half taking the
    /// extra limb on odd lengths
    pub fn split(self) -> (Self, Self) {
        self.split_at(self.len().div_ceil(2))
    }
    /// splits at `len`, clamped to the view's length
    pub fn split_at(self, len: usize) -> (Self, Self) {
        let (low, high) = self.limbs.split_at(self.len().min(len));
        (Self::new(low), Self::new(high))
    }

    pub fn iter(self) -> impl ExactSizeIterator<Item = u32> + DoubleEndedIterator + 'a {
        self.limbs.iter().copied()
    }
    pub const fn as_slice(self) -> &'a [u32] {
        self.limbs
    }
}

impl<'a> From<&'a LimbBuf> for LimbSlice<'a> {
    fn from(buf: &'a LimbBuf) -> Self {
        buf.view()
    }
}
