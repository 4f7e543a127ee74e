// SPDX-FileCopyrightText: 2024 Nils Jochem
// SPDX-License-Identifier: MPL-2.0
//! magnitude-only arithmetic over limb views
//!
//! All kernels are pure functions over [`LimbSlice`]s, returning a freshly
//! owned [`LimbBuf`] sized for the worst case. Sign handling and final
//! normalization stay with the caller.
#![allow(clippy::wildcard_imports)]
use super::*;
use crate::limb_buf::{LimbBuf, LimbSlice};

pub mod add {
    use super::*;
    use itertools::Itertools;

    /// calculates `lhs + rhs` with carry propagation in base [`BigInt::BASE`]
    pub fn limbs(lhs: LimbSlice<'_>, rhs: LimbSlice<'_>) -> LimbBuf {
        let mut res = LimbBuf::default();
        res.reserve(lhs.len().max(rhs.len()) + 1);

        let mut carry = 0;
        for elem in lhs.iter().zip_longest(rhs.iter()) {
            let sum = elem.reduce(|lhs, rhs| lhs + rhs) + carry;
            carry = u32::from(sum >= BigInt::BASE);
            res.push_back(sum - carry * BigInt::BASE);
        }
        if carry != 0 {
            res.push_back(carry);
        }
        res
    }

    /// calculates `res[offset..] += addend`, rippling the carry into `res`
    ///
    /// `res` needs to be long enough to absorb the final carry; used to fold
    /// the karatsuba middle term into the pre-sized result buffer.
    pub(super) fn assign_at_offset(res: &mut LimbBuf, addend: LimbSlice<'_>, offset: usize) {
        let mut carry = 0;
        let mut i = 0;
        while i < addend.len() || carry != 0 {
            let idx = offset + i;
            let sum = res[idx] + addend.get(i) + carry;
            carry = u32::from(sum >= BigInt::BASE);
            res[idx] = sum - carry * BigInt::BASE;
            i += 1;
        }
    }
}

pub mod sub {
    use super::*;

    /// calculates `lhs - rhs`, `lhs` needs to be the bigger number
    ///
    /// The result is sized `lhs.len() + 1` and may keep leading zero limbs,
    /// stripping is left to the caller. `rhs` may carry leading zero limbs of
    /// its own (the karatsuba middle term relies on that).
    pub fn limbs(lhs: LimbSlice<'_>, rhs: LimbSlice<'_>) -> LimbBuf {
        let mut res = LimbBuf::from(lhs);
        res.resize(lhs.len() + 1);

        let mut borrow = 0;
        let mut i = 0;
        while i < rhs.len() || borrow != 0 {
            // explicit compare instead of wraparound on the unsigned limb
            let take = rhs.get(i) + borrow;
            if res[i] < take {
                res[i] += BigInt::BASE - take;
                borrow = 1;
            } else {
                res[i] -= take;
                borrow = 0;
            }
            i += 1;
        }
        debug_assert_eq!(borrow, 0, "lhs was smaller than rhs");
        res
    }
}

pub mod mul {
    use super::*;

    /// result sizes below this go through the schoolbook loop
    pub const KARATSUBA_CUTOFF: usize = 8;

    /// calculates `lhs * rhs`, dispatching on the result size
    pub fn limbs(lhs: LimbSlice<'_>, rhs: LimbSlice<'_>) -> LimbBuf {
        if lhs.len() + rhs.len() + 1 < KARATSUBA_CUTOFF {
            naive(lhs, rhs)
        } else {
            karatsuba(lhs, rhs)
        }
    }

    /// schoolbook double loop
    ///
    /// kept public so tests can pin both paths against each other
    pub fn naive(lhs: LimbSlice<'_>, rhs: LimbSlice<'_>) -> LimbBuf {
        let mut res = LimbBuf::default();
        res.resize(lhs.len() + rhs.len() + 1);

        for i in 0..lhs.len() {
            let mut carry = 0;
            let mut j = 0;
            while j < rhs.len() || carry != 0 {
                // bounded by 9999 + 9999 * 9999 + 9999, far from u32::MAX
                let curr = res[i + j] + lhs.get(i) * rhs.get(j) + carry;
                carry = curr / BigInt::BASE;
                res[i + j] = curr - carry * BigInt::BASE;
                j += 1;
            }
        }
        res.truncate_leading_zeros();
        res
    }

    fn karatsuba<'a>(mut lhs: LimbSlice<'a>, mut rhs: LimbSlice<'a>) -> LimbBuf {
        if lhs.len() < rhs.len() {
            std::mem::swap(&mut lhs, &mut rhs);
        }
        let (lhs_low, lhs_high) = lhs.split();
        // rhs splits at lhs' low length, not at its own midpoint; the offsets
        // below only line up when both lows share one boundary
        let (rhs_low, rhs_high) = rhs.split_at(lhs_low.len());

        let low = limbs(lhs_low, rhs_low);
        let high = limbs(lhs_high, rhs_high);
        let cross = limbs(
            add::limbs(lhs_low, lhs_high).view(),
            add::limbs(rhs_low, rhs_high).view(),
        );
        let mut mid = sub::limbs(cross.view(), add::limbs(low.view(), high.view()).view());
        // the difference keeps its zero tail; strip it so the fold below
        // never reaches past the end of the result buffer
        mid.truncate_leading_zeros();

        let mut res = LimbBuf::default();
        res.resize(lhs.len() + rhs.len() + 1);
        res.as_mut_slice()[..low.len()].copy_from_slice(low.as_slice());
        let high_offset = lhs_low.len() + rhs_low.len();
        res.as_mut_slice()[high_offset..high_offset + high.len()].copy_from_slice(high.as_slice());
        add::assign_at_offset(&mut res, mid.view(), lhs_low.len());

        res.truncate_leading_zeros();
        res
    }
}
