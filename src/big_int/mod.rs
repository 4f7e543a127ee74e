// SPDX-FileCopyrightText: 2024 Nils Jochem
// SPDX-License-Identifier: MPL-2.0
//! a signed arbitrary precision integer stored as base 10000 limbs
use std::{
    cmp::Ordering,
    io::{BufRead, Seek, SeekFrom},
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use crate::limb_buf::LimbBuf;

pub mod math_algos;

#[cfg(test)]
mod tests;

/// an explicit sign for constructing numbers, zero magnitudes collapse to
/// [`SigNum::Zero`] on normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    Positive,
}
impl From<Sign> for SigNum {
    fn from(value: Sign) -> Self {
        match value {
            Sign::Negative => Self::Negative,
            Sign::Positive => Self::Positive,
        }
    }
}
impl From<SigNum> for Sign {
    fn from(value: SigNum) -> Self {
        match value {
            SigNum::Negative => Self::Negative,
            SigNum::Zero | SigNum::Positive => Self::Positive,
        }
    }
}

/// the sign of a number, ordered `Negative < Zero < Positive`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum SigNum {
    Negative,
    #[default]
    Zero,
    Positive,
}
impl SigNum {
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::Negative)
    }
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::Positive)
    }
    pub const fn is_zero(self) -> bool {
        matches!(self, Self::Zero)
    }
    #[must_use]
    pub const fn negate(self) -> Self {
        match self {
            Self::Negative => Self::Positive,
            Self::Zero => Self::Zero,
            Self::Positive => Self::Negative,
        }
    }
    #[must_use]
    pub const fn const_mul(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Zero, _) | (_, Self::Zero) => Self::Zero,
            (Self::Negative, Self::Negative) | (Self::Positive, Self::Positive) => Self::Positive,
            _ => Self::Negative,
        }
    }
    /// whether the signs differ, counting zero as positive
    pub const fn is_different(self, other: Self) -> bool {
        self.is_negative() != other.is_negative()
    }
}
impl Neg for SigNum {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}
impl Mul for SigNum {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.const_mul(rhs)
    }
}
impl MulAssign for SigNum {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// the error when failing to parse a [`BigInt`] from a string
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ParseBigIntError {
    #[display("unknown digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },
    #[display("cannot parse a number from an empty string")]
    Empty,
}
impl std::error::Error for ParseBigIntError {}

/// the error when failing to extract a [`BigInt`] from a reader
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum ReadError {
    /// the reader held no digits at the current position; it was rewound
    #[display("no digits to read")]
    NoDigits,
    #[display("{_0}")]
    #[from]
    Io(std::io::Error),
}
impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NoDigits => None,
            Self::Io(err) => Some(err),
        }
    }
}

/// A signed arbitrary precision integer.
///
/// The magnitude lives in a [`LimbBuf`] of base [`Self::BASE`] limbs in
/// little endian order. Canonical zero is [`SigNum::Zero`] with an empty
/// buffer and every constructor normalizes to that, so `-0` cannot be
/// observed.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BigInt {
    /// the sign of the number, `Zero` <=> `limbs.is_empty()`
    signum: SigNum,
    /// the magnitude in LE order, no leading zero limbs
    limbs: LimbBuf,
}

impl std::fmt::Debug for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BigInt {{ {} {:?} }}",
            match self.signum {
                SigNum::Negative => "-",
                SigNum::Zero => "",
                SigNum::Positive => "+",
            },
            self.limbs
        )
    }
}
impl std::fmt::Display for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        if self.is_negative() {
            write!(f, "-")?;
        }
        // only the most significant limb drops its zero padding
        write!(f, "{}", self.limbs.back())?;
        for limb in self.limbs.iter().rev().skip(1) {
            write!(f, "{limb:0width$}", width = Self::DIGIT_WIDTH)?;
        }
        Ok(())
    }
}

impl BigInt {
    pub const BASE: u32 = 10_000;
    /// decimal digits per limb
    const DIGIT_WIDTH: usize = 4;

    /// builds a number from a raw magnitude, stripping leading zero limbs
    pub fn new(sign: Sign, limbs: LimbBuf) -> Self {
        Self::from_limbs(sign.into(), limbs)
    }
    fn from_limbs(signum: SigNum, mut limbs: LimbBuf) -> Self {
        let signum = if limbs.truncate_leading_zeros() {
            SigNum::Zero
        } else {
            signum
        };
        Self { signum, limbs }
    }

    pub const fn signum(&self) -> SigNum {
        self.signum
    }
    pub const fn is_negative(&self) -> bool {
        self.signum.is_negative()
    }
    pub const fn is_positive(&self) -> bool {
        self.signum.is_positive()
    }
    pub const fn is_zero(&self) -> bool {
        self.signum.is_zero()
    }

    /// resets to canonical zero, keeping the magnitude's allocation
    pub fn clear(&mut self) {
        self.signum = SigNum::Zero;
        self.limbs.clear();
    }
    pub fn negate(&mut self) {
        self.signum = -self.signum;
    }

    /// packs a run of ascii digits into LE base 10000 limbs
    ///
    /// callers validated `digits` already; the front chunk may be short
    fn load_limbs(digits: &str) -> LimbBuf {
        digits
            .as_bytes()
            .rchunks(Self::DIGIT_WIDTH)
            .map(|chunk| {
                chunk
                    .iter()
                    .fold(0, |acc, byte| acc * 10 + u32::from(byte - b'0'))
            })
            .collect()
    }

    /// Extracts the next number from `reader`.
    ///
    /// Skips leading whitespace, then reads an optional sign and a greedy
    /// digit run. Running out of input before anything was consumed is the
    /// benign `Ok(None)`; a sign or garbage without any digit rewinds the
    /// reader to where the whitespace ended and fails with
    /// [`ReadError::NoDigits`].
    pub fn read_from<R: BufRead + Seek>(reader: &mut R) -> Result<Option<Self>, ReadError> {
        fn peek(reader: &mut impl BufRead) -> std::io::Result<Option<u8>> {
            Ok(reader.fill_buf()?.first().copied())
        }

        while peek(reader)?.is_some_and(|byte| byte.is_ascii_whitespace()) {
            reader.consume(1);
        }
        let start = reader.stream_position()?;
        let Some(first) = peek(reader)? else {
            return Ok(None);
        };
        let sign = match first {
            b'-' => {
                reader.consume(1);
                Sign::Negative
            }
            b'+' => {
                reader.consume(1);
                Sign::Positive
            }
            _ => Sign::Positive,
        };

        let mut digits = String::new();
        while let Some(byte) = peek(reader)? {
            if !byte.is_ascii_digit() {
                break;
            }
            digits.push(char::from(byte));
            reader.consume(1);
        }
        if digits.is_empty() {
            reader.seek(SeekFrom::Start(start))?;
            return Err(ReadError::NoDigits);
        }
        Ok(Some(Self::new(sign, Self::load_limbs(&digits))))
    }

    fn signed_add(lhs: &Self, rhs: &Self) -> Self {
        if lhs.signum.is_different(rhs.signum) {
            return if lhs.is_negative() {
                Self::signed_sub(rhs, &-lhs)
            } else {
                Self::signed_sub(lhs, &-rhs)
            };
        }
        let signum = if lhs.is_negative() {
            SigNum::Negative
        } else {
            SigNum::Positive
        };
        Self::from_limbs(
            signum,
            math_algos::add::limbs(lhs.limbs.view(), rhs.limbs.view()),
        )
    }
    fn signed_sub(lhs: &Self, rhs: &Self) -> Self {
        if lhs.signum.is_different(rhs.signum) {
            return Self::signed_add(lhs, &-rhs);
        }
        // flip only when lhs' magnitude is strictly the smaller one, equal
        // operands go straight to the kernel and cancel to zero
        if matches!(
            (lhs.is_negative(), lhs.cmp(rhs)),
            (false, Ordering::Less) | (true, Ordering::Greater)
        ) {
            return -Self::signed_sub(rhs, lhs);
        }
        let signum = if lhs.is_negative() {
            SigNum::Negative
        } else {
            SigNum::Positive
        };
        Self::from_limbs(
            signum,
            math_algos::sub::limbs(lhs.limbs.view(), rhs.limbs.view()),
        )
    }
    fn signed_mul(lhs: &Self, rhs: &Self) -> Self {
        if lhs.is_zero() || rhs.is_zero() {
            return Self::default();
        }
        Self::from_limbs(
            lhs.signum * rhs.signum,
            math_algos::mul::limbs(lhs.limbs.view(), rhs.limbs.view()),
        )
    }
}

impl From<i32> for BigInt {
    fn from(value: i32) -> Self {
        let mut limbs = LimbBuf::default();
        let mut rest = value.unsigned_abs();
        while rest != 0 {
            limbs.push_back(rest % Self::BASE);
            rest /= Self::BASE;
        }
        let signum = if value < 0 {
            SigNum::Negative
        } else {
            SigNum::Positive
        };
        Self::from_limbs(signum, limbs)
    }
}
impl From<u32> for BigInt {
    fn from(value: u32) -> Self {
        let mut limbs = LimbBuf::default();
        let mut rest = value;
        while rest != 0 {
            limbs.push_back(rest % Self::BASE);
            rest /= Self::BASE;
        }
        Self::from_limbs(SigNum::Positive, limbs)
    }
}

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stripped = s.trim();
        let offset = s.len() - s.trim_start().len();
        let (sign, rest) = match stripped.strip_prefix(['+', '-']) {
            Some(rest) if stripped.starts_with('-') => (Sign::Negative, rest),
            Some(rest) => (Sign::Positive, rest),
            None => (Sign::Positive, stripped),
        };
        let offset = offset + (stripped.len() - rest.len());
        if rest.is_empty() {
            return Err(ParseBigIntError::Empty);
        }
        if let Some((position, digit)) = rest.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(ParseBigIntError::InvalidDigit {
                digit,
                position: offset + position,
            });
        }
        Ok(Self::new(sign, Self::load_limbs(rest)))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.signum.cmp(&other.signum).then_with(|| {
            let abs = self
                .limbs
                .len()
                .cmp(&other.limbs.len())
                .then_with(|| self.limbs.iter().rev().cmp(other.limbs.iter().rev()));
            if self.is_negative() {
                abs.reverse()
            } else {
                abs
            }
        })
    }
}
impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<i32> for BigInt {
    fn eq(&self, other: &i32) -> bool {
        *self == Self::from(*other)
    }
}
impl PartialOrd<i32> for BigInt {
    fn partial_cmp(&self, other: &i32) -> Option<Ordering> {
        Some(self.cmp(&Self::from(*other)))
    }
}

impl Neg for BigInt {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        self.negate();
        self
    }
}
impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

macro_rules! implBigMath {
    ($assign_trait:ident, $assign_func:ident, $trait:ident, $func:ident, $kernel:ident) => {
        impl $trait<BigInt> for BigInt {
            type Output = BigInt;
            fn $func(self, rhs: BigInt) -> Self::Output {
                BigInt::$kernel(&self, &rhs)
            }
        }
        impl $trait<&BigInt> for BigInt {
            type Output = BigInt;
            fn $func(self, rhs: &BigInt) -> Self::Output {
                BigInt::$kernel(&self, rhs)
            }
        }
        impl $trait<BigInt> for &BigInt {
            type Output = BigInt;
            fn $func(self, rhs: BigInt) -> Self::Output {
                BigInt::$kernel(self, &rhs)
            }
        }
        impl $trait<&BigInt> for &BigInt {
            type Output = BigInt;
            fn $func(self, rhs: &BigInt) -> Self::Output {
                BigInt::$kernel(self, rhs)
            }
        }
        impl $trait<i32> for BigInt {
            type Output = BigInt;
            fn $func(self, rhs: i32) -> Self::Output {
                BigInt::$kernel(&self, &BigInt::from(rhs))
            }
        }
        impl $trait<i32> for &BigInt {
            type Output = BigInt;
            fn $func(self, rhs: i32) -> Self::Output {
                BigInt::$kernel(self, &BigInt::from(rhs))
            }
        }
        impl $assign_trait<BigInt> for BigInt {
            fn $assign_func(&mut self, rhs: BigInt) {
                *self = BigInt::$kernel(self, &rhs);
            }
        }
        impl $assign_trait<&BigInt> for BigInt {
            fn $assign_func(&mut self, rhs: &BigInt) {
                *self = BigInt::$kernel(self, rhs);
            }
        }
        impl $assign_trait<i32> for BigInt {
            fn $assign_func(&mut self, rhs: i32) {
                *self = BigInt::$kernel(self, &BigInt::from(rhs));
            }
        }
    };
}
implBigMath!(AddAssign, add_assign, Add, add, signed_add);
implBigMath!(SubAssign, sub_assign, Sub, sub, signed_sub);
implBigMath!(MulAssign, mul_assign, Mul, mul, signed_mul);
