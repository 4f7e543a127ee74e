// SPDX-FileCopyrightText: 2024 Nils Jochem
// SPDX-License-Identifier: MPL-2.0
pub mod big_int;
pub mod limb_buf;

pub use big_int::{BigInt, ParseBigIntError, ReadError, Sign, SigNum};
pub use limb_buf::{LimbBuf, LimbSlice};
