/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Cryptographic proofs which demonstrate that the amount committed to in a pedersen commitment is non-negative

mod borromean;

pub use borromean::{
    BoroSig,
    RangeSig
};

///Commitment values (in atomic units) are proven to be between 0 and 2<sup>`BIT_RANGE`</sup> - 1.
///Each bit of the amount gets its own commitment and two-member ring.
pub const BIT_RANGE: usize = 64;
