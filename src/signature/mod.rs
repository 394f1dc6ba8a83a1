/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!RingCT-related ring signatures
//!
//!An MLSAG signature proves that, for one (hidden) row of a matrix of public keys,
//!the signer knows the private key of every column,
//!and that the linkable columns' key images belong to those private keys.

mod mlsag;
mod signature_utils;

pub use mlsag::MlsagSig;

pub use signature_utils::{
    simple_ring_matrix,
    full_ring_matrix
};
