/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Keccak hashing, to bytes, scalars and curve points.

use sha3::{
    Digest,
    Keccak256,
    Keccak512
};
use crate::curve::*;

///Keccak-256 of `msg`.
///This is the "fast hash" of CryptoNote, used for the base/prunable hashes and for challenges.
pub fn keccak256(msg: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Keccak256::digest(msg));
    return out
}

///Keccak-512 of `msg`.
pub fn keccak512(msg: &[u8]) -> [u8; 64] {
    let mut out = [0u8; 64];
    out.copy_from_slice(&Keccak512::digest(msg));
    return out
}

///Hash bytes to elliptic curve point, domain separated.
pub fn domain_h_point(msg: &[u8], domain: &[u8]) -> RistrettoPoint {
    return RistrettoPoint::from_uniform_bytes(
        &keccak512(&[msg, domain].concat()));
}

///Hash bytes to elliptic curve point.
pub fn h_point(msg: &[u8]) -> RistrettoPoint {
    return RistrettoPoint::from_uniform_bytes(&keccak512(msg));
}

///Hash bytes to scalar: Keccak-256, reduced modulo the group order.
pub fn h_scalar(msg: &[u8]) -> Scalar {
    return Scalar::from_bytes_mod_order(keccak256(msg));
}

pub mod domains {
    //! Pre-defined hash domains

    pub const SIGNATURE_KEY_IMAGE: &[u8] =  "key_img".as_bytes();
}
