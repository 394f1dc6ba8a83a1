/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Elliptic curve backend used by every verifier in this crate.
//!
//! Verification code never touches curve types directly: it calls a `Backend`
//! on raw 32-byte `Key`s, in the style of CryptoNote's `rctOps`.
//! `Ristretto` is the bundled backend; tests may substitute their own.

use crate::errors::CurveError;
use crate::types::Key;
use crate::hashes::*;
use crate::pedersen::*;

pub use curve25519_dalek::{
    constants,
    scalar::Scalar,
    ristretto::{
        RistrettoPoint,
        CompressedRistretto,
        RistrettoBasepointTable,
        VartimeRistrettoPrecomputation
    },
    traits::{
        Identity,
        MultiscalarMul,
        VartimeMultiscalarMul,
        VartimePrecomputedMultiscalarMul
    }
};

///The basepoint of the elliptic curve.
///`G` is a precomputed table of values, not an EC point, in order to speed up operations.
///To access the EC point itself, use `G_POINT`.
pub const G: &RistrettoBasepointTable = &constants::RISTRETTO_BASEPOINT_TABLE;
///The basepoint of the elliptic curve.
///`G_POINT` is the actual EC point, whereas `G` is a precomputed table of values for faster operations.
pub const G_POINT: RistrettoPoint = constants::RISTRETTO_BASEPOINT_POINT;

lazy_static! {
    pub(crate) static ref G_MULTISCALAR_MUL: VartimeRistrettoPrecomputation = VartimeRistrettoPrecomputation::new(vec!(G_POINT));
}

///Group and hash primitives over 32-byte keys.
///
///All operations are pure. Point operations fail with `CurveError`
///when an argument does not decode, which verifiers turn into a rejection.
pub trait Backend: Send + Sync {
    ///The neutral element.
    fn identity(&self) -> Key;

    ///The second generator `H`, used for amounts in commitments.
    fn h(&self) -> Key;

    ///`A + B`
    fn add_keys(&self, a: &Key, b: &Key) -> Result<Key, CurveError>;

    ///`A - B`
    fn sub_keys(&self, a: &Key, b: &Key) -> Result<Key, CurveError>;

    ///`a * G`
    fn scalarmult_base(&self, a: &Key) -> Result<Key, CurveError>;

    ///`a * H`
    fn scalarmult_h(&self, a: &Key) -> Result<Key, CurveError>;

    ///`a * P`
    fn scalarmult_key(&self, p: &Key, a: &Key) -> Result<Key, CurveError>;

    ///`a * G + b * B`
    fn add_keys2(&self, a: &Key, b: &Key, big_b: &Key) -> Result<Key, CurveError>;

    ///`a * A + b * B`
    fn add_keys3(&self, a: &Key, big_a: &Key, b: &Key, big_b: &Key) -> Result<Key, CurveError>;

    ///Hash a key to a curve point (`Hp`), used for key images.
    fn hash_to_point(&self, key: &Key) -> Result<Key, CurveError>;

    ///Hash arbitrary bytes to a scalar.
    fn hash_to_scalar(&self, data: &[u8]) -> Key;

    ///`a + b` modulo the group order.
    fn sc_add(&self, a: &Key, b: &Key) -> Key;

    ///`a - b` modulo the group order.
    fn sc_sub(&self, a: &Key, b: &Key) -> Key;

    ///The 256-bit hash used for signature hashes.
    fn fast_hash(&self, data: &[u8]) -> Key;
}

///`Backend` over the Ristretto255 group, using `curve25519-dalek`.
///
/// * points are compressed Ristretto encodings; non-canonical encodings are rejected
/// * scalars passed to multiplications must be canonical; `sc_add`/`sc_sub` reduce their inputs
/// * `H` is the hash of `G` to a point
/// * hashes are Keccak
///
///Multiplications are variable time: every value seen during verification is public.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ristretto;

impl Ristretto {
    ///Decode a key into a point.
    pub fn decode_point(key: &Key) -> Result<RistrettoPoint, CurveError> {
        return CompressedRistretto(key.0).decompress()
            .ok_or(CurveError::InvalidPoint)
    }

    ///Decode a key into a canonical scalar.
    pub fn decode_scalar(key: &Key) -> Result<Scalar, CurveError> {
        return Scalar::from_canonical_bytes(key.0)
            .ok_or(CurveError::InvalidScalar)
    }

    ///Encode a point into a key.
    pub fn encode_point(point: &RistrettoPoint) -> Key {
        return Key(point.compress().to_bytes())
    }

    ///Encode a scalar into a key.
    pub fn encode_scalar(scalar: &Scalar) -> Key {
        return Key(scalar.to_bytes())
    }

} impl Backend for Ristretto {
    fn identity(&self) -> Key {
        return Self::encode_point(&RistrettoPoint::identity())
    }

    fn h(&self) -> Key {
        return Self::encode_point(&PEDERSEN_H_POINT)
    }

    fn add_keys(&self, a: &Key, b: &Key) -> Result<Key, CurveError> {
        return Ok(Self::encode_point(&(Self::decode_point(a)? + Self::decode_point(b)?)))
    }

    fn sub_keys(&self, a: &Key, b: &Key) -> Result<Key, CurveError> {
        return Ok(Self::encode_point(&(Self::decode_point(a)? - Self::decode_point(b)?)))
    }

    fn scalarmult_base(&self, a: &Key) -> Result<Key, CurveError> {
        return Ok(Self::encode_point(&(&Self::decode_scalar(a)? * G)))
    }

    fn scalarmult_h(&self, a: &Key) -> Result<Key, CurveError> {
        return Ok(Self::encode_point(&(&Self::decode_scalar(a)? * &*PEDERSEN_H)))
    }

    fn scalarmult_key(&self, p: &Key, a: &Key) -> Result<Key, CurveError> {
        return Ok(Self::encode_point(&(Self::decode_scalar(a)? * Self::decode_point(p)?)))
    }

    fn add_keys2(&self, a: &Key, b: &Key, big_b: &Key) -> Result<Key, CurveError> {
        //(a * G) + (b * B)
        let point = G_MULTISCALAR_MUL.vartime_mixed_multiscalar_mul(
            vec!(Self::decode_scalar(a)?), vec!(Self::decode_scalar(b)?), vec!(Self::decode_point(big_b)?)
        );
        return Ok(Self::encode_point(&point))
    }

    fn add_keys3(&self, a: &Key, big_a: &Key, b: &Key, big_b: &Key) -> Result<Key, CurveError> {
        //(a * A) + (b * B)
        let point = RistrettoPoint::vartime_multiscalar_mul(
            vec!(Self::decode_scalar(a)?, Self::decode_scalar(b)?),
            vec!(Self::decode_point(big_a)?, Self::decode_point(big_b)?)
        );
        return Ok(Self::encode_point(&point))
    }

    fn hash_to_point(&self, key: &Key) -> Result<Key, CurveError> {
        return Ok(Self::encode_point(&domain_h_point(key.as_bytes(), domains::SIGNATURE_KEY_IMAGE)))
    }

    fn hash_to_scalar(&self, data: &[u8]) -> Key {
        return Self::encode_scalar(&h_scalar(data))
    }

    fn sc_add(&self, a: &Key, b: &Key) -> Key {
        return Self::encode_scalar(
            &(Scalar::from_bytes_mod_order(a.0) + Scalar::from_bytes_mod_order(b.0)))
    }

    fn sc_sub(&self, a: &Key, b: &Key) -> Key {
        return Self::encode_scalar(
            &(Scalar::from_bytes_mod_order(a.0) - Scalar::from_bytes_mod_order(b.0)))
    }

    fn fast_hash(&self, data: &[u8]) -> Key {
        return Key(keccak256(data))
    }
}
