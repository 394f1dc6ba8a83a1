/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::tobytes::*;

use zeroize::Zeroize;

///A raw 32-byte key.
///
///Depending on where it is used, a key holds either a scalar or a compressed curve point.
///Which one is never stored, it is implied by the field.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Zeroize)]
pub struct Key(
    pub [u8; 32]

); impl Key {
    ///The all-zero key.
    pub const ZERO: Key = Key([0u8; 32]);

    ///Borrow the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        return &self.0
    }

    ///Parse a key from 64 hex characters.
    pub fn from_hex(hex_str: &str) -> Result<Self, SerializationError> {
        let mut bytes = [0u8; 32];
        return match hex::decode_to_slice(hex_str, &mut bytes) {
            Ok(()) => Ok(Self(bytes)),
            Err(_) => Err(SerializationError::DecodingError)
        }
    }

    ///Encode an amount as a scalar key:
    ///the amount in the first 8 bytes (little-endian), with the rest zeroed.
    pub fn from_amount(amount: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&amount.to_le_bytes());
        return Self(bytes)
    }

    ///Read back an amount stored with `from_amount`.
    ///Only the first 8 bytes are looked at.
    pub fn to_amount(&self) -> u64 {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&self.0[..8]);
        return u64::from_le_bytes(bytes)
    }

} impl From<[u8; 32]> for Key {
    fn from(bytes: [u8; 32]) -> Self {
        return Self(bytes)
    }

} impl AsRef<[u8]> for Key {
    fn as_ref(&self) -> &[u8] {
        return &self.0
    }

} impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }

} impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key({})", hex::encode(self.0))
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for Key {
    fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        return Ok(self.0.to_vec())
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        return match bytes.try_into() {
            Ok(bytes) => Ok(Self(bytes)),
            Err(_) => Err(SerializationError::DecodingError)
        }
    }
}

///One key per bit of a 64-bit amount.
pub type Key64 = [Key; 64];

///Confidential transaction keys of an output.
/// * `destination`: the one-time public key which owns the output
/// * `mask`: the Pedersen commitment `C = mask * G + amount * H`
///
///Only `mask` is part of the signature encoding,
///`destination` is taken from the transaction outputs or the chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtKey {
    pub destination: Key,
    pub mask: Key

} impl CtKey {
    pub fn new(destination: Key, mask: Key) -> Self {
        return Self{destination, mask}
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for CtKey {}

///ECDH-blinded mask and amount of an output, as published in the transaction.
///Only the recipient, who can compute the shared secret, is able to unblind them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcdhTuple {
    pub mask: Key,
    pub amount: Key

} impl EcdhTuple {
    pub fn new(mask: Key, amount: Key) -> Self {
        return Self{mask, amount}
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for EcdhTuple {}

///Ring members for every input, indexed `[input][ring member]`.
pub type MixRing = Vec<Vec<CtKey>>;
