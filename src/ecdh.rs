/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Blinding of output amounts with an [Elliptic Curve Diffie Hellman (ECDH)](https://en.wikipedia.org/wiki/Elliptic-curve_Diffie%E2%80%93Hellman) shared secret.
//!
//! The sender publishes `mask + k1` and `amount + k2`, where
//! `k1 = Hs(shared_secret)` and `k2 = Hs(k1)`.
//! The recipient, who can compute the same shared secret, removes them again
//! and checks the result against the output commitment.

use tracing::warn;
use zeroize::Zeroize;

use crate::internal_common::*;

///The two blinding scalars derived from a shared secret.
fn blinding_keys<B: Backend + ?Sized>(backend: &B, shared_secret: &Key) -> (Key, Key) {
    let k1 = backend.hash_to_scalar(shared_secret.as_bytes());
    let k2 = backend.hash_to_scalar(k1.as_bytes());
    return (k1, k2)
}

///Blind an unblinded (mask, amount) tuple with `shared_secret`.
pub fn ecdh_encode<B: Backend + ?Sized>(backend: &B, unmasked: &EcdhTuple, shared_secret: &Key) -> EcdhTuple {
    let (mut k1, mut k2) = blinding_keys(backend, shared_secret);
    let masked = EcdhTuple {
        mask: backend.sc_add(&unmasked.mask, &k1),
        amount: backend.sc_add(&unmasked.amount, &k2)
    };
    k1.zeroize();
    k2.zeroize();
    return masked
}

///Remove the blinding applied by `ecdh_encode`.
///
///This always succeeds; with the wrong shared secret the result is garbage.
///Use `decode_amount` to find out whether the secret was right.
pub fn ecdh_decode<B: Backend + ?Sized>(backend: &B, masked: &EcdhTuple, shared_secret: &Key) -> EcdhTuple {
    let (mut k1, mut k2) = blinding_keys(backend, shared_secret);
    let unmasked = EcdhTuple {
        mask: backend.sc_sub(&masked.mask, &k1),
        amount: backend.sc_sub(&masked.amount, &k2)
    };
    k1.zeroize();
    k2.zeroize();
    return unmasked
}

///The amount and blinding factor of an output, recovered by its recipient.
///
///**This should not be publically shared.**
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Zeroize)]
pub struct DecodedAmount {
    pub amount: u64,
    pub mask: Key

} impl Drop for DecodedAmount {
    fn drop(&mut self) {
        //clear the keys from memory to improve security
        self.zeroize()
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for DecodedAmount {}

///Unblind `masked` with `shared_secret` and check the result against the output's commitment.
///
///Returns `None` if `mask * G + amount * H` does not reproduce `commitment`.
///That means the shared secret is wrong (the output is not ours, or it was derived incorrectly),
///not that the transaction is invalid.
pub fn decode_amount<B: Backend + ?Sized>(
    backend: &B, masked: &EcdhTuple, shared_secret: &Key, commitment: &Key
) -> Option<DecodedAmount> {
    let mut unmasked = ecdh_decode(backend, masked, shared_secret);

    let matches = match backend.add_keys2(&unmasked.mask, &unmasked.amount, &backend.h()) {
        Ok(recomputed) => recomputed == *commitment,
        Err(_) => false
    };
    if !matches {
        warn!("amount decoded incorrectly, output commitment does not match");
        unmasked.mask.zeroize();
        unmasked.amount.zeroize();
        return None
    }

    let decoded = DecodedAmount {
        amount: unmasked.amount.to_amount(),
        mask: unmasked.mask
    };
    unmasked.mask.zeroize();
    unmasked.amount.zeroize();
    return Some(decoded)
}
