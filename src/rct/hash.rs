/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::internal_common::*;
use super::RctSig;

impl RctSig {
    ///Hash of `serialize_base`.
    pub fn base_hash<B: Backend + ?Sized>(&self, backend: &B) -> Key {
        return backend.fast_hash(&self.serialize_base())
    }

    ///Hash of `serialize_prunable`, or the zero key for Null signatures.
    pub fn prunable_hash<B: Backend + ?Sized>(&self, backend: &B) -> Key {
        if let RctSig::Null = self {
            return Key::ZERO
        }
        return backend.fast_hash(&self.serialize_prunable())
    }

    ///The message signed by the MLSAGs:
    ///`Hash(message || base_hash || Hash(rangeproof keys))`,
    ///where the rangeproof keys are `s0, s1, ee, ci` of every output in order.
    ///
    ///The zero key for Null signatures.
    pub fn pre_mlsag_hash<B: Backend + ?Sized>(&self, backend: &B) -> Key {
        let base = match self.base() {
            Some(base) => base,
            None => return Key::ZERO
        };

        let mut range_keys: Vec<u8> = Vec::new();
        for range_sig in self.range_sigs() {
            range_sig.wire_encode(&mut range_keys);
        }

        let hashes = [
            base.message.0,
            self.base_hash(backend).0,
            backend.fast_hash(&range_keys).0
        ];
        return backend.fast_hash(&hashes.concat())
    }
}
