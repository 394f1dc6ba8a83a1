/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Borromean ring signature-based rangeproofs

use crate::internal_common::*;
use super::BIT_RANGE;

///Borromean ring signature over 64 rings of 2 members, sharing the seed `ee`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoroSig {
    pub s0: Key64,
    pub s1: Key64,
    pub ee: Key

} impl WireEncode for BoroSig {
    fn wire_encode(&self, out: &mut Vec<u8>) {
        self.s0.wire_encode(out);
        self.s1.wire_encode(out);
        self.ee.wire_encode(out);
    }
}

///Rangeproof of one output: a commitment per bit (`ci`) and the Borromean signature
///showing that each of them commits to either 0 or 2<sup>i</sup>.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSig {
    pub asig: BoroSig,
    pub ci: Key64

} impl RangeSig {
    ///Verify a rangeproof against the output commitment it is for.
    ///
    ///Returns `Ok()` if the proof is valid,
    ///or `Err(RangeProofError)` if it's invalid.
    pub fn verify<B: Backend + ?Sized>(
        backend: &B, commitment: &Key, proof: &RangeSig
    ) -> Result<(), RangeProofError> {
        let RangeSig{asig, ci} = proof;

        //ci_h[i] = ci[i] - 2^i * H, the "bit is 1" member of each ring
        let mut ci_h = [Key::ZERO; BIT_RANGE];
        let mut h_pow = backend.h();
        let mut sum = backend.identity();
        for i in 0..BIT_RANGE {
            ci_h[i] = backend.sub_keys(&ci[i], &h_pow)?;
            sum = backend.add_keys(&sum, &ci[i])?;
            h_pow = backend.add_keys(&h_pow, &h_pow)?;
        }

        //check if the bit-commitments equal the total commitment
        if sum != *commitment {
            return Err(RangeProofError::Invalid)
        }

        return borromean_verify(backend, asig, ci, &ci_h)
    }

} impl WireEncode for RangeSig {
    fn wire_encode(&self, out: &mut Vec<u8>) {
        self.asig.wire_encode(out);
        self.ci.wire_encode(out);
    }

} impl WireDecode for RangeSig {
    fn wire_decode(reader: &mut WireReader<'_>) -> Result<Self, DecodeError> {
        let s0 = reader.read_key64()?;
        let s1 = reader.read_key64()?;
        let ee = reader.read_key()?;
        let ci = reader.read_key64()?;
        return Ok(Self{
            asig: BoroSig{s0, s1, ee},
            ci
        })
    }
}

//verify borromean ring signature over the rings (p1[i], p2[i])
fn borromean_verify<B: Backend + ?Sized>(
    backend: &B, sig: &BoroSig, p1: &Key64, p2: &Key64
) -> Result<(), RangeProofError> {
    let mut l1: Vec<u8> = Vec::with_capacity(BIT_RANGE * 32);
    for i in 0..BIT_RANGE {
        //s0[i] * G + ee * P1[i]
        let ll = backend.add_keys2(&sig.s0[i], &sig.ee, &p1[i])?;
        let c = backend.hash_to_scalar(ll.as_bytes());
        //s1[i] * G + c * P2[i]
        let l1_i = backend.add_keys2(&sig.s1[i], &c, &p2[i])?;
        l1.extend_from_slice(l1_i.as_bytes());
    }
    //recreate ee, the shared seed
    let ee = backend.hash_to_scalar(&l1);

    //check if we end up back where we started
    return match ee == sig.ee {
        true => Ok(()),
        false => Err(RangeProofError::Invalid)
    };
}
