/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The RingCT signature container.
//!
//! Typical use:
//! 1. decode the signature bytes with the counts of the already-parsed transaction (`RctSig::from_wire`)
//! 2. fill in what is not serialized: the prefix hash (`set_message`), the rings (`set_mix_ring`),
//!    the key images (`set_key_images`), and the output destinations if needed (`base_mut`)
//! 3. `verify`

mod encoding;
mod hash;
mod verify;

pub use verify::verify_rct;

use tracing::debug;

use crate::internal_common::*;
use crate::rangeproof::RangeSig;
use crate::signature::MlsagSig;

///RingCT signature type tag.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SigType {
    ///No ring signature data. Only used by coinbase transactions.
    Null = 0,
    ///One MLSAG over all inputs jointly.
    Full = 1,
    ///One MLSAG per input, balanced through pseudo-outputs.
    Simple = 2,

} impl TryFrom<u8> for SigType {
    type Error = DecodeError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        return match tag {
            0 => Ok(Self::Null),
            1 => Ok(Self::Full),
            2 => Ok(Self::Simple),
            _ => Err(DecodeError::InvalidSignatureType(tag))
        }
    }
}

///Counts taken from the transaction body, needed to decode a signature.
///
///The encoding does not contain them, and the decoder trusts them:
///wrong counts can produce a structurally different signature, which will then fail verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RctShape {
    pub inputs: usize,
    pub outputs: usize,
    ///Decoys per input; the ring size is `mixin + 1`.
    pub mixin: usize

} impl RctShape {
    pub fn new(inputs: usize, outputs: usize, mixin: usize) -> Self {
        return Self{inputs, outputs, mixin}
    }
}

///Fields shared by Full and Simple signatures.
///
///`message` and `mix_ring` are never serialized, and neither are the `destination`s of `out_pk`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RctSigBase {
    ///Transaction prefix hash.
    pub message: Key,
    pub mix_ring: MixRing,
    pub ecdh_info: Vec<EcdhTuple>,
    pub out_pk: Vec<CtKey>,
    pub tx_fee: u64
}

///Full signature: a single MLSAG whose last column also proves that the commitments balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RctSigFull {
    pub base: RctSigBase,
    pub range_sigs: Vec<RangeSig>,
    pub mlsag: MlsagSig
}

///Simple signature: each input has a pseudo-output commitment and its own 2-column MLSAG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RctSigSimple {
    pub base: RctSigBase,
    pub pseudo_outs: Vec<Key>,
    pub range_sigs: Vec<RangeSig>,
    pub mlsags: Vec<MlsagSig>
}

///A RingCT signature.
///
///The variants carry exactly the fields their type has,
///so a Null signature with a fee, or a Full signature with pseudo-outputs, can't be expressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RctSig {
    Null,
    Full(RctSigFull),
    Simple(RctSigSimple)

} impl RctSig {
    pub fn sig_type(&self) -> SigType {
        return match self {
            Self::Null => SigType::Null,
            Self::Full(_) => SigType::Full,
            Self::Simple(_) => SigType::Simple
        }
    }

    ///The transaction fee. Null signatures have none.
    pub fn tx_fee(&self) -> Option<u64> {
        return self.base().map(|base| base.tx_fee)
    }

    pub fn base(&self) -> Option<&RctSigBase> {
        return match self {
            Self::Null => None,
            Self::Full(full) => Some(&full.base),
            Self::Simple(simple) => Some(&simple.base)
        }
    }

    pub fn base_mut(&mut self) -> Option<&mut RctSigBase> {
        return match self {
            Self::Null => None,
            Self::Full(full) => Some(&mut full.base),
            Self::Simple(simple) => Some(&mut simple.base)
        }
    }

    ///Rangeproofs, one per output.
    pub fn range_sigs(&self) -> &[RangeSig] {
        return match self {
            Self::Null => &[],
            Self::Full(full) => &full.range_sigs,
            Self::Simple(simple) => &simple.range_sigs
        }
    }

    ///Ring signatures: one per input for Simple, exactly one for Full.
    pub fn mlsags(&self) -> &[MlsagSig] {
        return match self {
            Self::Null => &[],
            Self::Full(full) => std::slice::from_ref(&full.mlsag),
            Self::Simple(simple) => &simple.mlsags
        }
    }

    ///Set the transaction prefix hash. Does nothing for Null.
    pub fn set_message(&mut self, message: Key) {
        if let Some(base) = self.base_mut() {
            base.message = message;
        }
    }

    ///Set the ring members of every input, indexed `[input][ring member]`. Does nothing for Null.
    ///
    ///Full signatures use the same layout, which is the transpose of the
    ///`[ring member][input]` matrix CryptoNote nodes build for them.
    pub fn set_mix_ring(&mut self, mix_ring: MixRing) {
        if let Some(base) = self.base_mut() {
            base.mix_ring = mix_ring;
        }
    }

    ///Set the key images, one per input, in input order. Does nothing for Null.
    ///
    ///Simple signatures give image `i` to MLSAG `i`, Full signatures take all of them.
    ///Missing images leave an MLSAG without one, which fails verification.
    pub fn set_key_images(&mut self, key_images: &[Key]) {
        match self {
            Self::Null => {},
            Self::Full(full) => full.mlsag.key_images = key_images.to_vec(),
            Self::Simple(simple) => {
                for (i, mlsag) in simple.mlsags.iter_mut().enumerate() {
                    mlsag.key_images = key_images.get(i).map(|image| vec!(*image)).unwrap_or_default();
                }
            }
        }
    }

    ///Verify this signature, returning `true` only if everything checks out.
    ///
    ///Malformed or inconsistent data is rejected, never panics.
    ///Use `verify_rct` to learn why a signature was rejected.
    pub fn verify<B: Backend + ?Sized>(&self, backend: &B) -> bool {
        return match verify_rct(backend, self) {
            Ok(()) => true,
            Err(error) => {
                debug!(sig_type = ?self.sig_type(), %error, "rejected RingCT signature");
                false
            }
        }
    }
}
