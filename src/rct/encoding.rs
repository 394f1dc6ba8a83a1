/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Consensus encoding of RingCT signatures.
//!
//! Base part: type tag, varint fee, pseudo-outs (Simple only), ECDH tuples, output commitment masks.
//! Prunable part: rangeproofs, then MLSAGs.
//! All keys are raw 32 bytes, and no counts are encoded.

use tracing::trace;

use crate::internal_common::*;
use crate::rangeproof::RangeSig;
use crate::signature::MlsagSig;
use super::*;

impl RctSig {
    ///Decode a signature from `reader`, leaving it positioned right after the signature.
    ///
    ///Nothing is returned unless the whole signature decoded.
    ///The message, mix ring, key images and output destinations are left empty.
    pub fn decode(reader: &mut WireReader<'_>, shape: RctShape) -> Result<Self, DecodeError> {
        let sig_type = SigType::try_from(reader.read_u8()?)?;
        trace!(?sig_type, inputs = shape.inputs, outputs = shape.outputs, mixin = shape.mixin, "decoding RingCT signature");
        if sig_type == SigType::Null {
            return Ok(Self::Null)
        }

        let tx_fee = reader.read_varint()?;

        let mut pseudo_outs: Vec<Key> = Vec::new();
        if sig_type == SigType::Simple {
            for _ in 0..shape.inputs {
                pseudo_outs.push(reader.read_key()?);
            }
        }

        let mut ecdh_info: Vec<EcdhTuple> = Vec::new();
        for _ in 0..shape.outputs {
            let mask = reader.read_key()?;
            let amount = reader.read_key()?;
            ecdh_info.push(EcdhTuple{mask, amount});
        }

        let mut out_pk: Vec<CtKey> = Vec::new();
        for _ in 0..shape.outputs {
            out_pk.push(CtKey{
                destination: Key::ZERO,
                mask: reader.read_key()?
            });
        }

        let mut range_sigs: Vec<RangeSig> = Vec::new();
        for _ in 0..shape.outputs {
            range_sigs.push(RangeSig::wire_decode(reader)?);
        }

        let members = shape.mixin.checked_add(1)
            .ok_or(DecodeError::MalformedEncoding)?;

        let base = RctSigBase{
            message: Key::ZERO,
            mix_ring: Vec::new(),
            ecdh_info,
            out_pk,
            tx_fee
        };

        return match sig_type {
            SigType::Simple => {
                let mut mlsags: Vec<MlsagSig> = Vec::new();
                for _ in 0..shape.inputs {
                    mlsags.push(MlsagSig::wire_decode(reader, members, 2)?);
                }
                Ok(Self::Simple(RctSigSimple{base, pseudo_outs, range_sigs, mlsags}))
            },
            _ => {
                let columns = shape.inputs.checked_add(1)
                    .ok_or(DecodeError::MalformedEncoding)?;
                let mlsag = MlsagSig::wire_decode(reader, members, columns)?;
                Ok(Self::Full(RctSigFull{base, range_sigs, mlsag}))
            }
        }
    }

    ///Decode a signature which must fill `bytes` exactly.
    pub fn from_wire(bytes: &[u8], shape: RctShape) -> Result<Self, DecodeError> {
        let mut reader = WireReader::new(bytes);
        let sig = Self::decode(&mut reader, shape)?;
        if !reader.is_empty() {
            return Err(DecodeError::MalformedEncoding)
        }
        return Ok(sig)
    }

    ///Encode the base part: type, fee, pseudo-outs, ECDH info, output commitments.
    pub fn serialize_base(&self) -> Vec<u8> {
        let mut out = vec!(self.sig_type() as u8);
        let (base, pseudo_outs): (&RctSigBase, &[Key]) = match self {
            Self::Null => return out,
            Self::Full(full) => (&full.base, &[] as &[Key]),
            Self::Simple(simple) => (&simple.base, simple.pseudo_outs.as_slice())
        };

        write_varint(&mut out, base.tx_fee);
        for pseudo_out in pseudo_outs {
            pseudo_out.wire_encode(&mut out);
        }
        for ecdh in &base.ecdh_info {
            ecdh.mask.wire_encode(&mut out);
            ecdh.amount.wire_encode(&mut out);
        }
        for ct_key in &base.out_pk {
            ct_key.mask.wire_encode(&mut out);
        }
        return out
    }

    ///Encode the prunable part: rangeproofs, then MLSAGs. Empty for Null.
    pub fn serialize_prunable(&self) -> Vec<u8> {
        let mut out: Vec<u8> = Vec::new();
        for range_sig in self.range_sigs() {
            range_sig.wire_encode(&mut out);
        }
        for mlsag in self.mlsags() {
            mlsag.wire_encode(&mut out);
        }
        return out
    }

    ///The complete encoding, `serialize_base` followed by `serialize_prunable`.
    pub fn to_wire(&self) -> Vec<u8> {
        return [self.serialize_base(), self.serialize_prunable()].concat()
    }
}
