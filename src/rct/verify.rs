/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::internal_common::*;
use crate::rangeproof::RangeSig;
use crate::signature::{
    MlsagSig,
    simple_ring_matrix,
    full_ring_matrix
};
use super::*;

///Verify a RingCT signature.
///
/// * Null: always valid. Whether the transaction may be a coinbase is for the caller to decide.
/// * Simple: pseudo-outputs balance the outputs and fee, every rangeproof, every input's MLSAG.
/// * Full: every rangeproof, then the joint MLSAG.
///
///The message, mix ring and key images must have been set.
///Any inconsistency in the signature (too few rangeproofs, rings, or MLSAGs)
///is returned as an error rather than a panic.
pub fn verify_rct<B: Backend + ?Sized>(backend: &B, sig: &RctSig) -> Result<(), VerificationError> {
    return match sig {
        RctSig::Null => Ok(()),
        RctSig::Full(full) => verify_full(backend, sig, full),
        RctSig::Simple(simple) => verify_simple(backend, sig, simple)
    }
}

fn verify_range_sigs<B: Backend + ?Sized>(
    backend: &B, base: &RctSigBase, range_sigs: &[RangeSig]
) -> Result<(), VerificationError> {
    for (output, ct_key) in base.out_pk.iter().enumerate() {
        let range_sig = range_sigs.get(output)
            .ok_or(VerificationError::InternalFault("output without a rangeproof"))?;
        RangeSig::verify(backend, &ct_key.mask, range_sig)
            .map_err(|error| VerificationError::RangeProof{output, error})?;
    }
    return Ok(())
}

fn verify_simple<B: Backend + ?Sized>(
    backend: &B, sig: &RctSig, simple: &RctSigSimple
) -> Result<(), VerificationError> {
    let RctSigSimple{base, pseudo_outs, range_sigs, mlsags} = simple;

    //sum(pseudo_outs) == sum(out_pk) + fee * H
    let out_commitments: Vec<Key> = base.out_pk.iter().map(|ct_key| ct_key.mask).collect();
    if !is_balanced(backend, pseudo_outs, &out_commitments, base.tx_fee)? {
        return Err(VerificationError::Unbalanced)
    }

    verify_range_sigs(backend, base, range_sigs)?;

    if pseudo_outs.len() != mlsags.len() {
        return Err(VerificationError::InternalFault("pseudo-output and MLSAG counts differ"))
    }
    let message = sig.pre_mlsag_hash(backend);
    for (input, (pseudo_out, mlsag)) in pseudo_outs.iter().zip(mlsags).enumerate() {
        let ring = base.mix_ring.get(input)
            .ok_or(VerificationError::InternalFault("input without a ring"))?;
        simple_ring_matrix(backend, ring, pseudo_out)
            .and_then(|matrix| MlsagSig::verify(backend, mlsag, &message, &matrix, 1))
            .map_err(|error| VerificationError::RingSignature{input, error})?;
    }
    return Ok(())
}

fn verify_full<B: Backend + ?Sized>(
    backend: &B, sig: &RctSig, full: &RctSigFull
) -> Result<(), VerificationError> {
    let RctSigFull{base, range_sigs, mlsag} = full;

    verify_range_sigs(backend, base, range_sigs)?;

    if base.mix_ring.is_empty() {
        return Err(VerificationError::InternalFault("no rings"))
    }
    let message = sig.pre_mlsag_hash(backend);
    return full_ring_matrix(backend, &base.mix_ring, &base.out_pk, base.tx_fee)
        .and_then(|matrix| MlsagSig::verify(backend, mlsag, &message, &matrix, base.mix_ring.len()))
        .map_err(|error| VerificationError::RingSignature{input: 0, error});
}
