/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::internal_common::*;

///Public key matrix of a Simple signature's per-input MLSAG.
///
///Row `i` is `[ring[i].destination, ring[i].mask - pseudo_out]`;
///only the first column is linkable.
pub fn simple_ring_matrix<B: Backend + ?Sized>(
    backend: &B, ring: &[CtKey], pseudo_out: &Key
) -> Result<Vec<Vec<Key>>, SignatureError> {
    let mut matrix: Vec<Vec<Key>> = Vec::new();
    for member in ring {
        //subtract the pseudo-out from each commitment (aka, "shift")
        matrix.push(vec!(
            member.destination,
            backend.sub_keys(&member.mask, pseudo_out)?
        ));
    }
    return Ok(matrix)
}

///Public key matrix of a Full signature's joint MLSAG.
///
///`rings` is indexed `[input][ring member]`, and every input must have the same ring size.
///This is the transpose of the `[ring member][input]` layout CryptoNote nodes use for Full rings.
///Row `i` holds the destination of member `i` of every input,
///followed by the sum of their masks minus the output commitments and the fee commitment.
///The first `rings.len()` columns are linkable.
pub fn full_ring_matrix<B: Backend + ?Sized>(
    backend: &B, rings: &[Vec<CtKey>], out_pk: &[CtKey], tx_fee: u64
) -> Result<Vec<Vec<Key>>, SignatureError> {
    let members = match rings.first() {
        Some(ring) => ring.len(),
        None => return Err(SignatureError::Malformed)
    };
    if rings.iter().any(|ring| ring.len() != members) {
        return Err(SignatureError::Malformed)
    }

    let sum_out_pk = backend.add_keys(
        &sum_keys(backend, out_pk.iter().map(|key| &key.mask))?,
        &commit_to_amount(backend, tx_fee)?
    )?;

    let mut matrix: Vec<Vec<Key>> = Vec::new();
    for i in 0..members {
        let mut row: Vec<Key> = rings.iter().map(|ring| ring[i].destination).collect();
        let sum_in = sum_keys(backend, rings.iter().map(|ring| &ring[i].mask))?;
        row.push(backend.sub_keys(&sum_in, &sum_out_pk)?);
        matrix.push(row);
    }
    return Ok(matrix)
}
