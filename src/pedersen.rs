/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!Pedersen commitments: `C = mask * G + amount * H`

use crate::curve::*;
use crate::hashes::*;
use crate::errors::CurveError;
use crate::types::Key;

lazy_static! {
    pub static ref PEDERSEN_H_POINT: RistrettoPoint = pedersen_h_point();
    pub static ref PEDERSEN_H: RistrettoBasepointTable = pedersen_h_table();
}

///get `H`
fn pedersen_h_point() -> RistrettoPoint {
    return h_point(G_POINT.compress().as_bytes());
}

///get table of precomputed `H` values
fn pedersen_h_table() -> RistrettoBasepointTable {
    return RistrettoBasepointTable::create(&PEDERSEN_H_POINT);
}

///Commit to `amount` with blinding factor `mask`.
pub fn commit<B: Backend + ?Sized>(backend: &B, amount: u64, mask: &Key) -> Result<Key, CurveError> {
    return backend.add_keys2(mask, &Key::from_amount(amount), &backend.h())
}

///Commitment to a public amount (zero blinding factor), such as a transaction fee: `amount * H`
pub fn commit_to_amount<B: Backend + ?Sized>(backend: &B, amount: u64) -> Result<Key, CurveError> {
    return backend.scalarmult_h(&Key::from_amount(amount))
}

///Sum a sequence of points, starting from the identity.
pub fn sum_keys<'a, B, I>(backend: &B, keys: I) -> Result<Key, CurveError>
where
    B: Backend + ?Sized,
    I: IntoIterator<Item = &'a Key>
{
    let mut sum = backend.identity();
    for key in keys {
        sum = backend.add_keys(&sum, key)?;
    }
    return Ok(sum)
}

///Given input commitments, output commitments, and a public amount (ie fees),
///check if the equation is balanced.
///
///`sum(in) == sum(out) + extra * H`
pub fn is_balanced<B: Backend + ?Sized>(
    backend: &B, in_commitments: &[Key], out_commitments: &[Key], extra: u64
) -> Result<bool, CurveError> {
    let sum_in = sum_keys(backend, in_commitments)?;
    let sum_out = backend.add_keys(
        &sum_keys(backend, out_commitments)?, &commit_to_amount(backend, extra)?)?;
    return Ok(sum_in == sum_out)
}
