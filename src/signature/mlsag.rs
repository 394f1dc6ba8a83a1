/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::internal_common::*;

///A RingCT ring signature.
///
///MLSAG stands for "Multilayered Linkable Spontaneous Anonymous Group (signature)"
///
/// * `ss`: one row of responses per ring member, one response per matrix column
/// * `cc`: the challenge the ring starts from (and must return to)
/// * `key_images`: one per linkable column. These come from the transaction inputs
///   and are not part of the signature encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MlsagSig {
    pub ss: Vec<Vec<Key>>,
    pub cc: Key,
    pub key_images: Vec<Key>

} impl MlsagSig {
    ///Given an MLSAG signature, the public key matrix (`pubkeys[ring member][column]`),
    ///and the number of linkable columns (which come first and have key images), check if it's valid.
    ///
    ///Returns `Ok()` if the signature is valid,
    ///or `Err(SignatureError)` if it's invalid or malformed.
    pub fn verify<B: Backend + ?Sized>(
        backend: &B, signature: &MlsagSig, message: &Key, pubkeys: &[Vec<Key>], linkable: usize
    ) -> Result<(), SignatureError> {
        let MlsagSig{ss, cc, key_images} = signature;

        let members = pubkeys.len();
        let columns = match pubkeys.first() {
            Some(row) => row.len(),
            None => return Err(SignatureError::Malformed)
        };
        if columns == 0
            || linkable > columns
            || key_images.len() != linkable
            || ss.len() != members
            || pubkeys.iter().any(|row| row.len() != columns)
            || ss.iter().any(|row| row.len() != columns) {
            return Err(SignatureError::Malformed)
        }

        let key_image_points = pubkeys.iter()
            .map(|row| row[..linkable].iter()
                .map(|key| backend.hash_to_point(key))
                .collect::<Result<Vec<Key>, CurveError>>())
            .collect::<Result<Vec<Vec<Key>>, CurveError>>()?;

        let mut to_hash: Vec<u8> = Vec::with_capacity(32 * (1 + 3 * linkable + 2 * (columns - linkable)));
        let mut c = *cc;
        //travel around the ring
        for i in 0..members {
            to_hash.clear();
            to_hash.extend_from_slice(message.as_bytes());

            //linking key operations
            for j in 0..linkable {
                //(ss[i][j] * G) + (c * P[i][j])
                let left = backend.add_keys2(&ss[i][j], &c, &pubkeys[i][j])?;
                //(ss[i][j] * Hp(P[i][j])) + (c * I[j])
                let right = backend.add_keys3(&ss[i][j], &key_image_points[i][j], &c, &key_images[j])?;
                to_hash.extend_from_slice(pubkeys[i][j].as_bytes());
                to_hash.extend_from_slice(left.as_bytes());
                to_hash.extend_from_slice(right.as_bytes());
            }

            //non-linkable (commitment) operations
            for j in linkable..columns {
                let left = backend.add_keys2(&ss[i][j], &c, &pubkeys[i][j])?;
                to_hash.extend_from_slice(pubkeys[i][j].as_bytes());
                to_hash.extend_from_slice(left.as_bytes());
            }

            c = backend.hash_to_scalar(&to_hash);
        }

        //check if we end up back where we started
        return match c == *cc {
            true => Ok(()),
            false => Err(SignatureError::Invalid)
        };
    }

    ///Decode a signature of `members` rows and `columns` responses per row.
    ///Key images are left empty.
    pub fn wire_decode(
        reader: &mut WireReader<'_>, members: usize, columns: usize
    ) -> Result<Self, DecodeError> {
        let mut ss: Vec<Vec<Key>> = Vec::new();
        for _ in 0..members {
            let mut row: Vec<Key> = Vec::new();
            for _ in 0..columns {
                row.push(reader.read_key()?);
            }
            ss.push(row);
        }
        let cc = reader.read_key()?;
        return Ok(Self{
            ss,
            cc,
            key_images: Vec::new()
        })
    }

} impl WireEncode for MlsagSig {
    fn wire_encode(&self, out: &mut Vec<u8>) {
        for row in &self.ss {
            for key in row {
                key.wire_encode(out);
            }
        }
        self.cc.wire_encode(out);
    }
}
