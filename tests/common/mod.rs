// SPDX short identifier: Unlicense

//! Test-only proof generation.
//!
//! The crate only verifies, so these helpers build valid rangeproofs, MLSAGs
//! and whole signatures through the public `Backend` API.

#![allow(dead_code)]

use rand::{thread_rng, Rng};

use rctsig::{
    common::*,
    ecdh::ecdh_encode,
    pedersen::commit,
    rangeproof::{
        BoroSig,
        RangeSig,
        BIT_RANGE
    },
    signature::{
        MlsagSig,
        simple_ring_matrix,
        full_ring_matrix
    }
};

pub const BACKEND: Ristretto = Ristretto;

pub fn random_scalar() -> Scalar {
    let mut scalar_bytes = [0u8; 64];
    thread_rng().fill(&mut scalar_bytes[..]);
    return Scalar::from_bytes_mod_order_wide(&scalar_bytes);
}

pub fn key(scalar: &Scalar) -> Key {
    return Ristretto::encode_scalar(scalar)
}

pub fn sc(key: &Key) -> Scalar {
    return Scalar::from_bytes_mod_order(key.0)
}

pub fn random_point() -> Key {
    return BACKEND.scalarmult_base(&key(&random_scalar())).unwrap()
}

pub fn random_index(n: usize) -> usize {
    return thread_rng().gen::<usize>() % n
}

///Flip one bit of a key.
pub fn tamper(key: &mut Key, byte: usize) {
    key.0[byte % 32] ^= 0x01;
}

///Borromean rangeproof of `amount`: returns the commitment, its blinding factor, and the proof.
pub fn prove_range(amount: u64) -> (Key, Scalar, RangeSig) {
    let mut a = [Scalar::zero(); BIT_RANGE];
    let mut ci = [Key::ZERO; BIT_RANGE];
    let mut ci_h = [Key::ZERO; BIT_RANGE];

    let mut h_pow = BACKEND.h();
    for i in 0..BIT_RANGE {
        a[i] = random_scalar();
        let a_g = BACKEND.scalarmult_base(&key(&a[i])).unwrap();
        ci[i] = match (amount >> i) & 1 {
            0 => a_g,
            _ => BACKEND.add_keys(&a_g, &h_pow).unwrap()
        };
        ci_h[i] = BACKEND.sub_keys(&ci[i], &h_pow).unwrap();
        h_pow = BACKEND.add_keys(&h_pow, &h_pow).unwrap();
    }

    let mut alpha = [Scalar::zero(); BIT_RANGE];
    let mut s0 = [Key::ZERO; BIT_RANGE];
    let mut s1 = [Key::ZERO; BIT_RANGE];
    let mut l1: Vec<u8> = Vec::new();
    for i in 0..BIT_RANGE {
        alpha[i] = random_scalar();
        let l = BACKEND.scalarmult_base(&key(&alpha[i])).unwrap();
        if (amount >> i) & 1 == 0 {
            //the real member is ci[i]; forge the ci_h[i] branch
            s1[i] = key(&random_scalar());
            let c = BACKEND.hash_to_scalar(l.as_bytes());
            l1.extend_from_slice(BACKEND.add_keys2(&s1[i], &c, &ci_h[i]).unwrap().as_bytes());
        } else {
            l1.extend_from_slice(l.as_bytes());
        }
    }
    let ee = BACKEND.hash_to_scalar(&l1);

    for i in 0..BIT_RANGE {
        if (amount >> i) & 1 == 0 {
            s0[i] = key(&(alpha[i] - a[i] * sc(&ee)));
        } else {
            s0[i] = key(&random_scalar());
            let ll = BACKEND.add_keys2(&s0[i], &ee, &ci[i]).unwrap();
            let c = BACKEND.hash_to_scalar(ll.as_bytes());
            s1[i] = key(&(alpha[i] - a[i] * sc(&c)));
        }
    }

    let mask: Scalar = a.iter().sum();
    let commitment = ci.iter().fold(BACKEND.identity(), |sum, c| BACKEND.add_keys(&sum, c).unwrap());
    return (commitment, mask, RangeSig{
        asig: BoroSig{s0, s1, ee},
        ci
    })
}

///MLSAG over `matrix[ring member][column]`, knowing `secrets` for row `index`.
///Key images are filled in.
pub fn sign_mlsag(message: &Key, matrix: &[Vec<Key>], secrets: &[Scalar], index: usize, linkable: usize) -> MlsagSig {
    let members = matrix.len();
    let columns = matrix[0].len();
    assert_eq!(secrets.len(), columns);

    let alpha: Vec<Scalar> = (0..columns).map(|_| random_scalar()).collect();
    let mut key_images: Vec<Key> = Vec::new();
    let mut to_hash: Vec<u8> = message.0.to_vec();
    for j in 0..linkable {
        let hp = BACKEND.hash_to_point(&matrix[index][j]).unwrap();
        key_images.push(BACKEND.scalarmult_key(&hp, &key(&secrets[j])).unwrap());
        to_hash.extend_from_slice(matrix[index][j].as_bytes());
        to_hash.extend_from_slice(BACKEND.scalarmult_base(&key(&alpha[j])).unwrap().as_bytes());
        to_hash.extend_from_slice(BACKEND.scalarmult_key(&hp, &key(&alpha[j])).unwrap().as_bytes());
    }
    for j in linkable..columns {
        to_hash.extend_from_slice(matrix[index][j].as_bytes());
        to_hash.extend_from_slice(BACKEND.scalarmult_base(&key(&alpha[j])).unwrap().as_bytes());
    }
    let mut c = BACKEND.hash_to_scalar(&to_hash);

    let mut ss = vec!(vec!(Key::ZERO; columns); members);
    let mut cc = Key::ZERO;
    let mut i = (index + 1) % members;
    if i == 0 {
        cc = c;
    }
    while i != index {
        to_hash = message.0.to_vec();
        for j in 0..columns {
            ss[i][j] = key(&random_scalar());
        }
        for j in 0..linkable {
            let hp = BACKEND.hash_to_point(&matrix[i][j]).unwrap();
            let l = BACKEND.add_keys2(&ss[i][j], &c, &matrix[i][j]).unwrap();
            let r = BACKEND.add_keys3(&ss[i][j], &hp, &c, &key_images[j]).unwrap();
            to_hash.extend_from_slice(matrix[i][j].as_bytes());
            to_hash.extend_from_slice(l.as_bytes());
            to_hash.extend_from_slice(r.as_bytes());
        }
        for j in linkable..columns {
            let l = BACKEND.add_keys2(&ss[i][j], &c, &matrix[i][j]).unwrap();
            to_hash.extend_from_slice(matrix[i][j].as_bytes());
            to_hash.extend_from_slice(l.as_bytes());
        }
        c = BACKEND.hash_to_scalar(&to_hash);
        i = (i + 1) % members;
        if i == 0 {
            cc = c;
        }
    }

    for j in 0..columns {
        ss[index][j] = key(&(alpha[j] - sc(&c) * secrets[j]));
    }
    return MlsagSig{ss, cc, key_images}
}

///An output created by a fixture, with everything its recipient would know.
pub struct Output {
    pub amount: u64,
    pub mask: Scalar,
    pub shared_secret: Key,
    pub commitment: Key
}

///A valid signature, plus everything needed to decode and verify it again.
pub struct Fixture {
    pub sig: RctSig,
    pub shape: RctShape,
    pub message: Key,
    pub mix_ring: MixRing,
    pub key_images: Vec<Key>,
    pub destinations: Vec<Key>,
    pub outputs: Vec<Output>
}

impl Fixture {
    ///Decode the wire bytes of `sig` and fill in the unserialized parts, like a node would.
    pub fn redecode(&self) -> RctSig {
        let mut decoded = RctSig::from_wire(&self.sig.to_wire(), self.shape).unwrap();
        decoded.set_message(self.message);
        decoded.set_mix_ring(self.mix_ring.clone());
        decoded.set_key_images(&self.key_images);
        if let Some(base) = decoded.base_mut() {
            for (ct_key, destination) in base.out_pk.iter_mut().zip(&self.destinations) {
                ct_key.destination = *destination;
            }
        }
        return decoded
    }
}

fn make_outputs(amounts: &[u64]) -> (Vec<Output>, Vec<EcdhTuple>, Vec<CtKey>, Vec<RangeSig>) {
    let mut outputs = Vec::new();
    let mut ecdh_info = Vec::new();
    let mut out_pk = Vec::new();
    let mut range_sigs = Vec::new();
    for &amount in amounts {
        let (commitment, mask, range_sig) = prove_range(amount);
        let shared_secret = random_point();
        ecdh_info.push(ecdh_encode(&BACKEND, &EcdhTuple::new(key(&mask), Key::from_amount(amount)), &shared_secret));
        out_pk.push(CtKey::new(random_point(), commitment));
        range_sigs.push(range_sig);
        outputs.push(Output{amount, mask, shared_secret, commitment});
    }
    return (outputs, ecdh_info, out_pk, range_sigs)
}

fn make_ring(amount: u64, mask: &Scalar, secret: &Scalar, real_index: usize, members: usize) -> Vec<CtKey> {
    return (0..members).map(|m| match m == real_index {
        true => CtKey::new(
            BACKEND.scalarmult_base(&key(secret)).unwrap(),
            commit(&BACKEND, amount, &key(mask)).unwrap()
        ),
        false => CtKey::new(random_point(), random_point())
    }).collect()
}

///A valid Simple signature. Input amounts must equal output amounts plus `fee`.
pub fn simple_fixture(in_amounts: &[u64], out_amounts: &[u64], fee: u64, mixin: usize) -> Fixture {
    assert!(!in_amounts.is_empty());
    let (outputs, ecdh_info, out_pk, range_sigs) = make_outputs(out_amounts);
    let destinations = out_pk.iter().map(|ct_key| ct_key.destination).collect();

    //pseudo-out masks sum to the output masks, so only the amounts are left to balance
    let out_mask_sum: Scalar = outputs.iter().map(|output| output.mask).sum();
    let mut pseudo_masks: Vec<Scalar> = (1..in_amounts.len()).map(|_| random_scalar()).collect();
    let partial: Scalar = pseudo_masks.iter().sum();
    pseudo_masks.push(out_mask_sum - partial);
    let pseudo_outs: Vec<Key> = in_amounts.iter().zip(&pseudo_masks)
        .map(|(amount, mask)| commit(&BACKEND, *amount, &key(mask)).unwrap())
        .collect();

    let secrets: Vec<Scalar> = in_amounts.iter().map(|_| random_scalar()).collect();
    let masks: Vec<Scalar> = in_amounts.iter().map(|_| random_scalar()).collect();
    let real_indices: Vec<usize> = in_amounts.iter().map(|_| random_index(mixin + 1)).collect();
    let mix_ring: MixRing = (0..in_amounts.len())
        .map(|i| make_ring(in_amounts[i], &masks[i], &secrets[i], real_indices[i], mixin + 1))
        .collect();

    let message = random_point();
    let mut sig = RctSig::Simple(RctSigSimple{
        base: RctSigBase{
            message,
            mix_ring: mix_ring.clone(),
            ecdh_info,
            out_pk,
            tx_fee: fee
        },
        pseudo_outs: pseudo_outs.clone(),
        range_sigs,
        mlsags: Vec::new()
    });
    let pre_mlsag_hash = sig.pre_mlsag_hash(&BACKEND);

    let mut mlsags = Vec::new();
    for i in 0..in_amounts.len() {
        let matrix = simple_ring_matrix(&BACKEND, &mix_ring[i], &pseudo_outs[i]).unwrap();
        mlsags.push(sign_mlsag(
            &pre_mlsag_hash, &matrix, &[secrets[i], masks[i] - pseudo_masks[i]], real_indices[i], 1));
    }
    let key_images = mlsags.iter().map(|mlsag| mlsag.key_images[0]).collect();
    if let RctSig::Simple(simple) = &mut sig {
        simple.mlsags = mlsags;
    }

    return Fixture{
        sig,
        shape: RctShape::new(in_amounts.len(), out_amounts.len(), mixin),
        message,
        mix_ring,
        key_images,
        destinations,
        outputs
    }
}

///A valid Full signature. Input amounts must equal output amounts plus `fee`.
pub fn full_fixture(in_amounts: &[u64], out_amounts: &[u64], fee: u64, mixin: usize) -> Fixture {
    assert!(!in_amounts.is_empty());
    let (outputs, ecdh_info, out_pk, range_sigs) = make_outputs(out_amounts);
    let destinations = out_pk.iter().map(|ct_key| ct_key.destination).collect();

    let secrets: Vec<Scalar> = in_amounts.iter().map(|_| random_scalar()).collect();
    let masks: Vec<Scalar> = in_amounts.iter().map(|_| random_scalar()).collect();
    //a Full signature hides all inputs in the same row
    let real_index = random_index(mixin + 1);
    let mix_ring: MixRing = (0..in_amounts.len())
        .map(|i| make_ring(in_amounts[i], &masks[i], &secrets[i], real_index, mixin + 1))
        .collect();

    let message = random_point();
    let mut sig = RctSig::Full(RctSigFull{
        base: RctSigBase{
            message,
            mix_ring: mix_ring.clone(),
            ecdh_info,
            out_pk: out_pk.clone(),
            tx_fee: fee
        },
        range_sigs,
        mlsag: MlsagSig::default()
    });
    let pre_mlsag_hash = sig.pre_mlsag_hash(&BACKEND);

    let matrix = full_ring_matrix(&BACKEND, &mix_ring, &out_pk, fee).unwrap();
    let in_mask_sum: Scalar = masks.iter().sum();
    let out_mask_sum: Scalar = outputs.iter().map(|output| output.mask).sum();
    let mut all_secrets = secrets.clone();
    all_secrets.push(in_mask_sum - out_mask_sum);
    let mlsag = sign_mlsag(&pre_mlsag_hash, &matrix, &all_secrets, real_index, in_amounts.len());
    let key_images = mlsag.key_images.clone();
    if let RctSig::Full(full) = &mut sig {
        full.mlsag = mlsag;
    }

    return Fixture{
        sig,
        shape: RctShape::new(in_amounts.len(), out_amounts.len(), mixin),
        message,
        mix_ring,
        key_images,
        destinations,
        outputs
    }
}
