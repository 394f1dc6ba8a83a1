/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Parsing, hashing and verification of CryptoNote-style RingCT signatures.
//!
//! A [`RctSig`](rct::RctSig) is decoded from the signature bytes of a transaction
//! (the caller supplies the input/output/mixin counts it already parsed),
//! filled with the data that is never serialized (message, mix ring, key images),
//! and then verified: commitment balance, Borromean rangeproofs, and MLSAG ring signatures.
//!
//! All curve arithmetic goes through the [`Backend`](curve::Backend) trait.
//! [`Ristretto`](curve::Ristretto) is the bundled implementation.

#[macro_use]
extern crate lazy_static;


//internal modules
mod types;
pub use types::*;
mod tobytes;
#[cfg(feature = "to_bytes")]
pub use tobytes::ToBytes;


//uncommon public modules
pub mod pedersen;
pub mod hashes;
pub mod wire;


//"normal" public modules
pub mod errors;
pub mod curve;

pub mod ecdh;
pub mod rangeproof;
pub mod signature;
pub mod rct;


pub mod common {
    //! A collection of commonly-used things in this crate.
    //! Errors, types, to/from bytes, the curve backend, and the RingCT container are all included.
    //!
    //! This is intended for situations where you don't want to bother with
    //! manually specifying everything you need,
    //! such as tests, benchmarks and mockups.
    //!
    //! Use `common::*` if you wish to automatically import everything.

    pub use crate::{
        types::*, errors::*, tobytes::*, curve::*, rct::*
    };
}


mod internal_common {
    //! Similar to `common`, but for internal purposes only.
    //! This includes everything in `common`, as well as the less-common pedersen and wire modules.

    pub use crate::{
        common::*, pedersen::*, wire::*
    };
}
