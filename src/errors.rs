/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    error::Error,
    fmt::Display
};

///Storage encoding errors (see `ToBytes`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerializationError {
    ///Failure to serialize.
    EncodingError,
    ///Failure to deserialize.
    DecodingError,

} impl Display for SerializationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self{
            Self::EncodingError => "Encoding error.",
            Self::DecodingError => "Decoding error."
        })
    }

} impl Error for SerializationError {}

///Errors produced while decoding the wire format of a RingCT signature.
///
///No partially decoded signature is ever returned alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    ///The buffer is truncated, has trailing data, or a field is structurally invalid.
    MalformedEncoding,
    ///The leading type tag is not one of Null, Full or Simple.
    InvalidSignatureType(u8),

} impl Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedEncoding => write!(f, "Malformed RingCT signature encoding."),
            Self::InvalidSignatureType(tag) => write!(f, "Invalid RingCT signature type {tag}."),
        }
    }

} impl Error for DecodeError {}

///Errors from the curve backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveError {
    ///The key does not decode to a group element.
    InvalidPoint,
    ///The key is not a canonically encoded scalar.
    InvalidScalar,

} impl Display for CurveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self{
            Self::InvalidPoint => "Key is not a valid curve point.",
            Self::InvalidScalar => "Key is not a canonical scalar."
        })
    }

} impl Error for CurveError {}

///Rangeproof errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeProofError {
    ///The rangeproof is invalid.
    Invalid,
    ///The given rangeproof contains keys which are not valid points or scalars.
    Malformed,

} impl Display for RangeProofError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self{
            Self::Invalid => "This rangeproof is invalid.",
            Self::Malformed => "Malformed proof or parameters.",
        })
    }

} impl Error for RangeProofError {}

impl From<CurveError> for RangeProofError {
    fn from(_: CurveError) -> Self {
        return Self::Malformed
    }
}

///Ring signature errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    ///The signature is invalid.
    Invalid,
    ///The given signature is malformed in some way,
    ///or the parameters are incorrect/inconsistent.
    Malformed,

} impl Display for SignatureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self{
            Self::Invalid => "This signature is invalid.",
            Self::Malformed => "Malformed signature or parameters.",
        })
    }

} impl Error for SignatureError {}

impl From<CurveError> for SignatureError {
    fn from(_: CurveError) -> Self {
        return Self::Malformed
    }
}

///Reasons a RingCT signature was rejected.
///
///Every variant means the same thing to the caller: the signature failed verification.
///The payload only exists for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    ///Pseudo-outputs do not sum to the output commitments plus the fee.
    Unbalanced,
    ///The rangeproof of output `output` failed.
    RangeProof {
        output: usize,
        error: RangeProofError
    },
    ///The ring signature of input `input` failed.
    ///Full signatures only have one ring signature, reported as input 0.
    RingSignature {
        input: usize,
        error: SignatureError
    },
    ///The signature's components are inconsistent with each other,
    ///e.g. an output with no rangeproof or an input with no ring.
    InternalFault(&'static str),

} impl Display for VerificationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unbalanced => write!(f, "Commitments are not balanced."),
            Self::RangeProof { output, error } => write!(f, "Output {output}: {error}"),
            Self::RingSignature { input, error } => write!(f, "Input {input}: {error}"),
            Self::InternalFault(msg) => write!(f, "Inconsistent signature: {msg}"),
        }
    }

} impl Error for VerificationError {}

impl From<CurveError> for VerificationError {
    fn from(_: CurveError) -> Self {
        return Self::InternalFault("undecodable commitment")
    }
}
