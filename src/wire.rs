/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Low-level pieces of the consensus wire format:
//! raw fixed-width keys and little-endian base-128 varints.

use crate::errors::DecodeError;
use crate::types::{Key, Key64};

///Longest varint encoding of a `u64`.
pub const MAX_VARINT_LEN: usize = 10;

///Append the varint encoding of `value` to `out`.
pub fn write_varint(out: &mut Vec<u8>, mut value: u64) {
    while value >= 0x80 {
        out.push((value as u8 & 0x7f) | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
}

///Values which have a fixed wire encoding with no length prefix.
pub trait WireEncode {
    fn wire_encode(&self, out: &mut Vec<u8>);
}

///Values with a fixed layout whose size needs no outside information.
pub trait WireDecode: Sized {
    fn wire_decode(reader: &mut WireReader<'_>) -> Result<Self, DecodeError>;
}

impl WireEncode for Key {
    fn wire_encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.0);
    }
}

impl WireEncode for Key64 {
    fn wire_encode(&self, out: &mut Vec<u8>) {
        for key in self {
            key.wire_encode(out);
        }
    }
}

///Cursor over a byte buffer. Every read either succeeds completely or fails
///with `DecodeError::MalformedEncoding` without consuming anything.
#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    bytes: &'a [u8],
    position: usize

} impl<'a> WireReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        return Self{bytes, position: 0}
    }

    ///Number of bytes consumed so far.
    pub fn position(&self) -> usize {
        return self.position
    }

    ///Bytes that have not been read yet.
    pub fn remaining(&self) -> &'a [u8] {
        return &self.bytes[self.position..]
    }

    pub fn is_empty(&self) -> bool {
        return self.position == self.bytes.len()
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        let remaining = self.remaining();
        if remaining.len() < n {
            return Err(DecodeError::MalformedEncoding)
        }
        self.position += n;
        return Ok(&remaining[..n])
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        return Ok(self.take(1)?[0])
    }

    pub fn read_key(&mut self) -> Result<Key, DecodeError> {
        let mut key = Key::ZERO;
        key.0.copy_from_slice(self.take(32)?);
        return Ok(key)
    }

    pub fn read_key64(&mut self) -> Result<Key64, DecodeError> {
        let mut keys = [Key::ZERO; 64];
        for key in keys.iter_mut() {
            *key = self.read_key()?;
        }
        return Ok(keys)
    }

    ///Read a varint.
    ///
    ///Encodings longer than `MAX_VARINT_LEN`, values overflowing a `u64`,
    ///and non-canonical encodings (a final zero byte after the first) are rejected,
    ///so that every accepted value re-encodes to the same bytes.
    pub fn read_varint(&mut self) -> Result<u64, DecodeError> {
        let start = self.position;
        let mut value: u64 = 0;
        for i in 0..MAX_VARINT_LEN {
            let byte = match self.read_u8() {
                Ok(byte) => byte,
                Err(e) => {
                    self.position = start;
                    return Err(e)
                }
            };
            let shift = 7 * i as u32;
            let bits = (byte & 0x7f) as u64;
            if (shift == 63 && bits > 1) || (i > 0 && byte == 0) {
                self.position = start;
                return Err(DecodeError::MalformedEncoding)
            }
            value |= bits << shift;
            if byte & 0x80 == 0 {
                return Ok(value)
            }
        }
        self.position = start;
        return Err(DecodeError::MalformedEncoding)
    }
}
