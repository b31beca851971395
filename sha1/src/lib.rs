//! An implementation of the [SHA-1][1] cryptographic hash algorithm.
//!
//! # Usage
//!
//! ```rust
//! use sha1::{Sha1, Digest};
//! use hex_literal::hex;
//!
//! // create a SHA-1 hasher instance
//! let mut hasher = Sha1::new();
//!
//! // process input message
//! hasher.update(b"hello world");
//!
//! // acquire hash digest in the form of GenericArray,
//! // which in this case is equivalent to [u8; 20]
//! let result = hasher.finalize();
//! assert_eq!(result[..], hex!("2aae6c35c94fcfb415dbe95f408b9ce91ee846ed"));
//! ```
//!
//! [1]: https://en.wikipedia.org/wiki/SHA-1

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

#[cfg(feature = "std")]
extern crate std;

pub use digest::{self, Digest};

use block_buffer::BlockBuffer;
use digest::consts::{U20, U64};
use digest::generic_array::GenericArray;
use digest::{BlockInput, FixedOutput, Reset, Update};

#[cfg(feature = "std")]
use std::{
    io::{self, Read},
    string::String,
};

mod compress;
mod consts;

use crate::compress::compress;
use crate::consts::{H, STATE_LEN};

/// Digest produced by a completed SHA-1 computation: 20 bytes, the five
/// state registers serialized big-endian, most-significant register first.
pub type Sha1Digest = GenericArray<u8, U20>;

/// Structure representing the state of an in-progress SHA-1 computation.
#[derive(Clone)]
pub struct Sha1 {
    h: [u32; STATE_LEN],
    len: u64,
    buffer: BlockBuffer<U64>,
}

impl Default for Sha1 {
    fn default() -> Self {
        Sha1 {
            h: H,
            len: 0,
            buffer: Default::default(),
        }
    }
}

impl BlockInput for Sha1 {
    type BlockSize = U64;
}

impl Update for Sha1 {
    fn update(&mut self, input: impl AsRef<[u8]>) {
        let input = input.as_ref();
        // Assumes that `len` does not overflow
        self.len += input.len() as u64;
        let h = &mut self.h;
        self.buffer.input_block(input, |b| compress(h, b));
    }
}

impl FixedOutput for Sha1 {
    type OutputSize = U20;

    fn finalize_into(mut self, out: &mut GenericArray<u8, Self::OutputSize>) {
        self.finalize_inner(out);
    }

    fn finalize_into_reset(&mut self, out: &mut GenericArray<u8, Self::OutputSize>) {
        self.finalize_inner(out);
        Reset::reset(self);
    }
}

impl Reset for Sha1 {
    fn reset(&mut self) {
        self.h = H;
        self.len = 0;
        self.buffer.reset();
    }
}

impl Sha1 {
    fn finalize_inner(&mut self, out: &mut Sha1Digest) {
        let bit_len = self.len << 3;
        let h = &mut self.h;
        self.buffer.len64_padding_be(bit_len, |b| compress(h, b));
        for (chunk, v) in out.chunks_exact_mut(4).zip(h.iter()) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }
    }
}

opaque_debug::implement!(Sha1);
digest::impl_write!(Sha1);

/// Renders a digest as its 40-character lowercase hexadecimal form, two
/// characters per byte, high nibble first. No trailing newline.
#[cfg(feature = "std")]
pub fn to_hex(digest: &Sha1Digest) -> String {
    const CHARS: &[u8; 16] = b"0123456789abcdef";
    let mut hex = String::with_capacity(2 * digest.len());
    for &byte in digest.iter() {
        hex.push(CHARS[(byte >> 4) as usize] as char);
        hex.push(CHARS[(byte & 0x0f) as usize] as char);
    }
    hex
}

/// Hashes every byte of `reader` until end of stream and returns the digest.
///
/// Bytes are consumed through a two-block scratch buffer, so memory usage
/// does not depend on the stream length. A read of zero bytes marks end of
/// stream. Read errors abort the computation and are returned to the
/// caller unmodified, except [`io::ErrorKind::Interrupted`], after which
/// the read is retried.
#[cfg(feature = "std")]
pub fn digest_reader<R: Read>(mut reader: R) -> io::Result<Sha1Digest> {
    let mut hasher = Sha1::default();
    let mut buf = [0u8; 128];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => Update::update(&mut hasher, &buf[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(hasher.finalize())
}
