use core::convert::TryInto;

use digest::generic_array::{typenum::U64, GenericArray};

use crate::consts::{K0, K1, K2, K3, STATE_LEN};

pub(crate) type Block = GenericArray<u8, U64>;

#[inline(always)]
fn choice(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

#[inline(always)]
fn parity(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

#[inline(always)]
fn majority(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

/// Expands a block into the 80-word message schedule.
///
/// The first 16 words are the block read as big-endian double-words, the
/// rest are derived recursively.
fn schedule(block: &Block) -> [u32; 80] {
    let mut w = [0u32; 80];
    for (wi, chunk) in w[..16].iter_mut().zip(block.chunks_exact(4)) {
        *wi = u32::from_be_bytes(chunk.try_into().unwrap());
    }
    for i in 16..80 {
        w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
    }
    w
}

/// Mixes one 64-byte block into the register state.
///
/// Runs the 80 compression steps and folds the result additively into the
/// pre-round state, so each block chains on the previous one.
pub(crate) fn compress(state: &mut [u32; STATE_LEN], block: &Block) {
    let w = schedule(block);

    let [mut a, mut b, mut c, mut d, mut e] = *state;

    for (i, &word) in w.iter().enumerate() {
        let (f, k) = match i / 20 {
            0 => (choice(b, c, d), K0),
            1 => (parity(b, c, d), K1),
            2 => (majority(b, c, d), K2),
            _ => (parity(b, c, d), K3),
        };
        let t = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(k)
            .wrapping_add(word);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = t;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}
