// Copyright 2015-2025 Brian Smith.
// Copyright 2016 Simon Sapin.
//
// Permission to use, copy, modify, and/or distribute this software for any
// purpose with or without fee is hereby granted, provided that the above
// copyright notice and this permission notice appear in all copies.
//
// THE SOFTWARE IS PROVIDED "AS IS" AND THE AUTHORS DISCLAIM ALL WARRANTIES
// WITH REGARD TO THIS SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF
// MERCHANTABILITY AND FITNESS. IN NO EVENT SHALL THE AUTHORS BE LIABLE FOR ANY
// SPECIAL, DIRECT, INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES
// WHATSOEVER RESULTING FROM LOSS OF USE, DATA OR PROFITS, WHETHER IN AN ACTION
// OF CONTRACT, NEGLIGENCE OR OTHER TORTIOUS ACTION, ARISING OUT OF OR IN
// CONNECTION WITH THE USE OR PERFORMANCE OF THIS SOFTWARE.

use super::{
    compress::{ch, maj, parity, Rounds},
    w32::W32,
    word::Word,
};
use core::num::Wrapping;

pub(super) const BLOCK_LEN: usize = 512 / 8;
pub(super) const CHAINING_LEN: usize = 160 / 8;
pub(super) const OUTPUT_LEN: usize = 160 / 8;
pub(super) const CHAINING_WORDS: usize = CHAINING_LEN / 4;

pub(super) type State = [W32; CHAINING_WORDS];

// FIPS 180-4 5.3.1
pub(super) const INITIAL_STATE: State = [
    Wrapping(0x67452301),
    Wrapping(0xefcdab89),
    Wrapping(0x98badcfe),
    Wrapping(0x10325476),
    Wrapping(0xc3d2e1f0),
];

// FIPS 180-4 4.2.1
const K: [u32; 4] = [0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xca62c1d6];

/// The SHA-1 round function.
///
/// The main purpose in retaining this is to support legacy protocols, none of
/// which need a fast SHA-1 implementation, so this favors simplicity.
pub(super) struct Sha1;

impl Rounds<W32, CHAINING_WORDS> for Sha1 {
    // FIPS 180-4 6.1.2 Step 1
    const ROUNDS: usize = 80;

    #[inline(always)]
    fn expand(w: &[W32], t: usize) -> W32 {
        (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotl(1)
    }

    // FIPS 180-4 6.1.2 Steps 2 and 3
    fn mix(state: State, w: &[W32]) -> State {
        let [mut a, mut b, mut c, mut d, mut e] = state;

        for (t, &wt) in w.iter().enumerate() {
            let (k, f) = match t / 20 {
                0 => (K[0], ch(b, c, d)),
                1 => (K[1], parity(b, c, d)),
                2 => (K[2], maj(b, c, d)),
                _ => (K[3], parity(b, c, d)),
            };
            let tt = a.rotl(5) + f + e + Wrapping(k) + wt;
            e = d;
            d = c;
            c = b.rotl(30);
            b = a;
            a = tt;
        }

        [a, b, c, d, e]
    }
}
