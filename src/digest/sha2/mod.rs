// Copyright 2019-2025 Brian Smith.
//
// Permission to use, copy, modify, and/or distribute this software for any
// purpose with or without fee is hereby granted, provided that the above
// copyright notice and this permission notice appear in all copies.
//
// THE SOFTWARE IS PROVIDED "AS IS" AND THE AUTHOR DISCLAIMS ALL WARRANTIES
// WITH REGARD TO THIS SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF
// MERCHANTABILITY AND FITNESS. IN NO EVENT SHALL THE AUTHOR BE LIABLE FOR ANY
// SPECIAL, DIRECT, INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES
// WHATSOEVER RESULTING FROM LOSS OF USE, DATA OR PROFITS, WHETHER IN AN ACTION
// OF CONTRACT, NEGLIGENCE OR OTHER TORTIOUS ACTION, ARISING OUT OF OR IN
// CONNECTION WITH THE USE OR PERFORMANCE OF THIS SOFTWARE.

use super::{
    compress::{ch, maj, Rounds},
    w32::W32,
    w64::W64,
    word::Word,
};

pub(super) use self::{
    sha2_32::{State32, SHA224_INITIAL_STATE, SHA256_BLOCK_LEN, SHA256_INITIAL_STATE},
    sha2_64::{
        derive_sha512_t_state, State64, SHA384_INITIAL_STATE, SHA512_224_INITIAL_STATE,
        SHA512_256_INITIAL_STATE, SHA512_BLOCK_LEN, SHA512_INITIAL_STATE,
    },
};

pub(super) const CHAINING_WORDS: usize = 8;

// Wraps each round constant so the tables can be used as words directly.
macro_rules! k_table {
    ( $( $k:expr ),+ $(,)? ) => { [ $( core::num::Wrapping($k) ),+ ] };
}

mod sha2_32;
mod sha2_64;

/// The SHA-2 round function, for either word width.
pub(super) struct Sha2Rounds;

impl<S: Sha2> Rounds<S, CHAINING_WORDS> for Sha2Rounds {
    const ROUNDS: usize = S::ROUNDS;

    #[inline(always)]
    fn expand(w: &[S], t: usize) -> S {
        sigma_1(w[t - 2]) + w[t - 7] + sigma_0(w[t - 15]) + w[t - 16]
    }

    // FIPS 180-4 {6.2.2, 6.4.2} Steps 2 and 3
    #[allow(non_snake_case)]
    fn mix(state: [S; CHAINING_WORDS], w: &[S]) -> [S; CHAINING_WORDS] {
        let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = state;

        for (&Kt, &Wt) in S::k_table().iter().zip(w) {
            let T1 = h + SIGMA_1(e) + ch(e, f, g) + Kt + Wt;
            let T2 = SIGMA_0(a) + maj(a, b, c);
            h = g;
            g = f;
            f = e;
            e = d + T1;
            d = c;
            c = b;
            b = a;
            a = T1 + T2;
        }

        [a, b, c, d, e, f, g, h]
    }
}

// FIPS 180-4 {4.1.2, 4.1.3}
#[allow(non_snake_case)]
#[inline(always)]
fn SIGMA_0<S: Sha2>(x: S) -> S {
    x.rotr(S::BIG_SIGMA_0.0) ^ x.rotr(S::BIG_SIGMA_0.1) ^ x.rotr(S::BIG_SIGMA_0.2)
}

// FIPS 180-4 {4.1.2, 4.1.3}
#[allow(non_snake_case)]
#[inline(always)]
fn SIGMA_1<S: Sha2>(x: S) -> S {
    x.rotr(S::BIG_SIGMA_1.0) ^ x.rotr(S::BIG_SIGMA_1.1) ^ x.rotr(S::BIG_SIGMA_1.2)
}

// FIPS 180-4 {4.1.2, 4.1.3}
#[inline(always)]
fn sigma_0<S: Sha2>(x: S) -> S {
    x.rotr(S::SMALL_SIGMA_0.0) ^ x.rotr(S::SMALL_SIGMA_0.1) ^ (x >> S::SMALL_SIGMA_0.2)
}

// FIPS 180-4 {4.1.2, 4.1.3}
#[inline(always)]
fn sigma_1<S: Sha2>(x: S) -> S {
    x.rotr(S::SMALL_SIGMA_1.0) ^ x.rotr(S::SMALL_SIGMA_1.1) ^ (x >> S::SMALL_SIGMA_1.2)
}

/// A SHA-2 word: the rotation amounts, round count, and constants that
/// differ between the 32-bit and 64-bit families.
pub(super) trait Sha2: Word {
    const BIG_SIGMA_0: (u32, u32, u32);
    const BIG_SIGMA_1: (u32, u32, u32);
    const SMALL_SIGMA_0: (u32, u32, usize);
    const SMALL_SIGMA_1: (u32, u32, usize);

    const ROUNDS: usize;

    fn k_table() -> &'static [Self];
}

// SHA-224 and SHA-256
impl Sha2 for W32 {
    // FIPS 180-4 4.1.2
    const BIG_SIGMA_0: (u32, u32, u32) = (2, 13, 22);
    const BIG_SIGMA_1: (u32, u32, u32) = (6, 11, 25);
    const SMALL_SIGMA_0: (u32, u32, usize) = (7, 18, 3);
    const SMALL_SIGMA_1: (u32, u32, usize) = (17, 19, 10);

    // FIPS 180-4 {6.2.2} Step 1
    const ROUNDS: usize = 64;

    // FIPS 180-4 4.2.2
    fn k_table() -> &'static [Self] {
        &sha2_32::K_32
    }
}

// SHA-384, SHA-512, and SHA-512/t
impl Sha2 for W64 {
    // FIPS 180-4 4.1.3
    const BIG_SIGMA_0: (u32, u32, u32) = (28, 34, 39);
    const BIG_SIGMA_1: (u32, u32, u32) = (14, 18, 41);
    const SMALL_SIGMA_0: (u32, u32, usize) = (1, 8, 7);
    const SMALL_SIGMA_1: (u32, u32, usize) = (19, 61, 6);

    // FIPS 180-4 {6.4.2} Step 1
    const ROUNDS: usize = 80;

    // FIPS 180-4 4.2.3
    fn k_table() -> &'static [Self] {
        &sha2_64::K_64
    }
}
