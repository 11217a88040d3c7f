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

//! The block compression loop shared by every algorithm.

use super::{
    padding::{Block, BLOCK_WORDS},
    word::Word,
};

/// The longest message schedule of any algorithm.
pub(super) const MAX_ROUNDS: usize = 80;

/// A round-mixing strategy over `N`-word states of `W`.
///
/// The set of strategies is closed: SHA-1 (`super::sha1::Sha1`) and SHA-2
/// (`super::sha2::Sha2Rounds`).
pub(super) trait Rounds<W: Word, const N: usize> {
    /// The length of the message schedule, and the number of rounds.
    const ROUNDS: usize;

    /// Computes `w[t]` from earlier schedule entries, for `t >= 16`.
    fn expand(w: &[W], t: usize) -> W;

    /// Runs all the rounds over a copy of the state and returns it.
    fn mix(state: [W; N], w: &[W]) -> [W; N];
}

/// Compresses one block into `H`.
///
/// `H` is only ever changed here, by adding the mixed state to it.
#[allow(non_snake_case)]
#[inline]
pub(super) fn compress<W, R, const N: usize>(mut H: [W; N], M: &Block<W>) -> [W; N]
where
    W: Word,
    R: Rounds<W, N>,
{
    // FIPS 180-4 {6.1.2, 6.2.2, 6.4.2} Step 1
    let mut schedule = [W::ZERO; MAX_ROUNDS];
    let w = &mut schedule[..R::ROUNDS];
    w[..BLOCK_WORDS].copy_from_slice(M);
    for t in BLOCK_WORDS..R::ROUNDS {
        w[t] = R::expand(w, t);
    }

    // FIPS 180-4 {6.1.2, 6.2.2, 6.4.2} Steps 2 and 3
    let mixed = R::mix(H, w);

    // FIPS 180-4 {6.1.2, 6.2.2, 6.4.2} Step 4
    H.iter_mut().zip(mixed).for_each(|(h, m)| *h += m);
    H
}

// FIPS 180-4 {4.1.1, 4.1.2, 4.1.3}
#[inline(always)]
pub(super) fn ch<W: Word>(x: W, y: W, z: W) -> W {
    (x & y) ^ (!x & z)
}

// FIPS 180-4 {4.1.1, 4.1.2, 4.1.3}
#[inline(always)]
pub(super) fn maj<W: Word>(x: W, y: W, z: W) -> W {
    (x & y) ^ (x & z) ^ (y & z)
}

// FIPS 180-4 4.1.1
#[inline(always)]
pub(super) fn parity<W: Word>(x: W, y: W, z: W) -> W {
    x ^ y ^ z
}
