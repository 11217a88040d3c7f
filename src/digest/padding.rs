// Copyright 2015-2025 Brian Smith.
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

//! Message padding, FIPS 180-4 section 5.1.

use super::{codec, word::Word};
use alloc::vec::Vec;

/// The number of words in a block, for every algorithm.
pub(super) const BLOCK_WORDS: usize = 16;

/// The unit the compression function consumes.
pub(super) type Block<W> = [W; BLOCK_WORDS];

const MARKER: u8 = 0x80;

/// Pads `msg` and splits the result into blocks.
///
/// The result is never empty: the empty message pads to exactly one block.
pub(super) fn pad<W: Word>(msg: &[u8]) -> Vec<Block<W>> {
    // The tail is shorter than a word, so tail + marker packs into exactly
    // one (possibly short) word group.
    let (whole, tail) = msg.split_at(msg.len() - (msg.len() % W::BYTES));
    let mut last = [0u8; 8];
    last[..tail.len()].copy_from_slice(tail);
    last[tail.len()] = MARKER;

    let mut words: Vec<W> = codec::bytes_to_words(whole);
    words.extend(codec::bytes_to_words::<W>(&last[..=tail.len()]));

    // Reserve the last two slots of the final block for the length, rolling
    // over into a new block when the marker already occupies one of them.
    let filled = words.len() % BLOCK_WORDS;
    let zeros = if filled <= BLOCK_WORDS - 2 {
        (BLOCK_WORDS - 2) - filled
    } else {
        (2 * BLOCK_WORDS - 2) - filled
    };
    words.resize(words.len() + zeros, W::ZERO);
    words.extend(W::length_suffix(msg.len()));
    debug_assert_eq!(words.len() % BLOCK_WORDS, 0);

    words
        .chunks_exact(BLOCK_WORDS)
        .map(|chunk| {
            let mut block = [W::ZERO; BLOCK_WORDS];
            block.copy_from_slice(chunk);
            block
        })
        .collect()
}
