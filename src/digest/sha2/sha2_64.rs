// Copyright 2024 Brian Smith.
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

use super::{super::w64::W64, Sha2Rounds, CHAINING_WORDS};
use alloc::format;
use core::num::Wrapping;

pub(in super::super) const SHA512_BLOCK_LEN: usize = 1024 / 8;

pub(in super::super) type State64 = [W64; CHAINING_WORDS];

// FIPS 180-4 5.3.4
pub(in super::super) const SHA384_INITIAL_STATE: State64 = [
    Wrapping(0xcbbb9d5dc1059ed8),
    Wrapping(0x629a292a367cd507),
    Wrapping(0x9159015a3070dd17),
    Wrapping(0x152fecd8f70e5939),
    Wrapping(0x67332667ffc00b31),
    Wrapping(0x8eb44a8768581511),
    Wrapping(0xdb0c2e0d64f98fa7),
    Wrapping(0x47b5481dbefa4fa4),
];

// FIPS 180-4 5.3.5
pub(in super::super) const SHA512_INITIAL_STATE: State64 = [
    Wrapping(0x6a09e667f3bcc908),
    Wrapping(0xbb67ae8584caa73b),
    Wrapping(0x3c6ef372fe94f82b),
    Wrapping(0xa54ff53a5f1d36f1),
    Wrapping(0x510e527fade682d1),
    Wrapping(0x9b05688c2b3e6c1f),
    Wrapping(0x1f83d9abfb41bd6b),
    Wrapping(0x5be0cd19137e2179),
];

// FIPS 180-4 5.3.6.1
pub(in super::super) const SHA512_224_INITIAL_STATE: State64 = [
    Wrapping(0x8c3d37c819544da2),
    Wrapping(0x73e1996689dcd4d6),
    Wrapping(0x1dfab7ae32ff9c82),
    Wrapping(0x679dd514582f9fcf),
    Wrapping(0x0f6d2b697bd44da8),
    Wrapping(0x77e36f7304c48942),
    Wrapping(0x3f9d85a86a1d36c8),
    Wrapping(0x1112e6ad91d692a1),
];

// FIPS 180-4 5.3.6.2
pub(in super::super) const SHA512_256_INITIAL_STATE: State64 = [
    Wrapping(0x22312194fc2bf72c),
    Wrapping(0x9f555fa3c84c64c2),
    Wrapping(0x2393b86b6f53b151),
    Wrapping(0x963877195940eabd),
    Wrapping(0x96283ee2a88effe3),
    Wrapping(0xbe5e1e2553863992),
    Wrapping(0x2b0199fc2c85b8aa),
    Wrapping(0x0eb72ddc81c52ca2),
];

/// Computes the initial hash value of SHA-512/t, FIPS 180-4 5.3.6.
///
/// The caller is responsible for `t` being a valid truncation; the label is
/// hashed whatever `t` is.
pub(in super::super) fn derive_sha512_t_state(t: u16) -> State64 {
    const IV_MASK: W64 = Wrapping(0xa5a5a5a5a5a5a5a5);

    let modified = SHA512_INITIAL_STATE.map(|h| h ^ IV_MASK);
    let label = format!("SHA-512/{}", t);
    super::super::block_data_order::<_, Sha2Rounds, CHAINING_WORDS>(modified, label.as_bytes())
}

// FIPS 180-4 4.2.3
pub(super) static K_64: [W64; 80] = k_table![
    0x428a2f98d728ae22, 0x7137449123ef65cd, 0xb5c0fbcfec4d3b2f, 0xe9b5dba58189dbbc,
    0x3956c25bf348b538, 0x59f111f1b605d019, 0x923f82a4af194f9b, 0xab1c5ed5da6d8118,
    0xd807aa98a3030242, 0x12835b0145706fbe, 0x243185be4ee4b28c, 0x550c7dc3d5ffb4e2,
    0x72be5d74f27b896f, 0x80deb1fe3b1696b1, 0x9bdc06a725c71235, 0xc19bf174cf692694,
    0xe49b69c19ef14ad2, 0xefbe4786384f25e3, 0x0fc19dc68b8cd5b5, 0x240ca1cc77ac9c65,
    0x2de92c6f592b0275, 0x4a7484aa6ea6e483, 0x5cb0a9dcbd41fbd4, 0x76f988da831153b5,
    0x983e5152ee66dfab, 0xa831c66d2db43210, 0xb00327c898fb213f, 0xbf597fc7beef0ee4,
    0xc6e00bf33da88fc2, 0xd5a79147930aa725, 0x06ca6351e003826f, 0x142929670a0e6e70,
    0x27b70a8546d22ffc, 0x2e1b21385c26c926, 0x4d2c6dfc5ac42aed, 0x53380d139d95b3df,
    0x650a73548baf63de, 0x766a0abb3c77b2a8, 0x81c2c92e47edaee6, 0x92722c851482353b,
    0xa2bfe8a14cf10364, 0xa81a664bbc423001, 0xc24b8b70d0f89791, 0xc76c51a30654be30,
    0xd192e819d6ef5218, 0xd69906245565a910, 0xf40e35855771202a, 0x106aa07032bbd1b8,
    0x19a4c116b8d2d0c8, 0x1e376c085141ab53, 0x2748774cdf8eeb99, 0x34b0bcb5e19b48a8,
    0x391c0cb3c5c95a63, 0x4ed8aa4ae3418acb, 0x5b9cca4f7763e373, 0x682e6ff3d6b2b8a3,
    0x748f82ee5defb2fc, 0x78a5636f43172f60, 0x84c87814a1f0ab72, 0x8cc702081a6439ec,
    0x90befffa23631e28, 0xa4506cebde82bde9, 0xbef9a3f7b2c67915, 0xc67178f2e372532b,
    0xca273eceea26619c, 0xd186b8c721c0c207, 0xeada7dd6cde0eb1e, 0xf57d4f7fee6ed178,
    0x06f067aa72176fba, 0x0a637dc5a2c898a6, 0x113f9804bef90dae, 0x1b710b35131c471b,
    0x28db77f523047d84, 0x32caab7b40c72493, 0x3c9ebe0a15c9bebc, 0x431d67c49c100d4c,
    0x4cc5d4becb3e42b6, 0x597f299cfc657e2a, 0x5fcb6fab3ad6faec, 0x6c44198c4a475817,
];
