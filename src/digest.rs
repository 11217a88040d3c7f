// Copyright 2015-2019 Brian Smith.
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

//! SHA-2 and the legacy SHA-1 digest algorithms.
//!
//! Hashing is single-shot: the whole message is passed to [`digest`] in one
//! contiguous slice. There is no multi-step context.
//!
//! Every algorithm runs through the same engine: the message is padded into
//! 16-word blocks, each block is compressed into a running state, and the
//! final state is serialized big-endian and truncated to the output length.
//! The algorithms differ only in word width, initial state, round function,
//! and output length, which is what an [`Algorithm`] describes.

use crate::error;
use alloc::string::String;

mod codec;
mod compress;
mod padding;
mod sha1;
mod sha2;
mod w32;
mod w64;
mod word;

use self::{compress::Rounds, sha1::Sha1, sha2::Sha2Rounds, word::Word};

/// Returns the digest of `data` using the given digest algorithm.
///
/// # Examples:
///
/// ```
/// use shadigest::digest;
///
/// let actual = digest::digest(&digest::SHA256, b"hello, world");
/// assert_eq!(
///     hex::encode(actual),
///     "09ca7e4eaa6e8ae9c7d261167129184883644d07dfba7cbfbc4c8a2e08360d5b"
/// );
/// ```
pub fn digest(algorithm: &Algorithm, data: &[u8]) -> Digest {
    tracing::trace!(?algorithm, len = data.len(), "digest");

    let chaining = match algorithm.initial_state {
        InitialState::Sha1(state) => codec::words_to_bytes(
            &block_data_order::<_, Sha1, { sha1::CHAINING_WORDS }>(state, data),
        ),
        InitialState::Sha256(state) => codec::words_to_bytes(
            &block_data_order::<_, Sha2Rounds, { sha2::CHAINING_WORDS }>(state, data),
        ),
        InitialState::Sha512(state) => codec::words_to_bytes(
            &block_data_order::<_, Sha2Rounds, { sha2::CHAINING_WORDS }>(state, data),
        ),
    };
    debug_assert_eq!(chaining.len(), algorithm.chaining_len);

    // Only the first `output_len` bytes of the final state leave this
    // function; the rest of `value` stays zero.
    let mut value = [0u8; MAX_OUTPUT_LEN];
    let output_len = algorithm.output_len;
    value[..output_len].copy_from_slice(&chaining[..output_len]);

    Digest {
        value,
        algorithm: *algorithm,
    }
}

/// Returns the lowercase hex encoding of the digest of the UTF-8 encoding of
/// `msg`.
///
/// ```
/// use shadigest::digest;
///
/// assert_eq!(
///     digest::digest_hex(&digest::SHA1_FOR_LEGACY_USE_ONLY, "hello, world"),
///     "b7e23ec29af22b0b4e41da31e868d57226121c84"
/// );
/// ```
pub fn digest_hex(algorithm: &Algorithm, msg: &str) -> String {
    hex::encode(digest(algorithm, msg.as_bytes()))
}

/// Pads `msg` and compresses every block into `initial`, returning the final
/// state.
fn block_data_order<W, R, const N: usize>(initial: [W; N], msg: &[u8]) -> [W; N]
where
    W: Word,
    R: Rounds<W, N>,
{
    let blocks = padding::pad::<W>(msg);
    tracing::trace!(blocks = blocks.len(), "padded");
    blocks
        .iter()
        .fold(initial, |state, block| compress::compress::<W, R, N>(state, block))
}

/// A calculated digest value.
///
/// Use [`Self::as_ref`] to get the value as a `&[u8]`.
#[derive(Clone, Copy)]
pub struct Digest {
    value: [u8; MAX_OUTPUT_LEN],
    algorithm: Algorithm,
}

impl Digest {
    /// The algorithm that was used to calculate the digest value.
    #[inline(always)]
    pub fn algorithm(&self) -> &Algorithm {
        &self.algorithm
    }
}

impl AsRef<[u8]> for Digest {
    #[inline(always)]
    fn as_ref(&self) -> &[u8] {
        &self.value[..self.algorithm.output_len]
    }
}

impl core::fmt::Debug for Digest {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(fmt, "{:?}:", self.algorithm)?;
        for byte in self.as_ref() {
            write!(fmt, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// The initial state of an algorithm.
///
/// The variant also selects the word width and the round function, so a
/// SHA-1 state can never be run through the SHA-2 rounds or vice versa.
#[derive(Clone, Copy)]
enum InitialState {
    Sha1(sha1::State),
    Sha256(sha2::State32),
    Sha512(sha2::State64),
}

/// A digest algorithm.
#[derive(Clone, Copy)]
pub struct Algorithm {
    output_len: usize,
    chaining_len: usize,
    block_len: usize,
    initial_state: InitialState,
    id: AlgorithmId,
}

/// Identifies an [`Algorithm`].
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AlgorithmId {
    /// SHA-1.
    SHA1,
    /// SHA-224.
    SHA224,
    /// SHA-256.
    SHA256,
    /// SHA-384.
    SHA384,
    /// SHA-512.
    SHA512,
    /// SHA-512/224.
    SHA512_224,
    /// SHA-512/256.
    SHA512_256,
    /// SHA-512/t for any other valid `t`, in bits.
    SHA512_T(u16),
}

impl Algorithm {
    /// Constructs SHA-512/t, SHA-512 truncated to `t` bits with its own
    /// initial hash value, as specified in [FIPS 180-4] section 5.3.6.
    ///
    /// `t` must be a positive multiple of 8 below 512, and not 384. The
    /// initial hash value is derived here, once, by hashing the label
    /// `"SHA-512/t"`; the returned algorithm can then be used for any number
    /// of digests. `sha512_t(224)` and `sha512_t(256)` are equal to
    /// [`SHA512_224`] and [`SHA512_256`].
    ///
    /// ```
    /// use shadigest::{digest, error::InvalidTruncation};
    ///
    /// let sha512_160 = digest::Algorithm::sha512_t(160)?;
    /// assert_eq!(sha512_160.output_len(), 20);
    /// assert_eq!(digest::Algorithm::sha512_t(256)?, digest::SHA512_256);
    /// assert_eq!(
    ///     digest::Algorithm::sha512_t(384),
    ///     Err(InvalidTruncation::CollidesWithSha384)
    /// );
    /// # Ok::<(), InvalidTruncation>(())
    /// ```
    ///
    /// [FIPS 180-4]: http://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf
    pub fn sha512_t(t: usize) -> Result<Self, error::InvalidTruncation> {
        use error::InvalidTruncation;

        match t {
            0 => return Err(InvalidTruncation::Zero),
            t if t >= 512 => return Err(InvalidTruncation::TooLong { t }),
            t if t % 8 != 0 => return Err(InvalidTruncation::NotByteAligned { t }),
            384 => return Err(InvalidTruncation::CollidesWithSha384),
            _ => {}
        }
        // `t < 512`, so this is lossless.
        let t = t as u16;

        let id = match t {
            224 => AlgorithmId::SHA512_224,
            256 => AlgorithmId::SHA512_256,
            t => AlgorithmId::SHA512_T(t),
        };
        let initial_state = sha2::derive_sha512_t_state(t);
        tracing::debug!(t, "derived SHA-512/t initial hash value");

        Ok(Self {
            output_len: usize::from(t) / 8,
            chaining_len: SHA512_OUTPUT_LEN,
            block_len: sha2::SHA512_BLOCK_LEN,
            initial_state: InitialState::Sha512(initial_state),
            id,
        })
    }

    /// The length of a finalized digest.
    #[inline]
    pub fn output_len(&self) -> usize {
        self.output_len
    }

    /// The size of the chaining value of the digest function, in bytes.
    ///
    /// For non-truncated algorithms (SHA-1, SHA-256, SHA-512), this is equal
    /// to [`Self::output_len()`]. For truncated algorithms (e.g. SHA-384,
    /// SHA-512/256), this is equal to the length before truncation.
    #[inline]
    pub fn chaining_len(&self) -> usize {
        self.chaining_len
    }

    /// The internal block length, which is also the HMAC key block length.
    #[inline]
    pub fn block_len(&self) -> usize {
        self.block_len
    }

    /// Identifies the algorithm.
    #[inline]
    pub fn id(&self) -> AlgorithmId {
        self.id
    }
}

impl PartialEq for Algorithm {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Algorithm {}

impl core::fmt::Debug for Algorithm {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.id {
            AlgorithmId::SHA512_T(t) => write!(fmt, "SHA512_{}", t),
            id => core::fmt::Debug::fmt(&id, fmt),
        }
    }
}

/// SHA-1 as specified in [FIPS 180-4]. Deprecated.
///
/// [FIPS 180-4]: http://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf
pub static SHA1_FOR_LEGACY_USE_ONLY: Algorithm = Algorithm {
    output_len: sha1::OUTPUT_LEN,
    chaining_len: sha1::CHAINING_LEN,
    block_len: sha1::BLOCK_LEN,
    initial_state: InitialState::Sha1(sha1::INITIAL_STATE),
    id: AlgorithmId::SHA1,
};

/// SHA-224 as specified in [FIPS 180-4].
///
/// [FIPS 180-4]: http://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf
pub static SHA224: Algorithm = Algorithm {
    output_len: SHA224_OUTPUT_LEN,
    chaining_len: SHA256_OUTPUT_LEN,
    block_len: sha2::SHA256_BLOCK_LEN,
    initial_state: InitialState::Sha256(sha2::SHA224_INITIAL_STATE),
    id: AlgorithmId::SHA224,
};

/// SHA-256 as specified in [FIPS 180-4].
///
/// [FIPS 180-4]: http://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf
pub static SHA256: Algorithm = Algorithm {
    output_len: SHA256_OUTPUT_LEN,
    chaining_len: SHA256_OUTPUT_LEN,
    block_len: sha2::SHA256_BLOCK_LEN,
    initial_state: InitialState::Sha256(sha2::SHA256_INITIAL_STATE),
    id: AlgorithmId::SHA256,
};

/// SHA-384 as specified in [FIPS 180-4].
///
/// [FIPS 180-4]: http://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf
pub static SHA384: Algorithm = Algorithm {
    output_len: SHA384_OUTPUT_LEN,
    chaining_len: SHA512_OUTPUT_LEN,
    block_len: sha2::SHA512_BLOCK_LEN,
    initial_state: InitialState::Sha512(sha2::SHA384_INITIAL_STATE),
    id: AlgorithmId::SHA384,
};

/// SHA-512 as specified in [FIPS 180-4].
///
/// [FIPS 180-4]: http://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf
pub static SHA512: Algorithm = Algorithm {
    output_len: SHA512_OUTPUT_LEN,
    chaining_len: SHA512_OUTPUT_LEN,
    block_len: sha2::SHA512_BLOCK_LEN,
    initial_state: InitialState::Sha512(sha2::SHA512_INITIAL_STATE),
    id: AlgorithmId::SHA512,
};

/// SHA-512/224 as specified in [FIPS 180-4].
///
/// [FIPS 180-4]: http://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf
pub static SHA512_224: Algorithm = Algorithm {
    output_len: SHA512_224_OUTPUT_LEN,
    chaining_len: SHA512_OUTPUT_LEN,
    block_len: sha2::SHA512_BLOCK_LEN,
    initial_state: InitialState::Sha512(sha2::SHA512_224_INITIAL_STATE),
    id: AlgorithmId::SHA512_224,
};

/// SHA-512/256 as specified in [FIPS 180-4].
///
/// This is *not* the same as just truncating the output of SHA-512, as
/// SHA-512/256 has its own initial state distinct from SHA-512's initial
/// state.
///
/// [FIPS 180-4]: http://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf
pub static SHA512_256: Algorithm = Algorithm {
    output_len: SHA512_256_OUTPUT_LEN,
    chaining_len: SHA512_OUTPUT_LEN,
    block_len: sha2::SHA512_BLOCK_LEN,
    initial_state: InitialState::Sha512(sha2::SHA512_256_INITIAL_STATE),
    id: AlgorithmId::SHA512_256,
};

/// The maximum block length ([`Algorithm::block_len()`]) of all the
/// algorithms in this module.
pub const MAX_BLOCK_LEN: usize = 1024 / 8;

/// The maximum output length ([`Algorithm::output_len()`]) of all the
/// algorithms in this module.
pub const MAX_OUTPUT_LEN: usize = 512 / 8;

/// The maximum chaining length ([`Algorithm::chaining_len()`]) of all the
/// algorithms in this module.
pub const MAX_CHAINING_LEN: usize = MAX_OUTPUT_LEN;

/// The length of the output of SHA-1, in bytes.
pub const SHA1_OUTPUT_LEN: usize = sha1::OUTPUT_LEN;

/// The length of the output of SHA-224, in bytes.
pub const SHA224_OUTPUT_LEN: usize = 224 / 8;

/// The length of the output of SHA-256, in bytes.
pub const SHA256_OUTPUT_LEN: usize = 256 / 8;

/// The length of the output of SHA-384, in bytes.
pub const SHA384_OUTPUT_LEN: usize = 384 / 8;

/// The length of the output of SHA-512, in bytes.
pub const SHA512_OUTPUT_LEN: usize = 512 / 8;

/// The length of the output of SHA-512/224, in bytes.
pub const SHA512_224_OUTPUT_LEN: usize = 224 / 8;

/// The length of the output of SHA-512/256, in bytes.
pub const SHA512_256_OUTPUT_LEN: usize = 256 / 8;
