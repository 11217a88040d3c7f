// Copyright 2015-2016 Brian Smith.
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

//! HMAC is specified in [RFC 2104].
//!
//! After a `Key` is constructed, it can be used for multiple signing or
//! verification operations. Separating the construction of the key from the
//! rest of the HMAC operation allows the per-key precomputation to be done
//! only once, instead of it being done in every HMAC operation.
//!
//! All the data to be signed must be available in a single contiguous
//! slice; there is no multi-part signing context.
//!
//! The `verify` function should be used for verifying HMAC signatures.
//! `verify` compares the computed HMAC signature to the expected HMAC
//! signature in constant time.
//!
//! HMAC works with every algorithm in [`digest`], including the ones made by
//! [`digest::Algorithm::sha512_t`].
//!
//! # Examples:
//!
//! ```
//! use shadigest::{digest, hmac};
//!
//! let msg = "hello, world";
//! let key = hmac::Key::new(&digest::SHA384, b"a 48-byte key would be better");
//! let tag = hmac::sign(&key, msg.as_bytes());
//!
//! // [We give access to the message to an untrusted party, and they give it
//! // back to us. We need to verify they didn't tamper with it.]
//!
//! hmac::verify(&key, msg.as_bytes(), tag.as_ref())?;
//! # Ok::<(), shadigest::error::Unspecified>(())
//! ```
//!
//! [RFC 2104]: https://tools.ietf.org/html/rfc2104

use crate::{digest, error};
use alloc::{string::String, vec::Vec};
use subtle::ConstantTimeEq;

/// An HMAC tag.
///
/// For a given tag `t`, use `t.as_ref()` to get the tag value as a byte
/// slice.
#[derive(Clone, Copy, Debug)]
pub struct Tag(digest::Digest);

impl AsRef<[u8]> for Tag {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

/// A key to use for HMAC signing.
#[derive(Clone)]
pub struct Key {
    algorithm: digest::Algorithm,
    inner_pad: [u8; digest::MAX_BLOCK_LEN],
    outer_pad: [u8; digest::MAX_BLOCK_LEN],
}

impl core::fmt::Debug for Key {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Key")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

impl Key {
    /// Construct an HMAC signing key using the given digest algorithm and key
    /// value.
    ///
    /// As specified in RFC 2104, if `key_value` is shorter than the digest
    /// algorithm's block length (as returned by
    /// [`digest::Algorithm::block_len()`], not the digest length returned by
    /// [`digest::Algorithm::output_len()`]) then it will be padded with zeros.
    /// Similarly, if it is longer than the block length then it will be
    /// compressed using the digest algorithm.
    ///
    /// You should not use keys larger than the `block_len` because the
    /// compression of the key undermines its strength.
    pub fn new(algorithm: &digest::Algorithm, key_value: &[u8]) -> Self {
        const IPAD: u8 = 0x36;
        const OPAD: u8 = 0x5C;

        let block_len = algorithm.block_len();

        let key_hash;
        let key_value = if key_value.len() <= block_len {
            key_value
        } else {
            tracing::trace!(
                ?algorithm,
                key_len = key_value.len(),
                "HMAC key longer than a block; hashing it"
            );
            key_hash = digest::digest(algorithm, key_value);
            key_hash.as_ref()
        };

        // Bytes past the key act as zero padding, so they hold the bare pads.
        let mut key = Self {
            algorithm: *algorithm,
            inner_pad: [IPAD; digest::MAX_BLOCK_LEN],
            outer_pad: [OPAD; digest::MAX_BLOCK_LEN],
        };
        for ((i, o), b) in key
            .inner_pad
            .iter_mut()
            .zip(key.outer_pad.iter_mut())
            .zip(key_value)
        {
            *i ^= b;
            *o ^= b;
        }

        key
    }

    /// The digest algorithm for the key.
    #[inline]
    pub fn algorithm(&self) -> &digest::Algorithm {
        &self.algorithm
    }

    fn pads(&self) -> (&[u8], &[u8]) {
        let block_len = self.algorithm.block_len();
        (&self.inner_pad[..block_len], &self.outer_pad[..block_len])
    }
}

/// Calculates the HMAC of `data` using the key `key` in one step.
///
/// It is generally not safe to implement HMAC verification by comparing the
/// return value of `sign` to a tag. Use `verify` for verification instead.
pub fn sign(key: &Key, data: &[u8]) -> Tag {
    let (inner_pad, outer_pad) = key.pads();

    let inner = digest::digest(&key.algorithm, &concat(inner_pad, data));
    let outer = digest::digest(&key.algorithm, &concat(outer_pad, inner.as_ref()));
    Tag(outer)
}

/// Calculates the HMAC of `data` using the key `key`, and verifies whether
/// the resultant value equals `tag`, in one step.
///
/// The verification will be done in constant time to prevent timing attacks.
pub fn verify(key: &Key, data: &[u8], tag: &[u8]) -> Result<(), error::Unspecified> {
    let computed = sign(key, data);
    if bool::from(computed.as_ref().ct_eq(tag)) {
        Ok(())
    } else {
        Err(error::Unspecified)
    }
}

/// Returns the lowercase hex encoding of the HMAC of the UTF-8 encoding of
/// `msg` under the UTF-8 encoding of `key`.
///
/// ```
/// use shadigest::{digest, hmac};
///
/// assert_eq!(
///     hmac::sign_hex(
///         &digest::SHA256,
///         "key",
///         "The quick brown fox jumps over the lazy dog"
///     ),
///     "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"
/// );
/// ```
pub fn sign_hex(algorithm: &digest::Algorithm, key: &str, msg: &str) -> String {
    let key = Key::new(algorithm, key.as_bytes());
    hex::encode(sign(&key, msg.as_bytes()))
}

fn concat(pad: &[u8], data: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(pad.len() + data.len());
    buf.extend_from_slice(pad);
    buf.extend_from_slice(data);
    buf
}
