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

#![allow(missing_docs)]

use hmac::Mac as _;
use proptest::prelude::*;
use shadigest::{digest, error, hmac as shmac, test, test_file};

#[test]
fn hmac_tests() {
    test::run(test_file!("hmac_tests.txt"), |section, test_case| {
        assert_eq!(section, "");
        let digest_alg = test_case.consume_digest_alg("HMAC");
        let key_value = test_case.consume_bytes("Key");
        let mut input = test_case.consume_bytes("Input");
        let output = test_case.consume_bytes("Output");

        hmac_test_case_inner(&digest_alg, &key_value[..], &input[..], &output[..], true)?;

        // Tamper with the input and check that verification fails.
        if input.is_empty() {
            input.push(0);
        } else {
            input[0] ^= 1;
        }

        hmac_test_case_inner(&digest_alg, &key_value[..], &input[..], &output[..], false)
    });
}

fn hmac_test_case_inner(
    digest_alg: &digest::Algorithm,
    key_value: &[u8],
    input: &[u8],
    output: &[u8],
    is_ok: bool,
) -> Result<(), error::Unspecified> {
    let key = shmac::Key::new(digest_alg, key_value);

    let signature = shmac::sign(&key, input);
    assert_eq!(is_ok, signature.as_ref() == output);
    assert_eq!(is_ok, shmac::verify(&key, input, output).is_ok());

    if let (Ok(k), Ok(m)) = (core::str::from_utf8(key_value), core::str::from_utf8(input)) {
        assert_eq!(
            is_ok,
            shmac::sign_hex(digest_alg, k, m) == hex::encode(output)
        );
    }

    Ok(())
}

static FIXED: [&digest::Algorithm; 7] = [
    &digest::SHA1_FOR_LEGACY_USE_ONLY,
    &digest::SHA224,
    &digest::SHA256,
    &digest::SHA384,
    &digest::SHA512,
    &digest::SHA512_224,
    &digest::SHA512_256,
];

/// Runs HMAC through the RustCrypto implementation over `alg`.
fn reference(alg: &digest::Algorithm, key: &[u8], data: &[u8]) -> Vec<u8> {
    macro_rules! mac {
        ($hash:ty) => {{
            let mut mac = hmac::Hmac::<$hash>::new_from_slice(key).unwrap();
            mac.update(data);
            mac.finalize().into_bytes().to_vec()
        }};
    }
    match alg.id() {
        digest::AlgorithmId::SHA1 => mac!(sha1::Sha1),
        digest::AlgorithmId::SHA224 => mac!(sha2::Sha224),
        digest::AlgorithmId::SHA256 => mac!(sha2::Sha256),
        digest::AlgorithmId::SHA384 => mac!(sha2::Sha384),
        digest::AlgorithmId::SHA512 => mac!(sha2::Sha512),
        digest::AlgorithmId::SHA512_224 => mac!(sha2::Sha512_224),
        digest::AlgorithmId::SHA512_256 => mac!(sha2::Sha512_256),
        id => panic!("no reference implementation for {:?}", id),
    }
}

// Keys one byte short of, exactly, and one byte over the block length.
#[test]
fn hmac_key_length_boundaries() {
    for alg in FIXED {
        let block_len = alg.block_len();
        for key_len in [0, 1, block_len - 1, block_len, block_len + 1, 2 * block_len + 3] {
            let key_value = vec![0x5a; key_len];
            let key = shmac::Key::new(alg, &key_value);
            assert_eq!(
                shmac::sign(&key, b"message").as_ref(),
                &reference(alg, &key_value, b"message")[..],
                "{:?} with a {}-byte key",
                alg,
                key_len
            );
        }
    }
}

proptest! {
    #[test]
    fn hmac_matches_rustcrypto(
        key in proptest::collection::vec(any::<u8>(), 0..=300),
        data in proptest::collection::vec(any::<u8>(), 0..=300),
    ) {
        for alg in FIXED {
            let k = shmac::Key::new(alg, &key);
            let tag = shmac::sign(&k, &data);
            prop_assert_eq!(tag.as_ref().len(), alg.output_len());
            prop_assert_eq!(tag.as_ref(), &reference(alg, &key, &data)[..]);
            prop_assert!(shmac::verify(&k, &data, tag.as_ref()).is_ok());
        }
    }
}

#[test]
fn hmac_sha512_t() {
    let sha512_160 = digest::Algorithm::sha512_t(160).unwrap();
    let key = shmac::Key::new(&sha512_160, b"key");
    let tag = shmac::sign(&key, b"data");
    assert_eq!(tag.as_ref().len(), 20);
    assert!(shmac::verify(&key, b"data", tag.as_ref()).is_ok());

    // A different truncation is a different function, not a prefix.
    let sha512_224 = shmac::Key::new(&digest::SHA512_224, b"key");
    assert_ne!(
        tag.as_ref(),
        &shmac::sign(&sha512_224, b"data").as_ref()[..20]
    );
}

#[test]
fn hmac_debug() {
    let key = shmac::Key::new(&digest::SHA256, &[0; 32]);
    assert_eq!("Key { algorithm: SHA256 }", format!("{:?}", &key));

    let key = shmac::Key::new(&digest::SHA384, &[0; 32]);
    assert_eq!("Key { algorithm: SHA384 }", format!("{:?}", &key));
    assert_eq!(key.algorithm(), &digest::SHA384);
}
