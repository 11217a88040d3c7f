// Copyright 2023 Brian Smith.
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

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use shadigest::{digest, hmac};

static ALGORITHMS: &[(&str, &digest::Algorithm)] = &[
    ("sha1", &digest::SHA1_FOR_LEGACY_USE_ONLY),
    ("sha256", &digest::SHA256),
    ("sha384", &digest::SHA384),
    ("sha512", &digest::SHA512),
    ("sha512_256", &digest::SHA512_256),
];

const INPUT_LENGTHS: &[usize] = &[
    // Benchmark that emphasizes overhead.
    0,
    32,
    64,
    128,
    1024,
    2048,
    4096,
    8192,
    1024 * 1024,
];

fn oneshot(c: &mut Criterion) {
    for &(alg_name, algorithm) in ALGORITHMS {
        for input_len in INPUT_LENGTHS {
            c.bench_with_input(
                BenchmarkId::new(format!("digest::oneshot::{alg_name}"), input_len),
                input_len,
                |b, &input_len| {
                    let input = vec![0u8; input_len];
                    b.iter(|| -> usize {
                        let digest = digest::digest(algorithm, black_box(&input));
                        black_box(digest.as_ref().len())
                    })
                },
            );
        }
    }
}

fn hmac_sign(c: &mut Criterion) {
    for &(alg_name, algorithm) in ALGORITHMS {
        let key = hmac::Key::new(algorithm, &[0x0b; 32]);
        for input_len in &INPUT_LENGTHS[..INPUT_LENGTHS.len() - 1] {
            c.bench_with_input(
                BenchmarkId::new(format!("hmac::sign::{alg_name}"), input_len),
                input_len,
                |b, &input_len| {
                    let input = vec![0u8; input_len];
                    b.iter(|| -> usize {
                        let tag = hmac::sign(&key, black_box(&input));
                        black_box(tag.as_ref().len())
                    })
                },
            );
        }
    }
}

fn sha512_t_setup(c: &mut Criterion) {
    let _ = c.bench_function("digest::sha512_t::setup", |b| {
        b.iter(|| digest::Algorithm::sha512_t(black_box(160)))
    });
}

criterion_group!(digest, oneshot, hmac_sign, sha512_t_setup);
criterion_main!(digest);
