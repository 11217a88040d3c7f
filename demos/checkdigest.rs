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

//! Checks a file against an expected digest.

use shadigest::digest;
use std::io::Write;

fn print_usage(program_name: &str) {
    let program_file_name = std::path::Path::new(program_name)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(program_name);

    println!(
        "Usage: {} sha1|sha224|sha256|sha384|sha512|sha512_224|sha512_256|sha512_<t> \
         <digest value in hex> <filename>\n\
         \n\
         On success nothing is output, and 0 is returned.\n\
         On failure, an error message is printed, and a non-zero value is returned\n\
         \n\
         Example:\n\
         {} sha256 \
         def7352915ac84bea5e2ed16f6fff712d35de519799777bf927e2a567ab53b7e \
         LICENSE",
        program_file_name, program_file_name
    );
}

fn algorithm(digest_name: &str) -> Result<digest::Algorithm, String> {
    let alg = match digest_name {
        "sha1" => digest::SHA1_FOR_LEGACY_USE_ONLY,
        "sha224" => digest::SHA224,
        "sha256" => digest::SHA256,
        "sha384" => digest::SHA384,
        "sha512" => digest::SHA512,
        "sha512_224" => digest::SHA512_224,
        "sha512_256" => digest::SHA512_256,
        name => {
            let t = name
                .strip_prefix("sha512_")
                .and_then(|t| t.parse::<usize>().ok())
                .ok_or_else(|| format!("unsupported digest algorithm: {}", name))?;
            digest::Algorithm::sha512_t(t).map_err(|e| e.to_string())?
        }
    };
    Ok(alg)
}

fn run(
    digest_name: &str,
    expected_digest_hex: &str,
    file_path: &std::path::Path,
) -> Result<(), String> {
    let digest_alg = algorithm(digest_name)?;

    let expected = hex::decode(expected_digest_hex).map_err(|e| {
        format!(
            "syntactically invalid digest: {} in {}",
            e, expected_digest_hex
        )
    })?;

    // Hashing is one-shot, so the whole file is read first.
    let data = std::fs::read(file_path)
        .map_err(|e| format!("couldn't read {}: {}", file_path.display(), e))?;

    let actual = digest::digest(&digest_alg, &data);
    if actual.as_ref() == &expected[..] {
        Ok(())
    } else {
        Err(format!("digest mismatch: calculated {:?}", actual))
    }
}

// argv may be empty when the program is spawned without arguments.
fn program_name(args: &[String]) -> &str {
    args.first().map_or("checkdigest", String::as_str)
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "-h") {
        print_usage(program_name(&args));
        return;
    } else if args.len() < 4 {
        print_usage(program_name(&args));
        std::process::exit(1);
    }

    if let Err(s) = run(&args[1], &args[2], std::path::Path::new(&args[3])) {
        let _ = writeln!(&mut std::io::stderr(), "{}", s);
        std::process::exit(1)
    }
}
