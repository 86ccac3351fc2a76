// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/scourcore

//! Example: hide a message in an image, or reveal one.
use std::fs;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || (args[1] == "--hide" && args.len() < 4) {
        eprintln!("Usage: reveal --hide <cover> <message>");
        eprintln!("       reveal <stego.png>");
        std::process::exit(1);
    }

    if args[1] == "--hide" {
        let cover = fs::read(&args[2]).expect("Could not read cover image");
        let stego = scour_core::hide_in_image(&cover, &args[3]).expect("Hide failed");
        let stem = args[2].rsplit_once('.').map(|(s, _)| s).unwrap_or(&args[2]);
        let out_path = format!("{stem}_stego.png");
        fs::write(&out_path, &stego).expect("Could not write output");
        println!("Stego image written to: {out_path}");
    } else {
        let stego = fs::read(&args[1]).expect("Could not read stego image");
        match scour_core::extract_from_image(&stego) {
            Ok(result) if result.terminator_found => {
                println!("Message ({} bytes): {}", result.bytes_extracted, result.text)
            }
            Ok(result) => println!(
                "No terminator found; partial read of {} bytes",
                result.bytes_extracted
            ),
            Err(e) => eprintln!("Extract failed: {e}"),
        }
    }
}
