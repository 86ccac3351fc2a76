// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/scourcore

//! Example: strip metadata from an image file, optionally with the noise
//! and decoy passes.
use scour_core::{sanitize, DecoyProfile, SanitizeOptions};
use std::fs;
use std::path::Path;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: sanitize <image> [--noise] [--decoy]");
        std::process::exit(1);
    }

    let path = Path::new(&args[1]);
    let mime = match path.extension().and_then(|e| e.to_str()) {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        _ => {
            eprintln!("Unrecognized extension (use .jpg, .png or .webp)");
            std::process::exit(1);
        }
    };

    let options = SanitizeOptions {
        noise: args.iter().any(|a| a == "--noise"),
        decoy: args
            .iter()
            .any(|a| a == "--decoy")
            .then(DecoyProfile::default),
    };

    scour_core::trace::set_sink(Some(Box::new(|line| println!("  {line}"))));

    let dirty = fs::read(path).expect("Could not read input");
    let clean = sanitize(&dirty, mime, &options).expect("Sanitize failed");

    let file_name = path.file_name().unwrap().to_string_lossy();
    let out_path = path.with_file_name(format!("clean_{file_name}"));
    fs::write(&out_path, &clean).expect("Could not write output");
    println!(
        "Sanitized: {} bytes in, {} bytes out -> {}",
        dirty.len(),
        clean.len(),
        out_path.display()
    );
}
