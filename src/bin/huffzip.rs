//! Command-line driver for the huffzip codec.
//!
//! Reads a named file, compresses it to `<name>.huff` or decompresses it
//! back, printing progress and timing along the way. All I/O and all
//! user-facing output live here; the library core stays pure.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Instant;

use huffzip::{Compression, HuffmanCodec, Milestone};

const COMPRESSED_SUFFIX: &str = ".huff";

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let (mode, path) = match args.as_slice() {
        [_, mode, path] if mode == "compress" || mode == "decompress" => (mode.clone(), path.clone()),
        _ => {
            eprintln!("usage: huffzip <compress|decompress> <file>");
            return ExitCode::FAILURE;
        }
    };

    let result = if mode == "compress" {
        compress_file(&path)
    } else {
        decompress_file(&path)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("huffzip: {err}");
            ExitCode::FAILURE
        }
    }
}

fn progress_codec() -> HuffmanCodec {
    HuffmanCodec::with_observer(|milestone| {
        let stage = match milestone {
            Milestone::FrequenciesCounted => "frequency analysis done",
            Milestone::TreeBuilt => "tree built",
            Milestone::CodesGenerated => "codes generated",
            Milestone::PayloadPacked => "payload packed",
            Milestone::PayloadDecoded => "payload decoded",
        };
        println!("  {stage}");
    })
}

fn compress_file(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    let data = fs::read(path)?;
    println!("Read {} bytes from {path}", data.len());

    let compressed = progress_codec().compress(&data)?;

    let out_path = format!("{path}{COMPRESSED_SUFFIX}");
    fs::write(&out_path, &compressed)?;
    println!(
        "Wrote {} bytes to {out_path} in {:.2?}",
        compressed.len(),
        start.elapsed()
    );
    println!(
        "Compression ratio: {:.3}",
        data.len() as f64 / compressed.len() as f64
    );
    Ok(())
}

fn decompress_file(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    if !path.ends_with(COMPRESSED_SUFFIX) && !confirm_unusual_suffix(path)? {
        println!("Cancelled.");
        return Ok(());
    }

    let start = Instant::now();
    let data = fs::read(path)?;
    println!("Read {} bytes from {path}", data.len());

    let output = progress_codec().decompress(&data)?;

    let out_path = match path.strip_suffix(COMPRESSED_SUFFIX) {
        Some(stripped) => stripped.to_string(),
        None => format!("{path}.out"),
    };
    fs::write(&out_path, &output)?;
    println!(
        "Wrote {} bytes to {out_path} in {:.2?}",
        output.len(),
        start.elapsed()
    );
    Ok(())
}

/// Asks the user to confirm decompressing a file that does not carry the
/// expected suffix, to avoid treating an arbitrary file as a container.
fn confirm_unusual_suffix(path: &str) -> io::Result<bool> {
    println!("{path} does not end in {COMPRESSED_SUFFIX}.");
    println!("If it was not produced by this tool, decompression will likely fail.");
    print!("Continue? [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
