// In: src/main.rs

//! Interactive line-oriented front end for the runpack codec: create a text
//! file, compress a file, decompress a file. All codec work happens in the
//! library; this binary is plumbing and presentation only.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use colored::Colorize;

use runpack::bridge;
use runpack::bridge::format::TAG_UNCOMPRESSED;
use runpack::config::RunpackConfig;
use runpack::error::RunpackError;
use runpack::storage;

type StdinLines = io::Lines<io::StdinLock<'static>>;

fn main() {
    env_logger::init();
    let config = load_config();

    println!(
        "{} v{}",
        "Multithreaded RLE file compressor".bold(),
        runpack::VERSION
    );

    let mut lines = io::stdin().lock().lines();
    loop {
        println!();
        println!("Menu:");
        println!("  1. Create and write a file");
        println!("  2. Compress a file");
        println!("  3. Decompress a file");
        println!("  4. Exit");

        let choice = match prompt(&mut lines, "Enter choice: ") {
            Ok(choice) => choice,
            Err(_) => break, // stdin closed
        };

        let result = match choice.trim() {
            "1" => create_file(&mut lines),
            "2" => compress_file(&mut lines, &config),
            "3" => decompress_file(&mut lines, &config),
            "4" => {
                println!("Goodbye!");
                break;
            }
            _ => {
                println!("{}", "Invalid choice. Try again.".yellow());
                continue;
            }
        };

        if let Err(e) = result {
            eprintln!("{} {}", "error:".red().bold(), e);
        }
    }
}

/// Builds the shared config, honoring a JSON file named by `RUNPACK_CONFIG`.
fn load_config() -> Arc<RunpackConfig> {
    let config = match std::env::var("RUNPACK_CONFIG") {
        Ok(path) => match RunpackConfig::from_json_file(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("could not load config from {}: {}; using defaults", path, e);
                RunpackConfig::default()
            }
        },
        Err(_) => RunpackConfig::default(),
    };
    log::info!("using {} worker thread(s)", config.worker_count);
    Arc::new(config)
}

fn prompt(lines: &mut StdinLines, message: &str) -> Result<String, RunpackError> {
    print!("{}", message);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(line?),
        None => Err(RunpackError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stdin closed",
        ))),
    }
}

/// Menu option 1: collect lines from the user until an empty line, then write
/// them to a new file.
fn create_file(lines: &mut StdinLines) -> Result<(), RunpackError> {
    let filename = prompt(lines, "Enter filename to create: ")?;

    println!("Enter text lines (empty line to finish):");
    let mut contents = String::new();
    loop {
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        if line.is_empty() {
            break;
        }
        contents.push_str(&line);
        contents.push('\n');
    }

    storage::write_bytes(&filename, contents.as_bytes())?;
    println!("File {} created.", filename.green());
    Ok(())
}

/// Menu option 2: read a file, compress it, and persist the container.
fn compress_file(lines: &mut StdinLines, config: &Arc<RunpackConfig>) -> Result<(), RunpackError> {
    let in_path = prompt(lines, "Enter file to compress: ")?;
    let data = storage::read_bytes(&in_path)?;

    let container = bridge::compress(&data, config);
    println!(
        "Original size: {}, stored size: {}",
        data.len(),
        container.len() - 1
    );
    if container.first() == Some(&TAG_UNCOMPRESSED) {
        println!(
            "{}",
            "Compression not effective. Saving uncompressed data.".yellow()
        );
    }

    let out_path = prompt(lines, "Enter output file name for compressed data: ")?;
    storage::write_bytes(&out_path, &container)?;
    println!("{}", "Compression successful.".green());
    Ok(())
}

/// Menu option 3: read a container, decompress it, and persist the original
/// bytes. Any codec failure abandons the operation before the output file is
/// touched.
fn decompress_file(
    lines: &mut StdinLines,
    config: &Arc<RunpackConfig>,
) -> Result<(), RunpackError> {
    let in_path = prompt(lines, "Enter file to decompress: ")?;
    let container = storage::read_bytes(&in_path)?;

    let decompressed = bridge::decompress(&container, config)?;
    println!(
        "Stored size: {}, decompressed size: {}",
        container.len().saturating_sub(1),
        decompressed.len()
    );

    let out_path = prompt(lines, "Enter output filename for decompressed data: ")?;
    storage::write_bytes(&out_path, &decompressed)?;
    println!("{}", "Decompression successful.".green());
    Ok(())
}
