//! lzw-cli - Command-line interface for lzwdict
//!
//! A command-line tool for compressing and decompressing files with the
//! unbounded-dictionary LZW codec. Compressed files hold the code sequence as
//! little-endian 32-bit integers.

use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use log::LevelFilter;
use lzwdict::{
    compress_str, decompress_to_string, decompress_with, pack_codes, unpack_codes, Code,
    CompressionStats, DecodeDictionary, Decoder, Encoder, TableConfig, DEFAULT_INITIAL_CAPACITY,
    DEFAULT_LOAD_FACTOR,
};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

/// Inputs above this size get a progress bar
const PROGRESS_THRESHOLD: usize = 1024 * 1024;

/// Bytes (or codes) handed to the codec per progress step
const CHUNK_SIZE: usize = 64 * 1024;

const DEMO_TEXT: &str = "TOBEORNOTTOBEORTOBEORNOT";

#[derive(Parser)]
#[command(name = "lzw-cli")]
#[command(about = "A CLI tool for LZW compression and decompression")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file into an LZW code file
    Compress {
        /// Input file to compress
        input: PathBuf,

        /// Output code file
        output: PathBuf,

        #[command(flatten)]
        table: TableArgs,

        /// Force overwrite of output file
        #[arg(short, long)]
        force: bool,
    },

    /// Decompress an LZW code file
    Decompress {
        /// Input code file
        input: PathBuf,

        /// Output decompressed file
        output: PathBuf,

        #[command(flatten)]
        table: TableArgs,

        /// Force overwrite of output file
        #[arg(short, long)]
        force: bool,
    },

    /// Get information about a code file
    Info {
        /// Code file to analyze
        input: PathBuf,

        /// Dump every bucket of the rebuilt dictionary
        #[arg(long)]
        buckets: bool,
    },

    /// Compress and decompress a short text, printing each step
    Demo {
        /// Text to run through the codec
        #[arg(default_value = DEMO_TEXT)]
        text: String,
    },
}

/// Sizing of the dictionary tables
#[derive(Args, Clone, Copy)]
struct TableArgs {
    /// Initial bucket count of the dictionary
    #[arg(long, default_value_t = DEFAULT_INITIAL_CAPACITY)]
    initial_capacity: usize,

    /// Entries per bucket that trigger dictionary growth
    #[arg(long, default_value_t = DEFAULT_LOAD_FACTOR)]
    load_factor: f64,
}

impl From<TableArgs> for TableConfig {
    fn from(args: TableArgs) -> Self {
        TableConfig::new()
            .with_initial_capacity(args.initial_capacity)
            .with_load_factor(args.load_factor)
    }
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            table,
            force,
        } => compress_file(
            &input,
            &output,
            table.into(),
            force,
            cli.verbose,
            cli.quiet,
        )
        .map(|_| ()),
        Commands::Decompress {
            input,
            output,
            table,
            force,
        } => decompress_file(
            &input,
            &output,
            table.into(),
            force,
            cli.verbose,
            cli.quiet,
        )
        .map(|_| ()),
        Commands::Info { input, buckets } => show_file_info(&input, buckets, cli.verbose),
        Commands::Demo { text } => run_demo(&text),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logger(verbose: bool, quiet: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Warn
    };

    let _ = env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp_millis()
        .parse_default_env()
        .try_init();
}

fn check_paths(input: &PathBuf, output: &PathBuf, force: bool) -> Result<(), String> {
    if !input.exists() {
        return Err(format!("Input file '{}' does not exist", input.display()));
    }
    if output.exists() && !force {
        return Err(format!(
            "Output file '{}' already exists. Use --force to overwrite",
            output.display()
        ));
    }
    Ok(())
}

fn progress_bar(len: usize, quiet: bool, message: &'static str) -> Option<ProgressBar> {
    if quiet || len <= PROGRESS_THRESHOLD {
        return None;
    }
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {bytes}/{total_bytes} {msg}")
    {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb.set_message(message);
    Some(pb)
}

fn compress_file(
    input: &PathBuf,
    output: &PathBuf,
    config: TableConfig,
    force: bool,
    verbose: bool,
    quiet: bool,
) -> Result<CompressionStats, Box<dyn std::error::Error>> {
    check_paths(input, output, force)?;

    if verbose {
        println!(
            "Compressing '{}' to '{}'",
            input.display(),
            output.display()
        );
        println!(
            "Dictionary: {} buckets, load factor {}",
            config.initial_capacity, config.load_factor
        );
    }

    let start_time = Instant::now();
    let input_data = fs::read(input)?;

    let mut encoder = Encoder::with_config(config)?;
    let mut codes: Vec<Code> = Vec::new();
    let progress = progress_bar(input_data.len(), quiet, "Compressing...");
    for chunk in input_data.chunks(CHUNK_SIZE) {
        encoder
            .encode(chunk, &mut codes)
            .map_err(|e| format!("Compression failed: {}", e))?;
        if let Some(ref pb) = progress {
            pb.inc(chunk.len() as u64);
        }
    }

    let table_stats = encoder.dictionary().stats();
    let stats = encoder.finish(&mut codes);
    if let Some(ref pb) = progress {
        pb.finish_with_message("Compression complete");
    }

    let packed = pack_codes(&codes);
    fs::write(output, &packed)?;

    if !quiet {
        println!("✓ Compression successful!");
        println!("  Input:  {} bytes", stats.uncompressed_bytes);
        println!("  Codes:  {}", stats.code_count);
        println!("  Output: {} bytes", packed.len());
        match stats.ratio() {
            Some(ratio) => println!("  Ratio:  {:.3}", ratio),
            None => println!("  Ratio:  n/a (empty input)"),
        }
        println!("  Time:   {:.2?}", start_time.elapsed());

        if verbose {
            println!(
                "  Dictionary: {} entries in {} buckets ({} empty, longest chain {}, load {:.2})",
                table_stats.entries,
                table_stats.buckets,
                table_stats.empty_buckets,
                table_stats.longest_chain,
                table_stats.load()
            );
        }
        if stats.ratio().is_some_and(|ratio| ratio < 1.0) {
            println!("  Note: File expanded during compression (common for small/random data)");
        }
    }

    Ok(stats)
}

fn decompress_file(
    input: &PathBuf,
    output: &PathBuf,
    config: TableConfig,
    force: bool,
    verbose: bool,
    quiet: bool,
) -> Result<CompressionStats, Box<dyn std::error::Error>> {
    check_paths(input, output, force)?;

    if verbose {
        println!(
            "Decompressing '{}' to '{}'",
            input.display(),
            output.display()
        );
    }

    let start_time = Instant::now();
    let codes = unpack_codes(&fs::read(input)?)?;

    let mut decoder = Decoder::with_config(config)?;
    let mut decompressed = Vec::new();
    let progress = progress_bar(codes.len() * 4, quiet, "Decompressing...");
    for chunk in codes.chunks(CHUNK_SIZE) {
        decoder
            .decode(chunk, &mut decompressed)
            .map_err(|e| format!("Decompression failed: {}", e))?;
        if let Some(ref pb) = progress {
            pb.inc((chunk.len() * 4) as u64);
        }
    }
    let stats = decoder.finish();
    if let Some(ref pb) = progress {
        pb.finish_with_message("Decompression complete");
    }

    fs::write(output, &decompressed)?;

    if !quiet {
        println!("✓ Decompression successful!");
        println!("  Codes:  {}", stats.code_count);
        println!("  Output: {} bytes", stats.uncompressed_bytes);
        println!("  Time:   {:.2?}", start_time.elapsed());
    }

    Ok(stats)
}

fn show_file_info(
    input: &PathBuf,
    buckets: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !input.exists() {
        return Err(format!("Input file '{}' does not exist", input.display()).into());
    }

    let data = fs::read(input)?;
    let codes = unpack_codes(&data)?;

    println!("LZW Code File Information:");
    println!("  File: {}", input.display());
    println!("  Size: {} bytes", data.len());
    println!("  Codes: {}", codes.len());
    if let Some(max) = codes.iter().max() {
        println!("  Highest Code: {}", max);
    }

    let mut dictionary = DecodeDictionary::new();
    match decompress_with(&codes, &mut dictionary) {
        Ok(decompressed) => {
            println!("  Decompressed Size: {} bytes", decompressed.len());
            if let Some(ratio) = lzwdict::compression_ratio(decompressed.len(), codes.len()) {
                println!("  Compression Ratio: {:.3}", ratio);
            }
            println!("  Dictionary Entries: {}", dictionary.len());
            println!("  Status: ✓ Valid code stream");

            if verbose {
                let stats = dictionary.stats();
                println!(
                    "  Buckets: {} ({} empty, longest chain {})",
                    stats.buckets, stats.empty_buckets, stats.longest_chain
                );
            }
            if buckets {
                print!("{}", dictionary.bucket_report());
            }
        }
        Err(e) => {
            println!("  Status: ✗ Invalid or corrupted code stream");
            if verbose {
                println!("  Error: {}", e);
            }
        }
    }

    Ok(())
}

fn run_demo(text: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Original text: {}", text);

    let codes = compress_str(text)?;
    println!("Compressed: {:?}", codes);

    let decompressed = decompress_to_string(&codes)?;
    println!("Decompressed: {}", decompressed);

    Ok(())
}
