use crate::config::{DecodeConfig, EncodeConfig, EncodeMode, OutputFormat, SplitConfig};
use crate::error::CrleError;
use crate::format::human_size;
use crate::pipeline::{self, EncodeStats};
use crate::split;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(author, version, about, long_about = "Run-length encoder for comma-separated byte tables")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encodes a CSV file of byte values
    Encode {
        /// CSV file with values 0-255
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output file (default: input name with the format's extension)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format [dec, hex, bin, cpp]
        #[arg(short, long, default_value = "dec")]
        format: OutputFormat,

        /// Store the values without run-length encoding
        #[arg(long)]
        raw: bool,

        /// Values per output line (0 = single line)
        #[arg(long, default_value_t = 16)]
        per_line: usize,

        /// Hide the information summary
        #[arg(short, long)]
        quiet: bool,
    },
    /// Decodes an encoded stream back into byte values
    Decode {
        /// Encoded file
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output file (default: <input>.decoded.<ext>)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Format of the encoded input [dec, hex, bin, cpp]
        #[arg(long, default_value = "dec")]
        from: OutputFormat,

        /// Output format [dec, hex, bin, cpp]
        #[arg(short, long, default_value = "dec")]
        format: OutputFormat,

        /// Values per output line (0 = single line)
        #[arg(long, default_value_t = 16)]
        per_line: usize,
    },
    /// Splits a CSV grid into tiles
    Split {
        /// CSV grid, one row per line
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Directory for the tile files (default: next to the input)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Tile width in cells
        #[arg(short = 'W', long)]
        width: usize,

        /// Tile height in cells
        #[arg(short = 'H', long)]
        height: usize,

        /// Number of threads to use (default: all available cores)
        #[arg(short, long)]
        threads: Option<usize>,
    },
}

pub fn run() -> Result<(), CrleError> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Encode { input, output, format, raw, per_line, quiet } => {
            let mode = if *raw { EncodeMode::Raw } else { EncodeMode::Rle };
            let config = EncodeConfig {
                format: *format,
                mode,
                show_info: !quiet,
                values_per_line: *per_line,
            };

            let (stats, written) = pipeline::encode_file(input, output.as_deref(), &config)?;
            if config.show_info {
                print_info(input, &written, &stats);
            }
        }
        Commands::Decode { input, output, from, format, per_line } => {
            let config = DecodeConfig {
                input_format: *from,
                format: *format,
                values_per_line: *per_line,
            };

            let (stats, written) = pipeline::decode_file(input, output.as_deref(), &config)?;
            println!("Decoded {} to {}", input.display(), written.display());
            println!("  Encoded Size:  {}", human_size(stats.encoded_size));
            println!("  Decoded Size:  {}", human_size(stats.decoded_size));
            println!("  RLE Tag:       0x{:02X}", stats.tag);
        }
        Commands::Split { input, output, width, height, threads } => {
            let mut config = SplitConfig::new(*width, *height)?;
            if let Some(threads) = threads {
                config.threads = *threads;
            }

            let start = Instant::now();
            let stats = split::split_file(input, output.as_deref(), &config)?;
            let duration = start.elapsed();

            println!("Split {} ({}x{} cells)", input.display(), stats.columns, stats.rows);
            println!("  Tiles Written:  {}", stats.tiles_written);
            println!("  Elapsed Time:   {:.2?}", duration);
        }
    }

    Ok(())
}

fn print_info(input: &Path, output: &Path, stats: &EncodeStats) {
    println!("[ INFORMATION ]");
    println!("File name: {}", input.display());
    println!("Write to file: {}", output.display());
    println!("Original data size: {}", human_size(stats.original_size));
    println!("RLE data size: {}", human_size(stats.encoded_size));
    if stats.rejected_tokens > 0 {
        println!("Skipped values: {}", stats.rejected_tokens);
    }
    println!();
    match stats.tag {
        Some(tag) => println!("RLE tag: 0x{:02X}", tag),
        None => println!("RLE tag: none (raw)"),
    }
    println!("Compress: {:.2}%", stats.saving_percent());
    println!();
}
