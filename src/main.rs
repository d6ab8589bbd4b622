use std::error::Error;

use clap::{Parser, Subcommand};
use huffman_rust::{HuffConfig, HuffProcessor, Properties};

#[derive(Parser, Debug)]
#[command(about = "Compress and decompress files with a static Huffman code")]
struct Args {
    /// Debug level: 0 quiet, 1 stages, 4 every code (RUST_LOG takes precedence)
    #[arg(short, long = "debug", default_value_t = 0, global = true)]
    debug_level: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compress a file, writing its statistics to <DEST_NAME>.properties
    Compress {
        /// Source filename
        source_name: String,
        /// Destination filename
        dest_name: String,
        /// Print the statistics as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Also write the code table to <DEST_NAME>.codes.bin
        #[arg(long, default_value_t = false)]
        dump_codes: bool,
    },
    /// Decompress a file produced by `compress`
    Decompress {
        /// Source filename
        source_name: String,
        /// Destination filename
        dest_name: String,
    },
    /// Print the statistics stored in <BASENAME>.properties
    Stats {
        /// Name of the compressed file
        basename: String,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let mut config = HuffConfig::new(args.debug_level);

    if let Command::Compress { dump_codes, .. } = &args.command {
        config = config.with_dump_codes(*dump_codes);
    }

    env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_default_env()
        .init();

    let processor = HuffProcessor::new(config);

    match args.command {
        Command::Compress { source_name, dest_name, json, .. } => {
            let props = processor.compress_file(&source_name, &dest_name)?;
            props.store(format!("{}.properties", dest_name))?;

            if json {
                println!("{}", props.to_json()?);
            } else {
                println!(
                    "compressed {} bytes into {} bytes ({:.3}) in {}ns",
                    props.input_bytes,
                    props.output_bytes,
                    props.ratio(),
                    props.compression_time_ns
                );
            }
        }
        Command::Decompress { source_name, dest_name } => {
            let stats = processor.decompress_file(&source_name, &dest_name)?;
            println!(
                "decompressed {} bits into {} bytes in {}ns",
                stats.bits_read, stats.output_bytes, stats.decompression_time_ns
            );
        }
        Command::Stats { basename } => {
            let props = Properties::load(format!("{}.properties", basename))?;
            print!("{}", String::from(props.clone()));
            println!("ratio={:.3}", props.ratio());
            println!("bitsperbyte={:.3}", props.bits_per_byte());
        }
    }

    Ok(())
}
