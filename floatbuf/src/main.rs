/*
Copyright 2024 NetApp, Inc.

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    https://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

use clap::{arg, command, Parser};
use floatbuf::csv::read_samples;
use floatbuf::source;
use floatbuf::{encode, Endianness, FloatBufferDecoder};
use log::{debug, error, info};
use std::error::Error;
use std::path::{Path, PathBuf};

/// Processes the given input based on the provided arguments.
fn process_args(arguments: &Args) -> Result<(), Box<dyn Error>> {
    let endianness = arguments.endianness.into();
    if arguments.encode {
        debug!("Encoding {}", arguments.input);
        let input = Path::new(&arguments.input);
        let output = arguments
            .output
            .clone()
            .unwrap_or_else(|| input.with_extension("f32"));
        encode_file(input, &output, endianness)
    } else {
        let bytes = if arguments.literal {
            debug!("Input is a literal");
            source::bytes_from_literal(&arguments.input)?
        } else {
            source::read_file(Path::new(&arguments.input))?
        };
        if arguments.verbose {
            println!("Bytes={:?}", bytes);
        }
        let values = FloatBufferDecoder::new(endianness).decode(&bytes)?;
        info!("Decoded {} values", values.len());
        for value in values {
            println!("{:?}", value);
        }
        Ok(())
    }
}

fn encode_file(input: &Path, output: &Path, endianness: Endianness) -> Result<(), Box<dyn Error>> {
    let values = read_samples(input)?;
    let bytes = encode(&values, endianness);
    std::fs::write(output, bytes)?;
    info!("Wrote {} values to {}", values.len(), output.display());
    Ok(())
}

#[derive(Parser, Debug)]
#[command(author, version, about="Decodes raw buffers of 32 bit floats", long_about = None)]
struct Args {
    /// Input file, or the byte literal itself with --literal
    input: String,

    /// Byte order of the samples
    #[arg(long, value_enum)]
    endianness: ByteOrder,

    /// Treats the input as an escaped byte literal (\0, \xHH, ...) instead of a path
    #[arg(long, action, conflicts_with = "encode")]
    literal: bool,

    /// Reads a single column CSV of floats and writes them as raw bytes
    #[arg(short, long, action)]
    encode: bool,

    /// Output file for --encode, defaults to the input with a .f32 extension
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output, dumps the raw bytes before decoding
    #[arg(long, action)]
    verbose: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum ByteOrder {
    Little,
    Big,
}

impl From<ByteOrder> for Endianness {
    fn from(order: ByteOrder) -> Self {
        match order {
            ByteOrder::Little => Endianness::LittleEndian,
            ByteOrder::Big => Endianness::BigEndian,
        }
    }
}

fn main() {
    env_logger::init();
    let arguments = Args::parse();
    debug!("{:?}", arguments);

    if let Err(e) = process_args(&arguments) {
        error!("{}", e);
        std::process::exit(1);
    }
}
