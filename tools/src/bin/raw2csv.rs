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

use clap::{command, Parser};
use floatbuf::csv::write_samples_to_file;
use floatbuf::{source, Endianness, FloatBufferDecoder};
use log::{debug, error, info};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about="Raw f32 buffer to CSV converter", long_about = None)]
struct Args {
    /// input file
    input: PathBuf,

    /// Byte order of the samples in the input file
    #[arg(long, value_enum)]
    endianness: ByteOrder,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum ByteOrder {
    Little,
    Big,
}

fn convert(arguments: &Args) -> Result<PathBuf, Box<dyn Error>> {
    let endianness = match arguments.endianness {
        ByteOrder::Little => Endianness::LittleEndian,
        ByteOrder::Big => Endianness::BigEndian,
    };
    let bytes = source::read_file(&arguments.input)?;
    let values = FloatBufferDecoder::new(endianness).decode(&bytes)?;
    let output = arguments.input.with_extension("csv");
    write_samples_to_file(&output, &values)?;
    info!("Wrote {} samples to {}", values.len(), output.display());
    Ok(output)
}

fn main() {
    env_logger::init();
    let arguments = Args::parse();
    debug!("{:?}", arguments);
    if let Err(e) = convert(&arguments) {
        error!("{} File: {}", e, arguments.input.display());
        std::process::exit(1);
    }
}
