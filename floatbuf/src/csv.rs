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

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to open csv file")]
    OpenFileFailed,

    #[error("Parsing value is failed")]
    ParsingValueFailed,

    #[error("Writing csv is failed")]
    WriteFailed,

    #[error("Unexpected error occurred")]
    Unexpected,
}

type Result<T> = std::result::Result<T, Error>;

/// read_samples reads f32 samples from the given file.
/// It assumes that file contains no headers and
/// consists of only a single field with values.
pub fn read_samples(filepath: &Path) -> Result<Vec<f32>> {
    let file = OpenOptions::new()
        .read(true)
        .open(filepath)
        .map_err(|_| Error::OpenFileFailed)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(file);

    let mut samples = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|_| Error::Unexpected)?;
        let value: f32 = record
            .get(0)
            .ok_or(Error::ParsingValueFailed)?
            .trim()
            .parse()
            .map_err(|_| Error::ParsingValueFailed)?;
        samples.push(value);
    }

    Ok(samples)
}

/// write_samples writes an `index,value` table, header included.
pub fn write_samples<W: Write>(writer: W, values: &[f32]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["index", "value"])
        .map_err(|_| Error::WriteFailed)?;
    for (index, value) in values.iter().enumerate() {
        wtr.write_record([index.to_string(), format!("{:?}", value)])
            .map_err(|_| Error::WriteFailed)?;
    }
    wtr.flush().map_err(|_| Error::WriteFailed)?;
    Ok(())
}

pub fn write_samples_to_file(filepath: &Path, values: &[f32]) -> Result<()> {
    let file = File::create(filepath).map_err(|_| Error::OpenFileFailed)?;
    write_samples(file, values)
}
