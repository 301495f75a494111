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

// Everything that turns "something" into a byte buffer for the decoder lives here.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Character {ch:?} at position {index} does not fit in a byte")]
    NonByteChar { index: usize, ch: char },

    #[error("Unknown escape sequence at position {index}")]
    InvalidEscape { index: usize },

    #[error("Escape sequence at position {index} is cut short")]
    TruncatedEscape { index: usize },

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Maps every char of a "binary string" to one byte, taking its code point
/// as the byte value. Code points above 0xFF are rejected.
pub fn bytes_from_binary_string(s: &str) -> Result<Vec<u8>> {
    s.chars()
        .enumerate()
        .map(|(index, ch)| u8::try_from(ch).map_err(|_| Error::NonByteChar { index, ch }))
        .collect()
}

/// Resolves the backslash escapes of a byte string literal such as
/// `\0\0\x80?`. Supported: `\0`, `\xHH`, `\n`, `\r`, `\t`, `\\`, `\'`, `\"`.
pub fn unescape(literal: &str) -> Result<String> {
    let mut out = String::with_capacity(literal.len());
    let mut chars = literal.char_indices();
    while let Some((index, ch)) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        let (_, escaped) = chars.next().ok_or(Error::TruncatedEscape { index })?;
        let resolved = match escaped {
            '0' => '\0',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            '\\' | '\'' | '"' => escaped,
            'x' => {
                let hi = chars.next().ok_or(Error::TruncatedEscape { index })?.1;
                let lo = chars.next().ok_or(Error::TruncatedEscape { index })?.1;
                let value = hex_digit(hi)
                    .zip(hex_digit(lo))
                    .map(|(h, l)| (h << 4) | l)
                    .ok_or(Error::InvalidEscape { index })?;
                char::from(value)
            }
            _ => return Err(Error::InvalidEscape { index }),
        };
        out.push(resolved);
    }
    Ok(out)
}

fn hex_digit(c: char) -> Option<u8> {
    c.to_digit(16).map(|d| d as u8)
}

/// Escaped literal straight to bytes
pub fn bytes_from_literal(literal: &str) -> Result<Vec<u8>> {
    let bytes = bytes_from_binary_string(&unescape(literal)?)?;
    debug!("Literal resolved to {} bytes", bytes.len());
    Ok(bytes)
}

pub fn read_file(file_path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(file_path)?;
    let mut contents = Vec::new();
    file.read_to_end(&mut contents)?;
    debug!("Read {} bytes from {}", contents.len(), file_path.display());
    Ok(contents)
}
