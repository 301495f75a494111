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

/// Byte order of the 4-byte groups in a buffer. No default, callers always name it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    /// Least significant byte first
    LittleEndian,
    /// Most significant byte first
    BigEndian,
}

impl Endianness {
    /// Builds the f32 whose bit pattern is stored in `bytes` with this byte order
    pub fn f32_from_bytes(self, bytes: [u8; 4]) -> f32 {
        match self {
            Endianness::LittleEndian => f32::from_le_bytes(bytes),
            Endianness::BigEndian => f32::from_be_bytes(bytes),
        }
    }

    pub fn f32_to_bytes(self, value: f32) -> [u8; 4] {
        match self {
            Endianness::LittleEndian => value.to_le_bytes(),
            Endianness::BigEndian => value.to_be_bytes(),
        }
    }
}

impl std::fmt::Display for Endianness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endianness::LittleEndian => write!(f, "little-endian"),
            Endianness::BigEndian => write!(f, "big-endian"),
        }
    }
}
