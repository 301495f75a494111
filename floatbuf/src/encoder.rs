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

use log::debug;

use crate::endianness::Endianness;
use crate::F32_WIDTH;

/// Packs `values` into bytes, 4 per value, with the given byte order.
/// Inverse of [`crate::decode`].
pub fn encode(values: &[f32], endianness: Endianness) -> Vec<u8> {
    debug!("Encoding {} {} samples", values.len(), endianness);
    let mut encoded = Vec::with_capacity(values.len() * F32_WIDTH);
    for value in values {
        encoded.extend_from_slice(&endianness.f32_to_bytes(*value));
    }
    encoded
}
