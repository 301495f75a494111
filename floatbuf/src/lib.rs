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

pub mod csv;
pub mod decoder;
pub mod encoder;
pub mod endianness;
pub mod error;
pub mod source;

pub use decoder::{decode, FloatBufferDecoder};
pub use encoder::encode;
pub use endianness::Endianness;
pub use error::Error;

/// Width in bytes of one encoded sample
pub const F32_WIDTH: usize = std::mem::size_of::<f32>();
