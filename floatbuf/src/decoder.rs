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
use crate::error::{Error, Result};
use crate::F32_WIDTH;

/// Decodes densely packed IEEE-754 single precision values.
///
/// The decoder holds nothing but the byte order, so one instance can be
/// shared freely between threads and reused for any number of buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatBufferDecoder {
    endianness: Endianness,
}

impl FloatBufferDecoder {
    pub fn new(endianness: Endianness) -> Self {
        FloatBufferDecoder { endianness }
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Decodes the whole `buffer`, 4 bytes per value, in offset order.
    ///
    /// Fails with [`Error::InvalidLength`] before reading anything if the
    /// buffer length is not a multiple of 4. An empty buffer gives an empty
    /// vector. Bit patterns are kept as they are, NaN payloads included.
    pub fn decode(&self, buffer: &[u8]) -> Result<Vec<f32>> {
        if buffer.len() % F32_WIDTH != 0 {
            return Err(Error::InvalidLength {
                length: buffer.len(),
                multiple: F32_WIDTH,
            });
        }
        let count = buffer.len() / F32_WIDTH;
        debug!("Decoding {} {} samples", count, self.endianness);

        let mut output = Vec::with_capacity(count);
        for group in buffer.chunks_exact(F32_WIDTH) {
            let bytes = [group[0], group[1], group[2], group[3]];
            output.push(self.endianness.f32_from_bytes(bytes));
        }
        Ok(output)
    }
}

pub fn decode(buffer: &[u8], endianness: Endianness) -> Result<Vec<f32>> {
    FloatBufferDecoder::new(endianness).decode(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn bits(values: &[f32]) -> Vec<u32> {
        values.iter().map(|v| v.to_bits()).collect()
    }

    #[test]
    fn test_decode_zero_and_one() {
        let buffer = [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0x3F];
        assert_eq!(decode(&buffer, Endianness::LittleEndian), Ok(vec![0.0, 1.0]));
    }

    #[test]
    fn test_decode_five() {
        let buffer = [0x00, 0x00, 0xA0, 0x40];
        assert_eq!(decode(&buffer, Endianness::LittleEndian), Ok(vec![5.0]));
        assert_eq!(decode(&[0x40, 0xA0, 0x00, 0x00], Endianness::BigEndian), Ok(vec![5.0]));
    }

    #[test]
    fn test_decode_invalid_length() {
        let buffer = [0x00, 0x00, 0x00];
        assert_eq!(
            decode(&buffer, Endianness::LittleEndian),
            Err(Error::InvalidLength { length: 3, multiple: 4 })
        );
        for length in [1, 2, 5, 6, 7, 1023] {
            let buffer = vec![0u8; length];
            assert!(decode(&buffer, Endianness::BigEndian).is_err());
        }
    }

    #[test]
    fn test_invalid_length_message() {
        let err = decode(&[1, 2, 3, 4, 5], Endianness::LittleEndian).unwrap_err();
        assert_eq!(err.to_string(), "Buffer length 5 is not a multiple of 4");
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode(&[], Endianness::LittleEndian), Ok(vec![]));
        assert_eq!(decode(&[], Endianness::BigEndian), Ok(vec![]));
    }

    #[test]
    fn test_decode_length() {
        for count in [1, 2, 10, 257] {
            let buffer = vec![0x41u8; count * 4];
            assert_eq!(decode(&buffer, Endianness::LittleEndian).unwrap().len(), count);
        }
    }

    #[test]
    fn test_decode_blob_sequence() {
        // 0.0 through 9.0, as streamed by the audio client
        let buffer = b"\0\0\0\0\0\0\x80?\0\0\0@\0\0@@\0\0\x80@\0\0\xa0@\0\0\xc0@\0\0\xe0@\0\0\0A\0\0\x10A";
        let expected: Vec<f32> = (0..10).map(|i| i as f32).collect();
        assert_eq!(decode(buffer, Endianness::LittleEndian), Ok(expected));
    }

    #[test]
    fn test_special_values_are_bit_exact() {
        let values = [
            f32::NAN,
            f32::from_bits(0x7FC0_1234),
            f32::from_bits(0xFF80_0001),
            f32::INFINITY,
            f32::NEG_INFINITY,
            0.0,
            -0.0,
            f32::from_bits(1),
            f32::MIN_POSITIVE,
            f32::MAX,
        ];
        let mut buffer = Vec::new();
        for v in values {
            buffer.extend_from_slice(&v.to_le_bytes());
        }
        let decoded = decode(&buffer, Endianness::LittleEndian).unwrap();
        assert_eq!(bits(&decoded), bits(&values));
    }

    #[test]
    fn test_random_bit_patterns() {
        let mut rng = rand::thread_rng();
        let patterns: Vec<u32> = (0..4096).map(|_| rng.gen()).collect();
        let mut le = Vec::new();
        let mut be = Vec::new();
        for p in &patterns {
            le.extend_from_slice(&p.to_le_bytes());
            be.extend_from_slice(&p.to_be_bytes());
        }
        assert_eq!(bits(&decode(&le, Endianness::LittleEndian).unwrap()), patterns);
        assert_eq!(bits(&decode(&be, Endianness::BigEndian).unwrap()), patterns);
    }

    #[test]
    fn test_endianness_matters() {
        let buffer = [0x00, 0x00, 0x80, 0x3F];
        let le = decode(&buffer, Endianness::LittleEndian).unwrap();
        let be = decode(&buffer, Endianness::BigEndian).unwrap();
        assert_ne!(le[0].to_bits(), be[0].to_bits());
        assert_eq!(be[0].to_bits(), 0x0000_803F);
    }

    #[test]
    fn test_input_untouched() {
        let buffer = vec![0x00, 0x00, 0xA0, 0x40, 0x01, 0x02, 0x03, 0x04];
        let copy = buffer.clone();
        let _ = decode(&buffer, Endianness::BigEndian).unwrap();
        assert_eq!(buffer, copy);
    }

    #[test]
    fn test_shared_decoder_across_threads() {
        let decoder = FloatBufferDecoder::new(Endianness::LittleEndian);
        let buffer: Vec<u8> = (0..64u32).flat_map(|i| (i as f32).to_le_bytes()).collect();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| decoder.decode(&buffer).unwrap()))
                .collect();
            for h in handles {
                let out = h.join().unwrap();
                assert_eq!(out.len(), 64);
                assert_eq!(out[63], 63.0);
            }
        });
    }
}
