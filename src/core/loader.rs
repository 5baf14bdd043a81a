// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Program image loading
//!
//! A program image is raw machine code: no header, no magic number, no
//! length field. The bytes are copied into memory verbatim starting at
//! address 0 and execution begins there.
//!
//! The only validation is the size check: an image larger than memory is
//! rejected rather than truncated, since a silently truncated program would
//! execute garbage.

use crate::core::error::{Result, SimulatorError};
use crate::core::memory::Memory;

/// Read a raw program image from a file
///
/// # Arguments
///
/// * `path` - path to the image file
///
/// # Returns
///
/// The image bytes, or an error if the file cannot be read or does not fit
/// in machine memory.
pub fn read_image(path: &str) -> Result<Vec<u8>> {
    let image = std::fs::read(path)?;

    if image.len() > Memory::SIZE {
        return Err(SimulatorError::ImageTooLarge {
            got: image.len(),
            capacity: Memory::SIZE,
        });
    }

    log::info!("Program image read: {} bytes from {}", image.len(), path);
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_image_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x03, 0x00, 0x05, 0x00]).unwrap();

        let image = read_image(file.path().to_str().unwrap()).unwrap();
        assert_eq!(image, vec![0x03, 0x00, 0x05, 0x00]);
    }

    #[test]
    fn test_read_image_missing_file() {
        let result = read_image("/nonexistent/program.bin");
        assert!(matches!(result, Err(SimulatorError::Io(_))));
    }

    #[test]
    fn test_read_image_rejects_oversized_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&vec![0u8; Memory::SIZE + 1]).unwrap();

        let result = read_image(file.path().to_str().unwrap());
        assert!(matches!(
            result,
            Err(SimulatorError::ImageTooLarge { .. })
        ));
    }
}
