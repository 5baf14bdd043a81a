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

use super::{Cpu, Flags};

impl Cpu {
    /// Canonical flag-update rule for arithmetic and logical results
    ///
    /// Takes the unclamped integer result of an operation (possibly negative
    /// or above 255) and:
    ///
    /// 1. Clears `Z` and `C`: flags are recomputed from scratch, never
    ///    accumulated.
    /// 2. Sets `Z` if the result is exactly zero.
    /// 3. Otherwise, if the result left the byte range, sets `C` and wraps
    ///    the result back into `[0, 255]` (two's-complement-style).
    ///
    /// `ERR` is never touched here. Every `INC/DEC/ADD/SUB/AND/OR/XOR`
    /// writes the returned value back; `CMP` calls this purely for the flag
    /// side effects and discards the return.
    ///
    /// # Example
    ///
    /// ```
    /// use micro8::core::cpu::{Cpu, Flags};
    ///
    /// let mut cpu = Cpu::new();
    /// assert_eq!(cpu.operate(300), 44);
    /// assert!(cpu.flag(Flags::C));
    /// assert_eq!(cpu.operate(-1), 255);
    /// assert!(cpu.flag(Flags::C));
    /// assert_eq!(cpu.operate(0), 0);
    /// assert!(cpu.flag(Flags::Z));
    /// ```
    pub fn operate(&mut self, x: i32) -> u8 {
        self.set_flag(Flags::Z, false);
        self.set_flag(Flags::C, false);

        if x == 0 {
            self.set_flag(Flags::Z, true);
        } else if !(0..=255).contains(&x) {
            self.set_flag(Flags::C, true);
            return x.rem_euclid(256) as u8;
        }

        x as u8
    }
}
