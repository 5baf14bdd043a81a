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

use super::super::{Cpu, Flags};
use crate::core::error::Fault;
use crate::core::memory::Memory;

impl Cpu {
    // === Jump Instructions ===
    //
    // Every form takes a 1-byte target address. A conditional jump that is
    // not taken still advances IP past the address operand, so the byte
    // after it is fetched as the next opcode, never re-decoded as data.

    /// JMP: Unconditional jump
    ///
    /// Format: JMP target
    /// Operation: IP = target
    pub(crate) fn op_jmp(&mut self, mem: &Memory) -> Result<(), Fault> {
        let target = self.next_byte(mem);
        self.jump(target as usize)
    }

    /// JZ: Jump if the zero flag is set (equal)
    ///
    /// Format: JZ target
    /// Operation: if Z { IP = target }
    pub(crate) fn op_jz(&mut self, mem: &Memory) -> Result<(), Fault> {
        let target = self.next_byte(mem);
        if self.flag(Flags::Z) {
            self.jump(target as usize)
        } else {
            self.inc_ip();
            Ok(())
        }
    }

    /// JNZ: Jump if the zero flag is clear (not equal)
    ///
    /// Format: JNZ target
    /// Operation: if !Z { IP = target }
    pub(crate) fn op_jnz(&mut self, mem: &Memory) -> Result<(), Fault> {
        let target = self.next_byte(mem);
        if !self.flag(Flags::Z) {
            self.jump(target as usize)
        } else {
            self.inc_ip();
            Ok(())
        }
    }

    /// JC: Jump if the carry flag is set (unsigned lower-than)
    ///
    /// Format: JC target
    /// Operation: if C { IP = target }
    pub(crate) fn op_jc(&mut self, mem: &Memory) -> Result<(), Fault> {
        let target = self.next_byte(mem);
        if self.flag(Flags::C) {
            self.jump(target as usize)
        } else {
            self.inc_ip();
            Ok(())
        }
    }

    /// JNC: Jump if the carry flag is clear (unsigned not-lower-than)
    ///
    /// Format: JNC target
    /// Operation: if !C { IP = target }
    pub(crate) fn op_jnc(&mut self, mem: &Memory) -> Result<(), Fault> {
        let target = self.next_byte(mem);
        if !self.flag(Flags::C) {
            self.jump(target as usize)
        } else {
            self.inc_ip();
            Ok(())
        }
    }

    /// JA: Jump if neither zero nor carry is set (unsigned greater-than)
    ///
    /// Format: JA target
    /// Operation: if !Z && !C { IP = target }
    pub(crate) fn op_ja(&mut self, mem: &Memory) -> Result<(), Fault> {
        let target = self.next_byte(mem);
        if !(self.flag(Flags::Z) || self.flag(Flags::C)) {
            self.jump(target as usize)
        } else {
            self.inc_ip();
            Ok(())
        }
    }

    /// JNA: Jump if either zero or carry is set (unsigned not-greater-than)
    ///
    /// Format: JNA target
    /// Operation: if Z || C { IP = target }
    pub(crate) fn op_jna(&mut self, mem: &Memory) -> Result<(), Fault> {
        let target = self.next_byte(mem);
        if self.flag(Flags::Z) || self.flag(Flags::C) {
            self.jump(target as usize)
        } else {
            self.inc_ip();
            Ok(())
        }
    }
}
