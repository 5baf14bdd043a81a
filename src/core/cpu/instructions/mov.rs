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

use super::super::Cpu;
use crate::core::error::Fault;
use crate::core::memory::Memory;

impl Cpu {
    // === Move Instructions ===
    //
    // All five forms copy a byte and leave every flag untouched.

    /// MOV (register <- register)
    ///
    /// Format: MOV d, s
    /// Operation: d = s
    pub(crate) fn op_mov_r_r(&mut self, mem: &Memory) -> Result<(), Fault> {
        let d = self.dest_reg(mem)?;
        let value = self.src_reg(mem)?;
        self.set_reg(d, value);
        self.inc_ip();
        Ok(())
    }

    /// MOV (register <- memory)
    ///
    /// Format: MOV d, [offset]
    /// Operation: d = memory[HA + offset]
    pub(crate) fn op_mov_r_m(&mut self, mem: &Memory) -> Result<(), Fault> {
        let d = self.dest_reg(mem)?;
        let value = self.src_mem(mem);
        self.set_reg(d, value);
        self.inc_ip();
        Ok(())
    }

    /// MOV (register <- immediate)
    ///
    /// Format: MOV d, imm
    /// Operation: d = imm
    pub(crate) fn op_mov_r_i(&mut self, mem: &Memory) -> Result<(), Fault> {
        let d = self.dest_reg(mem)?;
        let value = self.next_byte(mem);
        self.set_reg(d, value);
        self.inc_ip();
        Ok(())
    }

    /// MOV (memory <- register)
    ///
    /// The first operand is the memory offset, the second the source
    /// register.
    ///
    /// Format: MOV [offset], s
    /// Operation: memory[HA + offset] = s
    pub(crate) fn op_mov_m_r(&mut self, mem: &mut Memory) -> Result<(), Fault> {
        let offset = self.next_byte(mem);
        let value = self.src_reg(mem)?;
        mem.write(self.effective(offset), value);
        self.inc_ip();
        Ok(())
    }

    /// MOV (memory <- immediate)
    ///
    /// Format: MOV [offset], imm
    /// Operation: memory[HA + offset] = imm
    pub(crate) fn op_mov_m_i(&mut self, mem: &mut Memory) -> Result<(), Fault> {
        let offset = self.next_byte(mem);
        let value = self.next_byte(mem);
        mem.write(self.effective(offset), value);
        self.inc_ip();
        Ok(())
    }
}
