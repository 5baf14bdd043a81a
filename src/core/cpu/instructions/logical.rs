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
    // === Logical Instructions ===
    //
    // Bitwise results never leave the byte range, so these can set Z but
    // not C (operate still clears C).

    /// AND (register & register)
    ///
    /// Format: AND d, s
    /// Operation: d = operate(d & s)
    pub(crate) fn op_and_r_r(&mut self, mem: &Memory) -> Result<(), Fault> {
        let d = self.dest_reg(mem)?;
        let rhs = self.src_reg(mem)?;
        let value = self.operate((self.reg(d) & rhs) as i32);
        self.set_reg(d, value);
        self.inc_ip();
        Ok(())
    }

    /// AND (register & memory)
    ///
    /// Format: AND d, [offset]
    /// Operation: d = operate(d & memory[HA + offset])
    pub(crate) fn op_and_r_m(&mut self, mem: &Memory) -> Result<(), Fault> {
        let d = self.dest_reg(mem)?;
        let rhs = self.src_mem(mem);
        let value = self.operate((self.reg(d) & rhs) as i32);
        self.set_reg(d, value);
        self.inc_ip();
        Ok(())
    }

    /// AND (register & immediate)
    ///
    /// Format: AND d, imm
    /// Operation: d = operate(d & imm)
    pub(crate) fn op_and_r_i(&mut self, mem: &Memory) -> Result<(), Fault> {
        let d = self.dest_reg(mem)?;
        let rhs = self.next_byte(mem);
        let value = self.operate((self.reg(d) & rhs) as i32);
        self.set_reg(d, value);
        self.inc_ip();
        Ok(())
    }

    /// OR (register | register)
    ///
    /// Format: OR d, s
    /// Operation: d = operate(d | s)
    pub(crate) fn op_or_r_r(&mut self, mem: &Memory) -> Result<(), Fault> {
        let d = self.dest_reg(mem)?;
        let rhs = self.src_reg(mem)?;
        let value = self.operate((self.reg(d) | rhs) as i32);
        self.set_reg(d, value);
        self.inc_ip();
        Ok(())
    }

    /// OR (register | memory)
    ///
    /// Format: OR d, [offset]
    /// Operation: d = operate(d | memory[HA + offset])
    pub(crate) fn op_or_r_m(&mut self, mem: &Memory) -> Result<(), Fault> {
        let d = self.dest_reg(mem)?;
        let rhs = self.src_mem(mem);
        let value = self.operate((self.reg(d) | rhs) as i32);
        self.set_reg(d, value);
        self.inc_ip();
        Ok(())
    }

    /// OR (register | immediate)
    ///
    /// Format: OR d, imm
    /// Operation: d = operate(d | imm)
    pub(crate) fn op_or_r_i(&mut self, mem: &Memory) -> Result<(), Fault> {
        let d = self.dest_reg(mem)?;
        let rhs = self.next_byte(mem);
        let value = self.operate((self.reg(d) | rhs) as i32);
        self.set_reg(d, value);
        self.inc_ip();
        Ok(())
    }

    /// XOR (register ^ register)
    ///
    /// `XOR r, r` is the idiomatic register clear: result 0, Z set.
    ///
    /// Format: XOR d, s
    /// Operation: d = operate(d ^ s)
    pub(crate) fn op_xor_r_r(&mut self, mem: &Memory) -> Result<(), Fault> {
        let d = self.dest_reg(mem)?;
        let rhs = self.src_reg(mem)?;
        let value = self.operate((self.reg(d) ^ rhs) as i32);
        self.set_reg(d, value);
        self.inc_ip();
        Ok(())
    }

    /// XOR (register ^ memory)
    ///
    /// Format: XOR d, [offset]
    /// Operation: d = operate(d ^ memory[HA + offset])
    pub(crate) fn op_xor_r_m(&mut self, mem: &Memory) -> Result<(), Fault> {
        let d = self.dest_reg(mem)?;
        let rhs = self.src_mem(mem);
        let value = self.operate((self.reg(d) ^ rhs) as i32);
        self.set_reg(d, value);
        self.inc_ip();
        Ok(())
    }

    /// XOR (register ^ immediate)
    ///
    /// Format: XOR d, imm
    /// Operation: d = operate(d ^ imm)
    pub(crate) fn op_xor_r_i(&mut self, mem: &Memory) -> Result<(), Fault> {
        let d = self.dest_reg(mem)?;
        let rhs = self.next_byte(mem);
        let value = self.operate((self.reg(d) ^ rhs) as i32);
        self.set_reg(d, value);
        self.inc_ip();
        Ok(())
    }

    /// NOT: Bitwise complement of a register
    ///
    /// The complement is computed in the byte domain, then routed through
    /// `operate` so `Z` tracks a zero result; `C` can never be set here.
    ///
    /// Format: NOT r
    /// Operation: r = operate(!r)
    pub(crate) fn op_not_r(&mut self, mem: &Memory) -> Result<(), Fault> {
        let r = self.dest_reg(mem)?;
        let value = self.operate(!self.reg(r) as i32);
        self.set_reg(r, value);
        self.inc_ip();
        Ok(())
    }
}
