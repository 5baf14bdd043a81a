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
    // === Arithmetic Instructions ===
    //
    // Every result goes through `operate`, which recomputes Z and C and
    // wraps the value back into the byte range.

    /// INC: Increment register by 1
    ///
    /// Format: INC r
    /// Operation: r = operate(r + 1)
    pub(crate) fn op_inc_r(&mut self, mem: &Memory) -> Result<(), Fault> {
        let r = self.dest_reg(mem)?;
        let value = self.operate(self.reg(r) as i32 + 1);
        self.set_reg(r, value);
        self.inc_ip();
        Ok(())
    }

    /// DEC: Decrement register by 1
    ///
    /// Decrementing zero wraps to 255 and sets `C`.
    ///
    /// Format: DEC r
    /// Operation: r = operate(r - 1)
    pub(crate) fn op_dec_r(&mut self, mem: &Memory) -> Result<(), Fault> {
        let r = self.dest_reg(mem)?;
        let value = self.operate(self.reg(r) as i32 - 1);
        self.set_reg(r, value);
        self.inc_ip();
        Ok(())
    }

    /// ADD (register + register)
    ///
    /// Format: ADD d, s
    /// Operation: d = operate(d + s)
    pub(crate) fn op_add_r_r(&mut self, mem: &Memory) -> Result<(), Fault> {
        let d = self.dest_reg(mem)?;
        let rhs = self.src_reg(mem)?;
        let value = self.operate(self.reg(d) as i32 + rhs as i32);
        self.set_reg(d, value);
        self.inc_ip();
        Ok(())
    }

    /// ADD (register + memory)
    ///
    /// Format: ADD d, [offset]
    /// Operation: d = operate(d + memory[HA + offset])
    pub(crate) fn op_add_r_m(&mut self, mem: &Memory) -> Result<(), Fault> {
        let d = self.dest_reg(mem)?;
        let rhs = self.src_mem(mem);
        let value = self.operate(self.reg(d) as i32 + rhs as i32);
        self.set_reg(d, value);
        self.inc_ip();
        Ok(())
    }

    /// ADD (register + immediate)
    ///
    /// Format: ADD d, imm
    /// Operation: d = operate(d + imm)
    pub(crate) fn op_add_r_i(&mut self, mem: &Memory) -> Result<(), Fault> {
        let d = self.dest_reg(mem)?;
        let rhs = self.next_byte(mem);
        let value = self.operate(self.reg(d) as i32 + rhs as i32);
        self.set_reg(d, value);
        self.inc_ip();
        Ok(())
    }

    /// SUB (register - register)
    ///
    /// Format: SUB d, s
    /// Operation: d = operate(d - s)
    pub(crate) fn op_sub_r_r(&mut self, mem: &Memory) -> Result<(), Fault> {
        let d = self.dest_reg(mem)?;
        let rhs = self.src_reg(mem)?;
        let value = self.operate(self.reg(d) as i32 - rhs as i32);
        self.set_reg(d, value);
        self.inc_ip();
        Ok(())
    }

    /// SUB (register - memory)
    ///
    /// Format: SUB d, [offset]
    /// Operation: d = operate(d - memory[HA + offset])
    pub(crate) fn op_sub_r_m(&mut self, mem: &Memory) -> Result<(), Fault> {
        let d = self.dest_reg(mem)?;
        let rhs = self.src_mem(mem);
        let value = self.operate(self.reg(d) as i32 - rhs as i32);
        self.set_reg(d, value);
        self.inc_ip();
        Ok(())
    }

    /// SUB (register - immediate)
    ///
    /// Format: SUB d, imm
    /// Operation: d = operate(d - imm)
    pub(crate) fn op_sub_r_i(&mut self, mem: &Memory) -> Result<(), Fault> {
        let d = self.dest_reg(mem)?;
        let rhs = self.next_byte(mem);
        let value = self.operate(self.reg(d) as i32 - rhs as i32);
        self.set_reg(d, value);
        self.inc_ip();
        Ok(())
    }

    // === Compare Instructions ===
    //
    // CMP runs the subtraction through `operate` for the flag side effects
    // and discards the result: Z means equal, C means unsigned lower-than.
    // Neither operand is ever written.

    /// CMP (register, register)
    ///
    /// Format: CMP a, b
    /// Operation: operate(a - b), result discarded
    pub(crate) fn op_cmp_r_r(&mut self, mem: &Memory) -> Result<(), Fault> {
        let a = self.src_reg(mem)?;
        let b = self.src_reg(mem)?;
        self.operate(a as i32 - b as i32);
        self.inc_ip();
        Ok(())
    }

    /// CMP (register, memory)
    ///
    /// Format: CMP a, [offset]
    /// Operation: operate(a - memory[HA + offset]), result discarded
    pub(crate) fn op_cmp_r_m(&mut self, mem: &Memory) -> Result<(), Fault> {
        let a = self.src_reg(mem)?;
        let b = self.src_mem(mem);
        self.operate(a as i32 - b as i32);
        self.inc_ip();
        Ok(())
    }

    /// CMP (register, immediate)
    ///
    /// Format: CMP a, imm
    /// Operation: operate(a - imm), result discarded
    pub(crate) fn op_cmp_r_i(&mut self, mem: &Memory) -> Result<(), Fault> {
        let a = self.src_reg(mem)?;
        let b = self.next_byte(mem);
        self.operate(a as i32 - b as i32);
        self.inc_ip();
        Ok(())
    }
}
