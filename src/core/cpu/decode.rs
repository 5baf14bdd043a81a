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

//! Opcode enumeration and decoding
//!
//! Instructions are variable-length byte sequences: one opcode byte followed
//! by 0-2 operand bytes. There is no length prefix or terminator; the
//! operand count is fixed per opcode. Operand-form suffixes in the variant
//! names: `R` register id, `M` memory offset relative to `HA`, `I` immediate
//! literal.
//!
//! `Opcode` is a closed enumeration so the executor's dispatch is exhaustive
//! at compile time; a byte with no mapping decodes to `None` and is treated
//! as a fatal fault by the executor.

/// Instruction opcodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Opcode {
    /// Halts the program
    Hlt = 0x00,
    /// Moves value to register from register
    MovRR = 0x01,
    /// ...to register from memory address
    MovRM = 0x02,
    /// ...to register from immediate
    MovRI = 0x03,
    /// ...to memory address from register
    MovMR = 0x04,
    /// ...to memory address from immediate
    MovMI = 0x05,
    /// Increments register by 1
    IncR = 0x06,
    /// Decrements register by 1
    DecR = 0x07,
    /// Adds value of register to destination register (first operand)
    AddRR = 0x08,
    /// ...of memory address to destination register
    AddRM = 0x09,
    /// ...of immediate to destination register
    AddRI = 0x0A,
    /// Subtracts value of register from destination register (first operand)
    SubRR = 0x0B,
    /// ...of memory address from destination register
    SubRM = 0x0C,
    /// ...of immediate from destination register
    SubRI = 0x0D,
    /// Bitwise-ANDs value of register with destination register
    AndRR = 0x0E,
    /// ...of memory address with destination register
    AndRM = 0x0F,
    /// ...of immediate with destination register
    AndRI = 0x10,
    /// Bitwise-ORs value of register with destination register
    OrRR = 0x11,
    /// ...of memory address with destination register
    OrRM = 0x12,
    /// ...of immediate with destination register
    OrRI = 0x13,
    /// Bitwise-XORs value of register with destination register
    XorRR = 0x14,
    /// ...of memory address with destination register
    XorRM = 0x15,
    /// ...of immediate with destination register
    XorRI = 0x16,
    /// Bitwise-NOTs value of register
    NotR = 0x17,
    /// Compares values of register and register (flags only)
    CmpRR = 0x18,
    /// ...of register and memory address
    CmpRM = 0x19,
    /// ...of register and immediate
    CmpRI = 0x1A,
    /// Unconditionally jumps to instruction at given address
    JmpI = 0x1B,
    /// Jumps if zero flag is true (equal)
    JzI = 0x1C,
    /// Jumps if zero flag is false (not equal)
    JnzI = 0x1D,
    /// Jumps if carry flag is true (lower than)
    JcI = 0x1E,
    /// Jumps if carry flag is false (not lower than)
    JncI = 0x1F,
    /// Jumps if neither carry nor zero flag is true (greater than)
    JaI = 0x20,
    /// Jumps if either carry or zero flag is true (not greater than)
    JnaI = 0x21,
}

impl Opcode {
    /// Decode an opcode byte
    ///
    /// Returns `None` for a byte with no mapped opcode; the executor turns
    /// that into an `UnmappedOpcode` fault rather than looping on the byte.
    pub fn decode(byte: u8) -> Option<Opcode> {
        let opcode = match byte {
            0x00 => Opcode::Hlt,
            0x01 => Opcode::MovRR,
            0x02 => Opcode::MovRM,
            0x03 => Opcode::MovRI,
            0x04 => Opcode::MovMR,
            0x05 => Opcode::MovMI,
            0x06 => Opcode::IncR,
            0x07 => Opcode::DecR,
            0x08 => Opcode::AddRR,
            0x09 => Opcode::AddRM,
            0x0A => Opcode::AddRI,
            0x0B => Opcode::SubRR,
            0x0C => Opcode::SubRM,
            0x0D => Opcode::SubRI,
            0x0E => Opcode::AndRR,
            0x0F => Opcode::AndRM,
            0x10 => Opcode::AndRI,
            0x11 => Opcode::OrRR,
            0x12 => Opcode::OrRM,
            0x13 => Opcode::OrRI,
            0x14 => Opcode::XorRR,
            0x15 => Opcode::XorRM,
            0x16 => Opcode::XorRI,
            0x17 => Opcode::NotR,
            0x18 => Opcode::CmpRR,
            0x19 => Opcode::CmpRM,
            0x1A => Opcode::CmpRI,
            0x1B => Opcode::JmpI,
            0x1C => Opcode::JzI,
            0x1D => Opcode::JnzI,
            0x1E => Opcode::JcI,
            0x1F => Opcode::JncI,
            0x20 => Opcode::JaI,
            0x21 => Opcode::JnaI,
            _ => return None,
        };
        Some(opcode)
    }

    /// Number of operand bytes following the opcode byte
    pub fn operand_count(self) -> usize {
        match self {
            Opcode::Hlt => 0,

            Opcode::IncR
            | Opcode::DecR
            | Opcode::NotR
            | Opcode::JmpI
            | Opcode::JzI
            | Opcode::JnzI
            | Opcode::JcI
            | Opcode::JncI
            | Opcode::JaI
            | Opcode::JnaI => 1,

            Opcode::MovRR
            | Opcode::MovRM
            | Opcode::MovRI
            | Opcode::MovMR
            | Opcode::MovMI
            | Opcode::AddRR
            | Opcode::AddRM
            | Opcode::AddRI
            | Opcode::SubRR
            | Opcode::SubRM
            | Opcode::SubRI
            | Opcode::AndRR
            | Opcode::AndRM
            | Opcode::AndRI
            | Opcode::OrRR
            | Opcode::OrRM
            | Opcode::OrRI
            | Opcode::XorRR
            | Opcode::XorRM
            | Opcode::XorRI
            | Opcode::CmpRR
            | Opcode::CmpRM
            | Opcode::CmpRI => 2,
        }
    }

    /// Assembly-style mnemonic, for trace logs and diagnostics
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Hlt => "HLT",
            Opcode::MovRR | Opcode::MovRM | Opcode::MovRI | Opcode::MovMR | Opcode::MovMI => "MOV",
            Opcode::IncR => "INC",
            Opcode::DecR => "DEC",
            Opcode::AddRR | Opcode::AddRM | Opcode::AddRI => "ADD",
            Opcode::SubRR | Opcode::SubRM | Opcode::SubRI => "SUB",
            Opcode::AndRR | Opcode::AndRM | Opcode::AndRI => "AND",
            Opcode::OrRR | Opcode::OrRM | Opcode::OrRI => "OR",
            Opcode::XorRR | Opcode::XorRM | Opcode::XorRI => "XOR",
            Opcode::NotR => "NOT",
            Opcode::CmpRR | Opcode::CmpRM | Opcode::CmpRI => "CMP",
            Opcode::JmpI => "JMP",
            Opcode::JzI => "JZ",
            Opcode::JnzI => "JNZ",
            Opcode::JcI => "JC",
            Opcode::JncI => "JNC",
            Opcode::JaI => "JA",
            Opcode::JnaI => "JNA",
        }
    }
}
