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

//! Machine integration
//!
//! Ties the CPU and memory together into one owned execution session and
//! provides the load/step/run surface the execution driver uses.

use super::cpu::{Cpu, StepOutcome};
use super::error::Result;
use super::loader;
use super::memory::Memory;

/// A complete machine: one CPU, one memory, one program
///
/// Created fresh per loaded program and exclusively owned by one execution
/// session. Internal mutation is unguarded; drive a given instance from a
/// single thread.
///
/// # Example
/// ```
/// use micro8::core::cpu::{Register, StepOutcome};
/// use micro8::core::machine::Machine;
///
/// let mut machine = Machine::new();
/// machine.load_image(&[0x06, 0x00, 0x00]).unwrap(); // INC A ; HLT
/// assert_eq!(machine.run(10), StepOutcome::Halted);
/// assert_eq!(machine.cpu().reg(Register::A), 1);
/// ```
pub struct Machine {
    /// CPU instance
    cpu: Cpu,
    /// Machine memory
    memory: Memory,
    /// Instructions executed since the last load
    steps: u64,
}

impl Machine {
    /// Create a new machine with no program loaded
    pub fn new() -> Self {
        Self {
            cpu: Cpu::new(),
            memory: Memory::new(),
            steps: 0,
        }
    }

    /// Load a program image into a fresh machine state
    ///
    /// Resets registers (all zero, `SP = 0xFF`) and memory, then copies the
    /// image to address 0. Memory above the image stays zeroed.
    pub fn load_image(&mut self, image: &[u8]) -> Result<()> {
        self.cpu.reset();
        self.memory.reset();
        self.memory.load_image(image)?;
        self.steps = 0;
        Ok(())
    }

    /// Read a program image from a file and load it
    pub fn load_program(&mut self, path: &str) -> Result<()> {
        let image = loader::read_image(path)?;
        self.load_image(&image)
    }

    /// Execute one instruction
    pub fn step(&mut self) -> StepOutcome {
        let outcome = self.cpu.step(&mut self.memory);
        if outcome != StepOutcome::Halted {
            self.steps += 1;
        }
        outcome
    }

    /// Run until the program halts, faults, or the step budget runs out
    ///
    /// Returns the final outcome; `Continue` means the budget was exhausted
    /// with the program still running.
    pub fn run(&mut self, max_steps: u64) -> StepOutcome {
        for _ in 0..max_steps {
            let outcome = self.step();
            if outcome != StepOutcome::Continue {
                return outcome;
            }
        }
        StepOutcome::Continue
    }

    /// Access the CPU for register/flag inspection
    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// Access machine memory
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Instructions executed since the last load
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cpu::Register;

    #[test]
    fn test_load_image_resets_machine_state() {
        let mut machine = Machine::new();

        // Dirty the state with a first program
        machine.load_image(&[0x06, 0x00, 0x00]).unwrap(); // INC A ; HLT
        assert_eq!(machine.run(10), StepOutcome::Halted);
        assert_eq!(machine.cpu().reg(Register::A), 1);

        let image = [0x00, 0x11, 0x22];
        machine.load_image(&image).unwrap();

        for r in Register::ALL {
            let expected = if r == Register::Sp { 0xFF } else { 0 };
            assert_eq!(machine.cpu().reg(r), expected);
        }
        for (address, byte) in image.iter().enumerate() {
            assert_eq!(machine.memory().read(address), *byte);
        }
        assert_eq!(machine.memory().read(image.len()), 0);
        assert_eq!(machine.steps(), 0);
    }

    #[test]
    fn test_run_respects_step_budget() {
        let mut machine = Machine::new();
        machine.load_image(&[0x1B, 0x00]).unwrap(); // JMP 0 (spin)

        assert_eq!(machine.run(5), StepOutcome::Continue);
        assert_eq!(machine.steps(), 5);
    }

    #[test]
    fn test_halt_does_not_count_as_a_step() {
        let mut machine = Machine::new();
        machine.load_image(&[0x06, 0x00, 0x00]).unwrap(); // INC A ; HLT

        assert_eq!(machine.run(10), StepOutcome::Halted);
        assert_eq!(machine.steps(), 1);
    }
}
