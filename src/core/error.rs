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

/// Simulator error types
use thiserror::Error;

/// Result type for simulator operations
pub type Result<T> = std::result::Result<T, SimulatorError>;

/// Main error type for the simulator
///
/// Covers everything that can go wrong outside of program execution itself;
/// faults raised *during* execution are [`Fault`] values and surface through
/// the step outcome rather than through `Result`.
#[derive(Error, Debug)]
pub enum SimulatorError {
    #[error("Invalid program image size: {got} bytes (memory capacity {capacity})")]
    ImageTooLarge { got: usize, capacity: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Machine fault: {0}")]
    Fault(#[from] Fault),
}

/// Fatal machine faults
///
/// A fault sets the `ERR` flag, triggers the diagnostic memory dump, and
/// terminates execution with a `Faulted` step outcome. Nothing here unwinds
/// or aborts the host process; the execution driver decides what to do next.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Fault {
    #[error("Attempted to jump to invalid address: 0x{target:04X}")]
    InvalidControlTarget { target: usize },

    #[error("Unmapped opcode 0x{opcode:02X} at address 0x{address:02X}")]
    UnmappedOpcode { opcode: u8, address: u8 },

    #[error("Invalid register index: {index} (valid range: 0-7)")]
    InvalidRegister { index: u8 },
}
