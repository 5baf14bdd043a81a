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

//! Core simulation components
//!
//! This module contains all pieces of the machine model:
//! - CPU (register file, flags, fetch-decode-execute engine)
//! - Memory (flat 64 KiB byte array)
//! - Loader (raw program images)
//! - Machine integration (one CPU + one memory, driven step by step)

pub mod cpu;
pub mod error;
pub mod loader;
pub mod machine;
pub mod memory;

// Re-export commonly used types
pub use cpu::{Cpu, Flags, Opcode, Register, StepOutcome};
pub use error::{Fault, Result, SimulatorError};
pub use machine::Machine;
pub use memory::Memory;
