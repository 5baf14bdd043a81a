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

//! Toy 8-bit machine-code simulator core library
//!
//! This library simulates a minimal byte-addressed CPU with eight byte-wide
//! registers and 64 KiB of memory. A raw binary program image is loaded at
//! address 0 and executed one instruction at a time; the full machine state
//! can be inspected between steps.
//!
//! A [`core::machine::Machine`] exclusively owns all mutable state and is not
//! internally synchronized: a single instance must not be driven from more
//! than one thread concurrently without external locking.
//!
//! # Example
//!
//! ```
//! use micro8::core::cpu::{Register, StepOutcome};
//! use micro8::core::machine::Machine;
//!
//! // MOV A, 5 ; ADD A, 3 ; HLT
//! let image = [0x03, 0x00, 5, 0x0A, 0x00, 3, 0x00];
//!
//! let mut machine = Machine::new();
//! machine.load_image(&image).unwrap();
//! assert_eq!(machine.run(100), StepOutcome::Halted);
//! assert_eq!(machine.cpu().reg(Register::A), 8);
//! ```

pub mod core;
