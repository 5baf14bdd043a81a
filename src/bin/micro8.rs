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

use clap::Parser;
use log::{error, info, warn};
use micro8::core::cpu::StepOutcome;
use micro8::core::error::Result;
use micro8::core::machine::Machine;

/// Toy 8-bit machine-code simulator
#[derive(Parser)]
#[command(name = "micro8")]
#[command(about = "8-bit machine-code simulator", long_about = None)]
struct Args {
    /// Path to a raw program image (loaded at address 0)
    program: String,

    /// Maximum number of instructions to execute
    #[arg(short = 'n', long, default_value = "1000000")]
    max_steps: u64,

    /// Dump registers after every instruction
    #[arg(short, long)]
    trace: bool,
}

fn main() -> Result<()> {
    // Initialize logger with default level INFO
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("micro8 v{}", env!("CARGO_PKG_VERSION"));

    // Parse command line arguments
    let args = Args::parse();

    info!("Loading program from: {}", args.program);

    let mut machine = Machine::new();
    if let Err(e) = machine.load_program(&args.program) {
        error!("Failed to load program: {}", e);
        return Err(e);
    }

    info!("Starting execution...");

    // Drive the machine until it halts, faults, or the budget runs out
    let outcome = loop {
        let outcome = machine.step();
        if args.trace {
            machine.cpu().dump_registers();
        }
        if outcome != StepOutcome::Continue || machine.steps() >= args.max_steps {
            break outcome;
        }
    };

    match outcome {
        StepOutcome::Halted => {
            info!("Program halted after {} instructions", machine.steps());
            machine.cpu().dump_registers();
            Ok(())
        }
        StepOutcome::Faulted => {
            error!("Program faulted after {} instructions", machine.steps());
            machine.cpu().dump_registers();
            match machine.cpu().last_fault() {
                Some(fault) => Err(fault.clone().into()),
                None => Ok(()),
            }
        }
        StepOutcome::Continue => {
            warn!(
                "Step budget of {} exhausted with the program still running",
                args.max_steps
            );
            machine.cpu().dump_registers();
            Ok(())
        }
    }
}
