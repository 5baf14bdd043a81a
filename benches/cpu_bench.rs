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

use criterion::{criterion_group, criterion_main, Criterion};
use micro8::core::cpu::{Cpu, Opcode, Register};
use micro8::core::machine::Machine;
use std::hint::black_box;

fn machine_step_benchmark(c: &mut Criterion) {
    c.bench_function("machine_step", |b| {
        let mut machine = Machine::new();
        // INC A ; JMP 0, spinning forever, two instructions per lap
        machine
            .load_image(&[
                Opcode::IncR as u8,
                Register::A as u8,
                Opcode::JmpI as u8,
                0,
            ])
            .unwrap();

        b.iter(|| {
            black_box(machine.step());
        });
    });
}

fn register_access_benchmark(c: &mut Criterion) {
    c.bench_function("cpu_register_read", |b| {
        let cpu = Cpu::new();
        b.iter(|| {
            for r in Register::ALL {
                black_box(cpu.reg(r));
            }
        });
    });

    c.bench_function("cpu_register_write", |b| {
        let mut cpu = Cpu::new();
        b.iter(|| {
            for (i, r) in Register::ALL.into_iter().enumerate() {
                cpu.set_reg(r, black_box(i as u8 * 10));
            }
        });
    });
}

fn alu_benchmark(c: &mut Criterion) {
    c.bench_function("cpu_operate", |b| {
        let mut cpu = Cpu::new();
        b.iter(|| {
            black_box(cpu.operate(black_box(300)));
            black_box(cpu.operate(black_box(-7)));
            black_box(cpu.operate(black_box(0)));
            black_box(cpu.operate(black_box(42)));
        });
    });
}

criterion_group!(
    benches,
    machine_step_benchmark,
    register_access_benchmark,
    alu_benchmark
);
criterion_main!(benches);
