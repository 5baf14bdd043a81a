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

use proptest::prelude::*;

use super::super::*;

#[test]
fn test_operate_zero_sets_z() {
    let mut cpu = Cpu::new();
    assert_eq!(cpu.operate(0), 0);
    assert!(cpu.flag(Flags::Z));
    assert!(!cpu.flag(Flags::C));
}

#[test]
fn test_operate_in_range_clears_flags() {
    let mut cpu = Cpu::new();
    cpu.set_flag(Flags::Z, true);
    cpu.set_flag(Flags::C, true);

    assert_eq!(cpu.operate(42), 42);
    assert!(!cpu.flag(Flags::Z));
    assert!(!cpu.flag(Flags::C));
}

#[test]
fn test_operate_overflow_sets_c_and_wraps() {
    let mut cpu = Cpu::new();
    assert_eq!(cpu.operate(300), 44);
    assert!(cpu.flag(Flags::C));
    assert!(!cpu.flag(Flags::Z));
}

#[test]
fn test_operate_underflow_wraps_twos_complement_style() {
    let mut cpu = Cpu::new();
    assert_eq!(cpu.operate(-1), 255);
    assert!(cpu.flag(Flags::C));
    assert_eq!(cpu.operate(-256), 0);
    assert!(cpu.flag(Flags::C));
}

#[test]
fn test_operate_wrapped_zero_is_not_z() {
    // 256 wraps to byte value 0 but the unclamped result was nonzero:
    // that is a carry, not a zero result.
    let mut cpu = Cpu::new();
    assert_eq!(cpu.operate(256), 0);
    assert!(cpu.flag(Flags::C));
    assert!(!cpu.flag(Flags::Z));
}

#[test]
fn test_operate_recomputes_flags_from_scratch() {
    let mut cpu = Cpu::new();

    cpu.operate(0); // Z set
    cpu.operate(7); // must clear it again
    assert!(!cpu.flag(Flags::Z));

    cpu.operate(300); // C set
    cpu.operate(7); // must clear it again
    assert!(!cpu.flag(Flags::C));
}

#[test]
fn test_operate_never_touches_err() {
    let mut cpu = Cpu::new();
    cpu.set_flag(Flags::ERR, true);

    cpu.operate(0);
    cpu.operate(300);
    cpu.operate(7);
    assert!(cpu.flag(Flags::ERR));
}

proptest! {
    #[test]
    fn prop_operate_value_is_result_mod_256(x in -100_000i32..100_000) {
        let mut cpu = Cpu::new();
        let value = cpu.operate(x);
        prop_assert_eq!(value as i32, x.rem_euclid(256));
    }

    #[test]
    fn prop_operate_z_iff_exact_zero(x in -1024i32..1024) {
        let mut cpu = Cpu::new();
        cpu.operate(x);
        prop_assert_eq!(cpu.flag(Flags::Z), x == 0);
    }

    #[test]
    fn prop_operate_c_iff_out_of_byte_range(x in -1024i32..1024) {
        let mut cpu = Cpu::new();
        cpu.operate(x);
        prop_assert_eq!(cpu.flag(Flags::C), !(0..=255).contains(&x));
    }
}
