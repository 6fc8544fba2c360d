//! Fuzz target for single-instruction execution.
//!
//! Builds an arbitrary register file and memory neighborhood, then steps
//! once. Every outcome must be either a clean state transition or
//! `StepError::IllegalOpcode` — never a panic.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nmos6502::{step, Bus, Registers, StepError};

#[derive(Debug, Arbitrary)]
struct FuzzState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    pc: u16,
    flag_c: bool,
    flag_z: bool,
    flag_i: bool,
    flag_d: bool,
    flag_v: bool,
    flag_n: bool,
    /// Instruction window at PC.
    instruction: [u8; 3],
    /// Zero page, for the indirect modes.
    zero_page: [u8; 256],
    /// Stack page.
    stack_page: [u8; 256],
}

fuzz_target!(|state: FuzzState| {
    let mut bus = Bus::new();
    for (i, &byte) in state.zero_page.iter().enumerate() {
        bus[i as u16] = byte;
    }
    for (i, &byte) in state.stack_page.iter().enumerate() {
        bus[0x0100 + i as u16] = byte;
    }
    for (i, &byte) in state.instruction.iter().enumerate() {
        bus[state.pc.wrapping_add(i as u16)] = byte;
    }

    let mut regs = Registers::new();
    regs.a = state.a;
    regs.x = state.x;
    regs.y = state.y;
    regs.sp = state.sp;
    regs.pc = state.pc;
    regs.flags.c = state.flag_c;
    regs.flags.z = state.flag_z;
    regs.flags.i = state.flag_i;
    regs.flags.d = state.flag_d;
    regs.flags.v = state.flag_v;
    regs.flags.n = state.flag_n;

    let before = regs;
    match step(&mut regs, &mut bus) {
        Ok(()) => {}
        Err(StepError::IllegalOpcode { opcode, pc }) => {
            // A failed decode must not touch the machine state.
            assert_eq!(opcode, state.instruction[0]);
            assert_eq!(pc, before.pc);
            assert_eq!(regs.pc, before.pc);
            assert_eq!(regs.sp, before.sp);
            assert_eq!(regs.a, before.a);
        }
    }
});
