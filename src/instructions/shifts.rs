//! Shifts and rotates: ASL, LSR, ROL, ROR.
//!
//! The target is either the accumulator or the memory byte at the
//! effective address; memory forms are read-modify-write with one routed
//! read and one routed write.

use super::advance;
use crate::addressing::{effective_address, AddressingMode};
use crate::bus::Bus;
use crate::opcodes::Opcode;
use crate::registers::{Flags, Registers};

fn modify(regs: &mut Registers, bus: &mut Bus, opcode: Opcode, f: impl Fn(&mut Flags, u8) -> u8) {
    if opcode.mode == AddressingMode::Accumulator {
        let result = f(&mut regs.flags, regs.a);
        regs.flags.set_zn(result);
        regs.a = result;
    } else {
        let addr = effective_address(regs, bus, opcode.mode);
        let result = f(&mut regs.flags, bus.read(addr));
        regs.flags.set_zn(result);
        bus.write(addr, result);
    }
    advance(regs, opcode.mode);
}

pub(crate) fn asl(regs: &mut Registers, bus: &mut Bus, opcode: Opcode) {
    modify(regs, bus, opcode, |flags, old| {
        flags.c = old & 0x80 != 0;
        old << 1
    });
}

/// Logical shift right: bit 0 goes to C, N is always clear afterwards.
pub(crate) fn lsr(regs: &mut Registers, bus: &mut Bus, opcode: Opcode) {
    modify(regs, bus, opcode, |flags, old| {
        flags.c = old & 0x01 != 0;
        old >> 1
    });
}

pub(crate) fn rol(regs: &mut Registers, bus: &mut Bus, opcode: Opcode) {
    modify(regs, bus, opcode, |flags, old| {
        let carry_in = flags.c as u8;
        flags.c = old & 0x80 != 0;
        old << 1 | carry_in
    });
}

pub(crate) fn ror(regs: &mut Registers, bus: &mut Bus, opcode: Opcode) {
    modify(regs, bus, opcode, |flags, old| {
        let carry_in = (flags.c as u8) << 7;
        flags.c = old & 0x01 != 0;
        old >> 1 | carry_in
    });
}
