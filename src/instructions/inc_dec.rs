//! Increment and decrement: INC, DEC on memory; INX, INY, DEX, DEY on
//! the index registers. All derive N and Z from the new value.

use super::advance;
use crate::addressing::{effective_address, AddressingMode};
use crate::bus::Bus;
use crate::opcodes::Opcode;
use crate::registers::Registers;

pub(crate) fn inc(regs: &mut Registers, bus: &mut Bus, opcode: Opcode) {
    let addr = effective_address(regs, bus, opcode.mode);
    let result = bus.read(addr).wrapping_add(1);
    regs.flags.set_zn(result);
    bus.write(addr, result);
    advance(regs, opcode.mode);
}

pub(crate) fn dec(regs: &mut Registers, bus: &mut Bus, opcode: Opcode) {
    let addr = effective_address(regs, bus, opcode.mode);
    let result = bus.read(addr).wrapping_sub(1);
    regs.flags.set_zn(result);
    bus.write(addr, result);
    advance(regs, opcode.mode);
}

pub(crate) fn inx(regs: &mut Registers) {
    regs.x = regs.x.wrapping_add(1);
    regs.flags.set_zn(regs.x);
    advance(regs, AddressingMode::Implied);
}

pub(crate) fn iny(regs: &mut Registers) {
    regs.y = regs.y.wrapping_add(1);
    regs.flags.set_zn(regs.y);
    advance(regs, AddressingMode::Implied);
}

pub(crate) fn dex(regs: &mut Registers) {
    regs.x = regs.x.wrapping_sub(1);
    regs.flags.set_zn(regs.x);
    advance(regs, AddressingMode::Implied);
}

pub(crate) fn dey(regs: &mut Registers) {
    regs.y = regs.y.wrapping_sub(1);
    regs.flags.set_zn(regs.y);
    advance(regs, AddressingMode::Implied);
}
