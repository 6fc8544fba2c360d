//! Load and store: LDA, LDX, LDY, STA, STX, STY.

use super::advance;
use crate::addressing::{effective_address, operand_value};
use crate::bus::Bus;
use crate::opcodes::Opcode;
use crate::registers::Registers;

pub(crate) fn lda(regs: &mut Registers, bus: &Bus, opcode: Opcode) {
    let value = operand_value(regs, bus, opcode.mode);
    regs.a = value;
    regs.flags.set_zn(value);
    advance(regs, opcode.mode);
}

pub(crate) fn ldx(regs: &mut Registers, bus: &Bus, opcode: Opcode) {
    let value = operand_value(regs, bus, opcode.mode);
    regs.x = value;
    regs.flags.set_zn(value);
    advance(regs, opcode.mode);
}

pub(crate) fn ldy(regs: &mut Registers, bus: &Bus, opcode: Opcode) {
    let value = operand_value(regs, bus, opcode.mode);
    regs.y = value;
    regs.flags.set_zn(value);
    advance(regs, opcode.mode);
}

// Stores touch no flags.

pub(crate) fn sta(regs: &mut Registers, bus: &mut Bus, opcode: Opcode) {
    let addr = effective_address(regs, bus, opcode.mode);
    bus.write(addr, regs.a);
    advance(regs, opcode.mode);
}

pub(crate) fn stx(regs: &mut Registers, bus: &mut Bus, opcode: Opcode) {
    let addr = effective_address(regs, bus, opcode.mode);
    bus.write(addr, regs.x);
    advance(regs, opcode.mode);
}

pub(crate) fn sty(regs: &mut Registers, bus: &mut Bus, opcode: Opcode) {
    let addr = effective_address(regs, bus, opcode.mode);
    bus.write(addr, regs.y);
    advance(regs, opcode.mode);
}
