//! Register transfers: TAX, TAY, TXA, TYA, TSX, TXS.
//!
//! All are one-byte implied instructions. Every transfer derives N and Z
//! from the destination except TXS, which touches no flag at all.

use super::advance;
use crate::addressing::AddressingMode;
use crate::registers::Registers;

pub(crate) fn tax(regs: &mut Registers) {
    regs.x = regs.a;
    regs.flags.set_zn(regs.x);
    advance(regs, AddressingMode::Implied);
}

pub(crate) fn tay(regs: &mut Registers) {
    regs.y = regs.a;
    regs.flags.set_zn(regs.y);
    advance(regs, AddressingMode::Implied);
}

pub(crate) fn txa(regs: &mut Registers) {
    regs.a = regs.x;
    regs.flags.set_zn(regs.a);
    advance(regs, AddressingMode::Implied);
}

pub(crate) fn tya(regs: &mut Registers) {
    regs.a = regs.y;
    regs.flags.set_zn(regs.a);
    advance(regs, AddressingMode::Implied);
}

pub(crate) fn tsx(regs: &mut Registers) {
    regs.x = regs.sp;
    regs.flags.set_zn(regs.x);
    advance(regs, AddressingMode::Implied);
}

pub(crate) fn txs(regs: &mut Registers) {
    regs.sp = regs.x;
    advance(regs, AddressingMode::Implied);
}
