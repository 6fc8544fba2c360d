//! Flag operations: CLC, SEC, CLD, SED, CLI, SEI, CLV.
//!
//! Each sets or clears exactly one flag and nothing else. There is no SEV;
//! V is only ever set by arithmetic, BIT, or a pulled status byte.

use super::advance;
use crate::addressing::AddressingMode;
use crate::registers::Registers;

pub(crate) fn clc(regs: &mut Registers) {
    regs.flags.c = false;
    advance(regs, AddressingMode::Implied);
}

pub(crate) fn sec(regs: &mut Registers) {
    regs.flags.c = true;
    advance(regs, AddressingMode::Implied);
}

pub(crate) fn cld(regs: &mut Registers) {
    regs.flags.d = false;
    advance(regs, AddressingMode::Implied);
}

pub(crate) fn sed(regs: &mut Registers) {
    regs.flags.d = true;
    advance(regs, AddressingMode::Implied);
}

pub(crate) fn cli(regs: &mut Registers) {
    regs.flags.i = false;
    advance(regs, AddressingMode::Implied);
}

pub(crate) fn sei(regs: &mut Registers) {
    regs.flags.i = true;
    advance(regs, AddressingMode::Implied);
}

pub(crate) fn clv(regs: &mut Registers) {
    regs.flags.v = false;
    advance(regs, AddressingMode::Implied);
}
