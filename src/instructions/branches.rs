//! Conditional branches: BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS.
//!
//! A taken branch lands at `PC + 2 + sign_extend8(offset)`; a branch not
//! taken falls through to `PC + 2`. No flags change either way.

use crate::addressing::branch_target;
use crate::bus::Bus;
use crate::registers::Registers;

fn branch(regs: &mut Registers, bus: &Bus, taken: bool) {
    regs.pc = if taken {
        branch_target(regs, bus)
    } else {
        regs.pc.wrapping_add(2)
    };
}

pub(crate) fn bcc(regs: &mut Registers, bus: &Bus) {
    let taken = !regs.flags.c;
    branch(regs, bus, taken);
}

pub(crate) fn bcs(regs: &mut Registers, bus: &Bus) {
    let taken = regs.flags.c;
    branch(regs, bus, taken);
}

pub(crate) fn beq(regs: &mut Registers, bus: &Bus) {
    let taken = regs.flags.z;
    branch(regs, bus, taken);
}

pub(crate) fn bne(regs: &mut Registers, bus: &Bus) {
    let taken = !regs.flags.z;
    branch(regs, bus, taken);
}

pub(crate) fn bmi(regs: &mut Registers, bus: &Bus) {
    let taken = regs.flags.n;
    branch(regs, bus, taken);
}

pub(crate) fn bpl(regs: &mut Registers, bus: &Bus) {
    let taken = !regs.flags.n;
    branch(regs, bus, taken);
}

pub(crate) fn bvs(regs: &mut Registers, bus: &Bus) {
    let taken = regs.flags.v;
    branch(regs, bus, taken);
}

pub(crate) fn bvc(regs: &mut Registers, bus: &Bus) {
    let taken = !regs.flags.v;
    branch(regs, bus, taken);
}
