//! The fetch/decode/execute engine.

use crate::bus::Bus;
use crate::instructions::{alu, branches, control, flags, inc_dec, load_store, shifts, stack, transfer};
use crate::opcodes::{decode, Mnemonic};
use crate::registers::Registers;
use crate::StepError;

/// Execute one instruction.
///
/// Fetches the opcode byte at `regs.pc` through the bus, decodes it, and
/// applies the instruction's full effect: register and flag updates, memory
/// and stack traffic, and the new program counter. The call is a single
/// atomic transition; there is no state between steps beyond what lives in
/// `regs` and `bus`.
///
/// An undocumented opcode byte returns [`StepError::IllegalOpcode`] and
/// leaves the machine state untouched.
///
/// ```rust
/// use nmos6502::{step, Bus, Registers};
///
/// let mut bus = Bus::new();
/// let mut regs = Registers::new();
/// regs.pc = 0x0600;
///
/// bus[0x0600] = 0xA9; // LDA #$42
/// bus[0x0601] = 0x42;
/// step(&mut regs, &mut bus).unwrap();
///
/// assert_eq!(regs.a, 0x42);
/// assert_eq!(regs.pc, 0x0602);
/// ```
pub fn step(regs: &mut Registers, bus: &mut Bus) -> Result<(), StepError> {
    let byte = bus.read(regs.pc);
    let opcode = decode(byte).ok_or(StepError::IllegalOpcode {
        opcode: byte,
        pc: regs.pc,
    })?;

    match opcode.mnemonic {
        Mnemonic::Lda => load_store::lda(regs, bus, opcode),
        Mnemonic::Ldx => load_store::ldx(regs, bus, opcode),
        Mnemonic::Ldy => load_store::ldy(regs, bus, opcode),
        Mnemonic::Sta => load_store::sta(regs, bus, opcode),
        Mnemonic::Stx => load_store::stx(regs, bus, opcode),
        Mnemonic::Sty => load_store::sty(regs, bus, opcode),
        Mnemonic::Tax => transfer::tax(regs),
        Mnemonic::Tay => transfer::tay(regs),
        Mnemonic::Txa => transfer::txa(regs),
        Mnemonic::Tya => transfer::tya(regs),
        Mnemonic::Tsx => transfer::tsx(regs),
        Mnemonic::Txs => transfer::txs(regs),
        Mnemonic::Adc => alu::adc(regs, bus, opcode),
        Mnemonic::Sbc => alu::sbc(regs, bus, opcode),
        Mnemonic::And => alu::and(regs, bus, opcode),
        Mnemonic::Ora => alu::ora(regs, bus, opcode),
        Mnemonic::Eor => alu::eor(regs, bus, opcode),
        Mnemonic::Bit => alu::bit(regs, bus, opcode),
        Mnemonic::Cmp => alu::cmp(regs, bus, opcode),
        Mnemonic::Cpx => alu::cpx(regs, bus, opcode),
        Mnemonic::Cpy => alu::cpy(regs, bus, opcode),
        Mnemonic::Asl => shifts::asl(regs, bus, opcode),
        Mnemonic::Lsr => shifts::lsr(regs, bus, opcode),
        Mnemonic::Rol => shifts::rol(regs, bus, opcode),
        Mnemonic::Ror => shifts::ror(regs, bus, opcode),
        Mnemonic::Inc => inc_dec::inc(regs, bus, opcode),
        Mnemonic::Dec => inc_dec::dec(regs, bus, opcode),
        Mnemonic::Inx => inc_dec::inx(regs),
        Mnemonic::Iny => inc_dec::iny(regs),
        Mnemonic::Dex => inc_dec::dex(regs),
        Mnemonic::Dey => inc_dec::dey(regs),
        Mnemonic::Clc => flags::clc(regs),
        Mnemonic::Sec => flags::sec(regs),
        Mnemonic::Cld => flags::cld(regs),
        Mnemonic::Sed => flags::sed(regs),
        Mnemonic::Cli => flags::cli(regs),
        Mnemonic::Sei => flags::sei(regs),
        Mnemonic::Clv => flags::clv(regs),
        Mnemonic::Bcc => branches::bcc(regs, bus),
        Mnemonic::Bcs => branches::bcs(regs, bus),
        Mnemonic::Beq => branches::beq(regs, bus),
        Mnemonic::Bne => branches::bne(regs, bus),
        Mnemonic::Bmi => branches::bmi(regs, bus),
        Mnemonic::Bpl => branches::bpl(regs, bus),
        Mnemonic::Bvc => branches::bvc(regs, bus),
        Mnemonic::Bvs => branches::bvs(regs, bus),
        Mnemonic::Jmp => control::jmp(regs, bus, opcode),
        Mnemonic::Jsr => control::jsr(regs, bus),
        Mnemonic::Rts => control::rts(regs, bus),
        Mnemonic::Brk => control::brk(regs, bus),
        Mnemonic::Rti => control::rti(regs, bus),
        Mnemonic::Nop => control::nop(regs),
        Mnemonic::Pha => stack::pha(regs, bus),
        Mnemonic::Php => stack::php(regs, bus),
        Mnemonic::Pla => stack::pla(regs, bus),
        Mnemonic::Plp => stack::plp(regs, bus),
    }

    Ok(())
}
