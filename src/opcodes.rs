//! The documented-opcode table: the single source of truth tying each
//! opcode byte to its mnemonic and addressing mode.
//!
//! [`decode`] answers the interpreter's byte→instruction lookup through a
//! table built at compile time; [`encode`] answers the assembler's
//! (mnemonic, mode)→byte lookup. Bytes not in the table are undocumented
//! opcodes — `decode` returns `None` and the interpreter refuses to invent
//! semantics for them.

use crate::addressing::AddressingMode;

/// The 56 documented 6502 instruction mnemonics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[rustfmt::skip]
pub enum Mnemonic {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs,
    Clc, Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx,
    Iny, Jmp, Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp,
    Rol, Ror, Rti, Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay,
    Tsx, Txa, Txs, Tya,
}

/// One documented opcode: a mnemonic, its encoding byte, and the
/// addressing mode that fixes the instruction length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    pub mnemonic: Mnemonic,
    pub byte: u8,
    pub mode: AddressingMode,
}

const fn op(mnemonic: Mnemonic, byte: u8, mode: AddressingMode) -> Opcode {
    Opcode {
        mnemonic,
        byte,
        mode,
    }
}

use AddressingMode::*;
use Mnemonic::*;

/// Every documented NMOS 6502 opcode — 151 entries across 56 mnemonics,
/// byte values per the canonical ISA reference.
#[rustfmt::skip]
pub const OPCODE_TABLE: [Opcode; 151] = [
    // Load
    op(Lda, 0xA9, Immediate), op(Lda, 0xA5, ZeroPage),  op(Lda, 0xB5, ZeroPageX),
    op(Lda, 0xAD, Absolute),  op(Lda, 0xBD, AbsoluteX), op(Lda, 0xB9, AbsoluteY),
    op(Lda, 0xA1, IndirectX), op(Lda, 0xB1, IndirectY),
    op(Ldx, 0xA2, Immediate), op(Ldx, 0xA6, ZeroPage),  op(Ldx, 0xB6, ZeroPageY),
    op(Ldx, 0xAE, Absolute),  op(Ldx, 0xBE, AbsoluteY),
    op(Ldy, 0xA0, Immediate), op(Ldy, 0xA4, ZeroPage),  op(Ldy, 0xB4, ZeroPageX),
    op(Ldy, 0xAC, Absolute),  op(Ldy, 0xBC, AbsoluteX),
    // Store
    op(Sta, 0x85, ZeroPage),  op(Sta, 0x95, ZeroPageX), op(Sta, 0x8D, Absolute),
    op(Sta, 0x9D, AbsoluteX), op(Sta, 0x99, AbsoluteY), op(Sta, 0x81, IndirectX),
    op(Sta, 0x91, IndirectY),
    op(Stx, 0x86, ZeroPage),  op(Stx, 0x96, ZeroPageY), op(Stx, 0x8E, Absolute),
    op(Sty, 0x84, ZeroPage),  op(Sty, 0x94, ZeroPageX), op(Sty, 0x8C, Absolute),
    // Transfer
    op(Tax, 0xAA, Implied), op(Tay, 0xA8, Implied), op(Tsx, 0xBA, Implied),
    op(Txa, 0x8A, Implied), op(Txs, 0x9A, Implied), op(Tya, 0x98, Implied),
    // Arithmetic
    op(Adc, 0x69, Immediate), op(Adc, 0x65, ZeroPage),  op(Adc, 0x75, ZeroPageX),
    op(Adc, 0x6D, Absolute),  op(Adc, 0x7D, AbsoluteX), op(Adc, 0x79, AbsoluteY),
    op(Adc, 0x61, IndirectX), op(Adc, 0x71, IndirectY),
    op(Sbc, 0xE9, Immediate), op(Sbc, 0xE5, ZeroPage),  op(Sbc, 0xF5, ZeroPageX),
    op(Sbc, 0xED, Absolute),  op(Sbc, 0xFD, AbsoluteX), op(Sbc, 0xF9, AbsoluteY),
    op(Sbc, 0xE1, IndirectX), op(Sbc, 0xF1, IndirectY),
    // Logic
    op(And, 0x29, Immediate), op(And, 0x25, ZeroPage),  op(And, 0x35, ZeroPageX),
    op(And, 0x2D, Absolute),  op(And, 0x3D, AbsoluteX), op(And, 0x39, AbsoluteY),
    op(And, 0x21, IndirectX), op(And, 0x31, IndirectY),
    op(Ora, 0x09, Immediate), op(Ora, 0x05, ZeroPage),  op(Ora, 0x15, ZeroPageX),
    op(Ora, 0x0D, Absolute),  op(Ora, 0x1D, AbsoluteX), op(Ora, 0x19, AbsoluteY),
    op(Ora, 0x01, IndirectX), op(Ora, 0x11, IndirectY),
    op(Eor, 0x49, Immediate), op(Eor, 0x45, ZeroPage),  op(Eor, 0x55, ZeroPageX),
    op(Eor, 0x4D, Absolute),  op(Eor, 0x5D, AbsoluteX), op(Eor, 0x59, AbsoluteY),
    op(Eor, 0x41, IndirectX), op(Eor, 0x51, IndirectY),
    op(Bit, 0x24, ZeroPage),  op(Bit, 0x2C, Absolute),
    // Compare
    op(Cmp, 0xC9, Immediate), op(Cmp, 0xC5, ZeroPage),  op(Cmp, 0xD5, ZeroPageX),
    op(Cmp, 0xCD, Absolute),  op(Cmp, 0xDD, AbsoluteX), op(Cmp, 0xD9, AbsoluteY),
    op(Cmp, 0xC1, IndirectX), op(Cmp, 0xD1, IndirectY),
    op(Cpx, 0xE0, Immediate), op(Cpx, 0xE4, ZeroPage),  op(Cpx, 0xEC, Absolute),
    op(Cpy, 0xC0, Immediate), op(Cpy, 0xC4, ZeroPage),  op(Cpy, 0xCC, Absolute),
    // Shift and rotate
    op(Asl, 0x0A, Accumulator), op(Asl, 0x06, ZeroPage), op(Asl, 0x16, ZeroPageX),
    op(Asl, 0x0E, Absolute),    op(Asl, 0x1E, AbsoluteX),
    op(Lsr, 0x4A, Accumulator), op(Lsr, 0x46, ZeroPage), op(Lsr, 0x56, ZeroPageX),
    op(Lsr, 0x4E, Absolute),    op(Lsr, 0x5E, AbsoluteX),
    op(Rol, 0x2A, Accumulator), op(Rol, 0x26, ZeroPage), op(Rol, 0x36, ZeroPageX),
    op(Rol, 0x2E, Absolute),    op(Rol, 0x3E, AbsoluteX),
    op(Ror, 0x6A, Accumulator), op(Ror, 0x66, ZeroPage), op(Ror, 0x76, ZeroPageX),
    op(Ror, 0x6E, Absolute),    op(Ror, 0x7E, AbsoluteX),
    // Increment and decrement
    op(Inc, 0xE6, ZeroPage), op(Inc, 0xF6, ZeroPageX), op(Inc, 0xEE, Absolute),
    op(Inc, 0xFE, AbsoluteX),
    op(Dec, 0xC6, ZeroPage), op(Dec, 0xD6, ZeroPageX), op(Dec, 0xCE, Absolute),
    op(Dec, 0xDE, AbsoluteX),
    op(Inx, 0xE8, Implied),  op(Iny, 0xC8, Implied),
    op(Dex, 0xCA, Implied),  op(Dey, 0x88, Implied),
    // Flag operations
    op(Clc, 0x18, Implied), op(Sec, 0x38, Implied), op(Cld, 0xD8, Implied),
    op(Sed, 0xF8, Implied), op(Cli, 0x58, Implied), op(Sei, 0x78, Implied),
    op(Clv, 0xB8, Implied),
    // Branches
    op(Bcc, 0x90, Relative), op(Bcs, 0xB0, Relative), op(Beq, 0xF0, Relative),
    op(Bne, 0xD0, Relative), op(Bmi, 0x30, Relative), op(Bpl, 0x10, Relative),
    op(Bvc, 0x50, Relative), op(Bvs, 0x70, Relative),
    // Jumps, calls, interrupts
    op(Jmp, 0x4C, Absolute), op(Jmp, 0x6C, Indirect),
    op(Jsr, 0x20, Absolute), op(Rts, 0x60, Implied),
    op(Brk, 0x00, Implied),  op(Rti, 0x40, Implied),
    // Stack
    op(Pha, 0x48, Implied), op(Php, 0x08, Implied),
    op(Pla, 0x68, Implied), op(Plp, 0x28, Implied),
    // No-op
    op(Nop, 0xEA, Implied),
];

const fn build_decode_table() -> [Option<Opcode>; 256] {
    let mut table = [None; 256];
    let mut i = 0;
    while i < OPCODE_TABLE.len() {
        let opcode = OPCODE_TABLE[i];
        table[opcode.byte as usize] = Some(opcode);
        i += 1;
    }
    table
}

static DECODE_TABLE: [Option<Opcode>; 256] = build_decode_table();

/// Look up a fetched opcode byte. `None` means the byte is undocumented.
pub fn decode(byte: u8) -> Option<Opcode> {
    DECODE_TABLE[byte as usize]
}

/// Look up the encoding of a (mnemonic, addressing mode) pair. `None`
/// means no documented instruction has that combination.
pub fn encode(mnemonic: Mnemonic, mode: AddressingMode) -> Option<Opcode> {
    OPCODE_TABLE
        .iter()
        .copied()
        .find(|opcode| opcode.mnemonic == mnemonic && opcode.mode == mode)
}
