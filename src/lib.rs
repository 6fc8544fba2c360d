//! # NMOS 6502 CPU Emulator
//!
//! An instruction-level emulator for the original NMOS MOS 6502, built from
//! three pieces:
//!
//! - a 64 KiB [`Bus`] that routes each access either to flat RAM or to a
//!   memory-mapped [`Device`], selected per 256-byte page;
//! - an interpreter ([`step`]) that advances a caller-owned [`Registers`]
//!   file one instruction at a time, covering all 151 documented opcodes
//!   with their exact flag, stack, and branch semantics — including the
//!   NMOS `JMP (addr)` page-wrap bug;
//! - a fluent [`Assembler`] that emits machine code straight into the bus,
//!   for tests and for anyone driving the emulator programmatically.
//!
//! There is no hidden state: the caller owns the register file and the bus,
//! and every `step` is an atomic transition between two snapshots.
//!
//! ## Quick start
//!
//! ```rust
//! use nmos6502::{step, AddressingMode, Assembler, Bus, Mnemonic, Registers};
//!
//! let mut bus = Bus::new();
//! let mut regs = Registers::new();
//!
//! Assembler::new(&mut bus)
//!     .org(0x0600)
//!     .emit(Mnemonic::Lda, AddressingMode::Immediate, 0x21)
//!     .emit(Mnemonic::Adc, AddressingMode::Immediate, 0x21);
//!
//! regs.pc = 0x0600;
//! step(&mut regs, &mut bus).unwrap();
//! step(&mut regs, &mut bus).unwrap();
//!
//! assert_eq!(regs.a, 0x42);
//! assert_eq!(regs.pc, 0x0604);
//! ```
//!
//! ## Scope
//!
//! The emulator advances by whole instructions, not bus cycles. There are no
//! NMI/IRQ lines (BRK is the only interrupt), no decimal-mode arithmetic
//! (the D flag is storable but inert), and no undocumented opcodes —
//! fetching one is a [`StepError`], not an invented instruction.

pub mod addressing;
pub mod assembler;
pub mod bus;
pub mod cpu;
pub mod devices;
mod instructions;
pub mod opcodes;
pub mod registers;

pub use addressing::AddressingMode;
pub use assembler::Assembler;
pub use bus::{Bus, DeviceHandle};
pub use cpu::step;
pub use devices::{Device, Rom, Uart};
pub use opcodes::{decode, encode, Mnemonic, Opcode, OPCODE_TABLE};
pub use registers::{Flags, Registers};

/// Errors that can occur while executing an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepError {
    /// The byte fetched at `pc` is not a documented 6502 opcode.
    ///
    /// The register file and bus are left exactly as they were before the
    /// step (apart from any side effect of the fetch itself on a
    /// device-mapped page).
    IllegalOpcode {
        /// The undocumented opcode byte.
        opcode: u8,
        /// Address the byte was fetched from.
        pc: u16,
    },
}

impl std::fmt::Display for StepError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            StepError::IllegalOpcode { opcode, pc } => {
                write!(f, "illegal opcode 0x{opcode:02X} at 0x{pc:04X}")
            }
        }
    }
}

impl std::error::Error for StepError {}
