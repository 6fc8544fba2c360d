//! A fluent in-memory assembler.
//!
//! This is a programmatic code emitter, not a textual assembler: tests and
//! loaders call it to place instruction bytes into a [`Bus`] at a moving
//! origin. All writes go through the bus's direct-RAM path, so placing
//! code never wakes a memory-mapped device.
//!
//! Misuse — encoding a (mnemonic, mode) pair that doesn't exist, defining
//! a label twice, or branching out of range — is a programming error and
//! panics. The assembler has no runtime failure modes.

use std::collections::HashMap;

use crate::addressing::AddressingMode;
use crate::bus::Bus;
use crate::opcodes::{encode, Mnemonic};

#[derive(Default)]
struct Label {
    location: Option<u16>,
    /// Operand addresses of 16-bit references emitted before the label
    /// was defined.
    word_fixups: Vec<u16>,
    /// Operand addresses of relative references emitted before the label
    /// was defined.
    branch_fixups: Vec<u16>,
}

/// Emits 6502 machine code into a [`Bus`] at a moving origin.
///
/// ```rust
/// use nmos6502::{step, AddressingMode::*, Assembler, Bus, Mnemonic::*, Registers};
///
/// let mut bus = Bus::new();
///
/// // Count Y down from 3; A counts the iterations.
/// Assembler::new(&mut bus)
///     .org(0x0600)
///     .emit(Lda, Immediate, 0x00)
///     .emit(Ldy, Immediate, 0x03)
///     .label("loop")
///     .emit(Clc, Implied, 0)
///     .emit(Adc, Immediate, 0x01)
///     .emit(Dey, Implied, 0)
///     .emit_ref(Bne, Relative, "loop");
///
/// let mut regs = Registers::new();
/// regs.pc = 0x0600;
/// while regs.pc != 0x060A {
///     step(&mut regs, &mut bus).unwrap();
/// }
/// assert_eq!(regs.a, 0x03);
/// ```
pub struct Assembler<'a> {
    bus: &'a mut Bus,
    org: u16,
    labels: HashMap<String, Label>,
}

impl<'a> Assembler<'a> {
    /// An assembler writing into `bus`, with the origin at 0x0000.
    pub fn new(bus: &'a mut Bus) -> Self {
        Self {
            bus,
            org: 0,
            labels: HashMap::new(),
        }
    }

    /// Move the origin.
    pub fn org(&mut self, addr: u16) -> &mut Self {
        self.org = addr;
        self
    }

    /// The current origin: the address the next emitted byte lands at.
    pub fn origin(&self) -> u16 {
        self.org
    }

    /// Emit one instruction and advance the origin by its length.
    ///
    /// A 2-byte instruction takes `operand & 0xFF`; a 3-byte instruction
    /// takes the full word, little-endian. For 1-byte instructions the
    /// operand is ignored (pass 0).
    ///
    /// # Panics
    ///
    /// If no documented opcode exists for the (mnemonic, mode) pair.
    pub fn emit(&mut self, mnemonic: Mnemonic, mode: AddressingMode, operand: u16) -> &mut Self {
        let opcode = match encode(mnemonic, mode) {
            Some(opcode) => opcode,
            None => panic!("no {mnemonic:?} instruction with {mode:?} addressing"),
        };

        self.bus[self.org] = opcode.byte;
        let length = mode.length();
        if length >= 2 {
            self.bus[self.org.wrapping_add(1)] = operand as u8;
        }
        if length == 3 {
            self.bus[self.org.wrapping_add(2)] = (operand >> 8) as u8;
        }
        self.org = self.org.wrapping_add(length);
        self
    }

    /// Define `name` as the current origin, patching any references
    /// emitted before this point.
    ///
    /// # Panics
    ///
    /// If `name` was already defined.
    pub fn label(&mut self, name: &str) -> &mut Self {
        let here = self.org;
        let entry = self.labels.entry(name.to_string()).or_default();
        if entry.location.is_some() {
            panic!("label {name:?} defined twice");
        }
        entry.location = Some(here);
        let word_fixups = std::mem::take(&mut entry.word_fixups);
        let branch_fixups = std::mem::take(&mut entry.branch_fixups);

        for site in word_fixups {
            self.bus[site] = here as u8;
            self.bus[site.wrapping_add(1)] = (here >> 8) as u8;
        }
        for site in branch_fixups {
            self.bus[site] = branch_displacement(site, here);
        }
        self
    }

    /// Emit an instruction whose operand is a label, by name.
    ///
    /// If the label is already defined the operand is resolved now;
    /// otherwise a placeholder is emitted and patched when [`label`]
    /// defines it. Relative mode encodes the displacement from the byte
    /// after the branch; the absolute-family modes and `Indirect` take the
    /// label's address as the operand word.
    ///
    /// # Panics
    ///
    /// If the mode carries no address-sized operand, or a relative
    /// reference ends up further than ±128 bytes away.
    ///
    /// [`label`]: Assembler::label
    pub fn emit_ref(&mut self, mnemonic: Mnemonic, mode: AddressingMode, name: &str) -> &mut Self {
        match mode {
            AddressingMode::Relative
            | AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => {}
            _ => panic!("label operand unsupported for {mode:?} addressing"),
        }

        let operand_site = self.org.wrapping_add(1);
        let resolved = self.labels.get(name).and_then(|label| label.location);
        match resolved {
            Some(target) if mode == AddressingMode::Relative => {
                let displacement = branch_displacement(operand_site, target);
                self.emit(mnemonic, mode, displacement as u16)
            }
            Some(target) => self.emit(mnemonic, mode, target),
            None => {
                self.emit(mnemonic, mode, 0);
                let entry = self.labels.entry(name.to_string()).or_default();
                if mode == AddressingMode::Relative {
                    entry.branch_fixups.push(operand_site);
                } else {
                    entry.word_fixups.push(operand_site);
                }
                self
            }
        }
    }
}

/// Displacement byte for a branch whose operand sits at `operand_site`:
/// relative to the byte after the two-byte instruction.
fn branch_displacement(operand_site: u16, target: u16) -> u8 {
    let after = operand_site.wrapping_add(1);
    let delta = target.wrapping_sub(after) as i16;
    assert!(
        (-128..=127).contains(&delta),
        "branch target 0x{target:04X} out of range from 0x{after:04X}"
    );
    delta as u8
}
