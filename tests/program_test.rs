//! End-to-end programs assembled into the bus and run to completion.

use nmos6502::{step, AddressingMode::*, Assembler, Bus, Mnemonic::*, Registers};

/// Where the BRK vector points; reaching it means the program finished.
const HALT: u16 = 0x0800;

fn run_to_halt(regs: &mut Registers, bus: &mut Bus) {
    bus.write16(0xFFFE, HALT);
    let mut steps = 0;
    while regs.pc != HALT {
        step(regs, bus).unwrap();
        steps += 1;
        assert!(steps < 100_000, "program did not reach BRK");
    }
}

#[test]
fn multiply_by_repeated_addition() {
    let mut bus = Bus::new();
    Assembler::new(&mut bus)
        .org(0x0600)
        .emit(Lda, Immediate, 0x00)
        .emit(Ldy, Immediate, 0x05)
        .label("loop")
        .emit(Clc, Implied, 0)
        .emit(Adc, Immediate, 0x10)
        .emit(Dey, Implied, 0)
        .emit_ref(Bne, Relative, "loop")
        .emit(Brk, Implied, 0);

    let mut regs = Registers::new();
    regs.pc = 0x0600;
    regs.sp = 0xFF;
    run_to_halt(&mut regs, &mut bus);

    assert_eq!(regs.a, 0x50); // 0x10 * 5
    assert_eq!(regs.y, 0x00);
}

#[test]
fn jsr_rts_round_trip_through_a_subroutine() {
    let mut bus = Bus::new();
    Assembler::new(&mut bus)
        .org(0x0700)
        .label("answer")
        .emit(Lda, Immediate, 0x2A)
        .emit(Rts, Implied, 0)
        .org(0x0600)
        .emit_ref(Jsr, Absolute, "answer")
        .emit(Tax, Implied, 0)
        .emit(Brk, Implied, 0);

    let mut regs = Registers::new();
    regs.pc = 0x0600;
    regs.sp = 0xFF;
    run_to_halt(&mut regs, &mut bus);

    assert_eq!(regs.a, 0x2A);
    assert_eq!(regs.x, 0x2A);
    assert_eq!(regs.sp, 0xFF); // stack balanced again
}

/// 16-bit by 8-bit unsigned division, restoring style: the dividend
/// shifts left through the remainder cell, one quotient bit per round.
///
/// Zero page: $40/$41 dividend (lo/hi, quotient on exit), $42 divisor,
/// $43 remainder.
fn assemble_division(bus: &mut Bus) {
    Assembler::new(bus)
        .org(0x0700)
        .emit(Lda, Immediate, 0x00)
        .emit(Sta, ZeroPage, 0x43)
        .emit(Ldx, Immediate, 0x10)
        .label("divloop")
        .emit(Asl, ZeroPage, 0x40)
        .emit(Rol, ZeroPage, 0x41)
        .emit(Rol, ZeroPage, 0x43)
        .emit(Lda, ZeroPage, 0x43)
        .emit(Sec, Implied, 0)
        .emit(Sbc, ZeroPage, 0x42)
        .emit_ref(Bcc, Relative, "keep")
        .emit(Sta, ZeroPage, 0x43)
        .emit(Inc, ZeroPage, 0x40)
        .label("keep")
        .emit(Dex, Implied, 0)
        .emit_ref(Bne, Relative, "divloop")
        .emit(Rts, Implied, 0)
        .org(0x0600)
        .emit(Jsr, Absolute, 0x0700)
        .emit(Brk, Implied, 0);
}

fn divide(dividend: u16, divisor: u8) -> (u16, u8) {
    let mut bus = Bus::new();
    assemble_division(&mut bus);
    bus[0x0040] = dividend as u8;
    bus[0x0041] = (dividend >> 8) as u8;
    bus[0x0042] = divisor;

    let mut regs = Registers::new();
    regs.pc = 0x0600;
    regs.sp = 0xFF;
    run_to_halt(&mut regs, &mut bus);

    let quotient = bus[0x0040] as u16 | (bus[0x0041] as u16) << 8;
    (quotient, bus[0x0043])
}

#[test]
fn division_540_by_5() {
    let (quotient, remainder) = divide(0x021C, 5);
    assert_eq!(quotient, 108);
    assert_eq!(remainder, 0);
}

#[test]
fn division_255_by_16() {
    let (quotient, remainder) = divide(255, 16);
    assert_eq!(quotient, 15);
    assert_eq!(remainder, 15);
}

#[test]
fn division_by_one_is_identity() {
    let (quotient, remainder) = divide(0x1234, 1);
    assert_eq!(quotient, 0x1234);
    assert_eq!(remainder, 0);
}
