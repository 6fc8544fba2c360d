//! Register transfers and increment/decrement instructions.

use nmos6502::{step, Bus, Registers};

fn setup() -> (Registers, Bus) {
    let mut regs = Registers::new();
    regs.pc = 0x0600;
    (regs, Bus::new())
}

// ========== Transfers ==========

#[test]
fn tax_copies_and_sets_flags() {
    let (mut regs, mut bus) = setup();
    regs.a = 0x80;
    bus[0x0600] = 0xAA;

    step(&mut regs, &mut bus).unwrap();

    assert_eq!(regs.x, 0x80);
    assert!(regs.flags.n);
    assert_eq!(regs.pc, 0x0601);
}

#[test]
fn tay_txa_tya_copy_both_ways() {
    let (mut regs, mut bus) = setup();
    regs.a = 0x11;
    bus[0x0600] = 0xA8; // TAY
    bus[0x0601] = 0x8A; // TXA (X is 0 -> Z)
    bus[0x0602] = 0x98; // TYA

    step(&mut regs, &mut bus).unwrap();
    assert_eq!(regs.y, 0x11);

    step(&mut regs, &mut bus).unwrap();
    assert_eq!(regs.a, 0x00);
    assert!(regs.flags.z);

    step(&mut regs, &mut bus).unwrap();
    assert_eq!(regs.a, 0x11);
    assert!(!regs.flags.z);
}

#[test]
fn txs_sets_sp_without_flags() {
    let (mut regs, mut bus) = setup();
    regs.x = 0x00; // a zero transfer would normally set Z
    regs.sp = 0xFF;
    bus[0x0600] = 0x9A;

    step(&mut regs, &mut bus).unwrap();

    assert_eq!(regs.sp, 0x00);
    assert!(!regs.flags.z);
    assert!(!regs.flags.n);
}

#[test]
fn tsx_copies_sp_and_sets_flags() {
    let (mut regs, mut bus) = setup();
    regs.sp = 0xF0;
    bus[0x0600] = 0xBA;

    step(&mut regs, &mut bus).unwrap();

    assert_eq!(regs.x, 0xF0);
    assert!(regs.flags.n);
}

// ========== Register increment/decrement ==========

#[test]
fn inx_wraps_to_zero() {
    let (mut regs, mut bus) = setup();
    regs.x = 0xFF;
    bus[0x0600] = 0xE8;

    step(&mut regs, &mut bus).unwrap();

    assert_eq!(regs.x, 0x00);
    assert!(regs.flags.z);
    assert!(!regs.flags.n);
}

#[test]
fn dex_wraps_to_ff() {
    let (mut regs, mut bus) = setup();
    bus[0x0600] = 0xCA;

    step(&mut regs, &mut bus).unwrap();

    assert_eq!(regs.x, 0xFF);
    assert!(regs.flags.n);
    assert!(!regs.flags.z);
}

#[test]
fn iny_and_dey() {
    let (mut regs, mut bus) = setup();
    regs.y = 0x7F;
    bus[0x0600] = 0xC8; // INY
    bus[0x0601] = 0x88; // DEY

    step(&mut regs, &mut bus).unwrap();
    assert_eq!(regs.y, 0x80);
    assert!(regs.flags.n);

    step(&mut regs, &mut bus).unwrap();
    assert_eq!(regs.y, 0x7F);
    assert!(!regs.flags.n);
}

// ========== Memory increment/decrement ==========

#[test]
fn inc_zero_page_wraps_and_sets_z() {
    let (mut regs, mut bus) = setup();
    bus[0x0010] = 0xFF;
    bus[0x0600] = 0xE6;
    bus[0x0601] = 0x10;

    step(&mut regs, &mut bus).unwrap();

    assert_eq!(bus[0x0010], 0x00);
    assert!(regs.flags.z);
}

#[test]
fn dec_zero_page_wraps_and_sets_n() {
    let (mut regs, mut bus) = setup();
    bus[0x0600] = 0xC6;
    bus[0x0601] = 0x10;

    step(&mut regs, &mut bus).unwrap();

    assert_eq!(bus[0x0010], 0xFF);
    assert!(regs.flags.n);
}

#[test]
fn inc_absolute_x() {
    let (mut regs, mut bus) = setup();
    regs.x = 0x05;
    bus[0x4005] = 0x41;
    bus[0x0600] = 0xFE;
    bus[0x0601] = 0x00;
    bus[0x0602] = 0x40;

    step(&mut regs, &mut bus).unwrap();

    assert_eq!(bus[0x4005], 0x42);
    assert_eq!(regs.pc, 0x0603);
}
