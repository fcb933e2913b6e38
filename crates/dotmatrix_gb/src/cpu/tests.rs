use super::cb::CB_OPCODES;
use super::*;

struct TestBus {
    memory: [u8; 0x10000],
}

impl Default for TestBus {
    fn default() -> Self {
        Self {
            memory: [0; 0x10000],
        }
    }
}

impl Bus for TestBus {
    fn read8(&mut self, address: u16) -> Result<u8, BusFault> {
        Ok(self.memory[address as usize])
    }

    fn write8(&mut self, address: u16, value: u8) -> Result<(), BusFault> {
        self.memory[address as usize] = value;
        Ok(())
    }
}

/// CPU with `program` placed at the reset PC (0x0100).
fn setup(program: &[u8]) -> (Cpu, TestBus) {
    let mut bus = TestBus::default();
    bus.memory[0x0100..0x0100 + program.len()].copy_from_slice(program);
    (Cpu::new(), bus)
}

fn step(cpu: &mut Cpu, bus: &mut TestBus) -> u64 {
    cpu.step(bus).expect("flat test bus never faults")
}

#[test]
fn table_is_inspectable() {
    assert_eq!(OPCODES[0x00].mnemonic, "NOP");
    assert_eq!(OPCODES[0x01].operand, Operand::Word);
    assert_eq!(OPCODES[0x01].ticks, 12);
    assert_eq!(OPCODES[0x76].op, Op::Halt);
    assert_eq!(OPCODES[0xD3].op, Op::Undefined);
    assert_eq!(CB_OPCODES[0x11].mnemonic, "RL C");
    assert_eq!(CB_OPCODES[0x46].mnemonic, "BIT 0, (HL)");
    // Extended (HL) forms: 16 cycles in the rotate/shift group, 12 in
    // the bit group.
    assert_eq!(CB_OPCODES[0x16].ticks, 16);
    assert_eq!(CB_OPCODES[0x46].ticks, 12);
    assert_eq!(CB_OPCODES[0x11].ticks, 8);
}

#[test]
fn ld_bc_push_pop_round_trip() {
    // LD BC,0x1234; PUSH BC; POP DE
    let (mut cpu, mut bus) = setup(&[0x01, 0x34, 0x12, 0xC5, 0xD1]);
    let sp_before = cpu.regs.sp;

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.bc(), 0x1234);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.sp, sp_before.wrapping_sub(2));
    step(&mut cpu, &mut bus);

    assert_eq!(cpu.regs.de(), 0x1234);
    assert_eq!(cpu.regs.sp, sp_before);
}

#[test]
fn add_half_carry_boundary() {
    // ADD A,0x01 with A=0x0F
    let (mut cpu, mut bus) = setup(&[0xC6, 0x01]);
    cpu.regs.a = 0x0F;
    step(&mut cpu, &mut bus);

    assert_eq!(cpu.regs.a, 0x10);
    assert!(cpu.get_flag(Flag::H));
    assert!(!cpu.get_flag(Flag::C));
    assert!(!cpu.get_flag(Flag::Z));
    assert!(!cpu.get_flag(Flag::N));
}

#[test]
fn daa_corrects_after_add() {
    // ADD A,A; DAA with A=0x09
    let (mut cpu, mut bus) = setup(&[0x87, 0x27]);
    cpu.regs.a = 0x09;

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x12);
    assert!(cpu.get_flag(Flag::H));

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x18);
    assert!(!cpu.get_flag(Flag::H));
    assert!(!cpu.get_flag(Flag::C));
    assert!(!cpu.get_flag(Flag::Z));
}

#[test]
fn sub_sets_borrow_flags() {
    // SUB 0x20 with A=0x10
    let (mut cpu, mut bus) = setup(&[0xD6, 0x20]);
    cpu.regs.a = 0x10;
    step(&mut cpu, &mut bus);

    assert_eq!(cpu.regs.a, 0xF0);
    assert!(cpu.get_flag(Flag::N));
    assert!(cpu.get_flag(Flag::C));
    assert!(!cpu.get_flag(Flag::H));
    assert!(!cpu.get_flag(Flag::Z));
}

#[test]
fn cp_leaves_a_untouched() {
    // CP 0x42 with A=0x42
    let (mut cpu, mut bus) = setup(&[0xFE, 0x42]);
    cpu.regs.a = 0x42;
    step(&mut cpu, &mut bus);

    assert_eq!(cpu.regs.a, 0x42);
    assert!(cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::N));
    assert!(!cpu.get_flag(Flag::C));
    assert!(!cpu.get_flag(Flag::H));
}

#[test]
fn adc_and_sbc_include_carry() {
    // ADC 0x00 with A=0xFF and carry set
    let (mut cpu, mut bus) = setup(&[0xCE, 0x00]);
    cpu.regs.a = 0xFF;
    cpu.set_flag(Flag::C, true);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::C));
    assert!(cpu.get_flag(Flag::H));

    // SBC 0x00 with A=0x00 and carry set
    let (mut cpu, mut bus) = setup(&[0xDE, 0x00]);
    cpu.regs.a = 0x00;
    cpu.set_flag(Flag::C, true);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0xFF);
    assert!(cpu.get_flag(Flag::N));
    assert!(cpu.get_flag(Flag::C));
    assert!(cpu.get_flag(Flag::H));
    assert!(!cpu.get_flag(Flag::Z));
}

#[test]
fn inc_and_dec_never_touch_carry() {
    // SCF; INC A; DEC A with A=0xFF
    let (mut cpu, mut bus) = setup(&[0x37, 0x3C, 0x3D]);
    cpu.regs.a = 0xFF;

    step(&mut cpu, &mut bus);
    assert!(cpu.get_flag(Flag::C));

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::H));
    assert!(cpu.get_flag(Flag::C));

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0xFF);
    assert!(cpu.get_flag(Flag::N));
    assert!(cpu.get_flag(Flag::H));
    assert!(cpu.get_flag(Flag::C));
}

#[test]
fn add16_leaves_zero_untouched() {
    // ADD HL,BC
    let (mut cpu, mut bus) = setup(&[0x09]);
    cpu.regs.set_hl(0x0FFF);
    cpu.regs.set_bc(0x0001);
    cpu.set_flag(Flag::Z, true);
    step(&mut cpu, &mut bus);

    assert_eq!(cpu.regs.hl(), 0x1000);
    assert!(cpu.get_flag(Flag::H));
    assert!(!cpu.get_flag(Flag::C));
    assert!(cpu.get_flag(Flag::Z));

    let (mut cpu, mut bus) = setup(&[0x09]);
    cpu.regs.set_hl(0xFFFF);
    cpu.regs.set_bc(0x0001);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.hl(), 0x0000);
    assert!(cpu.get_flag(Flag::C));
    assert!(cpu.get_flag(Flag::H));
}

#[test]
fn add_sp_uses_xor_carry_detection() {
    // ADD SP,0x08 with SP=0xFFF8
    let (mut cpu, mut bus) = setup(&[0xE8, 0x08]);
    cpu.regs.sp = 0xFFF8;
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.sp, 0x0000);
    assert!(cpu.get_flag(Flag::H));
    assert!(cpu.get_flag(Flag::C));
    assert!(!cpu.get_flag(Flag::Z));
    assert!(!cpu.get_flag(Flag::N));

    // ADD SP,-1 with SP=0x0100: no nibble or byte carry is detected.
    let (mut cpu, mut bus) = setup(&[0xE8, 0xFF]);
    cpu.regs.sp = 0x0100;
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.sp, 0x00FF);
    assert!(!cpu.get_flag(Flag::H));
    assert!(!cpu.get_flag(Flag::C));
}

#[test]
fn ld_hl_sp_matches_add_sp_flags() {
    // LD HL,SP+0x08 with SP=0xFFF8
    let (mut cpu, mut bus) = setup(&[0xF8, 0x08]);
    cpu.regs.sp = 0xFFF8;
    step(&mut cpu, &mut bus);

    assert_eq!(cpu.regs.hl(), 0x0000);
    assert_eq!(cpu.regs.sp, 0xFFF8);
    assert!(cpu.get_flag(Flag::H));
    assert!(cpu.get_flag(Flag::C));
}

#[test]
fn accumulator_rotates_clear_zero() {
    // RLA with A=0x80 and carry clear: result is zero but Z stays clear.
    let (mut cpu, mut bus) = setup(&[0x17]);
    cpu.regs.a = 0x80;
    cpu.set_flag(Flag::C, false);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.get_flag(Flag::C));
    assert!(!cpu.get_flag(Flag::Z));

    // RLCA with A=0x80: bit 7 wraps to bit 0.
    let (mut cpu, mut bus) = setup(&[0x07]);
    cpu.regs.a = 0x80;
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x01);
    assert!(cpu.get_flag(Flag::C));

    // RRA with A=0x01 and carry set: carry enters at bit 7.
    let (mut cpu, mut bus) = setup(&[0x1F]);
    cpu.regs.a = 0x01;
    cpu.set_flag(Flag::C, true);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x80);
    assert!(cpu.get_flag(Flag::C));
}

#[test]
fn extended_rl_sets_zero_from_result() {
    // CB RL A with A=0x80 and carry clear: the prefixed form does set Z.
    let (mut cpu, mut bus) = setup(&[0xCB, 0x17]);
    cpu.regs.a = 0x80;
    cpu.set_flag(Flag::C, false);
    step(&mut cpu, &mut bus);

    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::C));
}

#[test]
fn sra_preserves_sign_bit() {
    // CB SRA A with A=0x81
    let (mut cpu, mut bus) = setup(&[0xCB, 0x2F]);
    cpu.regs.a = 0x81;
    step(&mut cpu, &mut bus);

    assert_eq!(cpu.regs.a, 0xC0);
    assert!(cpu.get_flag(Flag::C));
    assert!(!cpu.get_flag(Flag::Z));
}

#[test]
fn swap_exchanges_nibbles_and_clears_carry() {
    // CB SWAP A with A=0xF0
    let (mut cpu, mut bus) = setup(&[0xCB, 0x37]);
    cpu.regs.a = 0xF0;
    cpu.set_flag(Flag::C, true);
    step(&mut cpu, &mut bus);

    assert_eq!(cpu.regs.a, 0x0F);
    assert!(!cpu.get_flag(Flag::C));
    assert!(!cpu.get_flag(Flag::H));
    assert!(!cpu.get_flag(Flag::N));
    assert!(!cpu.get_flag(Flag::Z));
}

#[test]
fn bit_tests_without_touching_carry() {
    // CB BIT 2,A then CB BIT 3,A with A=0b100 and carry set
    let (mut cpu, mut bus) = setup(&[0xCB, 0x57, 0xCB, 0x5F]);
    cpu.regs.a = 0b0000_0100;
    cpu.set_flag(Flag::C, true);

    step(&mut cpu, &mut bus);
    assert!(!cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::H));
    assert!(!cpu.get_flag(Flag::N));
    assert!(cpu.get_flag(Flag::C));

    step(&mut cpu, &mut bus);
    assert!(cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::C));
}

#[test]
fn set_and_res_have_no_flag_effects() {
    // CB SET 0,A; CB RES 0,A
    let (mut cpu, mut bus) = setup(&[0xCB, 0xC7, 0xCB, 0x87]);
    cpu.regs.a = 0x00;
    cpu.set_flag(Flag::Z, true);
    cpu.set_flag(Flag::C, true);
    let flags = cpu.regs.f;

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x01);
    assert_eq!(cpu.regs.f, flags);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(cpu.regs.f, flags);
}

#[test]
fn pop_af_masks_flag_low_nibble() {
    let (mut cpu, mut bus) = setup(&[0xF1]);
    cpu.regs.sp = 0xFFFC;
    bus.memory[0xFFFC] = 0xFF;
    bus.memory[0xFFFD] = 0x12;
    step(&mut cpu, &mut bus);

    assert_eq!(cpu.regs.af(), 0x12F0);
    assert_eq!(cpu.regs.f & 0x0F, 0);
}

#[test]
fn jr_takes_signed_displacement() {
    // JR -2 loops back onto itself.
    let (mut cpu, mut bus) = setup(&[0x18, 0xFE]);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.pc, 0x0100);
}

#[test]
fn cycle_costs_match_the_tables() {
    // NOP
    let (mut cpu, mut bus) = setup(&[0x00]);
    let before = cpu.ticks();
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.ticks() - before, 4);

    // LD BC,nn
    let (mut cpu, mut bus) = setup(&[0x01, 0x00, 0x00]);
    let before = cpu.ticks();
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.ticks() - before, 12);

    // JR NZ taken / not taken
    let (mut cpu, mut bus) = setup(&[0x20, 0x00, 0x20, 0x00]);
    cpu.set_flag(Flag::Z, false);
    let before = cpu.ticks();
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.ticks() - before, 12);
    cpu.set_flag(Flag::Z, true);
    let before = cpu.ticks();
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.ticks() - before, 8);

    // CB-prefixed costs come from the extended table.
    let (mut cpu, mut bus) = setup(&[0xCB, 0x11]);
    let before = cpu.ticks();
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.ticks() - before, 8);
}

#[test]
fn step_is_deterministic() {
    let make = || {
        let (mut cpu, bus) = setup(&[0xC6, 0x7F]);
        cpu.regs.a = 0x93;
        cpu.set_flag(Flag::C, true);
        (cpu, bus)
    };

    let (mut cpu_a, mut bus_a) = make();
    let (mut cpu_b, mut bus_b) = make();
    let ticks_a = step(&mut cpu_a, &mut bus_a);
    let ticks_b = step(&mut cpu_b, &mut bus_b);

    assert_eq!(ticks_a, ticks_b);
    assert_eq!(cpu_a.regs.a, cpu_b.regs.a);
    assert_eq!(cpu_a.regs.f, cpu_b.regs.f);
    assert_eq!(cpu_a.regs.pc, cpu_b.regs.pc);
}

#[test]
fn undefined_opcode_locks_the_core() {
    let (mut cpu, mut bus) = setup(&[0xD3, 0x00]);
    step(&mut cpu, &mut bus);

    assert!(cpu.is_crashed());
    let pc = cpu.regs.pc;
    let ticks = cpu.ticks();

    // Further stepping is a no-op; state stays inspectable.
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.pc, pc);
    assert_eq!(cpu.ticks(), ticks);
    assert_eq!(cpu.last_opcode(), 0xD3);
}

#[test]
fn ei_and_di_toggle_ime() {
    let (mut cpu, mut bus) = setup(&[0xF3, 0xFB]);
    step(&mut cpu, &mut bus);
    assert!(!cpu.ime);
    step(&mut cpu, &mut bus);
    assert!(cpu.ime);
}

#[test]
fn halt_freezes_stepping_until_interrupt() {
    let (mut cpu, mut bus) = setup(&[0x76]);
    step(&mut cpu, &mut bus);
    assert!(cpu.halted);

    // Frozen: the counter advances by one per step, nothing is fetched.
    let before = cpu.ticks();
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.ticks() - before, 1);

    // A pending enabled interrupt wakes and vectors the core.
    bus.memory[0xFFFF] = 0x04;
    bus.memory[0xFF0F] = 0x04;
    cpu.check_interrupts(&mut bus).unwrap();
    assert!(!cpu.halted);
    assert_eq!(cpu.regs.pc, 0x0050);
    assert_eq!(bus.memory[0xFF0F], 0x00);
}

#[test]
fn halted_without_ime_refetches_same_instruction() {
    // INC B at PC, halted with IME clear: the fetch does not move PC on.
    let (mut cpu, mut bus) = setup(&[0x04]);
    cpu.ime = false;
    cpu.halted = true;

    let pc = cpu.regs.pc;
    step(&mut cpu, &mut bus);
    step(&mut cpu, &mut bus);

    assert_eq!(cpu.regs.pc, pc);
    assert_eq!(cpu.regs.b, 2);
}

#[test]
fn interrupt_priority_services_vblank_first() {
    let (mut cpu, mut bus) = setup(&[0x00]);
    cpu.regs.pc = 0x0200;
    cpu.ime = true;
    bus.memory[0xFFFF] = 0x17;
    bus.memory[0xFF0F] = 0x15; // v-blank, timer, joypad all pending

    cpu.check_interrupts(&mut bus).unwrap();

    assert_eq!(cpu.regs.pc, 0x0040);
    assert!(!cpu.ime);
    // Only the serviced request bit is cleared.
    assert_eq!(bus.memory[0xFF0F], 0x14);
    // The pre-service PC was pushed.
    assert_eq!(bus.memory[usize::from(cpu.regs.sp)], 0x00);
    assert_eq!(bus.memory[usize::from(cpu.regs.sp) + 1], 0x02);
}

#[test]
fn masked_interrupts_are_not_serviced() {
    let (mut cpu, mut bus) = setup(&[0x00]);
    cpu.ime = false;
    cpu.halted = true;
    bus.memory[0xFFFF] = 0x01;
    bus.memory[0xFF0F] = 0x01;

    cpu.check_interrupts(&mut bus).unwrap();

    // The pending request still wakes the core, but nothing vectors.
    assert!(!cpu.halted);
    assert_eq!(cpu.regs.pc, 0x0100);
    assert_eq!(bus.memory[0xFF0F], 0x01);
}
