use super::opcodes::{Cond, Op, Reg16, Reg8, Src8};
use super::{Bus, BusFault, Cpu, Flag};

impl Cpu {
    #[inline]
    pub(super) fn read_reg(&self, reg: Reg8) -> u8 {
        match reg {
            Reg8::A => self.regs.a,
            Reg8::B => self.regs.b,
            Reg8::C => self.regs.c,
            Reg8::D => self.regs.d,
            Reg8::E => self.regs.e,
            Reg8::H => self.regs.h,
            Reg8::L => self.regs.l,
        }
    }

    #[inline]
    pub(super) fn write_reg(&mut self, reg: Reg8, value: u8) {
        match reg {
            Reg8::A => self.regs.a = value,
            Reg8::B => self.regs.b = value,
            Reg8::C => self.regs.c = value,
            Reg8::D => self.regs.d = value,
            Reg8::E => self.regs.e = value,
            Reg8::H => self.regs.h = value,
            Reg8::L => self.regs.l = value,
        }
    }

    #[inline]
    fn reg16(&self, reg: Reg16) -> u16 {
        match reg {
            Reg16::Af => self.regs.af(),
            Reg16::Bc => self.regs.bc(),
            Reg16::De => self.regs.de(),
            Reg16::Hl => self.regs.hl(),
            Reg16::Sp => self.regs.sp,
        }
    }

    #[inline]
    fn set_reg16(&mut self, reg: Reg16, value: u16) {
        match reg {
            Reg16::Af => self.regs.set_af(value),
            Reg16::Bc => self.regs.set_bc(value),
            Reg16::De => self.regs.set_de(value),
            Reg16::Hl => self.regs.set_hl(value),
            Reg16::Sp => self.regs.sp = value,
        }
    }

    #[inline]
    fn condition(&self, cond: Cond) -> bool {
        match cond {
            Cond::Nz => !self.get_flag(Flag::Z),
            Cond::Z => self.get_flag(Flag::Z),
            Cond::Nc => !self.get_flag(Flag::C),
            Cond::C => self.get_flag(Flag::C),
        }
    }

    #[inline]
    fn read_src<B: Bus>(&mut self, bus: &mut B, src: Src8, operand: u16) -> Result<u8, BusFault> {
        Ok(match src {
            Src8::Reg(reg) => self.read_reg(reg),
            Src8::HlInd => bus.read8(self.regs.hl())?,
            Src8::Imm => operand as u8,
        })
    }

    /// Apply one decoded operation. `operand` holds the 0/1/2 trailing
    /// bytes already fetched by `step`; conditional control flow adds its
    /// own taken/not-taken cycle cost here.
    pub(super) fn exec<B: Bus>(
        &mut self,
        bus: &mut B,
        op: Op,
        operand: u16,
    ) -> Result<(), BusFault> {
        match op {
            Op::Nop => {}
            Op::Stop => {
                // Modelled as a no-op; the `stopped` flag and its wake
                // conditions stay wired for input handling.
            }
            Op::Halt => {
                if !self.ime {
                    let enabled = bus.read8(super::INTERRUPT_ENABLE_ADDRESS)?;
                    let flags = bus.read8(super::INTERRUPT_FLAGS_ADDRESS)?;
                    if enabled != 0 && flags != 0 {
                        log::warn!("HALT with IME clear while requests are pending");
                    }
                }
                self.halted = true;
            }
            Op::Di => self.ime = false,
            Op::Ei => self.ime = true,
            Op::Daa => self.alu_daa(),
            Op::Cpl => {
                self.regs.a = !self.regs.a;
                self.set_flag(Flag::N, true);
                self.set_flag(Flag::H, true);
            }
            Op::Ccf => {
                let carry = self.get_flag(Flag::C);
                self.set_flag(Flag::C, !carry);
                self.set_flag(Flag::N, false);
                self.set_flag(Flag::H, false);
            }
            Op::Scf => {
                self.set_flag(Flag::C, true);
                self.set_flag(Flag::N, false);
                self.set_flag(Flag::H, false);
            }
            Op::Undefined => self.crash(),
            Op::Prefix => self.exec_cb(bus, operand as u8)?,

            Op::Ld { dst, src } => {
                let value = self.read_reg(src);
                self.write_reg(dst, value);
            }
            Op::LdImm(reg) => self.write_reg(reg, operand as u8),
            Op::LdFromHl(reg) => {
                let value = bus.read8(self.regs.hl())?;
                self.write_reg(reg, value);
            }
            Op::LdToHl(reg) => bus.write8(self.regs.hl(), self.read_reg(reg))?,
            Op::LdHlImm => bus.write8(self.regs.hl(), operand as u8)?,
            Op::LdRrNn(reg) => self.set_reg16(reg, operand),
            Op::LdABc => self.regs.a = bus.read8(self.regs.bc())?,
            Op::LdADe => self.regs.a = bus.read8(self.regs.de())?,
            Op::LdBcA => bus.write8(self.regs.bc(), self.regs.a)?,
            Op::LdDeA => bus.write8(self.regs.de(), self.regs.a)?,
            Op::LdANn => self.regs.a = bus.read8(operand)?,
            Op::LdNnA => bus.write8(operand, self.regs.a)?,
            Op::LdNnSp => bus.write16(operand, self.regs.sp)?,
            Op::LdiHlA => {
                bus.write8(self.regs.hl(), self.regs.a)?;
                self.regs.set_hl(self.regs.hl().wrapping_add(1));
            }
            Op::LdiAHl => {
                self.regs.a = bus.read8(self.regs.hl())?;
                self.regs.set_hl(self.regs.hl().wrapping_add(1));
            }
            Op::LddHlA => {
                bus.write8(self.regs.hl(), self.regs.a)?;
                self.regs.set_hl(self.regs.hl().wrapping_sub(1));
            }
            Op::LddAHl => {
                self.regs.a = bus.read8(self.regs.hl())?;
                self.regs.set_hl(self.regs.hl().wrapping_sub(1));
            }
            Op::LdhNA => bus.write8(0xFF00 + (operand & 0xFF), self.regs.a)?,
            Op::LdhAN => self.regs.a = bus.read8(0xFF00 + (operand & 0xFF))?,
            Op::LdhCA => bus.write8(0xFF00 + u16::from(self.regs.c), self.regs.a)?,
            Op::LdhAC => self.regs.a = bus.read8(0xFF00 + u16::from(self.regs.c))?,
            Op::LdSpHl => self.regs.sp = self.regs.hl(),
            Op::LdHlSpN => {
                let result = self.alu_add_sp_signed(self.regs.sp, operand as u8);
                self.regs.set_hl(result);
            }

            Op::IncR(reg) => {
                let value = self.alu_inc(self.read_reg(reg));
                self.write_reg(reg, value);
            }
            Op::DecR(reg) => {
                let value = self.alu_dec(self.read_reg(reg));
                self.write_reg(reg, value);
            }
            Op::IncHlInd => {
                let value = bus.read8(self.regs.hl())?;
                let value = self.alu_inc(value);
                bus.write8(self.regs.hl(), value)?;
            }
            Op::DecHlInd => {
                let value = bus.read8(self.regs.hl())?;
                let value = self.alu_dec(value);
                bus.write8(self.regs.hl(), value)?;
            }
            Op::IncRr(reg) => {
                let value = self.reg16(reg).wrapping_add(1);
                self.set_reg16(reg, value);
            }
            Op::DecRr(reg) => {
                let value = self.reg16(reg).wrapping_sub(1);
                self.set_reg16(reg, value);
            }
            Op::AddHl(reg) => self.alu_add_hl(self.reg16(reg)),
            Op::AddSpN => {
                self.regs.sp = self.alu_add_sp_signed(self.regs.sp, operand as u8);
            }

            Op::Add(src) => {
                let value = self.read_src(bus, src, operand)?;
                self.alu_add(value);
            }
            Op::Adc(src) => {
                let value = self.read_src(bus, src, operand)?;
                self.alu_adc(value);
            }
            Op::Sub(src) => {
                let value = self.read_src(bus, src, operand)?;
                self.alu_sub(value);
            }
            Op::Sbc(src) => {
                let value = self.read_src(bus, src, operand)?;
                self.alu_sbc(value);
            }
            Op::And(src) => {
                let value = self.read_src(bus, src, operand)?;
                self.alu_and(value);
            }
            Op::Xor(src) => {
                let value = self.read_src(bus, src, operand)?;
                self.alu_xor(value);
            }
            Op::Or(src) => {
                let value = self.read_src(bus, src, operand)?;
                self.alu_or(value);
            }
            Op::Cp(src) => {
                let value = self.read_src(bus, src, operand)?;
                self.alu_cp(value);
            }

            Op::Rlca => self.alu_rlca(),
            Op::Rla => self.alu_rla(),
            Op::Rrca => self.alu_rrca(),
            Op::Rra => self.alu_rra(),

            Op::Jp => self.regs.pc = operand,
            Op::JpCc(cond) => {
                if self.condition(cond) {
                    self.regs.pc = operand;
                    self.ticks += 16;
                } else {
                    self.ticks += 12;
                }
            }
            Op::JpHl => self.regs.pc = self.regs.hl(),
            Op::Jr => self.regs.pc = Self::relative(self.regs.pc, operand as u8),
            Op::JrCc(cond) => {
                if self.condition(cond) {
                    self.regs.pc = Self::relative(self.regs.pc, operand as u8);
                    self.ticks += 12;
                } else {
                    self.ticks += 8;
                }
            }
            Op::Call => {
                self.push16(bus, self.regs.pc)?;
                self.regs.pc = operand;
            }
            Op::CallCc(cond) => {
                if self.condition(cond) {
                    self.push16(bus, self.regs.pc)?;
                    self.regs.pc = operand;
                    self.ticks += 24;
                } else {
                    self.ticks += 12;
                }
            }
            Op::Ret => self.regs.pc = self.pop16(bus)?,
            Op::RetCc(cond) => {
                if self.condition(cond) {
                    self.regs.pc = self.pop16(bus)?;
                    self.ticks += 20;
                } else {
                    self.ticks += 8;
                }
            }
            Op::Reti => {
                self.regs.pc = self.pop16(bus)?;
                self.ime = true;
            }
            Op::Rst(vector) => {
                self.push16(bus, self.regs.pc)?;
                self.regs.pc = u16::from(vector);
            }
            Op::Push(reg) => self.push16(bus, self.reg16(reg))?,
            Op::Pop(reg) => {
                let value = self.pop16(bus)?;
                self.set_reg16(reg, value);
            }
        }
        Ok(())
    }

    /// Apply a signed 8-bit displacement to a program counter value.
    #[inline]
    fn relative(pc: u16, offset: u8) -> u16 {
        pc.wrapping_add(offset as i8 as i16 as u16)
    }
}
