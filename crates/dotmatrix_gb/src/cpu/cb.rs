use lazy_static::lazy_static;

use super::opcodes::Reg8;
use super::{Bus, BusFault, Cpu, Flag};

/// Operations of the 0xCB extended table: rotates, shifts, nibble swap
/// and single-bit test/set/reset.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CbOp {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
    Bit(u8),
    Res(u8),
    Set(u8),
}

/// Target of an extended operation: a register or the byte at (HL).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CbTarget {
    Reg(Reg8),
    HlInd,
}

/// One extended-table entry. The extended table carries its own cycle
/// costs, separate from the base table: 8 per operation, 16 for (HL)
/// forms of the rotate/shift group and 12 for (HL) forms of BIT/RES/SET.
#[derive(Clone, Debug)]
pub struct CbOpcodeInfo {
    pub mnemonic: String,
    pub ticks: u8,
    pub op: CbOp,
    pub target: CbTarget,
}

lazy_static! {
    /// 256-entry extended dispatch table, indexed by the byte after 0xCB.
    pub static ref CB_OPCODES: [CbOpcodeInfo; 256] = build_extended_table();
}

fn build_extended_table() -> [CbOpcodeInfo; 256] {
    std::array::from_fn(|byte| decode(byte as u8))
}

fn decode(byte: u8) -> CbOpcodeInfo {
    let (target, target_name) = match byte & 0x07 {
        0 => (CbTarget::Reg(Reg8::B), "B"),
        1 => (CbTarget::Reg(Reg8::C), "C"),
        2 => (CbTarget::Reg(Reg8::D), "D"),
        3 => (CbTarget::Reg(Reg8::E), "E"),
        4 => (CbTarget::Reg(Reg8::H), "H"),
        5 => (CbTarget::Reg(Reg8::L), "L"),
        6 => (CbTarget::HlInd, "(HL)"),
        _ => (CbTarget::Reg(Reg8::A), "A"),
    };

    let (op, mnemonic) = match byte >> 3 {
        0 => (CbOp::Rlc, format!("RLC {target_name}")),
        1 => (CbOp::Rrc, format!("RRC {target_name}")),
        2 => (CbOp::Rl, format!("RL {target_name}")),
        3 => (CbOp::Rr, format!("RR {target_name}")),
        4 => (CbOp::Sla, format!("SLA {target_name}")),
        5 => (CbOp::Sra, format!("SRA {target_name}")),
        6 => (CbOp::Swap, format!("SWAP {target_name}")),
        7 => (CbOp::Srl, format!("SRL {target_name}")),
        group @ 8..=15 => (CbOp::Bit(group - 8), format!("BIT {}, {target_name}", group - 8)),
        group @ 16..=23 => (CbOp::Res(group - 16), format!("RES {}, {target_name}", group - 16)),
        group => (CbOp::Set(group - 24), format!("SET {}, {target_name}", group - 24)),
    };

    let ticks = match (byte & 0x07, byte < 0x40) {
        (6, true) => 16,
        (6, false) => 12,
        _ => 8,
    };

    CbOpcodeInfo {
        mnemonic,
        ticks,
        op,
        target,
    }
}

impl Cpu {
    /// Execute one extended operation selected by the byte after 0xCB
    /// and account its cycle cost from the extended tick table.
    pub(super) fn exec_cb<B: Bus>(&mut self, bus: &mut B, value: u8) -> Result<(), BusFault> {
        self.last_cb_opcode = value;
        let info = &CB_OPCODES[value as usize];

        let input = match info.target {
            CbTarget::Reg(reg) => self.read_reg(reg),
            CbTarget::HlInd => bus.read8(self.regs.hl())?,
        };

        let output = match info.op {
            CbOp::Rlc => Some(self.cb_rlc(input)),
            CbOp::Rrc => Some(self.cb_rrc(input)),
            CbOp::Rl => Some(self.cb_rl(input)),
            CbOp::Rr => Some(self.cb_rr(input)),
            CbOp::Sla => Some(self.cb_sla(input)),
            CbOp::Sra => Some(self.cb_sra(input)),
            CbOp::Swap => Some(self.cb_swap(input)),
            CbOp::Srl => Some(self.cb_srl(input)),
            CbOp::Bit(bit) => {
                self.cb_bit(bit, input);
                None
            }
            // Pure bit stores with no flag effects at all.
            CbOp::Res(bit) => Some(input & !(1 << bit)),
            CbOp::Set(bit) => Some(input | (1 << bit)),
        };

        if let Some(result) = output {
            match info.target {
                CbTarget::Reg(reg) => self.write_reg(reg, result),
                CbTarget::HlInd => bus.write8(self.regs.hl(), result)?,
            }
        }

        self.ticks += u64::from(info.ticks);
        Ok(())
    }

    /// Circular rotate left; bit 7 feeds both carry and bit 0.
    fn cb_rlc(&mut self, value: u8) -> u8 {
        let carry = value >> 7;
        self.set_flag(Flag::C, carry != 0);
        let result = (value << 1) | carry;
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        result
    }

    /// Circular rotate right; bit 0 feeds both carry and bit 7.
    fn cb_rrc(&mut self, value: u8) -> u8 {
        let carry = value & 0x01;
        let mut result = value >> 1;
        if carry != 0 {
            self.set_flag(Flag::C, true);
            result |= 0x80;
        } else {
            self.set_flag(Flag::C, false);
        }
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        result
    }

    /// Rotate left through carry: the old carry flag enters at bit 0.
    fn cb_rl(&mut self, value: u8) -> u8 {
        let carry_in = u8::from(self.get_flag(Flag::C));
        self.set_flag(Flag::C, value & 0x80 != 0);
        let result = (value << 1) | carry_in;
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        result
    }

    /// Rotate right through carry: the old carry flag enters at bit 7.
    fn cb_rr(&mut self, value: u8) -> u8 {
        let carry_in = u8::from(self.get_flag(Flag::C)) << 7;
        self.set_flag(Flag::C, value & 0x01 != 0);
        let result = (value >> 1) | carry_in;
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        result
    }

    fn cb_sla(&mut self, value: u8) -> u8 {
        self.set_flag(Flag::C, value & 0x80 != 0);
        let result = value << 1;
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        result
    }

    /// Arithmetic shift right: bit 7 is preserved, bit 0 feeds carry.
    fn cb_sra(&mut self, value: u8) -> u8 {
        let carry = value & 0x01;
        let result = (value >> 1) | (value & 0x80);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::C, carry != 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        result
    }

    /// Exchange the nibbles; only the zero flag can end up set.
    fn cb_swap(&mut self, value: u8) -> u8 {
        let result = (value << 4) | (value >> 4);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, false);
        result
    }

    fn cb_srl(&mut self, value: u8) -> u8 {
        self.set_flag(Flag::C, value & 0x01 != 0);
        let result = value >> 1;
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        result
    }

    /// Test one bit: zero flag mirrors the inverted bit, half carry is
    /// always set, carry is never touched.
    fn cb_bit(&mut self, bit: u8, value: u8) {
        self.set_flag(Flag::Z, value & (1 << bit) == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, true);
    }
}
