use lazy_static::lazy_static;

/// 8-bit register names used by operation tags.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Reg8 {
    A,
    B,
    C,
    D,
    E,
    H,
    L,
}

/// 16-bit register pairs (AF only appears in PUSH/POP tags).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Reg16 {
    Af,
    Bc,
    De,
    Hl,
    Sp,
}

/// Branch conditions for conditional jumps, calls and returns.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cond {
    Nz,
    Z,
    Nc,
    C,
}

/// Source of an 8-bit ALU operand.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Src8 {
    Reg(Reg8),
    HlInd,
    Imm,
}

/// Number of operand bytes following an opcode.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operand {
    None,
    Byte,
    Word,
}

impl Operand {
    #[inline]
    pub fn len(self) -> u16 {
        match self {
            Operand::None => 0,
            Operand::Byte => 1,
            Operand::Word => 2,
        }
    }
}

/// Enumerated operation tag: what an opcode does, with the registers it
/// touches folded into the variant. The executor matches on this instead
/// of calling through erased function pointers, which keeps the table a
/// plain inspectable value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Op {
    Nop,
    Stop,
    Halt,
    Di,
    Ei,
    Daa,
    Cpl,
    Ccf,
    Scf,
    Undefined,
    /// Secondary dispatch into the 0xCB extended table.
    Prefix,

    Ld { dst: Reg8, src: Reg8 },
    LdImm(Reg8),
    LdFromHl(Reg8),
    LdToHl(Reg8),
    LdHlImm,
    LdRrNn(Reg16),
    LdABc,
    LdADe,
    LdBcA,
    LdDeA,
    LdANn,
    LdNnA,
    LdNnSp,
    LdiHlA,
    LdiAHl,
    LddHlA,
    LddAHl,
    LdhNA,
    LdhAN,
    LdhCA,
    LdhAC,
    LdSpHl,
    LdHlSpN,

    IncR(Reg8),
    DecR(Reg8),
    IncHlInd,
    DecHlInd,
    IncRr(Reg16),
    DecRr(Reg16),
    AddHl(Reg16),
    AddSpN,

    Add(Src8),
    Adc(Src8),
    Sub(Src8),
    Sbc(Src8),
    And(Src8),
    Xor(Src8),
    Or(Src8),
    Cp(Src8),

    Rlca,
    Rla,
    Rrca,
    Rra,

    Jp,
    JpCc(Cond),
    JpHl,
    Jr,
    JrCc(Cond),
    Call,
    CallCc(Cond),
    Ret,
    RetCc(Cond),
    Reti,
    Rst(u8),
    Push(Reg16),
    Pop(Reg16),
}

/// One base-table entry: mnemonic for diagnostics, operand arity, base
/// T-cycle cost and the operation tag.
///
/// Conditional control flow carries a cost of 0 here; the executor adds
/// the taken/not-taken cost itself. The numbers reproduce the reference
/// hardware tables of this core, quirks included.
#[derive(Clone, Copy, Debug)]
pub struct OpcodeInfo {
    pub mnemonic: &'static str,
    pub operand: Operand,
    pub ticks: u8,
    pub op: Op,
}

const fn entry(mnemonic: &'static str, operand: Operand, ticks: u8, op: Op) -> OpcodeInfo {
    OpcodeInfo {
        mnemonic,
        operand,
        ticks,
        op,
    }
}

lazy_static! {
    /// 256-entry base dispatch table, indexed by opcode byte.
    pub static ref OPCODES: [OpcodeInfo; 256] = build_base_table();
}

#[rustfmt::skip]
fn build_base_table() -> [OpcodeInfo; 256] {
    use Operand::{Byte, None, Word};

    let mut t = [entry("UNKNOWN", None, 0, Op::Undefined); 256];

    t[0x00] = entry("NOP", None, 4, Op::Nop);
    t[0x01] = entry("LD BC, nn", Word, 12, Op::LdRrNn(Reg16::Bc));
    t[0x02] = entry("LD (BC), A", None, 8, Op::LdBcA);
    t[0x03] = entry("INC BC", None, 8, Op::IncRr(Reg16::Bc));
    t[0x04] = entry("INC B", None, 4, Op::IncR(Reg8::B));
    t[0x05] = entry("DEC B", None, 4, Op::DecR(Reg8::B));
    t[0x06] = entry("LD B, n", Byte, 8, Op::LdImm(Reg8::B));
    t[0x07] = entry("RLCA", None, 8, Op::Rlca);
    t[0x08] = entry("LD (nn), SP", Word, 20, Op::LdNnSp);
    t[0x09] = entry("ADD HL, BC", None, 8, Op::AddHl(Reg16::Bc));
    t[0x0A] = entry("LD A, (BC)", None, 8, Op::LdABc);
    t[0x0B] = entry("DEC BC", None, 8, Op::DecRr(Reg16::Bc));
    t[0x0C] = entry("INC C", None, 4, Op::IncR(Reg8::C));
    t[0x0D] = entry("DEC C", None, 4, Op::DecR(Reg8::C));
    t[0x0E] = entry("LD C, n", Byte, 8, Op::LdImm(Reg8::C));
    t[0x0F] = entry("RRCA", None, 8, Op::Rrca);

    t[0x10] = entry("STOP", Byte, 4, Op::Stop);
    t[0x11] = entry("LD DE, nn", Word, 12, Op::LdRrNn(Reg16::De));
    t[0x12] = entry("LD (DE), A", None, 8, Op::LdDeA);
    t[0x13] = entry("INC DE", None, 8, Op::IncRr(Reg16::De));
    t[0x14] = entry("INC D", None, 4, Op::IncR(Reg8::D));
    t[0x15] = entry("DEC D", None, 4, Op::DecR(Reg8::D));
    t[0x16] = entry("LD D, n", Byte, 8, Op::LdImm(Reg8::D));
    t[0x17] = entry("RLA", None, 8, Op::Rla);
    t[0x18] = entry("JR n", Byte, 8, Op::Jr);
    t[0x19] = entry("ADD HL, DE", None, 8, Op::AddHl(Reg16::De));
    t[0x1A] = entry("LD A, (DE)", None, 8, Op::LdADe);
    t[0x1B] = entry("DEC DE", None, 8, Op::DecRr(Reg16::De));
    t[0x1C] = entry("INC E", None, 4, Op::IncR(Reg8::E));
    t[0x1D] = entry("DEC E", None, 4, Op::DecR(Reg8::E));
    t[0x1E] = entry("LD E, n", Byte, 8, Op::LdImm(Reg8::E));
    t[0x1F] = entry("RRA", None, 8, Op::Rra);

    t[0x20] = entry("JR NZ, n", Byte, 0, Op::JrCc(Cond::Nz));
    t[0x21] = entry("LD HL, nn", Word, 12, Op::LdRrNn(Reg16::Hl));
    t[0x22] = entry("LDI (HL), A", None, 8, Op::LdiHlA);
    t[0x23] = entry("INC HL", None, 8, Op::IncRr(Reg16::Hl));
    t[0x24] = entry("INC H", None, 4, Op::IncR(Reg8::H));
    t[0x25] = entry("DEC H", None, 4, Op::DecR(Reg8::H));
    t[0x26] = entry("LD H, n", Byte, 8, Op::LdImm(Reg8::H));
    t[0x27] = entry("DAA", None, 4, Op::Daa);
    t[0x28] = entry("JR Z, n", Byte, 0, Op::JrCc(Cond::Z));
    t[0x29] = entry("ADD HL, HL", None, 8, Op::AddHl(Reg16::Hl));
    t[0x2A] = entry("LDI A, (HL)", None, 8, Op::LdiAHl);
    t[0x2B] = entry("DEC HL", None, 8, Op::DecRr(Reg16::Hl));
    t[0x2C] = entry("INC L", None, 4, Op::IncR(Reg8::L));
    t[0x2D] = entry("DEC L", None, 4, Op::DecR(Reg8::L));
    t[0x2E] = entry("LD L, n", Byte, 8, Op::LdImm(Reg8::L));
    t[0x2F] = entry("CPL", None, 4, Op::Cpl);

    t[0x30] = entry("JR NC, n", Byte, 8, Op::JrCc(Cond::Nc));
    t[0x31] = entry("LD SP, nn", Word, 12, Op::LdRrNn(Reg16::Sp));
    t[0x32] = entry("LDD (HL), A", None, 8, Op::LddHlA);
    t[0x33] = entry("INC SP", None, 8, Op::IncRr(Reg16::Sp));
    t[0x34] = entry("INC (HL)", None, 12, Op::IncHlInd);
    t[0x35] = entry("DEC (HL)", None, 12, Op::DecHlInd);
    t[0x36] = entry("LD (HL), n", Byte, 12, Op::LdHlImm);
    t[0x37] = entry("SCF", None, 4, Op::Scf);
    t[0x38] = entry("JR C, n", Byte, 0, Op::JrCc(Cond::C));
    t[0x39] = entry("ADD HL, SP", None, 8, Op::AddHl(Reg16::Sp));
    t[0x3A] = entry("LDD A, (HL)", None, 8, Op::LddAHl);
    t[0x3B] = entry("DEC SP", None, 8, Op::DecRr(Reg16::Sp));
    t[0x3C] = entry("INC A", None, 4, Op::IncR(Reg8::A));
    t[0x3D] = entry("DEC A", None, 4, Op::DecR(Reg8::A));
    t[0x3E] = entry("LD A, n", Byte, 8, Op::LdImm(Reg8::A));
    t[0x3F] = entry("CCF", None, 4, Op::Ccf);

    t[0x40] = entry("LD B, B", None, 4, Op::Nop);
    t[0x41] = entry("LD B, C", None, 4, Op::Ld { dst: Reg8::B, src: Reg8::C });
    t[0x42] = entry("LD B, D", None, 4, Op::Ld { dst: Reg8::B, src: Reg8::D });
    t[0x43] = entry("LD B, E", None, 4, Op::Ld { dst: Reg8::B, src: Reg8::E });
    t[0x44] = entry("LD B, H", None, 4, Op::Ld { dst: Reg8::B, src: Reg8::H });
    t[0x45] = entry("LD B, L", None, 4, Op::Ld { dst: Reg8::B, src: Reg8::L });
    t[0x46] = entry("LD B, (HL)", None, 8, Op::LdFromHl(Reg8::B));
    t[0x47] = entry("LD B, A", None, 4, Op::Ld { dst: Reg8::B, src: Reg8::A });
    t[0x48] = entry("LD C, B", None, 4, Op::Ld { dst: Reg8::C, src: Reg8::B });
    t[0x49] = entry("LD C, C", None, 4, Op::Nop);
    t[0x4A] = entry("LD C, D", None, 4, Op::Ld { dst: Reg8::C, src: Reg8::D });
    t[0x4B] = entry("LD C, E", None, 4, Op::Ld { dst: Reg8::C, src: Reg8::E });
    t[0x4C] = entry("LD C, H", None, 4, Op::Ld { dst: Reg8::C, src: Reg8::H });
    t[0x4D] = entry("LD C, L", None, 4, Op::Ld { dst: Reg8::C, src: Reg8::L });
    t[0x4E] = entry("LD C, (HL)", None, 8, Op::LdFromHl(Reg8::C));
    t[0x4F] = entry("LD C, A", None, 4, Op::Ld { dst: Reg8::C, src: Reg8::A });

    t[0x50] = entry("LD D, B", None, 4, Op::Ld { dst: Reg8::D, src: Reg8::B });
    t[0x51] = entry("LD D, C", None, 4, Op::Ld { dst: Reg8::D, src: Reg8::C });
    t[0x52] = entry("LD D, D", None, 4, Op::Nop);
    t[0x53] = entry("LD D, E", None, 4, Op::Ld { dst: Reg8::D, src: Reg8::E });
    t[0x54] = entry("LD D, H", None, 4, Op::Ld { dst: Reg8::D, src: Reg8::H });
    t[0x55] = entry("LD D, L", None, 4, Op::Ld { dst: Reg8::D, src: Reg8::L });
    t[0x56] = entry("LD D, (HL)", None, 8, Op::LdFromHl(Reg8::D));
    t[0x57] = entry("LD D, A", None, 4, Op::Ld { dst: Reg8::D, src: Reg8::A });
    t[0x58] = entry("LD E, B", None, 4, Op::Ld { dst: Reg8::E, src: Reg8::B });
    t[0x59] = entry("LD E, C", None, 4, Op::Ld { dst: Reg8::E, src: Reg8::C });
    t[0x5A] = entry("LD E, D", None, 4, Op::Ld { dst: Reg8::E, src: Reg8::D });
    t[0x5B] = entry("LD E, E", None, 4, Op::Nop);
    t[0x5C] = entry("LD E, H", None, 4, Op::Ld { dst: Reg8::E, src: Reg8::H });
    t[0x5D] = entry("LD E, L", None, 4, Op::Ld { dst: Reg8::E, src: Reg8::L });
    t[0x5E] = entry("LD E, (HL)", None, 8, Op::LdFromHl(Reg8::E));
    t[0x5F] = entry("LD E, A", None, 4, Op::Ld { dst: Reg8::E, src: Reg8::A });

    t[0x60] = entry("LD H, B", None, 4, Op::Ld { dst: Reg8::H, src: Reg8::B });
    t[0x61] = entry("LD H, C", None, 4, Op::Ld { dst: Reg8::H, src: Reg8::C });
    t[0x62] = entry("LD H, D", None, 4, Op::Ld { dst: Reg8::H, src: Reg8::D });
    t[0x63] = entry("LD H, E", None, 4, Op::Ld { dst: Reg8::H, src: Reg8::E });
    t[0x64] = entry("LD H, H", None, 4, Op::Nop);
    t[0x65] = entry("LD H, L", None, 4, Op::Ld { dst: Reg8::H, src: Reg8::L });
    t[0x66] = entry("LD H, (HL)", None, 8, Op::LdFromHl(Reg8::H));
    t[0x67] = entry("LD H, A", None, 4, Op::Ld { dst: Reg8::H, src: Reg8::A });
    t[0x68] = entry("LD L, B", None, 4, Op::Ld { dst: Reg8::L, src: Reg8::B });
    t[0x69] = entry("LD L, C", None, 4, Op::Ld { dst: Reg8::L, src: Reg8::C });
    t[0x6A] = entry("LD L, D", None, 4, Op::Ld { dst: Reg8::L, src: Reg8::D });
    t[0x6B] = entry("LD L, E", None, 4, Op::Ld { dst: Reg8::L, src: Reg8::E });
    t[0x6C] = entry("LD L, H", None, 4, Op::Ld { dst: Reg8::L, src: Reg8::H });
    t[0x6D] = entry("LD L, L", None, 4, Op::Nop);
    t[0x6E] = entry("LD L, (HL)", None, 8, Op::LdFromHl(Reg8::L));
    t[0x6F] = entry("LD L, A", None, 4, Op::Ld { dst: Reg8::L, src: Reg8::A });

    t[0x70] = entry("LD (HL), B", None, 8, Op::LdToHl(Reg8::B));
    t[0x71] = entry("LD (HL), C", None, 8, Op::LdToHl(Reg8::C));
    t[0x72] = entry("LD (HL), D", None, 8, Op::LdToHl(Reg8::D));
    t[0x73] = entry("LD (HL), E", None, 8, Op::LdToHl(Reg8::E));
    t[0x74] = entry("LD (HL), H", None, 8, Op::LdToHl(Reg8::H));
    t[0x75] = entry("LD (HL), L", None, 8, Op::LdToHl(Reg8::L));
    t[0x76] = entry("HALT", None, 4, Op::Halt);
    t[0x77] = entry("LD (HL), A", None, 8, Op::LdToHl(Reg8::A));
    t[0x78] = entry("LD A, B", None, 4, Op::Ld { dst: Reg8::A, src: Reg8::B });
    t[0x79] = entry("LD A, C", None, 4, Op::Ld { dst: Reg8::A, src: Reg8::C });
    t[0x7A] = entry("LD A, D", None, 4, Op::Ld { dst: Reg8::A, src: Reg8::D });
    t[0x7B] = entry("LD A, E", None, 4, Op::Ld { dst: Reg8::A, src: Reg8::E });
    t[0x7C] = entry("LD A, H", None, 4, Op::Ld { dst: Reg8::A, src: Reg8::H });
    t[0x7D] = entry("LD A, L", None, 4, Op::Ld { dst: Reg8::A, src: Reg8::L });
    t[0x7E] = entry("LD A, (HL)", None, 8, Op::LdFromHl(Reg8::A));
    t[0x7F] = entry("LD A, A", None, 4, Op::Nop);

    t[0x80] = entry("ADD A, B", None, 4, Op::Add(Src8::Reg(Reg8::B)));
    t[0x81] = entry("ADD A, C", None, 4, Op::Add(Src8::Reg(Reg8::C)));
    t[0x82] = entry("ADD A, D", None, 4, Op::Add(Src8::Reg(Reg8::D)));
    t[0x83] = entry("ADD A, E", None, 4, Op::Add(Src8::Reg(Reg8::E)));
    t[0x84] = entry("ADD A, H", None, 4, Op::Add(Src8::Reg(Reg8::H)));
    t[0x85] = entry("ADD A, L", None, 4, Op::Add(Src8::Reg(Reg8::L)));
    t[0x86] = entry("ADD A, (HL)", None, 8, Op::Add(Src8::HlInd));
    t[0x87] = entry("ADD A, A", None, 4, Op::Add(Src8::Reg(Reg8::A)));
    t[0x88] = entry("ADC B", None, 4, Op::Adc(Src8::Reg(Reg8::B)));
    t[0x89] = entry("ADC C", None, 4, Op::Adc(Src8::Reg(Reg8::C)));
    t[0x8A] = entry("ADC D", None, 4, Op::Adc(Src8::Reg(Reg8::D)));
    t[0x8B] = entry("ADC E", None, 4, Op::Adc(Src8::Reg(Reg8::E)));
    t[0x8C] = entry("ADC H", None, 4, Op::Adc(Src8::Reg(Reg8::H)));
    t[0x8D] = entry("ADC L", None, 4, Op::Adc(Src8::Reg(Reg8::L)));
    t[0x8E] = entry("ADC (HL)", None, 8, Op::Adc(Src8::HlInd));
    t[0x8F] = entry("ADC A", None, 4, Op::Adc(Src8::Reg(Reg8::A)));

    t[0x90] = entry("SUB B", None, 4, Op::Sub(Src8::Reg(Reg8::B)));
    t[0x91] = entry("SUB C", None, 4, Op::Sub(Src8::Reg(Reg8::C)));
    t[0x92] = entry("SUB D", None, 4, Op::Sub(Src8::Reg(Reg8::D)));
    t[0x93] = entry("SUB E", None, 4, Op::Sub(Src8::Reg(Reg8::E)));
    t[0x94] = entry("SUB H", None, 4, Op::Sub(Src8::Reg(Reg8::H)));
    t[0x95] = entry("SUB L", None, 4, Op::Sub(Src8::Reg(Reg8::L)));
    t[0x96] = entry("SUB (HL)", None, 8, Op::Sub(Src8::HlInd));
    t[0x97] = entry("SUB A", None, 4, Op::Sub(Src8::Reg(Reg8::A)));
    t[0x98] = entry("SBC B", None, 4, Op::Sbc(Src8::Reg(Reg8::B)));
    t[0x99] = entry("SBC C", None, 4, Op::Sbc(Src8::Reg(Reg8::C)));
    t[0x9A] = entry("SBC D", None, 4, Op::Sbc(Src8::Reg(Reg8::D)));
    t[0x9B] = entry("SBC E", None, 4, Op::Sbc(Src8::Reg(Reg8::E)));
    t[0x9C] = entry("SBC H", None, 4, Op::Sbc(Src8::Reg(Reg8::H)));
    t[0x9D] = entry("SBC L", None, 4, Op::Sbc(Src8::Reg(Reg8::L)));
    t[0x9E] = entry("SBC (HL)", None, 8, Op::Sbc(Src8::HlInd));
    t[0x9F] = entry("SBC A", None, 4, Op::Sbc(Src8::Reg(Reg8::A)));

    t[0xA0] = entry("AND B", None, 4, Op::And(Src8::Reg(Reg8::B)));
    t[0xA1] = entry("AND C", None, 4, Op::And(Src8::Reg(Reg8::C)));
    t[0xA2] = entry("AND D", None, 4, Op::And(Src8::Reg(Reg8::D)));
    t[0xA3] = entry("AND E", None, 4, Op::And(Src8::Reg(Reg8::E)));
    t[0xA4] = entry("AND H", None, 4, Op::And(Src8::Reg(Reg8::H)));
    t[0xA5] = entry("AND L", None, 4, Op::And(Src8::Reg(Reg8::L)));
    t[0xA6] = entry("AND (HL)", None, 8, Op::And(Src8::HlInd));
    t[0xA7] = entry("AND A", None, 4, Op::And(Src8::Reg(Reg8::A)));
    t[0xA8] = entry("XOR B", None, 4, Op::Xor(Src8::Reg(Reg8::B)));
    t[0xA9] = entry("XOR C", None, 4, Op::Xor(Src8::Reg(Reg8::C)));
    t[0xAA] = entry("XOR D", None, 4, Op::Xor(Src8::Reg(Reg8::D)));
    t[0xAB] = entry("XOR E", None, 4, Op::Xor(Src8::Reg(Reg8::E)));
    t[0xAC] = entry("XOR H", None, 4, Op::Xor(Src8::Reg(Reg8::H)));
    t[0xAD] = entry("XOR L", None, 4, Op::Xor(Src8::Reg(Reg8::L)));
    t[0xAE] = entry("XOR (HL)", None, 8, Op::Xor(Src8::HlInd));
    t[0xAF] = entry("XOR A", None, 4, Op::Xor(Src8::Reg(Reg8::A)));

    t[0xB0] = entry("OR B", None, 4, Op::Or(Src8::Reg(Reg8::B)));
    t[0xB1] = entry("OR C", None, 4, Op::Or(Src8::Reg(Reg8::C)));
    t[0xB2] = entry("OR D", None, 4, Op::Or(Src8::Reg(Reg8::D)));
    t[0xB3] = entry("OR E", None, 4, Op::Or(Src8::Reg(Reg8::E)));
    t[0xB4] = entry("OR H", None, 4, Op::Or(Src8::Reg(Reg8::H)));
    t[0xB5] = entry("OR L", None, 4, Op::Or(Src8::Reg(Reg8::L)));
    t[0xB6] = entry("OR (HL)", None, 8, Op::Or(Src8::HlInd));
    t[0xB7] = entry("OR A", None, 4, Op::Or(Src8::Reg(Reg8::A)));
    t[0xB8] = entry("CP B", None, 4, Op::Cp(Src8::Reg(Reg8::B)));
    t[0xB9] = entry("CP C", None, 4, Op::Cp(Src8::Reg(Reg8::C)));
    t[0xBA] = entry("CP D", None, 4, Op::Cp(Src8::Reg(Reg8::D)));
    t[0xBB] = entry("CP E", None, 4, Op::Cp(Src8::Reg(Reg8::E)));
    t[0xBC] = entry("CP H", None, 4, Op::Cp(Src8::Reg(Reg8::H)));
    t[0xBD] = entry("CP L", None, 4, Op::Cp(Src8::Reg(Reg8::L)));
    t[0xBE] = entry("CP (HL)", None, 8, Op::Cp(Src8::HlInd));
    t[0xBF] = entry("CP A", None, 4, Op::Cp(Src8::Reg(Reg8::A)));

    t[0xC0] = entry("RET NZ", None, 0, Op::RetCc(Cond::Nz));
    t[0xC1] = entry("POP BC", None, 12, Op::Pop(Reg16::Bc));
    t[0xC2] = entry("JP NZ, nn", Word, 0, Op::JpCc(Cond::Nz));
    t[0xC3] = entry("JP nn", Word, 12, Op::Jp);
    t[0xC4] = entry("CALL NZ, nn", Word, 0, Op::CallCc(Cond::Nz));
    t[0xC5] = entry("PUSH BC", None, 16, Op::Push(Reg16::Bc));
    t[0xC6] = entry("ADD A, n", Byte, 8, Op::Add(Src8::Imm));
    t[0xC7] = entry("RST 0x00", None, 16, Op::Rst(0x00));
    t[0xC8] = entry("RET Z", None, 0, Op::RetCc(Cond::Z));
    t[0xC9] = entry("RET", None, 4, Op::Ret);
    t[0xCA] = entry("JP Z, nn", Word, 0, Op::JpCc(Cond::Z));
    t[0xCB] = entry("CB n", Byte, 0, Op::Prefix);
    t[0xCC] = entry("CALL Z, nn", Word, 0, Op::CallCc(Cond::Z));
    t[0xCD] = entry("CALL nn", Word, 12, Op::Call);
    t[0xCE] = entry("ADC n", Byte, 8, Op::Adc(Src8::Imm));
    t[0xCF] = entry("RST 0x08", None, 16, Op::Rst(0x08));

    t[0xD0] = entry("RET NC", None, 0, Op::RetCc(Cond::Nc));
    t[0xD1] = entry("POP DE", None, 12, Op::Pop(Reg16::De));
    t[0xD2] = entry("JP NC, nn", Word, 0, Op::JpCc(Cond::Nc));
    t[0xD3] = entry("UNKNOWN 0xD3", None, 0, Op::Undefined);
    t[0xD4] = entry("CALL NC, nn", Word, 0, Op::CallCc(Cond::Nc));
    t[0xD5] = entry("PUSH DE", None, 16, Op::Push(Reg16::De));
    t[0xD6] = entry("SUB n", Byte, 8, Op::Sub(Src8::Imm));
    t[0xD7] = entry("RST 0x10", None, 16, Op::Rst(0x10));
    t[0xD8] = entry("RET C", None, 0, Op::RetCc(Cond::C));
    t[0xD9] = entry("RETI", None, 16, Op::Reti);
    t[0xDA] = entry("JP C, nn", Word, 0, Op::JpCc(Cond::C));
    t[0xDB] = entry("UNKNOWN 0xDB", None, 0, Op::Undefined);
    t[0xDC] = entry("CALL C, nn", Word, 0, Op::CallCc(Cond::C));
    t[0xDD] = entry("UNKNOWN 0xDD", None, 0, Op::Undefined);
    t[0xDE] = entry("SBC n", Byte, 8, Op::Sbc(Src8::Imm));
    t[0xDF] = entry("RST 0x18", None, 16, Op::Rst(0x18));

    t[0xE0] = entry("LD (0xFF00 + n), A", Byte, 12, Op::LdhNA);
    t[0xE1] = entry("POP HL", None, 12, Op::Pop(Reg16::Hl));
    t[0xE2] = entry("LD (0xFF00 + C), A", None, 8, Op::LdhCA);
    t[0xE3] = entry("UNKNOWN 0xE3", None, 0, Op::Undefined);
    t[0xE4] = entry("UNKNOWN 0xE4", None, 0, Op::Undefined);
    t[0xE5] = entry("PUSH HL", None, 16, Op::Push(Reg16::Hl));
    t[0xE6] = entry("AND n", Byte, 8, Op::And(Src8::Imm));
    t[0xE7] = entry("RST 0x20", None, 16, Op::Rst(0x20));
    t[0xE8] = entry("ADD SP, n", Byte, 16, Op::AddSpN);
    t[0xE9] = entry("JP HL", None, 4, Op::JpHl);
    t[0xEA] = entry("LD (nn), A", Word, 16, Op::LdNnA);
    t[0xEB] = entry("UNKNOWN 0xEB", None, 0, Op::Undefined);
    t[0xEC] = entry("UNKNOWN 0xEC", None, 0, Op::Undefined);
    t[0xED] = entry("UNKNOWN 0xED", None, 0, Op::Undefined);
    t[0xEE] = entry("XOR n", Byte, 8, Op::Xor(Src8::Imm));
    t[0xEF] = entry("RST 0x28", None, 16, Op::Rst(0x28));

    t[0xF0] = entry("LD A, (0xFF00 + n)", Byte, 12, Op::LdhAN);
    t[0xF1] = entry("POP AF", None, 12, Op::Pop(Reg16::Af));
    t[0xF2] = entry("LD A, (0xFF00 + C)", None, 8, Op::LdhAC);
    t[0xF3] = entry("DI", None, 4, Op::Di);
    t[0xF4] = entry("UNKNOWN 0xF4", None, 0, Op::Undefined);
    t[0xF5] = entry("PUSH AF", None, 16, Op::Push(Reg16::Af));
    t[0xF6] = entry("OR n", Byte, 8, Op::Or(Src8::Imm));
    t[0xF7] = entry("RST 0x30", None, 16, Op::Rst(0x30));
    t[0xF8] = entry("LD HL, SP + n", Byte, 12, Op::LdHlSpN);
    t[0xF9] = entry("LD SP, HL", None, 8, Op::LdSpHl);
    t[0xFA] = entry("LD A, (nn)", Word, 16, Op::LdANn);
    t[0xFB] = entry("EI", None, 4, Op::Ei);
    t[0xFC] = entry("UNKNOWN 0xFC", None, 0, Op::Undefined);
    t[0xFD] = entry("UNKNOWN 0xFD", None, 0, Op::Undefined);
    t[0xFE] = entry("CP n", Byte, 8, Op::Cp(Src8::Imm));
    t[0xFF] = entry("RST 0x38", None, 16, Op::Rst(0x38));

    t
}
