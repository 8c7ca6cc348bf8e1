//! LS-8 Opcodes.
//!
//! Defines the raw encodings of every supported instruction and the
//! `Opcode` enum the interpreter dispatches on.

use std::fmt;

/// Halt the CPU.
pub const HLT: u8 = 0b0000_0001;

/// Load immediate: `reg := value`.
pub const LDI: u8 = 0b1000_0010;

/// Print the decimal value of a register.
pub const PRN: u8 = 0b0100_0111;

/// Add two registers, result in the first.
pub const ADD: u8 = 0b1010_0000;

/// Multiply two registers, result in the first.
pub const MUL: u8 = 0b1010_0010;

/// Push a register onto the stack.
pub const PUSH: u8 = 0b0100_0101;

/// Pop the stack into a register.
pub const POP: u8 = 0b0100_0110;

/// Call the subroutine whose address is in a register.
pub const CALL: u8 = 0b0101_0000;

/// Return from subroutine.
pub const RET: u8 = 0b0001_0001;

/// Unconditional jump to the address in a register.
pub const JMP: u8 = 0b0101_0100;

/// Compare two registers and set the flags.
pub const CMP: u8 = 0b1010_0111;

/// Jump if the equal flag is set.
pub const JEQ: u8 = 0b0101_0101;

/// Jump if the equal flag is clear.
pub const JNE: u8 = 0b0101_0110;

/// Store a register value at the address held in another register.
pub const ST: u8 = 0b1000_0100;

/// Shift that brings the operand-count field (bits 7..6) down to bits 1..0.
pub const OPERAND_COUNT_SHIFT: u8 = 6;

/// LS-8 instruction opcodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// `HLT`
    Hlt = HLT,
    /// `LDI reg, imm`
    Ldi = LDI,
    /// `PRN reg`
    Prn = PRN,
    /// `ADD regA, regB`
    Add = ADD,
    /// `MUL regA, regB`
    Mul = MUL,
    /// `PUSH reg`
    Push = PUSH,
    /// `POP reg`
    Pop = POP,
    /// `CALL reg`
    Call = CALL,
    /// `RET`
    Ret = RET,
    /// `JMP reg`
    Jmp = JMP,
    /// `CMP regA, regB`
    Cmp = CMP,
    /// `JEQ reg`
    Jeq = JEQ,
    /// `JNE reg`
    Jne = JNE,
    /// `ST regA, regB`
    St = ST,
}

impl Opcode {
    /// All opcodes, in encoding-table order.
    pub const ALL: [Self; 14] = [
        Self::Hlt,
        Self::Ldi,
        Self::Prn,
        Self::Add,
        Self::Mul,
        Self::Push,
        Self::Pop,
        Self::Call,
        Self::Ret,
        Self::Jmp,
        Self::Cmp,
        Self::Jeq,
        Self::Jne,
        Self::St,
    ];

    /// Returns the raw encoding of this opcode.
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Returns the number of operand bytes following the opcode.
    #[inline]
    pub const fn operand_count(self) -> u8 {
        operand_count(self as u8)
    }

    /// Returns the assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Hlt => "HLT",
            Self::Ldi => "LDI",
            Self::Prn => "PRN",
            Self::Add => "ADD",
            Self::Mul => "MUL",
            Self::Push => "PUSH",
            Self::Pop => "POP",
            Self::Call => "CALL",
            Self::Ret => "RET",
            Self::Jmp => "JMP",
            Self::Cmp => "CMP",
            Self::Jeq => "JEQ",
            Self::Jne => "JNE",
            Self::St => "ST",
        }
    }
}

/// Extracts the operand count from bits 7..6 of a raw opcode byte.
///
/// This works for any byte, including ones that are not valid opcodes.
#[inline]
pub const fn operand_count(raw: u8) -> u8 {
    raw >> OPERAND_COUNT_SHIFT
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Ok(match raw {
            HLT => Self::Hlt,
            LDI => Self::Ldi,
            PRN => Self::Prn,
            ADD => Self::Add,
            MUL => Self::Mul,
            PUSH => Self::Push,
            POP => Self::Pop,
            CALL => Self::Call,
            RET => Self::Ret,
            JMP => Self::Jmp,
            CMP => Self::Cmp,
            JEQ => Self::Jeq,
            JNE => Self::Jne,
            ST => Self::St,
            other => return Err(other),
        })
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
