use crate::error::Chip8Error;

/// One decoded instruction word with its operand fields extracted.
///
/// The raw word is big-endian; the fields follow the standard bit layout:
/// `x` is the low nibble of the high byte, `y` the high nibble of the low
/// byte, `n` the low nibble, `nn` the full low byte and `nnn` the low
/// 12 bits. `x`/`y` are register *indices*; handlers look the values up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    /// 00E0
    ClearScreen,
    /// 00EE
    Return,
    /// 1nnn
    Jump { nnn: u16 },
    /// 2nnn
    Call { nnn: u16 },
    /// 3xnn
    SkipIfEqual { x: usize, nn: u8 },
    /// 4xnn
    SkipIfNotEqual { x: usize, nn: u8 },
    /// 5xy0
    SkipIfRegistersEqual { x: usize, y: usize },
    /// 6xnn
    Load { x: usize, nn: u8 },
    /// 7xnn
    AddImmediate { x: usize, nn: u8 },
    /// 8xy0
    Copy { x: usize, y: usize },
    /// 8xy1
    Or { x: usize, y: usize },
    /// 8xy2
    And { x: usize, y: usize },
    /// 8xy3
    Xor { x: usize, y: usize },
    /// 8xy4
    Add { x: usize, y: usize },
    /// 8xy5
    Sub { x: usize, y: usize },
    /// 8xy6
    ShiftRight { x: usize, y: usize },
    /// 8xy7
    SubNegated { x: usize, y: usize },
    /// 8xyE
    ShiftLeft { x: usize, y: usize },
    /// 9xy0
    SkipIfRegistersNotEqual { x: usize, y: usize },
    /// Annn
    LoadIndex { nnn: u16 },
    /// Bnnn
    JumpWithOffset { nnn: u16 },
    /// Cxnn
    Random { x: usize, nn: u8 },
    /// Dxyn
    Draw { x: usize, y: usize, n: u8 },
    /// Ex9E
    SkipIfKeyDown { x: usize },
    /// ExA1
    SkipIfKeyUp { x: usize },
    /// Fx07
    LoadDelayTimer { x: usize },
    /// Fx0A
    WaitForKey { x: usize },
    /// Fx15
    SetDelayTimer { x: usize },
    /// Fx18
    SetSoundTimer { x: usize },
    /// Fx1E
    AddIndex { x: usize },
    /// Fx33
    StoreBcd { x: usize },
    /// Fx55
    StoreRegisters { x: usize },
    /// Fx65
    LoadRegisters { x: usize },
}

impl Opcode {
    /// Decodes one big-endian instruction word. A word that matches no
    /// defined pattern is an error, never a silent no-op; historical
    /// interpreters that swallowed unknown opcodes were hiding bugs in the
    /// loaded program.
    pub fn decode(first_byte: u8, second_byte: u8) -> Result<Opcode, Chip8Error> {
        let word = u16::from_be_bytes([first_byte, second_byte]);

        let x = (first_byte & 0x0F) as usize;
        let y = (second_byte >> 4) as usize;
        let n = second_byte & 0x0F;
        let nn = second_byte;
        let nnn = word & 0x0FFF;

        let opcode = match first_byte >> 4 {
            0x0 if word == 0x00E0 => Opcode::ClearScreen,
            0x0 if word == 0x00EE => Opcode::Return,
            0x1 => Opcode::Jump { nnn },
            0x2 => Opcode::Call { nnn },
            0x3 => Opcode::SkipIfEqual { x, nn },
            0x4 => Opcode::SkipIfNotEqual { x, nn },
            0x5 if n == 0x0 => Opcode::SkipIfRegistersEqual { x, y },
            0x6 => Opcode::Load { x, nn },
            0x7 => Opcode::AddImmediate { x, nn },
            0x8 => match n {
                0x0 => Opcode::Copy { x, y },
                0x1 => Opcode::Or { x, y },
                0x2 => Opcode::And { x, y },
                0x3 => Opcode::Xor { x, y },
                0x4 => Opcode::Add { x, y },
                0x5 => Opcode::Sub { x, y },
                0x6 => Opcode::ShiftRight { x, y },
                0x7 => Opcode::SubNegated { x, y },
                0xE => Opcode::ShiftLeft { x, y },
                _ => return Err(Chip8Error::UnknownOpcode { opcode: word }),
            },
            0x9 if n == 0x0 => Opcode::SkipIfRegistersNotEqual { x, y },
            0xA => Opcode::LoadIndex { nnn },
            0xB => Opcode::JumpWithOffset { nnn },
            0xC => Opcode::Random { x, nn },
            0xD => Opcode::Draw { x, y, n },
            0xE => match nn {
                0x9E => Opcode::SkipIfKeyDown { x },
                0xA1 => Opcode::SkipIfKeyUp { x },
                _ => return Err(Chip8Error::UnknownOpcode { opcode: word }),
            },
            0xF => match nn {
                0x07 => Opcode::LoadDelayTimer { x },
                0x0A => Opcode::WaitForKey { x },
                0x15 => Opcode::SetDelayTimer { x },
                0x18 => Opcode::SetSoundTimer { x },
                0x1E => Opcode::AddIndex { x },
                0x33 => Opcode::StoreBcd { x },
                0x55 => Opcode::StoreRegisters { x },
                0x65 => Opcode::LoadRegisters { x },
                _ => return Err(Chip8Error::UnknownOpcode { opcode: word }),
            },
            _ => return Err(Chip8Error::UnknownOpcode { opcode: word }),
        };

        Ok(opcode)
    }
}
