use crate::error::Chip8Error;

pub const MEMORY_SIZE: usize = 4096;
/// Programs are conventionally loaded at 0x200; everything below is
/// interpreter territory (here only the sprite font uses it).
pub const START_ROM: usize = 0x200;
const MAX_ROM_SIZE: usize = MEMORY_SIZE - START_ROM;

/// Sprite font for the hex digits 0-F, 5 bytes per digit, preloaded at 0x000.
const FONT_DATA: &[u8] = &[
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];

/// The 4KB address space. Only the low 12 bits of any address are
/// significant; anything past 0xFFF is a fatal out-of-bounds access.
#[derive(Debug)]
pub struct Memory([u8; MEMORY_SIZE]);

impl Memory {
    pub fn new() -> Self {
        Memory([0; MEMORY_SIZE])
    }

    /// Copies the font to 0x000 and the program image to 0x200. The image
    /// content is not validated, only its length.
    pub fn load_rom(&mut self, bytes: &[u8]) -> Result<(), Chip8Error> {
        if bytes.len() > MAX_ROM_SIZE {
            return Err(Chip8Error::RomTooLarge {
                size: bytes.len(),
                max_size: MAX_ROM_SIZE,
            });
        }

        self.0[0..FONT_DATA.len()].copy_from_slice(FONT_DATA);
        self.0[START_ROM..START_ROM + bytes.len()].copy_from_slice(bytes);

        Ok(())
    }

    pub fn read(&self, address: usize) -> Result<u8, Chip8Error> {
        self.0
            .get(address)
            .copied()
            .ok_or(Chip8Error::MemoryOutOfBounds { address })
    }

    pub fn write(&mut self, address: usize, value: u8) -> Result<(), Chip8Error> {
        match self.0.get_mut(address) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(Chip8Error::MemoryOutOfBounds { address }),
        }
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
