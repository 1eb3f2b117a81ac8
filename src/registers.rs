use crate::error::Chip8Error;
use crate::memory::START_ROM;

/// Hardware-faithful bound on nested subroutines.
pub const STACK_DEPTH: usize = 16;

/// The register file: 16 general purpose 8-bit registers Vx, the 16-bit
/// index register I, the program counter and the two countdown timers.
///
/// VF doubles as the flag register; arithmetic, shift and draw instructions
/// overwrite it with their carry/borrow/collision outcome.
#[derive(Debug)]
pub struct Registers {
    pub vx: [u8; 16],
    pub i: u16,
    pub pc: u16,

    /// Decremented once per external tick by the host, saturating at 0.
    pub delay: u8,
    /// Nonzero means "tone on" to the host; the engine never plays audio.
    pub sound: u8,

    pub sp: usize,
    pub stack: [u16; STACK_DEPTH],
}

impl Registers {
    pub fn new() -> Self {
        Registers {
            vx: [0; 16],
            i: 0,
            pc: START_ROM as u16,
            delay: 0,
            sound: 0,
            sp: 0,
            stack: [0; STACK_DEPTH],
        }
    }

    /// Pushes a return address for a subroutine call. Overflowing the
    /// 16-entry stack is fatal; growing it silently would hide runaway
    /// recursion in the loaded program.
    pub fn push(&mut self, address: u16) -> Result<(), Chip8Error> {
        if self.sp == STACK_DEPTH {
            return Err(Chip8Error::StackOverflow { max: STACK_DEPTH });
        }

        self.stack[self.sp] = address;
        self.sp += 1;

        Ok(())
    }

    /// Pops the return address for a subroutine return. With an empty stack
    /// there is no valid pc to restore, so this is fatal.
    pub fn pop(&mut self) -> Result<u16, Chip8Error> {
        if self.sp == 0 {
            return Err(Chip8Error::StackUnderflow);
        }

        self.sp -= 1;

        Ok(self.stack[self.sp])
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}
