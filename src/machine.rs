use crate::display::Display;
use crate::error::Chip8Error;
use crate::keypad::Keypad;
use crate::memory::Memory;
use crate::registers::Registers;

/// The complete machine state: pure data, no instruction behavior. Every
/// field is public so the instruction engine can read and write it directly;
/// the invariants live in the field types themselves.
pub struct Machine {
    pub memory: Memory,
    pub registers: Registers,
    pub display: Display,
    pub keypad: Keypad,
}

impl Machine {
    /// A powered-on machine: zeroed memory and registers, empty stack,
    /// pc = 0x200, timers at 0, display cleared.
    pub fn new() -> Self {
        Machine {
            memory: Memory::new(),
            registers: Registers::new(),
            display: Display::new(),
            keypad: Keypad::new(),
        }
    }

    pub fn with_rom(bytes: &[u8]) -> Result<Self, Chip8Error> {
        let mut machine = Machine::new();
        machine.memory.load_rom(bytes)?;

        Ok(machine)
    }

    /// One external timer tick: both countdown timers decrement, saturating
    /// at 0. The host calls this at its own fixed rate (conventionally
    /// 60 Hz), never the engine.
    pub fn tick_timers(&mut self) {
        self.registers.delay = self.registers.delay.saturating_sub(1);
        self.registers.sound = self.registers.sound.saturating_sub(1);
    }

    /// Sound gate for the host: play/continue a tone while `true`.
    pub fn sound_active(&self) -> bool {
        self.registers.sound > 0
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}
