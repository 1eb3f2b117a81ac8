use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::display::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::error::Chip8Error;
use crate::machine::Machine;
use crate::opcode::Opcode;

/// Which register `Bnnn` adds to the jump target. Interpreters disagree
/// here: the original hardware adds V0, a common quirk variant adds Vx
/// where `x` is the high nibble of `nnn`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JumpOffset {
    #[default]
    V0,
    Vx,
}

/// The instruction engine. It owns no machine state, only host-style
/// configuration: the RNG backing `Cxnn` and the `Bnnn` quirk selection.
/// All mutation targets the [`Machine`] it is handed per call.
pub struct Interpreter {
    rng: ChaCha8Rng,
    jump_offset: JumpOffset,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// A deterministic engine; `Cxnn` draws from a ChaCha stream seeded
    /// with `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Interpreter {
            rng: ChaCha8Rng::seed_from_u64(seed),
            jump_offset: JumpOffset::default(),
        }
    }

    pub fn with_jump_offset(mut self, jump_offset: JumpOffset) -> Self {
        self.jump_offset = jump_offset;
        self
    }

    /// One fetch/execute cycle: reads the big-endian instruction word at pc
    /// and executes it. This is the host driver's per-tick entry point.
    pub fn step(&mut self, machine: &mut Machine) -> Result<(), Chip8Error> {
        let pc = machine.registers.pc as usize;

        let first_byte = machine.memory.read(pc)?;
        let second_byte = machine.memory.read(pc + 1)?;

        log::trace!("pc={:#05X} word={:02X}{:02X}", pc, first_byte, second_byte);

        self.execute(machine, first_byte, second_byte)
    }

    /// Decodes and executes a single instruction word against `machine`.
    ///
    /// pc handling: jumps, calls and a blocked wait-for-key set or hold pc
    /// themselves and return early; every other instruction falls through to
    /// the `pc += 2` advance at the bottom, with skips adding 2 on top.
    pub fn execute(
        &mut self,
        machine: &mut Machine,
        first_byte: u8,
        second_byte: u8,
    ) -> Result<(), Chip8Error> {
        let opcode = Opcode::decode(first_byte, second_byte)?;

        match opcode {
            Opcode::ClearScreen => machine.display.clear(),

            Opcode::Return => machine.registers.pc = machine.registers.pop()?,

            Opcode::Jump { nnn } => {
                machine.registers.pc = nnn;
                return Ok(());
            }

            Opcode::Call { nnn } => {
                let return_address = machine.registers.pc;
                machine.registers.push(return_address)?;
                machine.registers.pc = nnn;
                return Ok(());
            }

            Opcode::SkipIfEqual { x, nn } => {
                if machine.registers.vx[x] == nn {
                    machine.registers.pc += 2;
                }
            }

            Opcode::SkipIfNotEqual { x, nn } => {
                if machine.registers.vx[x] != nn {
                    machine.registers.pc += 2;
                }
            }

            Opcode::SkipIfRegistersEqual { x, y } => {
                if machine.registers.vx[x] == machine.registers.vx[y] {
                    machine.registers.pc += 2;
                }
            }

            Opcode::Load { x, nn } => machine.registers.vx[x] = nn,

            // No flag side effect, unlike 8xy4.
            Opcode::AddImmediate { x, nn } => {
                machine.registers.vx[x] = machine.registers.vx[x].wrapping_add(nn);
            }

            Opcode::Copy { x, y } => machine.registers.vx[x] = machine.registers.vx[y],

            Opcode::Or { x, y } => machine.registers.vx[x] |= machine.registers.vx[y],

            Opcode::And { x, y } => machine.registers.vx[x] &= machine.registers.vx[y],

            Opcode::Xor { x, y } => machine.registers.vx[x] ^= machine.registers.vx[y],

            // The flag is written after the result so that VF holds the
            // carry/borrow/shift-out even when x is 0xF.
            Opcode::Add { x, y } => {
                let (sum, carry) =
                    machine.registers.vx[x].overflowing_add(machine.registers.vx[y]);
                machine.registers.vx[x] = sum;
                machine.registers.vx[0xF] = carry as u8;
            }

            Opcode::Sub { x, y } => {
                let a = machine.registers.vx[x];
                let b = machine.registers.vx[y];
                machine.registers.vx[x] = a.wrapping_sub(b);
                machine.registers.vx[0xF] = (a >= b) as u8;
            }

            // 8xy6/8xyE shift the Vy source, original COSMAC VIP behavior.
            Opcode::ShiftRight { x, y } => {
                let source = machine.registers.vx[y];
                machine.registers.vx[x] = source >> 1;
                machine.registers.vx[0xF] = source & 1;
            }

            Opcode::SubNegated { x, y } => {
                let a = machine.registers.vx[x];
                let b = machine.registers.vx[y];
                machine.registers.vx[x] = b.wrapping_sub(a);
                machine.registers.vx[0xF] = (b > a) as u8;
            }

            Opcode::ShiftLeft { x, y } => {
                let source = machine.registers.vx[y];
                machine.registers.vx[x] = source << 1;
                machine.registers.vx[0xF] = source >> 7;
            }

            Opcode::SkipIfRegistersNotEqual { x, y } => {
                if machine.registers.vx[x] != machine.registers.vx[y] {
                    machine.registers.pc += 2;
                }
            }

            Opcode::LoadIndex { nnn } => machine.registers.i = nnn,

            Opcode::JumpWithOffset { nnn } => {
                let offset = match self.jump_offset {
                    JumpOffset::V0 => machine.registers.vx[0],
                    JumpOffset::Vx => machine.registers.vx[(nnn >> 8) as usize],
                };
                machine.registers.pc = nnn.wrapping_add(offset as u16);
                return Ok(());
            }

            Opcode::Random { x, nn } => {
                machine.registers.vx[x] = self.rng.gen::<u8>() & nn;
            }

            Opcode::Draw { x, y, n } => draw_sprite(machine, x, y, n)?,

            Opcode::SkipIfKeyDown { x } => {
                if machine.keypad.is_down(machine.registers.vx[x]) {
                    machine.registers.pc += 2;
                }
            }

            Opcode::SkipIfKeyUp { x } => {
                if !machine.keypad.is_down(machine.registers.vx[x]) {
                    machine.registers.pc += 2;
                }
            }

            Opcode::LoadDelayTimer { x } => machine.registers.vx[x] = machine.registers.delay,

            // With no key down, pc stays on this instruction so the host
            // re-issues it on the next tick; that is the whole blocking
            // contract.
            Opcode::WaitForKey { x } => match machine.keypad.first_down() {
                Some(key) => machine.registers.vx[x] = key,
                None => return Ok(()),
            },

            Opcode::SetDelayTimer { x } => machine.registers.delay = machine.registers.vx[x],

            Opcode::SetSoundTimer { x } => machine.registers.sound = machine.registers.vx[x],

            Opcode::AddIndex { x } => {
                machine.registers.i = machine
                    .registers
                    .i
                    .wrapping_add(machine.registers.vx[x] as u16);
            }

            Opcode::StoreBcd { x } => {
                let value = machine.registers.vx[x];
                let base = machine.registers.i as usize;

                machine.memory.write(base, value / 100)?;
                machine.memory.write(base + 1, value / 10 % 10)?;
                machine.memory.write(base + 2, value % 10)?;
            }

            Opcode::StoreRegisters { x } => {
                let base = machine.registers.i as usize;
                for offset in 0..=x {
                    machine.memory.write(base + offset, machine.registers.vx[offset])?;
                }
                machine.registers.i = machine.registers.i.wrapping_add(x as u16 + 1);
            }

            Opcode::LoadRegisters { x } => {
                let base = machine.registers.i as usize;
                for offset in 0..=x {
                    machine.registers.vx[offset] = machine.memory.read(base + offset)?;
                }
                machine.registers.i = machine.registers.i.wrapping_add(x as u16 + 1);
            }
        }

        machine.registers.pc += 2;

        Ok(())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Dxyn. XOR-blits the n-byte sprite at memory[I] onto the display at
/// (Vx mod width, Vy mod height), most-significant bit leftmost. VF is reset
/// first and set to 1 if any lit pixel is erased, accumulated over the whole
/// sprite. The start position wraps; the sprite body is clipped at the right
/// and bottom edges, never wrapped.
fn draw_sprite(machine: &mut Machine, x: usize, y: usize, n: u8) -> Result<(), Chip8Error> {
    let start_col = machine.registers.vx[x] as usize % DISPLAY_WIDTH;
    let start_row = machine.registers.vx[y] as usize % DISPLAY_HEIGHT;

    machine.registers.vx[0xF] = 0;

    for row_offset in 0..n as usize {
        let row = start_row + row_offset;
        if row >= DISPLAY_HEIGHT {
            break;
        }

        let sprite = machine
            .memory
            .read(machine.registers.i as usize + row_offset)?;

        for col_offset in 0..8 {
            let col = start_col + col_offset;
            if col >= DISPLAY_WIDTH {
                break;
            }

            if sprite & (0x80 >> col_offset) != 0 && machine.display.flip(col, row) {
                machine.registers.vx[0xF] = 1;
            }
        }
    }

    Ok(())
}
