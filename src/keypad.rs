/// Snapshot of the 16-key hex keypad. The host owns the physical mapping and
/// refreshes this snapshot every tick; the engine only queries it for the
/// skip-if-key and wait-for-key instructions.
pub struct Keypad {
    keys: [bool; 16],
}

impl Keypad {
    pub fn new() -> Self {
        Keypad { keys: [false; 16] }
    }

    pub fn press(&mut self, key: u8) {
        self.keys[key as usize & 0xF] = true;
    }

    pub fn release(&mut self, key: u8) {
        self.keys[key as usize & 0xF] = false;
    }

    pub fn release_all(&mut self) {
        self.keys = [false; 16];
    }

    pub fn is_down(&self, key: u8) -> bool {
        self.keys[key as usize & 0xF]
    }

    /// Lowest-numbered key currently held, if any. CHIP-8 has no concept of
    /// chords, so one key is all the wait-for-key instruction needs.
    pub fn first_down(&self) -> Option<u8> {
        self.keys.iter().position(|&down| down).map(|key| key as u8)
    }
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Keypad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for down in self.keys {
            write!(f, "{}", if down { 'o' } else { '.' })?;
        }
        Ok(())
    }
}
