pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Monochrome 64x32 framebuffer, row-major with (0, 0) in the top-left
/// corner. Each cell is on ("primary") or off ("secondary"); mapping the two
/// states to actual colors is the host rasterizer's business.
///
/// Only two instructions ever touch it: clear-screen and the XOR sprite
/// blit, so the engine mutates it exclusively through `clear` and `flip`.
pub struct Display([bool; DISPLAY_WIDTH * DISPLAY_HEIGHT]);

impl Display {
    pub fn new() -> Self {
        Display([false; DISPLAY_WIDTH * DISPLAY_HEIGHT])
    }

    /// Sets every cell to the off/secondary state.
    pub fn clear(&mut self) {
        self.0.fill(false);
    }

    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.0[Self::index(x, y)]
    }

    /// XORs a set sprite bit into the cell at (`x`, `y`). Returns `true` if
    /// the cell was lit and is now erased, i.e. a collision.
    pub fn flip(&mut self, x: usize, y: usize) -> bool {
        let cell = &mut self.0[Self::index(x, y)];
        *cell = !*cell;

        !*cell
    }

    /// Read-only view for the host rasterizer, `x + y * width` layout.
    pub fn pixels(&self) -> &[bool] {
        &self.0
    }

    fn index(x: usize, y: usize) -> usize {
        debug_assert!(x < DISPLAY_WIDTH && y < DISPLAY_HEIGHT);
        x + y * DISPLAY_WIDTH
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}
