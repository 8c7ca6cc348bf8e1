//! Memory access and stack operations.
//!
//! Memory is a flat array of 256 bytes indexed by `u8`, so every address is
//! valid and address arithmetic wraps. The stack lives at the top of memory
//! and grows down from the reset stack pointer.

use super::Cpu;
use crate::common::constants::MEMORY_SIZE;
use crate::common::error::LoadError;

impl Cpu {
    /// Reads the byte at `addr` (memory address register).
    #[inline]
    pub const fn ram_read(&self, addr: u8) -> u8 {
        self.ram[addr as usize]
    }

    /// Writes `val` (memory data register) to `addr`.
    #[inline]
    pub const fn ram_write(&mut self, addr: u8, val: u8) {
        self.ram[addr as usize] = val;
    }

    /// Copies a program image into memory starting at address 0.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::ProgramTooLarge`] if the image exceeds memory.
    pub fn load_program(&mut self, image: &[u8]) -> Result<(), LoadError> {
        if image.len() > MEMORY_SIZE {
            return Err(LoadError::ProgramTooLarge {
                len: image.len(),
                max: MEMORY_SIZE,
            });
        }
        self.ram[..image.len()].copy_from_slice(image);
        tracing::debug!(bytes = image.len(), "program loaded");
        Ok(())
    }

    /// Pushes a byte: decrement SP, then store at the new SP.
    pub fn stack_push(&mut self, val: u8) {
        let sp = self.regs.sp().wrapping_sub(1);
        self.regs.set_sp(sp);
        self.ram_write(sp, val);
    }

    /// Pops a byte: load from SP, then increment SP.
    pub fn stack_pop(&mut self) -> u8 {
        let sp = self.regs.sp();
        let val = self.ram_read(sp);
        self.regs.set_sp(sp.wrapping_add(1));
        val
    }
}
