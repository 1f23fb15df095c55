//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from specific
//! memory implementations, and `FlatMemory`, a plain byte array covering (part of)
//! the 16-bit address space.
//!
//! ## Design Principles
//!
//! - Every access is bounds-checked. An address the backing store does not cover
//!   is a configuration error and surfaces as `BusError::AddressOutOfRange`
//!   instead of silently wrapping.
//! - The bus knows nothing about timing; the CPU ticks its clock once per access.

use std::fs;
use std::path::Path;

use thiserror::Error;

/// Size of the full 6502 address space.
pub const ADDRESS_SPACE: usize = 0x1_0000;

/// Fatal bus faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BusError {
    /// The address lies outside the storage backing the bus.
    #[error("address ${address:04X} is outside the {size}-byte bus")]
    AddressOutOfRange { address: u16, size: usize },

    /// A binary image does not fit between its origin and the end of storage.
    #[error("{len}-byte image at ${origin:04X} does not fit in the {size}-byte bus")]
    ImageTooLarge { origin: u16, len: usize, size: usize },
}

/// Errors raised while loading a binary image from disk.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image file is empty")]
    Empty,
    #[error(transparent)]
    Bus(#[from] BusError),
}

/// Memory bus trait for CPU to read/write bytes.
///
/// Implementations of this trait provide the memory backend for the CPU.
/// The CPU accesses all memory (RAM, ROM, vectors, stack) through this abstraction.
///
/// # Examples
///
/// ```
/// use cpu6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42).unwrap();
/// assert_eq!(mem.read(0x1234), Ok(0x42));
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use cpu6502::{BusError, MemoryBus};
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],
///     rom: [u8; 0x8000],
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn reset(&mut self) {
///         self.ram = [0; 0x8000];
///     }
///
///     fn read(&self, addr: u16) -> Result<u8, BusError> {
///         Ok(if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         })
///     }
///
///     fn write(&mut self, addr: u16, value: u8) -> Result<(), BusError> {
///         // Writes to ROM are ignored
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         Ok(())
///     }
///
///     fn load_image(&mut self, image: &[u8], origin: u16) -> Result<(), BusError> {
///         let start = origin as usize;
///         if start + image.len() > 0x1_0000 {
///             return Err(BusError::ImageTooLarge { origin, len: image.len(), size: 0x1_0000 });
///         }
///         for (offset, &byte) in image.iter().enumerate() {
///             let addr = start + offset;
///             if addr < 0x8000 {
///                 self.ram[addr] = byte;
///             } else {
///                 self.rom[addr - 0x8000] = byte;
///             }
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Zero-fills the backing storage.
    fn reset(&mut self);

    /// Reads a byte from the specified 16-bit address.
    ///
    /// # Errors
    ///
    /// `BusError::AddressOutOfRange` if the address is not backed by storage.
    fn read(&self, addr: u16) -> Result<u8, BusError>;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// # Errors
    ///
    /// `BusError::AddressOutOfRange` if the address is not backed by storage.
    fn write(&mut self, addr: u16, value: u8) -> Result<(), BusError>;

    /// Copies a binary image into the address space starting at `origin`.
    ///
    /// # Errors
    ///
    /// `BusError::ImageTooLarge` if the image runs past the end of storage.
    /// Nothing is written in that case.
    fn load_image(&mut self, image: &[u8], origin: u16) -> Result<(), BusError>;

    /// Checks if a memory-mapped device holds the IRQ line low.
    ///
    /// The IRQ line is level-sensitive; the CPU samples it before every
    /// instruction fetch together with its own IRQ input. Plain memory has no
    /// interrupt sources.
    fn irq_active(&self) -> bool {
        false
    }
}

/// Flat RAM covering the address space from `$0000` up to its size.
///
/// # Examples
///
/// ```
/// use cpu6502::{BusError, FlatMemory, MemoryBus};
///
/// // 32 KiB of RAM: $0000-$7FFF
/// let mut mem = FlatMemory::with_size(0x8000);
/// mem.write(0x7FFF, 0xAA).unwrap();
///
/// assert!(matches!(
///     mem.read(0x8000),
///     Err(BusError::AddressOutOfRange { address: 0x8000, .. })
/// ));
/// ```
#[derive(Clone)]
pub struct FlatMemory {
    data: Box<[u8]>,
}

impl FlatMemory {
    /// Creates 64 KiB of zeroed memory covering the whole address space.
    pub fn new() -> Self {
        Self::with_size(ADDRESS_SPACE)
    }

    /// Creates zeroed memory of `size` bytes starting at `$0000`.
    pub fn with_size(size: usize) -> Self {
        Self {
            data: vec![0; size].into_boxed_slice(),
        }
    }

    /// Creates 64 KiB of memory and loads the file at `path` into it at `origin`.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read, is empty, or does not fit.
    pub fn from_file<P: AsRef<Path>>(path: P, origin: u16) -> Result<Self, ImageError> {
        let image = fs::read(path)?;
        if image.is_empty() {
            return Err(ImageError::Empty);
        }

        let mut memory = Self::new();
        memory.load_image(&image, origin)?;
        Ok(memory)
    }

    /// Number of bytes backing this memory.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Raw view of the backing storage.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    fn check(&self, address: u16) -> Result<usize, BusError> {
        let index = address as usize;
        if index < self.data.len() {
            Ok(index)
        } else {
            Err(BusError::AddressOutOfRange {
                address,
                size: self.data.len(),
            })
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn reset(&mut self) {
        self.data.fill(0x00);
    }

    fn read(&self, addr: u16) -> Result<u8, BusError> {
        let index = self.check(addr)?;
        Ok(self.data[index])
    }

    fn write(&mut self, addr: u16, value: u8) -> Result<(), BusError> {
        let index = self.check(addr)?;
        self.data[index] = value;
        Ok(())
    }

    fn load_image(&mut self, image: &[u8], origin: u16) -> Result<(), BusError> {
        let start = origin as usize;
        let end = start + image.len();
        if end > self.data.len() {
            return Err(BusError::ImageTooLarge {
                origin,
                len: image.len(),
                size: self.data.len(),
            });
        }

        self.data[start..end].copy_from_slice(image);
        Ok(())
    }
}
