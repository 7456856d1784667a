// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Name based view of the si91x register map.
//!
//! The typed layouts in [`crate::registers`] are what drivers use to touch
//! hardware. This module publishes the same information as plain data so that
//! a peripheral, register or field can be found by name:
//!
//! ```
//! use si91x::memory_map;
//!
//! let i2c0 = memory_map::peripheral("I2C0").unwrap();
//! let enable = i2c0.register("IC_ENABLE").unwrap();
//! assert_eq!(i2c0.base + enable.offset, 0x4401_006c);
//!
//! let abort = enable.field("ABORT").unwrap();
//! assert_eq!((abort.offset, abort.width), (1, 1));
//! ```
//!
//! Every table entry is derived from the typed layout at compile time, so the
//! two views cannot disagree on an offset or a bit position.

mod path;
mod table;

pub use self::path::{resolve, Location};
pub use self::table::PERIPHERALS;

use core::fmt;

use tock_registers::registers::{Aliased, ReadOnly, ReadWrite, WriteOnly};
use tock_registers::RegisterLongName;

use crate::error::LookupError;
use crate::interrupts::IRQn;

/// Access mode of a register or field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Status updated by hardware, writes are ignored.
    ReadOnly,
    /// Command or strobe, reads return zero or garbage.
    WriteOnly,
    /// Configuration.
    ReadWrite,
}

impl Access {
    pub const RO: Access = Access::ReadOnly;
    pub const WO: Access = Access::WriteOnly;
    pub const RW: Access = Access::ReadWrite;

    pub const fn is_readable(self) -> bool {
        !matches!(self, Access::WriteOnly)
    }

    pub const fn is_writable(self) -> bool {
        !matches!(self, Access::ReadOnly)
    }

    /// Datasheet tag: `RO`, `WO` or `RW`.
    pub const fn tag(self) -> &'static str {
        match self {
            Access::ReadOnly => "RO",
            Access::WriteOnly => "WO",
            Access::ReadWrite => "RW",
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Access mode implied by a `tock-registers` wrapper type.
///
/// `None` means the wrapper does not fix one mode. `Aliased` registers are
/// listed once per alias, each with its own mode.
pub trait RegisterKind {
    const ACCESS: Option<Access>;
}

macro_rules! register_kind {
    ($($int:ty),*) => {$(
        impl<R: RegisterLongName> RegisterKind for ReadOnly<$int, R> {
            const ACCESS: Option<Access> = Some(Access::ReadOnly);
        }
        impl<R: RegisterLongName> RegisterKind for WriteOnly<$int, R> {
            const ACCESS: Option<Access> = Some(Access::WriteOnly);
        }
        impl<R: RegisterLongName> RegisterKind for ReadWrite<$int, R> {
            const ACCESS: Option<Access> = Some(Access::ReadWrite);
        }
        impl<R: RegisterLongName, W: RegisterLongName> RegisterKind for Aliased<$int, R, W> {
            const ACCESS: Option<Access> = None;
        }
    )*};
}

register_kind!(u8, u16, u32, u64);

impl<K: RegisterKind, const N: usize> RegisterKind for [K; N] {
    const ACCESS: Option<Access> = K::ACCESS;
}

/// Returns `declared`, failing const evaluation when it contradicts the
/// register wrapper selected by `member`.
pub const fn checked_access<B, K: RegisterKind>(_member: fn(&B) -> &K, declared: Access) -> Access {
    match K::ACCESS {
        Some(fixed) if fixed as u8 != declared as u8 => {
            panic!("declared access mode does not match the register type")
        }
        _ => declared,
    }
}

const fn ones(width: u32) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1 << width) - 1
    }
}

/// A named bit range inside a register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldInfo {
    pub name: &'static str,
    /// Position of the least significant bit.
    pub offset: u32,
    pub width: u32,
    pub access: Access,
}

impl FieldInfo {
    /// Mask of the field in register position.
    pub const fn mask(&self) -> u64 {
        ones(self.width) << self.offset
    }

    pub const fn extract(&self, register: u64) -> u64 {
        (register & self.mask()) >> self.offset
    }

    /// Replaces the field inside `register` with `value`, truncating `value`
    /// to the field width.
    pub const fn insert(&self, register: u64, value: u64) -> u64 {
        (register & !self.mask()) | ((value << self.offset) & self.mask())
    }
}

/// A register, or an array of identical registers, at a fixed offset.
#[derive(Clone, Copy, Debug)]
pub struct RegisterInfo {
    pub name: &'static str,
    /// Byte offset from the start of the owning block.
    pub offset: usize,
    /// 8, 16, 32 or 64.
    pub width: u32,
    pub access: Access,
    /// Number of elements; 1 for a plain register.
    pub count: usize,
    /// Bytes between consecutive elements.
    pub stride: usize,
    pub fields: &'static [FieldInfo],
}

impl RegisterInfo {
    pub fn field(&self, name: &str) -> Result<&'static FieldInfo, LookupError> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .ok_or(LookupError::UnknownField)
    }

    pub const fn is_array(&self) -> bool {
        self.count > 1
    }

    /// Size of one element in bytes.
    pub const fn size(&self) -> usize {
        (self.width / 8) as usize
    }

    /// Mask covering the full register width.
    pub const fn value_mask(&self) -> u64 {
        ones(self.width)
    }

    /// Union of all named fields.
    pub fn defined_mask(&self) -> u64 {
        self.fields.iter().fold(0, |mask, field| mask | field.mask())
    }

    /// Bits not claimed by any named field.
    pub fn reserved_mask(&self) -> u64 {
        self.value_mask() & !self.defined_mask()
    }

    /// Offset of element `index` from the start of the owning block.
    pub fn element_offset(&self, index: usize) -> Result<usize, LookupError> {
        if index >= self.count {
            return Err(LookupError::IndexOutOfRange {
                index,
                count: self.count,
            });
        }
        Ok(self.offset + index * self.stride)
    }
}

/// A repeated group of registers, such as the eight GPDMA channels.
#[derive(Clone, Copy, Debug)]
pub struct ClusterInfo {
    pub name: &'static str,
    pub offset: usize,
    pub count: usize,
    pub stride: usize,
    pub registers: &'static [RegisterInfo],
}

impl ClusterInfo {
    pub fn register(&self, name: &str) -> Result<&'static RegisterInfo, LookupError> {
        find_register(self.registers, name)
    }

    pub fn element_offset(&self, index: usize) -> Result<usize, LookupError> {
        if index >= self.count {
            return Err(LookupError::IndexOutOfRange {
                index,
                count: self.count,
            });
        }
        Ok(self.offset + index * self.stride)
    }

    /// Bytes covered by all elements.
    pub const fn size(&self) -> usize {
        self.count * self.stride
    }
}

/// Everything known about one register block type, shared by all of its
/// instances.
#[derive(Clone, Copy, Debug)]
pub struct Layout {
    /// `size_of` the typed struct, reserved space included.
    pub size: usize,
    pub registers: &'static [RegisterInfo],
    pub clusters: &'static [ClusterInfo],
}

impl Layout {
    /// Looks up a top level register by name; clustered registers are
    /// reached through [`ClusterInfo::register`].
    pub fn register(&self, name: &str) -> Result<&'static RegisterInfo, LookupError> {
        find_register(self.registers, name)
    }
}

/// One peripheral instance at its base address.
#[derive(Clone, Copy, Debug)]
pub struct PeripheralInfo {
    pub name: &'static str,
    pub base: usize,
    pub layout: &'static Layout,
    pub interrupts: &'static [IRQn],
}

impl PeripheralInfo {
    pub fn register(&self, name: &str) -> Result<&'static RegisterInfo, LookupError> {
        find_register(self.layout.registers, name)
    }

    pub fn cluster(&self, name: &str) -> Result<&'static ClusterInfo, LookupError> {
        self.layout
            .clusters
            .iter()
            .find(|cluster| cluster.name == name)
            .ok_or(LookupError::UnknownCluster)
    }

    pub fn registers(&self) -> &'static [RegisterInfo] {
        self.layout.registers
    }

    pub fn clusters(&self) -> &'static [ClusterInfo] {
        self.layout.clusters
    }

    pub const fn size(&self) -> usize {
        self.layout.size
    }

    /// First address past the block.
    pub const fn end(&self) -> usize {
        self.base + self.layout.size
    }

    pub const fn contains(&self, address: usize) -> bool {
        address >= self.base && address < self.end()
    }

    /// Absolute address of a plain register, or of element 0 of an array.
    pub fn register_address(&self, name: &str) -> Result<usize, LookupError> {
        self.register(name).map(|register| self.base + register.offset)
    }
}

fn find_register(
    registers: &'static [RegisterInfo],
    name: &str,
) -> Result<&'static RegisterInfo, LookupError> {
    registers
        .iter()
        .find(|register| register.name == name)
        .ok_or(LookupError::UnknownRegister)
}

/// All peripheral instances, in table order.
pub fn peripherals() -> &'static [PeripheralInfo] {
    PERIPHERALS
}

/// Looks up a peripheral instance by its datasheet name, such as `"I2C0"`.
pub fn peripheral(name: &str) -> Result<&'static PeripheralInfo, LookupError> {
    PERIPHERALS
        .iter()
        .find(|peripheral| peripheral.name == name)
        .ok_or(LookupError::UnknownPeripheral)
}

/// Base address of a peripheral instance.
pub fn base_address(name: &str) -> Result<usize, LookupError> {
    peripheral(name).map(|peripheral| peripheral.base)
}

/// The peripheral whose address range contains `address`.
pub fn peripheral_at(address: usize) -> Option<&'static PeripheralInfo> {
    PERIPHERALS
        .iter()
        .find(|peripheral| peripheral.contains(address))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD: FieldInfo = FieldInfo {
        name: "SPEED",
        offset: 1,
        width: 2,
        access: Access::ReadWrite,
    };

    #[test]
    fn field_mask_extract_insert() {
        assert_eq!(FIELD.mask(), 0b110);
        assert_eq!(FIELD.extract(0b1_0100), 0b10);
        assert_eq!(FIELD.insert(0b1_0000, 0b11), 0b1_0110);
        // Values wider than the field are truncated.
        assert_eq!(FIELD.insert(0, 0b111), 0b110);
    }

    #[test]
    fn full_width_field() {
        let data = FieldInfo {
            name: "DATA",
            offset: 0,
            width: 64,
            access: Access::ReadOnly,
        };
        assert_eq!(data.mask(), u64::MAX);
    }

    #[test]
    fn access_tags() {
        assert_eq!(Access::RO.tag(), "RO");
        assert_eq!(Access::WO.tag(), "WO");
        assert_eq!(Access::RW.tag(), "RW");
        assert!(Access::RW.is_readable() && Access::RW.is_writable());
        assert!(!Access::WO.is_readable());
        assert!(!Access::RO.is_writable());
    }

    #[test]
    fn register_kind_follows_wrapper() {
        use crate::registers::i2c_regs::IC_ENABLE;
        assert_eq!(
            <ReadOnly<u32> as RegisterKind>::ACCESS,
            Some(Access::ReadOnly)
        );
        assert_eq!(
            <[ReadWrite<u32, IC_ENABLE::Register>; 4] as RegisterKind>::ACCESS,
            Some(Access::ReadWrite)
        );
        assert_eq!(<Aliased<u8> as RegisterKind>::ACCESS, None);
    }

    #[test]
    fn reserved_mask_of_i2c_enable() {
        let enable = peripheral("I2C0").unwrap().register("IC_ENABLE").unwrap();
        assert_eq!(enable.defined_mask(), 0b1111);
        assert_eq!(enable.reserved_mask(), 0xffff_fff0);
    }

    #[test]
    fn unknown_names() {
        assert_eq!(peripheral("I2C9").unwrap_err(), LookupError::UnknownPeripheral);
        let i2c0 = peripheral("I2C0").unwrap();
        assert_eq!(i2c0.register("IC_NOPE").unwrap_err(), LookupError::UnknownRegister);
        assert_eq!(
            i2c0.register("IC_ENABLE").unwrap().field("NOPE").unwrap_err(),
            LookupError::UnknownField
        );
    }

    #[test]
    fn peripheral_at_finds_owner() {
        let owner = peripheral_at(0x4401_006c).unwrap();
        assert_eq!(owner.name, "I2C0");
        assert!(peripheral_at(0x0000_0004).is_none());
    }
}
