// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Helpers that turn a `register_structs!` layout and its
//! `register_bitfields!` definitions into [`crate::memory_map`] tables.
//!
//! Offsets are never written twice: they are read back from the typed struct
//! with `offset_of!`, and field positions from the bitfield constants. The
//! declared access mode is checked at compile time against the register
//! wrapper type (`ReadOnly`, `WriteOnly`, `ReadWrite`, `Aliased`).

/// Field table of one register, or an empty table.
macro_rules! field_list {
    () => {
        &[]
    };
    ($bits:ident { $($field:ident : $access:ident),* $(,)? }) => {
        &[$(
            $crate::memory_map::FieldInfo {
                name: stringify!($field),
                offset: $bits::$field.shift as u32,
                width: ($bits::$field.mask as u64).count_ones(),
                access: $crate::memory_map::Access::$access,
            },
        )*]
    };
}

macro_rules! element_count {
    () => {
        1
    };
    ($count:expr) => {
        $count
    };
}

/// Register table of one register block.
///
/// ```ignore
/// register_list!(I2cRegisters {
///     ic_enable => "IC_ENABLE": u32, RW, IC_ENABLE { EN: RW, ABORT: RW };
///     intr_stat[4] => "INTR_STAT": u32, RO;
/// })
/// ```
macro_rules! register_list {
    ($block:ty {
        $(
            $member:ident $([$count:expr])? => $name:literal : $width:ty, $access:ident
                $(, $bits:ident { $($field:ident : $faccess:ident),* $(,)? })? ;
        )*
    }) => {
        &[$(
            $crate::memory_map::RegisterInfo {
                name: $name,
                offset: ::core::mem::offset_of!($block, $member),
                width: <$width>::BITS,
                access: $crate::memory_map::checked_access(
                    |block: &$block| &block.$member,
                    $crate::memory_map::Access::$access,
                ),
                count: element_count!($($count)?),
                stride: (<$width>::BITS / 8) as usize,
                fields: field_list!($($bits { $($field: $faccess),* })?),
            },
        )*]
    };
}

/// Complete [`crate::memory_map::Layout`] of a register block, with optional
/// repeated clusters such as DMA channels.
macro_rules! layout {
    ($block:ty { $($registers:tt)* }
        $(clusters {
            $(
                $member:ident [$count:expr] => $name:literal : $cluster:ty { $($cregisters:tt)* } ;
            )*
        })?
    ) => {
        $crate::memory_map::Layout {
            size: ::core::mem::size_of::<$block>(),
            registers: register_list!($block { $($registers)* }),
            clusters: &[$($(
                $crate::memory_map::ClusterInfo {
                    name: $name,
                    offset: ::core::mem::offset_of!($block, $member),
                    count: $count,
                    stride: ::core::mem::size_of::<$cluster>(),
                    registers: register_list!($cluster { $($cregisters)* }),
                },
            )*)?],
        }
    };
}
