// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Peripheral register map of the Silicon Labs SiWx917 (si91x) M4 core.
//!
//! - [`registers`]: typed `tock-registers` layouts and base addresses.
//! - [`peripherals`]: `StaticRef` handles for each instance.
//! - [`interrupts`]: the `IRQn` table.
//! - [`memory_map`]: name and path lookups over the same layouts.

#![cfg_attr(not(test), no_std)]
#![crate_name = "si91x"]
#![crate_type = "rlib"]
// The larger `register_structs!` blocks (ETHERNET, QSPI, AUX_ADC) need a
// deeper recursion limit than the default to fully expand.
#![recursion_limit = "512"]

#[macro_use]
mod macros;

pub mod chip_config;
pub mod error;
pub mod interrupts;
pub mod memory_map;
pub mod peripherals;
pub mod registers;

mod static_ref;

pub use crate::error::LookupError;
pub use crate::interrupts::IRQn;
pub use crate::static_ref::StaticRef;
