// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Register layouts of the si91x peripherals.
//!
//! Each `*_regs` module holds one `register_structs!` block per register
//! block type, the `register_bitfields!` for its registers and a `LAYOUT`
//! table consumed by [`crate::memory_map`]. Instance base addresses live in
//! [`top_si91x`].

pub mod aux_adc_regs;
pub mod can_regs;
pub mod crc_regs;
pub mod ct_regs;
pub mod efuse_regs;
pub mod egpio_regs;
pub mod ethernet_regs;
pub mod gpdma_regs;
pub mod hwrng_regs;
pub mod i2c_regs;
pub mod i2s_regs;
pub mod m4clk_regs;
pub mod mcpwm_regs;
pub mod misc_config_regs;
pub mod npss_regs;
pub mod qspi_regs;
pub mod rtc_regs;
pub mod smih_regs;
pub mod ssi_regs;
pub mod top_si91x;
pub mod udma_regs;
pub mod ulp_timer_regs;
pub mod ulpclk_regs;
pub mod usart_regs;
pub mod usb_regs;
pub mod vad_regs;
pub mod wdt_regs;
