// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Chip specific configuration.
//!
//! The si91x ships in two flash arrangements. In common flash parts the M4 and
//! the network processor share one external flash and the manufacturing data
//! sits near its end. Dual flash parts give the M4 its own flash with the
//! manufacturing data right at the start. Everything else in the register map
//! is identical, so the difference is captured by a configuration trait whose
//! implementation is picked with a Cargo feature.

pub use crate::interrupts::{EXT_IRQ_COUNT, RESERVED_IRQ_COUNT, VECTOR_TABLE_ENTRIES};

/// Where the M4 fetches its code from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashMode {
    /// One flash shared with the network processor.
    Common,
    /// Dedicated M4 flash.
    Dual,
}

/// si91x configuration based on the target device.
pub trait Si91xConfig {
    /// Identifier for the platform. This is useful for debugging to confirm the
    /// correct configuration of the chip is being used.
    const NAME: &'static str;

    const FLASH_MODE: FlashMode;

    /// Frequency of the 40 MHz crystal in Hz.
    const XTAL_CLK_FREQ: u32 = 40_000_000;
    /// Internal MHz RC oscillator. Not accurate enough to clock peripherals.
    const MHZ_RC_CLOCK: u32 = 32_000_000;
    const RO_20MHZ_CLOCK: u32 = 20_000_000;
    /// Output of the doubler fed by the 20 MHz RO.
    const DOUBLER_CLOCK: u32 = 2 * Self::RO_20MHZ_CLOCK;
    const KHZ_RC_CLOCK: u32 = 32_000;
    const KHZ_RO_CLOCK: u32 = 32_000;
    const KHZ_XTAL_CLOCK: u32 = 32_768;
    const MODEM_PLL_CLOCK: u32 = 80_000_000;

    /// Highest M4 core clock in Hz.
    const SOC_MAX_FREQ: u32 = 180_000_000;

    /// Flash address of the IPMU calibration record.
    const IPMU_VALUES_OFFSET: usize;
    /// Flash address of the package type byte.
    const PACKAGE_TYPE_OFFSET: usize;
    /// Flash address of the silicon revision byte.
    const SILICON_REV_OFFSET: usize;
}

pub enum CommonFlash {}

impl Si91xConfig for CommonFlash {
    const NAME: &'static str = "si91x common flash";
    const FLASH_MODE: FlashMode = FlashMode::Common;

    const IPMU_VALUES_OFFSET: usize = 0x081F_0258;
    const PACKAGE_TYPE_OFFSET: usize = 0x081F_0292;
    const SILICON_REV_OFFSET: usize = 0x081F_0293;
}

pub enum DualFlash {}

impl Si91xConfig for DualFlash {
    const NAME: &'static str = "si91x dual flash";
    const FLASH_MODE: FlashMode = FlashMode::Dual;

    const IPMU_VALUES_OFFSET: usize = 0x0800_0561;
    const PACKAGE_TYPE_OFFSET: usize = 0x0800_059B;
    const SILICON_REV_OFFSET: usize = 0x0800_059C;
}

#[cfg(all(feature = "config_common_flash", feature = "config_dual_flash"))]
compile_error!("features `config_common_flash` and `config_dual_flash` are mutually exclusive");

/// Configuration selected by the `config_*` Cargo features.
#[cfg(not(feature = "config_dual_flash"))]
pub type ChipConfig = CommonFlash;
#[cfg(feature = "config_dual_flash")]
pub type ChipConfig = DualFlash;

// VTOR values when the M4 runs from ROM
pub const VECTOR_OFFSET_TA_ROM: usize = 0x10_0000 + 0x7_0100;
pub const VECTOR_OFFSET_M4_ROM: usize = 0x30_0000 + 0xB100;
pub const VECTOR_OFFSET_TA_ROM_DIRECT: usize = 0x8_0000 + 0x7_0100;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::top_si91x::M4_FLASH_BASE_ADDR;

    #[test]
    fn derived_clocks() {
        assert_eq!(CommonFlash::DOUBLER_CLOCK, 40_000_000);
        assert_eq!(DualFlash::DOUBLER_CLOCK, CommonFlash::XTAL_CLK_FREQ);
        assert!(ChipConfig::SOC_MAX_FREQ > ChipConfig::MODEM_PLL_CLOCK);
    }

    #[test]
    fn manufacturing_data_lives_in_m4_flash() {
        fn check<C: Si91xConfig>() {
            for offset in [
                C::IPMU_VALUES_OFFSET,
                C::PACKAGE_TYPE_OFFSET,
                C::SILICON_REV_OFFSET,
            ] {
                assert!(offset >= M4_FLASH_BASE_ADDR, "{}", C::NAME);
            }
            assert_eq!(C::SILICON_REV_OFFSET, C::PACKAGE_TYPE_OFFSET + 1);
        }
        check::<CommonFlash>();
        check::<DualFlash>();
    }

    #[test]
    fn vector_table_size() {
        assert_eq!(VECTOR_TABLE_ENTRIES, 91);
        assert_eq!(VECTOR_OFFSET_M4_ROM, 0x30_b100);
    }

    #[cfg(not(feature = "config_dual_flash"))]
    #[test]
    fn default_is_common_flash() {
        assert_eq!(ChipConfig::FLASH_MODE, FlashMode::Common);
    }

    #[cfg(feature = "config_dual_flash")]
    #[test]
    fn dual_flash_feature_selects_dual_flash() {
        assert!(!cfg!(feature = "config_common_flash"));
        assert_eq!(ChipConfig::FLASH_MODE, FlashMode::Dual);
    }

    #[test]
    fn exactly_one_flash_feature_is_enabled() {
        assert_ne!(
            cfg!(feature = "config_common_flash"),
            cfg!(feature = "config_dual_flash")
        );
    }
}
