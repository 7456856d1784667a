// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Base addresses of the si91x peripheral instances.
//!
//! High power (M4SS) peripherals sit in the 0x4xxx_xxxx range, the ULP
//! subsystem at 0x2404_xxxx and the always-on NPSS blocks at 0x2404_8xxx.

/// Memory mapped flash window seen by the M4 (common flash parts).
pub const M4_FLASH_BASE_ADDR: usize = 0x0800_0000;
/// Memory mapped flash window of the network processor.
pub const TA_FLASH_BASE_ADDR: usize = 0x0400_0000;

// Serial interfaces
pub const USART0_BASE_ADDR: usize = 0x4400_0000;
pub const UART1_BASE_ADDR: usize = 0x4400_0100;
pub const ULP_UART_BASE_ADDR: usize = 0x2404_1800;
pub const I2C0_BASE_ADDR: usize = 0x4401_0000;
pub const I2C1_BASE_ADDR: usize = 0x4704_0000;
pub const I2C2_BASE_ADDR: usize = 0x2404_0000;
pub const SSI0_BASE_ADDR: usize = 0x4402_0000;
pub const SSI_SLAVE_BASE_ADDR: usize = 0x4501_0000;
pub const SSI2_BASE_ADDR: usize = 0x2404_0800;
pub const I2S0_BASE_ADDR: usize = 0x4705_0000;
pub const I2S1_BASE_ADDR: usize = 0x2404_0400;
pub const CAN1_BASE_ADDR: usize = 0x4507_0000;
pub const QSPI_BASE_ADDR: usize = 0x1200_0000;
pub const QSPI2_BASE_ADDR: usize = 0x1204_0000;

// DMA
pub const GPDMA_G_BASE_ADDR: usize = 0x2108_0000;
pub const GPDMA_C_BASE_ADDR: usize = 0x2108_1004;
pub const UDMA0_BASE_ADDR: usize = 0x4403_0000;
pub const UDMA1_BASE_ADDR: usize = 0x2407_8000;

// GPIO
pub const EGPIO_BASE_ADDR: usize = 0x4613_0000;
pub const EGPIO1_BASE_ADDR: usize = 0x2404_C000;

// Timers
pub const TIMERS_BASE_ADDR: usize = 0x2404_2000;
pub const CT0_BASE_ADDR: usize = 0x4506_0000;
pub const CT1_BASE_ADDR: usize = 0x4506_0100;
pub const CT2_BASE_ADDR: usize = 0x4506_1000;
pub const CT3_BASE_ADDR: usize = 0x4506_1100;
pub const CT_MUX_REG_BASE_ADDR: usize = 0x4506_F000;
pub const MCPWM_BASE_ADDR: usize = 0x4707_0000;

// Always-on power domain
pub const MCU_AON_BASE_ADDR: usize = 0x2404_8000;
pub const MCU_FSM_BASE_ADDR: usize = 0x2404_8100;
pub const TIME_PERIOD_BASE_ADDR: usize = 0x2404_8200;
pub const MCU_WDT_BASE_ADDR: usize = 0x2404_8300;
pub const BATT_FF_BASE_ADDR: usize = 0x2404_8400;
/// Follows the seven TIME_PERIOD registers; 0x2404_8500 is the temperature
/// sensor.
pub const RTC_BASE_ADDR: usize = 0x2404_821C;
pub const MCU_RET_BASE_ADDR: usize = 0x2404_8600;
pub const NPSS_INTR_BASE_ADDR: usize = 0x1208_0000;

// Clocks and system configuration
pub const M4CLK_BASE_ADDR: usize = 0x4600_0000;
pub const ULPCLK_BASE_ADDR: usize = 0x2404_1400;
pub const MISC_CONFIG_BASE_ADDR: usize = 0x4600_8000;

// Security
pub const EFUSE_BASE_ADDR: usize = 0x4600_C000;
pub const CRC_BASE_ADDR: usize = 0x4508_0000;
pub const HWRNG_BASE_ADDR: usize = 0x4509_0000;

// Analog and audio
pub const AUX_ADC_DAC_COMP_BASE_ADDR: usize = 0x2404_3800;
pub const VAD_BASE_ADDR: usize = 0x2404_3000;

// High speed interfaces
pub const ETHERNET_BASE_ADDR: usize = 0x2024_0000;
pub const USB_BASE_ADDR: usize = 0x2021_0000;
pub const SDMEM_BASE_ADDR: usize = 0x2030_0000;
