// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! The si91x peripheral instances.

use super::PeripheralInfo;
use crate::interrupts::IRQn;
use crate::registers::top_si91x::*;
use crate::registers::{
    aux_adc_regs, can_regs, crc_regs, ct_regs, efuse_regs, egpio_regs, ethernet_regs, gpdma_regs,
    hwrng_regs, i2c_regs, i2s_regs, m4clk_regs, mcpwm_regs, misc_config_regs, npss_regs,
    qspi_regs, rtc_regs, smih_regs, ssi_regs, udma_regs, ulp_timer_regs, ulpclk_regs, usart_regs,
    usb_regs, vad_regs, wdt_regs,
};

macro_rules! peripherals {
    ($($name:literal @ $base:expr => $layout:expr, [$($irq:ident),*];)*) => {
        &[$(PeripheralInfo {
            name: $name,
            base: $base,
            layout: &$layout,
            interrupts: &[$(IRQn::$irq),*],
        },)*]
    };
}

/// Every peripheral instance, grouped by bus.
pub static PERIPHERALS: &[PeripheralInfo] = peripherals! {
    // M4SS high power peripherals
    "USART0" @ USART0_BASE_ADDR => usart_regs::LAYOUT, [USART0];
    "UART1" @ UART1_BASE_ADDR => usart_regs::LAYOUT, [UART1];
    "I2C0" @ I2C0_BASE_ADDR => i2c_regs::LAYOUT, [I2C0];
    "SSI0" @ SSI0_BASE_ADDR => ssi_regs::LAYOUT, [SSI0];
    "UDMA0" @ UDMA0_BASE_ADDR => udma_regs::LAYOUT, [UDMA0];
    "SSI_SLAVE" @ SSI_SLAVE_BASE_ADDR => ssi_regs::LAYOUT, [SSISlave];
    "CT0" @ CT0_BASE_ADDR => ct_regs::LAYOUT, [CT];
    "CT1" @ CT1_BASE_ADDR => ct_regs::LAYOUT, [CT];
    "CT2" @ CT2_BASE_ADDR => ct_regs::LAYOUT, [CT];
    "CT3" @ CT3_BASE_ADDR => ct_regs::LAYOUT, [CT];
    "CT_MUX_REG" @ CT_MUX_REG_BASE_ADDR => ct_regs::MUX_LAYOUT, [];
    "CAN1" @ CAN1_BASE_ADDR => can_regs::LAYOUT, [CAN1];
    "CRC" @ CRC_BASE_ADDR => crc_regs::LAYOUT, [];
    "HWRNG" @ HWRNG_BASE_ADDR => hwrng_regs::LAYOUT, [];
    "M4CLK" @ M4CLK_BASE_ADDR => m4clk_regs::LAYOUT, [PLL_CLOCK];
    "MISC_CONFIG" @ MISC_CONFIG_BASE_ADDR => misc_config_regs::LAYOUT, [TASS_P2P];
    "EFUSE" @ EFUSE_BASE_ADDR => efuse_regs::LAYOUT, [];
    "EGPIO" @ EGPIO_BASE_ADDR => egpio_regs::LAYOUT, [
        EGPIO_WAKEUP, EGPIO_GROUP_0, EGPIO_GROUP_1, EGPIO_PIN_0, EGPIO_PIN_1, EGPIO_PIN_2,
        EGPIO_PIN_3, EGPIO_PIN_4, EGPIO_PIN_5, EGPIO_PIN_6, EGPIO_PIN_7
    ];
    "I2C1" @ I2C1_BASE_ADDR => i2c_regs::LAYOUT, [I2C1];
    "I2S0" @ I2S0_BASE_ADDR => i2s_regs::LAYOUT, [I2S0];
    "MCPWM" @ MCPWM_BASE_ADDR => mcpwm_regs::LAYOUT, [MCPWM];

    // Memory interfaces
    "QSPI" @ QSPI_BASE_ADDR => qspi_regs::LAYOUT, [QSPI];
    "QSPI2" @ QSPI2_BASE_ADDR => qspi_regs::LAYOUT, [];
    "GPDMA_G" @ GPDMA_G_BASE_ADDR => gpdma_regs::GLOBAL_LAYOUT, [GPDMA];
    "GPDMA_C" @ GPDMA_C_BASE_ADDR => gpdma_regs::CHANNEL_LAYOUT, [];
    "USB" @ USB_BASE_ADDR => usb_regs::LAYOUT, [USB];
    "ETHERNET" @ ETHERNET_BASE_ADDR => ethernet_regs::LAYOUT, [ETHERNET];
    "SDMEM" @ SDMEM_BASE_ADDR => smih_regs::LAYOUT, [SDMEM];

    // ULP subsystem
    "I2C2" @ I2C2_BASE_ADDR => i2c_regs::LAYOUT, [I2C2];
    "I2S1" @ I2S1_BASE_ADDR => i2s_regs::LAYOUT, [I2S1];
    "SSI2" @ SSI2_BASE_ADDR => ssi_regs::LAYOUT, [SSI2];
    "ULPCLK" @ ULPCLK_BASE_ADDR => ulpclk_regs::LAYOUT, [];
    "ULP_UART" @ ULP_UART_BASE_ADDR => usart_regs::LAYOUT, [ULPSS_UART];
    "TIMERS" @ TIMERS_BASE_ADDR => ulp_timer_regs::LAYOUT, [TIMER0, TIMER1, TIMER2, TIMER3];
    "VAD" @ VAD_BASE_ADDR => vad_regs::LAYOUT, [VAD_INTR_PING];
    "AUX_ADC_DAC_COMP" @ AUX_ADC_DAC_COMP_BASE_ADDR => aux_adc_regs::LAYOUT, [ADC, COMP1, COMP2];
    "EGPIO1" @ EGPIO1_BASE_ADDR => egpio_regs::LAYOUT, [ULP_EGPIO_PIN, ULP_EGPIO_GROUP];
    "UDMA1" @ UDMA1_BASE_ADDR => udma_regs::LAYOUT, [UDMA1];

    // NPSS always-on domain
    "MCU_AON" @ MCU_AON_BASE_ADDR => npss_regs::AON_LAYOUT, [];
    "MCU_FSM" @ MCU_FSM_BASE_ADDR => npss_regs::FSM_LAYOUT, [];
    "TIME_PERIOD" @ TIME_PERIOD_BASE_ADDR => rtc_regs::TIME_PERIOD_LAYOUT, [];
    "RTC" @ RTC_BASE_ADDR => rtc_regs::LAYOUT, [MCU_CAL_ALARM, MCU_CAL_RTC];
    "MCU_WDT" @ MCU_WDT_BASE_ADDR => wdt_regs::LAYOUT, [NPSS_TO_MCU_WDT_INTR];
    "BATT_FF" @ BATT_FF_BASE_ADDR => npss_regs::BATT_FF_LAYOUT, [];
    "MCU_RET" @ MCU_RET_BASE_ADDR => npss_regs::RET_LAYOUT, [];
    "NPSS_INTR" @ NPSS_INTR_BASE_ADDR => npss_regs::INTR_LAYOUT, [
        NPSS_TO_MCU_GPIO_INTR, NPSS_TO_MCU_CMP_RF_WKP_INTR, NPSS_TO_MCU_BOD_INTR,
        NPSS_TO_MCU_BUTTON_INTR, NPSS_TO_MCU_SDC_INTR, NPSS_TO_MCU_WIRELESS_INTR, NPSS_MCU_INTR
    ];
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        for (i, a) in PERIPHERALS.iter().enumerate() {
            for b in &PERIPHERALS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn instances_share_layouts() {
        let find = |name| PERIPHERALS.iter().find(|p| p.name == name).unwrap();
        assert!(core::ptr::eq(find("I2C0").layout, find("I2C2").layout));
        assert!(core::ptr::eq(find("USART0").layout, find("ULP_UART").layout));
        assert_eq!(find("CT3").base, 0x4506_1100);
    }

    #[test]
    fn every_irq_has_one_owner_at_most() {
        for irq in IRQn::ALL {
            let owners: Vec<&str> = PERIPHERALS
                .iter()
                .filter(|p| p.interrupts.contains(irq))
                .map(|p| p.name)
                .collect();
            // The four counter timers share a single line.
            if *irq == IRQn::CT {
                assert_eq!(owners, ["CT0", "CT1", "CT2", "CT3"]);
            } else {
                assert!(owners.len() <= 1, "{} owned by {:?}", irq, owners);
            }
        }
    }
}
