// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Typed handles to every si91x peripheral instance.
//!
//! Each instance is available as a `*_BASE` constant, which is what chip
//! drivers normally store. [`Peripherals::take`] hands the whole set out once
//! for code that wants to prove it is the only user of the hardware.

use core::sync::atomic::{AtomicBool, Ordering};

use log::{debug, warn};

use crate::registers::aux_adc_regs::AuxAdcDacCompRegisters;
use crate::registers::can_regs::CanRegisters;
use crate::registers::crc_regs::CrcRegisters;
use crate::registers::ct_regs::{CtMuxRegisters, CtRegisters};
use crate::registers::efuse_regs::EfuseRegisters;
use crate::registers::egpio_regs::EgpioRegisters;
use crate::registers::ethernet_regs::EthernetRegisters;
use crate::registers::gpdma_regs::{GpdmaCRegisters, GpdmaGRegisters};
use crate::registers::hwrng_regs::HwrngRegisters;
use crate::registers::i2c_regs::I2cRegisters;
use crate::registers::i2s_regs::I2sRegisters;
use crate::registers::m4clk_regs::M4ClkRegisters;
use crate::registers::mcpwm_regs::McpwmRegisters;
use crate::registers::misc_config_regs::MiscConfigRegisters;
use crate::registers::npss_regs::{
    BattFfRegisters, McuAonRegisters, McuFsmRegisters, McuRetRegisters, NpssIntrRegisters,
};
use crate::registers::qspi_regs::QspiRegisters;
use crate::registers::rtc_regs::{RtcRegisters, TimePeriodRegisters};
use crate::registers::smih_regs::SmihRegisters;
use crate::registers::ssi_regs::SsiRegisters;
use crate::registers::top_si91x::*;
use crate::registers::udma_regs::UdmaRegisters;
use crate::registers::ulp_timer_regs::TimersRegisters;
use crate::registers::ulpclk_regs::UlpClkRegisters;
use crate::registers::usart_regs::UsartRegisters;
use crate::registers::usb_regs::UsbRegisters;
use crate::registers::vad_regs::VadRegisters;
use crate::registers::wdt_regs::McuWdtRegisters;
use crate::StaticRef;

macro_rules! peripheral_set {
    ($($field:ident: $regs:ty = $name:ident @ $addr:ident;)*) => {
        $(
            pub const $name: StaticRef<$regs> = unsafe { StaticRef::new($addr as *const $regs) };
        )*

        /// One handle per peripheral instance.
        pub struct Peripherals {
            $(pub $field: StaticRef<$regs>,)*
        }

        impl Peripherals {
            const fn new() -> Peripherals {
                Peripherals {
                    $($field: $name,)*
                }
            }
        }
    };
}

peripheral_set! {
    usart0: UsartRegisters = USART0_BASE @ USART0_BASE_ADDR;
    uart1: UsartRegisters = UART1_BASE @ UART1_BASE_ADDR;
    ulp_uart: UsartRegisters = ULP_UART_BASE @ ULP_UART_BASE_ADDR;
    i2c0: I2cRegisters = I2C0_BASE @ I2C0_BASE_ADDR;
    i2c1: I2cRegisters = I2C1_BASE @ I2C1_BASE_ADDR;
    i2c2: I2cRegisters = I2C2_BASE @ I2C2_BASE_ADDR;
    ssi0: SsiRegisters = SSI0_BASE @ SSI0_BASE_ADDR;
    ssi_slave: SsiRegisters = SSI_SLAVE_BASE @ SSI_SLAVE_BASE_ADDR;
    ssi2: SsiRegisters = SSI2_BASE @ SSI2_BASE_ADDR;
    i2s0: I2sRegisters = I2S0_BASE @ I2S0_BASE_ADDR;
    i2s1: I2sRegisters = I2S1_BASE @ I2S1_BASE_ADDR;
    can1: CanRegisters = CAN1_BASE @ CAN1_BASE_ADDR;
    qspi: QspiRegisters = QSPI_BASE @ QSPI_BASE_ADDR;
    qspi2: QspiRegisters = QSPI2_BASE @ QSPI2_BASE_ADDR;
    gpdma_g: GpdmaGRegisters = GPDMA_G_BASE @ GPDMA_G_BASE_ADDR;
    gpdma_c: GpdmaCRegisters = GPDMA_C_BASE @ GPDMA_C_BASE_ADDR;
    udma0: UdmaRegisters = UDMA0_BASE @ UDMA0_BASE_ADDR;
    udma1: UdmaRegisters = UDMA1_BASE @ UDMA1_BASE_ADDR;
    egpio: EgpioRegisters = EGPIO_BASE @ EGPIO_BASE_ADDR;
    egpio1: EgpioRegisters = EGPIO1_BASE @ EGPIO1_BASE_ADDR;
    timers: TimersRegisters = TIMERS_BASE @ TIMERS_BASE_ADDR;
    ct0: CtRegisters = CT0_BASE @ CT0_BASE_ADDR;
    ct1: CtRegisters = CT1_BASE @ CT1_BASE_ADDR;
    ct2: CtRegisters = CT2_BASE @ CT2_BASE_ADDR;
    ct3: CtRegisters = CT3_BASE @ CT3_BASE_ADDR;
    ct_mux: CtMuxRegisters = CT_MUX_REG_BASE @ CT_MUX_REG_BASE_ADDR;
    mcpwm: McpwmRegisters = MCPWM_BASE @ MCPWM_BASE_ADDR;
    mcu_aon: McuAonRegisters = MCU_AON_BASE @ MCU_AON_BASE_ADDR;
    mcu_fsm: McuFsmRegisters = MCU_FSM_BASE @ MCU_FSM_BASE_ADDR;
    time_period: TimePeriodRegisters = TIME_PERIOD_BASE @ TIME_PERIOD_BASE_ADDR;
    mcu_wdt: McuWdtRegisters = MCU_WDT_BASE @ MCU_WDT_BASE_ADDR;
    batt_ff: BattFfRegisters = BATT_FF_BASE @ BATT_FF_BASE_ADDR;
    rtc: RtcRegisters = RTC_BASE @ RTC_BASE_ADDR;
    mcu_ret: McuRetRegisters = MCU_RET_BASE @ MCU_RET_BASE_ADDR;
    npss_intr: NpssIntrRegisters = NPSS_INTR_BASE @ NPSS_INTR_BASE_ADDR;
    m4clk: M4ClkRegisters = M4CLK_BASE @ M4CLK_BASE_ADDR;
    ulpclk: UlpClkRegisters = ULPCLK_BASE @ ULPCLK_BASE_ADDR;
    misc_config: MiscConfigRegisters = MISC_CONFIG_BASE @ MISC_CONFIG_BASE_ADDR;
    efuse: EfuseRegisters = EFUSE_BASE @ EFUSE_BASE_ADDR;
    crc: CrcRegisters = CRC_BASE @ CRC_BASE_ADDR;
    hwrng: HwrngRegisters = HWRNG_BASE @ HWRNG_BASE_ADDR;
    aux_adc_dac_comp: AuxAdcDacCompRegisters = AUX_ADC_DAC_COMP_BASE @ AUX_ADC_DAC_COMP_BASE_ADDR;
    vad: VadRegisters = VAD_BASE @ VAD_BASE_ADDR;
    ethernet: EthernetRegisters = ETHERNET_BASE @ ETHERNET_BASE_ADDR;
    usb: UsbRegisters = USB_BASE @ USB_BASE_ADDR;
    sdmem: SmihRegisters = SDMEM_BASE @ SDMEM_BASE_ADDR;
}

static TAKEN: AtomicBool = AtomicBool::new(false);

impl Peripherals {
    /// Returns the peripheral set the first time it is called and `None`
    /// afterwards.
    pub fn take() -> Option<Peripherals> {
        if TAKEN.swap(true, Ordering::AcqRel) {
            warn!("si91x peripherals already taken");
            None
        } else {
            debug!("si91x peripherals taken");
            Some(Peripherals::new())
        }
    }

    /// Returns the peripheral set without checking whether it was taken.
    ///
    /// ## Safety
    ///
    /// The caller must make sure no two owners drive the same registers at
    /// the same time.
    pub unsafe fn steal() -> Peripherals {
        TAKEN.store(true, Ordering::Release);
        Peripherals::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_map;

    #[test]
    fn take_hands_out_one_set() {
        let first = Peripherals::take();
        assert!(first.is_some());
        assert!(Peripherals::take().is_none());
        // Stealing still works once the set is gone.
        let stolen = unsafe { Peripherals::steal() };
        assert_eq!(stolen.i2c0.addr(), first.map(|p| p.i2c0.addr()).unwrap());
    }

    #[test]
    fn handles_match_the_memory_map() {
        let checks: [(&str, usize); 8] = [
            ("I2C0", I2C0_BASE.addr()),
            ("UART1", UART1_BASE.addr()),
            ("GPDMA_C", GPDMA_C_BASE.addr()),
            ("CT3", CT3_BASE.addr()),
            ("RTC", RTC_BASE.addr()),
            ("NPSS_INTR", NPSS_INTR_BASE.addr()),
            ("AUX_ADC_DAC_COMP", AUX_ADC_DAC_COMP_BASE.addr()),
            ("SDMEM", SDMEM_BASE.addr()),
        ];
        for (name, addr) in checks {
            assert_eq!(memory_map::base_address(name), Ok(addr), "{}", name);
        }
    }

    #[test]
    fn typed_block_covers_the_table_entry() {
        let gpdma_c = memory_map::peripheral("GPDMA_C").unwrap();
        assert_eq!(gpdma_c.size(), core::mem::size_of::<GpdmaCRegisters>());
        assert_eq!(gpdma_c.size(), 0x800);
    }
}
