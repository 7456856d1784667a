// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Interrupt numbers of the si91x M4 core.
//!
//! Cortex-M4 system exceptions are negative and peripheral lines run from 0
//! to 74. Unused vector slots stay unused: the numbers are wired in silicon
//! and are never renumbered to close the gaps.

use core::fmt;

use crate::error::LookupError;

/// Number of peripheral (NVIC) interrupt lines.
pub const EXT_IRQ_COUNT: usize = 75;
/// Vector table entries in front of the first peripheral line.
pub const RESERVED_IRQ_COUNT: usize = 16;
pub const VECTOR_TABLE_ENTRIES: usize = RESERVED_IRQ_COUNT + EXT_IRQ_COUNT;

macro_rules! irq_table {
    ($( $(#[$doc:meta])* $variant:ident = $value:literal, )*) => {
        #[allow(non_camel_case_types)]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(i16)]
        pub enum IRQn {
            $( $(#[$doc])* $variant = $value, )*
        }

        impl IRQn {
            /// Every interrupt source in ascending order.
            pub const ALL: &'static [IRQn] = &[$(IRQn::$variant,)*];

            /// CMSIS name, e.g. `Reset_IRQn` or `TIMER0_IRQn`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(IRQn::$variant => concat!(stringify!($variant), "_IRQn"),)*
                }
            }

            const fn short_name(self) -> &'static str {
                match self {
                    $(IRQn::$variant => stringify!($variant),)*
                }
            }
        }
    };
}

irq_table! {
    // Cortex-M4 processor exceptions
    /// Reset
    Reset = -15,
    /// Non maskable interrupt
    NonMaskableInt = -14,
    HardFault = -13,
    /// Memory management fault
    MemoryManagement = -12,
    BusFault = -11,
    UsageFault = -10,
    /// Supervisor call
    SVCall = -5,
    DebugMonitor = -4,
    PendSV = -2,
    SysTick = -1,

    // si91x peripheral interrupts
    /// Voice activity detection ping
    VAD_INTR_PING = 0,
    TIMER0 = 2,
    TIMER1 = 3,
    TIMER2 = 4,
    TIMER3 = 5,
    CAP_SENSOR = 6,
    COMP1 = 7,
    COMP2 = 8,
    /// ULP µDMA
    UDMA1 = 10,
    ADC = 11,
    ULPSS_UART = 12,
    I2C2 = 13,
    I2S1 = 14,
    IR_DECODER = 15,
    SSI2 = 16,
    FIM = 17,
    ULP_EGPIO_PIN = 18,
    ULP_EGPIO_GROUP = 19,
    NPSS_TO_MCU_WDT_INTR = 20,
    NPSS_TO_MCU_GPIO_INTR = 21,
    /// Comparator / RF wakeup, shared with the system RTC
    NPSS_TO_MCU_CMP_RF_WKP_INTR = 22,
    /// Brown-out detection
    NPSS_TO_MCU_BOD_INTR = 23,
    NPSS_TO_MCU_BUTTON_INTR = 24,
    /// Sensor data collector
    NPSS_TO_MCU_SDC_INTR = 25,
    NPSS_TO_MCU_WIRELESS_INTR = 26,
    /// Deep sleep wakeup
    NPSS_MCU_INTR = 27,
    MCU_CAL_ALARM = 28,
    MCU_CAL_RTC = 29,
    GPDMA = 31,
    UDMA0 = 33,
    /// Configurable timers
    CT = 34,
    HIF0 = 35,
    HIF1 = 36,
    SIO = 37,
    USART0 = 38,
    UART1 = 39,
    EGPIO_WAKEUP = 41,
    I2C0 = 42,
    SSISlave = 44,
    GSPI0 = 46,
    SSI0 = 47,
    MCPWM = 48,
    QEI = 49,
    EGPIO_GROUP_0 = 50,
    EGPIO_GROUP_1 = 51,
    EGPIO_PIN_0 = 52,
    EGPIO_PIN_1 = 53,
    EGPIO_PIN_2 = 54,
    EGPIO_PIN_3 = 55,
    EGPIO_PIN_4 = 56,
    EGPIO_PIN_5 = 57,
    EGPIO_PIN_6 = 58,
    EGPIO_PIN_7 = 59,
    QSPI = 60,
    I2C1 = 61,
    /// Ethernet MAC, shared with the MVP accelerator
    ETHERNET = 62,
    MVP_WAKEUP = 63,
    I2S0 = 64,
    CAN1 = 66,
    SDMEM = 68,
    PLL_CLOCK = 69,
    CCI = 71,
    FPU = 72,
    USB = 73,
    /// Network processor to M4 mailbox
    TASS_P2P = 74,
}

/// Names the SDK uses for lines that share a number with another source.
const ALIASES: &[(&str, IRQn)] = &[
    ("SYSRTC", IRQn::NPSS_TO_MCU_CMP_RF_WKP_INTR),
    ("MVP", IRQn::ETHERNET),
    ("ULP_UART", IRQn::ULPSS_UART),
    ("DMA", IRQn::GPDMA),
];

impl IRQn {
    pub const SYSRTC: IRQn = IRQn::NPSS_TO_MCU_CMP_RF_WKP_INTR;
    pub const MVP: IRQn = IRQn::ETHERNET;
    pub const ULP_UART: IRQn = IRQn::ULPSS_UART;

    /// Looks up a source by name, with or without the `_IRQn` suffix.
    pub fn from_name(name: &str) -> Result<IRQn, LookupError> {
        let name = name.strip_suffix("_IRQn").unwrap_or(name);
        IRQn::ALL
            .iter()
            .copied()
            .find(|irq| irq.short_name() == name)
            .or_else(|| {
                ALIASES
                    .iter()
                    .find(|(alias, _)| *alias == name)
                    .map(|&(_, irq)| irq)
            })
            .ok_or(LookupError::UnknownInterrupt)
    }

    /// Signed CMSIS number.
    pub const fn number(self) -> i16 {
        self as i16
    }

    pub const fn is_core_exception(self) -> bool {
        (self as i16) < 0
    }

    /// Line number for the NVIC registers, `None` for core exceptions.
    pub const fn nvic_number(self) -> Option<u32> {
        if self.is_core_exception() {
            None
        } else {
            Some(self as i16 as u32)
        }
    }

    /// Index into the vector table, where the initial stack pointer is 0 and
    /// Reset is 1.
    pub const fn vector_index(self) -> usize {
        (self as i16 + RESERVED_IRQ_COUNT as i16) as usize
    }
}

impl TryFrom<i16> for IRQn {
    type Error = LookupError;

    fn try_from(number: i16) -> Result<IRQn, LookupError> {
        match IRQn::ALL.binary_search_by_key(&number, |irq| *irq as i16) {
            Ok(position) => Ok(IRQn::ALL[position]),
            Err(_) if (IRQn::Reset as i16..EXT_IRQ_COUNT as i16).contains(&number) => {
                Err(LookupError::ReservedInterrupt(number))
            }
            Err(_) => Err(LookupError::UnknownInterrupt),
        }
    }
}

impl From<IRQn> for i16 {
    fn from(irq: IRQn) -> i16 {
        irq as i16
    }
}

impl fmt::Display for IRQn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), *self as i16)
    }
}

/// Named constants for NVIC ids
#[allow(non_upper_case_globals)]
pub mod nvic {
    pub const VAD_INTR_PING: u32 = 0;
    // 01 RESERVED
    pub const TIMER0: u32 = 2;
    pub const TIMER1: u32 = 3;
    pub const TIMER2: u32 = 4;
    pub const TIMER3: u32 = 5;
    pub const CAP_SENSOR: u32 = 6;
    pub const COMP1: u32 = 7;
    pub const COMP2: u32 = 8;
    // 09 RESERVED
    pub const UDMA1: u32 = 10;
    pub const ADC: u32 = 11;
    pub const ULPSS_UART: u32 = 12;
    pub const I2C2: u32 = 13;
    pub const I2S1: u32 = 14;
    pub const IR_DECODER: u32 = 15;
    pub const SSI2: u32 = 16;
    pub const FIM: u32 = 17;
    pub const ULP_EGPIO_PIN: u32 = 18;
    pub const ULP_EGPIO_GROUP: u32 = 19;
    pub const NPSS_TO_MCU_WDT_INTR: u32 = 20;
    pub const NPSS_TO_MCU_GPIO_INTR: u32 = 21;
    pub const NPSS_TO_MCU_CMP_RF_WKP_INTR: u32 = 22;
    pub const NPSS_TO_MCU_BOD_INTR: u32 = 23;
    pub const NPSS_TO_MCU_BUTTON_INTR: u32 = 24;
    pub const NPSS_TO_MCU_SDC_INTR: u32 = 25;
    pub const NPSS_TO_MCU_WIRELESS_INTR: u32 = 26;
    pub const NPSS_MCU_INTR: u32 = 27;
    pub const MCU_CAL_ALARM: u32 = 28;
    pub const MCU_CAL_RTC: u32 = 29;
    // 30 RESERVED
    pub const GPDMA: u32 = 31;
    // 32 RESERVED
    pub const UDMA0: u32 = 33;
    pub const CT: u32 = 34;
    pub const HIF0: u32 = 35;
    pub const HIF1: u32 = 36;
    pub const SIO: u32 = 37;
    pub const USART0: u32 = 38;
    pub const UART1: u32 = 39;
    // 40 RESERVED
    pub const EGPIO_WAKEUP: u32 = 41;
    pub const I2C0: u32 = 42;
    // 43 RESERVED
    pub const SSISlave: u32 = 44;
    // 45 RESERVED
    pub const GSPI0: u32 = 46;
    pub const SSI0: u32 = 47;
    pub const MCPWM: u32 = 48;
    pub const QEI: u32 = 49;
    pub const EGPIO_GROUP_0: u32 = 50;
    pub const EGPIO_GROUP_1: u32 = 51;
    pub const EGPIO_PIN_0: u32 = 52;
    pub const EGPIO_PIN_1: u32 = 53;
    pub const EGPIO_PIN_2: u32 = 54;
    pub const EGPIO_PIN_3: u32 = 55;
    pub const EGPIO_PIN_4: u32 = 56;
    pub const EGPIO_PIN_5: u32 = 57;
    pub const EGPIO_PIN_6: u32 = 58;
    pub const EGPIO_PIN_7: u32 = 59;
    pub const QSPI: u32 = 60;
    pub const I2C1: u32 = 61;
    pub const ETHERNET: u32 = 62;
    pub const MVP_WAKEUP: u32 = 63;
    pub const I2S0: u32 = 64;
    // 65 RESERVED
    pub const CAN1: u32 = 66;
    // 67 RESERVED
    pub const SDMEM: u32 = 68;
    pub const PLL_CLOCK: u32 = 69;
    // 70 RESERVED
    pub const CCI: u32 = 71;
    pub const FPU: u32 = 72;
    pub const USB: u32 = 73;
    pub const TASS_P2P: u32 = 74;
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESERVED_LINES: [i16; 10] = [1, 9, 30, 32, 40, 43, 45, 65, 67, 70];

    #[test]
    fn golden_numbers() {
        assert_eq!(IRQn::Reset as i16, -15);
        assert_eq!(IRQn::NonMaskableInt as i16, -14);
        assert_eq!(IRQn::HardFault as i16, -13);
        assert_eq!(IRQn::SVCall as i16, -5);
        assert_eq!(IRQn::PendSV as i16, -2);
        assert_eq!(IRQn::SysTick as i16, -1);
        assert_eq!(IRQn::TIMER0 as i16, 2);
        assert_eq!(IRQn::I2C0 as i16, 42);
        assert_eq!(IRQn::GPDMA as i16, 31);
        assert_eq!(IRQn::SDMEM as i16, 68);
        assert_eq!(IRQn::TASS_P2P as i16, 74);
    }

    #[test]
    fn table_is_sorted_and_gaps_are_kept() {
        assert!(IRQn::ALL.windows(2).all(|pair| pair[0] < pair[1]));
        for line in RESERVED_LINES {
            assert_eq!(
                IRQn::try_from(line),
                Err(LookupError::ReservedInterrupt(line))
            );
        }
        let peripheral_lines = IRQn::ALL.iter().filter(|irq| !irq.is_core_exception()).count();
        assert_eq!(peripheral_lines + RESERVED_LINES.len(), EXT_IRQ_COUNT);
    }

    #[test]
    fn core_exception_slots() {
        for number in [-9i16, -8, -7, -6, -3] {
            assert_eq!(
                IRQn::try_from(number),
                Err(LookupError::ReservedInterrupt(number))
            );
        }
        assert_eq!(IRQn::try_from(-16i16), Err(LookupError::UnknownInterrupt));
        assert_eq!(IRQn::try_from(75i16), Err(LookupError::UnknownInterrupt));
    }

    #[test]
    fn numbers_round_trip() {
        for &irq in IRQn::ALL {
            assert_eq!(IRQn::try_from(irq.number()), Ok(irq));
        }
    }

    #[test]
    fn names() {
        assert_eq!(IRQn::Reset.name(), "Reset_IRQn");
        assert_eq!(IRQn::TASS_P2P.name(), "TASS_P2P_IRQn");
        assert_eq!(IRQn::from_name("TIMER0_IRQn"), Ok(IRQn::TIMER0));
        assert_eq!(IRQn::from_name("TIMER0"), Ok(IRQn::TIMER0));
        assert_eq!(IRQn::from_name("HardFault_IRQn"), Ok(IRQn::HardFault));
        assert_eq!(IRQn::from_name("SYSRTC_IRQn"), Ok(IRQn::NPSS_TO_MCU_CMP_RF_WKP_INTR));
        assert_eq!(IRQn::from_name("MVP"), Ok(IRQn::ETHERNET));
        assert_eq!(IRQn::from_name("TIMER9"), Err(LookupError::UnknownInterrupt));
    }

    #[test]
    fn nvic_and_vector_numbers() {
        assert_eq!(IRQn::Reset.nvic_number(), None);
        assert_eq!(IRQn::Reset.vector_index(), 1);
        assert_eq!(IRQn::SysTick.vector_index(), 15);
        assert_eq!(IRQn::VAD_INTR_PING.vector_index(), 16);
        assert_eq!(IRQn::TASS_P2P.vector_index(), VECTOR_TABLE_ENTRIES - 1);
        assert_eq!(IRQn::USB.nvic_number(), Some(nvic::USB));
    }

    #[test]
    fn nvic_constants_match_enum() {
        let pairs = [
            (nvic::VAD_INTR_PING, IRQn::VAD_INTR_PING),
            (nvic::TIMER3, IRQn::TIMER3),
            (nvic::UDMA1, IRQn::UDMA1),
            (nvic::NPSS_TO_MCU_CMP_RF_WKP_INTR, IRQn::SYSRTC),
            (nvic::MCU_CAL_RTC, IRQn::MCU_CAL_RTC),
            (nvic::GPDMA, IRQn::GPDMA),
            (nvic::SSISlave, IRQn::SSISlave),
            (nvic::EGPIO_PIN_7, IRQn::EGPIO_PIN_7),
            (nvic::ETHERNET, IRQn::MVP),
            (nvic::CAN1, IRQn::CAN1),
            (nvic::CCI, IRQn::CCI),
            (nvic::TASS_P2P, IRQn::TASS_P2P),
        ];
        for (number, irq) in pairs {
            assert_eq!(irq.nvic_number(), Some(number), "{}", irq);
        }
    }
}
