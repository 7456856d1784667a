// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Whole-map checks through the public API.

use si91x::interrupts::IRQn;
use si91x::memory_map::{self, Access, Layout, RegisterInfo};
use si91x::LookupError;

const GOLDEN_BASES: &[(&str, usize)] = &[
    ("USART0", 0x4400_0000),
    ("UART1", 0x4400_0100),
    ("ULP_UART", 0x2404_1800),
    ("I2C0", 0x4401_0000),
    ("I2C1", 0x4704_0000),
    ("I2C2", 0x2404_0000),
    ("SSI0", 0x4402_0000),
    ("SSI_SLAVE", 0x4501_0000),
    ("SSI2", 0x2404_0800),
    ("I2S0", 0x4705_0000),
    ("I2S1", 0x2404_0400),
    ("CAN1", 0x4507_0000),
    ("QSPI", 0x1200_0000),
    ("QSPI2", 0x1204_0000),
    ("GPDMA_G", 0x2108_0000),
    ("GPDMA_C", 0x2108_1004),
    ("UDMA0", 0x4403_0000),
    ("UDMA1", 0x2407_8000),
    ("EGPIO", 0x4613_0000),
    ("EGPIO1", 0x2404_c000),
    ("TIMERS", 0x2404_2000),
    ("CT0", 0x4506_0000),
    ("CT1", 0x4506_0100),
    ("CT2", 0x4506_1000),
    ("CT3", 0x4506_1100),
    ("CT_MUX_REG", 0x4506_f000),
    ("MCPWM", 0x4707_0000),
    ("MCU_AON", 0x2404_8000),
    ("MCU_FSM", 0x2404_8100),
    ("TIME_PERIOD", 0x2404_8200),
    ("RTC", 0x2404_821c),
    ("MCU_WDT", 0x2404_8300),
    ("BATT_FF", 0x2404_8400),
    ("MCU_RET", 0x2404_8600),
    ("NPSS_INTR", 0x1208_0000),
    ("M4CLK", 0x4600_0000),
    ("ULPCLK", 0x2404_1400),
    ("MISC_CONFIG", 0x4600_8000),
    ("EFUSE", 0x4600_c000),
    ("CRC", 0x4508_0000),
    ("HWRNG", 0x4509_0000),
    ("AUX_ADC_DAC_COMP", 0x2404_3800),
    ("VAD", 0x2404_3000),
    ("ETHERNET", 0x2024_0000),
    ("USB", 0x2021_0000),
    ("SDMEM", 0x2030_0000),
];

/// `PERIPH.REG.FIELD` paths as the vendor headers spell them, with the
/// field's bit offset and width.
const GOLDEN_FIELDS: &[(&str, u32, u32)] = &[
    ("TIME_PERIOD.MCU_CAL_RC_TIMEPERIOD_READ.TIMEPERIOD_RC", 0, 25),
    ("TIME_PERIOD.MCU_CAL_REF_CLK_TIEMPERIOD_REG.TIMEPERIOD_REF_CLK", 0, 24),
    ("RTC.MCU_CAL_READ_TIME_LSB.DAYS_COUNT", 27, 5),
    ("RTC.MCU_CAL_PROG_TIME_1.PROG_HOUR", 22, 5),
    ("RTC.MCU_CAL_ALARM_PROG_1.PROG_ALARM_MSEC", 0, 10),
    ("I2C0.IC_SS_SCL_HCNT.IC_SS_SCL_HCNT", 0, 16),
    ("I2C0.IC_CLR_TX_ABRT.CLR_TX_ABRT", 0, 1),
    ("I2C0.IC_FS_SPKLEN.IC_FS_SPKLEN", 0, 8),
    ("SSI0.TXFTLR.TFT", 0, 5),
    ("SSI0.DMARDLR.DMARDL", 0, 5),
    ("USART0.DLF.DLF", 0, 6),
    ("MCPWM.PWM_TIME_PRD_PARAM_REG_CH2.PWM_TIME_PRD_POST_SCALAR_VALUE_CH2", 8, 4),
    ("MCPWM.PWM_TIME_PRD_WR_REG_CH3.PWM_TIME_PRD_REG_WR_VALUE_CH3", 0, 16),
    ("EGPIO.PORT_CONFIG[0].PORT_MASKED_LOAD_REG.PORT_MASKED_LOAD", 0, 16),
    ("EGPIO.PORT_CONFIG[3].PORT_READ_REG.PORT_READ", 0, 16),
    ("CT0.CT_HALT_COUNTER_EVENT_SEL.RESUME_FROM_HALT_COUNTER_1", 22, 1),
    ("M4CLK.PLL_STAT_REG.MODEMPLL_LOCK", 4, 1),
    ("M4CLK.CLK_CONFIG_REG3.MCU_CLKOUT_SEL", 8, 4),
    ("M4CLK.CLK_CONFIG_REG5.M4_SOC_CLK_SEL", 19, 4),
    ("M4CLK.CLK_CONFIG_REG6.USB_PHY_CLK_DIV_FAC", 11, 2),
    ("ULPCLK.ULP_SOC_GPIO_MODE_REG[5].ULP_SOC_GPIO_MODE_REG", 0, 3),
    ("SDMEM.SMIH_HOST_CONTROL_2_REGISTER._1_8V_SIGNALING_ENABLE", 3, 1),
];

const GOLDEN_IRQS: &[(&str, i16)] = &[
    ("Reset", -15),
    ("NonMaskableInt", -14),
    ("HardFault", -13),
    ("SVCall", -5),
    ("PendSV", -2),
    ("SysTick", -1),
    ("VAD_INTR_PING", 0),
    ("TIMER0", 2),
    ("TIMER3", 5),
    ("ULPSS_UART", 12),
    ("NPSS_TO_MCU_WDT_INTR", 20),
    ("MCU_CAL_RTC", 29),
    ("GPDMA", 31),
    ("UDMA0", 33),
    ("USART0", 38),
    ("I2C0", 42),
    ("SSI0", 47),
    ("EGPIO_PIN_7", 59),
    ("QSPI", 60),
    ("ETHERNET", 62),
    ("CAN1", 66),
    ("SDMEM", 68),
    ("USB", 73),
    ("TASS_P2P", 74),
];

/// Every register list of a layout with the byte range it may occupy.
fn register_groups(layout: &'static Layout) -> Vec<(&'static [RegisterInfo], usize)> {
    let mut groups = vec![(layout.registers, layout.size)];
    groups.extend(layout.clusters.iter().map(|c| (c.registers, c.stride)));
    groups
}

#[test]
fn base_addresses_match_the_datasheet() {
    assert_eq!(memory_map::peripherals().len(), GOLDEN_BASES.len());
    for &(name, base) in GOLDEN_BASES {
        assert_eq!(memory_map::base_address(name), Ok(base), "{}", name);
    }
    assert_eq!(
        memory_map::base_address("UART7"),
        Err(LookupError::UnknownPeripheral)
    );
}

#[test]
fn interrupt_numbers_match_the_datasheet() {
    for &(name, number) in GOLDEN_IRQS {
        let irq = IRQn::from_name(name).unwrap();
        assert_eq!(irq.number(), number, "{}", name);
        assert_eq!(IRQn::try_from(number), Ok(irq));
    }
    // Gaps stay gaps.
    for reserved in [-9i16, -3, 1, 9, 30, 32, 40, 43, 45, 65, 67, 70] {
        assert_eq!(
            IRQn::try_from(reserved),
            Err(LookupError::ReservedInterrupt(reserved))
        );
    }
    assert_eq!(IRQn::try_from(75i16), Err(LookupError::UnknownInterrupt));
    assert_eq!(IRQn::from_name("TIMER0_IRQn"), Ok(IRQn::TIMER0));
}

#[test]
fn i2c0_enable_register() {
    let i2c0 = memory_map::peripheral("I2C0").unwrap();
    let enable = i2c0.register("IC_ENABLE").unwrap();
    assert_eq!((enable.offset, enable.width), (0x6c, 32));
    assert_eq!(i2c0.register_address("IC_ENABLE"), Ok(0x4401_006c));

    let en = enable.field("EN").unwrap();
    let abort = enable.field("ABORT").unwrap();
    assert_eq!((en.offset, en.width, en.access), (0, 1, Access::RW));
    assert_eq!((abort.offset, abort.width, abort.access.tag()), (1, 1, "RW"));

    let location = memory_map::resolve("I2C0.IC_ENABLE.ABORT").unwrap();
    assert_eq!(location.address, 0x4401_006c);
    assert_eq!(location.bits(), (1, 1));
}

#[test]
fn gpdma_channel_block() {
    let gpdma_c = memory_map::peripheral("GPDMA_C").unwrap();
    assert_eq!(gpdma_c.size(), 0x800);
    let channels = gpdma_c.cluster("CHANNEL_CONFIG").unwrap();
    assert_eq!((channels.offset, channels.count, channels.stride), (0, 8, 0x100));
    assert_eq!(channels.size(), gpdma_c.size());

    let location =
        memory_map::resolve("GPDMA_C.CHANNEL_CONFIG[3].CHANNEL_CTRL_REG_CHNL.DMA_BLK_SIZE")
            .unwrap();
    assert_eq!(location.address, 0x2108_1004 + 0x300 + 0x0c);
    assert_eq!(location.offset(), 0x30c);
    assert_eq!(location.cluster.map(|(_, index)| index), Some(3));

    assert_eq!(
        memory_map::resolve("GPDMA_C.CHANNEL_CONFIG[8].SRC_ADDR_REG_CHNL").map(|l| l.address),
        Err(LookupError::IndexOutOfRange { index: 8, count: 8 })
    );
    assert_eq!(
        memory_map::resolve("GPDMA_C.CHANNEL_CONFIG.SRC_ADDR_REG_CHNL").map(|l| l.address),
        Err(LookupError::MissingIndex)
    );
}

#[test]
fn fields_fit_and_do_not_overlap() {
    for peripheral in memory_map::peripherals() {
        for (registers, _) in register_groups(peripheral.layout) {
            for register in registers {
                let mut claimed = 0u64;
                for field in register.fields {
                    assert!(field.width > 0, "{}.{}", register.name, field.name);
                    assert!(
                        field.offset + field.width <= register.width,
                        "{}.{} exceeds the register",
                        register.name,
                        field.name
                    );
                    assert_eq!(
                        claimed & field.mask(),
                        0,
                        "{}.{} overlaps",
                        register.name,
                        field.name
                    );
                    claimed |= field.mask();
                }
                assert_eq!(claimed, register.defined_mask());
                assert_eq!(
                    register.defined_mask() | register.reserved_mask(),
                    register.value_mask()
                );
                // A read-only register cannot carry writable fields and the
                // other way round.
                for field in register.fields {
                    match register.access {
                        Access::ReadOnly => assert!(!field.access.is_writable()),
                        Access::WriteOnly => assert!(!field.access.is_readable()),
                        Access::ReadWrite => {}
                    }
                }
            }
        }
    }
}

#[test]
fn registers_stay_inside_their_block() {
    for peripheral in memory_map::peripherals() {
        let layout = peripheral.layout;
        for (registers, limit) in register_groups(layout) {
            for register in registers {
                assert!(matches!(register.width, 8 | 16 | 32 | 64));
                assert_eq!(register.offset % register.size(), 0, "{}", register.name);
                let last = register.element_offset(register.count - 1).unwrap();
                assert!(
                    last + register.size() <= limit,
                    "{}.{} past the end",
                    peripheral.name,
                    register.name
                );
            }
        }
        for cluster in layout.clusters {
            assert!(cluster.offset + cluster.size() <= layout.size);
        }
    }
}

#[test]
fn distinct_registers_do_not_overlap() {
    for peripheral in memory_map::peripherals() {
        for (registers, _) in register_groups(peripheral.layout) {
            for (i, a) in registers.iter().enumerate() {
                for b in &registers[i + 1..] {
                    assert_ne!(a.name, b.name, "{}", peripheral.name);
                    // Aliases share an offset and a width.
                    if a.offset == b.offset {
                        assert_eq!(a.width, b.width, "{}.{}", peripheral.name, a.name);
                        continue;
                    }
                    let a_end = a.offset + a.count * a.stride;
                    let b_end = b.offset + b.count * b.stride;
                    assert!(
                        a_end <= b.offset || b_end <= a.offset,
                        "{}.{} overlaps {}",
                        peripheral.name,
                        a.name,
                        b.name
                    );
                }
            }
        }
    }
}

#[test]
fn peripherals_do_not_overlap() {
    let mut ranges: Vec<(usize, usize, &str)> = memory_map::peripherals()
        .iter()
        .map(|p| (p.base, p.end(), p.name))
        .collect();
    ranges.sort_unstable();
    for pair in ranges.windows(2) {
        assert!(pair[0].1 <= pair[1].0, "{} runs into {}", pair[0].2, pair[1].2);
    }
    for peripheral in memory_map::peripherals() {
        assert_eq!(peripheral.base % 4, 0, "{}", peripheral.name);
        assert_eq!(
            memory_map::peripheral_at(peripheral.base).map(|p| p.name),
            Some(peripheral.name)
        );
        assert_eq!(
            memory_map::peripheral_at(peripheral.end() - 1).map(|p| p.name),
            Some(peripheral.name)
        );
    }
}

#[test]
fn vendor_field_names_resolve() {
    for &(path, offset, width) in GOLDEN_FIELDS {
        let location = memory_map::resolve(path).unwrap_or_else(|e| panic!("{}: {:?}", path, e));
        assert!(location.field.is_some(), "{}", path);
        assert_eq!(location.bits(), (offset, width), "{}", path);
    }
}

#[test]
fn calendar_follows_the_calibration_block() {
    let time_period = memory_map::peripheral("TIME_PERIOD").unwrap();
    let rtc = memory_map::peripheral("RTC").unwrap();
    assert_eq!(time_period.end(), rtc.base);
    assert_eq!(
        memory_map::resolve("TIME_PERIOD.MCU_CAL_RC_TIMEPERIOD_READ")
            .unwrap()
            .address,
        0x2404_8214
    );
    assert_eq!(
        memory_map::resolve("RTC.MCU_CAL_READ_TIME_LSB").unwrap().address,
        0x2404_8234
    );
    // The temperature sensor block at 0x2404_8500 is not modelled and must
    // not be claimed by the calendar.
    for address in [0x2404_8500, 0x2404_8504, 0x2404_8508] {
        assert_eq!(memory_map::peripheral_at(address).map(|p| p.name), None);
    }
}

#[test]
fn peripheral_interrupts_are_nvic_lines() {
    for peripheral in memory_map::peripherals() {
        for irq in peripheral.interrupts {
            assert!(irq.nvic_number().is_some(), "{}", peripheral.name);
        }
    }
    let rtc = memory_map::peripheral("RTC").unwrap();
    assert_eq!(rtc.interrupts, [IRQn::MCU_CAL_ALARM, IRQn::MCU_CAL_RTC]);
}

#[test]
fn uart_aliases_share_offset_zero() {
    let uart1 = memory_map::peripheral("UART1").unwrap();
    let modes: Vec<(usize, Access)> = ["RBR", "THR", "DLL"]
        .iter()
        .map(|name| uart1.register(name).unwrap())
        .map(|register| (register.offset, register.access))
        .collect();
    assert_eq!(
        modes,
        [(0, Access::RO), (0, Access::WO), (0, Access::RW)]
    );
    assert_eq!(
        memory_map::resolve("UART1.THR").unwrap().address,
        0x4400_0100
    );
}

#[test]
fn mixed_width_blocks() {
    let sdmem = memory_map::peripheral("SDMEM").unwrap();
    let caps = sdmem.register("SMIH_CAPABILITIES_REGISTER").unwrap();
    assert_eq!((caps.offset, caps.width, caps.access), (0x40, 64, Access::RO));

    let can1 = memory_map::peripheral("CAN1").unwrap();
    let status = can1.register("CAN_SR").unwrap();
    assert_eq!((status.offset, status.width), (0x02, 8));
    assert_eq!(can1.register("CAN_ACR").unwrap().width, 32);
}
