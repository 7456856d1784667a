// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Clock and reset control of the ULP subsystem (ULPCLK).
//!
//! Each ULP peripheral has a `*_CLK_GEN_REG` selecting its source and
//! divider. After changing a source, software polls the matching
//! `CLOCK_SWITCHED_*` bit of `CLOCK_STAUS_REG` before using the block.

use core::mem::{offset_of, size_of};

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::Layout;

/// ULP SoC GPIOs with their own mode register.
pub const ULPCLK_PARAM_SOC_GPIOS: usize = 16;

register_structs! {
    pub UlpClkRegisters {
        (0x000 => pub ulp_misc_soft_set_reg: ReadWrite<u32, ULP_MISC_SOFT_SET_REG::Register>),
        (0x004 => _reserved0),
        (0x008 => pub ulp_ta_peri_reset_reg: ReadWrite<u32, ULP_TA_PERI_RESET_REG::Register>),
        (0x00c => _reserved1),
        (0x014 => pub ulp_ta_clk_gen_reg: ReadWrite<u32, ULP_TA_CLK_GEN_REG::Register>),
        (0x018 => pub ulp_i2c_ssi_clk_gen_reg: ReadWrite<u32, ULP_I2C_SSI_CLK_GEN_REG::Register>),
        (0x01c => pub ulp_i2s_clk_gen_reg: ReadWrite<u32, ULP_I2S_CLK_GEN_REG::Register>),
        (0x020 => pub ulp_uart_clk_gen_reg: ReadWrite<u32, ULP_UART_CLK_GEN_REG::Register>),
        (0x024 => pub m4lp_ctrl_reg: ReadWrite<u32, M4LP_CTRL_REG::Register>),
        (0x028 => pub slp_sensor_clk_reg: ReadWrite<u32, SLP_SENSOR_CLK_REG::Register>),
        (0x02c => pub ulp_timer_clk_gen_reg: ReadWrite<u32, ULP_TIMER_CLK_GEN_REG::Register>),
        (0x030 => pub ulp_auxadc_clk_gen_reg: ReadWrite<u32, ULP_AUXADC_CLK_GEN_REG::Register>),
        (0x034 => pub ulp_touch_clk_gen_reg: ReadWrite<u32, ULP_TOUCH_CLK_GEN_REG::Register>),
        (0x038 => pub ulp_vad_clk_gen_reg: ReadWrite<u32, ULP_VAD_CLK_GEN_REG::Register>),
        (0x03c => pub ulp_i2spll_bypass_reg: ReadWrite<u32, ULP_I2SPLL_BYPASS_REG::Register>),
        (0x040 => pub ulp_soc_gpio_mode_reg: [ReadWrite<u32, ULP_SOC_GPIO_MODE_REG::Register>; ULPCLK_PARAM_SOC_GPIOS]),
        (0x080 => pub clock_staus_reg: ReadOnly<u32, CLOCK_STAUS_REG::Register>),
        (0x084 => _reserved2),
        (0x0a0 => pub ulp_dyn_clk_ctrl_disable: ReadWrite<u32, ULP_DYN_CLK_CTRL_DISABLE::Register>),
        (0x0a4 => @END),
    }
}

register_bitfields![u32,
    pub ULP_MISC_SOFT_SET_REG [
        PCM_ENABLE_b OFFSET(0) NUMBITS(1) [],
        PCM_FSYNC_START_b OFFSET(1) NUMBITS(1) [],
        IR_PCLK_EN_b OFFSET(4) NUMBITS(1) [],
        PCLK_ENABLE_I2C_b OFFSET(5) NUMBITS(1) [],
        CLK_ENABLE_I2S_b OFFSET(6) NUMBITS(1) [],
        PCLK_ENABLE_SSI_MASTER_b OFFSET(7) NUMBITS(1) [],
        SCLK_ENABLE_SSI_MASTER_b OFFSET(8) NUMBITS(1) [],
        PCLK_ENABLE_UART_b OFFSET(9) NUMBITS(1) [],
        SCLK_ENABLE_UART_b OFFSET(10) NUMBITS(1) [],
        FIM_PCLK_ENABLE_b OFFSET(11) NUMBITS(1) [],
        VAD_PCLK_ENABLE_b OFFSET(12) NUMBITS(1) [],
        CLK_ENABLE_TIMER_b OFFSET(13) NUMBITS(1) [],
        EGPIO_CLK_EN_b OFFSET(14) NUMBITS(1) [],
        REG_ACCESS_SPI_CLK_EN_b OFFSET(15) NUMBITS(1) [],
        FIM_CLK_EN_b OFFSET(16) NUMBITS(1) [],
        VAD_CLK_EN_b OFFSET(17) NUMBITS(1) [],
        CLK_ENABLE_ULP_MEMORIES_b OFFSET(18) NUMBITS(1) [],
        EGPIO_PCLK_DYN_CTRL_DISABLE_b OFFSET(19) NUMBITS(1) [],
        EGPIO_PCLK_ENABLE_b OFFSET(20) NUMBITS(1) [],
        TIMER_PCLK_EN_b OFFSET(21) NUMBITS(1) [],
        AUX_ULP_EXT_TRIG_1_SEL_b OFFSET(22) NUMBITS(1) [],
        AUX_ULP_EXT_TRIG_2_SEL_b OFFSET(23) NUMBITS(1) [],
        AUX_SOC_EXT_TRIG_1_SEL_b OFFSET(24) NUMBITS(1) [],
        AUX_SOC_EXT_TRIG_2_SEL_b OFFSET(25) NUMBITS(1) [],
        ULPSS_M4SS_SLV_SEL_b OFFSET(26) NUMBITS(1) [],
        ULPSS_TASS_QUASI_SYNC_b OFFSET(27) NUMBITS(1) [],
        FIM_AHB_CLK_ENABLE_b OFFSET(30) NUMBITS(1) [],
        TOUCH_SENSOR_PCLK_ENABLE_b OFFSET(31) NUMBITS(1) []
    ],
    pub ULP_TA_PERI_RESET_REG [
        COMP1_OUTPUT_CNTRL_b OFFSET(0) NUMBITS(1) [],
        COMP2_OUTPUT_CNTRL_b OFFSET(1) NUMBITS(1) []
    ],
    pub ULP_TA_CLK_GEN_REG [
        ULP2M4_A2A_BRDG_CLK_EN_b OFFSET(0) NUMBITS(1) [],
        ULP_PROC_CLK_SEL OFFSET(1) NUMBITS(4) [
            RefClock = 0,
            UlpMhzRc = 1,
            Rc32Mhz = 2,
            Doubler = 3,
            Soc = 4,
            Xtal32Khz = 5,
            Rc32Khz = 6,
            Ro32Khz = 7
        ],
        ULP_PROC_CLK_DIV_FACTOR OFFSET(5) NUMBITS(8) []
    ],
    pub ULP_I2C_SSI_CLK_GEN_REG [
        ULP_I2C_CLK_EN_b OFFSET(0) NUMBITS(1) [],
        ULP_SSI_CLK_EN_b OFFSET(1) NUMBITS(1) [],
        ULP_SSI_CLK_DIV_FACTOR OFFSET(2) NUMBITS(7) [],
        ULP_SSI_CLK_SEL OFFSET(9) NUMBITS(3) []
    ],
    pub ULP_I2S_CLK_GEN_REG [
        ULP_I2S_CLK_EN_b OFFSET(0) NUMBITS(1) [],
        ULP_I2S_CLK_SEL_b OFFSET(1) NUMBITS(4) [],
        ULP_I2S_MASTER_SLAVE_MODE_b OFFSET(5) NUMBITS(1) [
            Slave = 0,
            Master = 1
        ],
        ULP_I2S_CLKDIV_FACTOR OFFSET(6) NUMBITS(8) [],
        ULP_I2S_PCLK_EN_b OFFSET(14) NUMBITS(1) [],
        ULP_I2S_SCLK_DYN_CTRL_DISABLE_b OFFSET(15) NUMBITS(1) [],
        ULP_I2S_PCLK_DYN_CTRL_DISABLE_b OFFSET(16) NUMBITS(1) []
    ],
    pub ULP_UART_CLK_GEN_REG [
        ULP_UART_FRAC_CLK_SEL_b OFFSET(0) NUMBITS(1) [],
        ULP_UART_CLK_SEL OFFSET(1) NUMBITS(3) [],
        ULP_UART_CLKDIV_FACTOR OFFSET(4) NUMBITS(3) []
    ],
    pub M4LP_CTRL_REG [
        ULP_M4_CORE_CLK_ENABLE_b OFFSET(0) NUMBITS(1) []
    ],
    pub SLP_SENSOR_CLK_REG [
        ENABLE_b OFFSET(0) NUMBITS(1) [],
        DIVISON_FACTOR OFFSET(1) NUMBITS(8) []
    ],
    pub ULP_TIMER_CLK_GEN_REG [
        ULP_TIMER_IN_SYNC_b OFFSET(0) NUMBITS(1) [],
        ULP_TIMER_CLK_SEL OFFSET(1) NUMBITS(3) []
    ],
    pub ULP_AUXADC_CLK_GEN_REG [
        ULP_AUX_CLK_EN_b OFFSET(0) NUMBITS(1) [],
        ULP_AUX_CLK_SEL OFFSET(1) NUMBITS(4) []
    ],
    pub ULP_TOUCH_CLK_GEN_REG [
        ULP_TOUCH_CLK_EN_b OFFSET(0) NUMBITS(1) [],
        ULP_TOUCH_CLK_SEL OFFSET(1) NUMBITS(3) [],
        ULP_TOUCH_CLKDIV_FACTOR OFFSET(4) NUMBITS(8) []
    ],
    pub ULP_VAD_CLK_GEN_REG [
        ULP_VAD_CLK_EN_b OFFSET(0) NUMBITS(1) [],
        ULP_VAD_CLK_SEL OFFSET(1) NUMBITS(3) [],
        ULP_VAD_FCLK_EN OFFSET(4) NUMBITS(1) [],
        ULP_VAD_FCLK_SEL OFFSET(5) NUMBITS(4) [],
        ULP_VAD_CLKDIV_FACTOR OFFSET(9) NUMBITS(8) []
    ],
    pub ULP_I2SPLL_BYPASS_REG [
        I2SPLL_BYPASS_b OFFSET(0) NUMBITS(1) []
    ],
    pub ULP_SOC_GPIO_MODE_REG [
        ULP_SOC_GPIO_MODE_REG OFFSET(0) NUMBITS(3) []
    ],
    pub CLOCK_STAUS_REG [
        CLOCK_SWITCHED_UART_CLK_b OFFSET(0) NUMBITS(1) [],
        CLOCK_SWITCHED_I2S_CLK_b OFFSET(1) NUMBITS(1) [],
        CLOCK_SWITCHED_SSI_b OFFSET(2) NUMBITS(1) [],
        CLOCK_SWITCHED_PROC_CLK_b OFFSET(3) NUMBITS(1) [],
        CLOCK_SWITCHED_TIMER_b OFFSET(4) NUMBITS(1) [],
        CLOCK_SWITCHED_VAD_b OFFSET(5) NUMBITS(1) [],
        CLOCK_SWITCHED_FCLK_VAD_b OFFSET(6) NUMBITS(1) [],
        CLOCK_SWITCHED_SCLK_VAD_b OFFSET(7) NUMBITS(1) [],
        CLOCK_SWITCHED_AUXADC_b OFFSET(8) NUMBITS(1) [],
        CLOCK_SWITCHED_TOUCH_SENSOR_b OFFSET(9) NUMBITS(1) []
    ],
    pub ULP_DYN_CLK_CTRL_DISABLE [
        I2C_PCLK_DYN_CTRL_DISABLE_b OFFSET(0) NUMBITS(1) [],
        I2S_CLK_DYN_CTRL_DISABLE_b OFFSET(1) NUMBITS(1) [],
        SSI_MST_PCLK_DYN_CTRL_DISABLE_b OFFSET(2) NUMBITS(1) [],
        SSI_MST_SCLK_DYN_CTRL_DISABLE_b OFFSET(3) NUMBITS(1) [],
        UART_CLK_DYN_CTRL_DISABLE_b OFFSET(4) NUMBITS(1) [],
        UART_SCLK_DYN_CTRL_DISABLE_b OFFSET(5) NUMBITS(1) [],
        TIMER_PCLK_DYN_CTRL_DISABLE_b OFFSET(6) NUMBITS(1) [],
        TIMER_SCLK_DYN_CTRL_DISABLE_b OFFSET(7) NUMBITS(1) [],
        REG_ACCESS_SPI_CLK_DYN_CTRL_DISABLE_b OFFSET(8) NUMBITS(1) [],
        FIM_CLK_DYN_CTRL_DISABLE_b OFFSET(9) NUMBITS(1) [],
        VAD_CLK_DYN_CTRL_DISABLE_b OFFSET(10) NUMBITS(1) [],
        AUX_PCLK_EN_b OFFSET(11) NUMBITS(1) [],
        AUX_CLK_EN_b OFFSET(12) NUMBITS(1) [],
        AUX_MEM_EN_b OFFSET(13) NUMBITS(1) [],
        AUX_PCLK_DYN_CTRL_DISABLE_b OFFSET(14) NUMBITS(1) [],
        AUX_CLK_DYN_CTRL_DISABLE_b OFFSET(15) NUMBITS(1) [],
        AUX_CLK_MEM_DYN_CTRL_DISABLE_b OFFSET(16) NUMBITS(1) [],
        UDMA_CLK_ENABLE_b OFFSET(17) NUMBITS(1) [],
        IR_CLK_ENABLE_b OFFSET(18) NUMBITS(1) [],
        IR_CLK_DYN_CTRL_DISABLE_b OFFSET(19) NUMBITS(1) []
    ]
];

const _: () = assert!(offset_of!(UlpClkRegisters, ulp_ta_clk_gen_reg) == 0x14);
const _: () = assert!(offset_of!(UlpClkRegisters, m4lp_ctrl_reg) == 0x24);
const _: () = assert!(offset_of!(UlpClkRegisters, ulp_i2spll_bypass_reg) == 0x3c);
const _: () = assert!(offset_of!(UlpClkRegisters, ulp_dyn_clk_ctrl_disable) == 0xa0);
const _: () = assert!(size_of::<UlpClkRegisters>() == 0xa4);

pub static LAYOUT: Layout = layout!(UlpClkRegisters {
    ulp_misc_soft_set_reg => "ULP_MISC_SOFT_SET_REG": u32, RW, ULP_MISC_SOFT_SET_REG {
        PCM_ENABLE_b: RW, PCM_FSYNC_START_b: RW, IR_PCLK_EN_b: RW, PCLK_ENABLE_I2C_b: RW,
        CLK_ENABLE_I2S_b: RW, PCLK_ENABLE_SSI_MASTER_b: RW, SCLK_ENABLE_SSI_MASTER_b: RW,
        PCLK_ENABLE_UART_b: RW, SCLK_ENABLE_UART_b: RW, FIM_PCLK_ENABLE_b: RW, VAD_PCLK_ENABLE_b: RW,
        CLK_ENABLE_TIMER_b: RW, EGPIO_CLK_EN_b: RW, REG_ACCESS_SPI_CLK_EN_b: RW, FIM_CLK_EN_b: RW,
        VAD_CLK_EN_b: RW, CLK_ENABLE_ULP_MEMORIES_b: RW, EGPIO_PCLK_DYN_CTRL_DISABLE_b: RW,
        EGPIO_PCLK_ENABLE_b: RW, TIMER_PCLK_EN_b: RW, AUX_ULP_EXT_TRIG_1_SEL_b: RW,
        AUX_ULP_EXT_TRIG_2_SEL_b: RW, AUX_SOC_EXT_TRIG_1_SEL_b: RW, AUX_SOC_EXT_TRIG_2_SEL_b: RW,
        ULPSS_M4SS_SLV_SEL_b: RW, ULPSS_TASS_QUASI_SYNC_b: RW, FIM_AHB_CLK_ENABLE_b: RW,
        TOUCH_SENSOR_PCLK_ENABLE_b: RW
    };
    ulp_ta_peri_reset_reg => "ULP_TA_PERI_RESET_REG": u32, RW, ULP_TA_PERI_RESET_REG {
        COMP1_OUTPUT_CNTRL_b: RW, COMP2_OUTPUT_CNTRL_b: RW
    };
    ulp_ta_clk_gen_reg => "ULP_TA_CLK_GEN_REG": u32, RW, ULP_TA_CLK_GEN_REG {
        ULP2M4_A2A_BRDG_CLK_EN_b: RW, ULP_PROC_CLK_SEL: RW, ULP_PROC_CLK_DIV_FACTOR: RW
    };
    ulp_i2c_ssi_clk_gen_reg => "ULP_I2C_SSI_CLK_GEN_REG": u32, RW, ULP_I2C_SSI_CLK_GEN_REG {
        ULP_I2C_CLK_EN_b: RW, ULP_SSI_CLK_EN_b: RW, ULP_SSI_CLK_DIV_FACTOR: RW, ULP_SSI_CLK_SEL: RW
    };
    ulp_i2s_clk_gen_reg => "ULP_I2S_CLK_GEN_REG": u32, RW, ULP_I2S_CLK_GEN_REG {
        ULP_I2S_CLK_EN_b: RW, ULP_I2S_CLK_SEL_b: RW, ULP_I2S_MASTER_SLAVE_MODE_b: RW,
        ULP_I2S_CLKDIV_FACTOR: RW, ULP_I2S_PCLK_EN_b: RW, ULP_I2S_SCLK_DYN_CTRL_DISABLE_b: RW,
        ULP_I2S_PCLK_DYN_CTRL_DISABLE_b: RW
    };
    ulp_uart_clk_gen_reg => "ULP_UART_CLK_GEN_REG": u32, RW, ULP_UART_CLK_GEN_REG {
        ULP_UART_FRAC_CLK_SEL_b: RW, ULP_UART_CLK_SEL: RW, ULP_UART_CLKDIV_FACTOR: RW
    };
    m4lp_ctrl_reg => "M4LP_CTRL_REG": u32, RW, M4LP_CTRL_REG { ULP_M4_CORE_CLK_ENABLE_b: RW };
    slp_sensor_clk_reg => "SLP_SENSOR_CLK_REG": u32, RW, SLP_SENSOR_CLK_REG {
        ENABLE_b: RW, DIVISON_FACTOR: RW
    };
    ulp_timer_clk_gen_reg => "ULP_TIMER_CLK_GEN_REG": u32, RW, ULP_TIMER_CLK_GEN_REG {
        ULP_TIMER_IN_SYNC_b: RW, ULP_TIMER_CLK_SEL: RW
    };
    ulp_auxadc_clk_gen_reg => "ULP_AUXADC_CLK_GEN_REG": u32, RW, ULP_AUXADC_CLK_GEN_REG {
        ULP_AUX_CLK_EN_b: RW, ULP_AUX_CLK_SEL: RW
    };
    ulp_touch_clk_gen_reg => "ULP_TOUCH_CLK_GEN_REG": u32, RW, ULP_TOUCH_CLK_GEN_REG {
        ULP_TOUCH_CLK_EN_b: RW, ULP_TOUCH_CLK_SEL: RW, ULP_TOUCH_CLKDIV_FACTOR: RW
    };
    ulp_vad_clk_gen_reg => "ULP_VAD_CLK_GEN_REG": u32, RW, ULP_VAD_CLK_GEN_REG {
        ULP_VAD_CLK_EN_b: RW, ULP_VAD_CLK_SEL: RW, ULP_VAD_FCLK_EN: RW, ULP_VAD_FCLK_SEL: RW,
        ULP_VAD_CLKDIV_FACTOR: RW
    };
    ulp_i2spll_bypass_reg => "ULP_I2SPLL_BYPASS_REG": u32, RW, ULP_I2SPLL_BYPASS_REG { I2SPLL_BYPASS_b: RW };
    ulp_soc_gpio_mode_reg[ULPCLK_PARAM_SOC_GPIOS] => "ULP_SOC_GPIO_MODE_REG": u32, RW,
        ULP_SOC_GPIO_MODE_REG { ULP_SOC_GPIO_MODE_REG: RW };
    clock_staus_reg => "CLOCK_STAUS_REG": u32, RO, CLOCK_STAUS_REG {
        CLOCK_SWITCHED_UART_CLK_b: RO, CLOCK_SWITCHED_I2S_CLK_b: RO, CLOCK_SWITCHED_SSI_b: RO,
        CLOCK_SWITCHED_PROC_CLK_b: RO, CLOCK_SWITCHED_TIMER_b: RO, CLOCK_SWITCHED_VAD_b: RO,
        CLOCK_SWITCHED_FCLK_VAD_b: RO, CLOCK_SWITCHED_SCLK_VAD_b: RO, CLOCK_SWITCHED_AUXADC_b: RO,
        CLOCK_SWITCHED_TOUCH_SENSOR_b: RO
    };
    ulp_dyn_clk_ctrl_disable => "ULP_DYN_CLK_CTRL_DISABLE": u32, RW, ULP_DYN_CLK_CTRL_DISABLE {
        I2C_PCLK_DYN_CTRL_DISABLE_b: RW, I2S_CLK_DYN_CTRL_DISABLE_b: RW,
        SSI_MST_PCLK_DYN_CTRL_DISABLE_b: RW, SSI_MST_SCLK_DYN_CTRL_DISABLE_b: RW,
        UART_CLK_DYN_CTRL_DISABLE_b: RW, UART_SCLK_DYN_CTRL_DISABLE_b: RW,
        TIMER_PCLK_DYN_CTRL_DISABLE_b: RW, TIMER_SCLK_DYN_CTRL_DISABLE_b: RW,
        REG_ACCESS_SPI_CLK_DYN_CTRL_DISABLE_b: RW, FIM_CLK_DYN_CTRL_DISABLE_b: RW,
        VAD_CLK_DYN_CTRL_DISABLE_b: RW, AUX_PCLK_EN_b: RW, AUX_CLK_EN_b: RW, AUX_MEM_EN_b: RW,
        AUX_PCLK_DYN_CTRL_DISABLE_b: RW, AUX_CLK_DYN_CTRL_DISABLE_b: RW,
        AUX_CLK_MEM_DYN_CTRL_DISABLE_b: RW, UDMA_CLK_ENABLE_b: RW, IR_CLK_ENABLE_b: RW,
        IR_CLK_DYN_CTRL_DISABLE_b: RW
    };
});

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn proc_clock_select_mask() {
        // The BOD driver reads the ULP processor clock source as bits 1..=4.
        let sel = LAYOUT.registers[2].field("ULP_PROC_CLK_SEL").unwrap();
        assert_eq!(sel.mask(), 0x1e);
    }

    #[test]
    fn aux_power_on_sequence() {
        let mut dyn_clk: LocalRegisterCopy<u32, ULP_DYN_CLK_CTRL_DISABLE::Register> =
            LocalRegisterCopy::new(0);
        dyn_clk.modify(
            ULP_DYN_CLK_CTRL_DISABLE::AUX_PCLK_EN_b::SET
                + ULP_DYN_CLK_CTRL_DISABLE::AUX_CLK_EN_b::SET
                + ULP_DYN_CLK_CTRL_DISABLE::AUX_MEM_EN_b::SET
                + ULP_DYN_CLK_CTRL_DISABLE::UDMA_CLK_ENABLE_b::SET
                + ULP_DYN_CLK_CTRL_DISABLE::IR_CLK_ENABLE_b::SET,
        );
        assert_eq!(dyn_clk.get(), (1 << 11) | (1 << 12) | (1 << 13) | (1 << 17) | (1 << 18));
    }

    #[test]
    fn soc_gpio_modes_follow_the_switch_register() {
        let gpio = LAYOUT
            .registers
            .iter()
            .find(|register| register.name == "ULP_SOC_GPIO_MODE_REG")
            .unwrap();
        assert_eq!(gpio.element_offset(15), Ok(0x7c));
        assert!(gpio.element_offset(16).is_err());

        let mode = gpio.field("ULP_SOC_GPIO_MODE_REG").unwrap();
        assert_eq!((mode.offset, mode.width), (0, 3));
        let mut pad: LocalRegisterCopy<u32, ULP_SOC_GPIO_MODE_REG::Register> =
            LocalRegisterCopy::new(0);
        pad.modify(ULP_SOC_GPIO_MODE_REG::ULP_SOC_GPIO_MODE_REG.val(0xe));
        assert_eq!(pad.get(), 0x6);
    }
}
