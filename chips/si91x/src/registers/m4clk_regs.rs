// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Clock control of the M4 subsystem (M4CLK).
//!
//! Peripheral clocks are gated through three enable banks. Each bank has a
//! set register (write one to enable, read back the current gates) and a
//! clear register (write one to disable). Dynamic clock gating can be turned
//! off per clock in the two `DYN_CLK_GATE_DISABLE` registers.

use core::mem::{offset_of, size_of};

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::Layout;

register_structs! {
    pub M4ClkRegisters {
        (0x000 => pub clk_enable_set_reg1: ReadWrite<u32, CLK_ENABLE_REG1::Register>),
        (0x004 => pub clk_enable_clr_reg1: WriteOnly<u32, CLK_ENABLE_REG1::Register>),
        (0x008 => pub clk_enable_set_reg2: ReadWrite<u32, CLK_ENABLE_REG2::Register>),
        (0x00c => pub clk_enable_clr_reg2: WriteOnly<u32, CLK_ENABLE_REG2::Register>),
        (0x010 => pub clk_enable_set_reg3: ReadWrite<u32, CLK_ENABLE_REG3::Register>),
        (0x014 => pub clk_enable_clear_reg3: WriteOnly<u32, CLK_ENABLE_REG3::Register>),
        (0x018 => _reserved0),
        (0x020 => pub clk_config_reg1: ReadWrite<u32, CLK_CONFIG_REG1::Register>),
        (0x024 => pub clk_config_reg2: ReadWrite<u32, CLK_CONFIG_REG2::Register>),
        (0x028 => pub clk_config_reg3: ReadWrite<u32, CLK_CONFIG_REG3::Register>),
        (0x02c => pub clk_config_reg4: ReadWrite<u32, CLK_CONFIG_REG4::Register>),
        (0x030 => pub clk_config_reg5: ReadWrite<u32, CLK_CONFIG_REG5::Register>),
        (0x034 => pub dyn_clk_gate_disable_reg: ReadWrite<u32, DYN_CLK_GATE_DISABLE_REG::Register>),
        (0x038 => pub dyn_clk_gate_disable_reg2: ReadWrite<u32, DYN_CLK_GATE_DISABLE_REG2::Register>),
        (0x03c => pub clk_config_reg6: ReadWrite<u32, CLK_CONFIG_REG6::Register>),
        (0x040 => pub pll_stat_reg: ReadOnly<u32, PLL_STAT_REG::Register>),
        (0x044 => _reserved1),
        (0x050 => pub sd_mem_clock_reg: ReadWrite<u32, SD_MEM_CLOCK_REG::Register>),
        (0x054 => _reserved2),
        (0x060 => pub clk_calib_ctrl_reg1: ReadWrite<u32, CLK_CALIB_CTRL_REG1::Register>),
        (0x064 => pub clk_calib_ctrl_reg2: ReadWrite<u32, CLK_CALIB_CTRL_REG2::Register>),
        (0x068 => pub clk_calib_sts_reg1: ReadOnly<u32, CLK_CALIB_STS_REG1::Register>),
        (0x06c => pub clk_calib_sts_reg2: ReadOnly<u32, CLK_CALIB_STS_REG2::Register>),
        (0x070 => @END),
    }
}

register_bitfields![u32,
    pub CLK_ENABLE_REG1 [
        USART1_PCLK_ENABLE_b OFFSET(0) NUMBITS(1) [],
        USART1_SCLK_ENABLE_b OFFSET(1) NUMBITS(1) [],
        USART2_PCLK_ENABLE_b OFFSET(2) NUMBITS(1) [],
        USART2_SCLK_ENABLE_b OFFSET(3) NUMBITS(1) [],
        QSPI_2_CLK_ENABLE_b OFFSET(4) NUMBITS(1) [],
        QSPI_2_HCLK_ENABLE_b OFFSET(5) NUMBITS(1) [],
        QSPI_2_M4_SOC_SYNC_b OFFSET(6) NUMBITS(1) [],
        QSPI_2_CLK_ONEHOT_ENABLE_b OFFSET(7) NUMBITS(1) [],
        CT_CLK_ENABLE_b OFFSET(9) NUMBITS(1) [],
        CT_PCLK_ENABLE_b OFFSET(10) NUMBITS(1) [],
        ICACHE_CLK_ENABLE_b OFFSET(11) NUMBITS(1) [],
        ICACHE_CLK_2X_ENABLE_b OFFSET(12) NUMBITS(1) [],
        RPDMA_HCLK_ENABLE_b OFFSET(13) NUMBITS(1) [],
        SOC_PLL_SPI_CLK_ENABLE_b OFFSET(14) NUMBITS(1) [],
        IID_CLK_ENABLE_b OFFSET(16) NUMBITS(1) [],
        SDIO_SYS_HCLK_ENABLE_b OFFSET(17) NUMBITS(1) [],
        CRC_CLK_ENABLE_M4_b OFFSET(18) NUMBITS(1) [],
        M4SS_UM_CLK_STATIC_EN_b OFFSET(19) NUMBITS(1) [],
        ETH_HCLK_ENABLE_b OFFSET(21) NUMBITS(1) [],
        HWRNG_PCLK_ENABLE_b OFFSET(22) NUMBITS(1) [],
        GNSS_MEM_CLK_ENABLE_b OFFSET(23) NUMBITS(1) [],
        CCI_PCLK_ENABLE_b OFFSET(24) NUMBITS(1) [],
        CCI_HCLK_ENABLE_b OFFSET(25) NUMBITS(1) [],
        CCI_CLK_ENABLE_b OFFSET(26) NUMBITS(1) [],
        MASK_HOST_CLK_WAIT_FIX_b OFFSET(27) NUMBITS(1) [],
        MASK31_HOST_CLK_CNT_b OFFSET(28) NUMBITS(1) [],
        SD_MEM_INTF_CLK_ENABLE_b OFFSET(29) NUMBITS(1) [],
        MASK_HOST_CLK_AVAILABLE_FIX_b OFFSET(30) NUMBITS(1) [],
        ULPSS_CLK_ENABLE_b OFFSET(31) NUMBITS(1) []
    ],
    pub CLK_ENABLE_REG2 [
        GEN_SPI_MST1_HCLK_ENABLE_b OFFSET(0) NUMBITS(1) [],
        CAN1_PCLK_ENABLE_b OFFSET(2) NUMBITS(1) [],
        CAN1_CLK_ENABLE_b OFFSET(3) NUMBITS(1) [],
        UDMA_HCLK_ENABLE_b OFFSET(6) NUMBITS(1) [],
        I2C_BUS_CLK_ENABLE_b OFFSET(7) NUMBITS(1) [],
        I2C_2_BUS_CLK_ENABLE_b OFFSET(8) NUMBITS(1) [],
        SSI_SLV_PCLK_ENABLE_b OFFSET(9) NUMBITS(1) [],
        SSI_SLV_SCLK_ENABLE_b OFFSET(10) NUMBITS(1) [],
        QSPI_CLK_ENABLE_b OFFSET(11) NUMBITS(1) [],
        QSPI_HCLK_ENABLE_b OFFSET(12) NUMBITS(1) [],
        I2SM_SCLK_ENABLE_b OFFSET(13) NUMBITS(1) [],
        I2SM_INTF_SCLK_ENABLE_b OFFSET(14) NUMBITS(1) [],
        I2SM_PCLK_ENABLE_b OFFSET(15) NUMBITS(1) [],
        QE_PCLK_ENABLE_b OFFSET(17) NUMBITS(1) [],
        MCPWM_PCLK_ENABLE_b OFFSET(18) NUMBITS(1) [],
        SGPIO_PCLK_ENABLE_b OFFSET(20) NUMBITS(1) [],
        EGPIO_PCLK_ENABLE_b OFFSET(21) NUMBITS(1) [],
        ARM_CLK_ENABLE_b OFFSET(22) NUMBITS(1) [],
        SSI_MST_PCLK_ENABLE_b OFFSET(23) NUMBITS(1) [],
        SSI_MST_SCLK_ENABLE_b OFFSET(24) NUMBITS(1) [],
        MEM2_CLK_ENABLE_b OFFSET(25) NUMBITS(1) [],
        MEM_CLK_ULP_ENABLE_b OFFSET(26) NUMBITS(1) [],
        ROM_CLK_ENABLE_b OFFSET(27) NUMBITS(1) [],
        PLL_INTF_CLK_ENABLE_b OFFSET(28) NUMBITS(1) [],
        SEMAPHORE_CLK_ENABLE_b OFFSET(29) NUMBITS(1) [],
        TOT_CLK_ENABLE_b OFFSET(30) NUMBITS(1) [],
        RMII_SOFT_RESET_b OFFSET(31) NUMBITS(1) []
    ],
    pub CLK_ENABLE_REG3 [
        BUS_CLK_ENABLE_b OFFSET(0) NUMBITS(1) [],
        M4_CORE_CLK_ENABLE_b OFFSET(1) NUMBITS(1) [],
        CM_BUS_CLK_ENABLE_b OFFSET(2) NUMBITS(1) [],
        MISC_CONFIG_PCLK_ENABLE_b OFFSET(4) NUMBITS(1) [],
        EFUSE_CLK_ENABLE_b OFFSET(5) NUMBITS(1) [],
        ICM_CLK_ENABLE_b OFFSET(6) NUMBITS(1) [],
        MEM1_CLK_ENABLE_b OFFSET(7) NUMBITS(1) [],
        MEM3_CLK_ENABLE_b OFFSET(8) NUMBITS(1) [],
        USB_PHY_CLK_IN_ENABLE_b OFFSET(12) NUMBITS(1) [],
        QSPI_CLK_ONEHOT_ENABLE_b OFFSET(13) NUMBITS(1) [],
        QSPI_M4_SOC_SYNC_b OFFSET(14) NUMBITS(1) [],
        EGPIO_CLK_ENABLE_b OFFSET(16) NUMBITS(1) [],
        I2C_CLK_ENABLE_b OFFSET(17) NUMBITS(1) [],
        I2C_2_CLK_ENABLE_b OFFSET(18) NUMBITS(1) [],
        EFUSE_PCLK_ENABLE_b OFFSET(19) NUMBITS(1) [],
        SGPIO_CLK_ENABLE_b OFFSET(20) NUMBITS(1) [],
        TASS_M4SS_64K_SWITCH_CLK_ENABLE_b OFFSET(21) NUMBITS(1) [],
        TASS_M4SS_128K_SWITCH_CLK_ENABLE_b OFFSET(22) NUMBITS(1) [],
        TASS_M4SS_SDIO_SWITCH_CLK_ENABLE_b OFFSET(23) NUMBITS(1) [],
        TASS_M4SS_USB_SWITCH_CLK_ENABLE_b OFFSET(24) NUMBITS(1) [],
        ROM_MISC_STATIC_ENABLE_b OFFSET(25) NUMBITS(1) [],
        M4_SOC_CLK_FOR_OTHER_ENABLE_b OFFSET(26) NUMBITS(1) [],
        ICACHE_ENABLE_b OFFSET(27) NUMBITS(1) []
    ],
    pub CLK_CONFIG_REG1 [
        QSPI_CLK_SEL OFFSET(0) NUMBITS(3) [],
        QSPI_CLK_DIV_FAC OFFSET(3) NUMBITS(6) [],
        QSPI_CLK_SWALLOW_SEL OFFSET(9) NUMBITS(1) [],
        SSI_MST_SCLK_SEL OFFSET(10) NUMBITS(3) [],
        SSI_MST_SCLK_DIV_FAC OFFSET(13) NUMBITS(4) [],
        PLL_INTF_CLK_SEL OFFSET(17) NUMBITS(1) [],
        PLL_INTF_CLK_DIV_FAC OFFSET(18) NUMBITS(4) [],
        PLL_INTF_CLK_SWALLOW_SEL OFFSET(22) NUMBITS(1) [],
        GEN_SPI_MST1_SCLK_SEL OFFSET(23) NUMBITS(2) []
    ],
    pub CLK_CONFIG_REG2 [
        USART1_SCLK_SEL OFFSET(0) NUMBITS(3) [],
        USART1_SCLK_FRAC_SEL OFFSET(3) NUMBITS(1) [],
        USART1_SCLK_DIV_FAC OFFSET(4) NUMBITS(4) [],
        USART2_SCLK_SEL OFFSET(8) NUMBITS(3) [],
        USART2_SCLK_FRAC_SEL OFFSET(11) NUMBITS(1) [],
        USART2_SCLK_DIV_FAC OFFSET(12) NUMBITS(4) [],
        CCI_CLK_DIV_FAC OFFSET(16) NUMBITS(4) [],
        QSPI_ODD_DIV_SEL OFFSET(20) NUMBITS(1) []
    ],
    pub CLK_CONFIG_REG3 [
        CAN1_CLK_DIV_FAC OFFSET(0) NUMBITS(8) [],
        MCU_CLKOUT_SEL OFFSET(8) NUMBITS(4) [],
        MCU_CLKOUT_DIV_FAC OFFSET(12) NUMBITS(6) [],
        MCU_CLKOUT_ENABLE OFFSET(18) NUMBITS(1) []
    ],
    pub CLK_CONFIG_REG4 [
        SLEEP_CLK_SEL OFFSET(0) NUMBITS(2) [
            UlpMhzRc = 0,
            Rc32Khz = 1,
            Xtal32Khz = 2
        ],
        CCI_CLK_SEL OFFSET(4) NUMBITS(3) [],
        ULPSS_CLK_DIV_FAC OFFSET(8) NUMBITS(6) []
    ],
    pub CLK_CONFIG_REG5 [
        CT_CLK_SEL OFFSET(0) NUMBITS(3) [],
        CT_CLK_DIV_FAC OFFSET(3) NUMBITS(6) [],
        I2S_CLK_SEL OFFSET(9) NUMBITS(1) [],
        I2S_CLK_DIV_FAC OFFSET(10) NUMBITS(6) [],
        ULPSS_ODD_DIV_SEL OFFSET(16) NUMBITS(1) [],
        M4_SOC_CLK_SEL OFFSET(19) NUMBITS(4) [
            UlpRefClk = 0,
            SocPllClk = 2,
            ModemPllClk1 = 3,
            IntfPllClk = 4,
            SleepClk = 5
        ],
        M4_SOC_CLK_DIV_FAC OFFSET(23) NUMBITS(6) [],
        USB_CLK_SEL OFFSET(29) NUMBITS(2) [
            MemsRefClk = 0,
            ReferenceClk = 1,
            PllClk = 2
        ]
    ],
    pub CLK_CONFIG_REG6 [
        QSPI_2_CLK_SEL OFFSET(0) NUMBITS(3) [],
        QSPI_2_CLK_DIV_FAC OFFSET(3) NUMBITS(6) [],
        QSPI_2_CLK_SWALLOW_SEL OFFSET(9) NUMBITS(1) [],
        QSPI_2_ODD_DIV_SEL OFFSET(10) NUMBITS(1) [],
        USB_PHY_CLK_DIV_FAC OFFSET(11) NUMBITS(2) []
    ],
    pub DYN_CLK_GATE_DISABLE_REG [
        SDIO_SYS_HCLK_DYN_CTRL_DISABLE_b OFFSET(0) NUMBITS(1) [],
        BUS_CLK_DYN_CTRL_DISABLE_b OFFSET(1) NUMBITS(1) [],
        GPDMA_HCLK_DYN_CTRL_DISABLE_b OFFSET(4) NUMBITS(1) [],
        EGPIO_PCLK_DYN_CTRL_DISABLE_b OFFSET(5) NUMBITS(1) [],
        SGPIO_PCLK_DYN_CTRL_DISABLE_b OFFSET(6) NUMBITS(1) [],
        TOT_CLK_DYN_CTRL_DISABLE_b OFFSET(7) NUMBITS(1) [],
        HWRNG_PCLK_DYN_CTRL_DISABLE_b OFFSET(8) NUMBITS(1) [],
        USART1_SCLK_DYN_CTRL_DISABLE_b OFFSET(9) NUMBITS(1) [],
        USART1_PCLK_DYN_CTRL_DISABLE_b OFFSET(10) NUMBITS(1) [],
        USART2_SCLK_DYN_CTRL_DISABLE_b OFFSET(11) NUMBITS(1) [],
        USART2_PCLK_DYN_CTRL_DISABLE_b OFFSET(12) NUMBITS(1) [],
        SSI_SLV_SCLK_DYN_CTRL_DISABLE_b OFFSET(15) NUMBITS(1) [],
        SSI_SLV_PCLK_DYN_CTRL_DISABLE_b OFFSET(16) NUMBITS(1) [],
        I2SM_INTF_SCLK_DYN_CTRL_DISABLE_b OFFSET(18) NUMBITS(1) [],
        SEMAPHORE_CLK_DYN_CTRL_DISABLE_b OFFSET(19) NUMBITS(1) [],
        ARM_CLK_DYN_CTRL_DISABLE_b OFFSET(20) NUMBITS(1) [],
        SSI_MST_SCLK_DYN_CTRL_DISABLE_b OFFSET(21) NUMBITS(1) [],
        MEM1_CLK_DYN_CTRL_DISABLE_b OFFSET(22) NUMBITS(1) [],
        MEM2_CLK_DYN_CTRL_DISABLE_b OFFSET(23) NUMBITS(1) [],
        MEM_CLK_ULP_DYN_CTRL_DISABLE_b OFFSET(24) NUMBITS(1) [],
        MEM3_CLK_DYN_CTRL_DISABLE_b OFFSET(25) NUMBITS(1) [],
        SSI_MST_PCLK_DYN_CTRL_DISABLE_b OFFSET(28) NUMBITS(1) [],
        ICACHE_DYN_GATING_DISABLE_b OFFSET(29) NUMBITS(1) [],
        CCI_PCLK_DYN_CTRL_DISABLE_b OFFSET(30) NUMBITS(1) [],
        MISC_CONFIG_PCLK_DYN_CTRL_DISABLE_b OFFSET(31) NUMBITS(1) []
    ],
    pub DYN_CLK_GATE_DISABLE_REG2 [
        SOC_PLL_SPI_CLK_DYN_CTRL_DISABLE_b OFFSET(0) NUMBITS(1) [],
        I2C_BUS_DYN_CTRL_DISABLE_b OFFSET(1) NUMBITS(1) [],
        I2C_2_BUS_CLK_DYN_CTRL_DISABLE_b OFFSET(2) NUMBITS(1) [],
        CT_PCLK_DYN_CTRL_DISABLE_b OFFSET(3) NUMBITS(1) [],
        CAN1_PCLK_DYN_CTRL_DISABLE_b OFFSET(4) NUMBITS(1) [],
        I2SM_PCLK_DYN_CTRL_DISABLE_b OFFSET(5) NUMBITS(1) [],
        EFUSE_CLK_DYN_CTRL_DISABLE_b OFFSET(6) NUMBITS(1) [],
        EFUSE_PCLK_DYN_CTRL_DISABLE_b OFFSET(7) NUMBITS(1) [],
        PWR_CTRL_CLK_DYN_CTRL_DISABLE_b OFFSET(8) NUMBITS(1) []
    ],
    pub PLL_STAT_REG [
        SOCPLL_LOCK OFFSET(0) NUMBITS(1) [],
        INTFPLL_LOCK OFFSET(1) NUMBITS(1) [],
        I2SPLL_LOCK OFFSET(2) NUMBITS(1) [],
        SLEEP_CLK_SWITCHED OFFSET(3) NUMBITS(1) [],
        MODEMPLL_LOCK OFFSET(4) NUMBITS(1) [],
        M4_SOC_CLK_SWITCHED OFFSET(5) NUMBITS(1) [],
        QSPI_CLK_SWITCHED OFFSET(6) NUMBITS(1) [],
        QSPI_2_CLK_SWITCHED OFFSET(7) NUMBITS(1) [],
        USART1_SCLK_SWITCHED OFFSET(8) NUMBITS(1) [],
        USART2_SCLK_SWITCHED OFFSET(9) NUMBITS(1) [],
        GEN_SPI_MST1_SCLK_SWITCHED OFFSET(10) NUMBITS(1) [],
        SSI_MST_SCLK_SWITCHED OFFSET(11) NUMBITS(1) [],
        SD_MEM_INTF_CLK_SWITCHED OFFSET(12) NUMBITS(1) [],
        CT_CLK_SWITCHED OFFSET(13) NUMBITS(1) [],
        I2S_CLK_SWITCHED OFFSET(14) NUMBITS(1) [],
        PLL_INTF_CLK_SWITCHED OFFSET(15) NUMBITS(1) [],
        ULP_REF_CLK_SWITCHED OFFSET(16) NUMBITS(1) []
    ],
    pub SD_MEM_CLOCK_REG [
        SD_MEM_INTF_CLK_SEL OFFSET(0) NUMBITS(3) [],
        SD_MEM_INTF_CLK_DIV_FAC OFFSET(3) NUMBITS(6) [],
        SD_MEM_INTF_CLK_SWALLOW_SEL OFFSET(9) NUMBITS(1) []
    ],
    pub CLK_CALIB_CTRL_REG1 [
        CC_SOFT_RST_b OFFSET(0) NUMBITS(1) [],
        CC_START_b OFFSET(1) NUMBITS(1) [],
        CC_CHANGE_TEST_CLK_b OFFSET(2) NUMBITS(1) [],
        CC_CLKIN_SEL_b OFFSET(3) NUMBITS(4) []
    ],
    pub CLK_CALIB_CTRL_REG2 [
        CC_NUM_REF_CLKS OFFSET(0) NUMBITS(32) []
    ],
    pub CLK_CALIB_STS_REG1 [
        CC_DONE_b OFFSET(0) NUMBITS(1) [],
        CC_ERROR_b OFFSET(1) NUMBITS(1) []
    ],
    pub CLK_CALIB_STS_REG2 [
        CC_NUM_TEST_CLKS OFFSET(0) NUMBITS(32) []
    ]
];

const _: () = assert!(offset_of!(M4ClkRegisters, clk_enable_set_reg3) == 0x10);
const _: () = assert!(offset_of!(M4ClkRegisters, pll_stat_reg) == 0x40);
const _: () = assert!(size_of::<M4ClkRegisters>() == 0x70);

pub static LAYOUT: Layout = layout!(M4ClkRegisters {
    clk_enable_set_reg1 => "CLK_ENABLE_SET_REG1": u32, RW, CLK_ENABLE_REG1 {
        USART1_PCLK_ENABLE_b: RW, USART1_SCLK_ENABLE_b: RW, USART2_PCLK_ENABLE_b: RW,
        USART2_SCLK_ENABLE_b: RW, QSPI_2_CLK_ENABLE_b: RW, QSPI_2_HCLK_ENABLE_b: RW,
        QSPI_2_M4_SOC_SYNC_b: RW, QSPI_2_CLK_ONEHOT_ENABLE_b: RW, CT_CLK_ENABLE_b: RW,
        CT_PCLK_ENABLE_b: RW, ICACHE_CLK_ENABLE_b: RW, ICACHE_CLK_2X_ENABLE_b: RW,
        RPDMA_HCLK_ENABLE_b: RW, SOC_PLL_SPI_CLK_ENABLE_b: RW, IID_CLK_ENABLE_b: RW,
        SDIO_SYS_HCLK_ENABLE_b: RW, CRC_CLK_ENABLE_M4_b: RW, M4SS_UM_CLK_STATIC_EN_b: RW,
        ETH_HCLK_ENABLE_b: RW, HWRNG_PCLK_ENABLE_b: RW, GNSS_MEM_CLK_ENABLE_b: RW,
        CCI_PCLK_ENABLE_b: RW, CCI_HCLK_ENABLE_b: RW, CCI_CLK_ENABLE_b: RW,
        MASK_HOST_CLK_WAIT_FIX_b: RW, MASK31_HOST_CLK_CNT_b: RW, SD_MEM_INTF_CLK_ENABLE_b: RW,
        MASK_HOST_CLK_AVAILABLE_FIX_b: RW, ULPSS_CLK_ENABLE_b: RW
    };
    clk_enable_clr_reg1 => "CLK_ENABLE_CLR_REG1": u32, WO, CLK_ENABLE_REG1 {
        USART1_PCLK_ENABLE_b: WO, USART1_SCLK_ENABLE_b: WO, USART2_PCLK_ENABLE_b: WO,
        USART2_SCLK_ENABLE_b: WO, QSPI_2_CLK_ENABLE_b: WO, QSPI_2_HCLK_ENABLE_b: WO,
        QSPI_2_M4_SOC_SYNC_b: WO, QSPI_2_CLK_ONEHOT_ENABLE_b: WO, CT_CLK_ENABLE_b: WO,
        CT_PCLK_ENABLE_b: WO, ICACHE_CLK_ENABLE_b: WO, ICACHE_CLK_2X_ENABLE_b: WO,
        RPDMA_HCLK_ENABLE_b: WO, SOC_PLL_SPI_CLK_ENABLE_b: WO, IID_CLK_ENABLE_b: WO,
        SDIO_SYS_HCLK_ENABLE_b: WO, CRC_CLK_ENABLE_M4_b: WO, M4SS_UM_CLK_STATIC_EN_b: WO,
        ETH_HCLK_ENABLE_b: WO, HWRNG_PCLK_ENABLE_b: WO, GNSS_MEM_CLK_ENABLE_b: WO,
        CCI_PCLK_ENABLE_b: WO, CCI_HCLK_ENABLE_b: WO, CCI_CLK_ENABLE_b: WO,
        MASK_HOST_CLK_WAIT_FIX_b: WO, MASK31_HOST_CLK_CNT_b: WO, SD_MEM_INTF_CLK_ENABLE_b: WO,
        MASK_HOST_CLK_AVAILABLE_FIX_b: WO, ULPSS_CLK_ENABLE_b: WO
    };
    clk_enable_set_reg2 => "CLK_ENABLE_SET_REG2": u32, RW, CLK_ENABLE_REG2 {
        GEN_SPI_MST1_HCLK_ENABLE_b: RW, CAN1_PCLK_ENABLE_b: RW, CAN1_CLK_ENABLE_b: RW,
        UDMA_HCLK_ENABLE_b: RW, I2C_BUS_CLK_ENABLE_b: RW, I2C_2_BUS_CLK_ENABLE_b: RW,
        SSI_SLV_PCLK_ENABLE_b: RW, SSI_SLV_SCLK_ENABLE_b: RW, QSPI_CLK_ENABLE_b: RW,
        QSPI_HCLK_ENABLE_b: RW, I2SM_SCLK_ENABLE_b: RW, I2SM_INTF_SCLK_ENABLE_b: RW,
        I2SM_PCLK_ENABLE_b: RW, QE_PCLK_ENABLE_b: RW, MCPWM_PCLK_ENABLE_b: RW,
        SGPIO_PCLK_ENABLE_b: RW, EGPIO_PCLK_ENABLE_b: RW, ARM_CLK_ENABLE_b: RW,
        SSI_MST_PCLK_ENABLE_b: RW, SSI_MST_SCLK_ENABLE_b: RW, MEM2_CLK_ENABLE_b: RW,
        MEM_CLK_ULP_ENABLE_b: RW, ROM_CLK_ENABLE_b: RW, PLL_INTF_CLK_ENABLE_b: RW,
        SEMAPHORE_CLK_ENABLE_b: RW, TOT_CLK_ENABLE_b: RW, RMII_SOFT_RESET_b: RW
    };
    clk_enable_clr_reg2 => "CLK_ENABLE_CLR_REG2": u32, WO, CLK_ENABLE_REG2 {
        GEN_SPI_MST1_HCLK_ENABLE_b: WO, CAN1_PCLK_ENABLE_b: WO, CAN1_CLK_ENABLE_b: WO,
        UDMA_HCLK_ENABLE_b: WO, I2C_BUS_CLK_ENABLE_b: WO, I2C_2_BUS_CLK_ENABLE_b: WO,
        SSI_SLV_PCLK_ENABLE_b: WO, SSI_SLV_SCLK_ENABLE_b: WO, QSPI_CLK_ENABLE_b: WO,
        QSPI_HCLK_ENABLE_b: WO, I2SM_SCLK_ENABLE_b: WO, I2SM_INTF_SCLK_ENABLE_b: WO,
        I2SM_PCLK_ENABLE_b: WO, QE_PCLK_ENABLE_b: WO, MCPWM_PCLK_ENABLE_b: WO,
        SGPIO_PCLK_ENABLE_b: WO, EGPIO_PCLK_ENABLE_b: WO, ARM_CLK_ENABLE_b: WO,
        SSI_MST_PCLK_ENABLE_b: WO, SSI_MST_SCLK_ENABLE_b: WO, MEM2_CLK_ENABLE_b: WO,
        MEM_CLK_ULP_ENABLE_b: WO, ROM_CLK_ENABLE_b: WO, PLL_INTF_CLK_ENABLE_b: WO,
        SEMAPHORE_CLK_ENABLE_b: WO, TOT_CLK_ENABLE_b: WO, RMII_SOFT_RESET_b: WO
    };
    clk_enable_set_reg3 => "CLK_ENABLE_SET_REG3": u32, RW, CLK_ENABLE_REG3 {
        BUS_CLK_ENABLE_b: RW, M4_CORE_CLK_ENABLE_b: RW, CM_BUS_CLK_ENABLE_b: RW,
        MISC_CONFIG_PCLK_ENABLE_b: RW, EFUSE_CLK_ENABLE_b: RW, ICM_CLK_ENABLE_b: RW,
        MEM1_CLK_ENABLE_b: RW, MEM3_CLK_ENABLE_b: RW, USB_PHY_CLK_IN_ENABLE_b: RW,
        QSPI_CLK_ONEHOT_ENABLE_b: RW, QSPI_M4_SOC_SYNC_b: RW, EGPIO_CLK_ENABLE_b: RW,
        I2C_CLK_ENABLE_b: RW, I2C_2_CLK_ENABLE_b: RW, EFUSE_PCLK_ENABLE_b: RW,
        SGPIO_CLK_ENABLE_b: RW, TASS_M4SS_64K_SWITCH_CLK_ENABLE_b: RW,
        TASS_M4SS_128K_SWITCH_CLK_ENABLE_b: RW, TASS_M4SS_SDIO_SWITCH_CLK_ENABLE_b: RW,
        TASS_M4SS_USB_SWITCH_CLK_ENABLE_b: RW, ROM_MISC_STATIC_ENABLE_b: RW,
        M4_SOC_CLK_FOR_OTHER_ENABLE_b: RW, ICACHE_ENABLE_b: RW
    };
    clk_enable_clear_reg3 => "CLK_ENABLE_CLEAR_REG3": u32, WO, CLK_ENABLE_REG3 {
        BUS_CLK_ENABLE_b: WO, M4_CORE_CLK_ENABLE_b: WO, CM_BUS_CLK_ENABLE_b: WO,
        MISC_CONFIG_PCLK_ENABLE_b: WO, EFUSE_CLK_ENABLE_b: WO, ICM_CLK_ENABLE_b: WO,
        MEM1_CLK_ENABLE_b: WO, MEM3_CLK_ENABLE_b: WO, USB_PHY_CLK_IN_ENABLE_b: WO,
        QSPI_CLK_ONEHOT_ENABLE_b: WO, QSPI_M4_SOC_SYNC_b: WO, EGPIO_CLK_ENABLE_b: WO,
        I2C_CLK_ENABLE_b: WO, I2C_2_CLK_ENABLE_b: WO, EFUSE_PCLK_ENABLE_b: WO,
        SGPIO_CLK_ENABLE_b: WO, TASS_M4SS_64K_SWITCH_CLK_ENABLE_b: WO,
        TASS_M4SS_128K_SWITCH_CLK_ENABLE_b: WO, TASS_M4SS_SDIO_SWITCH_CLK_ENABLE_b: WO,
        TASS_M4SS_USB_SWITCH_CLK_ENABLE_b: WO, ROM_MISC_STATIC_ENABLE_b: WO,
        M4_SOC_CLK_FOR_OTHER_ENABLE_b: WO, ICACHE_ENABLE_b: WO
    };
    clk_config_reg1 => "CLK_CONFIG_REG1": u32, RW, CLK_CONFIG_REG1 {
        QSPI_CLK_SEL: RW, QSPI_CLK_DIV_FAC: RW, QSPI_CLK_SWALLOW_SEL: RW, SSI_MST_SCLK_SEL: RW,
        SSI_MST_SCLK_DIV_FAC: RW, PLL_INTF_CLK_SEL: RW, PLL_INTF_CLK_DIV_FAC: RW,
        PLL_INTF_CLK_SWALLOW_SEL: RW, GEN_SPI_MST1_SCLK_SEL: RW
    };
    clk_config_reg2 => "CLK_CONFIG_REG2": u32, RW, CLK_CONFIG_REG2 {
        USART1_SCLK_SEL: RW, USART1_SCLK_FRAC_SEL: RW, USART1_SCLK_DIV_FAC: RW,
        USART2_SCLK_SEL: RW, USART2_SCLK_FRAC_SEL: RW, USART2_SCLK_DIV_FAC: RW,
        CCI_CLK_DIV_FAC: RW, QSPI_ODD_DIV_SEL: RW
    };
    clk_config_reg3 => "CLK_CONFIG_REG3": u32, RW, CLK_CONFIG_REG3 {
        CAN1_CLK_DIV_FAC: RW, MCU_CLKOUT_SEL: RW, MCU_CLKOUT_DIV_FAC: RW, MCU_CLKOUT_ENABLE: RW
    };
    clk_config_reg4 => "CLK_CONFIG_REG4": u32, RW, CLK_CONFIG_REG4 {
        SLEEP_CLK_SEL: RW, CCI_CLK_SEL: RW, ULPSS_CLK_DIV_FAC: RW
    };
    clk_config_reg5 => "CLK_CONFIG_REG5": u32, RW, CLK_CONFIG_REG5 {
        CT_CLK_SEL: RW, CT_CLK_DIV_FAC: RW, I2S_CLK_SEL: RW, I2S_CLK_DIV_FAC: RW,
        ULPSS_ODD_DIV_SEL: RW, M4_SOC_CLK_SEL: RW, M4_SOC_CLK_DIV_FAC: RW, USB_CLK_SEL: RW
    };
    dyn_clk_gate_disable_reg => "DYN_CLK_GATE_DISABLE_REG": u32, RW, DYN_CLK_GATE_DISABLE_REG {
        SDIO_SYS_HCLK_DYN_CTRL_DISABLE_b: RW, BUS_CLK_DYN_CTRL_DISABLE_b: RW,
        GPDMA_HCLK_DYN_CTRL_DISABLE_b: RW, EGPIO_PCLK_DYN_CTRL_DISABLE_b: RW,
        SGPIO_PCLK_DYN_CTRL_DISABLE_b: RW, TOT_CLK_DYN_CTRL_DISABLE_b: RW,
        HWRNG_PCLK_DYN_CTRL_DISABLE_b: RW, USART1_SCLK_DYN_CTRL_DISABLE_b: RW,
        USART1_PCLK_DYN_CTRL_DISABLE_b: RW, USART2_SCLK_DYN_CTRL_DISABLE_b: RW,
        USART2_PCLK_DYN_CTRL_DISABLE_b: RW, SSI_SLV_SCLK_DYN_CTRL_DISABLE_b: RW,
        SSI_SLV_PCLK_DYN_CTRL_DISABLE_b: RW, I2SM_INTF_SCLK_DYN_CTRL_DISABLE_b: RW,
        SEMAPHORE_CLK_DYN_CTRL_DISABLE_b: RW, ARM_CLK_DYN_CTRL_DISABLE_b: RW,
        SSI_MST_SCLK_DYN_CTRL_DISABLE_b: RW, MEM1_CLK_DYN_CTRL_DISABLE_b: RW,
        MEM2_CLK_DYN_CTRL_DISABLE_b: RW, MEM_CLK_ULP_DYN_CTRL_DISABLE_b: RW,
        MEM3_CLK_DYN_CTRL_DISABLE_b: RW, SSI_MST_PCLK_DYN_CTRL_DISABLE_b: RW,
        ICACHE_DYN_GATING_DISABLE_b: RW, CCI_PCLK_DYN_CTRL_DISABLE_b: RW,
        MISC_CONFIG_PCLK_DYN_CTRL_DISABLE_b: RW
    };
    dyn_clk_gate_disable_reg2 => "DYN_CLK_GATE_DISABLE_REG2": u32, RW, DYN_CLK_GATE_DISABLE_REG2 {
        SOC_PLL_SPI_CLK_DYN_CTRL_DISABLE_b: RW, I2C_BUS_DYN_CTRL_DISABLE_b: RW,
        I2C_2_BUS_CLK_DYN_CTRL_DISABLE_b: RW, CT_PCLK_DYN_CTRL_DISABLE_b: RW,
        CAN1_PCLK_DYN_CTRL_DISABLE_b: RW, I2SM_PCLK_DYN_CTRL_DISABLE_b: RW,
        EFUSE_CLK_DYN_CTRL_DISABLE_b: RW, EFUSE_PCLK_DYN_CTRL_DISABLE_b: RW,
        PWR_CTRL_CLK_DYN_CTRL_DISABLE_b: RW
    };
    clk_config_reg6 => "CLK_CONFIG_REG6": u32, RW, CLK_CONFIG_REG6 {
        QSPI_2_CLK_SEL: RW, QSPI_2_CLK_DIV_FAC: RW, QSPI_2_CLK_SWALLOW_SEL: RW,
        QSPI_2_ODD_DIV_SEL: RW, USB_PHY_CLK_DIV_FAC: RW
    };
    pll_stat_reg => "PLL_STAT_REG": u32, RO, PLL_STAT_REG {
        SOCPLL_LOCK: RO, INTFPLL_LOCK: RO, I2SPLL_LOCK: RO, SLEEP_CLK_SWITCHED: RO,
        MODEMPLL_LOCK: RO, M4_SOC_CLK_SWITCHED: RO, QSPI_CLK_SWITCHED: RO,
        QSPI_2_CLK_SWITCHED: RO, USART1_SCLK_SWITCHED: RO, USART2_SCLK_SWITCHED: RO,
        GEN_SPI_MST1_SCLK_SWITCHED: RO, SSI_MST_SCLK_SWITCHED: RO,
        SD_MEM_INTF_CLK_SWITCHED: RO, CT_CLK_SWITCHED: RO, I2S_CLK_SWITCHED: RO,
        PLL_INTF_CLK_SWITCHED: RO, ULP_REF_CLK_SWITCHED: RO
    };
    sd_mem_clock_reg => "SD_MEM_CLOCK_REG": u32, RW, SD_MEM_CLOCK_REG {
        SD_MEM_INTF_CLK_SEL: RW, SD_MEM_INTF_CLK_DIV_FAC: RW, SD_MEM_INTF_CLK_SWALLOW_SEL: RW
    };
    clk_calib_ctrl_reg1 => "CLK_CALIB_CTRL_REG1": u32, RW, CLK_CALIB_CTRL_REG1 {
        CC_SOFT_RST_b: RW, CC_START_b: RW, CC_CHANGE_TEST_CLK_b: RW, CC_CLKIN_SEL_b: RW
    };
    clk_calib_ctrl_reg2 => "CLK_CALIB_CTRL_REG2": u32, RW, CLK_CALIB_CTRL_REG2 { CC_NUM_REF_CLKS: RW };
    clk_calib_sts_reg1 => "CLK_CALIB_STS_REG1": u32, RO, CLK_CALIB_STS_REG1 {
        CC_DONE_b: RO, CC_ERROR_b: RO
    };
    clk_calib_sts_reg2 => "CLK_CALIB_STS_REG2": u32, RO, CLK_CALIB_STS_REG2 { CC_NUM_TEST_CLKS: RO };
});

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::interfaces::{ReadWriteable, Readable};
    use tock_registers::registers::InMemoryRegister;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn efuse_clocks_live_in_bank_three() {
        let set3 = &LAYOUT.registers[4];
        assert_eq!((set3.name, set3.offset), ("CLK_ENABLE_SET_REG3", 0x10));
        assert_eq!(set3.field("EFUSE_CLK_ENABLE_b").unwrap().offset, 5);
        assert_eq!(set3.field("EFUSE_PCLK_ENABLE_b").unwrap().offset, 19);

        let clear3 = &LAYOUT.registers[5];
        assert_eq!(
            (clear3.name, clear3.access),
            ("CLK_ENABLE_CLEAR_REG3", crate::memory_map::Access::WO)
        );
    }

    #[test]
    fn ulpss_gate_is_the_top_bit() {
        let set1: InMemoryRegister<u32, CLK_ENABLE_REG1::Register> = InMemoryRegister::new(0);
        set1.modify(
            CLK_ENABLE_REG1::ULPSS_CLK_ENABLE_b::SET + CLK_ENABLE_REG1::M4SS_UM_CLK_STATIC_EN_b::SET,
        );
        assert_eq!(set1.get(), 0x8008_0000);
        assert!(set1.is_set(CLK_ENABLE_REG1::ULPSS_CLK_ENABLE_b));
    }

    #[test]
    fn calibration_counters_are_full_width() {
        let sts2 = LAYOUT
            .registers
            .iter()
            .find(|register| register.name == "CLK_CALIB_STS_REG2")
            .unwrap();
        assert_eq!(sts2.field("CC_NUM_TEST_CLKS").unwrap().width, 32);
        assert_eq!(sts2.reserved_mask(), 0);
    }

    #[test]
    fn soc_clock_switch_and_status() {
        let mut config5: LocalRegisterCopy<u32, CLK_CONFIG_REG5::Register> =
            LocalRegisterCopy::new(0);
        config5.modify(
            CLK_CONFIG_REG5::M4_SOC_CLK_SEL::SocPllClk + CLK_CONFIG_REG5::M4_SOC_CLK_DIV_FAC.val(1),
        );
        assert_eq!(
            config5.read_as_enum(CLK_CONFIG_REG5::M4_SOC_CLK_SEL),
            Some(CLK_CONFIG_REG5::M4_SOC_CLK_SEL::Value::SocPllClk)
        );
        assert_eq!(config5.read(CLK_CONFIG_REG5::M4_SOC_CLK_DIV_FAC), 1);
        assert_eq!(config5.read(CLK_CONFIG_REG5::CT_CLK_SEL), 0);

        let stat = LAYOUT.register("PLL_STAT_REG").unwrap();
        let mut seen = 0u64;
        for field in stat.fields {
            assert_eq!(field.access, crate::memory_map::Access::RO);
            assert_eq!(seen & field.mask(), 0, "{} overlaps", field.name);
            seen |= field.mask();
        }
        assert!(stat.field("MODEMPLL_LOCK").is_ok());
        assert!(stat.field("USART1_SCLK_SWITCHED").is_ok());
    }

    #[test]
    fn mcu_clkout_and_usb_phy_divider() {
        let config3 = LAYOUT.register("CLK_CONFIG_REG3").unwrap();
        for name in ["MCU_CLKOUT_SEL", "MCU_CLKOUT_DIV_FAC", "MCU_CLKOUT_ENABLE"] {
            assert!(config3.field(name).is_ok(), "{}", name);
        }
        assert_eq!(config3.field("MCU_CLKOUT_DIV_FAC").unwrap().width, 6);

        let config6 = LAYOUT.register("CLK_CONFIG_REG6").unwrap();
        assert_eq!(config6.field("USB_PHY_CLK_DIV_FAC").unwrap().width, 2);
    }
}
