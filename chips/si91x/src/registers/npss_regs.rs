// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Always-on (NPSS) power management blocks.
//!
//! - MCU_AON: power gates of the NPSS peripherals and the slow clock select.
//! - MCU_FSM: sleep/wakeup state machine.
//! - BATT_FF: power gates of the M4SS and ULPSS domains and their RAM banks.
//! - MCU_RET: retention registers and the NPSS (UULP) GPIO pads.
//! - NPSS_INTR: the NPSS interrupt controller, as seen from the M4.
//!
//! Power gate registers come in SET / CLEAR pairs. Writing one to a bit of the
//! SET register enables the domain, writing one to the same bit of the CLEAR
//! register disables it; the SET register reads back the current state.

use core::mem::{offset_of, size_of};

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::Layout;

pub const MCU_RET_PARAM_NPSS_GPIOS: usize = 5;

register_structs! {
    pub McuAonRegisters {
        (0x000 => pub mcuaon_npss_pwrctrl_set_reg: ReadWrite<u32, NPSS_PWRCTRL::Register>),
        (0x004 => pub mcuaon_npss_pwrctrl_clear_reg: WriteOnly<u32, NPSS_PWRCTRL::Register>),
        (0x008 => pub mcuaon_ipmu_reset_ctrl: ReadWrite<u32, MCUAON_IPMU_RESET_CTRL::Register>),
        (0x00c => _reserved0),
        (0x010 => pub mcuaon_shelf_mode: ReadWrite<u32, MCUAON_SHELF_MODE::Register>),
        (0x014 => pub mcuaon_gen_ctrls: ReadWrite<u32, MCUAON_GEN_CTRLS::Register>),
        (0x018 => pub mcuaon_pdo_ctrls: ReadWrite<u32, MCUAON_PDO_CTRLS::Register>),
        (0x01c => pub mcuaon_wdt_chip_rst: ReadWrite<u32, MCUAON_WDT_CHIP_RST::Register>),
        (0x020 => pub mcuaon_khz_clk_sel_por_reset_status: ReadWrite<u32, MCUAON_KHZ_CLK_SEL_POR_RESET_STATUS::Register>),
        (0x024 => @END),
    },

    pub McuFsmRegisters {
        (0x000 => pub mcu_fsm_sleep_ctrls_and_wakeup_mode: ReadWrite<u32, MCU_FSM_SLEEP_CTRLS_AND_WAKEUP_MODE::Register>),
        (0x004 => pub mcu_fsm_peri_config_reg: ReadWrite<u32, MCU_FSM_PERI_CONFIG_REG::Register>),
        (0x008 => pub gpio_wakeup_register: ReadWrite<u32, GPIO_WAKEUP_REGISTER::Register>),
        (0x00c => pub mcu_fsm_deep_sleep_duration_lsb_reg: ReadWrite<u32>),
        (0x010 => pub mcu_fsm_xtal_and_pmu_good_count_reg: ReadWrite<u32, MCU_FSM_XTAL_AND_PMU_GOOD_COUNT_REG::Register>),
        (0x014 => pub mcu_fsm_power_ctrl_and_delay: ReadWrite<u32, MCU_FSM_POWER_CTRL_AND_DELAY::Register>),
        (0x018 => pub mcu_fsm_clks_reg: ReadWrite<u32, MCU_FSM_CLKS_REG::Register>),
        (0x01c => pub mcu_fsm_ref_clk_reg: ReadWrite<u32, MCU_FSM_REF_CLK_REG::Register>),
        (0x020 => pub mcu_fsm_clk_ens_and_first_bootup: ReadWrite<u32, MCU_FSM_CLK_ENS_AND_FIRST_BOOTUP::Register>),
        (0x024 => pub mcu_fsm_crtl_pdm_and_enables: ReadWrite<u32, MCU_FSM_CRTL_PDM_AND_ENABLES::Register>),
        (0x028 => _reserved0),
        (0x038 => pub mcu_fsm_wakeup_status_reg: ReadOnly<u32, MCU_FSM_WAKEUP_STATUS_REG::Register>),
        (0x03c => pub mcu_fsm_wakeup_status_clear: ReadWrite<u32, MCU_FSM_WAKEUP_STATUS_CLEAR::Register>),
        (0x040 => pub mcu_fsm_pmu_status_reg: ReadWrite<u32, MCU_FSM_PMU_STATUS_REG::Register>),
        (0x044 => @END),
    },

    pub BattFfRegisters {
        (0x000 => pub m4ss_bypass_pwrctrl_reg1: ReadWrite<u32>),
        (0x004 => pub m4ss_bypass_pwrctrl_reg2: ReadWrite<u32>),
        (0x008 => pub m4ss_pwrctrl_set_reg: ReadWrite<u32, M4SS_PWRCTRL::Register>),
        (0x00c => pub m4ss_pwrctrl_clear_reg: WriteOnly<u32, M4SS_PWRCTRL::Register>),
        (0x010 => pub m4_sram_pwrctrl_set_reg1: ReadWrite<u32, M4_SRAM_PWRCTRL::Register>),
        (0x014 => pub m4_sram_pwrctrl_clear_reg1: WriteOnly<u32, M4_SRAM_PWRCTRL::Register>),
        (0x018 => pub m4_sram_pwrctrl_set_reg2: ReadWrite<u32, M4_SRAM_PWRCTRL::Register>),
        (0x01c => pub m4_sram_pwrctrl_clear_reg2: WriteOnly<u32, M4_SRAM_PWRCTRL::Register>),
        (0x020 => pub ulpss_pwrctrl_set_reg: ReadWrite<u32, ULPSS_PWRCTRL::Register>),
        (0x024 => pub ulpss_pwrctrl_clear_reg: WriteOnly<u32, ULPSS_PWRCTRL::Register>),
        (0x028 => pub ulpss_ram_pwrctrl_set_reg1: ReadWrite<u32, ULPSS_RAM_PWRCTRL::Register>),
        (0x02c => pub ulpss_ram_pwrctrl_clear_reg1: WriteOnly<u32, ULPSS_RAM_PWRCTRL::Register>),
        (0x030 => pub m4_ulp_mode_config: ReadWrite<u32, M4_ULP_MODE_CONFIG::Register>),
        (0x034 => pub m4ss_tass_ctrl_set_reg: ReadWrite<u32, M4SS_TASS_CTRL::Register>),
        (0x038 => pub m4ss_tass_ctrl_clear_reg: WriteOnly<u32, M4SS_TASS_CTRL::Register>),
        (0x03c => pub mcu_pmu_ldo_ctrl_set: ReadWrite<u32, MCU_PMU_LDO_CTRL::Register>),
        (0x040 => pub mcu_pmu_ldo_ctrl_clear: WriteOnly<u32, MCU_PMU_LDO_CTRL::Register>),
        (0x044 => _reserved0),
        (0x058 => pub pllcci_pwrctrl_reg: ReadWrite<u32, PLLCCI_PWRCTRL_REG::Register>),
        (0x05c => pub dll_pwrctrl_reg: ReadWrite<u32, DLL_PWRCTRL_REG::Register>),
        (0x060 => pub ulpss_ram_pwrctrl_set_reg2: ReadWrite<u32, ULPSS_RAM_PWRCTRL::Register>),
        (0x064 => pub ulpss_ram_pwrctrl_clear_reg2: WriteOnly<u32, ULPSS_RAM_PWRCTRL::Register>),
        (0x068 => pub ulpss_ram_pwrctrl_set_reg3: ReadWrite<u32, ULPSS_RAM_PWRCTRL::Register>),
        (0x06c => pub ulpss_ram_pwrctrl_clear_reg3: WriteOnly<u32, ULPSS_RAM_PWRCTRL::Register>),
        (0x070 => _reserved1),
        (0x080 => pub mcu_fsm_ctrl_bypass: ReadWrite<u32, MCU_FSM_CTRL_BYPASS::Register>),
        (0x084 => @END),
    },

    pub NpssGpioCntrlRegisters {
        (0x000 => pub npss_gpio_ctrls: ReadWrite<u32, NPSS_GPIO_CTRLS::Register>),
        (0x004 => @END),
    },

    pub McuRetRegisters {
        (0x000 => pub mcuret_bootstatus: ReadWrite<u32>),
        (0x004 => _reserved0),
        (0x00c => pub chip_config_mcu_read: ReadOnly<u32, CHIP_CONFIG_MCU_READ::Register>),
        (0x010 => pub mcuaon_control_reg4: ReadWrite<u32>),
        (0x014 => _reserved1),
        (0x01c => pub npss_gpio_cntrl: [NpssGpioCntrlRegisters; MCU_RET_PARAM_NPSS_GPIOS]),
        (0x030 => @END),
    },

    pub NpssIntrRegisters {
        (0x000 => pub npss_intr_mask_set_reg: ReadWrite<u32, NPSS_INTR::Register>),
        (0x004 => pub npss_intr_mask_clr_reg: WriteOnly<u32, NPSS_INTR::Register>),
        (0x008 => pub npss_intr_clear_reg: WriteOnly<u32, NPSS_INTR::Register>),
        (0x00c => pub npss_intr_status_reg: ReadOnly<u32, NPSS_INTR::Register>),
        (0x010 => _reserved0),
        (0x01c => pub m4_ulp_slp_status_reg: ReadOnly<u32, M4_ULP_SLP_STATUS_REG::Register>),
        (0x020 => @END),
    }
}

register_bitfields![u32,
    pub NPSS_PWRCTRL [
        SLPSS_PWRGATE_ULP_MCUBFFS OFFSET(1) NUMBITS(1) [],
        SLPSS_PWRGATE_ULP_MCUFSM OFFSET(2) NUMBITS(1) [],
        SLPSS_PWRGATE_ULP_MCURTC OFFSET(3) NUMBITS(1) [],
        SLPSS_PWRGATE_ULP_MCUWDT OFFSET(4) NUMBITS(1) [],
        SLPSS_PWRGATE_ULP_MCUPS OFFSET(5) NUMBITS(1) [],
        SLPSS_PWRGATE_ULP_MCUTS OFFSET(6) NUMBITS(1) [],
        SLPSS_PWRGATE_ULP_MCUSTORE1 OFFSET(7) NUMBITS(1) [],
        SLPSS_PWRGATE_ULP_MCUSTORE2 OFFSET(8) NUMBITS(1) [],
        SLPSS_PWRGATE_ULP_MCUSTORE3 OFFSET(9) NUMBITS(1) [],
        SLPSS_PWRGATE_ULP_TIMEPERIOD OFFSET(10) NUMBITS(1) [],
        SLPSS_PWRGATE_ULP_NWPAPB_MCU_CTRL OFFSET(16) NUMBITS(1) []
    ],
    pub MCUAON_IPMU_RESET_CTRL [
        ULP_ANALOG_SPI_RESET_N OFFSET(0) NUMBITS(1) [],
        IPMU_SPI_RESET_N OFFSET(1) NUMBITS(1) []
    ],
    pub MCUAON_SHELF_MODE [
        /// Write the shelf mode key to enter shelf mode
        ENTER_SHELF_MODE OFFSET(0) NUMBITS(16) [],
        SHELF_MODE_GPIOBASED OFFSET(16) NUMBITS(1) []
    ],
    pub MCUAON_GEN_CTRLS [
        XTAL_CLK_FROM_GPIO OFFSET(0) NUMBITS(1) [],
        ULP_XTAL_CLK_FROM_GPIO OFFSET(1) NUMBITS(1) [],
        ENABLE_PDO OFFSET(16) NUMBITS(1) [],
        NPSS_SUPPLY_0P9 OFFSET(17) NUMBITS(1) []
    ],
    pub MCUAON_PDO_CTRLS [
        PDO_ENABLE OFFSET(0) NUMBITS(1) [],
        PDO_SEL OFFSET(1) NUMBITS(2) []
    ],
    pub MCUAON_WDT_CHIP_RST [
        MCU_WDT_BASED_CHIP_RESET OFFSET(0) NUMBITS(1) []
    ],
    pub MCUAON_KHZ_CLK_SEL_POR_RESET_STATUS [
        AON_KHZ_CLK_SEL OFFSET(0) NUMBITS(3) [
            RoClock = 1,
            RcClock = 2,
            XtalClock = 4
        ],
        AON_KHZ_CLK_SEL_CLOCK_SWITCHED OFFSET(4) NUMBITS(1) [],
        AON_KHZ_CLK_SEL_SYSRTC OFFSET(5) NUMBITS(3) [],
        MCU_FIRST_POWERUP_POR OFFSET(16) NUMBITS(1) [],
        MCU_FIRST_POWERUP_RESET_N OFFSET(17) NUMBITS(1) []
    ],

    pub MCU_FSM_SLEEP_CTRLS_AND_WAKEUP_MODE [
        LP_SLEEP_MODE_b OFFSET(0) NUMBITS(1) [],
        SKIP_XTAL_WAIT_TIME OFFSET(1) NUMBITS(1) [],
        HPSRAM_RET_ULP_MODE_EN_b OFFSET(2) NUMBITS(1) [],
        M4SS_RAM_RETENTION_MODE_EN_b OFFSET(3) NUMBITS(1) [],
        M4ULP_RAM_RETENTION_MODE_EN_b OFFSET(4) NUMBITS(1) [],
        TA_RAM_RETENTION_MODE_EN_b OFFSET(5) NUMBITS(1) [],
        ULPSS_RAM_RETENTION_MODE_EN_b OFFSET(6) NUMBITS(1) [],
        M4ULP_RAM16K_RETENTION_MODE_EN_b OFFSET(7) NUMBITS(1) [],
        LDO_SOC_ON_b OFFSET(8) NUMBITS(1) [],
        LDO_FLASH_ON_b OFFSET(9) NUMBITS(1) [],
        PMU_DCDC_ON_b OFFSET(10) NUMBITS(1) [],
        DST_BASED_WAKEUP_b OFFSET(16) NUMBITS(1) [],
        HOST_BASED_WAKEUP_b OFFSET(17) NUMBITS(1) [],
        WIRELESS_BASED_WAKEUP_b OFFSET(18) NUMBITS(1) [],
        M4_PROCS_BASED_WAKEUP_b OFFSET(19) NUMBITS(1) [],
        GPIO_BASED_WAKEUP_b OFFSET(20) NUMBITS(1) [],
        COMPR_BASED_WAKEUP_b OFFSET(21) NUMBITS(1) [],
        SYSRTC_BASED_WAKEUP_b OFFSET(22) NUMBITS(1) [],
        WIC_BASED_WAKEUP_b OFFSET(23) NUMBITS(1) [],
        ULPSS_BASED_WAKEUP_b OFFSET(24) NUMBITS(1) [],
        SDCSS_BASED_WAKEUP_b OFFSET(25) NUMBITS(1) [],
        ALARM_BASED_WAKEUP_b OFFSET(26) NUMBITS(1) [],
        SEC_BASED_WAKEUP_b OFFSET(27) NUMBITS(1) [],
        MSEC_BASED_WAKEUP_b OFFSET(28) NUMBITS(1) [],
        WDT_INTR_BASED_WAKEUP_b OFFSET(29) NUMBITS(1) []
    ],
    pub MCU_FSM_PERI_CONFIG_REG [
        ULP_MCU_MODE_EN OFFSET(0) NUMBITS(1) [],
        WICENABLE_b OFFSET(2) NUMBITS(1) [],
        M4SS_CONTEXT_SWITCH_TOP_ULP_MODE OFFSET(16) NUMBITS(2) [],
        BGPMU_SAMPLING_EN_R OFFSET(24) NUMBITS(1) []
    ],
    pub GPIO_WAKEUP_REGISTER [
        GPIO_WAKEUP_EN OFFSET(0) NUMBITS(5) [],
        GPIO_WAKEUP_POLARITY OFFSET(16) NUMBITS(5) []
    ],
    pub MCU_FSM_XTAL_AND_PMU_GOOD_COUNT_REG [
        MCUFSM_XTAL_GOODTIME_DURATION_COUNT OFFSET(0) NUMBITS(7) [],
        MCUFSM_PMU_POWERGOOD_DURATION_COUNT OFFSET(16) NUMBITS(7) []
    ],
    pub MCU_FSM_POWER_CTRL_AND_DELAY [
        PS2_PMU_LDO_OFF_DELAY OFFSET(0) NUMBITS(5) [],
        PS4_SOCLDO_ON_DELAY OFFSET(8) NUMBITS(4) [],
        PG4_BUCK_ON_DELAY OFFSET(12) NUMBITS(4) [],
        FSM_PERI_SOC_LDO_EN OFFSET(16) NUMBITS(1) [],
        FSM_PERI_DCDC_EN OFFSET(17) NUMBITS(1) [],
        POWER_MUX_SEL_ULPSS OFFSET(18) NUMBITS(1) [],
        POWER_MUX_SEL_M4_ULP OFFSET(19) NUMBITS(2) [],
        POWER_MUX_SEL_M4_ULP_RAM_16K OFFSET(21) NUMBITS(2) [],
        POWER_MUX_SEL_M4_ULP_RAM OFFSET(23) NUMBITS(2) [],
        POWER_MUX_SEL_ULPSS_RAM OFFSET(25) NUMBITS(2) []
    ],
    pub MCU_FSM_CLKS_REG [
        HF_FSM_CLK_SELECT OFFSET(0) NUMBITS(3) [],
        HF_FSM_CLK_SWITCHED_SYNC OFFSET(4) NUMBITS(1) [],
        HF_FSM_CLK_FREQ OFFSET(16) NUMBITS(6) []
    ],
    pub MCU_FSM_REF_CLK_REG [
        M4SS_REF_CLK_SEL OFFSET(0) NUMBITS(3) [],
        M4SS_REF_CLK_CLEANER_OFF_b OFFSET(7) NUMBITS(1) [],
        ULPSS_REF_CLK_SEL_b OFFSET(8) NUMBITS(3) [],
        ULPSS_REF_CLK_CLEANER_OFF_b OFFSET(15) NUMBITS(1) [],
        SDCSS_CLK_SEL_b OFFSET(16) NUMBITS(2) [],
        SDCSS_CLK_EN_b OFFSET(18) NUMBITS(1) [],
        SDCSS_STATIC_CLK_EN_b OFFSET(19) NUMBITS(1) []
    ],
    pub MCU_FSM_CLK_ENS_AND_FIRST_BOOTUP [
        MCU_ULP_40MHZ_CLK_EN_b OFFSET(0) NUMBITS(1) [],
        MCU_ULP_DOUBLER_CLK_EN_b OFFSET(1) NUMBITS(1) [],
        MCU_ULP_20MHZ_RING_OSC_CLK_EN_b OFFSET(2) NUMBITS(1) [],
        MCU_ULP_MHZ_RC_CLK_EN_b OFFSET(3) NUMBITS(1) [],
        MCU_ULP_32KHZ_XTAL_CLK_EN_b OFFSET(4) NUMBITS(1) [],
        MCU_ULP_32KHZ_RO_CLK_EN_b OFFSET(5) NUMBITS(1) [],
        MCU_ULP_32KHZ_RC_CLK_EN_b OFFSET(6) NUMBITS(1) [],
        FIRST_BOOTUP_MCU_N_b OFFSET(16) NUMBITS(1) []
    ],
    pub MCU_FSM_CRTL_PDM_AND_ENABLES [
        ENABLE_WDT_IN_SLEEP_b OFFSET(0) NUMBITS(1) [],
        ENABLE_WURX_DETECTION_b OFFSET(1) NUMBITS(1) [],
        RESET_MCU_BBF_DM_EN_b OFFSET(2) NUMBITS(1) [],
        DISABLE_TURNOFF_SRAM_PERI_b OFFSET(3) NUMBITS(1) [],
        ENABLE_SRAM_DS_CTRL_b OFFSET(4) NUMBITS(1) [],
        POWER_ENABLE_FSM_PERI_b OFFSET(16) NUMBITS(1) [],
        POWER_ENABLE_TIMESTAMPING_b OFFSET(17) NUMBITS(1) [],
        POWER_ENABLE_DEEPSLEEP_TIMER_b OFFSET(18) NUMBITS(1) [],
        POWER_ENABLE_RETENTION_DM_b OFFSET(19) NUMBITS(1) []
    ],
    pub MCU_FSM_WAKEUP_STATUS_REG [
        WAKEUP_INDICATION OFFSET(0) NUMBITS(1) [],
        TIMEOUT_WAKEUP OFFSET(1) NUMBITS(1) [],
        HOST_BASED_WAKEUP_S OFFSET(2) NUMBITS(1) [],
        WATCHDOG_RESET_INTERRUPT OFFSET(3) NUMBITS(1) [],
        WWD_RESET_LOOKUP_WAKEUP OFFSET(4) NUMBITS(1) [],
        WATCH_DOG_WINDOW_RESET_INTERRUPT OFFSET(5) NUMBITS(1) [],
        CDBG_POWER_UP_REQUEST_WAKEUP OFFSET(6) NUMBITS(1) []
    ],
    /// Write one to clear the matching wakeup source
    pub MCU_FSM_WAKEUP_STATUS_CLEAR [
        WWD_INTERRUPT_STATUS_CLEAR_b OFFSET(0) NUMBITS(1) [],
        MILLI_SEC_BASED_STATUS_CLEAR_b OFFSET(1) NUMBITS(1) [],
        RTC_SEC_BASED_STATUS_CLEAR_b OFFSET(2) NUMBITS(1) [],
        RTC_ALARM_BASED_WAKEUP_STATUS_CLEAR_b OFFSET(3) NUMBITS(1) [],
        COMP_BASED_WAKEUP_STATUS_CLEAR_b OFFSET(4) NUMBITS(6) [],
        RF_WAKEUP_CLEAR_b OFFSET(10) NUMBITS(1) [],
        MCU_WAKEUP_INTERRUPT_b OFFSET(11) NUMBITS(1) [],
        SYSRTC_WAKEUP_CLEAR_b OFFSET(12) NUMBITS(1) []
    ],
    pub MCU_FSM_PMU_STATUS_REG [
        BGPMU_SLEEP_EN_R_b OFFSET(16) NUMBITS(1) [],
        STANDBY_LDORF_R OFFSET(17) NUMBITS(1) [],
        STANDBY_LDOSOC_R OFFSET(18) NUMBITS(1) [],
        STANDBY_DC1P3_R OFFSET(19) NUMBITS(1) []
    ],

    pub M4SS_PWRCTRL [
        M4SS_PWRGATE_ULP_EFUSE_PERI OFFSET(4) NUMBITS(1) [],
        M4SS_PWRGATE_ULP_RPDMA OFFSET(9) NUMBITS(1) [],
        M4SS_PWRGATE_ULP_SDIO_SPI OFFSET(11) NUMBITS(1) [],
        M4SS_PWRGATE_ULP_QSPI_ICACHE OFFSET(13) NUMBITS(1) [],
        M4SS_PWRGATE_ULP_IID OFFSET(14) NUMBITS(1) [],
        M4SS_PWRGATE_ULP_M4_DEBUG_FPU OFFSET(17) NUMBITS(1) [],
        M4SS_PWRGATE_ULP_M4_CORE OFFSET(18) NUMBITS(1) [],
        M4SS_PWRGATE_ULP_EXT_ROM OFFSET(22) NUMBITS(1) []
    ],
    pub M4_SRAM_PWRCTRL [
        RAM_BANKS OFFSET(0) NUMBITS(10) []
    ],
    pub ULPSS_PWRCTRL [
        ULPSS_PWRGATE_ULP_MISC OFFSET(18) NUMBITS(1) [],
        ULPSS_PWRGATE_ULP_CAP OFFSET(19) NUMBITS(1) [],
        ULPSS_PWRGATE_ULP_VAD OFFSET(20) NUMBITS(1) [],
        ULPSS_PWRGATE_ULP_UART OFFSET(21) NUMBITS(1) [],
        ULPSS_PWRGATE_ULP_SSI OFFSET(22) NUMBITS(1) [],
        ULPSS_PWRGATE_ULP_I2S OFFSET(23) NUMBITS(1) [],
        ULPSS_PWRGATE_ULP_I2C OFFSET(24) NUMBITS(1) [],
        ULPSS_PWRGATE_ULP_AUX OFFSET(25) NUMBITS(1) [],
        ULPSS_PWRGATE_ULP_IR OFFSET(26) NUMBITS(1) [],
        ULPSS_PWRGATE_ULP_UDMA OFFSET(27) NUMBITS(1) [],
        ULPSS_PWRGATE_ULP_FIM OFFSET(28) NUMBITS(1) []
    ],
    pub ULPSS_RAM_PWRCTRL [
        ULPSS_2K_BANKS OFFSET(0) NUMBITS(4) []
    ],
    pub M4_ULP_MODE_CONFIG [
        ULPMODE_ISOLATION_CTRL OFFSET(0) NUMBITS(1) [],
        ENABLE_NEGEDGE_ULP OFFSET(1) NUMBITS(1) [],
        ULP_MODE_AFTR_CLK_SW OFFSET(2) NUMBITS(1) [],
        ULP_MODE_SWITCHED_NPSS OFFSET(3) NUMBITS(1) []
    ],
    pub M4SS_TASS_CTRL [
        M4SS_CTRL_TASS_AON_PWRGATE_EN OFFSET(0) NUMBITS(1) [],
        M4SS_CTRL_TASS_AON_DISABLE_ISOLATION_BYPASS OFFSET(1) NUMBITS(1) [],
        M4SS_CTRL_TASS_AON_PWR_DMN_RST_BYPASS OFFSET(2) NUMBITS(1) []
    ],
    pub MCU_PMU_LDO_CTRL [
        MCU_FLASH_LDO_EN OFFSET(0) NUMBITS(1) [],
        MCU_SOC_LDO_EN OFFSET(1) NUMBITS(1) [],
        MCU_DCDC_EN OFFSET(2) NUMBITS(1) [],
        MCU_SOC_LDO_LVL OFFSET(16) NUMBITS(1) [],
        MCU_DCDC_LVL OFFSET(17) NUMBITS(1) []
    ],
    pub PLLCCI_PWRCTRL_REG [
        I2SPLL_ISO_ENABLE OFFSET(0) NUMBITS(1) [],
        I2SPLL_BYPASS_ISO_GEN OFFSET(1) NUMBITS(1) [],
        INTFPLL_ISO_ENABLE OFFSET(2) NUMBITS(1) [],
        INTFPLL_BYPASS_ISO_GEN OFFSET(3) NUMBITS(1) [],
        SOCPLL_ISO_ENABLE OFFSET(4) NUMBITS(1) [],
        SOCPLL_BYPASS_ISO_GEN OFFSET(5) NUMBITS(1) [],
        SOCPLL_SPI_PG_EN OFFSET(6) NUMBITS(1) [],
        SOCPLL_VDD13_ISO_EN OFFSET(7) NUMBITS(1) []
    ],
    pub DLL_PWRCTRL_REG [
        QSPI_DLL_RX_ISO_ENABLE OFFSET(0) NUMBITS(1) [],
        QSPI_DLL_RX_BYPASS_ISO_GEN OFFSET(1) NUMBITS(1) [],
        QSPI_DLL_RX_PG_EN_N OFFSET(2) NUMBITS(1) [],
        QSPI_DLL_TX_ISO_ENABLE OFFSET(3) NUMBITS(1) [],
        QSPI_DLL_TX_BYPASS_ISO_GEN OFFSET(4) NUMBITS(1) [],
        QSPI_DLL_TX_PG_EN_N OFFSET(5) NUMBITS(1) []
    ],
    pub MCU_FSM_CTRL_BYPASS [
        MCU_XTAL_EN_40MHZ_BYPASS_CTRL OFFSET(0) NUMBITS(1) [],
        MCU_XTAL_EN_40MHZ_BYPASS OFFSET(1) NUMBITS(1) [],
        MCU_PMU_SHUT_DOWN_BYPASS_CTRL OFFSET(2) NUMBITS(1) [],
        MCU_PMU_SHUT_DOWN_BYPASS OFFSET(3) NUMBITS(1) [],
        MCU_BUCK_BOOST_ENABLE_BYPASS_CTRL OFFSET(4) NUMBITS(1) [],
        MCU_BUCK_BOOST_ENABLE_BYPASS OFFSET(5) NUMBITS(1) []
    ],

    pub CHIP_CONFIG_MCU_READ [
        DISABLE_M4 OFFSET(0) NUMBITS(1) [],
        LIMIT_M4_FREQ_110MHZ_b OFFSET(1) NUMBITS(1) [],
        DISABLE_M4_ULP_MODE OFFSET(2) NUMBITS(1) [],
        M4_FLASH_SIZE OFFSET(3) NUMBITS(2) [],
        DISABLE_ANALOG_PERIPH OFFSET(5) NUMBITS(1) [],
        DISABLE_CAN_INTERFACE OFFSET(6) NUMBITS(1) [],
        DISABLE_USB OFFSET(7) NUMBITS(1) []
    ],
    pub NPSS_GPIO_CTRLS [
        NPSS_GPIO_MODE OFFSET(0) NUMBITS(3) [],
        NPSS_GPIO_REN OFFSET(3) NUMBITS(1) [],
        NPSS_GPIO_OEN OFFSET(4) NUMBITS(1) [],
        NPSS_GPIO_OUT OFFSET(5) NUMBITS(1) [],
        USE_ULPSS_PAD OFFSET(8) NUMBITS(1) [],
        NPSS_GPIO_POLARITY OFFSET(9) NUMBITS(1) [],
        NPSS_GPIO_IN OFFSET(12) NUMBITS(1) []
    ],

    pub NPSS_INTR [
        NPSS_TO_MCU_WDT_INTR OFFSET(0) NUMBITS(1) [],
        NPSS_TO_MCU_GPIO_INTR OFFSET(1) NUMBITS(5) [],
        NPSS_TO_MCU_CMP_INTR OFFSET(6) NUMBITS(4) [],
        NPSS_TO_MCU_RFWAKEUP_INTR OFFSET(10) NUMBITS(1) [],
        NPSS_TO_MCU_BOD_INTR OFFSET(11) NUMBITS(1) [],
        NPSS_TO_MCU_BUTTON_INTR OFFSET(12) NUMBITS(1) [],
        NPSS_TO_MCU_SDC_INTR OFFSET(13) NUMBITS(1) [],
        NPSS_TO_MCU_WIRELESS_INTR OFFSET(14) NUMBITS(1) [],
        NPSS_TO_MCU_WAKEUP_INTR OFFSET(15) NUMBITS(1) [],
        NPSS_TO_MCU_ALARM_INTR OFFSET(16) NUMBITS(1) [],
        NPSS_TO_MCU_SEC_INTR OFFSET(17) NUMBITS(1) [],
        NPSS_TO_MCU_MSEC_INTR OFFSET(18) NUMBITS(1) [],
        NPSS_TO_MCU_PROCESSOR_INTR OFFSET(19) NUMBITS(1) [],
        NPSS_TO_MCU_HOST_INTR OFFSET(20) NUMBITS(1) [],
        NPSS_TO_MCU_DST_INTR OFFSET(21) NUMBITS(1) []
    ],
    pub M4_ULP_SLP_STATUS_REG [
        /// Set after a wakeup, clear after first boot
        MCU_ULP_WAKEUP OFFSET(0) NUMBITS(1) []
    ]
];

const _: () = assert!(offset_of!(McuAonRegisters, mcuaon_shelf_mode) == 0x10);
const _: () = assert!(offset_of!(McuAonRegisters, mcuaon_gen_ctrls) == 0x14);
const _: () = assert!(offset_of!(McuFsmRegisters, mcu_fsm_wakeup_status_reg) == 0x38);
const _: () = assert!(offset_of!(McuFsmRegisters, mcu_fsm_pmu_status_reg) == 0x40);
const _: () = assert!(offset_of!(BattFfRegisters, m4ss_tass_ctrl_set_reg) == 0x34);
const _: () = assert!(offset_of!(BattFfRegisters, m4ss_tass_ctrl_clear_reg) == 0x38);
const _: () = assert!(offset_of!(McuRetRegisters, mcuaon_control_reg4) == 0x10);
const _: () = assert!(offset_of!(McuRetRegisters, npss_gpio_cntrl) == 0x1c);
const _: () = assert!(offset_of!(NpssIntrRegisters, m4_ulp_slp_status_reg) == 0x1c);
const _: () = assert!(size_of::<BattFfRegisters>() <= 0x100);

pub static AON_LAYOUT: Layout = layout!(McuAonRegisters {
    mcuaon_npss_pwrctrl_set_reg => "MCUAON_NPSS_PWRCTRL_SET_REG": u32, RW, NPSS_PWRCTRL {
        SLPSS_PWRGATE_ULP_MCUBFFS: RW, SLPSS_PWRGATE_ULP_MCUFSM: RW, SLPSS_PWRGATE_ULP_MCURTC: RW,
        SLPSS_PWRGATE_ULP_MCUWDT: RW, SLPSS_PWRGATE_ULP_MCUPS: RW, SLPSS_PWRGATE_ULP_MCUTS: RW,
        SLPSS_PWRGATE_ULP_MCUSTORE1: RW, SLPSS_PWRGATE_ULP_MCUSTORE2: RW,
        SLPSS_PWRGATE_ULP_MCUSTORE3: RW, SLPSS_PWRGATE_ULP_TIMEPERIOD: RW,
        SLPSS_PWRGATE_ULP_NWPAPB_MCU_CTRL: RW
    };
    mcuaon_npss_pwrctrl_clear_reg => "MCUAON_NPSS_PWRCTRL_CLEAR_REG": u32, WO, NPSS_PWRCTRL {
        SLPSS_PWRGATE_ULP_MCUBFFS: WO, SLPSS_PWRGATE_ULP_MCUFSM: WO, SLPSS_PWRGATE_ULP_MCURTC: WO,
        SLPSS_PWRGATE_ULP_MCUWDT: WO, SLPSS_PWRGATE_ULP_MCUPS: WO, SLPSS_PWRGATE_ULP_MCUTS: WO,
        SLPSS_PWRGATE_ULP_MCUSTORE1: WO, SLPSS_PWRGATE_ULP_MCUSTORE2: WO,
        SLPSS_PWRGATE_ULP_MCUSTORE3: WO, SLPSS_PWRGATE_ULP_TIMEPERIOD: WO,
        SLPSS_PWRGATE_ULP_NWPAPB_MCU_CTRL: WO
    };
    mcuaon_ipmu_reset_ctrl => "MCUAON_IPMU_RESET_CTRL": u32, RW, MCUAON_IPMU_RESET_CTRL {
        ULP_ANALOG_SPI_RESET_N: RW, IPMU_SPI_RESET_N: RW
    };
    mcuaon_shelf_mode => "MCUAON_SHELF_MODE": u32, RW, MCUAON_SHELF_MODE {
        ENTER_SHELF_MODE: WO, SHELF_MODE_GPIOBASED: RW
    };
    mcuaon_gen_ctrls => "MCUAON_GEN_CTRLS": u32, RW, MCUAON_GEN_CTRLS {
        XTAL_CLK_FROM_GPIO: RW, ULP_XTAL_CLK_FROM_GPIO: RW, ENABLE_PDO: RW, NPSS_SUPPLY_0P9: RW
    };
    mcuaon_pdo_ctrls => "MCUAON_PDO_CTRLS": u32, RW, MCUAON_PDO_CTRLS { PDO_ENABLE: RW, PDO_SEL: RW };
    mcuaon_wdt_chip_rst => "MCUAON_WDT_CHIP_RST": u32, RW, MCUAON_WDT_CHIP_RST {
        MCU_WDT_BASED_CHIP_RESET: RW
    };
    mcuaon_khz_clk_sel_por_reset_status => "MCUAON_KHZ_CLK_SEL_POR_RESET_STATUS": u32, RW,
        MCUAON_KHZ_CLK_SEL_POR_RESET_STATUS {
            AON_KHZ_CLK_SEL: RW, AON_KHZ_CLK_SEL_CLOCK_SWITCHED: RO, AON_KHZ_CLK_SEL_SYSRTC: RW,
            MCU_FIRST_POWERUP_POR: RO, MCU_FIRST_POWERUP_RESET_N: RO
        };
});

pub static FSM_LAYOUT: Layout = layout!(McuFsmRegisters {
    mcu_fsm_sleep_ctrls_and_wakeup_mode => "MCU_FSM_SLEEP_CTRLS_AND_WAKEUP_MODE": u32, RW,
        MCU_FSM_SLEEP_CTRLS_AND_WAKEUP_MODE {
            LP_SLEEP_MODE_b: RW, SKIP_XTAL_WAIT_TIME: RW, HPSRAM_RET_ULP_MODE_EN_b: RW,
            M4SS_RAM_RETENTION_MODE_EN_b: RW, M4ULP_RAM_RETENTION_MODE_EN_b: RW,
            TA_RAM_RETENTION_MODE_EN_b: RW, ULPSS_RAM_RETENTION_MODE_EN_b: RW,
            M4ULP_RAM16K_RETENTION_MODE_EN_b: RW, LDO_SOC_ON_b: RW, LDO_FLASH_ON_b: RW,
            PMU_DCDC_ON_b: RW, DST_BASED_WAKEUP_b: RW, HOST_BASED_WAKEUP_b: RW,
            WIRELESS_BASED_WAKEUP_b: RW, M4_PROCS_BASED_WAKEUP_b: RW, GPIO_BASED_WAKEUP_b: RW,
            COMPR_BASED_WAKEUP_b: RW, SYSRTC_BASED_WAKEUP_b: RW, WIC_BASED_WAKEUP_b: RW,
            ULPSS_BASED_WAKEUP_b: RW, SDCSS_BASED_WAKEUP_b: RW, ALARM_BASED_WAKEUP_b: RW,
            SEC_BASED_WAKEUP_b: RW, MSEC_BASED_WAKEUP_b: RW, WDT_INTR_BASED_WAKEUP_b: RW
        };
    mcu_fsm_peri_config_reg => "MCU_FSM_PERI_CONFIG_REG": u32, RW, MCU_FSM_PERI_CONFIG_REG {
        ULP_MCU_MODE_EN: RW, WICENABLE_b: RW, M4SS_CONTEXT_SWITCH_TOP_ULP_MODE: RW,
        BGPMU_SAMPLING_EN_R: RW
    };
    gpio_wakeup_register => "GPIO_WAKEUP_REGISTER": u32, RW, GPIO_WAKEUP_REGISTER {
        GPIO_WAKEUP_EN: RW, GPIO_WAKEUP_POLARITY: RW
    };
    mcu_fsm_deep_sleep_duration_lsb_reg => "MCU_FSM_DEEP_SLEEP_DURATION_LSB_REG": u32, RW;
    mcu_fsm_xtal_and_pmu_good_count_reg => "MCU_FSM_XTAL_AND_PMU_GOOD_COUNT_REG": u32, RW,
        MCU_FSM_XTAL_AND_PMU_GOOD_COUNT_REG {
            MCUFSM_XTAL_GOODTIME_DURATION_COUNT: RW, MCUFSM_PMU_POWERGOOD_DURATION_COUNT: RW
        };
    mcu_fsm_power_ctrl_and_delay => "MCU_FSM_POWER_CTRL_AND_DELAY": u32, RW,
        MCU_FSM_POWER_CTRL_AND_DELAY {
            PS2_PMU_LDO_OFF_DELAY: RW, PS4_SOCLDO_ON_DELAY: RW, PG4_BUCK_ON_DELAY: RW,
            FSM_PERI_SOC_LDO_EN: RW, FSM_PERI_DCDC_EN: RW, POWER_MUX_SEL_ULPSS: RW,
            POWER_MUX_SEL_M4_ULP: RW, POWER_MUX_SEL_M4_ULP_RAM_16K: RW,
            POWER_MUX_SEL_M4_ULP_RAM: RW, POWER_MUX_SEL_ULPSS_RAM: RW
        };
    mcu_fsm_clks_reg => "MCU_FSM_CLKS_REG": u32, RW, MCU_FSM_CLKS_REG {
        HF_FSM_CLK_SELECT: RW, HF_FSM_CLK_SWITCHED_SYNC: RO, HF_FSM_CLK_FREQ: RW
    };
    mcu_fsm_ref_clk_reg => "MCU_FSM_REF_CLK_REG": u32, RW, MCU_FSM_REF_CLK_REG {
        M4SS_REF_CLK_SEL: RW, M4SS_REF_CLK_CLEANER_OFF_b: RW, ULPSS_REF_CLK_SEL_b: RW,
        ULPSS_REF_CLK_CLEANER_OFF_b: RW, SDCSS_CLK_SEL_b: RW, SDCSS_CLK_EN_b: RW,
        SDCSS_STATIC_CLK_EN_b: RW
    };
    mcu_fsm_clk_ens_and_first_bootup => "MCU_FSM_CLK_ENS_AND_FIRST_BOOTUP": u32, RW,
        MCU_FSM_CLK_ENS_AND_FIRST_BOOTUP {
            MCU_ULP_40MHZ_CLK_EN_b: RW, MCU_ULP_DOUBLER_CLK_EN_b: RW,
            MCU_ULP_20MHZ_RING_OSC_CLK_EN_b: RW, MCU_ULP_MHZ_RC_CLK_EN_b: RW,
            MCU_ULP_32KHZ_XTAL_CLK_EN_b: RW, MCU_ULP_32KHZ_RO_CLK_EN_b: RW,
            MCU_ULP_32KHZ_RC_CLK_EN_b: RW, FIRST_BOOTUP_MCU_N_b: RW
        };
    mcu_fsm_crtl_pdm_and_enables => "MCU_FSM_CRTL_PDM_AND_ENABLES": u32, RW,
        MCU_FSM_CRTL_PDM_AND_ENABLES {
            ENABLE_WDT_IN_SLEEP_b: RW, ENABLE_WURX_DETECTION_b: RW, RESET_MCU_BBF_DM_EN_b: RW,
            DISABLE_TURNOFF_SRAM_PERI_b: RW, ENABLE_SRAM_DS_CTRL_b: RW,
            POWER_ENABLE_FSM_PERI_b: RW, POWER_ENABLE_TIMESTAMPING_b: RW,
            POWER_ENABLE_DEEPSLEEP_TIMER_b: RW, POWER_ENABLE_RETENTION_DM_b: RW
        };
    mcu_fsm_wakeup_status_reg => "MCU_FSM_WAKEUP_STATUS_REG": u32, RO, MCU_FSM_WAKEUP_STATUS_REG {
        WAKEUP_INDICATION: RO, TIMEOUT_WAKEUP: RO, HOST_BASED_WAKEUP_S: RO,
        WATCHDOG_RESET_INTERRUPT: RO, WWD_RESET_LOOKUP_WAKEUP: RO,
        WATCH_DOG_WINDOW_RESET_INTERRUPT: RO, CDBG_POWER_UP_REQUEST_WAKEUP: RO
    };
    mcu_fsm_wakeup_status_clear => "MCU_FSM_WAKEUP_STATUS_CLEAR": u32, RW,
        MCU_FSM_WAKEUP_STATUS_CLEAR {
            WWD_INTERRUPT_STATUS_CLEAR_b: RW, MILLI_SEC_BASED_STATUS_CLEAR_b: RW,
            RTC_SEC_BASED_STATUS_CLEAR_b: RW, RTC_ALARM_BASED_WAKEUP_STATUS_CLEAR_b: RW,
            COMP_BASED_WAKEUP_STATUS_CLEAR_b: RW, RF_WAKEUP_CLEAR_b: RW,
            MCU_WAKEUP_INTERRUPT_b: RW, SYSRTC_WAKEUP_CLEAR_b: RW
        };
    mcu_fsm_pmu_status_reg => "MCU_FSM_PMU_STATUS_REG": u32, RW, MCU_FSM_PMU_STATUS_REG {
        BGPMU_SLEEP_EN_R_b: RW, STANDBY_LDORF_R: RW, STANDBY_LDOSOC_R: RW, STANDBY_DC1P3_R: RW
    };
});

pub static BATT_FF_LAYOUT: Layout = layout!(BattFfRegisters {
    m4ss_bypass_pwrctrl_reg1 => "M4SS_BYPASS_PWRCTRL_REG1": u32, RW;
    m4ss_bypass_pwrctrl_reg2 => "M4SS_BYPASS_PWRCTRL_REG2": u32, RW;
    m4ss_pwrctrl_set_reg => "M4SS_PWRCTRL_SET_REG": u32, RW, M4SS_PWRCTRL {
        M4SS_PWRGATE_ULP_EFUSE_PERI: RW, M4SS_PWRGATE_ULP_RPDMA: RW, M4SS_PWRGATE_ULP_SDIO_SPI: RW,
        M4SS_PWRGATE_ULP_QSPI_ICACHE: RW, M4SS_PWRGATE_ULP_IID: RW,
        M4SS_PWRGATE_ULP_M4_DEBUG_FPU: RW, M4SS_PWRGATE_ULP_M4_CORE: RW,
        M4SS_PWRGATE_ULP_EXT_ROM: RW
    };
    m4ss_pwrctrl_clear_reg => "M4SS_PWRCTRL_CLEAR_REG": u32, WO, M4SS_PWRCTRL {
        M4SS_PWRGATE_ULP_EFUSE_PERI: WO, M4SS_PWRGATE_ULP_RPDMA: WO, M4SS_PWRGATE_ULP_SDIO_SPI: WO,
        M4SS_PWRGATE_ULP_QSPI_ICACHE: WO, M4SS_PWRGATE_ULP_IID: WO,
        M4SS_PWRGATE_ULP_M4_DEBUG_FPU: WO, M4SS_PWRGATE_ULP_M4_CORE: WO,
        M4SS_PWRGATE_ULP_EXT_ROM: WO
    };
    m4_sram_pwrctrl_set_reg1 => "M4_SRAM_PWRCTRL_SET_REG1": u32, RW, M4_SRAM_PWRCTRL { RAM_BANKS: RW };
    m4_sram_pwrctrl_clear_reg1 => "M4_SRAM_PWRCTRL_CLEAR_REG1": u32, WO, M4_SRAM_PWRCTRL { RAM_BANKS: WO };
    m4_sram_pwrctrl_set_reg2 => "M4_SRAM_PWRCTRL_SET_REG2": u32, RW, M4_SRAM_PWRCTRL { RAM_BANKS: RW };
    m4_sram_pwrctrl_clear_reg2 => "M4_SRAM_PWRCTRL_CLEAR_REG2": u32, WO, M4_SRAM_PWRCTRL { RAM_BANKS: WO };
    ulpss_pwrctrl_set_reg => "ULPSS_PWRCTRL_SET_REG": u32, RW, ULPSS_PWRCTRL {
        ULPSS_PWRGATE_ULP_MISC: RW, ULPSS_PWRGATE_ULP_CAP: RW, ULPSS_PWRGATE_ULP_VAD: RW,
        ULPSS_PWRGATE_ULP_UART: RW, ULPSS_PWRGATE_ULP_SSI: RW, ULPSS_PWRGATE_ULP_I2S: RW,
        ULPSS_PWRGATE_ULP_I2C: RW, ULPSS_PWRGATE_ULP_AUX: RW, ULPSS_PWRGATE_ULP_IR: RW,
        ULPSS_PWRGATE_ULP_UDMA: RW, ULPSS_PWRGATE_ULP_FIM: RW
    };
    ulpss_pwrctrl_clear_reg => "ULPSS_PWRCTRL_CLEAR_REG": u32, WO, ULPSS_PWRCTRL {
        ULPSS_PWRGATE_ULP_MISC: WO, ULPSS_PWRGATE_ULP_CAP: WO, ULPSS_PWRGATE_ULP_VAD: WO,
        ULPSS_PWRGATE_ULP_UART: WO, ULPSS_PWRGATE_ULP_SSI: WO, ULPSS_PWRGATE_ULP_I2S: WO,
        ULPSS_PWRGATE_ULP_I2C: WO, ULPSS_PWRGATE_ULP_AUX: WO, ULPSS_PWRGATE_ULP_IR: WO,
        ULPSS_PWRGATE_ULP_UDMA: WO, ULPSS_PWRGATE_ULP_FIM: WO
    };
    ulpss_ram_pwrctrl_set_reg1 => "ULPSS_RAM_PWRCTRL_SET_REG1": u32, RW, ULPSS_RAM_PWRCTRL {
        ULPSS_2K_BANKS: RW
    };
    ulpss_ram_pwrctrl_clear_reg1 => "ULPSS_RAM_PWRCTRL_CLEAR_REG1": u32, WO, ULPSS_RAM_PWRCTRL {
        ULPSS_2K_BANKS: WO
    };
    m4_ulp_mode_config => "M4_ULP_MODE_CONFIG": u32, RW, M4_ULP_MODE_CONFIG {
        ULPMODE_ISOLATION_CTRL: RW, ENABLE_NEGEDGE_ULP: RW, ULP_MODE_AFTR_CLK_SW: RW,
        ULP_MODE_SWITCHED_NPSS: RW
    };
    m4ss_tass_ctrl_set_reg => "M4SS_TASS_CTRL_SET_REG": u32, RW, M4SS_TASS_CTRL {
        M4SS_CTRL_TASS_AON_PWRGATE_EN: RW, M4SS_CTRL_TASS_AON_DISABLE_ISOLATION_BYPASS: RW,
        M4SS_CTRL_TASS_AON_PWR_DMN_RST_BYPASS: RW
    };
    m4ss_tass_ctrl_clear_reg => "M4SS_TASS_CTRL_CLEAR_REG": u32, WO, M4SS_TASS_CTRL {
        M4SS_CTRL_TASS_AON_PWRGATE_EN: WO, M4SS_CTRL_TASS_AON_DISABLE_ISOLATION_BYPASS: WO,
        M4SS_CTRL_TASS_AON_PWR_DMN_RST_BYPASS: WO
    };
    mcu_pmu_ldo_ctrl_set => "MCU_PMU_LDO_CTRL_SET": u32, RW, MCU_PMU_LDO_CTRL {
        MCU_FLASH_LDO_EN: RW, MCU_SOC_LDO_EN: RW, MCU_DCDC_EN: RW, MCU_SOC_LDO_LVL: RW,
        MCU_DCDC_LVL: RW
    };
    mcu_pmu_ldo_ctrl_clear => "MCU_PMU_LDO_CTRL_CLEAR": u32, WO, MCU_PMU_LDO_CTRL {
        MCU_FLASH_LDO_EN: WO, MCU_SOC_LDO_EN: WO, MCU_DCDC_EN: WO, MCU_SOC_LDO_LVL: WO,
        MCU_DCDC_LVL: WO
    };
    pllcci_pwrctrl_reg => "PLLCCI_PWRCTRL_REG": u32, RW, PLLCCI_PWRCTRL_REG {
        I2SPLL_ISO_ENABLE: RW, I2SPLL_BYPASS_ISO_GEN: RW, INTFPLL_ISO_ENABLE: RW,
        INTFPLL_BYPASS_ISO_GEN: RW, SOCPLL_ISO_ENABLE: RW, SOCPLL_BYPASS_ISO_GEN: RW,
        SOCPLL_SPI_PG_EN: RW, SOCPLL_VDD13_ISO_EN: RW
    };
    dll_pwrctrl_reg => "DLL_PWRCTRL_REG": u32, RW, DLL_PWRCTRL_REG {
        QSPI_DLL_RX_ISO_ENABLE: RW, QSPI_DLL_RX_BYPASS_ISO_GEN: RW, QSPI_DLL_RX_PG_EN_N: RW,
        QSPI_DLL_TX_ISO_ENABLE: RW, QSPI_DLL_TX_BYPASS_ISO_GEN: RW, QSPI_DLL_TX_PG_EN_N: RW
    };
    ulpss_ram_pwrctrl_set_reg2 => "ULPSS_RAM_PWRCTRL_SET_REG2": u32, RW, ULPSS_RAM_PWRCTRL {
        ULPSS_2K_BANKS: RW
    };
    ulpss_ram_pwrctrl_clear_reg2 => "ULPSS_RAM_PWRCTRL_CLEAR_REG2": u32, WO, ULPSS_RAM_PWRCTRL {
        ULPSS_2K_BANKS: WO
    };
    ulpss_ram_pwrctrl_set_reg3 => "ULPSS_RAM_PWRCTRL_SET_REG3": u32, RW, ULPSS_RAM_PWRCTRL {
        ULPSS_2K_BANKS: RW
    };
    ulpss_ram_pwrctrl_clear_reg3 => "ULPSS_RAM_PWRCTRL_CLEAR_REG3": u32, WO, ULPSS_RAM_PWRCTRL {
        ULPSS_2K_BANKS: WO
    };
    mcu_fsm_ctrl_bypass => "MCU_FSM_CTRL_BYPASS": u32, RW, MCU_FSM_CTRL_BYPASS {
        MCU_XTAL_EN_40MHZ_BYPASS_CTRL: RW, MCU_XTAL_EN_40MHZ_BYPASS: RW,
        MCU_PMU_SHUT_DOWN_BYPASS_CTRL: RW, MCU_PMU_SHUT_DOWN_BYPASS: RW,
        MCU_BUCK_BOOST_ENABLE_BYPASS_CTRL: RW, MCU_BUCK_BOOST_ENABLE_BYPASS: RW
    };
});

pub static RET_LAYOUT: Layout = layout!(McuRetRegisters {
    mcuret_bootstatus => "MCURET_BOOTSTATUS": u32, RW;
    chip_config_mcu_read => "CHIP_CONFIG_MCU_READ": u32, RO, CHIP_CONFIG_MCU_READ {
        DISABLE_M4: RO, LIMIT_M4_FREQ_110MHZ_b: RO, DISABLE_M4_ULP_MODE: RO, M4_FLASH_SIZE: RO,
        DISABLE_ANALOG_PERIPH: RO, DISABLE_CAN_INTERFACE: RO, DISABLE_USB: RO
    };
    mcuaon_control_reg4 => "MCUAON_CONTROL_REG4": u32, RW;
}
    clusters {
        npss_gpio_cntrl[MCU_RET_PARAM_NPSS_GPIOS] => "NPSS_GPIO_CNTRL": NpssGpioCntrlRegisters {
            npss_gpio_ctrls => "NPSS_GPIO_CTRLS": u32, RW, NPSS_GPIO_CTRLS {
                NPSS_GPIO_MODE: RW, NPSS_GPIO_REN: RW, NPSS_GPIO_OEN: RW, NPSS_GPIO_OUT: RW,
                USE_ULPSS_PAD: RW, NPSS_GPIO_POLARITY: RW, NPSS_GPIO_IN: RO
            };
        };
    }
);

pub static INTR_LAYOUT: Layout = layout!(NpssIntrRegisters {
    npss_intr_mask_set_reg => "NPSS_INTR_MASK_SET_REG": u32, RW, NPSS_INTR {
        NPSS_TO_MCU_WDT_INTR: RW, NPSS_TO_MCU_GPIO_INTR: RW, NPSS_TO_MCU_CMP_INTR: RW,
        NPSS_TO_MCU_RFWAKEUP_INTR: RW, NPSS_TO_MCU_BOD_INTR: RW, NPSS_TO_MCU_BUTTON_INTR: RW,
        NPSS_TO_MCU_SDC_INTR: RW, NPSS_TO_MCU_WIRELESS_INTR: RW, NPSS_TO_MCU_WAKEUP_INTR: RW,
        NPSS_TO_MCU_ALARM_INTR: RW, NPSS_TO_MCU_SEC_INTR: RW, NPSS_TO_MCU_MSEC_INTR: RW,
        NPSS_TO_MCU_PROCESSOR_INTR: RW, NPSS_TO_MCU_HOST_INTR: RW, NPSS_TO_MCU_DST_INTR: RW
    };
    npss_intr_mask_clr_reg => "NPSS_INTR_MASK_CLR_REG": u32, WO, NPSS_INTR {
        NPSS_TO_MCU_WDT_INTR: WO, NPSS_TO_MCU_GPIO_INTR: WO, NPSS_TO_MCU_CMP_INTR: WO,
        NPSS_TO_MCU_RFWAKEUP_INTR: WO, NPSS_TO_MCU_BOD_INTR: WO, NPSS_TO_MCU_BUTTON_INTR: WO,
        NPSS_TO_MCU_SDC_INTR: WO, NPSS_TO_MCU_WIRELESS_INTR: WO, NPSS_TO_MCU_WAKEUP_INTR: WO,
        NPSS_TO_MCU_ALARM_INTR: WO, NPSS_TO_MCU_SEC_INTR: WO, NPSS_TO_MCU_MSEC_INTR: WO,
        NPSS_TO_MCU_PROCESSOR_INTR: WO, NPSS_TO_MCU_HOST_INTR: WO, NPSS_TO_MCU_DST_INTR: WO
    };
    npss_intr_clear_reg => "NPSS_INTR_CLEAR_REG": u32, WO, NPSS_INTR {
        NPSS_TO_MCU_WDT_INTR: WO, NPSS_TO_MCU_GPIO_INTR: WO, NPSS_TO_MCU_CMP_INTR: WO,
        NPSS_TO_MCU_RFWAKEUP_INTR: WO, NPSS_TO_MCU_BOD_INTR: WO, NPSS_TO_MCU_BUTTON_INTR: WO,
        NPSS_TO_MCU_SDC_INTR: WO, NPSS_TO_MCU_WIRELESS_INTR: WO, NPSS_TO_MCU_WAKEUP_INTR: WO,
        NPSS_TO_MCU_ALARM_INTR: WO, NPSS_TO_MCU_SEC_INTR: WO, NPSS_TO_MCU_MSEC_INTR: WO,
        NPSS_TO_MCU_PROCESSOR_INTR: WO, NPSS_TO_MCU_HOST_INTR: WO, NPSS_TO_MCU_DST_INTR: WO
    };
    npss_intr_status_reg => "NPSS_INTR_STATUS_REG": u32, RO, NPSS_INTR {
        NPSS_TO_MCU_WDT_INTR: RO, NPSS_TO_MCU_GPIO_INTR: RO, NPSS_TO_MCU_CMP_INTR: RO,
        NPSS_TO_MCU_RFWAKEUP_INTR: RO, NPSS_TO_MCU_BOD_INTR: RO, NPSS_TO_MCU_BUTTON_INTR: RO,
        NPSS_TO_MCU_SDC_INTR: RO, NPSS_TO_MCU_WIRELESS_INTR: RO, NPSS_TO_MCU_WAKEUP_INTR: RO,
        NPSS_TO_MCU_ALARM_INTR: RO, NPSS_TO_MCU_SEC_INTR: RO, NPSS_TO_MCU_MSEC_INTR: RO,
        NPSS_TO_MCU_PROCESSOR_INTR: RO, NPSS_TO_MCU_HOST_INTR: RO, NPSS_TO_MCU_DST_INTR: RO
    };
    m4_ulp_slp_status_reg => "M4_ULP_SLP_STATUS_REG": u32, RO, M4_ULP_SLP_STATUS_REG {
        MCU_ULP_WAKEUP: RO
    };
});

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn batt_ff_table_is_flat_and_ordered() {
        assert_eq!(BATT_FF_LAYOUT.registers.len(), 24);
        assert!(BATT_FF_LAYOUT
            .registers
            .windows(2)
            .all(|pair| pair[0].offset < pair[1].offset));
        let tass = BATT_FF_LAYOUT
            .registers
            .iter()
            .find(|r| r.name == "M4SS_TASS_CTRL_CLEAR_REG")
            .unwrap();
        assert_eq!(tass.offset, 0x38);
        assert!(!tass.access.is_readable());
    }

    #[test]
    fn aon_shelf_mode_and_general_controls() {
        let shelf = AON_LAYOUT.register("MCUAON_SHELF_MODE").unwrap();
        let gen = AON_LAYOUT.register("MCUAON_GEN_CTRLS").unwrap();
        assert_eq!((shelf.offset, gen.offset), (0x10, 0x14));
        assert!(AON_LAYOUT.registers.iter().all(|r| r.offset != 0x0c));
        assert_eq!(AON_LAYOUT.size, 0x24);
    }

    #[test]
    fn npss_gpio_two_is_analog_capable() {
        let gpio = &RET_LAYOUT.clusters[0];
        assert_eq!(gpio.element_offset(2), Ok(0x24));
        let mode = gpio.register("NPSS_GPIO_CTRLS").unwrap().field("NPSS_GPIO_MODE").unwrap();
        assert_eq!((mode.offset, mode.width), (0, 3));
    }

    #[test]
    fn wakeup_sources() {
        let mut mode: LocalRegisterCopy<u32, MCU_FSM_SLEEP_CTRLS_AND_WAKEUP_MODE::Register> =
            LocalRegisterCopy::new(0);
        mode.modify(
            MCU_FSM_SLEEP_CTRLS_AND_WAKEUP_MODE::ULPSS_BASED_WAKEUP_b::SET
                + MCU_FSM_SLEEP_CTRLS_AND_WAKEUP_MODE::SDCSS_BASED_WAKEUP_b::SET,
        );
        assert_eq!(mode.get(), (1 << 24) | (1 << 25));
    }

    #[test]
    fn npss_interrupt_sources() {
        let status = INTR_LAYOUT.registers[3];
        assert_eq!((status.name, status.offset), ("NPSS_INTR_STATUS_REG", 0x0c));
        let gpio = status.field("NPSS_TO_MCU_GPIO_INTR").unwrap();
        assert_eq!(gpio.mask(), 0b11_1110);
    }
}
