// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Quad/octal SPI flash and PSRAM controller, shared by the QSPI (M4 flash)
//! and QSPI2 (PSRAM) instances.
//!
//! The controller runs either in manual mode, where software pushes command,
//! address and data through the FIFO, or in auto mode, where reads of the
//! memory mapped window are turned into flash transactions. Each chip select
//! (CSN0..CSN3) owns an `QSPI_SRAM_CTRL_CSNx_REG` for PSRAM writes. The inline
//! AES engine decrypts auto mode reads on the fly.

use core::mem::{offset_of, size_of};

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::Layout;

/// Depth of the manual mode FIFO, in entries.
pub const QSPI_PARAM_FIFO_DEPTH: u32 = 16;
/// Number of chip selects.
pub const QSPI_PARAM_CHIP_SELECTS: usize = 4;
/// Start/end address pairs of the four secure segments.
pub const QSPI_PARAM_SEC_SEG_WORDS: usize = 4 * 2;

register_structs! {
    pub QspiRegisters {
        (0x000 => pub qspi_clk_config_reg: ReadWrite<u32, QSPI_CLK_CONFIG_REG::Register>),
        (0x004 => pub qspi_bus_mode_reg: ReadWrite<u32, QSPI_BUS_MODE_REG::Register>),
        (0x008 => pub qspi_auto_ctrl_config_1_reg: ReadWrite<u32, QSPI_AUTO_CTRL_CONFIG_1_REG::Register>),
        (0x00c => pub qspi_auto_ctrl_config_2_reg: ReadWrite<u32, QSPI_AUTO_CTRL_CONFIG_2_REG::Register>),
        (0x010 => pub qspi_manual_config_reg: ReadWrite<u32, QSPI_MANUAL_CONFIG_REG::Register>),
        (0x014 => pub qspi_manual_config_2_reg: ReadWrite<u32, QSPI_MANUAL_CONFIG_2_REG::Register>),
        (0x018 => _reserved0),
        (0x01c => pub qspi_fifo_threshold_reg: ReadWrite<u32, QSPI_FIFO_THRESHOLD_REG::Register>),
        (0x020 => pub qspi_status_reg: ReadOnly<u32, QSPI_STATUS_REG::Register>),
        (0x024 => pub qspi_intr_mask_reg: WriteOnly<u32, QSPI_INTR::Register>),
        (0x028 => pub qspi_intr_unmask_reg: WriteOnly<u32, QSPI_INTR::Register>),
        (0x02c => pub qspi_intr_sts_reg: ReadOnly<u32, QSPI_INTR::Register>),
        (0x030 => pub qspi_intr_ack_reg: WriteOnly<u32, QSPI_INTR::Register>),
        (0x034 => pub qspi_sts_mc_reg: ReadOnly<u32, QSPI_STS_MC_REG::Register>),
        (0x038 => pub qspi_auto_config_1_csn1_reg: ReadWrite<u32, QSPI_AUTO_CTRL_CONFIG_1_REG::Register>),
        (0x03c => pub qspi_auto_config_2_csn1_reg: ReadWrite<u32, QSPI_AUTO_CTRL_CONFIG_2_REG::Register>),
        /// Manual mode FIFO window
        (0x040 => pub qspi_manual_rd_wr_data_reg: ReadWrite<u32>),
        (0x044 => _reserved1),
        (0x080 => pub qspi_manual_write_data_2_reg: ReadWrite<u32, QSPI_MANUAL_WRITE_DATA_2_REG::Register>),
        (0x084 => _reserved2),
        (0x090 => pub qspi_auto_config3: ReadWrite<u32, QSPI_AUTO_CONFIG3::Register>),
        (0x094 => pub qspi_auto_config3_csn1: ReadWrite<u32, QSPI_AUTO_CONFIG3::Register>),
        (0x098 => _reserved3),
        (0x0a0 => pub qspi_auto_base_addr_csn0: ReadWrite<u32>),
        (0x0a4 => pub qspi_auto_base_addr_csn1: ReadWrite<u32>),
        (0x0a8 => _reserved4),
        (0x0b0 => pub octa_spi_bus_controller: ReadWrite<u32, OCTA_SPI_BUS_CONTROLLER::Register>),
        (0x0b4 => pub qspi_auto_base_addr_unmask_csn0: ReadWrite<u32>),
        (0x0b8 => pub qspi_auto_base_addr_unmask_csn1: ReadWrite<u32>),
        (0x0bc => _reserved5),
        (0x0c4 => pub octa_spi_bus_controller2: ReadWrite<u32, OCTA_SPI_BUS_CONTROLLER2::Register>),
        (0x0c8 => pub qspi_aes_config: ReadWrite<u32, QSPI_AES_CONFIG::Register>),
        (0x0cc => pub qspi_aes_key_iv_valid: ReadWrite<u32, QSPI_AES_KEY_IV_VALID::Register>),
        (0x0d0 => pub qspi_cmnflash_sts: ReadOnly<u32, QSPI_CMNFLASH_STS::Register>),
        /// Loopback data used to check the AES path
        (0x0d4 => pub qspi_aes_lb_data: [ReadWrite<u32>; 4]),
        (0x0e4 => pub qspi_aes_sec_seg_addr: [ReadWrite<u32>; QSPI_PARAM_SEC_SEG_WORDS]),
        (0x104 => pub qspi_sram_ctrl_csn0_reg: ReadWrite<u32, QSPI_SRAM_CTRL_CSN0_REG::Register>),
        (0x108 => pub qspi_sram_ctrl_csn1_reg: ReadWrite<u32, QSPI_SRAM_CTRL_CSN1_REG::Register>),
        (0x10c => pub qspi_sram_ctrl_csn2_reg: ReadWrite<u32, QSPI_SRAM_CTRL_CSN2_REG::Register>),
        (0x110 => pub qspi_sram_ctrl_csn3_reg: ReadWrite<u32, QSPI_SRAM_CTRL_CSN3_REG::Register>),
        (0x114 => pub ccmp_lbk_ctrl_reg: ReadWrite<u32>),
        (0x118 => _reserved6),
        (0x11c => pub qspi_semi_auto_addr_reg: ReadWrite<u32>),
        (0x120 => pub qspi_semi_auto_mode_config_reg: ReadWrite<u32, QSPI_SEMI_AUTO_MODE_CONFIG_REG::Register>),
        (0x124 => pub qspi_semi_auto_mode_config2_reg: ReadWrite<u32, QSPI_SEMI_AUTO_MODE_CONFIG2_REG::Register>),
        (0x128 => pub qspi_bus_mode2_reg: ReadWrite<u32>),
        (0x12c => pub qspi_aes_sec_key_frm_kh: ReadWrite<u32, QSPI_AES_SEC_KEY_FRM_KH::Register>),
        (0x130 => pub qspi_auto_conitnue_fetch_ctrl_reg: ReadWrite<u32>),
        /// 256-bit key 1, least significant word first
        (0x134 => pub qspi_aes_key1: [WriteOnly<u32>; 8]),
        (0x154 => pub qspi_aes_key2: [WriteOnly<u32>; 8]),
        (0x174 => pub qspi_aes_iv1: [WriteOnly<u32>; 4]),
        (0x184 => pub qspi_lb_status: ReadOnly<u32, QSPI_LB_STATUS::Register>),
        (0x188 => @END),
    }
}

register_bitfields![u32,
    pub QSPI_CLK_CONFIG_REG [
        /// SoC clock cycles CSN stays high between auto mode transfers
        QSPI_AUTO_CSN_HIGH_CNT OFFSET(0) NUMBITS(5) [],
        QSPI_CLK_EN OFFSET(8) NUMBITS(1) [],
        QSPI_DLL_RX_EN OFFSET(19) NUMBITS(1) [],
        SERIAL_CLK_MODE OFFSET(20) NUMBITS(1) [
            Mode0 = 0,
            Mode3 = 1
        ],
        QSPI_DLL_TX_EN OFFSET(21) NUMBITS(1) [],
        QSPI_DLL_CALIB OFFSET(28) NUMBITS(1) []
    ],
    pub QSPI_BUS_MODE_REG [
        QSPI_ULTRA_HIGH_SPEED_EN OFFSET(0) NUMBITS(1) [],
        QSPI_MODE OFFSET(1) NUMBITS(2) [
            Single = 0,
            Dual = 1,
            Quad = 2,
            Octa = 3
        ],
        QSPI_PREFETCH_EN OFFSET(4) NUMBITS(1) [],
        QSPI_WRAP_EN OFFSET(5) NUMBITS(1) [],
        QSPI_AUTO_MODE_FRM_REG OFFSET(6) NUMBITS(1) [],
        AUTO_CSN_BASED_ADDR_EN OFFSET(7) NUMBITS(1) [],
        QSPI_D2_D3_DATA OFFSET(8) NUMBITS(4) [],
        QSPI_F_SCLK_NEG_EDGE_SAMPLE OFFSET(16) NUMBITS(1) []
    ],
    pub QSPI_AUTO_CTRL_CONFIG_1_REG [
        QSPI_EXT_BYTE_MODE_CSN0 OFFSET(16) NUMBITS(2) [],
        QSPI_EXTRA_BYTE_EN_CSN0 OFFSET(18) NUMBITS(1) [],
        QSPI_EXT_BYTE_CSN0 OFFSET(24) NUMBITS(8) []
    ],
    pub QSPI_AUTO_CTRL_CONFIG_2_REG [
        QSPI_RD_SWAP_CSN0 OFFSET(0) NUMBITS(1) [],
        QSPI_RD_DATA_MODE_CSN0 OFFSET(8) NUMBITS(2) [],
        QSPI_RD_INST_CSN0 OFFSET(16) NUMBITS(8) []
    ],
    pub QSPI_MANUAL_CONFIG_REG [
        CSN_ACTIVE OFFSET(0) NUMBITS(1) [],
        QSPI_WR OFFSET(1) NUMBITS(1) [],
        QSPI_RD OFFSET(2) NUMBITS(1) [],
        /// Manual read count in bytes
        QSPI_MANUAL_RD_CNT OFFSET(3) NUMBITS(10) [],
        QSPI_MANUAL_CSN_SELECT OFFSET(13) NUMBITS(2) [],
        QSPI_MANUAL_SIZE_FRM_REG OFFSET(15) NUMBITS(2) [],
        TAKE_QSPI_MANUAL_WR_SIZE_FRM_REG OFFSET(21) NUMBITS(1) [],
        QSPI_FULL_DUPLEX_EN OFFSET(22) NUMBITS(1) [],
        HW_CTRLD_QSPI_MODE_CTRL OFFSET(25) NUMBITS(1) []
    ],
    pub QSPI_MANUAL_CONFIG_2_REG [
        QSPI_WR_DATA_SWAP_MNL_CSN0 OFFSET(0) NUMBITS(1) [],
        QSPI_MANUAL_CSN_SELECT_FRM_REG OFFSET(12) NUMBITS(1) [],
        QSPI_LOOP_BACK_MODE_EN OFFSET(14) NUMBITS(1) [],
        QSPI_MANUAL_DDR_PHASE OFFSET(15) NUMBITS(1) [],
        QSPI_DDR_CLK_EN OFFSET(16) NUMBITS(1) []
    ],
    pub QSPI_FIFO_THRESHOLD_REG [
        FIFO_AEMPTY_THRLD OFFSET(0) NUMBITS(4) [],
        FIFO_AFULL_THRLD OFFSET(4) NUMBITS(4) [],
        WFIFO_RESET OFFSET(8) NUMBITS(1) [],
        RFIFO_RESET OFFSET(9) NUMBITS(1) []
    ],
    pub QSPI_STATUS_REG [
        BUSY OFFSET(0) NUMBITS(1) [],
        QSPI_FIFO_FULL_WFIFO_S OFFSET(1) NUMBITS(1) [],
        QSPI_FIFO_AFULL_WFIFO_S OFFSET(2) NUMBITS(1) [],
        QSPI_FIFO_EMPTY_WFIFO OFFSET(3) NUMBITS(1) [],
        QSPI_FIFO_AEMPTY_WFIFO OFFSET(4) NUMBITS(1) [],
        QSPI_FIFO_FULL_RFIFO OFFSET(5) NUMBITS(1) [],
        QSPI_FIFO_AFULL_RFIFO OFFSET(6) NUMBITS(1) [],
        QSPI_FIFO_EMPTY_RFIFO_S OFFSET(7) NUMBITS(1) [],
        QSPI_FIFO_AEMPTY_RFIFO_S OFFSET(8) NUMBITS(1) [],
        GSPI_MANUAL_RD_CNT OFFSET(9) NUMBITS(1) [],
        AUTO_MODE_FSM_IDLE_SCLK OFFSET(10) NUMBITS(1) [],
        QSPI_AUTO_MODE OFFSET(11) NUMBITS(1) [],
        QSPI_AUTO_MODE_FRM_REG_SCLK OFFSET(12) NUMBITS(1) [],
        HW_CTRLD_QSPI_MODE_CTRL_SCLK OFFSET(14) NUMBITS(1) []
    ],
    pub QSPI_INTR [
        /// Write FIFO almost empty
        WFIFO_AEMPTY OFFSET(0) NUMBITS(1) [],
        RFIFO_AFULL OFFSET(1) NUMBITS(1) [],
        WFIFO_FULL OFFSET(2) NUMBITS(1) [],
        RFIFO_EMPTY OFFSET(3) NUMBITS(1) []
    ],
    pub QSPI_STS_MC_REG [
        BUSY_M_CLK OFFSET(0) NUMBITS(1) [],
        AUTO_AXI_FSM_IDLE_M_CLK OFFSET(1) NUMBITS(1) [],
        QSPI_FIFO_FULL_RFIFO_M_CLK OFFSET(2) NUMBITS(1) [],
        QSPI_FIFO_EMPTY_WFIFO_M_CLK OFFSET(3) NUMBITS(1) []
    ],
    pub QSPI_MANUAL_WRITE_DATA_2_REG [
        QSPI_MANUAL_WRITE_DATA_2 OFFSET(0) NUMBITS(4) [],
        USE_PREV_LENGTH OFFSET(7) NUMBITS(1) []
    ],
    pub QSPI_AUTO_CONFIG3 [
        QSPI_DUMMY_BYTES_INCR_CSN0 OFFSET(0) NUMBITS(4) [],
        QSPI_CMD_SIZE_16BIT_CSN0 OFFSET(18) NUMBITS(1) [],
        QSPI_ADR_SIZE_32BIT_AUTO_MODE OFFSET(19) NUMBITS(1) [],
        QSPI_RD_INST_CSN0_MSB OFFSET(24) NUMBITS(8) []
    ],
    pub OCTA_SPI_BUS_CONTROLLER [
        OCTA_SPI_MODE_CSN0 OFFSET(0) NUMBITS(1) [],
        OCTA_SPI_MODE_CSN1 OFFSET(1) NUMBITS(1) [],
        QSPI_D7_D4_DATA OFFSET(8) NUMBITS(4) []
    ],
    pub OCTA_SPI_BUS_CONTROLLER2 [
        SET_IP_MODE OFFSET(0) NUMBITS(1) [],
        DUAL_FLASH_MODE OFFSET(3) NUMBITS(1) []
    ],
    pub QSPI_AES_CONFIG [
        QSPI_AES_MODE OFFSET(0) NUMBITS(1) [
            Ctr = 0,
            Xts = 1
        ],
        NONCE_INIT OFFSET(1) NUMBITS(1) [],
        EN_SECURITY OFFSET(2) NUMBITS(1) [],
        QSPI_AES_KEY_SIZE OFFSET(4) NUMBITS(1) [
            Key128 = 0,
            Key256 = 1
        ],
        EN_KH_KEY OFFSET(18) NUMBITS(1) []
    ],
    pub QSPI_AES_KEY_IV_VALID [
        QSPI_AES_KEY_IV_VALID OFFSET(0) NUMBITS(4) []
    ],
    pub QSPI_CMNFLASH_STS [
        QSPI_CMNFLASH_STS OFFSET(0) NUMBITS(1) []
    ],
    pub QSPI_SRAM_CTRL_CSN0_REG [
        BIT_8_MODE_CSN0 OFFSET(0) NUMBITS(1) [],
        QSPI_DUMMY_BYTES_INCR_CSN0 OFFSET(4) NUMBITS(4) [],
        WR_CMD_MODE_CSN0 OFFSET(8) NUMBITS(2) [],
        WR_ADDR_MODE_CSN0 OFFSET(10) NUMBITS(2) [],
        WR_DATA_MODE_CSN0 OFFSET(12) NUMBITS(2) [],
        WR_SWAP_CSN0 OFFSET(14) NUMBITS(1) [],
        WR_CMD_CSN0 OFFSET(16) NUMBITS(8) []
    ],
    pub QSPI_SRAM_CTRL_CSN1_REG [
        BIT_8_MODE_CSN1 OFFSET(0) NUMBITS(1) [],
        QSPI_DUMMY_BYTES_INCR_CSN1 OFFSET(4) NUMBITS(4) [],
        WR_CMD_MODE_CSN1 OFFSET(8) NUMBITS(2) [],
        WR_ADDR_MODE_CSN1 OFFSET(10) NUMBITS(2) [],
        WR_DATA_MODE_CSN1 OFFSET(12) NUMBITS(2) [],
        WR_SWAP_CSN1 OFFSET(14) NUMBITS(1) [],
        WR_CMD_CSN1 OFFSET(16) NUMBITS(8) []
    ],
    pub QSPI_SRAM_CTRL_CSN2_REG [
        BIT_8_MODE_CSN2 OFFSET(0) NUMBITS(1) [],
        QSPI_DUMMY_BYTES_INCR_CSN2 OFFSET(4) NUMBITS(4) [],
        WR_CMD_MODE_CSN2 OFFSET(8) NUMBITS(2) [],
        WR_ADDR_MODE_CSN2 OFFSET(10) NUMBITS(2) [],
        WR_DATA_MODE_CSN2 OFFSET(12) NUMBITS(2) [],
        WR_SWAP_CSN2 OFFSET(14) NUMBITS(1) [],
        WR_CMD_CSN2 OFFSET(16) NUMBITS(8) []
    ],
    // The dummy byte field of CSN3 carries the CSN2 name in the vendor
    // register description.
    pub QSPI_SRAM_CTRL_CSN3_REG [
        BIT_8_MODE_CSN3 OFFSET(0) NUMBITS(1) [],
        QSPI_DUMMY_BYTES_INCR_CSN2 OFFSET(4) NUMBITS(4) [],
        WR_CMD_MODE_CSN3 OFFSET(8) NUMBITS(2) [],
        WR_ADDR_MODE_CSN3 OFFSET(10) NUMBITS(2) [],
        WR_DATA_MODE_CSN3 OFFSET(12) NUMBITS(2) [],
        WR_SWAP_CSN3 OFFSET(14) NUMBITS(1) [],
        WR_CMD_CSN3 OFFSET(16) NUMBITS(8) []
    ],
    pub QSPI_SEMI_AUTO_MODE_CONFIG_REG [
        QSPI_SEMI_AUTO_BSIZE OFFSET(0) NUMBITS(8) [],
        QSPI_SEMI_AUTO_HSIZE OFFSET(8) NUMBITS(2) []
    ],
    pub QSPI_SEMI_AUTO_MODE_CONFIG2_REG [
        QSPI_SEMI_AUTO_RD_CNT OFFSET(0) NUMBITS(12) [],
        QSPI_SEMI_AUTO_MODE_EN OFFSET(12) NUMBITS(1) [],
        QSPI_SEMI_AUTO_RD_BUSY OFFSET(13) NUMBITS(1) []
    ],
    pub QSPI_AES_SEC_KEY_FRM_KH [
        LOAD_SEC_KEY_FRM_KH OFFSET(0) NUMBITS(1) [],
        SEC_KEY_LOADING_DONE OFFSET(1) NUMBITS(1) []
    ],
    pub QSPI_LB_STATUS [
        LB_CMD_ERROR OFFSET(0) NUMBITS(1) [],
        LB_DATA_ERROR OFFSET(1) NUMBITS(1) []
    ]
];

const _: () = assert!(offset_of!(QspiRegisters, qspi_manual_write_data_2_reg) == 0x80);
const _: () = assert!(offset_of!(QspiRegisters, qspi_aes_config) == 0xc8);
const _: () = assert!(offset_of!(QspiRegisters, qspi_sram_ctrl_csn0_reg) == 0x104);
const _: () = assert!(offset_of!(QspiRegisters, qspi_semi_auto_addr_reg) == 0x11c);
const _: () = assert!(size_of::<QspiRegisters>() == 0x188);

pub static LAYOUT: Layout = layout!(QspiRegisters {
    qspi_clk_config_reg => "QSPI_CLK_CONFIG_REG": u32, RW, QSPI_CLK_CONFIG_REG {
        QSPI_AUTO_CSN_HIGH_CNT: RW, QSPI_CLK_EN: RW, QSPI_DLL_RX_EN: RW, SERIAL_CLK_MODE: RW,
        QSPI_DLL_TX_EN: RW, QSPI_DLL_CALIB: RW
    };
    qspi_bus_mode_reg => "QSPI_BUS_MODE_REG": u32, RW, QSPI_BUS_MODE_REG {
        QSPI_ULTRA_HIGH_SPEED_EN: RW, QSPI_MODE: RW, QSPI_PREFETCH_EN: RW, QSPI_WRAP_EN: RW,
        QSPI_AUTO_MODE_FRM_REG: RW, AUTO_CSN_BASED_ADDR_EN: RW, QSPI_D2_D3_DATA: RW,
        QSPI_F_SCLK_NEG_EDGE_SAMPLE: RW
    };
    qspi_auto_ctrl_config_1_reg => "QSPI_AUTO_CTRL_CONFIG_1_REG": u32, RW, QSPI_AUTO_CTRL_CONFIG_1_REG {
        QSPI_EXT_BYTE_MODE_CSN0: RW, QSPI_EXTRA_BYTE_EN_CSN0: RW, QSPI_EXT_BYTE_CSN0: RW
    };
    qspi_auto_ctrl_config_2_reg => "QSPI_AUTO_CTRL_CONFIG_2_REG": u32, RW, QSPI_AUTO_CTRL_CONFIG_2_REG {
        QSPI_RD_SWAP_CSN0: RW, QSPI_RD_DATA_MODE_CSN0: RW, QSPI_RD_INST_CSN0: RW
    };
    qspi_manual_config_reg => "QSPI_MANUAL_CONFIG_REG": u32, RW, QSPI_MANUAL_CONFIG_REG {
        CSN_ACTIVE: RW, QSPI_WR: WO, QSPI_RD: WO, QSPI_MANUAL_RD_CNT: RW,
        QSPI_MANUAL_CSN_SELECT: RW, QSPI_MANUAL_SIZE_FRM_REG: RW,
        TAKE_QSPI_MANUAL_WR_SIZE_FRM_REG: RW, QSPI_FULL_DUPLEX_EN: RW,
        HW_CTRLD_QSPI_MODE_CTRL: RW
    };
    qspi_manual_config_2_reg => "QSPI_MANUAL_CONFIG_2_REG": u32, RW, QSPI_MANUAL_CONFIG_2_REG {
        QSPI_WR_DATA_SWAP_MNL_CSN0: RW, QSPI_MANUAL_CSN_SELECT_FRM_REG: RW,
        QSPI_LOOP_BACK_MODE_EN: RW, QSPI_MANUAL_DDR_PHASE: RW, QSPI_DDR_CLK_EN: RW
    };
    qspi_fifo_threshold_reg => "QSPI_FIFO_THRESHOLD_REG": u32, RW, QSPI_FIFO_THRESHOLD_REG {
        FIFO_AEMPTY_THRLD: RW, FIFO_AFULL_THRLD: RW, WFIFO_RESET: RW, RFIFO_RESET: RW
    };
    qspi_status_reg => "QSPI_STATUS_REG": u32, RO, QSPI_STATUS_REG {
        BUSY: RO, QSPI_FIFO_FULL_WFIFO_S: RO, QSPI_FIFO_AFULL_WFIFO_S: RO,
        QSPI_FIFO_EMPTY_WFIFO: RO, QSPI_FIFO_AEMPTY_WFIFO: RO, QSPI_FIFO_FULL_RFIFO: RO,
        QSPI_FIFO_AFULL_RFIFO: RO, QSPI_FIFO_EMPTY_RFIFO_S: RO, QSPI_FIFO_AEMPTY_RFIFO_S: RO,
        GSPI_MANUAL_RD_CNT: RO, AUTO_MODE_FSM_IDLE_SCLK: RO, QSPI_AUTO_MODE: RO,
        QSPI_AUTO_MODE_FRM_REG_SCLK: RO, HW_CTRLD_QSPI_MODE_CTRL_SCLK: RO
    };
    qspi_intr_mask_reg => "QSPI_INTR_MASK_REG": u32, WO, QSPI_INTR {
        WFIFO_AEMPTY: WO, RFIFO_AFULL: WO, WFIFO_FULL: WO, RFIFO_EMPTY: WO
    };
    qspi_intr_unmask_reg => "QSPI_INTR_UNMASK_REG": u32, WO, QSPI_INTR {
        WFIFO_AEMPTY: WO, RFIFO_AFULL: WO, WFIFO_FULL: WO, RFIFO_EMPTY: WO
    };
    qspi_intr_sts_reg => "QSPI_INTR_STS_REG": u32, RO, QSPI_INTR {
        WFIFO_AEMPTY: RO, RFIFO_AFULL: RO, WFIFO_FULL: RO, RFIFO_EMPTY: RO
    };
    qspi_intr_ack_reg => "QSPI_INTR_ACK_REG": u32, WO, QSPI_INTR {
        WFIFO_AEMPTY: WO, RFIFO_AFULL: WO, WFIFO_FULL: WO, RFIFO_EMPTY: WO
    };
    qspi_sts_mc_reg => "QSPI_STS_MC_REG": u32, RO, QSPI_STS_MC_REG {
        BUSY_M_CLK: RO, AUTO_AXI_FSM_IDLE_M_CLK: RO, QSPI_FIFO_FULL_RFIFO_M_CLK: RO,
        QSPI_FIFO_EMPTY_WFIFO_M_CLK: RO
    };
    qspi_auto_config_1_csn1_reg => "QSPI_AUTO_CONFIG_1_CSN1_REG": u32, RW;
    qspi_auto_config_2_csn1_reg => "QSPI_AUTO_CONFIG_2_CSN1_REG": u32, RW;
    qspi_manual_rd_wr_data_reg => "QSPI_MANUAL_RD_WR_DATA_REG": u32, RW;
    qspi_manual_write_data_2_reg => "QSPI_MANUAL_WRITE_DATA_2_REG": u32, RW, QSPI_MANUAL_WRITE_DATA_2_REG {
        QSPI_MANUAL_WRITE_DATA_2: RW, USE_PREV_LENGTH: RW
    };
    qspi_auto_config3 => "QSPI_AUTO_CONFIG3": u32, RW, QSPI_AUTO_CONFIG3 {
        QSPI_DUMMY_BYTES_INCR_CSN0: RW, QSPI_CMD_SIZE_16BIT_CSN0: RW,
        QSPI_ADR_SIZE_32BIT_AUTO_MODE: RW, QSPI_RD_INST_CSN0_MSB: RW
    };
    qspi_auto_config3_csn1 => "QSPI_AUTO_CONFIG3_CSN1": u32, RW;
    qspi_auto_base_addr_csn0 => "QSPI_AUTO_BASE_ADDR_CSN0": u32, RW;
    qspi_auto_base_addr_csn1 => "QSPI_AUTO_BASE_ADDR_CSN1": u32, RW;
    octa_spi_bus_controller => "OCTA_SPI_BUS_CONTROLLER": u32, RW, OCTA_SPI_BUS_CONTROLLER {
        OCTA_SPI_MODE_CSN0: RW, OCTA_SPI_MODE_CSN1: RW, QSPI_D7_D4_DATA: RW
    };
    qspi_auto_base_addr_unmask_csn0 => "QSPI_AUTO_BASE_ADDR_UNMASK_CSN0": u32, RW;
    qspi_auto_base_addr_unmask_csn1 => "QSPI_AUTO_BASE_ADDR_UNMASK_CSN1": u32, RW;
    octa_spi_bus_controller2 => "OCTA_SPI_BUS_CONTROLLER2": u32, RW, OCTA_SPI_BUS_CONTROLLER2 {
        SET_IP_MODE: RW, DUAL_FLASH_MODE: RW
    };
    qspi_aes_config => "QSPI_AES_CONFIG": u32, RW, QSPI_AES_CONFIG {
        QSPI_AES_MODE: RW, NONCE_INIT: RW, EN_SECURITY: RW, QSPI_AES_KEY_SIZE: RW, EN_KH_KEY: RW
    };
    qspi_aes_key_iv_valid => "QSPI_AES_KEY_IV_VALID": u32, RW, QSPI_AES_KEY_IV_VALID {
        QSPI_AES_KEY_IV_VALID: RW
    };
    qspi_cmnflash_sts => "QSPI_CMNFLASH_STS": u32, RO, QSPI_CMNFLASH_STS { QSPI_CMNFLASH_STS: RO };
    qspi_aes_lb_data[4] => "QSPI_AES_LB_DATA": u32, RW;
    qspi_aes_sec_seg_addr[QSPI_PARAM_SEC_SEG_WORDS] => "QSPI_AES_SEC_SEG_ADDR": u32, RW;
    qspi_sram_ctrl_csn0_reg => "QSPI_SRAM_CTRL_CSN0_REG": u32, RW, QSPI_SRAM_CTRL_CSN0_REG {
        BIT_8_MODE_CSN0: RW, QSPI_DUMMY_BYTES_INCR_CSN0: RW, WR_CMD_MODE_CSN0: RW,
        WR_ADDR_MODE_CSN0: RW, WR_DATA_MODE_CSN0: RW, WR_SWAP_CSN0: RW, WR_CMD_CSN0: RW
    };
    qspi_sram_ctrl_csn1_reg => "QSPI_SRAM_CTRL_CSN1_REG": u32, RW, QSPI_SRAM_CTRL_CSN1_REG {
        BIT_8_MODE_CSN1: RW, QSPI_DUMMY_BYTES_INCR_CSN1: RW, WR_CMD_MODE_CSN1: RW,
        WR_ADDR_MODE_CSN1: RW, WR_DATA_MODE_CSN1: RW, WR_SWAP_CSN1: RW, WR_CMD_CSN1: RW
    };
    qspi_sram_ctrl_csn2_reg => "QSPI_SRAM_CTRL_CSN2_REG": u32, RW, QSPI_SRAM_CTRL_CSN2_REG {
        BIT_8_MODE_CSN2: RW, QSPI_DUMMY_BYTES_INCR_CSN2: RW, WR_CMD_MODE_CSN2: RW,
        WR_ADDR_MODE_CSN2: RW, WR_DATA_MODE_CSN2: RW, WR_SWAP_CSN2: RW, WR_CMD_CSN2: RW
    };
    qspi_sram_ctrl_csn3_reg => "QSPI_SRAM_CTRL_CSN3_REG": u32, RW, QSPI_SRAM_CTRL_CSN3_REG {
        BIT_8_MODE_CSN3: RW, QSPI_DUMMY_BYTES_INCR_CSN2: RW, WR_CMD_MODE_CSN3: RW,
        WR_ADDR_MODE_CSN3: RW, WR_DATA_MODE_CSN3: RW, WR_SWAP_CSN3: RW, WR_CMD_CSN3: RW
    };
    ccmp_lbk_ctrl_reg => "CCMP_LBK_CTRL_REG": u32, RW;
    qspi_semi_auto_addr_reg => "QSPI_SEMI_AUTO_ADDR_REG": u32, RW;
    qspi_semi_auto_mode_config_reg => "QSPI_SEMI_AUTO_MODE_CONFIG_REG": u32, RW, QSPI_SEMI_AUTO_MODE_CONFIG_REG {
        QSPI_SEMI_AUTO_BSIZE: RW, QSPI_SEMI_AUTO_HSIZE: RW
    };
    qspi_semi_auto_mode_config2_reg => "QSPI_SEMI_AUTO_MODE_CONFIG2_REG": u32, RW, QSPI_SEMI_AUTO_MODE_CONFIG2_REG {
        QSPI_SEMI_AUTO_RD_CNT: RW, QSPI_SEMI_AUTO_MODE_EN: RW, QSPI_SEMI_AUTO_RD_BUSY: RO
    };
    qspi_bus_mode2_reg => "QSPI_BUS_MODE2_REG": u32, RW;
    qspi_aes_sec_key_frm_kh => "QSPI_AES_SEC_KEY_FRM_KH": u32, RW, QSPI_AES_SEC_KEY_FRM_KH {
        LOAD_SEC_KEY_FRM_KH: RW, SEC_KEY_LOADING_DONE: RO
    };
    qspi_auto_conitnue_fetch_ctrl_reg => "QSPI_AUTO_CONITNUE_FETCH_CTRL_REG": u32, RW;
    qspi_aes_key1[8] => "QSPI_AES_KEY1": u32, WO;
    qspi_aes_key2[8] => "QSPI_AES_KEY2": u32, WO;
    qspi_aes_iv1[4] => "QSPI_AES_IV1": u32, WO;
    qspi_lb_status => "QSPI_LB_STATUS": u32, RO, QSPI_LB_STATUS {
        LB_CMD_ERROR: RO, LB_DATA_ERROR: RO
    };
});

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn csn3_keeps_transcribed_dummy_field() {
        let csn2 = LAYOUT
            .registers
            .iter()
            .find(|register| register.name == "QSPI_SRAM_CTRL_CSN2_REG")
            .unwrap();
        let csn3 = LAYOUT
            .registers
            .iter()
            .find(|register| register.name == "QSPI_SRAM_CTRL_CSN3_REG")
            .unwrap();
        assert_eq!(csn3.offset, 0x110);
        let dummy = csn3.field("QSPI_DUMMY_BYTES_INCR_CSN2").unwrap();
        assert_eq!(dummy, csn2.field("QSPI_DUMMY_BYTES_INCR_CSN2").unwrap());
        assert!(csn3.field("QSPI_DUMMY_BYTES_INCR_CSN3").is_err());
    }

    #[test]
    fn psram_write_setup() {
        let mut ctrl: LocalRegisterCopy<u32, QSPI_SRAM_CTRL_CSN1_REG::Register> =
            LocalRegisterCopy::new(0);
        ctrl.modify(
            QSPI_SRAM_CTRL_CSN1_REG::WR_CMD_MODE_CSN1.val(2)
                + QSPI_SRAM_CTRL_CSN1_REG::WR_ADDR_MODE_CSN1.val(2)
                + QSPI_SRAM_CTRL_CSN1_REG::WR_DATA_MODE_CSN1.val(2)
                + QSPI_SRAM_CTRL_CSN1_REG::WR_CMD_CSN1.val(0x38),
        );
        assert_eq!(ctrl.get(), 0x0038_2a00);
    }

    #[test]
    fn aes_key_words() {
        let key1 = LAYOUT
            .registers
            .iter()
            .find(|register| register.name == "QSPI_AES_KEY1")
            .unwrap();
        assert_eq!(key1.element_offset(7), Ok(0x150));
        assert!(!key1.access.is_readable());
    }
}
