// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

// I2C master/slave controller (DesignWare DW_apb_i2c), used for I2C0, I2C1
// and the ULP I2C2 instance.

use core::mem::offset_of;

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::Layout;

/// Depth of the transmit and receive FIFOs.
pub const I2C_PARAM_FIFO_DEPTH: u32 = 16;
/// `IC_COMP_TYPE` value of every DesignWare APB I2C ("DW" 0x0140).
pub const I2C_PARAM_COMP_TYPE: u32 = 0x4457_0140;

register_structs! {
    pub I2cRegisters {
        /// Control
        (0x000 => pub ic_con: ReadWrite<u32, IC_CON::Register>),
        /// Target address
        (0x004 => pub ic_tar: ReadWrite<u32, IC_TAR::Register>),
        /// Slave address
        (0x008 => pub ic_sar: ReadWrite<u32, IC_SAR::Register>),
        /// High speed master mode code
        (0x00c => pub ic_hs_maddr: ReadWrite<u32, IC_HS_MADDR::Register>),
        /// Rx/Tx data buffer and command
        (0x010 => pub ic_data_cmd: ReadWrite<u32, IC_DATA_CMD::Register>),
        (0x014 => pub ic_ss_scl_hcnt: ReadWrite<u32, IC_SS_SCL_HCNT::Register>),
        (0x018 => pub ic_ss_scl_lcnt: ReadWrite<u32, IC_SS_SCL_LCNT::Register>),
        (0x01c => pub ic_fs_scl_hcnt: ReadWrite<u32, IC_FS_SCL_HCNT::Register>),
        (0x020 => pub ic_fs_scl_lcnt: ReadWrite<u32, IC_FS_SCL_LCNT::Register>),
        (0x024 => pub ic_hs_scl_hcnt: ReadWrite<u32, IC_HS_SCL_HCNT::Register>),
        (0x028 => pub ic_hs_scl_lcnt: ReadWrite<u32, IC_HS_SCL_LCNT::Register>),
        /// Masked interrupt status
        (0x02c => pub ic_intr_stat: ReadOnly<u32, IC_INTR::Register>),
        (0x030 => pub ic_intr_mask: ReadWrite<u32, IC_INTR::Register>),
        /// Interrupt status before masking
        (0x034 => pub ic_raw_intr_stat: ReadOnly<u32, IC_INTR::Register>),
        (0x038 => pub ic_rx_tl: ReadWrite<u32, IC_RX_TL::Register>),
        (0x03c => pub ic_tx_tl: ReadWrite<u32, IC_TX_TL::Register>),
        /// Reading any of the clear registers clears the matching interrupt.
        (0x040 => pub ic_clr_intr: ReadOnly<u32, IC_CLR_INTR::Register>),
        (0x044 => pub ic_clr_rx_under: ReadOnly<u32, IC_CLR_RX_UNDER::Register>),
        (0x048 => pub ic_clr_rx_over: ReadOnly<u32, IC_CLR_RX_OVER::Register>),
        (0x04c => pub ic_clr_tx_over: ReadOnly<u32, IC_CLR_TX_OVER::Register>),
        (0x050 => pub ic_clr_rd_req: ReadOnly<u32, IC_CLR_RD_REQ::Register>),
        (0x054 => pub ic_clr_tx_abrt: ReadOnly<u32, IC_CLR_TX_ABRT::Register>),
        (0x058 => pub ic_clr_rx_done: ReadOnly<u32, IC_CLR_RX_DONE::Register>),
        (0x05c => pub ic_clr_activity: ReadOnly<u32, IC_CLR_ACTIVITY::Register>),
        (0x060 => pub ic_clr_stop_det: ReadOnly<u32, IC_CLR_STOP_DET::Register>),
        (0x064 => pub ic_clr_start_det: ReadOnly<u32, IC_CLR_START_DET::Register>),
        (0x068 => pub ic_clr_gen_call: ReadOnly<u32, IC_CLR_GEN_CALL::Register>),
        /// Enable
        (0x06c => pub ic_enable: ReadWrite<u32, IC_ENABLE::Register>),
        (0x070 => pub ic_status: ReadOnly<u32, IC_STATUS::Register>),
        /// Transmit FIFO level
        (0x074 => pub ic_txflr: ReadOnly<u32, IC_TXFLR::Register>),
        /// Receive FIFO level
        (0x078 => pub ic_rxflr: ReadOnly<u32, IC_RXFLR::Register>),
        (0x07c => pub ic_sda_hold: ReadWrite<u32, IC_SDA_HOLD::Register>),
        (0x080 => pub ic_tx_abrt_source: ReadOnly<u32, IC_TX_ABRT_SOURCE::Register>),
        (0x084 => pub ic_slv_data_nack_only: ReadWrite<u32, IC_SLV_DATA_NACK_ONLY::Register>),
        (0x088 => pub ic_dma_cr: ReadWrite<u32, IC_DMA_CR::Register>),
        (0x08c => pub ic_dma_tdlr: ReadWrite<u32, IC_DMA_TDLR::Register>),
        (0x090 => pub ic_dma_rdlr: ReadWrite<u32, IC_DMA_RDLR::Register>),
        (0x094 => pub ic_sda_setup: ReadWrite<u32, IC_SDA_SETUP::Register>),
        (0x098 => pub ic_ack_general_call: ReadWrite<u32, IC_ACK_GENERAL_CALL::Register>),
        (0x09c => pub ic_enable_status: ReadOnly<u32, IC_ENABLE_STATUS::Register>),
        /// Spike suppression limit, standard and fast mode
        (0x0a0 => pub ic_fs_spklen: ReadWrite<u32, IC_FS_SPKLEN::Register>),
        (0x0a4 => pub ic_hs_spklen: ReadWrite<u32, IC_HS_SPKLEN::Register>),
        (0x0a8 => pub ic_clr_restart_det: ReadOnly<u32, IC_CLR_RESTART_DET::Register>),
        (0x0ac => pub ic_scl_stuck_at_low_timeout: ReadWrite<u32>),
        (0x0b0 => pub ic_sda_stuck_at_low_timeout: ReadWrite<u32>),
        (0x0b4 => pub ic_clr_scl_stuck_det: ReadOnly<u32, IC_CLR_SCL_STUCK_DET::Register>),
        (0x0b8 => _reserved0),
        (0x0f4 => pub ic_comp_param_1: ReadOnly<u32, IC_COMP_PARAM_1::Register>),
        (0x0f8 => pub ic_comp_version: ReadOnly<u32>),
        (0x0fc => pub ic_comp_type: ReadOnly<u32>),
        (0x100 => @END),
    }
}

register_bitfields![u32,
    pub IC_CON [
        MASTER_MODE OFFSET(0) NUMBITS(1) [],
        SPEED OFFSET(1) NUMBITS(2) [
            Standard = 1,
            Fast = 2,
            High = 3
        ],
        IC_10BITADDR_SLAVE OFFSET(3) NUMBITS(1) [],
        IC_10BITADDR_MASTER OFFSET(4) NUMBITS(1) [],
        IC_RESTART_EN OFFSET(5) NUMBITS(1) [],
        IC_SLAVE_DISABLE OFFSET(6) NUMBITS(1) [],
        STOP_DET_IFADDRESSED OFFSET(7) NUMBITS(1) [],
        TX_EMPTY_CTRL OFFSET(8) NUMBITS(1) [],
        RX_FIFO_FULL_HLD_CTRL OFFSET(9) NUMBITS(1) [],
        STOP_DET_IF_MASTER_ACTIVE OFFSET(10) NUMBITS(1) [],
        BUS_CLEAR_FEATURE_CTRL OFFSET(11) NUMBITS(1) []
    ],
    pub IC_TAR [
        IC_TAR OFFSET(0) NUMBITS(10) [],
        GC_OR_START OFFSET(10) NUMBITS(1) [],
        SPECIAL OFFSET(11) NUMBITS(1) [],
        IC_10BITADDR_MASTER OFFSET(12) NUMBITS(1) []
    ],
    pub IC_SAR [
        IC_SAR OFFSET(0) NUMBITS(10) []
    ],
    pub IC_HS_MADDR [
        IC_HS_MAR OFFSET(0) NUMBITS(3) []
    ],
    pub IC_DATA_CMD [
        DAT OFFSET(0) NUMBITS(8) [],
        CMD OFFSET(8) NUMBITS(1) [
            Write = 0,
            Read = 1
        ],
        STOP OFFSET(9) NUMBITS(1) [],
        RESTART OFFSET(10) NUMBITS(1) [],
        FIRST_DATA_BYTE OFFSET(11) NUMBITS(1) []
    ],
    pub IC_SS_SCL_HCNT [
        IC_SS_SCL_HCNT OFFSET(0) NUMBITS(16) []
    ],
    pub IC_SS_SCL_LCNT [
        IC_SS_SCL_LCNT OFFSET(0) NUMBITS(16) []
    ],
    pub IC_FS_SCL_HCNT [
        IC_FS_SCL_HCNT OFFSET(0) NUMBITS(16) []
    ],
    pub IC_FS_SCL_LCNT [
        IC_FS_SCL_LCNT OFFSET(0) NUMBITS(16) []
    ],
    pub IC_HS_SCL_HCNT [
        IC_HS_SCL_HCNT OFFSET(0) NUMBITS(16) []
    ],
    pub IC_HS_SCL_LCNT [
        IC_HS_SCL_LCNT OFFSET(0) NUMBITS(16) []
    ],
    pub IC_INTR [
        RX_UNDER OFFSET(0) NUMBITS(1) [],
        RX_OVER OFFSET(1) NUMBITS(1) [],
        RX_FULL OFFSET(2) NUMBITS(1) [],
        TX_OVER OFFSET(3) NUMBITS(1) [],
        TX_EMPTY OFFSET(4) NUMBITS(1) [],
        RD_REQ OFFSET(5) NUMBITS(1) [],
        TX_ABRT OFFSET(6) NUMBITS(1) [],
        RX_DONE OFFSET(7) NUMBITS(1) [],
        ACTIVITY OFFSET(8) NUMBITS(1) [],
        STOP_DET OFFSET(9) NUMBITS(1) [],
        START_DET OFFSET(10) NUMBITS(1) [],
        GEN_CALL OFFSET(11) NUMBITS(1) [],
        RESTART_DET OFFSET(12) NUMBITS(1) [],
        MST_ON_HOLD OFFSET(13) NUMBITS(1) [],
        SCL_STUCK_AT_LOW OFFSET(14) NUMBITS(1) []
    ],
    pub IC_RX_TL [
        RX_TL OFFSET(0) NUMBITS(8) []
    ],
    pub IC_TX_TL [
        TX_TL OFFSET(0) NUMBITS(8) []
    ],
    // Each clear register reads back the state of its interrupt in bit 0.
    pub IC_CLR_INTR [
        CLR_INTR OFFSET(0) NUMBITS(1) []
    ],
    pub IC_CLR_RX_UNDER [
        CLR_RX_UNDER OFFSET(0) NUMBITS(1) []
    ],
    pub IC_CLR_RX_OVER [
        CLR_RX_OVER OFFSET(0) NUMBITS(1) []
    ],
    pub IC_CLR_TX_OVER [
        CLR_TX_OVER OFFSET(0) NUMBITS(1) []
    ],
    pub IC_CLR_RD_REQ [
        CLR_RD_REQ OFFSET(0) NUMBITS(1) []
    ],
    pub IC_CLR_TX_ABRT [
        CLR_TX_ABRT OFFSET(0) NUMBITS(1) []
    ],
    pub IC_CLR_RX_DONE [
        CLR_RX_DONE OFFSET(0) NUMBITS(1) []
    ],
    pub IC_CLR_ACTIVITY [
        CLR_ACTIVITY OFFSET(0) NUMBITS(1) []
    ],
    pub IC_CLR_STOP_DET [
        CLR_STOP_DET OFFSET(0) NUMBITS(1) []
    ],
    pub IC_CLR_START_DET [
        CLR_START_DET OFFSET(0) NUMBITS(1) []
    ],
    pub IC_CLR_GEN_CALL [
        CLR_GEN_CALL OFFSET(0) NUMBITS(1) []
    ],
    pub IC_CLR_RESTART_DET [
        CLR_RESTART_DET OFFSET(0) NUMBITS(1) []
    ],
    pub IC_CLR_SCL_STUCK_DET [
        CLR_SCL_STUCK_DET OFFSET(0) NUMBITS(1) []
    ],
    pub IC_ENABLE [
        EN OFFSET(0) NUMBITS(1) [],
        ABORT OFFSET(1) NUMBITS(1) [],
        TX_CMD_BLOCK OFFSET(2) NUMBITS(1) [],
        SDA_STUCK_RECOVERY_ENABLE OFFSET(3) NUMBITS(1) []
    ],
    pub IC_STATUS [
        ACTIVITY OFFSET(0) NUMBITS(1) [],
        TFNF OFFSET(1) NUMBITS(1) [],
        TFE OFFSET(2) NUMBITS(1) [],
        RFNE OFFSET(3) NUMBITS(1) [],
        RFF OFFSET(4) NUMBITS(1) [],
        MST_ACTIVITY OFFSET(5) NUMBITS(1) [],
        SLV_ACTIVITY OFFSET(6) NUMBITS(1) [],
        MST_HOLD_TX_FIFO_EMPTY OFFSET(7) NUMBITS(1) [],
        MST_HOLD_RX_FIFO_FULL OFFSET(8) NUMBITS(1) [],
        SLV_HOLD_TX_FIFO_EMPTY OFFSET(9) NUMBITS(1) [],
        SLV_HOLD_RX_FIFO_FULL OFFSET(10) NUMBITS(1) [],
        SDA_STUCK_NOT_RECOVERED OFFSET(11) NUMBITS(1) []
    ],
    pub IC_TXFLR [
        TXFLR OFFSET(0) NUMBITS(5) []
    ],
    pub IC_RXFLR [
        RXFLR OFFSET(0) NUMBITS(5) []
    ],
    pub IC_SDA_HOLD [
        IC_SDA_TX_HOLD OFFSET(0) NUMBITS(16) [],
        IC_SDA_RX_HOLD OFFSET(16) NUMBITS(8) []
    ],
    pub IC_TX_ABRT_SOURCE [
        ABRT_7B_ADDR_NOACK OFFSET(0) NUMBITS(1) [],
        ABRT_10ADDR1_NOACK OFFSET(1) NUMBITS(1) [],
        ABRT_10ADDR2_NOACK OFFSET(2) NUMBITS(1) [],
        ABRT_TXDATA_NOACK OFFSET(3) NUMBITS(1) [],
        ABRT_GCALL_NOACK OFFSET(4) NUMBITS(1) [],
        ABRT_GCALL_READ OFFSET(5) NUMBITS(1) [],
        ABRT_HS_ACKDET OFFSET(6) NUMBITS(1) [],
        ABRT_SBYTE_ACKDET OFFSET(7) NUMBITS(1) [],
        ABRT_HS_NORSTRT OFFSET(8) NUMBITS(1) [],
        ABRT_SBYTE_NORSTRT OFFSET(9) NUMBITS(1) [],
        ABRT_10B_RD_NORSTRT OFFSET(10) NUMBITS(1) [],
        ABRT_MASTER_DIS OFFSET(11) NUMBITS(1) [],
        ARB_LOST OFFSET(12) NUMBITS(1) [],
        ABRT_SLVFLUSH_TXFIFO OFFSET(13) NUMBITS(1) [],
        ABRT_SLV_ARBLOST OFFSET(14) NUMBITS(1) [],
        ABRT_SLVRD_INTX OFFSET(15) NUMBITS(1) [],
        ABRT_USER_ABRT OFFSET(16) NUMBITS(1) [],
        ABRT_SDA_STUCK_AT_LOW OFFSET(17) NUMBITS(1) [],
        TX_FLUSH_CNT OFFSET(23) NUMBITS(9) []
    ],
    pub IC_SLV_DATA_NACK_ONLY [
        NACK OFFSET(0) NUMBITS(1) []
    ],
    pub IC_DMA_CR [
        RDMAE OFFSET(0) NUMBITS(1) [],
        TDMAE OFFSET(1) NUMBITS(1) []
    ],
    pub IC_DMA_TDLR [
        DMATDL OFFSET(0) NUMBITS(4) []
    ],
    pub IC_DMA_RDLR [
        DMARDL OFFSET(0) NUMBITS(4) []
    ],
    pub IC_SDA_SETUP [
        SDA_SETUP OFFSET(0) NUMBITS(8) []
    ],
    pub IC_ACK_GENERAL_CALL [
        ACK_GEN_CALL OFFSET(0) NUMBITS(1) []
    ],
    pub IC_ENABLE_STATUS [
        IC_EN OFFSET(0) NUMBITS(1) [],
        SLV_DISABLED_WHILE_BUSY OFFSET(1) NUMBITS(1) [],
        SLV_RX_DATA_LOST OFFSET(2) NUMBITS(1) []
    ],
    pub IC_FS_SPKLEN [
        IC_FS_SPKLEN OFFSET(0) NUMBITS(8) []
    ],
    pub IC_HS_SPKLEN [
        IC_HS_SPKLEN OFFSET(0) NUMBITS(8) []
    ],
    pub IC_COMP_PARAM_1 [
        APB_DATA_WIDTH OFFSET(0) NUMBITS(2) [],
        MAX_SPEED_MODE OFFSET(2) NUMBITS(2) [],
        HC_COUNT_VALUES OFFSET(4) NUMBITS(1) [],
        INTR_IO OFFSET(5) NUMBITS(1) [],
        HAS_DMA OFFSET(6) NUMBITS(1) [],
        ADD_ENCODED_PARAMS OFFSET(7) NUMBITS(1) [],
        RX_BUFFER_DEPTH OFFSET(8) NUMBITS(8) [],
        TX_BUFFER_DEPTH OFFSET(16) NUMBITS(8) []
    ]
];

const _: () = assert!(offset_of!(I2cRegisters, ic_enable) == 0x6c);
const _: () = assert!(offset_of!(I2cRegisters, ic_tx_abrt_source) == 0x80);
const _: () = assert!(offset_of!(I2cRegisters, ic_comp_type) == 0xfc);

pub static LAYOUT: Layout = layout!(I2cRegisters {
    ic_con => "IC_CON": u32, RW, IC_CON {
        MASTER_MODE: RW, SPEED: RW, IC_10BITADDR_SLAVE: RW, IC_10BITADDR_MASTER: RW,
        IC_RESTART_EN: RW, IC_SLAVE_DISABLE: RW, STOP_DET_IFADDRESSED: RW, TX_EMPTY_CTRL: RW,
        RX_FIFO_FULL_HLD_CTRL: RW, STOP_DET_IF_MASTER_ACTIVE: RO, BUS_CLEAR_FEATURE_CTRL: RW
    };
    ic_tar => "IC_TAR": u32, RW, IC_TAR {
        IC_TAR: RW, GC_OR_START: RW, SPECIAL: RW, IC_10BITADDR_MASTER: RW
    };
    ic_sar => "IC_SAR": u32, RW, IC_SAR { IC_SAR: RW };
    ic_hs_maddr => "IC_HS_MADDR": u32, RW, IC_HS_MADDR { IC_HS_MAR: RW };
    ic_data_cmd => "IC_DATA_CMD": u32, RW, IC_DATA_CMD {
        DAT: RW, CMD: WO, STOP: WO, RESTART: WO, FIRST_DATA_BYTE: RO
    };
    ic_ss_scl_hcnt => "IC_SS_SCL_HCNT": u32, RW, IC_SS_SCL_HCNT { IC_SS_SCL_HCNT: RW };
    ic_ss_scl_lcnt => "IC_SS_SCL_LCNT": u32, RW, IC_SS_SCL_LCNT { IC_SS_SCL_LCNT: RW };
    ic_fs_scl_hcnt => "IC_FS_SCL_HCNT": u32, RW, IC_FS_SCL_HCNT { IC_FS_SCL_HCNT: RW };
    ic_fs_scl_lcnt => "IC_FS_SCL_LCNT": u32, RW, IC_FS_SCL_LCNT { IC_FS_SCL_LCNT: RW };
    ic_hs_scl_hcnt => "IC_HS_SCL_HCNT": u32, RW, IC_HS_SCL_HCNT { IC_HS_SCL_HCNT: RW };
    ic_hs_scl_lcnt => "IC_HS_SCL_LCNT": u32, RW, IC_HS_SCL_LCNT { IC_HS_SCL_LCNT: RW };
    ic_intr_stat => "IC_INTR_STAT": u32, RO, IC_INTR {
        RX_UNDER: RO, RX_OVER: RO, RX_FULL: RO, TX_OVER: RO, TX_EMPTY: RO, RD_REQ: RO,
        TX_ABRT: RO, RX_DONE: RO, ACTIVITY: RO, STOP_DET: RO, START_DET: RO, GEN_CALL: RO,
        RESTART_DET: RO, MST_ON_HOLD: RO, SCL_STUCK_AT_LOW: RO
    };
    ic_intr_mask => "IC_INTR_MASK": u32, RW, IC_INTR {
        RX_UNDER: RW, RX_OVER: RW, RX_FULL: RW, TX_OVER: RW, TX_EMPTY: RW, RD_REQ: RW,
        TX_ABRT: RW, RX_DONE: RW, ACTIVITY: RW, STOP_DET: RW, START_DET: RW, GEN_CALL: RW,
        RESTART_DET: RW, MST_ON_HOLD: RW, SCL_STUCK_AT_LOW: RW
    };
    ic_raw_intr_stat => "IC_RAW_INTR_STAT": u32, RO, IC_INTR {
        RX_UNDER: RO, RX_OVER: RO, RX_FULL: RO, TX_OVER: RO, TX_EMPTY: RO, RD_REQ: RO,
        TX_ABRT: RO, RX_DONE: RO, ACTIVITY: RO, STOP_DET: RO, START_DET: RO, GEN_CALL: RO,
        RESTART_DET: RO, MST_ON_HOLD: RO, SCL_STUCK_AT_LOW: RO
    };
    ic_rx_tl => "IC_RX_TL": u32, RW, IC_RX_TL { RX_TL: RW };
    ic_tx_tl => "IC_TX_TL": u32, RW, IC_TX_TL { TX_TL: RW };
    ic_clr_intr => "IC_CLR_INTR": u32, RO, IC_CLR_INTR { CLR_INTR: RO };
    ic_clr_rx_under => "IC_CLR_RX_UNDER": u32, RO, IC_CLR_RX_UNDER { CLR_RX_UNDER: RO };
    ic_clr_rx_over => "IC_CLR_RX_OVER": u32, RO, IC_CLR_RX_OVER { CLR_RX_OVER: RO };
    ic_clr_tx_over => "IC_CLR_TX_OVER": u32, RO, IC_CLR_TX_OVER { CLR_TX_OVER: RO };
    ic_clr_rd_req => "IC_CLR_RD_REQ": u32, RO, IC_CLR_RD_REQ { CLR_RD_REQ: RO };
    ic_clr_tx_abrt => "IC_CLR_TX_ABRT": u32, RO, IC_CLR_TX_ABRT { CLR_TX_ABRT: RO };
    ic_clr_rx_done => "IC_CLR_RX_DONE": u32, RO, IC_CLR_RX_DONE { CLR_RX_DONE: RO };
    ic_clr_activity => "IC_CLR_ACTIVITY": u32, RO, IC_CLR_ACTIVITY { CLR_ACTIVITY: RO };
    ic_clr_stop_det => "IC_CLR_STOP_DET": u32, RO, IC_CLR_STOP_DET { CLR_STOP_DET: RO };
    ic_clr_start_det => "IC_CLR_START_DET": u32, RO, IC_CLR_START_DET { CLR_START_DET: RO };
    ic_clr_gen_call => "IC_CLR_GEN_CALL": u32, RO, IC_CLR_GEN_CALL { CLR_GEN_CALL: RO };
    ic_enable => "IC_ENABLE": u32, RW, IC_ENABLE {
        EN: RW, ABORT: RW, TX_CMD_BLOCK: RW, SDA_STUCK_RECOVERY_ENABLE: RW
    };
    ic_status => "IC_STATUS": u32, RO, IC_STATUS {
        ACTIVITY: RO, TFNF: RO, TFE: RO, RFNE: RO, RFF: RO, MST_ACTIVITY: RO, SLV_ACTIVITY: RO,
        MST_HOLD_TX_FIFO_EMPTY: RO, MST_HOLD_RX_FIFO_FULL: RO, SLV_HOLD_TX_FIFO_EMPTY: RO,
        SLV_HOLD_RX_FIFO_FULL: RO, SDA_STUCK_NOT_RECOVERED: RO
    };
    ic_txflr => "IC_TXFLR": u32, RO, IC_TXFLR { TXFLR: RO };
    ic_rxflr => "IC_RXFLR": u32, RO, IC_RXFLR { RXFLR: RO };
    ic_sda_hold => "IC_SDA_HOLD": u32, RW, IC_SDA_HOLD { IC_SDA_TX_HOLD: RW, IC_SDA_RX_HOLD: RW };
    ic_tx_abrt_source => "IC_TX_ABRT_SOURCE": u32, RO, IC_TX_ABRT_SOURCE {
        ABRT_7B_ADDR_NOACK: RO, ABRT_10ADDR1_NOACK: RO, ABRT_10ADDR2_NOACK: RO,
        ABRT_TXDATA_NOACK: RO, ABRT_GCALL_NOACK: RO, ABRT_GCALL_READ: RO, ABRT_HS_ACKDET: RO,
        ABRT_SBYTE_ACKDET: RO, ABRT_HS_NORSTRT: RO, ABRT_SBYTE_NORSTRT: RO,
        ABRT_10B_RD_NORSTRT: RO, ABRT_MASTER_DIS: RO, ARB_LOST: RO, ABRT_SLVFLUSH_TXFIFO: RO,
        ABRT_SLV_ARBLOST: RO, ABRT_SLVRD_INTX: RO, ABRT_USER_ABRT: RO, ABRT_SDA_STUCK_AT_LOW: RO,
        TX_FLUSH_CNT: RO
    };
    ic_slv_data_nack_only => "IC_SLV_DATA_NACK_ONLY": u32, RW, IC_SLV_DATA_NACK_ONLY { NACK: RW };
    ic_dma_cr => "IC_DMA_CR": u32, RW, IC_DMA_CR { RDMAE: RW, TDMAE: RW };
    ic_dma_tdlr => "IC_DMA_TDLR": u32, RW, IC_DMA_TDLR { DMATDL: RW };
    ic_dma_rdlr => "IC_DMA_RDLR": u32, RW, IC_DMA_RDLR { DMARDL: RW };
    ic_sda_setup => "IC_SDA_SETUP": u32, RW, IC_SDA_SETUP { SDA_SETUP: RW };
    ic_ack_general_call => "IC_ACK_GENERAL_CALL": u32, RW, IC_ACK_GENERAL_CALL { ACK_GEN_CALL: RW };
    ic_enable_status => "IC_ENABLE_STATUS": u32, RO, IC_ENABLE_STATUS {
        IC_EN: RO, SLV_DISABLED_WHILE_BUSY: RO, SLV_RX_DATA_LOST: RO
    };
    ic_fs_spklen => "IC_FS_SPKLEN": u32, RW, IC_FS_SPKLEN { IC_FS_SPKLEN: RW };
    ic_hs_spklen => "IC_HS_SPKLEN": u32, RW, IC_HS_SPKLEN { IC_HS_SPKLEN: RW };
    ic_clr_restart_det => "IC_CLR_RESTART_DET": u32, RO, IC_CLR_RESTART_DET { CLR_RESTART_DET: RO };
    ic_scl_stuck_at_low_timeout => "IC_SCL_STUCK_AT_LOW_TIMEOUT": u32, RW;
    ic_sda_stuck_at_low_timeout => "IC_SDA_STUCK_AT_LOW_TIMEOUT": u32, RW;
    ic_clr_scl_stuck_det => "IC_CLR_SCL_STUCK_DET": u32, RO, IC_CLR_SCL_STUCK_DET { CLR_SCL_STUCK_DET: RO };
    ic_comp_param_1 => "IC_COMP_PARAM_1": u32, RO, IC_COMP_PARAM_1 {
        APB_DATA_WIDTH: RO, MAX_SPEED_MODE: RO, HC_COUNT_VALUES: RO, INTR_IO: RO, HAS_DMA: RO,
        ADD_ENCODED_PARAMS: RO, RX_BUFFER_DEPTH: RO, TX_BUFFER_DEPTH: RO
    };
    ic_comp_version => "IC_COMP_VERSION": u32, RO;
    ic_comp_type => "IC_COMP_TYPE": u32, RO;
});

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn enable_and_abort_bits() {
        let enable: InMemoryRegister<u32, IC_ENABLE::Register> = InMemoryRegister::new(0);
        enable.write(IC_ENABLE::EN::SET);
        assert_eq!(enable.get(), 0b01);
        enable.modify(IC_ENABLE::ABORT::SET);
        assert_eq!(enable.get(), 0b11);
        assert!(enable.is_set(IC_ENABLE::ABORT));
    }

    #[test]
    fn data_cmd_read_request() {
        let data_cmd: InMemoryRegister<u32, IC_DATA_CMD::Register> = InMemoryRegister::new(0);
        data_cmd.write(IC_DATA_CMD::CMD::Read + IC_DATA_CMD::STOP::SET);
        assert_eq!(data_cmd.get(), 0x300);
    }

    #[test]
    fn clear_and_timing_registers_use_their_own_names() {
        let clear = LAYOUT.register("IC_CLR_STOP_DET").unwrap();
        assert_eq!(clear.field("CLR_STOP_DET").unwrap().mask(), 1);
        assert!(clear.field("CLR").is_err());

        let hcnt = LAYOUT.register("IC_FS_SCL_HCNT").unwrap();
        assert_eq!(hcnt.offset, 0x1c);
        assert_eq!(hcnt.field("IC_FS_SCL_HCNT").unwrap().mask(), 0xffff);

        let txflr = LAYOUT.register("IC_TXFLR").unwrap();
        assert_eq!(txflr.field("TXFLR").unwrap().width, 5);
    }

    #[test]
    fn layout_size() {
        assert_eq!(LAYOUT.size, 0x100);
        assert_eq!(LAYOUT.registers.len(), 49);
    }
}
