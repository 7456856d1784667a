// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

// Micro DMA controller (ARM PL230). UDMA0 serves the high power peripherals
// with 32 channels, UDMA1 the ULP peripherals with 12.
//
// Channel descriptors live in SRAM at CTRL_BASE_PTR; their control word is
// described by `CHANNEL_CFG`.

use core::mem::offset_of;

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::Layout;

pub const UDMA0_PARAM_CHANNELS: u32 = 32;
pub const UDMA1_PARAM_CHANNELS: u32 = 12;

register_structs! {
    pub UdmaRegisters {
        (0x000 => pub dma_status: ReadOnly<u32, DMA_STATUS::Register>),
        (0x004 => pub dma_cfg: WriteOnly<u32, DMA_CFG::Register>),
        /// Primary descriptor table, 1 KiB aligned
        (0x008 => pub ctrl_base_ptr: ReadWrite<u32, CTRL_BASE_PTR::Register>),
        /// Alternate descriptor table, derived from CTRL_BASE_PTR
        (0x00c => pub alt_ctrl_base_ptr: ReadOnly<u32>),
        (0x010 => pub dma_waitonreq_status: ReadOnly<u32>),
        (0x014 => pub chnl_sw_request: WriteOnly<u32>),
        (0x018 => pub chnl_useburst_set: ReadWrite<u32>),
        (0x01c => pub chnl_useburst_clr: WriteOnly<u32>),
        (0x020 => pub chnl_req_mask_set: ReadWrite<u32>),
        (0x024 => pub chnl_req_mask_clr: WriteOnly<u32>),
        (0x028 => pub chnl_enable_set: ReadWrite<u32>),
        (0x02c => pub chnl_enable_clr: WriteOnly<u32>),
        (0x030 => pub chnl_pri_alt_set: ReadWrite<u32>),
        (0x034 => pub chnl_pri_alt_clr: WriteOnly<u32>),
        (0x038 => pub chnl_priority_set: ReadWrite<u32>),
        (0x03c => pub chnl_priority_clr: WriteOnly<u32>),
        (0x040 => _reserved0),
        /// Bus error flag, write one to clear
        (0x04c => pub err_clr: ReadWrite<u32, ERR_CLR::Register>),
        /// Channel busy flags
        (0x050 => pub channel_status_reg: ReadOnly<u32>),
        /// Transfer done flags, write one to clear
        (0x054 => pub udma_done_status_reg: ReadWrite<u32>),
        (0x058 => _reserved1),
        (0xfd0 => pub periph_id_4: ReadOnly<u32>),
        (0xfd4 => _reserved2),
        (0xfe0 => pub periph_id: [ReadOnly<u32>; 4]),
        (0xff0 => pub primecell_id: [ReadOnly<u32>; 4]),
        (0x1000 => @END),
    }
}

register_bitfields![u32,
    pub DMA_STATUS [
        MASTER_ENABLE OFFSET(0) NUMBITS(1) [],
        STATE OFFSET(4) NUMBITS(4) [
            Idle = 0,
            ReadingChannelData = 1,
            ReadingSourceEndPointer = 2,
            ReadingDestinationEndPointer = 3,
            ReadingSourceData = 4,
            WritingDestinationData = 5,
            WaitingForRequestClear = 6,
            WritingChannelData = 7,
            Stalled = 8,
            Done = 9,
            PeripheralScatterGather = 10
        ],
        CHNLS_MINUS1 OFFSET(16) NUMBITS(5) [],
        TEST_STATUS OFFSET(28) NUMBITS(4) []
    ],
    pub DMA_CFG [
        MASTER_ENABLE OFFSET(0) NUMBITS(1) [],
        CHNL_PROT_CTRL OFFSET(5) NUMBITS(3) []
    ],
    pub CTRL_BASE_PTR [
        CTRL_BASE_PTR OFFSET(10) NUMBITS(22) []
    ],
    pub ERR_CLR [
        ERR_CLR OFFSET(0) NUMBITS(1) []
    ],
    /// Control word of a channel descriptor
    pub CHANNEL_CFG [
        CYCLE_CTRL OFFSET(0) NUMBITS(3) [
            Stop = 0,
            Basic = 1,
            AutoRequest = 2,
            PingPong = 3,
            MemoryScatterGatherPrimary = 4,
            MemoryScatterGatherAlternate = 5,
            PeripheralScatterGatherPrimary = 6,
            PeripheralScatterGatherAlternate = 7
        ],
        NEXT_USEBURST OFFSET(3) NUMBITS(1) [],
        N_MINUS_1 OFFSET(4) NUMBITS(10) [],
        R_POWER OFFSET(14) NUMBITS(4) [],
        SRC_PROT_CTRL OFFSET(18) NUMBITS(3) [],
        DST_PROT_CTRL OFFSET(21) NUMBITS(3) [],
        SRC_SIZE OFFSET(24) NUMBITS(2) [
            Byte = 0,
            HalfWord = 1,
            Word = 2
        ],
        SRC_INC OFFSET(26) NUMBITS(2) [
            Byte = 0,
            HalfWord = 1,
            Word = 2,
            NoIncrement = 3
        ],
        DST_SIZE OFFSET(28) NUMBITS(2) [
            Byte = 0,
            HalfWord = 1,
            Word = 2
        ],
        DST_INC OFFSET(30) NUMBITS(2) [
            Byte = 0,
            HalfWord = 1,
            Word = 2,
            NoIncrement = 3
        ]
    ]
];

const _: () = assert!(offset_of!(UdmaRegisters, err_clr) == 0x4c);
const _: () = assert!(offset_of!(UdmaRegisters, periph_id) == 0xfe0);

pub static LAYOUT: Layout = layout!(UdmaRegisters {
    dma_status => "DMA_STATUS": u32, RO, DMA_STATUS {
        MASTER_ENABLE: RO, STATE: RO, CHNLS_MINUS1: RO, TEST_STATUS: RO
    };
    dma_cfg => "DMA_CFG": u32, WO, DMA_CFG { MASTER_ENABLE: WO, CHNL_PROT_CTRL: WO };
    ctrl_base_ptr => "CTRL_BASE_PTR": u32, RW, CTRL_BASE_PTR { CTRL_BASE_PTR: RW };
    alt_ctrl_base_ptr => "ALT_CTRL_BASE_PTR": u32, RO;
    dma_waitonreq_status => "DMA_WAITONREQ_STATUS": u32, RO;
    chnl_sw_request => "CHNL_SW_REQUEST": u32, WO;
    chnl_useburst_set => "CHNL_USEBURST_SET": u32, RW;
    chnl_useburst_clr => "CHNL_USEBURST_CLR": u32, WO;
    chnl_req_mask_set => "CHNL_REQ_MASK_SET": u32, RW;
    chnl_req_mask_clr => "CHNL_REQ_MASK_CLR": u32, WO;
    chnl_enable_set => "CHNL_ENABLE_SET": u32, RW;
    chnl_enable_clr => "CHNL_ENABLE_CLR": u32, WO;
    chnl_pri_alt_set => "CHNL_PRI_ALT_SET": u32, RW;
    chnl_pri_alt_clr => "CHNL_PRI_ALT_CLR": u32, WO;
    chnl_priority_set => "CHNL_PRIORITY_SET": u32, RW;
    chnl_priority_clr => "CHNL_PRIORITY_CLR": u32, WO;
    err_clr => "ERR_CLR": u32, RW, ERR_CLR { ERR_CLR: RW };
    channel_status_reg => "CHANNEL_STATUS_REG": u32, RO;
    udma_done_status_reg => "UDMA_DONE_STATUS_REG": u32, RW;
    periph_id_4 => "PERIPH_ID_4": u32, RO;
    periph_id[4] => "PERIPH_ID": u32, RO;
    primecell_id[4] => "PRIMECELL_ID": u32, RO;
});

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn basic_word_copy_descriptor() {
        let mut cfg: LocalRegisterCopy<u32, CHANNEL_CFG::Register> = LocalRegisterCopy::new(0);
        cfg.modify(
            CHANNEL_CFG::CYCLE_CTRL::Basic
                + CHANNEL_CFG::N_MINUS_1.val(255)
                + CHANNEL_CFG::SRC_SIZE::Word
                + CHANNEL_CFG::SRC_INC::Word
                + CHANNEL_CFG::DST_SIZE::Word
                + CHANNEL_CFG::DST_INC::Word,
        );
        assert_eq!(cfg.get(), 0xaa00_0ff1);
    }

    #[test]
    fn controller_state() {
        let status: LocalRegisterCopy<u32, DMA_STATUS::Register> =
            LocalRegisterCopy::new(0x001f_0001);
        assert!(status.is_set(DMA_STATUS::MASTER_ENABLE));
        assert!(status.matches_all(DMA_STATUS::STATE::Idle));
        assert_eq!(status.read(DMA_STATUS::CHNLS_MINUS1) + 1, UDMA0_PARAM_CHANNELS);
    }
}
