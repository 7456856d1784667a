// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

// General purpose DMA controller.
//
// The controller is split over two windows: GPDMA_G holds the registers
// shared by all channels and GPDMA_C the eight per-channel blocks, each
// 0x100 bytes apart.

use core::mem::{offset_of, size_of};

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::Layout;

pub const GPDMA_PARAM_CHANNELS: usize = 8;
/// Bytes between two channel blocks.
pub const GPDMA_PARAM_CHANNEL_STRIDE: usize = 0x100;
/// Shared FIFO, in 32-bit words, split between channels by FIFO_CONFIG_REGS.
pub const GPDMA_PARAM_FIFO_WORDS: u32 = 64;

register_structs! {
    pub GpdmaGlobalRegisters {
        /// Per channel interrupt pending, write one to clear
        (0x000 => pub interrupt_reg: ReadWrite<u32, INTERRUPT_REG::Register>),
        (0x004 => pub interrupt_mask_reg: ReadWrite<u32, INTERRUPT_MASK_REG::Register>),
        (0x008 => pub interrupt_stat_reg: ReadWrite<u32, INTERRUPT_STAT_REG::Register>),
        (0x00c => pub dma_chnl_enable_reg: ReadWrite<u32, DMA_CHNL::Register>),
        /// Abort an active channel
        (0x010 => pub dma_chnl_squash_reg: ReadWrite<u32, DMA_CHNL::Register>),
        /// Lock a channel until its current transfer completes
        (0x014 => pub dma_chnl_lock_reg: ReadWrite<u32, DMA_CHNL::Register>),
        (0x018 => @END),
    },

    pub GpdmaGRegisters {
        (0x000 => pub global: GpdmaGlobalRegisters),
        (0x018 => @END),
    },

    pub GpdmaChannelRegisters {
        /// Address of the next link list descriptor
        (0x000 => pub link_list_ptr_regs: ReadWrite<u32>),
        (0x004 => pub src_addr_reg_chnl: ReadWrite<u32>),
        (0x008 => pub dest_addr_reg_chnl: ReadWrite<u32>),
        (0x00c => pub channel_ctrl_reg_chnl: ReadWrite<u32, CHANNEL_CTRL_REG_CHNL::Register>),
        (0x010 => pub misc_channel_ctrl_reg_chnl: ReadWrite<u32, MISC_CHANNEL_CTRL_REG_CHNL::Register>),
        (0x014 => pub fifo_config_regs: ReadWrite<u32, FIFO_CONFIG_REGS::Register>),
        (0x018 => pub priority_chnl_regs: ReadWrite<u32, PRIORITY_CHNL_REGS::Register>),
        (0x01c => _reserved0),
        (0x100 => @END),
    },

    pub GpdmaCRegisters {
        (0x000 => pub channel_config: [GpdmaChannelRegisters; GPDMA_PARAM_CHANNELS]),
        (0x800 => @END),
    }
}

register_bitfields![u32,
    pub INTERRUPT_REG [
        GPDMAC_INT_STAT OFFSET(0) NUMBITS(8) []
    ],
    pub INTERRUPT_MASK_REG [
        LINK_LIST_FETCH_MASK OFFSET(0) NUMBITS(8) [],
        TFR_DONE_MASK OFFSET(8) NUMBITS(8) [],
        TRANS_ERR_MASK OFFSET(16) NUMBITS(8) [],
        GPDMAC_ERR_MASK OFFSET(24) NUMBITS(8) []
    ],
    pub INTERRUPT_STAT_REG [
        CH0 OFFSET(0) NUMBITS(4) [],
        CH1 OFFSET(4) NUMBITS(4) [],
        CH2 OFFSET(8) NUMBITS(4) [],
        CH3 OFFSET(12) NUMBITS(4) [],
        CH4 OFFSET(16) NUMBITS(4) [],
        CH5 OFFSET(20) NUMBITS(4) [],
        CH6 OFFSET(24) NUMBITS(4) [],
        CH7 OFFSET(28) NUMBITS(4) []
    ],
    pub DMA_CHNL [
        CHANNELS OFFSET(0) NUMBITS(8) []
    ],
    pub CHANNEL_CTRL_REG_CHNL [
        /// Block size in bytes
        DMA_BLK_SIZE OFFSET(0) NUMBITS(12) [],
        TRNS_TYPE OFFSET(12) NUMBITS(2) [
            MemoryToMemory = 0,
            MemoryToPeripheral = 1,
            PeripheralToMemory = 2,
            PeripheralToPeripheral = 3
        ],
        DMA_FLOW_CTRL OFFSET(14) NUMBITS(2) [
            Dma = 0,
            SourcePeripheral = 1,
            DestinationPeripheral = 2,
            SourceAndDestination = 3
        ],
        MSTR_IF_FETCH_SEL OFFSET(16) NUMBITS(1) [],
        MSTR_IF_SEND_SEL OFFSET(17) NUMBITS(1) [],
        DEST_DATA_WIDTH OFFSET(18) NUMBITS(2) [
            Byte = 0,
            HalfWord = 1,
            Word = 2
        ],
        SRC_DATA_WIDTH OFFSET(20) NUMBITS(2) [
            Byte = 0,
            HalfWord = 1,
            Word = 2
        ],
        SRC_ALIGN OFFSET(22) NUMBITS(1) [],
        LINK_LIST_ON OFFSET(23) NUMBITS(1) [],
        LINK_LIST_MSTR_SEL OFFSET(24) NUMBITS(1) [],
        SRC_ADDR_CONTIGUOUS OFFSET(25) NUMBITS(1) [],
        DEST_ADDR_CONTIGUOUS OFFSET(26) NUMBITS(1) [],
        RETRY_ON_ERROR OFFSET(27) NUMBITS(1) [],
        LINK_INTERRUPT OFFSET(28) NUMBITS(1) [],
        SRC_FIFO_MODE OFFSET(29) NUMBITS(1) [],
        DEST_FIFO_MODE OFFSET(30) NUMBITS(1) []
    ],
    pub MISC_CHANNEL_CTRL_REG_CHNL [
        AHB_BURST_SIZE OFFSET(0) NUMBITS(3) [],
        DEST_DATA_BURST OFFSET(3) NUMBITS(6) [],
        SRC_DATA_BURST OFFSET(9) NUMBITS(6) [],
        DEST_CHNL_ID OFFSET(15) NUMBITS(6) [],
        SRC_CHNL_ID OFFSET(21) NUMBITS(6) [],
        DMA_PROT OFFSET(27) NUMBITS(3) [],
        MEM_FILL_ENABLE OFFSET(30) NUMBITS(1) [],
        MEM_ONE_FILL OFFSET(31) NUMBITS(1) []
    ],
    pub FIFO_CONFIG_REGS [
        FIFO_STRT_ADDR OFFSET(0) NUMBITS(6) [],
        FIFO_SIZE OFFSET(6) NUMBITS(6) []
    ],
    pub PRIORITY_CHNL_REGS [
        PRIORITY_CH OFFSET(0) NUMBITS(2) []
    ]
];

const _: () = assert!(size_of::<GpdmaChannelRegisters>() == GPDMA_PARAM_CHANNEL_STRIDE);
const _: () = assert!(size_of::<GpdmaCRegisters>() == GPDMA_PARAM_CHANNELS * GPDMA_PARAM_CHANNEL_STRIDE);
const _: () = assert!(offset_of!(GpdmaChannelRegisters, channel_ctrl_reg_chnl) == 0x0c);
const _: () = assert!(offset_of!(GpdmaGlobalRegisters, dma_chnl_enable_reg) == 0x0c);

pub static GLOBAL_LAYOUT: Layout = layout!(GpdmaGRegisters {}
    clusters {
        global[1] => "GLOBAL": GpdmaGlobalRegisters {
            interrupt_reg => "INTERRUPT_REG": u32, RW, INTERRUPT_REG { GPDMAC_INT_STAT: RW };
            interrupt_mask_reg => "INTERRUPT_MASK_REG": u32, RW, INTERRUPT_MASK_REG {
                LINK_LIST_FETCH_MASK: RW, TFR_DONE_MASK: RW, TRANS_ERR_MASK: RW, GPDMAC_ERR_MASK: RW
            };
            interrupt_stat_reg => "INTERRUPT_STAT_REG": u32, RW, INTERRUPT_STAT_REG {
                CH0: RW, CH1: RW, CH2: RW, CH3: RW, CH4: RW, CH5: RW, CH6: RW, CH7: RW
            };
            dma_chnl_enable_reg => "DMA_CHNL_ENABLE_REG": u32, RW, DMA_CHNL { CHANNELS: RW };
            dma_chnl_squash_reg => "DMA_CHNL_SQUASH_REG": u32, RW, DMA_CHNL { CHANNELS: RW };
            dma_chnl_lock_reg => "DMA_CHNL_LOCK_REG": u32, RW, DMA_CHNL { CHANNELS: RW };
        };
    }
);

pub static CHANNEL_LAYOUT: Layout = layout!(GpdmaCRegisters {}
    clusters {
        channel_config[GPDMA_PARAM_CHANNELS] => "CHANNEL_CONFIG": GpdmaChannelRegisters {
            link_list_ptr_regs => "LINK_LIST_PTR_REGS": u32, RW;
            src_addr_reg_chnl => "SRC_ADDR_REG_CHNL": u32, RW;
            dest_addr_reg_chnl => "DEST_ADDR_REG_CHNL": u32, RW;
            channel_ctrl_reg_chnl => "CHANNEL_CTRL_REG_CHNL": u32, RW, CHANNEL_CTRL_REG_CHNL {
                DMA_BLK_SIZE: RW, TRNS_TYPE: RW, DMA_FLOW_CTRL: RW, MSTR_IF_FETCH_SEL: RW,
                MSTR_IF_SEND_SEL: RW, DEST_DATA_WIDTH: RW, SRC_DATA_WIDTH: RW, SRC_ALIGN: RW,
                LINK_LIST_ON: RW, LINK_LIST_MSTR_SEL: RW, SRC_ADDR_CONTIGUOUS: RW,
                DEST_ADDR_CONTIGUOUS: RW, RETRY_ON_ERROR: RW, LINK_INTERRUPT: RW,
                SRC_FIFO_MODE: RW, DEST_FIFO_MODE: RW
            };
            misc_channel_ctrl_reg_chnl => "MISC_CHANNEL_CTRL_REG_CHNL": u32, RW,
                MISC_CHANNEL_CTRL_REG_CHNL {
                    AHB_BURST_SIZE: RW, DEST_DATA_BURST: RW, SRC_DATA_BURST: RW, DEST_CHNL_ID: RW,
                    SRC_CHNL_ID: RW, DMA_PROT: RW, MEM_FILL_ENABLE: RW, MEM_ONE_FILL: RW
                };
            fifo_config_regs => "FIFO_CONFIG_REGS": u32, RW, FIFO_CONFIG_REGS {
                FIFO_STRT_ADDR: RW, FIFO_SIZE: RW
            };
            priority_chnl_regs => "PRIORITY_CHNL_REGS": u32, RW, PRIORITY_CHNL_REGS { PRIORITY_CH: RW };
        };
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn channel_block_layout() {
        assert_eq!(CHANNEL_LAYOUT.size, 0x800);
        let channels = &CHANNEL_LAYOUT.clusters[0];
        assert_eq!(channels.count, 8);
        assert_eq!(channels.stride, 0x100);
        assert_eq!(channels.element_offset(7), Ok(0x700));
    }

    #[test]
    fn memory_to_peripheral_word_transfer() {
        let mut ctrl: LocalRegisterCopy<u32, CHANNEL_CTRL_REG_CHNL::Register> =
            LocalRegisterCopy::new(0);
        ctrl.modify(
            CHANNEL_CTRL_REG_CHNL::DMA_BLK_SIZE.val(0x400)
                + CHANNEL_CTRL_REG_CHNL::TRNS_TYPE::MemoryToPeripheral
                + CHANNEL_CTRL_REG_CHNL::SRC_DATA_WIDTH::Word
                + CHANNEL_CTRL_REG_CHNL::DEST_DATA_WIDTH::Word,
        );
        assert_eq!(ctrl.read(CHANNEL_CTRL_REG_CHNL::DMA_BLK_SIZE), 0x400);
        assert_eq!(ctrl.get(), 0x400 | (1 << 12) | (2 << 18) | (2 << 20));
    }
}
