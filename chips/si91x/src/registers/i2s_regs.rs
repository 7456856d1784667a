// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! I2S / PCM controller (DesignWare DW_apb_i2s), instantiated as I2S0 in the
//! M4 subsystem and I2S1 in the ULP subsystem.
//!
//! Global enables and the clock generator sit at the start of the block. Each
//! stereo channel owns a 0x40 byte `CHANNEL_CONFIG` group starting at 0x20
//! with its left/right FIFO windows, word length and interrupt registers. The
//! DMA windows and component parameters close the block.

use core::mem::{offset_of, size_of};

use tock_registers::registers::{Aliased, ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::Layout;

pub const I2S_PARAM_CHANNELS: usize = 2;
/// `I2S_COMP_TYPE_REG` of every DesignWare APB I2S ("D_IS").
pub const I2S_PARAM_COMP_TYPE: u32 = 0x445f_4953;

register_structs! {
    pub I2sChannelRegisters {
        /// Left receive buffer / left transmit holding
        (0x000 => pub i2s_lrbr_lthr: Aliased<u32, I2S_LRBR::Register, I2S_LTHR::Register>),
        (0x004 => pub i2s_rrbr_rthr: Aliased<u32, I2S_RRBR::Register, I2S_RTHR::Register>),
        (0x008 => pub i2s_rer: ReadWrite<u32, I2S_RER::Register>),
        (0x00c => pub i2s_ter: ReadWrite<u32, I2S_TER::Register>),
        (0x010 => pub i2s_rcr: ReadWrite<u32, I2S_WLEN::Register>),
        (0x014 => pub i2s_tcr: ReadWrite<u32, I2S_WLEN::Register>),
        (0x018 => pub i2s_isr: ReadOnly<u32, I2S_ISR::Register>),
        (0x01c => pub i2s_imr: ReadWrite<u32, I2S_ISR::Register>),
        /// Read to clear the receive overrun
        (0x020 => pub i2s_ror: ReadOnly<u32, I2S_ROR::Register>),
        (0x024 => pub i2s_tor: ReadOnly<u32, I2S_TOR::Register>),
        (0x028 => pub i2s_rfcr: ReadWrite<u32, I2S_RFCR::Register>),
        (0x02c => pub i2s_tfcr: ReadWrite<u32, I2S_TFCR::Register>),
        (0x030 => pub i2s_rff: WriteOnly<u32, I2S_RFF::Register>),
        (0x034 => pub i2s_tff: WriteOnly<u32, I2S_TFF::Register>),
        (0x038 => _reserved0),
        (0x040 => @END),
    },

    pub I2sRegisters {
        (0x000 => pub i2s_ier: ReadWrite<u32, I2S_IER::Register>),
        (0x004 => pub i2s_irer: ReadWrite<u32, I2S_IRER::Register>),
        (0x008 => pub i2s_iter: ReadWrite<u32, I2S_ITER::Register>),
        (0x00c => pub i2s_cer: ReadWrite<u32, I2S_CER::Register>),
        (0x010 => pub i2s_ccr: ReadWrite<u32, I2S_CCR::Register>),
        (0x014 => pub i2s_rxffr: WriteOnly<u32, I2S_RXFFR::Register>),
        (0x018 => pub i2s_txffr: WriteOnly<u32, I2S_TXFFR::Register>),
        (0x01c => _reserved0),
        (0x020 => pub channel_config: [I2sChannelRegisters; I2S_PARAM_CHANNELS]),
        (0x0a0 => _reserved1),
        (0x1c0 => pub i2s_rxdma: ReadOnly<u32>),
        (0x1c4 => pub i2s_rrxdma: WriteOnly<u32, I2S_RRXDMA::Register>),
        (0x1c8 => pub i2s_txdma: WriteOnly<u32>),
        (0x1cc => pub i2s_rtxdma: WriteOnly<u32, I2S_RTXDMA::Register>),
        (0x1d0 => _reserved2),
        (0x1f0 => pub i2s_comp_param_2: ReadOnly<u32, I2S_COMP_PARAM_2::Register>),
        (0x1f4 => pub i2s_comp_param_1: ReadOnly<u32, I2S_COMP_PARAM_1::Register>),
        (0x1f8 => pub i2s_comp_version_reg: ReadOnly<u32>),
        (0x1fc => pub i2s_comp_type_reg: ReadOnly<u32>),
        (0x200 => @END),
    }
}

register_bitfields![u32,
    pub I2S_IER [
        IEN OFFSET(0) NUMBITS(1) []
    ],
    pub I2S_IRER [
        RXEN OFFSET(0) NUMBITS(1) []
    ],
    pub I2S_ITER [
        TXEN OFFSET(0) NUMBITS(1) []
    ],
    pub I2S_CER [
        CLKEN OFFSET(0) NUMBITS(1) []
    ],
    pub I2S_CCR [
        /// Clock cycles the word select line stays in one state
        SCLKG OFFSET(0) NUMBITS(3) [
            NoGating = 0,
            Cycles12 = 1,
            Cycles16 = 2,
            Cycles20 = 3,
            Cycles24 = 4
        ],
        WSS OFFSET(3) NUMBITS(2) [
            Cycles16 = 0,
            Cycles24 = 1,
            Cycles32 = 2
        ]
    ],
    pub I2S_RXFFR [
        RXFFR OFFSET(0) NUMBITS(1) []
    ],
    pub I2S_TXFFR [
        TXFFR OFFSET(0) NUMBITS(1) []
    ],
    pub I2S_LRBR [
        LRBR OFFSET(0) NUMBITS(24) []
    ],
    pub I2S_LTHR [
        LTHR OFFSET(0) NUMBITS(24) []
    ],
    pub I2S_RRBR [
        RRBR OFFSET(0) NUMBITS(24) []
    ],
    pub I2S_RTHR [
        RTHR OFFSET(0) NUMBITS(24) []
    ],
    pub I2S_RER [
        RXCHEN OFFSET(0) NUMBITS(1) []
    ],
    pub I2S_TER [
        TXCHEN OFFSET(0) NUMBITS(1) []
    ],
    pub I2S_WLEN [
        WLEN OFFSET(0) NUMBITS(3) [
            Ignore = 0,
            Bits12 = 1,
            Bits16 = 2,
            Bits20 = 3,
            Bits24 = 4
        ]
    ],
    pub I2S_ISR [
        RXDA OFFSET(0) NUMBITS(1) [],
        RXFO OFFSET(1) NUMBITS(1) [],
        TXFE OFFSET(4) NUMBITS(1) [],
        TXFO OFFSET(5) NUMBITS(1) []
    ],
    pub I2S_ROR [
        RXCHO OFFSET(0) NUMBITS(1) []
    ],
    pub I2S_TOR [
        TXCHO OFFSET(0) NUMBITS(1) []
    ],
    pub I2S_RFCR [
        RXCHDT OFFSET(0) NUMBITS(4) []
    ],
    pub I2S_TFCR [
        TXCHET OFFSET(0) NUMBITS(4) []
    ],
    pub I2S_RFF [
        RXCHFR OFFSET(0) NUMBITS(1) []
    ],
    pub I2S_TFF [
        TXCHFR OFFSET(0) NUMBITS(1) []
    ],
    pub I2S_RRXDMA [
        RRXDMA OFFSET(0) NUMBITS(1) []
    ],
    pub I2S_RTXDMA [
        RTXDMA OFFSET(0) NUMBITS(1) []
    ],
    pub I2S_COMP_PARAM_2 [
        I2S_RX_WORDSIZE_0 OFFSET(0) NUMBITS(3) [],
        I2S_RX_WORDSIZE_1 OFFSET(3) NUMBITS(3) []
    ],
    pub I2S_COMP_PARAM_1 [
        APB_DATA_WIDTH OFFSET(0) NUMBITS(2) [],
        I2S_FIFO_DEPTH_GLOBAL OFFSET(2) NUMBITS(2) [],
        I2S_FIFO_DEPTH_MODE_EN OFFSET(4) NUMBITS(1) [],
        I2S_TRANSMITTER_BLOCK OFFSET(5) NUMBITS(1) [],
        I2S_RECEIVER_BLOCK OFFSET(6) NUMBITS(1) [],
        I2S_RX_CHANNELS OFFSET(7) NUMBITS(2) [],
        I2S_TX_CHANNELS OFFSET(9) NUMBITS(2) [],
        I2S_TX_WORDSIZE_0 OFFSET(16) NUMBITS(3) [],
        I2S_TX_WORDSIZE_1 OFFSET(19) NUMBITS(3) []
    ]
];

const _: () = assert!(offset_of!(I2sRegisters, channel_config) == 0x20);
const _: () = assert!(size_of::<I2sChannelRegisters>() == 0x40);
const _: () = assert!(offset_of!(I2sRegisters, i2s_comp_type_reg) == 0x1fc);

pub static LAYOUT: Layout = layout!(I2sRegisters {
    i2s_ier => "I2S_IER": u32, RW, I2S_IER { IEN: RW };
    i2s_irer => "I2S_IRER": u32, RW, I2S_IRER { RXEN: RW };
    i2s_iter => "I2S_ITER": u32, RW, I2S_ITER { TXEN: RW };
    i2s_cer => "I2S_CER": u32, RW, I2S_CER { CLKEN: RW };
    i2s_ccr => "I2S_CCR": u32, RW, I2S_CCR { SCLKG: RW, WSS: RW };
    i2s_rxffr => "I2S_RXFFR": u32, WO, I2S_RXFFR { RXFFR: WO };
    i2s_txffr => "I2S_TXFFR": u32, WO, I2S_TXFFR { TXFFR: WO };
    i2s_rxdma => "I2S_RXDMA": u32, RO;
    i2s_rrxdma => "I2S_RRXDMA": u32, WO, I2S_RRXDMA { RRXDMA: WO };
    i2s_txdma => "I2S_TXDMA": u32, WO;
    i2s_rtxdma => "I2S_RTXDMA": u32, WO, I2S_RTXDMA { RTXDMA: WO };
    i2s_comp_param_2 => "I2S_COMP_PARAM_2": u32, RO, I2S_COMP_PARAM_2 {
        I2S_RX_WORDSIZE_0: RO, I2S_RX_WORDSIZE_1: RO
    };
    i2s_comp_param_1 => "I2S_COMP_PARAM_1": u32, RO, I2S_COMP_PARAM_1 {
        APB_DATA_WIDTH: RO, I2S_FIFO_DEPTH_GLOBAL: RO, I2S_FIFO_DEPTH_MODE_EN: RO,
        I2S_TRANSMITTER_BLOCK: RO, I2S_RECEIVER_BLOCK: RO, I2S_RX_CHANNELS: RO,
        I2S_TX_CHANNELS: RO, I2S_TX_WORDSIZE_0: RO, I2S_TX_WORDSIZE_1: RO
    };
    i2s_comp_version_reg => "I2S_COMP_VERSION_REG": u32, RO;
    i2s_comp_type_reg => "I2S_COMP_TYPE_REG": u32, RO;
}
    clusters {
        channel_config[I2S_PARAM_CHANNELS] => "CHANNEL_CONFIG": I2sChannelRegisters {
            i2s_lrbr_lthr => "I2S_LRBR": u32, RO, I2S_LRBR { LRBR: RO };
            i2s_lrbr_lthr => "I2S_LTHR": u32, WO, I2S_LTHR { LTHR: WO };
            i2s_rrbr_rthr => "I2S_RRBR": u32, RO, I2S_RRBR { RRBR: RO };
            i2s_rrbr_rthr => "I2S_RTHR": u32, WO, I2S_RTHR { RTHR: WO };
            i2s_rer => "I2S_RER": u32, RW, I2S_RER { RXCHEN: RW };
            i2s_ter => "I2S_TER": u32, RW, I2S_TER { TXCHEN: RW };
            i2s_rcr => "I2S_RCR": u32, RW, I2S_WLEN { WLEN: RW };
            i2s_tcr => "I2S_TCR": u32, RW, I2S_WLEN { WLEN: RW };
            i2s_isr => "I2S_ISR": u32, RO, I2S_ISR { RXDA: RO, RXFO: RO, TXFE: RO, TXFO: RO };
            i2s_imr => "I2S_IMR": u32, RW, I2S_ISR { RXDA: RW, RXFO: RW, TXFE: RW, TXFO: RW };
            i2s_ror => "I2S_ROR": u32, RO, I2S_ROR { RXCHO: RO };
            i2s_tor => "I2S_TOR": u32, RO, I2S_TOR { TXCHO: RO };
            i2s_rfcr => "I2S_RFCR": u32, RW, I2S_RFCR { RXCHDT: RW };
            i2s_tfcr => "I2S_TFCR": u32, RW, I2S_TFCR { TXCHET: RW };
            i2s_rff => "I2S_RFF": u32, WO, I2S_RFF { RXCHFR: WO };
            i2s_tff => "I2S_TFF": u32, WO, I2S_TFF { TXCHFR: WO };
        };
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn channel_one_word_length() {
        let channels = &LAYOUT.clusters[0];
        assert_eq!(channels.name, "CHANNEL_CONFIG");
        assert_eq!((channels.offset, channels.stride), (0x20, 0x40));
        let tcr = channels.register("I2S_TCR").unwrap();
        assert_eq!(channels.element_offset(1).unwrap() + tcr.offset, 0x74);
    }

    #[test]
    fn left_fifo_aliases() {
        let channels = &LAYOUT.clusters[0];
        let lrbr = channels.register("I2S_LRBR").unwrap();
        let lthr = channels.register("I2S_LTHR").unwrap();
        assert_eq!(lrbr.offset, lthr.offset);
        assert!(!lrbr.access.is_writable() && !lthr.access.is_readable());
    }

    #[test]
    fn clock_config() {
        let mut ccr: LocalRegisterCopy<u32, I2S_CCR::Register> = LocalRegisterCopy::new(0);
        ccr.modify(I2S_CCR::WSS::Cycles32 + I2S_CCR::SCLKG::NoGating);
        assert_eq!(ccr.get(), 0x10);
    }
}
