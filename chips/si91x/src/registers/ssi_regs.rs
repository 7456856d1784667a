// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

// Synchronous serial interface (DesignWare DW_apb_ssi). SSI0 is the high
// power master, SSISlave the slave-only instance and SSI2 the ULP master.

use core::mem::offset_of;

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::Layout;

/// Number of 32-bit data register aliases, all mapped onto the same FIFO.
pub const SSI_PARAM_DR_COUNT: usize = 36;

register_structs! {
    pub SsiRegisters {
        (0x000 => pub ctrlr0: ReadWrite<u32, CTRLR0::Register>),
        /// Number of data frames for receive-only transfers
        (0x004 => pub ctrlr1: ReadWrite<u32, CTRLR1::Register>),
        (0x008 => pub ssienr: ReadWrite<u32, SSIENR::Register>),
        /// Microwire control
        (0x00c => pub mwcr: ReadWrite<u32, MWCR::Register>),
        /// Slave enable
        (0x010 => pub ser: ReadWrite<u32, SER::Register>),
        (0x014 => pub baudr: ReadWrite<u32, BAUDR::Register>),
        (0x018 => pub txftlr: ReadWrite<u32, TXFTLR::Register>),
        (0x01c => pub rxftlr: ReadWrite<u32, RXFTLR::Register>),
        (0x020 => pub txflr: ReadOnly<u32, TXFLR::Register>),
        (0x024 => pub rxflr: ReadOnly<u32, RXFLR::Register>),
        (0x028 => pub sr: ReadOnly<u32, SR::Register>),
        (0x02c => pub imr: ReadWrite<u32, INTR::Register>),
        (0x030 => pub isr: ReadOnly<u32, INTR::Register>),
        (0x034 => pub risr: ReadOnly<u32, INTR::Register>),
        (0x038 => pub txoicr: ReadOnly<u32, TXOICR::Register>),
        (0x03c => pub rxoicr: ReadOnly<u32, RXOICR::Register>),
        (0x040 => pub rxuicr: ReadOnly<u32, RXUICR::Register>),
        (0x044 => pub msticr: ReadOnly<u32, MSTICR::Register>),
        (0x048 => pub icr: ReadOnly<u32, ICR::Register>),
        (0x04c => pub dmacr: ReadWrite<u32, DMACR::Register>),
        (0x050 => pub dmatdlr: ReadWrite<u32, DMATDLR::Register>),
        (0x054 => pub dmardlr: ReadWrite<u32, DMARDLR::Register>),
        (0x058 => pub idr: ReadOnly<u32>),
        (0x05c => pub ssi_comp_version: ReadOnly<u32>),
        (0x060 => pub dr: [ReadWrite<u32>; SSI_PARAM_DR_COUNT]),
        (0x0f0 => pub rx_sample_dly: ReadWrite<u32, RX_SAMPLE_DLY::Register>),
        /// Dual/quad/octal frame control
        (0x0f4 => pub spi_ctrlr0: ReadWrite<u32, SPI_CTRLR0::Register>),
        (0x0f8 => pub txd_drive_edge: ReadWrite<u32>),
        (0x0fc => _reserved0),
        (0x100 => @END),
    }
}

register_bitfields![u32,
    pub CTRLR0 [
        /// Data frame size minus one, for frames up to 16 bits
        DFS OFFSET(0) NUMBITS(4) [],
        FRF OFFSET(4) NUMBITS(2) [
            Motorola = 0,
            TexasInstruments = 1,
            Microwire = 2
        ],
        SCPH OFFSET(6) NUMBITS(1) [],
        SCPOL OFFSET(7) NUMBITS(1) [],
        TMOD OFFSET(8) NUMBITS(2) [
            TransmitAndReceive = 0,
            TransmitOnly = 1,
            ReceiveOnly = 2,
            EepromRead = 3
        ],
        SLV_OE OFFSET(10) NUMBITS(1) [],
        SRL OFFSET(11) NUMBITS(1) [],
        CFS OFFSET(12) NUMBITS(4) [],
        DFS_32 OFFSET(16) NUMBITS(5) [],
        SPI_FRF OFFSET(21) NUMBITS(2) [
            Standard = 0,
            Dual = 1,
            Quad = 2,
            Octal = 3
        ],
        SSTE OFFSET(24) NUMBITS(1) []
    ],
    pub CTRLR1 [
        NDF OFFSET(0) NUMBITS(16) []
    ],
    pub SSIENR [
        SSI_EN OFFSET(0) NUMBITS(1) []
    ],
    pub MWCR [
        MWMOD OFFSET(0) NUMBITS(1) [],
        MDD OFFSET(1) NUMBITS(1) [],
        MHS OFFSET(2) NUMBITS(1) []
    ],
    pub SER [
        SER OFFSET(0) NUMBITS(4) []
    ],
    pub BAUDR [
        SCKDV OFFSET(0) NUMBITS(16) []
    ],
    pub TXFTLR [
        TFT OFFSET(0) NUMBITS(5) []
    ],
    pub RXFTLR [
        RFT OFFSET(0) NUMBITS(5) []
    ],
    pub TXFLR [
        TXTFL OFFSET(0) NUMBITS(6) []
    ],
    pub RXFLR [
        RXTFL OFFSET(0) NUMBITS(6) []
    ],
    pub SR [
        BUSY OFFSET(0) NUMBITS(1) [],
        TFNF OFFSET(1) NUMBITS(1) [],
        TFE OFFSET(2) NUMBITS(1) [],
        RFNE OFFSET(3) NUMBITS(1) [],
        RFF OFFSET(4) NUMBITS(1) [],
        TXE OFFSET(5) NUMBITS(1) [],
        DCOL OFFSET(6) NUMBITS(1) []
    ],
    pub INTR [
        TXEI OFFSET(0) NUMBITS(1) [],
        TXOI OFFSET(1) NUMBITS(1) [],
        RXUI OFFSET(2) NUMBITS(1) [],
        RXOI OFFSET(3) NUMBITS(1) [],
        RXFI OFFSET(4) NUMBITS(1) [],
        MSTI OFFSET(5) NUMBITS(1) []
    ],
    pub TXOICR [
        TXOICR OFFSET(0) NUMBITS(1) []
    ],
    pub RXOICR [
        RXOICR OFFSET(0) NUMBITS(1) []
    ],
    pub RXUICR [
        RXUICR OFFSET(0) NUMBITS(1) []
    ],
    pub MSTICR [
        MSTICR OFFSET(0) NUMBITS(1) []
    ],
    pub ICR [
        ICR OFFSET(0) NUMBITS(1) []
    ],
    pub DMACR [
        RDMAE OFFSET(0) NUMBITS(1) [],
        TDMAE OFFSET(1) NUMBITS(1) []
    ],
    pub DMATDLR [
        DMATDL OFFSET(0) NUMBITS(5) []
    ],
    pub DMARDLR [
        DMARDL OFFSET(0) NUMBITS(5) []
    ],
    pub RX_SAMPLE_DLY [
        RSD OFFSET(0) NUMBITS(8) []
    ],
    pub SPI_CTRLR0 [
        TRANS_TYPE OFFSET(0) NUMBITS(2) [],
        ADDR_L OFFSET(2) NUMBITS(4) [],
        INST_L OFFSET(8) NUMBITS(2) [],
        WAIT_CYCLES OFFSET(11) NUMBITS(5) []
    ]
];

const _: () = assert!(offset_of!(SsiRegisters, sr) == 0x28);
const _: () = assert!(offset_of!(SsiRegisters, dr) == 0x60);
const _: () = assert!(offset_of!(SsiRegisters, rx_sample_dly) == 0xf0);

pub static LAYOUT: Layout = layout!(SsiRegisters {
    ctrlr0 => "CTRLR0": u32, RW, CTRLR0 {
        DFS: RW, FRF: RW, SCPH: RW, SCPOL: RW, TMOD: RW, SLV_OE: RW, SRL: RW, CFS: RW,
        DFS_32: RW, SPI_FRF: RW, SSTE: RW
    };
    ctrlr1 => "CTRLR1": u32, RW, CTRLR1 { NDF: RW };
    ssienr => "SSIENR": u32, RW, SSIENR { SSI_EN: RW };
    mwcr => "MWCR": u32, RW, MWCR { MWMOD: RW, MDD: RW, MHS: RW };
    ser => "SER": u32, RW, SER { SER: RW };
    baudr => "BAUDR": u32, RW, BAUDR { SCKDV: RW };
    txftlr => "TXFTLR": u32, RW, TXFTLR { TFT: RW };
    rxftlr => "RXFTLR": u32, RW, RXFTLR { RFT: RW };
    txflr => "TXFLR": u32, RO, TXFLR { TXTFL: RO };
    rxflr => "RXFLR": u32, RO, RXFLR { RXTFL: RO };
    sr => "SR": u32, RO, SR { BUSY: RO, TFNF: RO, TFE: RO, RFNE: RO, RFF: RO, TXE: RO, DCOL: RO };
    imr => "IMR": u32, RW, INTR { TXEI: RW, TXOI: RW, RXUI: RW, RXOI: RW, RXFI: RW, MSTI: RW };
    isr => "ISR": u32, RO, INTR { TXEI: RO, TXOI: RO, RXUI: RO, RXOI: RO, RXFI: RO, MSTI: RO };
    risr => "RISR": u32, RO, INTR { TXEI: RO, TXOI: RO, RXUI: RO, RXOI: RO, RXFI: RO, MSTI: RO };
    txoicr => "TXOICR": u32, RO, TXOICR { TXOICR: RO };
    rxoicr => "RXOICR": u32, RO, RXOICR { RXOICR: RO };
    rxuicr => "RXUICR": u32, RO, RXUICR { RXUICR: RO };
    msticr => "MSTICR": u32, RO, MSTICR { MSTICR: RO };
    icr => "ICR": u32, RO, ICR { ICR: RO };
    dmacr => "DMACR": u32, RW, DMACR { RDMAE: RW, TDMAE: RW };
    dmatdlr => "DMATDLR": u32, RW, DMATDLR { DMATDL: RW };
    dmardlr => "DMARDLR": u32, RW, DMARDLR { DMARDL: RW };
    idr => "IDR": u32, RO;
    ssi_comp_version => "SSI_COMP_VERSION": u32, RO;
    dr[SSI_PARAM_DR_COUNT] => "DR": u32, RW;
    rx_sample_dly => "RX_SAMPLE_DLY": u32, RW, RX_SAMPLE_DLY { RSD: RW };
    spi_ctrlr0 => "SPI_CTRLR0": u32, RW, SPI_CTRLR0 {
        TRANS_TYPE: RW, ADDR_L: RW, INST_L: RW, WAIT_CYCLES: RW
    };
    txd_drive_edge => "TXD_DRIVE_EDGE": u32, RW;
});

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn quad_receive_only_frame() {
        let mut ctrlr0: LocalRegisterCopy<u32, CTRLR0::Register> = LocalRegisterCopy::new(0);
        ctrlr0.modify(CTRLR0::TMOD::ReceiveOnly + CTRLR0::SPI_FRF::Quad + CTRLR0::DFS_32.val(7));
        assert_eq!(ctrlr0.get(), (2 << 21) | (7 << 16) | (2 << 8));
    }

    #[test]
    fn data_register_window() {
        let dr = LAYOUT.registers.iter().find(|r| r.name == "DR").unwrap();
        assert_eq!(dr.count, 36);
        assert_eq!(dr.element_offset(35), Ok(0xec));
    }

    #[test]
    fn threshold_registers_use_their_own_fields() {
        let tx = LAYOUT.register("TXFTLR").unwrap();
        let rx = LAYOUT.register("RXFTLR").unwrap();
        assert_eq!((tx.offset, tx.field("TFT").unwrap().width), (0x18, 5));
        assert_eq!((rx.offset, rx.field("RFT").unwrap().width), (0x1c, 5));
        assert!(LAYOUT.register("DMARDLR").unwrap().field("DMARDL").is_ok());
        assert!(LAYOUT.register("DMATDLR").unwrap().field("LEVEL").is_err());
    }
}
