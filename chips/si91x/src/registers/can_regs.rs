// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! CAN 2.0B controller (CAN1).
//!
//! Control and status are byte wide registers packed into the first eight
//! bytes. Frames are written to and read from 32-bit FIFO windows: the first
//! word carries the frame information and identifier, the following words
//! the data bytes. The acceptance filter is configured through `CAN_ACR` /
//! `CAN_AMR`, one byte per filter lane.

use core::mem::{offset_of, size_of};

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::Layout;

register_structs! {
    pub CanRegisters {
        (0x000 => pub can_mr: ReadWrite<u8, CAN_MR::Register>),
        (0x001 => pub can_cmr: WriteOnly<u8, CAN_CMR::Register>),
        (0x002 => pub can_sr: ReadOnly<u8, CAN_SR::Register>),
        /// Read for pending interrupts, write one to acknowledge
        (0x003 => pub can_isr_iack: ReadWrite<u8, CAN_ISR::Register>),
        (0x004 => pub can_imr: ReadWrite<u8, CAN_ISR::Register>),
        /// Number of frames held in the receive FIFO
        (0x005 => pub can_rmc: ReadOnly<u8, CAN_RMC::Register>),
        (0x006 => pub can_btim0: ReadWrite<u8, CAN_BTIM0::Register>),
        (0x007 => pub can_btim1: ReadWrite<u8, CAN_BTIM1::Register>),
        (0x008 => pub can_txbuf: WriteOnly<u32>),
        (0x00c => pub can_rxbuf: ReadOnly<u32>),
        (0x010 => pub can_acr: ReadWrite<u32, CAN_ACR::Register>),
        (0x014 => pub can_amr: ReadWrite<u32, CAN_AMR::Register>),
        (0x018 => pub can_ecc: ReadOnly<u8, CAN_ECC::Register>),
        (0x019 => pub can_rxerr: ReadWrite<u8>),
        (0x01a => pub can_txerr: ReadWrite<u8>),
        /// Bit position where arbitration was lost
        (0x01b => pub can_alc: ReadOnly<u8, CAN_ALC::Register>),
        (0x01c => @END),
    }
}

register_bitfields![u8,
    pub CAN_MR [
        /// Single acceptance filter
        AFM OFFSET(0) NUMBITS(1) [],
        LOM OFFSET(1) NUMBITS(1) [],
        RM OFFSET(2) NUMBITS(1) []
    ],
    pub CAN_CMR [
        /// Transmission request
        TR OFFSET(0) NUMBITS(1) [],
        AT OFFSET(1) NUMBITS(1) [],
        SRR OFFSET(2) NUMBITS(1) []
    ],
    pub CAN_SR [
        RBS OFFSET(0) NUMBITS(1) [],
        DSO OFFSET(1) NUMBITS(1) [],
        /// Transmit buffer released
        TBS OFFSET(2) NUMBITS(1) [],
        TCS OFFSET(3) NUMBITS(1) [],
        RS OFFSET(4) NUMBITS(1) [],
        TS OFFSET(5) NUMBITS(1) [],
        ES OFFSET(6) NUMBITS(1) [],
        BS OFFSET(7) NUMBITS(1) []
    ],
    pub CAN_ISR [
        DOI OFFSET(0) NUMBITS(1) [],
        BEI OFFSET(1) NUMBITS(1) [],
        TI OFFSET(2) NUMBITS(1) [],
        RI OFFSET(3) NUMBITS(1) [],
        EPI OFFSET(4) NUMBITS(1) [],
        EWI OFFSET(5) NUMBITS(1) [],
        ALI OFFSET(6) NUMBITS(1) []
    ],
    pub CAN_RMC [
        RMC OFFSET(0) NUMBITS(5) []
    ],
    pub CAN_BTIM0 [
        /// Baud rate prescaler minus one
        BRP OFFSET(0) NUMBITS(6) [],
        SJW OFFSET(6) NUMBITS(2) []
    ],
    pub CAN_BTIM1 [
        TSEG1 OFFSET(0) NUMBITS(4) [],
        TSEG2 OFFSET(4) NUMBITS(3) [],
        SAM OFFSET(7) NUMBITS(1) []
    ],
    pub CAN_ECC [
        BER OFFSET(0) NUMBITS(1) [],
        STFER OFFSET(1) NUMBITS(1) [],
        CRCER OFFSET(2) NUMBITS(1) [],
        FRMER OFFSET(3) NUMBITS(1) [],
        ACKER OFFSET(4) NUMBITS(1) [],
        EDIR OFFSET(5) NUMBITS(1) [
            Transmit = 0,
            Receive = 1
        ],
        TXWRN OFFSET(6) NUMBITS(1) [],
        RXWRN OFFSET(7) NUMBITS(1) []
    ],
    pub CAN_ALC [
        ALC OFFSET(0) NUMBITS(5) []
    ]
];

register_bitfields![u32,
    pub CAN_ACR [
        ACR0 OFFSET(0) NUMBITS(8) [],
        ACR1 OFFSET(8) NUMBITS(8) [],
        ACR2 OFFSET(16) NUMBITS(8) [],
        ACR3 OFFSET(24) NUMBITS(8) []
    ],
    pub CAN_AMR [
        AMR0 OFFSET(0) NUMBITS(8) [],
        AMR1 OFFSET(8) NUMBITS(8) [],
        AMR2 OFFSET(16) NUMBITS(8) [],
        AMR3 OFFSET(24) NUMBITS(8) []
    ]
];

const _: () = assert!(offset_of!(CanRegisters, can_txbuf) == 0x08);
const _: () = assert!(offset_of!(CanRegisters, can_ecc) == 0x18);
const _: () = assert!(size_of::<CanRegisters>() == 0x1c);

pub static LAYOUT: Layout = layout!(CanRegisters {
    can_mr => "CAN_MR": u8, RW, CAN_MR { AFM: RW, LOM: RW, RM: RW };
    can_cmr => "CAN_CMR": u8, WO, CAN_CMR { TR: WO, AT: WO, SRR: WO };
    can_sr => "CAN_SR": u8, RO, CAN_SR {
        RBS: RO, DSO: RO, TBS: RO, TCS: RO, RS: RO, TS: RO, ES: RO, BS: RO
    };
    can_isr_iack => "CAN_ISR_IACK": u8, RW, CAN_ISR {
        DOI: RW, BEI: RW, TI: RW, RI: RW, EPI: RW, EWI: RW, ALI: RW
    };
    can_imr => "CAN_IMR": u8, RW, CAN_ISR {
        DOI: RW, BEI: RW, TI: RW, RI: RW, EPI: RW, EWI: RW, ALI: RW
    };
    can_rmc => "CAN_RMC": u8, RO, CAN_RMC { RMC: RO };
    can_btim0 => "CAN_BTIM0": u8, RW, CAN_BTIM0 { BRP: RW, SJW: RW };
    can_btim1 => "CAN_BTIM1": u8, RW, CAN_BTIM1 { TSEG1: RW, TSEG2: RW, SAM: RW };
    can_txbuf => "CAN_TXBUF": u32, WO;
    can_rxbuf => "CAN_RXBUF": u32, RO;
    can_acr => "CAN_ACR": u32, RW, CAN_ACR { ACR0: RW, ACR1: RW, ACR2: RW, ACR3: RW };
    can_amr => "CAN_AMR": u32, RW, CAN_AMR { AMR0: RW, AMR1: RW, AMR2: RW, AMR3: RW };
    can_ecc => "CAN_ECC": u8, RO, CAN_ECC {
        BER: RO, STFER: RO, CRCER: RO, FRMER: RO, ACKER: RO, EDIR: RO, TXWRN: RO, RXWRN: RO
    };
    can_rxerr => "CAN_RXERR": u8, RW;
    can_txerr => "CAN_TXERR": u8, RW;
    can_alc => "CAN_ALC": u8, RO, CAN_ALC { ALC: RO };
});

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn byte_registers() {
        let widths: [(&str, u32, usize); 4] = [
            ("CAN_MR", 8, 0x00),
            ("CAN_BTIM1", 8, 0x07),
            ("CAN_TXBUF", 32, 0x08),
            ("CAN_TXERR", 8, 0x1a),
        ];
        for (name, width, offset) in widths {
            let register = LAYOUT
                .registers
                .iter()
                .find(|register| register.name == name)
                .unwrap();
            assert_eq!((register.width, register.offset), (width, offset), "{}", name);
        }
    }

    #[test]
    fn single_filter_reset_mode() {
        let mut mr: LocalRegisterCopy<u8, CAN_MR::Register> = LocalRegisterCopy::new(0);
        mr.modify(CAN_MR::RM::SET + CAN_MR::AFM::SET);
        assert_eq!(mr.get(), 0x05);
    }

    #[test]
    fn bit_timing() {
        let mut btim0: LocalRegisterCopy<u8, CAN_BTIM0::Register> = LocalRegisterCopy::new(0);
        btim0.modify(CAN_BTIM0::BRP.val(3) + CAN_BTIM0::SJW.val(1));
        assert_eq!(btim0.get(), 0x43);
    }
}
