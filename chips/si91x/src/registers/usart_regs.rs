// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

// 16550 compatible UART (DesignWare DW_apb_uart) with RS-485 and 9-bit
// extensions. Shared by USART0, UART1 and the ULP UART.
//
// The first three words are overlaid: RBR/THR/DLL at 0x00, IER/DLH at 0x04
// and IIR/FCR at 0x08. Which view is active depends on LCR.DLAB and on the
// direction of the access.

use core::mem::offset_of;

use tock_registers::registers::{Aliased, ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::Layout;

/// Transmit and receive FIFO depth.
pub const USART_PARAM_FIFO_DEPTH: u32 = 16;

register_structs! {
    pub UsartRegisters {
        /// Receive buffer (read), transmit holding (write), divisor latch
        /// low (DLAB = 1)
        (0x000 => pub rbr_thr_dll: Aliased<u32, RBR::Register, THR::Register>),
        /// Interrupt enable, divisor latch high (DLAB = 1)
        (0x004 => pub ier_dlh: ReadWrite<u32, IER::Register>),
        /// Interrupt identity (read), FIFO control (write)
        (0x008 => pub iir_fcr: Aliased<u32, IIR::Register, FCR::Register>),
        (0x00c => pub lcr: ReadWrite<u32, LCR::Register>),
        (0x010 => pub mcr: ReadWrite<u32, MCR::Register>),
        (0x014 => pub lsr: ReadOnly<u32, LSR::Register>),
        (0x018 => pub msr: ReadOnly<u32, MSR::Register>),
        /// Scratchpad
        (0x01c => pub scr: ReadWrite<u32>),
        (0x020 => pub lpdll: ReadWrite<u32>),
        (0x024 => pub lpdlh: ReadWrite<u32>),
        (0x028 => _reserved0),
        /// Shadow receive buffer / transmit holding
        (0x030 => pub srbr_sthr: [ReadWrite<u32>; 16]),
        /// FIFO access mode
        (0x070 => pub far: ReadWrite<u32>),
        (0x074 => pub tfr: ReadOnly<u32>),
        (0x078 => pub rfw: WriteOnly<u32>),
        (0x07c => pub usr: ReadOnly<u32, USR::Register>),
        /// Transmit FIFO level
        (0x080 => pub tfl: ReadOnly<u32>),
        /// Receive FIFO level
        (0x084 => pub rfl: ReadOnly<u32>),
        /// Software reset
        (0x088 => pub srr: WriteOnly<u32, SRR::Register>),
        (0x08c => pub srts: ReadWrite<u32>),
        (0x090 => pub sbcr: ReadWrite<u32>),
        (0x094 => pub sdmam: ReadWrite<u32>),
        (0x098 => pub sfe: ReadWrite<u32>),
        (0x09c => pub srt: ReadWrite<u32>),
        (0x0a0 => pub stet: ReadWrite<u32>),
        (0x0a4 => pub htx: ReadWrite<u32>),
        (0x0a8 => pub dmasa: WriteOnly<u32>),
        /// RS-485 transceiver control
        (0x0ac => pub tcr: ReadWrite<u32, TCR::Register>),
        (0x0b0 => pub de_en: ReadWrite<u32>),
        (0x0b4 => pub re_en: ReadWrite<u32>),
        (0x0b8 => pub det: ReadWrite<u32, DET::Register>),
        (0x0bc => pub tat: ReadWrite<u32, TAT::Register>),
        /// Divisor latch fraction
        (0x0c0 => pub dlf: ReadWrite<u32, DLF::Register>),
        /// Receive address match (9-bit mode)
        (0x0c4 => pub rar: ReadWrite<u32>),
        /// Transmit address (9-bit mode)
        (0x0c8 => pub tar: ReadWrite<u32>),
        (0x0cc => pub lcr_ext: ReadWrite<u32, LCR_EXT::Register>),
        (0x0d0 => _reserved1),
        /// Component parameters
        (0x0f4 => pub cpr: ReadOnly<u32>),
        (0x0f8 => pub ucv: ReadOnly<u32>),
        (0x0fc => pub ctr: ReadOnly<u32>),
        (0x100 => @END),
    }
}

register_bitfields![u32,
    pub RBR [
        RBR OFFSET(0) NUMBITS(8) [],
        MSB_9TH_BIT OFFSET(8) NUMBITS(1) []
    ],
    pub THR [
        THR OFFSET(0) NUMBITS(8) [],
        MSB_9TH_BIT OFFSET(8) NUMBITS(1) []
    ],
    pub DLL [
        DLL OFFSET(0) NUMBITS(8) []
    ],
    pub DLH [
        DLH OFFSET(0) NUMBITS(8) []
    ],
    pub IER [
        ERBFI OFFSET(0) NUMBITS(1) [],
        ETBEI OFFSET(1) NUMBITS(1) [],
        ELSI OFFSET(2) NUMBITS(1) [],
        EDSSI OFFSET(3) NUMBITS(1) [],
        PTIME OFFSET(7) NUMBITS(1) []
    ],
    pub IIR [
        IID OFFSET(0) NUMBITS(4) [
            ModemStatus = 0x0,
            NoInterrupt = 0x1,
            ThrEmpty = 0x2,
            ReceivedData = 0x4,
            ReceiverLineStatus = 0x6,
            BusyDetect = 0x7,
            CharacterTimeout = 0xc
        ],
        FIFOSE OFFSET(6) NUMBITS(2) []
    ],
    pub FCR [
        FIFOE OFFSET(0) NUMBITS(1) [],
        RFIFOR OFFSET(1) NUMBITS(1) [],
        XFIFOR OFFSET(2) NUMBITS(1) [],
        DMAM OFFSET(3) NUMBITS(1) [],
        TET OFFSET(4) NUMBITS(2) [],
        RT OFFSET(6) NUMBITS(2) []
    ],
    pub LCR [
        DLS OFFSET(0) NUMBITS(2) [
            Bits5 = 0,
            Bits6 = 1,
            Bits7 = 2,
            Bits8 = 3
        ],
        STOP OFFSET(2) NUMBITS(1) [],
        PEN OFFSET(3) NUMBITS(1) [],
        EPS OFFSET(4) NUMBITS(1) [],
        SP OFFSET(5) NUMBITS(1) [],
        BC OFFSET(6) NUMBITS(1) [],
        DLAB OFFSET(7) NUMBITS(1) []
    ],
    pub MCR [
        DTR OFFSET(0) NUMBITS(1) [],
        RTS OFFSET(1) NUMBITS(1) [],
        OUT1 OFFSET(2) NUMBITS(1) [],
        OUT2 OFFSET(3) NUMBITS(1) [],
        LOOPBACK OFFSET(4) NUMBITS(1) [],
        AFCE OFFSET(5) NUMBITS(1) [],
        SIRE OFFSET(6) NUMBITS(1) []
    ],
    pub LSR [
        DR OFFSET(0) NUMBITS(1) [],
        OE OFFSET(1) NUMBITS(1) [],
        PE OFFSET(2) NUMBITS(1) [],
        FE OFFSET(3) NUMBITS(1) [],
        BI OFFSET(4) NUMBITS(1) [],
        THRE OFFSET(5) NUMBITS(1) [],
        TEMT OFFSET(6) NUMBITS(1) [],
        RFE OFFSET(7) NUMBITS(1) [],
        ADDR_RCVD OFFSET(8) NUMBITS(1) []
    ],
    pub MSR [
        DCTS OFFSET(0) NUMBITS(1) [],
        DDSR OFFSET(1) NUMBITS(1) [],
        TERI OFFSET(2) NUMBITS(1) [],
        DDCD OFFSET(3) NUMBITS(1) [],
        CTS OFFSET(4) NUMBITS(1) [],
        DSR OFFSET(5) NUMBITS(1) [],
        RI OFFSET(6) NUMBITS(1) [],
        DCD OFFSET(7) NUMBITS(1) []
    ],
    pub USR [
        BUSY OFFSET(0) NUMBITS(1) [],
        TFNF OFFSET(1) NUMBITS(1) [],
        TFE OFFSET(2) NUMBITS(1) [],
        RFNE OFFSET(3) NUMBITS(1) [],
        RFF OFFSET(4) NUMBITS(1) []
    ],
    pub SRR [
        UR OFFSET(0) NUMBITS(1) [],
        RFR OFFSET(1) NUMBITS(1) [],
        XFR OFFSET(2) NUMBITS(1) []
    ],
    pub TCR [
        RS485_EN OFFSET(0) NUMBITS(1) [],
        RE_POL OFFSET(1) NUMBITS(1) [],
        DE_POL OFFSET(2) NUMBITS(1) [],
        XFER_MODE OFFSET(3) NUMBITS(2) []
    ],
    pub DET [
        DE_ASSERTION_TIME OFFSET(0) NUMBITS(8) [],
        DE_DE_ASSERTION_TIME OFFSET(16) NUMBITS(8) []
    ],
    pub TAT [
        DE_TO_RE OFFSET(0) NUMBITS(16) [],
        RE_TO_DE OFFSET(16) NUMBITS(16) []
    ],
    /// Fractional part of the divisor, in 1/64 steps
    pub DLF [
        DLF OFFSET(0) NUMBITS(6) []
    ],
    pub LCR_EXT [
        DLS_E OFFSET(0) NUMBITS(1) [],
        ADDR_MATCH OFFSET(1) NUMBITS(1) [],
        SEND_ADDR OFFSET(2) NUMBITS(1) [],
        TRANSMIT_MODE OFFSET(3) NUMBITS(1) []
    ]
];

const _: () = assert!(offset_of!(UsartRegisters, lsr) == 0x14);
const _: () = assert!(offset_of!(UsartRegisters, usr) == 0x7c);
const _: () = assert!(offset_of!(UsartRegisters, lcr_ext) == 0xcc);

pub static LAYOUT: Layout = layout!(UsartRegisters {
    rbr_thr_dll => "RBR": u32, RO, RBR { RBR: RO, MSB_9TH_BIT: RO };
    rbr_thr_dll => "THR": u32, WO, THR { THR: WO, MSB_9TH_BIT: WO };
    rbr_thr_dll => "DLL": u32, RW, DLL { DLL: RW };
    ier_dlh => "IER": u32, RW, IER { ERBFI: RW, ETBEI: RW, ELSI: RW, EDSSI: RW, PTIME: RW };
    ier_dlh => "DLH": u32, RW, DLH { DLH: RW };
    iir_fcr => "IIR": u32, RO, IIR { IID: RO, FIFOSE: RO };
    iir_fcr => "FCR": u32, WO, FCR {
        FIFOE: WO, RFIFOR: WO, XFIFOR: WO, DMAM: WO, TET: WO, RT: WO
    };
    lcr => "LCR": u32, RW, LCR { DLS: RW, STOP: RW, PEN: RW, EPS: RW, SP: RW, BC: RW, DLAB: RW };
    mcr => "MCR": u32, RW, MCR {
        DTR: RW, RTS: RW, OUT1: RW, OUT2: RW, LOOPBACK: RW, AFCE: RW, SIRE: RW
    };
    lsr => "LSR": u32, RO, LSR {
        DR: RO, OE: RO, PE: RO, FE: RO, BI: RO, THRE: RO, TEMT: RO, RFE: RO, ADDR_RCVD: RO
    };
    msr => "MSR": u32, RO, MSR {
        DCTS: RO, DDSR: RO, TERI: RO, DDCD: RO, CTS: RO, DSR: RO, RI: RO, DCD: RO
    };
    scr => "SCR": u32, RW;
    lpdll => "LPDLL": u32, RW;
    lpdlh => "LPDLH": u32, RW;
    srbr_sthr[16] => "SRBR_STHR": u32, RW;
    far => "FAR": u32, RW;
    tfr => "TFR": u32, RO;
    rfw => "RFW": u32, WO;
    usr => "USR": u32, RO, USR { BUSY: RO, TFNF: RO, TFE: RO, RFNE: RO, RFF: RO };
    tfl => "TFL": u32, RO;
    rfl => "RFL": u32, RO;
    srr => "SRR": u32, WO, SRR { UR: WO, RFR: WO, XFR: WO };
    srts => "SRTS": u32, RW;
    sbcr => "SBCR": u32, RW;
    sdmam => "SDMAM": u32, RW;
    sfe => "SFE": u32, RW;
    srt => "SRT": u32, RW;
    stet => "STET": u32, RW;
    htx => "HTX": u32, RW;
    dmasa => "DMASA": u32, WO;
    tcr => "TCR": u32, RW, TCR { RS485_EN: RW, RE_POL: RW, DE_POL: RW, XFER_MODE: RW };
    de_en => "DE_EN": u32, RW;
    re_en => "RE_EN": u32, RW;
    det => "DET": u32, RW, DET { DE_ASSERTION_TIME: RW, DE_DE_ASSERTION_TIME: RW };
    tat => "TAT": u32, RW, TAT { DE_TO_RE: RW, RE_TO_DE: RW };
    dlf => "DLF": u32, RW, DLF { DLF: RW };
    rar => "RAR": u32, RW;
    tar => "TAR": u32, RW;
    lcr_ext => "LCR_EXT": u32, RW, LCR_EXT {
        DLS_E: RW, ADDR_MATCH: RW, SEND_ADDR: RW, TRANSMIT_MODE: RW
    };
    cpr => "CPR": u32, RO;
    ucv => "UCV": u32, RO;
    ctr => "CTR": u32, RO;
});

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn overlaid_registers_share_offsets() {
        let offset = |name| {
            LAYOUT
                .registers
                .iter()
                .find(|register| register.name == name)
                .map(|register| register.offset)
        };
        assert_eq!(offset("RBR"), Some(0));
        assert_eq!(offset("THR"), Some(0));
        assert_eq!(offset("DLL"), Some(0));
        assert_eq!(offset("DLH"), Some(4));
        assert_eq!(offset("FCR"), Some(8));
    }

    #[test]
    fn interrupt_identity() {
        let iir: LocalRegisterCopy<u32, IIR::Register> = LocalRegisterCopy::new(0xc4);
        assert!(iir.matches_all(IIR::IID::ReceivedData));
        assert_eq!(iir.read(IIR::FIFOSE), 0b11);
    }

    #[test]
    fn fractional_divisor() {
        // 115200 baud from a 40 MHz reference: 40e6 * 4 / 115200 = 1388.
        let divisor = 40_000_000u32 * 4 / 115_200;
        let mut dlf: LocalRegisterCopy<u32, DLF::Register> = LocalRegisterCopy::new(0);
        dlf.modify(DLF::DLF.val(divisor));
        assert_eq!(dlf.get(), divisor & 0x3f);
        assert_eq!(divisor >> 6, 21);

        let field = LAYOUT.register("DLF").unwrap().field("DLF").unwrap();
        assert_eq!((field.offset, field.width), (0, 6));
    }
}
