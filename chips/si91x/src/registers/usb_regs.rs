// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! USB high speed OTG controller (ChipIdea), device mode view.
//!
//! The capability registers at 0x100 are 8 and 16 bits wide; everything
//! from `USBCMD` on is 32 bits. `_D` suffixed names are the device mode
//! interpretation of registers shared with host mode.

use core::mem::{offset_of, size_of};

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::Layout;

/// Endpoints, including the control endpoint.
pub const USB_PARAM_ENDPOINTS: usize = 8;

register_structs! {
    pub UsbRegisters {
        (0x000 => pub usb_id: ReadOnly<u32, USB_ID::Register>),
        (0x004 => pub usb_hwgeneral: ReadOnly<u32>),
        (0x008 => pub usb_hwhost: ReadOnly<u32>),
        (0x00c => pub usb_hwdevice: ReadOnly<u32>),
        (0x010 => pub usb_hwtxbuf: ReadOnly<u32>),
        (0x014 => pub usb_hwrxbuf: ReadOnly<u32>),
        (0x018 => _reserved0),
        (0x100 => pub usb_caplength: ReadOnly<u8>),
        (0x101 => _reserved1),
        (0x102 => pub usb_hciversion: ReadOnly<u16>),
        (0x104 => pub usb_hcsparams: ReadOnly<u32>),
        (0x108 => pub usb_hccparams: ReadOnly<u32>),
        (0x10c => _reserved2),
        (0x120 => pub usb_dciversion: ReadOnly<u16>),
        (0x122 => _reserved3),
        (0x124 => pub usb_dccparams: ReadOnly<u32, USB_DCCPARAMS::Register>),
        (0x128 => _reserved4),
        (0x140 => pub usbcmd_d: ReadWrite<u32, USBCMD_D::Register>),
        /// Status bits are cleared by writing one
        (0x144 => pub usbsts_d: ReadWrite<u32, USBSTS_D::Register>),
        (0x148 => pub usbintr_d: ReadWrite<u32, USBSTS_D::Register>),
        (0x14c => pub usb_frindex_d: ReadWrite<u32, USB_FRINDEX_D::Register>),
        (0x150 => _reserved5),
        (0x154 => pub usb_deviceaddr: ReadWrite<u32, USB_DEVICEADDR::Register>),
        /// Must be 2 KiB aligned
        (0x158 => pub usb_endpointlistaddr: ReadWrite<u32, USB_ENDPOINTLISTADDR::Register>),
        (0x15c => _reserved6),
        (0x160 => pub usb_burstsize: ReadWrite<u32, USB_BURSTSIZE::Register>),
        (0x164 => _reserved7),
        (0x178 => pub usb_endptnak: ReadWrite<u32, ENDPT_BITMAP::Register>),
        (0x17c => pub usb_endptnaken: ReadWrite<u32, ENDPT_BITMAP::Register>),
        (0x180 => _reserved8),
        (0x184 => pub portsc1_d: ReadWrite<u32, PORTSC1_D::Register>),
        (0x188 => _reserved9),
        (0x1a4 => pub usb_otgsc: ReadWrite<u32>),
        (0x1a8 => pub usbmode_d: ReadWrite<u32, USBMODE_D::Register>),
        (0x1ac => pub usb_endptsetupstat: ReadWrite<u32, USB_ENDPTSETUPSTAT::Register>),
        (0x1b0 => pub usb_endptprime: ReadWrite<u32, ENDPT_BITMAP::Register>),
        (0x1b4 => pub usb_endptflush: ReadWrite<u32, ENDPT_BITMAP::Register>),
        (0x1b8 => pub usb_endptstat: ReadOnly<u32, ENDPT_BITMAP::Register>),
        (0x1bc => pub usb_endptcomplete: ReadWrite<u32, ENDPT_BITMAP::Register>),
        /// Endpoint 0 is always enabled
        (0x1c0 => pub usb_endptctrl0: ReadWrite<u32, USB_ENDPTCTRL::Register>),
        (0x1c4 => pub usb_endptctrl: [ReadWrite<u32, USB_ENDPTCTRL::Register>; USB_PARAM_ENDPOINTS - 1]),
        (0x1e0 => @END),
    }
}

register_bitfields![u32,
    pub USB_ID [
        ID OFFSET(0) NUMBITS(6) [],
        NID OFFSET(8) NUMBITS(6) [],
        REVISION OFFSET(16) NUMBITS(8) []
    ],
    pub USB_DCCPARAMS [
        DEN OFFSET(0) NUMBITS(5) [],
        DC OFFSET(7) NUMBITS(1) [],
        HC OFFSET(8) NUMBITS(1) []
    ],
    pub USBCMD_D [
        /// Run/stop
        RS OFFSET(0) NUMBITS(1) [],
        RST OFFSET(1) NUMBITS(1) [],
        SUTW OFFSET(13) NUMBITS(1) [],
        ATDTW OFFSET(14) NUMBITS(1) [],
        ITC OFFSET(16) NUMBITS(8) [
            Immediate = 0x00,
            Micro1 = 0x01,
            Micro2 = 0x02,
            Micro4 = 0x04,
            Micro8 = 0x08,
            Micro16 = 0x10,
            Micro32 = 0x20,
            Micro64 = 0x40
        ]
    ],
    pub USBSTS_D [
        UI OFFSET(0) NUMBITS(1) [],
        UEI OFFSET(1) NUMBITS(1) [],
        PCI OFFSET(2) NUMBITS(1) [],
        SEI OFFSET(4) NUMBITS(1) [],
        URI OFFSET(6) NUMBITS(1) [],
        SRI OFFSET(7) NUMBITS(1) [],
        SLI OFFSET(8) NUMBITS(1) [],
        NAKI OFFSET(16) NUMBITS(1) []
    ],
    pub USB_FRINDEX_D [
        FRINDEX OFFSET(0) NUMBITS(14) []
    ],
    pub USB_DEVICEADDR [
        /// Apply the address after the status stage of SET_ADDRESS
        USBADRA OFFSET(24) NUMBITS(1) [],
        USBADR OFFSET(25) NUMBITS(7) []
    ],
    pub USB_ENDPOINTLISTADDR [
        EPBASE OFFSET(11) NUMBITS(21) []
    ],
    pub USB_BURSTSIZE [
        RXPBURST OFFSET(0) NUMBITS(8) [],
        TXPBURST OFFSET(8) NUMBITS(8) []
    ],
    pub ENDPT_BITMAP [
        RX OFFSET(0) NUMBITS(8) [],
        TX OFFSET(16) NUMBITS(8) []
    ],
    pub PORTSC1_D [
        CCS OFFSET(0) NUMBITS(1) [],
        PE OFFSET(2) NUMBITS(1) [],
        PEC OFFSET(3) NUMBITS(1) [],
        FPR OFFSET(6) NUMBITS(1) [],
        SUSP OFFSET(7) NUMBITS(1) [],
        PR OFFSET(8) NUMBITS(1) [],
        HSP OFFSET(9) NUMBITS(1) [],
        PTC OFFSET(16) NUMBITS(4) [],
        PHCD OFFSET(23) NUMBITS(1) [],
        PFSC OFFSET(24) NUMBITS(1) [],
        PSPD OFFSET(26) NUMBITS(2) [
            Full = 0,
            Low = 1,
            High = 2
        ]
    ],
    pub USBMODE_D [
        CM OFFSET(0) NUMBITS(2) [
            Idle = 0,
            Device = 2,
            Host = 3
        ],
        ES OFFSET(2) NUMBITS(1) [],
        SLOM OFFSET(3) NUMBITS(1) [],
        SDIS OFFSET(4) NUMBITS(1) []
    ],
    pub USB_ENDPTSETUPSTAT [
        ENDPTSETUPSTAT OFFSET(0) NUMBITS(8) []
    ],
    pub USB_ENDPTCTRL [
        RXS OFFSET(0) NUMBITS(1) [],
        RXT OFFSET(2) NUMBITS(2) [
            Control = 0,
            Isochronous = 1,
            Bulk = 2,
            Interrupt = 3
        ],
        RXI OFFSET(5) NUMBITS(1) [],
        RXR OFFSET(6) NUMBITS(1) [],
        RXE OFFSET(7) NUMBITS(1) [],
        TXS OFFSET(16) NUMBITS(1) [],
        TXT OFFSET(18) NUMBITS(2) [
            Control = 0,
            Isochronous = 1,
            Bulk = 2,
            Interrupt = 3
        ],
        TXI OFFSET(21) NUMBITS(1) [],
        TXR OFFSET(22) NUMBITS(1) [],
        TXE OFFSET(23) NUMBITS(1) []
    ]
];

const _: () = assert!(offset_of!(UsbRegisters, usb_hciversion) == 0x102);
const _: () = assert!(offset_of!(UsbRegisters, usbcmd_d) == 0x140);
const _: () = assert!(offset_of!(UsbRegisters, portsc1_d) == 0x184);
const _: () = assert!(offset_of!(UsbRegisters, usb_endptctrl0) == 0x1c0);
const _: () = assert!(size_of::<UsbRegisters>() == 0x1e0);

pub static LAYOUT: Layout = layout!(UsbRegisters {
    usb_id => "USB_ID": u32, RO, USB_ID { ID: RO, NID: RO, REVISION: RO };
    usb_hwgeneral => "USB_HWGENERAL": u32, RO;
    usb_hwhost => "USB_HWHOST": u32, RO;
    usb_hwdevice => "USB_HWDEVICE": u32, RO;
    usb_hwtxbuf => "USB_HWTXBUF": u32, RO;
    usb_hwrxbuf => "USB_HWRXBUF": u32, RO;
    usb_caplength => "USB_CAPLENGTH": u8, RO;
    usb_hciversion => "USB_HCIVERSION": u16, RO;
    usb_hcsparams => "USB_HCSPARAMS": u32, RO;
    usb_hccparams => "USB_HCCPARAMS": u32, RO;
    usb_dciversion => "USB_DCIVERSION": u16, RO;
    usb_dccparams => "USB_DCCPARAMS": u32, RO, USB_DCCPARAMS { DEN: RO, DC: RO, HC: RO };
    usbcmd_d => "USBCMD_D": u32, RW, USBCMD_D { RS: RW, RST: RW, SUTW: RW, ATDTW: RW, ITC: RW };
    usbsts_d => "USBSTS_D": u32, RW, USBSTS_D {
        UI: RW, UEI: RW, PCI: RW, SEI: RW, URI: RW, SRI: RW, SLI: RW, NAKI: RO
    };
    usbintr_d => "USBINTR_D": u32, RW, USBSTS_D {
        UI: RW, UEI: RW, PCI: RW, SEI: RW, URI: RW, SRI: RW, SLI: RW, NAKI: RW
    };
    usb_frindex_d => "USB_FRINDEX_D": u32, RW, USB_FRINDEX_D { FRINDEX: RO };
    usb_deviceaddr => "USB_DEVICEADDR": u32, RW, USB_DEVICEADDR { USBADRA: RW, USBADR: RW };
    usb_endpointlistaddr => "USB_ENDPOINTLISTADDR": u32, RW, USB_ENDPOINTLISTADDR { EPBASE: RW };
    usb_burstsize => "USB_BURSTSIZE": u32, RW, USB_BURSTSIZE { RXPBURST: RW, TXPBURST: RW };
    usb_endptnak => "USB_ENDPTNAK": u32, RW, ENDPT_BITMAP { RX: RW, TX: RW };
    usb_endptnaken => "USB_ENDPTNAKEN": u32, RW, ENDPT_BITMAP { RX: RW, TX: RW };
    portsc1_d => "PORTSC1_D": u32, RW, PORTSC1_D {
        CCS: RO, PE: RO, PEC: RW, FPR: RW, SUSP: RO, PR: RO, HSP: RO, PTC: RW, PHCD: RW,
        PFSC: RW, PSPD: RO
    };
    portsc1_d => "USB_PORTSC1_D": u32, RW, PORTSC1_D {
        CCS: RO, PE: RO, PEC: RW, FPR: RW, SUSP: RO, PR: RO, HSP: RO, PTC: RW, PHCD: RW,
        PFSC: RW, PSPD: RO
    };
    usb_otgsc => "USB_OTGSC": u32, RW;
    usbmode_d => "USBMODE_D": u32, RW, USBMODE_D { CM: RW, ES: RW, SLOM: RW, SDIS: RW };
    usb_endptsetupstat => "USB_ENDPTSETUPSTAT": u32, RW, USB_ENDPTSETUPSTAT { ENDPTSETUPSTAT: RW };
    usb_endptprime => "USB_ENDPTPRIME": u32, RW, ENDPT_BITMAP { RX: RW, TX: RW };
    usb_endptflush => "USB_ENDPTFLUSH": u32, RW, ENDPT_BITMAP { RX: RW, TX: RW };
    usb_endptstat => "USB_ENDPTSTAT": u32, RO, ENDPT_BITMAP { RX: RO, TX: RO };
    usb_endptcomplete => "USB_ENDPTCOMPLETE": u32, RW, ENDPT_BITMAP { RX: RW, TX: RW };
    usb_endptctrl0 => "USB_ENDPTCTRL0": u32, RW, USB_ENDPTCTRL {
        RXS: RW, RXT: RO, RXI: RW, RXR: RW, RXE: RO, TXS: RW, TXT: RO, TXI: RW, TXR: RW, TXE: RO
    };
    usb_endptctrl[USB_PARAM_ENDPOINTS - 1] => "USB_ENDPTCTRL": u32, RW, USB_ENDPTCTRL {
        RXS: RW, RXT: RW, RXI: RW, RXR: RW, RXE: RW, TXS: RW, TXT: RW, TXI: RW, TXR: RW, TXE: RW
    };
});

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn capability_register_widths() {
        let caplength = LAYOUT.registers[6];
        let hciversion = LAYOUT.registers[7];
        assert_eq!(
            (caplength.name, caplength.width, caplength.offset),
            ("USB_CAPLENGTH", 8, 0x100)
        );
        assert_eq!(
            (hciversion.name, hciversion.width, hciversion.offset),
            ("USB_HCIVERSION", 16, 0x102)
        );
    }

    #[test]
    fn endpoint_control_array() {
        let ctrl = LAYOUT
            .registers
            .iter()
            .find(|register| register.name == "USB_ENDPTCTRL")
            .unwrap();
        // Element 0 is endpoint 1.
        assert_eq!(ctrl.element_offset(0), Ok(0x1c4));
        assert_eq!(ctrl.element_offset(6), Ok(0x1dc));
        assert!(ctrl.element_offset(7).is_err());
    }

    #[test]
    fn bulk_in_endpoint() {
        let mut ctrl: LocalRegisterCopy<u32, USB_ENDPTCTRL::Register> = LocalRegisterCopy::new(0);
        ctrl.modify(USB_ENDPTCTRL::TXE::SET + USB_ENDPTCTRL::TXT::Bulk + USB_ENDPTCTRL::TXR::SET);
        assert_eq!(ctrl.get(), 0x00c8_0000);
        assert!(ctrl.matches_all(USB_ENDPTCTRL::TXT::Bulk));
    }

    #[test]
    fn device_mode() {
        let mut mode: LocalRegisterCopy<u32, USBMODE_D::Register> = LocalRegisterCopy::new(0);
        mode.modify(USBMODE_D::CM::Device + USBMODE_D::SLOM::SET);
        assert_eq!(mode.get(), 0b1010);
    }
}
