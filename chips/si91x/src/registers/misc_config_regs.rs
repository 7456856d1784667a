// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Miscellaneous M4 subsystem configuration (MISC_CONFIG).
//!
//! Besides a handful of control bits this block carries the mailbox between
//! the M4 and the network processor (TA): `M4SS_P2P_*` raise interrupts on
//! the TA side, `TASS_P2P_*` mask and acknowledge the ones the TA raises
//! towards the M4 (`TASS_P2P` interrupt), and `P2P_STATUS_REG` holds the
//! wake and activity handshake of both cores.

use core::mem::{offset_of, size_of};

use tock_registers::registers::{ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::Layout;

register_structs! {
    pub MiscConfigRegisters {
        (0x000 => _reserved0),
        (0x00c => pub misc_cfg_host_ctrl: ReadWrite<u32>),
        (0x010 => pub misc_cfg_rst_latch_status: ReadWrite<u32>),
        (0x014 => pub misc_cfg_misc_ctrl: ReadWrite<u32, MISC_CFG_MISC_CTRL::Register>),
        (0x018 => pub misc_cfg_sram_redundancy_ctrl: ReadWrite<u32, MISC_CFG_SRAM_REDUNDANCY_CTRL::Register>),
        (0x01c => pub misc_usb_config_reg: ReadWrite<u32>),
        (0x020 => _reserved1),
        (0x044 => pub misc_cfg_misc_ctrl1: ReadWrite<u32, MISC_CFG_MISC_CTRL1::Register>),
        (0x048 => _reserved2),
        (0x058 => pub peripheral_udma_dma_sel: ReadWrite<u32, PERIPHERAL_UDMA_DMA_SEL::Register>),
        (0x05c => _reserved3),
        (0x0f0 => pub misc_usb_set_reg1: ReadWrite<u32>),
        (0x0f4 => pub misc_usb_clear_reg1: WriteOnly<u32>),
        (0x0f8 => _reserved4),
        (0x108 => pub gpdma_device_sel_reg: ReadWrite<u32>),
        (0x10c => _reserved5),
        (0x16c => pub m4ss_p2p_intr_set_reg: ReadWrite<u32, M4SS_P2P_INTR::Register>),
        (0x170 => pub m4ss_p2p_intr_clr_reg: WriteOnly<u32, M4SS_P2P_INTR::Register>),
        (0x174 => pub p2p_status_reg: ReadWrite<u32, P2P_STATUS_REG::Register>),
        (0x178 => pub tass_p2p_intr_mask_set: ReadWrite<u32>),
        (0x17c => pub tass_p2p_intr_mask_clr: ReadWrite<u32>),
        (0x180 => pub tass_p2p_intr_clear_reg: WriteOnly<u32>),
        (0x184 => _reserved6),
        (0x1b4 => pub m4ss_qspi_octa_mode_ctrl: ReadWrite<u32>),
        (0x1b8 => _reserved7),
        (0x1bc => pub m4ss_qspi_tx_dll_test_reg: ReadWrite<u32>),
        (0x1c0 => pub m4ss_qspi_rx_dll_test_reg: ReadWrite<u32>),
        (0x1c4 => @END),
    }
}

register_bitfields![u32,
    pub MISC_CFG_MISC_CTRL [
        CCI_SYNC_MODE OFFSET(16) NUMBITS(1) []
    ],
    pub MISC_CFG_SRAM_REDUNDANCY_CTRL [
        SRAM_REDUNDANCY_EN OFFSET(4) NUMBITS(1) []
    ],
    pub MISC_CFG_MISC_CTRL1 [
        /// Needed for register accesses above 120 MHz
        REGISTER_ROM_EN OFFSET(4) NUMBITS(1) [],
        I2S_MASTER_SLAVE_MODE OFFSET(23) NUMBITS(1) [
            Slave = 0,
            Master = 1
        ]
    ],
    /// Routes the DMA acknowledge of a peripheral to UDMA0.
    pub PERIPHERAL_UDMA_DMA_SEL [
        USART0_ACK OFFSET(0) NUMBITS(1) [],
        UART1_ACK OFFSET(1) NUMBITS(1) [],
        UART3_ACK OFFSET(3) NUMBITS(1) [],
        SSISLAVE_ACK OFFSET(4) NUMBITS(1) [],
        SSIMASTER_ACK OFFSET(5) NUMBITS(1) [],
        SSISLAVE1_ACK OFFSET(6) NUMBITS(1) [],
        I2C_ACK OFFSET(7) NUMBITS(1) []
    ],
    pub M4SS_P2P_INTR [
        RX_BUFFER_VALID OFFSET(1) NUMBITS(1) []
    ],
    pub P2P_STATUS_REG [
        M4_WAKEUP_TA OFFSET(0) NUMBITS(1) [],
        M4_IS_ACTIVE OFFSET(1) NUMBITS(1) [],
        TA_WAKEUP_M4 OFFSET(2) NUMBITS(1) [],
        TA_IS_ACTIVE OFFSET(3) NUMBITS(1) []
    ]
];

const _: () = assert!(offset_of!(MiscConfigRegisters, misc_cfg_misc_ctrl1) == 0x44);
const _: () = assert!(offset_of!(MiscConfigRegisters, gpdma_device_sel_reg) == 0x108);
const _: () = assert!(offset_of!(MiscConfigRegisters, m4ss_p2p_intr_set_reg) == 0x16c);
const _: () = assert!(offset_of!(MiscConfigRegisters, tass_p2p_intr_clear_reg) == 0x180);
const _: () = assert!(size_of::<MiscConfigRegisters>() == 0x1c4);

pub static LAYOUT: Layout = layout!(MiscConfigRegisters {
    misc_cfg_host_ctrl => "MISC_CFG_HOST_CTRL": u32, RW;
    misc_cfg_rst_latch_status => "MISC_CFG_RST_LATCH_STATUS": u32, RW;
    misc_cfg_misc_ctrl => "MISC_CFG_MISC_CTRL": u32, RW, MISC_CFG_MISC_CTRL { CCI_SYNC_MODE: RW };
    misc_cfg_sram_redundancy_ctrl => "MISC_CFG_SRAM_REDUNDANCY_CTRL": u32, RW,
        MISC_CFG_SRAM_REDUNDANCY_CTRL { SRAM_REDUNDANCY_EN: RW };
    misc_usb_config_reg => "MISC_USB_CONFIG_REG": u32, RW;
    misc_cfg_misc_ctrl1 => "MISC_CFG_MISC_CTRL1": u32, RW, MISC_CFG_MISC_CTRL1 {
        REGISTER_ROM_EN: RW, I2S_MASTER_SLAVE_MODE: RW
    };
    peripheral_udma_dma_sel => "PERIPHERAL_UDMA_DMA_SEL": u32, RW, PERIPHERAL_UDMA_DMA_SEL {
        USART0_ACK: RW, UART1_ACK: RW, UART3_ACK: RW, SSISLAVE_ACK: RW, SSIMASTER_ACK: RW,
        SSISLAVE1_ACK: RW, I2C_ACK: RW
    };
    misc_usb_set_reg1 => "MISC_USB_SET_REG1": u32, RW;
    misc_usb_clear_reg1 => "MISC_USB_CLEAR_REG1": u32, WO;
    gpdma_device_sel_reg => "GPDMA_DEVICE_SEL_REG": u32, RW;
    m4ss_p2p_intr_set_reg => "M4SS_P2P_INTR_SET_REG": u32, RW, M4SS_P2P_INTR { RX_BUFFER_VALID: RW };
    m4ss_p2p_intr_clr_reg => "M4SS_P2P_INTR_CLR_REG": u32, WO, M4SS_P2P_INTR { RX_BUFFER_VALID: WO };
    p2p_status_reg => "P2P_STATUS_REG": u32, RW, P2P_STATUS_REG {
        M4_WAKEUP_TA: RW, M4_IS_ACTIVE: RW, TA_WAKEUP_M4: RW, TA_IS_ACTIVE: RW
    };
    tass_p2p_intr_mask_set => "TASS_P2P_INTR_MASK_SET": u32, RW;
    tass_p2p_intr_mask_clr => "TASS_P2P_INTR_MASK_CLR": u32, RW;
    tass_p2p_intr_clear_reg => "TASS_P2P_INTR_CLEAR_REG": u32, WO;
    m4ss_qspi_octa_mode_ctrl => "M4SS_QSPI_OCTA_MODE_CTRL": u32, RW;
    m4ss_qspi_tx_dll_test_reg => "M4SS_QSPI_TX_DLL_TEST_REG": u32, RW;
    m4ss_qspi_rx_dll_test_reg => "M4SS_QSPI_RX_DLL_TEST_REG": u32, RW;
});

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn mailbox_block() {
        let offsets: Vec<(&str, usize)> = LAYOUT
            .registers
            .iter()
            .filter(|register| register.name.contains("P2P"))
            .map(|register| (register.name, register.offset))
            .collect();
        assert_eq!(
            offsets,
            [
                ("M4SS_P2P_INTR_SET_REG", 0x16c),
                ("M4SS_P2P_INTR_CLR_REG", 0x170),
                ("P2P_STATUS_REG", 0x174),
                ("TASS_P2P_INTR_MASK_SET", 0x178),
                ("TASS_P2P_INTR_MASK_CLR", 0x17c),
                ("TASS_P2P_INTR_CLEAR_REG", 0x180),
            ]
        );
    }

    #[test]
    fn wake_handshake() {
        let mut status: LocalRegisterCopy<u32, P2P_STATUS_REG::Register> =
            LocalRegisterCopy::new(0b1000);
        assert!(status.is_set(P2P_STATUS_REG::TA_IS_ACTIVE));
        status.modify(P2P_STATUS_REG::M4_IS_ACTIVE::SET);
        assert_eq!(status.get(), 0b1010);
    }

    #[test]
    fn register_rom_for_high_clocks() {
        let ctrl1 = LAYOUT.registers[5];
        assert_eq!((ctrl1.name, ctrl1.offset), ("MISC_CFG_MISC_CTRL1", 0x44));
        assert_eq!(ctrl1.field("REGISTER_ROM_EN").unwrap().mask(), 1 << 4);
    }
}
