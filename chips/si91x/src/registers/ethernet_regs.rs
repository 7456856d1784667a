// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Ethernet MAC (Synopsys GMAC) with its MMC counters and DMA engine.
//!
//! The three register groups share one window: MAC configuration at 0x0000,
//! the MMC statistics block at 0x0100 and the descriptor DMA at 0x1000.
//! Status bits of `DMA_STATUS_REG` are cleared by writing one.

use core::mem::{offset_of, size_of};

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::Layout;

/// Offset of the MMC counter block.
pub const ETH_PARAM_MMC_OFFSET: usize = 0x100;
/// Offset of the DMA register block.
pub const ETH_PARAM_DMA_OFFSET: usize = 0x1000;

register_structs! {
    pub EthernetRegisters {
        // MAC
        (0x0000 => pub mac_config_reg: ReadWrite<u32, MAC_CONFIG_REG::Register>),
        (0x0004 => pub mac_frame_filter_reg: ReadWrite<u32, MAC_FRAME_FILTER_REG::Register>),
        (0x0008 => pub mac_hash_table_high_reg: ReadWrite<u32>),
        (0x000c => pub mac_hash_table_low_reg: ReadWrite<u32>),
        /// PHY management (MDIO) address and command
        (0x0010 => pub mac_gmii_addr_reg: ReadWrite<u32, MAC_GMII_ADDR_REG::Register>),
        (0x0014 => pub mac_gmii_data_reg: ReadWrite<u32, MAC_GMII_DATA_REG::Register>),
        (0x0018 => pub mac_flow_ctrl_reg: ReadWrite<u32, MAC_FLOW_CTRL_REG::Register>),
        (0x001c => pub mac_vlan_tag_reg: ReadWrite<u32, MAC_VLAN_TAG_REG::Register>),
        (0x0020 => pub mac_version_reg: ReadOnly<u32, MAC_VERSION_REG::Register>),
        (0x0024 => _reserved0),
        (0x0028 => pub mac_wakeup_frame_filter_reg: ReadWrite<u32>),
        (0x002c => pub mac_pmt_ctrl_status_reg: ReadWrite<u32, MAC_PMT_CTRL_STATUS_REG::Register>),
        (0x0030 => _reserved1),
        (0x0038 => pub mac_status_reg: ReadOnly<u32, MAC_STATUS_REG::Register>),
        (0x003c => pub mac_intr_mask_reg: ReadWrite<u32, MAC_INTR_MASK_REG::Register>),
        (0x0040 => pub mac_addr0_high_reg: ReadWrite<u32, MAC_ADDR0_HIGH_REG::Register>),
        (0x0044 => pub mac_addr0_low_reg: ReadWrite<u32>),
        (0x0048 => pub mac_addr1_high_reg: ReadWrite<u32, MAC_ADDR_HIGH_REG::Register>),
        (0x004c => pub mac_addr1_low_reg: ReadWrite<u32>),
        (0x0050 => pub mac_addr2_high_reg: ReadWrite<u32, MAC_ADDR_HIGH_REG::Register>),
        (0x0054 => pub mac_addr2_low_reg: ReadWrite<u32>),
        (0x0058 => pub mac_addr3_high_reg: ReadWrite<u32, MAC_ADDR_HIGH_REG::Register>),
        (0x005c => pub mac_addr3_low_reg: ReadWrite<u32>),
        (0x0060 => _reserved2),
        // MMC
        (0x0100 => pub mmc_cntrl_reg: ReadWrite<u32, MMC_CNTRL_REG::Register>),
        (0x0104 => pub mmc_intr_rx_reg: ReadOnly<u32>),
        (0x0108 => pub mmc_intr_tx_reg: ReadOnly<u32>),
        (0x010c => pub mmc_intr_mask_rx_reg: ReadWrite<u32>),
        (0x0110 => pub mmc_intr_mask_tx_reg: ReadWrite<u32>),
        (0x0114 => pub mmc_tx_octet_count_gb: ReadOnly<u32>),
        (0x0118 => pub mmc_tx_frame_count_gb: ReadOnly<u32>),
        (0x011c => _reserved3),
        (0x0180 => pub mmc_rx_frame_count_gb: ReadOnly<u32>),
        (0x0184 => pub mmc_rx_octet_count_gb: ReadOnly<u32>),
        (0x0188 => _reserved4),
        (0x0194 => pub mmc_rx_crc_error: ReadOnly<u32>),
        (0x0198 => _reserved5),
        // DMA
        (0x1000 => pub dma_bus_mode_reg: ReadWrite<u32, DMA_BUS_MODE_REG::Register>),
        /// Any write resumes a suspended transmit process
        (0x1004 => pub dma_tx_poll_demand_reg: ReadWrite<u32>),
        (0x1008 => pub dma_rx_poll_demand_reg: ReadWrite<u32>),
        (0x100c => pub dma_rx_desc_list_addr_reg: ReadWrite<u32>),
        (0x1010 => pub dma_tx_desc_list_addr_reg: ReadWrite<u32>),
        (0x1014 => pub dma_status_reg: ReadWrite<u32, DMA_STATUS_REG::Register>),
        (0x1018 => pub dma_oper_mode_reg: ReadWrite<u32, DMA_OPER_MODE_REG::Register>),
        (0x101c => pub dma_intr_en_reg: ReadWrite<u32, DMA_INTR_EN_REG::Register>),
        (0x1020 => pub dma_missed_frame_cnt_reg: ReadOnly<u32, DMA_MISSED_FRAME_CNT_REG::Register>),
        (0x1024 => pub dma_rx_intr_wdt_reg: ReadWrite<u32>),
        (0x1028 => _reserved6),
        (0x1048 => pub dma_curr_host_tx_desc_reg: ReadOnly<u32>),
        (0x104c => pub dma_curr_host_rx_desc_reg: ReadOnly<u32>),
        (0x1050 => pub dma_curr_host_tx_buf_addr_reg: ReadOnly<u32>),
        (0x1054 => pub dma_curr_host_rx_buf_addr_reg: ReadOnly<u32>),
        (0x1058 => @END),
    }
}

register_bitfields![u32,
    pub MAC_CONFIG_REG [
        RE OFFSET(2) NUMBITS(1) [],
        TE OFFSET(3) NUMBITS(1) [],
        /// Deferral check
        DC OFFSET(4) NUMBITS(1) [],
        BL OFFSET(5) NUMBITS(2) [],
        ACS OFFSET(7) NUMBITS(1) [],
        DR OFFSET(9) NUMBITS(1) [],
        IPC OFFSET(10) NUMBITS(1) [],
        DM OFFSET(11) NUMBITS(1) [
            HalfDuplex = 0,
            FullDuplex = 1
        ],
        LM OFFSET(12) NUMBITS(1) [],
        DO OFFSET(13) NUMBITS(1) [],
        FES OFFSET(14) NUMBITS(1) [
            Speed10Mbps = 0,
            Speed100Mbps = 1
        ],
        PS OFFSET(15) NUMBITS(1) [],
        DCRS OFFSET(16) NUMBITS(1) [],
        IFG OFFSET(17) NUMBITS(3) [],
        JE OFFSET(20) NUMBITS(1) [],
        JD OFFSET(22) NUMBITS(1) [],
        WD OFFSET(23) NUMBITS(1) [],
        CST OFFSET(25) NUMBITS(1) []
    ],
    pub MAC_FRAME_FILTER_REG [
        PR OFFSET(0) NUMBITS(1) [],
        HUC OFFSET(1) NUMBITS(1) [],
        HMC OFFSET(2) NUMBITS(1) [],
        DAIF OFFSET(3) NUMBITS(1) [],
        PM OFFSET(4) NUMBITS(1) [],
        DBF OFFSET(5) NUMBITS(1) [],
        PCF OFFSET(6) NUMBITS(2) [],
        SAIF OFFSET(8) NUMBITS(1) [],
        SAF OFFSET(9) NUMBITS(1) [],
        HPF OFFSET(10) NUMBITS(1) [],
        RA OFFSET(31) NUMBITS(1) []
    ],
    pub MAC_GMII_ADDR_REG [
        /// Busy, set by software and cleared by hardware
        GB OFFSET(0) NUMBITS(1) [],
        GW OFFSET(1) NUMBITS(1) [],
        CR OFFSET(2) NUMBITS(4) [],
        GR OFFSET(6) NUMBITS(5) [],
        PA OFFSET(11) NUMBITS(5) []
    ],
    pub MAC_GMII_DATA_REG [
        GD OFFSET(0) NUMBITS(16) []
    ],
    pub MAC_FLOW_CTRL_REG [
        FCB_BPA OFFSET(0) NUMBITS(1) [],
        TFE OFFSET(1) NUMBITS(1) [],
        RFE OFFSET(2) NUMBITS(1) [],
        UP OFFSET(3) NUMBITS(1) [],
        PLT OFFSET(4) NUMBITS(2) [],
        DZPQ OFFSET(7) NUMBITS(1) [],
        PT OFFSET(16) NUMBITS(16) []
    ],
    pub MAC_VLAN_TAG_REG [
        VL OFFSET(0) NUMBITS(16) [],
        ETV OFFSET(16) NUMBITS(1) []
    ],
    pub MAC_VERSION_REG [
        SNPSVER OFFSET(0) NUMBITS(8) [],
        USERVER OFFSET(8) NUMBITS(8) []
    ],
    pub MAC_PMT_CTRL_STATUS_REG [
        PWRDWN OFFSET(0) NUMBITS(1) [],
        MGKPKTEN OFFSET(1) NUMBITS(1) [],
        RWKPKTEN OFFSET(2) NUMBITS(1) [],
        MGKPRCVD OFFSET(5) NUMBITS(1) [],
        RWKPRCVD OFFSET(6) NUMBITS(1) [],
        GLBLUCAST OFFSET(9) NUMBITS(1) [],
        RWKFILTRST OFFSET(31) NUMBITS(1) []
    ],
    pub MAC_STATUS_REG [
        PMTIS OFFSET(3) NUMBITS(1) [],
        MMCIS OFFSET(4) NUMBITS(1) [],
        MMCRXIS OFFSET(5) NUMBITS(1) [],
        MMCTXIS OFFSET(6) NUMBITS(1) []
    ],
    pub MAC_INTR_MASK_REG [
        PMTIM OFFSET(3) NUMBITS(1) []
    ],
    pub MAC_ADDR0_HIGH_REG [
        ADDRHI OFFSET(0) NUMBITS(16) [],
        /// Always reads one
        MO OFFSET(31) NUMBITS(1) []
    ],
    pub MAC_ADDR_HIGH_REG [
        ADDRHI OFFSET(0) NUMBITS(16) [],
        MBC OFFSET(24) NUMBITS(6) [],
        SA OFFSET(30) NUMBITS(1) [],
        AE OFFSET(31) NUMBITS(1) []
    ],
    pub MMC_CNTRL_REG [
        CNTRST OFFSET(0) NUMBITS(1) [],
        CNTSTOPRO OFFSET(1) NUMBITS(1) [],
        RSTONRD OFFSET(2) NUMBITS(1) [],
        CNTFREEZ OFFSET(3) NUMBITS(1) []
    ],
    pub DMA_BUS_MODE_REG [
        SWR OFFSET(0) NUMBITS(1) [],
        DA OFFSET(1) NUMBITS(1) [],
        DSL OFFSET(2) NUMBITS(5) [],
        PBL OFFSET(8) NUMBITS(6) [],
        PR OFFSET(14) NUMBITS(2) [],
        FB OFFSET(16) NUMBITS(1) [],
        RPBL OFFSET(17) NUMBITS(6) [],
        USP OFFSET(23) NUMBITS(1) [],
        PBL_X8 OFFSET(24) NUMBITS(1) [],
        AAL OFFSET(25) NUMBITS(1) []
    ],
    pub DMA_STATUS_REG [
        TI OFFSET(0) NUMBITS(1) [],
        TPS_STOPPED OFFSET(1) NUMBITS(1) [],
        TU OFFSET(2) NUMBITS(1) [],
        TJT OFFSET(3) NUMBITS(1) [],
        OVF OFFSET(4) NUMBITS(1) [],
        UNF OFFSET(5) NUMBITS(1) [],
        RI OFFSET(6) NUMBITS(1) [],
        RU OFFSET(7) NUMBITS(1) [],
        RPS_STOPPED OFFSET(8) NUMBITS(1) [],
        RWT OFFSET(9) NUMBITS(1) [],
        ETI OFFSET(10) NUMBITS(1) [],
        FBI OFFSET(13) NUMBITS(1) [],
        ERI OFFSET(14) NUMBITS(1) [],
        AIS OFFSET(15) NUMBITS(1) [],
        NIS OFFSET(16) NUMBITS(1) [],
        RS OFFSET(17) NUMBITS(3) [],
        TS OFFSET(20) NUMBITS(3) [],
        EB OFFSET(23) NUMBITS(3) [],
        GMI OFFSET(27) NUMBITS(1) [],
        GPI OFFSET(28) NUMBITS(1) []
    ],
    pub DMA_OPER_MODE_REG [
        SR OFFSET(1) NUMBITS(1) [],
        OSF OFFSET(2) NUMBITS(1) [],
        RTC OFFSET(3) NUMBITS(2) [],
        FUF OFFSET(6) NUMBITS(1) [],
        FEF OFFSET(7) NUMBITS(1) [],
        ST OFFSET(13) NUMBITS(1) [],
        TTC OFFSET(14) NUMBITS(3) [],
        FTF OFFSET(20) NUMBITS(1) [],
        TSF OFFSET(21) NUMBITS(1) [],
        DFF OFFSET(24) NUMBITS(1) [],
        RSF OFFSET(25) NUMBITS(1) [],
        DT OFFSET(26) NUMBITS(1) []
    ],
    pub DMA_INTR_EN_REG [
        TIE OFFSET(0) NUMBITS(1) [],
        TSE OFFSET(1) NUMBITS(1) [],
        TUE OFFSET(2) NUMBITS(1) [],
        TJE OFFSET(3) NUMBITS(1) [],
        OVE OFFSET(4) NUMBITS(1) [],
        UNE OFFSET(5) NUMBITS(1) [],
        RIE OFFSET(6) NUMBITS(1) [],
        RUE OFFSET(7) NUMBITS(1) [],
        RSE OFFSET(8) NUMBITS(1) [],
        RWE OFFSET(9) NUMBITS(1) [],
        ETE OFFSET(10) NUMBITS(1) [],
        FBE OFFSET(13) NUMBITS(1) [],
        ERE OFFSET(14) NUMBITS(1) [],
        AIE OFFSET(15) NUMBITS(1) [],
        NIE OFFSET(16) NUMBITS(1) []
    ],
    pub DMA_MISSED_FRAME_CNT_REG [
        MISFRMCNT OFFSET(0) NUMBITS(16) [],
        MISCNTOVF OFFSET(16) NUMBITS(1) [],
        OVFFRMCNT OFFSET(17) NUMBITS(11) [],
        OVFCNTOVF OFFSET(28) NUMBITS(1) []
    ]
];

const _: () = assert!(offset_of!(EthernetRegisters, mac_addr3_low_reg) == 0x5c);
const _: () = assert!(offset_of!(EthernetRegisters, mmc_cntrl_reg) == ETH_PARAM_MMC_OFFSET);
const _: () = assert!(offset_of!(EthernetRegisters, dma_bus_mode_reg) == ETH_PARAM_DMA_OFFSET);
const _: () = assert!(size_of::<EthernetRegisters>() == 0x1058);

pub static LAYOUT: Layout = layout!(EthernetRegisters {
    mac_config_reg => "MAC_CONFIG_REG": u32, RW, MAC_CONFIG_REG {
        RE: RW, TE: RW, DC: RW, BL: RW, ACS: RW, DR: RW, IPC: RW, DM: RW, LM: RW, DO: RW,
        FES: RW, PS: RW, DCRS: RW, IFG: RW, JE: RW, JD: RW, WD: RW, CST: RW
    };
    mac_frame_filter_reg => "MAC_FRAME_FILTER_REG": u32, RW, MAC_FRAME_FILTER_REG {
        PR: RW, HUC: RW, HMC: RW, DAIF: RW, PM: RW, DBF: RW, PCF: RW, SAIF: RW, SAF: RW,
        HPF: RW, RA: RW
    };
    mac_hash_table_high_reg => "MAC_HASH_TABLE_HIGH_REG": u32, RW;
    mac_hash_table_low_reg => "MAC_HASH_TABLE_LOW_REG": u32, RW;
    mac_gmii_addr_reg => "MAC_GMII_ADDR_REG": u32, RW, MAC_GMII_ADDR_REG {
        GB: RW, GW: RW, CR: RW, GR: RW, PA: RW
    };
    mac_gmii_data_reg => "MAC_GMII_DATA_REG": u32, RW, MAC_GMII_DATA_REG { GD: RW };
    mac_flow_ctrl_reg => "MAC_FLOW_CTRL_REG": u32, RW, MAC_FLOW_CTRL_REG {
        FCB_BPA: RW, TFE: RW, RFE: RW, UP: RW, PLT: RW, DZPQ: RW, PT: RW
    };
    mac_vlan_tag_reg => "MAC_VLAN_TAG_REG": u32, RW, MAC_VLAN_TAG_REG { VL: RW, ETV: RW };
    mac_version_reg => "MAC_VERSION_REG": u32, RO, MAC_VERSION_REG { SNPSVER: RO, USERVER: RO };
    mac_wakeup_frame_filter_reg => "MAC_WAKEUP_FRAME_FILTER_REG": u32, RW;
    mac_pmt_ctrl_status_reg => "MAC_PMT_CTRL_STATUS_REG": u32, RW, MAC_PMT_CTRL_STATUS_REG {
        PWRDWN: RW, MGKPKTEN: RW, RWKPKTEN: RW, MGKPRCVD: RO, RWKPRCVD: RO, GLBLUCAST: RW,
        RWKFILTRST: RW
    };
    mac_status_reg => "MAC_STATUS_REG": u32, RO, MAC_STATUS_REG {
        PMTIS: RO, MMCIS: RO, MMCRXIS: RO, MMCTXIS: RO
    };
    mac_intr_mask_reg => "MAC_INTR_MASK_REG": u32, RW, MAC_INTR_MASK_REG { PMTIM: RW };
    mac_addr0_high_reg => "MAC_ADDR0_HIGH_REG": u32, RW, MAC_ADDR0_HIGH_REG { ADDRHI: RW, MO: RO };
    mac_addr0_low_reg => "MAC_ADDR0_LOW_REG": u32, RW;
    mac_addr1_high_reg => "MAC_ADDR1_HIGH_REG": u32, RW, MAC_ADDR_HIGH_REG {
        ADDRHI: RW, MBC: RW, SA: RW, AE: RW
    };
    mac_addr1_low_reg => "MAC_ADDR1_LOW_REG": u32, RW;
    mac_addr2_high_reg => "MAC_ADDR2_HIGH_REG": u32, RW, MAC_ADDR_HIGH_REG {
        ADDRHI: RW, MBC: RW, SA: RW, AE: RW
    };
    mac_addr2_low_reg => "MAC_ADDR2_LOW_REG": u32, RW;
    mac_addr3_high_reg => "MAC_ADDR3_HIGH_REG": u32, RW, MAC_ADDR_HIGH_REG {
        ADDRHI: RW, MBC: RW, SA: RW, AE: RW
    };
    mac_addr3_low_reg => "MAC_ADDR3_LOW_REG": u32, RW;
    mmc_cntrl_reg => "MMC_CNTRL_REG": u32, RW, MMC_CNTRL_REG {
        CNTRST: RW, CNTSTOPRO: RW, RSTONRD: RW, CNTFREEZ: RW
    };
    mmc_intr_rx_reg => "MMC_INTR_RX_REG": u32, RO;
    mmc_intr_tx_reg => "MMC_INTR_TX_REG": u32, RO;
    mmc_intr_mask_rx_reg => "MMC_INTR_MASK_RX_REG": u32, RW;
    mmc_intr_mask_tx_reg => "MMC_INTR_MASK_TX_REG": u32, RW;
    mmc_tx_octet_count_gb => "MMC_TX_OCTET_COUNT_GB": u32, RO;
    mmc_tx_frame_count_gb => "MMC_TX_FRAME_COUNT_GB": u32, RO;
    mmc_rx_frame_count_gb => "MMC_RX_FRAME_COUNT_GB": u32, RO;
    mmc_rx_octet_count_gb => "MMC_RX_OCTET_COUNT_GB": u32, RO;
    mmc_rx_crc_error => "MMC_RX_CRC_ERROR": u32, RO;
    dma_bus_mode_reg => "DMA_BUS_MODE_REG": u32, RW, DMA_BUS_MODE_REG {
        SWR: RW, DA: RW, DSL: RW, PBL: RW, PR: RW, FB: RW, RPBL: RW, USP: RW, PBL_X8: RW, AAL: RW
    };
    dma_tx_poll_demand_reg => "DMA_TX_POLL_DEMAND_REG": u32, RW;
    dma_rx_poll_demand_reg => "DMA_RX_POLL_DEMAND_REG": u32, RW;
    dma_rx_desc_list_addr_reg => "DMA_RX_DESC_LIST_ADDR_REG": u32, RW;
    dma_tx_desc_list_addr_reg => "DMA_TX_DESC_LIST_ADDR_REG": u32, RW;
    dma_status_reg => "DMA_STATUS_REG": u32, RW, DMA_STATUS_REG {
        TI: RW, TPS_STOPPED: RW, TU: RW, TJT: RW, OVF: RW, UNF: RW, RI: RW, RU: RW,
        RPS_STOPPED: RW, RWT: RW, ETI: RW, FBI: RW, ERI: RW, AIS: RW, NIS: RW, RS: RO, TS: RO,
        EB: RO, GMI: RO, GPI: RO
    };
    dma_oper_mode_reg => "DMA_OPER_MODE_REG": u32, RW, DMA_OPER_MODE_REG {
        SR: RW, OSF: RW, RTC: RW, FUF: RW, FEF: RW, ST: RW, TTC: RW, FTF: RW, TSF: RW, DFF: RW,
        RSF: RW, DT: RW
    };
    dma_intr_en_reg => "DMA_INTR_EN_REG": u32, RW, DMA_INTR_EN_REG {
        TIE: RW, TSE: RW, TUE: RW, TJE: RW, OVE: RW, UNE: RW, RIE: RW, RUE: RW, RSE: RW, RWE: RW,
        ETE: RW, FBE: RW, ERE: RW, AIE: RW, NIE: RW
    };
    dma_missed_frame_cnt_reg => "DMA_MISSED_FRAME_CNT_REG": u32, RO, DMA_MISSED_FRAME_CNT_REG {
        MISFRMCNT: RO, MISCNTOVF: RO, OVFFRMCNT: RO, OVFCNTOVF: RO
    };
    dma_rx_intr_wdt_reg => "DMA_RX_INTR_WDT_REG": u32, RW;
    dma_curr_host_tx_desc_reg => "DMA_CURR_HOST_TX_DESC_REG": u32, RO;
    dma_curr_host_rx_desc_reg => "DMA_CURR_HOST_RX_DESC_REG": u32, RO;
    dma_curr_host_tx_buf_addr_reg => "DMA_CURR_HOST_TX_BUF_ADDR_REG": u32, RO;
    dma_curr_host_rx_buf_addr_reg => "DMA_CURR_HOST_RX_BUF_ADDR_REG": u32, RO;
});

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::interfaces::{ReadWriteable, Readable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn full_duplex_100m() {
        let config: InMemoryRegister<u32, MAC_CONFIG_REG::Register> = InMemoryRegister::new(0);
        config.modify(
            MAC_CONFIG_REG::DM::FullDuplex
                + MAC_CONFIG_REG::FES::Speed100Mbps
                + MAC_CONFIG_REG::TE::SET
                + MAC_CONFIG_REG::RE::SET,
        );
        assert_eq!(config.get(), 0x0000_480c);
    }

    #[test]
    fn dma_block_starts_at_0x1000() {
        let names = ["DMA_BUS_MODE_REG", "DMA_STATUS_REG", "DMA_INTR_EN_REG"];
        let offsets = [0x1000, 0x1014, 0x101c];
        for (name, offset) in names.iter().zip(offsets) {
            let register = LAYOUT
                .registers
                .iter()
                .find(|register| register.name == *name)
                .unwrap();
            assert_eq!(register.offset, offset);
        }
    }

    #[test]
    fn dma_process_state_is_read_only() {
        let status = LAYOUT
            .registers
            .iter()
            .find(|register| register.name == "DMA_STATUS_REG")
            .unwrap();
        assert!(!status.field("TS").unwrap().access.is_writable());
        assert!(status.field("NIS").unwrap().access.is_writable());
    }
}
