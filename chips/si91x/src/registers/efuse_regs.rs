// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! eFuse controller.
//!
//! Fuses are read either one byte at a time through `EFUSE_READ_ADDR_REG` /
//! `EFUSE_READ_DATA_REG`, or as a block between the starting and ending
//! locations. The direct access (`DA`) registers drive the fuse macro pins
//! during programming.

use core::mem::{offset_of, size_of};

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::Layout;

register_structs! {
    pub EfuseRegisters {
        (0x000 => pub efuse_da_addr_reg: ReadWrite<u32, EFUSE_DA_ADDR_REG::Register>),
        (0x004 => pub efuse_da_ctrl_set_reg: WriteOnly<u32, EFUSE_DA_CTRL::Register>),
        (0x008 => pub efuse_da_ctrl_clr_reg: WriteOnly<u32, EFUSE_DA_CTRL::Register>),
        (0x00c => pub efuse_ctrl_reg: ReadWrite<u32, EFUSE_CTRL_REG::Register>),
        (0x010 => pub efuse_read_addr_reg: ReadWrite<u32, EFUSE_READ_ADDR_REG::Register>),
        (0x014 => pub efuse_read_data_reg: ReadOnly<u32, EFUSE_READ_DATA_REG::Register>),
        (0x018 => pub efuse_status_reg: ReadOnly<u32, EFUSE_STATUS_REG::Register>),
        (0x01c => pub efuse_rd_tmng_param_reg: ReadWrite<u32, EFUSE_RD_TMNG_PARAM_REG::Register>),
        (0x020 => _reserved0),
        (0x024 => pub efuse_mem_map_length_reg: ReadWrite<u32, EFUSE_MEM_MAP_LENGTH_REG::Register>),
        (0x028 => pub efuse_read_block_starting_location: ReadWrite<u32, EFUSE_READ_BLOCK_LOCATION::Register>),
        (0x02c => pub efuse_read_block_ending_location: ReadWrite<u32, EFUSE_READ_BLOCK_LOCATION::Register>),
        (0x030 => pub efuse_read_block_status_reg: ReadOnly<u32, EFUSE_READ_BLOCK_STATUS_REG::Register>),
        (0x034 => pub efuse_da_clr_strobe_reg: ReadWrite<u32, EFUSE_DA_CLR_STROBE_REG::Register>),
        (0x038 => @END),
    }
}

register_bitfields![u32,
    pub EFUSE_DA_ADDR_REG [
        ADDR_BITS OFFSET(0) NUMBITS(16) []
    ],
    pub EFUSE_DA_CTRL [
        PGENB OFFSET(0) NUMBITS(1) [],
        CSB OFFSET(1) NUMBITS(1) [],
        STROBE OFFSET(2) NUMBITS(1) [],
        LOAD OFFSET(3) NUMBITS(1) []
    ],
    pub EFUSE_CTRL_REG [
        EFUSE_ENABLE OFFSET(0) NUMBITS(1) [],
        EFUSE_DIRECT_PATH_ENABLE OFFSET(1) NUMBITS(1) [],
        ENABLE_EFUSE_WRITE OFFSET(2) NUMBITS(1) []
    ],
    pub EFUSE_READ_ADDR_REG [
        READ_ADDR_BITS OFFSET(0) NUMBITS(13) [],
        /// Start a single byte read
        DO_READ OFFSET(15) NUMBITS(1) []
    ],
    pub EFUSE_READ_DATA_REG [
        EFUSE_READ_DATA OFFSET(0) NUMBITS(8) [],
        READ_FSM_DONE OFFSET(15) NUMBITS(1) []
    ],
    pub EFUSE_STATUS_REG [
        EFUSE_ENABLED OFFSET(0) NUMBITS(1) [],
        EFUSE_DOUT_SYNC OFFSET(2) NUMBITS(8) [],
        STROBE_CLR_CNT OFFSET(10) NUMBITS(6) []
    ],
    pub EFUSE_RD_TMNG_PARAM_REG [
        TSUR_CS OFFSET(0) NUMBITS(4) [],
        TSQ OFFSET(4) NUMBITS(4) [],
        THR_A OFFSET(8) NUMBITS(4) []
    ],
    pub EFUSE_MEM_MAP_LENGTH_REG [
        EFUSE_MEM_MAP_LEN OFFSET(0) NUMBITS(1) [
            Bits32 = 0,
            Bits64 = 1
        ]
    ],
    pub EFUSE_READ_BLOCK_LOCATION [
        LOCATION OFFSET(0) NUMBITS(13) []
    ],
    pub EFUSE_READ_BLOCK_STATUS_REG [
        EFUSE_READ_BLOCK_STATUS OFFSET(0) NUMBITS(1) [],
        EFUSE_READ_BLOCK_STATE OFFSET(1) NUMBITS(3) []
    ],
    pub EFUSE_DA_CLR_STROBE_REG [
        EFUSE_STROBE_CLR_CNT OFFSET(0) NUMBITS(9) [],
        EFUSE_STROBE_ENABLE OFFSET(9) NUMBITS(1) []
    ]
];

const _: () = assert!(offset_of!(EfuseRegisters, efuse_ctrl_reg) == 0x0c);
const _: () = assert!(size_of::<EfuseRegisters>() == 0x38);

pub static LAYOUT: Layout = layout!(EfuseRegisters {
    efuse_da_addr_reg => "EFUSE_DA_ADDR_REG": u32, RW, EFUSE_DA_ADDR_REG { ADDR_BITS: RW };
    efuse_da_ctrl_set_reg => "EFUSE_DA_CTRL_SET_REG": u32, WO, EFUSE_DA_CTRL {
        PGENB: WO, CSB: WO, STROBE: WO, LOAD: WO
    };
    efuse_da_ctrl_clr_reg => "EFUSE_DA_CTRL_CLR_REG": u32, WO, EFUSE_DA_CTRL {
        PGENB: WO, CSB: WO, STROBE: WO, LOAD: WO
    };
    efuse_ctrl_reg => "EFUSE_CTRL_REG": u32, RW, EFUSE_CTRL_REG {
        EFUSE_ENABLE: RW, EFUSE_DIRECT_PATH_ENABLE: RW, ENABLE_EFUSE_WRITE: RW
    };
    efuse_read_addr_reg => "EFUSE_READ_ADDR_REG": u32, RW, EFUSE_READ_ADDR_REG {
        READ_ADDR_BITS: RW, DO_READ: WO
    };
    efuse_read_data_reg => "EFUSE_READ_DATA_REG": u32, RO, EFUSE_READ_DATA_REG {
        EFUSE_READ_DATA: RO, READ_FSM_DONE: RO
    };
    efuse_status_reg => "EFUSE_STATUS_REG": u32, RO, EFUSE_STATUS_REG {
        EFUSE_ENABLED: RO, EFUSE_DOUT_SYNC: RO, STROBE_CLR_CNT: RO
    };
    efuse_rd_tmng_param_reg => "EFUSE_RD_TMNG_PARAM_REG": u32, RW, EFUSE_RD_TMNG_PARAM_REG {
        TSUR_CS: RW, TSQ: RW, THR_A: RW
    };
    efuse_mem_map_length_reg => "EFUSE_MEM_MAP_LENGTH_REG": u32, RW, EFUSE_MEM_MAP_LENGTH_REG {
        EFUSE_MEM_MAP_LEN: RW
    };
    efuse_read_block_starting_location => "EFUSE_READ_BLOCK_STARTING_LOCATION": u32, RW,
        EFUSE_READ_BLOCK_LOCATION { LOCATION: RW };
    efuse_read_block_ending_location => "EFUSE_READ_BLOCK_ENDING_LOCATION": u32, RW,
        EFUSE_READ_BLOCK_LOCATION { LOCATION: RW };
    efuse_read_block_status_reg => "EFUSE_READ_BLOCK_STATUS_REG": u32, RO, EFUSE_READ_BLOCK_STATUS_REG {
        EFUSE_READ_BLOCK_STATUS: RO, EFUSE_READ_BLOCK_STATE: RO
    };
    efuse_da_clr_strobe_reg => "EFUSE_DA_CLR_STROBE_REG": u32, RW, EFUSE_DA_CLR_STROBE_REG {
        EFUSE_STROBE_CLR_CNT: RW, EFUSE_STROBE_ENABLE: RW
    };
});

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::interfaces::{ReadWriteable, Readable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn enable_controller() {
        let ctrl: InMemoryRegister<u32, EFUSE_CTRL_REG::Register> = InMemoryRegister::new(0);
        ctrl.modify(EFUSE_CTRL_REG::EFUSE_ENABLE::SET);
        assert_eq!(ctrl.get(), 1);
        let field = LAYOUT.registers[3].field("EFUSE_ENABLE").unwrap();
        assert_eq!((field.offset, field.width), (0, 1));
    }
}
