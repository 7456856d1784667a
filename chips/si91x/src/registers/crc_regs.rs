// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

// CRC accelerator. Data words are pushed into DIN_FIFO, either by the CPU or
// by uDMA, and the running LFSR state is read back from LFSR_STATE. Control
// bits come in SET / RESET register pairs.

use core::mem::offset_of;

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::Layout;

register_structs! {
    pub CrcRegisters {
        (0x000 => pub gen_ctrl_set_reg: WriteOnly<u32, GEN_CTRL::Register>),
        (0x004 => pub gen_ctrl_reset: WriteOnly<u32, GEN_CTRL::Register>),
        (0x008 => pub gen_sts: ReadOnly<u32, GEN_STS::Register>),
        (0x00c => pub polynomial: ReadWrite<u32>),
        (0x010 => pub polynomial_ctrl_set: WriteOnly<u32, POLYNOMIAL_CTRL::Register>),
        (0x014 => pub polynomial_ctrl_reset: WriteOnly<u32, POLYNOMIAL_CTRL::Register>),
        (0x018 => pub lfsr_init_val: ReadWrite<u32>),
        (0x01c => pub lfsr_init_ctrl_set: WriteOnly<u32, LFSR_INIT_CTRL::Register>),
        (0x020 => pub lfsr_init_ctrl_reset: WriteOnly<u32, LFSR_INIT_CTRL::Register>),
        (0x024 => pub din_fifo: WriteOnly<u32>),
        (0x028 => pub din_ctrl_set: WriteOnly<u32, DIN_CTRL::Register>),
        (0x02c => pub din_ctrl_reset: WriteOnly<u32, DIN_CTRL::Register>),
        (0x030 => pub din_num_bytes: ReadWrite<u32>),
        (0x034 => pub din_sts: ReadOnly<u32, DIN_STS::Register>),
        (0x038 => pub lfsr_state: ReadOnly<u32>),
        (0x03c => @END),
    }
}

register_bitfields![u32,
    pub GEN_CTRL [
        SOFT_RST OFFSET(0) NUMBITS(1) []
    ],
    pub GEN_STS [
        CALC_DONE OFFSET(0) NUMBITS(1) [],
        DIN_NUM_BYTES_DONE OFFSET(1) NUMBITS(1) []
    ],
    pub POLYNOMIAL_CTRL [
        /// Polynomial degree minus one
        POLYNOMIAL_WIDTH OFFSET(0) NUMBITS(5) []
    ],
    pub LFSR_INIT_CTRL [
        LFSR_INIT OFFSET(0) NUMBITS(1) [],
        USE_SWAPPED_INIT_VAL OFFSET(1) NUMBITS(1) []
    ],
    pub DIN_CTRL [
        DIN_WIDTH_FROM_REG OFFSET(0) NUMBITS(1) [],
        DIN_WIDTH_FROM_CNT OFFSET(1) NUMBITS(1) [],
        USE_SWAPPED_DIN OFFSET(2) NUMBITS(1) [],
        RESET_FIFO_PTRS OFFSET(3) NUMBITS(1) [],
        DIN_WIDTH_REG OFFSET(4) NUMBITS(5) [],
        FIFO_AEMPTY_THRESHOLD OFFSET(16) NUMBITS(4) [],
        FIFO_AFULL_THRESHOLD OFFSET(20) NUMBITS(4) []
    ],
    pub DIN_STS [
        DIN_NUM_BYTES_DONE OFFSET(0) NUMBITS(1) [],
        DIN_FIFO_OCC OFFSET(1) NUMBITS(4) [],
        DIN_FIFO_EMPTY OFFSET(5) NUMBITS(1) [],
        DIN_FIFO_AEMPTY OFFSET(6) NUMBITS(1) [],
        DIN_FIFO_FULL OFFSET(7) NUMBITS(1) [],
        DIN_FIFO_AFULL OFFSET(8) NUMBITS(1) []
    ]
];

const _: () = assert!(offset_of!(CrcRegisters, din_fifo) == 0x24);
const _: () = assert!(offset_of!(CrcRegisters, lfsr_state) == 0x38);

pub static LAYOUT: Layout = layout!(CrcRegisters {
    gen_ctrl_set_reg => "GEN_CTRL_SET_REG": u32, WO, GEN_CTRL { SOFT_RST: WO };
    gen_ctrl_reset => "GEN_CTRL_RESET": u32, WO, GEN_CTRL { SOFT_RST: WO };
    gen_sts => "GEN_STS": u32, RO, GEN_STS { CALC_DONE: RO, DIN_NUM_BYTES_DONE: RO };
    polynomial => "POLYNOMIAL": u32, RW;
    polynomial_ctrl_set => "POLYNOMIAL_CTRL_SET": u32, WO, POLYNOMIAL_CTRL { POLYNOMIAL_WIDTH: WO };
    polynomial_ctrl_reset => "POLYNOMIAL_CTRL_RESET": u32, WO, POLYNOMIAL_CTRL { POLYNOMIAL_WIDTH: WO };
    lfsr_init_val => "LFSR_INIT_VAL": u32, RW;
    lfsr_init_ctrl_set => "LFSR_INIT_CTRL_SET": u32, WO, LFSR_INIT_CTRL {
        LFSR_INIT: WO, USE_SWAPPED_INIT_VAL: WO
    };
    lfsr_init_ctrl_reset => "LFSR_INIT_CTRL_RESET": u32, WO, LFSR_INIT_CTRL {
        LFSR_INIT: WO, USE_SWAPPED_INIT_VAL: WO
    };
    din_fifo => "DIN_FIFO": u32, WO;
    din_ctrl_set => "DIN_CTRL_SET": u32, WO, DIN_CTRL {
        DIN_WIDTH_FROM_REG: WO, DIN_WIDTH_FROM_CNT: WO, USE_SWAPPED_DIN: WO, RESET_FIFO_PTRS: WO,
        DIN_WIDTH_REG: WO, FIFO_AEMPTY_THRESHOLD: WO, FIFO_AFULL_THRESHOLD: WO
    };
    din_ctrl_reset => "DIN_CTRL_RESET": u32, WO, DIN_CTRL {
        DIN_WIDTH_FROM_REG: WO, DIN_WIDTH_FROM_CNT: WO, USE_SWAPPED_DIN: WO, RESET_FIFO_PTRS: WO,
        DIN_WIDTH_REG: WO, FIFO_AEMPTY_THRESHOLD: WO, FIFO_AFULL_THRESHOLD: WO
    };
    din_num_bytes => "DIN_NUM_BYTES": u32, RW;
    din_sts => "DIN_STS": u32, RO, DIN_STS {
        DIN_NUM_BYTES_DONE: RO, DIN_FIFO_OCC: RO, DIN_FIFO_EMPTY: RO, DIN_FIFO_AEMPTY: RO,
        DIN_FIFO_FULL: RO, DIN_FIFO_AFULL: RO
    };
    lfsr_state => "LFSR_STATE": u32, RO;
});

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn fifo_thresholds() {
        let mut din: LocalRegisterCopy<u32, DIN_CTRL::Register> = LocalRegisterCopy::new(0);
        din.modify(
            DIN_CTRL::DIN_WIDTH_REG.val(31)
                + DIN_CTRL::FIFO_AEMPTY_THRESHOLD.val(6)
                + DIN_CTRL::FIFO_AFULL_THRESHOLD.val(2),
        );
        assert_eq!(din.get(), 0x0026_01f0);
    }

    #[test]
    fn status_and_fifo_access() {
        let status = &LAYOUT.registers[2];
        assert_eq!(status.name, "GEN_STS");
        assert!(!status.access.is_writable());
        let fifo = &LAYOUT.registers[9];
        assert_eq!((fifo.name, fifo.offset), ("DIN_FIFO", 0x24));
        assert!(!fifo.access.is_readable());
    }
}
