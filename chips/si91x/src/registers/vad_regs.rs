// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Voice activity detector.

use core::mem::size_of;

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::Layout;

register_structs! {
    pub VadRegisters {
        (0x000 => pub vad_conf_reg1: ReadWrite<u32, VAD_CONF_REG1::Register>),
        (0x004 => pub vad_conf_reg2: ReadWrite<u32, VAD_CONF_REG2::Register>),
        (0x008 => pub vad_conf_reg3: ReadWrite<u32, VAD_CONF_REG3::Register>),
        (0x00c => pub vad_conf_reg4: ReadWrite<u32, VAD_CONF_REG4::Register>),
        (0x010 => pub vad_conf_reg5: ReadWrite<u32, VAD_CONF_REG5::Register>),
        (0x014 => pub vad_conf_reg6: ReadWrite<u32, VAD_CONF_REG6::Register>),
        (0x018 => pub vad_conf_reg7: ReadWrite<u32, VAD_CONF_REG7::Register>),
        (0x01c => pub vad_conf_reg8: ReadWrite<u32, VAD_CONF_REG8::Register>),
        (0x020 => pub vad_conf_reg9: ReadWrite<u32, VAD_CONF_REG9::Register>),
        (0x024 => @END),
    }
}

register_bitfields![u32,
    pub VAD_CONF_REG1 [
        SAMPLS_PER_FRAME OFFSET(0) NUMBITS(10) [],
        SMPLS_PER_ADDR OFFSET(10) NUMBITS(2) [],
        FULL_WIDTH OFFSET(12) NUMBITS(1) []
    ],
    pub VAD_CONF_REG2 [
        SMPLS_ZERO_CROSS OFFSET(0) NUMBITS(10) []
    ],
    pub VAD_CONF_REG3 [
        PROG_SMPLS_FOR_ENERGY_CHECK OFFSET(0) NUMBITS(10) [],
        THRESHOLD_FRAME_ENERGY OFFSET(10) NUMBITS(16) [],
        THRESHOLD_SMPL_COLLECT OFFSET(26) NUMBITS(6) []
    ],
    pub VAD_CONF_REG4 [
        THRESHOLD_ACF OFFSET(0) NUMBITS(16) [],
        THRESHOLD_WACF OFFSET(16) NUMBITS(16) []
    ],
    pub VAD_CONF_REG5 [
        THRESHOLD_NULL OFFSET(0) NUMBITS(10) [],
        THRESHOLD_NULL_COUNT OFFSET(10) NUMBITS(10) []
    ],
    pub VAD_CONF_REG6 [
        THRESHOLD_PEAK OFFSET(0) NUMBITS(16) []
    ],
    pub VAD_CONF_REG7 [
        CHOOSE_VAD_METHOD OFFSET(0) NUMBITS(3) [
            ZeroCrossing = 0,
            Autocorrelation = 1,
            Amdf = 2,
            WeightedAutocorrelation = 3,
            All = 4
        ],
        DATA_SOURCE_SELECT OFFSET(3) NUMBITS(2) [],
        START_DELAY_VAL OFFSET(5) NUMBITS(10) [],
        END_DELAY_VAL OFFSET(15) NUMBITS(10) []
    ],
    pub VAD_CONF_REG8 [
        INP_DATA OFFSET(0) NUMBITS(16) [],
        EN_VAD_PROCESS OFFSET(16) NUMBITS(1) [],
        VAD_PROC_DONE OFFSET(17) NUMBITS(1) []
    ],
    pub VAD_CONF_REG9 [
        PING_ADDR OFFSET(0) NUMBITS(12) [],
        PONG_ADDR OFFSET(12) NUMBITS(12) [],
        PING_INT_CLEAR OFFSET(24) NUMBITS(1) [],
        PONG_INT_CLEAR OFFSET(25) NUMBITS(1) []
    ]
];

const _: () = assert!(size_of::<VadRegisters>() == 0x24);

pub static LAYOUT: Layout = layout!(VadRegisters {
    vad_conf_reg1 => "VAD_CONF_REG1": u32, RW, VAD_CONF_REG1 {
        SAMPLS_PER_FRAME: RW, SMPLS_PER_ADDR: RW, FULL_WIDTH: RW
    };
    vad_conf_reg2 => "VAD_CONF_REG2": u32, RW, VAD_CONF_REG2 { SMPLS_ZERO_CROSS: RW };
    vad_conf_reg3 => "VAD_CONF_REG3": u32, RW, VAD_CONF_REG3 {
        PROG_SMPLS_FOR_ENERGY_CHECK: RW, THRESHOLD_FRAME_ENERGY: RW, THRESHOLD_SMPL_COLLECT: RW
    };
    vad_conf_reg4 => "VAD_CONF_REG4": u32, RW, VAD_CONF_REG4 { THRESHOLD_ACF: RW, THRESHOLD_WACF: RW };
    vad_conf_reg5 => "VAD_CONF_REG5": u32, RW, VAD_CONF_REG5 {
        THRESHOLD_NULL: RW, THRESHOLD_NULL_COUNT: RW
    };
    vad_conf_reg6 => "VAD_CONF_REG6": u32, RW, VAD_CONF_REG6 { THRESHOLD_PEAK: RW };
    vad_conf_reg7 => "VAD_CONF_REG7": u32, RW, VAD_CONF_REG7 {
        CHOOSE_VAD_METHOD: RW, DATA_SOURCE_SELECT: RW, START_DELAY_VAL: RW, END_DELAY_VAL: RW
    };
    vad_conf_reg8 => "VAD_CONF_REG8": u32, RW, VAD_CONF_REG8 {
        INP_DATA: RW, EN_VAD_PROCESS: RW, VAD_PROC_DONE: RO
    };
    vad_conf_reg9 => "VAD_CONF_REG9": u32, RW, VAD_CONF_REG9 {
        PING_ADDR: RW, PONG_ADDR: RW, PING_INT_CLEAR: RW, PONG_INT_CLEAR: RW
    };
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processing_done_is_status() {
        let reg8 = LAYOUT.registers[7];
        assert_eq!((reg8.name, reg8.offset), ("VAD_CONF_REG8", 0x1c));
        let done = reg8.field("VAD_PROC_DONE").unwrap();
        assert_eq!((done.offset, done.access.tag()), (17, "RO"));
    }
}
