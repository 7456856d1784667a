// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

// Hardware random number generator.

use core::mem::offset_of;

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::Layout;

register_structs! {
    pub HwrngRegisters {
        (0x000 => pub hwrng_ctrl_reg: ReadWrite<u32, HWRNG_CTRL_REG::Register>),
        (0x004 => pub hwrng_rand_num_reg: ReadOnly<u32>),
        (0x008 => pub hwrng_lfsr_input_latch_reg: ReadWrite<u32, HWRNG_LFSR_INPUT_LATCH_REG::Register>),
        (0x00c => @END),
    }
}

register_bitfields![u32,
    pub HWRNG_CTRL_REG [
        /// Start the true random (ring oscillator) source
        HWRNG_RNG_ST OFFSET(0) NUMBITS(1) [],
        /// Start the pseudo random (LFSR) source
        HWRNG_PRBS_ST OFFSET(1) NUMBITS(1) [],
        SOFT_RESET OFFSET(2) NUMBITS(1) []
    ],
    pub HWRNG_LFSR_INPUT_LATCH_REG [
        HWRNG_LFSR_INPUT_LATCH_REG OFFSET(0) NUMBITS(1) []
    ]
];

const _: () = assert!(offset_of!(HwrngRegisters, hwrng_rand_num_reg) == 0x4);

pub static LAYOUT: Layout = layout!(HwrngRegisters {
    hwrng_ctrl_reg => "HWRNG_CTRL_REG": u32, RW, HWRNG_CTRL_REG {
        HWRNG_RNG_ST: RW, HWRNG_PRBS_ST: RW, SOFT_RESET: RW
    };
    hwrng_rand_num_reg => "HWRNG_RAND_NUM_REG": u32, RO;
    hwrng_lfsr_input_latch_reg => "HWRNG_LFSR_INPUT_LATCH_REG": u32, RW, HWRNG_LFSR_INPUT_LATCH_REG {
        HWRNG_LFSR_INPUT_LATCH_REG: RW
    };
});
