// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

// ULP timers (TIMERS). Four 32-bit counters sharing one register block; the
// microsecond and millisecond period registers hold the tick reference
// derived from the timer clock.

use core::mem::offset_of;

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::Layout;

pub const TIMERS_PARAM_NUM_TIMERS: usize = 4;

register_structs! {
    pub MatchCtrlRegisters {
        (0x000 => pub mcuulp_tmr_match: ReadWrite<u32>),
        (0x004 => pub mcuulp_tmr_cntrl: ReadWrite<u32, MCUULP_TMR_CNTRL::Register>),
        (0x008 => @END),
    },

    pub TimersRegisters {
        (0x000 => pub match_ctrl: [MatchCtrlRegisters; TIMERS_PARAM_NUM_TIMERS]),
        (0x020 => _reserved0),
        (0x080 => pub mcuulp_tmr_intr_stat: ReadWrite<u32, MCUULP_TMR_INTR_STAT::Register>),
        (0x084 => pub mcuulp_tmr_us_period_int: ReadWrite<u32, PERIOD_INT::Register>),
        (0x088 => pub mcuulp_tmr_us_period_frac: ReadWrite<u32, PERIOD_FRAC::Register>),
        (0x08c => pub mcuulp_tmr_ms_period_int: ReadWrite<u32, PERIOD_INT::Register>),
        (0x090 => pub mcuulp_tmr_ms_period_frac: ReadWrite<u32, PERIOD_FRAC::Register>),
        (0x094 => _reserved1),
        (0x09c => pub mcuulp_tmr_active_status: ReadOnly<u32, MCUULP_TMR_ACTIVE_STATUS::Register>),
        (0x0a0 => @END),
    }
}

register_bitfields![u32,
    pub MCUULP_TMR_CNTRL [
        TMR_START OFFSET(0) NUMBITS(1) [],
        TMR_INTR_CLR OFFSET(1) NUMBITS(1) [],
        TMR_INTR_ENABLE OFFSET(2) NUMBITS(1) [],
        /// Unit of the match value
        TMR_TYPE OFFSET(3) NUMBITS(2) [
            Microsecond = 0,
            Second = 1,
            ClockCycles = 2
        ],
        TMR_MODE OFFSET(5) NUMBITS(1) [
            Periodic = 0,
            OneShot = 1
        ],
        COUNTER_UP OFFSET(7) NUMBITS(1) []
    ],
    pub MCUULP_TMR_INTR_STAT [
        TMR0_INTR_STATUS OFFSET(0) NUMBITS(1) [],
        TMR1_INTR_STATUS OFFSET(1) NUMBITS(1) [],
        TMR2_INTR_STATUS OFFSET(2) NUMBITS(1) [],
        TMR3_INTR_STATUS OFFSET(3) NUMBITS(1) []
    ],
    pub PERIOD_INT [
        PERIOD_INT OFFSET(0) NUMBITS(10) []
    ],
    pub PERIOD_FRAC [
        PERIOD_FRAC OFFSET(0) NUMBITS(8) []
    ],
    pub MCUULP_TMR_ACTIVE_STATUS [
        TIMER_ACTIVE OFFSET(0) NUMBITS(4) []
    ]
];

const _: () = assert!(offset_of!(TimersRegisters, mcuulp_tmr_intr_stat) == 0x80);
const _: () = assert!(offset_of!(TimersRegisters, mcuulp_tmr_active_status) == 0x9c);

pub static LAYOUT: Layout = layout!(TimersRegisters {
    mcuulp_tmr_intr_stat => "MCUULP_TMR_INTR_STAT": u32, RW, MCUULP_TMR_INTR_STAT {
        TMR0_INTR_STATUS: RW, TMR1_INTR_STATUS: RW, TMR2_INTR_STATUS: RW, TMR3_INTR_STATUS: RW
    };
    mcuulp_tmr_us_period_int => "MCUULP_TMR_US_PERIOD_INT": u32, RW, PERIOD_INT { PERIOD_INT: RW };
    mcuulp_tmr_us_period_frac => "MCUULP_TMR_US_PERIOD_FRAC": u32, RW, PERIOD_FRAC { PERIOD_FRAC: RW };
    mcuulp_tmr_ms_period_int => "MCUULP_TMR_MS_PERIOD_INT": u32, RW, PERIOD_INT { PERIOD_INT: RW };
    mcuulp_tmr_ms_period_frac => "MCUULP_TMR_MS_PERIOD_FRAC": u32, RW, PERIOD_FRAC { PERIOD_FRAC: RW };
    mcuulp_tmr_active_status => "MCUULP_TMR_ACTIVE_STATUS": u32, RO, MCUULP_TMR_ACTIVE_STATUS {
        TIMER_ACTIVE: RO
    };
}
    clusters {
        match_ctrl[TIMERS_PARAM_NUM_TIMERS] => "MATCH_CTRL": MatchCtrlRegisters {
            mcuulp_tmr_match => "MCUULP_TMR_MATCH": u32, RW;
            mcuulp_tmr_cntrl => "MCUULP_TMR_CNTRL": u32, RW, MCUULP_TMR_CNTRL {
                TMR_START: RW, TMR_INTR_CLR: RW, TMR_INTR_ENABLE: RW, TMR_TYPE: RW,
                TMR_MODE: RW, COUNTER_UP: RW
            };
        };
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn one_shot_down_counter() {
        let mut cntrl: LocalRegisterCopy<u32, MCUULP_TMR_CNTRL::Register> =
            LocalRegisterCopy::new(0);
        cntrl.modify(
            MCUULP_TMR_CNTRL::TMR_TYPE::Microsecond
                + MCUULP_TMR_CNTRL::TMR_MODE::OneShot
                + MCUULP_TMR_CNTRL::TMR_INTR_ENABLE::SET,
        );
        assert_eq!(cntrl.get(), 0x24);
        assert!(!cntrl.is_set(MCUULP_TMR_CNTRL::COUNTER_UP));
    }

    #[test]
    fn timer_slots() {
        let slots = &LAYOUT.clusters[0];
        assert_eq!(slots.element_offset(3), Ok(0x18));
        let cntrl = slots.register("MCUULP_TMR_CNTRL").unwrap();
        assert_eq!(cntrl.offset, 4);
    }
}
