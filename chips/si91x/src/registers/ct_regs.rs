// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Configurable timers (CT0..CT3) and the shared CT_MUX_REG block.
//!
//! Each configurable timer holds two 16-bit counters that can be chained into
//! one 32-bit counter. Most registers therefore carry a counter 0 half in
//! bits 0..16 and a counter 1 half in bits 16..32. The event selection
//! registers route one of the input events to the start, continue, stop,
//! halt, increment, capture, output and interrupt actions of each counter.

use core::mem::{offset_of, size_of};

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::Layout;

pub const CT_PARAM_NUM_MUX_SEL: usize = 16;

register_structs! {
    pub CtRegisters {
        (0x000 => pub ct_gen_ctrl_set_reg: ReadWrite<u32, CT_GEN_CTRL::Register>),
        (0x004 => pub ct_gen_ctrl_reset_reg: ReadWrite<u32, CT_GEN_CTRL::Register>),
        (0x008 => pub ct_intr_sts: ReadOnly<u32, CT_INTR::Register>),
        (0x00c => pub ct_intr_mask: ReadWrite<u32, CT_INTR::Register>),
        (0x010 => pub ct_intr_unmask: ReadWrite<u32, CT_INTR::Register>),
        (0x014 => pub ct_intr_ack: WriteOnly<u32, CT_INTR::Register>),
        (0x018 => pub ct_match_reg: ReadWrite<u32, CT_MATCH_REG::Register>),
        (0x01c => pub ct_match_buf_reg: ReadWrite<u32, CT_MATCH_REG::Register>),
        (0x020 => pub ct_capture_reg: ReadOnly<u32, CT_CAPTURE_REG::Register>),
        (0x024 => pub ct_counter_reg: ReadWrite<u32, CT_COUNTER_REG::Register>),
        (0x028 => pub ct_ocu_ctrl_reg: ReadWrite<u32, CT_OCU_CTRL_REG::Register>),
        (0x02c => pub ct_ocu_compare_reg: ReadWrite<u32, CT_OCU_COMPARE_REG::Register>),
        (0x030 => pub ct_ocu_compare2_reg: ReadWrite<u32, CT_OCU_COMPARE2_REG::Register>),
        (0x034 => pub ct_ocu_sync_reg: ReadWrite<u32, CT_OCU_SYNC_REG::Register>),
        (0x038 => pub ct_ocu_compare_nxt_reg: ReadWrite<u32, CT_OCU_COMPARE_REG::Register>),
        (0x03c => pub ct_wfg_ctrl_reg: ReadWrite<u32, CT_WFG_CTRL_REG::Register>),
        (0x040 => pub ct_ocu_compare2_nxt_reg: ReadWrite<u32, CT_OCU_COMPARE2_REG::Register>),
        (0x044 => _reserved0),
        (0x060 => pub ct_start_counter_event_sel: ReadWrite<u32, EVENT_SEL::Register>),
        (0x064 => pub ct_start_counter_and_event: ReadWrite<u32, EVENT_COMBINE::Register>),
        (0x068 => pub ct_start_counter_or_event: ReadWrite<u32, EVENT_COMBINE::Register>),
        (0x06c => pub ct_continue_counter_event_sel: ReadWrite<u32, EVENT_SEL::Register>),
        (0x070 => pub ct_continue_counter_and_event: ReadWrite<u32, EVENT_COMBINE::Register>),
        (0x074 => pub ct_continue_counter_or_event: ReadWrite<u32, EVENT_COMBINE::Register>),
        (0x078 => pub ct_stop_counter_event_sel: ReadWrite<u32, EVENT_SEL::Register>),
        (0x07c => pub ct_stop_counter_and_event: ReadWrite<u32, EVENT_COMBINE::Register>),
        (0x080 => pub ct_stop_counter_or_event: ReadWrite<u32, EVENT_COMBINE::Register>),
        (0x084 => pub ct_halt_counter_event_sel: ReadWrite<u32, CT_HALT_COUNTER_EVENT_SEL::Register>),
        (0x088 => pub ct_halt_counter_and_event: ReadWrite<u32, EVENT_COMBINE::Register>),
        (0x08c => pub ct_halt_counter_or_event: ReadWrite<u32, EVENT_COMBINE::Register>),
        (0x090 => pub ct_increment_counter_event_sel: ReadWrite<u32, EVENT_SEL::Register>),
        (0x094 => pub ct_increment_counter_and_event: ReadWrite<u32, EVENT_COMBINE::Register>),
        (0x098 => pub ct_increment_counter_or_event: ReadWrite<u32, EVENT_COMBINE::Register>),
        (0x09c => pub ct_capture_counter_event_sel: ReadWrite<u32, EVENT_SEL::Register>),
        (0x0a0 => pub ct_capture_counter_and_event: ReadWrite<u32, EVENT_COMBINE::Register>),
        (0x0a4 => pub ct_capture_counter_or_event: ReadWrite<u32, EVENT_COMBINE::Register>),
        (0x0a8 => pub ct_output_event_sel: ReadWrite<u32, EVENT_SEL::Register>),
        (0x0ac => pub ct_output_and_event: ReadWrite<u32, EVENT_COMBINE::Register>),
        (0x0b0 => pub ct_output_or_event: ReadWrite<u32, EVENT_COMBINE::Register>),
        (0x0b4 => pub ct_intr_event_sel: ReadWrite<u32, EVENT_SEL::Register>),
        (0x0b8 => pub ct_intr_and_event: ReadWrite<u32, EVENT_COMBINE::Register>),
        (0x0bc => pub ct_intr_or_event: ReadWrite<u32, EVENT_COMBINE::Register>),
        (0x0c0 => _reserved1),
        (0x100 => @END),
    },

    pub CtMuxRegisters {
        /// Input event routing, one register per CT input
        (0x000 => pub ct_mux_sel: [ReadWrite<u32, CT_MUX_SEL::Register>; CT_PARAM_NUM_MUX_SEL]),
        (0x040 => pub ct_output_event1_adc_sel: ReadWrite<u32, CT_OUTPUT_EVENT_ADC_SEL::Register>),
        (0x044 => pub ct_output_event2_adc_sel: ReadWrite<u32, CT_OUTPUT_EVENT_ADC_SEL::Register>),
        (0x048 => @END),
    }
}

register_bitfields![u32,
    pub CT_GEN_CTRL [
        /// Chain counter 1 onto counter 0
        COUNTER_IN_32_BIT_MODE OFFSET(0) NUMBITS(1) [],
        SOFT_RESET_COUNTER_0_FRM_REG OFFSET(1) NUMBITS(1) [],
        PERIODIC_ENCOUNTER_COUNTER_0_FRM_REG OFFSET(2) NUMBITS(1) [],
        COUNTER_0_TRIG_FRM_REG OFFSET(3) NUMBITS(1) [],
        COUNTER_0_UP_DOWN OFFSET(4) NUMBITS(2) [
            Up = 0,
            Down = 1,
            UpDown = 2
        ],
        COUNTER_0_SYNC_TRIG OFFSET(6) NUMBITS(1) [],
        BUF_REG_0_EN OFFSET(7) NUMBITS(1) [],
        SOFT_RESET_COUNTER_1_FRM_REG OFFSET(17) NUMBITS(1) [],
        PERIODIC_ENCOUNTER_COUNTER_1_FRM_REG OFFSET(18) NUMBITS(1) [],
        COUNTER_1_TRIG_FRM_REG OFFSET(19) NUMBITS(1) [],
        COUNTER_1_UP_DOWN OFFSET(20) NUMBITS(2) [
            Up = 0,
            Down = 1,
            UpDown = 2
        ],
        COUNTER_1_SYNC_TRIG OFFSET(22) NUMBITS(1) [],
        BUF_REG_1_EN OFFSET(23) NUMBITS(1) []
    ],
    pub CT_INTR [
        FIFO_0_FULL OFFSET(0) NUMBITS(1) [],
        COUNTER_0_IS_ZERO OFFSET(1) NUMBITS(1) [],
        COUNTER_0_IS_PEAK OFFSET(2) NUMBITS(1) [],
        FIFO_1_FULL OFFSET(16) NUMBITS(1) [],
        COUNTER_1_IS_ZERO OFFSET(17) NUMBITS(1) [],
        COUNTER_1_IS_PEAK OFFSET(18) NUMBITS(1) []
    ],
    pub CT_MATCH_REG [
        COUNTER_0_MATCH OFFSET(0) NUMBITS(16) [],
        COUNTER_1_MATCH OFFSET(16) NUMBITS(16) []
    ],
    pub CT_CAPTURE_REG [
        COUNTER_0_CAPTURE OFFSET(0) NUMBITS(16) [],
        COUNTER_1_CAPTURE OFFSET(16) NUMBITS(16) []
    ],
    pub CT_COUNTER_REG [
        COUNTER0 OFFSET(0) NUMBITS(16) [],
        COUNTER1 OFFSET(16) NUMBITS(16) []
    ],
    pub CT_OCU_CTRL_REG [
        OUTPUT_IS_OCU_0 OFFSET(0) NUMBITS(1) [],
        SYNC_WITH_0 OFFSET(1) NUMBITS(3) [],
        OCU_0_DMA_MODE OFFSET(4) NUMBITS(1) [],
        OCU_0_MODE_8_16 OFFSET(5) NUMBITS(1) [],
        MAKE_OUTPUT_0_HIGH_SEL OFFSET(6) NUMBITS(3) [],
        MAKE_OUTPUT_0_LOW_SEL OFFSET(9) NUMBITS(3) [],
        OUTPUT_1_IS_OCU OFFSET(16) NUMBITS(1) [],
        SYNC_WITH_1 OFFSET(17) NUMBITS(3) [],
        OCU_1_DMA_MODE OFFSET(20) NUMBITS(1) [],
        OCU_1_MODE_8_16 OFFSET(21) NUMBITS(1) [],
        MAKE_OUTPUT_1_HIGH_SEL OFFSET(22) NUMBITS(3) [],
        MAKE_OUTPUT_1_LOW_SEL OFFSET(25) NUMBITS(3) []
    ],
    pub CT_OCU_COMPARE_REG [
        OCU_COMPARE_0_REG OFFSET(0) NUMBITS(16) [],
        OCU_COMPARE_1_REG OFFSET(16) NUMBITS(16) []
    ],
    pub CT_OCU_COMPARE2_REG [
        OCU_COMPARE2_0_REG OFFSET(0) NUMBITS(16) [],
        OCU_COMPARE2_1_REG OFFSET(16) NUMBITS(16) []
    ],
    pub CT_OCU_SYNC_REG [
        OCU_SYNC_CHANNEL0_REG OFFSET(0) NUMBITS(16) [],
        OCU_SYNC_CHANNEL1_REG OFFSET(16) NUMBITS(16) []
    ],
    pub CT_WFG_CTRL_REG [
        MAKE_OUTPUT_0_TGL_0_SEL OFFSET(0) NUMBITS(3) [],
        MAKE_OUTPUT_0_TGL_1_SEL OFFSET(3) NUMBITS(3) [],
        WFG_TGL_CNT_0_PEAK OFFSET(8) NUMBITS(8) [],
        MAKE_OUTPUT_1_TGL_0_SEL OFFSET(16) NUMBITS(3) [],
        MAKE_OUTPUT_1_TGL_1_SEL OFFSET(19) NUMBITS(3) [],
        WFG_TGL_CNT_1_PEAK OFFSET(24) NUMBITS(8) []
    ],
    /// Event number driving an action, per counter
    pub EVENT_SEL [
        COUNTER_0_EVENT_SEL OFFSET(0) NUMBITS(6) [],
        COUNTER_1_EVENT_SEL OFFSET(16) NUMBITS(6) []
    ],
    /// Halt selection; writing a resume bit restarts a halted counter
    pub CT_HALT_COUNTER_EVENT_SEL [
        COUNTER_0_EVENT_SEL OFFSET(0) NUMBITS(6) [],
        RESUME_FROM_HALT_COUNTER_0 OFFSET(6) NUMBITS(1) [],
        COUNTER_1_EVENT_SEL OFFSET(16) NUMBITS(6) [],
        RESUME_FROM_HALT_COUNTER_1 OFFSET(22) NUMBITS(1) []
    ],
    /// AND / OR combination of the four inputs of each counter
    pub EVENT_COMBINE [
        COUNTER_0_EVENT OFFSET(0) NUMBITS(4) [],
        COUNTER_0_EVENT_VLD OFFSET(8) NUMBITS(4) [],
        COUNTER_1_EVENT OFFSET(16) NUMBITS(4) [],
        COUNTER_1_EVENT_VLD OFFSET(24) NUMBITS(4) []
    ],
    pub CT_MUX_SEL [
        CT_MUX_SEL OFFSET(0) NUMBITS(4) []
    ],
    pub CT_OUTPUT_EVENT_ADC_SEL [
        OUTPUT_EVENT_ADC_SEL OFFSET(0) NUMBITS(4) []
    ]
];

const _: () = assert!(offset_of!(CtRegisters, ct_counter_reg) == 0x24);
const _: () = assert!(offset_of!(CtRegisters, ct_start_counter_event_sel) == 0x60);
const _: () = assert!(offset_of!(CtRegisters, ct_intr_or_event) == 0xbc);
const _: () = assert!(size_of::<CtRegisters>() == 0x100);

/// Registers that share the `EVENT_COMBINE` shape, each group led by its
/// selection register.
macro_rules! event_registers {
    ($(
        $sel:ident, $and:ident, $or:ident => $sel_name:literal, $and_name:literal, $or_name:literal,
            $sel_bits:ident { $($sel_field:ident),* };
    )*) => {
        register_list!(CtRegisters {
            ct_gen_ctrl_set_reg => "CT_GEN_CTRL_SET_REG": u32, RW, CT_GEN_CTRL {
                COUNTER_IN_32_BIT_MODE: RW, SOFT_RESET_COUNTER_0_FRM_REG: RW,
                PERIODIC_ENCOUNTER_COUNTER_0_FRM_REG: RW, COUNTER_0_TRIG_FRM_REG: RW,
                COUNTER_0_UP_DOWN: RW, COUNTER_0_SYNC_TRIG: RW, BUF_REG_0_EN: RW,
                SOFT_RESET_COUNTER_1_FRM_REG: RW, PERIODIC_ENCOUNTER_COUNTER_1_FRM_REG: RW,
                COUNTER_1_TRIG_FRM_REG: RW, COUNTER_1_UP_DOWN: RW, COUNTER_1_SYNC_TRIG: RW,
                BUF_REG_1_EN: RW
            };
            ct_gen_ctrl_reset_reg => "CT_GEN_CTRL_RESET_REG": u32, RW, CT_GEN_CTRL {
                COUNTER_IN_32_BIT_MODE: RW, SOFT_RESET_COUNTER_0_FRM_REG: RW,
                PERIODIC_ENCOUNTER_COUNTER_0_FRM_REG: RW, COUNTER_0_TRIG_FRM_REG: RW,
                COUNTER_0_UP_DOWN: RW, COUNTER_0_SYNC_TRIG: RW, BUF_REG_0_EN: RW,
                SOFT_RESET_COUNTER_1_FRM_REG: RW, PERIODIC_ENCOUNTER_COUNTER_1_FRM_REG: RW,
                COUNTER_1_TRIG_FRM_REG: RW, COUNTER_1_UP_DOWN: RW, COUNTER_1_SYNC_TRIG: RW,
                BUF_REG_1_EN: RW
            };
            ct_intr_sts => "CT_INTR_STS": u32, RO, CT_INTR {
                FIFO_0_FULL: RO, COUNTER_0_IS_ZERO: RO, COUNTER_0_IS_PEAK: RO,
                FIFO_1_FULL: RO, COUNTER_1_IS_ZERO: RO, COUNTER_1_IS_PEAK: RO
            };
            ct_intr_mask => "CT_INTR_MASK": u32, RW, CT_INTR {
                FIFO_0_FULL: RW, COUNTER_0_IS_ZERO: RW, COUNTER_0_IS_PEAK: RW,
                FIFO_1_FULL: RW, COUNTER_1_IS_ZERO: RW, COUNTER_1_IS_PEAK: RW
            };
            ct_intr_unmask => "CT_INTR_UNMASK": u32, RW, CT_INTR {
                FIFO_0_FULL: RW, COUNTER_0_IS_ZERO: RW, COUNTER_0_IS_PEAK: RW,
                FIFO_1_FULL: RW, COUNTER_1_IS_ZERO: RW, COUNTER_1_IS_PEAK: RW
            };
            ct_intr_ack => "CT_INTR_ACK": u32, WO, CT_INTR {
                FIFO_0_FULL: WO, COUNTER_0_IS_ZERO: WO, COUNTER_0_IS_PEAK: WO,
                FIFO_1_FULL: WO, COUNTER_1_IS_ZERO: WO, COUNTER_1_IS_PEAK: WO
            };
            ct_match_reg => "CT_MATCH_REG": u32, RW, CT_MATCH_REG {
                COUNTER_0_MATCH: RW, COUNTER_1_MATCH: RW
            };
            ct_match_buf_reg => "CT_MATCH_BUF_REG": u32, RW, CT_MATCH_REG {
                COUNTER_0_MATCH: RW, COUNTER_1_MATCH: RW
            };
            ct_capture_reg => "CT_CAPTURE_REG": u32, RO, CT_CAPTURE_REG {
                COUNTER_0_CAPTURE: RO, COUNTER_1_CAPTURE: RO
            };
            ct_counter_reg => "CT_COUNTER_REG": u32, RW, CT_COUNTER_REG { COUNTER0: RW, COUNTER1: RW };
            ct_ocu_ctrl_reg => "CT_OCU_CTRL_REG": u32, RW, CT_OCU_CTRL_REG {
                OUTPUT_IS_OCU_0: RW, SYNC_WITH_0: RW, OCU_0_DMA_MODE: RW, OCU_0_MODE_8_16: RW,
                MAKE_OUTPUT_0_HIGH_SEL: RW, MAKE_OUTPUT_0_LOW_SEL: RW,
                OUTPUT_1_IS_OCU: RW, SYNC_WITH_1: RW, OCU_1_DMA_MODE: RW, OCU_1_MODE_8_16: RW,
                MAKE_OUTPUT_1_HIGH_SEL: RW, MAKE_OUTPUT_1_LOW_SEL: RW
            };
            ct_ocu_compare_reg => "CT_OCU_COMPARE_REG": u32, RW, CT_OCU_COMPARE_REG {
                OCU_COMPARE_0_REG: RW, OCU_COMPARE_1_REG: RW
            };
            ct_ocu_compare2_reg => "CT_OCU_COMPARE2_REG": u32, RW, CT_OCU_COMPARE2_REG {
                OCU_COMPARE2_0_REG: RW, OCU_COMPARE2_1_REG: RW
            };
            ct_ocu_sync_reg => "CT_OCU_SYNC_REG": u32, RW, CT_OCU_SYNC_REG {
                OCU_SYNC_CHANNEL0_REG: RW, OCU_SYNC_CHANNEL1_REG: RW
            };
            ct_ocu_compare_nxt_reg => "CT_OCU_COMPARE_NXT_REG": u32, RW, CT_OCU_COMPARE_REG {
                OCU_COMPARE_0_REG: RW, OCU_COMPARE_1_REG: RW
            };
            ct_wfg_ctrl_reg => "CT_WFG_CTRL_REG": u32, RW, CT_WFG_CTRL_REG {
                MAKE_OUTPUT_0_TGL_0_SEL: RW, MAKE_OUTPUT_0_TGL_1_SEL: RW, WFG_TGL_CNT_0_PEAK: RW,
                MAKE_OUTPUT_1_TGL_0_SEL: RW, MAKE_OUTPUT_1_TGL_1_SEL: RW, WFG_TGL_CNT_1_PEAK: RW
            };
            ct_ocu_compare2_nxt_reg => "CT_OCU_COMPARE2_NXT_REG": u32, RW, CT_OCU_COMPARE2_REG {
                OCU_COMPARE2_0_REG: RW, OCU_COMPARE2_1_REG: RW
            };
            $(
                $sel => $sel_name: u32, RW, $sel_bits { $($sel_field: RW),* };
                $and => $and_name: u32, RW, EVENT_COMBINE {
                    COUNTER_0_EVENT: RW, COUNTER_0_EVENT_VLD: RW,
                    COUNTER_1_EVENT: RW, COUNTER_1_EVENT_VLD: RW
                };
                $or => $or_name: u32, RW, EVENT_COMBINE {
                    COUNTER_0_EVENT: RW, COUNTER_0_EVENT_VLD: RW,
                    COUNTER_1_EVENT: RW, COUNTER_1_EVENT_VLD: RW
                };
            )*
        })
    };
}

pub static LAYOUT: Layout = Layout {
    size: size_of::<CtRegisters>(),
    registers: event_registers! {
        ct_start_counter_event_sel, ct_start_counter_and_event, ct_start_counter_or_event =>
            "CT_START_COUNTER_EVENT_SEL", "CT_START_COUNTER_AND_EVENT", "CT_START_COUNTER_OR_EVENT",
            EVENT_SEL { COUNTER_0_EVENT_SEL, COUNTER_1_EVENT_SEL };
        ct_continue_counter_event_sel, ct_continue_counter_and_event, ct_continue_counter_or_event =>
            "CT_CONTINUE_COUNTER_EVENT_SEL", "CT_CONTINUE_COUNTER_AND_EVENT", "CT_CONTINUE_COUNTER_OR_EVENT",
            EVENT_SEL { COUNTER_0_EVENT_SEL, COUNTER_1_EVENT_SEL };
        ct_stop_counter_event_sel, ct_stop_counter_and_event, ct_stop_counter_or_event =>
            "CT_STOP_COUNTER_EVENT_SEL", "CT_STOP_COUNTER_AND_EVENT", "CT_STOP_COUNTER_OR_EVENT",
            EVENT_SEL { COUNTER_0_EVENT_SEL, COUNTER_1_EVENT_SEL };
        ct_halt_counter_event_sel, ct_halt_counter_and_event, ct_halt_counter_or_event =>
            "CT_HALT_COUNTER_EVENT_SEL", "CT_HALT_COUNTER_AND_EVENT", "CT_HALT_COUNTER_OR_EVENT",
            CT_HALT_COUNTER_EVENT_SEL {
                COUNTER_0_EVENT_SEL, RESUME_FROM_HALT_COUNTER_0, COUNTER_1_EVENT_SEL,
                RESUME_FROM_HALT_COUNTER_1
            };
        ct_increment_counter_event_sel, ct_increment_counter_and_event, ct_increment_counter_or_event =>
            "CT_INCREMENT_COUNTER_EVENT_SEL", "CT_INCREMENT_COUNTER_AND_EVENT", "CT_INCREMENT_COUNTER_OR_EVENT",
            EVENT_SEL { COUNTER_0_EVENT_SEL, COUNTER_1_EVENT_SEL };
        ct_capture_counter_event_sel, ct_capture_counter_and_event, ct_capture_counter_or_event =>
            "CT_CAPTURE_COUNTER_EVENT_SEL", "CT_CAPTURE_COUNTER_AND_EVENT", "CT_CAPTURE_COUNTER_OR_EVENT",
            EVENT_SEL { COUNTER_0_EVENT_SEL, COUNTER_1_EVENT_SEL };
        ct_output_event_sel, ct_output_and_event, ct_output_or_event =>
            "CT_OUTPUT_EVENT_SEL", "CT_OUTPUT_AND_EVENT", "CT_OUTPUT_OR_EVENT",
            EVENT_SEL { COUNTER_0_EVENT_SEL, COUNTER_1_EVENT_SEL };
        ct_intr_event_sel, ct_intr_and_event, ct_intr_or_event =>
            "CT_INTR_EVENT_SEL", "CT_INTR_AND_EVENT", "CT_INTR_OR_EVENT",
            EVENT_SEL { COUNTER_0_EVENT_SEL, COUNTER_1_EVENT_SEL };
    },
    clusters: &[],
};

pub static MUX_LAYOUT: Layout = layout!(CtMuxRegisters {
    ct_mux_sel[CT_PARAM_NUM_MUX_SEL] => "CT_MUX_SEL": u32, RW, CT_MUX_SEL { CT_MUX_SEL: RW };
    ct_output_event1_adc_sel => "CT_OUTPUT_EVENT1_ADC_SEL": u32, RW, CT_OUTPUT_EVENT_ADC_SEL {
        OUTPUT_EVENT_ADC_SEL: RW
    };
    ct_output_event2_adc_sel => "CT_OUTPUT_EVENT2_ADC_SEL": u32, RW, CT_OUTPUT_EVENT_ADC_SEL {
        OUTPUT_EVENT_ADC_SEL: RW
    };
});

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn chained_counter_halves() {
        let counter: LocalRegisterCopy<u32, CT_COUNTER_REG::Register> =
            LocalRegisterCopy::new(0x1234_abcd);
        assert_eq!(counter.read(CT_COUNTER_REG::COUNTER0), 0xabcd);
        assert_eq!(counter.read(CT_COUNTER_REG::COUNTER1), 0x1234);
    }

    #[test]
    fn up_down_counter_zero() {
        let mut ctrl: LocalRegisterCopy<u32, CT_GEN_CTRL::Register> = LocalRegisterCopy::new(0);
        ctrl.modify(
            CT_GEN_CTRL::COUNTER_IN_32_BIT_MODE::SET + CT_GEN_CTRL::COUNTER_0_UP_DOWN::UpDown,
        );
        assert_eq!(ctrl.get(), 0x21);
    }

    #[test]
    fn event_registers_are_listed_in_address_order() {
        assert_eq!(LAYOUT.registers.len(), 17 + 8 * 3);
        assert!(LAYOUT
            .registers
            .windows(2)
            .all(|pair| pair[0].offset < pair[1].offset));
        let intr_or = LAYOUT.registers.last().unwrap();
        assert_eq!((intr_or.name, intr_or.offset), ("CT_INTR_OR_EVENT", 0xbc));
    }

    #[test]
    fn resume_from_halt_bits() {
        let find = |name| LAYOUT.registers.iter().find(|r| r.name == name).unwrap();
        let halt = find("CT_HALT_COUNTER_EVENT_SEL");
        assert_eq!(halt.offset, 0x84);
        assert_eq!(halt.field("RESUME_FROM_HALT_COUNTER_0").unwrap().mask(), 1 << 6);
        assert_eq!(halt.field("RESUME_FROM_HALT_COUNTER_1").unwrap().mask(), 1 << 22);

        // The other selection registers keep bits 6 and 22 reserved.
        let stop = find("CT_STOP_COUNTER_EVENT_SEL");
        assert_eq!(stop.reserved_mask() & ((1 << 6) | (1 << 22)), (1 << 6) | (1 << 22));

        let ocu = find("CT_OCU_CTRL_REG");
        assert_eq!(ocu.field("OUTPUT_1_IS_OCU").unwrap().offset, 16);
    }
}
