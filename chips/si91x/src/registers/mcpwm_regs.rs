// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Motor control PWM.
//!
//! Four channels, each with its own time base and a complementary output
//! pair (`L` and `H`). The time base of channel 0 sits ahead of the shared
//! duty cycle, dead time and override registers; channels 1 to 3 follow
//! them. Most control registers come in `SET`/`RESET` pairs: writing ones
//! sets or clears the matching bits, reading either returns the current
//! value.

use core::mem::{offset_of, size_of};

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::Layout;

pub const MCPWM_PARAM_CHANNELS: usize = 4;

register_structs! {
    pub McpwmDeadtimeRegisters {
        (0x000 => pub pwm_deadtime_a: ReadWrite<u32, PWM_DEADTIME_A::Register>),
        (0x004 => pub pwm_deadtime_b: ReadWrite<u32, PWM_DEADTIME_B::Register>),
        (0x008 => @END),
    }
}

register_structs! {
    pub McpwmRegisters {
        (0x000 => pub pwm_intr_sts: ReadOnly<u32, PWM_INTR::Register>),
        (0x004 => pub pwm_intr_unmask: WriteOnly<u32, PWM_INTR::Register>),
        (0x008 => pub pwm_intr_mask: WriteOnly<u32, PWM_INTR::Register>),
        (0x00c => pub pwm_intr_ack: WriteOnly<u32, PWM_INTR::Register>),
        (0x010 => _reserved0),
        (0x028 => pub pwm_time_prd_wr_reg_ch0: ReadWrite<u32, PWM_TIME_PRD_WR_REG_CH0::Register>),
        (0x02c => pub pwm_time_prd_cntr_wr_reg_ch0: ReadWrite<u32, PWM_TIME_PRD_CNTR_WR_REG_CH0::Register>),
        (0x030 => pub pwm_time_prd_param_reg_ch0: ReadWrite<u32, PWM_TIME_PRD_PARAM_REG_CH0::Register>),
        (0x034 => pub pwm_time_prd_ctrl_reg_ch0: ReadWrite<u32, PWM_TIME_PRD_CTRL_REG_CH0::Register>),
        (0x038 => pub pwm_time_prd_sts_reg_ch0: ReadOnly<u32, PWM_TIME_PRD_STS_REG_CH0::Register>),
        (0x03c => pub pwm_time_prd_cntr_value_ch0: ReadOnly<u32, PWM_TIME_PRD_CNTR_VALUE_CH0::Register>),
        (0x040 => _reserved1),
        (0x050 => pub pwm_dutycycle_ctrl_set_reg: ReadWrite<u32, PWM_DUTYCYCLE_CTRL::Register>),
        (0x054 => pub pwm_dutycycle_ctrl_reset_reg: ReadWrite<u32, PWM_DUTYCYCLE_CTRL::Register>),
        (0x058 => pub pwm_dutycycle_reg_wr_value: [ReadWrite<u32, PWM_DUTYCYCLE_REG_WR_VALUE::Register>; MCPWM_PARAM_CHANNELS]),
        (0x068 => _reserved2),
        (0x06c => pub pwm_deadtime_ctrl_set_reg: ReadWrite<u32, PWM_DEADTIME_CTRL::Register>),
        (0x070 => pub pwm_deadtime_ctrl_reset_reg: ReadWrite<u32, PWM_DEADTIME_CTRL::Register>),
        (0x074 => pub pwm_deadtime_prescale_select_a: ReadWrite<u32, PWM_DEADTIME_PRESCALE_SELECT_A::Register>),
        (0x078 => pub pwm_deadtime_prescale_select_b: ReadWrite<u32, PWM_DEADTIME_PRESCALE_SELECT_B::Register>),
        (0x07c => pub pwm_deadtime: [McpwmDeadtimeRegisters; MCPWM_PARAM_CHANNELS]),
        (0x09c => pub pwm_op_override_ctrl_set_reg: ReadWrite<u32, PWM_OP_OVERRIDE_CTRL::Register>),
        (0x0a0 => pub pwm_op_override_ctrl_reset_reg: ReadWrite<u32, PWM_OP_OVERRIDE_CTRL::Register>),
        (0x0a4 => pub pwm_op_override_enable_set_reg: ReadWrite<u32, PWM_OUTPUTS::Register>),
        (0x0a8 => pub pwm_op_override_enable_reset_reg: ReadWrite<u32, PWM_OUTPUTS::Register>),
        (0x0ac => pub pwm_op_override_value_set_reg: ReadWrite<u32, PWM_OUTPUTS::Register>),
        (0x0b0 => pub pwm_op_override_value_reset_reg: ReadWrite<u32, PWM_OUTPUTS::Register>),
        (0x0b4 => pub pwm_flt_override_ctrl_set_reg: ReadWrite<u32, PWM_FLT_OVERRIDE_CTRL::Register>),
        (0x0b8 => pub pwm_flt_override_ctrl_reset_reg: ReadWrite<u32, PWM_FLT_OVERRIDE_CTRL::Register>),
        (0x0bc => pub pwm_flt_a_override_value_reg: ReadWrite<u32, PWM_FLT_A_OVERRIDE_VALUE_REG::Register>),
        (0x0c0 => pub pwm_flt_b_override_value_reg: ReadWrite<u32, PWM_FLT_B_OVERRIDE_VALUE_REG::Register>),
        (0x0c4 => pub pwm_svt_ctrl_set_reg: ReadWrite<u32, PWM_SVT_CTRL::Register>),
        (0x0c8 => pub pwm_svt_ctrl_reset_reg: ReadWrite<u32, PWM_SVT_CTRL::Register>),
        (0x0cc => pub pwm_svt_param_reg: ReadWrite<u32, PWM_SVT_PARAM_REG::Register>),
        (0x0d0 => pub pwm_svt_compare_value_reg: ReadWrite<u32, PWM_SVT_COMPARE_VALUE_REG::Register>),
        (0x0d4 => _reserved3),
        (0x0d8 => pub pwm_time_prd_wr_reg_ch1: ReadWrite<u32, PWM_TIME_PRD_WR_REG_CH1::Register>),
        (0x0dc => pub pwm_time_prd_cntr_wr_reg_ch1: ReadWrite<u32, PWM_TIME_PRD_CNTR_WR_REG_CH1::Register>),
        (0x0e0 => pub pwm_time_prd_param_reg_ch1: ReadWrite<u32, PWM_TIME_PRD_PARAM_REG_CH1::Register>),
        (0x0e4 => pub pwm_time_prd_ctrl_reg_ch1: ReadWrite<u32, PWM_TIME_PRD_CTRL_REG_CH1::Register>),
        (0x0e8 => pub pwm_time_prd_sts_reg_ch1: ReadOnly<u32, PWM_TIME_PRD_STS_REG_CH1::Register>),
        (0x0ec => pub pwm_time_prd_cntr_value_ch1: ReadOnly<u32, PWM_TIME_PRD_CNTR_VALUE_CH1::Register>),
        (0x0f0 => pub pwm_time_prd_wr_reg_ch2: ReadWrite<u32, PWM_TIME_PRD_WR_REG_CH2::Register>),
        (0x0f4 => pub pwm_time_prd_cntr_wr_reg_ch2: ReadWrite<u32, PWM_TIME_PRD_CNTR_WR_REG_CH2::Register>),
        (0x0f8 => pub pwm_time_prd_param_reg_ch2: ReadWrite<u32, PWM_TIME_PRD_PARAM_REG_CH2::Register>),
        (0x0fc => pub pwm_time_prd_ctrl_reg_ch2: ReadWrite<u32, PWM_TIME_PRD_CTRL_REG_CH2::Register>),
        (0x100 => pub pwm_time_prd_sts_reg_ch2: ReadOnly<u32, PWM_TIME_PRD_STS_REG_CH2::Register>),
        (0x104 => pub pwm_time_prd_cntr_value_ch2: ReadOnly<u32, PWM_TIME_PRD_CNTR_VALUE_CH2::Register>),
        (0x108 => pub pwm_time_prd_wr_reg_ch3: ReadWrite<u32, PWM_TIME_PRD_WR_REG_CH3::Register>),
        (0x10c => pub pwm_time_prd_cntr_wr_reg_ch3: ReadWrite<u32, PWM_TIME_PRD_CNTR_WR_REG_CH3::Register>),
        (0x110 => pub pwm_time_prd_param_reg_ch3: ReadWrite<u32, PWM_TIME_PRD_PARAM_REG_CH3::Register>),
        (0x114 => pub pwm_time_prd_ctrl_reg_ch3: ReadWrite<u32, PWM_TIME_PRD_CTRL_REG_CH3::Register>),
        (0x118 => pub pwm_time_prd_sts_reg_ch3: ReadOnly<u32, PWM_TIME_PRD_STS_REG_CH3::Register>),
        (0x11c => pub pwm_time_prd_cntr_value_ch3: ReadOnly<u32, PWM_TIME_PRD_CNTR_VALUE_CH3::Register>),
        (0x120 => pub pwm_time_prd_common_reg: ReadWrite<u32, PWM_TIME_PRD_COMMON_REG::Register>),
        (0x124 => @END),
    }
}

register_bitfields![u32,
    pub PWM_INTR [
        /// Time base match before the postscaler
        RISE_TIME_PERIOD_MATCH_CH0 OFFSET(0) NUMBITS(1) [],
        TIME_PERIOD_MATCH_CH0 OFFSET(1) NUMBITS(1) [],
        FLT_A OFFSET(2) NUMBITS(1) [],
        FLT_B OFFSET(3) NUMBITS(1) [],
        RISE_TIME_PERIOD_MATCH_CH1 OFFSET(4) NUMBITS(1) [],
        TIME_PERIOD_MATCH_CH1 OFFSET(5) NUMBITS(1) [],
        RISE_TIME_PERIOD_MATCH_CH2 OFFSET(6) NUMBITS(1) [],
        TIME_PERIOD_MATCH_CH2 OFFSET(7) NUMBITS(1) [],
        RISE_TIME_PERIOD_MATCH_CH3 OFFSET(8) NUMBITS(1) [],
        TIME_PERIOD_MATCH_CH3 OFFSET(9) NUMBITS(1) []
    ],
    pub PWM_TIME_PRD_WR_REG_CH0 [
        PWM_TIME_PRD_REG_WR_VALUE_CH0 OFFSET(0) NUMBITS(16) []
    ],
    pub PWM_TIME_PRD_CNTR_WR_REG_CH0 [
        PWM_TIME_PRD_CNTR_WR_REG_CH0 OFFSET(0) NUMBITS(16) []
    ],
    pub PWM_TIME_PRD_PARAM_REG_CH0 [
        TMR_OPEARATING_MODE_CH0 OFFSET(0) NUMBITS(3) [
            FreeRunning = 0,
            SingleEvent = 1,
            ContinuousUpDown = 2,
            DoubleUpdateUpDown = 3
        ],
        PWM_TIME_PRD_PRE_SCALAR_VALUE_CH0 OFFSET(4) NUMBITS(3) [],
        PWM_TIME_PRD_POST_SCALAR_VALUE_CH0 OFFSET(8) NUMBITS(4) []
    ],
    pub PWM_TIME_PRD_CTRL_REG_CH0 [
        PWM_SFT_RST OFFSET(0) NUMBITS(1) [],
        PWM_TIME_PRD_CNTR_RST_FRM_REG OFFSET(1) NUMBITS(1) [],
        PWM_TIME_BASE_EN_FRM_REG_CH0 OFFSET(2) NUMBITS(1) []
    ],
    pub PWM_TIME_PRD_STS_REG_CH0 [
        /// Set while counting down
        PWM_TIME_PRD_DIR_STS_CH0 OFFSET(0) NUMBITS(1) []
    ],
    pub PWM_TIME_PRD_CNTR_VALUE_CH0 [
        PWM_TIME_PRD_CNTR_VALUE_CH0 OFFSET(0) NUMBITS(16) []
    ],
    pub PWM_TIME_PRD_WR_REG_CH1 [
        PWM_TIME_PRD_REG_WR_VALUE_CH1 OFFSET(0) NUMBITS(16) []
    ],
    pub PWM_TIME_PRD_CNTR_WR_REG_CH1 [
        PWM_TIME_PRD_CNTR_WR_REG_CH1 OFFSET(0) NUMBITS(16) []
    ],
    pub PWM_TIME_PRD_PARAM_REG_CH1 [
        TMR_OPEARATING_MODE_CH1 OFFSET(0) NUMBITS(3) [
            FreeRunning = 0,
            SingleEvent = 1,
            ContinuousUpDown = 2,
            DoubleUpdateUpDown = 3
        ],
        PWM_TIME_PRD_PRE_SCALAR_VALUE_CH1 OFFSET(4) NUMBITS(3) [],
        PWM_TIME_PRD_POST_SCALAR_VALUE_CH1 OFFSET(8) NUMBITS(4) []
    ],
    pub PWM_TIME_PRD_CTRL_REG_CH1 [
        PWM_SFT_RST OFFSET(0) NUMBITS(1) [],
        PWM_TIME_PRD_CNTR_RST_FRM_REG OFFSET(1) NUMBITS(1) [],
        PWM_TIME_BASE_EN_FRM_REG_CH1 OFFSET(2) NUMBITS(1) []
    ],
    pub PWM_TIME_PRD_STS_REG_CH1 [
        PWM_TIME_PRD_DIR_STS_CH1 OFFSET(0) NUMBITS(1) []
    ],
    pub PWM_TIME_PRD_CNTR_VALUE_CH1 [
        PWM_TIME_PRD_CNTR_VALUE_CH1 OFFSET(0) NUMBITS(16) []
    ],
    pub PWM_TIME_PRD_WR_REG_CH2 [
        PWM_TIME_PRD_REG_WR_VALUE_CH2 OFFSET(0) NUMBITS(16) []
    ],
    pub PWM_TIME_PRD_CNTR_WR_REG_CH2 [
        PWM_TIME_PRD_CNTR_WR_REG_CH2 OFFSET(0) NUMBITS(16) []
    ],
    pub PWM_TIME_PRD_PARAM_REG_CH2 [
        TMR_OPEARATING_MODE_CH2 OFFSET(0) NUMBITS(3) [
            FreeRunning = 0,
            SingleEvent = 1,
            ContinuousUpDown = 2,
            DoubleUpdateUpDown = 3
        ],
        PWM_TIME_PRD_PRE_SCALAR_VALUE_CH2 OFFSET(4) NUMBITS(3) [],
        PWM_TIME_PRD_POST_SCALAR_VALUE_CH2 OFFSET(8) NUMBITS(4) []
    ],
    pub PWM_TIME_PRD_CTRL_REG_CH2 [
        PWM_SFT_RST OFFSET(0) NUMBITS(1) [],
        PWM_TIME_PRD_CNTR_RST_FRM_REG OFFSET(1) NUMBITS(1) [],
        PWM_TIME_BASE_EN_FRM_REG_CH2 OFFSET(2) NUMBITS(1) []
    ],
    pub PWM_TIME_PRD_STS_REG_CH2 [
        PWM_TIME_PRD_DIR_STS_CH2 OFFSET(0) NUMBITS(1) []
    ],
    pub PWM_TIME_PRD_CNTR_VALUE_CH2 [
        PWM_TIME_PRD_CNTR_VALUE_CH2 OFFSET(0) NUMBITS(16) []
    ],
    pub PWM_TIME_PRD_WR_REG_CH3 [
        PWM_TIME_PRD_REG_WR_VALUE_CH3 OFFSET(0) NUMBITS(16) []
    ],
    pub PWM_TIME_PRD_CNTR_WR_REG_CH3 [
        PWM_TIME_PRD_CNTR_WR_REG_CH3 OFFSET(0) NUMBITS(16) []
    ],
    pub PWM_TIME_PRD_PARAM_REG_CH3 [
        TMR_OPEARATING_MODE_CH3 OFFSET(0) NUMBITS(3) [
            FreeRunning = 0,
            SingleEvent = 1,
            ContinuousUpDown = 2,
            DoubleUpdateUpDown = 3
        ],
        PWM_TIME_PRD_PRE_SCALAR_VALUE_CH3 OFFSET(4) NUMBITS(3) [],
        PWM_TIME_PRD_POST_SCALAR_VALUE_CH3 OFFSET(8) NUMBITS(4) []
    ],
    pub PWM_TIME_PRD_CTRL_REG_CH3 [
        PWM_SFT_RST OFFSET(0) NUMBITS(1) [],
        PWM_TIME_PRD_CNTR_RST_FRM_REG OFFSET(1) NUMBITS(1) [],
        PWM_TIME_BASE_EN_FRM_REG_CH3 OFFSET(2) NUMBITS(1) []
    ],
    pub PWM_TIME_PRD_STS_REG_CH3 [
        PWM_TIME_PRD_DIR_STS_CH3 OFFSET(0) NUMBITS(1) []
    ],
    pub PWM_TIME_PRD_CNTR_VALUE_CH3 [
        PWM_TIME_PRD_CNTR_VALUE_CH3 OFFSET(0) NUMBITS(16) []
    ],
    pub PWM_DUTYCYCLE_CTRL [
        IMDT_DUTYCYCLE_UPDATE_EN OFFSET(0) NUMBITS(4) [],
        DUTYCYCLE_UPDATE_DISABLE OFFSET(4) NUMBITS(4) []
    ],
    pub PWM_DUTYCYCLE_REG_WR_VALUE [
        PWM_DUTYCYCLE_REG_WR_VALUE_CH OFFSET(0) NUMBITS(16) []
    ],
    pub PWM_DEADTIME_CTRL [
        DEADTIME_SELECT_ACTIVE OFFSET(0) NUMBITS(4) [],
        DEADTIME_SELECT_INACTIVE OFFSET(4) NUMBITS(4) [],
        DEADTIME_DISABLE_FRM_REG OFFSET(8) NUMBITS(4) []
    ],
    pub PWM_DEADTIME_PRESCALE_SELECT_A [
        DEADTIME_PRESCALE_SELECT_A OFFSET(0) NUMBITS(8) []
    ],
    pub PWM_DEADTIME_PRESCALE_SELECT_B [
        DEADTIME_PRESCALE_SELECT_B OFFSET(0) NUMBITS(8) []
    ],
    pub PWM_DEADTIME_A [
        DEADTIME_A_CH OFFSET(0) NUMBITS(6) []
    ],
    pub PWM_DEADTIME_B [
        DEADTIME_B_CH OFFSET(0) NUMBITS(6) []
    ],
    pub PWM_OP_OVERRIDE_CTRL [
        OP_OVERRIDE_SYNC OFFSET(0) NUMBITS(1) []
    ],
    /// One bit per output: L0 to L3, then H0 to H3.
    pub PWM_OUTPUTS [
        L0 OFFSET(0) NUMBITS(1) [],
        L1 OFFSET(1) NUMBITS(1) [],
        L2 OFFSET(2) NUMBITS(1) [],
        L3 OFFSET(3) NUMBITS(1) [],
        H0 OFFSET(4) NUMBITS(1) [],
        H1 OFFSET(5) NUMBITS(1) [],
        H2 OFFSET(6) NUMBITS(1) [],
        H3 OFFSET(7) NUMBITS(1) []
    ],
    pub PWM_FLT_OVERRIDE_CTRL [
        FLT_A_MODE OFFSET(0) NUMBITS(1) [
            Latched = 0,
            CycleByCycle = 1
        ],
        FLT_B_MODE OFFSET(1) NUMBITS(1) [
            Latched = 0,
            CycleByCycle = 1
        ],
        OP_POLARITY_H OFFSET(2) NUMBITS(1) [],
        OP_POLARITY_L OFFSET(3) NUMBITS(1) [],
        FLT_A_ENABLE OFFSET(4) NUMBITS(4) [],
        FLT_B_ENABLE OFFSET(8) NUMBITS(4) []
    ],
    pub PWM_FLT_A_OVERRIDE_VALUE_REG [
        PWM_FLT_A_OVERRIDE_VALUE_L0 OFFSET(0) NUMBITS(1) [],
        PWM_FLT_A_OVERRIDE_VALUE_L1 OFFSET(1) NUMBITS(1) [],
        PWM_FLT_A_OVERRIDE_VALUE_L2 OFFSET(2) NUMBITS(1) [],
        PWM_FLT_A_OVERRIDE_VALUE_L3 OFFSET(3) NUMBITS(1) [],
        PWM_FLT_A_OVERRIDE_VALUE_H0 OFFSET(4) NUMBITS(1) [],
        PWM_FLT_A_OVERRIDE_VALUE_H1 OFFSET(5) NUMBITS(1) [],
        PWM_FLT_A_OVERRIDE_VALUE_H2 OFFSET(6) NUMBITS(1) [],
        PWM_FLT_A_OVERRIDE_VALUE_H3 OFFSET(7) NUMBITS(1) []
    ],
    pub PWM_FLT_B_OVERRIDE_VALUE_REG [
        PWM_FLT_B_OVERRIDE_VALUE_L0 OFFSET(0) NUMBITS(1) [],
        PWM_FLT_B_OVERRIDE_VALUE_L1 OFFSET(1) NUMBITS(1) [],
        PWM_FLT_B_OVERRIDE_VALUE_L2 OFFSET(2) NUMBITS(1) [],
        PWM_FLT_B_OVERRIDE_VALUE_L3 OFFSET(3) NUMBITS(1) [],
        PWM_FLT_B_OVERRIDE_VALUE_H0 OFFSET(4) NUMBITS(1) [],
        PWM_FLT_B_OVERRIDE_VALUE_H1 OFFSET(5) NUMBITS(1) [],
        PWM_FLT_B_OVERRIDE_VALUE_H2 OFFSET(6) NUMBITS(1) [],
        PWM_FLT_B_OVERRIDE_VALUE_H3 OFFSET(7) NUMBITS(1) []
    ],
    pub PWM_SVT_CTRL [
        SVT_ENABLE_FRM OFFSET(0) NUMBITS(1) [],
        SVT_DIRECTION_FRM OFFSET(1) NUMBITS(1) []
    ],
    pub PWM_SVT_PARAM_REG [
        SVT_POSTSCALER_SELECT OFFSET(0) NUMBITS(4) []
    ],
    pub PWM_SVT_COMPARE_VALUE_REG [
        PWM_SVT_COMPARE_VALUE OFFSET(0) NUMBITS(16) []
    ],
    pub PWM_TIME_PRD_COMMON_REG [
        PWM_TIME_PRD_USE_0TH_TIMER_ONLY OFFSET(0) NUMBITS(1) [],
        PWM_TIME_PRD_COMMON_TIMER_VALUE OFFSET(1) NUMBITS(2) [],
        USE_EXT_TIMER_TRIG_FRM_REG OFFSET(3) NUMBITS(1) []
    ]
];

const _: () = assert!(offset_of!(McpwmRegisters, pwm_time_prd_wr_reg_ch0) == 0x28);
const _: () = assert!(offset_of!(McpwmRegisters, pwm_dutycycle_reg_wr_value) == 0x58);
const _: () = assert!(offset_of!(McpwmRegisters, pwm_deadtime) == 0x7c);
const _: () = assert!(offset_of!(McpwmRegisters, pwm_time_prd_wr_reg_ch1) == 0xd8);
const _: () = assert!(size_of::<McpwmRegisters>() == 0x124);

pub static LAYOUT: Layout = layout!(McpwmRegisters {
    pwm_intr_sts => "PWM_INTR_STS": u32, RO, PWM_INTR {
        RISE_TIME_PERIOD_MATCH_CH0: RO, TIME_PERIOD_MATCH_CH0: RO, FLT_A: RO, FLT_B: RO,
        RISE_TIME_PERIOD_MATCH_CH1: RO, TIME_PERIOD_MATCH_CH1: RO, RISE_TIME_PERIOD_MATCH_CH2: RO,
        TIME_PERIOD_MATCH_CH2: RO, RISE_TIME_PERIOD_MATCH_CH3: RO, TIME_PERIOD_MATCH_CH3: RO
    };
    pwm_intr_unmask => "PWM_INTR_UNMASK": u32, WO, PWM_INTR {
        RISE_TIME_PERIOD_MATCH_CH0: WO, TIME_PERIOD_MATCH_CH0: WO, FLT_A: WO, FLT_B: WO,
        RISE_TIME_PERIOD_MATCH_CH1: WO, TIME_PERIOD_MATCH_CH1: WO, RISE_TIME_PERIOD_MATCH_CH2: WO,
        TIME_PERIOD_MATCH_CH2: WO, RISE_TIME_PERIOD_MATCH_CH3: WO, TIME_PERIOD_MATCH_CH3: WO
    };
    pwm_intr_mask => "PWM_INTR_MASK": u32, WO, PWM_INTR {
        RISE_TIME_PERIOD_MATCH_CH0: WO, TIME_PERIOD_MATCH_CH0: WO, FLT_A: WO, FLT_B: WO,
        RISE_TIME_PERIOD_MATCH_CH1: WO, TIME_PERIOD_MATCH_CH1: WO, RISE_TIME_PERIOD_MATCH_CH2: WO,
        TIME_PERIOD_MATCH_CH2: WO, RISE_TIME_PERIOD_MATCH_CH3: WO, TIME_PERIOD_MATCH_CH3: WO
    };
    pwm_intr_ack => "PWM_INTR_ACK": u32, WO, PWM_INTR {
        RISE_TIME_PERIOD_MATCH_CH0: WO, TIME_PERIOD_MATCH_CH0: WO, FLT_A: WO, FLT_B: WO,
        RISE_TIME_PERIOD_MATCH_CH1: WO, TIME_PERIOD_MATCH_CH1: WO, RISE_TIME_PERIOD_MATCH_CH2: WO,
        TIME_PERIOD_MATCH_CH2: WO, RISE_TIME_PERIOD_MATCH_CH3: WO, TIME_PERIOD_MATCH_CH3: WO
    };
    pwm_time_prd_wr_reg_ch0 => "PWM_TIME_PRD_WR_REG_CH0": u32, RW, PWM_TIME_PRD_WR_REG_CH0 {
        PWM_TIME_PRD_REG_WR_VALUE_CH0: RW
    };
    pwm_time_prd_cntr_wr_reg_ch0 => "PWM_TIME_PRD_CNTR_WR_REG_CH0": u32, RW,
        PWM_TIME_PRD_CNTR_WR_REG_CH0 { PWM_TIME_PRD_CNTR_WR_REG_CH0: RW };
    pwm_time_prd_param_reg_ch0 => "PWM_TIME_PRD_PARAM_REG_CH0": u32, RW, PWM_TIME_PRD_PARAM_REG_CH0 {
        TMR_OPEARATING_MODE_CH0: RW, PWM_TIME_PRD_PRE_SCALAR_VALUE_CH0: RW,
        PWM_TIME_PRD_POST_SCALAR_VALUE_CH0: RW
    };
    pwm_time_prd_ctrl_reg_ch0 => "PWM_TIME_PRD_CTRL_REG_CH0": u32, RW, PWM_TIME_PRD_CTRL_REG_CH0 {
        PWM_SFT_RST: RW, PWM_TIME_PRD_CNTR_RST_FRM_REG: RW, PWM_TIME_BASE_EN_FRM_REG_CH0: RW
    };
    pwm_time_prd_sts_reg_ch0 => "PWM_TIME_PRD_STS_REG_CH0": u32, RO, PWM_TIME_PRD_STS_REG_CH0 {
        PWM_TIME_PRD_DIR_STS_CH0: RO
    };
    pwm_time_prd_cntr_value_ch0 => "PWM_TIME_PRD_CNTR_VALUE_CH0": u32, RO, PWM_TIME_PRD_CNTR_VALUE_CH0 {
        PWM_TIME_PRD_CNTR_VALUE_CH0: RO
    };
    pwm_dutycycle_ctrl_set_reg => "PWM_DUTYCYCLE_CTRL_SET_REG": u32, RW, PWM_DUTYCYCLE_CTRL {
        IMDT_DUTYCYCLE_UPDATE_EN: RW, DUTYCYCLE_UPDATE_DISABLE: RW
    };
    pwm_dutycycle_ctrl_reset_reg => "PWM_DUTYCYCLE_CTRL_RESET_REG": u32, RW, PWM_DUTYCYCLE_CTRL {
        IMDT_DUTYCYCLE_UPDATE_EN: RW, DUTYCYCLE_UPDATE_DISABLE: RW
    };
    pwm_dutycycle_reg_wr_value[MCPWM_PARAM_CHANNELS] => "PWM_DUTYCYCLE_REG_WR_VALUE": u32, RW,
        PWM_DUTYCYCLE_REG_WR_VALUE { PWM_DUTYCYCLE_REG_WR_VALUE_CH: RW };
    pwm_deadtime_ctrl_set_reg => "PWM_DEADTIME_CTRL_SET_REG": u32, RW, PWM_DEADTIME_CTRL {
        DEADTIME_SELECT_ACTIVE: RW, DEADTIME_SELECT_INACTIVE: RW, DEADTIME_DISABLE_FRM_REG: RW
    };
    pwm_deadtime_ctrl_reset_reg => "PWM_DEADTIME_CTRL_RESET_REG": u32, RW, PWM_DEADTIME_CTRL {
        DEADTIME_SELECT_ACTIVE: RW, DEADTIME_SELECT_INACTIVE: RW, DEADTIME_DISABLE_FRM_REG: RW
    };
    pwm_deadtime_prescale_select_a => "PWM_DEADTIME_PRESCALE_SELECT_A": u32, RW,
        PWM_DEADTIME_PRESCALE_SELECT_A { DEADTIME_PRESCALE_SELECT_A: RW };
    pwm_deadtime_prescale_select_b => "PWM_DEADTIME_PRESCALE_SELECT_B": u32, RW,
        PWM_DEADTIME_PRESCALE_SELECT_B { DEADTIME_PRESCALE_SELECT_B: RW };
    pwm_op_override_ctrl_set_reg => "PWM_OP_OVERRIDE_CTRL_SET_REG": u32, RW, PWM_OP_OVERRIDE_CTRL {
        OP_OVERRIDE_SYNC: RW
    };
    pwm_op_override_ctrl_reset_reg => "PWM_OP_OVERRIDE_CTRL_RESET_REG": u32, RW, PWM_OP_OVERRIDE_CTRL {
        OP_OVERRIDE_SYNC: RW
    };
    pwm_op_override_enable_set_reg => "PWM_OP_OVERRIDE_ENABLE_SET_REG": u32, RW, PWM_OUTPUTS {
        L0: RW, L1: RW, L2: RW, L3: RW, H0: RW, H1: RW, H2: RW, H3: RW
    };
    pwm_op_override_enable_reset_reg => "PWM_OP_OVERRIDE_ENABLE_RESET_REG": u32, RW, PWM_OUTPUTS {
        L0: RW, L1: RW, L2: RW, L3: RW, H0: RW, H1: RW, H2: RW, H3: RW
    };
    pwm_op_override_value_set_reg => "PWM_OP_OVERRIDE_VALUE_SET_REG": u32, RW, PWM_OUTPUTS {
        L0: RW, L1: RW, L2: RW, L3: RW, H0: RW, H1: RW, H2: RW, H3: RW
    };
    pwm_op_override_value_reset_reg => "PWM_OP_OVERRIDE_VALUE_RESET_REG": u32, RW, PWM_OUTPUTS {
        L0: RW, L1: RW, L2: RW, L3: RW, H0: RW, H1: RW, H2: RW, H3: RW
    };
    pwm_flt_override_ctrl_set_reg => "PWM_FLT_OVERRIDE_CTRL_SET_REG": u32, RW, PWM_FLT_OVERRIDE_CTRL {
        FLT_A_MODE: RW, FLT_B_MODE: RW, OP_POLARITY_H: RW, OP_POLARITY_L: RW, FLT_A_ENABLE: RW,
        FLT_B_ENABLE: RW
    };
    pwm_flt_override_ctrl_reset_reg => "PWM_FLT_OVERRIDE_CTRL_RESET_REG": u32, RW, PWM_FLT_OVERRIDE_CTRL {
        FLT_A_MODE: RW, FLT_B_MODE: RW, OP_POLARITY_H: RW, OP_POLARITY_L: RW, FLT_A_ENABLE: RW,
        FLT_B_ENABLE: RW
    };
    pwm_flt_a_override_value_reg => "PWM_FLT_A_OVERRIDE_VALUE_REG": u32, RW, PWM_FLT_A_OVERRIDE_VALUE_REG {
        PWM_FLT_A_OVERRIDE_VALUE_L0: RW, PWM_FLT_A_OVERRIDE_VALUE_L1: RW,
        PWM_FLT_A_OVERRIDE_VALUE_L2: RW, PWM_FLT_A_OVERRIDE_VALUE_L3: RW,
        PWM_FLT_A_OVERRIDE_VALUE_H0: RW, PWM_FLT_A_OVERRIDE_VALUE_H1: RW,
        PWM_FLT_A_OVERRIDE_VALUE_H2: RW, PWM_FLT_A_OVERRIDE_VALUE_H3: RW
    };
    pwm_flt_b_override_value_reg => "PWM_FLT_B_OVERRIDE_VALUE_REG": u32, RW, PWM_FLT_B_OVERRIDE_VALUE_REG {
        PWM_FLT_B_OVERRIDE_VALUE_L0: RW, PWM_FLT_B_OVERRIDE_VALUE_L1: RW,
        PWM_FLT_B_OVERRIDE_VALUE_L2: RW, PWM_FLT_B_OVERRIDE_VALUE_L3: RW,
        PWM_FLT_B_OVERRIDE_VALUE_H0: RW, PWM_FLT_B_OVERRIDE_VALUE_H1: RW,
        PWM_FLT_B_OVERRIDE_VALUE_H2: RW, PWM_FLT_B_OVERRIDE_VALUE_H3: RW
    };
    pwm_svt_ctrl_set_reg => "PWM_SVT_CTRL_SET_REG": u32, RW, PWM_SVT_CTRL {
        SVT_ENABLE_FRM: RW, SVT_DIRECTION_FRM: RW
    };
    pwm_svt_ctrl_reset_reg => "PWM_SVT_CTRL_RESET_REG": u32, RW, PWM_SVT_CTRL {
        SVT_ENABLE_FRM: RW, SVT_DIRECTION_FRM: RW
    };
    pwm_svt_param_reg => "PWM_SVT_PARAM_REG": u32, RW, PWM_SVT_PARAM_REG { SVT_POSTSCALER_SELECT: RW };
    pwm_svt_compare_value_reg => "PWM_SVT_COMPARE_VALUE_REG": u32, RW, PWM_SVT_COMPARE_VALUE_REG {
        PWM_SVT_COMPARE_VALUE: RW
    };
    pwm_time_prd_wr_reg_ch1 => "PWM_TIME_PRD_WR_REG_CH1": u32, RW, PWM_TIME_PRD_WR_REG_CH1 {
        PWM_TIME_PRD_REG_WR_VALUE_CH1: RW
    };
    pwm_time_prd_cntr_wr_reg_ch1 => "PWM_TIME_PRD_CNTR_WR_REG_CH1": u32, RW,
        PWM_TIME_PRD_CNTR_WR_REG_CH1 { PWM_TIME_PRD_CNTR_WR_REG_CH1: RW };
    pwm_time_prd_param_reg_ch1 => "PWM_TIME_PRD_PARAM_REG_CH1": u32, RW, PWM_TIME_PRD_PARAM_REG_CH1 {
        TMR_OPEARATING_MODE_CH1: RW, PWM_TIME_PRD_PRE_SCALAR_VALUE_CH1: RW,
        PWM_TIME_PRD_POST_SCALAR_VALUE_CH1: RW
    };
    pwm_time_prd_ctrl_reg_ch1 => "PWM_TIME_PRD_CTRL_REG_CH1": u32, RW, PWM_TIME_PRD_CTRL_REG_CH1 {
        PWM_SFT_RST: RW, PWM_TIME_PRD_CNTR_RST_FRM_REG: RW, PWM_TIME_BASE_EN_FRM_REG_CH1: RW
    };
    pwm_time_prd_sts_reg_ch1 => "PWM_TIME_PRD_STS_REG_CH1": u32, RO, PWM_TIME_PRD_STS_REG_CH1 {
        PWM_TIME_PRD_DIR_STS_CH1: RO
    };
    pwm_time_prd_cntr_value_ch1 => "PWM_TIME_PRD_CNTR_VALUE_CH1": u32, RO, PWM_TIME_PRD_CNTR_VALUE_CH1 {
        PWM_TIME_PRD_CNTR_VALUE_CH1: RO
    };
    pwm_time_prd_wr_reg_ch2 => "PWM_TIME_PRD_WR_REG_CH2": u32, RW, PWM_TIME_PRD_WR_REG_CH2 {
        PWM_TIME_PRD_REG_WR_VALUE_CH2: RW
    };
    pwm_time_prd_cntr_wr_reg_ch2 => "PWM_TIME_PRD_CNTR_WR_REG_CH2": u32, RW,
        PWM_TIME_PRD_CNTR_WR_REG_CH2 { PWM_TIME_PRD_CNTR_WR_REG_CH2: RW };
    pwm_time_prd_param_reg_ch2 => "PWM_TIME_PRD_PARAM_REG_CH2": u32, RW, PWM_TIME_PRD_PARAM_REG_CH2 {
        TMR_OPEARATING_MODE_CH2: RW, PWM_TIME_PRD_PRE_SCALAR_VALUE_CH2: RW,
        PWM_TIME_PRD_POST_SCALAR_VALUE_CH2: RW
    };
    pwm_time_prd_ctrl_reg_ch2 => "PWM_TIME_PRD_CTRL_REG_CH2": u32, RW, PWM_TIME_PRD_CTRL_REG_CH2 {
        PWM_SFT_RST: RW, PWM_TIME_PRD_CNTR_RST_FRM_REG: RW, PWM_TIME_BASE_EN_FRM_REG_CH2: RW
    };
    pwm_time_prd_sts_reg_ch2 => "PWM_TIME_PRD_STS_REG_CH2": u32, RO, PWM_TIME_PRD_STS_REG_CH2 {
        PWM_TIME_PRD_DIR_STS_CH2: RO
    };
    pwm_time_prd_cntr_value_ch2 => "PWM_TIME_PRD_CNTR_VALUE_CH2": u32, RO, PWM_TIME_PRD_CNTR_VALUE_CH2 {
        PWM_TIME_PRD_CNTR_VALUE_CH2: RO
    };
    pwm_time_prd_wr_reg_ch3 => "PWM_TIME_PRD_WR_REG_CH3": u32, RW, PWM_TIME_PRD_WR_REG_CH3 {
        PWM_TIME_PRD_REG_WR_VALUE_CH3: RW
    };
    pwm_time_prd_cntr_wr_reg_ch3 => "PWM_TIME_PRD_CNTR_WR_REG_CH3": u32, RW,
        PWM_TIME_PRD_CNTR_WR_REG_CH3 { PWM_TIME_PRD_CNTR_WR_REG_CH3: RW };
    pwm_time_prd_param_reg_ch3 => "PWM_TIME_PRD_PARAM_REG_CH3": u32, RW, PWM_TIME_PRD_PARAM_REG_CH3 {
        TMR_OPEARATING_MODE_CH3: RW, PWM_TIME_PRD_PRE_SCALAR_VALUE_CH3: RW,
        PWM_TIME_PRD_POST_SCALAR_VALUE_CH3: RW
    };
    pwm_time_prd_ctrl_reg_ch3 => "PWM_TIME_PRD_CTRL_REG_CH3": u32, RW, PWM_TIME_PRD_CTRL_REG_CH3 {
        PWM_SFT_RST: RW, PWM_TIME_PRD_CNTR_RST_FRM_REG: RW, PWM_TIME_BASE_EN_FRM_REG_CH3: RW
    };
    pwm_time_prd_sts_reg_ch3 => "PWM_TIME_PRD_STS_REG_CH3": u32, RO, PWM_TIME_PRD_STS_REG_CH3 {
        PWM_TIME_PRD_DIR_STS_CH3: RO
    };
    pwm_time_prd_cntr_value_ch3 => "PWM_TIME_PRD_CNTR_VALUE_CH3": u32, RO, PWM_TIME_PRD_CNTR_VALUE_CH3 {
        PWM_TIME_PRD_CNTR_VALUE_CH3: RO
    };
    pwm_time_prd_common_reg => "PWM_TIME_PRD_COMMON_REG": u32, RW, PWM_TIME_PRD_COMMON_REG {
        PWM_TIME_PRD_USE_0TH_TIMER_ONLY: RW, PWM_TIME_PRD_COMMON_TIMER_VALUE: RW,
        USE_EXT_TIMER_TRIG_FRM_REG: RW
    };
} clusters {
    pwm_deadtime[MCPWM_PARAM_CHANNELS] => "PWM_DEADTIME": McpwmDeadtimeRegisters {
        pwm_deadtime_a => "PWM_DEADTIME_A": u32, RW, PWM_DEADTIME_A { DEADTIME_A_CH: RW };
        pwm_deadtime_b => "PWM_DEADTIME_B": u32, RW, PWM_DEADTIME_B { DEADTIME_B_CH: RW };
    };
});

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn duty_cycle_per_channel() {
        let duty = LAYOUT
            .registers
            .iter()
            .find(|register| register.name == "PWM_DUTYCYCLE_REG_WR_VALUE")
            .unwrap();
        assert_eq!(duty.count, 4);
        assert_eq!(duty.element_offset(3), Ok(0x64));
    }

    #[test]
    fn deadtime_cluster() {
        let deadtime = &LAYOUT.clusters[0];
        assert_eq!((deadtime.offset, deadtime.stride, deadtime.count), (0x7c, 8, 4));
        let b = deadtime.register("PWM_DEADTIME_B").unwrap();
        assert_eq!(deadtime.element_offset(2).unwrap() + b.offset, 0x90);
    }

    #[test]
    fn fault_b_cycle_by_cycle() {
        let mut ctrl: LocalRegisterCopy<u32, PWM_FLT_OVERRIDE_CTRL::Register> =
            LocalRegisterCopy::new(0);
        ctrl.modify(
            PWM_FLT_OVERRIDE_CTRL::FLT_B_MODE::CycleByCycle
                + PWM_FLT_OVERRIDE_CTRL::FLT_B_ENABLE.val(1),
        );
        assert_eq!(ctrl.get(), 0x102);
    }

    #[test]
    fn time_base_fields_carry_the_channel() {
        for (channel, offset) in [(0, 0x30), (1, 0xe0), (2, 0xf8), (3, 0x110)] {
            let name = format!("PWM_TIME_PRD_PARAM_REG_CH{}", channel);
            let param = LAYOUT.register(&name).unwrap();
            assert_eq!(param.offset, offset);
            let mode = param
                .field(&format!("TMR_OPEARATING_MODE_CH{}", channel))
                .unwrap();
            assert_eq!((mode.offset, mode.width), (0, 3));
        }

        let mut ctrl: LocalRegisterCopy<u32, PWM_TIME_PRD_CTRL_REG_CH2::Register> =
            LocalRegisterCopy::new(0);
        ctrl.modify(PWM_TIME_PRD_CTRL_REG_CH2::PWM_TIME_BASE_EN_FRM_REG_CH2::SET);
        assert_eq!(ctrl.get(), 0b100);

        let period = LAYOUT.register("PWM_TIME_PRD_WR_REG_CH3").unwrap();
        assert!(period.field("PWM_TIME_PRD_REG_WR_VALUE_CH3").is_ok());
        assert!(period.field("PWM_TIME_PRD_REG_WR_VALUE").is_err());
    }
}
