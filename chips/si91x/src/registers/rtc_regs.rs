// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Calendar (RTC) and the low power clock calibration block (TIME_PERIOD).
//!
//! Both live in the always-on domain. TIME_PERIOD measures the RC and RO
//! oscillators against the reference clock; the resulting period feeds the
//! calendar tick.

use core::mem::offset_of;

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::Layout;

register_structs! {
    pub RtcRegisters {
        (0x000 => pub mcu_cal_alarm_prog_1: ReadWrite<u32, MCU_CAL_ALARM_PROG_1::Register>),
        (0x004 => pub mcu_cal_alarm_prog_2: ReadWrite<u32, MCU_CAL_ALARM_PROG_2::Register>),
        (0x008 => pub mcu_cal_powergate_reg: ReadWrite<u32, MCU_CAL_POWERGATE_REG::Register>),
        (0x00c => pub mcu_cal_prog_time_1: ReadWrite<u32, MCU_CAL_PROG_TIME_1::Register>),
        (0x010 => pub mcu_cal_prog_time_2: ReadWrite<u32, MCU_CAL_PROG_TIME_2::Register>),
        (0x014 => pub mcu_cal_read_time_msb: ReadOnly<u32, MCU_CAL_READ_TIME_MSB::Register>),
        (0x018 => pub mcu_cal_read_time_lsb: ReadOnly<u32, MCU_CAL_READ_TIME_LSB::Register>),
        (0x01c => pub mcu_cal_read_count_timer: ReadOnly<u32>),
        (0x020 => pub mcu_cal_sleep_clk_counters: ReadOnly<u32, MCU_CAL_SLEEP_CLK_COUNTERS::Register>),
        (0x024 => pub mcu_cal_key_reg: WriteOnly<u32>),
        (0x028 => @END),
    },

    pub TimePeriodRegisters {
        (0x000 => pub mcu_cal_ro_timeperiod_read: ReadOnly<u32, MCU_CAL_RO_TIMEPERIOD_READ::Register>),
        (0x004 => pub mcu_cal_timer_clock_period: ReadWrite<u32, MCU_CAL_TIMER_CLOCK_PERIOD::Register>),
        (0x008 => pub mcu_cal_temp_prog_reg: ReadWrite<u32, MCU_CAL_TEMP_PROG_REG::Register>),
        (0x00c => pub mcu_cal_start_reg: ReadWrite<u32, MCU_CAL_START_REG::Register>),
        (0x010 => pub mcu_cal_ref_clk_settle_reg: ReadWrite<u32, MCU_CAL_REF_CLK_SETTLE_REG::Register>),
        /// Calibrated period of the 32 kHz RC clock
        (0x014 => pub mcu_cal_rc_timeperiod_read: ReadOnly<u32, MCU_CAL_RC_TIMEPERIOD_READ::Register>),
        (0x018 => pub mcu_cal_ref_clk_tiemperiod_reg: ReadWrite<u32, MCU_CAL_REF_CLK_TIEMPERIOD_REG::Register>),
        (0x01c => @END),
    }
}

register_bitfields![u32,
    pub MCU_CAL_ALARM_PROG_1 [
        PROG_ALARM_MSEC OFFSET(0) NUMBITS(10) [],
        PROG_ALARM_SEC OFFSET(10) NUMBITS(6) [],
        PROG_ALARM_MIN OFFSET(16) NUMBITS(6) [],
        PROG_ALARM_HOUR OFFSET(22) NUMBITS(5) []
    ],
    pub MCU_CAL_ALARM_PROG_2 [
        PROG_ALARM_DAY OFFSET(0) NUMBITS(5) [],
        PROG_ALARM_MONTH OFFSET(8) NUMBITS(4) [],
        PROG_ALARM_YEAR OFFSET(16) NUMBITS(7) [],
        PROG_ALARM_CENTURY OFFSET(23) NUMBITS(2) [],
        ALARM_EN OFFSET(31) NUMBITS(1) []
    ],
    pub MCU_CAL_POWERGATE_REG [
        PG_EN_CALENDER OFFSET(0) NUMBITS(1) [],
        ENABLE_CALENDER_COMBI OFFSET(1) NUMBITS(1) [],
        DISABLE_COMBI_DYN_PWRGATE_EN OFFSET(2) NUMBITS(1) [],
        STATIC_COMBI_RTC_PG_EN OFFSET(3) NUMBITS(1) []
    ],
    /// Time of day loaded on `PROG_TIME_TRIG`
    pub MCU_CAL_PROG_TIME_1 [
        PROG_MSEC OFFSET(0) NUMBITS(10) [],
        PROG_SEC OFFSET(10) NUMBITS(6) [],
        PROG_MIN OFFSET(16) NUMBITS(6) [],
        PROG_HOUR OFFSET(22) NUMBITS(5) []
    ],
    pub MCU_CAL_PROG_TIME_2 [
        PROG_DAY OFFSET(0) NUMBITS(5) [],
        PROG_WEEK_DAY OFFSET(5) NUMBITS(3) [],
        PROG_MONTH OFFSET(8) NUMBITS(4) [],
        PROG_YEAR OFFSET(16) NUMBITS(7) [],
        PROG_CENTURY OFFSET(23) NUMBITS(2) [],
        /// Load the programmed time into the calendar
        PROG_TIME_TRIG OFFSET(31) NUMBITS(1) []
    ],
    pub MCU_CAL_READ_TIME_MSB [
        MONTHS_COUNT OFFSET(0) NUMBITS(4) [],
        YEAR_COUNT OFFSET(4) NUMBITS(7) [],
        CENTURY_COUNT OFFSET(11) NUMBITS(2) [],
        WEEK_DAY OFFSET(13) NUMBITS(3) []
    ],
    /// Running calendar. Day of month only appears on the read side.
    pub MCU_CAL_READ_TIME_LSB [
        MILLISECONDS_COUNT OFFSET(0) NUMBITS(10) [],
        SECONDS_COUNT OFFSET(10) NUMBITS(6) [],
        MINS_COUNT OFFSET(16) NUMBITS(6) [],
        HOURS_COUNT OFFSET(22) NUMBITS(5) [],
        DAYS_COUNT OFFSET(27) NUMBITS(5) []
    ],
    pub MCU_CAL_SLEEP_CLK_COUNTERS [
        SLEEP_CLK_DURATION OFFSET(0) NUMBITS(12) [],
        PCLK_COUNT_WRT_SLEEP_CLK OFFSET(16) NUMBITS(12) []
    ],
    pub MCU_CAL_RO_TIMEPERIOD_READ [
        TIMEPERIOD_RO OFFSET(0) NUMBITS(25) []
    ],
    pub MCU_CAL_TIMER_CLOCK_PERIOD [
        RTC_TIMER_CLK_PERIOD OFFSET(0) NUMBITS(25) [],
        SPI_RTC_TIMER_CLK_PERIOD_APPLIED_b OFFSET(31) NUMBITS(1) []
    ],
    pub MCU_CAL_TEMP_PROG_REG [
        BYPASS_CALIB_PG OFFSET(0) NUMBITS(1) [],
        MAX_TEMP_CHANGE OFFSET(16) NUMBITS(5) [],
        TEMP_TRIGGER_TIME_SEL OFFSET(21) NUMBITS(2) [],
        PERIODIC_TEMP_CALIB_EN OFFSET(23) NUMBITS(1) [],
        /// Feed the calendar from the calibrated period instead of the
        /// programmed one
        RTC_TIMER_PERIOD_MUX_SEL OFFSET(24) NUMBITS(1) []
    ],
    pub MCU_CAL_START_REG [
        ALPHA_RO OFFSET(0) NUMBITS(3) [],
        ALPHA_RC OFFSET(3) NUMBITS(3) [],
        NO_OF_RO_CLKS OFFSET(6) NUMBITS(4) [],
        NO_OF_RC_CLKS OFFSET(10) NUMBITS(3) [],
        RC_SETTLE_TIME OFFSET(13) NUMBITS(3) [],
        RC_XTAL_MUX_SEL OFFSET(16) NUMBITS(1) [],
        LOW_POWER_TRIGGER_SEL OFFSET(17) NUMBITS(1) [],
        PERIODIC_RO_CALIB_EN OFFSET(18) NUMBITS(1) [],
        RO_TRIGGER_TIME_SEL OFFSET(19) NUMBITS(2) [],
        PERIODIC_RC_CALIB_EN OFFSET(21) NUMBITS(1) [],
        RC_TRIGGER_TIME_SEL OFFSET(22) NUMBITS(3) [],
        START_CALIB_RO OFFSET(25) NUMBITS(1) [],
        START_CALIB_RC OFFSET(26) NUMBITS(1) [],
        VBATT_TRIGGER_TIME_SEL OFFSET(27) NUMBITS(3) []
    ],
    pub MCU_CAL_REF_CLK_SETTLE_REG [
        XTAL_SETTLE OFFSET(0) NUMBITS(7) [],
        VALID_RC_TIMEPERIOD OFFSET(16) NUMBITS(1) [],
        VALID_RO_TIMEPERIOD OFFSET(17) NUMBITS(1) []
    ],
    pub MCU_CAL_RC_TIMEPERIOD_READ [
        TIMEPERIOD_RC OFFSET(0) NUMBITS(25) []
    ],
    /// Reference clock period used when calibrating against an external clock
    pub MCU_CAL_REF_CLK_TIEMPERIOD_REG [
        TIMEPERIOD_REF_CLK OFFSET(0) NUMBITS(24) []
    ]
];

const _: () = assert!(offset_of!(RtcRegisters, mcu_cal_key_reg) == 0x24);
const _: () = assert!(offset_of!(TimePeriodRegisters, mcu_cal_rc_timeperiod_read) == 0x14);
const _: () = assert!(offset_of!(TimePeriodRegisters, mcu_cal_ref_clk_tiemperiod_reg) == 0x18);

pub static LAYOUT: Layout = layout!(RtcRegisters {
    mcu_cal_alarm_prog_1 => "MCU_CAL_ALARM_PROG_1": u32, RW, MCU_CAL_ALARM_PROG_1 {
        PROG_ALARM_MSEC: RW, PROG_ALARM_SEC: RW, PROG_ALARM_MIN: RW, PROG_ALARM_HOUR: RW
    };
    mcu_cal_alarm_prog_2 => "MCU_CAL_ALARM_PROG_2": u32, RW, MCU_CAL_ALARM_PROG_2 {
        PROG_ALARM_DAY: RW, PROG_ALARM_MONTH: RW, PROG_ALARM_YEAR: RW,
        PROG_ALARM_CENTURY: RW, ALARM_EN: RW
    };
    mcu_cal_powergate_reg => "MCU_CAL_POWERGATE_REG": u32, RW, MCU_CAL_POWERGATE_REG {
        PG_EN_CALENDER: RW, ENABLE_CALENDER_COMBI: RW, DISABLE_COMBI_DYN_PWRGATE_EN: RW,
        STATIC_COMBI_RTC_PG_EN: RW
    };
    mcu_cal_prog_time_1 => "MCU_CAL_PROG_TIME_1": u32, RW, MCU_CAL_PROG_TIME_1 {
        PROG_MSEC: RW, PROG_SEC: RW, PROG_MIN: RW, PROG_HOUR: RW
    };
    mcu_cal_prog_time_2 => "MCU_CAL_PROG_TIME_2": u32, RW, MCU_CAL_PROG_TIME_2 {
        PROG_DAY: RW, PROG_WEEK_DAY: RW, PROG_MONTH: RW, PROG_YEAR: RW, PROG_CENTURY: RW,
        PROG_TIME_TRIG: WO
    };
    mcu_cal_read_time_msb => "MCU_CAL_READ_TIME_MSB": u32, RO, MCU_CAL_READ_TIME_MSB {
        MONTHS_COUNT: RO, YEAR_COUNT: RO, CENTURY_COUNT: RO, WEEK_DAY: RO
    };
    mcu_cal_read_time_lsb => "MCU_CAL_READ_TIME_LSB": u32, RO, MCU_CAL_READ_TIME_LSB {
        MILLISECONDS_COUNT: RO, SECONDS_COUNT: RO, MINS_COUNT: RO, HOURS_COUNT: RO,
        DAYS_COUNT: RO
    };
    mcu_cal_read_count_timer => "MCU_CAL_READ_COUNT_TIMER": u32, RO;
    mcu_cal_sleep_clk_counters => "MCU_CAL_SLEEP_CLK_COUNTERS": u32, RO, MCU_CAL_SLEEP_CLK_COUNTERS {
        SLEEP_CLK_DURATION: RO, PCLK_COUNT_WRT_SLEEP_CLK: RO
    };
    mcu_cal_key_reg => "MCU_CAL_KEY_REG": u32, WO;
});

pub static TIME_PERIOD_LAYOUT: Layout = layout!(TimePeriodRegisters {
    mcu_cal_ro_timeperiod_read => "MCU_CAL_RO_TIMEPERIOD_READ": u32, RO, MCU_CAL_RO_TIMEPERIOD_READ {
        TIMEPERIOD_RO: RO
    };
    mcu_cal_timer_clock_period => "MCU_CAL_TIMER_CLOCK_PERIOD": u32, RW, MCU_CAL_TIMER_CLOCK_PERIOD {
        RTC_TIMER_CLK_PERIOD: RW, SPI_RTC_TIMER_CLK_PERIOD_APPLIED_b: RO
    };
    mcu_cal_temp_prog_reg => "MCU_CAL_TEMP_PROG_REG": u32, RW, MCU_CAL_TEMP_PROG_REG {
        BYPASS_CALIB_PG: RW, MAX_TEMP_CHANGE: RW, TEMP_TRIGGER_TIME_SEL: RW,
        PERIODIC_TEMP_CALIB_EN: RW, RTC_TIMER_PERIOD_MUX_SEL: RW
    };
    mcu_cal_start_reg => "MCU_CAL_START_REG": u32, RW, MCU_CAL_START_REG {
        ALPHA_RO: RW, ALPHA_RC: RW, NO_OF_RO_CLKS: RW, NO_OF_RC_CLKS: RW, RC_SETTLE_TIME: RW,
        RC_XTAL_MUX_SEL: RW, LOW_POWER_TRIGGER_SEL: RW, PERIODIC_RO_CALIB_EN: RW,
        RO_TRIGGER_TIME_SEL: RW, PERIODIC_RC_CALIB_EN: RW, RC_TRIGGER_TIME_SEL: RW,
        START_CALIB_RO: RW, START_CALIB_RC: RW, VBATT_TRIGGER_TIME_SEL: RW
    };
    mcu_cal_ref_clk_settle_reg => "MCU_CAL_REF_CLK_SETTLE_REG": u32, RW, MCU_CAL_REF_CLK_SETTLE_REG {
        XTAL_SETTLE: RW, VALID_RC_TIMEPERIOD: RO, VALID_RO_TIMEPERIOD: RO
    };
    mcu_cal_rc_timeperiod_read => "MCU_CAL_RC_TIMEPERIOD_READ": u32, RO, MCU_CAL_RC_TIMEPERIOD_READ {
        TIMEPERIOD_RC: RO
    };
    mcu_cal_ref_clk_tiemperiod_reg => "MCU_CAL_REF_CLK_TIEMPERIOD_REG": u32, RW,
        MCU_CAL_REF_CLK_TIEMPERIOD_REG { TIMEPERIOD_REF_CLK: RW };
});

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn read_back_time_carries_the_day() {
        // day 9, 12:34:56.789
        let raw = (9 << 27) | (12 << 22) | (34 << 16) | (56 << 10) | 789;
        let now: LocalRegisterCopy<u32, MCU_CAL_READ_TIME_LSB::Register> =
            LocalRegisterCopy::new(raw);
        assert_eq!(now.read(MCU_CAL_READ_TIME_LSB::DAYS_COUNT), 9);
        assert_eq!(now.read(MCU_CAL_READ_TIME_LSB::HOURS_COUNT), 12);
        assert_eq!(now.read(MCU_CAL_READ_TIME_LSB::MINS_COUNT), 34);
        assert_eq!(now.read(MCU_CAL_READ_TIME_LSB::SECONDS_COUNT), 56);
        assert_eq!(now.read(MCU_CAL_READ_TIME_LSB::MILLISECONDS_COUNT), 789);
    }

    #[test]
    fn programmed_time_has_no_day_field() {
        let mut time: LocalRegisterCopy<u32, MCU_CAL_PROG_TIME_1::Register> =
            LocalRegisterCopy::new(0);
        time.modify(
            MCU_CAL_PROG_TIME_1::PROG_HOUR.val(12)
                + MCU_CAL_PROG_TIME_1::PROG_MIN.val(34)
                + MCU_CAL_PROG_TIME_1::PROG_SEC.val(56)
                + MCU_CAL_PROG_TIME_1::PROG_MSEC.val(789),
        );
        assert_eq!(time.get(), (12 << 22) | (34 << 16) | (56 << 10) | 789);

        for name in ["MCU_CAL_PROG_TIME_1", "MCU_CAL_ALARM_PROG_1"] {
            let reg = LAYOUT.register(name).unwrap();
            assert_eq!(reg.fields.len(), 4);
            assert_eq!(reg.reserved_mask(), 0xf800_0000);
        }
        let read = LAYOUT.register("MCU_CAL_READ_TIME_LSB").unwrap();
        assert_eq!(read.field("DAYS_COUNT").unwrap().mask(), 0xf800_0000);
    }

    #[test]
    fn alarm_enable_is_the_top_bit() {
        let alarm = LAYOUT
            .register("MCU_CAL_ALARM_PROG_2")
            .and_then(|reg| reg.field("ALARM_EN"))
            .unwrap();
        assert_eq!(alarm.mask(), 0x8000_0000);
    }

    #[test]
    fn calibration_block_fields() {
        let start = TIME_PERIOD_LAYOUT.register("MCU_CAL_START_REG").unwrap();
        assert_eq!(start.field("VBATT_TRIGGER_TIME_SEL").unwrap().mask(), 0x3800_0000);

        let settle = TIME_PERIOD_LAYOUT.register("MCU_CAL_REF_CLK_SETTLE_REG").unwrap();
        assert_eq!(settle.field("VALID_RC_TIMEPERIOD").unwrap().mask(), 1 << 16);
        assert_eq!(settle.field("VALID_RO_TIMEPERIOD").unwrap().mask(), 1 << 17);

        let ref_clk = TIME_PERIOD_LAYOUT
            .register("MCU_CAL_REF_CLK_TIEMPERIOD_REG")
            .unwrap();
        assert_eq!(ref_clk.offset, 0x18);
        assert_eq!(ref_clk.field("TIMEPERIOD_REF_CLK").unwrap().mask(), 0x00ff_ffff);
        assert_eq!(TIME_PERIOD_LAYOUT.size, 0x1c);

        let rc = TIME_PERIOD_LAYOUT.register("MCU_CAL_RC_TIMEPERIOD_READ").unwrap();
        assert!(rc.field("TIMEPERIOD_RC").is_ok());
        assert!(rc.field("TIMEPERIOD").is_err());
    }
}
