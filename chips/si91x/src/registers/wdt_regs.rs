// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

// Window watchdog of the always-on domain (MCU_WDT). Timer fields hold a
// power of two exponent of the watchdog clock.

use core::mem::{offset_of, size_of};

use tock_registers::registers::{ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::Layout;

/// Value written to `MCU_WWD_KEY_ENABLE` to unlock the timer registers.
pub const MCU_WDT_PARAM_KEY: u32 = 0x81d9_edea;

register_structs! {
    pub McuWdtRegisters {
        (0x000 => pub mcu_wwd_interrupt_timer: ReadWrite<u32, MCU_WWD_INTERRUPT_TIMER::Register>),
        (0x004 => pub mcu_wwd_system_reset_timer: ReadWrite<u32, MCU_WWD_SYSTEM_RESET_TIMER::Register>),
        (0x008 => pub mcu_wwd_window_timer: ReadWrite<u32, MCU_WWD_WINDOW_TIMER::Register>),
        (0x00c => pub mcu_wwd_arm_stuck_en: ReadWrite<u32, MCU_WWD_ARM_STUCK_EN::Register>),
        (0x010 => pub mcu_wwd_mode_and_rstart: ReadWrite<u32, MCU_WWD_MODE_AND_RSTART::Register>),
        (0x014 => pub mcu_wwd_key_enable: WriteOnly<u32>),
        (0x018 => @END),
    }
}

register_bitfields![u32,
    pub MCU_WWD_INTERRUPT_TIMER [
        WWD_INTERRUPT_TIMER OFFSET(0) NUMBITS(5) []
    ],
    pub MCU_WWD_SYSTEM_RESET_TIMER [
        WWD_SYSTEM_RESET_TIMER OFFSET(0) NUMBITS(5) []
    ],
    pub MCU_WWD_WINDOW_TIMER [
        WINDOW_TIMER OFFSET(0) NUMBITS(4) []
    ],
    pub MCU_WWD_ARM_STUCK_EN [
        PROCESSOR_STUCK_RESET_EN OFFSET(16) NUMBITS(1) [],
        /// Latched copy of PROCESSOR_STUCK_RESET_EN
        PROCESSOR_STUCK_RESET_EN_ OFFSET(24) NUMBITS(1) []
    ],
    pub MCU_WWD_MODE_AND_RSTART [
        /// Restart the counter, write 1
        WWD_MODE_RSTART OFFSET(0) NUMBITS(1) [],
        WWD_MODE_EN_STATUS OFFSET(16) NUMBITS(8) [
            Disabled = 0x00,
            Enabled = 0xaa
        ]
    ]
];

const _: () = assert!(offset_of!(McuWdtRegisters, mcu_wwd_key_enable) == 0x14);
const _: () = assert!(size_of::<McuWdtRegisters>() <= 0x100);

pub static LAYOUT: Layout = layout!(McuWdtRegisters {
    mcu_wwd_interrupt_timer => "MCU_WWD_INTERRUPT_TIMER": u32, RW, MCU_WWD_INTERRUPT_TIMER {
        WWD_INTERRUPT_TIMER: RW
    };
    mcu_wwd_system_reset_timer => "MCU_WWD_SYSTEM_RESET_TIMER": u32, RW, MCU_WWD_SYSTEM_RESET_TIMER {
        WWD_SYSTEM_RESET_TIMER: RW
    };
    mcu_wwd_window_timer => "MCU_WWD_WINDOW_TIMER": u32, RW, MCU_WWD_WINDOW_TIMER { WINDOW_TIMER: RW };
    mcu_wwd_arm_stuck_en => "MCU_WWD_ARM_STUCK_EN": u32, RW, MCU_WWD_ARM_STUCK_EN {
        PROCESSOR_STUCK_RESET_EN: RW, PROCESSOR_STUCK_RESET_EN_: RO
    };
    mcu_wwd_mode_and_rstart => "MCU_WWD_MODE_AND_RSTART": u32, RW, MCU_WWD_MODE_AND_RSTART {
        WWD_MODE_RSTART: WO, WWD_MODE_EN_STATUS: RW
    };
    mcu_wwd_key_enable => "MCU_WWD_KEY_ENABLE": u32, WO;
});

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::interfaces::{ReadWriteable, Readable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn enable_pattern() {
        let mode: InMemoryRegister<u32, MCU_WWD_MODE_AND_RSTART::Register> =
            InMemoryRegister::new(0);
        mode.modify(MCU_WWD_MODE_AND_RSTART::WWD_MODE_EN_STATUS::Enabled);
        assert_eq!(mode.get(), 0x00aa_0000);
        assert!(mode.matches_all(MCU_WWD_MODE_AND_RSTART::WWD_MODE_EN_STATUS::Enabled));
    }

    #[test]
    fn stuck_reset_status_is_read_only() {
        let stuck = LAYOUT.registers[3].field("PROCESSOR_STUCK_RESET_EN_").unwrap();
        assert_eq!(stuck.offset, 24);
        assert!(!stuck.access.is_writable());
    }
}
