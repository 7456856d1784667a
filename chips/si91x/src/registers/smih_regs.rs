// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! SD/MMC host controller (SMIH), an SD Host Controller 3.00 register set.
//!
//! Registers are packed by natural width: 8, 16, 32 and the 64-bit
//! capability words. The 128-bit command response is exposed as eight
//! 16-bit halves.

use core::mem::{offset_of, size_of};

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::Layout;

register_structs! {
    pub SmihRegisters {
        (0x000 => pub smih_sdma_system_address_register: ReadWrite<u32>),
        (0x004 => pub smih_block_size_register: ReadWrite<u16, SMIH_BLOCK_SIZE_REGISTER::Register>),
        (0x006 => pub smih_block_count_register: ReadWrite<u16>),
        (0x008 => pub smih_argument1_register: ReadWrite<u32>),
        (0x00c => pub transfer_mode_register: ReadWrite<u16, TRANSFER_MODE_REGISTER::Register>),
        /// Writing the upper byte issues the command
        (0x00e => pub smih_command_register: ReadWrite<u16, SMIH_COMMAND_REGISTER::Register>),
        (0x010 => pub smih_response_register0: ReadOnly<u16>),
        (0x012 => pub smih_response_register1: ReadOnly<u16>),
        (0x014 => pub smih_response_register2: ReadOnly<u16>),
        (0x016 => pub smih_response_register3: ReadOnly<u16>),
        (0x018 => pub smih_response_register4: ReadOnly<u16>),
        (0x01a => pub smih_response_register5: ReadOnly<u16>),
        (0x01c => pub smih_response_register6: ReadOnly<u16>),
        (0x01e => pub smih_response_register7: ReadOnly<u16>),
        (0x020 => pub smih_buffer_data_port_register: ReadWrite<u32>),
        (0x024 => pub smih_present_state_register: ReadOnly<u32, SMIH_PRESENT_STATE_REGISTER::Register>),
        (0x028 => pub smih_host_control_1_register: ReadWrite<u8, SMIH_HOST_CONTROL_1_REGISTER::Register>),
        (0x029 => pub smih_power_control_register: ReadWrite<u8, SMIH_POWER_CONTROL_REGISTER::Register>),
        (0x02a => pub smih_block_gap_control_register: ReadWrite<u8, SMIH_BLOCK_GAP_CONTROL_REGISTER::Register>),
        (0x02b => pub smih_wakeup_control_register: ReadWrite<u8, SMIH_WAKEUP_CONTROL_REGISTER::Register>),
        (0x02c => pub smih_clock_control_register: ReadWrite<u16, SMIH_CLOCK_CONTROL_REGISTER::Register>),
        (0x02e => pub smih_timeout_control_register: ReadWrite<u8, SMIH_TIMEOUT_CONTROL_REGISTER::Register>),
        (0x02f => pub smih_software_reset_register: ReadWrite<u8, SMIH_SOFTWARE_RESET_REGISTER::Register>),
        /// Status bits are cleared by writing one
        (0x030 => pub smih_normal_interrupt_status_register: ReadWrite<u16, SMIH_NORMAL_INTERRUPT::Register>),
        (0x032 => pub smih_error_interrupt_status_register: ReadWrite<u16, SMIH_ERROR_INTERRUPT::Register>),
        (0x034 => pub smih_normal_interrupt_status_enable_register: ReadWrite<u16, SMIH_NORMAL_INTERRUPT::Register>),
        (0x036 => pub smih_error_interrupt_status_enable_register: ReadWrite<u16, SMIH_ERROR_INTERRUPT::Register>),
        (0x038 => pub smih_normal_interrupt_signal_enable_register: ReadWrite<u16, SMIH_NORMAL_INTERRUPT::Register>),
        (0x03a => pub smih_error_interrupt_signal_enable_register: ReadWrite<u16, SMIH_ERROR_INTERRUPT::Register>),
        (0x03c => pub smih_auto_cmd_error_status_register: ReadOnly<u16, SMIH_AUTO_CMD_ERROR::Register>),
        (0x03e => pub smih_host_control_2_register: ReadWrite<u16, SMIH_HOST_CONTROL_2_REGISTER::Register>),
        (0x040 => pub smih_capabilities_register: ReadOnly<u64, SMIH_CAPABILITIES_REGISTER::Register>),
        (0x048 => pub smih_maximum_current_capabilities_register: ReadOnly<u64, SMIH_MAXIMUM_CURRENT_CAPABILITIES_REGISTER::Register>),
        (0x050 => pub smih_force_event_register_for_auto_cmd_error_status: WriteOnly<u16, SMIH_AUTO_CMD_ERROR::Register>),
        (0x052 => pub smih_force_event_register_for_error_interrupt_status: WriteOnly<u16, SMIH_ERROR_INTERRUPT::Register>),
        (0x054 => pub smih_adma_error_status_register: ReadOnly<u8, SMIH_ADMA_ERROR_STATUS_REGISTER::Register>),
        (0x055 => _reserved0),
        (0x058 => pub smih_adma_system_address0_register: ReadWrite<u32>),
        (0x05c => pub smih_adma_system_address1_register: ReadWrite<u32>),
        (0x060 => pub smih_preset_value_registers: [ReadOnly<u16, SMIH_PRESET_VALUE::Register>; 8]),
        (0x070 => _reserved1),
        (0x0fc => pub smih_slot_interrupt_status_register: ReadOnly<u16>),
        (0x0fe => pub smih_host_controller_version_register: ReadOnly<u16, SMIH_HOST_CONTROLLER_VERSION_REGISTER::Register>),
        (0x100 => @END),
    }
}

register_bitfields![u8,
    pub SMIH_HOST_CONTROL_1_REGISTER [
        LED_CONTROL OFFSET(0) NUMBITS(1) [],
        /// 4-bit bus when set, 1-bit otherwise
        DATA_TRANSFER_WIDTH OFFSET(1) NUMBITS(1) [],
        HIGH_SPEED_ENABLE OFFSET(2) NUMBITS(1) [],
        DMA_SELECT OFFSET(3) NUMBITS(2) [
            Sdma = 0,
            Adma1 = 1,
            Adma2 = 2
        ],
        EXTENDED_DATA_TRANSFER_WIDTH OFFSET(5) NUMBITS(1) [],
        CARD_DETECT_TEST_LEVEL OFFSET(6) NUMBITS(1) [],
        CARD_DETECT_SIGNAL_SELECTION OFFSET(7) NUMBITS(1) []
    ],
    pub SMIH_POWER_CONTROL_REGISTER [
        SD_BUS_POWER OFFSET(0) NUMBITS(1) [],
        SD_BUS_VOLTAGE_SELECT OFFSET(1) NUMBITS(3) [
            V1_8 = 5,
            V3_0 = 6,
            V3_3 = 7
        ]
    ],
    pub SMIH_BLOCK_GAP_CONTROL_REGISTER [
        STOP_AT_BLOCK_GAP_REQUEST OFFSET(0) NUMBITS(1) [],
        CONTINUE_REQUEST OFFSET(1) NUMBITS(1) [],
        READ_WAIT_CONTROL OFFSET(2) NUMBITS(1) [],
        INTERRUPT_AT_BLOCK_GAP OFFSET(3) NUMBITS(1) []
    ],
    pub SMIH_WAKEUP_CONTROL_REGISTER [
        WAKEUP_EVENT_ENABLE_ON_CARD_INTERRUPT OFFSET(0) NUMBITS(1) [],
        WAKEUP_EVENT_ENABLE_ON_CARD_INSERTION OFFSET(1) NUMBITS(1) [],
        WAKEUP_EVENT_ENABLE_ON_CARD_REMOVAL OFFSET(2) NUMBITS(1) []
    ],
    pub SMIH_TIMEOUT_CONTROL_REGISTER [
        /// Timeout is TMCLK * 2^(13 + value)
        DATA_TIMEOUT_COUNTER_VALUE OFFSET(0) NUMBITS(4) []
    ],
    pub SMIH_SOFTWARE_RESET_REGISTER [
        SOFTWARE_RESET_FOR_ALL OFFSET(0) NUMBITS(1) [],
        SOFTWARE_RESET_FOR_CMD_LINE OFFSET(1) NUMBITS(1) [],
        SOFTWARE_RESET_FOR_DAT_LINE OFFSET(2) NUMBITS(1) []
    ],
    pub SMIH_ADMA_ERROR_STATUS_REGISTER [
        ADMA_ERROR_STATE OFFSET(0) NUMBITS(2) [
            Stop = 0,
            FetchDescriptor = 1,
            TransferData = 3
        ],
        ADMA_LENGTH_MISMATCH_ERROR OFFSET(2) NUMBITS(1) []
    ]
];

register_bitfields![u16,
    pub SMIH_BLOCK_SIZE_REGISTER [
        TRANSFER_BLOCK_SIZE OFFSET(0) NUMBITS(12) [],
        SDMA_BUFFER_BOUNDARY OFFSET(12) NUMBITS(3) []
    ],
    pub TRANSFER_MODE_REGISTER [
        DMA_ENABLE OFFSET(0) NUMBITS(1) [],
        BLOCK_COUNT_ENABLE OFFSET(1) NUMBITS(1) [],
        AUTO_CMD_ENABLE OFFSET(2) NUMBITS(2) [
            Disabled = 0,
            Cmd12 = 1,
            Cmd23 = 2
        ],
        /// Card to host when set
        DATA_TRANSFER_DIRECTION_SELECT OFFSET(4) NUMBITS(1) [],
        MULTI_OR_SINGLE_BLOCK_SELECT OFFSET(5) NUMBITS(1) []
    ],
    pub SMIH_COMMAND_REGISTER [
        RESPONSE_TYPE_SELECT OFFSET(0) NUMBITS(2) [
            NoResponse = 0,
            Length136 = 1,
            Length48 = 2,
            Length48Busy = 3
        ],
        COMMAND_CRC_CHECK_ENABLE OFFSET(3) NUMBITS(1) [],
        COMMAND_INDEX_CHECK_ENABLE OFFSET(4) NUMBITS(1) [],
        DATA_PRESENT_SELECT OFFSET(5) NUMBITS(1) [],
        COMMAND_TYPE OFFSET(6) NUMBITS(2) [
            Normal = 0,
            Suspend = 1,
            Resume = 2,
            Abort = 3
        ],
        COMMAND_INDEX OFFSET(8) NUMBITS(6) []
    ],
    pub SMIH_CLOCK_CONTROL_REGISTER [
        INTERNAL_CLOCK_ENABLE OFFSET(0) NUMBITS(1) [],
        INTERNAL_CLOCK_STABLE OFFSET(1) NUMBITS(1) [],
        SD_CLOCK_ENABLE OFFSET(2) NUMBITS(1) [],
        CLOCK_GENERATOR_SELECT OFFSET(5) NUMBITS(1) [],
        UPPER_BITS_OF_SDCLK_FREQUENCY_SELECT OFFSET(6) NUMBITS(2) [],
        SDCLK_FREQUENCY_SELECT OFFSET(8) NUMBITS(8) []
    ],
    pub SMIH_NORMAL_INTERRUPT [
        COMMAND_COMPLETE OFFSET(0) NUMBITS(1) [],
        TRANSFER_COMPLETE OFFSET(1) NUMBITS(1) [],
        BLOCK_GAP_EVENT OFFSET(2) NUMBITS(1) [],
        DMA_INTERRUPT OFFSET(3) NUMBITS(1) [],
        BUFFER_WRITE_READY OFFSET(4) NUMBITS(1) [],
        BUFFER_READ_READY OFFSET(5) NUMBITS(1) [],
        CARD_INSERTION OFFSET(6) NUMBITS(1) [],
        CARD_REMOVAL OFFSET(7) NUMBITS(1) [],
        CARD_INTERRUPT OFFSET(8) NUMBITS(1) [],
        RE_TUNING_EVENT OFFSET(12) NUMBITS(1) [],
        /// Summary of the error interrupt status register
        ERROR_INTERRUPT OFFSET(15) NUMBITS(1) []
    ],
    pub SMIH_ERROR_INTERRUPT [
        COMMAND_TIMEOUT_ERROR OFFSET(0) NUMBITS(1) [],
        COMMAND_CRC_ERROR OFFSET(1) NUMBITS(1) [],
        COMMAND_END_BIT_ERROR OFFSET(2) NUMBITS(1) [],
        COMMAND_INDEX_ERROR OFFSET(3) NUMBITS(1) [],
        DATA_TIMEOUT_ERROR OFFSET(4) NUMBITS(1) [],
        DATA_CRC_ERROR OFFSET(5) NUMBITS(1) [],
        DATA_END_BIT_ERROR OFFSET(6) NUMBITS(1) [],
        CURRENT_LIMIT_ERROR OFFSET(7) NUMBITS(1) [],
        AUTO_CMD_ERROR OFFSET(8) NUMBITS(1) [],
        ADMA_ERROR OFFSET(9) NUMBITS(1) [],
        TUNING_ERROR OFFSET(10) NUMBITS(1) []
    ],
    pub SMIH_AUTO_CMD_ERROR [
        AUTO_CMD12_NOT_EXECUTED OFFSET(0) NUMBITS(1) [],
        AUTO_CMD_TIMEOUT_ERROR OFFSET(1) NUMBITS(1) [],
        AUTO_CMD_CRC_ERROR OFFSET(2) NUMBITS(1) [],
        AUTO_CMD_END_BIT_ERROR OFFSET(3) NUMBITS(1) [],
        AUTO_CMD_INDEX_ERROR OFFSET(4) NUMBITS(1) [],
        COMMAND_NOT_ISSUED_BY_AUTO_CMD12_ERROR OFFSET(7) NUMBITS(1) []
    ],
    pub SMIH_HOST_CONTROL_2_REGISTER [
        UHS_MODE_SELECT OFFSET(0) NUMBITS(3) [
            Sdr12 = 0,
            Sdr25 = 1,
            Sdr50 = 2,
            Sdr104 = 3,
            Ddr50 = 4
        ],
        _1_8V_SIGNALING_ENABLE OFFSET(3) NUMBITS(1) [],
        DRIVER_STRENGTH_SELECT OFFSET(4) NUMBITS(2) [],
        EXECUTE_TUNING OFFSET(6) NUMBITS(1) [],
        SAMPLING_CLOCK_SELECT OFFSET(7) NUMBITS(1) [],
        ASYNCHRONOUS_INTERRUPT_ENABLE OFFSET(14) NUMBITS(1) [],
        PRESET_VALUE_ENABLE OFFSET(15) NUMBITS(1) []
    ],
    pub SMIH_PRESET_VALUE [
        SDCLK_FREQUENCY_SELECT_VALUE OFFSET(0) NUMBITS(10) [],
        CLOCK_GENERATOR_SELECT_VALUE OFFSET(10) NUMBITS(1) [],
        DRIVER_STRENGTH_SELECT_VALUE OFFSET(14) NUMBITS(2) []
    ],
    pub SMIH_HOST_CONTROLLER_VERSION_REGISTER [
        SPECIFICATION_VERSION_NUMBER OFFSET(0) NUMBITS(8) [],
        VENDOR_VERSION_NUMBER OFFSET(8) NUMBITS(8) []
    ]
];

register_bitfields![u32,
    pub SMIH_PRESENT_STATE_REGISTER [
        COMMAND_INHIBIT_CMD OFFSET(0) NUMBITS(1) [],
        COMMAND_INHIBIT_DAT OFFSET(1) NUMBITS(1) [],
        DAT_LINE_ACTIVE OFFSET(2) NUMBITS(1) [],
        RE_TUNING_REQUEST OFFSET(3) NUMBITS(1) [],
        WRITE_TRANSFER_ACTIVE OFFSET(8) NUMBITS(1) [],
        READ_TRANSFER_ACTIVE OFFSET(9) NUMBITS(1) [],
        BUFFER_WRITE_ENABLE OFFSET(10) NUMBITS(1) [],
        BUFFER_READ_ENABLE OFFSET(11) NUMBITS(1) [],
        CARD_INSERTED OFFSET(16) NUMBITS(1) [],
        CARD_STATE_STABLE OFFSET(17) NUMBITS(1) [],
        CARD_DETECT_PIN_LEVEL OFFSET(18) NUMBITS(1) [],
        WRITE_PROTECT_SWITCH_PIN_LEVEL OFFSET(19) NUMBITS(1) [],
        DAT_LINE_SIGNAL_LEVEL OFFSET(20) NUMBITS(4) [],
        CMD_LINE_SIGNAL_LEVEL OFFSET(24) NUMBITS(1) []
    ]
];

register_bitfields![u64,
    pub SMIH_CAPABILITIES_REGISTER [
        TIMEOUT_CLOCK_FREQUENCY OFFSET(0) NUMBITS(6) [],
        TIMEOUT_CLOCK_UNIT OFFSET(7) NUMBITS(1) [],
        /// In MHz
        BASE_CLOCK_FREQUENCY_FOR_SD_CLOCK OFFSET(8) NUMBITS(8) [],
        MAX_BLOCK_LENGTH OFFSET(16) NUMBITS(2) [
            Bytes512 = 0,
            Bytes1024 = 1,
            Bytes2048 = 2
        ],
        EMBEDDED_8_BIT_SUPPORT OFFSET(18) NUMBITS(1) [],
        ADMA2_SUPPORT OFFSET(19) NUMBITS(1) [],
        HIGH_SPEED_SUPPORT OFFSET(21) NUMBITS(1) [],
        SDMA_SUPPORT OFFSET(22) NUMBITS(1) [],
        SUSPEND_RESUME_SUPPORT OFFSET(23) NUMBITS(1) [],
        VOLTAGE_SUPPORT_3_3V OFFSET(24) NUMBITS(1) [],
        VOLTAGE_SUPPORT_3_0V OFFSET(25) NUMBITS(1) [],
        VOLTAGE_SUPPORT_1_8V OFFSET(26) NUMBITS(1) [],
        SYSTEM_BUS_64_BIT_SUPPORT OFFSET(28) NUMBITS(1) [],
        ASYNCHRONOUS_INTERRUPT_SUPPORT OFFSET(29) NUMBITS(1) [],
        SLOT_TYPE OFFSET(30) NUMBITS(2) [],
        SDR50_SUPPORT OFFSET(32) NUMBITS(1) [],
        SDR104_SUPPORT OFFSET(33) NUMBITS(1) [],
        DDR50_SUPPORT OFFSET(34) NUMBITS(1) [],
        DRIVER_TYPE_A_SUPPORT OFFSET(36) NUMBITS(1) [],
        DRIVER_TYPE_C_SUPPORT OFFSET(37) NUMBITS(1) [],
        DRIVER_TYPE_D_SUPPORT OFFSET(38) NUMBITS(1) [],
        TIMER_COUNT_FOR_RE_TUNING OFFSET(40) NUMBITS(4) [],
        USE_TUNING_FOR_SDR50 OFFSET(45) NUMBITS(1) [],
        RE_TUNING_MODES OFFSET(46) NUMBITS(2) [],
        CLOCK_MULTIPLIER OFFSET(48) NUMBITS(8) []
    ],
    pub SMIH_MAXIMUM_CURRENT_CAPABILITIES_REGISTER [
        MAXIMUM_CURRENT_FOR_3_3V OFFSET(0) NUMBITS(8) [],
        MAXIMUM_CURRENT_FOR_3_0V OFFSET(8) NUMBITS(8) [],
        MAXIMUM_CURRENT_FOR_1_8V OFFSET(16) NUMBITS(8) []
    ]
];

const _: () = assert!(offset_of!(SmihRegisters, smih_present_state_register) == 0x24);
const _: () = assert!(offset_of!(SmihRegisters, smih_clock_control_register) == 0x2c);
const _: () = assert!(offset_of!(SmihRegisters, smih_capabilities_register) == 0x40);
const _: () = assert!(offset_of!(SmihRegisters, smih_adma_system_address0_register) == 0x58);
const _: () = assert!(size_of::<SmihRegisters>() == 0x100);

pub static LAYOUT: Layout = layout!(SmihRegisters {
    smih_sdma_system_address_register => "SMIH_SDMA_SYSTEM_ADDRESS_REGISTER": u32, RW;
    smih_block_size_register => "SMIH_BLOCK_SIZE_REGISTER": u16, RW, SMIH_BLOCK_SIZE_REGISTER {
        TRANSFER_BLOCK_SIZE: RW, SDMA_BUFFER_BOUNDARY: RW
    };
    smih_block_count_register => "SMIH_BLOCK_COUNT_REGISTER": u16, RW;
    smih_argument1_register => "SMIH_ARGUMENT1_REGISTER": u32, RW;
    transfer_mode_register => "TRANSFER_MODE_REGISTER": u16, RW, TRANSFER_MODE_REGISTER {
        DMA_ENABLE: RW, BLOCK_COUNT_ENABLE: RW, AUTO_CMD_ENABLE: RW,
        DATA_TRANSFER_DIRECTION_SELECT: RW, MULTI_OR_SINGLE_BLOCK_SELECT: RW
    };
    smih_command_register => "SMIH_COMMAND_REGISTER": u16, RW, SMIH_COMMAND_REGISTER {
        RESPONSE_TYPE_SELECT: RW, COMMAND_CRC_CHECK_ENABLE: RW, COMMAND_INDEX_CHECK_ENABLE: RW,
        DATA_PRESENT_SELECT: RW, COMMAND_TYPE: RW, COMMAND_INDEX: RW
    };
    smih_response_register0 => "SMIH_RESPONSE_REGISTER0": u16, RO;
    smih_response_register1 => "SMIH_RESPONSE_REGISTER1": u16, RO;
    smih_response_register2 => "SMIH_RESPONSE_REGISTER2": u16, RO;
    smih_response_register3 => "SMIH_RESPONSE_REGISTER3": u16, RO;
    smih_response_register4 => "SMIH_RESPONSE_REGISTER4": u16, RO;
    smih_response_register5 => "SMIH_RESPONSE_REGISTER5": u16, RO;
    smih_response_register6 => "SMIH_RESPONSE_REGISTER6": u16, RO;
    smih_response_register7 => "SMIH_RESPONSE_REGISTER7": u16, RO;
    smih_buffer_data_port_register => "SMIH_BUFFER_DATA_PORT_REGISTER": u32, RW;
    smih_present_state_register => "SMIH_PRESENT_STATE_REGISTER": u32, RO, SMIH_PRESENT_STATE_REGISTER {
        COMMAND_INHIBIT_CMD: RO, COMMAND_INHIBIT_DAT: RO, DAT_LINE_ACTIVE: RO, RE_TUNING_REQUEST: RO,
        WRITE_TRANSFER_ACTIVE: RO, READ_TRANSFER_ACTIVE: RO, BUFFER_WRITE_ENABLE: RO,
        BUFFER_READ_ENABLE: RO, CARD_INSERTED: RO, CARD_STATE_STABLE: RO,
        CARD_DETECT_PIN_LEVEL: RO, WRITE_PROTECT_SWITCH_PIN_LEVEL: RO,
        DAT_LINE_SIGNAL_LEVEL: RO, CMD_LINE_SIGNAL_LEVEL: RO
    };
    smih_host_control_1_register => "SMIH_HOST_CONTROL_1_REGISTER": u8, RW, SMIH_HOST_CONTROL_1_REGISTER {
        LED_CONTROL: RW, DATA_TRANSFER_WIDTH: RW, HIGH_SPEED_ENABLE: RW, DMA_SELECT: RW,
        EXTENDED_DATA_TRANSFER_WIDTH: RW, CARD_DETECT_TEST_LEVEL: RW,
        CARD_DETECT_SIGNAL_SELECTION: RW
    };
    smih_power_control_register => "SMIH_POWER_CONTROL_REGISTER": u8, RW, SMIH_POWER_CONTROL_REGISTER {
        SD_BUS_POWER: RW, SD_BUS_VOLTAGE_SELECT: RW
    };
    smih_block_gap_control_register => "SMIH_BLOCK_GAP_CONTROL_REGISTER": u8, RW,
        SMIH_BLOCK_GAP_CONTROL_REGISTER {
            STOP_AT_BLOCK_GAP_REQUEST: RW, CONTINUE_REQUEST: RW, READ_WAIT_CONTROL: RW,
            INTERRUPT_AT_BLOCK_GAP: RW
        };
    smih_wakeup_control_register => "SMIH_WAKEUP_CONTROL_REGISTER": u8, RW, SMIH_WAKEUP_CONTROL_REGISTER {
        WAKEUP_EVENT_ENABLE_ON_CARD_INTERRUPT: RW, WAKEUP_EVENT_ENABLE_ON_CARD_INSERTION: RW,
        WAKEUP_EVENT_ENABLE_ON_CARD_REMOVAL: RW
    };
    smih_clock_control_register => "SMIH_CLOCK_CONTROL_REGISTER": u16, RW, SMIH_CLOCK_CONTROL_REGISTER {
        INTERNAL_CLOCK_ENABLE: RW, INTERNAL_CLOCK_STABLE: RO, SD_CLOCK_ENABLE: RW,
        CLOCK_GENERATOR_SELECT: RW, UPPER_BITS_OF_SDCLK_FREQUENCY_SELECT: RW,
        SDCLK_FREQUENCY_SELECT: RW
    };
    smih_timeout_control_register => "SMIH_TIMEOUT_CONTROL_REGISTER": u8, RW, SMIH_TIMEOUT_CONTROL_REGISTER {
        DATA_TIMEOUT_COUNTER_VALUE: RW
    };
    smih_software_reset_register => "SMIH_SOFTWARE_RESET_REGISTER": u8, RW, SMIH_SOFTWARE_RESET_REGISTER {
        SOFTWARE_RESET_FOR_ALL: RW, SOFTWARE_RESET_FOR_CMD_LINE: RW, SOFTWARE_RESET_FOR_DAT_LINE: RW
    };
    smih_normal_interrupt_status_register => "SMIH_NORMAL_INTERRUPT_STATUS_REGISTER": u16, RW,
        SMIH_NORMAL_INTERRUPT {
            COMMAND_COMPLETE: RW, TRANSFER_COMPLETE: RW, BLOCK_GAP_EVENT: RW, DMA_INTERRUPT: RW,
            BUFFER_WRITE_READY: RW, BUFFER_READ_READY: RW, CARD_INSERTION: RW, CARD_REMOVAL: RW,
            CARD_INTERRUPT: RO, RE_TUNING_EVENT: RO, ERROR_INTERRUPT: RO
        };
    smih_error_interrupt_status_register => "SMIH_ERROR_INTERRUPT_STATUS_REGISTER": u16, RW,
        SMIH_ERROR_INTERRUPT {
            COMMAND_TIMEOUT_ERROR: RW, COMMAND_CRC_ERROR: RW, COMMAND_END_BIT_ERROR: RW,
            COMMAND_INDEX_ERROR: RW, DATA_TIMEOUT_ERROR: RW, DATA_CRC_ERROR: RW,
            DATA_END_BIT_ERROR: RW, CURRENT_LIMIT_ERROR: RW, AUTO_CMD_ERROR: RW, ADMA_ERROR: RW,
            TUNING_ERROR: RW
        };
    smih_normal_interrupt_status_enable_register => "SMIH_NORMAL_INTERRUPT_STATUS_ENABLE_REGISTER": u16, RW,
        SMIH_NORMAL_INTERRUPT {
            COMMAND_COMPLETE: RW, TRANSFER_COMPLETE: RW, BLOCK_GAP_EVENT: RW, DMA_INTERRUPT: RW,
            BUFFER_WRITE_READY: RW, BUFFER_READ_READY: RW, CARD_INSERTION: RW, CARD_REMOVAL: RW,
            CARD_INTERRUPT: RW, RE_TUNING_EVENT: RW
        };
    smih_error_interrupt_status_enable_register => "SMIH_ERROR_INTERRUPT_STATUS_ENABLE_REGISTER": u16, RW,
        SMIH_ERROR_INTERRUPT {
            COMMAND_TIMEOUT_ERROR: RW, COMMAND_CRC_ERROR: RW, COMMAND_END_BIT_ERROR: RW,
            COMMAND_INDEX_ERROR: RW, DATA_TIMEOUT_ERROR: RW, DATA_CRC_ERROR: RW,
            DATA_END_BIT_ERROR: RW, CURRENT_LIMIT_ERROR: RW, AUTO_CMD_ERROR: RW, ADMA_ERROR: RW,
            TUNING_ERROR: RW
        };
    smih_normal_interrupt_signal_enable_register => "SMIH_NORMAL_INTERRUPT_SIGNAL_ENABLE_REGISTER": u16, RW,
        SMIH_NORMAL_INTERRUPT {
            COMMAND_COMPLETE: RW, TRANSFER_COMPLETE: RW, BLOCK_GAP_EVENT: RW, DMA_INTERRUPT: RW,
            BUFFER_WRITE_READY: RW, BUFFER_READ_READY: RW, CARD_INSERTION: RW, CARD_REMOVAL: RW,
            CARD_INTERRUPT: RW, RE_TUNING_EVENT: RW
        };
    smih_error_interrupt_signal_enable_register => "SMIH_ERROR_INTERRUPT_SIGNAL_ENABLE_REGISTER": u16, RW,
        SMIH_ERROR_INTERRUPT {
            COMMAND_TIMEOUT_ERROR: RW, COMMAND_CRC_ERROR: RW, COMMAND_END_BIT_ERROR: RW,
            COMMAND_INDEX_ERROR: RW, DATA_TIMEOUT_ERROR: RW, DATA_CRC_ERROR: RW,
            DATA_END_BIT_ERROR: RW, CURRENT_LIMIT_ERROR: RW, AUTO_CMD_ERROR: RW, ADMA_ERROR: RW,
            TUNING_ERROR: RW
        };
    smih_auto_cmd_error_status_register => "SMIH_AUTO_CMD_ERROR_STATUS_REGISTER": u16, RO, SMIH_AUTO_CMD_ERROR {
        AUTO_CMD12_NOT_EXECUTED: RO, AUTO_CMD_TIMEOUT_ERROR: RO, AUTO_CMD_CRC_ERROR: RO,
        AUTO_CMD_END_BIT_ERROR: RO, AUTO_CMD_INDEX_ERROR: RO,
        COMMAND_NOT_ISSUED_BY_AUTO_CMD12_ERROR: RO
    };
    smih_host_control_2_register => "SMIH_HOST_CONTROL_2_REGISTER": u16, RW, SMIH_HOST_CONTROL_2_REGISTER {
        UHS_MODE_SELECT: RW, _1_8V_SIGNALING_ENABLE: RW, DRIVER_STRENGTH_SELECT: RW,
        EXECUTE_TUNING: RW, SAMPLING_CLOCK_SELECT: RW, ASYNCHRONOUS_INTERRUPT_ENABLE: RW,
        PRESET_VALUE_ENABLE: RW
    };
    smih_capabilities_register => "SMIH_CAPABILITIES_REGISTER": u64, RO, SMIH_CAPABILITIES_REGISTER {
        TIMEOUT_CLOCK_FREQUENCY: RO, TIMEOUT_CLOCK_UNIT: RO, BASE_CLOCK_FREQUENCY_FOR_SD_CLOCK: RO,
        MAX_BLOCK_LENGTH: RO, EMBEDDED_8_BIT_SUPPORT: RO, ADMA2_SUPPORT: RO,
        HIGH_SPEED_SUPPORT: RO, SDMA_SUPPORT: RO, SUSPEND_RESUME_SUPPORT: RO,
        VOLTAGE_SUPPORT_3_3V: RO, VOLTAGE_SUPPORT_3_0V: RO, VOLTAGE_SUPPORT_1_8V: RO,
        SYSTEM_BUS_64_BIT_SUPPORT: RO, ASYNCHRONOUS_INTERRUPT_SUPPORT: RO, SLOT_TYPE: RO,
        SDR50_SUPPORT: RO, SDR104_SUPPORT: RO, DDR50_SUPPORT: RO, DRIVER_TYPE_A_SUPPORT: RO,
        DRIVER_TYPE_C_SUPPORT: RO, DRIVER_TYPE_D_SUPPORT: RO, TIMER_COUNT_FOR_RE_TUNING: RO,
        USE_TUNING_FOR_SDR50: RO, RE_TUNING_MODES: RO, CLOCK_MULTIPLIER: RO
    };
    smih_maximum_current_capabilities_register => "SMIH_MAXIMUM_CURRENT_CAPABILITIES_REGISTER": u64, RO,
        SMIH_MAXIMUM_CURRENT_CAPABILITIES_REGISTER {
            MAXIMUM_CURRENT_FOR_3_3V: RO, MAXIMUM_CURRENT_FOR_3_0V: RO, MAXIMUM_CURRENT_FOR_1_8V: RO
        };
    smih_force_event_register_for_auto_cmd_error_status =>
        "SMIH_FORCE_EVENT_REGISTER_FOR_AUTO_CMD_ERROR_STATUS": u16, WO;
    smih_force_event_register_for_error_interrupt_status =>
        "SMIH_FORCE_EVENT_REGISTER_FOR_ERROR_INTERRUPT_STATUS": u16, WO;
    smih_adma_error_status_register => "SMIH_ADMA_ERROR_STATUS_REGISTER": u8, RO, SMIH_ADMA_ERROR_STATUS_REGISTER {
        ADMA_ERROR_STATE: RO, ADMA_LENGTH_MISMATCH_ERROR: RO
    };
    smih_adma_system_address0_register => "SMIH_ADMA_SYSTEM_ADDRESS0_REGISTER": u32, RW;
    smih_adma_system_address1_register => "SMIH_ADMA_SYSTEM_ADDRESS1_REGISTER": u32, RW;
    smih_preset_value_registers[8] => "SMIH_PRESET_VALUE_REGISTERS": u16, RO, SMIH_PRESET_VALUE {
        SDCLK_FREQUENCY_SELECT_VALUE: RO, CLOCK_GENERATOR_SELECT_VALUE: RO,
        DRIVER_STRENGTH_SELECT_VALUE: RO
    };
    smih_slot_interrupt_status_register => "SMIH_SLOT_INTERRUPT_STATUS_REGISTER": u16, RO;
    smih_host_controller_version_register => "SMIH_HOST_CONTROLLER_VERSION_REGISTER": u16, RO,
        SMIH_HOST_CONTROLLER_VERSION_REGISTER {
            SPECIFICATION_VERSION_NUMBER: RO, VENDOR_VERSION_NUMBER: RO
        };
});

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::LocalRegisterCopy;

    fn register(name: &str) -> &'static crate::memory_map::RegisterInfo {
        LAYOUT
            .registers
            .iter()
            .find(|register| register.name == name)
            .unwrap()
    }

    #[test]
    fn mixed_widths() {
        assert_eq!(register("SMIH_HOST_CONTROL_1_REGISTER").width, 8);
        assert_eq!(register("SMIH_CLOCK_CONTROL_REGISTER").width, 16);
        assert_eq!(register("SMIH_PRESENT_STATE_REGISTER").width, 32);
        let caps = register("SMIH_CAPABILITIES_REGISTER");
        assert_eq!((caps.offset, caps.width), (0x40, 64));
    }

    #[test]
    fn signaling_switch_keeps_its_register_name() {
        let field = register("SMIH_HOST_CONTROL_2_REGISTER")
            .field("_1_8V_SIGNALING_ENABLE")
            .unwrap();
        assert_eq!((field.offset, field.width), (3, 1));

        let mut control: LocalRegisterCopy<u16, SMIH_HOST_CONTROL_2_REGISTER::Register> =
            LocalRegisterCopy::new(0);
        control.modify(SMIH_HOST_CONTROL_2_REGISTER::_1_8V_SIGNALING_ENABLE::SET);
        assert_eq!(control.get(), 0x0008);
    }

    #[test]
    fn capability_fields_above_bit_31() {
        let multiplier = register("SMIH_CAPABILITIES_REGISTER")
            .field("CLOCK_MULTIPLIER")
            .unwrap();
        assert_eq!((multiplier.offset, multiplier.width), (48, 8));
        assert_eq!(multiplier.mask(), 0x00ff_0000_0000_0000);

        let caps: LocalRegisterCopy<u64, SMIH_CAPABILITIES_REGISTER::Register> =
            LocalRegisterCopy::new(0x0000_0003_2df4_32b2);
        assert!(caps.is_set(SMIH_CAPABILITIES_REGISTER::SDR50_SUPPORT));
        assert_eq!(caps.read(SMIH_CAPABILITIES_REGISTER::BASE_CLOCK_FREQUENCY_FOR_SD_CLOCK), 0x32);
    }

    #[test]
    fn single_block_read_command() {
        let mut command: LocalRegisterCopy<u16, SMIH_COMMAND_REGISTER::Register> =
            LocalRegisterCopy::new(0);
        command.modify(
            SMIH_COMMAND_REGISTER::COMMAND_INDEX.val(17)
                + SMIH_COMMAND_REGISTER::DATA_PRESENT_SELECT::SET
                + SMIH_COMMAND_REGISTER::COMMAND_INDEX_CHECK_ENABLE::SET
                + SMIH_COMMAND_REGISTER::COMMAND_CRC_CHECK_ENABLE::SET
                + SMIH_COMMAND_REGISTER::RESPONSE_TYPE_SELECT::Length48,
        );
        assert_eq!(command.get(), 0x113a);
    }
}
