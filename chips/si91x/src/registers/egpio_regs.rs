// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

// Enhanced GPIO controller. EGPIO drives the high power pads and EGPIO1 the
// ULP pads; both expose the same register file.

use core::mem::{offset_of, size_of};

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::Layout;

pub const EGPIO_PARAM_PINS: usize = 80;
pub const EGPIO_PARAM_PORTS: usize = 6;
pub const EGPIO_PARAM_PIN_INTERRUPTS: usize = 8;
pub const EGPIO_PARAM_GROUP_INTERRUPTS: usize = 4;
/// Pins per port.
pub const EGPIO_PARAM_PORT_WIDTH: u32 = 16;

register_structs! {
    pub PinConfigRegisters {
        (0x000 => pub gpio_config_reg: ReadWrite<u32, GPIO_CONFIG_REG::Register>),
        /// Pad level of a single pin
        (0x004 => pub bit_load_reg: ReadWrite<u32, BIT_LOAD_REG::Register>),
        (0x008 => pub word_load_reg: ReadWrite<u32, WORD_LOAD_REG::Register>),
        (0x00c => _reserved0),
        (0x010 => @END),
    },

    pub PortConfigRegisters {
        (0x000 => pub port_load_reg: ReadWrite<u32, PORT_LOAD_REG::Register>),
        (0x004 => pub port_set_reg: WriteOnly<u32, PORT_SET_REG::Register>),
        (0x008 => pub port_clear_reg: WriteOnly<u32, PORT_CLEAR_REG::Register>),
        (0x00c => pub port_masked_load_reg: ReadWrite<u32, PORT_MASKED_LOAD_REG::Register>),
        (0x010 => pub port_toggle_reg: WriteOnly<u32, PORT_TOGGLE_REG::Register>),
        (0x014 => pub port_read_reg: ReadOnly<u32, PORT_READ_REG::Register>),
        (0x018 => _reserved0),
        (0x040 => @END),
    },

    pub PinInterruptRegisters {
        (0x000 => pub gpio_intr_ctrl: ReadWrite<u32, GPIO_INTR_CTRL::Register>),
        (0x004 => pub gpio_intr_status: ReadWrite<u32, GPIO_INTR_STATUS::Register>),
        (0x008 => @END),
    },

    pub GroupInterruptRegisters {
        (0x000 => pub gpio_grp_intr_ctrl_reg: ReadWrite<u32, GPIO_GRP_INTR_CTRL_REG::Register>),
        (0x004 => pub gpio_grp_intr_sts: ReadWrite<u32, GPIO_GRP_INTR_STS::Register>),
        (0x008 => @END),
    },

    pub EgpioRegisters {
        (0x0000 => pub pin_config: [PinConfigRegisters; EGPIO_PARAM_PINS]),
        (0x0500 => _reserved0),
        (0x0800 => pub port_config: [PortConfigRegisters; EGPIO_PARAM_PORTS]),
        (0x0980 => _reserved1),
        (0x1000 => pub intr: [PinInterruptRegisters; EGPIO_PARAM_PIN_INTERRUPTS]),
        (0x1040 => _reserved2),
        (0x1080 => pub gpio_grp_intr: [GroupInterruptRegisters; EGPIO_PARAM_GROUP_INTERRUPTS]),
        (0x10a0 => @END),
    }
}

register_bitfields![u32,
    pub GPIO_CONFIG_REG [
        /// 1 = input
        DIRECTION OFFSET(0) NUMBITS(1) [
            Output = 0,
            Input = 1
        ],
        PORTMASK OFFSET(1) NUMBITS(1) [],
        /// Pad function select
        MODE OFFSET(2) NUMBITS(4) [],
        GROUP_INTERRUPT1_ENABLE OFFSET(8) NUMBITS(1) [],
        GROUP_INTERRUPT1_POLARITY OFFSET(9) NUMBITS(1) [],
        GROUP_INTERRUPT2_ENABLE OFFSET(10) NUMBITS(1) [],
        GROUP_INTERRUPT2_POLARITY OFFSET(11) NUMBITS(1) []
    ],
    pub BIT_LOAD_REG [
        BIT_LOAD OFFSET(0) NUMBITS(1) []
    ],
    pub WORD_LOAD_REG [
        WORD_LOAD OFFSET(0) NUMBITS(16) []
    ],
    pub PORT_LOAD_REG [
        PORT_LOAD OFFSET(0) NUMBITS(16) []
    ],
    pub PORT_SET_REG [
        PORT_SET OFFSET(0) NUMBITS(16) []
    ],
    pub PORT_CLEAR_REG [
        PORT_CLEAR OFFSET(0) NUMBITS(16) []
    ],
    /// Loads the pins whose `PORTMASK` bit is clear
    pub PORT_MASKED_LOAD_REG [
        PORT_MASKED_LOAD OFFSET(0) NUMBITS(16) []
    ],
    pub PORT_TOGGLE_REG [
        PORT_TOGGLE OFFSET(0) NUMBITS(16) []
    ],
    pub PORT_READ_REG [
        PORT_READ OFFSET(0) NUMBITS(16) []
    ],
    pub GPIO_INTR_CTRL [
        LEVEL_HIGH_ENABLE OFFSET(0) NUMBITS(1) [],
        LEVEL_LOW_ENABLE OFFSET(1) NUMBITS(1) [],
        RISE_EDGE_ENABLE OFFSET(2) NUMBITS(1) [],
        FALL_EDGE_ENABLE OFFSET(3) NUMBITS(1) [],
        MASK OFFSET(4) NUMBITS(1) [],
        PIN_NUMBER OFFSET(8) NUMBITS(4) [],
        PORT_NUMBER OFFSET(12) NUMBITS(2) []
    ],
    pub GPIO_INTR_STATUS [
        INTERRUPT_STATUS OFFSET(0) NUMBITS(1) [],
        RISE_EDGE_STATUS OFFSET(1) NUMBITS(1) [],
        FALL_EDGE_STATUS OFFSET(2) NUMBITS(1) [],
        MASK_SET OFFSET(3) NUMBITS(1) [],
        MASK_CLEAR OFFSET(4) NUMBITS(1) []
    ],
    pub GPIO_GRP_INTR_CTRL_REG [
        /// 0 = AND of the member pins, 1 = OR
        AND_OR OFFSET(0) NUMBITS(1) [],
        LEVEL_EDGE OFFSET(1) NUMBITS(1) [],
        ENABLE_WAKEUP OFFSET(2) NUMBITS(1) [],
        ENABLE_INTERRUPT OFFSET(3) NUMBITS(1) [],
        MASK OFFSET(4) NUMBITS(1) []
    ],
    pub GPIO_GRP_INTR_STS [
        INTERRUPT_STATUS OFFSET(0) NUMBITS(1) [],
        WAKEUP OFFSET(1) NUMBITS(1) [],
        MASK_SET OFFSET(3) NUMBITS(1) [],
        MASK_CLEAR OFFSET(4) NUMBITS(1) []
    ]
];

const _: () = assert!(size_of::<PinConfigRegisters>() == 0x10);
const _: () = assert!(size_of::<PortConfigRegisters>() == 0x40);
const _: () = assert!(offset_of!(EgpioRegisters, port_config) == 0x800);
const _: () = assert!(offset_of!(EgpioRegisters, gpio_grp_intr) == 0x1080);

pub static LAYOUT: Layout = layout!(EgpioRegisters {}
    clusters {
        pin_config[EGPIO_PARAM_PINS] => "PIN_CONFIG": PinConfigRegisters {
            gpio_config_reg => "GPIO_CONFIG_REG": u32, RW, GPIO_CONFIG_REG {
                DIRECTION: RW, PORTMASK: RW, MODE: RW, GROUP_INTERRUPT1_ENABLE: RW,
                GROUP_INTERRUPT1_POLARITY: RW, GROUP_INTERRUPT2_ENABLE: RW,
                GROUP_INTERRUPT2_POLARITY: RW
            };
            bit_load_reg => "BIT_LOAD_REG": u32, RW, BIT_LOAD_REG { BIT_LOAD: RW };
            word_load_reg => "WORD_LOAD_REG": u32, RW, WORD_LOAD_REG { WORD_LOAD: RW };
        };
        port_config[EGPIO_PARAM_PORTS] => "PORT_CONFIG": PortConfigRegisters {
            port_load_reg => "PORT_LOAD_REG": u32, RW, PORT_LOAD_REG { PORT_LOAD: RW };
            port_set_reg => "PORT_SET_REG": u32, WO, PORT_SET_REG { PORT_SET: WO };
            port_clear_reg => "PORT_CLEAR_REG": u32, WO, PORT_CLEAR_REG { PORT_CLEAR: WO };
            port_masked_load_reg => "PORT_MASKED_LOAD_REG": u32, RW, PORT_MASKED_LOAD_REG { PORT_MASKED_LOAD: RW };
            port_toggle_reg => "PORT_TOGGLE_REG": u32, WO, PORT_TOGGLE_REG { PORT_TOGGLE: WO };
            port_read_reg => "PORT_READ_REG": u32, RO, PORT_READ_REG { PORT_READ: RO };
        };
        intr[EGPIO_PARAM_PIN_INTERRUPTS] => "INTR": PinInterruptRegisters {
            gpio_intr_ctrl => "GPIO_INTR_CTRL": u32, RW, GPIO_INTR_CTRL {
                LEVEL_HIGH_ENABLE: RW, LEVEL_LOW_ENABLE: RW, RISE_EDGE_ENABLE: RW,
                FALL_EDGE_ENABLE: RW, MASK: RW, PIN_NUMBER: RW, PORT_NUMBER: RW
            };
            gpio_intr_status => "GPIO_INTR_STATUS": u32, RW, GPIO_INTR_STATUS {
                INTERRUPT_STATUS: RW, RISE_EDGE_STATUS: RO, FALL_EDGE_STATUS: RO,
                MASK_SET: WO, MASK_CLEAR: WO
            };
        };
        gpio_grp_intr[EGPIO_PARAM_GROUP_INTERRUPTS] => "GPIO_GRP_INTR": GroupInterruptRegisters {
            gpio_grp_intr_ctrl_reg => "GPIO_GRP_INTR_CTRL_REG": u32, RW, GPIO_GRP_INTR_CTRL_REG {
                AND_OR: RW, LEVEL_EDGE: RW, ENABLE_WAKEUP: RW, ENABLE_INTERRUPT: RW, MASK: RW
            };
            gpio_grp_intr_sts => "GPIO_GRP_INTR_STS": u32, RW, GPIO_GRP_INTR_STS {
                INTERRUPT_STATUS: RW, WAKEUP: RO, MASK_SET: WO, MASK_CLEAR: WO
            };
        };
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::interfaces::{ReadWriteable, Readable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn pin_mode_and_direction() {
        let config: InMemoryRegister<u32, GPIO_CONFIG_REG::Register> = InMemoryRegister::new(0);
        config.modify(GPIO_CONFIG_REG::MODE.val(6) + GPIO_CONFIG_REG::DIRECTION::Input);
        assert_eq!(config.get(), (6 << 2) | 1);
        assert_eq!(config.read(GPIO_CONFIG_REG::MODE), 6);
    }

    #[test]
    fn cluster_strides() {
        let strides: [(&str, usize, usize); 4] = [
            ("PIN_CONFIG", 0x0000, 0x10),
            ("PORT_CONFIG", 0x0800, 0x40),
            ("INTR", 0x1000, 0x08),
            ("GPIO_GRP_INTR", 0x1080, 0x08),
        ];
        for (cluster, (name, offset, stride)) in LAYOUT.clusters.iter().zip(strides) {
            assert_eq!(cluster.name, name);
            assert_eq!(cluster.offset, offset);
            assert_eq!(cluster.stride, stride);
        }
        assert_eq!(LAYOUT.size, 0x10a0);
    }

    #[test]
    fn port_registers_name_their_pins_field() {
        let port = &LAYOUT.clusters[1];
        for name in ["LOAD", "SET", "CLEAR", "MASKED_LOAD", "TOGGLE", "READ"] {
            let reg = port.register(&format!("PORT_{}_REG", name)).unwrap();
            let field = reg.field(&format!("PORT_{}", name)).unwrap();
            assert_eq!(field.mask(), 0xffff);
            assert!(reg.field("PINS").is_err());
        }
        let masked = port.register("PORT_MASKED_LOAD_REG").unwrap();
        assert_eq!(masked.offset, 0x0c);
    }
}
