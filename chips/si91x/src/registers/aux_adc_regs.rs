// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Auxiliary ADC, DAC and analog comparators (`AUX_ADC_DAC_COMP`).
//!
//! The ADC samples up to sixteen channels. Each channel has a four word
//! bitmap describing its input mux and sampling pattern, plus an offset and
//! a frequency word. Samples are collected either in a FIFO or, with the
//! internal DMA enabled, in ULP SRAM using ping/pong buffers.
//!
//! The comparator, brown out and LDO controls for the ULP analog domain
//! share this block.

use core::mem::{offset_of, size_of};

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::Layout;

pub const AUX_ADC_PARAM_CHANNELS: usize = 16;

register_structs! {
    pub AdcChannelBitmapRegisters {
        (0x000 => pub adc_ch_bit_map_config_0: ReadWrite<u32, ADC_CH_BIT_MAP_CONFIG::Register>),
        (0x004 => pub adc_ch_bit_map_config_1: ReadWrite<u32, ADC_CH_BIT_MAP_CONFIG::Register>),
        (0x008 => pub adc_ch_bit_map_config_2: ReadWrite<u32, ADC_CH_BIT_MAP_CONFIG::Register>),
        (0x00c => pub adc_ch_bit_map_config_3: ReadWrite<u32, ADC_CH_BIT_MAP_CONFIG::Register>),
        (0x010 => @END),
    }
}

register_structs! {
    pub AuxAdcDacCompRegisters {
        (0x000 => pub auxdac_ctrl_1: ReadWrite<u32, AUXDAC_CTRL_1::Register>),
        (0x004 => pub auxadc_ctrl_1: ReadWrite<u32, AUXADC_CTRL_1::Register>),
        (0x008 => pub auxdac_clk_div_fac: ReadWrite<u32, AUXDAC_CLK_DIV_FAC::Register>),
        (0x00c => pub auxadc_clk_div_fac: ReadWrite<u32, AUXADC_CLK_DIV_FAC::Register>),
        (0x010 => pub auxdac_data_reg: ReadWrite<u32, AUXDAC_DATA_REG::Register>),
        /// Static mode sample
        (0x014 => pub auxadc_data: ReadOnly<u32, AUXADC_DATA::Register>),
        (0x018 => pub adc_det_thr_ctrl_0: ReadWrite<u32, ADC_DET_THR_CTRL_0::Register>),
        (0x01c => pub adc_det_thr_ctrl_1: ReadWrite<u32, ADC_DET_THR_CTRL_1::Register>),
        (0x020 => pub intr_status_reg: ReadOnly<u32, INTR_STATUS_REG::Register>),
        (0x024 => pub intr_mask_reg: ReadWrite<u32, INTR_MASK_REG::Register>),
        (0x028 => pub intr_clear_reg: WriteOnly<u32, INTR_CLEAR_REG::Register>),
        (0x02c => pub fifo_status_reg: ReadOnly<u32, FIFO_STATUS_REG::Register>),
        (0x030 => pub adc_fifo_threshold: ReadWrite<u32, ADC_FIFO_THRESHOLD::Register>),
        (0x034 => pub adc_ctrl_reg_2: ReadWrite<u32, ADC_CTRL_REG_2::Register>),
        (0x038 => pub adc_seq_ctrl: ReadWrite<u32, ADC_SEQ_CTRL::Register>),
        (0x03c => pub adc_int_mem_1: ReadWrite<u32, ADC_INT_MEM_1::Register>),
        (0x040 => pub adc_int_mem_2: ReadWrite<u32>),
        (0x044 => pub internal_dma_ch_enable: ReadWrite<u32, INTERNAL_DMA_CH_ENABLE::Register>),
        (0x048 => pub vad_bbp_id: ReadWrite<u32, VAD_BBP_ID::Register>),
        (0x04c => _reserved0),
        (0x050 => pub adc_ch_bit_map_config: [AdcChannelBitmapRegisters; AUX_ADC_PARAM_CHANNELS]),
        (0x150 => pub adc_ch_offset: [ReadWrite<u32, ADC_CH_OFFSET::Register>; AUX_ADC_PARAM_CHANNELS]),
        (0x190 => pub adc_ch_freq: [ReadWrite<u32, ADC_CH_FREQ::Register>; AUX_ADC_PARAM_CHANNELS]),
        (0x1d0 => _reserved1),
        (0x1e0 => pub bjt_temp_sensor: ReadWrite<u32, BJT_TEMP_SENSOR::Register>),
        (0x1e4 => pub ts_ptat_enable: ReadWrite<u32, TS_PTAT_ENABLE::Register>),
        (0x1e8 => _reserved2),
        (0x1f0 => pub comparator1: ReadWrite<u32, COMPARATOR1::Register>),
        (0x1f4 => pub bod: ReadWrite<u32, BOD::Register>),
        (0x1f8 => pub aux_ldo: ReadWrite<u32, AUX_LDO::Register>),
        (0x1fc => pub auxdac_conig_1: ReadWrite<u32, AUXDAC_CONIG_1::Register>),
        (0x200 => pub auxadc_config_1: ReadWrite<u32, AUXADC_CONFIG::Register>),
        (0x204 => _reserved3),
        (0x210 => pub auxadc_config_2: ReadWrite<u32, AUXADC_CONFIG::Register>),
        (0x214 => @END),
    }
}

register_bitfields![u32,
    pub AUXDAC_CTRL_1 [
        ENDAC_FIFO_CONFIG OFFSET(0) NUMBITS(1) [],
        DAC_STATIC_MODE OFFSET(1) NUMBITS(1) [],
        DAC_FIFO_FLUSH OFFSET(2) NUMBITS(1) [],
        DAC_FIFO_THRESHOLD OFFSET(3) NUMBITS(3) [],
        DAC_ENABLE_F OFFSET(6) NUMBITS(1) [],
        DAC_FIFO_AEMPTY_THRESHOLD OFFSET(7) NUMBITS(4) [],
        /// DAC output drives the ADC input
        DAC_TO_CTRL_ADC OFFSET(11) NUMBITS(1) []
    ],
    pub AUXADC_CTRL_1 [
        ADC_ENABLE OFFSET(0) NUMBITS(1) [],
        ADC_STATIC_MODE OFFSET(1) NUMBITS(1) [],
        ADC_FIFO_FLUSH OFFSET(2) NUMBITS(1) [],
        ADC_FIFO_THRESHOLD OFFSET(3) NUMBITS(4) [],
        ADC_MULTIPLE_CHAN_ACTIVE OFFSET(7) NUMBITS(1) [],
        ADC_NUM_PHASE OFFSET(8) NUMBITS(1) [],
        BYPASS_NOISE_AVG OFFSET(9) NUMBITS(1) [],
        EN_ADC_CLK OFFSET(10) NUMBITS(1) []
    ],
    pub AUXDAC_CLK_DIV_FAC [
        DAC_CLK_DIV_FAC OFFSET(0) NUMBITS(10) []
    ],
    pub AUXADC_CLK_DIV_FAC [
        ADC_CLK_DIV_FAC OFFSET(0) NUMBITS(10) [],
        ADC_CLK_ON_DUR OFFSET(16) NUMBITS(9) []
    ],
    pub AUXDAC_DATA_REG [
        AUXDAC_DATA OFFSET(0) NUMBITS(10) []
    ],
    pub AUXADC_DATA [
        AUXADC_DATA OFFSET(0) NUMBITS(12) [],
        AUXADC_CH_ID OFFSET(12) NUMBITS(4) []
    ],
    pub ADC_DET_THR_CTRL_0 [
        ADC_INPUT_DETECTION_THRESHOLD_0 OFFSET(0) NUMBITS(8) [],
        COMP_LESS_THAN_EN OFFSET(8) NUMBITS(1) [],
        COMP_GRTR_THAN_EN OFFSET(9) NUMBITS(1) [],
        COMP_EQ_EN OFFSET(10) NUMBITS(1) [],
        RANGE_COMPARISON_ENABLE OFFSET(11) NUMBITS(1) [],
        ADC_INPUT_DETECTION_THRESHOLD_1 OFFSET(12) NUMBITS(4) []
    ],
    pub ADC_DET_THR_CTRL_1 [
        ADC_INPUT_DETECTION_THRESHOLD_2 OFFSET(0) NUMBITS(8) [],
        COMP_LESS_THAN_EN OFFSET(8) NUMBITS(1) [],
        COMP_GRTR_THAN_EN OFFSET(9) NUMBITS(1) [],
        COMP_EQ_EN OFFSET(10) NUMBITS(1) [],
        ADC_DETECTION_THRESHOLD_4_UPPER_BITS OFFSET(12) NUMBITS(4) []
    ],
    pub INTR_STATUS_REG [
        DAC_FIFO_EMPTY_INTR OFFSET(0) NUMBITS(1) [],
        DAC_FIFO_AEMPTY_INTR OFFSET(1) NUMBITS(1) [],
        ADC_FIFO_FULL_INTR OFFSET(2) NUMBITS(1) [],
        ADC_FIFO_AFULL_INTR OFFSET(3) NUMBITS(1) [],
        ADC_FIFO_OVERFLOW_INTR OFFSET(4) NUMBITS(1) [],
        DAC_FIFO_UNDERRUN_INTR OFFSET(5) NUMBITS(1) [],
        THRESHOLD_DETECTION_INTR OFFSET(6) NUMBITS(1) [],
        ADC_STATIC_MODE_DATA_INTR OFFSET(7) NUMBITS(1) [],
        DAC_STATIC_MODE_DATA_INTR OFFSET(8) NUMBITS(1) [],
        /// Internal DMA switched from the ping to the pong buffer
        FIRST_MEM_SWITCH_INTR OFFSET(9) NUMBITS(1) []
    ],
    pub INTR_MASK_REG [
        DAC_FIFO_EMPTY_INTR_MASK OFFSET(0) NUMBITS(1) [],
        DAC_FIFO_AEMPTY_INTR_MASK OFFSET(1) NUMBITS(1) [],
        ADC_FIFO_FULL_INTR_MASK OFFSET(2) NUMBITS(1) [],
        ADC_FIFO_AFULL_INTR_MASK OFFSET(3) NUMBITS(1) [],
        ADC_FIFO_OVERFLOW_INTR_MASK OFFSET(4) NUMBITS(1) [],
        DAC_FIFO_UNDERRUN_INTR_MASK OFFSET(5) NUMBITS(1) [],
        THRESHOLD_DETECTION_INTR_EN OFFSET(6) NUMBITS(1) [],
        ADC_STATIC_MODE_DATA_INTR_MASK OFFSET(7) NUMBITS(1) [],
        DAC_STATIC_MODE_DATA_INTR_MASK OFFSET(8) NUMBITS(1) [],
        FIRST_MEM_SWITCH_INTR_MASK OFFSET(9) NUMBITS(1) []
    ],
    pub INTR_CLEAR_REG [
        CLR_INTR OFFSET(0) NUMBITS(1) [],
        /// One bit per channel
        INTR_CLEAR_REG OFFSET(1) NUMBITS(16) []
    ],
    pub FIFO_STATUS_REG [
        ADC_FIFO_FULL OFFSET(0) NUMBITS(1) [],
        ADC_FIFO_AFULL OFFSET(1) NUMBITS(1) [],
        ADC_FIFO_EMPTY OFFSET(2) NUMBITS(1) [],
        ADC_FIFO_AEMPTY OFFSET(3) NUMBITS(1) [],
        DAC_FIFO_FULL OFFSET(4) NUMBITS(1) [],
        DAC_FIFO_AFULL OFFSET(5) NUMBITS(1) [],
        DAC_FIFO_EMPTY OFFSET(6) NUMBITS(1) [],
        DAC_FIFO_AEMPTY OFFSET(7) NUMBITS(1) []
    ],
    pub ADC_FIFO_THRESHOLD [
        ADC_FIFO_AEMPTY_THRESHOLD OFFSET(0) NUMBITS(4) [],
        ADC_FIFO_AFULL_THRESHOLD OFFSET(4) NUMBITS(4) []
    ],
    pub ADC_CTRL_REG_2 [
        EXT_TRIGGER_SEL_1 OFFSET(0) NUMBITS(2) [],
        EXT_TRIGGER_SEL_2 OFFSET(2) NUMBITS(2) [],
        EXT_TRIGGER_SEL_3 OFFSET(4) NUMBITS(2) [],
        EXT_TRIGGER_SEL_4 OFFSET(6) NUMBITS(2) [],
        EXT_TRIG_DETECT_1 OFFSET(8) NUMBITS(2) [
            Disabled = 0,
            Rising = 1,
            Falling = 2,
            Both = 3
        ],
        EXT_TRIG_DETECT_2 OFFSET(10) NUMBITS(2) [],
        EXT_TRIG_DETECT_3 OFFSET(12) NUMBITS(2) [],
        EXT_TRIG_DETECT_4 OFFSET(14) NUMBITS(2) [],
        /// Channel sampled when trigger 1 fires
        TRIG_1_MATCH OFFSET(16) NUMBITS(4) [],
        TRIG_2_MATCH OFFSET(20) NUMBITS(4) [],
        TRIG_3_MATCH OFFSET(24) NUMBITS(4) [],
        TRIG_4_MATCH OFFSET(28) NUMBITS(4) []
    ],
    pub ADC_SEQ_CTRL [
        ADC_SEQ_CTRL_PING_PONG OFFSET(0) NUMBITS(16) [],
        ADC_SEQ_CTRL_DMA_MODE OFFSET(16) NUMBITS(16) []
    ],
    pub ADC_INT_MEM_1 [
        PROG_WR_DATA OFFSET(0) NUMBITS(32) []
    ],
    pub INTERNAL_DMA_CH_ENABLE [
        PER_CHANNEL_ENABLE OFFSET(0) NUMBITS(16) [],
        INTERNAL_DMA_ENABLE OFFSET(31) NUMBITS(1) []
    ],
    pub VAD_BBP_ID [
        BPP_ID OFFSET(0) NUMBITS(4) [],
        BPP_EN OFFSET(4) NUMBITS(1) [],
        AUX_ADC_BPP_EN OFFSET(5) NUMBITS(1) []
    ],
    pub ADC_CH_BIT_MAP_CONFIG [
        CHANNEL_BITMAP OFFSET(0) NUMBITS(32) []
    ],
    pub ADC_CH_OFFSET [
        CH_OFFSET OFFSET(0) NUMBITS(16) []
    ],
    pub ADC_CH_FREQ [
        CH_FREQ_VALUE OFFSET(0) NUMBITS(16) []
    ],
    pub BJT_TEMP_SENSOR [
        BJT_EN OFFSET(0) NUMBITS(1) []
    ],
    pub TS_PTAT_ENABLE [
        TS_PTAT_EN OFFSET(0) NUMBITS(1) []
    ],
    pub COMPARATOR1 [
        CMP1_EN OFFSET(0) NUMBITS(1) [],
        CMP1_EN_FILTER OFFSET(1) NUMBITS(1) [],
        CMP1_HYST OFFSET(2) NUMBITS(2) [],
        CMP1_MUX_SEL_P OFFSET(4) NUMBITS(4) [],
        CMP1_MUX_SEL_N OFFSET(8) NUMBITS(4) [],
        CMP2_EN OFFSET(12) NUMBITS(1) [],
        CMP2_EN_FILTER OFFSET(13) NUMBITS(1) [],
        CMP2_HYST OFFSET(14) NUMBITS(2) [],
        CMP2_MUX_SEL_P OFFSET(16) NUMBITS(4) [],
        CMP2_MUX_SEL_N OFFSET(20) NUMBITS(4) []
    ],
    pub BOD [
        BOD_RES_EN OFFSET(0) NUMBITS(1) [],
        BOD_THRSH OFFSET(1) NUMBITS(5) [],
        REFBUF_EN OFFSET(6) NUMBITS(1) [],
        REFBUF_VOLT_SEL OFFSET(7) NUMBITS(4) []
    ],
    pub AUX_LDO [
        LDO_CTRL OFFSET(0) NUMBITS(4) [],
        LDO_DEFAULT_MODE OFFSET(4) NUMBITS(1) [],
        BYPASS_LDO OFFSET(5) NUMBITS(1) [],
        ENABLE_LDO OFFSET(6) NUMBITS(1) []
    ],
    pub AUXDAC_CONIG_1 [
        AUXDAC_EN_S OFFSET(0) NUMBITS(1) [],
        AUXDAC_OUT_MUX_EN OFFSET(1) NUMBITS(1) [],
        AUXDAC_OUT_MUX_SEL OFFSET(2) NUMBITS(1) [],
        AUXDAC_DATA_S OFFSET(3) NUMBITS(10) [],
        AUXDAC_DYN_EN OFFSET(13) NUMBITS(1) []
    ],
    pub AUXADC_CONFIG [
        AUXADC_INP_SEL OFFSET(0) NUMBITS(5) [],
        AUXADC_INN_SEL OFFSET(5) NUMBITS(4) [],
        AUXADC_DIFF_MODE OFFSET(9) NUMBITS(1) [],
        AUXADC_CONFIG_ENABLE OFFSET(10) NUMBITS(1) [],
        AUXADC_DYN_ENABLE OFFSET(11) NUMBITS(1) []
    ]
];

const _: () = assert!(offset_of!(AuxAdcDacCompRegisters, auxadc_data) == 0x14);
const _: () = assert!(offset_of!(AuxAdcDacCompRegisters, intr_mask_reg) == 0x24);
const _: () = assert!(offset_of!(AuxAdcDacCompRegisters, bjt_temp_sensor) == 0x1e0);
const _: () = assert!(size_of::<AuxAdcDacCompRegisters>() == 0x214);

pub static LAYOUT: Layout = layout!(AuxAdcDacCompRegisters {
    auxdac_ctrl_1 => "AUXDAC_CTRL_1": u32, RW, AUXDAC_CTRL_1 {
        ENDAC_FIFO_CONFIG: RW, DAC_STATIC_MODE: RW, DAC_FIFO_FLUSH: RW, DAC_FIFO_THRESHOLD: RW,
        DAC_ENABLE_F: RW, DAC_FIFO_AEMPTY_THRESHOLD: RW, DAC_TO_CTRL_ADC: RW
    };
    auxadc_ctrl_1 => "AUXADC_CTRL_1": u32, RW, AUXADC_CTRL_1 {
        ADC_ENABLE: RW, ADC_STATIC_MODE: RW, ADC_FIFO_FLUSH: RW, ADC_FIFO_THRESHOLD: RW,
        ADC_MULTIPLE_CHAN_ACTIVE: RW, ADC_NUM_PHASE: RW, BYPASS_NOISE_AVG: RW, EN_ADC_CLK: RW
    };
    auxdac_clk_div_fac => "AUXDAC_CLK_DIV_FAC": u32, RW, AUXDAC_CLK_DIV_FAC { DAC_CLK_DIV_FAC: RW };
    auxadc_clk_div_fac => "AUXADC_CLK_DIV_FAC": u32, RW, AUXADC_CLK_DIV_FAC {
        ADC_CLK_DIV_FAC: RW, ADC_CLK_ON_DUR: RW
    };
    auxdac_data_reg => "AUXDAC_DATA_REG": u32, RW, AUXDAC_DATA_REG { AUXDAC_DATA: RW };
    auxadc_data => "AUXADC_DATA": u32, RO, AUXADC_DATA { AUXADC_DATA: RO, AUXADC_CH_ID: RO };
    adc_det_thr_ctrl_0 => "ADC_DET_THR_CTRL_0": u32, RW, ADC_DET_THR_CTRL_0 {
        ADC_INPUT_DETECTION_THRESHOLD_0: RW, COMP_LESS_THAN_EN: RW, COMP_GRTR_THAN_EN: RW,
        COMP_EQ_EN: RW, RANGE_COMPARISON_ENABLE: RW, ADC_INPUT_DETECTION_THRESHOLD_1: RW
    };
    adc_det_thr_ctrl_1 => "ADC_DET_THR_CTRL_1": u32, RW, ADC_DET_THR_CTRL_1 {
        ADC_INPUT_DETECTION_THRESHOLD_2: RW, COMP_LESS_THAN_EN: RW, COMP_GRTR_THAN_EN: RW,
        COMP_EQ_EN: RW, ADC_DETECTION_THRESHOLD_4_UPPER_BITS: RW
    };
    intr_status_reg => "INTR_STATUS_REG": u32, RO, INTR_STATUS_REG {
        DAC_FIFO_EMPTY_INTR: RO, DAC_FIFO_AEMPTY_INTR: RO, ADC_FIFO_FULL_INTR: RO,
        ADC_FIFO_AFULL_INTR: RO, ADC_FIFO_OVERFLOW_INTR: RO, DAC_FIFO_UNDERRUN_INTR: RO,
        THRESHOLD_DETECTION_INTR: RO, ADC_STATIC_MODE_DATA_INTR: RO,
        DAC_STATIC_MODE_DATA_INTR: RO, FIRST_MEM_SWITCH_INTR: RO
    };
    intr_mask_reg => "INTR_MASK_REG": u32, RW, INTR_MASK_REG {
        DAC_FIFO_EMPTY_INTR_MASK: RW, DAC_FIFO_AEMPTY_INTR_MASK: RW, ADC_FIFO_FULL_INTR_MASK: RW,
        ADC_FIFO_AFULL_INTR_MASK: RW, ADC_FIFO_OVERFLOW_INTR_MASK: RW,
        DAC_FIFO_UNDERRUN_INTR_MASK: RW, THRESHOLD_DETECTION_INTR_EN: RW,
        ADC_STATIC_MODE_DATA_INTR_MASK: RW, DAC_STATIC_MODE_DATA_INTR_MASK: RW,
        FIRST_MEM_SWITCH_INTR_MASK: RW
    };
    intr_clear_reg => "INTR_CLEAR_REG": u32, WO, INTR_CLEAR_REG { CLR_INTR: WO, INTR_CLEAR_REG: WO };
    fifo_status_reg => "FIFO_STATUS_REG": u32, RO, FIFO_STATUS_REG {
        ADC_FIFO_FULL: RO, ADC_FIFO_AFULL: RO, ADC_FIFO_EMPTY: RO, ADC_FIFO_AEMPTY: RO,
        DAC_FIFO_FULL: RO, DAC_FIFO_AFULL: RO, DAC_FIFO_EMPTY: RO, DAC_FIFO_AEMPTY: RO
    };
    adc_fifo_threshold => "ADC_FIFO_THRESHOLD": u32, RW, ADC_FIFO_THRESHOLD {
        ADC_FIFO_AEMPTY_THRESHOLD: RW, ADC_FIFO_AFULL_THRESHOLD: RW
    };
    adc_ctrl_reg_2 => "ADC_CTRL_REG_2": u32, RW, ADC_CTRL_REG_2 {
        EXT_TRIGGER_SEL_1: RW, EXT_TRIGGER_SEL_2: RW, EXT_TRIGGER_SEL_3: RW, EXT_TRIGGER_SEL_4: RW,
        EXT_TRIG_DETECT_1: RW, EXT_TRIG_DETECT_2: RW, EXT_TRIG_DETECT_3: RW, EXT_TRIG_DETECT_4: RW,
        TRIG_1_MATCH: RO, TRIG_2_MATCH: RO, TRIG_3_MATCH: RO, TRIG_4_MATCH: RO
    };
    adc_seq_ctrl => "ADC_SEQ_CTRL": u32, RW, ADC_SEQ_CTRL {
        ADC_SEQ_CTRL_PING_PONG: RW, ADC_SEQ_CTRL_DMA_MODE: RW
    };
    adc_int_mem_1 => "ADC_INT_MEM_1": u32, RW, ADC_INT_MEM_1 { PROG_WR_DATA: RW };
    adc_int_mem_2 => "ADC_INT_MEM_2": u32, RW;
    internal_dma_ch_enable => "INTERNAL_DMA_CH_ENABLE": u32, RW, INTERNAL_DMA_CH_ENABLE {
        PER_CHANNEL_ENABLE: RW, INTERNAL_DMA_ENABLE: RW
    };
    vad_bbp_id => "VAD_BBP_ID": u32, RW, VAD_BBP_ID { BPP_ID: RW, BPP_EN: RW, AUX_ADC_BPP_EN: RW };
    adc_ch_offset[AUX_ADC_PARAM_CHANNELS] => "ADC_CH_OFFSET": u32, RW, ADC_CH_OFFSET { CH_OFFSET: RW };
    adc_ch_freq[AUX_ADC_PARAM_CHANNELS] => "ADC_CH_FREQ": u32, RW, ADC_CH_FREQ { CH_FREQ_VALUE: RW };
    bjt_temp_sensor => "BJT_TEMP_SENSOR": u32, RW, BJT_TEMP_SENSOR { BJT_EN: RW };
    ts_ptat_enable => "TS_PTAT_ENABLE": u32, RW, TS_PTAT_ENABLE { TS_PTAT_EN: RW };
    comparator1 => "COMPARATOR1": u32, RW, COMPARATOR1 {
        CMP1_EN: RW, CMP1_EN_FILTER: RW, CMP1_HYST: RW, CMP1_MUX_SEL_P: RW, CMP1_MUX_SEL_N: RW,
        CMP2_EN: RW, CMP2_EN_FILTER: RW, CMP2_HYST: RW, CMP2_MUX_SEL_P: RW, CMP2_MUX_SEL_N: RW
    };
    bod => "BOD": u32, RW, BOD { BOD_RES_EN: RW, BOD_THRSH: RW, REFBUF_EN: RW, REFBUF_VOLT_SEL: RW };
    aux_ldo => "AUX_LDO": u32, RW, AUX_LDO {
        LDO_CTRL: RW, LDO_DEFAULT_MODE: RW, BYPASS_LDO: RW, ENABLE_LDO: RW
    };
    auxdac_conig_1 => "AUXDAC_CONIG_1": u32, RW, AUXDAC_CONIG_1 {
        AUXDAC_EN_S: RW, AUXDAC_OUT_MUX_EN: RW, AUXDAC_OUT_MUX_SEL: RW, AUXDAC_DATA_S: RW,
        AUXDAC_DYN_EN: RW
    };
    auxadc_config_1 => "AUXADC_CONFIG_1": u32, RW, AUXADC_CONFIG {
        AUXADC_INP_SEL: RW, AUXADC_INN_SEL: RW, AUXADC_DIFF_MODE: RW, AUXADC_CONFIG_ENABLE: RW,
        AUXADC_DYN_ENABLE: RW
    };
    auxadc_config_2 => "AUXADC_CONFIG_2": u32, RW, AUXADC_CONFIG {
        AUXADC_INP_SEL: RW, AUXADC_INN_SEL: RW, AUXADC_DIFF_MODE: RW, AUXADC_CONFIG_ENABLE: RW,
        AUXADC_DYN_ENABLE: RW
    };
} clusters {
    adc_ch_bit_map_config[AUX_ADC_PARAM_CHANNELS] => "ADC_CH_BIT_MAP_CONFIG": AdcChannelBitmapRegisters {
        adc_ch_bit_map_config_0 => "ADC_CH_BIT_MAP_CONFIG_0": u32, RW, ADC_CH_BIT_MAP_CONFIG {
            CHANNEL_BITMAP: RW
        };
        adc_ch_bit_map_config_1 => "ADC_CH_BIT_MAP_CONFIG_1": u32, RW, ADC_CH_BIT_MAP_CONFIG {
            CHANNEL_BITMAP: RW
        };
        adc_ch_bit_map_config_2 => "ADC_CH_BIT_MAP_CONFIG_2": u32, RW, ADC_CH_BIT_MAP_CONFIG {
            CHANNEL_BITMAP: RW
        };
        adc_ch_bit_map_config_3 => "ADC_CH_BIT_MAP_CONFIG_3": u32, RW, ADC_CH_BIT_MAP_CONFIG {
            CHANNEL_BITMAP: RW
        };
    };
});

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::interfaces::{ReadWriteable, Readable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn channel_bitmap_cluster() {
        let bitmaps = &LAYOUT.clusters[0];
        assert_eq!(bitmaps.name, "ADC_CH_BIT_MAP_CONFIG");
        assert_eq!((bitmaps.offset, bitmaps.count, bitmaps.stride), (0x50, 16, 0x10));
        let word = bitmaps.register("ADC_CH_BIT_MAP_CONFIG_3").unwrap();
        assert_eq!(bitmaps.element_offset(15).unwrap() + word.offset, 0x14c);
        assert_eq!(word.field("CHANNEL_BITMAP").unwrap().width, 32);
    }

    #[test]
    fn static_mode_conversion() {
        let ctrl: InMemoryRegister<u32, AUXADC_CTRL_1::Register> = InMemoryRegister::new(0);
        ctrl.modify(AUXADC_CTRL_1::ADC_ENABLE::SET + AUXADC_CTRL_1::ADC_STATIC_MODE::SET);
        assert_eq!(ctrl.get(), 0b11);

        let data: InMemoryRegister<u32, AUXADC_DATA::Register> = InMemoryRegister::new(0x3a5c);
        assert_eq!(data.read(AUXADC_DATA::AUXADC_DATA), 0xa5c);
        assert_eq!(data.read(AUXADC_DATA::AUXADC_CH_ID), 3);
    }

    #[test]
    fn config_enable_bit() {
        let config: InMemoryRegister<u32, AUXADC_CONFIG::Register> = InMemoryRegister::new(0);
        config.modify(AUXADC_CONFIG::AUXADC_CONFIG_ENABLE::SET);
        assert_eq!(config.get(), 1 << 10);
    }
}
