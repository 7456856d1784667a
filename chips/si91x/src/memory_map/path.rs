// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Dotted register paths.
//!
//! Accepted shapes:
//!
//! - `PERIPH.REG` and `PERIPH.REG.FIELD`
//! - `PERIPH.REG[i]` and `PERIPH.REG[i].FIELD` for register arrays
//! - `PERIPH.CLUSTER[i].REG` and `PERIPH.CLUSTER[i].REG.FIELD`

use log::trace;

use super::{peripheral, ClusterInfo, FieldInfo, PeripheralInfo, RegisterInfo};
use crate::error::LookupError;

/// Result of resolving a register path.
#[derive(Clone, Copy, Debug)]
pub struct Location {
    pub peripheral: &'static PeripheralInfo,
    /// Cluster and element index, when the register sits in a cluster.
    pub cluster: Option<(&'static ClusterInfo, usize)>,
    pub register: &'static RegisterInfo,
    /// Element index inside a register array, 0 otherwise.
    pub index: usize,
    pub field: Option<&'static FieldInfo>,
    /// Absolute address of the register element.
    pub address: usize,
}

impl Location {
    /// Offset of the register element from the peripheral base.
    pub fn offset(&self) -> usize {
        self.address - self.peripheral.base
    }

    /// Bit offset and width of the field, or of the whole register.
    pub fn bits(&self) -> (u32, u32) {
        match self.field {
            Some(field) => (field.offset, field.width),
            None => (0, self.register.width),
        }
    }
}

struct Segment<'a> {
    name: &'a str,
    index: Option<usize>,
}

fn parse_segment(segment: &str) -> Result<Segment<'_>, LookupError> {
    let segment = segment.trim();
    let (name, index) = match segment.find('[') {
        Some(open) => {
            let digits = segment[open + 1..]
                .strip_suffix(']')
                .ok_or(LookupError::MalformedPath)?;
            let index = digits
                .trim()
                .parse::<usize>()
                .map_err(|_| LookupError::MalformedPath)?;
            (&segment[..open], Some(index))
        }
        None => (segment, None),
    };
    if name.is_empty() {
        return Err(LookupError::MalformedPath);
    }
    Ok(Segment { name, index })
}

fn element_index(index: Option<usize>, count: usize) -> Result<usize, LookupError> {
    match index {
        Some(index) => Ok(index),
        None if count > 1 => Err(LookupError::MissingIndex),
        None => Ok(0),
    }
}

fn field_of(
    register: &'static RegisterInfo,
    segment: Option<&str>,
) -> Result<Option<&'static FieldInfo>, LookupError> {
    match segment {
        None => Ok(None),
        Some(segment) => {
            let segment = parse_segment(segment)?;
            if segment.index.is_some() {
                return Err(LookupError::MalformedPath);
            }
            register.field(segment.name).map(Some)
        }
    }
}

/// Resolves a dotted path such as `"I2C0.IC_ENABLE.EN"` or
/// `"GPDMA_C.CHANNEL_CONFIG[3].CHANNEL_CTRL_REG_CHNL.DMA_BLK_SIZE"` to an
/// absolute address and bit range.
pub fn resolve(path: &str) -> Result<Location, LookupError> {
    let mut segments = path.split('.');
    let head = parse_segment(segments.next().ok_or(LookupError::MalformedPath)?)?;
    if head.index.is_some() {
        return Err(LookupError::MalformedPath);
    }
    let peripheral = peripheral(head.name)?;
    let second = parse_segment(segments.next().ok_or(LookupError::MalformedPath)?)?;

    let location = match peripheral.cluster(second.name) {
        Ok(cluster) => {
            let element = element_index(second.index, cluster.count)?;
            let cluster_offset = cluster.element_offset(element)?;
            let reg_segment = parse_segment(segments.next().ok_or(LookupError::MalformedPath)?)?;
            let register = cluster.register(reg_segment.name)?;
            let index = element_index(reg_segment.index, register.count)?;
            let register_offset = register.element_offset(index)?;
            let field = field_of(register, segments.next())?;
            Location {
                peripheral,
                cluster: Some((cluster, element)),
                register,
                index,
                field,
                address: peripheral.base + cluster_offset + register_offset,
            }
        }
        Err(_) => {
            let register = peripheral.register(second.name)?;
            let index = element_index(second.index, register.count)?;
            let register_offset = register.element_offset(index)?;
            let field = field_of(register, segments.next())?;
            Location {
                peripheral,
                cluster: None,
                register,
                index,
                field,
                address: peripheral.base + register_offset,
            }
        }
    };

    if segments.next().is_some() {
        return Err(LookupError::MalformedPath);
    }
    trace!("{} -> {:#010x}", path, location.address);
    Ok(location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_map::Access;

    #[test]
    fn plain_register_and_field() {
        let location = resolve("I2C0.IC_ENABLE.EN").unwrap();
        assert_eq!(location.address, 0x4401_006c);
        assert_eq!(location.offset(), 0x6c);
        assert_eq!(location.bits(), (0, 1));
        assert_eq!(location.field.unwrap().access, Access::ReadWrite);

        let abort = resolve("I2C0.IC_ENABLE.ABORT").unwrap();
        assert_eq!(abort.bits(), (1, 1));
    }

    #[test]
    fn register_without_field_covers_its_width() {
        let location = resolve("I2C1.IC_ENABLE").unwrap();
        assert_eq!(location.address, 0x4704_006c);
        assert_eq!(location.bits(), (0, 32));
    }

    #[test]
    fn cluster_element() {
        let location =
            resolve("GPDMA_C.CHANNEL_CONFIG[3].CHANNEL_CTRL_REG_CHNL.DMA_BLK_SIZE").unwrap();
        let (cluster, element) = location.cluster.unwrap();
        assert_eq!(cluster.stride, 0x100);
        assert_eq!(element, 3);
        assert_eq!(location.offset(), 3 * 0x100 + 0x0c);
        assert_eq!(location.bits(), (0, 12));
    }

    #[test]
    fn register_array_element() {
        let location = resolve("EGPIO.PIN_CONFIG[4].GPIO_CONFIG_REG.MODE").unwrap();
        assert_eq!(location.address, 0x4613_0040);
    }

    #[test]
    fn errors() {
        assert_eq!(resolve("").unwrap_err(), LookupError::MalformedPath);
        assert_eq!(resolve("I2C0").unwrap_err(), LookupError::MalformedPath);
        assert_eq!(resolve("I2C0.").unwrap_err(), LookupError::MalformedPath);
        assert_eq!(resolve("NOPE.IC_ENABLE").unwrap_err(), LookupError::UnknownPeripheral);
        assert_eq!(resolve("I2C0.NOPE").unwrap_err(), LookupError::UnknownRegister);
        assert_eq!(resolve("I2C0.IC_ENABLE.NOPE").unwrap_err(), LookupError::UnknownField);
        assert_eq!(resolve("I2C0.IC_ENABLE.EN.X").unwrap_err(), LookupError::MalformedPath);
        assert_eq!(resolve("I2C0[1].IC_ENABLE").unwrap_err(), LookupError::MalformedPath);
        assert_eq!(resolve("I2C0.IC_ENABLE[x]").unwrap_err(), LookupError::MalformedPath);
        assert_eq!(
            resolve("GPDMA_C.CHANNEL_CONFIG.CHANNEL_CTRL_REG_CHNL").unwrap_err(),
            LookupError::MissingIndex
        );
        assert_eq!(
            resolve("GPDMA_C.CHANNEL_CONFIG[8].CHANNEL_CTRL_REG_CHNL").unwrap_err(),
            LookupError::IndexOutOfRange { index: 8, count: 8 }
        );
    }
}
