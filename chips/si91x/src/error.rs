// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Failures reported by the name lookups of the register map.
//!
//! Register access itself cannot fail; only translating a name or path into
//! an address can.

use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LookupError {
    /// No peripheral instance with that name
    UnknownPeripheral,
    /// The peripheral has no register with that name
    UnknownRegister,
    /// The peripheral has no register cluster with that name
    UnknownCluster,
    /// The register has no field with that name
    UnknownField,
    /// No interrupt source with that name or number
    UnknownInterrupt,
    /// The number falls in a reserved slot of the vector table
    ReservedInterrupt(i16),
    /// Array or cluster index past the last element
    IndexOutOfRange { index: usize, count: usize },
    /// An array register or cluster was named without an index
    MissingIndex,
    /// The path does not have the `PERIPH.REG[.FIELD]` shape
    MalformedPath,
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::UnknownPeripheral => f.write_str("unknown peripheral"),
            LookupError::UnknownRegister => f.write_str("unknown register"),
            LookupError::UnknownCluster => f.write_str("unknown register cluster"),
            LookupError::UnknownField => f.write_str("unknown field"),
            LookupError::UnknownInterrupt => f.write_str("unknown interrupt"),
            LookupError::ReservedInterrupt(n) => write!(f, "interrupt {} is reserved", n),
            LookupError::IndexOutOfRange { index, count } => {
                write!(f, "index {} out of range for {} elements", index, count)
            }
            LookupError::MissingIndex => f.write_str("array element needs an index"),
            LookupError::MalformedPath => f.write_str("malformed register path"),
        }
    }
}
