//! # Address Range Model
//!
//! An inclusive run of IPv4 addresses such as `192.168.1.1-192.168.2.10`.
//!
//! Ranges are walked with [`Address::next_address`], so a range that ends at
//! `255.255.255.255` stops cleanly when the carry runs off the top octet.

use crate::network::address::Address;

/// Inclusive range of addresses. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressRange {
    start: Address,
    end: Address,
}

impl AddressRange {
    /// Returns `None` when `end` precedes `start`.
    pub fn new(start: Address, end: Address) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    pub fn single(addr: Address) -> Self {
        Self {
            start: addr,
            end: addr,
        }
    }

    pub fn start(&self) -> Address {
        self.start
    }

    pub fn end(&self) -> Address {
        self.end
    }

    pub fn iter(&self) -> AddressRangeIter {
        AddressRangeIter {
            current: Some(self.start),
            end: self.end,
        }
    }
}

impl IntoIterator for AddressRange {
    type Item = Address;
    type IntoIter = AddressRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone)]
pub struct AddressRangeIter {
    current: Option<Address>,
    end: Address,
}

impl Iterator for AddressRangeIter {
    type Item = Address;

    fn next(&mut self) -> Option<Address> {
        let current = self.current.filter(|addr| *addr <= self.end)?;
        self.current = match current.next_address() {
            Ok(next) => Some(next),
            // overflow past 255.255.255.255 ends the walk
            Err(_) => None,
        };
        Some(current)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
