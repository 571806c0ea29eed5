//! # IPv4 Address Model
//!
//! A dotted-decimal IPv4 address held as four octets, most significant first.
//!
//! The derived ordering compares the octet array lexicographically, which is
//! the same as comparing the addresses numerically.

use std::fmt;
use std::net::Ipv4Addr;
use std::num::IntErrorKind;
use std::str::FromStr;

use crate::error::AddressError;

const OCTET_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address {
    octets: [u8; OCTET_COUNT],
}

impl Address {
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self {
            octets: [a, b, c, d],
        }
    }

    pub const fn octets(&self) -> [u8; OCTET_COUNT] {
        self.octets
    }

    /// Returns the numerically next address.
    ///
    /// Works like a ripple-carry increment on a 4-digit base-256 number: the
    /// rightmost octet below 255 is incremented and every 255 to its right
    /// wraps to 0. Fails with [`AddressError::Overflow`] on `255.255.255.255`.
    pub fn next_address(&self) -> Result<Self, AddressError> {
        let mut octets = self.octets;
        for idx in (0..OCTET_COUNT).rev() {
            if octets[idx] < u8::MAX {
                octets[idx] += 1;
                return Ok(Self { octets });
            }
            octets[idx] = 0;
        }
        Err(AddressError::Overflow)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != OCTET_COUNT {
            return Err(AddressError::WrongOctetCount(parts.len()));
        }

        let mut octets = [0u8; OCTET_COUNT];
        for (slot, part) in octets.iter_mut().zip(&parts) {
            *slot = parse_octet(part)?;
        }
        Ok(Self { octets })
    }
}

fn parse_octet(part: &str) -> Result<u8, AddressError> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AddressError::MalformedOctet(part.to_string()));
    }
    match part.parse::<u32>() {
        Ok(value) => u8::try_from(value).map_err(|_| AddressError::OctetOutOfRange(part.to_string())),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
            Err(AddressError::OctetOutOfRange(part.to_string()))
        }
        Err(_) => Err(AddressError::MalformedOctet(part.to_string())),
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.octets;
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Self {
        Self {
            octets: addr.octets(),
        }
    }
}

impl From<Address> for Ipv4Addr {
    fn from(addr: Address) -> Self {
        Ipv4Addr::from(addr.octets)
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
