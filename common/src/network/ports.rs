//! # Port List Expansion
//!
//! Turns raw port tokens (`22`, `8000-8005`) into a [`PortSet`]. When no
//! tokens are given the well-known ports `0-1023` are used.

use std::ops::RangeInclusive;

use indexmap::IndexSet;
use tracing::debug;

use crate::error::TargetError;

pub const DEFAULT_PORTS: RangeInclusive<u16> = 0..=1023;

/// Deduplicated TCP ports in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortSet {
    ports: IndexSet<u16>,
}

impl PortSet {
    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    pub fn contains(&self, port: u16) -> bool {
        self.ports.contains(&port)
    }

    /// Position of `port` in the set, used to restore list order.
    pub fn position(&self, port: u16) -> Option<usize> {
        self.ports.get_index_of(&port)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = u16> {
        self.ports.iter().copied()
    }

    fn extend_range(&mut self, range: RangeInclusive<u16>) {
        self.ports.extend(range);
    }
}

impl FromIterator<u16> for PortSet {
    fn from_iter<I: IntoIterator<Item = u16>>(iter: I) -> Self {
        Self {
            ports: iter.into_iter().collect(),
        }
    }
}

/// Expands the port tokens, or returns [`DEFAULT_PORTS`] when there are none.
///
/// Stops at the first invalid token; no partial set is returned.
pub fn expand_ports<S: AsRef<str>>(tokens: Option<&[S]>) -> Result<PortSet, TargetError> {
    let tokens = match tokens {
        Some(tokens) if !tokens.is_empty() => tokens,
        _ => return Ok(DEFAULT_PORTS.collect()),
    };

    let mut ports = PortSet::default();
    for token in tokens {
        let range = parse_port_token(token.as_ref())?;
        ports.extend_range(range);
    }

    debug!("Expanded {} port token(s) into {} port(s)", tokens.len(), ports.len());
    Ok(ports)
}

/// Parses `p` or `p-q` into an inclusive range.
///
/// Every part must be a valid port before the hyphen count or the range
/// order is looked at.
fn parse_port_token(token: &str) -> Result<RangeInclusive<u16>, TargetError> {
    let parts: Vec<u16> = token
        .split('-')
        .map(|part| parse_port(part, token))
        .collect::<Result<_, _>>()?;

    match parts.as_slice() {
        [single] => Ok(*single..=*single),
        [start, end] if start > end => Err(TargetError::PortRangeOrder {
            token: token.to_string(),
        }),
        [start, end] => Ok(*start..=*end),
        _ => Err(TargetError::PortRangeArity {
            token: token.to_string(),
        }),
    }
}

fn parse_port(part: &str, token: &str) -> Result<u16, TargetError> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TargetError::MalformedPort {
            token: token.to_string(),
        });
    }
    // all digits, so the only way to fail is by being too large
    part.parse::<u16>().map_err(|_| TargetError::PortOutOfRange {
        token: token.to_string(),
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
