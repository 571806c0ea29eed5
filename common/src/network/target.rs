//! # Scan Target Expansion
//!
//! Turns the raw host tokens handed over by the argument layer into a
//! [`HostSet`].
//!
//! Each token is either:
//! * A single IPv4 address (e.g., `192.168.1.5`).
//! * An inclusive IPv4 range (e.g., `192.168.1.250-192.168.2.4`).

use indexmap::IndexSet;
use tracing::debug;

use crate::error::TargetError;
use crate::network::address::Address;
use crate::network::range::AddressRange;

/// Deduplicated host addresses in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostSet {
    hosts: IndexSet<Address>,
}

impl HostSet {
    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    pub fn contains(&self, addr: &Address) -> bool {
        self.hosts.contains(addr)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Address> {
        self.hosts.iter()
    }

    /// Appends `addr` unless it is already present. Returns whether it was new.
    fn insert(&mut self, addr: Address) -> bool {
        self.hosts.insert(addr)
    }

    fn extend_range(&mut self, range: AddressRange) {
        for addr in range {
            self.insert(addr);
        }
    }
}

impl<'a> IntoIterator for &'a HostSet {
    type Item = &'a Address;
    type IntoIter = indexmap::set::Iter<'a, Address>;

    fn into_iter(self) -> Self::IntoIter {
        self.hosts.iter()
    }
}

/// Expands every host token into one [`HostSet`].
///
/// Stops at the first invalid token; no partial set is returned.
pub fn expand_hosts<S: AsRef<str>>(tokens: &[S]) -> Result<HostSet, TargetError> {
    if tokens.is_empty() {
        return Err(TargetError::NoHosts);
    }

    let mut hosts = HostSet::default();
    for token in tokens {
        let range = parse_host_token(token.as_ref())?;
        hosts.extend_range(range);
    }

    debug!("Expanded {} host token(s) into {} address(es)", tokens.len(), hosts.len());
    Ok(hosts)
}

/// Parses `a.b.c.d` or `a.b.c.d-e.f.g.h` into a range.
///
/// All parts are validated as addresses before the hyphen count is checked.
fn parse_host_token(token: &str) -> Result<AddressRange, TargetError> {
    let parts: Vec<&str> = token.split('-').collect();

    let addrs: Vec<Address> = parts
        .iter()
        .map(|part| part.parse::<Address>())
        .collect::<Result<_, _>>()
        .map_err(|source| TargetError::InvalidHost {
            token: token.to_string(),
            source,
        })?;

    match addrs.as_slice() {
        [single] => Ok(AddressRange::single(*single)),
        [start, end] => {
            AddressRange::new(*start, *end).ok_or_else(|| TargetError::HostRangeOrder {
                token: token.to_string(),
            })
        }
        _ => Err(TargetError::HostRangeArity {
            token: token.to_string(),
        }),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AddressError, ErrorKind};

    fn strings(hosts: &HostSet) -> Vec<String> {
        hosts.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_expand_single_host() {
        let hosts = expand_hosts(&["127.0.0.1"]).unwrap();
        assert_eq!(strings(&hosts), vec!["127.0.0.1"]);
    }

    #[test]
    fn test_expand_range_and_single_without_duplicates() {
        let hosts = expand_hosts(&["127.0.0.1-127.0.0.2", "127.0.0.3"]).unwrap();
        assert_eq!(strings(&hosts), vec!["127.0.0.1", "127.0.0.2", "127.0.0.3"]);
    }

    #[test]
    fn test_expand_keeps_first_seen_order_across_tokens() {
        let hosts = expand_hosts(&["10.0.0.9", "10.0.0.7-10.0.0.10", "10.0.0.8"]).unwrap();
        assert_eq!(
            strings(&hosts),
            vec!["10.0.0.9", "10.0.0.7", "10.0.0.8", "10.0.0.10"]
        );
    }

    #[test]
    fn test_expand_deduplicates_by_canonical_form() {
        let hosts = expand_hosts(&["10.0.0.1", "010.0.0.001"]).unwrap();
        assert_eq!(strings(&hosts), vec!["10.0.0.1"]);
    }

    #[test]
    fn test_expand_range_with_carry() {
        let hosts = expand_hosts(&["217.0.255.254-217.1.0.1"]).unwrap();
        assert_eq!(
            strings(&hosts),
            vec!["217.0.255.254", "217.0.255.255", "217.1.0.0", "217.1.0.1"]
        );
    }

    #[test]
    fn test_expand_range_ending_at_broadcast_terminates() {
        let hosts = expand_hosts(&["255.255.255.254-255.255.255.255"]).unwrap();
        assert_eq!(strings(&hosts), vec!["255.255.255.254", "255.255.255.255"]);
    }

    #[test]
    fn test_expand_degenerate_range() {
        let hosts = expand_hosts(&["1.2.3.4-1.2.3.4"]).unwrap();
        assert_eq!(strings(&hosts), vec!["1.2.3.4"]);
    }

    #[test]
    fn test_expand_rejects_reversed_range() {
        let err = expand_hosts(&["128.0.0.3-127.0.0.2"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRangeOrder);
        assert_eq!(
            err,
            TargetError::HostRangeOrder {
                token: "128.0.0.3-127.0.0.2".into()
            }
        );
    }

    #[test]
    fn test_expand_rejects_invalid_addresses() {
        let err = expand_hosts(&["300.0.0.1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);

        let err = expand_hosts(&["128.0.0.3-300.0.0.2"]).unwrap_err();
        assert_eq!(
            err,
            TargetError::InvalidHost {
                token: "128.0.0.3-300.0.0.2".into(),
                source: AddressError::OctetOutOfRange("300".into()),
            }
        );

        let err = expand_hosts(&["localhost"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedToken);

        let err = expand_hosts(&["10.0.0.1-"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedToken);
    }

    #[test]
    fn test_expand_rejects_too_many_hyphens() {
        let err = expand_hosts(&["1.1.1.1-1.1.1.2-1.1.1.3"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArity);
    }

    #[test]
    fn test_expand_stops_at_first_error() {
        let err = expand_hosts(&["1.1.1.1", "2.2.2.2-1.1.1.1", "bogus"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRangeOrder);
    }

    #[test]
    fn test_expand_requires_a_host() {
        let tokens: [&str; 0] = [];
        assert_eq!(expand_hosts(&tokens), Err(TargetError::NoHosts));
    }

    #[test]
    fn test_expand_is_repeatable() {
        let tokens = vec!["10.0.0.1-10.0.0.3".to_string(), "10.0.0.2".to_string()];
        assert_eq!(expand_hosts(&tokens), expand_hosts(&tokens));
    }
}
