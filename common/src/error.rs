use thiserror::Error;

/// Failure modes of the address model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("expected 4 octets, found {0}")]
    WrongOctetCount(usize),
    #[error("octet '{0}' is not a decimal integer")]
    MalformedOctet(String),
    #[error("octet '{0}' is out of range (0-255)")]
    OctetOutOfRange(String),
    #[error("no address follows 255.255.255.255")]
    Overflow,
}

/// Coarse classification shared by every validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedToken,
    OutOfRange,
    InvalidRangeOrder,
    InvalidArity,
    NoHosts,
}

/// A rejected host or port token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    #[error("invalid host address format '{token}': {source}")]
    InvalidHost {
        token: String,
        #[source]
        source: AddressError,
    },
    #[error("invalid host range '{token}': the end of the range must not precede the start")]
    HostRangeOrder { token: String },
    #[error("invalid host range format '{token}' (expected '<address>' or '<address>-<address>')")]
    HostRangeArity { token: String },
    #[error("no hosts supplied, at least one host is required")]
    NoHosts,
    #[error("invalid integer '{token}' supplied for port range")]
    MalformedPort { token: String },
    #[error("invalid port '{token}' (ports must be in range from 0-65535)")]
    PortOutOfRange { token: String },
    #[error("invalid port range '{token}': finish must be greater than start")]
    PortRangeOrder { token: String },
    #[error("invalid port range format '{token}' (expected '<port>' or '<port>-<port>')")]
    PortRangeArity { token: String },
}

impl TargetError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TargetError::InvalidHost { source, .. } => match source {
                AddressError::OctetOutOfRange(_) => ErrorKind::OutOfRange,
                _ => ErrorKind::MalformedToken,
            },
            TargetError::MalformedPort { .. } => ErrorKind::MalformedToken,
            TargetError::PortOutOfRange { .. } => ErrorKind::OutOfRange,
            TargetError::HostRangeOrder { .. } | TargetError::PortRangeOrder { .. } => {
                ErrorKind::InvalidRangeOrder
            }
            TargetError::HostRangeArity { .. } | TargetError::PortRangeArity { .. } => {
                ErrorKind::InvalidArity
            }
            TargetError::NoHosts => ErrorKind::NoHosts,
        }
    }
}

/// Every error collected while validating the host and port options.
///
/// Never empty when returned from [`crate::plan::ScanPlan::from_tokens`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} validation error(s): {}", .errors.len(), join_messages(.errors))]
pub struct ValidationErrors {
    errors: Vec<TargetError>,
}

impl ValidationErrors {
    pub fn new(errors: Vec<TargetError>) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &[TargetError] {
        &self.errors
    }

    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| format!("ERROR: {e}")).collect()
    }
}

fn join_messages(errors: &[TargetError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join("; ")
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

    #[test]
    fn invalid_host_kind_follows_address_error() {
        let out_of_range = TargetError::InvalidHost {
            token: "300.0.0.1".into(),
            source: AddressError::OctetOutOfRange("300".into()),
        };
        let malformed = TargetError::InvalidHost {
            token: "a.b.c.d".into(),
            source: AddressError::MalformedOctet("a".into()),
        };
        assert_eq!(out_of_range.kind(), ErrorKind::OutOfRange);
        assert_eq!(malformed.kind(), ErrorKind::MalformedToken);
    }

    #[test]
    fn messages_are_prefixed_and_ordered() {
        let errors = ValidationErrors::new(vec![
            TargetError::PortOutOfRange {
                token: "65536".into(),
            },
            TargetError::NoHosts,
        ]);
        assert_eq!(
            errors.messages(),
            vec![
                "ERROR: invalid port '65536' (ports must be in range from 0-65535)".to_string(),
                "ERROR: no hosts supplied, at least one host is required".to_string(),
            ]
        );
        assert!(errors.to_string().starts_with("2 validation error(s): "));
    }

    #[test]
    fn host_error_message_names_the_token() {
        let err = TargetError::InvalidHost {
            token: "1.1.1".into(),
            source: AddressError::WrongOctetCount(3),
        };
        assert_eq!(
            err.to_string(),
            "invalid host address format '1.1.1': expected 4 octets, found 3"
        );
    }
}
