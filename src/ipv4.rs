//! Dotted-quad parsing and the internal-network check applied before
//! IP geolocation.

use crate::error::{GeoError, Result};

/// Split `a.b.c.d` into four octets.
///
/// Each token must be a plain decimal byte; leading zeros are tolerated.
pub fn parse_octets(s: &str) -> Result<[u8; 4]> {
    if s.trim().is_empty() {
        return Err(GeoError::validation("IP address is empty"));
    }

    let parts: Vec<&str> = s.trim().split('.').collect();
    if parts.len() != 4 {
        return Err(GeoError::validation(format!("IP address is wrong: '{}'", s)));
    }

    let mut octets = [0u8; 4];
    for (slot, part) in octets.iter_mut().zip(&parts) {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(GeoError::validation(format!("IP address is wrong: '{}'", s)));
        }
        *slot = part
            .parse::<u8>()
            .map_err(|_| GeoError::validation(format!("IP address is wrong: '{}'", s)))?;
    }
    Ok(octets)
}

/// True for addresses the geolocation service cannot place: unspecified,
/// private (RFC 1918), loopback and broadcast-class.
pub fn is_internal(octets: [u8; 4]) -> bool {
    match octets {
        [0, 0, 0, 0] => true,
        [10, ..] | [127, ..] => true,
        [172, second, ..] => (16..=31).contains(&second),
        [192, 168, ..] => true,
        [255, ..] => true,
        _ => false,
    }
}

pub fn is_internal_address(s: &str) -> Result<bool> {
    parse_octets(s).map(is_internal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_octets() {
        assert_eq!(parse_octets("178.247.233.32").unwrap(), [178, 247, 233, 32]);
        assert_eq!(parse_octets(" 8.8.8.8 ").unwrap(), [8, 8, 8, 8]);
        assert_eq!(parse_octets("010.0.0.1").unwrap(), [10, 0, 0, 1]);
    }

    #[test]
    fn test_parse_octets_rejects_malformed() {
        for bad in ["", "   ", "1.2.3", "1.2.3.4.5", "256.1.1.1", "a.b.c.d", "1..2.3", "-1.2.3.4", "+1.2.3.4"] {
            let err = parse_octets(bad).unwrap_err();
            assert!(err.is_validation(), "{}", bad);
        }
    }

    #[test]
    fn test_internal_ranges() {
        for ip in [
            "0.0.0.0",
            "10.1.2.3",
            "127.0.0.1",
            "172.16.0.1",
            "172.31.255.255",
            "192.168.1.1",
            "255.255.255.255",
            "255.0.0.1",
        ] {
            assert!(is_internal_address(ip).unwrap(), "{} should be internal", ip);
        }
    }

    #[test]
    fn test_external_ranges() {
        for ip in [
            "8.8.8.8",
            "203.0.113.5",
            "0.0.0.1",
            "172.15.0.1",
            "172.32.0.1",
            "192.167.1.1",
            "178.247.233.32",
        ] {
            assert!(!is_internal_address(ip).unwrap(), "{} should be external", ip);
        }
    }
}
