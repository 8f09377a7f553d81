use once_cell::sync::Lazy;
use regex::Regex;

static ETH_ADDRESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("valid address regex"));

/// Plausibility check for EVM addresses (0x + 40 hex chars). Checksum casing
/// is not verified; addresses pass through this service as opaque strings.
pub fn is_eth_address(value: &str) -> bool {
    ETH_ADDRESS_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_checksummed_addresses() {
        assert!(is_eth_address("0xa0b86a33e6ba3c0e9439c4bb9ad09c9b93e7b6b2"));
        assert!(is_eth_address("0xE592427A0AEce92De3Edee1F18E0157C05861564"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_eth_address(""));
        assert!(!is_eth_address("0x1234"));
        assert!(!is_eth_address("a0b86a33e6ba3c0e9439c4bb9ad09c9b93e7b6b2"));
        assert!(!is_eth_address("0xZZb86a33e6ba3c0e9439c4bb9ad09c9b93e7b6b2"));
        assert!(!is_eth_address("0xa0b86a33e6ba3c0e9439c4bb9ad09c9b93e7b6b2ff"));
    }
}
