//! Display helpers for addresses, hashes, and wei amounts.

use alloy::primitives::{Address, B256, U256};

const DISPLAY_DECIMALS: u32 = 4;

/// Formats a wei amount as a fixed four-decimal ETH string, rounded half up.
pub fn format_eth(wei: U256) -> String {
    let wei_per_eth = U256::from(10u64).pow(U256::from(18u64));
    let scale = U256::from(10u64).pow(U256::from(DISPLAY_DECIMALS));

    let scaled = wei
        .saturating_mul(scale)
        .saturating_add(wei_per_eth / U256::from(2u64))
        / wei_per_eth;
    let whole = scaled / scale;
    let frac = (scaled % scale).to::<u64>();

    format!("{whole}.{frac:04}")
}

/// Shortens an address for display: `0x1234...abcd`.
pub fn shorten_address(address: &Address) -> String {
    shorten(&address.to_string(), 6, 4)
}

/// Shortens a transaction hash for display, keeping a longer head and tail
/// than an address gets.
pub fn shorten_hash(hash: &B256) -> String {
    shorten(&hash.to_string(), 10, 8)
}

fn shorten(value: &str, head: usize, tail: usize) -> String {
    if value.len() <= head + tail {
        return value.to_string();
    }
    format!("{}...{}", &value[..head], &value[value.len() - tail..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_eth() {
        assert_eq!(format_eth(U256::from(1_000_000_000_000_000_000u128)), "1.0000");
        assert_eq!(format_eth(U256::from(1_500_000_000_000_000_000u128)), "1.5000");
        assert_eq!(format_eth(U256::ZERO), "0.0000");
        // 0.12345 ETH rounds half up to 0.1235
        assert_eq!(format_eth(U256::from(123_450_000_000_000_000u128)), "0.1235");
        // sub-display-precision dust still shows as zero
        assert_eq!(format_eth(U256::from(1u64)), "0.0000");
    }

    #[test]
    fn test_shorten_address() {
        let address = Address::repeat_byte(0xab);
        let short = shorten_address(&address);
        assert!(short.starts_with("0x"));
        assert_eq!(short.len(), 6 + 3 + 4);
        assert!(short.contains("..."));
    }

    #[test]
    fn test_shorten_hash() {
        let hash = B256::repeat_byte(0xcd);
        let short = shorten_hash(&hash);
        assert_eq!(short.len(), 10 + 3 + 8);
        assert!(short.starts_with("0xcdcdcdcd"));
    }

    #[test]
    fn test_shorten_short_input_untouched() {
        assert_eq!(shorten("0x1234", 6, 4), "0x1234");
    }
}
