//! Calldata construction and result decoding for `balanceOf(address)`.

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;
use binding::token::IERC20::balanceOfCall;
use crate::QueryError;

/// Builds the 36-byte `balanceOf(owner)` payload: selector followed by the
/// owner address left-padded to a 32-byte word.
pub fn balance_of_calldata(owner: Address) -> Bytes {
    balanceOfCall { account: owner }.abi_encode().into()
}

/// Decodes the hex quantity returned by `eth_call`.
///
/// The `0x` prefix is optional. An empty result, which a node returns when the
/// target has no code, is an error rather than zero.
pub fn parse_quantity(result: &str) -> Result<U256, QueryError> {
    let trimmed = result.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.is_empty() {
        return Err(QueryError::MalformedResponse(format!(
            "empty eth_call result {result:?}"
        )));
    }

    U256::from_str_radix(digits, 16).map_err(|e| {
        QueryError::MalformedResponse(format!("invalid hex quantity {result:?}: {e}"))
    })
}

/// Scales a raw amount to display units, `amount / 10^decimals`.
///
/// The quotient is correctly rounded for every `decimals` value, including
/// ones where `10^decimals` does not fit in a `U256`.
pub fn scale(amount: U256, decimals: u8) -> f64 {
    // An integer mantissa with an integer exponent is always valid float syntax.
    format!("{amount}e-{decimals}")
        .parse()
        .unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, hex};

    const POOL: Address = address!("0x131525f3FA23d65DC2B1EB8B6483a28c43B06916");

    #[test]
    fn test_calldata_layout() {
        let data = balance_of_calldata(POOL);

        assert_eq!(data.len(), 36);
        assert_eq!(data[..4], balanceOfCall::SELECTOR);
        assert_eq!(data[4..16], [0u8; 12]);
        assert_eq!(&data[16..], POOL.as_slice());
        assert_eq!(
            data,
            Bytes::from(
                hex!("70a08231000000000000000000000000131525f3fa23d65dc2b1eb8b6483a28c43b06916")
                    .to_vec()
            )
        );
    }

    #[test]
    fn test_calldata_deterministic() {
        assert_eq!(balance_of_calldata(POOL), balance_of_calldata(POOL));
        assert_ne!(balance_of_calldata(POOL), balance_of_calldata(Address::ZERO));
    }

    #[test]
    fn test_parse_quantity() {
        let expected = U256::from(1000u128 * 10u128.pow(18));
        assert_eq!(parse_quantity("0x3635c9adc5dea00000").unwrap(), expected);
        assert_eq!(parse_quantity("3635c9adc5dea00000").unwrap(), expected);
        assert_eq!(parse_quantity("0x3b9aca00").unwrap(), U256::from(1_000_000_000u64));
        assert_eq!(
            parse_quantity("0x0000000000000000000000000000000000000000000000000000000000000000")
                .unwrap(),
            U256::ZERO
        );
    }

    #[test]
    fn test_parse_quantity_rejects_malformed() {
        let too_wide = format!("0x1{}", "0".repeat(64));
        for result in ["", "0x", "  ", "0xzz", "balance", too_wide.as_str()] {
            assert!(
                matches!(parse_quantity(result), Err(QueryError::MalformedResponse(_))),
                "accepted {result:?}"
            );
        }
    }

    #[test]
    fn test_scale() {
        let sdai = parse_quantity("0x3635c9adc5dea00000").unwrap();
        assert_eq!(scale(sdai, 18), 1000.0);

        let usdc = parse_quantity("0x3b9aca00").unwrap();
        assert_eq!(scale(usdc, 6), 1000.0);

        assert_eq!(scale(U256::from(1_500_000u64), 6), 1.5);
        assert_eq!(scale(U256::from(42u64), 0), 42.0);
        assert_eq!(scale(U256::ZERO, 18), 0.0);
    }

    #[test]
    fn test_scale_extreme_decimals() {
        let tiny = scale(U256::from(1u64), 255);
        assert!(tiny >= 0.0 && tiny.is_finite());

        let huge = scale(U256::MAX, 0);
        assert!(huge > 1.15e77 && huge < 1.16e77);
    }

    #[test]
    fn test_scale_monotonic() {
        let amounts = [0u64, 1, 999_999, 1_000_000, 1_000_001, 123_456_789_012, u64::MAX];
        for decimals in [0u8, 6, 18] {
            for pair in amounts.windows(2) {
                let low = scale(U256::from(pair[0]), decimals);
                let high = scale(U256::from(pair[1]), decimals);
                assert!(low <= high, "{} > {} at {decimals} decimals", pair[0], pair[1]);
            }
        }
    }
}
