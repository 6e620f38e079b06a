//! World-State Accessor
//!
//! Key names and the decimal-string amount codec. Key encoding is PROTOCOL:
//! existing ledger state uses these exact layouts, so the codec is preserved
//! verbatim. Never inline key construction or amount encoding in operation
//! logic.
//!
//! # Layout
//!
//! - `name`, `symbol`, `decimals`: metadata, raw string bytes
//! - `totalSupply`: decimal-string-encoded `Amount`
//! - any other key: an account identifier, decimal-string-encoded balance

use lib_chaincode::{TransactionContext, WorldState};

use crate::errors::{TokenError, TokenResult};

/// Token amount (signed 64-bit, decimal-string-encoded in state)
pub type Amount = i64;

// =============================================================================
// WELL-KNOWN KEYS
// =============================================================================

/// Key holding the token name; doubles as the initialization marker.
pub const NAME_KEY: &str = "name";

/// Key holding the token symbol.
pub const SYMBOL_KEY: &str = "symbol";

/// Key holding the token decimals.
pub const DECIMALS_KEY: &str = "decimals";

/// Key holding the total supply.
pub const TOTAL_SUPPLY_KEY: &str = "totalSupply";

// =============================================================================
// AMOUNT CODEC
// =============================================================================

/// Encode an amount as decimal-string bytes.
pub fn encode_amount(value: Amount) -> Vec<u8> {
    value.to_string().into_bytes()
}

/// Decode decimal-string bytes into an amount.
///
/// # Errors
/// `MalformedAmount` when the bytes are not a valid decimal integer. Stored
/// garbage is surfaced, never read as zero.
pub fn decode_amount(key: &str, raw: &[u8]) -> TokenResult<Amount> {
    let text = std::str::from_utf8(raw).map_err(|_| TokenError::MalformedAmount {
        key: key.to_string(),
        raw: String::from_utf8_lossy(raw).into_owned(),
    })?;
    text.parse::<Amount>()
        .map_err(|_| TokenError::MalformedAmount {
            key: key.to_string(),
            raw: text.to_string(),
        })
}

// =============================================================================
// LEDGER STATE
// =============================================================================

/// Scalar state accessor over the injected context
///
/// Wraps one transaction context and provides typed reads and writes for
/// the keys above. Reads never mutate; writes go through the host's
/// KYC-bypassing put, which is the platform contract for engine-owned keys.
pub struct LedgerState<'a> {
    ctx: &'a dyn TransactionContext,
}

impl<'a> LedgerState<'a> {
    pub fn new(ctx: &'a dyn TransactionContext) -> Self {
        Self { ctx }
    }

    /// Whether metadata has been written (the `name` key exists).
    pub fn is_initialized(&self) -> TokenResult<bool> {
        Ok(self.ctx.get_state(NAME_KEY)?.is_some())
    }

    /// Balance of `account`. An absent key reads as 0.
    pub fn balance(&self, account: &str) -> TokenResult<Amount> {
        self.amount_at(account)
    }

    /// Write the balance of `account`.
    pub fn set_balance(&self, account: &str, value: Amount) -> TokenResult<()> {
        self.ctx
            .put_state_without_kyc(account, &encode_amount(value))?;
        Ok(())
    }

    /// Total supply. An absent key reads as 0.
    pub fn total_supply(&self) -> TokenResult<Amount> {
        self.amount_at(TOTAL_SUPPLY_KEY)
    }

    /// Write the total supply.
    pub fn set_total_supply(&self, value: Amount) -> TokenResult<()> {
        self.ctx
            .put_state_without_kyc(TOTAL_SUPPLY_KEY, &encode_amount(value))?;
        Ok(())
    }

    /// Metadata string under one of the fixed keys.
    pub fn metadata(&self, key: &str) -> TokenResult<Option<String>> {
        Ok(self
            .ctx
            .get_state(key)?
            .map(|raw| String::from_utf8_lossy(&raw).into_owned()))
    }

    /// Write a metadata string verbatim.
    pub fn set_metadata(&self, key: &str, value: &str) -> TokenResult<()> {
        self.ctx.put_state_without_kyc(key, value.as_bytes())?;
        Ok(())
    }

    fn amount_at(&self, key: &str) -> TokenResult<Amount> {
        match self.ctx.get_state(key)? {
            Some(raw) => decode_amount(key, &raw),
            None => Ok(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_chaincode::MemoryContext;

    #[test]
    fn test_amount_codec_roundtrip() {
        for value in [0, 1, 42, Amount::MAX, -1] {
            let encoded = encode_amount(value);
            assert_eq!(decode_amount("k", &encoded).unwrap(), value);
        }
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            decode_amount("alice", b"not-a-number"),
            Err(TokenError::MalformedAmount { .. })
        ));
        assert!(matches!(
            decode_amount("alice", &[0xff, 0xfe]),
            Err(TokenError::MalformedAmount { .. })
        ));
        assert!(matches!(
            decode_amount("alice", b""),
            Err(TokenError::MalformedAmount { .. })
        ));
    }

    #[test]
    fn test_absent_balance_reads_zero() {
        let ctx = MemoryContext::new();
        let state = LedgerState::new(&ctx);
        assert_eq!(state.balance("alice").unwrap(), 0);
        assert_eq!(state.total_supply().unwrap(), 0);
    }

    #[test]
    fn test_balance_write_read() {
        let ctx = MemoryContext::new();
        let state = LedgerState::new(&ctx);
        state.set_balance("alice", 100).unwrap();
        assert_eq!(state.balance("alice").unwrap(), 100);
        // Stored as decimal string bytes, the wire format existing state uses.
        assert_eq!(ctx.raw_state("alice").unwrap(), b"100".to_vec());
    }

    #[test]
    fn test_initialized_tracks_name_key() {
        let ctx = MemoryContext::new();
        let state = LedgerState::new(&ctx);
        assert!(!state.is_initialized().unwrap());
        state.set_metadata(NAME_KEY, "TokenX").unwrap();
        assert!(state.is_initialized().unwrap());
    }
}
