//! Token Ledger Engine
//!
//! [`TokenContract`] is one running contract instance. The host invokes one
//! operation per transaction with an injected
//! [`TransactionContext`](lib_chaincode::TransactionContext); the engine
//! validates, reads and writes world state through the context, emits a
//! `Transfer` event, and appends to its process-local audit log.
//!
//! # Invariants
//!
//! - Balances and total supply never go negative
//! - Total supply equals the sum of all successful mints (no burn path)
//! - Transfers conserve `balance(from) + balance(to)`
//! - Metadata is written exactly once, by `initialize`
//!
//! # Authorization
//!
//! `initialize` and `claim` require an issuer authorized by the injected
//! [`IssuerPolicy`]. `transfer_from` performs NO caller check beyond
//! initialization: any caller may move funds out of any account. This
//! mirrors the deployed contract this engine replaces and assumes a
//! permissioned network where the host gates who can invoke at all; revisit
//! before exposing the operation to untrusted callers.

use lib_chaincode::{ClientIdentity, EventSink, TransactionContext};
use tracing::info;

use crate::audit::{AuditLog, TransferEvent, MINT_SOURCE, TRANSFER_EVENT};
use crate::errors::{TokenError, TokenResult};
use crate::math;
use crate::policy::IssuerPolicy;
use crate::state::{Amount, LedgerState, DECIMALS_KEY, NAME_KEY, SYMBOL_KEY};

/// Stored token metadata, readable once the contract is initialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: String,
}

/// Fungible-token ledger engine
///
/// Owns the issuer policy and the audit log; all ledger state lives in the
/// host-managed world state reached through the per-invocation context.
pub struct TokenContract {
    policy: IssuerPolicy,
    audit: AuditLog,
}

impl TokenContract {
    /// Engine with the given issuer policy and an empty audit log.
    pub fn new(policy: IssuerPolicy) -> Self {
        Self {
            policy,
            audit: AuditLog::new(),
        }
    }

    // =========================================================================
    // Initialize
    // =========================================================================

    /// Set the token name, symbol, and decimals.
    ///
    /// The only write path for metadata. Values are stored verbatim; no
    /// content validation is performed.
    ///
    /// # Errors
    /// - `Unauthorized` if the caller is not an authorized issuer
    /// - `AlreadyInitialized` if metadata already exists
    pub fn initialize(
        &self,
        ctx: &dyn TransactionContext,
        name: &str,
        symbol: &str,
        decimals: &str,
    ) -> TokenResult<()> {
        self.require_issuer(ctx)?;

        let state = LedgerState::new(ctx);
        if state.is_initialized()? {
            return Err(TokenError::AlreadyInitialized);
        }

        state.set_metadata(NAME_KEY, name)?;
        state.set_metadata(SYMBOL_KEY, symbol)?;
        state.set_metadata(DECIMALS_KEY, decimals)?;

        info!("contract initialized: name={} symbol={}", name, symbol);
        Ok(())
    }

    // =========================================================================
    // Claim (mint)
    // =========================================================================

    /// Mint `amount` new tokens to `address`.
    ///
    /// Both the updated balance and the updated total supply are
    /// overflow-checked before either write; the balance is written first,
    /// then the supply. No rollback exists beyond what the host transaction
    /// provides.
    ///
    /// # Errors
    /// - `NotInitialized` before `initialize`
    /// - `Unauthorized` if the caller is not an authorized issuer
    /// - `InvalidAmount` if `amount <= 0`
    /// - `Overflow` if either updated value would exceed the integer range
    pub fn claim(
        &self,
        ctx: &dyn TransactionContext,
        amount: Amount,
        address: &str,
    ) -> TokenResult<()> {
        let state = LedgerState::new(ctx);
        Self::require_initialized(&state)?;
        self.require_issuer(ctx)?;

        if amount <= 0 {
            return Err(TokenError::InvalidAmount { amount });
        }

        let balance = state.balance(address)?;
        let supply = state.total_supply()?;
        let new_balance = math::checked_add(balance, amount)?;
        let new_supply = math::checked_add(supply, amount)?;

        state.set_balance(address, new_balance)?;
        state.set_total_supply(new_supply)?;

        let event = TransferEvent {
            from: MINT_SOURCE.to_string(),
            to: address.to_string(),
            value: amount,
        };
        self.emit(ctx, &event)?;

        info!("minted {} tokens to address {}", amount, address);
        self.audit.record(event);
        Ok(())
    }

    // =========================================================================
    // TransferFrom
    // =========================================================================

    /// Move `value` tokens from `from` to `to`.
    ///
    /// Performs NO caller-identity check beyond initialization: any caller
    /// may move funds out of any account (see module docs). The sufficiency
    /// check is explicit and independent of the checked subtraction.
    ///
    /// # Errors
    /// - `NotInitialized` before `initialize`
    /// - `SelfTransfer` if `from == to`
    /// - `InvalidAmount` if `value <= 0`
    /// - `InsufficientFunds` if `balance(from) < value`
    pub fn transfer_from(
        &self,
        ctx: &dyn TransactionContext,
        from: &str,
        to: &str,
        value: Amount,
    ) -> TokenResult<()> {
        let state = LedgerState::new(ctx);
        Self::require_initialized(&state)?;

        if from == to {
            return Err(TokenError::SelfTransfer {
                account: from.to_string(),
            });
        }
        if value <= 0 {
            return Err(TokenError::InvalidAmount { amount: value });
        }

        let from_balance = state.balance(from)?;
        if from_balance < value {
            return Err(TokenError::InsufficientFunds {
                account: from.to_string(),
                have: from_balance,
                need: value,
            });
        }
        let to_balance = state.balance(to)?;

        let new_from = math::checked_sub(from_balance, value)?;
        let new_to = math::checked_add(to_balance, value)?;

        state.set_balance(from, new_from)?;
        state.set_balance(to, new_to)?;

        let event = TransferEvent {
            from: from.to_string(),
            to: to.to_string(),
            value,
        };
        self.emit(ctx, &event)?;

        info!("transferred {} tokens from {} to {}", value, from, to);
        self.audit.record(event);
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Balance of `account`; 0 if the account has never been credited.
    pub fn balance_of(&self, ctx: &dyn TransactionContext, account: &str) -> TokenResult<Amount> {
        let state = LedgerState::new(ctx);
        Self::require_initialized(&state)?;
        state.balance(account)
    }

    /// Total number of tokens ever minted.
    pub fn total_supply(&self, ctx: &dyn TransactionContext) -> TokenResult<Amount> {
        let state = LedgerState::new(ctx);
        Self::require_initialized(&state)?;
        state.total_supply()
    }

    /// Stored metadata triple.
    ///
    /// All three values are written by the same `initialize` transaction,
    /// so once the contract is initialized they are all present.
    pub fn metadata(&self, ctx: &dyn TransactionContext) -> TokenResult<TokenMetadata> {
        let state = LedgerState::new(ctx);
        Self::require_initialized(&state)?;
        let name = state.metadata(NAME_KEY)?.ok_or(TokenError::NotInitialized)?;
        let symbol = state
            .metadata(SYMBOL_KEY)?
            .ok_or(TokenError::NotInitialized)?;
        let decimals = state
            .metadata(DECIMALS_KEY)?
            .ok_or(TokenError::NotInitialized)?;
        Ok(TokenMetadata {
            name,
            symbol,
            decimals,
        })
    }

    /// Snapshot of this instance's audit log, in insertion order.
    ///
    /// Process-local and non-deterministic across replicas and restarts;
    /// not a ledger-state query. See the `audit` module docs.
    pub fn transactions(&self) -> Vec<TransferEvent> {
        self.audit.snapshot()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn require_initialized(state: &LedgerState<'_>) -> TokenResult<()> {
        if !state.is_initialized()? {
            return Err(TokenError::NotInitialized);
        }
        Ok(())
    }

    fn require_issuer(&self, ctx: &dyn TransactionContext) -> TokenResult<()> {
        let msp_id = ctx.msp_id()?;
        if !self.policy.can_issue(&msp_id) {
            return Err(TokenError::Unauthorized { msp_id });
        }
        Ok(())
    }

    fn emit(&self, ctx: &dyn TransactionContext, event: &TransferEvent) -> TokenResult<()> {
        let payload = serde_json::to_vec(event)?;
        ctx.set_event(TRANSFER_EVENT, &payload)?;
        Ok(())
    }
}
