#![no_std]

//! Credlink ledger contract: lender liquidity, borrower onboarding and KYC,
//! verified borrowing against the pool, and per-borrower draw history.
//!
//! # Atomicity
//! Fallible entry points return `Result<_, Error>`. Returning an error aborts
//! the invocation, and the host rolls back all storage writes, events and nested
//! token transfers made during it. Token transfers are performed before the
//! ledger records are written, so a failed transfer never leaves accounting
//! ahead of custody.
//!
//! # Callers
//! The acting address is an explicit argument on every state-changing call and
//! is authenticated with `require_auth`.

mod borrower;
mod borrowing;
mod events;
mod lender;
mod storage;
mod types;


use soroban_sdk::{contract, contractimpl, token, Address, Env, String, Vec};

pub use events::{
    BorrowerOnboardedEvent, BorrowerVerifiedEvent, FundsBorrowedEvent, LenderOnboardedEvent,
    LiquidityDepositedEvent,
};
pub use lender::{MAX_INTEREST_RATE_PERCENT, MIN_INTEREST_RATE_PERCENT};
pub use types::{
    BorrowRecord, BorrowerRecord, Error, LedgerConfig, LenderRecord, PoolStats,
};

use borrower::Profile;
use storage::{extend_instance, has_config, read_config, read_history, read_pool, write_config};

#[contract]
pub struct Credlink;

#[contractimpl]
impl Credlink {
    /// Initialize the contract with the admin, the lent token and the native
    /// asset contract. The admin must authorize the call.
    pub fn init(env: Env, admin: Address, token: Address, native_token: Address) -> Result<(), Error> {
        if has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();
        write_config(
            &env,
            &LedgerConfig {
                admin,
                token,
                native_token,
            },
        );
        extend_instance(&env);
        Ok(())
    }

    pub fn get_config(env: Env) -> Result<LedgerConfig, Error> {
        read_config(&env)
    }

    // ── lenders ─────────────────────────────────────────────────────────────

    /// Deposit `token_amount` tokens at `interest_rate_percent` (1..=30) for
    /// `time_lock_days`. Requires a prior token approval for the contract.
    ///
    /// # Errors
    /// * `InvalidRate` – rate is 0 or above 30
    /// * `InvalidInput` – `token_amount` is not positive
    /// * `TransferDenied` – the token contract refused to move the funds
    pub fn onboard_lender(
        env: Env,
        lender: Address,
        token_amount: i128,
        interest_rate_percent: u32,
        time_lock_days: u32,
    ) -> Result<(), Error> {
        lender.require_auth();
        extend_instance(&env);
        lender::onboard(&env, &lender, token_amount, interest_rate_percent, time_lock_days)
    }

    /// Deposit `amount` of the native asset.
    ///
    /// # Errors
    /// * `ZeroDeposit` – amount is not positive
    /// * `TransferDenied` – the lender cannot cover the amount
    pub fn lend_funds(env: Env, lender: Address, amount: i128) -> Result<(), Error> {
        lender.require_auth();
        extend_instance(&env);
        lender::deposit_native(&env, &lender, amount)
    }

    pub fn get_lender_details(env: Env, lender: Address) -> Option<LenderRecord> {
        lender::details(&env, &lender)
    }

    // ── borrowers ───────────────────────────────────────────────────────────

    /// Create or update the caller's borrower profile. No field validation.
    pub fn onboard_borrower(
        env: Env,
        borrower: Address,
        name: String,
        email: String,
        phone_no: String,
        company_name: String,
        country: String,
    ) {
        borrower.require_auth();
        extend_instance(&env);
        borrower::onboard(
            &env,
            &borrower,
            Profile {
                name,
                email,
                phone_no,
                company_name,
                country,
            },
        );
    }

    /// Complete the one-time KYC step.
    ///
    /// # Errors
    /// * `NotFound` – borrower never onboarded
    /// * `AlreadyVerified` – KYC already completed
    /// * `InvalidInput` – empty `kyc_details`
    pub fn borrower_kyc(env: Env, borrower: Address, kyc_details: String) -> Result<(), Error> {
        borrower.require_auth();
        extend_instance(&env);
        borrower::verify(&env, &borrower, kyc_details)
    }

    /// Draw `amount` tokens from the pool.
    ///
    /// # Errors
    /// * `Unverified` – borrower missing or not KYC-verified
    /// * `InvalidInput` – `amount` is not positive
    /// * `InsufficientPoolBalance` – the pool cannot cover `amount`
    pub fn borrow_funds(
        env: Env,
        borrower: Address,
        amount: i128,
        duration_days: u32,
        purpose: String,
    ) -> Result<(), Error> {
        borrower.require_auth();
        extend_instance(&env);
        borrowing::borrow(&env, &borrower, amount, duration_days, purpose)
    }

    // ── queries ─────────────────────────────────────────────────────────────

    /// Borrower record for any address; zero-valued if it never onboarded.
    pub fn get_borrower_details(env: Env, borrower: Address) -> BorrowerRecord {
        borrower::details(&env, &borrower)
    }

    /// Draw history of the authenticated caller, oldest first.
    pub fn view_borrower_history(env: Env, caller: Address) -> Result<Vec<BorrowRecord>, Error> {
        caller.require_auth();
        read_history(&env, &caller)
    }

    pub fn get_pool_stats(env: Env) -> PoolStats {
        read_pool(&env)
    }

    /// Token balance held by the contract, as reported by the token contract.
    pub fn pool_token_balance(env: Env) -> Result<i128, Error> {
        let config = read_config(&env)?;
        Ok(token::Client::new(&env, &config.token).balance(&env.current_contract_address()))
    }

    /// Native-asset balance held by the contract.
    pub fn pool_native_balance(env: Env) -> Result<i128, Error> {
        let config = read_config(&env)?;
        Ok(token::Client::new(&env, &config.native_token).balance(&env.current_contract_address()))
    }
}
