//! Core data types for the Credlink ledger contract.

use soroban_sdk::{contracterror, contracttype, Address, Env, String};

#[contracterror]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidRate = 3,
    ZeroDeposit = 4,
    NotFound = 5,
    AlreadyVerified = 6,
    InvalidInput = 7,
    Unverified = 8,
    TransferDenied = 9,
    InsufficientPoolBalance = 10,
    Overflow = 11,
    Reentrancy = 12,
}

/// Storage keys. `Config`, `Pool` and `Reentrancy` live in instance storage,
/// the per-address records in persistent storage.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Config,
    Pool,
    Reentrancy,
    Lender(Address),
    Borrower(Address),
    HistoryLen(Address),
    HistoryEntry(Address, u32),
}

/// Addresses fixed at `init`.
///
/// * `token` – fungible token lent by lenders and drawn by borrowers.
/// * `native_token` – Stellar Asset Contract of the network's native asset,
///   used for `lend_funds` deposits.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerConfig {
    pub admin: Address,
    pub token: Address,
    pub native_token: Address,
}

/// Lending terms and deposits of a single lender.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LenderRecord {
    /// Cumulative token principal pulled in by `onboard_lender`.
    pub token_liquidity_amount: i128,
    /// Terms of the most recent `onboard_lender` call.
    pub interest_rate_percent: u32,
    pub time_lock_days: u32,
    /// Cumulative native-asset amount deposited through `lend_funds`.
    pub native_deposited: i128,
    /// Ledger timestamp of the first `lend_funds` deposit. Never overwritten.
    pub start_date: Option<u64>,
    pub active: bool,
}

/// Borrower profile plus verification and loan state.
///
/// The borrow history is stored separately, one `DataKey::HistoryEntry` per
/// draw plus a `DataKey::HistoryLen` counter.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BorrowerRecord {
    pub name: String,
    pub email: String,
    pub phone_no: String,
    pub company_name: String,
    pub country: String,
    pub is_verified: bool,
    pub kyc_details: String,
    pub borrowed_amount: i128,
}

impl BorrowerRecord {
    /// Zero-valued record, returned for addresses that never onboarded.
    pub fn empty(env: &Env) -> Self {
        let blank = String::from_str(env, "");
        BorrowerRecord {
            name: blank.clone(),
            email: blank.clone(),
            phone_no: blank.clone(),
            company_name: blank.clone(),
            country: blank.clone(),
            is_verified: false,
            kyc_details: blank,
            borrowed_amount: 0,
        }
    }
}

/// One successful `borrow_funds` draw. Immutable once appended.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BorrowRecord {
    pub borrower_address: Address,
    pub borrow_amount: i128,
    pub borrow_time: u64,
    /// Requested loan duration in days.
    pub loan_duration: u32,
    pub borrow_purpose: String,
}

/// Running pool totals.
///
/// Token custody of the contract equals `token_deposited - token_disbursed`;
/// native custody equals `native_deposited`.
#[contracttype]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PoolStats {
    pub token_deposited: i128,
    pub token_disbursed: i128,
    pub native_deposited: i128,
}
