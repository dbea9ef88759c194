//! Event types and topic constants for the Credlink ledger.
//! Stable event schemas for indexing and analytics.

use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

/// Emitted when a lender deposits token liquidity and sets lending terms.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LenderOnboardedEvent {
    pub lender: Address,
    pub token_amount: i128,
    pub interest_rate_percent: u32,
    pub time_lock_days: u32,
    pub total_liquidity: i128,
}

/// Emitted on every native-asset deposit through `lend_funds`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LiquidityDepositedEvent {
    pub lender: Address,
    pub amount: i128,
    pub total_deposited: i128,
    pub timestamp: u64,
}

/// Emitted when a borrower profile is created or updated.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BorrowerOnboardedEvent {
    pub borrower: Address,
    pub company_name: String,
    pub country: String,
    pub is_new: bool,
}

/// Emitted when a borrower passes KYC.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BorrowerVerifiedEvent {
    pub borrower: Address,
    pub timestamp: u64,
}

/// Emitted when a verified borrower draws from the pool.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsBorrowedEvent {
    pub borrower: Address,
    pub amount: i128,
    pub loan_duration: u32,
    pub borrowed_amount: i128,
    pub timestamp: u64,
}

pub fn publish_lender_onboarded(env: &Env, event: LenderOnboardedEvent) {
    env.events()
        .publish((symbol_short!("lender"), symbol_short!("onboard")), event);
}

pub fn publish_liquidity_deposited(env: &Env, event: LiquidityDepositedEvent) {
    env.events()
        .publish((symbol_short!("lender"), symbol_short!("deposit")), event);
}

pub fn publish_borrower_onboarded(env: &Env, event: BorrowerOnboardedEvent) {
    env.events()
        .publish((symbol_short!("borrower"), symbol_short!("onboard")), event);
}

pub fn publish_borrower_verified(env: &Env, event: BorrowerVerifiedEvent) {
    env.events()
        .publish((symbol_short!("borrower"), symbol_short!("kyc")), event);
}

pub fn publish_funds_borrowed(env: &Env, event: FundsBorrowedEvent) {
    env.events()
        .publish((symbol_short!("borrow"), symbol_short!("draw")), event);
}
