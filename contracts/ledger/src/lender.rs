//! Lender/liquidity ledger: token lending terms and native-asset deposits.

use soroban_sdk::{log, token, Address, Env};

use crate::events::{
    publish_lender_onboarded, publish_liquidity_deposited, LenderOnboardedEvent,
    LiquidityDepositedEvent,
};
use crate::storage::{read_config, read_lender, read_pool, write_lender, write_pool};
use crate::types::{Error, LenderRecord};

/// Lowest accepted interest rate, in whole percent.
pub const MIN_INTEREST_RATE_PERCENT: u32 = 1;
/// Highest accepted interest rate, in whole percent.
pub const MAX_INTEREST_RATE_PERCENT: u32 = 30;

fn check_interest_rate(env: &Env, interest_rate_percent: u32) -> Result<(), Error> {
    if interest_rate_percent < MIN_INTEREST_RATE_PERCENT {
        log!(env, "interest rate is less than zero");
        return Err(Error::InvalidRate);
    }
    if interest_rate_percent > MAX_INTEREST_RATE_PERCENT {
        log!(env, "interest rate is greater than 30 %");
        return Err(Error::InvalidRate);
    }
    Ok(())
}

/// Pull `token_amount` from `lender` into the pool and record the terms.
///
/// Principal accumulates across calls; rate and time lock are replaced by
/// the values of the latest call. `token_amount` must be positive, and the
/// lender must have approved the contract for at least that much beforehand.
pub fn onboard(
    env: &Env,
    lender: &Address,
    token_amount: i128,
    interest_rate_percent: u32,
    time_lock_days: u32,
) -> Result<(), Error> {
    check_interest_rate(env, interest_rate_percent)?;
    if token_amount <= 0 {
        log!(env, "token amount must be positive");
        return Err(Error::InvalidInput);
    }
    let config = read_config(env)?;

    let pool_address = env.current_contract_address();
    let token_client = token::Client::new(env, &config.token);
    match token_client.try_transfer_from(&pool_address, lender, &pool_address, &token_amount) {
        Ok(Ok(())) => {}
        _ => {
            log!(env, "token transfer from lender denied");
            return Err(Error::TransferDenied);
        }
    }

    let mut record = read_lender(env, lender).unwrap_or_default();
    record.token_liquidity_amount = record
        .token_liquidity_amount
        .checked_add(token_amount)
        .ok_or(Error::Overflow)?;
    record.interest_rate_percent = interest_rate_percent;
    record.time_lock_days = time_lock_days;
    record.active = true;
    write_lender(env, lender, &record);

    let mut pool = read_pool(env);
    pool.token_deposited = pool
        .token_deposited
        .checked_add(token_amount)
        .ok_or(Error::Overflow)?;
    write_pool(env, &pool);

    publish_lender_onboarded(
        env,
        LenderOnboardedEvent {
            lender: lender.clone(),
            token_amount,
            interest_rate_percent,
            time_lock_days,
            total_liquidity: record.token_liquidity_amount,
        },
    );
    Ok(())
}

/// Move `amount` of the native asset from `lender` into the pool.
///
/// The first deposit stamps `start_date`; later deposits only add to
/// `native_deposited`.
pub fn deposit_native(env: &Env, lender: &Address, amount: i128) -> Result<(), Error> {
    if amount <= 0 {
        log!(env, "Must send ETH to provide liquidity");
        return Err(Error::ZeroDeposit);
    }
    let config = read_config(env)?;

    let native_client = token::Client::new(env, &config.native_token);
    match native_client.try_transfer(lender, &env.current_contract_address(), &amount) {
        Ok(Ok(())) => {}
        _ => return Err(Error::TransferDenied),
    }

    let now = env.ledger().timestamp();
    let mut record = read_lender(env, lender).unwrap_or_default();
    record.native_deposited = record
        .native_deposited
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    if record.start_date.is_none() {
        record.start_date = Some(now);
    }
    record.active = true;
    write_lender(env, lender, &record);

    let mut pool = read_pool(env);
    pool.native_deposited = pool
        .native_deposited
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    write_pool(env, &pool);

    publish_liquidity_deposited(
        env,
        LiquidityDepositedEvent {
            lender: lender.clone(),
            amount,
            total_deposited: record.native_deposited,
            timestamp: now,
        },
    );
    Ok(())
}

pub fn details(env: &Env, lender: &Address) -> Option<LenderRecord> {
    read_lender(env, lender)
}
