//! Borrowing engine: verified draws from the token pool.

use soroban_sdk::{log, token, Address, Env, String};

use crate::events::{publish_funds_borrowed, FundsBorrowedEvent};
use crate::storage::{
    append_history, clear_reentrancy_guard, read_borrower, read_config, read_pool,
    set_reentrancy_guard, write_borrower, write_pool,
};
use crate::types::{BorrowRecord, Error};

/// Draw `amount` tokens from the pool to a verified borrower.
///
/// `amount` must be positive; zero and negative draws fail with
/// `InvalidInput` after the verification check.
///
/// The pool balance is not checked here; an underfunded pool makes the token
/// transfer fail, which surfaces as `InsufficientPoolBalance`. Local state is
/// written only after the transfer went through.
pub fn borrow(
    env: &Env,
    borrower: &Address,
    amount: i128,
    duration_days: u32,
    purpose: String,
) -> Result<(), Error> {
    let mut record = match read_borrower(env, borrower) {
        Some(record) if record.is_verified => record,
        _ => {
            log!(env, "Unverified users cannot borrow");
            return Err(Error::Unverified);
        }
    };
    if amount <= 0 {
        log!(env, "borrow amount must be positive");
        return Err(Error::InvalidInput);
    }
    let config = read_config(env)?;

    set_reentrancy_guard(env)?;

    let token_client = token::Client::new(env, &config.token);
    match token_client.try_transfer(&env.current_contract_address(), borrower, &amount) {
        Ok(Ok(())) => {}
        _ => {
            clear_reentrancy_guard(env);
            log!(env, "pool cannot cover the requested amount");
            return Err(Error::InsufficientPoolBalance);
        }
    }

    let now = env.ledger().timestamp();
    record.borrowed_amount = record
        .borrowed_amount
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    write_borrower(env, borrower, &record);

    append_history(
        env,
        borrower,
        &BorrowRecord {
            borrower_address: borrower.clone(),
            borrow_amount: amount,
            borrow_time: now,
            loan_duration: duration_days,
            borrow_purpose: purpose,
        },
    )?;

    let mut pool = read_pool(env);
    pool.token_disbursed = pool
        .token_disbursed
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    write_pool(env, &pool);

    clear_reentrancy_guard(env);

    publish_funds_borrowed(
        env,
        FundsBorrowedEvent {
            borrower: borrower.clone(),
            amount,
            loan_duration: duration_days,
            borrowed_amount: record.borrowed_amount,
            timestamp: now,
        },
    );
    Ok(())
}
