//! Storage accessors. All contract state goes through these helpers so TTL
//! extension happens in one place.

use soroban_sdk::{Address, Env, Vec};

use crate::types::{BorrowRecord, BorrowerRecord, DataKey, Error, LedgerConfig, LenderRecord, PoolStats};

const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const LEDGER_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const LEDGER_LIFETIME_THRESHOLD: u32 = LEDGER_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, LEDGER_LIFETIME_THRESHOLD, LEDGER_BUMP_AMOUNT);
}

// ── configuration ───────────────────────────────────────────────────────────

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn read_config(env: &Env) -> Result<LedgerConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn write_config(env: &Env, config: &LedgerConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

// ── pool totals ─────────────────────────────────────────────────────────────

pub fn read_pool(env: &Env) -> PoolStats {
    env.storage()
        .instance()
        .get(&DataKey::Pool)
        .unwrap_or_default()
}

pub fn write_pool(env: &Env, pool: &PoolStats) {
    env.storage().instance().set(&DataKey::Pool, pool);
}

// ── reentrancy guard ────────────────────────────────────────────────────────

pub fn set_reentrancy_guard(env: &Env) -> Result<(), Error> {
    let current: bool = env
        .storage()
        .instance()
        .get(&DataKey::Reentrancy)
        .unwrap_or(false);
    if current {
        return Err(Error::Reentrancy);
    }
    env.storage().instance().set(&DataKey::Reentrancy, &true);
    Ok(())
}

pub fn clear_reentrancy_guard(env: &Env) {
    env.storage().instance().set(&DataKey::Reentrancy, &false);
}

// ── lenders ─────────────────────────────────────────────────────────────────

pub fn read_lender(env: &Env, lender: &Address) -> Option<LenderRecord> {
    let key = DataKey::Lender(lender.clone());
    let record = env.storage().persistent().get(&key);
    if record.is_some() {
        extend_persistent(env, &key);
    }
    record
}

pub fn write_lender(env: &Env, lender: &Address, record: &LenderRecord) {
    let key = DataKey::Lender(lender.clone());
    env.storage().persistent().set(&key, record);
    extend_persistent(env, &key);
}

// ── borrowers ───────────────────────────────────────────────────────────────

pub fn read_borrower(env: &Env, borrower: &Address) -> Option<BorrowerRecord> {
    let key = DataKey::Borrower(borrower.clone());
    let record = env.storage().persistent().get(&key);
    if record.is_some() {
        extend_persistent(env, &key);
    }
    record
}

pub fn write_borrower(env: &Env, borrower: &Address, record: &BorrowerRecord) {
    let key = DataKey::Borrower(borrower.clone());
    env.storage().persistent().set(&key, record);
    extend_persistent(env, &key);
}

pub fn read_history_len(env: &Env, borrower: &Address) -> u32 {
    let key = DataKey::HistoryLen(borrower.clone());
    match env.storage().persistent().get(&key) {
        Some(len) => {
            extend_persistent(env, &key);
            len
        }
        None => 0,
    }
}

pub fn read_history(env: &Env, borrower: &Address) -> Result<Vec<BorrowRecord>, Error> {
    let len = read_history_len(env, borrower);
    let mut history = Vec::new(env);
    for index in 0..len {
        let key = DataKey::HistoryEntry(borrower.clone(), index);
        let entry: BorrowRecord = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(Error::NotFound)?;
        extend_persistent(env, &key);
        history.push_back(entry);
    }
    Ok(history)
}

/// Store `entry` under the next index. Earlier entries are not rewritten.
pub fn append_history(env: &Env, borrower: &Address, entry: &BorrowRecord) -> Result<(), Error> {
    let index = read_history_len(env, borrower);
    let next = index.checked_add(1).ok_or(Error::Overflow)?;

    let entry_key = DataKey::HistoryEntry(borrower.clone(), index);
    env.storage().persistent().set(&entry_key, entry);
    extend_persistent(env, &entry_key);

    let len_key = DataKey::HistoryLen(borrower.clone());
    env.storage().persistent().set(&len_key, &next);
    extend_persistent(env, &len_key);
    Ok(())
}
