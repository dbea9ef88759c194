//! Borrower directory: profiles and the one-time KYC gate.

use soroban_sdk::{log, Address, Env, String};

use crate::events::{
    publish_borrower_onboarded, publish_borrower_verified, BorrowerOnboardedEvent,
    BorrowerVerifiedEvent,
};
use crate::storage::{read_borrower, write_borrower};
use crate::types::{BorrowerRecord, Error};

/// Profile fields supplied by `onboard_borrower`.
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone_no: String,
    pub company_name: String,
    pub country: String,
}

/// Create or update the caller's profile.
///
/// Re-onboarding replaces the five profile strings only; verification state,
/// KYC details, the borrowed total and the history are left untouched.
pub fn onboard(env: &Env, borrower: &Address, profile: Profile) {
    let existing = read_borrower(env, borrower);
    let is_new = existing.is_none();
    let mut record = existing.unwrap_or_else(|| BorrowerRecord::empty(env));

    record.name = profile.name;
    record.email = profile.email;
    record.phone_no = profile.phone_no;
    record.company_name = profile.company_name;
    record.country = profile.country;
    write_borrower(env, borrower, &record);

    publish_borrower_onboarded(
        env,
        BorrowerOnboardedEvent {
            borrower: borrower.clone(),
            company_name: record.company_name,
            country: record.country,
            is_new,
        },
    );
}

/// Mark the caller as verified and store `kyc_details` verbatim.
///
/// Checks run in order: the borrower must exist, must not be verified yet,
/// and the details must be non-empty.
pub fn verify(env: &Env, borrower: &Address, kyc_details: String) -> Result<(), Error> {
    let mut record = match read_borrower(env, borrower) {
        Some(record) => record,
        None => {
            log!(env, "Borrower does not exist");
            return Err(Error::NotFound);
        }
    };
    if record.is_verified {
        log!(env, "cannot verify twice");
        return Err(Error::AlreadyVerified);
    }
    if kyc_details.len() == 0 {
        log!(env, "Invalid KYC details");
        return Err(Error::InvalidInput);
    }

    record.is_verified = true;
    record.kyc_details = kyc_details;
    write_borrower(env, borrower, &record);

    publish_borrower_verified(
        env,
        BorrowerVerifiedEvent {
            borrower: borrower.clone(),
            timestamp: env.ledger().timestamp(),
        },
    );
    Ok(())
}

/// Stored record for `borrower`, or a zero-valued one if it never onboarded.
pub fn details(env: &Env, borrower: &Address) -> BorrowerRecord {
    read_borrower(env, borrower).unwrap_or_else(|| BorrowerRecord::empty(env))
}
