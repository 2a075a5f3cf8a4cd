use anyhow::Result;
use colored::*;
use rusqlite::Connection;
use zeroize::Zeroize;

use crate::auth::hash_password;
use crate::db::{find_patient, update_password};

const MIN_PASSWORD_LEN: usize = 8;

/// Reset the password for a patient account.
/// The identifier matches either the email or the username column.
/// Returns Ok(true) on success, Ok(false) when the account is missing or
/// the new password fails policy; neither failure touches the database.
pub fn reset_password(conn: &mut Connection, identifier: &str, new_password: &str) -> Result<bool> {
    // Find patient by email or username
    let patient = match find_patient(conn, identifier)? {
        Some(p) => p,
        None => {
            println!("{} Patient not found: {}", "✗".red(), identifier);
            return Ok(false);
        }
    };

    // Length is counted in characters, not bytes
    if new_password.chars().count() < MIN_PASSWORD_LEN {
        println!(
            "{} Password must be at least {} characters long",
            "✗".red(),
            MIN_PASSWORD_LEN
        );
        return Ok(false);
    }

    // Hash the new password, then wipe the plaintext copy
    let mut plain = new_password.to_string();
    let hashed = hash_password(&plain)?;
    plain.zeroize();

    update_password(conn, patient.id, &hashed)?;

    println!(
        "{} Password reset successful for: {} (Username: {})",
        "✓".green(),
        patient.email,
        patient.username
    );
    Ok(true)
}
