use anyhow::{Context, Result};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
}; // Argon2 hashing algorithm for hashing and verification

// Build an Argon2id hasher with the same parameters the patient portal uses,
// so hashes written here verify against its login path.
/* Parameters:
   - memory_cost: 65_536 KiB (~64 MiB)
   - iterations: 3 passes over memory
   - parallelism: 1 thread
   - output_length: None -> default (32 bytes) */
fn argon2_hasher() -> Argon2<'static> {
    let params = argon2::Params::new(65_536, 3, 1, None).expect("Invalid Argon2 params");
    Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params)
}

/// Hash a plaintext password with Argon2id.
/// Returns a PHC-formatted string suitable for storage in the database.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng); // unique random salt per hash
    let hasher = argon2_hasher();
    let phc = hasher
        .hash_password(password.as_bytes(), &salt)
        .context("Failed to hash password")?;
    Ok(phc.to_string())
}

/// Verify a plaintext password against a stored PHC hash.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(stored_hash).context("Invalid password hash format")?;
    let hasher = argon2_hasher();
    Ok(hasher.verify_password(password.as_bytes(), &parsed).is_ok())
}
