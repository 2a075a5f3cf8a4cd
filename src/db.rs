use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

/// A patient account row, as much of it as the reset needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Patient {
    pub id: i64,
    pub email: String,
    pub username: String,
}

// Open the patient portal database and make sure the schema exists.
// The connection is released when the handle is dropped, on every exit path.
pub fn get_connection() -> Result<Connection> {
    let conn = Connection::open("clinic.db").context("Failed to open clinic.db")?;
    init_patient_db(&conn)?;
    Ok(conn)
}

// Initialize the patients table and indexes (idempotent).
pub fn init_patient_db(conn: &Connection) -> Result<()> {
    // Apply secure PRAGMA settings
    conn.execute_batch(
        r#"
        PRAGMA journal_mode=WAL;
        PRAGMA synchronous=FULL;
        PRAGMA foreign_keys=ON;
        PRAGMA secure_delete=ON;
        PRAGMA temp_store=MEMORY;
        "#,
    )
    .context("Failed to apply secure PRAGMA settings")?;

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS patients (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            email           TEXT NOT NULL UNIQUE,
            username        TEXT NOT NULL UNIQUE,
            hashed_password TEXT NOT NULL,
            created_at      TEXT DEFAULT CURRENT_TIMESTAMP,
            updated_at      TEXT
        );

        CREATE INDEX IF NOT EXISTS ix_patients_email ON patients(email);
        CREATE INDEX IF NOT EXISTS ix_patients_username ON patients(username);
        "#,
    )
    .context("Failed to initialize patients table")?;
    Ok(())
}

// Look up a patient where either the email or the username matches.
// Both columns are UNIQUE, so at most one row can match either clause;
// LIMIT 1 keeps the contract explicit anyway.
pub fn find_patient(conn: &Connection, identifier: &str) -> Result<Option<Patient>> {
    conn.query_row(
        "SELECT id, email, username FROM patients
         WHERE email = ?1 OR username = ?1
         LIMIT 1",
        params![identifier],
        |r| {
            Ok(Patient {
                id: r.get(0)?,
                email: r.get(1)?,
                username: r.get(2)?,
            })
        },
    )
    .optional()
    .context("Failed to query patient")
}

// Overwrite a patient's stored credential inside a transaction.
pub fn update_password(conn: &mut Connection, patient_id: i64, hashed: &str) -> Result<()> {
    let tx = conn.transaction().context("Failed to start transaction")?;
    tx.execute(
        "UPDATE patients
         SET hashed_password = ?1, updated_at = datetime('now')
         WHERE id = ?2",
        params![hashed, patient_id],
    )
    .context("Failed to update password")?;
    tx.commit().context("Failed to commit transaction")?;
    Ok(())
}
