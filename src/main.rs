use anyhow::Result;
use std::env;
use std::process;

use reset_patient_password::{db, reset};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    // Exactly two positional arguments; anything else is a usage error.
    if args.len() != 3 {
        eprintln!("Usage: reset_patient_password <email_or_username> <new_password>");
        eprintln!();
        eprintln!("Example:");
        eprintln!("  reset_patient_password priyanshu@gmail.com MyNewPassword123");
        process::exit(1);
    }

    let identifier = &args[1];
    let new_password = &args[2];

    let mut conn = db::get_connection()?;

    // Found/not-found and policy failures are reported on stdout;
    // the process still exits 0 unless the store itself failed.
    reset::reset_password(&mut conn, identifier, new_password)?;

    Ok(())
}
