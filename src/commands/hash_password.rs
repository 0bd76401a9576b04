//! Admin password hashing command.

use clap::Args;

use contenthub_auth::PasswordHasher;
use contenthub_core::error::AppError;

/// Arguments for the hash-password command
#[derive(Debug, Args)]
pub struct HashPasswordArgs {
    /// Plain-text password to hash
    pub password: String,
}

/// Print the PHC string for the given password.
pub fn execute(args: &HashPasswordArgs) -> Result<(), AppError> {
    if args.password.is_empty() {
        return Err(AppError::validation("password must not be empty"));
    }
    let hash = PasswordHasher::new().hash_password(&args.password)?;
    println!("{hash}");
    Ok(())
}
