use anyhow::{Context, Result};
use rpassword::prompt_password;
use rpawogen::passgen;

use super::display_strength;

pub fn test_password(password: Option<String>, details: bool) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => prompt_password("Enter password to score: ")
            .context("Failed to read password")?,
    };

    display_strength(&password);
    if details {
        for (class, count) in passgen::class_counts(&password) {
            println!("  {:<20} {}", class, count);
        }
    }
    Ok(())
}
