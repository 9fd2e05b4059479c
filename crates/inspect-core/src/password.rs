//! Password entropy estimation
//!
//! Classic charset-pool estimate: entropy = length × log2(pool size),
//! where the pool is the union of character classes the password actually
//! uses. A brute-force-only model, but good enough for the strength meter.

use serde::Serialize;

/// Guesses per second assumed for the crack-time hint (offline GPU rig)
const GUESSES_PER_SECOND: f64 = 1e10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PasswordStrength {
    VeryWeak,
    Weak,
    Reasonable,
    Strong,
    VeryStrong,
}

#[derive(Debug, Clone, Serialize)]
pub struct PasswordReport {
    pub length: usize,
    pub pool_size: u32,
    pub entropy_bits: f64,
    pub strength: PasswordStrength,
    pub crack_time: String,
}

pub fn estimate_password(password: &str) -> PasswordReport {
    let length = password.chars().count();
    let pool_size = pool_size(password);
    let entropy_bits = if length == 0 {
        0.0
    } else {
        length as f64 * (pool_size as f64).log2()
    };

    PasswordReport {
        length,
        pool_size,
        entropy_bits,
        strength: strength_for(entropy_bits),
        crack_time: crack_time(entropy_bits),
    }
}

fn pool_size(password: &str) -> u32 {
    if password.is_empty() {
        return 0;
    }
    let mut pool = 0;
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        pool += 26;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        pool += 26;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        pool += 10;
    }
    if password.chars().any(|c| c.is_ascii() && !c.is_ascii_alphanumeric()) {
        pool += 32;
    }
    if password.chars().any(|c| !c.is_ascii()) {
        // Treat non-ASCII as one extra printable plane
        pool += 94;
    }
    pool
}

fn strength_for(bits: f64) -> PasswordStrength {
    match bits {
        b if b < 28.0 => PasswordStrength::VeryWeak,
        b if b < 36.0 => PasswordStrength::Weak,
        b if b < 60.0 => PasswordStrength::Reasonable,
        b if b < 128.0 => PasswordStrength::Strong,
        _ => PasswordStrength::VeryStrong,
    }
}

fn crack_time(bits: f64) -> String {
    let seconds = 2f64.powf(bits) / GUESSES_PER_SECOND;
    match seconds {
        s if s < 1.0 => "instantly".to_string(),
        s if s < 60.0 => format!("{:.0} seconds", s),
        s if s < 3_600.0 => format!("{:.0} minutes", s / 60.0),
        s if s < 86_400.0 => format!("{:.0} hours", s / 3_600.0),
        s if s < 31_536_000.0 => format!("{:.0} days", s / 86_400.0),
        s if s < 31_536_000.0 * 1_000.0 => format!("{:.0} years", s / 31_536_000.0),
        _ => "centuries".to_string(),
    }
}
