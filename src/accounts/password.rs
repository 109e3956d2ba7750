//! Password policy and generation

use rand::Rng;
use rand::distr::Alphanumeric;
use rand::seq::SliceRandom;
use thiserror::Error;

/// Shortest password accepted at registration
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Which password rule was broken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("Password cannot be empty.")]
    Empty,
    #[error("Password must be at least {MIN_PASSWORD_LENGTH} characters long!")]
    TooShort,
    #[error("Password must contain at least 1 uppercase letter!")]
    NoUppercase,
    #[error("Password must contain at least 1 number!")]
    NoDigit,
}

/// Check `password` against the registration policy
///
/// # Errors
/// Returns the first rule the password breaks, checked in the order empty,
/// length, uppercase, digit.
pub fn validate_password(password: &str) -> Result<(), PasswordError> {
    if password.is_empty() {
        Err(PasswordError::Empty)
    } else if password.chars().count() < MIN_PASSWORD_LENGTH {
        Err(PasswordError::TooShort)
    } else if !password.chars().any(char::is_uppercase) {
        Err(PasswordError::NoUppercase)
    } else if !password.chars().any(|c| c.is_ascii_digit()) {
        Err(PasswordError::NoDigit)
    } else {
        Ok(())
    }
}

/// Generate a policy-satisfying password of at least [`MIN_PASSWORD_LENGTH`]
/// alphanumeric characters
pub fn generate_password<R: Rng>(rng: &mut R, length: usize) -> String {
    let length = length.max(MIN_PASSWORD_LENGTH);

    let mut chars = Vec::with_capacity(length);
    chars.push(char::from(rng.random_range(b'A'..=b'Z')));
    chars.push(char::from(rng.random_range(b'0'..=b'9')));
    chars.extend((2..length).map(|_| char::from(rng.sample(Alphanumeric))));
    chars.shuffle(rng);

    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn accepts_valid_password() {
        assert_eq!(validate_password("Hangman42"), Ok(()));
    }

    #[test]
    fn reports_first_broken_rule() {
        assert_eq!(validate_password(""), Err(PasswordError::Empty));
        assert_eq!(validate_password("Ab1"), Err(PasswordError::TooShort));
        assert_eq!(validate_password("hangman42"), Err(PasswordError::NoUppercase));
        assert_eq!(validate_password("HangmanXY"), Err(PasswordError::NoDigit));
    }

    #[test]
    fn generated_passwords_satisfy_policy() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..200 {
            let password = generate_password(&mut rng, MIN_PASSWORD_LENGTH);
            assert_eq!(password.len(), MIN_PASSWORD_LENGTH);
            assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
            assert_eq!(validate_password(&password), Ok(()), "{password}");
        }
    }

    #[test]
    fn generated_length_has_a_floor() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generate_password(&mut rng, 3).len(), MIN_PASSWORD_LENGTH);
        assert_eq!(generate_password(&mut rng, 12).len(), 12);
    }
}
