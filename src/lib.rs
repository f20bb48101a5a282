//! Cryptographically secure random strings over a configurable alphabet.
//!
//! ```
//! use secure_random_string::{generate, Alphabet};
//!
//! let alphabet = Alphabet::from_string("abc123").unwrap();
//! let token = generate(&alphabet, 10).unwrap();
//! assert_eq!(token.chars().count(), 10);
//! ```

mod alphabet;
mod error;
mod generator;

pub use alphabet::{Alphabet, DEFAULT_SYMBOLS};
pub use error::Error;
pub use generator::{generate, generate_with};
