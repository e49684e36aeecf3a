//! # secretbox
//!
//! A generic container for credentials, tokens, and keys that cannot leak
//! through formatting or serialization by accident.
//!
//! - **Formatting**: `Display` renders `******`, `Debug` renders
//!   `SecretBox{******}`
//! - **Serialization**: any serde format encodes the field as `"******"`,
//!   however deep it is nested
//! - **Deserialization**: the real value is decoded with `T`'s own rules
//!
//! The payload is only reachable through [`SecretBox::expose_secret`].
//!
//! ```
//! use secretbox::SecretBox;
//!
//! let password = SecretBox::new("supersecret123");
//!
//! assert_eq!(format!("Password: {}", password), "Password: ******");
//! assert_eq!(*password.expose_secret(), "supersecret123");
//! ```
//!
//! Structs that hold secrets can be encoded and decoded as usual:
//!
//! ```
//! use secretbox::SecretString;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Login {
//!     username: String,
//!     password: SecretString,
//! }
//!
//! let login: Login =
//!     secretbox::codec::from_json(r#"{"username":"lex","password":"secret-password"}"#)?;
//! assert_eq!(login.password.expose_secret(), "secret-password");
//!
//! let json = secretbox::codec::to_json(&login)?;
//! assert_eq!(json, r#"{"username":"lex","password":"******"}"#);
//! # Ok::<(), secretbox::Error>(())
//! ```

#[cfg(any(feature = "json", feature = "yaml"))]
pub mod codec;
pub mod error;
pub mod secret;

pub use error::{Error, Result};
pub use secret::{SecretBox, SecretBytes, SecretString, DEBUG_MASK, MASK};
