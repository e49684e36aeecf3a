//! Masked container for sensitive values.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use zeroize::Zeroize;

/// Placeholder rendered wherever a secret would otherwise appear.
pub const MASK: &str = "******";

/// Placeholder rendered by the `Debug` representation.
pub const DEBUG_MASK: &str = "SecretBox{******}";

/// A value that renders as [`MASK`] in every formatting and serialization path.
///
/// `Display` writes `******`, `Debug` writes `SecretBox{******}`, and
/// `Serialize` emits the string `"******"` in place of whatever `T` would
/// normally produce. Deserializing reads a real `T`, so a decode followed by
/// an encode does not round-trip. The only way back to the payload is
/// [`SecretBox::expose_secret`] (or [`SecretBox::into_exposed_secret`]),
/// which keeps every deliberate access greppable.
pub struct SecretBox<T> {
    inner: T,
}

/// A secret UTF-8 string.
pub type SecretString = SecretBox<String>;

/// A secret byte buffer.
pub type SecretBytes = SecretBox<Vec<u8>>;

impl<T> SecretBox<T> {
    /// Wrap a value.
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }

    /// Expose the secret value.
    ///
    /// Use sparingly - only when the actual value is needed.
    pub fn expose_secret(&self) -> &T {
        &self.inner
    }

    /// Consume the box and return the secret value.
    pub fn into_exposed_secret(self) -> T {
        self.inner
    }

    /// The plain masked form.
    pub fn masked(&self) -> &'static str {
        MASK
    }

    /// The debug masked form.
    pub fn masked_debug(&self) -> &'static str {
        DEBUG_MASK
    }
}

impl<T: Default> Default for SecretBox<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone> Clone for SecretBox<T> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<T> From<T> for SecretBox<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        Self::new(s.to_string())
    }
}

// Never print secrets
impl<T> fmt::Display for SecretBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(MASK)
    }
}

impl<T> fmt::Debug for SecretBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(DEBUG_MASK)
    }
}

impl<T> Serialize for SecretBox<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(MASK)
    }
}

impl<'de, T> Deserialize<'de> for SecretBox<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self::new)
    }
}

/// Wipes the payload in place. Nothing is wiped on drop.
impl<T: Zeroize> Zeroize for SecretBox<T> {
    fn zeroize(&mut self) {
        self.inner.zeroize();
    }
}
