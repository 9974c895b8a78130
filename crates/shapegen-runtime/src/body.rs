use bytes::Bytes;

/// Body type of every response produced by upgraded operations.
pub type BoxBody = Bytes;

#[must_use]
pub const fn empty() -> BoxBody {
    Bytes::new()
}

#[must_use]
pub fn from_text(text: impl Into<String>) -> BoxBody {
    Bytes::from(text.into())
}
