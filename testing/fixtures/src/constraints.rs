//! Constrained shapes referenced by the fixture model.

use shapegen::runtime::constrained::Constrained;
use thiserror::Error as ThisError;

///
/// Nickname
/// display name of 1 to 16 characters
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Nickname(String);

impl Nickname {
    pub const MAX_LEN: usize = 16;

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

///
/// NicknameError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum NicknameError {
    #[error("nickname must be 1 to {max} characters, got {len}", max = Nickname::MAX_LEN)]
    Length { len: usize },
}

impl Constrained for Nickname {
    type Unconstrained = String;
    type Error = NicknameError;

    fn try_constrain(value: String) -> Result<Self, Self::Error> {
        let len = value.chars().count();
        if (1..=Self::MAX_LEN).contains(&len) {
            Ok(Self(value))
        } else {
            Err(NicknameError::Length { len })
        }
    }
}

///
/// Handle
/// `@` followed by at least one ASCII alphanumeric character
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Handle(String);

impl Handle {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

///
/// HandleError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum HandleError {
    #[error("handle must start with '@'")]
    MissingAt,

    #[error("handle has no name after '@'")]
    Empty,

    #[error("handle contains invalid character {0:?}")]
    InvalidChar(char),
}

impl Constrained for Handle {
    type Unconstrained = String;
    type Error = HandleError;

    fn try_constrain(value: String) -> Result<Self, Self::Error> {
        let name = value.strip_prefix('@').ok_or(HandleError::MissingAt)?;
        if name.is_empty() {
            return Err(HandleError::Empty);
        }
        if let Some(c) = name.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(HandleError::InvalidChar(c));
        }

        Ok(Self(value))
    }
}
