use std::fmt;

///
/// Constrained
///
/// A type whose values satisfy a domain constraint. `try_constrain` is the
/// only way in from the unconstrained representation.
///

pub trait Constrained: Sized {
    type Unconstrained;
    type Error: std::error::Error + PartialEq + Send + Sync + 'static;

    fn try_constrain(value: Self::Unconstrained) -> Result<Self, Self::Error>;
}

///
/// MaybeConstrained
///
/// A builder-held value that is either already constrained or still raw
/// and awaiting its constraint check.
///

pub enum MaybeConstrained<T: Constrained> {
    Constrained(T),
    Unconstrained(T::Unconstrained),
}

impl<T: Constrained> MaybeConstrained<T> {
    #[must_use]
    pub const fn is_constrained(&self) -> bool {
        matches!(self, Self::Constrained(_))
    }

    /// Resolve to the constrained value, running the check on raw input.
    pub fn try_into_constrained(self) -> Result<T, T::Error> {
        match self {
            Self::Constrained(value) => Ok(value),
            Self::Unconstrained(raw) => T::try_constrain(raw),
        }
    }
}

impl<T> Clone for MaybeConstrained<T>
where
    T: Constrained + Clone,
    T::Unconstrained: Clone,
{
    fn clone(&self) -> Self {
        match self {
            Self::Constrained(v) => Self::Constrained(v.clone()),
            Self::Unconstrained(v) => Self::Unconstrained(v.clone()),
        }
    }
}

impl<T> fmt::Debug for MaybeConstrained<T>
where
    T: Constrained + fmt::Debug,
    T::Unconstrained: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constrained(v) => f.debug_tuple("Constrained").field(v).finish(),
            Self::Unconstrained(v) => f.debug_tuple("Unconstrained").field(v).finish(),
        }
    }
}

impl<T> PartialEq for MaybeConstrained<T>
where
    T: Constrained + PartialEq,
    T::Unconstrained: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Constrained(a), Self::Constrained(b)) => a == b,
            (Self::Unconstrained(a), Self::Unconstrained(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thiserror::Error as ThisError;

    #[derive(Debug, PartialEq)]
    struct Short(String);

    #[derive(Debug, PartialEq, ThisError)]
    #[error("too long: {0}")]
    struct TooLong(usize);

    impl Constrained for Short {
        type Unconstrained = String;
        type Error = TooLong;

        fn try_constrain(value: String) -> Result<Self, TooLong> {
            if value.len() > 4 {
                Err(TooLong(value.len()))
            } else {
                Ok(Self(value))
            }
        }
    }

    #[test]
    fn constrained_values_skip_the_check() {
        let v = MaybeConstrained::Constrained(Short("toolong".into()));
        assert!(v.is_constrained());
        assert_eq!(v.try_into_constrained(), Ok(Short("toolong".into())));
    }

    #[test]
    fn raw_values_are_checked() {
        let ok = MaybeConstrained::<Short>::Unconstrained("abc".into());
        let bad = MaybeConstrained::<Short>::Unconstrained("abcdef".into());

        assert_eq!(ok.try_into_constrained(), Ok(Short("abc".into())));
        assert_eq!(bad.try_into_constrained(), Err(TooLong(6)));
    }
}
