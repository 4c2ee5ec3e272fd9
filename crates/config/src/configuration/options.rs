//! Default-value and transform policy for reads.
//!
//! Invariants:
//! - The transform runs only on a present value.
//! - The default is returned untransformed, and only for an absent value.

/// Read options: a transform from the raw value `R` to `T`, plus an optional default.
///
/// ```rust,ignore
/// let port = config.get_with(
///     "port",
///     ReadOptions::transform(|v: Value| v.as_str().and_then(|s| s.parse::<u16>().ok()))
///         .with_default(Some(8080)),
/// )?;
/// ```
///
/// The transform may borrow from the caller's scope for the lifetime `'a`.
pub struct ReadOptions<'a, R, T> {
    transform: Box<dyn FnOnce(R) -> T + 'a>,
    default_value: Option<T>,
}

impl<'a, R, T> ReadOptions<'a, R, T> {
    /// Apply `transform` to a found value.
    pub fn transform<F>(transform: F) -> Self
    where
        F: FnOnce(R) -> T + 'a,
    {
        Self {
            transform: Box::new(transform),
            default_value: None,
        }
    }

    /// Return `default` when nothing is found.
    pub fn with_default(mut self, default: T) -> Self {
        self.default_value = Some(default);
        self
    }

    pub(crate) fn apply(self, raw: Option<R>) -> Option<T> {
        match raw {
            Some(value) => Some((self.transform)(value)),
            None => self.default_value,
        }
    }
}
