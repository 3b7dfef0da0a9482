use std::borrow::Cow;

use crate::error::NormalizeError;

/// Text preprocessing applied before tokenization.
///
/// The same normalizer runs on training sentences and on queries.
/// Implementations must be reentrant: one instance is shared by the
/// training worker and every concurrent search.
pub trait Normalizer: Send + Sync {
    fn normalize(&self, text: &str) -> Result<String, NormalizeError>;
}

impl<F> Normalizer for F
where
    F: Fn(&str) -> Result<String, NormalizeError> + Send + Sync,
{
    #[inline]
    fn normalize(&self, text: &str) -> Result<String, NormalizeError> {
        self(text)
    }
}

/// Runs `normalizer` on `text`, or borrows `text` unchanged when there is none.
pub fn normalize_with<'a>(
    normalizer: Option<&dyn Normalizer>,
    text: &'a str,
) -> Result<Cow<'a, str>, NormalizeError> {
    match normalizer {
        Some(n) => n.normalize(text).map(Cow::Owned),
        None => Ok(Cow::Borrowed(text)),
    }
}
