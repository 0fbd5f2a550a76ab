//! Override-merge helper.
//!
//! Both exporters repeat the same shadowing pattern: a manual override
//! field wins when present and non-empty, otherwise derived fallbacks are
//! tried in order. Expressed once here instead of ad hoc per field.

/// First non-empty value in precedence order, or the empty string.
pub fn first_non_empty<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    values
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
        .unwrap_or_default()
        .to_string()
}
