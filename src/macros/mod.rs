// std::borrow::Cow
// std::option::Option

/// This macro extracts owned value from cow
/// but if cow is borrowed it returns default given value
///
/// it's helpful with `Regex::replace_all`, which returns `Cow::Borrowed`
/// when nothing was replaced: we keep the original `String` instead of
/// copying it. The cow is dropped before `$default` is evaluated, so
/// `$default` may move the string the cow was borrowing from.
macro_rules! owned_from_cow_or {
    ($getcow:expr, $default:expr) => {{
        let owned = match $getcow {
            std::borrow::Cow::Owned(s) => Some(s),
            std::borrow::Cow::Borrowed(_) => None,
        };
        match owned {
            Some(s) => s,
            None => $default,
        }
    }};
}

pub(crate) use owned_from_cow_or;
