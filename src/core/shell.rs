//! Helpers for emitting shell-evaluable output.
//!
//! The `env` command prints `export NAME='value'` lines meant for
//! `eval "$(gdir env)"` in a POSIX shell, so values must survive spaces,
//! quotes and globs, and names must be valid identifiers.

/// Quote `value` for a POSIX shell using single quotes.
///
/// Embedded single quotes use the `'\''` sequence (close, escaped quote,
/// reopen).
pub fn sh_quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for ch in value.chars() {
        if ch == '\'' {
            quoted.push_str("'\\''");
        } else {
            quoted.push(ch);
        }
    }
    quoted.push('\'');
    quoted
}

/// Map a bookmark key onto a `GDIR_*` environment variable name.
///
/// Anything outside `[A-Za-z0-9]` becomes `_`; letters are uppercased.
pub fn env_var_name(key: &str) -> String {
    let mut name = String::with_capacity(key.len() + 5);
    name.push_str("GDIR_");
    for ch in key.chars() {
        if ch.is_ascii_alphanumeric() {
            name.push(ch.to_ascii_uppercase());
        } else {
            name.push('_');
        }
    }
    name
}
