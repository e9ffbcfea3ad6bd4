//! Railway-oriented combinators on top of `std::result::Result` and
//! `std::option::Option`.
//!
//! Rust's enums already give us the two tracks: the success payload of a
//! `Result` is unreachable without a match, so most of the vocabulary comes
//! straight from std:
//!
//! | Operation              | Result                         | Option                         |
//! |------------------------|--------------------------------|--------------------------------|
//! | construct              | `Ok(v)` / `Err(e)`             | `Some(v)` / `None`             |
//! | predicates             | `is_ok()` / `is_err()`         | `is_some()` / `is_none()`      |
//! | default                | `unwrap_or` / `unwrap_or_else` | `unwrap_or` / `unwrap_or_else` |
//! | asserted access        | `expect(msg)`                  | `expect(msg)`                  |
//! | map (same or new type) | `map`                          | `map`                          |
//! | bind                   | `and_then`                     | `and_then`                     |
//! | error transform        | `map_err`                      | -                              |
//! | keep if predicate      | -                              | `filter`                       |
//!
//! The extension traits below fill in the rest: fail-fast accessors,
//! eager/lazy fallbacks, recovery and side-effect taps.

use std::fmt;

/// Extra combinators for `Result<T, E>`.
pub trait ResultExt<T, E>: Sized {
    /// Success payload.
    ///
    /// # Panics
    ///
    /// Panics if the result is an error. Match first, or use
    /// `unwrap_or` / [`ResultExt::recover`] when a default exists.
    fn value(self) -> T;

    /// Error payload.
    ///
    /// # Panics
    ///
    /// Panics if the result is a success.
    fn error_info(self) -> E;

    /// `self` if ok, otherwise the eagerly evaluated `alternative`.
    fn fallback(self, alternative: Self) -> Self;

    /// `self` if ok, otherwise the alternative computed by `f`.
    fn fallback_with(self, f: impl FnOnce() -> Self) -> Self;

    /// Collapse both tracks into a plain value. Never fails.
    fn recover(self, handler: impl FnOnce(E) -> T) -> T;

    /// Turn an error into another result; the handler may fail again.
    fn recover_with(self, handler: impl FnOnce(E) -> Self) -> Self;

    /// Run the side effect matching the current track and hand `self` back.
    fn tap(self, on_ok: impl FnOnce(&T), on_err: impl FnOnce(&E)) -> Self;
}

impl<T, E: fmt::Debug> ResultExt<T, E> for Result<T, E> {
    #[track_caller]
    fn value(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => panic!(
                "called `value()` on an error result (check `is_ok()` first): {err:?}"
            ),
        }
    }

    #[track_caller]
    fn error_info(self) -> E {
        match self {
            Err(err) => err,
            Ok(_) => panic!("called `error_info()` on an ok result (check `is_err()` first)"),
        }
    }

    fn fallback(self, alternative: Self) -> Self {
        match self {
            Ok(_) => self,
            Err(_) => alternative,
        }
    }

    fn fallback_with(self, f: impl FnOnce() -> Self) -> Self {
        match self {
            Ok(_) => self,
            Err(_) => f(),
        }
    }

    fn recover(self, handler: impl FnOnce(E) -> T) -> T {
        match self {
            Ok(value) => value,
            Err(err) => handler(err),
        }
    }

    fn recover_with(self, handler: impl FnOnce(E) -> Self) -> Self {
        match self {
            Ok(_) => self,
            Err(err) => handler(err),
        }
    }

    fn tap(self, on_ok: impl FnOnce(&T), on_err: impl FnOnce(&E)) -> Self {
        match &self {
            Ok(value) => on_ok(value),
            Err(err) => on_err(err),
        }
        self
    }
}

/// Extra combinators for `Option<T>`, mirroring [`ResultExt`].
pub trait OptionExt<T>: Sized {
    /// Contained value.
    ///
    /// # Panics
    ///
    /// Panics if the option is `None`.
    fn value(self) -> T;

    /// `self` if present, otherwise the eagerly evaluated `alternative`.
    fn fallback(self, alternative: Self) -> Self;

    /// `self` if present, otherwise the alternative computed by `f`.
    fn fallback_with(self, f: impl FnOnce() -> Self) -> Self;
}

impl<T> OptionExt<T> for Option<T> {
    #[track_caller]
    fn value(self) -> T {
        match self {
            Some(value) => value,
            None => panic!("called `value()` on a `None` option (check `is_some()` first)"),
        }
    }

    fn fallback(self, alternative: Self) -> Self {
        self.or(alternative)
    }

    fn fallback_with(self, f: impl FnOnce() -> Self) -> Self {
        self.or_else(f)
    }
}
