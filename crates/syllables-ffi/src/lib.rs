// FFI functions are inherently unsafe -- callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// syllables-ffi: C-compatible FFI layer for the syllable estimator.
//
// The estimator holds no state, so there is no handle to create or free.
//
// Memory management rules:
// - Returned strings (error messages, rule names, version): caller must free
//   with `syllables_free_str`.
// - All input strings are UTF-8 encoded, null-terminated C strings.

use std::ffi::{CStr, CString, c_char, c_int};
use std::ptr;
use std::str::Utf8Error;

use syllables_en::{EnglishEstimator, SyllableEstimator};

/// Errors raised while reading arguments from C.
#[derive(Debug, thiserror::Error)]
enum FfiError {
    #[error("word is null")]
    NullPointer,
    #[error("word is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] Utf8Error),
}

// ── Counting ────────────────────────────────────────────────────

/// Estimate the number of syllables in a word.
/// Returns the count (at least 1), or -1 if `word` is NULL or not UTF-8.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn syllables_count(word: *const c_char) -> c_int {
    match word_arg(word) {
        Ok(word) => to_c_int(EnglishEstimator.estimate(word)),
        Err(_) => -1,
    }
}

/// Like `syllables_count`, but on failure, if `error_out` is non-NULL, it
/// receives a heap-allocated error string that the caller must free with
/// `syllables_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn syllables_count_checked(
    word: *const c_char,
    error_out: *mut *mut c_char,
) -> c_int {
    match word_arg(word) {
        Ok(word) => to_c_int(EnglishEstimator.estimate(word)),
        Err(e) => {
            set_error(error_out, &e.to_string());
            -1
        }
    }
}

/// Name of the rule that decided the count (e.g. "syllabic_les", or
/// "short_word" for words under two characters). Returns NULL when the count
/// came from the vowel clusters alone or `word` is invalid.
/// Free with `syllables_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn syllables_deciding_rule(word: *const c_char) -> *mut c_char {
    let Ok(word) = word_arg(word) else {
        return ptr::null_mut();
    };
    match EnglishEstimator.explain(word).deciding_rule() {
        Some(rule) => str_to_c(rule.name()),
        None => ptr::null_mut(),
    }
}

// ── Memory management ───────────────────────────────────────────

/// Free a string returned by any `syllables_*` function.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn syllables_free_str(s: *mut c_char) {
    free_c_str(s);
}

/// Library version. Free with `syllables_free_str`.
#[unsafe(no_mangle)]
pub extern "C" fn syllables_version() -> *mut c_char {
    str_to_c(env!("CARGO_PKG_VERSION"))
}

// ── Internal helpers ────────────────────────────────────────────

fn word_arg<'a>(s: *const c_char) -> Result<&'a str, FfiError> {
    if s.is_null() {
        return Err(FfiError::NullPointer);
    }
    Ok(unsafe { CStr::from_ptr(s) }.to_str()?)
}

fn to_c_int(count: u32) -> c_int {
    c_int::try_from(count).unwrap_or(c_int::MAX)
}

fn str_to_c(s: &str) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

fn set_error(out: *mut *mut c_char, msg: &str) {
    if !out.is_null() {
        unsafe {
            *out = str_to_c(msg);
        }
    }
}

fn free_c_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}
