//! Text marshalling between host and bridge representations.
//!
//! Inbound text is a borrowed `(ptr, len)` view of UTF-8 bytes owned by the
//! host. It is validated on every read and is only valid for the call that
//! received it. Anything that has to outlive the call is copied into a Rust
//! `String`.
//!
//! Outbound text is a `(ptr, len)` buffer allocated by the bridge. Ownership
//! passes to the host, which must hand it back to `bridge_text_free` (or the
//! record-level free functions) exactly once.

use crate::error::{BridgeError, BridgeResult};
use std::ptr;

/// Length of `text` in characters (Unicode scalar values), not bytes.
pub fn char_length(text: &str) -> usize {
    text.chars().count()
}

/// Borrowed UTF-8 text owned by the host.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct BridgeText {
    pub ptr: *const u8,
    pub len: usize,
}

impl BridgeText {
    /// View a Rust string as host text. The view borrows `text`.
    pub fn new(text: &str) -> Self {
        Self {
            ptr: text.as_ptr(),
            len: text.len(),
        }
    }

    pub const fn empty() -> Self {
        Self {
            ptr: ptr::null(),
            len: 0,
        }
    }

    /// Borrow the text as `&str`, validating UTF-8.
    ///
    /// A null pointer with zero length reads as the empty string. `field` names
    /// the value in the error.
    ///
    /// # Safety
    ///
    /// A non-null `ptr` must point to `len` readable bytes that stay alive and
    /// unmodified for `'a`.
    pub unsafe fn as_str<'a>(self, field: &'static str) -> BridgeResult<&'a str> {
        if self.ptr.is_null() {
            if self.len == 0 {
                return Ok("");
            }
            return Err(BridgeError::InvalidText {
                field,
                reason: format!("null pointer with length {}", self.len),
            });
        }

        // SAFETY: upheld by the caller.
        let bytes = unsafe { std::slice::from_raw_parts(self.ptr, self.len) };
        std::str::from_utf8(bytes).map_err(|e| BridgeError::InvalidText {
            field,
            reason: e.to_string(),
        })
    }

    /// Copy the text into an owned `String`.
    ///
    /// # Safety
    ///
    /// Same contract as [`BridgeText::as_str`], for the duration of this call.
    pub unsafe fn to_owned_string(self, field: &'static str) -> BridgeResult<String> {
        unsafe { self.as_str(field) }.map(str::to_owned)
    }
}

/// Text allocated by the bridge and owned by the host until freed.
#[repr(C)]
#[derive(Debug)]
pub struct BridgeOwnedText {
    pub ptr: *mut u8,
    pub len: usize,
}

impl BridgeOwnedText {
    /// Move `text` into a host-owned buffer. Empty text allocates nothing.
    pub fn from_string(text: String) -> Self {
        if text.is_empty() {
            return Self::empty();
        }
        let bytes = text.into_bytes().into_boxed_slice();
        let len = bytes.len();
        let ptr = Box::into_raw(bytes) as *mut u8;
        Self { ptr, len }
    }

    pub const fn empty() -> Self {
        Self {
            ptr: ptr::null_mut(),
            len: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ptr.is_null() || self.len == 0
    }

    /// Bytes of the buffer.
    ///
    /// # Safety
    ///
    /// The buffer must come from [`BridgeOwnedText::from_string`] and not have
    /// been released.
    pub unsafe fn as_bytes(&self) -> &[u8] {
        if self.ptr.is_null() {
            return &[];
        }
        // SAFETY: upheld by the caller.
        unsafe { std::slice::from_raw_parts(self.ptr, self.len) }
    }

    /// Free the buffer and reset it to empty. Releasing an empty buffer is a no-op.
    ///
    /// # Safety
    ///
    /// The buffer must come from [`BridgeOwnedText::from_string`] and must not
    /// have been released through a copy of this value.
    pub unsafe fn release(&mut self) {
        if !self.ptr.is_null() {
            let slice = ptr::slice_from_raw_parts_mut(self.ptr, self.len);
            // SAFETY: ptr/len were produced by Box::into_raw on a Box<[u8]>.
            drop(unsafe { Box::from_raw(slice) });
        }
        *self = Self::empty();
    }
}
