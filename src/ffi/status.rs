//! Status codes and the per-thread last-error buffer.

use crate::error::{BridgeError, BridgeResult};
use std::any::Any;
use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};

/// Stable status codes returned by every fallible export.
#[repr(u32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BridgeStatus {
    Ok = 0,
    NullHandle = 1,
    MissingAccessor = 2,
    InvalidText = 3,
    NullOutput = 4,
    Config = 5,
    Panic = 6,
}

impl From<&BridgeError> for BridgeStatus {
    fn from(err: &BridgeError) -> Self {
        match err {
            BridgeError::NullHandle(_) => BridgeStatus::NullHandle,
            BridgeError::MissingAccessor(_) => BridgeStatus::MissingAccessor,
            BridgeError::InvalidText { .. } => BridgeStatus::InvalidText,
            BridgeError::NullOutput(_) => BridgeStatus::NullOutput,
            BridgeError::Config(_) => BridgeStatus::Config,
            BridgeError::Panic(_) => BridgeStatus::Panic,
        }
    }
}

thread_local! {
    static LAST_ERROR: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Message of the last failed call on this thread, if the most recent call failed.
pub fn last_error() -> Option<String> {
    LAST_ERROR.with(|slot| slot.borrow().clone())
}

fn record(message: Option<String>) {
    LAST_ERROR.with(|slot| *slot.borrow_mut() = message);
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Run `call` for the export `entry`, turning errors and panics into a status.
pub(crate) fn boundary<F>(entry: &'static str, call: F) -> BridgeStatus
where
    F: FnOnce() -> BridgeResult<()>,
{
    let outcome = panic::catch_unwind(AssertUnwindSafe(call))
        .unwrap_or_else(|payload| Err(BridgeError::Panic(panic_message(payload.as_ref()))));

    match outcome {
        Ok(()) => {
            record(None);
            BridgeStatus::Ok
        }
        Err(err) => {
            tracing::warn!(entry, error = %err, "Bridge call rejected");
            let status = BridgeStatus::from(&err);
            record(Some(err.to_string()));
            status
        }
    }
}
