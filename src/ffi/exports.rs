//! `extern "C"` entry points.
//!
//! Fallible exports return a [`BridgeStatus`] and write their result through an
//! out-pointer. On failure the out-pointer (when non-null) holds an empty
//! record and `bridge_last_error_message` describes the problem.

use super::records::{BridgeHealthAnalysis, BridgePersonSummary};
use super::status::{self, boundary, BridgeStatus};
use super::table::{AccessorTable, ForeignContact, ForeignPerson, Handle};
use crate::config::{Config, DEFAULT_ASSUMED_WEIGHT_KG};
use crate::error::{BridgeError, BridgeResult, ConfigError};
use crate::logging;
use crate::services;
use crate::text::{BridgeOwnedText, BridgeText};
use once_cell::sync::OnceCell;

/// ABI version; bumped on any layout or signature change.
pub const BRIDGE_API_VERSION: u32 = 1;

/// Set only by `bridge_init`; exports called earlier fall back to defaults
/// without claiming the cell.
static SETTINGS: OnceCell<Config> = OnceCell::new();

fn assumed_weight_kg() -> f64 {
    SETTINGS
        .get()
        .map_or(DEFAULT_ASSUMED_WEIGHT_KG, |config| config.assumed_weight_kg)
}

#[no_mangle]
pub extern "C" fn bridge_api_version() -> u32 {
    BRIDGE_API_VERSION
}

/// Load configuration from the environment and install logging.
///
/// Exports called before this use the default configuration. Once a call
/// succeeds, later calls keep that configuration.
#[no_mangle]
pub extern "C" fn bridge_init() -> BridgeStatus {
    boundary("bridge_init", || {
        let config = Config::from_env()?;
        match logging::init(&config) {
            Ok(()) | Err(ConfigError::Logging(_)) => {}
            Err(e) => return Err(e.into()),
        }
        if SETTINGS.set(config).is_err() {
            tracing::debug!("Bridge already configured, keeping existing settings");
        }
        Ok(())
    })
}

/// # Safety
///
/// `table` must be null or point to a valid table that outlives `'a`.
unsafe fn accessor_table<'a>(table: *const AccessorTable) -> BridgeResult<&'a AccessorTable> {
    unsafe { table.as_ref() }.ok_or(BridgeError::NullHandle("accessor table"))
}

/// Summarize a host person using the configured assumed weight.
///
/// # Safety
///
/// `person` must be a live handle understood by `table`, `table` must point to
/// a valid accessor table, and `out` must be null or writable. The host must
/// not mutate the object graph during the call.
#[no_mangle]
pub unsafe extern "C" fn bridge_summarize(
    person: Handle,
    table: *const AccessorTable,
    out: *mut BridgePersonSummary,
) -> BridgeStatus {
    unsafe { summarize_into("bridge_summarize", person, table, assumed_weight_kg(), out) }
}

/// Summarize a host person, deriving the BMI category from `weight_kg`.
///
/// # Safety
///
/// Same contract as [`bridge_summarize`].
#[no_mangle]
pub unsafe extern "C" fn bridge_summarize_with_weight(
    person: Handle,
    table: *const AccessorTable,
    weight_kg: f64,
    out: *mut BridgePersonSummary,
) -> BridgeStatus {
    unsafe { summarize_into("bridge_summarize_with_weight", person, table, weight_kg, out) }
}

/// # Safety
///
/// Same contract as [`bridge_summarize`].
unsafe fn summarize_into(
    entry: &'static str,
    person: Handle,
    table: *const AccessorTable,
    weight_kg: f64,
    out: *mut BridgePersonSummary,
) -> BridgeStatus {
    boundary(entry, || {
        if out.is_null() {
            return Err(BridgeError::NullOutput("person summary"));
        }
        unsafe { out.write(BridgePersonSummary::empty()) };

        let table = unsafe { accessor_table(table) }?;
        let person = unsafe { ForeignPerson::read(person, table) }?;
        let summary = services::summarize_with_weight(&person, weight_kg);
        unsafe { out.write(summary.into()) };
        Ok(())
    })
}

/// Analyze a host person's health for `weight_kg`.
///
/// # Safety
///
/// Same contract as [`bridge_summarize`].
#[no_mangle]
pub unsafe extern "C" fn bridge_analyze_health(
    person: Handle,
    table: *const AccessorTable,
    weight_kg: f64,
    out: *mut BridgeHealthAnalysis,
) -> BridgeStatus {
    boundary("bridge_analyze_health", || {
        if out.is_null() {
            return Err(BridgeError::NullOutput("health analysis"));
        }
        unsafe { out.write(BridgeHealthAnalysis::empty()) };

        let table = unsafe { accessor_table(table) }?;
        let person = unsafe { ForeignPerson::read(person, table) }?;
        let analysis = services::analyze_health(&person, weight_kg);
        unsafe { out.write(analysis.into()) };
        Ok(())
    })
}

/// Validate host contact information.
///
/// # Safety
///
/// `contact` must be a live contact handle understood by `table`; otherwise
/// as [`bridge_summarize`].
#[no_mangle]
pub unsafe extern "C" fn bridge_validate_contact(
    contact: Handle,
    table: *const AccessorTable,
    out: *mut bool,
) -> BridgeStatus {
    boundary("bridge_validate_contact", || {
        if out.is_null() {
            return Err(BridgeError::NullOutput("contact validation"));
        }
        unsafe { out.write(false) };

        let table = unsafe { accessor_table(table) }?;
        let contact = unsafe { ForeignContact::read(contact, table) }?;
        unsafe { out.write(services::validate_contact(&contact)) };
        Ok(())
    })
}

#[no_mangle]
pub extern "C" fn bridge_calculate_bmi(weight_kg: f64, height_m: f64) -> f64 {
    services::calculate_bmi(weight_kg, height_m)
}

/// Greet `name` and return its length in characters; 0 if the text is invalid.
///
/// # Safety
///
/// `name` must satisfy the [`BridgeText`] contract for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn bridge_greet(name: BridgeText) -> usize {
    let mut length = 0;
    boundary("bridge_greet", || {
        let name = unsafe { name.as_str("name") }?;
        length = services::greet(name);
        Ok(())
    });
    length
}

/// Release the text owned by a summary and reset it. Null is ignored.
///
/// # Safety
///
/// `summary` must be null or a summary filled by this library and not yet freed.
#[no_mangle]
pub unsafe extern "C" fn bridge_person_summary_free(summary: *mut BridgePersonSummary) {
    if let Some(summary) = unsafe { summary.as_mut() } {
        unsafe { summary.city.release() };
    }
}

/// Release the text owned by a health analysis and reset it. Null is ignored.
///
/// # Safety
///
/// `analysis` must be null or an analysis filled by this library and not yet freed.
#[no_mangle]
pub unsafe extern "C" fn bridge_health_analysis_free(analysis: *mut BridgeHealthAnalysis) {
    if let Some(analysis) = unsafe { analysis.as_mut() } {
        unsafe { analysis.recommendation.release() };
    }
}

/// Release text returned by this library.
///
/// # Safety
///
/// `text` must come from this library and not have been freed already.
#[no_mangle]
pub unsafe extern "C" fn bridge_text_free(mut text: BridgeOwnedText) {
    unsafe { text.release() };
}

/// Copy of the last error message on the calling thread; empty when the most
/// recent call succeeded. Free with `bridge_text_free`.
#[no_mangle]
pub extern "C" fn bridge_last_error_message() -> BridgeOwnedText {
    BridgeOwnedText::from_string(status::last_error().unwrap_or_default())
}
