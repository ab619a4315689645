//! C ABI surface.
//!
//! A host that owns its objects in another language passes opaque handles and
//! an [`AccessorTable`]; the bridge reads through the table, runs the consumer
//! computations and returns `#[repr(C)]` records whose text the host frees
//! through this module. The matching C declarations live in
//! `include/person_bridge.h`.
//!
//! # Safety
//!
//! 1. Handles and tables are checked for null; everything else about them is
//!    the host's responsibility
//! 2. Borrowed text is validated as UTF-8 on every read
//! 3. Text returned to the host is freed exactly once by the matching `*_free`
//! 4. The host keeps the object graph alive and unmodified for the duration of
//!    a call

mod exports;
mod records;
mod status;
mod table;

pub use exports::*;
pub use records::{BridgeHealthAnalysis, BridgePersonSummary};
pub use status::{last_error, BridgeStatus};
pub use table::{
    AccessorTable, AddressTable, ContactTable, F64Accessor, ForeignAddress, ForeignContact,
    ForeignPerson, Handle, HandleAccessor, PersonTable, TextAccessor, U32Accessor,
};
