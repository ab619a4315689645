//! Accessor tables supplied by a foreign host, and the adapters that read
//! through them.
//!
//! The host keeps its objects behind opaque handles and passes a table of
//! `extern "C"` accessors alongside. The adapters read every field once,
//! validating handles, table entries and text, and then expose the result
//! through the [`crate::accessor`] traits. Text is borrowed, not copied, so an
//! adapter must not outlive the call that built it.

use crate::accessor::{AddressAccess, ContactAccess, PersonAccess};
use crate::error::{BridgeError, BridgeResult};
use crate::text::BridgeText;
use std::os::raw::c_void;

/// Opaque pointer to a host object.
pub type Handle = *const c_void;

pub type TextAccessor = unsafe extern "C" fn(Handle) -> BridgeText;
pub type HandleAccessor = unsafe extern "C" fn(Handle) -> Handle;
pub type U32Accessor = unsafe extern "C" fn(Handle) -> u32;
pub type F64Accessor = unsafe extern "C" fn(Handle) -> f64;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressTable {
    pub street: Option<TextAccessor>,
    pub city: Option<TextAccessor>,
    pub postal_code: Option<TextAccessor>,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactTable {
    pub email: Option<TextAccessor>,
    pub phone: Option<TextAccessor>,
    /// Returns a handle to the contact's address.
    pub address: Option<HandleAccessor>,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonTable {
    pub age: Option<U32Accessor>,
    pub height: Option<F64Accessor>,
    pub name: Option<TextAccessor>,
    /// Returns a handle to the person's contact information.
    pub contact: Option<HandleAccessor>,
}

/// Every accessor the bridge may call. Unset entries are reported as
/// `BridgeError::MissingAccessor` instead of being called.
///
/// All entries reachable from the handle an export receives must be set, and
/// all text they return must be valid UTF-8, whether or not the computation
/// uses that field. A person export reads the whole person table, the contact
/// table and the address table; a contact export reads the contact and
/// address tables.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessorTable {
    pub person: PersonTable,
    pub contact: ContactTable,
    pub address: AddressTable,
}

fn require<F>(entry: Option<F>, name: &'static str) -> BridgeResult<F> {
    entry.ok_or(BridgeError::MissingAccessor(name))
}

fn non_null(handle: Handle, name: &'static str) -> BridgeResult<Handle> {
    if handle.is_null() {
        return Err(BridgeError::NullHandle(name));
    }
    Ok(handle)
}

unsafe fn read_text<'a>(
    handle: Handle,
    accessor: Option<TextAccessor>,
    field: &'static str,
) -> BridgeResult<&'a str> {
    let accessor = require(accessor, field)?;
    // SAFETY: the host guarantees its accessors accept its own live handles.
    unsafe { accessor(handle).as_str(field) }
}

/// Address read through a host accessor table.
#[derive(Debug, Clone, Copy)]
pub struct ForeignAddress<'a> {
    street: &'a str,
    city: &'a str,
    postal_code: &'a str,
}

impl<'a> ForeignAddress<'a> {
    /// # Safety
    ///
    /// `handle` must be null or a live host address matching `table`, and the
    /// text it returns must stay valid and unmodified for `'a`.
    pub unsafe fn read(handle: Handle, table: &AddressTable) -> BridgeResult<Self> {
        let handle = non_null(handle, "address")?;
        unsafe {
            Ok(Self {
                street: read_text(handle, table.street, "address.street")?,
                city: read_text(handle, table.city, "address.city")?,
                postal_code: read_text(handle, table.postal_code, "address.postal_code")?,
            })
        }
    }
}

impl AddressAccess for ForeignAddress<'_> {
    fn street(&self) -> &str {
        self.street
    }

    fn city(&self) -> &str {
        self.city
    }

    fn postal_code(&self) -> &str {
        self.postal_code
    }
}

/// Contact information read through a host accessor table.
#[derive(Debug, Clone, Copy)]
pub struct ForeignContact<'a> {
    email: &'a str,
    phone: &'a str,
    address: ForeignAddress<'a>,
}

impl<'a> ForeignContact<'a> {
    /// # Safety
    ///
    /// `handle` must be null or a live host contact matching `table`; the same
    /// holds for the address it leads to. Borrowed text must stay valid for `'a`.
    pub unsafe fn read(handle: Handle, table: &AccessorTable) -> BridgeResult<Self> {
        let handle = non_null(handle, "contact")?;
        let contact = &table.contact;
        unsafe {
            let email = read_text(handle, contact.email, "contact.email")?;
            let phone = read_text(handle, contact.phone, "contact.phone")?;
            let address_of = require(contact.address, "contact.address")?;
            let address = ForeignAddress::read(address_of(handle), &table.address)?;
            Ok(Self {
                email,
                phone,
                address,
            })
        }
    }
}

impl<'a> ContactAccess for ForeignContact<'a> {
    type Address = ForeignAddress<'a>;

    fn email(&self) -> &str {
        self.email
    }

    fn phone(&self) -> &str {
        self.phone
    }

    fn address(&self) -> &ForeignAddress<'a> {
        &self.address
    }
}

/// Person read through a host accessor table.
#[derive(Debug, Clone, Copy)]
pub struct ForeignPerson<'a> {
    age: u32,
    height: f64,
    name: &'a str,
    contact: ForeignContact<'a>,
}

impl<'a> ForeignPerson<'a> {
    /// # Safety
    ///
    /// `handle` must be null or a live host person matching `table`, with a
    /// valid contact and address graph behind it. Borrowed text must stay
    /// valid for `'a`.
    pub unsafe fn read(handle: Handle, table: &AccessorTable) -> BridgeResult<Self> {
        let handle = non_null(handle, "person")?;
        let person = &table.person;
        unsafe {
            let age_of = require(person.age, "person.age")?;
            let height_of = require(person.height, "person.height")?;
            let age = age_of(handle);
            let height = height_of(handle);
            let name = read_text(handle, person.name, "person.name")?;
            let contact_of = require(person.contact, "person.contact")?;
            let contact = ForeignContact::read(contact_of(handle), table)?;
            Ok(Self {
                age,
                height,
                name,
                contact,
            })
        }
    }
}

impl<'a> PersonAccess for ForeignPerson<'a> {
    type Contact = ForeignContact<'a>;

    fn age(&self) -> u32 {
        self.age
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn name(&self) -> &str {
        self.name
    }

    fn contact(&self) -> &ForeignContact<'a> {
        &self.contact
    }
}
