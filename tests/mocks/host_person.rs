//! Host-side object graph that the bridge only sees through opaque handles
//! and an accessor table.

#![allow(dead_code)]

use person_bridge::ffi::{AccessorTable, AddressTable, ContactTable, Handle, PersonTable};
use person_bridge::text::BridgeText;
use std::os::raw::c_void;
use std::ptr;
use std::sync::Arc;

pub struct HostAddress {
    pub street: Vec<u8>,
    pub city: Vec<u8>,
    pub postal_code: Vec<u8>,
}

pub struct HostContact {
    pub email: Vec<u8>,
    pub phone: Vec<u8>,
    pub address: Arc<HostAddress>,
}

pub struct HostPerson {
    pub age: u32,
    pub height: f64,
    pub name: Vec<u8>,
    pub contact: Arc<HostContact>,
}

pub fn text(bytes: &[u8]) -> BridgeText {
    BridgeText {
        ptr: bytes.as_ptr(),
        len: bytes.len(),
    }
}

unsafe fn person<'a>(h: Handle) -> &'a HostPerson {
    &*(h as *const HostPerson)
}

unsafe fn contact<'a>(h: Handle) -> &'a HostContact {
    &*(h as *const HostContact)
}

unsafe fn address<'a>(h: Handle) -> &'a HostAddress {
    &*(h as *const HostAddress)
}

unsafe extern "C" fn person_age(h: Handle) -> u32 {
    person(h).age
}

unsafe extern "C" fn person_height(h: Handle) -> f64 {
    person(h).height
}

unsafe extern "C" fn person_name(h: Handle) -> BridgeText {
    text(&person(h).name)
}

unsafe extern "C" fn person_contact(h: Handle) -> Handle {
    Arc::as_ptr(&person(h).contact) as Handle
}

unsafe extern "C" fn contact_email(h: Handle) -> BridgeText {
    text(&contact(h).email)
}

unsafe extern "C" fn contact_phone(h: Handle) -> BridgeText {
    text(&contact(h).phone)
}

unsafe extern "C" fn contact_address(h: Handle) -> Handle {
    Arc::as_ptr(&contact(h).address) as Handle
}

unsafe extern "C" fn address_street(h: Handle) -> BridgeText {
    text(&address(h).street)
}

unsafe extern "C" fn address_city(h: Handle) -> BridgeText {
    text(&address(h).city)
}

unsafe extern "C" fn address_postal_code(h: Handle) -> BridgeText {
    text(&address(h).postal_code)
}

pub unsafe extern "C" fn null_handle(_: Handle) -> Handle {
    ptr::null()
}

pub fn table() -> AccessorTable {
    AccessorTable {
        person: PersonTable {
            age: Some(person_age),
            height: Some(person_height),
            name: Some(person_name),
            contact: Some(person_contact),
        },
        contact: ContactTable {
            email: Some(contact_email),
            phone: Some(contact_phone),
            address: Some(contact_address),
        },
        address: AddressTable {
            street: Some(address_street),
            city: Some(address_city),
            postal_code: Some(address_postal_code),
        },
    }
}

pub fn host_person(age: u32, height: f64, name: &str, city: &[u8]) -> HostPerson {
    HostPerson {
        age,
        height,
        name: name.as_bytes().to_vec(),
        contact: Arc::new(HostContact {
            email: b"bob@example.com".to_vec(),
            phone: b"555-1234".to_vec(),
            address: Arc::new(HostAddress {
                street: b"123 Main St".to_vec(),
                city: city.to_vec(),
                postal_code: b"10001".to_vec(),
            }),
        }),
    }
}

pub fn handle<T>(value: &T) -> Handle {
    value as *const T as *const c_void
}
