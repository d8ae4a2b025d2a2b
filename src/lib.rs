//! Encode and decode DNS resource records in the RFC 1035 wire format.
//!
//! The codec covers the compressed domain-name label sequence, the fixed
//! RR envelope (TYPE, CLASS, TTL, RDLENGTH) and typed rdata for the
//! common record types, with an opaque fallback for everything else.
//! Message headers, questions, sockets and caching are the caller's
//! business: decoding starts from a [`ReadCursor`] positioned at a
//! record inside a full message buffer.
//!
//! ```rust
//! use dnswire::{Class, ReadCursor, Record, Resource, WriteCursor};
//! use std::net::Ipv4Addr;
//!
//! let record = Record {
//!     name: "www.example.com".parse()?,
//!     class: Class::Internet,
//!     ttl: 3600,
//!     rdata: Resource::A(Ipv4Addr::new(192, 168, 0, 1)),
//! };
//!
//! // Encode into a wire buffer.
//! let mut out = WriteCursor::new();
//! record.to_wire(&mut out)?;
//!
//! // And decode it back.
//! let buf = out.into_vec();
//! let decoded = Record::from_wire(&mut ReadCursor::new(&buf))?;
//! assert_eq!(decoded, record);
//! # Ok::<(), dnswire::WireError>(())
//! ```

mod display;
mod errors;
mod io;
mod name;
pub mod resource;
pub mod types;

#[macro_use]
extern crate num_derive;

pub use crate::types::*;

// Pull up the various types that should be on the front page of the docs.
#[doc(inline)]
pub use crate::errors::WireError;

#[doc(inline)]
pub use crate::io::{PatchHandle, ReadCursor, WriteCursor};

#[doc(inline)]
pub use crate::name::Name;

#[doc(inline)]
pub use crate::resource::Resource;

pub use crate::resource::{MX, SOA, SRV, TXT};

#[doc(inline)]
pub use crate::types::Record;

#[doc(inline)]
pub use crate::types::Class;

#[doc(inline)]
pub use crate::types::Type;
