use crate::name::Name;
use crate::resource::Resource;
use strum_macros::{Display, EnumString};

/// Resource Record Type, for example, A, CNAME or SOA.
///
/// Only types with a typed rdata representation appear here; any other
/// code on the wire decodes to [`Resource::Unknown`].
//
// When adding a Type, a decode/encode pair must be added in resource.rs.
#[derive(Copy, Clone, Debug, Display, EnumString, FromPrimitive, PartialEq, Eq, Hash)]
#[allow(clippy::upper_case_acronyms)]
#[repr(u16)]
pub enum Type {
    /// IPv4 Address.
    A = 1,
    NS = 2,
    CNAME = 5,
    SOA = 6,

    /// Domain name pointer.
    PTR = 12,

    /// Mail exchange.
    MX = 15,

    /// Text strings.
    TXT = 16,

    /// IPv6 Address.
    AAAA = 28,

    /// Server Selection
    SRV = 33,
}

/// Resource Record Class, for example Internet.
#[derive(Copy, Clone, Debug, Display, EnumString, FromPrimitive, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Class {
    /// Reserved per [RFC6895]
    ///
    /// [rfc6895]: https://datatracker.ietf.org/doc/html/rfc6895
    Reserved = 0,

    /// (Default) The Internet (IN), see [rfc1035].
    ///
    /// [rfc1035]: https://datatracker.ietf.org/doc/html/rfc1035
    #[strum(serialize = "IN")]
    Internet = 1,

    /// CSNET (CS), obsolete (used only for examples in some obsolete RFCs).
    #[strum(serialize = "CS")]
    CsNet = 2,

    /// Chaosnet (CH), obsolete LAN protocol created at MIT in the mid-1970s.
    #[strum(serialize = "CH")]
    Chaos = 3,

    /// Hesiod (HS), an information service developed by MIT's Project Athena.
    #[strum(serialize = "HS")]
    Hesiod = 4,

    None = 254, // NONE [RFC2136]

    /// * (ANY) See [rfc1035]
    ///
    /// [rfc1035]: https://datatracker.ietf.org/doc/html/rfc1035
    #[strum(serialize = "*")]
    Any = 255,
}

impl Default for Class {
    fn default() -> Self {
        Class::Internet
    }
}

/// Resource Record (RR)
///
/// The wire type code and the rdlength field are both derived from
/// [`Record::rdata`], so a record can never claim one type while holding
/// another's payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub name: Name,

    pub class: Class,

    /// The number of seconds that the resource record may be cached
    /// before the source of the information should again be consulted.
    /// Zero is interpreted to mean that the RR can only be used for the
    /// transaction in progress.
    pub ttl: u32,

    pub rdata: Resource,
}

impl Record {
    /// The TYPE code this record carries on the wire.
    pub fn type_code(&self) -> u16 {
        self.rdata.type_code()
    }
}
