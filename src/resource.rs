//! Typed rdata and the resource record envelope codec.

use crate::errors::WireError;
use crate::io::{ReadCursor, WriteCursor};
use crate::name::Name;
use crate::types::{Class, Record, Type};
use log::{debug, warn};
use num_traits::FromPrimitive;
use std::net::{Ipv4Addr, Ipv6Addr};

/// The type-specific payload of a resource record.
///
/// The in-memory shape depends only on the TYPE code; codes without a
/// typed representation here are kept as raw octets.
// This should be kept in sync with Type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum Resource {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),

    CNAME(Name),
    NS(Name),
    PTR(Name),

    TXT(TXT),

    MX(MX),
    SOA(SOA),
    SRV(SRV),

    /// A type this codec has no typed representation for: the raw TYPE
    /// code and the rdata octets, kept verbatim.
    Unknown(u16, Vec<u8>),
}

/// Mail exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MX {
    pub preference: u16,
    pub exchange: Name,
}

/// Marks the start of a zone of authority.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SOA {
    /// The name server that was the original or primary source of data
    /// for this zone.
    pub mname: Name,

    /// A name specifying the mailbox of the person responsible for this
    /// zone.
    pub rname: Name,

    pub serial: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub minimum: u32,
}

/// Server Selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SRV {
    pub priority: u16,
    pub weight: u16,
    pub port: u16,
    pub name: Name,
}

/// One or more text strings, each at most 255 octets.
// TODO Implement RFC 1464 for further parsing of the text
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TXT(pub Vec<Vec<u8>>);

impl Resource {
    /// The TYPE code this rdata is carried under on the wire.
    pub fn type_code(&self) -> u16 {
        match self {
            Resource::A(_) => Type::A as u16,
            Resource::AAAA(_) => Type::AAAA as u16,
            Resource::CNAME(_) => Type::CNAME as u16,
            Resource::NS(_) => Type::NS as u16,
            Resource::PTR(_) => Type::PTR as u16,
            Resource::TXT(_) => Type::TXT as u16,
            Resource::MX(_) => Type::MX as u16,
            Resource::SOA(_) => Type::SOA as u16,
            Resource::SRV(_) => Type::SRV as u16,
            Resource::Unknown(code, _) => *code,
        }
    }

    /// The [`Type`] this rdata decodes as, if it has one.
    pub fn rtype(&self) -> Option<Type> {
        Type::from_u16(self.type_code())
    }

    pub(crate) fn decode(
        code: u16,
        cur: &mut ReadCursor,
        len: usize,
    ) -> Result<Resource, WireError> {
        let rtype = match Type::from_u16(code) {
            Some(t) => t,
            None => {
                debug!("no typed rdata for TYPE{}, keeping {} raw bytes", code, len);
                return Ok(Resource::Unknown(code, cur.take(len)?.to_vec()));
            }
        };

        let f = match rtype {
            Type::A => decode_a,
            Type::NS => decode_ns,
            Type::CNAME => decode_cname,
            Type::SOA => decode_soa,
            Type::PTR => decode_ptr,
            Type::MX => decode_mx,
            Type::TXT => decode_txt,
            Type::AAAA => decode_aaaa,
            Type::SRV => decode_srv,
        };

        // Call the appropriate decoder function.
        f(cur, len)
    }

    pub(crate) fn encode(&self, out: &mut WriteCursor) -> Result<(), WireError> {
        match self {
            Resource::A(ip) => out.write_bytes(&ip.octets()),
            Resource::AAAA(ip) => out.write_bytes(&ip.octets()),

            Resource::CNAME(name) | Resource::NS(name) | Resource::PTR(name) => {
                name.encode(out)?;
            }

            Resource::TXT(txt) => {
                for s in &txt.0 {
                    if s.len() > 255 {
                        return Err(WireError::CharacterStringTooLong(s.len()));
                    }
                    out.write_u8(s.len() as u8);
                    out.write_bytes(s);
                }
            }

            Resource::MX(mx) => {
                out.write_u16(mx.preference);
                mx.exchange.encode(out)?;
            }

            Resource::SOA(soa) => {
                soa.mname.encode(out)?;
                soa.rname.encode(out)?;
                out.write_u32(soa.serial);
                out.write_u32(soa.refresh);
                out.write_u32(soa.retry);
                out.write_u32(soa.expire);
                out.write_u32(soa.minimum);
            }

            Resource::SRV(srv) => {
                out.write_u16(srv.priority);
                out.write_u16(srv.weight);
                out.write_u16(srv.port);
                srv.name.encode(out)?;
            }

            Resource::Unknown(_, bytes) => out.write_bytes(bytes),
        }

        Ok(())
    }
}

fn decode_a(cur: &mut ReadCursor, len: usize) -> Result<Resource, WireError> {
    if len != 4 {
        return Err(WireError::RdataLengthMismatch {
            declared: len,
            consumed: 4,
        });
    }

    let b = cur.take(4)?;
    Ok(Resource::A(Ipv4Addr::new(b[0], b[1], b[2], b[3])))
}

fn decode_aaaa(cur: &mut ReadCursor, len: usize) -> Result<Resource, WireError> {
    if len != 16 {
        return Err(WireError::RdataLengthMismatch {
            declared: len,
            consumed: 16,
        });
    }

    let mut octets = [0; 16];
    octets.copy_from_slice(cur.take(16)?);
    Ok(Resource::AAAA(Ipv6Addr::from(octets)))
}

fn decode_cname(cur: &mut ReadCursor, _len: usize) -> Result<Resource, WireError> {
    Ok(Resource::CNAME(Name::decode(cur)?))
}

fn decode_ns(cur: &mut ReadCursor, _len: usize) -> Result<Resource, WireError> {
    Ok(Resource::NS(Name::decode(cur)?))
}

fn decode_ptr(cur: &mut ReadCursor, _len: usize) -> Result<Resource, WireError> {
    Ok(Resource::PTR(Name::decode(cur)?))
}

fn decode_mx(cur: &mut ReadCursor, _len: usize) -> Result<Resource, WireError> {
    Ok(Resource::MX(MX {
        preference: cur.read_u16()?,
        exchange: Name::decode(cur)?,
    }))
}

fn decode_soa(cur: &mut ReadCursor, _len: usize) -> Result<Resource, WireError> {
    Ok(Resource::SOA(SOA {
        mname: Name::decode(cur)?,
        rname: Name::decode(cur)?,
        serial: cur.read_u32()?,
        refresh: cur.read_u32()?,
        retry: cur.read_u32()?,
        expire: cur.read_u32()?,
        minimum: cur.read_u32()?,
    }))
}

fn decode_srv(cur: &mut ReadCursor, _len: usize) -> Result<Resource, WireError> {
    Ok(Resource::SRV(SRV {
        priority: cur.read_u16()?,
        weight: cur.read_u16()?,
        port: cur.read_u16()?,
        name: Name::decode(cur)?,
    }))
}

fn decode_txt(cur: &mut ReadCursor, len: usize) -> Result<Resource, WireError> {
    let mut txts = Vec::new();
    let mut consumed = 0;

    while consumed < len {
        let l = cur.read_u8()? as usize;
        consumed += 1 + l;

        // A character-string may not run past the end of the rdata.
        if consumed > len {
            return Err(WireError::RdataLengthMismatch {
                declared: len,
                consumed,
            });
        }

        txts.push(cur.take(l)?.to_vec());
    }

    Ok(Resource::TXT(TXT(txts)))
}

impl Record {
    /// Decodes one resource record.
    ///
    /// The cursor must sit at the record's NAME field, within the full
    /// message buffer, so compression pointers in the name and in the
    /// rdata can be resolved. On success the cursor sits just past the
    /// rdata, ready for the next record.
    pub fn from_wire(cur: &mut ReadCursor) -> Result<Record, WireError> {
        let name = Name::decode(cur)?;
        let code = cur.read_u16()?;

        let class = cur.read_u16()?;
        let class = match Class::from_u16(class) {
            Some(c) => c,
            None => return Err(WireError::UnknownClass(class)),
        };

        // The wire field is nominally a signed 32 bit integer; a value
        // with the sign bit set is treated as zero. [RFC2181 8]
        let ttl = cur.read_u32()?;
        let ttl = if ttl > i32::MAX as u32 {
            warn!("ttl {:#010x} has the sign bit set, treating as 0", ttl);
            0
        } else {
            ttl
        };

        let rdlength = cur.read_u16()? as usize;
        if cur.remaining() < rdlength {
            return Err(WireError::TruncatedRdata {
                declared: rdlength,
                remaining: cur.remaining(),
            });
        }

        let rdata_start = cur.position();
        let rdata = Resource::decode(code, cur, rdlength)?;

        // The decoder must account for every declared rdata byte.
        let consumed = cur.position() - rdata_start;
        if consumed != rdlength {
            return Err(WireError::RdataLengthMismatch {
                declared: rdlength,
                consumed,
            });
        }

        Ok(Record {
            name,
            class,
            ttl,
            rdata,
        })
    }

    /// Encodes this record and returns the number of bytes written.
    ///
    /// The rdlength field is reserved up front and backpatched once the
    /// rdata has been written.
    pub fn to_wire(&self, out: &mut WriteCursor) -> Result<usize, WireError> {
        let start = out.position();

        self.name.encode(out)?;
        out.write_u16(self.rdata.type_code());
        out.write_u16(self.class as u16);

        if self.ttl > i32::MAX as u32 {
            return Err(WireError::InvalidTtl(self.ttl));
        }
        out.write_u32(self.ttl);

        let rdlength = out.reserve(2);
        let rdata_start = out.position();
        self.rdata.encode(out)?;

        let written = out.position() - rdata_start;
        if written > u16::MAX as usize {
            return Err(WireError::RdataTooLong(written));
        }
        out.patch(&rdlength, &(written as u16).to_be_bytes())?;

        Ok(out.position() - start)
    }
}
