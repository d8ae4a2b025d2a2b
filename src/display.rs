//! Implements the Display trait for the various types, so they output
//! in `dig` style.
// Refer to https://github.com/tigeli/bind-utils/blob/master/bin/dig/dig.c for reference.

use crate::resource::{Resource, MX, SOA, SRV, TXT};
use crate::types::{Record, Type};
use num_traits::FromPrimitive;
use std::fmt;

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rtype = match Type::from_u16(self.type_code()) {
            Some(t) => t.to_string(),
            // RFC 3597 name for a code without a mnemonic.
            None => format!("TYPE{}", self.type_code()),
        };

        write!(
            f,
            "{name:<20} {ttl:>4} {class:4} {rtype:6} {rdata}",
            name = self.name.to_string(),
            ttl = self.ttl,
            class = self.class,
            rtype = rtype,
            rdata = self.rdata,
        )
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Resource::A(ip) => ip.fmt(f),
            Resource::AAAA(ip) => ip.fmt(f),

            Resource::CNAME(name) | Resource::NS(name) | Resource::PTR(name) => name.fmt(f),

            Resource::TXT(txt) => txt.fmt(f),
            Resource::MX(mx) => mx.fmt(f),
            Resource::SOA(soa) => soa.fmt(f),
            Resource::SRV(srv) => srv.fmt(f),

            // RFC 3597 unknown rdata form, e.g. `\# 4 C0A80001`.
            Resource::Unknown(_, bytes) => {
                write!(f, r"\# {}", bytes.len())?;
                if !bytes.is_empty() {
                    write!(f, " ")?;
                    for b in bytes {
                        write!(f, "{:02X}", b)?;
                    }
                }
                Ok(())
            }
        }
    }
}

// "10 aspmx.l.google.com."
impl fmt::Display for MX {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.preference, self.exchange)
    }
}

// "ns1.google.com. dns-admin.google.com. 376337657 900 900 1800 60"
impl fmt::Display for SOA {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.mname, self.rname, self.serial, self.refresh, self.retry, self.expire, self.minimum
        )
    }
}

// "5 0 389 ldap.google.com."
impl fmt::Display for SRV {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.priority, self.weight, self.port, self.name
        )
    }
}

// "\"v=spf1 -all\" \"second string\""
impl fmt::Display for TXT {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, s) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }

            write!(f, "\"")?;
            for &b in s {
                if b.is_ascii() && !b.is_ascii_control() && b != b'"' && b != b'\\' {
                    write!(f, "{}", b as char)?;
                } else {
                    write!(f, "\\{:03}", b)?;
                }
            }
            write!(f, "\"")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Class;
    use std::net::Ipv4Addr;
    use std::str::FromStr;

    #[test]
    fn test_display_record() {
        let record = Record {
            name: crate::Name::from_str("bramp.net").unwrap(),
            class: Class::Internet,
            ttl: 3600,
            rdata: Resource::A(Ipv4Addr::new(192, 168, 0, 1)),
        };

        assert_eq!(
            record.to_string(),
            "bramp.net.           3600 IN   A      192.168.0.1"
        );
    }

    #[test]
    fn test_display_unknown() {
        let record = Record {
            name: crate::Name::from_str("example.com").unwrap(),
            class: Class::Internet,
            ttl: 60,
            rdata: Resource::Unknown(41, vec![0xC0, 0xA8, 0x00, 0x01]),
        };

        assert_eq!(
            record.to_string(),
            r"example.com.           60 IN   TYPE41 \# 4 C0A80001"
        );
    }

    #[test]
    fn test_display_txt_escapes() {
        let txt = TXT(vec![b"v=spf1 -all".to_vec(), vec![0x07]]);
        assert_eq!(txt.to_string(), "\"v=spf1 -all\" \"\\007\"");
    }
}
