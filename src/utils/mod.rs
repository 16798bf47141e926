use std::net::{IpAddr, Ipv4Addr};
use if_addrs::get_if_addrs;
use crate::error::IdentityError;

pub type Resolver = fn() -> Result<String, IdentityError>;

/// Lookups used to fill the hostname and host IP of each response
#[derive(Clone, Copy)]
pub struct HostIdentity {
    pub hostname: Resolver,
    pub host_ip: Resolver,
}

impl Default for HostIdentity {
    fn default() -> Self {
        Self {
            hostname: resolve_hostname,
            host_ip: resolve_host_ip,
        }
    }
}

/// Returns the OS hostname
pub fn resolve_hostname() -> Result<String, IdentityError> {
    hostname::get()
        .map_err(IdentityError::Hostname)?
        .into_string()
        .map_err(IdentityError::InvalidHostname)
}

/// Returns the first non-loopback IPv4 address of this host, in dotted-quad form
pub fn resolve_host_ip() -> Result<String, IdentityError> {
    let interfaces = get_if_addrs().map_err(IdentityError::Interfaces)?;

    select_host_ip(interfaces.iter().map(|iface| iface.ip()))
        .map(|ip| ip.to_string())
        .ok_or(IdentityError::NoHostIp)
}

/// First address in enumeration order that has a 4-byte form and is not loopback
pub fn select_host_ip<I>(addrs: I) -> Option<Ipv4Addr>
where
    I: IntoIterator<Item = IpAddr>,
{
    addrs
        .into_iter()
        .filter_map(|addr| match addr {
            IpAddr::V4(v4) => Some(v4),
            IpAddr::V6(v6) => v6.to_ipv4_mapped(),
        })
        .find(|v4| !v4.is_loopback())
}
