//! Default bind-address selection.
//!
//! The daemon binds its listeners to the IPv6 wildcard when the local stack
//! supports IPv6 and to the IPv4 wildcard otherwise. Support is detected
//! once per process with a throwaway loopback bind and cached; this is an
//! environment capability check, not a live health check.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, UdpSocket};
use std::sync::OnceLock;

use tracing::debug;

static DEFAULT_BIND_ADDR: OnceLock<IpAddr> = OnceLock::new();

/// Probes whether the local network stack supports IPv6.
///
/// Binds a throwaway socket to `[::1]:0`; the socket closes when it drops,
/// on every path. Any bind error means "unsupported" here, never a failure
/// to surface to the caller.
pub fn is_ipv6_enabled() -> bool {
    let enabled = UdpSocket::bind((Ipv6Addr::LOCALHOST, 0)).is_ok();
    debug!(enabled, "probed local IPv6 support");
    enabled
}

/// The wildcard bind address for the given capability: `::` when the stack
/// is IPv6-capable, `0.0.0.0` otherwise.
pub fn bind_addr_for(ipv6_capable: bool) -> IpAddr {
    if ipv6_capable {
        IpAddr::V6(Ipv6Addr::UNSPECIFIED)
    } else {
        IpAddr::V4(Ipv4Addr::UNSPECIFIED)
    }
}

/// The default bind address for this process.
///
/// The first call runs [`is_ipv6_enabled`] and caches the outcome for the
/// lifetime of the process; later calls return the cached address without
/// re-probing.
pub fn default_bind_addr() -> IpAddr {
    *DEFAULT_BIND_ADDR.get_or_init(|| bind_addr_for(is_ipv6_enabled()))
}
