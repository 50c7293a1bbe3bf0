use anyhow::Context;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, UdpSocket};

const PROBE_V4: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)), 80);
const PROBE_V6: SocketAddr = SocketAddr::new(
    IpAddr::V6(Ipv6Addr::new(0x2001, 0x4860, 0x4860, 0, 0, 0, 0, 0x8888)),
    80,
);

/// Address of the interface the default route goes out of.
///
/// Connecting a UDP socket only selects a route; nothing is sent.
pub fn detect_interface_addr(ipv6: bool) -> anyhow::Result<IpAddr> {
    let (bind, probe) = if ipv6 {
        (SocketAddr::new(Ipv6Addr::UNSPECIFIED.into(), 0), PROBE_V6)
    } else {
        (SocketAddr::new(Ipv4Addr::UNSPECIFIED.into(), 0), PROBE_V4)
    };

    let socket = UdpSocket::bind(bind).context("binding interface probe socket")?;
    socket
        .connect(probe)
        .with_context(|| format!("no route towards {}", probe))?;
    let local = socket.local_addr()?.ip();

    if local.is_unspecified() {
        anyhow::bail!("could not determine a local interface address");
    }
    Ok(local)
}

/// Kernel index of the interface that carries `addr`, as IPv6 multicast
/// membership is keyed by index rather than by address.
pub fn interface_index(addr: IpAddr) -> anyhow::Result<u32> {
    let interfaces = if_addrs::get_if_addrs().context("listing network interfaces")?;
    find_index(addr, interfaces.iter().map(|intf| (intf.ip(), intf.index)))
        .with_context(|| format!("no interface index found for {}", addr))
}

fn find_index(
    addr: IpAddr,
    interfaces: impl IntoIterator<Item = (IpAddr, Option<u32>)>,
) -> Option<u32> {
    interfaces
        .into_iter()
        .find(|(ip, _)| *ip == addr)
        .and_then(|(_, index)| index)
}
