use crate::bootstrap::interface_index;
use ferrous_mdns_domain::mdns::{MDNS_IPV4_GROUP, MDNS_IPV6_GROUP};
use socket2::{Domain, Protocol, Socket, Type};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use tokio::net::UdpSocket;
use tracing::info;

/// Binds the mDNS port with address reuse and joins the group on
/// `interface`. Returns the socket together with the group address replies
/// are multicast to.
pub fn create_multicast_socket(
    interface: IpAddr,
    port: u16,
) -> anyhow::Result<(UdpSocket, SocketAddr)> {
    let (socket, group) = match interface {
        IpAddr::V4(iface) => (join_v4(iface, port)?, SocketAddr::new(MDNS_IPV4_GROUP.into(), port)),
        IpAddr::V6(_) => {
            let index = interface_index(interface)?;
            (join_v6(index, port)?, SocketAddr::new(MDNS_IPV6_GROUP.into(), port))
        }
    };

    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    let socket = UdpSocket::from_std(std_socket)?;

    info!(interface = %interface, group = %group, "Joined mDNS multicast group");
    Ok((socket, group))
}

fn join_v4(interface: Ipv4Addr, port: u16) -> anyhow::Result<Socket> {
    let socket = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP))?;
    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.bind(&SocketAddr::new(Ipv4Addr::UNSPECIFIED.into(), port).into())?;
    socket.join_multicast_v4(&MDNS_IPV4_GROUP, &interface)?;
    socket.set_multicast_if_v4(&interface)?;
    socket.set_multicast_ttl_v4(255)?;
    socket.set_multicast_loop_v4(true)?;
    Ok(socket)
}

fn join_v6(index: u32, port: u16) -> anyhow::Result<Socket> {
    let socket = Socket::new(Domain::IPV6, Type::DGRAM, Some(Protocol::UDP))?;
    socket.set_only_v6(true)?;
    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.bind(&SocketAddr::new(Ipv6Addr::UNSPECIFIED.into(), port).into())?;
    socket.join_multicast_v6(&MDNS_IPV6_GROUP, index)?;
    socket.set_multicast_if_v6(index)?;
    socket.set_multicast_hops_v6(255)?;
    socket.set_multicast_loop_v6(true)?;
    Ok(socket)
}
