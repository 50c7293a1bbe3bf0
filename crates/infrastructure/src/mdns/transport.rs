use async_trait::async_trait;
use ferrous_mdns_application::ports::MdnsTransport;
use std::io;
use std::net::SocketAddr;
use tokio::net::UdpSocket;

/// `MdnsTransport` over a tokio socket that has already joined the group.
pub struct UdpMulticastTransport {
    socket: UdpSocket,
    group: SocketAddr,
}

impl UdpMulticastTransport {
    pub fn new(socket: UdpSocket, group: SocketAddr) -> Self {
        Self { socket, group }
    }
}

#[async_trait]
impl MdnsTransport for UdpMulticastTransport {
    async fn recv_from(&self, buf: &mut [u8]) -> io::Result<(usize, SocketAddr)> {
        self.socket.recv_from(buf).await
    }

    async fn send_to(&self, buf: &[u8], target: SocketAddr) -> io::Result<usize> {
        self.socket.send_to(buf, target).await
    }

    fn group_addr(&self) -> SocketAddr {
        self.group
    }
}
