use async_trait::async_trait;
use std::io;
use std::net::SocketAddr;

/// Datagram side of the joined multicast socket.
///
/// Both operations must be cancel-safe: the worker loops race them against
/// the shutdown token and drop the losing future.
#[async_trait]
pub trait MdnsTransport: Send + Sync {
    async fn recv_from(&self, buf: &mut [u8]) -> io::Result<(usize, SocketAddr)>;

    async fn send_to(&self, buf: &[u8], target: SocketAddr) -> io::Result<usize>;

    /// Multicast group (address and port) replies are sent to by default.
    fn group_addr(&self) -> SocketAddr;
}
