use async_trait::async_trait;
use ferrous_mdns_application::ports::MdnsTransport;
use ferrous_mdns_domain::mdns::ipv4_group_addr;
use std::io;
use std::net::SocketAddr;
use std::sync::Mutex as StdMutex;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex, Notify};

type Inbound = io::Result<(Vec<u8>, SocketAddr)>;

/// In-memory stand-in for the multicast socket.
///
/// `recv_from` blocks until a datagram or an error is injected, and forever
/// once nothing more can be injected, like an idle socket. Sent datagrams
/// are recorded in order.
pub struct MockTransport {
    inbound_tx: mpsc::UnboundedSender<Inbound>,
    inbound_rx: Mutex<mpsc::UnboundedReceiver<Inbound>>,
    sent: StdMutex<Vec<(Vec<u8>, SocketAddr)>>,
    sent_notify: Notify,
    send_error: StdMutex<Option<io::ErrorKind>>,
    group: SocketAddr,
}

impl MockTransport {
    pub fn new() -> Self {
        let (inbound_tx, inbound_rx) = mpsc::unbounded_channel();
        Self {
            inbound_tx,
            inbound_rx: Mutex::new(inbound_rx),
            sent: StdMutex::new(Vec::new()),
            sent_notify: Notify::new(),
            send_error: StdMutex::new(None),
            group: ipv4_group_addr(),
        }
    }

    pub fn deliver(&self, datagram: Vec<u8>, source: SocketAddr) {
        let _ = self.inbound_tx.send(Ok((datagram, source)));
    }

    pub fn fail_receive(&self, kind: io::ErrorKind) {
        let _ = self.inbound_tx.send(Err(io::Error::new(kind, "injected receive failure")));
    }

    pub fn fail_sends(&self, kind: io::ErrorKind) {
        *self.send_error.lock().unwrap() = Some(kind);
    }

    pub fn sent(&self) -> Vec<(Vec<u8>, SocketAddr)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    /// Waits until at least `count` datagrams were sent, or panics after
    /// `timeout`.
    pub async fn wait_for_sent(&self, count: usize, timeout: Duration) -> Vec<(Vec<u8>, SocketAddr)> {
        tokio::time::timeout(timeout, async {
            loop {
                let notified = self.sent_notify.notified();
                if self.sent_count() >= count {
                    return self.sent();
                }
                notified.await;
            }
        })
        .await
        .unwrap_or_else(|_| panic!("expected {} sent datagrams, got {}", count, self.sent_count()))
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MdnsTransport for MockTransport {
    async fn recv_from(&self, buf: &mut [u8]) -> io::Result<(usize, SocketAddr)> {
        let next = self.inbound_rx.lock().await.recv().await;
        match next {
            Some(Ok((datagram, source))) => {
                let len = datagram.len().min(buf.len());
                buf[..len].copy_from_slice(&datagram[..len]);
                Ok((len, source))
            }
            Some(Err(e)) => Err(e),
            None => std::future::pending().await,
        }
    }

    async fn send_to(&self, buf: &[u8], target: SocketAddr) -> io::Result<usize> {
        if let Some(kind) = *self.send_error.lock().unwrap() {
            return Err(io::Error::new(kind, "injected send failure"));
        }
        self.sent.lock().unwrap().push((buf.to_vec(), target));
        self.sent_notify.notify_waiters();
        Ok(buf.len())
    }

    fn group_addr(&self) -> SocketAddr {
        self.group
    }
}
