pub mod context;
pub mod listener;
pub mod queue;
pub mod responder;
pub mod supervisor;
pub mod transport;
pub mod wire;

pub use context::SharedContext;
pub use listener::{Listener, ListenerOutcome};
pub use queue::{QueryQueue, QueueItem};
pub use responder::Responder;
pub use supervisor::MdnsService;
pub use transport::UdpMulticastTransport;
