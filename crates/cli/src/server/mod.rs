pub mod signals;
pub mod socket;

pub use signals::spawn_signal_handlers;
pub use socket::create_multicast_socket;
