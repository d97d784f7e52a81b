/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., CLI)
/// and use cases use to interact with the session.
pub mod session_port;

pub use session_port::SessionPort;
