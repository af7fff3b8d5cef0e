/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound (driven) ports are the interfaces the application core uses
/// to reach order storage, output destinations and the console.
pub mod outbound;
