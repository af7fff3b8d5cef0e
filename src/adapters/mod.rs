/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: where orders are read
/// from, how listings are rendered, and where output ends up.
pub mod outbound;
