/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: the product database,
/// the console, the filesystem and the document formats.
pub mod outbound;
