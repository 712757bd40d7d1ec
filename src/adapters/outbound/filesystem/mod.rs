/// Filesystem adapters for file I/O operations
mod file_writer;
mod snapshot_store;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use snapshot_store::SnapshotStore;
