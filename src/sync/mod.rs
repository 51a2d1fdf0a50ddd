//! CSV synchronization
//!
//! Maps the ledger to and from a two-column CSV text, and defines the file
//! handle and picker abstractions the text travels through.

pub mod codec;
pub mod handle;
pub mod picker;

pub use codec::{parse, serialize, HEADER};
pub use handle::{FileHandle, LocalFile};
pub use picker::{CliPicker, FilePicker, SUGGESTED_FILE_NAME};
