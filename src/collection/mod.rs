//! Document collections.
//!
//! A collection holds JSON-object documents and answers field-equality
//! queries. The stores in [`crate::repositories`] only talk to the
//! [`Collection`] trait, so the backing implementation is chosen at wiring
//! time: [`MemoryCollection`] for tests and embedding, [`JsonFileCollection`]
//! for data that should survive the process.

mod file;
mod filter;
mod memory;
mod traits;

pub use file::JsonFileCollection;
pub use filter::{Document, Filter, ID_FIELD};
pub use memory::MemoryCollection;
pub use traits::Collection;
