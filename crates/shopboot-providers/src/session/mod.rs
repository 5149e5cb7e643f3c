//! Session Store Implementations
//!
//! | Provider | Description |
//! |----------|-------------|
//! | InMemorySessionStore | Values held by the store instance |
//! | FileSessionStore | JSON document per session id, survives the harness |

pub mod file;
pub mod memory;

pub use file::FileSessionStore;
pub use memory::InMemorySessionStore;
