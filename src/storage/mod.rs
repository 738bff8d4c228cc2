//! Durable client side key/value storage for session state.

mod file;
pub use self::file::FileStorage;

mod memory;
pub use self::memory::MemoryStorage;

use crate::Result;

/// Key/value store with the semantics of browser local storage.
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    /// Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}

impl<S: SessionStorage + ?Sized> SessionStorage for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }
    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }
    fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}
