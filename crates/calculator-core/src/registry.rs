//! Name-keyed element registry.
//!
//! A [`Registry`] maps names to elements. It can be filled by hand with
//! [`Registry::register`] or populated once from a discovery function with
//! [`Registry::collect`]. Lookups through [`Registry::get`] trigger collection
//! first when auto-collection is enabled, so callers never enumerate elements
//! themselves.
//!
//! # Example
//!
//! ```
//! use calculator_core::{Element, Registry};
//!
//! #[derive(Clone)]
//! struct Greeter(&'static str);
//!
//! impl Element for Greeter {
//!     fn name(&self) -> &str {
//!         self.0
//!     }
//!
//!     fn is_same(&self, other: &Self) -> bool {
//!         self.0 == other.0
//!     }
//! }
//!
//! let registry = Registry::with_discovery(|| vec![Greeter("hello"), Greeter("bye")]);
//! assert_eq!(registry.get("bye").unwrap().0, "bye");
//! assert!(registry.get("hi").is_err());
//! ```

use indexmap::IndexMap;
use parking_lot::RwLock;
use std::fmt;
use thiserror::Error;

/// Something that can be stored in a [`Registry`].
pub trait Element: Clone + Send + Sync + 'static {
    /// The unique name the element is registered under.
    fn name(&self) -> &str;

    /// Whether `other` is the very same implementation as `self`.
    ///
    /// Registering an element that is the same as the one already held under
    /// its name is a no-op.
    fn is_same(&self, other: &Self) -> bool;
}

/// Errors raised by a [`Registry`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A different element already holds the name.
    #[error("\"{name}\" is already registered by a different element")]
    DuplicateName {
        /// The contested name.
        name: String,
    },

    /// No element is registered under the name.
    #[error("\"{name}\" not found in the registry (known: {})", .known.join(", "))]
    ElementNotFound {
        /// The requested name.
        name: String,
        /// Names currently registered, in registration order.
        known: Vec<String>,
    },

    /// The element cannot be registered.
    #[error("invalid element: {reason}")]
    InvalidElement {
        /// Why the element was rejected.
        reason: String,
    },
}

type Discovery<E> = Box<dyn Fn() -> Vec<E> + Send + Sync>;

/// A thread-safe, name-keyed collection of elements.
///
/// Elements are kept in registration order. The collection is read-mostly:
/// writes happen during registration and the one-time collection, after which
/// every access takes a shared lock.
pub struct Registry<E: Element> {
    collection: RwLock<IndexMap<String, E>>,
    discover: Option<Discovery<E>>,
    auto_collect: bool,
}

impl<E: Element> Registry<E> {
    /// Creates an empty registry without a discovery function.
    #[must_use]
    pub fn new() -> Self {
        Self {
            collection: RwLock::new(IndexMap::new()),
            discover: None,
            auto_collect: false,
        }
    }

    /// Creates a registry populated lazily from `discover`.
    ///
    /// Auto-collection is enabled, so the first [`get`](Self::get) runs
    /// discovery.
    #[must_use]
    pub fn with_discovery<F>(discover: F) -> Self
    where
        F: Fn() -> Vec<E> + Send + Sync + 'static,
    {
        Self {
            collection: RwLock::new(IndexMap::new()),
            discover: Some(Box::new(discover)),
            auto_collect: true,
        }
    }

    /// Enables or disables collection on lookup.
    #[must_use]
    pub fn auto_collect(mut self, enabled: bool) -> Self {
        self.auto_collect = enabled;
        self
    }

    /// Registers an element under its name.
    ///
    /// Registering the same element twice is a no-op. Registering a different
    /// element under a taken name fails with [`RegistryError::DuplicateName`].
    pub fn register(&self, element: E) -> Result<(), RegistryError> {
        let mut collection = self.collection.write();
        insert(&mut collection, element)
    }

    /// Runs discovery once.
    ///
    /// Does nothing when the collection already holds elements or when the
    /// registry has no discovery function. Discovery is all-or-nothing: if any
    /// discovered element is rejected, the collection is left untouched.
    pub fn collect(&self) -> Result<(), RegistryError> {
        if !self.collection.read().is_empty() {
            return Ok(());
        }
        let Some(discover) = &self.discover else {
            return Ok(());
        };

        let mut collection = self.collection.write();
        // Another caller may have collected while we waited for the lock.
        if !collection.is_empty() {
            return Ok(());
        }

        let mut discovered = IndexMap::new();
        for element in discover() {
            insert(&mut discovered, element)?;
        }
        tracing::debug!(
            count = discovered.len(),
            names = ?discovered.keys().collect::<Vec<_>>(),
            "registry collected"
        );
        *collection = discovered;
        Ok(())
    }

    /// Looks up an element by name.
    ///
    /// Runs [`collect`](Self::collect) first when auto-collection is enabled.
    pub fn get(&self, name: &str) -> Result<E, RegistryError> {
        if self.auto_collect {
            self.collect()?;
        }

        let collection = self.collection.read();
        collection
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::ElementNotFound {
                name: name.to_string(),
                known: collection.keys().cloned().collect(),
            })
    }

    /// Returns whether an element is registered under `name`.
    ///
    /// Does not trigger collection.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.collection.read().contains_key(name)
    }

    /// Returns the registered names in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.collection.read().keys().cloned().collect()
    }

    /// Returns the number of registered elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.collection.read().len()
    }

    /// Returns whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collection.read().is_empty()
    }
}

fn insert<E: Element>(collection: &mut IndexMap<String, E>, element: E) -> Result<(), RegistryError> {
    let name = element.name();
    if name.trim().is_empty() {
        return Err(RegistryError::InvalidElement {
            reason: "element name must not be empty".to_string(),
        });
    }

    match collection.get(name) {
        Some(existing) if existing.is_same(&element) => Ok(()),
        Some(_) => Err(RegistryError::DuplicateName {
            name: name.to_string(),
        }),
        None => {
            collection.insert(name.to_string(), element);
            Ok(())
        }
    }
}

impl<E: Element> Default for Registry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Element> fmt::Debug for Registry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("names", &self.names())
            .field("has_discovery", &self.discover.is_some())
            .field("auto_collect", &self.auto_collect)
            .finish()
    }
}
