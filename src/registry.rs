//! Named comparator constructors
//!
//! A [`Registry`] maps comparator names to their [`ComparatorDef`]s. The
//! kwargs DSL uses it to turn `<field>_<name>` keys into comparators.
//!
//! A process-wide registry, seeded with every built-in comparator, is
//! available through the free functions in this module. Registering there
//! makes a comparator usable from [`kwargs2compr`](crate::kwargs2compr):
//!
//! ```rust
//! use comparators::prelude::*;
//!
//! let longer_than = comparator(ComparatorDef::new(
//!     "longer_than",
//!     Arity::Exact(1),
//!     |candidate, args| {
//!         let len = candidate.len().ok_or("value has no length")?;
//!         Ok(args[0].as_i64().is_some_and(|n| len as i64 > n))
//!     },
//! ))
//! .unwrap();
//!
//! assert!("hello" == longer_than.call(vec![Value::from(3)]).unwrap());
//! assert!(registered_names().contains(&"longer_than".to_string()));
//! ```
//!
//! Names are unique. [`Registry::register`] rejects a name that is already
//! taken; [`Registry::replace`] overwrites on purpose.

use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::comparator::{builtin_defs, Arity, Comparator, ComparatorDef};
use crate::error::{ConfigurationError, ConfigurationErrorKind};
use crate::value::Value;

/// Handle to a registered comparator definition.
///
/// Cheap to clone; building through it does not touch the registry again.
#[derive(Debug, Clone)]
pub struct Constructor(Arc<ComparatorDef>);

impl Constructor {
    /// Name the constructor is registered under.
    pub fn name(&self) -> &str {
        self.0.name()
    }

    /// Accepted argument count.
    pub fn arity(&self) -> Arity {
        self.0.arity()
    }

    /// The underlying definition.
    pub fn def(&self) -> &ComparatorDef {
        &self.0
    }

    /// Build a comparator. See [`ComparatorDef::build`].
    pub fn call(&self, args: Vec<Value>) -> Result<Comparator, ConfigurationError> {
        self.0.build(args)
    }
}

/// Mapping from comparator name to definition.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    defs: BTreeMap<String, Arc<ComparatorDef>>,
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in comparator.
    ///
    /// # Example
    ///
    /// ```rust
    /// use comparators::Registry;
    ///
    /// let registry = Registry::with_builtins();
    /// for name in ["gt", "lt", "within", "contains", "all_eq", "startswith", "shorter_than"] {
    ///     assert!(registry.contains(name));
    /// }
    /// ```
    pub fn with_builtins() -> Self {
        let defs = builtin_defs()
            .into_iter()
            .map(|def| (def.name().to_string(), Arc::new(def)))
            .collect();
        Registry { defs }
    }

    /// Register a definition under its name.
    ///
    /// # Errors
    ///
    /// Fails when the name is already registered or is not an identifier
    /// made of ASCII letters, digits and underscores.
    pub fn register(&mut self, def: ComparatorDef) -> Result<Constructor, ConfigurationError> {
        Self::check_name(def.name())?;
        if self.defs.contains_key(def.name()) {
            return Err(ConfigurationError::new(
                def.name(),
                ConfigurationErrorKind::Duplicate,
            ));
        }
        Ok(self.insert(def))
    }

    /// Register a definition, overwriting any previous one of the same name.
    ///
    /// # Errors
    ///
    /// Fails only when the name is not a valid identifier.
    pub fn replace(&mut self, def: ComparatorDef) -> Result<Constructor, ConfigurationError> {
        Self::check_name(def.name())?;
        Ok(self.insert(def))
    }

    fn check_name(name: &str) -> Result<(), ConfigurationError> {
        if is_valid_name(name) {
            Ok(())
        } else {
            Err(ConfigurationError::new(
                name,
                ConfigurationErrorKind::InvalidName,
            ))
        }
    }

    fn insert(&mut self, def: ComparatorDef) -> Constructor {
        #[cfg(feature = "tracing")]
        tracing::debug!("registering comparator {} (arity {})", def.name(), def.arity());
        let def = Arc::new(def);
        self.defs.insert(def.name().to_string(), Arc::clone(&def));
        Constructor(def)
    }

    /// Look up a constructor by name.
    pub fn get(&self, name: &str) -> Option<Constructor> {
        self.defs.get(name).cloned().map(Constructor)
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.defs.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.defs.keys().map(String::as_str)
    }

    /// Number of registered comparators.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Build the named comparator.
    ///
    /// # Errors
    ///
    /// Fails when the name is unknown or the arguments are rejected.
    pub fn build(&self, name: &str, args: Vec<Value>) -> Result<Comparator, ConfigurationError> {
        self.defs
            .get(name)
            .ok_or_else(|| ConfigurationError::new(name, ConfigurationErrorKind::Unknown))?
            .build(args)
    }

    /// Split `key` into `(field, constructor)` by its longest registered
    /// suffix. The field part must be non-empty.
    ///
    /// Returns `Ok(None)` when no registered name is a suffix of `key`.
    ///
    /// # Errors
    ///
    /// Fails when two different names tie for the longest match.
    ///
    /// # Example
    ///
    /// ```rust
    /// use comparators::Registry;
    ///
    /// let registry = Registry::with_builtins();
    /// let (field, ctor) = registry.split_key("body_len_within").unwrap().unwrap();
    /// assert_eq!(field, "body_len");
    /// assert_eq!(ctor.name(), "within");
    /// assert!(registry.split_key("body").unwrap().is_none());
    /// assert!(registry.split_key("lt").unwrap().is_none());
    /// ```
    pub fn split_key<'k>(
        &self,
        key: &'k str,
    ) -> Result<Option<(&'k str, Constructor)>, ConfigurationError> {
        let mut best: Option<(&'k str, &Arc<ComparatorDef>)> = None;
        for (name, def) in &self.defs {
            let Some(head) = key.strip_suffix(name.as_str()) else {
                continue;
            };
            let Some(field) = head.strip_suffix('_') else {
                continue;
            };
            if field.is_empty() {
                continue;
            }
            match best {
                Some((_, current)) if current.name().len() > name.len() => {}
                // Equal-length suffixes of one key are the same string, so
                // this only fires if two entries ever share a name.
                Some((_, current)) if current.name().len() == name.len() => {
                    return Err(ConfigurationError::new(
                        current.name(),
                        ConfigurationErrorKind::AmbiguousSuffix {
                            key: key.to_string(),
                            candidates: vec![current.name().to_string(), def.name().to_string()],
                        },
                    ));
                }
                _ => best = Some((field, def)),
            }
        }

        Ok(best.map(|(field, def)| {
            #[cfg(feature = "tracing")]
            tracing::trace!("kwargs key {} -> field {} with {}", key, field, def.name());
            (field, Constructor(Arc::clone(def)))
        }))
    }
}

static GLOBAL: LazyLock<RwLock<Registry>> =
    LazyLock::new(|| RwLock::new(Registry::with_builtins()));

fn read_global() -> RwLockReadGuard<'static, Registry> {
    GLOBAL.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_global() -> RwLockWriteGuard<'static, Registry> {
    GLOBAL.write().unwrap_or_else(PoisonError::into_inner)
}

/// Register a comparator in the process-wide registry.
///
/// Returns the constructor handle for direct use.
///
/// # Errors
///
/// Fails when the name is already registered or invalid.
pub fn comparator(def: ComparatorDef) -> Result<Constructor, ConfigurationError> {
    write_global().register(def)
}

/// Register a comparator in the process-wide registry, overwriting any
/// previous definition with the same name.
pub fn replace_comparator(def: ComparatorDef) -> Result<Constructor, ConfigurationError> {
    write_global().replace(def)
}

/// Names registered in the process-wide registry, sorted.
pub fn registered_names() -> Vec<String> {
    read_global().names().map(str::to_string).collect()
}

/// Look up a constructor in the process-wide registry.
pub fn constructor(name: &str) -> Option<Constructor> {
    read_global().get(name)
}

/// Build a comparator by name from the process-wide registry.
///
/// # Example
///
/// ```rust
/// use comparators::{build, Value};
///
/// let c = build("within", vec![Value::from(1), Value::from(3)]).unwrap();
/// assert!(2 == c);
/// assert!(build("nope", vec![]).is_err());
/// ```
pub fn build(name: &str, args: Vec<Value>) -> Result<Comparator, ConfigurationError> {
    read_global().build(name, args)
}

/// A copy of the process-wide registry as it is now.
pub fn snapshot() -> Registry {
    read_global().clone()
}
