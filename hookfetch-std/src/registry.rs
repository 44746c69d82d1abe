//! Ordered handler registry for one concern.
//!
//! The handler list lives behind an [`ArcSwap`]: readers take an immutable
//! snapshot, writers swap in a new list with read-copy-update. A pipeline
//! compiled from a snapshot is therefore unaffected by later registrations,
//! and no lock is held while handlers run.

use arc_swap::ArcSwap;
use hookfetch_core::{Interceptor, Message, Next, Pipeline, SharedInterceptor, adapt, compose};
use std::{
    fmt,
    sync::{Arc, Weak},
};

type Handlers<T> = Vec<SharedInterceptor<T>>;

/// An ordered, mutable list of interceptors for one kind of value.
///
/// Insertion order is the only order. Registering the same
/// [`SharedInterceptor`] twice keeps both entries, and both run.
///
/// # Example
/// ```ignore
/// let registry = InterceptorRegistry::<RequestInit>::new();
/// let token = registry.use_fn(|init, next| next.proceed(init.with_header("x-trace", "1")));
///
/// let pipeline = registry.compile();
/// token.unregister();
/// ```
pub struct InterceptorRegistry<T: Message> {
    handlers: Arc<ArcSwap<Handlers<T>>>,
}

impl<T: Message> InterceptorRegistry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::from_handlers(Vec::new())
    }

    pub(crate) fn from_handlers(handlers: Handlers<T>) -> Self {
        Self {
            handlers: Arc::new(ArcSwap::from_pointee(handlers)),
        }
    }

    /// Append handlers, skipping `None` entries.
    ///
    /// Accepts anything iterable whose items convert into
    /// `Option<SharedInterceptor<T>>`: a single `Option`, an array of shared
    /// interceptors, a `Vec` of options, and so on. Returns `None` when
    /// nothing was left to add, otherwise a token that removes exactly the
    /// handlers added by this call.
    pub fn add<I>(&self, handlers: I) -> Option<Unregister>
    where
        I: IntoIterator,
        I::Item: Into<Option<SharedInterceptor<T>>>,
    {
        let added: Handlers<T> = handlers
            .into_iter()
            .filter_map(Into::<Option<SharedInterceptor<T>>>::into)
            .collect();
        if added.is_empty() {
            return None;
        }
        Some(self.push(added))
    }

    /// Register one shared handler.
    pub fn use_shared(&self, handler: SharedInterceptor<T>) -> Unregister {
        self.push(vec![handler])
    }

    /// Register one handler.
    pub fn use_interceptor<H: Interceptor<T>>(&self, handler: H) -> Unregister {
        self.use_shared(Arc::new(handler))
    }

    /// Register a closure handler.
    pub fn use_fn<F>(&self, handler: F) -> Unregister
    where
        F: Fn(T, Next<T>) + Send + Sync + 'static,
    {
        self.use_interceptor(handler)
    }

    fn push(&self, added: Handlers<T>) -> Unregister {
        self.handlers.rcu(|current| {
            let mut next = Vec::with_capacity(current.len() + added.len());
            next.extend(current.iter().cloned());
            next.extend(added.iter().cloned());
            next
        });
        Unregister::new(Arc::downgrade(&self.handlers), added)
    }

    /// Remove every handler.
    pub fn clear(&self) {
        self.handlers.store(Arc::new(Vec::new()));
    }

    /// Current handlers, in order, as an immutable snapshot.
    pub fn get(&self) -> Arc<Handlers<T>> {
        self.handlers.load_full()
    }

    /// Whether any handler is registered.
    pub fn has_interceptors(&self) -> bool {
        !self.handlers.load().is_empty()
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.load().len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        !self.has_interceptors()
    }

    /// Compile the current handlers into a pipeline.
    ///
    /// Never cached: each call reflects the registry at that moment. An empty
    /// registry compiles to a pass-through.
    pub fn compile(&self) -> Pipeline<T> {
        compose(self.get().iter().cloned().map(adapt))
    }
}

impl<T: Message> Default for InterceptorRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Message> fmt::Debug for InterceptorRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterceptorRegistry")
            .field("len", &self.len())
            .finish()
    }
}

/// Removes the handlers added by one registration.
///
/// Removal filters by `Arc` identity, so it stays correct while other
/// handlers are added or removed, and calling it again is a no-op. Clones
/// remove the same handlers.
#[derive(Clone)]
pub struct Unregister {
    eject: Arc<dyn Fn() + Send + Sync>,
}

impl Unregister {
    fn new<T: Message>(slot: Weak<ArcSwap<Handlers<T>>>, targets: Handlers<T>) -> Self {
        let eject = move || {
            // The registry is gone, so there is nothing to remove from.
            let Some(slot) = slot.upgrade() else {
                return;
            };
            slot.rcu(|current| {
                current
                    .iter()
                    .filter(|handler| !targets.iter().any(|target| Arc::ptr_eq(*handler, target)))
                    .cloned()
                    .collect::<Handlers<T>>()
            });
        };
        Self {
            eject: Arc::new(eject),
        }
    }

    /// Remove the handlers this token was issued for.
    pub fn unregister(&self) {
        (self.eject)();
    }
}

impl fmt::Debug for Unregister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unregister").finish_non_exhaustive()
    }
}
