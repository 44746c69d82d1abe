#![allow(dead_code)]

use hookfetch::{Message, Next, SharedInterceptor, interceptor_fn};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

// ============================================================================
// Order Recording
// ============================================================================

pub type OrderLog = Arc<Mutex<Vec<&'static str>>>;

pub fn order_log() -> OrderLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn entries(log: &OrderLog) -> Vec<&'static str> {
    log.lock().unwrap().clone()
}

/// An interceptor that appends `tag` to `log` and proceeds unchanged.
pub fn tagging<T: Message>(tag: &'static str, log: &OrderLog) -> SharedInterceptor<T> {
    let log = log.clone();
    interceptor_fn(move |value: T, next: Next<T>| {
        log.lock().unwrap().push(tag);
        next.proceed(value);
    })
}

// ============================================================================
// Global Store Access
// ============================================================================

static GLOBAL_STORE: Mutex<()> = Mutex::new(());

/// Serialise tests that touch the process-wide store, starting each from an
/// empty store.
pub fn lock_global() -> MutexGuard<'static, ()> {
    let guard = GLOBAL_STORE.lock().unwrap_or_else(PoisonError::into_inner);
    hookfetch::eject_all();
    guard
}
