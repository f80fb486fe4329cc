//! List-loading lifecycle shared by the admin and client pages.
//!
//! ARCHITECTURE
//! ============
//! A page calls `start_list_load` once on mount. That creates a
//! `LoadState::Loading` signal, ties a `MountScope` to the owner's cleanup and
//! spawns `run_load` in the browser (`start_list_load_with` takes the
//! spawner explicitly). `run_load` awaits the producer, reports
//! the outcome to a `LoadObserver` and publishes the terminal state only while
//! the scope is still alive.
//!
//! INVARIANTS
//! ==========
//! - Every instance starts in `Loading` and settles at most once.
//! - `Loaded` keeps the producer's order; items are never mutated afterwards.
//! - A completion arriving after unmount is dropped, never written.

#[cfg(test)]
#[path = "load_test.rs"]
mod load_test;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::net::types::{LoadError, Rejected};

/// A displayable record with an identifying key.
pub trait ListItem {
    fn key(&self) -> &str;
}

/// Lifecycle of one list retrieval.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Loaded(Vec<T>),
    Failed(String),
}

impl<T> LoadState<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Message of a failed load.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Move from `Loading` to a terminal state.
    ///
    /// Returns `false` and leaves `self` untouched when already settled or
    /// when `next` is itself `Loading`.
    pub fn settle(&mut self, next: LoadState<T>) -> bool {
        if !self.is_loading() || next.is_loading() {
            return false;
        }
        *self = next;
        true
    }
}

impl<T> From<Result<Vec<T>, LoadError>> for LoadState<T> {
    fn from(outcome: Result<Vec<T>, LoadError>) -> Self {
        match outcome {
            Ok(items) => Self::Loaded(items),
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}

/// Leveled diagnostics sink injected into the loader.
pub trait LoadObserver {
    /// Raw body as received, before decoding.
    fn payload(&self, source: &str, body: &str);
    fn loaded(&self, source: &str, count: usize);
    fn rejected(&self, source: &str, entry: &Rejected);
    fn failed(&self, source: &str, error: &LoadError);
    /// A completion arrived after the owning view was torn down.
    fn dropped(&self, source: &str);
}

/// Observer backed by the `log` facade (browser console under `hydrate`).
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl LoadObserver for LogObserver {
    fn payload(&self, source: &str, body: &str) {
        log::debug!(target: "storefront::load", "source={source} payload={body}");
    }

    fn loaded(&self, source: &str, count: usize) {
        log::info!(target: "storefront::load", "source={source} loaded count={count}");
    }

    fn rejected(&self, source: &str, entry: &Rejected) {
        log::warn!(
            target: "storefront::load",
            "source={source} rejected index={} reason={}",
            entry.index,
            entry.reason
        );
    }

    fn failed(&self, source: &str, error: &LoadError) {
        log::error!(target: "storefront::load", "source={source} failed error={error}");
    }

    fn dropped(&self, source: &str) {
        log::debug!(target: "storefront::load", "source={source} completion dropped after unmount");
    }
}

/// Liveness flag for one mounted view instance.
#[derive(Clone, Debug)]
pub struct MountScope {
    alive: Arc<AtomicBool>,
}

impl MountScope {
    #[must_use]
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn close(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}

impl Default for MountScope {
    fn default() -> Self {
        Self::new()
    }
}

/// Await `fetch` and publish its terminal state if `scope` is still alive.
///
/// Returns whether the state was published.
pub async fn run_load<T, Fut, O, P>(source: &str, fetch: Fut, observer: &O, scope: &MountScope, publish: P) -> bool
where
    Fut: Future<Output = Result<Vec<T>, LoadError>>,
    O: LoadObserver + ?Sized,
    P: FnOnce(LoadState<T>),
{
    let outcome = fetch.await;
    match &outcome {
        Ok(items) => observer.loaded(source, items.len()),
        Err(err) => observer.failed(source, err),
    }
    if !scope.is_alive() {
        observer.dropped(source);
        return false;
    }
    publish(LoadState::from(outcome));
    true
}

/// Create the view's `MountScope`, closed when the current owner is cleaned up.
pub fn mount_scope() -> MountScope {
    let scope = MountScope::new();
    let teardown = scope.clone();
    on_cleanup(move || teardown.close());
    scope
}

/// Publisher that settles `state` with a finished load.
pub fn settle_signal<T>(state: RwSignal<LoadState<T>>) -> impl FnOnce(LoadState<T>)
where
    T: Send + Sync + 'static,
{
    move |next| {
        state.update(|current| {
            current.settle(next);
        });
    }
}

/// A spawned retrieval task.
pub type LoadTask = Pin<Box<dyn Future<Output = ()>>>;

/// Start the single load of a mounted view on `spawn` and return its state signal.
///
/// Must run inside a reactive owner (a component body).
pub fn start_list_load_with<T, F, Fut, S>(source: &'static str, fetch: F, spawn: S) -> RwSignal<LoadState<T>>
where
    T: Send + Sync + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, LoadError>> + 'static,
    S: FnOnce(LoadTask),
{
    let state = RwSignal::new(LoadState::Loading);
    let scope = mount_scope();
    spawn(Box::pin(async move {
        run_load(source, fetch(), &LogObserver, &scope, settle_signal(state)).await;
    }));
    state
}

/// Start the single load of a mounted view and return its state signal.
///
/// The retrieval is only spawned in the browser; server rendering emits the
/// `Loading` placeholder.
pub fn start_list_load<T, F, Fut>(source: &'static str, fetch: F) -> RwSignal<LoadState<T>>
where
    T: Send + Sync + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, LoadError>> + 'static,
{
    start_list_load_with(source, fetch, |task| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(task);
        #[cfg(not(feature = "hydrate"))]
        drop(task);
    })
}
