use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::executor::{LocalPool, block_on};
use futures::task::LocalSpawnExt;
use leptos::prelude::*;

use super::*;

#[derive(Default)]
struct RecordingObserver {
    events: RefCell<Vec<String>>,
}

impl RecordingObserver {
    fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }
}

impl LoadObserver for RecordingObserver {
    fn payload(&self, source: &str, body: &str) {
        self.events.borrow_mut().push(format!("payload:{source}:{body}"));
    }

    fn loaded(&self, source: &str, count: usize) {
        self.events.borrow_mut().push(format!("loaded:{source}:{count}"));
    }

    fn rejected(&self, source: &str, entry: &Rejected) {
        self.events.borrow_mut().push(format!("rejected:{source}:{}", entry.index));
    }

    fn failed(&self, source: &str, error: &LoadError) {
        self.events.borrow_mut().push(format!("failed:{source}:{error}"));
    }

    fn dropped(&self, source: &str) {
        self.events.borrow_mut().push(format!("dropped:{source}"));
    }
}

// =============================================================
// LoadState transitions
// =============================================================

#[test]
fn load_state_defaults_to_loading() {
    let state = LoadState::<u32>::default();
    assert!(state.is_loading());
    assert_eq!(state.error(), None);
}

#[test]
fn settle_moves_loading_to_loaded_once() {
    let mut state = LoadState::Loading;
    assert!(state.settle(LoadState::Loaded(vec![1, 2])));
    assert_eq!(state, LoadState::Loaded(vec![1, 2]));

    assert!(!state.settle(LoadState::Failed("late".to_owned())));
    assert!(!state.settle(LoadState::Loading));
    assert_eq!(state, LoadState::Loaded(vec![1, 2]));
}

#[test]
fn settle_moves_loading_to_failed_once() {
    let mut state = LoadState::<u32>::Loading;
    assert!(state.settle(LoadState::Failed("boom".to_owned())));
    assert!(!state.settle(LoadState::Loaded(vec![7])));
    assert_eq!(state.error(), Some("boom"));
}

#[test]
fn settle_refuses_loading_as_target() {
    let mut state = LoadState::<u32>::Loading;
    assert!(!state.settle(LoadState::Loading));
    assert!(state.is_loading());
}

#[test]
fn outcome_conversion_preserves_error_text() {
    let state: LoadState<u32> = Err(LoadError::Network("NetworkError when attempting to fetch resource.".to_owned())).into();
    assert_eq!(state, LoadState::Failed("NetworkError when attempting to fetch resource.".to_owned()));

    let state: LoadState<u32> = Err(LoadError::Http { status: 500 }).into();
    assert_eq!(state.error(), Some("request failed: 500"));
}

// =============================================================
// run_load
// =============================================================

#[test]
fn run_load_publishes_items_in_order() {
    let observer = RecordingObserver::default();
    let scope = MountScope::new();
    let mut published = Vec::new();

    let done = block_on(run_load(
        "test",
        async { Ok(vec!["c", "a", "b"]) },
        &observer,
        &scope,
        |next| published.push(next),
    ));

    assert!(done);
    assert_eq!(published, vec![LoadState::Loaded(vec!["c", "a", "b"])]);
    assert_eq!(observer.events(), vec!["loaded:test:3".to_owned()]);
}

#[test]
fn run_load_publishes_failure_message_verbatim() {
    let observer = RecordingObserver::default();
    let scope = MountScope::new();
    let mut state = LoadState::<u8>::Loading;

    block_on(run_load(
        "providers",
        async { Err(LoadError::Network("Failed to fetch".to_owned())) },
        &observer,
        &scope,
        |next| {
            state.settle(next);
        },
    ));

    assert_eq!(state, LoadState::Failed("Failed to fetch".to_owned()));
    assert_eq!(observer.events(), vec!["failed:providers:Failed to fetch".to_owned()]);
}

#[test]
fn run_load_drops_completion_after_unmount() {
    let observer = RecordingObserver::default();
    let scope = MountScope::new();
    scope.close();
    let mut published = 0;

    let done = block_on(run_load(
        "prepared",
        async { Ok(vec![1_u8]) },
        &observer,
        &scope,
        |_| published += 1,
    ));

    assert!(!done);
    assert_eq!(published, 0);
    assert_eq!(
        observer.events(),
        vec!["loaded:prepared:1".to_owned(), "dropped:prepared".to_owned()]
    );
}

#[test]
fn run_load_stays_loading_until_producer_resolves() {
    let mut pool = LocalPool::new();
    let state = Rc::new(RefCell::new(LoadState::<&str>::Loading));
    let (release, gate) = oneshot::channel::<()>();

    let task_state = Rc::clone(&state);
    pool.spawner()
        .spawn_local(async move {
            let observer = RecordingObserver::default();
            let scope = MountScope::new();
            let fetch = async move {
                let _ = gate.await;
                Ok(vec!["first", "second"])
            };
            run_load("delayed", fetch, &observer, &scope, |next| {
                task_state.borrow_mut().settle(next);
            })
            .await;
        })
        .unwrap();

    pool.run_until_stalled();
    assert!(state.borrow().is_loading());

    release.send(()).unwrap();
    pool.run_until_stalled();
    assert_eq!(*state.borrow(), LoadState::Loaded(vec!["first", "second"]));
}

#[test]
fn run_load_ignores_late_completion_when_closed_mid_flight() {
    let mut pool = LocalPool::new();
    let published = Rc::new(RefCell::new(Vec::<LoadState<u8>>::new()));
    let scope = MountScope::new();
    let (release, gate) = oneshot::channel::<()>();

    let task_published = Rc::clone(&published);
    let task_scope = scope.clone();
    pool.spawner()
        .spawn_local(async move {
            let observer = RecordingObserver::default();
            let fetch = async move {
                let _ = gate.await;
                Ok(vec![9])
            };
            run_load("delayed", fetch, &observer, &task_scope, |next| {
                task_published.borrow_mut().push(next);
            })
            .await;
        })
        .unwrap();

    pool.run_until_stalled();
    scope.close();
    release.send(()).unwrap();
    pool.run_until_stalled();

    assert!(published.borrow().is_empty());
}

#[test]
fn mount_scope_clones_share_liveness() {
    let scope = MountScope::new();
    let other = scope.clone();
    assert!(other.is_alive());
    scope.close();
    assert!(!other.is_alive());
}

#[test]
fn log_observer_accepts_every_event() {
    let observer = LogObserver;
    observer.payload("p", "[]");
    observer.loaded("p", 0);
    observer.rejected("p", &Rejected { index: 0, reason: "missing field `name`".to_owned() });
    observer.failed("p", &LoadError::Http { status: 404 });
    observer.dropped("p");
}

// =============================================================
// Mounted lifecycle
// =============================================================

#[test]
fn settle_signal_publishes_into_signal_once() {
    let owner = Owner::new();
    owner.with(|| {
        let state = RwSignal::new(LoadState::<u8>::Loading);
        settle_signal(state)(LoadState::Loaded(vec![4, 2]));
        assert_eq!(state.get_untracked(), LoadState::Loaded(vec![4, 2]));

        settle_signal(state)(LoadState::Failed("late".to_owned()));
        assert_eq!(state.get_untracked(), LoadState::Loaded(vec![4, 2]));
    });
}

#[test]
fn owner_cleanup_closes_mount_scope() {
    let owner = Owner::new();
    let scope = owner.with(mount_scope);
    assert!(scope.is_alive());
    owner.cleanup();
    assert!(!scope.is_alive());
}

#[test]
fn start_list_load_with_settles_after_spawned_task_runs() {
    let mut pool = LocalPool::new();
    let spawner = pool.spawner();
    let (release, gate) = oneshot::channel::<()>();
    let owner = Owner::new();

    let state = owner.with(|| {
        start_list_load_with(
            "mounted",
            move || async move {
                let _ = gate.await;
                Ok(vec![1, 2])
            },
            |task| spawner.spawn_local(task).unwrap(),
        )
    });
    assert!(state.get_untracked().is_loading());

    pool.run_until_stalled();
    assert!(state.get_untracked().is_loading());

    release.send(()).unwrap();
    pool.run_until_stalled();
    assert_eq!(state.get_untracked(), LoadState::Loaded(vec![1, 2]));
}

#[test]
fn unmounted_scope_blocks_signal_publish() {
    let mut pool = LocalPool::new();
    let (release, gate) = oneshot::channel::<()>();
    let parent = Owner::new();
    let view = parent.child();

    let state = parent.with(|| RwSignal::new(LoadState::<u8>::Loading));
    let scope = view.with(mount_scope);

    pool.spawner()
        .spawn_local(async move {
            let fetch = async move {
                let _ = gate.await;
                Ok(vec![1])
            };
            run_load("mounted", fetch, &LogObserver, &scope, settle_signal(state)).await;
        })
        .unwrap();
    pool.run_until_stalled();

    view.cleanup();
    release.send(()).unwrap();
    pool.run_until_stalled();

    assert!(state.get_untracked().is_loading());
}
