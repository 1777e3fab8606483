//! Several launcher instances saving into one geometry file.

mod common;

use std::sync::{Arc, Barrier};
use std::thread;

use common::{FakeWindow, Workspace, manager_for};
use winmem_core::adapter::DirectAdapter;
use winmem_core::{
    SaveOutcome, WinMemConfig, WindowHost, WindowPositionManager, WindowRecord, window_identity,
};

#[test]
fn test_saves_from_two_instances_keep_both_keys() {
    let workspace = Workspace::new();

    let window_a = FakeWindow::at(10, 20, 800, 600);
    let instance_a = manager_for(&window_a, Box::new(DirectAdapter::new()));
    instance_a.load(&workspace.path).unwrap();

    // Instance B starts before A saves and never sees A's key.
    let window_b = FakeWindow::at(900, 40, 1000, 900);
    let instance_b = manager_for(&window_b, Box::new(DirectAdapter::new()));
    instance_b.load(&workspace.path).unwrap();

    instance_a.save_position("X", &workspace.path).unwrap();
    instance_b.save_position("Y", &workspace.path).unwrap();

    let json = workspace.read_json();
    assert_eq!(
        json["X"],
        serde_json::json!({ "x": 10, "y": 20, "width": 800, "height": 600 })
    );
    assert_eq!(
        json["Y"],
        serde_json::json!({ "x": 900, "y": 40, "width": 1000, "height": 900 })
    );
    assert_eq!(
        instance_b.get("X"),
        Some(WindowRecord::new(10, 20, 800, 600))
    );
}

#[test]
fn test_resave_overwrites_only_own_key() {
    let workspace = Workspace::new();
    let window_a = FakeWindow::at(10, 20, 800, 600);
    let window_b = FakeWindow::at(900, 40, 1000, 900);
    let instance_a = manager_for(&window_a, Box::new(DirectAdapter::new()));
    let instance_b = manager_for(&window_b, Box::new(DirectAdapter::new()));

    instance_a.save_position("X", &workspace.path).unwrap();
    instance_b.save_position("Y", &workspace.path).unwrap();
    window_a.set_size(1200, 700).unwrap();
    instance_a.save_position("X", &workspace.path).unwrap();

    let json = workspace.read_json();
    assert_eq!(json["X"]["width"], 1200);
    assert_eq!(json["Y"]["x"], 900);
}

#[test]
fn test_concurrent_instances_lose_no_keys() {
    let workspace = Workspace::new();
    let services = [
        "chatgpt",
        "claude",
        "copilot",
        "deepseek",
        "gemini",
        "grok",
        "meta",
        "perplexity",
    ];
    let barrier = Arc::new(Barrier::new(services.len()));

    let handles: Vec<_> = services
        .iter()
        .enumerate()
        .map(|(i, service)| {
            let path = workspace.path.clone();
            let barrier = Arc::clone(&barrier);
            let id = window_identity(Some(*service));
            thread::spawn(move || {
                let offset = i32::try_from(i).unwrap() * 50;
                let window = FakeWindow::at(offset, offset, 640, 480);
                let mut config = WinMemConfig::default();
                config.lock.lock_attempts = 200;
                config.lock.lock_interval_ms = 5;
                let host: Arc<dyn WindowHost> = window;
                let manager = WindowPositionManager::with_adapter(
                    host,
                    config,
                    Box::new(DirectAdapter::new()),
                );
                barrier.wait();
                manager.save_position(&id, &path).unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert!(matches!(handle.join().unwrap(), SaveOutcome::Saved(_)));
    }

    let json = workspace.read_json();
    let map = json.as_object().unwrap();
    assert_eq!(map.len(), services.len());
    for service in services {
        assert!(map.contains_key(&window_identity(Some(service))));
    }
}
