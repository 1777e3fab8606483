//! Restoring and capturing geometry through each platform adapter.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{CannedProbe, FakeWindow, Workspace, eventually, manager_for};
use winmem_config::DriftConfig;
use winmem_core::adapter::{DirectAdapter, FallbackAdapter, OffsetAdapter};
use winmem_core::{
    PlatformOffset, RestoreOutcome, SaveOutcome, ScreenBounds, SkipReason, WindowRecord,
    correct_position,
};

fn no_drift() -> DriftConfig {
    DriftConfig {
        enabled: false,
        ..DriftConfig::default()
    }
}

#[test]
fn test_bounds_clamp_example() {
    let corrected = correct_position(
        &WindowRecord::new(-1000, -50, 800, 600),
        &ScreenBounds::new(1920, 1080),
        20,
    );
    assert_eq!(corrected, (-780, 0));
}

#[test]
fn test_restore_after_reload_keeps_window_on_screen() {
    let workspace = Workspace::new();
    std::fs::create_dir_all(workspace.path.parent().unwrap()).unwrap();
    std::fs::write(
        &workspace.path,
        r#"{"SimpleAI - Copilot":{"x":-1000,"y":-50,"width":800,"height":600}}"#,
    )
    .unwrap();
    let window = FakeWindow::at(0, 0, 1024, 768);
    let manager = manager_for(&window, Box::new(DirectAdapter::new()));

    manager.load(&workspace.path).unwrap();
    let outcome = manager.restore_position("SimpleAI - Copilot").unwrap();

    assert_eq!(
        outcome,
        RestoreOutcome::Applied {
            requested: WindowRecord::new(-1000, -50, 800, 600),
            applied: WindowRecord::new(-780, 0, 800, 600),
        }
    );
    assert_eq!(window.geometry(), WindowRecord::new(-780, 0, 800, 600));
}

#[test]
fn test_offset_self_calibration() {
    let window = Arc::new(FakeWindow::new(0, 0, 1024, 768).decorated(8, 31));
    let manager = manager_for(&window, Box::new(OffsetAdapter::new()));

    manager.set("SimpleAI", WindowRecord::new(100, 100, 800, 600));
    manager.restore_position("SimpleAI").unwrap();
    assert_eq!(manager.offset(), PlatformOffset::new(8, 31));

    manager.set("SimpleAI", WindowRecord::new(200, 200, 800, 600));
    manager.restore_position("SimpleAI").unwrap();

    assert_eq!(window.set_positions().last(), Some(&(192, 169)));
    assert_eq!(window.geometry().position(), (200, 200));
}

#[test]
fn test_offset_adapter_saves_what_it_restores() {
    let workspace = Workspace::new();
    let window = Arc::new(FakeWindow::new(0, 0, 1024, 768).decorated(8, 31));
    let manager = manager_for(&window, Box::new(OffsetAdapter::new()));
    manager.set("SimpleAI", WindowRecord::new(300, 250, 800, 600));
    manager.restore_position("SimpleAI").unwrap();

    let outcome = manager.save_position("SimpleAI", &workspace.path).unwrap();

    assert_eq!(
        outcome,
        SaveOutcome::Saved(WindowRecord::new(300, 250, 800, 600))
    );
}

#[test]
fn test_fallback_rejects_tiny_probe_report() {
    let workspace = Workspace::new();
    let window = Arc::new(FakeWindow::new(420, 300, 800, 600).origin_only());
    let probe = Arc::new(CannedProbe(Some("X=420\nY=300\nWIDTH=10\nHEIGHT=10\n")));
    let adapter = FallbackAdapter::new(probe, 50, no_drift());
    let manager = manager_for(&window, Box::new(adapter));

    let outcome = manager.save_position("SimpleAI", &workspace.path).unwrap();

    assert_eq!(outcome, SaveOutcome::Skipped(SkipReason::NoUsableGeometry));
    assert!(!workspace.path.exists());
}

#[test]
fn test_fallback_accepts_plausible_probe_report() {
    let workspace = Workspace::new();
    let window = Arc::new(FakeWindow::new(420, 300, 800, 600).origin_only());
    let probe = Arc::new(CannedProbe(Some("X=420\nY=300\nWIDTH=200\nHEIGHT=150\n")));
    let adapter = FallbackAdapter::new(probe, 50, no_drift());
    let manager = manager_for(&window, Box::new(adapter));

    let outcome = manager.save_position("SimpleAI", &workspace.path).unwrap();

    assert_eq!(
        outcome,
        SaveOutcome::Saved(WindowRecord::new(420, 300, 200, 150))
    );
    assert_eq!(workspace.read_json()["SimpleAI"]["width"], 200);
}

#[test]
fn test_fallback_without_probe_skips_silently() {
    let workspace = Workspace::new();
    let window = Arc::new(FakeWindow::new(420, 300, 800, 600).origin_only());
    let adapter = FallbackAdapter::new(Arc::new(CannedProbe(None)), 50, no_drift());
    let manager = manager_for(&window, Box::new(adapter));

    manager.save_position_best_effort("SimpleAI", &workspace.path);

    assert!(!workspace.path.exists());
}

#[test]
fn test_drift_monitor_undoes_relocation() {
    let window = Arc::new(FakeWindow::new(0, 0, 1024, 768).relocated_to(560, 240));
    let drift = DriftConfig {
        enabled: true,
        poll_interval_ms: 2,
        appear_timeout_ms: 200,
        settle_window_ms: 100,
    };
    let adapter = FallbackAdapter::new(Arc::new(CannedProbe(None)), 50, drift);
    let manager = manager_for(&window, Box::new(adapter));
    manager.set("SimpleAI", WindowRecord::new(300, 200, 800, 600));

    manager.restore_position("SimpleAI").unwrap();

    assert!(eventually(Duration::from_secs(5), || {
        window.geometry() == WindowRecord::new(300, 200, 800, 600)
    }));
    assert!(window.set_positions().len() >= 2);
}
