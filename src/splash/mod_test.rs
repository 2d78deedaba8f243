// Tests for the splash module's public surface

use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[test]
fn test_run_ends_closed_at_full_progress() {
    let mut controller = SplashController::new();

    controller.run(0.0, None);

    let state = controller.snapshot();
    assert!(!controller.is_created());
    assert!(!state.is_visible);
    assert_eq!(state.current_percentage, 100);
    assert_eq!(state.current_label, "Ready!");
}

#[test]
fn test_run_calls_completion_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let mut controller = SplashController::new();

    controller.run(
        0.0,
        Some(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })),
    );

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_run_includes_final_hold() {
    let mut controller = SplashController::new();
    let started = Instant::now();

    controller.run(0.0, None);

    assert!(started.elapsed() >= Duration::from_millis(500));
}

#[test]
fn test_callback_sees_closed_surface() {
    let mut controller = SplashController::new();
    let state = controller.state_handle();
    let visible_in_callback = Arc::new(std::sync::Mutex::new(None));
    let slot = Arc::clone(&visible_in_callback);

    controller.run(
        0.0,
        Some(Box::new(move || {
            let visible = state.lock().unwrap().is_visible;
            *slot.lock().unwrap() = Some(visible);
        })),
    );

    assert_eq!(*visible_in_callback.lock().unwrap(), Some(false));
}

#[test]
fn test_show_splash_signatures() {
    // Compile-time check of the entry points; they need a display to run
    let _: fn(f32, Option<CompletionCallback>) -> crate::error::Result<()> = show_splash;
    let _: fn(
        f32,
        Option<CompletionCallback>,
    ) -> crate::error::Result<SplashHandle> = show_splash_threaded;
}
