// Windowing-backend knobs that differ per OS
use winit::event_loop::EventLoopBuilder;

/// Whether a window event loop may be started off the main thread.
pub const fn supports_background_event_loop() -> bool {
    cfg!(any(
        target_os = "windows",
        all(unix, not(target_os = "macos"), not(target_os = "ios"), not(target_os = "android"))
    ))
}

/// Event-loop hook that lets eframe run on whichever thread calls it.
#[allow(unused_variables)]
pub fn allow_event_loop_on_any_thread<T: 'static>(builder: &mut EventLoopBuilder<T>) {
    #[cfg(target_os = "windows")]
    {
        winit::platform::windows::EventLoopBuilderExtWindows::with_any_thread(builder, true);
    }

    #[cfg(all(unix, not(target_os = "macos"), not(target_os = "ios"), not(target_os = "android")))]
    {
        winit::platform::x11::EventLoopBuilderExtX11::with_any_thread(builder, true);
        winit::platform::wayland::EventLoopBuilderExtWayland::with_any_thread(builder, true);
    }
}
