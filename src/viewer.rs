//! Standalone demo window backed by winit.
//!
//! ```no_run
//! # use cubeview::Viewer;
//! Viewer::builder().build().run().unwrap();
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::app::CubeApp;
use crate::error::CubeviewError;
use crate::hooks::{FrameHooks, UpdateFlow};
use crate::input::InputCollector;
use crate::options::Options;
use crate::util::timing::{FpsCounter, UpdateClock};

/// Fixed suffix appended to the adapter description in the window title.
const TITLE_SUFFIX: &str = "(immediate mode)";
/// Target update-tick rate per second. Render ticks are uncapped.
const UPDATE_RATE: u32 = 30;
/// How often the smoothed render rate is logged.
const FPS_LOG_INTERVAL: Duration = Duration::from_secs(5);

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
}

impl ViewerBuilder {
    fn new() -> Self {
        Self { options: None }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window running the cube demo.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to enter
/// the event loop.
pub struct Viewer {
    options: Options,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed or an update tick requests exit.
    ///
    /// # Errors
    ///
    /// Returns [`CubeviewError::Viewer`] when the event loop cannot be
    /// created or fails while running.
    pub fn run(self) -> Result<(), CubeviewError> {
        let event_loop =
            EventLoop::new().map_err(|e| CubeviewError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut host = ViewerHost {
            window: None,
            hooks: None,
            input: InputCollector::new(),
            update_clock: UpdateClock::new(UPDATE_RATE),
            fps: FpsCounter::new(),
            last_fps_log: Instant::now(),
            options: self.options,
        };

        event_loop
            .run_app(&mut host)
            .map_err(|e| CubeviewError::Viewer(e.to_string()))
    }
}

// ── Winit host ───────────────────────────────────────────────────────────

/// Internal winit application handler.
///
/// Owns the window, the input collector, and the update clock; the
/// application behind it is only reachable through [`FrameHooks`].
struct ViewerHost {
    window: Option<Arc<Window>>,
    hooks: Option<Box<dyn FrameHooks>>,
    input: InputCollector,
    update_clock: UpdateClock,
    fps: FpsCounter,
    last_fps_log: Instant,
    options: Options,
}

impl ViewerHost {
    /// Run all due update ticks. Returns `false` when an update requested
    /// exit; the pending render tick must not run in that case.
    fn drive_updates(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let Some(hooks) = self.hooks.as_mut() else {
            return false;
        };
        while self.update_clock.tick_due() {
            let snapshot = self.input.snapshot();
            if hooks.on_update(&snapshot, self.update_clock.dt()) == UpdateFlow::Exit {
                log::info!("exit requested from update tick");
                event_loop.exit();
                return false;
            }
        }
        true
    }
}

impl ApplicationHandler for ViewerHost {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("cubeview")
            .with_inner_size(LogicalSize::new(
                self.options.window.width,
                self.options.window.height,
            ));
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let inner = window.inner_size();
        let size = (inner.width.max(1), inner.height.max(1));
        let app = match pollster::block_on(CubeApp::new(
            window.clone(),
            size,
            &self.options,
        )) {
            Ok(app) => app,
            Err(e) => {
                log::error!("failed to initialize application: {e}");
                event_loop.exit();
                return;
            }
        };

        window.set_title(&format!("{} {TITLE_SUFFIX}", app.adapter_description()));

        let mut hooks: Box<dyn FrameHooks> = Box::new(app);
        hooks.on_resize(size.0, size.1);
        window.request_redraw();
        self.window = Some(window);
        self.hooks = Some(hooks);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if self.input.handle_window_event(&event) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(hooks) = self.hooks.as_mut() {
                    hooks.on_resize(size.width, size.height);
                }
            }

            WindowEvent::RedrawRequested => {
                // Updates run first so the render observes the state left
                // by the most recently completed tick; an exit request
                // stops the frame before any drawing.
                if !self.drive_updates(event_loop) {
                    return;
                }

                let (Some(window), Some(hooks)) =
                    (self.window.as_ref(), self.hooks.as_mut())
                else {
                    return;
                };

                match hooks.on_render() {
                    Ok(()) => {
                        self.fps.frame();
                        let now = Instant::now();
                        if now.duration_since(self.last_fps_log) >= FPS_LOG_INTERVAL {
                            log::debug!("render rate: {:.0} fps", self.fps.fps());
                            self.last_fps_log = now;
                        }
                    }
                    Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                        let inner = window.inner_size();
                        hooks.on_resize(inner.width, inner.height);
                    }
                    Err(e) => {
                        log::error!("render error: {e:?}");
                    }
                }

                window.request_redraw();
            }

            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // Poll mode: keep the redraw stream alive even when no window
        // events arrive.
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
