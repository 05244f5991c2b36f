use std::time::Duration;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx, InitCtx, WindowCtx};
use crate::device::{GlContext, GlInit};
use crate::time::FrameClock;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Upper bound for a single frame delta. `None` keeps deltas unclamped.
    pub max_frame_delta: Option<Duration>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "glint".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
            max_frame_delta: None,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window and drives `app` until the window closes or the app
    /// asks to exit.
    ///
    /// Fatal setup errors (no GL context, program build failure) stop the
    /// loop and are returned here.
    pub fn run<A>(config: RuntimeConfig, gl_init: GlInit, app: A) -> Result<()>
    where
        A: 'static + App,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gl_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

struct WindowEntry {
    clock: FrameClock,
    gl: GlContext,
}

struct AppState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    gl_init: GlInit,
    app: A,

    window: Option<WindowEntry>,
    fatal: Option<anyhow::Error>,
    exit_requested: bool,
}

impl<A> AppState<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig, gl_init: GlInit, app: A) -> Self {
        Self {
            config,
            gl_init,
            app,
            window: None,
            fatal: None,
            exit_requested: false,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        if self.fatal.is_none() {
            self.fatal = Some(err);
        }
        self.exit_requested = true;
        event_loop.exit();
    }

    /// Uninitialized -> Running: window, context, app setup, first frame.
    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attributes = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let gl = GlContext::new(event_loop, attributes, &self.gl_init)?;

        {
            let mut ctx = InitCtx {
                window: WindowCtx {
                    id: gl.window().id(),
                    window: gl.window(),
                },
                gl: gl.driver(),
                drawable: gl.drawable(),
            };
            self.app.on_init(&mut ctx)?;
        }

        let clock = match self.config.max_frame_delta {
            Some(max) => FrameClock::with_max_delta(max),
            None => FrameClock::new(),
        };

        gl.window().request_redraw();
        self.window = Some(WindowEntry { clock, gl });
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId) {
        let Some(entry) = self.window.as_mut() else {
            return;
        };

        let time = entry.clock.tick();

        let control = {
            let mut ctx = FrameCtx {
                window: WindowCtx {
                    id: window_id,
                    window: entry.gl.window(),
                },
                gl: entry.gl.driver(),
                drawable: entry.gl.drawable(),
                time,
            };
            self.app.on_frame(&mut ctx)
        };

        // Baseline for the next delta: right after the frame's work.
        entry.clock.reset();

        entry.gl.window().pre_present_notify();
        if let Err(e) = entry.gl.swap_buffers() {
            log::warn!("swap_buffers failed: {e}");
        }

        if control == AppControl::Exit {
            self.exit_requested = true;
            event_loop.exit();
            return;
        }

        entry.gl.window().request_redraw();
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.exit_requested {
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        if let Err(e) = self.start(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        if self.app.on_window_event(&event) == AppControl::Exit {
            self.exit_requested = true;
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                self.window = None;
                self.exit_requested = true;
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                if let Some(entry) = &self.window {
                    entry.gl.resize(new_size);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop, window_id),

            _ => {}
        }
    }
}
