use std::num::NonZeroU32;
use std::panic::{self, AssertUnwindSafe};

use glutin::config::{ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use super::{ContextUnavailable, Drawable, GlowDriver};

/// Initialization parameters for the GL layer.
///
/// Keep this structure minimal. Add flags only when a concrete platform
/// requirement exists.
#[derive(Debug, Clone)]
pub struct GlInit {
    /// Requested desktop GL version (core profile).
    pub version: (u8, u8),

    /// Synchronize buffer swaps with the display refresh.
    ///
    /// With vsync the loop runs roughly once per refresh, like a browser's
    /// animation frame callback.
    pub vsync: bool,

    /// Depth buffer bits requested from the config.
    pub depth_bits: u8,
}

impl Default for GlInit {
    fn default() -> Self {
        Self {
            version: (3, 3),
            vsync: true,
            depth_bits: 24,
        }
    }
}

/// Window + GL surface + current context + driver.
///
/// Field order is drop order: the driver goes before the context it was
/// loaded from, and the window outlives its surface.
pub struct GlContext {
    driver: GlowDriver,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    window: Window,
}

impl GlContext {
    /// Creates the window and a current GL context for it.
    pub fn new(
        event_loop: &ActiveEventLoop,
        attributes: WindowAttributes,
        init: &GlInit,
    ) -> Result<Self, ContextUnavailable> {
        let template = ConfigTemplateBuilder::new()
            .with_alpha_size(8)
            .with_depth_size(init.depth_bits);

        // The picker cannot return an error, so an empty config list unwinds
        // out of `build` with `NoConfigs` and is turned into one here.
        let built = panic::catch_unwind(AssertUnwindSafe(|| {
            DisplayBuilder::new()
                .with_window_attributes(Some(attributes))
                .build(event_loop, template, |configs| {
                    most_samples(configs, |c| c.num_samples())
                        .unwrap_or_else(|| panic::resume_unwind(Box::new(NoConfigs)))
                })
        }));
        let (window, config) = match built {
            Ok(result) => {
                result.map_err(|e| ContextUnavailable::new(format!("no usable GL config: {e}")))?
            }
            Err(payload) if payload.is::<NoConfigs>() => {
                return Err(ContextUnavailable::new(
                    "display offers no GL config matching the template",
                ));
            }
            Err(payload) => panic::resume_unwind(payload),
        };

        let window = window.ok_or_else(|| ContextUnavailable::new("window was not created"))?;

        let raw_handle = window
            .window_handle()
            .map_err(|e| ContextUnavailable::new(format!("window handle unavailable: {e}")))?
            .as_raw();

        let display = config.display();
        let (major, minor) = init.version;
        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
            .with_profile(GlProfile::Core)
            .build(Some(raw_handle));

        let not_current = unsafe { display.create_context(&config, &context_attributes) }
            .map_err(|e| ContextUnavailable::new(format!("GL {major}.{minor} context: {e}")))?;

        let surface_attributes = window
            .build_surface_attributes(Default::default())
            .map_err(|e| ContextUnavailable::new(format!("surface attributes: {e}")))?;

        let surface = unsafe { display.create_window_surface(&config, &surface_attributes) }
            .map_err(|e| ContextUnavailable::new(format!("window surface: {e}")))?;

        let context = not_current
            .make_current(&surface)
            .map_err(|e| ContextUnavailable::new(format!("make current: {e}")))?;

        let interval = if init.vsync {
            SwapInterval::Wait(NonZeroU32::MIN)
        } else {
            SwapInterval::DontWait
        };
        if let Err(e) = surface.set_swap_interval(&context, interval) {
            log::warn!("failed to set swap interval: {e}");
        }

        let gl = unsafe { glow::Context::from_loader_function_cstr(|s| display.get_proc_address(s)) };
        let driver = GlowDriver::new(gl).map_err(ContextUnavailable::new)?;

        Ok(Self {
            driver,
            surface,
            context,
            window,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn driver(&self) -> &GlowDriver {
        &self.driver
    }

    /// Current drawable size (physical pixels).
    pub fn drawable(&self) -> Drawable {
        self.window.inner_size().into()
    }

    /// Resizes the GL surface. Zero-sized requests (minimized windows) are ignored.
    pub fn resize(&self, size: PhysicalSize<u32>) {
        let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
            return;
        };
        self.surface.resize(&self.context, w, h);
    }

    /// Presents the back buffer.
    pub fn swap_buffers(&self) -> Result<(), glutin::error::Error> {
        self.surface.swap_buffers(&self.context)
    }
}

/// Unwind payload for a display that reports no configs.
struct NoConfigs;

/// Picks the config with the most multisample samples; the first one wins ties.
fn most_samples<C>(configs: impl Iterator<Item = C>, samples: impl Fn(&C) -> u8) -> Option<C> {
    configs.reduce(|best, c| if samples(&c) > samples(&best) { c } else { best })
}
