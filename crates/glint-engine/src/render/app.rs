use anyhow::Context;

use crate::core::{App, AppControl, FrameCtx, InitCtx};
use crate::device::GlowDriver;
use crate::shader::ShaderSources;

use super::QuadRenderer;

enum Stage {
    Uninitialized(ShaderSources),
    Running(QuadRenderer<GlowDriver>),
    /// Setup was attempted and failed; the runtime is shutting down.
    Failed,
}

/// Runs a vertex/fragment pair over a fullscreen quad.
///
/// Starts uninitialized; `on_init` builds the program and buffers once the
/// GL context exists, after which every frame advances the animation.
pub struct ShaderApp {
    speed: f32,
    stage: Stage,
}

impl ShaderApp {
    pub fn new(sources: ShaderSources, speed: f32) -> Self {
        Self {
            speed,
            stage: Stage::Uninitialized(sources),
        }
    }
}

impl App for ShaderApp {
    fn on_init(&mut self, ctx: &mut InitCtx<'_>) -> anyhow::Result<()> {
        let sources = match &mut self.stage {
            Stage::Uninitialized(sources) => std::mem::take(sources),
            _ => anyhow::bail!("shader app initialized twice"),
        };
        self.stage = Stage::Failed;

        log::info!("init");
        let renderer = QuadRenderer::new(ctx.gl, &sources, self.speed)
            .context("failed to set up the shader program")?;

        log::info!("start ({}x{})", ctx.drawable.width, ctx.drawable.height);
        self.stage = Stage::Running(renderer);
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        match &mut self.stage {
            Stage::Running(renderer) => renderer.frame(ctx.gl, ctx.drawable, ctx.time.dt),
            Stage::Uninitialized(_) => log::trace!("frame before init; skipped"),
            Stage::Failed => return AppControl::Exit,
        }
        AppControl::Continue
    }
}
