use std::sync::Arc;

use anyhow::Context as _;
use survivor_core::{Color, DrawList, FixedStep, InputEvent, InputState, TimeClock};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::builder::AppConfig;
use crate::context::AppContext;
use crate::graphics::GraphicsState;
use crate::traits::GameApp;

struct Runner<A: GameApp> {
    app: A,
    config: AppConfig,
    window: Option<Arc<Window>>,
    graphics: Option<GraphicsState>,
    input: InputState,
    window_size: (u32, u32),
    clock: TimeClock,
    step: FixedStep,
    draw_list: DrawList,
    /// First fatal error; returned from `run_internal` once the loop exits.
    error: Option<anyhow::Error>,
}

impl<A: GameApp> Runner<A> {
    fn new(app: A, config: AppConfig) -> Self {
        let step = FixedStep::new(config.tick_rate, config.max_steps_per_frame);
        Self {
            app,
            config,
            window: None,
            graphics: None,
            input: InputState::new(),
            window_size: (0, 0),
            clock: TimeClock::new(),
            step,
            draw_list: DrawList::new(),
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{error:#}");
        self.error.get_or_insert(error);
        event_loop.exit();
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let attributes = Window::default_attributes()
            .with_title(&self.config.title)
            .with_resizable(self.config.resizable)
            .with_inner_size(winit::dpi::PhysicalSize::new(
                self.config.width,
                self.config.height,
            ));
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("failed to create window")?,
        );
        let size = window.inner_size();
        self.window_size = (size.width, size.height);
        log::info!("window created: {}x{}", size.width, size.height);

        let mut gfx = pollster::block_on(GraphicsState::new(
            window.clone(),
            size.width,
            size.height,
            self.config.vsync,
        ))
        .context("failed to initialise graphics")?;

        {
            let time = self.clock.peek();
            let mut ctx = AppContext {
                input: &self.input,
                time,
                window_size: self.window_size,
                window: &window,
                renderer: Some(&mut gfx.renderer),
                exit_requested: false,
            };
            self.app.setup(&mut ctx);
        }

        self.window = Some(window);
        self.graphics = Some(gfx);
        // don't count setup time as the first frame's delta
        self.clock = TimeClock::new();
        Ok(())
    }
}

impl<A: GameApp> ApplicationHandler for Runner<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_window(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        // queued here, dispatched to the game in about_to_wait
        self.input.handle_window_event(&event);

        if let WindowEvent::Resized(size) = event {
            let (Some(gfx), Some(window)) = (&mut self.graphics, &self.window) else {
                return;
            };
            log::debug!("resized to {}x{}", size.width, size.height);
            gfx.resize(size.width, size.height);
            self.window_size = (size.width, size.height);

            let mut ctx = AppContext {
                input: &self.input,
                time: self.clock.peek(),
                window_size: self.window_size,
                window,
                renderer: Some(&mut gfx.renderer),
                exit_requested: false,
            };
            self.app.on_resize(self.window_size, &mut ctx);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(gfx), Some(window)) = (&mut self.graphics, &self.window) else {
            return;
        };

        let time = self.clock.tick();
        let events = self.input.drain_events();

        // ── 1. INPUT + FIXED UPDATES ─────────────────────────────────────────
        let view = {
            let mut ctx = AppContext {
                input: &self.input,
                time,
                window_size: self.window_size,
                window,
                renderer: Some(&mut gfx.renderer),
                exit_requested: false,
            };

            let mut close = false;
            for event in &events {
                close |= matches!(event, InputEvent::CloseRequested);
                self.app.on_input(event, &mut ctx);
            }

            let steps = self.step.advance(time.delta);
            let dt = self.step.dt();
            for _ in 0..steps {
                self.app.fixed_update(dt, &mut ctx);
            }

            if close || ctx.exit_requested {
                log::info!(
                    "shutting down after {} frames ({:.1}s)",
                    time.frame_count,
                    time.elapsed
                );
                event_loop.exit();
                return;
            }

            // ── 2. DRAW ──────────────────────────────────────────────────────
            self.draw_list.clear(Color::BLACK);
            self.app.draw(&mut self.draw_list, &mut ctx);
            self.app.view(&ctx)
        };

        if self.window_size.0 == 0 || self.window_size.1 == 0 {
            // minimised
            return;
        }

        // ── 3. PRESENT ───────────────────────────────────────────────────────
        let frame = match gfx.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("surface lost, reconfiguring");
                gfx.reconfigure();
                return;
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("timed out waiting for a frame");
                return;
            }
            Err(e) => {
                let err = anyhow::Error::new(e).context("failed to acquire frame");
                self.fail(event_loop, err);
                return;
            }
        };
        let target = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gfx.renderer.begin_frame();
        gfx.renderer
            .render(&mut encoder, &target, &view, &self.draw_list);
        gfx.renderer.context.queue.submit(Some(encoder.finish()));
        frame.present();

        window.request_redraw();
    }
}

pub(crate) fn run_internal<A: GameApp + 'static>(config: AppConfig, app: A) -> anyhow::Result<()> {
    let event_loop = EventLoop::new().context("failed to create event loop")?;
    // Poll: render continuously, no sleeping between frames.
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut runner = Runner::new(app, config);
    event_loop
        .run_app(&mut runner)
        .context("event loop exited with an error")?;

    match runner.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
