use crate::traits::GameApp;

/// Window and loop settings.  Everything has a default; override through the
/// [`App`] builder.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
    pub vsync: bool,
    /// Fixed updates per second.
    pub tick_rate: u32,
    /// Upper bound on fixed updates run for a single rendered frame.
    pub max_steps_per_frame: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Survivor".to_string(),
            width: 1000,
            height: 800,
            resizable: true,
            vsync: true,
            tick_rate: 1000,
            max_steps_per_frame: 100,
        }
    }
}

/// Entry point.  Configure with the `with_*` methods, then call [`App::run`].
pub struct App<A: GameApp> {
    config: AppConfig,
    app_state: A,
}

impl<A: GameApp + 'static> App<A> {
    pub fn new(app_state: A) -> Self {
        Self {
            config: AppConfig::default(),
            app_state,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.config.title = title.to_string();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.config.resizable = resizable;
        self
    }

    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.config.vsync = vsync;
        self
    }

    pub fn with_tick_rate(mut self, hz: u32) -> Self {
        self.config.tick_rate = hz;
        self
    }

    pub fn with_max_steps(mut self, steps: u32) -> Self {
        self.config.max_steps_per_frame = steps;
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Open the window and run until the game or the user closes it.
    ///
    /// Blocks the calling thread.  Fails if the window or the GPU cannot be
    /// set up, or if presenting a frame fails unrecoverably.
    pub fn run(self) -> anyhow::Result<()> {
        crate::runner::run_internal(self.config, self.app_state)
    }
}
