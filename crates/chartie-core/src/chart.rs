// File: crates/chartie-core/src/chart.rs
// Summary: Chart controller: owns the surface and animation clock, drives the active renderer.

use tracing::{debug, trace};

use crate::animation::{AnimationState, FrameHandle, FrameScheduler, ManualScheduler};
use crate::config::{ChartConfig, ChartType, Options, PartialConfig, DEFAULT_DURATION_MS};
use crate::easing::Easing;
use crate::error::{ChartError, Result};
use crate::geometry::{clamp, Bounds};
use crate::render::{ChartRenderer, Renderer};
use crate::surface::{setup_surface, Surface, SurfaceRegistry};

/// One in-flight animation run. At most one exists per chart.
#[derive(Clone, Copy, Debug)]
struct AnimationRun {
    start: f64,
    duration: f64,
    easing: Easing,
    frame: Option<FrameHandle>,
}

/// An animated chart bound to one drawing surface.
///
/// Construction validates the configuration, prepares the surface, and draws
/// the first frame. The host then forwards scheduler callbacks to
/// [`Chart::on_frame`] and size changes to [`Chart::handle_resize`].
pub struct Chart<S: Surface, F: FrameScheduler> {
    surface: S,
    scheduler: F,
    config: ChartConfig,
    renderer: Option<ChartRenderer>,
    run: Option<AnimationRun>,
    resize_observed: bool,
}

impl<S: Surface, F: FrameScheduler> Chart<S, F> {
    /// Build a chart on `surface` and render it.
    ///
    /// Fails with [`ChartError::UnsupportedChartType`] before touching the surface
    /// when `config.type` has no renderer.
    pub fn new(mut surface: S, scheduler: F, config: ChartConfig) -> Result<Self> {
        let config = config.with_defaults();
        let renderer = ChartRenderer::new(&config)?;
        setup_surface(&mut surface);

        let mut chart = Self {
            surface,
            scheduler,
            resize_observed: responsive(config.options.as_ref()),
            config,
            renderer: Some(renderer),
            run: None,
        };
        chart.render();
        Ok(chart)
    }

    /// Like [`Chart::new`], taking the surface registered under `id`.
    ///
    /// The registry is left untouched when the chart type is unsupported.
    pub fn from_registry<R>(registry: &mut R, id: &str, scheduler: F, config: ChartConfig) -> Result<Self>
    where
        R: SurfaceRegistry<Surface = S>,
    {
        config.kind()?;
        let surface = registry.take_surface(id).ok_or_else(|| ChartError::SurfaceNotFound(id.to_string()))?;
        Self::new(surface, scheduler, config)
    }

    /// Re-run the current configuration: animate when a positive duration is
    /// configured, otherwise draw one complete frame.
    pub fn render(&mut self) {
        self.stop_animation();
        if self.renderer.is_none() {
            return;
        }
        let duration = self.config.options.as_ref().map_or(0.0, Options::animation_duration);
        if duration > 0.0 {
            self.start_animation();
        } else {
            self.render_frame(1.0);
        }
    }

    /// Merge `patch` over the current configuration, swap in a fresh renderer,
    /// and render. The old renderer is destroyed before the new one is built.
    ///
    /// On error the chart keeps its previous configuration and renderer.
    pub fn update(&mut self, patch: PartialConfig) -> Result<()> {
        let config = self.config.clone().merge(patch).with_defaults();
        let kind = config.kind()?;

        self.stop_animation();
        if let Some(mut old) = self.renderer.take() {
            old.destroy();
        }
        self.resize_observed = responsive(config.options.as_ref());
        self.renderer = Some(ChartRenderer::for_kind(kind, &config));
        self.config = config;
        debug!(chart_type = %self.config.chart_type, "chart updated");
        self.render();
        Ok(())
    }

    /// Stop animating, release the renderer, and stop observing resizes.
    /// Safe to call more than once.
    pub fn destroy(&mut self) {
        self.stop_animation();
        if let Some(mut renderer) = self.renderer.take() {
            renderer.destroy();
            debug!("chart destroyed");
        }
        self.resize_observed = false;
    }

    /// Advance the running animation for a frame the scheduler fired.
    ///
    /// Handles other than the one most recently requested are ignored.
    pub fn on_frame(&mut self, handle: FrameHandle) {
        match self.run.and_then(|r| r.frame) {
            Some(pending) if pending == handle => self.animate_frame(),
            _ => trace!(?handle, "ignoring stale frame"),
        }
    }

    /// React to a change of the surface's displayed size. Returns whether a
    /// redraw happened.
    ///
    /// Any running animation is abandoned and the chart is drawn complete.
    pub fn handle_resize(&mut self) -> bool {
        if !self.resize_observed || self.renderer.is_none() {
            return false;
        }
        setup_surface(&mut self.surface);
        self.stop_animation();
        self.render_frame(1.0);
        let size = self.surface.client_size();
        debug!(width = size.width, height = size.height, "resized");
        true
    }

    pub fn state(&self) -> AnimationState {
        if self.run.is_some() { AnimationState::Animating } else { AnimationState::Idle }
    }

    pub fn is_animating(&self) -> bool {
        self.state() == AnimationState::Animating
    }

    pub fn is_destroyed(&self) -> bool {
        self.renderer.is_none()
    }

    /// Effective configuration with defaults applied.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn chart_type(&self) -> Option<ChartType> {
        self.renderer.as_ref().map(ChartRenderer::chart_type)
    }

    pub fn observes_resize(&self) -> bool {
        self.resize_observed
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }

    fn start_animation(&mut self) {
        let animation = self.config.options.as_ref().and_then(|o| o.animation);
        let duration = animation.and_then(|a| a.duration).unwrap_or(DEFAULT_DURATION_MS);
        let easing = animation.and_then(|a| a.easing).unwrap_or_default();
        self.run = Some(AnimationRun { start: self.scheduler.now(), duration, easing, frame: None });
        debug!(duration, ?easing, "animation started");
        self.animate_frame();
    }

    fn animate_frame(&mut self) {
        let Some(run) = self.run.as_mut() else { return };
        run.frame = None;
        let elapsed = self.scheduler.now() - run.start;
        let progress = clamp(elapsed / run.duration, 0.0, 1.0);
        let eased = run.easing.apply(progress);

        self.render_frame(eased);

        if progress < 1.0 {
            let handle = self.scheduler.request_frame();
            if let Some(run) = self.run.as_mut() {
                run.frame = Some(handle);
            }
        } else {
            self.run = None;
            debug!(elapsed, "animation finished");
        }
    }

    fn stop_animation(&mut self) {
        let Some(run) = self.run.take() else { return };
        if let Some(handle) = run.frame {
            self.scheduler.cancel_frame(handle);
        }
        debug!("animation cancelled");
    }

    /// Clear, paint the background, and draw one frame at `progress`.
    fn render_frame(&mut self, progress: f64) {
        let Some(renderer) = self.renderer.as_ref() else { return };
        let size = self.surface.client_size();
        let full = Bounds::new(0.0, 0.0, size.width, size.height);
        let options = self.config.options.as_ref();

        self.surface.clear_rect(full);
        if let Some(background) = options.and_then(|o| o.background_color) {
            self.surface.fill_rect(full, background);
        }
        let bounds = options.map(Options::padding).unwrap_or_default().content_bounds(size);
        if bounds.is_empty() {
            return;
        }
        trace!(progress, chart_type = %renderer.chart_type(), "frame");
        renderer.draw(&mut self.surface, bounds, progress);
    }
}

impl<S: Surface> Chart<S, ManualScheduler> {
    /// Drive the animation to completion, advancing the clock by `step_ms`
    /// before each pending frame. Returns the number of frames delivered.
    ///
    /// Steps below 1ms are raised to 1ms so the loop always terminates.
    pub fn run_animation(&mut self, step_ms: f64) -> usize {
        let step_ms = if step_ms >= 1.0 { step_ms } else { 1.0 };
        let mut frames = 0;
        while let Some(handle) = self.scheduler.next_frame() {
            self.scheduler.advance(step_ms);
            self.on_frame(handle);
            frames += 1;
        }
        frames
    }
}

fn responsive(options: Option<&Options>) -> bool {
    options.and_then(|o| o.responsive).unwrap_or(false)
}
