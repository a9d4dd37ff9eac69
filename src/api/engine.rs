use tracing::{debug, trace};

use crate::core::{
    ApproxTextMeasurer, DataPoint, LabelVisibilityMap, PlayAxisGroups, PointId, ScalePair,
    TextMeasurer, Trace,
};
use crate::error::PlayAxisResult;
use crate::extensions::PlayAxisPlugin;
use crate::interaction::{TimelineController, TimelineMode, TimelineState};
use crate::render::Renderer;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::{PathAnimator, PlayAxisConfig, PlayAxisEvent, PlayAxisLayout, RenderBindings};

/// Main orchestration facade consumed by host charts.
///
/// `PlayAxisEngine` owns every piece of play-axis state: groups, timeline,
/// render bindings, traces and path animation. It is built once and reset by
/// each structural update; nothing lives in process-wide state.
pub struct PlayAxisEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: PlayAxisConfig,
    pub(super) enabled: bool,
    pub(super) points: Vec<DataPoint>,
    pub(super) scales: Option<ScalePair>,
    pub(super) layout: Option<PlayAxisLayout>,
    pub(super) groups: Option<PlayAxisGroups>,
    pub(super) labels: LabelVisibilityMap,
    pub(super) timeline: TimelineController,
    pub(super) bindings: RenderBindings,
    pub(super) selection: Vec<PointId>,
    pub(super) traces: Vec<Trace>,
    pub(super) animator: PathAnimator,
    pub(super) caption: Option<String>,
    pub(super) measurer: Box<dyn TextMeasurer>,
    pub(super) plugins: Vec<Box<dyn PlayAxisPlugin>>,
}

impl<R: Renderer> PlayAxisEngine<R> {
    pub fn new(renderer: R, config: PlayAxisConfig) -> PlayAxisResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            renderer,
            enabled: true,
            points: Vec::new(),
            scales: None,
            layout: None,
            groups: None,
            labels: LabelVisibilityMap::default(),
            timeline: TimelineController::new(config.play_interval()),
            bindings: RenderBindings::default(),
            selection: Vec::new(),
            traces: Vec::new(),
            animator: PathAnimator::new(config.path_length_reserve_px),
            caption: None,
            measurer: Box::new(ApproxTextMeasurer::default()),
            plugins: Vec::new(),
            config,
        })
    }

    #[must_use]
    pub fn with_text_measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.measurer = Box::new(measurer);
        self
    }

    pub fn set_text_measurer(&mut self, measurer: impl TextMeasurer + 'static) {
        self.measurer = Box::new(measurer);
        self.refresh_label_visibility();
    }

    #[must_use]
    pub fn config(&self) -> PlayAxisConfig {
        self.config
    }

    /// Replaces the configuration; timing changes apply from the next tick.
    pub fn set_config(&mut self, config: PlayAxisConfig) -> PlayAxisResult<()> {
        let config = config.validate()?;
        self.timeline.set_play_interval(config.play_interval());
        if config.path_length_reserve_px != self.config.path_length_reserve_px {
            self.animator = PathAnimator::new(config.path_length_reserve_px);
        }
        self.config = config;
        self.refresh_label_visibility();
        self.refresh_traces();
        Ok(())
    }

    pub fn enable(&mut self) -> PlayAxisResult<()> {
        if self.enabled {
            return Ok(());
        }
        self.enabled = true;
        debug!("play axis enabled");
        if let (Some(scales), Some(layout)) = (self.scales, self.layout) {
            let points = std::mem::take(&mut self.points);
            self.apply_structural_update(points, scales, layout)?;
        }
        Ok(())
    }

    pub fn disable(&mut self) {
        if !self.enabled {
            return;
        }
        self.enabled = false;
        debug!("play axis disabled");
        self.reset_play_axis_state();
        for point in &mut self.points {
            point.shown = true;
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Vertical space the host layout must reserve for the play-axis control.
    #[must_use]
    pub fn height(&self) -> f64 {
        if self.enabled {
            self.config.axis_height_px
        } else {
            0.0
        }
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn groups(&self) -> Option<&PlayAxisGroups> {
        self.groups.as_ref()
    }

    #[must_use]
    pub fn label_visibility(&self) -> &LabelVisibilityMap {
        &self.labels
    }

    #[must_use]
    pub fn timeline_state(&self) -> TimelineState {
        self.timeline.state()
    }

    #[must_use]
    pub fn timeline_mode(&self) -> TimelineMode {
        self.timeline.mode()
    }

    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    #[must_use]
    pub fn selection(&self) -> &[PointId] {
        &self.selection
    }

    #[must_use]
    pub fn traces(&self) -> &[Trace] {
        &self.traces
    }

    #[must_use]
    pub fn path_animator(&self) -> &PathAnimator {
        &self.animator
    }

    #[must_use]
    pub fn render_bindings(&self) -> &RenderBindings {
        &self.bindings
    }

    #[must_use]
    pub fn layout(&self) -> Option<PlayAxisLayout> {
        self.layout
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn render(&mut self) -> PlayAxisResult<()> {
        let Some(frame) = self.build_render_frame() else {
            trace!("skipping render before the first update");
            return Ok(());
        };
        self.renderer.render(&frame)?;
        self.emit_plugin_event(PlayAxisEvent::Rendered);
        Ok(())
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> PlayAxisResult<()>
    where
        R: CairoContextRenderer,
    {
        let Some(frame) = self.build_render_frame() else {
            return Ok(());
        };
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.emit_plugin_event(PlayAxisEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Drops groups, timeline, traces and fades; the engine goes back to idle.
    pub(super) fn reset_play_axis_state(&mut self) {
        self.timeline.on_structural_update(0);
        self.groups = None;
        self.labels = LabelVisibilityMap::default();
        self.bindings.clear();
        self.traces.clear();
        self.animator.clear();
        self.caption = None;
    }
}
