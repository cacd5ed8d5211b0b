// File: crates/graph-core/src/panel.rs
// Summary: Panel state (samples, display flags, theme) with an explicit repaint flag.

use crate::render::render_graph;
use crate::sample::Sample;
use crate::surface::Surface;
use crate::theme::Theme;

/// Display toggles. Mutating any flag invalidates the previous render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayConfig {
    pub show_axis: bool,
    pub show_markers: bool,
    pub highlight_special: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_axis: true,
            show_markers: true,
            highlight_special: false,
        }
    }
}

/// Leaf graph widget: holds the current samples and flags and renders them
/// against any `Surface`. Repaint scheduling is an explicit flag the host
/// event loop polls; the panel never talks to a toolkit directly.
pub struct GraphPanel {
    samples: Vec<Sample>,
    config: DisplayConfig,
    theme: Theme,
    dirty: bool,
}

impl GraphPanel {
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
            config: DisplayConfig::default(),
            theme: Theme::light(),
            dirty: false,
        }
    }

    /// Replace the data wholesale and request a repaint.
    pub fn set_samples(&mut self, samples: Vec<Sample>) {
        self.samples = samples;
        self.dirty = true;
    }

    pub fn set_show_axis(&mut self, show_axis: bool) {
        self.config.show_axis = show_axis;
        self.dirty = true;
    }

    pub fn set_show_markers(&mut self, show_markers: bool) {
        self.config.show_markers = show_markers;
        self.dirty = true;
    }

    pub fn set_highlight_special(&mut self, highlight_special: bool) {
        self.config.highlight_special = highlight_special;
        self.dirty = true;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.dirty = true;
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// True when a setter ran since the last `take_repaint`.
    pub fn needs_repaint(&self) -> bool {
        self.dirty
    }

    /// Acknowledge the pending repaint request, clearing the flag.
    pub fn take_repaint(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Draw the current state into `surface` for a viewport of the given
    /// pixel size. Reads state only; an empty sample set draws nothing.
    pub fn render<S: Surface>(&self, surface: &mut S, width: i32, height: i32) {
        render_graph(&self.samples, &self.config, &self.theme, surface, width, height);
    }
}

impl Default for GraphPanel {
    fn default() -> Self {
        Self::new()
    }
}
