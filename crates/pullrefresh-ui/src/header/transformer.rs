//! Header content: what the header says and how far its progress bar is.
//!
//! A transformer never decides when the header shows or hides; the presenter
//! owns visibility and calls into the transformer for content changes only.

use super::HeaderViewId;
use pullrefresh_graphics::EdgeInsets;

/// Receives content updates for the header during a pull/refresh cycle.
pub trait HeaderTransformer {
    /// Called once, after the host inflated the header.
    fn on_view_created(&mut self, header: HeaderViewId, style: &HeaderStyle);

    /// Restore the initial prompt. Visibility is not affected.
    fn on_reset(&mut self);

    /// Pull progress in [0, 1).
    fn on_pulled(&mut self, fraction: f32);

    fn on_refresh_started(&mut self);

    fn on_release_to_refresh(&mut self);

    /// Fade everything except the progress indicator.
    fn on_refresh_minimized(&mut self);

    fn on_configuration_changed(&mut self) {}

    fn on_insets_changed(&mut self, _insets: EdgeInsets) {}

    /// Current content, for transformers that keep a renderable model.
    fn content(&self) -> Option<HeaderContent> {
        None
    }
}

/// Texts the default transformer shows, resolved by the host's theme.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderStyle {
    pub pull_text: String,
    pub release_text: String,
    pub refreshing_text: String,
}

impl Default for HeaderStyle {
    fn default() -> Self {
        Self {
            pull_text: "Pull to refresh".to_string(),
            release_text: "Release to refresh".to_string(),
            refreshing_text: "Loading...".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderLabel {
    Pull,
    Release,
    Refreshing,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Progress {
    Determinate(f32),
    Indeterminate,
}

/// Renderable state of the default header.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderContent {
    pub label: HeaderLabel,
    pub text: String,
    pub progress: Progress,
    pub progress_visible: bool,
    /// Alpha of the text block; drops to zero once minimized.
    pub content_alpha: f32,
    /// Offset below the host's top inset.
    pub top_offset: f32,
}

impl HeaderContent {
    fn initial(style: &HeaderStyle) -> Self {
        Self {
            label: HeaderLabel::Pull,
            text: style.pull_text.clone(),
            progress: Progress::Determinate(0.0),
            progress_visible: true,
            content_alpha: 1.0,
            top_offset: 0.0,
        }
    }
}

#[derive(Debug, Default)]
pub struct DefaultHeaderTransformer {
    header: Option<HeaderViewId>,
    style: HeaderStyle,
    content: Option<HeaderContent>,
}

impl DefaultHeaderTransformer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&self) -> Option<HeaderViewId> {
        self.header
    }

    fn content_mut(&mut self) -> &mut HeaderContent {
        let style = &self.style;
        self.content
            .get_or_insert_with(|| HeaderContent::initial(style))
    }

    fn set_label(&mut self, label: HeaderLabel) {
        let text = match label {
            HeaderLabel::Pull => self.style.pull_text.clone(),
            HeaderLabel::Release => self.style.release_text.clone(),
            HeaderLabel::Refreshing => self.style.refreshing_text.clone(),
        };
        let content = self.content_mut();
        content.label = label;
        content.text = text;
    }
}

impl HeaderTransformer for DefaultHeaderTransformer {
    fn on_view_created(&mut self, header: HeaderViewId, style: &HeaderStyle) {
        self.header = Some(header);
        self.style = style.clone();
        self.content = Some(HeaderContent::initial(style));
    }

    fn on_reset(&mut self) {
        self.set_label(HeaderLabel::Pull);
        let content = self.content_mut();
        content.progress = Progress::Determinate(0.0);
        content.progress_visible = true;
        content.content_alpha = 1.0;
    }

    fn on_pulled(&mut self, fraction: f32) {
        let content = self.content_mut();
        let fraction = fraction.clamp(0.0, 1.0);
        content.progress_visible = true;
        content.progress = match content.progress {
            Progress::Determinate(current) => Progress::Determinate(current.max(fraction)),
            Progress::Indeterminate => Progress::Indeterminate,
        };
    }

    fn on_refresh_started(&mut self) {
        self.set_label(HeaderLabel::Refreshing);
        let content = self.content_mut();
        content.progress = Progress::Indeterminate;
        content.progress_visible = true;
    }

    fn on_release_to_refresh(&mut self) {
        self.set_label(HeaderLabel::Release);
        self.content_mut().progress = Progress::Determinate(1.0);
    }

    fn on_refresh_minimized(&mut self) {
        self.content_mut().content_alpha = 0.0;
    }

    fn on_insets_changed(&mut self, insets: EdgeInsets) {
        self.content_mut().top_offset = insets.top;
    }

    fn content(&self) -> Option<HeaderContent> {
        self.content.clone()
    }
}
