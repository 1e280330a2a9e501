// File: crates/decor-core/src/lib.rs
// Summary: Core library entry point; exports the decoration API (markers, popups, draw scope).

pub mod error;
pub mod geometry;
pub mod marker;
pub mod paint;
pub mod popup;
pub mod record;
pub mod scope;
pub mod text;
pub mod types;

pub use error::DecorError;
pub use geometry::Rect;
pub use marker::{default_marker_renderer, MarkerRenderer, PointMarker};
pub use paint::{BlendMode, Color, ColorFilter, CornerRadius, FillStyle, Paint};
pub use popup::{
    default_label_formatter, default_popup_renderer, LabelFormatter, PopupLayout, PopupRenderer,
    SelectionPopup, TextLine,
};
pub use record::{DrawCmd, Recorder};
pub use scope::DrawScope;
pub use text::{TextAlign, TextMetrics, TextStyle, Typeface};
pub use types::{DataPoint, ScreenPoint};
