//! # Icons
//!
//! Stroke icons for the semantic [`IconKind`] names. Outlines follow the
//! 24×24 line-icon grid with round caps, drawn in `currentColor` so the
//! surrounding tone class colors them.

use cyberkit_core::IconKind;
use dioxus::prelude::*;

/// One primitive of an icon outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Path(&'static str),
    Circle { cx: f32, cy: f32, r: f32 },
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },
    Polyline(&'static str),
}

/// Outline of an icon
pub fn shapes(kind: IconKind) -> &'static [Shape] {
    match kind {
        IconKind::CheckCircle => &[
            Shape::Path("M22 11.08V12a10 10 0 1 1-5.93-9.14"),
            Shape::Polyline("22 4 12 14.01 9 11.01"),
        ],
        IconKind::AlertCircle => &[
            Shape::Circle { cx: 12.0, cy: 12.0, r: 10.0 },
            Shape::Line { x1: 12.0, y1: 8.0, x2: 12.0, y2: 12.0 },
            Shape::Line { x1: 12.0, y1: 16.0, x2: 12.01, y2: 16.0 },
        ],
        IconKind::AlertTriangle => &[
            Shape::Path("m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3Z"),
            Shape::Line { x1: 12.0, y1: 9.0, x2: 12.0, y2: 13.0 },
            Shape::Line { x1: 12.0, y1: 17.0, x2: 12.01, y2: 17.0 },
        ],
        IconKind::Info => &[
            Shape::Circle { cx: 12.0, cy: 12.0, r: 10.0 },
            Shape::Line { x1: 12.0, y1: 16.0, x2: 12.0, y2: 12.0 },
            Shape::Line { x1: 12.0, y1: 8.0, x2: 12.01, y2: 8.0 },
        ],
        IconKind::Close => &[
            Shape::Line { x1: 18.0, y1: 6.0, x2: 6.0, y2: 18.0 },
            Shape::Line { x1: 6.0, y1: 6.0, x2: 18.0, y2: 18.0 },
        ],
    }
}

/// Properties for the Icon component
#[derive(Props, Clone, PartialEq)]
pub struct IconProps {
    /// Which icon to draw
    pub kind: IconKind,

    /// Edge length in pixels
    #[props(default = 24)]
    pub size: u32,
}

/// Inline SVG icon
#[component]
pub fn Icon(props: IconProps) -> Element {
    let size = props.size;
    let name = props.kind.to_string();

    rsx! {
        svg {
            class: "cyber-icon",
            "data-icon": "{name}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",

            for shape in shapes(props.kind) {
                {render_shape(shape)}
            }
        }
    }
}

fn render_shape(shape: &Shape) -> Element {
    match *shape {
        Shape::Path(d) => rsx! { path { d: "{d}" } },
        Shape::Circle { cx, cy, r } => rsx! { circle { cx: "{cx}", cy: "{cy}", r: "{r}" } },
        Shape::Line { x1, y1, x2, y2 } => rsx! {
            line { x1: "{x1}", y1: "{y1}", x2: "{x2}", y2: "{y2}" }
        },
        Shape::Polyline(points) => rsx! { polyline { points: "{points}" } },
    }
}
