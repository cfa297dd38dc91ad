// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;

/// Room device glyph: a display on a stand.
#[component]
pub fn SparkBoardIcon(size: u32) -> Element {
    rsx! {
        svg {
            class: "cui-icon icon-spark-board_{size}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            rect { x: "2", y: "3", width: "20", height: "14", rx: "2", ry: "2" }
            line { x1: "8", y1: "21", x2: "16", y2: "21" }
            line { x1: "12", y1: "17", x2: "12", y2: "21" }
        }
    }
}
