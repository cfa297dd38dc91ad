// SPDX-License-Identifier: MIT OR Apache-2.0

//! Named icons. Names follow the `{glyph}_{size}` convention, e.g. `people_12`.

pub mod mention;
pub mod people;
pub mod spark_board;

use dioxus::prelude::*;

use mention::MentionIcon;
use people::PeopleIcon;
use spark_board::SparkBoardIcon;

const DEFAULT_ICON_SIZE: u32 = 16;

/// Split `people_12` into `("people", 12)`. Names without a numeric suffix
/// get the default size.
pub fn parse_icon_name(name: &str) -> (&str, u32) {
    match name.rsplit_once('_') {
        Some((glyph, size)) => match size.parse() {
            Ok(size) => (glyph, size),
            Err(_) => (name, DEFAULT_ICON_SIZE),
        },
        None => (name, DEFAULT_ICON_SIZE),
    }
}

#[component]
pub fn Icon(#[props(into)] name: String, #[props(default)] color: Option<String>) -> Element {
    let (glyph, size) = parse_icon_name(&name);
    match glyph {
        "people" => rsx! { PeopleIcon { size } },
        "spark-board" => rsx! { SparkBoardIcon { size } },
        "mention" => rsx! { MentionIcon { size, color } },
        _ => rsx! {
            i {
                class: "icon icon-{name}",
                style: color.map(|color| format!("color: {color};")),
            }
        },
    }
}
