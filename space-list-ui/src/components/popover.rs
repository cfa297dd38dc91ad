/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Floating panel anchored to a trigger element.
//!
//! The popover owns its open flag and toggles on click (or Enter/Space). A
//! transparent backdrop covers the page while open so that any click outside
//! the panel closes it. Escape also closes it.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopoverDirection {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    #[default]
    BottomCenter,
    BottomRight,
    LeftCenter,
    RightCenter,
}

impl PopoverDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            PopoverDirection::TopLeft => "top-left",
            PopoverDirection::TopCenter => "top-center",
            PopoverDirection::TopRight => "top-right",
            PopoverDirection::BottomLeft => "bottom-left",
            PopoverDirection::BottomCenter => "bottom-center",
            PopoverDirection::BottomRight => "bottom-right",
            PopoverDirection::LeftCenter => "left-center",
            PopoverDirection::RightCenter => "right-center",
        }
    }
}

/// Pixel offset between the trigger and the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TargetOffset {
    pub horizontal: i32,
    pub vertical: i32,
}

impl TargetOffset {
    pub fn vertical(vertical: i32) -> Self {
        Self {
            horizontal: 0,
            vertical,
        }
    }
}

/// Absolute-position CSS for the panel, relative to the trigger wrapper.
pub fn placement_style(direction: PopoverDirection, offset: TargetOffset) -> String {
    let TargetOffset {
        horizontal: h,
        vertical: v,
    } = offset;
    match direction {
        PopoverDirection::BottomCenter => format!(
            "top: calc(100% + {v}px); left: 50%; transform: translateX(calc(-50% + {h}px));"
        ),
        PopoverDirection::BottomLeft => format!("top: calc(100% + {v}px); left: {h}px;"),
        PopoverDirection::BottomRight => format!("top: calc(100% + {v}px); right: {h}px;"),
        PopoverDirection::TopCenter => format!(
            "bottom: calc(100% + {v}px); left: 50%; transform: translateX(calc(-50% + {h}px));"
        ),
        PopoverDirection::TopLeft => format!("bottom: calc(100% + {v}px); left: {h}px;"),
        PopoverDirection::TopRight => format!("bottom: calc(100% + {v}px); right: {h}px;"),
        PopoverDirection::LeftCenter => format!(
            "right: calc(100% + {h}px); top: 50%; transform: translateY(calc(-50% + {v}px));"
        ),
        PopoverDirection::RightCenter => format!(
            "left: calc(100% + {h}px); top: 50%; transform: translateY(calc(-50% + {v}px));"
        ),
    }
}

pub fn popover_class(direction: PopoverDirection, is_dynamic: bool) -> String {
    let mut class = format!("cui-popover cui-popover--{}", direction.as_str());
    if is_dynamic {
        class.push_str(" cui-popover--dynamic");
    }
    class
}

#[component]
pub fn Popover(
    content: Element,
    #[props(default)] direction: PopoverDirection,
    #[props(default)] target_offset: TargetOffset,
    #[props(default = false)] is_dynamic: bool,
    children: Element,
) -> Element {
    let mut open = use_signal(|| false);

    let class = popover_class(direction, is_dynamic);
    let style = format!(
        "position: absolute; z-index: 1000; {}",
        placement_style(direction, target_offset)
    );

    rsx! {
        span {
            class: "cui-popover__wrapper",
            style: "position: relative; display: inline-block;",
            span {
                class: "cui-popover__target",
                aria_haspopup: "dialog",
                aria_expanded: if open() { "true" } else { "false" },
                onclick: move |_| open.set(!open()),
                onkeydown: move |evt: KeyboardEvent| match evt.key() {
                    Key::Escape => open.set(false),
                    Key::Enter => open.set(!open()),
                    Key::Character(c) if c == " " => {
                        evt.prevent_default();
                        open.set(!open());
                    }
                    _ => {}
                },
                {children}
            }
            if open() {
                div {
                    class: "cui-popover__backdrop",
                    style: "position: fixed; inset: 0; z-index: 999;",
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        open.set(false);
                    },
                }
                div {
                    class: "{class}",
                    role: "dialog",
                    style: "{style}",
                    onclick: move |evt: MouseEvent| evt.stop_propagation(),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Escape {
                            open.set(false);
                        }
                    },
                    {content}
                }
            }
        }
    }
}
