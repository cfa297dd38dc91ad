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
 */

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonColor {
    #[default]
    Default,
    Blue,
    Green,
    Red,
}

impl ButtonColor {
    fn as_str(self) -> &'static str {
        match self {
            ButtonColor::Default => "default",
            ButtonColor::Blue => "blue",
            ButtonColor::Green => "green",
            ButtonColor::Red => "red",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] color: ButtonColor,
    #[props(into)] aria_label: String,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let class = format!("cui-button cui-button--{}", color.as_str());

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            aria_label: "{aria_label}",
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
