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

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvatarType {
    #[default]
    Default,
    Group,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvatarSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl AvatarSize {
    fn as_str(self) -> &'static str {
        match self {
            AvatarSize::Small => "small",
            AvatarSize::Medium => "medium",
            AvatarSize::Large => "large",
        }
    }
}

pub fn avatar_class(avatar_type: AvatarType, size: AvatarSize) -> String {
    let mut class = format!("cui-avatar cui-avatar--{}", size.as_str());
    if avatar_type == AvatarType::Group {
        class.push_str(" cui-avatar--group");
    }
    class
}

/// First character of each of the first two words, uppercased.
pub fn avatar_letters(title: &str) -> String {
    title
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[component]
pub fn Avatar(
    #[props(default)] title: Option<String>,
    #[props(default)] alt: Option<String>,
    #[props(default)] src: Option<String>,
    #[props(default)] icon: Option<Element>,
    #[props(default)] avatar_type: AvatarType,
    #[props(default)] size: AvatarSize,
) -> Element {
    let class = avatar_class(avatar_type, size);

    let content = match (src.as_deref().filter(|src| !src.is_empty()), icon) {
        (Some(src), _) => rsx! {
            img { class: "cui-avatar__img", src: "{src}", alt: alt.clone() }
        },
        (None, Some(icon)) => rsx! {
            span { class: "cui-avatar__icon", {icon} }
        },
        (None, None) => {
            let letters = avatar_letters(title.as_deref().unwrap_or_default());
            rsx! {
                span { class: "cui-avatar__letter", "{letters}" }
            }
        }
    };

    rsx! {
        div {
            class: "{class}",
            role: "img",
            title: title.clone(),
            aria_label: alt.clone(),
            {content}
        }
    }
}
