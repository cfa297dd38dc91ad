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

//! List container, rows and row sections.

use dioxus::core::AttributeValue;
use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListItemType {
    #[default]
    Default,
    Space,
}

impl ListItemType {
    pub fn as_str(self) -> &'static str {
        match self {
            ListItemType::Default => "default",
            ListItemType::Space => "space",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionPosition {
    Left,
    Center,
    Right,
}

impl SectionPosition {
    fn as_str(self) -> &'static str {
        match self {
            SectionPosition::Left => "left",
            SectionPosition::Center => "center",
            SectionPosition::Right => "right",
        }
    }
}

/// Remove every `name` attribute from `attributes` and return their text
/// values joined by spaces. Empty values are dropped.
pub fn take_text_attribute(attributes: &mut Vec<Attribute>, name: &str) -> Option<String> {
    let mut values = Vec::new();
    attributes.retain(|attr| {
        if attr.name != name {
            return true;
        }
        match &attr.value {
            AttributeValue::Text(text) if !text.is_empty() => values.push(text.clone()),
            AttributeValue::Int(n) => values.push(n.to_string()),
            _ => {}
        }
        false
    });
    if values.is_empty() {
        None
    } else {
        Some(values.join(" "))
    }
}

pub fn list_item_class(item_type: ListItemType, extra: Option<&str>) -> String {
    let mut class = format!("cui-list-item cui-list-item--{}", item_type.as_str());
    if let Some(extra) = extra.filter(|extra| !extra.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

#[component]
pub fn List(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut attributes = attributes;
    let class = match take_text_attribute(&mut attributes, "class") {
        Some(extra) => format!("cui-list {extra}"),
        None => "cui-list".to_string(),
    };

    rsx! {
        div { class: "{class}", role: "list", ..attributes, {children} }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ListItemProps {
    #[props(default)]
    pub item_type: ListItemType,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// A row. Caller `class` values are appended to the row's own classes;
/// every other attribute is forwarded unchanged.
#[component]
pub fn ListItem(props: ListItemProps) -> Element {
    let mut attributes = props.attributes.clone();
    let extra = take_text_attribute(&mut attributes, "class");
    let class = list_item_class(props.item_type, extra.as_deref());
    let item_type = props.item_type.as_str();
    let children = props.children;

    rsx! {
        div {
            class: "{class}",
            role: "listitem",
            "data-type": item_type,
            ..attributes,
            {children}
        }
    }
}

#[component]
pub fn ListItemSection(position: SectionPosition, children: Element) -> Element {
    let class = format!("cui-list-item__{}", position.as_str());
    rsx! {
        div { class: "{class}", {children} }
    }
}
