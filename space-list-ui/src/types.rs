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

use anyhow::{bail, Context};
use dioxus::prelude::*;
use serde::{Deserialize, Serialize, Serializer};

/// One meeting participant listed in the attendee popover.
#[derive(Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Attendee {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// Custom avatar shown instead of the generated one.
    #[serde(skip)]
    pub node: Option<Element>,
}

impl Attendee {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    pub fn with_src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }

    pub fn with_node(mut self, node: Element) -> Self {
        self.node = Some(node);
        self
    }

    /// Accessible label for the generated avatar; empty `alt` counts as unset.
    pub fn avatar_alt(&self) -> &str {
        match self.alt.as_deref() {
            Some(alt) if !alt.is_empty() => alt,
            _ => &self.title,
        }
    }

    pub fn avatar_src(&self) -> &str {
        self.src.as_deref().unwrap_or("")
    }
}

impl std::fmt::Debug for Attendee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attendee")
            .field("title", &self.title)
            .field("alt", &self.alt)
            .field("src", &self.src)
            .field("node", &self.node.as_ref().map(|_| "<element>"))
            .finish()
    }
}

/// Parse an attendee roster, rejecting entries without a title.
pub fn attendees_from_json(json: &str) -> anyhow::Result<Vec<Attendee>> {
    let attendees: Vec<Attendee> =
        serde_json::from_str(json).context("attendee roster is not a JSON array of attendees")?;
    for (idx, attendee) in attendees.iter().enumerate() {
        if attendee.title.is_empty() {
            bail!("attendee at index {idx} has an empty title");
        }
    }
    Ok(attendees)
}

/// Avatar variant shown in the left section of a meeting row.
///
/// Any string other than `group`, `number` or `device` maps to
/// [`MeetingType::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum MeetingType {
    #[default]
    Default,
    Group,
    Number,
    Device,
}

impl MeetingType {
    pub fn as_str(self) -> &'static str {
        match self {
            MeetingType::Default => "",
            MeetingType::Group => "group",
            MeetingType::Number => "number",
            MeetingType::Device => "device",
        }
    }
}

impl From<&str> for MeetingType {
    fn from(value: &str) -> Self {
        match value {
            "group" => MeetingType::Group,
            "number" => MeetingType::Number,
            "device" => MeetingType::Device,
            _ => MeetingType::Default,
        }
    }
}

impl From<String> for MeetingType {
    fn from(value: String) -> Self {
        MeetingType::from(value.as_str())
    }
}

impl Serialize for MeetingType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl std::fmt::Display for MeetingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Header or subheader content: plain text, or an arbitrary element.
#[derive(Clone, PartialEq)]
pub enum TextOrNode {
    Text(String),
    Node(Element),
}

impl TextOrNode {
    /// The text, if this is plain text. Nodes never yield a title.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TextOrNode::Text(text) => Some(text),
            TextOrNode::Node(_) => None,
        }
    }

    pub fn render(&self) -> Element {
        match self {
            TextOrNode::Text(text) => rsx! { "{text}" },
            TextOrNode::Node(node) => node.clone(),
        }
    }
}

impl Default for TextOrNode {
    fn default() -> Self {
        TextOrNode::Text(String::new())
    }
}

impl From<&str> for TextOrNode {
    fn from(value: &str) -> Self {
        TextOrNode::Text(value.to_string())
    }
}

impl From<String> for TextOrNode {
    fn from(value: String) -> Self {
        TextOrNode::Text(value)
    }
}

impl From<Element> for TextOrNode {
    fn from(value: Element) -> Self {
        TextOrNode::Node(value)
    }
}

impl std::fmt::Debug for TextOrNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextOrNode::Text(text) => f.debug_tuple("Text").field(text).finish(),
            TextOrNode::Node(_) => f.write_str("Node(<element>)"),
        }
    }
}
