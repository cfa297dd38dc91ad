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

//! A meeting row for a space list: avatar, header/subheader, attendee count
//! with a popover roster, and an optional action button.

use dioxus::prelude::*;

use crate::components::avatar::{Avatar, AvatarSize, AvatarType};
use crate::components::button::{Button, ButtonColor};
use crate::components::icons::Icon;
use crate::components::list::{
    list_item_class, take_text_attribute, List, ListItem, ListItemSection, ListItemType,
    SectionPosition,
};
use crate::components::popover::{Popover, PopoverDirection, TargetOffset};
use crate::constants::{
    ATTENDEES_POPOVER_OFFSET, ATTENDEES_TRIGGER_CLASS, DEVICE_ICON, HEADER_CLASS, PEOPLE_ICON,
    SPACE_MEETING_CLASS, SUBHEADER_CLASS, UNREAD_CLASS,
};
use crate::context::use_generated_id;
use crate::types::{Attendee, MeetingType, TextOrNode};

#[derive(Props, Clone, PartialEq)]
pub struct SpaceListMeetingProps {
    /// Participants listed in the attendee popover.
    #[props(default)]
    pub attendees: Vec<Attendee>,
    /// Shows the action button when non-empty.
    #[props(default, into)]
    pub button_label: String,
    #[props(default)]
    pub button_onclick: Option<EventHandler<MouseEvent>>,
    /// Replaces the avatar.
    #[props(default)]
    pub children_left: Option<Element>,
    /// Replaces the attendee count trigger.
    #[props(default)]
    pub children_right: Option<Element>,
    #[props(into)]
    pub header: TextOrNode,
    #[props(default, into)]
    pub subheader: TextOrNode,
    /// Renders the row in the unread style.
    #[props(default = false)]
    pub is_bold: bool,
    #[props(default, into)]
    pub meeting_type: MeetingType,
    /// Called when the row itself is clicked. Clicks on the action button
    /// never reach it.
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    /// `id`, `class` and `title` shape the row; anything else is forwarded as is.
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
}

/// The explicit title when non-empty, else a text header. A non-text header
/// yields no title.
pub fn resolve_title(title: Option<&str>, header: &TextOrNode) -> Option<String> {
    match title {
        Some(title) if !title.is_empty() => Some(title.to_string()),
        _ => header.as_text().map(str::to_string),
    }
}

pub fn root_class(is_bold: bool, class: Option<&str>) -> String {
    let mut root = SPACE_MEETING_CLASS.to_string();
    if is_bold {
        root.push(' ');
        root.push_str(UNREAD_CLASS);
    }
    if let Some(class) = class.filter(|class| !class.is_empty()) {
        root.push(' ');
        root.push_str(class);
    }
    root
}

/// What the left-section avatar shows for a meeting type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarSpec {
    pub title: Option<String>,
    pub alt: Option<String>,
    pub avatar_type: AvatarType,
    pub icon: Option<&'static str>,
}

pub fn left_avatar(meeting_type: MeetingType, title: Option<&str>) -> AvatarSpec {
    let title = title.map(str::to_string);
    match meeting_type {
        MeetingType::Group => AvatarSpec {
            title: title.clone(),
            alt: title,
            avatar_type: AvatarType::Group,
            icon: None,
        },
        MeetingType::Number => AvatarSpec {
            title: Some("#".to_string()),
            alt: title,
            avatar_type: AvatarType::Default,
            icon: None,
        },
        MeetingType::Device => AvatarSpec {
            title: None,
            alt: title,
            avatar_type: AvatarType::Default,
            icon: Some(DEVICE_ICON),
        },
        MeetingType::Default => AvatarSpec {
            title: title.clone(),
            alt: title,
            avatar_type: AvatarType::Default,
            icon: None,
        },
    }
}

fn render_left_avatar(spec: AvatarSpec) -> Element {
    let icon = spec.icon.map(|name| rsx! { Icon { name } });
    rsx! {
        Avatar {
            title: spec.title,
            alt: spec.alt,
            avatar_type: spec.avatar_type,
            icon,
        }
    }
}

fn attendee_avatar(attendee: &Attendee) -> Element {
    if let Some(node) = &attendee.node {
        return node.clone();
    }
    rsx! {
        Avatar {
            size: AvatarSize::Small,
            title: attendee.title.clone(),
            alt: attendee.avatar_alt().to_string(),
            src: attendee.avatar_src().to_string(),
            avatar_type: AvatarType::Group,
        }
    }
}

fn attendee_roster(attendees: &[Attendee]) -> Element {
    rsx! {
        List {
            for (idx, attendee) in attendees.iter().enumerate() {
                ListItem { key: "attendee-{idx}",
                    ListItemSection { position: SectionPosition::Left,
                        {attendee_avatar(attendee)}
                    }
                    ListItemSection { position: SectionPosition::Center,
                        div { class: HEADER_CLASS, "{attendee.title}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SpaceListMeeting(props: SpaceListMeetingProps) -> Element {
    let mut attributes = props.attributes.clone();
    let caller_id = take_text_attribute(&mut attributes, "id");
    let caller_class = take_text_attribute(&mut attributes, "class");
    let caller_title = take_text_attribute(&mut attributes, "title");

    let id = use_generated_id(caller_id);
    let title = resolve_title(caller_title.as_deref(), &props.header);
    let class = list_item_class(
        ListItemType::Space,
        Some(&root_class(props.is_bold, caller_class.as_deref())),
    );

    let left = match &props.children_left {
        Some(children) => children.clone(),
        None => render_left_avatar(left_avatar(props.meeting_type, title.as_deref())),
    };

    let attendee_count = props.attendees.len();
    let right = match &props.children_right {
        Some(children) => children.clone(),
        None if attendee_count > 0 => {
            let roster = attendee_roster(&props.attendees);
            rsx! {
                Popover {
                    content: roster,
                    direction: PopoverDirection::BottomCenter,
                    target_offset: TargetOffset::vertical(ATTENDEES_POPOVER_OFFSET),
                    is_dynamic: true,
                    span {
                        class: ATTENDEES_TRIGGER_CLASS,
                        role: "button",
                        tabindex: "0",
                        "{attendee_count}"
                        Icon { name: PEOPLE_ICON }
                    }
                }
            }
        }
        None => rsx! {},
    };

    let button_label = props.button_label.clone();
    let button_onclick = props.button_onclick;
    let on_button_click = move |evt: MouseEvent| {
        evt.stop_propagation();
        if let Some(handler) = button_onclick {
            handler.call(evt);
        }
    };

    let row_onclick = props.onclick;
    let header = props.header.render();
    let subheader = props.subheader.render();

    rsx! {
        div {
            class: "{class}",
            role: "listitem",
            "data-type": ListItemType::Space.as_str(),
            id: "{id}",
            title: title,
            onclick: move |evt: MouseEvent| {
                if let Some(handler) = row_onclick {
                    handler.call(evt);
                }
            },
            ..attributes,
            ListItemSection { position: SectionPosition::Left, {left} }
            ListItemSection { position: SectionPosition::Center,
                div { class: HEADER_CLASS, {header} }
                div { class: SUBHEADER_CLASS, {subheader} }
            }
            ListItemSection { position: SectionPosition::Right,
                {right}
                if !button_label.is_empty() {
                    Button {
                        color: ButtonColor::Green,
                        aria_label: button_label.clone(),
                        onclick: on_button_click,
                        "{button_label}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_falls_back_to_text_header() {
        let header = TextOrNode::from("Design review");
        assert_eq!(resolve_title(None, &header).as_deref(), Some("Design review"));
        assert_eq!(resolve_title(Some(""), &header).as_deref(), Some("Design review"));
    }

    #[test]
    fn explicit_title_wins_over_header() {
        let header = TextOrNode::from("Design review");
        assert_eq!(resolve_title(Some("Review"), &header).as_deref(), Some("Review"));
    }

    #[test]
    fn node_header_yields_no_title() {
        let header = TextOrNode::from(dioxus::core::VNode::empty());
        assert_eq!(resolve_title(None, &header), None);
    }

    #[test]
    fn bold_adds_exactly_one_class() {
        let plain = root_class(false, None);
        let bold = root_class(true, None);
        assert_eq!(plain, SPACE_MEETING_CLASS);
        assert_eq!(
            bold.split_whitespace().count(),
            plain.split_whitespace().count() + 1
        );
        assert!(bold.ends_with(UNREAD_CLASS));
    }

    #[test]
    fn caller_class_is_appended_last() {
        assert_eq!(
            root_class(true, Some("pinned")),
            format!("{SPACE_MEETING_CLASS} {UNREAD_CLASS} pinned")
        );
        assert_eq!(root_class(false, Some("")), SPACE_MEETING_CLASS);
    }

    #[test]
    fn number_meeting_always_shows_hash() {
        let spec = left_avatar(MeetingType::Number, Some("Daily standup"));
        assert_eq!(spec.title.as_deref(), Some("#"));
        assert_eq!(spec.alt.as_deref(), Some("Daily standup"));

        let untitled = left_avatar(MeetingType::Number, None);
        assert_eq!(untitled.title.as_deref(), Some("#"));
    }

    #[test]
    fn device_meeting_uses_device_icon() {
        let spec = left_avatar(MeetingType::Device, Some("Board room"));
        assert_eq!(spec.icon, Some(DEVICE_ICON));
        assert_eq!(spec.title, None);
        assert_eq!(spec.alt.as_deref(), Some("Board room"));
    }

    #[test]
    fn group_and_default_differ_only_in_type() {
        let group = left_avatar(MeetingType::Group, Some("Team"));
        let plain = left_avatar(MeetingType::Default, Some("Team"));
        assert_eq!(group.avatar_type, AvatarType::Group);
        assert_eq!(plain.avatar_type, AvatarType::Default);
        assert_eq!(group.title, plain.title);
        assert_eq!(group.alt, plain.alt);
    }

    #[test]
    fn unrecognised_meeting_type_renders_default_avatar() {
        assert_eq!(
            left_avatar(MeetingType::from("hologram"), Some("H")),
            left_avatar(MeetingType::Default, Some("H"))
        );
    }
}
