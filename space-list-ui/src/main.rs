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

//! Gallery of meeting rows, one per documented usage.

use dioxus::prelude::*;
use space_list_ui::components::avatar::Avatar;
use space_list_ui::components::icons::Icon;
use space_list_ui::components::list::List;
use space_list_ui::constants::{app_config, RuntimeConfig, MENTION_ICON};
use space_list_ui::{attendees_from_json, Attendee, IdCounter, MeetingType, SpaceListMeeting};

const LONG_ROSTER: &[&str] = &[
    "Joe Bojangles",
    "Joe Boe",
    "Joe Coe",
    "Joe Doe",
    "Joe Foe",
    "Joe Goe",
    "Joe Joe",
    "Joe Koe",
    "Joe Loe",
    "Joe Moe",
    "Joe Noe",
    "Joe Poe",
    "Moe Moe",
    "Toe Toe",
];

const SHORT_ROSTER: &[&str] = &["Joe Boe", "Moe Moe", "Toe Toe"];

fn roster(names: &[&str]) -> Vec<Attendee> {
    names.iter().map(|name| Attendee::new(*name)).collect()
}

/// The configured roster if it parses, the built-in one otherwise.
fn gallery_roster(config: &RuntimeConfig) -> Vec<Attendee> {
    match config.attendees_json.as_deref() {
        Some(json) => attendees_from_json(json).unwrap_or_else(|e| {
            log::warn!("ignoring configured attendees: {e:#}");
            roster(LONG_ROSTER)
        }),
        None => roster(LONG_ROSTER),
    }
}

fn log_click(label: &'static str) -> impl FnMut(MouseEvent) {
    move |_| log::info!("{label} clicked")
}

#[component]
fn App() -> Element {
    use_context_provider(IdCounter::default);
    let config = use_hook(|| app_config().unwrap_or_default());
    let attendees = gallery_roster(&config);

    rsx! {
        div { class: "medium-5 columns",
            List { style: "background-color: rgba(40,40,40,0.72);",
                SpaceListMeeting {
                    button_label: "Now",
                    button_onclick: log_click("Now"),
                    attendees,
                    header: "Attendees Prop",
                    subheader: "must be very long long long long long message message",
                }
                SpaceListMeeting {
                    header: "isBold(true)",
                    subheader: "subheader",
                    is_bold: true,
                }
                SpaceListMeeting {
                    button_label: "In 5 Min",
                    button_onclick: log_click("In 5 Min"),
                    header: "MeetingType(group)",
                    subheader: "subheader",
                    meeting_type: MeetingType::Group,
                }
                SpaceListMeeting {
                    button_label: "2:25",
                    button_onclick: log_click("2:25"),
                    header: "MeetingType(number)",
                    subheader: "subheader",
                    meeting_type: MeetingType::Number,
                }
                SpaceListMeeting {
                    attendees: roster(SHORT_ROSTER),
                    button_label: "30:25",
                    button_onclick: log_click("30:25"),
                    header: "MeetingType(device)",
                    meeting_type: MeetingType::Device,
                }
                SpaceListMeeting {
                    attendees: roster(SHORT_ROSTER),
                    button_label: "30:25",
                    header: "ChildrenLeft Prop",
                    children_left: rsx! {
                        Avatar {
                            icon: rsx! { Icon { name: MENTION_ICON, color: "blue".to_string() } },
                        }
                    },
                }
            }
        }
    }
}

fn main() {
    let config = app_config();
    let level = config
        .as_ref()
        .map(RuntimeConfig::log_level)
        .unwrap_or(log::Level::Info);
    let _ = console_log::init_with_level(level);
    if let Err(e) = config {
        log::warn!("{e}; using defaults");
    }

    console_error_panic_hook::set_once();
    dioxus::launch(App);
}
