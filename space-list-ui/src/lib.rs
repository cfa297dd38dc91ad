// SPDX-License-Identifier: MIT OR Apache-2.0

//! space-list-ui library root.
//!
//! Re-exports public modules so that integration tests (under `tests/`) can
//! import components. The gallery entry-point lives in `main.rs`.

pub mod components;
pub mod constants;
pub mod context;
pub mod types;

pub use components::space_list_meeting::{SpaceListMeeting, SpaceListMeetingProps};
pub use context::IdCounter;
pub use types::{attendees_from_json, Attendee, MeetingType, TextOrNode};
