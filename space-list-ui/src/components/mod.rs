// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod avatar;
pub mod button;
pub mod icons;
pub mod list;
pub mod popover;
pub mod space_list_meeting;
