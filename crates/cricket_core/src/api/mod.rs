pub mod json_api;

pub use json_api::{
    apply_event_json, apply_event_json_with, apply_events_json_lines,
    apply_events_json_lines_with,
};
