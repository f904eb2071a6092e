pub mod action_dispatcher;
pub mod api_utils;
pub mod config;
pub mod icons;
pub mod modal_frame;
pub mod smart_select;
