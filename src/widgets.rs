//! Small rendering helpers shared by the app and the tooltip

pub mod popup;
