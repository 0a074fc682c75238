pub mod api_utils;
pub mod error;
pub mod icons;
pub mod notifications;
