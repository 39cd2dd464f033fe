pub mod api_utils;
pub mod audio;
pub mod i18n;
pub mod icons;
