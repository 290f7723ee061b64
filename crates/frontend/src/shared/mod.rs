pub mod components;
pub mod data;
pub mod format;
pub mod i18n;
pub mod icons;
pub mod toast;
