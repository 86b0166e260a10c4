pub mod flash;
pub mod i18n;
