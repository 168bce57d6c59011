pub mod config;
pub mod delivery;
pub mod form;
pub mod i18n;
pub mod retry;
