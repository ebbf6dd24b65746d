pub mod config;
pub mod logging;

pub mod describe;
pub mod encode;
pub mod naming;
pub mod rename;
