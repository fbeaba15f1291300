//! Events raised by the input layer and handled by observers.
//!
//! - [`attack`] – attack trigger handled by the combat observer
//! - [`switchdebug`] – toggle the debug overlay

pub mod attack;
pub mod switchdebug;
