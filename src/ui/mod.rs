//! UI layer: one module per panel plus shared widgets.
//! Panels read their inputs from `state` and never touch each other's.

pub mod biscayne;
pub mod capitals;
pub mod crypto;
pub mod geology;
pub mod home;
pub mod panels;
pub mod plot;
pub mod projection;
pub mod table;
pub mod widgets;
