//! Validation et transformation des lignes

pub mod coords;
pub mod date;
pub mod row;
