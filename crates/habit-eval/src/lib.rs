//! Monthly evaluation of student daily-habit logs.
//!
//! Raw entries come in through [`habit_log`], are grouped per student and
//! month by [`periods`] and rated on seven indicators by [`evaluation`].

pub mod config;
pub mod error;
pub mod evaluation;
pub mod habit_log;
pub mod normalize;
pub mod periods;
pub mod telemetry;
