//! Library side of the `harvest-calendar` command.

pub mod logging;
pub mod pipeline;
