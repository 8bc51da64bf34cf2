//! Interactive triangle calculator: reads three side lengths and a
//! display precision from the terminal, then reports perimeter, area,
//! heights, medians, and angle bisectors.

pub mod application;
pub mod cli;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
