//! Unit test harness mirroring the src module tree

mod io;
mod model;
