//! Flow arrangements supported by the heat exchanger utilities.

mod counter_flow;
mod parallel_flow;
mod shell_and_tube;

pub use counter_flow::CounterFlow;
pub use parallel_flow::ParallelFlow;
pub use shell_and_tube::ShellAndTube;
