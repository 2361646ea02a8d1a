//! Small pure helpers shared by the metrics and assistant layers

pub mod format;
