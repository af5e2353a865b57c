pub mod check;
pub mod compile;
pub mod graph;
pub mod input;
pub mod scan;
