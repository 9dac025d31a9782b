pub mod opportunities;
pub mod pages;
pub mod probes;
