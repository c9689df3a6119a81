pub mod avalanche;
pub mod factors;
pub mod report;
pub mod tier;
