pub mod route_rule;

pub use route_rule::*;
