// Domain layer: core models, catalogs, pricing rules and ports. No I/O here.

pub mod catalog;
pub mod model;
pub mod ports;
pub mod rules;
