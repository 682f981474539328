// Domain layer: quote records, report shapes and the ports (interfaces) the batch layer plugs into.

pub mod model;
pub mod ports;
pub mod report;
