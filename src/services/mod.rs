// linkboard services
// Import/export reconciliation and input normalization.

pub mod exporter;
pub mod importer;
pub mod urls;
