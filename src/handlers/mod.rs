pub mod instances;
pub mod system;
