pub mod convert_ops;
pub mod rules_ops;
