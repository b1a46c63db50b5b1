pub mod convert_ops;
pub mod data_ops;
pub mod explain_ops;
