pub mod operation;

pub use operation::Operation;
