pub mod engine;

pub use engine::BackOffice;
