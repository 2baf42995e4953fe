pub mod context;
pub mod form;
pub mod resource;
