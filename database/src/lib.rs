pub mod consts;
pub mod error;
pub mod model;
pub mod persistence;
pub mod validation;
