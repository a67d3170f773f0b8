pub mod badges;
pub mod engine;
pub mod generator;
pub mod sections;

pub use crate::domain::model::{Section, TechCategory};
pub use crate::domain::ports::{Prompter, Storage};
pub use crate::utils::error::Result;
