pub mod engine;
pub mod selection;
pub mod successors;
pub mod suite;
pub mod tag_requests;

pub use crate::domain::model::{Fact, Instance, InstanceStats, Term};
pub use crate::domain::ports::{ConfigProvider, Generator, Storage};
pub use crate::utils::error::Result;
