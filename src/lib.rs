pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{
    cli::{LocalStorage, StdoutStorage},
    CliConfig, GeneratorKind,
};
pub use crate::core::{
    engine::GenEngine, selection::SelectionGenerator, successors::SuccessorGenerator,
    suite::SuiteRunner, tag_requests::TagRequestGenerator,
};
pub use domain::model::{Fact, Instance, InstanceStats, Term};
pub use domain::ports::{ConfigProvider, Generator, Storage};
pub use utils::error::{GenError, Result};
