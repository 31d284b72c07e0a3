pub mod batch;
pub mod config;
pub mod dispatcher;
pub mod domain;
pub mod error;
pub mod hooks;
pub mod manifest;
pub mod ui;

pub use batch::{BatchReport, FileMapping, FileOutcome};
pub use dispatcher::{Dispatcher, WriteOptions};
pub use domain::{BumpPart, Operation, OperationRequest, Phase};
pub use error::{ManifestSemverError, Result};
pub use hooks::{EventListener, EventNotifier, VersionEvent};
