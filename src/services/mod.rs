//! Notification creation and dispatch.
//!
//! Building a record is pure and synchronous. Displaying it goes through the
//! dispatch facade, either directly or via the background show worker.

pub mod builder;
pub mod context;
pub mod dispatch;
pub mod serializer;
pub mod url_resolver;
pub mod worker;

pub use builder::NotificationBuilder;
pub use context::{DocumentContext, ExecutionContext, GlobalScope};
pub use dispatch::{notify, show_steps, Dispatcher};
pub use serializer::{JsonStorageSerializer, StorageSerializer};
pub use worker::{ShowHandle, ShowWorker};
