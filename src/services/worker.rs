//! Background worker that runs the show steps off the caller's thread.
//!
//! Backends are synchronous and may block on IPC, so each request runs on a
//! blocking task. Requests are handled one at a time, in submission order.

use crate::backend::NotificationId;
use crate::config::NotificationConfig;
use crate::error::NotificationError;
use crate::models::{Notification, NotificationOptions, NotificationRecord};
use crate::services::builder::NotificationBuilder;
use crate::services::context::ExecutionContext;
use crate::services::dispatch::{show_steps, Dispatcher};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

/// Commands that can be sent to the show worker.
#[derive(Debug)]
pub enum ShowCommand {
    /// Display a notification and report the identifier.
    Show {
        record: NotificationRecord,
        reply: oneshot::Sender<Option<NotificationId>>,
    },

    /// Stop the worker after pending requests.
    Stop,
}

/// Lightweight handle for submitting notifications to the worker.
#[derive(Clone)]
pub struct ShowHandle {
    command_tx: mpsc::Sender<ShowCommand>,
}

impl ShowHandle {
    /// Queue `record` for display.
    ///
    /// The returned receiver resolves once the backend has answered.
    pub async fn show(
        &self,
        record: NotificationRecord,
    ) -> Result<oneshot::Receiver<Option<NotificationId>>, NotificationError> {
        let (reply, rx) = oneshot::channel();
        self.command_tx
            .send(ShowCommand::Show { record, reply })
            .await
            .map_err(|_| NotificationError::WorkerUnavailable)?;
        Ok(rx)
    }

    /// Queue a constructed notification and wait for the result.
    pub async fn show_notification(
        &self,
        notification: &Notification,
    ) -> Result<Option<NotificationId>, NotificationError> {
        let rx = self.show(notification.record().clone()).await?;
        rx.await.map_err(|_| NotificationError::WorkerUnavailable)
    }

    /// Construct a notification and queue it for display.
    ///
    /// Construction errors are returned before anything is queued. On success
    /// the notification is handed back at once, and the receiver resolves when
    /// the backend has answered.
    pub async fn construct_and_show(
        &self,
        builder: &NotificationBuilder,
        title: &str,
        options: &NotificationOptions,
        context: &dyn ExecutionContext,
    ) -> Result<(Notification, oneshot::Receiver<Option<NotificationId>>), NotificationError> {
        let notification = builder.construct(title, options, context)?;
        let rx = self.show(notification.record().clone()).await?;
        Ok((notification, rx))
    }

    /// Stop the worker.
    pub async fn stop(&self) -> Result<(), NotificationError> {
        self.command_tx
            .send(ShowCommand::Stop)
            .await
            .map_err(|_| NotificationError::WorkerUnavailable)
    }

    pub fn is_running(&self) -> bool {
        !self.command_tx.is_closed()
    }
}

/// Runs notification show steps in the background.
pub struct ShowWorker;

impl ShowWorker {
    /// Spawn the worker on the current tokio runtime.
    pub fn start_background(dispatcher: Arc<Dispatcher>, config: &NotificationConfig) -> ShowHandle {
        let (tx, mut rx) = mpsc::channel::<ShowCommand>(config.queue_capacity.max(1));

        tokio::spawn(async move {
            log::debug!("[worker] Notification worker started");

            while let Some(cmd) = rx.recv().await {
                match cmd {
                    ShowCommand::Show { record, reply } => {
                        let dispatcher = dispatcher.clone();
                        let result =
                            tokio::task::spawn_blocking(move || show_steps(&dispatcher, &record))
                                .await;

                        let id = match result {
                            Ok(id) => id,
                            Err(e) => {
                                log::error!("[worker] Show steps failed: {}", e);
                                None
                            }
                        };

                        // The caller may have stopped waiting.
                        let _ = reply.send(id);
                    }
                    ShowCommand::Stop => {
                        log::info!("[worker] Notification worker stopping");
                        break;
                    }
                }
            }

            log::debug!("[worker] Notification worker stopped");
        });

        ShowHandle { command_tx: tx }
    }
}
