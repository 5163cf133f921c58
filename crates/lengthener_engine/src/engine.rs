use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use engine_logging::{engine_debug, engine_error, engine_info};
use tokio::task::JoinHandle;

use crate::{
    AckId, ApiSettings, Clipboard, ClipboardError, EngineError, EngineEvent, LengthenApi,
    ReqwestLengthenApi, RequestId, SystemClipboard,
};

enum EngineCommand {
    Lengthen { request_id: RequestId, url: String },
    Copy { request_id: RequestId, text: String },
    ScheduleCopyReset { ack_id: AckId, after: Duration },
    CancelCopyReset,
    Shutdown,
}

/// Handle to the engine worker thread.
///
/// Commands are queued without blocking; results come back as `EngineEvent`s
/// that the UI loop drains with `try_recv`. Dropping the handle stops the
/// worker and aborts any pending copy-reset timer.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
    worker: Option<thread::JoinHandle<()>>,
}

impl EngineHandle {
    pub fn new(settings: &ApiSettings) -> Result<Self, EngineError> {
        let api = ReqwestLengthenApi::new(settings)?;
        engine_info!("Lengthen endpoint: {}", api.endpoint());
        Ok(Self::with_services(
            Arc::new(api),
            Arc::new(SystemClipboard::new()),
        ))
    }

    pub fn with_services(api: Arc<dyn LengthenApi>, clipboard: Arc<dyn Clipboard>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        let worker = thread::spawn(move || run_worker(cmd_rx, event_tx, api, clipboard));

        Self {
            cmd_tx,
            event_rx,
            worker: Some(worker),
        }
    }

    pub fn lengthen(&self, request_id: RequestId, url: impl Into<String>) {
        self.send(EngineCommand::Lengthen {
            request_id,
            url: url.into(),
        });
    }

    /// Writes `text` to the clipboard; the completion event carries `request_id`.
    pub fn copy(&self, request_id: RequestId, text: impl Into<String>) {
        self.send(EngineCommand::Copy {
            request_id,
            text: text.into(),
        });
    }

    /// Fires `CopyResetElapsed { ack_id }` after `after`, replacing any pending reset.
    pub fn schedule_copy_reset(&self, ack_id: AckId, after: Duration) {
        self.send(EngineCommand::ScheduleCopyReset { ack_id, after });
    }

    pub fn cancel_copy_reset(&self) {
        self.send(EngineCommand::CancelCopyReset);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    /// Stops the worker after it has processed every queued command.
    pub fn shutdown(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };
        let _ = self.cmd_tx.send(EngineCommand::Shutdown);
        if worker.join().is_err() {
            engine_error!("Engine worker panicked");
        }
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            engine_error!("Engine worker is gone; command dropped");
        }
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run_worker(
    cmd_rx: mpsc::Receiver<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
    api: Arc<dyn LengthenApi>,
    clipboard: Arc<dyn Clipboard>,
) {
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            engine_error!("Failed to start engine runtime: {}", err);
            return;
        }
    };

    let mut reset_timer: Option<JoinHandle<()>> = None;

    while let Ok(command) = cmd_rx.recv() {
        match command {
            EngineCommand::Lengthen { request_id, url } => {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let result = api.lengthen(&url).await;
                    match &result {
                        Ok(lengthened) => engine_info!(
                            "Request {} succeeded (len={})",
                            request_id,
                            lengthened.len()
                        ),
                        Err(err) => engine_info!("Request {} failed: {}", request_id, err),
                    }
                    let _ = event_tx.send(EngineEvent::LengthenCompleted { request_id, result });
                });
            }
            EngineCommand::Copy { request_id, text } => {
                let clipboard = clipboard.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let result = tokio::task::spawn_blocking(move || clipboard.write_text(&text))
                        .await
                        .unwrap_or_else(|err| Err(ClipboardError::Unavailable(err.to_string())));
                    let _ = event_tx.send(EngineEvent::CopyCompleted { request_id, result });
                });
            }
            EngineCommand::ScheduleCopyReset { ack_id, after } => {
                if let Some(previous) = reset_timer.take() {
                    previous.abort();
                }
                engine_debug!("Copy reset {} scheduled in {:?}", ack_id, after);
                let event_tx = event_tx.clone();
                reset_timer = Some(runtime.spawn(async move {
                    tokio::time::sleep(after).await;
                    let _ = event_tx.send(EngineEvent::CopyResetElapsed { ack_id });
                }));
            }
            EngineCommand::CancelCopyReset => {
                if let Some(timer) = reset_timer.take() {
                    engine_debug!("Copy reset cancelled");
                    timer.abort();
                }
            }
            EngineCommand::Shutdown => break,
        }
    }

    if let Some(timer) = reset_timer.take() {
        timer.abort();
    }
    runtime.shutdown_background();
}
