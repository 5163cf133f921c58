use engine_logging::{engine_debug, engine_info, engine_warn};
use lengthener_core::{Effect, Msg, SubmitFailure};
use lengthener_engine::{ApiError, EngineEvent, EngineHandle, FailureKind};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Lengthen { request_id, url } => {
                    engine_info!("Lengthen request_id={} url_len={}", request_id, url.len());
                    engine_debug!("Lengthen request_id={} url={}", request_id, url);
                    self.engine.lengthen(request_id, url);
                }
                Effect::CopyToClipboard { request_id, text } => {
                    self.engine.copy(request_id, text)
                }
                Effect::ScheduleCopyReset { ack_id, after } => {
                    self.engine.schedule_copy_reset(ack_id, after)
                }
                Effect::CancelCopyReset => self.engine.cancel_copy_reset(),
                Effect::OpenExternal { url } => {
                    if let Err(err) = open::that_detached(&url) {
                        engine_warn!("Failed to open {} in a browser: {}", url, err);
                    }
                }
            }
        }
    }

    pub fn drain_events(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            inbox.push(map_event(event));
        }
        inbox
    }

    pub fn shutdown(&mut self) {
        self.engine.shutdown();
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::LengthenCompleted { request_id, result } => Msg::LengthenFinished {
            request_id,
            outcome: result.map_err(map_api_error),
        },
        EngineEvent::CopyCompleted { request_id, result } => Msg::CopyFinished {
            request_id,
            result: result.map_err(|err| err.to_string()),
        },
        EngineEvent::CopyResetElapsed { ack_id } => Msg::CopyResetElapsed { ack_id },
    }
}

fn map_api_error(err: ApiError) -> SubmitFailure {
    match err.kind {
        FailureKind::HttpStatus(status) => SubmitFailure::Service { status },
        FailureKind::Timeout | FailureKind::InvalidBody | FailureKind::Network => {
            SubmitFailure::Transport {
                message: Some(err.message).filter(|message| !message.trim().is_empty()),
            }
        }
    }
}
