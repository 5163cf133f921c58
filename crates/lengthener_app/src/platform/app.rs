use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use anyhow::Context;
use crossterm::event::{self, Event, KeyEventKind};
use engine_logging::engine_info;
use lengthener_core::{AppViewModel, Msg, RequestController};
use lengthener_engine::{ApiSettings, EngineHandle};
use ratatui::DefaultTerminal;

use super::effects::EffectRunner;
use super::input::{translate_key, KeyAction};
use super::{logging, ui};

/// How long the loop waits for terminal input before draining engine events.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize();

    let settings = ApiSettings::from_env().context("reading API settings")?;
    let engine = EngineHandle::new(&settings).context("starting engine")?;
    let mut app = App::new(EffectRunner::new(engine));

    let mut terminal = ratatui::try_init().context("initializing terminal")?;
    let outcome = app.run(&mut terminal);
    ratatui::restore();

    app.close();
    engine_info!("Lengthener closed");
    outcome
}

struct App {
    controller: RequestController,
    runner: EffectRunner,
    /// Latest view published by the controller and not yet drawn.
    next_view: Rc<RefCell<Option<AppViewModel>>>,
    should_quit: bool,
}

impl App {
    fn new(runner: EffectRunner) -> Self {
        let mut controller = RequestController::new();
        let next_view = Rc::new(RefCell::new(Some(controller.view())));
        let sink = next_view.clone();
        controller.subscribe(move |view: &AppViewModel| {
            *sink.borrow_mut() = Some(view.clone());
        });

        Self {
            controller,
            runner,
            next_view,
            should_quit: false,
        }
    }

    fn run(&mut self, terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
        while !self.should_quit {
            let next_view = self.next_view.borrow_mut().take();
            if let Some(view) = next_view {
                terminal.draw(|frame| ui::render::render(frame, &view))?;
            }

            if event::poll(POLL_INTERVAL)? {
                self.handle_terminal_event(event::read()?);
            }

            for msg in self.runner.drain_events() {
                self.dispatch(msg);
            }
        }
        Ok(())
    }

    fn handle_terminal_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let view = self.controller.view();
                match translate_key(key, &view) {
                    KeyAction::Dispatch(msg) => self.dispatch(msg),
                    KeyAction::Quit => self.should_quit = true,
                    KeyAction::Ignore => {}
                }
            }
            Event::Resize(..) => {
                *self.next_view.borrow_mut() = Some(self.controller.view());
            }
            _ => {}
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let effects = self.controller.dispatch(msg);
        self.runner.enqueue(effects);
    }

    fn close(&mut self) {
        self.dispatch(Msg::ViewClosed);
        self.runner.shutdown();
    }
}
