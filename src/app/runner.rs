//! Main application handler

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{error, info};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use super::config::AppConfig;
use super::demo::DemoFlow;
use super::error::AppError;
use super::input::TouchCollector;
use super::window::window_attributes_from_config;
use crate::gesture::{GestureManager, SingleTouchEvent};
use crate::overlay::OverlayScene;

/// Desktop host for the touch front end
///
/// Owns the window, feeds its events through the collector into the gesture
/// classifier, and drives the demo overlay from the resulting events.
pub struct App {
    config: AppConfig,
    window: Option<Window>,
    collector: TouchCollector,
    gestures: GestureManager,
    /// Events recorded by the gesture listener since the last iteration
    received: Rc<RefCell<Vec<SingleTouchEvent>>>,
    demo: Option<DemoFlow>,
}

impl App {
    /// Creates the application with the provided configuration
    pub fn new(config: AppConfig) -> Self {
        info!(profile = %config.profile, "Starting AR runner");
        info!(?config.window, ?config.input, "Configuration");

        let received = Rc::new(RefCell::new(Vec::new()));
        let mut gestures = GestureManager::new();
        let sink = Rc::clone(&received);
        gestures.subscribe(move |event: &SingleTouchEvent| sink.borrow_mut().push(*event));

        Self {
            collector: TouchCollector::new(&config.input),
            config,
            window: None,
            gestures,
            received,
            demo: None,
        }
    }

    /// Runs the event loop until the window is closed
    pub fn run(mut self) -> Result<(), AppError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Wait);
        event_loop.run_app(&mut self)?;
        Ok(())
    }

    fn drain_gestures(&mut self) {
        let events = std::mem::take(&mut *self.received.borrow_mut());
        let Some(demo) = &mut self.demo else {
            return;
        };
        for event in &events {
            info!(phase = ?event.phase, x = event.position[0], y = event.position[1], "Single touch");
            demo.handle(event);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = window_attributes_from_config(&self.config.window);
        match event_loop.create_window(window_attributes) {
            Ok(window) => {
                let scale_factor = window.scale_factor();
                let size = window.inner_size().to_logical::<f32>(scale_factor);
                info!(
                    window.width = size.width,
                    window.height = size.height,
                    scale_factor,
                    "Window created successfully"
                );

                self.collector.set_scale_factor(scale_factor as f32);
                self.demo = Some(DemoFlow::new(OverlayScene::new([size.width, size.height])));
                self.window = Some(window);
            }
            Err(e) => {
                error!(error = %e, "Failed to create window");
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        self.collector.dispatch(&mut self.gestures);
        self.drain_gestures();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Feed events to the collector first so it sees all raw input
        self.collector.handle_window_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, exiting");
                event_loop.exit();
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.collector.set_scale_factor(scale_factor as f32);
            }
            _ => {}
        }
    }
}
