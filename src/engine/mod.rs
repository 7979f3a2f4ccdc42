pub mod canvas;
pub mod core;
pub mod renderer;

use std::sync::Arc;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use self::canvas::Canvas;
use self::core::{EngineConfig, FrameClock};
use self::renderer::Renderer;
use wgpu::SurfaceError;
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

use crate::game::Game;

pub struct EngineApp {
    config: EngineConfig,
    game: Box<dyn Game>,
}

impl EngineApp {
    pub fn new(config: EngineConfig, game: impl Game + 'static) -> Self {
        Self {
            game: Box::new(game),
            config,
        }
    }

    /// Opens the window and runs the frame loop until the window is closed or
    /// Escape is pressed. Errors are only returned for startup failures.
    pub fn run(self) -> Result<()> {
        tracing::info!(
            target: "engine",
            app = %self.config.app_name,
            game = %self.game.name(),
            "Engine starting"
        );

        let event_loop = EventLoop::new().context("failed to create event loop")?;
        let mut engine = self;
        let window_prefs = engine.game.window_descriptor();
        let width = window_prefs.width.unwrap_or(engine.config.window_width);
        let height = window_prefs.height.unwrap_or(engine.config.window_height);
        let title = window_prefs
            .title
            .clone()
            .unwrap_or_else(|| engine.config.app_name.clone());

        let window = Arc::new(
            WindowBuilder::new()
                .with_title(title)
                .with_resizable(window_prefs.resizable)
                .with_inner_size(LogicalSize::new(width as f64, height as f64))
                .build(&event_loop)
                .context("failed to create window")?,
        );
        let mut renderer = pollster::block_on(Renderer::new(window.clone(), width, height))
            .context("failed to initialize renderer")?;
        tracing::info!(target: "engine", width, height, "renderer initialized");

        let mut canvas = Canvas::new(width, height);
        let mut clock = FrameClock::new(engine.config.frame_delay(), Instant::now());

        event_loop
            .run(move |event, target| match event {
                Event::AboutToWait => {
                    if clock.is_due(Instant::now()) {
                        window.request_redraw();
                    }
                    target.set_control_flow(ControlFlow::WaitUntil(clock.deadline()));
                }
                Event::WindowEvent { window_id, event } if window_id == window.id() => {
                    match event {
                        WindowEvent::CloseRequested
                        | WindowEvent::KeyboardInput {
                            event:
                                KeyEvent {
                                    state: ElementState::Pressed,
                                    physical_key: PhysicalKey::Code(KeyCode::Escape),
                                    ..
                                },
                            ..
                        } => {
                            tracing::info!(target: "engine", "quit requested");
                            target.exit();
                        }
                        WindowEvent::Resized(size) => {
                            renderer.resize(size);
                        }
                        WindowEvent::ScaleFactorChanged {
                            mut inner_size_writer,
                            ..
                        } => {
                            let new_size = window.inner_size();
                            let _ = inner_size_writer.request_inner_size(new_size);
                            renderer.resize(new_size);
                        }
                        WindowEvent::RedrawRequested => {
                            engine.game.frame(&mut canvas);
                            match renderer.present(&canvas) {
                                Ok(()) => {}
                                Err(SurfaceError::Lost | SurfaceError::Outdated) => {
                                    renderer.resize(window.inner_size());
                                }
                                Err(SurfaceError::OutOfMemory) => {
                                    tracing::error!("GPU out of memory, shutting down engine");
                                    target.exit();
                                }
                                Err(SurfaceError::Timeout) => {
                                    tracing::warn!("surface timeout, retrying next frame");
                                }
                            }
                            clock.frame_finished(Instant::now());
                        }
                        _ => {}
                    }
                }
                _ => {}
            })
            .map_err(|err| anyhow!(err))?;

        tracing::info!(target: "engine", "Engine shutdown complete");
        Ok(())
    }
}
