//! The intro viewer: window, event loop, and dismissal.
//!
//! [`Intro`] is the batteries-included host for a [`ParticleField`]: it
//! opens a window, drives the field from the redraw callback, forwards
//! resizes to the renderer, and treats a click or Enter/Space/Escape as the
//! "user requested exit" signal. Dismissal disposes the field, drops the
//! GPU state, and ends the event loop; `run` then returns to the caller.
//!
//! # Example
//!
//! ```ignore
//! use morphfield::Intro;
//!
//! Intro::new().with_text("HI").run()?;
//! // The user has dismissed the overlay; show the rest of the app.
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Window, WindowId},
};

use crate::error::IntroError;
use crate::field::{FieldConfig, ParticleField};
use crate::render::GpuState;
use crate::time::Time;

/// Builder for the intro overlay.
///
/// Use method chaining to configure, then call `.run()` to block until the
/// user dismisses the intro.
pub struct Intro {
    config: FieldConfig,
}

impl Intro {
    /// An intro with the stock configuration.
    pub fn new() -> Self {
        Self {
            config: FieldConfig::new(),
        }
    }

    /// Set the text the field morphs into.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.config = self.config.with_text(text);
        self
    }

    /// Set the particle count.
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.config = self.config.with_count(count);
        self
    }

    /// Replace the whole field configuration.
    pub fn with_config(mut self, config: FieldConfig) -> Self {
        self.config = config;
        self
    }

    /// Open the window and run until dismissed.
    pub fn run(self) -> Result<(), IntroError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = IntroApp::new(ParticleField::new(self.config));
        event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for Intro {
    fn default() -> Self {
        Self::new()
    }
}

struct IntroApp {
    field: ParticleField,
    time: Time,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    error: Option<IntroError>,
}

impl IntroApp {
    fn new(field: ParticleField) -> Self {
        Self {
            field,
            time: Time::new(),
            window: None,
            gpu: None,
            error: None,
        }
    }

    /// The single exit signal: tear the field down, release the GPU, end
    /// the loop. Safe to hit more than once.
    fn dismiss(&mut self, event_loop: &ActiveEventLoop) {
        self.field.dispose();
        self.gpu = None;
        event_loop.exit();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: IntroError) {
        self.error = Some(error);
        event_loop.exit();
    }
}

impl ApplicationHandler for IntroApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title("morphfield")
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => return self.fail(event_loop, e.into()),
        };

        match pollster::block_on(GpuState::new(window.clone(), &self.field)) {
            Ok(gpu) => {
                self.gpu = Some(gpu);
                self.time.reset();
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => self.fail(event_loop, e.into()),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.dismiss(event_loop);
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                self.dismiss(event_loop);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    match event.logical_key {
                        Key::Named(NamedKey::Enter | NamedKey::Space | NamedKey::Escape) => {
                            self.dismiss(event_loop);
                        }
                        Key::Character(ref c) if c.as_str() == " " => {
                            self.dismiss(event_loop);
                        }
                        _ => {}
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                if self.field.is_disposed() {
                    return;
                }

                let (elapsed, dt) = self.time.update();
                self.field.tick(dt);

                if let Some(gpu) = &mut self.gpu {
                    match gpu.render(&self.field, elapsed) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            gpu.resize(winit::dpi::PhysicalSize {
                                width: gpu.config.width,
                                height: gpu.config.height,
                            })
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => eprintln!("Render error: {:?}", e),
                    }
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
