use log::{debug, info};
use sdl2::event::Event;
use sdl2::rect::{Point, Rect};
use sdl2::render::Canvas;
use sdl2::video::Window;
use sdl2::EventPump;

use crate::error::ShellError;
use crate::geometry::raster::convex_spans;
use crate::geometry::{Primitive, Rgb, Viewport, WorldBounds};
use crate::input::{InputAction, InputHandler};

use super::{ShellConfig, WindowShell};

/// SDL2 window with an accelerated canvas.
pub struct SdlShell {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    input: InputHandler,
    viewport: Viewport,
    _sdl_context: sdl2::Sdl,
}

impl SdlShell {
    pub fn open(config: &ShellConfig) -> Result<Self, ShellError> {
        let sdl_context = sdl2::init().map_err(ShellError::Init)?;
        let video_subsystem = sdl_context.video().map_err(ShellError::Init)?;

        let window = video_subsystem
            .window(&config.title, config.width, config.height)
            .position_centered()
            .build()
            .map_err(|e| ShellError::Window(e.to_string()))?;

        let mut builder = window.into_canvas().accelerated();
        if config.vsync {
            builder = builder.present_vsync();
        }
        let canvas = builder
            .build()
            .map_err(|e| ShellError::Window(e.to_string()))?;

        let event_pump = sdl_context.event_pump().map_err(ShellError::Init)?;

        info!(
            "opened '{}' at {}x{} (vsync: {})",
            config.title, config.width, config.height, config.vsync
        );

        Ok(SdlShell {
            canvas,
            event_pump,
            input: InputHandler::new(),
            viewport: Viewport::new(WorldBounds::default(), config.width, config.height),
            _sdl_context: sdl_context,
        })
    }

    fn fill(&mut self, primitive: &Primitive) -> Result<(), ShellError> {
        self.canvas.set_draw_color(primitive.color());
        match primitive {
            Primitive::Rect { min, max, .. } => {
                let rect: Rect = self.viewport.to_pixel_rect(*min, *max).into();
                self.canvas.fill_rect(rect).map_err(ShellError::Render)
            }
            Primitive::Disc { .. } => {
                let polygon = self.viewport.to_pixel_polygon(&primitive.outline());
                for span in convex_spans(&polygon) {
                    self.canvas
                        .draw_line(
                            Point::new(span.x_start, span.y),
                            Point::new(span.x_end, span.y),
                        )
                        .map_err(ShellError::Render)?;
                }
                Ok(())
            }
        }
    }
}

impl WindowShell for SdlShell {
    fn poll_input(&mut self) {
        for event in self.event_pump.poll_iter() {
            if self.input.process_event(&event) == InputAction::Quit {
                match event {
                    Event::Quit { .. } => debug!("window close requested"),
                    _ => debug!("quit key pressed"),
                }
            }
        }
    }

    fn should_quit(&self) -> bool {
        self.input.should_quit()
    }

    fn render(&mut self, background: Rgb, primitives: &[Primitive]) -> Result<(), ShellError> {
        self.canvas.set_draw_color(background);
        self.canvas.clear();

        for primitive in primitives {
            self.fill(primitive)?;
        }
        Ok(())
    }

    fn present(&mut self) {
        self.canvas.present();
    }
}
