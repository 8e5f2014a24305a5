// Single-threaded dispatch: one event in, handled to completion, then the next.
// The only state kept between events is the renderer's transform, the last
// look point and the debounce timestamp.

use crate::config::Config;
use crate::error::Error;
use crate::event::{Debounce, Event, EventSource, KeyCode, PointerAction, Stage};
use crate::geometry::{IPoint, Point};
use crate::mascot::Mascot;
use crate::render::Renderer;
use crate::types::FrameBuffer;
use std::time::Instant;

/// What the loop should do after an event.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// The canvas holds a new frame.
    Present,
    Exit,
}

/// A window: delivers events and shows frames.
pub trait Window: EventSource {
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Error>;
}

pub struct App {
    renderer: Renderer,
    config: Config,
    debounce: Debounce,
    canvas: FrameBuffer,
    look: Option<Point>,
}

impl App {
    pub fn new(mascot: Mascot, config: Config) -> Self {
        Self {
            renderer: Renderer::new(mascot, &config),
            debounce: Debounce::new(config.update_interval),
            config,
            canvas: FrameBuffer::new(0, 0),
            look: None,
        }
    }

    pub fn canvas(&self) -> &FrameBuffer {
        &self.canvas
    }

    #[cfg(test)]
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Last accepted pointer position, in window pixels.
    #[cfg(test)]
    pub fn look(&self) -> Option<Point> {
        self.look
    }

    pub fn handle(&mut self, event: Event, now: Instant) -> Flow {
        match event {
            Event::Resize { width: 0, height: 0 } => {
                log::info!("window closed (zero size)");
                Flow::Exit
            }
            Event::Resize { width, height } => {
                self.canvas.resize(width, height);
                self.renderer.resize(IPoint::new(width as i32, height as i32));
                self.redraw()
            }
            Event::Paint => self.redraw(),
            Event::Pointer { pos, button, action } => {
                let released = button.is_some() && action == PointerAction::Release;
                if !(self.config.follow || released) || !self.debounce.ready(now) {
                    return Flow::Continue;
                }
                self.look = Some(pos);
                self.redraw()
            }
            Event::Key(KeyCode::Escape) => {
                log::info!("escape pressed");
                Flow::Exit
            }
            Event::Key(_) => Flow::Continue,
            Event::Lifecycle(Stage::Dead) => {
                log::info!("window lifecycle ended");
                Flow::Exit
            }
            Event::Lifecycle(stage) => {
                log::debug!("lifecycle {stage:?}");
                Flow::Continue
            }
            Event::Error(msg) => {
                log::warn!("event stream: {msg}");
                Flow::Continue
            }
        }
    }

    fn redraw(&mut self) -> Flow {
        if self.renderer.transform().is_none() {
            return Flow::Continue;
        }
        self.renderer.draw(&mut self.canvas, self.look);
        Flow::Present
    }
}

/// Pump events from `window` into `app` until it asks to exit or the window
/// runs dry. Presenting failures end the loop.
pub fn run<W: Window>(app: &mut App, window: &mut W) -> Result<(), Error> {
    while let Some(event) = window.next_event() {
        match app.handle(event, Instant::now()) {
            Flow::Continue => {}
            Flow::Present => window.present(app.canvas())?,
            Flow::Exit => return Ok(()),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Button, QueueSource};
    use crate::mascot::{EyeSpec, BLACK, WHITE};
    use crate::shape::Circle;
    use image::{Rgba, RgbaImage};
    use std::time::Duration;

    fn mascot() -> Mascot {
        let eye = EyeSpec {
            background: Circle::new(IPoint::new(50, 50), 20, WHITE),
            pupil: Circle::new(IPoint::new(50, 50), 6, BLACK),
            glare: Circle::new(IPoint::new(8, 4), 2, WHITE),
            pupil_ellipse_ratio: Point::new(0.9, 1.0),
        };
        let sprite = RgbaImage::from_pixel(100, 100, Rgba([90, 160, 220, 255]));
        Mascot::new(sprite, &[eye], &Config::default()).unwrap()
    }

    fn app(config: Config) -> App {
        App::new(mascot(), config)
    }

    fn moved(x: f64, y: f64) -> Event {
        Event::Pointer { pos: Point::new(x, y), button: None, action: PointerAction::Move }
    }

    fn released(x: f64, y: f64) -> Event {
        Event::Pointer { pos: Point::new(x, y), button: Some(Button::Left), action: PointerAction::Release }
    }

    fn resize(w: usize, h: usize) -> Event {
        Event::Resize { width: w, height: h }
    }

    struct FakeWindow {
        events: QueueSource,
        frames: usize,
        fail: bool,
    }

    impl EventSource for FakeWindow {
        fn next_event(&mut self) -> Option<Event> {
            self.events.next_event()
        }
    }

    impl Window for FakeWindow {
        fn present(&mut self, _frame: &FrameBuffer) -> Result<(), Error> {
            if self.fail {
                return Err(Error::WindowUpdate("gone".into()));
            }
            self.frames += 1;
            Ok(())
        }
    }

    #[test]
    fn resize_draws_immediately() {
        let mut a = app(Config::default());
        assert_eq!(a.handle(resize(200, 100), Instant::now()), Flow::Present);
        assert_eq!((a.canvas().width, a.canvas().height), (200, 100));
        let t = a.renderer().transform().unwrap();
        assert_eq!(t.ratio, 1.0);
        assert_eq!(t.offset, Point::new(50.0, 0.0));
    }

    #[test]
    fn zero_size_exits() {
        let mut a = app(Config::default());
        assert_eq!(a.handle(resize(0, 0), Instant::now()), Flow::Exit);
    }

    #[test]
    fn nothing_to_draw_before_resize() {
        let mut a = app(Config::default());
        assert_eq!(a.handle(Event::Paint, Instant::now()), Flow::Continue);
        assert_eq!(a.handle(moved(3.0, 4.0), Instant::now()), Flow::Continue);
    }

    #[test]
    fn pointer_moves_are_debounced() {
        let t0 = Instant::now();
        let mut a = app(Config::default());
        a.handle(resize(100, 100), t0);
        assert_eq!(a.handle(moved(10.0, 10.0), t0), Flow::Present);
        assert_eq!(a.handle(moved(20.0, 20.0), t0 + Duration::from_millis(20)), Flow::Continue);
        assert_eq!(a.look(), Some(Point::new(10.0, 10.0)));
        assert_eq!(a.handle(moved(30.0, 30.0), t0 + Duration::from_millis(60)), Flow::Present);
        assert_eq!(a.look(), Some(Point::new(30.0, 30.0)));
    }

    #[test]
    fn resize_and_paint_ignore_debounce() {
        let t0 = Instant::now();
        let mut a = app(Config::default());
        a.handle(resize(100, 100), t0);
        a.handle(moved(10.0, 10.0), t0);
        assert_eq!(a.handle(resize(120, 100), t0), Flow::Present);
        assert_eq!(a.handle(Event::Paint, t0), Flow::Present);
        // the look point survives the resize
        assert_eq!(a.look(), Some(Point::new(10.0, 10.0)));
    }

    #[test]
    fn without_follow_only_button_release_looks() {
        let t0 = Instant::now();
        let mut a = app(Config { follow: false, ..Config::default() });
        a.handle(resize(100, 100), t0);
        assert_eq!(a.handle(moved(10.0, 10.0), t0), Flow::Continue);
        let press = Event::Pointer {
            pos: Point::new(5.0, 5.0),
            button: Some(Button::Left),
            action: PointerAction::Press,
        };
        assert_eq!(a.handle(press, t0), Flow::Continue);
        assert_eq!(a.look(), None);
        assert_eq!(a.handle(released(90.0, 80.0), t0), Flow::Present);
        assert_eq!(a.look(), Some(Point::new(90.0, 80.0)));
    }

    #[test]
    fn exits_on_escape_and_dead_lifecycle() {
        let mut a = app(Config::default());
        assert_eq!(a.handle(Event::Key(KeyCode::Other), Instant::now()), Flow::Continue);
        assert_eq!(a.handle(Event::Lifecycle(Stage::Visible), Instant::now()), Flow::Continue);
        assert_eq!(a.handle(Event::Key(KeyCode::Escape), Instant::now()), Flow::Exit);
        assert_eq!(a.handle(Event::Lifecycle(Stage::Dead), Instant::now()), Flow::Exit);
    }

    #[test]
    fn stream_errors_are_not_fatal() {
        let mut a = app(Config::default());
        assert_eq!(a.handle(Event::Error("bad read".into()), Instant::now()), Flow::Continue);
    }

    #[test]
    fn run_presents_until_exit() {
        let mut a = app(Config { update_interval: Duration::ZERO, ..Config::default() });
        let mut w = FakeWindow {
            events: QueueSource::new([
                Event::Lifecycle(Stage::Visible),
                resize(100, 100),
                moved(50.0, 50.0),
                Event::Key(KeyCode::Escape),
                Event::Paint,
            ]),
            frames: 0,
            fail: false,
        };
        run(&mut a, &mut w).unwrap();
        assert_eq!(w.frames, 2);
        // the paint after escape was never handled
        assert_eq!(w.events.next_event(), Some(Event::Paint));
    }

    #[test]
    fn present_failure_is_fatal() {
        let mut a = app(Config::default());
        let mut w = FakeWindow {
            events: QueueSource::new([resize(100, 100), Event::Paint]),
            frames: 0,
            fail: true,
        };
        assert!(matches!(run(&mut a, &mut w), Err(Error::WindowUpdate(_))));
    }
}
