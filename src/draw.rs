// Window backend.
// minifb only offers polled state, so `Drawer` polls once per tick and turns
// whatever changed (size, pointer, buttons, keys, open/closed) into events.

use crate::app;
use crate::error::Error;
use crate::event::{Button, Event, EventSource, KeyCode, PointerAction, QueueSource, Stage};
use crate::geometry::Point;
use crate::types::FrameBuffer;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, ScaleMode, Window, WindowOptions};

/// Poll rate while idle; `update()` sleeps to honour it.
const TARGET_FPS: usize = 60;

const BUTTONS: [(MouseButton, Button); 3] = [
    (MouseButton::Left, Button::Left),
    (MouseButton::Middle, Button::Middle),
    (MouseButton::Right, Button::Right),
];

pub struct Drawer {
    window: Window,
    queue: QueueSource,
    size: Option<(usize, usize)>,
    mouse: Option<(f32, f32)>,
    buttons: [bool; 3],
    active: bool,
    closed: bool,
}

impl Drawer {
    /// Open a resizable window.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let options = WindowOptions {
            resize: true,
            scale_mode: ScaleMode::UpperLeft,
            ..WindowOptions::default()
        };
        let mut window = Window::new(title, width, height, options)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(TARGET_FPS);

        Ok(Self {
            window,
            queue: QueueSource::new([Event::Lifecycle(Stage::Visible)]),
            size: None,
            mouse: None,
            buttons: [false; 3],
            active: false,
            closed: false,
        })
    }

    /// Pump the window once and queue every change since the last poll.
    fn poll(&mut self) {
        self.window.update();

        if !self.window.is_open() {
            self.closed = true;
            self.queue.push(Event::Lifecycle(Stage::Dead));
            return;
        }

        let active = self.window.is_active();
        if active && !self.active {
            self.queue.push(Event::Lifecycle(Stage::Focused));
            self.queue.push(Event::Paint);
        }
        self.active = active;

        let size = self.window.get_size();
        if self.size != Some(size) {
            self.size = Some(size);
            self.queue.push(Event::Resize { width: size.0, height: size.1 });
        }

        let mouse = self.window.get_mouse_pos(MouseMode::Pass);
        if let Some((x, y)) = mouse {
            if self.mouse != mouse {
                self.queue.push(Event::Pointer {
                    pos: Point::new(x as f64, y as f64),
                    button: None,
                    action: PointerAction::Move,
                });
            }
        }
        self.mouse = mouse.or(self.mouse);

        for (i, (mb, button)) in BUTTONS.into_iter().enumerate() {
            let down = self.window.get_mouse_down(mb);
            if down == self.buttons[i] {
                continue;
            }
            self.buttons[i] = down;
            let Some((x, y)) = self.mouse else { continue };
            self.queue.push(Event::Pointer {
                pos: Point::new(x as f64, y as f64),
                button: Some(button),
                action: if down { PointerAction::Press } else { PointerAction::Release },
            });
        }

        for key in self.window.get_keys_pressed(KeyRepeat::No) {
            let code = match key {
                Key::Escape => KeyCode::Escape,
                _ => KeyCode::Other,
            };
            self.queue.push(Event::Key(code));
        }
    }
}

impl EventSource for Drawer {
    /// Blocks (one poll per frame tick) until something happens.
    fn next_event(&mut self) -> Option<Event> {
        loop {
            if let Some(event) = self.queue.next_event() {
                return Some(event);
            }
            if self.closed {
                return None;
            }
            self.poll();
        }
    }
}

impl app::Window for Drawer {
    /// Push the pixels for this frame to the screen.
    /// Visual: the window immediately shows the new frame.
    fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        if framebuffer.width == 0 || framebuffer.height == 0 {
            return Ok(());
        }
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }
}
