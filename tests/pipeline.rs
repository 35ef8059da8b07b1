use std::f64::consts::PI;
use std::sync::{Arc, Mutex};

use ili9341::{color::named::*, fonts::FONT_5X7, Canvas, Config, Display, Transport, WidthType};

/// Controller memory as the panel would hold it, fed by address window plus pixel stream.
#[derive(Clone)]
struct Panel {
    width: usize,
    memory: Arc<Mutex<Vec<u8>>>,
    window: (usize, usize, usize, usize),
    cursor: usize,
    windows: Arc<Mutex<usize>>,
}

impl Panel {
    fn new(width: usize, height: usize) -> Panel {
        Panel {
            width,
            memory: Arc::new(Mutex::new(vec![0; width * height * 2])),
            window: (0, 0, 0, 0),
            cursor: 0,
            windows: Arc::new(Mutex::new(0)),
        }
    }

    fn pixel(&self, x: usize, y: usize) -> [u8; 2] {
        let memory = self.memory.lock().unwrap();
        let offset = (y * self.width + x) * 2;
        [memory[offset], memory[offset + 1]]
    }
}

impl Transport for Panel {
    type Error = String;

    fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), String> {
        if x1 < x0 || y1 < y0 {
            return Err(format!("empty window {},{} {},{}", x0, y0, x1, y1));
        }
        self.window = (x0 as usize, y0 as usize, x1 as usize, y1 as usize);
        self.cursor = 0;
        *self.windows.lock().unwrap() += 1;
        Ok(())
    }

    fn stream(&mut self, bytes: &[u8]) -> Result<(), String> {
        let (x0, y0, x1, y1) = self.window;
        let columns = x1 - x0 + 1;
        if self.cursor + bytes.len() / 2 > columns * (y1 - y0 + 1) {
            return Err("stream overruns the window".to_string());
        }
        let mut memory = self.memory.lock().unwrap();
        for pair in bytes.chunks(2) {
            let x = x0 + self.cursor % columns;
            let y = y0 + self.cursor / columns;
            let offset = (y * self.width + x) * 2;
            memory[offset..offset + 2].copy_from_slice(pair);
            self.cursor += 1;
        }
        Ok(())
    }
}

fn assert_panel_matches(display: &Display<Panel>, panel: &Panel) {
    let config = display.config();
    for y in 0..config.height as usize {
        for x in 0..config.width as usize {
            let expected = display.pixel(x as i32, y as i32).unwrap().to_be_bytes();
            assert_eq!(panel.pixel(x, y), expected, "pixel {},{}", x, y);
        }
    }
}

#[test_log::test]
fn drawing_reaches_the_panel() {
    // 100x70 with 32x24 tiles leaves ragged tiles on the right and bottom
    let panel = Panel::new(100, 70);
    let display = Display::new(panel.clone(), Config::new(100, 70)).unwrap();

    let mut canvas = Canvas::new(&display);
    canvas.clear();
    canvas.set_color(ORANGE);
    canvas.thick_circle(50.0, 35.0, 20.0, 3, WidthType::Center);
    canvas.set_color(CYAN);
    canvas.arc(50.0, 35.0, 30.0, 1.5 * PI, 0.5 * PI);
    canvas.line(-10.0, 0.0, 120.0, 69.0);
    canvas.set_font(&FONT_5X7).unwrap();
    canvas.move_cursor(2, 10);
    canvas.write("Tiles!").unwrap();

    display.flush().unwrap();
    assert_panel_matches(&display, &panel);
    assert_eq!(*panel.windows.lock().unwrap(), 12);
}

#[test_log::test]
fn second_frame_sends_only_what_changed() {
    let panel = Panel::new(64, 48);
    let display = Display::new(panel.clone(), Config::new(64, 48)).unwrap();
    display.flush().unwrap();
    *panel.windows.lock().unwrap() = 0;

    let mut canvas = Canvas::new(&display);
    canvas.set_color(RED);
    canvas.fill_rectangle(40.0, 30.0, 45.0, 33.0);
    display.flush().unwrap();

    assert_eq!(*panel.windows.lock().unwrap(), 1);
    assert_panel_matches(&display, &panel);

    // text measured first, then drawn inside the bottom left tile
    canvas.set_font(&FONT_5X7).unwrap();
    let area = canvas.get_text_area("ok").unwrap().unwrap();
    canvas.move_cursor(1, 24 - area.y1 + 1);
    canvas.write("ok").unwrap();
    display.flush().unwrap();

    assert_eq!(*panel.windows.lock().unwrap(), 2);
    assert_panel_matches(&display, &panel);
}

#[test_log::test]
fn overwriting_with_the_same_color_sends_nothing() {
    let panel = Panel::new(64, 48);
    let display = Display::new(panel.clone(), Config::new(64, 48)).unwrap();
    display.flush().unwrap();
    *panel.windows.lock().unwrap() = 0;

    let mut canvas = Canvas::new(&display);
    canvas.set_color(BLACK);
    canvas.fill_rectangle(0.0, 0.0, 63.0, 47.0);
    assert_eq!(display.present().unwrap(), 0);
    display.flush().unwrap();
    assert_eq!(*panel.windows.lock().unwrap(), 0);
}
