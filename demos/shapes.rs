use std::f64::consts::PI;
use std::fmt::Write;
use std::sync::atomic::{AtomicUsize, Ordering};

use embedded_hal::blocking::spi;
use ili9341::{
    color::named::*,
    dummypins::{DummyOutputPin, NoDelay},
    fonts::FONT_5X7,
    transport::Ili9341Spi,
    Canvas, Config, Display, WidthType,
};
use log::info;

static BYTES_SENT: AtomicUsize = AtomicUsize::new(0);

/// SPI bus that only counts what goes over it.
pub struct CountingSpi;

impl spi::Write<u8> for CountingSpi {
    type Error = std::convert::Infallible;
    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        BYTES_SENT.fetch_add(words.len(), Ordering::Relaxed);
        Ok(())
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::default();
    let mut transport = Ili9341Spi::new(CountingSpi, DummyOutputPin, DummyOutputPin);
    transport.init(&mut NoDelay, config.rotation).expect("Infallible cannot fail");

    let display = Display::new(transport, config).expect("failed to spawn the flush worker");
    display.flush().expect("Infallible cannot fail");
    info!("first flush: {} bytes", BYTES_SENT.swap(0, Ordering::Relaxed));

    let mut canvas = Canvas::new(&display);
    canvas.clear();

    canvas.set_color(ROYALBLUE);
    canvas.thick_rectangle(10.0, 10.0, 300.0, 220.0, 4, WidthType::Inner);
    canvas.set_color(GOLD);
    canvas.fill_circle(80.0, 120.0, 40.0);
    canvas.set_color(CRIMSON);
    canvas.thick_arc(80.0, 120.0, 50.0, 0.25 * PI, 1.75 * PI, 5, WidthType::Outer);
    canvas.set_color(MEDIUMSPRINGGREEN);
    canvas.line(160.0, 40.0, 290.0, 200.0);
    canvas.line(160.0, 200.0, 290.0, 40.0);

    canvas.set_font(&FONT_5X7).expect("bundled font is complete");
    canvas.set_color(WHITE);
    canvas.move_cursor(160, 30);
    writeln!(canvas, "ILI9341").expect("printable text");
    write!(canvas, "{}x{}", display.config().width, display.config().height).expect("printable text");

    let queued = display.present().expect("Infallible cannot fail");
    display.flush().expect("Infallible cannot fail");
    info!("{} tiles, {} bytes", queued, BYTES_SENT.load(Ordering::Relaxed));
}
