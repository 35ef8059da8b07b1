//! # Main display struct: tiles plus flush pipeline
//!
//! `Display` owns the tiled framebuffer and the flush worker. Drawing goes through
//! `write_pixel()` (directly, through the `PixelSink` impl, or through a `Canvas`), which only
//! touches memory. `present()` scans the tiles row by row and queues every dirty one for the
//! worker, which sets the address window and streams the tile bytes over the transport.
//!
//! Typically you want to look into the following functions:
//!  - Display::new() to take over an initialized transport
//!  - Display::present() to queue the changed tiles, without waiting for the bus
//!  - Display::flush() to queue the changed tiles and wait until they are on the screen
//!  - Display::invalidate() to send the whole screen again

use std::io;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;

use log::{debug, error};

use crate::{
    color::Rgb565,
    error::FlushError,
    flush::FlushWorker,
    instructions::Rotation,
    sink::PixelSink,
    tiles::TileGrid,
    transport::Transport,
    TILE_HEIGHT, TILE_WIDTH,
};

/// Screen and tile geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub width: u16,
    pub height: u16,
    pub tile_width: u16,
    pub tile_height: u16,
    pub rotation: Rotation,
}

impl Default for Config {
    fn default() -> Config {
        Config::for_rotation(Rotation::default())
    }
}

impl Config {
    /// screen of `width` x `height` pixels with the default tile size
    pub fn new(width: u16, height: u16) -> Config {
        Config {
            width,
            height,
            tile_width: TILE_WIDTH,
            tile_height: TILE_HEIGHT,
            rotation: Rotation::default(),
        }
    }

    /// full ILI9341 panel in the given orientation
    pub fn for_rotation(rotation: Rotation) -> Config {
        let (width, height) = rotation.size();
        Config { rotation, ..Config::new(width, height) }
    }

    pub fn with_tile_size(self, tile_width: u16, tile_height: u16) -> Config {
        Config { tile_width, tile_height, ..self }
    }

    /// Select the orientation; the screen size follows it.
    pub fn with_rotation(self, rotation: Rotation) -> Config {
        let (width, height) = rotation.size();
        Config { rotation, width, height, ..self }
    }
}

pub struct Display<T: Transport> {
    grid: Arc<TileGrid>,
    worker: FlushWorker,
    failures: Receiver<FlushError<T::Error>>,
    config: Config,
}

impl<T> Display<T>
where
    T: Transport + Send + 'static,
    T::Error: Send + 'static,
{
    /// Allocate the tiles and start the flush worker, which takes over `transport`.
    ///
    /// The transport has to be initialized already (see `Ili9341Spi::init`).
    pub fn new(transport: T, config: Config) -> io::Result<Display<T>> {
        let grid = Arc::new(TileGrid::new(
            config.width,
            config.height,
            config.tile_width,
            config.tile_height,
        ));
        let (failures_tx, failures) = mpsc::channel();
        let worker = FlushWorker::spawn(grid.clone(), transport, failures_tx)?;

        Ok(Display { grid, worker, failures, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// the tile grid, e.g. to inspect dirty flags
    pub fn tiles(&self) -> &TileGrid {
        &self.grid
    }

    /// Store one pixel in the framebuffer. Off screen coordinates are ignored.
    pub fn write_pixel(&self, x: i32, y: i32, color: Rgb565) {
        self.grid.write_pixel(x, y, color);
    }

    /// read back a pixel from the framebuffer
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb565> {
        self.grid.pixel(x, y)
    }

    /// Set the whole framebuffer to one color.
    pub fn fill(&self, color: Rgb565) {
        self.grid.fill(color);
    }

    /// Mark every tile dirty, so the next `present()` sends the whole screen.
    pub fn invalidate(&self) {
        for index in 0..self.grid.len() {
            self.grid.mark_dirty(index);
        }
    }

    /// Queue every dirty tile for the flush worker, in row-major order, and return how many
    /// were queued.
    ///
    /// This does not wait for the bus. Transport failures of earlier rounds are reported here;
    /// the failed tiles were marked dirty again and are part of this round.
    pub fn present(&self) -> Result<usize, FlushError<T::Error>> {
        let mut queued = 0;
        for index in 0..self.grid.len() {
            // clear before handing off: a write racing with the flush dirties the tile again
            if self.grid.take_dirty(index) {
                if !self.worker.submit(index) {
                    self.grid.mark_dirty(index);
                    error!("present: flush worker is gone");
                    return Err(FlushError::WorkerStopped);
                }
                queued += 1;
            }
        }
        debug!("present: {} of {} tiles queued", queued, self.grid.len());
        self.reported_failures()?;
        Ok(queued)
    }

    /// `present()` and wait until the worker has sent everything queued so far.
    pub fn flush(&self) -> Result<(), FlushError<T::Error>> {
        let presented = self.present();

        let done = self.worker.barrier().ok_or(FlushError::WorkerStopped)?;
        done.recv().map_err(|_| FlushError::WorkerStopped)?;

        presented?;
        self.reported_failures()
    }

    // first failure is returned, any further ones of the same batch only get logged
    fn reported_failures(&self) -> Result<(), FlushError<T::Error>> {
        let mut first = None;
        for failure in self.failures.try_iter() {
            if first.is_none() {
                first = Some(failure);
            } else {
                error!("flush failure of tile {:?}", failure.tile());
            }
        }
        match first {
            Some(failure) => Err(failure),
            None => Ok(()),
        }
    }
}

impl<T> PixelSink for Display<T>
where
    T: Transport + Send + 'static,
    T::Error: Send + 'static,
{
    fn write_pixel(&mut self, x: i32, y: i32, color: Rgb565) {
        self.grid.write_pixel(x, y, color);
    }

    fn screen_width(&self) -> i32 {
        self.grid.width() as i32
    }

    fn screen_height(&self) -> i32 {
        self.grid.height() as i32
    }
}

/// Pixel writes only need shared access, so a `Canvas<&Display>` can draw while the display is
/// still used to `present()` in between.
impl<T> PixelSink for &Display<T>
where
    T: Transport + Send + 'static,
    T::Error: Send + 'static,
{
    fn write_pixel(&mut self, x: i32, y: i32, color: Rgb565) {
        self.grid.write_pixel(x, y, color);
    }

    fn screen_width(&self) -> i32 {
        self.grid.width() as i32
    }

    fn screen_height(&self) -> i32 {
        self.grid.height() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::named::*;
    use std::sync::{mpsc, Arc, Mutex};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Window(u16, u16, u16, u16),
        Stream(Vec<u8>),
    }

    #[derive(Clone, Default)]
    struct Recorder {
        calls: Arc<Mutex<Vec<Call>>>,
        broken: Arc<Mutex<bool>>,
    }

    impl Transport for Recorder {
        type Error = &'static str;

        fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), Self::Error> {
            if *self.broken.lock().unwrap() {
                return Err("bus down");
            }
            self.calls.lock().unwrap().push(Call::Window(x0, y0, x1, y1));
            Ok(())
        }

        fn stream(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
            self.calls.lock().unwrap().push(Call::Stream(bytes.to_vec()));
            Ok(())
        }
    }

    fn display() -> (Display<Recorder>, Recorder) {
        let recorder = Recorder::default();
        let display =
            Display::new(recorder.clone(), Config::new(64, 48).with_tile_size(32, 24)).unwrap();
        display.flush().unwrap();
        recorder.calls.lock().unwrap().clear();
        (display, recorder)
    }

    #[test_log::test]
    fn first_flush_sends_every_tile_in_row_major_order() {
        let recorder = Recorder::default();
        let display =
            Display::new(recorder.clone(), Config::new(64, 48).with_tile_size(32, 24)).unwrap();
        display.flush().unwrap();

        let windows: Vec<Call> = recorder
            .calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| matches!(c, Call::Window(..)))
            .cloned()
            .collect();
        assert_eq!(
            windows,
            vec![
                Call::Window(0, 0, 31, 23),
                Call::Window(32, 0, 63, 23),
                Call::Window(0, 24, 31, 47),
                Call::Window(32, 24, 63, 47),
            ]
        );
    }

    #[test_log::test]
    fn present_sends_the_changed_tile_only() {
        let (display, recorder) = display();
        display.write_pixel(5, 5, RED);
        assert_eq!(display.present().unwrap(), 1);
        display.flush().unwrap();

        let calls = recorder.calls.lock().unwrap().clone();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], Call::Window(0, 0, 31, 23));
        let Call::Stream(bytes) = &calls[1] else { panic!("expected stream") };
        let offset = (5 * 32 + 5) * 2;
        assert_eq!(&bytes[offset..offset + 2], &RED.to_be_bytes());
        assert!(!display.tiles().is_dirty(0));
    }

    #[test_log::test]
    fn nothing_dirty_nothing_sent() {
        let (display, recorder) = display();
        assert_eq!(display.present().unwrap(), 0);
        display.flush().unwrap();
        assert!(recorder.calls.lock().unwrap().is_empty());
    }

    #[test_log::test]
    fn overwrite_after_flush_sends_the_final_color() {
        let (display, recorder) = display();
        display.write_pixel(40, 30, GREEN);
        display.flush().unwrap();
        display.write_pixel(40, 30, BLUE);
        display.flush().unwrap();

        let calls = recorder.calls.lock().unwrap().clone();
        let Some(Call::Stream(last)) = calls.last() else { panic!("expected stream") };
        let offset = ((30 - 24) * 32 + (40 - 32)) * 2;
        assert_eq!(&last[offset..offset + 2], &BLUE.to_be_bytes());
    }

    #[test_log::test]
    fn transport_failure_is_reported_and_retried() {
        let (display, recorder) = display();
        *recorder.broken.lock().unwrap() = true;
        display.write_pixel(50, 10, WHITE);

        match display.flush() {
            Err(FlushError::Transport { tile, source }) => {
                assert_eq!(tile, 1);
                assert_eq!(source, "bus down");
            }
            other => panic!("expected transport failure, got {:?}", other),
        }
        assert!(display.tiles().is_dirty(1));

        *recorder.broken.lock().unwrap() = false;
        display.flush().unwrap();
        assert!(!display.tiles().is_dirty(1));
        let calls = recorder.calls.lock().unwrap().clone();
        assert_eq!(calls[0], Call::Window(32, 0, 63, 23));
    }

    /// Blocks inside the first `stream` until released, to hold a tile in flight.
    struct Gated {
        gate: Option<(mpsc::Sender<()>, mpsc::Receiver<()>)>,
        streams: Arc<Mutex<Vec<Vec<u8>>>>,
    }

    impl Transport for Gated {
        type Error = &'static str;

        fn set_window(&mut self, _: u16, _: u16, _: u16, _: u16) -> Result<(), Self::Error> {
            Ok(())
        }

        fn stream(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
            if let Some((entered, release)) = self.gate.take() {
                entered.send(()).map_err(|_| "test gone")?;
                release.recv().map_err(|_| "test gone")?;
            }
            self.streams.lock().unwrap().push(bytes.to_vec());
            Ok(())
        }
    }

    #[test_log::test]
    fn write_during_an_in_flight_flush_is_sent_later() {
        let (entered_tx, entered) = mpsc::channel();
        let (release, release_rx) = mpsc::channel();
        let streams = Arc::new(Mutex::new(Vec::new()));
        let transport = Gated { gate: Some((entered_tx, release_rx)), streams: streams.clone() };
        // a single tile
        let display = Display::new(transport, Config::new(32, 24)).unwrap();

        display.write_pixel(5, 5, RED);
        assert_eq!(display.present().unwrap(), 1);
        entered.recv().unwrap();

        // the tile is already copied out and on its way
        display.write_pixel(5, 5, BLUE);
        let dirty_while_sending = display.tiles().is_dirty(0);
        release.send(()).unwrap();
        assert!(dirty_while_sending);

        display.flush().unwrap();

        let streams = streams.lock().unwrap();
        assert_eq!(streams.len(), 2);
        let offset = (5 * 32 + 5) * 2;
        assert_eq!(&streams[0][offset..offset + 2], &RED.to_be_bytes());
        assert_eq!(&streams[1][offset..offset + 2], &BLUE.to_be_bytes());
        assert!(!display.tiles().is_dirty(0));
    }

    #[test_log::test]
    fn invalidate_resends_everything() {
        let (display, recorder) = display();
        display.invalidate();
        assert_eq!(display.present().unwrap(), 4);
        display.flush().unwrap();
        assert_eq!(recorder.calls.lock().unwrap().len(), 8);
    }

    #[test]
    fn config_follows_rotation() {
        assert_eq!(Config::default().width, 320);
        let portrait = Config::default().with_rotation(Rotation::Deg0);
        assert_eq!((portrait.width, portrait.height), (240, 320));
        assert_eq!(portrait.tile_width, TILE_WIDTH);
    }
}
