//! Background worker sending dirty tiles to the display.
//!
//! Only tile indices cross the thread boundary. The worker owns the transport exclusively and
//! handles the jobs strictly in submission order. A tile is copied out under its lock and sent
//! without holding it, so drawing can continue on that tile while the bus is busy; such writes
//! set the dirty flag again and go out with a later `present()`.

use std::io;
use std::sync::mpsc::{self, Receiver, Sender, SyncSender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{debug, error, info, trace, warn};

use crate::{error::FlushError, tiles::TileGrid, transport::Transport};

pub(crate) enum Job {
    /// send tile `index`
    Tile(usize),
    /// answered once every job queued before it is done
    Barrier(SyncSender<()>),
}

pub struct FlushWorker {
    jobs: Option<Sender<Job>>,
    thread_handle: Option<JoinHandle<()>>,
}

impl FlushWorker {
    /// Spawn the worker thread. Transport failures are sent to `failures`, the failed tile is
    /// marked dirty again.
    pub fn spawn<T>(
        grid: Arc<TileGrid>,
        mut transport: T,
        failures: Sender<FlushError<T::Error>>,
    ) -> io::Result<FlushWorker>
    where
        T: Transport + Send + 'static,
        T::Error: Send + 'static,
    {
        let (jobs, queue) = mpsc::channel::<Job>();

        let thread_handle = thread::Builder::new()
            .name("ili9341-flush".to_string())
            .spawn(move || {
                info!("FlushWorker: started, {} tiles", grid.len());
                run(&grid, &mut transport, &queue, &failures);
                debug!("FlushWorker: thread exiting");
            })?;

        Ok(FlushWorker {
            jobs: Some(jobs),
            thread_handle: Some(thread_handle),
        })
    }

    /// Queue tile `index`; `false` if the worker is gone.
    pub fn submit(&self, index: usize) -> bool {
        match &self.jobs {
            Some(jobs) => jobs.send(Job::Tile(index)).is_ok(),
            None => false,
        }
    }

    /// Queue a barrier; the returned receiver yields once all earlier jobs are done.
    pub fn barrier(&self) -> Option<Receiver<()>> {
        let (done, wait) = mpsc::sync_channel(1);
        self.jobs.as_ref()?.send(Job::Barrier(done)).ok()?;
        Some(wait)
    }
}

fn run<T: Transport>(
    grid: &TileGrid,
    transport: &mut T,
    queue: &Receiver<Job>,
    failures: &Sender<FlushError<T::Error>>,
) {
    let mut scratch = Vec::new();

    for job in queue.iter() {
        match job {
            Job::Tile(index) => {
                let area = grid.area(index);
                grid.snapshot(index, &mut scratch);
                trace!("FlushWorker: tile {} -> {:?}", index, area);

                let sent = transport
                    .set_window(area.x, area.y, area.x_end(), area.y_end())
                    .and_then(|_| transport.stream(&scratch));

                if let Err(e) = sent {
                    warn!("FlushWorker: tile {} failed, kept dirty for the next present", index);
                    grid.mark_dirty(index);
                    if failures.send(FlushError::transport(index)(e)).is_err() {
                        info!("FlushWorker: display dropped, exiting");
                        break;
                    }
                }
            }
            Job::Barrier(done) => {
                // the waiting side may have given up, nothing to do then
                let _ = done.send(());
            }
        }
    }
}

impl Drop for FlushWorker {
    fn drop(&mut self) {
        // closing the queue ends the worker loop after the pending tiles
        self.jobs.take();
        if let Some(handle) = self.thread_handle.take() {
            if let Err(e) = handle.join() {
                error!("FlushWorker thread panicked: {:?}", e);
            }
        }
    }
}
