use std::{
    sync::Arc,
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use parking_lot::Mutex;

use crate::clock::{AnimationClock, Frame};

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("failed to spawn the animation driver thread")]
    Spawn(#[source] std::io::Error),

    #[error("the animation driver has shut down")]
    Disconnected,

    #[error("the animation driver thread panicked")]
    Panicked,
}

#[derive(Debug)]
enum Command {
    Pause,
    Resume,
    Shutdown,
}

/// Runs an [`AnimationClock`] in real time on a background thread.
///
/// The renderer reads the shared clock through [`AnimationDriver::frame`].
/// Dropping the driver shuts the thread down and tears the clock down.
#[derive(Debug)]
pub struct AnimationDriver {
    clock: Arc<Mutex<AnimationClock>>,
    command_tx: Sender<Command>,
    join_handle: Option<JoinHandle<()>>,
}

impl AnimationDriver {
    pub fn spawn(clock: AnimationClock) -> Result<Self, DriverError> {
        let clock = Arc::new(Mutex::new(clock));
        let (command_tx, command_rx) = unbounded();

        let join_handle = thread::Builder::new()
            .name("animation-driver".to_owned())
            .spawn({
                let clock = Arc::clone(&clock);
                move || run_driver(command_rx, clock)
            })
            .map_err(DriverError::Spawn)?;

        tracing::info!("animation driver started");

        Ok(Self {
            clock,
            command_tx,
            join_handle: Some(join_handle),
        })
    }

    fn send_command(&self, command: Command) -> Result<(), DriverError> {
        self.command_tx
            .send(command)
            .map_err(|_| DriverError::Disconnected)
    }

    pub fn frame(&self) -> Frame {
        self.clock.lock().frame()
    }

    pub fn is_running(&self) -> bool {
        self.clock.lock().is_running()
    }

    pub fn pause(&self) -> Result<(), DriverError> {
        self.send_command(Command::Pause)
    }

    pub fn resume(&self) -> Result<(), DriverError> {
        self.send_command(Command::Resume)
    }

    /// Stops the thread and waits for it. The clock is torn down when this
    /// returns.
    pub fn shutdown(&mut self) -> Result<(), DriverError> {
        let Some(join_handle) = self.join_handle.take() else {
            return Ok(());
        };
        // the thread may already be gone, join reports how it ended
        let _ = self.command_tx.send(Command::Shutdown);
        join_handle.join().map_err(|_| DriverError::Panicked)?;
        tracing::info!("animation driver stopped");
        Ok(())
    }
}

impl Drop for AnimationDriver {
    fn drop(&mut self) {
        if let Err(error) = self.shutdown() {
            tracing::warn!(%error, "animation driver did not shut down cleanly");
        }
    }
}

fn run_driver(command_rx: Receiver<Command>, clock: Arc<Mutex<AnimationClock>>) {
    let mut last_wake = Instant::now();
    let mut paused = false;

    loop {
        let command = if paused {
            command_rx.recv().map_err(|_| RecvTimeoutError::Disconnected)
        } else {
            // don't hold the lock while waiting
            let timeout = wake_interval(&clock.lock());
            command_rx.recv_timeout(timeout)
        };

        match command {
            Ok(Command::Pause) => {
                if !paused {
                    advance(&clock, &mut last_wake);
                    paused = true;
                    tracing::info!("animation paused");
                }
                continue;
            }
            Ok(Command::Resume) => {
                if paused {
                    last_wake = Instant::now();
                    paused = false;
                    tracing::info!("animation resumed");
                }
                continue;
            }
            Ok(Command::Shutdown) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {}
        }

        advance(&clock, &mut last_wake);
    }

    clock.lock().teardown();
}

fn advance(clock: &Mutex<AnimationClock>, last_wake: &mut Instant) {
    let now = Instant::now();
    clock.lock().advance(now - *last_wake);
    *last_wake = now;
}

/// Time until the clock's next timer is due.
fn wake_interval(clock: &AnimationClock) -> Duration {
    clock
        .next_deadline()
        .map(|deadline| deadline.saturating_sub(clock.now()))
        .unwrap_or(Duration::from_millis(50))
}

#[cfg(test)]
mod tests {
    use std::{thread, time::Duration};

    use super::*;

    #[test]
    fn it_advances_in_real_time() {
        let driver = AnimationDriver::spawn(AnimationClock::default()).unwrap();
        thread::sleep(Duration::from_millis(300));
        let frame = driver.frame();
        assert!(frame.elapsed >= Duration::from_millis(200));
        assert!(frame.position > 0.0);
    }

    #[test]
    fn shutdown_tears_the_clock_down() {
        let mut driver = AnimationDriver::spawn(AnimationClock::default()).unwrap();
        assert!(driver.is_running());
        driver.shutdown().unwrap();
        assert!(!driver.is_running());

        // shutting down twice is fine, commands are not
        driver.shutdown().unwrap();
        assert!(matches!(driver.pause(), Err(DriverError::Disconnected)));
    }

    #[test]
    fn paused_driver_holds_its_frame() {
        let driver = AnimationDriver::spawn(AnimationClock::default()).unwrap();
        driver.pause().unwrap();
        // the pause is processed asynchronously
        thread::sleep(Duration::from_millis(100));
        let paused = driver.frame();
        thread::sleep(Duration::from_millis(200));
        assert_eq!(driver.frame(), paused);

        driver.resume().unwrap();
        thread::sleep(Duration::from_millis(200));
        assert!(driver.frame().elapsed > paused.elapsed);
    }
}
