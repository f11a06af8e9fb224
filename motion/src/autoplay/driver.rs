//! Tokio host for an autoplaying carousel.
//!
//! One task owns the controller. Manual commands come in over an unbounded
//! channel, status snapshots go out over a `watch` channel, so nothing is
//! shared and nothing is locked.

use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::{debug, info, warn};

use super::AutoplayConfig;
use crate::carousel::{CarouselError, RotationController, Slide};

/// Errors returned by [`Autoplay`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutoplayError {
    /// The driving task is gone (it panicked or was aborted).
    #[error("autoplay task is no longer running")]
    Stopped,
    /// The command was rejected by the controller.
    #[error(transparent)]
    Carousel(#[from] CarouselError),
}

/// Snapshot published after every move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutoplayStatus {
    /// Current slide
    pub slide: Slide,
    /// Moves made by the timer since spawn
    pub auto_advances: u64,
    /// Moves made by manual commands since spawn
    pub manual_moves: u64,
}

#[derive(Debug)]
enum Command {
    Next,
    Previous,
    JumpTo(usize),
    Shutdown,
}

/// Handle to a running autoplay task.
///
/// The timer is torn down exactly once: by [`Autoplay::shutdown`], or by
/// aborting the task when the handle is dropped.
#[derive(Debug)]
pub struct Autoplay<T> {
    commands: mpsc::UnboundedSender<Command>,
    status: watch::Receiver<AutoplayStatus>,
    count: usize,
    task: Option<JoinHandle<RotationController<T>>>,
}

impl<T: Send + 'static> Autoplay<T> {
    /// Move `controller` onto a new task and start the timer.
    ///
    /// The first automatic advance happens one full interval after spawn.
    /// Must be called from within a tokio runtime.
    pub fn spawn(controller: RotationController<T>, config: AutoplayConfig) -> Self {
        let (commands, inbox) = mpsc::unbounded_channel();
        let (publisher, status) = watch::channel(AutoplayStatus {
            slide: controller.slide(),
            ..Default::default()
        });
        let count = controller.count();

        info!(
            items = count,
            interval_ms = config.interval().as_millis() as u64,
            manual = ?config.manual_navigation,
            "autoplay started"
        );
        let task = tokio::spawn(run(controller, config, inbox, publisher));

        Self {
            commands,
            status,
            count,
            task: Some(task),
        }
    }

    /// Manual "next".
    pub fn next(&self) -> Result<(), AutoplayError> {
        self.send(Command::Next)
    }

    /// Manual "previous".
    pub fn previous(&self) -> Result<(), AutoplayError> {
        self.send(Command::Previous)
    }

    /// Manual jump. Out-of-range indices are rejected here, before reaching the task.
    pub fn jump_to(&self, index: usize) -> Result<(), AutoplayError> {
        if index >= self.count {
            return Err(CarouselError::IndexOutOfRange {
                index,
                len: self.count,
            }
            .into());
        }
        self.send(Command::JumpTo(index))
    }

    /// Latest published status.
    pub fn status(&self) -> AutoplayStatus {
        *self.status.borrow()
    }

    /// Receiver that is notified on every move. Closed once the task stops.
    pub fn subscribe(&self) -> watch::Receiver<AutoplayStatus> {
        self.status.clone()
    }

    /// Stop the timer and take the controller back.
    pub async fn shutdown(mut self) -> Result<RotationController<T>, AutoplayError> {
        let task = self.task.take().ok_or(AutoplayError::Stopped)?;
        if self.commands.send(Command::Shutdown).is_err() {
            task.abort();
            return Err(AutoplayError::Stopped);
        }
        task.await.map_err(|_| AutoplayError::Stopped)
    }

    fn send(&self, command: Command) -> Result<(), AutoplayError> {
        self.commands
            .send(command)
            .map_err(|_| AutoplayError::Stopped)
    }
}

impl<T> Drop for Autoplay<T> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            debug!("autoplay handle dropped, aborting timer");
            task.abort();
        }
    }
}

async fn run<T>(
    mut controller: RotationController<T>,
    config: AutoplayConfig,
    mut inbox: mpsc::UnboundedReceiver<Command>,
    publisher: watch::Sender<AutoplayStatus>,
) -> RotationController<T> {
    let period = config.interval();
    let mut ticker = time::interval_at(Instant::now() + period, period);
    let mut status = *publisher.borrow();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                controller.advance();
                status.auto_advances += 1;
            }
            command = inbox.recv() => {
                let moved = match command {
                    Some(Command::Next) => {
                        controller.advance();
                        true
                    }
                    Some(Command::Previous) => {
                        controller.retreat();
                        true
                    }
                    Some(Command::JumpTo(index)) => match controller.jump_to(index) {
                        Ok(_) => true,
                        Err(err) => {
                            warn!(%err, "ignoring jump");
                            false
                        }
                    },
                    Some(Command::Shutdown) | None => break,
                };
                if !moved {
                    continue;
                }
                status.manual_moves += 1;
                if config.manual_navigation.restarts_timer() {
                    ticker.reset();
                }
            }
        }
        status.slide = controller.slide();
        publisher.send_replace(status);
    }

    debug!(
        auto_advances = status.auto_advances,
        manual_moves = status.manual_moves,
        "autoplay stopped"
    );
    controller
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use tokio::time::sleep;

    use super::*;
    use crate::autoplay::ManualNavigation;
    use crate::carousel::Direction;

    fn carousel(len: usize) -> RotationController<usize> {
        RotationController::new((0..len).collect()).expect("non-empty")
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[tokio::test(start_paused = true)]
    async fn full_cycle_returns_to_start() {
        let autoplay = Autoplay::spawn(carousel(4), AutoplayConfig::default());

        sleep(ms(24_001)).await;

        let status = autoplay.status();
        assert_eq!(status.auto_advances, 4);
        assert_eq!(status.slide.index, 0);
        assert_eq!(status.slide.direction, Direction::Forward);
    }

    #[tokio::test(start_paused = true)]
    async fn fires_floor_of_elapsed_over_interval() {
        let config = AutoplayConfig::default();
        let autoplay = Autoplay::spawn(carousel(5), config);

        sleep(ms(17_999)).await;
        assert_eq!(autoplay.status().auto_advances, config.ticks_within(ms(17_999)));
        assert_eq!(autoplay.status().slide.index, 2);

        sleep(ms(6_002)).await;
        assert_eq!(autoplay.status().auto_advances, 4);
        assert_eq!(autoplay.status().slide.index, 4);
    }

    #[tokio::test(start_paused = true)]
    async fn manual_moves_do_not_delay_timer_by_default() {
        let autoplay = Autoplay::spawn(carousel(4), AutoplayConfig::default());

        sleep(ms(5_000)).await;
        autoplay.next().unwrap();
        sleep(ms(1_001)).await;

        let status = autoplay.status();
        assert_eq!(status.manual_moves, 1);
        assert_eq!(status.auto_advances, 1);
        assert_eq!(status.slide.index, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn restart_policy_rearms_timer_after_manual_move() {
        let config = AutoplayConfig {
            manual_navigation: ManualNavigation::Restart,
            ..Default::default()
        };
        let autoplay = Autoplay::spawn(carousel(4), config);

        sleep(ms(5_000)).await;
        autoplay.previous().unwrap();
        sleep(ms(1_001)).await;
        assert_eq!(autoplay.status().auto_advances, 0);
        assert_eq!(autoplay.status().slide.index, 3);
        assert_eq!(autoplay.status().slide.direction, Direction::Backward);

        sleep(ms(5_000)).await;
        assert_eq!(autoplay.status().auto_advances, 1);
        assert_eq!(autoplay.status().slide.index, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn jump_is_validated_before_sending() {
        let autoplay = Autoplay::spawn(carousel(4), AutoplayConfig::default());

        let err = autoplay.jump_to(9).unwrap_err();
        assert_eq!(
            err,
            AutoplayError::Carousel(CarouselError::IndexOutOfRange { index: 9, len: 4 })
        );

        autoplay.jump_to(2).unwrap();
        sleep(ms(10)).await;
        assert_eq!(autoplay.status().slide, Slide { index: 2, direction: Direction::Forward });
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_stops_timer_and_returns_controller() {
        let autoplay = Autoplay::spawn(carousel(4), AutoplayConfig::default());
        let mut updates = autoplay.subscribe();

        sleep(ms(6_001)).await;
        let controller = autoplay.shutdown().await.unwrap();
        assert_eq!(controller.index(), 1);

        sleep(ms(60_000)).await;
        assert_eq!(updates.borrow_and_update().auto_advances, 1);
        assert!(updates.changed().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_handle_stops_timer() {
        let autoplay = Autoplay::spawn(carousel(4), AutoplayConfig::default());
        let mut updates = autoplay.subscribe();

        sleep(ms(12_001)).await;
        drop(autoplay);

        sleep(ms(60_000)).await;
        assert_eq!(updates.borrow_and_update().auto_advances, 2);
        assert!(updates.changed().await.is_err());
    }
}
