//! Frame timing for the animation loop.

use std::{
    thread,
    time::{Duration, Instant},
};

/// Timing information about the frame being rendered.
///
/// A [`Frame`] is passed explicitly to everything that animates, so rendering the same frame
/// twice produces the same output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Index of this frame, starting at 0.
    pub index: u32,
    /// Time since the first frame.
    pub elapsed: Duration,
    /// Time since the previous frame. Zero for the first frame.
    pub delta: Duration,
}

impl Frame {
    /// Returns frame number `index` of an animation running at exactly `fps` frames per second.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::time::Duration;
    /// # use dcl::frame::Frame;
    /// let frame = Frame::nominal(3, 10);
    /// assert_eq!(frame.elapsed, Duration::from_millis(300));
    /// assert_eq!(frame.delta, Duration::from_millis(100));
    /// ```
    pub fn nominal(index: u32, fps: u32) -> Self {
        let interval = interval(fps);
        Self {
            index,
            elapsed: interval * index,
            delta: if index == 0 { Duration::ZERO } else { interval },
        }
    }

    /// Returns [`Frame::elapsed`] in seconds.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

fn interval(fps: u32) -> Duration {
    Duration::from_secs(1) / fps.max(1)
}

/// Paces a loop to a target frame rate and hands out [`Frame`]s.
pub struct FrameClock {
    interval: Duration,
    start: Instant,
    last: Option<Instant>,
    index: u32,
    fps: FpsCounter,
}

impl FrameClock {
    /// Creates a clock that paces frames to `fps` frames per second.
    pub fn new(fps: u32) -> Self {
        Self {
            interval: interval(fps),
            start: Instant::now(),
            last: None,
            index: 0,
            fps: FpsCounter::new("render"),
        }
    }

    /// Waits until the next frame is due and returns its timing.
    ///
    /// The first call returns immediately and starts the clock.
    pub fn tick(&mut self) -> Frame {
        let now = match self.last {
            Some(last) => {
                let deadline = last + self.interval;
                let now = Instant::now();
                if now < deadline {
                    thread::sleep(deadline - now);
                }
                Instant::now()
            }
            None => {
                self.start = Instant::now();
                self.start
            }
        };

        let frame = Frame {
            index: self.index,
            elapsed: now - self.start,
            delta: self.last.map_or(Duration::ZERO, |last| now - last),
        };
        self.last = Some(now);
        self.index += 1;
        self.fps.tick();
        frame
    }
}

/// Logs frames per second.
pub struct FpsCounter {
    name: String,
    frames: u32,
    start: Instant,
}

impl FpsCounter {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            frames: 0,
            start: Instant::now(),
        }
    }

    /// Advances the frame counter by 1 and logs FPS if one second has passed.
    pub fn tick(&mut self) {
        self.frames += 1;
        if self.start.elapsed() > Duration::from_secs(1) {
            log::debug!("{}: {} FPS", self.name, self.frames);

            self.frames = 0;
            self.start = Instant::now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nominal() {
        assert_eq!(
            Frame::nominal(0, 30),
            Frame {
                index: 0,
                elapsed: Duration::ZERO,
                delta: Duration::ZERO,
            }
        );
        let frame = Frame::nominal(20, 40);
        assert_eq!(frame.elapsed, Duration::from_millis(500));
        assert_eq!(frame.delta, Duration::from_millis(25));
        assert_eq!(frame.elapsed_secs(), 0.5);
    }

    #[test]
    fn clock_paces_frames() {
        let mut clock = FrameClock::new(200);
        let first = clock.tick();
        assert_eq!(first.index, 0);
        assert_eq!(first.elapsed, Duration::ZERO);
        assert_eq!(first.delta, Duration::ZERO);

        let mut previous = first;
        for index in 1..4 {
            let frame = clock.tick();
            assert_eq!(frame.index, index);
            assert!(frame.delta >= Duration::from_millis(5), "{frame:?}");
            assert_eq!(frame.elapsed, previous.elapsed + frame.delta);
            previous = frame;
        }
    }
}
