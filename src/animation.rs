use crate::cell::Position;
use crate::{PATH_FRAME_DELAY, VISITED_FRAME_DELAY};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FrameKind {
    Visited,
    ShortestPath,
}

/// Marks `position` as `kind` once `at` has elapsed since the animation started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    pub at: Duration,
    pub position: Position,
    pub kind: FrameKind,
}

/// Replay schedule of a finished search: the settled cells one after another, then the path.
/// The schedule is computed up front and never touches the grid again.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Animation {
    frames: Vec<Frame>,
}

impl Animation {
    pub fn new(visited_in_order: &[Position], path: &[Position]) -> Animation {
        let path_start = delay(VISITED_FRAME_DELAY, visited_in_order.len());
        let visited = visited_in_order
            .iter()
            .enumerate()
            .map(|(i, &position)| Frame {
                at: delay(VISITED_FRAME_DELAY, i),
                position,
                kind: FrameKind::Visited,
            });
        let shortest_path = path.iter().enumerate().map(|(i, &position)| Frame {
            at: path_start.saturating_add(delay(PATH_FRAME_DELAY, i)),
            position,
            kind: FrameKind::ShortestPath,
        });
        Animation {
            frames: visited.chain(shortest_path).collect(),
        }
    }

    /// Frames in firing order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Time at which the last frame fires.
    pub fn duration(&self) -> Duration {
        self.frames.last().map_or(Duration::ZERO, |f| f.at)
    }

    /// Frames that fire in `[from, to)`. Consecutive windows starting at zero yield every frame
    /// exactly once.
    pub fn frames_between(&self, from: Duration, to: Duration) -> impl Iterator<Item = &Frame> {
        self.frames
            .iter()
            .filter(move |f| f.at >= from && f.at < to)
    }
}

/// `step` repeated `n` times, saturating instead of wrapping for step counts beyond `u32`.
fn delay(step: Duration, n: usize) -> Duration {
    step.saturating_mul(u32::try_from(n).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_follows_visited_cells() {
        let visited = [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)];
        let path = [Position::new(0, 0), Position::new(0, 1)];
        let animation = Animation::new(&visited, &path);
        let times = animation.frames().iter().map(|f| f.at.as_millis()).collect::<Vec<_>>();
        assert_eq!(times, vec![0, 10, 20, 30, 80]);
        assert_eq!(animation.frames()[3].kind, FrameKind::ShortestPath);
        assert_eq!(animation.duration(), Duration::from_millis(80));
    }

    #[test]
    fn frames_between_includes_window_start() {
        let visited = [Position::new(0, 0), Position::new(0, 1)];
        let animation = Animation::new(&visited, &[]);
        let due = animation
            .frames_between(Duration::ZERO, Duration::from_millis(10))
            .collect::<Vec<_>>();
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].position, Position::new(0, 0));
    }

    #[test]
    fn stepped_windows_cover_every_frame_once() {
        let visited = (0..7).map(|col| Position::new(0, col)).collect::<Vec<_>>();
        let path = (0..4).map(|col| Position::new(0, col)).collect::<Vec<_>>();
        let animation = Animation::new(&visited, &path);
        let step = Duration::from_millis(7);
        let mut seen = Vec::new();
        let mut from = Duration::ZERO;
        while from <= animation.duration() {
            seen.extend(animation.frames_between(from, from + step).copied());
            from += step;
        }
        assert_eq!(seen, animation.frames());
    }

    #[test]
    fn delay_saturates_large_step_counts() {
        let step = Duration::from_millis(10);
        assert_eq!(delay(step, 3), Duration::from_millis(30));
        assert_eq!(delay(step, usize::MAX), step * u32::MAX);
    }

    #[test]
    fn empty_animation() {
        assert_eq!(Animation::new(&[], &[]).duration(), Duration::ZERO);
    }
}
