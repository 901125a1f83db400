use yew::{classes, Classes};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Fade,
    /// Rises into place from `n` px below.
    Rise(u32),
    FromLeft(u32),
    FromRight(u32),
}

/// How one block moves from its hidden to its revealed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    motion: Motion,
    quick: bool,
    delay_ms: u32,
}

impl Reveal {
    pub const fn fade() -> Self {
        Self::with(Motion::Fade)
    }

    pub const fn rise(px: u32) -> Self {
        Self::with(Motion::Rise(px))
    }

    pub const fn from_left(px: u32) -> Self {
        Self::with(Motion::FromLeft(px))
    }

    pub const fn from_right(px: u32) -> Self {
        Self::with(Motion::FromRight(px))
    }

    const fn with(motion: Motion) -> Self {
        Self { motion, quick: false, delay_ms: 0 }
    }

    /// 700ms transition instead of the default 1s.
    pub const fn quick(self) -> Self {
        Self { quick: true, ..self }
    }

    pub const fn delayed(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    pub fn classes(&self, revealed: bool) -> Classes {
        classes!("reveal", self.quick.then_some("reveal-quick"), revealed.then_some("revealed"))
    }

    pub fn style(&self) -> String {
        let (x, y) = match self.motion {
            Motion::Fade => (0, 0),
            Motion::Rise(px) => (0, px as i64),
            Motion::FromLeft(px) => (-(px as i64), 0),
            Motion::FromRight(px) => (px as i64, 0),
        };
        format!("--reveal-x: {}px; --reveal-y: {}px; transition-delay: {}ms;", x, y, self.delay_ms)
    }
}

/// Delay for the `index`th item of a cascading list.
pub fn stagger(base_ms: u32, step_ms: u32, index: usize) -> u32 {
    base_ms + step_ms * index as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_and_revealed_classes() {
        let reveal = Reveal::rise(32);
        assert_eq!(reveal.classes(false).to_string(), "reveal");
        assert_eq!(reveal.classes(true).to_string(), "reveal revealed");
        assert_eq!(Reveal::fade().quick().classes(true).to_string(), "reveal reveal-quick revealed");
    }

    #[test]
    fn offsets_follow_direction() {
        assert_eq!(
            Reveal::from_left(64).delayed(100).style(),
            "--reveal-x: -64px; --reveal-y: 0px; transition-delay: 100ms;"
        );
        assert_eq!(
            Reveal::from_right(16).style(),
            "--reveal-x: 16px; --reveal-y: 0px; transition-delay: 0ms;"
        );
        assert_eq!(Reveal::rise(48).style(), "--reveal-x: 0px; --reveal-y: 48px; transition-delay: 0ms;");
    }

    #[test]
    fn stagger_cascades() {
        let delays: Vec<u32> = (0..3).map(|i| stagger(200, 100, i)).collect();
        assert_eq!(delays, vec![200, 300, 400]);
        assert_eq!(stagger(300, 50, 0), 300);
    }
}
