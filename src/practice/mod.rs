//! Interactive stroke-order practice: session state machine, quiz scoring and
//! the rainbow demo palette. The actual stroke animation/quiz engine is
//! external; this module only sequences it (see [`writer::StrokeAnimator`])
//! and stays free of browser types so it runs under native tests.

pub mod view;
pub mod writer;

/// Ink colors cycled through during a rainbow demo, one per stroke.
pub const RAINBOW_PALETTE: [&str; 7] = [
    "#ef4444", "#f97316", "#eab308", "#22c55e", "#3b82f6", "#a855f7", "#ec4899",
];

/// Default ink color outside rainbow demos.
pub const INK_COLOR: &str = "#333333";

/// Color for the stroke at `stroke_index` in a rainbow demo. The engine's
/// stroke color is global, so earlier strokes re-color along with each update;
/// that shifting "chameleon" look is the point of the mode, not a defect.
pub fn rainbow_color(stroke_index: usize) -> &'static str {
    RAINBOW_PALETTE[stroke_index % RAINBOW_PALETTE.len()]
}

/// Quiz score: start at 100, lose 5 per mistake, floor at 0.
pub fn quiz_score(total_mistakes: u32) -> u32 {
    100u32.saturating_sub(total_mistakes.saturating_mul(5))
}

/// Where the practice panel currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PracticePhase {
    #[default]
    Idle,
    /// Stroke-order animation is playing.
    Demo,
    /// The quiz engine owns the board; we wait for its completion summary.
    Quiz,
    /// Quiz done, feedback request in flight.
    Evaluating,
}

/// Completion summary reported by the quiz engine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizSummary {
    pub total_mistakes: u32,
    /// Per-stroke mistake counts, keyed by 0-based stroke index.
    pub mistakes_on_stroke: Vec<(usize, u32)>,
}

impl QuizSummary {
    /// 0-based indices of strokes that drew at least one mistake, ascending.
    pub fn missed_stroke_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self
            .mistakes_on_stroke
            .iter()
            .filter(|(_, count)| *count > 0)
            .map(|(idx, _)| *idx)
            .collect();
        indices.sort_unstable();
        indices
    }
}

/// Everything the feedback oracle needs about a finished quiz.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackRequest {
    pub character: char,
    pub total_mistakes: u32,
    pub missed_strokes: Vec<usize>,
}

/// Practice state for one character. Transitions:
/// `Idle → Demo → Idle` and `Idle → Quiz → Evaluating → Idle`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PracticeSession {
    character: char,
    phase: PracticePhase,
    rainbow: bool,
    stroke_count: usize,
    score: Option<u32>,
    feedback: Option<String>,
}

impl PracticeSession {
    pub fn new(character: char) -> Self {
        Self {
            character,
            phase: PracticePhase::Idle,
            rainbow: true,
            stroke_count: 0,
            score: None,
            feedback: None,
        }
    }

    pub fn character(&self) -> char {
        self.character
    }

    pub fn phase(&self) -> PracticePhase {
        self.phase
    }

    pub fn rainbow(&self) -> bool {
        self.rainbow
    }

    pub fn toggle_rainbow(&mut self) {
        self.rainbow = !self.rainbow;
    }

    pub fn stroke_count(&self) -> usize {
        self.stroke_count
    }

    /// Reported by the engine once character data loads.
    pub fn set_stroke_count(&mut self, count: usize) {
        self.stroke_count = count;
    }

    pub fn score(&self) -> Option<u32> {
        self.score
    }

    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    /// Start a stroke-order demo. Any prior quiz score and feedback are
    /// cleared so the panel shows a clean slate.
    pub fn begin_demo(&mut self) {
        self.phase = PracticePhase::Demo;
        self.score = None;
        self.feedback = None;
    }

    /// Demo animation ran to completion (or was abandoned for a new action).
    pub fn finish_demo(&mut self) {
        if self.phase == PracticePhase::Demo {
            self.phase = PracticePhase::Idle;
        }
    }

    /// Hand the board to the quiz engine.
    pub fn begin_quiz(&mut self) {
        self.phase = PracticePhase::Quiz;
        self.score = None;
        self.feedback = Some("请拿起“笔”开始描红吧...".into());
    }

    /// Quiz finished: compute the score and produce the feedback request to
    /// send to the oracle. The session sits in `Evaluating` until
    /// [`apply_feedback`](Self::apply_feedback) lands.
    pub fn complete_quiz(&mut self, summary: &QuizSummary) -> FeedbackRequest {
        self.score = Some(quiz_score(summary.total_mistakes));
        self.feedback = None;
        self.phase = PracticePhase::Evaluating;
        FeedbackRequest {
            character: self.character,
            total_mistakes: summary.total_mistakes,
            missed_strokes: summary.missed_stroke_indices(),
        }
    }

    /// Oracle feedback (or its fallback) arrived.
    pub fn apply_feedback(&mut self, comment: String) {
        self.feedback = Some(comment);
        if self.phase == PracticePhase::Evaluating {
            self.phase = PracticePhase::Idle;
        }
    }
}
