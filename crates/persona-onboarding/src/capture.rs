/// One timed instruction shown during a capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureSegment {
    pub name: &'static str,
    pub duration_secs: u32,
    pub instruction: &'static str,
}

const AVATAR_SEGMENTS: &[CaptureSegment] = &[
    CaptureSegment {
        name: "Look Straight",
        duration_secs: 8,
        instruction: "Look directly at the camera, stay still",
    },
    CaptureSegment {
        name: "Look Up",
        duration_secs: 8,
        instruction: "Move your head and look up",
    },
    CaptureSegment {
        name: "Look Down",
        duration_secs: 8,
        instruction: "Move your head and look down",
    },
    CaptureSegment {
        name: "Look Left",
        duration_secs: 8,
        instruction: "Turn your head and look left",
    },
    CaptureSegment {
        name: "Look Right",
        duration_secs: 8,
        instruction: "Turn your head and look right",
    },
    CaptureSegment {
        name: "Smile",
        duration_secs: 8,
        instruction: "Smile naturally while looking at camera",
    },
    CaptureSegment {
        name: "Talk Naturally",
        duration_secs: 30,
        instruction: "Speak naturally - count 1 to 10 or say your name",
    },
];

const SENTENCE_1: &str = "Hello, I am creating my digital self today.";
const SENTENCE_2: &str = "The quick brown fox jumps over the lazy dog.";
const SENTENCE_3: &str = "Technology is amazing and constantly evolving.";
const SENTENCE_4: &str = "I enjoy learning new things every single day.";
const SENTENCE_5: &str = "One, two, three, four, five, six, seven, eight.";

const READING_SCRIPT: &[&str] = &[SENTENCE_1, SENTENCE_2, SENTENCE_3, SENTENCE_4, SENTENCE_5];

const VOICE_SEGMENTS: &[CaptureSegment] = &[
    CaptureSegment {
        name: "Sentence 1",
        duration_secs: READING_SECS_PER_SENTENCE,
        instruction: SENTENCE_1,
    },
    CaptureSegment {
        name: "Sentence 2",
        duration_secs: READING_SECS_PER_SENTENCE,
        instruction: SENTENCE_2,
    },
    CaptureSegment {
        name: "Sentence 3",
        duration_secs: READING_SECS_PER_SENTENCE,
        instruction: SENTENCE_3,
    },
    CaptureSegment {
        name: "Sentence 4",
        duration_secs: READING_SECS_PER_SENTENCE,
        instruction: SENTENCE_4,
    },
    CaptureSegment {
        name: "Sentence 5",
        duration_secs: READING_SECS_PER_SENTENCE,
        instruction: SENTENCE_5,
    },
];

/// Seconds allotted to each sentence of the reading script.
pub const READING_SECS_PER_SENTENCE: u32 = 8;

/// Hard stop for the voice capture, leaving a short buffer after the
/// last sentence.
pub const VOICE_CAPTURE_LIMIT_SECS: u32 = 50;

/// The avatar training recording plan (78 seconds total).
pub fn avatar_segments() -> &'static [CaptureSegment] {
    AVATAR_SEGMENTS
}

/// Sentences read aloud during voice training.
pub fn reading_script() -> &'static [&'static str] {
    READING_SCRIPT
}

/// Elapsed-time cursor over a segmented capture. Feeding in elapsed
/// seconds advances the current segment and reports when the recording
/// must auto-stop.
#[derive(Debug, Clone)]
pub struct CaptureTimeline {
    segments: &'static [CaptureSegment],
    limit_secs: u32,
    elapsed_secs: u32,
}

impl CaptureTimeline {
    pub fn new(segments: &'static [CaptureSegment], limit_secs: u32) -> Self {
        Self {
            segments,
            limit_secs,
            elapsed_secs: 0,
        }
    }

    /// Timeline for the avatar video capture; stops when the last
    /// expression's time is up.
    pub fn avatar() -> Self {
        let total = AVATAR_SEGMENTS.iter().map(|s| s.duration_secs).sum();
        Self::new(AVATAR_SEGMENTS, total)
    }

    /// Timeline for the voice capture: one reading sentence per slot,
    /// capped at [`VOICE_CAPTURE_LIMIT_SECS`].
    pub fn voice() -> Self {
        Self::new(VOICE_SEGMENTS, VOICE_CAPTURE_LIMIT_SECS)
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn limit_secs(&self) -> u32 {
        self.limit_secs
    }

    /// Advance the clock. Returns true once the capture must stop.
    pub fn tick(&mut self, secs: u32) -> bool {
        self.elapsed_secs = (self.elapsed_secs + secs).min(self.limit_secs);
        self.is_finished()
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_secs >= self.limit_secs
    }

    /// Index of the segment the elapsed time falls into. Sticks to the
    /// last segment during any trailing buffer.
    pub fn current_index(&self) -> usize {
        let mut cumulative = 0;
        for (idx, segment) in self.segments.iter().enumerate() {
            cumulative += segment.duration_secs;
            if self.elapsed_secs < cumulative {
                return idx;
            }
        }
        self.segments.len().saturating_sub(1)
    }

    pub fn current(&self) -> &CaptureSegment {
        &self.segments[self.current_index()]
    }

    /// Seconds left in the current segment.
    pub fn remaining_in_current(&self) -> u32 {
        let mut cumulative = 0;
        for segment in self.segments {
            cumulative += segment.duration_secs;
            if self.elapsed_secs < cumulative {
                return cumulative - self.elapsed_secs;
            }
        }
        0
    }

    /// Fraction of the capture done, in [0, 1].
    pub fn progress(&self) -> f32 {
        if self.limit_secs == 0 {
            return 1.0;
        }
        self.elapsed_secs as f32 / self.limit_secs as f32
    }
}

/// A finished recording held locally for review before upload.
#[derive(Debug, Clone)]
pub struct RecordedClip {
    pub bytes: Vec<u8>,
    pub mime_type: String,
    pub duration_secs: u32,
}

impl RecordedClip {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>, duration_secs: u32) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
            duration_secs,
        }
    }
}
