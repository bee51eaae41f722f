use crate::model::ids::QuizId;

/// Best result recorded for a single quiz.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressEntry {
    best_score: u32,
    passed: bool,
}

impl ProgressEntry {
    #[must_use]
    pub fn new(best_score: u32, passed: bool) -> Self {
        Self { best_score, passed }
    }

    #[must_use]
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Fold an attempt into this entry.
    ///
    /// The best score never decreases and a pass is never revoked.
    #[must_use]
    pub fn merged(self, score: u32, perfect_pass: bool) -> Self {
        Self {
            best_score: self.best_score.max(score),
            passed: self.passed || perfect_pass,
        }
    }
}

/// Progress snapshot covering every quiz.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressMap {
    entries: [ProgressEntry; 3],
}

impl ProgressMap {
    #[must_use]
    pub fn new(quiz1: ProgressEntry, quiz2: ProgressEntry, quiz3: ProgressEntry) -> Self {
        Self {
            entries: [quiz1, quiz2, quiz3],
        }
    }

    #[must_use]
    pub fn get(&self, id: QuizId) -> ProgressEntry {
        self.entries[id.index()]
    }

    pub fn set(&mut self, id: QuizId, entry: ProgressEntry) {
        self.entries[id.index()] = entry;
    }

    /// Merge a completed attempt into the entry for `id`, leaving the others untouched.
    pub fn record_attempt(&mut self, id: QuizId, score: u32, perfect_pass: bool) -> ProgressEntry {
        let merged = self.get(id).merged(score, perfect_pass);
        self.set(id, merged);
        merged
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuizId, ProgressEntry)> + '_ {
        QuizId::ALL.into_iter().map(|id| (id, self.get(id)))
    }

    /// True once every quiz has been passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.entries.iter().all(ProgressEntry::passed)
    }
}
