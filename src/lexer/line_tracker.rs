/// Converts byte offsets into 1-based line numbers for a single source text.
///
/// The tracker only moves forward: it remembers how far it has scanned and
/// the line it was on, so a full pass over the text costs O(len) no matter
/// how many offsets are queried. Offsets must be queried in non-decreasing
/// order, which is exactly the order the scanner produces matches in.
#[derive(Debug, Clone)]
pub struct LineTracker<'src> {
    source: &'src str,
    scanned_up_to: usize,
    current_line: usize,
}

impl<'src> LineTracker<'src> {
    pub fn new(source: &'src str) -> Self {
        LineTracker {
            source,
            scanned_up_to: 0,
            current_line: 1,
        }
    }

    /// Line of the character starting at `offset`. Offsets past the end of
    /// the text are clamped to the end.
    pub fn advance_to(&mut self, offset: usize) -> usize {
        let target = offset.min(self.source.len());
        debug_assert!(
            target >= self.scanned_up_to,
            "line tracker queried backwards: {} < {}",
            target,
            self.scanned_up_to
        );

        if target > self.scanned_up_to {
            let crossed = self.source.as_bytes()[self.scanned_up_to..target]
                .iter()
                .filter(|byte| **byte == b'\n')
                .count();
            self.current_line += crossed;
            self.scanned_up_to = target;
        }

        self.current_line
    }

    pub fn scanned_up_to(&self) -> usize {
        self.scanned_up_to
    }
}
