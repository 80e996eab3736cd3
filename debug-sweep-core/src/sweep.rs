// sweep driver - walks the tree and strips each candidate in turn

use anyhow::Result;

use crate::config::SweepConfig;
use crate::stripper::{StripOutcome, Stripper};
use crate::utils::pluralise;
use crate::walker::walk;

/// totals for a finished run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SweepSummary {
    pub files_scanned: usize,
    pub files_changed: usize,
    pub statements_removed: usize,
}

impl SweepSummary {
    fn record(&mut self, outcome: &StripOutcome) {
        self.files_scanned += 1;
        if outcome.removed > 0 {
            self.files_changed += 1;
            self.statements_removed += outcome.removed;
        }
    }

    /// "3 statements removed from 2 files (40 files scanned)"
    pub fn describe(&self) -> String {
        format!(
            "{} removed from {} ({} scanned)",
            pluralise(self.statements_removed, "statement"),
            pluralise(self.files_changed, "file"),
            pluralise(self.files_scanned, "file"),
        )
    }
}

/// strip every matching file under `config.root`
pub fn sweep(config: &SweepConfig) -> Result<SweepSummary> {
    sweep_with(config, |_| {})
}

/// like [`sweep`], calling `on_file` after each file is rewritten.
///
/// files are handled one at a time. the first walk or i/o error stops the
/// run; files already rewritten stay rewritten.
pub fn sweep_with<F>(config: &SweepConfig, mut on_file: F) -> Result<SweepSummary>
where
    F: FnMut(&StripOutcome),
{
    let stripper = Stripper::new(&config.marker)?;
    let mut summary = SweepSummary::default();

    for path in walk(&config.root, &config.extension) {
        let outcome = stripper.strip_file(&path?)?;
        summary.record(&outcome);
        on_file(&outcome);
    }

    Ok(summary)
}
