use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassageSnifferConfig {
    /// How many words to search to the left and right of an anchor word.
    pub window_radius: usize,
    /// Minimum ratio of common words to the full window size (`2 * window_radius + 1`).
    pub similarity_cutoff: f64,
    /// Treat tabs and other Unicode whitespace as word separators instead of dropping them.
    pub split_on_all_whitespace: bool,
    /// Build neighborhoods and match candidates on the rayon pool (requires the
    /// `parallel` feature; ignored otherwise).
    pub parallel: bool,
    /// Upper bound on neighborhood comparisons performed by the matcher. `None` disables
    /// the guard.
    pub max_comparisons: Option<usize>,
}

impl PassageSnifferConfig {
    /// Number of word positions in a full window, anchor included.
    pub fn window_size(&self) -> usize {
        self.window_radius * 2 + 1
    }

    /// Documents must contain more than this many words to be analyzed.
    pub fn min_exclusive_word_count(&self) -> usize {
        self.window_radius * 2
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.window_radius == 0 {
            return Err(Error::InvalidConfig(
                "window_radius must be greater than 0".to_string(),
            ));
        }

        if self
            .window_radius
            .checked_mul(2)
            .and_then(|width| width.checked_add(1))
            .is_none()
        {
            return Err(Error::InvalidConfig(format!(
                "window_radius {} is too large",
                self.window_radius
            )));
        }

        // Also rejects NaN
        if !(self.similarity_cutoff > 0.0 && self.similarity_cutoff <= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "similarity_cutoff must be in (0, 1], got {}",
                self.similarity_cutoff
            )));
        }

        Ok(())
    }
}

impl Default for PassageSnifferConfig {
    fn default() -> Self {
        crate::DEFAULT_PASSAGE_SNIFFER_CONFIG
    }
}
