use log::debug;

/// Threshold used when the requested one is missing or out of range.
pub const DEFAULT_CUTOFF: usize = 10;

/// Smallest accepted threshold. Partitioning relies on at least this many elements so that the
/// median-of-three sentinels and the pivot occupy distinct slots.
pub const MIN_CUTOFF: usize = 5;

/// Largest accepted threshold.
pub const MAX_CUTOFF: usize = 20;

/// Size threshold below which an interval is finished with insertion sort.
///
/// An interval `[left, right]` is a base case if `right - left < cutoff`. Requests outside
/// `MIN_CUTOFF..=MAX_CUTOFF` are silently replaced with `DEFAULT_CUTOFF`, so every value of this
/// type is valid. Each sort call takes its own `Cutoff`, no threshold outlives the call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cutoff(usize);

impl Cutoff {
    pub fn new(requested: usize) -> Self {
        if (MIN_CUTOFF..=MAX_CUTOFF).contains(&requested) {
            Self(requested)
        } else {
            debug!(
                "cutoff {requested} outside {MIN_CUTOFF}..={MAX_CUTOFF}, using {DEFAULT_CUTOFF}"
            );
            Self::default()
        }
    }

    /// Truncates `requested` towards zero before validating it. Non-finite values fall back to
    /// the default.
    pub fn from_f64(requested: f64) -> Self {
        let truncated = requested.trunc();
        if truncated.is_finite()
            && truncated >= MIN_CUTOFF as f64
            && truncated <= MAX_CUTOFF as f64
        {
            Self(truncated as usize)
        } else {
            debug!("cutoff {requested} not usable, using {DEFAULT_CUTOFF}");
            Self::default()
        }
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }

    /// `true` if the closed interval `[left, right]` should be insertion sorted.
    #[inline]
    pub const fn is_base_case(self, left: usize, right: usize) -> bool {
        right - left < self.0
    }
}

impl Default for Cutoff {
    fn default() -> Self {
        Self(DEFAULT_CUTOFF)
    }
}

impl From<usize> for Cutoff {
    fn from(requested: usize) -> Self {
        Self::new(requested)
    }
}

impl From<f64> for Cutoff {
    fn from(requested: f64) -> Self {
        Self::from_f64(requested)
    }
}

impl From<Option<usize>> for Cutoff {
    fn from(requested: Option<usize>) -> Self {
        requested.map_or_else(Self::default, Self::new)
    }
}
