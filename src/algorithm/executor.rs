use crate::{
    algorithm::candidate::generate_candidate_line,
    algorithm::canvas::Canvas,
    algorithm::subdivision::plan_split,
    io::configuration::{DEFAULT_LINES, DEFAULT_MAX_ATTEMPTS, MAX_MIN_AREA},
    io::error::{AlgorithmError, Result, invalid_parameter},
    render::{Painting, Palette},
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, trace};

/// Parameters controlling how a painting grows
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrowthConfig {
    /// Number of cuts to accept
    pub lines: usize,
    /// Smallest face area allowed, as a fraction of the unit square
    pub min_area: Option<f64>,
    /// Rejected candidates tolerated per cut; `None` retries forever
    pub max_attempts: Option<usize>,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            lines: DEFAULT_LINES,
            min_area: None,
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
        }
    }
}

impl GrowthConfig {
    /// Check the configuration before any cut is attempted
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the minimum area is not a finite value
    /// in `(0, 0.5]`, or if the attempt budget is zero. Above one half no cut
    /// of the unit square can ever be accepted.
    pub fn validate(&self) -> Result<()> {
        if let Some(min_area) = self.min_area {
            if !min_area.is_finite() || min_area <= 0.0 {
                return Err(invalid_parameter(
                    "min_area",
                    &min_area,
                    &"must be a positive fraction of the canvas",
                ));
            }
            if min_area > MAX_MIN_AREA {
                return Err(invalid_parameter(
                    "min_area",
                    &min_area,
                    &format!("no cut can leave two faces larger than {MAX_MIN_AREA}"),
                ));
            }
        }
        if self.max_attempts == Some(0) {
            return Err(invalid_parameter(
                "max_attempts",
                &0,
                &"must allow at least one candidate",
            ));
        }
        Ok(())
    }
}

/// Grows a canvas one accepted cut at a time
///
/// Each iteration draws candidate cuts until one bisects at least one polygon
/// and leaves every child at or above the minimum area. Candidates that find
/// no facing line, split nothing, or produce a small face are discarded.
pub struct PaintingGenerator<R: Rng = StdRng> {
    canvas: Canvas,
    config: GrowthConfig,
    rng: R,
    /// Total candidates rejected so far
    pub rejected: usize,
}

impl PaintingGenerator<StdRng> {
    /// Create a generator driven by a seeded standard RNG
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas dimensions or growth configuration are
    /// invalid
    pub fn new(config: GrowthConfig, width: u32, height: u32, seed: u64) -> Result<Self> {
        Self::with_rng(config, width, height, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PaintingGenerator<R> {
    /// Create a generator drawing from the supplied random source
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas dimensions or growth configuration are
    /// invalid
    pub fn with_rng(config: GrowthConfig, width: u32, height: u32, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            canvas: Canvas::new(width, height)?,
            config,
            rng,
            rejected: 0,
        })
    }

    /// Canvas in its current state
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Growth parameters in use
    pub const fn config(&self) -> &GrowthConfig {
        &self.config
    }

    /// Whether the requested number of cuts has been accepted
    pub const fn is_complete(&self) -> bool {
        self.canvas.cut_count() >= self.config.lines
    }

    /// Accept one more cut
    ///
    /// Returns `Ok(false)` without drawing anything once the painting is
    /// complete.
    ///
    /// # Errors
    ///
    /// Returns `RejectionLimit` if the attempt budget runs out before a
    /// candidate is accepted
    pub fn execute_iteration(&mut self) -> Result<bool> {
        if self.is_complete() {
            return Ok(false);
        }

        let cut_index = self.canvas.cut_count();
        let mut attempts = 0;
        loop {
            if self
                .config
                .max_attempts
                .is_some_and(|limit| attempts >= limit)
            {
                return Err(AlgorithmError::RejectionLimit {
                    cut: cut_index,
                    attempts,
                });
            }
            attempts += 1;

            let Some(candidate) = generate_candidate_line(self.canvas.lines(), &mut self.rng)
            else {
                trace!(cut = cut_index, "no facing line, resampling");
                self.rejected += 1;
                continue;
            };

            let plan = plan_split(self.canvas.polygons(), &candidate)?;
            if !plan.satisfies(self.config.min_area) {
                trace!(
                    cut = cut_index,
                    smallest = ?plan.smallest_area(),
                    "candidate rejected"
                );
                self.rejected += 1;
                continue;
            }

            debug!(
                cut = cut_index,
                attempts,
                split = plan.removed().len(),
                line = %candidate,
                "cut accepted"
            );
            self.canvas.apply_cut(candidate, plan)?;
            return Ok(true);
        }
    }

    /// Accept cuts until the painting is complete
    ///
    /// # Errors
    ///
    /// Propagates the first failing iteration
    pub fn run(&mut self) -> Result<()> {
        while self.execute_iteration()? {}
        Ok(())
    }

    /// Colour the faces with the generator's own random source
    pub fn into_painting(mut self, palette: &Palette) -> Painting {
        self.canvas.finish(palette, &mut self.rng)
    }
}
