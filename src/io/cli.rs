//! Command-line interface for batch generation of paintings

use crate::algorithm::executor::{GrowthConfig, PaintingGenerator};
use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_LINES, DEFAULT_MAX_ATTEMPTS, DEFAULT_MIN_PIXEL_AREA,
    DEFAULT_OUTPUT_DIR, DEFAULT_PAINTING_COUNT, DEFAULT_SEED, DEFAULT_WIDTH, OUTPUT_PREFIX,
    README_MARKER,
};
use crate::io::error::{Result, file_system_error, invalid_parameter};
use crate::io::image::export_painting_as_png;
use crate::io::progress::ProgressManager;
use crate::io::readme::{image_links, update_readme};
use crate::render::{Palette, render_svg};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

#[derive(Parser)]
#[command(name = "mondrian")]
#[command(
    author,
    version,
    about = "Generate Mondrian-style paintings by random orthogonal subdivision"
)]
/// Command-line arguments for the painting generator
pub struct Cli {
    /// Directory receiving the generated files
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Number of paintings to generate
    #[arg(short, long, default_value_t = DEFAULT_PAINTING_COUNT)]
    pub count: usize,

    /// Number of cuts per painting
    #[arg(short, long, default_value_t = DEFAULT_LINES)]
    pub lines: usize,

    /// Width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Smallest face area allowed, in square pixels
    #[arg(short, long, default_value_t = DEFAULT_MIN_PIXEL_AREA)]
    pub min_pixels: f64,

    /// Ignore the minimum face area entirely
    #[arg(long)]
    pub unconstrained: bool,

    /// Random seed of the first painting; later paintings count up from it
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Rejected candidates tolerated per cut (0 retries forever)
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Also write a PNG rendering next to each SVG
    #[arg(long)]
    pub png: bool,

    /// README whose `art` section receives links to the paintings
    #[arg(long, value_name = "PATH")]
    pub readme: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Minimum face area as a fraction of the canvas, if constrained
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a zero-sized canvas
    pub fn min_area(&self) -> Result<Option<f64>> {
        if self.unconstrained {
            return Ok(None);
        }
        let pixels = f64::from(self.width) * f64::from(self.height);
        if pixels <= 0.0 {
            return Err(invalid_parameter(
                "width x height",
                &format!("{}x{}", self.width, self.height),
                &"canvas must have a positive area",
            ));
        }
        Ok(Some(self.min_pixels / pixels))
    }

    /// Growth parameters derived from the arguments
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a zero-sized canvas
    pub fn growth_config(&self) -> Result<GrowthConfig> {
        Ok(GrowthConfig {
            lines: self.lines,
            min_area: self.min_area()?,
            max_attempts: (self.max_attempts > 0).then_some(self.max_attempts),
        })
    }
}

/// Orchestrates generation of a batch of paintings with progress tracking
pub struct BatchGenerator {
    cli: Cli,
    palette: Palette,
    progress_manager: Option<ProgressManager>,
}

impl BatchGenerator {
    /// Create a new batch generator with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            palette: Palette::mondrian(),
            progress_manager,
        }
    }

    /// Generate every painting and update the README if requested
    ///
    /// Returns the paths of the written SVG files.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid, a painting cannot be
    /// grown, or any output cannot be written
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let config = self.cli.growth_config()?;
        config.validate()?;

        std::fs::create_dir_all(&self.cli.output)
            .map_err(file_system_error(&self.cli.output, "create directory"))?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.count);
        }

        let mut written = Vec::with_capacity(self.cli.count);
        for index in 0..self.cli.count {
            let seed = self.cli.seed.wrapping_add(index as u64);
            written.push(self.process_painting(config, seed)?);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        if let Some(ref readme) = self.cli.readme {
            let targets = written
                .iter()
                .map(|path| relative_link(readme, path))
                .collect::<Vec<_>>();
            if update_readme(readme, README_MARKER, &image_links(&targets))? {
                info!(path = %readme.display(), paintings = targets.len(), "README updated");
            }
        }

        Ok(written)
    }

    fn process_painting(&self, config: GrowthConfig, seed: u64) -> Result<PathBuf> {
        let start_time = Instant::now();
        let svg_path = self.output_path(seed, "svg");
        let name = svg_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        if let Some(ref pm) = self.progress_manager {
            pm.start_painting(&name, config.lines);
        }

        let mut generator = PaintingGenerator::new(config, self.cli.width, self.cli.height, seed)?;
        while generator.execute_iteration()? {
            if let Some(ref pm) = self.progress_manager {
                pm.update_cuts(generator.canvas().cut_count(), generator.rejected);
            }
        }

        let rejected = generator.rejected;
        let painting = generator.into_painting(&self.palette);

        std::fs::write(&svg_path, render_svg(&painting))
            .map_err(file_system_error(&svg_path, "write"))?;

        if self.cli.png {
            export_painting_as_png(&painting, &self.output_path(seed, "png"))?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.complete_painting();
        }

        info!(
            path = %svg_path.display(),
            seed,
            faces = painting.faces.len(),
            rejected,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "painting written"
        );

        Ok(svg_path)
    }

    /// Path of the output file for `seed` with the given extension
    pub fn output_path(&self, seed: u64, extension: &str) -> PathBuf {
        self.cli
            .output
            .join(format!("{OUTPUT_PREFIX}{seed}.{extension}"))
    }
}

// Link targets are written relative to the README's own directory when possible
fn relative_link(readme: &Path, target: &Path) -> String {
    let base = readme.parent().unwrap_or_else(|| Path::new(""));
    target
        .strip_prefix(base)
        .unwrap_or(target)
        .to_string_lossy()
        .replace('\\', "/")
}
