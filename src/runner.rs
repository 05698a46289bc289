use crate::border;
use crate::config::{Config, Job};
use crate::image_io;
use crate::padding;
use crate::report::{CropReport, PadReport};
use image::{DynamicImage, ImageFormat};
use serde::Serialize;
use std::fmt::Display;

/// Load the input, apply the configured edit, write the output and print
/// a summary to stdout
pub fn run(config: &Config) -> anyhow::Result<()> {
    let image = image_io::load(&config.input)?;

    match config.job {
        Job::Trim { mode, sensitivity } => {
            tracing::info!(
                "Trimming {:?} ({} mode, sensitivity {})",
                config.input,
                mode.as_str(),
                sensitivity
            );
            let outcome = border::crop_to_content(&image, sensitivity, mode);
            image_io::save(&outcome.image, &config.output, None)?;

            let report = CropReport::new(&outcome, mode, sensitivity, &config.output);
            tracing::info!("Trim completed in {}ms", outcome.time_ms);
            print_report(&report, config.json)
        }
        Job::Pad { percent } => {
            tracing::info!("Padding {:?} by {}%", config.input, percent);
            let outcome = padding::pad(&image, percent)?;
            let report = PadReport::new(&outcome, percent, &config.output);

            let padded = DynamicImage::ImageRgba8(outcome.image);
            image_io::save(&padded, &config.output, Some(ImageFormat::Png))?;

            tracing::info!("Padding completed in {}ms", report.elapsed_ms);
            print_report(&report, config.json)
        }
    }
}

fn print_report<R: Serialize + Display>(report: &R, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}
