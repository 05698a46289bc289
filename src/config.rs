use crate::border::CropMode;
use crate::{Args, Command};
use std::path::{Path, PathBuf};

/// What to do with the loaded image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Job {
    Trim { mode: CropMode, sensitivity: u8 },
    Pad { percent: u32 },
}

/// Resolved settings for a single run
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub job: Job,
    pub json: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let (input, output, job) = match args.command {
            Command::Trim {
                input,
                output,
                tolerance,
            } => {
                let output = output.unwrap_or_else(|| input.clone());
                let job = Job::Trim {
                    mode: CropMode::Tolerance,
                    sensitivity: tolerance,
                };
                (input, output, job)
            }
            Command::TrimWhite {
                input,
                output,
                threshold,
            } => {
                let output = output.unwrap_or_else(|| suffixed_path(&input, "_no_border", None));
                let job = Job::Trim {
                    mode: CropMode::Threshold,
                    sensitivity: threshold,
                };
                (input, output, job)
            }
            Command::Pad {
                input,
                output,
                percent,
            } => {
                let output =
                    output.unwrap_or_else(|| suffixed_path(&input, "_padded", Some("png")));
                (input, output, Job::Pad { percent })
            }
        };

        Self {
            input,
            output,
            job,
            json: args.json,
        }
    }
}

/// `dir/name.ext` -> `dir/name<suffix>.ext`, optionally replacing the extension
fn suffixed_path(input: &Path, suffix: &str, extension: Option<&str>) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = extension
        .map(str::to_string)
        .or_else(|| input.extension().map(|e| e.to_string_lossy().into_owned()));

    let file_name = match extension {
        Some(ext) => format!("{}{}.{}", stem, suffix, ext),
        None => format!("{}{}", stem, suffix),
    };
    input.with_file_name(file_name)
}
