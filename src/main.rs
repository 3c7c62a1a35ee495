//! Replay driver: run a recorded landmark frame stream through the
//! recognizer the way the host game drives it live.
//!
//! Input is JSONL, one frame per line as an array of landmarks
//! (`[{"x":0.5,"y":0.2,"z":0.0,"visibility":1.0}, ...]`); an empty array is a
//! no-detection tick. The driver debounces host-side: a label is announced
//! only after it repeats for a streak of consecutive ticks.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, warn};

use gesture_recognition::config::Config;
use gesture_recognition::landmark::Frame;
use gesture_recognition::{constants, Gesture, GestureRecognizer};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSONL frame stream to replay (reads stdin when omitted)
    #[arg(short, long)]
    frames: Option<PathBuf>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<PathBuf>,

    /// Override buffer capacity in frames
    #[arg(long)]
    capacity: Option<usize>,

    /// Consecutive ticks a label must repeat before it is announced
    #[arg(long, default_value_t = constants::DEFAULT_DEBOUNCE_STREAK)]
    streak: usize,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    let mut config = match &args.config {
        Some(path) => Config::from_file(path).with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(capacity) = args.capacity {
        config.buffer.capacity = capacity;
    }
    config.validate().context("invalid configuration")?;

    let reader: Box<dyn BufRead> = match &args.frames {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening frame stream {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut recognizer = GestureRecognizer::new(&config);
    let mut debouncer = Debouncer::new(args.streak);
    let mut ticks = 0usize;
    let mut announced = 0usize;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line.context("reading frame stream")?;
        if line.trim().is_empty() {
            continue;
        }
        let frame: Frame = match serde_json::from_str(&line) {
            Ok(frame) => frame,
            Err(e) => {
                warn!("skipping malformed frame on line {}: {e}", line_no + 1);
                continue;
            }
        };

        ticks += 1;
        let label = recognizer.process(frame);
        debug!("tick {ticks}: {:?}", label);

        if let Some(gesture) = debouncer.update(label) {
            announced += 1;
            info!("tick {ticks}: {gesture}");
            println!("{ticks}\t{gesture}");
        }
    }

    info!("processed {ticks} ticks, announced {announced} gestures");
    Ok(())
}

/// Host-side debounce: require the same label for a full streak of
/// consecutive ticks, then announce it once until the label changes.
struct Debouncer {
    streak: usize,
    candidate: Option<Gesture>,
    run: usize,
    announced: Option<Gesture>,
}

impl Debouncer {
    fn new(streak: usize) -> Self {
        Self {
            streak: streak.max(1),
            candidate: None,
            run: 0,
            announced: None,
        }
    }

    fn update(&mut self, label: Option<Gesture>) -> Option<Gesture> {
        if label == self.candidate {
            self.run += 1;
        } else {
            self.candidate = label;
            self.run = 1;
        }

        match self.candidate {
            Some(gesture) if self.run >= self.streak && self.announced != Some(gesture) => {
                self.announced = Some(gesture);
                Some(gesture)
            }
            None if self.run >= self.streak => {
                self.announced = None;
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debounce_requires_streak() {
        let mut d = Debouncer::new(3);
        assert_eq!(d.update(Some(Gesture::Hot)), None);
        assert_eq!(d.update(Some(Gesture::Hot)), None);
        assert_eq!(d.update(Some(Gesture::Hot)), Some(Gesture::Hot));
        // Already announced; no repeat
        assert_eq!(d.update(Some(Gesture::Hot)), None);
    }

    #[test]
    fn test_debounce_resets_on_label_change() {
        let mut d = Debouncer::new(2);
        assert_eq!(d.update(Some(Gesture::Hot)), None);
        assert_eq!(d.update(Some(Gesture::Cold)), None);
        assert_eq!(d.update(Some(Gesture::Cold)), Some(Gesture::Cold));
    }

    #[test]
    fn test_debounce_reannounces_after_gap() {
        let mut d = Debouncer::new(2);
        assert_eq!(d.update(Some(Gesture::Hot)), None);
        assert_eq!(d.update(Some(Gesture::Hot)), Some(Gesture::Hot));
        // A held gap clears the latch
        assert_eq!(d.update(None), None);
        assert_eq!(d.update(None), None);
        assert_eq!(d.update(Some(Gesture::Hot)), None);
        assert_eq!(d.update(Some(Gesture::Hot)), Some(Gesture::Hot));
    }
}
