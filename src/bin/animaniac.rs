//! Sprite-sheet animation player.
//!
//! Plays an image and its animation configuration at a fixed tick rate,
//! optionally dumping every changed frame as PNG and hot-reloading both files
//! as they are edited. `--check` only validates the configuration and prints
//! the resolved faces as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use animaniac::{
	ParseOptions,
	animaniac_types::config::{self, constants::MAX_TICK_RATE},
	host::{App, AppConfig, DisplaySink, PngDumpSink, RecordingSink, default_config_path, spawn_stdin_listener},
};
use clap::Parser;

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	if cli.check {
		run_check(&cli)
	} else {
		run_play(cli)
	}
}

#[derive(Parser)]
#[command(name = "animaniac")]
#[command(version)]
#[command(about = "Play sprite-sheet animations described by a text configuration", long_about = None)]
struct Cli {
	/// Sprite sheet image
	#[arg(value_name = "IMAGE")]
	image: PathBuf,

	/// Animation configuration [default: IMAGE with a .cfg extension]
	#[arg(short, long, value_name = "PATH")]
	config: Option<PathBuf>,

	/// Tick rate in Hz
	#[arg(short, long, value_name = "HZ", env = "ANIMANIAC_RATE", default_value_t = 60,
		value_parser = clap::value_parser!(u32).range(1..=MAX_TICK_RATE as i64))]
	rate: u32,

	/// Face to start with
	#[arg(short, long, value_name = "NAME")]
	face: Option<String>,

	/// Stop after this many ticks
	#[arg(short, long, value_name = "N")]
	ticks: Option<u64>,

	/// Write every changed frame to DIR/frame_NNNNN.png
	#[arg(short, long, value_name = "DIR")]
	dump: Option<PathBuf>,

	/// Reload the image and configuration when they change
	#[arg(short, long, default_value_t = false)]
	watch: bool,

	/// Quit when standard input is closed
	#[arg(long, default_value_t = false)]
	quit_on_eof: bool,

	/// Validate the configuration, print its faces as JSON and exit
	#[arg(long, default_value_t = false)]
	check: bool,
}

impl Cli {
	fn config_path(&self) -> PathBuf {
		self.config.clone().unwrap_or_else(|| default_config_path(&self.image))
	}
}

fn run_check(cli: &Cli) -> Result<()> {
	let path = cli.config_path();
	let src = std::fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;
	let faces = config::load(&src, &path, &ParseOptions::new(cli.rate))?;
	let json = serde_json::to_string_pretty(&faces).context("Failed to serialize faces")?;
	println!("{json}");
	Ok(())
}

fn run_play(cli: Cli) -> Result<()> {
	let config = AppConfig {
		config_path: cli.config_path(),
		image_path: cli.image,
		rate: cli.rate,
		initial_face: cli.face,
		max_ticks: cli.ticks,
		watch: cli.watch,
	};

	let sink: Box<dyn DisplaySink> = match cli.dump {
		Some(dir) => Box::new(PngDumpSink::new(dir).context("Failed to prepare dump directory")?),
		None => Box::new(RecordingSink::with_limit(0)),
	};

	let mut app = App::new(config, sink).context("Failed to start player")?;
	if cli.quit_on_eof {
		spawn_stdin_listener(app.sender());
	}
	let reason = app.run()?;
	log::debug!("stopped: {reason:?}");
	Ok(())
}
