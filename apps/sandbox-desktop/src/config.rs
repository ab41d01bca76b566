use clap::Parser;
use sandbox_assets::{DEFAULT_SPRITE_PATH, Flip};
use std::path::PathBuf;
use winit::dpi::{PhysicalPosition, PhysicalSize};

pub const WINDOW_TITLE: &str = "bababooey";

#[derive(Parser, Debug)]
#[command(name = "sandbox-desktop", about = "2D sprite sandbox")]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Sprite drawn for the player
    #[arg(long, default_value = DEFAULT_SPRITE_PATH)]
    pub sprite: PathBuf,

    /// Flip the sprite vertically when loading it
    #[arg(long)]
    pub flip_sprite: bool,

    /// Open a centered window this fraction of the monitor size instead of
    /// a maximized one
    #[arg(long, value_name = "F", allow_negative_numbers = true)]
    pub window_fraction: Option<f32>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("window fraction must be in (0, 1], got {0}")]
    InvalidFraction(f32),
}

/// How the window is sized against the monitor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowPolicy {
    /// Monitor-sized and maximized.
    Maximized,
    /// `fraction` of the monitor size, centered on it.
    Centered { fraction: f32 },
}

#[derive(Debug, Clone)]
pub struct SandboxConfig {
    pub title: String,
    pub sprite_path: PathBuf,
    pub flip: Flip,
    pub window: WindowPolicy,
}

impl SandboxConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let window = match cli.window_fraction {
            None => WindowPolicy::Maximized,
            Some(f) if f > 0.0 && f <= 1.0 => WindowPolicy::Centered { fraction: f },
            Some(f) => return Err(ConfigError::InvalidFraction(f)),
        };
        Ok(Self {
            title: WINDOW_TITLE.to_string(),
            sprite_path: cli.sprite.clone(),
            flip: if cli.flip_sprite {
                Flip::Vertical
            } else {
                Flip::None
            },
            window,
        })
    }
}

/// Where the window goes on its monitor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowPlacement {
    pub size: PhysicalSize<u32>,
    pub position: PhysicalPosition<i32>,
    pub maximized: bool,
}

impl WindowPlacement {
    pub fn compute(
        policy: WindowPolicy,
        monitor_size: PhysicalSize<u32>,
        monitor_position: PhysicalPosition<i32>,
    ) -> Self {
        let (size, maximized) = match policy {
            WindowPolicy::Maximized => (monitor_size, true),
            WindowPolicy::Centered { fraction } => {
                let scale = |v: u32| ((v as f32 * fraction).round() as u32).max(1);
                (
                    PhysicalSize::new(scale(monitor_size.width), scale(monitor_size.height)),
                    false,
                )
            }
        };
        let offset = |monitor: u32, window: u32| monitor as i32 / 2 - window as i32 / 2;
        let position = PhysicalPosition::new(
            monitor_position.x + offset(monitor_size.width, size.width),
            monitor_position.y + offset(monitor_size.height, size.height),
        );
        Self {
            size,
            position,
            maximized,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let argv = std::iter::once("sandbox-desktop").chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn no_arguments_matches_defaults() {
        let config = SandboxConfig::from_cli(&parse(&[])).unwrap();
        assert_eq!(config.title, "bababooey");
        assert_eq!(config.sprite_path, PathBuf::from("models/Sprite-0002.png"));
        assert_eq!(config.flip, Flip::None);
        assert_eq!(config.window, WindowPolicy::Maximized);
    }

    #[test]
    fn flags_override_defaults() {
        let args = [
            "-v",
            "--sprite",
            "a.png",
            "--flip-sprite",
            "--window-fraction",
            "0.75",
        ];
        let cli = parse(&args);
        assert!(cli.verbose);
        let config = SandboxConfig::from_cli(&cli).unwrap();
        assert_eq!(config.sprite_path, PathBuf::from("a.png"));
        assert_eq!(config.flip, Flip::Vertical);
        assert_eq!(config.window, WindowPolicy::Centered { fraction: 0.75 });
    }

    #[test]
    fn out_of_range_fraction_is_rejected() {
        for bad in ["0", "1.5", "-0.5"] {
            let cli = parse(&["--window-fraction", bad]);
            let expected: f32 = bad.parse().unwrap();
            assert!(matches!(
                SandboxConfig::from_cli(&cli),
                Err(ConfigError::InvalidFraction(f)) if f == expected
            ));
        }
    }

    #[test]
    fn maximized_fills_the_monitor() {
        let placement = WindowPlacement::compute(
            WindowPolicy::Maximized,
            PhysicalSize::new(1920, 1080),
            PhysicalPosition::new(1920, 0),
        );
        assert!(placement.maximized);
        assert_eq!(placement.size, PhysicalSize::new(1920, 1080));
        assert_eq!(placement.position, PhysicalPosition::new(1920, 0));
    }

    #[test]
    fn centered_window_is_centered_on_its_monitor() {
        let placement = WindowPlacement::compute(
            WindowPolicy::Centered { fraction: 0.75 },
            PhysicalSize::new(1920, 1080),
            PhysicalPosition::new(-1920, 100),
        );
        assert!(!placement.maximized);
        assert_eq!(placement.size, PhysicalSize::new(1440, 810));
        let expected = PhysicalPosition::new(-1920 + 240, 100 + 135);
        assert_eq!(placement.position, expected);
    }

    #[test]
    fn tiny_fraction_keeps_a_pixel() {
        let placement = WindowPlacement::compute(
            WindowPolicy::Centered { fraction: 0.0001 },
            PhysicalSize::new(100, 100),
            PhysicalPosition::new(0, 0),
        );
        assert_eq!(placement.size, PhysicalSize::new(1, 1));
    }
}
