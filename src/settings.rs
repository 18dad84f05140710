use clap::Parser;

use crate::ui::ViewMode;

pub const DEFAULT_TOAST_SECONDS: u64 = 4;

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = "Sacrarium LED control panel")]
pub struct Cli {
    /// Print the starting installation state as JSON and exit, without
    /// opening a window
    #[arg(long = "headless")]
    pub headless_mode: bool,

    #[arg(long = "loglevel",default_value_t=String::from("info"))]
    pub log_level: String,

    /// Which tab to show on launch
    #[arg(long = "view", value_enum, default_value_t = ViewMode::Objects)]
    pub initial_view: ViewMode,

    /// How long, in seconds, a notification stays on screen
    #[arg(long = "toast.seconds", default_value_t = DEFAULT_TOAST_SECONDS)]
    pub toast_seconds: u64,
}

impl Default for Cli {
    fn default() -> Self {
        Cli {
            headless_mode: false,
            log_level: String::from("info"),
            initial_view: ViewMode::Objects,
            toast_seconds: DEFAULT_TOAST_SECONDS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_defaults() {
        let cli = Cli::parse_from(["sacrarium-led"]);
        assert!(!cli.headless_mode);
        assert_eq!(cli.log_level, "info");
        assert_eq!(cli.initial_view, ViewMode::Objects);
        assert_eq!(cli.toast_seconds, DEFAULT_TOAST_SECONDS);
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from([
            "sacrarium-led",
            "--headless",
            "--loglevel",
            "debug",
            "--view",
            "zones",
            "--toast.seconds",
            "10",
        ]);
        assert!(cli.headless_mode);
        assert_eq!(cli.log_level, "debug");
        assert_eq!(cli.initial_view, ViewMode::Zones);
        assert_eq!(cli.toast_seconds, 10);
    }
}
