use std::path::PathBuf;

use clap::Parser;

/// Command line / environment configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "launch-dash", version, about = "SpaceX launch records dashboard")]
pub struct Args {
    /// Launch records table (.csv, .json or .parquet).
    #[arg(long, short, env = "LAUNCH_DASH_DATA", default_value = "spacex_launch_dash.csv")]
    pub data: PathBuf,

    /// Initial window width in points.
    #[arg(long, default_value_t = 1280.0)]
    pub width: f32,

    /// Initial window height in points.
    #[arg(long, default_value_t = 900.0)]
    pub height: f32,

    /// Print the initial outputs as JSON and exit without opening a window.
    #[arg(long)]
    pub print_outputs: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["launch-dash"]);
        assert_eq!(args.width, 1280.0);
        assert_eq!(args.height, 900.0);
        assert!(!args.print_outputs);
    }

    #[test]
    fn explicit_flags() {
        let args = Args::parse_from([
            "launch-dash",
            "--data",
            "launches.parquet",
            "--width",
            "800",
            "--print-outputs",
        ]);
        assert_eq!(args.data, PathBuf::from("launches.parquet"));
        assert_eq!(args.width, 800.0);
        assert!(args.print_outputs);
    }
}
