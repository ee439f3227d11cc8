use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

use crate::types::{Coords, WorkoutKind};
use crate::utils::parse_coords;

#[derive(Parser, Debug)]
#[command(
    name = "mapty",
    about = "Record running and cycling workouts at map locations"
)]
pub struct Cli {
    /// Workout snapshot file.
    ///
    /// Default: `<platform data dir>/mapty/workouts.json`
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Your current position. Without it the map cannot open.
    #[arg(long, global = true, value_name = "LAT,LNG", value_parser = parse_coords, allow_hyphen_values = true)]
    pub here: Option<Coords>,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Record a workout at a map location.
    Add {
        /// running or cycling
        kind: WorkoutKind,

        /// Map location that was clicked.
        #[arg(long, value_name = "LAT,LNG", value_parser = parse_coords, allow_hyphen_values = true)]
        at: Coords,

        /// Distance in km.
        #[arg(long, allow_hyphen_values = true)]
        distance: Option<String>,

        /// Duration in minutes.
        #[arg(long, allow_hyphen_values = true)]
        duration: Option<String>,

        /// Steps per minute (running).
        #[arg(long, allow_hyphen_values = true)]
        cadence: Option<String>,

        /// Elevation gain in meters (cycling).
        #[arg(long, allow_hyphen_values = true)]
        elevation: Option<String>,
    },

    /// Print every workout, oldest first (the default).
    ///
    /// Without --here the map cannot open: entries are still printed, but
    /// no markers.
    List {
        /// Also print a line per map marker.
        #[arg(long)]
        markers: bool,
    },

    /// Print the workout list as HTML, newest first.
    ///
    /// Without --here the map cannot open: entries are still printed, but
    /// no markers.
    Html,

    /// Center the map on a workout.
    Show { id: Uuid },

    /// Delete all recorded workouts.
    Clear,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_add_with_negative_coords() {
        let cli = Cli::try_parse_from([
            "mapty",
            "--here",
            "-33.86,151.2",
            "add",
            "cycling",
            "--at",
            "-33.9,151.21",
            "--distance",
            "20",
            "--duration",
            "60",
            "--elevation",
            "-15",
        ])
        .unwrap();

        assert_eq!(cli.here, Some(Coords::new(-33.86, 151.2)));
        let Some(Cmd::Add {
            kind,
            at,
            elevation,
            cadence,
            ..
        }) = cli.cmd
        else {
            panic!("expected add");
        };
        assert_eq!(kind, WorkoutKind::Cycling);
        assert_eq!(at, Coords::new(-33.9, 151.21));
        assert_eq!(elevation.as_deref(), Some("-15"));
        assert_eq!(cadence, None);
    }

    #[test]
    fn no_subcommand_means_list() {
        let cli = Cli::try_parse_from(["mapty", "-vv"]).unwrap();
        assert!(cli.cmd.is_none());
        assert_eq!(cli.verbose, 2);
    }
}
