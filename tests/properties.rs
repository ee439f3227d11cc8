use mapty::app::App;
use mapty::form::{RawForm, validate};
use mapty::render::TextRenderer;
use mapty::store::{JsonFileStore, MemoryStore, Store};
use mapty::types::{Activity, Coords, Workout, WorkoutKind};
use proptest::prelude::*;
use proptest::test_runner::Config;

fn any_kind() -> impl Strategy<Value = WorkoutKind> {
    prop_oneof![Just(WorkoutKind::Running), Just(WorkoutKind::Cycling)]
}

/// Everyday values plus both ends of the f64 range.
fn magnitude() -> impl Strategy<Value = f64> {
    prop_oneof![
        1e-310f64..1e-300,
        0.1f64..500.0,
        1e300f64..f64::MAX,
    ]
}

fn coords() -> impl Strategy<Value = Coords> {
    (-90.0f64..90.0, -180.0f64..180.0).prop_map(|(lat, lng)| Coords::new(lat, lng))
}

fn form(distance: f64, duration: f64, rate: f64) -> RawForm {
    RawForm {
        distance: distance.to_string(),
        duration: duration.to_string(),
        cadence: rate.to_string(),
        elevation: rate.to_string(),
    }
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn derived_metric_matches_formula(
        kind in any_kind(),
        distance in 0.1f64..500.0,
        duration in 1.0f64..600.0,
        rate in 1.0f64..300.0,
    ) {
        let input = validate(kind, &form(distance, duration, rate));
        prop_assert!(input.is_ok());
        let input = input.expect("valid input");
        prop_assert_eq!(input.distance, distance);
        prop_assert_eq!(input.duration, duration);

        let w = Workout::new(kind, Coords::new(0.0, 0.0), input.distance, input.duration, input.rate);
        match w.activity {
            Activity::Running { cadence, pace } => {
                prop_assert_eq!(kind, WorkoutKind::Running);
                prop_assert_eq!(cadence, rate);
                prop_assert_eq!(pace, duration / distance);
            }
            Activity::Cycling { elevation_gain, speed } => {
                prop_assert_eq!(kind, WorkoutKind::Cycling);
                prop_assert_eq!(elevation_gain, rate);
                prop_assert_eq!(speed, distance / (duration / 60.0));
            }
        }
    }

    #[test]
    fn accepted_workouts_always_reload(
        kind in any_kind(),
        distance in magnitude(),
        duration in magnitude(),
        rate in -1000.0f64..1000.0,
    ) {
        if let Ok(input) = validate(kind, &form(distance, duration, rate)) {
            let w = Workout::new(kind, Coords::new(1.0, 2.0), input.distance, input.duration, input.rate);
            let mut store = MemoryStore::new();
            store.save_all(std::slice::from_ref(&w)).expect("save");

            let loaded = store.load_all().expect("load").expect("snapshot");
            prop_assert_eq!(loaded, vec![w]);
        }
    }

    #[test]
    fn file_snapshot_round_trips_in_order(
        entries in prop::collection::vec(
            (any_kind(), coords(), 0.1f64..500.0, 1.0f64..600.0, 0.0f64..3000.0),
            1..12,
        ),
    ) {
        let workouts: Vec<Workout> = entries
            .into_iter()
            .map(|(kind, at, distance, duration, rate)| Workout::new(kind, at, distance, duration, rate))
            .collect();

        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = JsonFileStore::in_dir(dir.path());
        store.save_all(&workouts).expect("save");

        let loaded = store.load_all().expect("load").expect("snapshot");
        prop_assert_eq!(loaded, workouts);
    }

    #[test]
    fn list_order_follows_submissions(clicks in prop::collection::vec(coords(), 1..8)) {
        let mut app = App::new(MemoryStore::new(), TextRenderer::new(false)).expect("app");
        app.on_position(Ok(Coords::new(0.0, 0.0))).expect("map");

        for at in &clicks {
            app.on_map_click(*at).expect("click");
            app.submit(&form(5.0, 25.0, 170.0)).expect("submit");
        }

        let recorded: Vec<Coords> = app.workouts().iter().map(|w| w.coords).collect();
        prop_assert_eq!(recorded, clicks);
    }
}
