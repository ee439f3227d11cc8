//! The application controller.
//!
//! `App` owns the workout list, the pending map click, the map view and the
//! form. Every event (position resolved, map click, kind change, submit,
//! list click) is a method call; nothing here is shared across threads.

use uuid::Uuid;

use crate::dlog;
use crate::error::{AppError, GeoError};
use crate::form::{self, FormState, RawForm};
use crate::geo::{MAP_ZOOM_LEVEL, MapView};
use crate::render::{ListEntry, Marker, Renderer};
use crate::store::Store;
use crate::types::{Coords, Workout, WorkoutKind};

#[derive(Debug, Clone, Copy, PartialEq)]
enum MapState {
    /// Position not resolved yet.
    Waiting,
    Ready(MapView),
    /// Position lookup failed; stays this way for the session.
    Unavailable,
}

pub struct App<S, R> {
    store: S,
    renderer: R,
    workouts: Vec<Workout>,
    pending: Option<Coords>,
    map: MapState,
    form: FormState,
}

impl<S: Store, R: Renderer> App<S, R> {
    /// Hydrates the list from `store`. A missing snapshot is an empty list.
    pub fn new(store: S, renderer: R) -> Result<Self, AppError> {
        let workouts = store.load_all()?.unwrap_or_default();
        tracing::info!(count = workouts.len(), "workouts loaded");

        Ok(Self {
            store,
            renderer,
            workouts,
            pending: None,
            map: MapState::Waiting,
            form: FormState::default(),
        })
    }

    /// Consumes the startup position lookup.
    ///
    /// On success the map opens at the position and every loaded workout is
    /// drawn, oldest first. On failure the map never opens.
    pub fn on_position(&mut self, position: Result<Coords, GeoError>) -> Result<(), AppError> {
        if self.map != MapState::Waiting {
            tracing::warn!("position already resolved; ignoring");
            return Ok(());
        }

        match position {
            Ok(center) => {
                self.map = MapState::Ready(MapView::new(center));
                tracing::info!(center = %center, zoom = MAP_ZOOM_LEVEL, "map ready");
                for w in &self.workouts {
                    self.renderer.render_entry(&ListEntry::from(w));
                    self.renderer.render_marker(&Marker::from(w));
                }
                Ok(())
            }
            Err(e) => {
                self.map = MapState::Unavailable;
                tracing::error!(err = %e, "position lookup failed; map unavailable");
                Err(e.into())
            }
        }
    }

    /// Remembers the clicked location (replacing any earlier click) and opens the form.
    pub fn on_map_click(&mut self, coords: Coords) -> Result<(), AppError> {
        self.map_view()?;
        if let Some(prev) = self.pending.replace(coords) {
            dlog!("pending click {prev} replaced by {coords}");
        }
        self.form.show();
        Ok(())
    }

    pub fn on_kind_change(&mut self, kind: WorkoutKind) {
        self.form.set_kind(kind);
        dlog!("form kind={kind} rate_field={:?}", self.form.rate_field());
    }

    /// Validates and records a new workout at the pending click location.
    /// The kind is whatever the form's selector shows.
    ///
    /// Validation and location errors change nothing. A store error is
    /// returned after the workout is already in the list; it is not retried.
    pub fn submit(&mut self, raw: &RawForm) -> Result<&Workout, AppError> {
        let input = form::validate(self.form.kind, raw)?;
        let coords = self.pending.ok_or(AppError::NoPendingLocation)?;

        let workout = Workout::new(
            input.kind,
            coords,
            input.distance,
            input.duration,
            input.rate,
        );
        self.append(workout)?;

        self.pending = None;
        self.form.hide();
        self.store.save_all(&self.workouts)?;

        let added = &self.workouts[self.workouts.len() - 1];
        tracing::info!(
            id = %added.id,
            kind = %added.kind(),
            coords = %added.coords,
            "workout recorded"
        );
        Ok(added)
    }

    /// Appends an already-built workout and draws it.
    fn append(&mut self, workout: Workout) -> Result<(), AppError> {
        if self.workouts.iter().any(|w| w.id == workout.id) {
            return Err(AppError::DuplicateId(workout.id));
        }
        self.renderer.render_marker(&Marker::from(&workout));
        self.renderer.render_entry(&ListEntry::from(&workout));
        self.workouts.push(workout);
        Ok(())
    }

    /// Recenters the map on a workout, as when its list entry is clicked.
    pub fn focus(&mut self, id: Uuid) -> Result<&MapView, AppError> {
        let coords = self
            .workouts
            .iter()
            .find(|w| w.id == id)
            .map(|w| w.coords)
            .ok_or(AppError::UnknownWorkout(id))?;

        let MapState::Ready(view) = &mut self.map else {
            return Err(AppError::MapUnavailable);
        };
        view.set_view(coords, MAP_ZOOM_LEVEL);
        dlog!("focused id={id} center={coords}");
        Ok(view)
    }

    /// Drops every workout, in memory and in the store, and resets the form.
    pub fn clear(&mut self) -> Result<(), AppError> {
        self.store.clear()?;
        let n = self.workouts.len();
        self.workouts.clear();
        self.pending = None;
        self.form.hide();
        tracing::info!(removed = n, "workouts cleared");
        Ok(())
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn find(&self, id: Uuid) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == id)
    }

    pub const fn pending(&self) -> Option<Coords> {
        self.pending
    }

    pub const fn form(&self) -> &FormState {
        &self.form
    }

    pub const fn map(&self) -> Option<&MapView> {
        match &self.map {
            MapState::Ready(view) => Some(view),
            MapState::Waiting | MapState::Unavailable => None,
        }
    }

    fn map_view(&self) -> Result<&MapView, AppError> {
        self.map().ok_or(AppError::MapUnavailable)
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
