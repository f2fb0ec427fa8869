//! Shot emission.
//!
//! Each FRCS shot becomes up to four lines, in this order:
//!
//! 1. `#UNITS TAPE=...` when the taping method differs from the previous shot
//! 2. `FROM <l,r,u,d>` when there are LRUDs at the from station
//! 3. a block comment, when the shot comment spans several lines
//! 4. the shot line itself, when both stations are present
//!
//! Diagonal and horizontal shots record their vertical offset separately, so
//! they are written with a zero inclination and the offset as target height.

use super::trip::TripWriter;
use crate::error::ConvertError;
use grotto_frcs::{Lruds, Shot, ShotKind};
use grotto_units::{Angle, AngleUnit, Length};
use grotto_walls::{self as walls, Sighting, SrvLine, TapingMethod, UnitsOption};

impl TripWriter<'_> {
    /// Write one shot, given the taping method in effect after the previous
    /// shot. Returns the taping method in effect after this one.
    pub(super) fn write_shot(
        &mut self,
        index: usize,
        shot: &Shot,
        last_taping_method: TapingMethod,
    ) -> Result<TapingMethod, ConvertError> {
        let frontsight_azimuth = frontsight_azimuth(shot);
        let distance = self.recorded_distance(index, shot)?;

        let taping_method = taping_method(shot.kind);
        if taping_method != last_taping_method {
            tracing::trace!(
                trip = self.trip_number,
                shot = index,
                from = ?last_taping_method,
                to = ?taping_method,
                "taping method changed"
            );
            self.lines
                .push(SrvLine::units(vec![UnitsOption::TapingMethod(taping_method)]));
        }

        if let (Some(from), Some(lruds)) = (&shot.from, &shot.from_lruds) {
            self.lines.push(SrvLine::station_lruds(from, convert_lruds(lruds)));
        }

        if let (Some(from), Some(to)) = (&shot.from, &shot.to) {
            let mut walls_shot = walls::Shot::compass_and_tape(
                from,
                to,
                distance,
                Sighting::from_readings(frontsight_azimuth, shot.backsight_azimuth),
                inclination(shot),
            );
            if let Some(lruds) = &shot.to_lruds {
                walls_shot = walls_shot.with_lruds(convert_lruds(lruds));
            }
            if let Some(height) = target_height(shot) {
                walls_shot = walls_shot.with_target_height(height);
            }

            match shot.comment.as_deref().filter(|comment| !comment.is_empty()) {
                Some(comment) if comment.contains(['\n', '\r']) => {
                    self.lines.push(SrvLine::comment(comment));
                }
                Some(comment) => walls_shot = walls_shot.with_comment(comment),
                None => {}
            }
            self.lines.push(SrvLine::Shot(walls_shot));
        }

        Ok(taping_method)
    }

    fn recorded_distance(&self, index: usize, shot: &Shot) -> Result<Length, ConvertError> {
        match shot.kind {
            ShotKind::Horizontal => shot.horizontal_distance.ok_or_else(|| {
                ConvertError::MissingHorizontalDistance {
                    trip: self.trip_number,
                    shot: index,
                    from: shot.from.clone(),
                    to: shot.to.clone(),
                }
            }),
            ShotKind::Normal | ShotKind::Diagonal => Ok(shot.distance),
        }
    }
}

/// The recorded frontsight azimuth, or 0° for a non-vertical shot that has no
/// azimuth at all. Walls needs some bearing on every shot that is not
/// straight up or down.
fn frontsight_azimuth(shot: &Shot) -> Option<Angle> {
    if shot.frontsight_azimuth.is_some() || shot.backsight_azimuth.is_some() {
        return shot.frontsight_azimuth;
    }
    let non_vertical = |inclination: Option<Angle>| {
        inclination.is_some_and(|angle| angle.abs().get(AngleUnit::Degrees) != 90.0)
    };
    if non_vertical(shot.frontsight_inclination) || non_vertical(shot.backsight_inclination) {
        Some(Angle::degrees(0.0))
    } else {
        None
    }
}

fn taping_method(kind: ShotKind) -> TapingMethod {
    match kind {
        ShotKind::Diagonal => TapingMethod::InstrumentToStation,
        ShotKind::Normal | ShotKind::Horizontal => TapingMethod::InstrumentToTarget,
    }
}

fn inclination(shot: &Shot) -> Sighting {
    match shot.kind {
        ShotKind::Normal => {
            Sighting::from_readings(shot.frontsight_inclination, shot.backsight_inclination)
        }
        ShotKind::Diagonal | ShotKind::Horizontal => {
            Sighting::Frontsight(Some(Angle::degrees(0.0)))
        }
    }
}

/// FRCS vertical offsets are measured down from the instrument; Walls target
/// heights are measured from the target down to the station.
fn target_height(shot: &Shot) -> Option<Length> {
    match shot.kind {
        ShotKind::Normal => None,
        ShotKind::Diagonal | ShotKind::Horizontal => shot.vertical_distance.map(|v| v.negate()),
    }
}

fn convert_lruds(lruds: &Lruds) -> walls::Lruds {
    walls::Lruds::new(lruds.left, lruds.right, lruds.up, lruds.down)
}
