// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Translation between the declarative schedule block and the wire schedule.
//!
//! The declarative block is flat: every field can be written whatever the
//! frequency. Before anything reaches the wire it is lifted into
//! [`ScheduleRule`], whose variants only hold the fields their frequency
//! honours:
//!
//! | frequency | start | end | workdays only | interval | last day |
//! |-----------|-------|-----|---------------|----------|----------|
//! | never     |       |     |               |          |          |
//! | once      | yes   |     |               |          |          |
//! | hourly    | yes   | yes | yes           |          |          |
//! | daily     | yes   | yes | yes           |          |          |
//! | weekly    | yes   | yes |               |          |          |
//! | monthly   | yes   | yes |               |          | yes      |
//! | custom    | yes   | yes | yes           | required |          |
//!
//! An end time on `once` or `never` is rejected. Every other ineligible field
//! is left off the wire.

use crate::error::DomainError;
use crate::instant::{canonicalize, format_instant, parse_instant, to_canonical_utc};
use crate::interval::{CustomInterval, parse_custom_interval};
use crate::types::{Frequency, Schedule};
use crate::wire::{LAST_DAY_OF_MONTH, WireSchedule};
use time::OffsetDateTime;
use tracing::debug;

/// Optional start and end instants of a recurring schedule, in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScheduleWindow {
    /// First delivery.
    pub start: Option<OffsetDateTime>,
    /// Last delivery.
    pub end: Option<OffsetDateTime>,
}

/// A schedule whose shape is fixed by its frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleRule {
    Never,
    Once {
        start: Option<OffsetDateTime>,
    },
    Hourly {
        window: ScheduleWindow,
        workdays_only: bool,
    },
    Daily {
        window: ScheduleWindow,
        workdays_only: bool,
    },
    Weekly {
        window: ScheduleWindow,
    },
    Monthly {
        window: ScheduleWindow,
        last_day_of_month: bool,
    },
    Custom {
        window: ScheduleWindow,
        workdays_only: bool,
        interval: CustomInterval,
    },
}

impl ScheduleRule {
    /// Lifts a declarative schedule into its frequency-specific shape.
    ///
    /// Start and end times are normalized to UTC.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A start or end time is not RFC3339
    /// - An end time is declared for `once` or `never`
    /// - The frequency is `custom` and the interval is missing, malformed or zero
    pub fn from_schedule(schedule: &Schedule) -> Result<Self, DomainError> {
        let frequency: Frequency = schedule.frequency;

        let start: Option<OffsetDateTime> = match non_empty(schedule.start_time.as_deref()) {
            Some(value) if frequency.allows_start_time() => Some(to_canonical_utc(
                parse_instant("schedule.start_time", value)?,
            )),
            Some(_) => {
                debug!(%frequency, "ignoring schedule.start_time");
                None
            }
            None => None,
        };

        let end: Option<OffsetDateTime> = match non_empty(schedule.end_time.as_deref()) {
            Some(_) if !frequency.allows_end_time() => {
                return Err(DomainError::EndTimeNotAllowed { frequency });
            }
            Some(value) => Some(to_canonical_utc(parse_instant(
                "schedule.end_time",
                value,
            )?)),
            None => None,
        };

        if schedule.workdays_only && !frequency.allows_workdays_only() {
            debug!(%frequency, "ignoring schedule.workdays_only");
        }
        if schedule.last_day_of_month && frequency != Frequency::Monthly {
            debug!(%frequency, "ignoring schedule.last_day_of_month");
        }
        if schedule.custom_interval.is_some() && frequency != Frequency::Custom {
            debug!(%frequency, "ignoring schedule.custom_interval");
        }

        let window: ScheduleWindow = ScheduleWindow { start, end };
        let workdays_only: bool = schedule.workdays_only;

        Ok(match frequency {
            Frequency::Never => Self::Never,
            Frequency::Once => Self::Once { start },
            Frequency::Hourly => Self::Hourly {
                window,
                workdays_only,
            },
            Frequency::Daily => Self::Daily {
                window,
                workdays_only,
            },
            Frequency::Weekly => Self::Weekly { window },
            Frequency::Monthly => Self::Monthly {
                window,
                last_day_of_month: schedule.last_day_of_month,
            },
            Frequency::Custom => {
                let value: &str = schedule.custom_interval.as_deref().unwrap_or_default();
                let interval: CustomInterval = parse_custom_interval(value)?;
                if interval.amount() == 0 {
                    return Err(DomainError::ZeroCustomInterval {
                        value: value.to_string(),
                    });
                }
                Self::Custom {
                    window,
                    workdays_only,
                    interval,
                }
            }
        })
    }

    /// Returns the frequency this rule was built for.
    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        match self {
            Self::Never => Frequency::Never,
            Self::Once { .. } => Frequency::Once,
            Self::Hourly { .. } => Frequency::Hourly,
            Self::Daily { .. } => Frequency::Daily,
            Self::Weekly { .. } => Frequency::Weekly,
            Self::Monthly { .. } => Frequency::Monthly,
            Self::Custom { .. } => Frequency::Custom,
        }
    }

    const fn window(&self) -> ScheduleWindow {
        match self {
            Self::Never => ScheduleWindow {
                start: None,
                end: None,
            },
            Self::Once { start } => ScheduleWindow {
                start: *start,
                end: None,
            },
            Self::Hourly { window, .. }
            | Self::Daily { window, .. }
            | Self::Weekly { window }
            | Self::Monthly { window, .. }
            | Self::Custom { window, .. } => *window,
        }
    }

    /// Renders this rule as a wire schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if a start or end instant cannot be rendered as RFC3339.
    pub fn to_wire(&self, time_zone: &str) -> Result<WireSchedule, DomainError> {
        let mut wire: WireSchedule = WireSchedule::new(self.frequency(), time_zone);

        let window: ScheduleWindow = self.window();
        wire.start_date = window.start.map(format_instant).transpose()?;
        wire.end_date = window.end.map(format_instant).transpose()?;

        match *self {
            Self::Hourly { workdays_only, .. } | Self::Daily { workdays_only, .. } => {
                wire.workdays_only = Some(workdays_only);
            }
            Self::Monthly {
                last_day_of_month: true,
                ..
            } => {
                wire.day_of_month = Some(String::from(LAST_DAY_OF_MONTH));
            }
            Self::Custom {
                workdays_only,
                interval,
                ..
            } => {
                wire.workdays_only = Some(workdays_only);
                wire.interval_amount = i64::from(interval.amount());
                wire.interval_frequency = interval.unit().as_str().to_string();
            }
            Self::Never | Self::Once { .. } | Self::Weekly { .. } | Self::Monthly { .. } => {}
        }

        Ok(wire)
    }
}

/// Translates a declarative schedule into its wire form.
///
/// # Errors
///
/// Returns the first error raised by [`ScheduleRule::from_schedule`] or
/// [`ScheduleRule::to_wire`].
pub fn build_wire_schedule(schedule: &Schedule) -> Result<WireSchedule, DomainError> {
    ScheduleRule::from_schedule(schedule)?.to_wire(&schedule.timezone)
}

/// Reconstructs a declarative schedule from its wire form.
///
/// Timestamps are re-rendered in canonical UTC form. The custom interval is
/// only restored when both an amount and a unit are present.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimestamp` if a stored start or end date is not
/// RFC3339.
pub fn schedule_from_wire(wire: &WireSchedule) -> Result<Schedule, DomainError> {
    let custom_interval: Option<String> = (wire.interval_amount != 0
        && !wire.interval_frequency.is_empty())
    .then(|| format!("{} {}", wire.interval_amount, wire.interval_frequency));

    let start_time: Option<String> = non_empty(wire.start_date.as_deref())
        .map(|value| canonicalize("schedule.start_time", value))
        .transpose()?;
    let end_time: Option<String> = non_empty(wire.end_date.as_deref())
        .map(|value| canonicalize("schedule.end_time", value))
        .transpose()?;

    Ok(Schedule {
        frequency: wire.frequency,
        start_time,
        end_time,
        workdays_only: wire.workdays_only.unwrap_or(false),
        custom_interval,
        last_day_of_month: wire.day_of_month.as_deref() == Some(LAST_DAY_OF_MONTH),
        timezone: wire.time_zone.clone(),
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
