use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::error::ModelError;
use crate::model::record::{Entity, Presence, Record};
use crate::model::scalar::Scalar;

/// A marathon event with its charity, segments and attendance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marathon {
    pub id: i64,
    #[serde(rename = "type")]
    pub marathon_type: Option<Scalar>,
    pub type_id: Option<Scalar>,
    pub slug: Option<Scalar>,
    pub full_name: Option<Scalar>,
    pub total: Option<Scalar>,
    pub start_date: Option<DateTime<Utc>>,
    pub stop_date: Option<DateTime<Utc>>,
    pub playlist: Option<Scalar>,
    pub charity: Charity,
    pub segments: Vec<Segment>,
    pub attendance: Vec<Attendance>,
}

impl Entity for Marathon {
    const NAME: &'static str = "Marathon";
    const FIELDS: &'static [(&'static str, Presence)] = &[
        ("id", Presence::Required),
        ("type", Presence::Optional),
        ("type_id", Presence::Optional),
        ("slug", Presence::Optional),
        ("full_name", Presence::Optional),
        ("total", Presence::Optional),
        ("start_date", Presence::Optional),
        ("stop_date", Presence::Optional),
        ("playlist", Presence::Optional),
        ("charity", Presence::Eager),
        ("segments", Presence::DefaultEmpty),
        ("attendance", Presence::DefaultEmpty),
    ];

    fn decode(record: &Record<'_>) -> Result<Self, ModelError> {
        Ok(Marathon {
            id: record.required_int("id")?,
            marathon_type: record.scalar("type")?,
            type_id: record.scalar("type_id")?,
            slug: record.scalar("slug")?,
            full_name: record.scalar("full_name")?,
            total: record.scalar("total")?,
            start_date: record.timestamp("start_date")?,
            stop_date: record.timestamp("stop_date")?,
            playlist: record.scalar("playlist")?,
            charity: record.eager("charity")?,
            segments: record.collection("segments")?,
            attendance: record.collection("attendance")?,
        })
    }
}

impl Marathon {
    /// First segment whose id matches
    pub fn find_segment(&self, id: &Scalar) -> Option<&Segment> {
        self.segments.iter().find(|s| s.id.as_ref() == Some(id))
    }
}

/// One run or event slot within a marathon
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub id: Option<Scalar>,
    /// Snapshot of the owning marathon, only when the payload embeds one
    pub marathon: Option<Box<Marathon>>,
    pub game: Game,
    pub modifier: Option<Scalar>,
    pub raised: Option<Scalar>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub vod: Option<Scalar>,
    pub time_offset: Option<Scalar>,
    pub runners: Vec<Runner>,
    pub filenames: Vec<Filename>,
}

impl Entity for Segment {
    const NAME: &'static str = "Segment";
    const FIELDS: &'static [(&'static str, Presence)] = &[
        ("id", Presence::Optional),
        ("marathon", Presence::IfPresent),
        ("game", Presence::Eager),
        ("modifier", Presence::Optional),
        ("raised", Presence::Optional),
        ("start_time", Presence::Optional),
        ("end_time", Presence::Optional),
        ("vod", Presence::Optional),
        ("time_offset", Presence::Optional),
        ("runners", Presence::MustExist),
        ("filenames", Presence::MustExist),
    ];

    fn decode(record: &Record<'_>) -> Result<Self, ModelError> {
        Ok(Segment {
            id: record.scalar("id")?,
            marathon: record.nested::<Marathon>("marathon")?.map(Box::new),
            game: record.eager("game")?,
            modifier: record.scalar("modifier")?,
            raised: record.scalar("raised")?,
            start_time: record.timestamp("start_time")?,
            end_time: record.timestamp("end_time")?,
            vod: record.scalar("vod")?,
            time_offset: record.scalar("time_offset")?,
            runners: record.collection("runners")?,
            filenames: record.collection("filenames")?,
        })
    }
}

/// A runner slot on a segment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Runner {
    pub attendee: Attendee,
    pub runner_rank: Option<Scalar>,
}

impl Entity for Runner {
    const NAME: &'static str = "Runner";
    const FIELDS: &'static [(&'static str, Presence)] = &[
        ("attendee", Presence::Eager),
        ("runner_rank", Presence::Optional),
    ];

    fn decode(record: &Record<'_>) -> Result<Self, ModelError> {
        Ok(Runner {
            attendee: record.eager("attendee")?,
            runner_rank: record.scalar("runner_rank")?,
        })
    }
}

/// A recording file attached to a segment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Filename {
    pub segment_id: Option<Scalar>,
    pub filename: Option<Scalar>,
    pub note: Option<Scalar>,
}

impl Entity for Filename {
    const NAME: &'static str = "Filename";
    const FIELDS: &'static [(&'static str, Presence)] = &[
        ("segment_id", Presence::Optional),
        ("filename", Presence::Optional),
        ("note", Presence::Optional),
    ];

    fn decode(record: &Record<'_>) -> Result<Self, ModelError> {
        Ok(Filename {
            segment_id: record.scalar("segment_id")?,
            filename: record.scalar("filename")?,
            note: record.scalar("note")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Game {
    pub id: Option<Scalar>,
    pub title: Option<Scalar>,
    pub segments: Vec<Segment>,
    #[serde(rename = "isZelda")]
    pub is_zelda: Option<Scalar>,
    #[serde(rename = "isEvent")]
    pub is_event: Option<Scalar>,
}

impl Entity for Game {
    const NAME: &'static str = "Game";
    const FIELDS: &'static [(&'static str, Presence)] = &[
        ("id", Presence::Optional),
        ("title", Presence::Optional),
        ("segments", Presence::DefaultEmpty),
        ("isZelda", Presence::Optional),
        ("isEvent", Presence::Optional),
    ];

    fn decode(record: &Record<'_>) -> Result<Self, ModelError> {
        Ok(Game {
            id: record.scalar("id")?,
            title: record.scalar("title")?,
            segments: record.collection("segments")?,
            is_zelda: record.scalar("isZelda")?,
            is_event: record.scalar("isEvent")?,
        })
    }
}

impl Game {
    pub fn is_zelda(&self) -> bool {
        self.is_zelda.as_ref().is_some_and(Scalar::is_truthy)
    }

    pub fn is_event(&self) -> bool {
        self.is_event.as_ref().is_some_and(Scalar::is_truthy)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Charity {
    pub id: Option<Scalar>,
    pub slug: Option<Scalar>,
    pub full_name: Option<Scalar>,
    pub website: Option<Scalar>,
    pub total: f64,
}

impl Entity for Charity {
    const NAME: &'static str = "Charity";
    const FIELDS: &'static [(&'static str, Presence)] = &[
        ("id", Presence::Optional),
        ("slug", Presence::Optional),
        ("full_name", Presence::Optional),
        ("website", Presence::Optional),
        ("total", Presence::Required),
    ];

    fn decode(record: &Record<'_>) -> Result<Self, ModelError> {
        Ok(Charity {
            id: record.scalar("id")?,
            slug: record.scalar("slug")?,
            full_name: record.scalar("full_name")?,
            website: record.scalar("website")?,
            total: record.required_float("total")?,
        })
    }
}

/// An attendee's presence at a marathon
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attendance {
    pub id: Option<Scalar>,
    pub attendee: Option<Attendee>,
    /// Snapshot of the marathon, only when the payload embeds one; it is an
    /// owned copy and never aliases the marathon that holds this attendance
    pub marathon: Option<Box<Marathon>>,
    pub award: Option<Scalar>,
    pub location: Option<Scalar>,
}

impl Entity for Attendance {
    const NAME: &'static str = "Attendance";
    const FIELDS: &'static [(&'static str, Presence)] = &[
        ("id", Presence::Optional),
        ("attendee", Presence::IfPresent),
        ("marathon", Presence::IfPresent),
        ("award", Presence::Optional),
        ("location", Presence::Optional),
    ];

    fn decode(record: &Record<'_>) -> Result<Self, ModelError> {
        Ok(Attendance {
            id: record.scalar("id")?,
            attendee: record.nested("attendee")?,
            marathon: record.nested::<Marathon>("marathon")?.map(Box::new),
            award: record.scalar("award")?,
            location: record.scalar("location")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attendee {
    pub id: Option<Scalar>,
    pub name: Option<Scalar>,
    pub twitch_login: Option<Scalar>,
    pub rank: Option<Scalar>,
    pub house: Option<Scalar>,
    pub house_color: Option<Scalar>,
}

impl Entity for Attendee {
    const NAME: &'static str = "Attendee";
    const FIELDS: &'static [(&'static str, Presence)] = &[
        ("id", Presence::Optional),
        ("name", Presence::Optional),
        ("twitch_login", Presence::Optional),
        ("rank", Presence::Optional),
        ("house", Presence::Optional),
        ("house_color", Presence::Optional),
    ];

    fn decode(record: &Record<'_>) -> Result<Self, ModelError> {
        Ok(Attendee {
            id: record.scalar("id")?,
            name: record.scalar("name")?,
            twitch_login: record.scalar("twitch_login")?,
            rank: record.scalar("rank")?,
            house: record.scalar("house")?,
            house_color: record.scalar("house_color")?,
        })
    }
}
