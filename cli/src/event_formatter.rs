// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use gatepass_core::{AgendaDay, Event, EventLocation, Session, Speaker};

use crate::table::{Column, PaddingDirection, Table};
use crate::util::truncate_width;

const MAX_TITLE_WIDTH: usize = 48;

#[derive(Debug, Clone, Copy)]
pub enum EventColumn {
    Id,
    Title,
    Date,
    Location,
    Registered,
    Seats,
}

impl EventColumn {
    pub fn defaults(verbose: bool) -> Vec<Self> {
        match verbose {
            true => vec![
                Self::Id,
                Self::Date,
                Self::Registered,
                Self::Seats,
                Self::Location,
                Self::Title,
            ],
            false => vec![Self::Id, Self::Date, Self::Registered, Self::Title],
        }
    }
}

impl Column<Event> for EventColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            Self::Id => "ID",
            Self::Title => "Title",
            Self::Date => "Date",
            Self::Location => "Location",
            Self::Registered => "Registered",
            Self::Seats => "Seats",
        }
        .into()
    }

    fn format<'a>(&self, event: &'a Event) -> Cow<'a, str> {
        match self {
            Self::Id => event.id.as_str().into(),
            Self::Title => truncate_width(&event.title, MAX_TITLE_WIDTH).into(),
            Self::Date => event.date.as_deref().map_or("-".into(), format_date),
            Self::Location => event.location.as_deref().unwrap_or("-").into(),
            Self::Registered => match event.is_registered {
                Some(true) => "yes",
                Some(false) => "no",
                None => "-",
            }
            .into(),
            Self::Seats => match (event.registrations_count, event.max_attendees) {
                (Some(n), Some(max)) => format!("{n}/{max}").into(),
                (Some(n), None) => n.to_string().into(),
                _ => "-".into(),
            },
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            Self::Id | Self::Seats => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, event: &Event) -> Option<Color> {
        match self {
            Self::Registered if event.is_registered == Some(true) => Some(Color::Green),
            _ => None,
        }
    }
}

/// Show only the date part of an ISO 8601 timestamp.
fn format_date(date: &str) -> Cow<'_, str> {
    match date.split_once('T') {
        Some((day, _)) => day.into(),
        None => date.into(),
    }
}

/// Detailed view of one event.
pub struct EventDetail<'a>(pub &'a Event);

impl fmt::Display for EventDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let event = self.0;
        writeln!(f, "{} {}", event.title.bold(), format!("#{}", event.id).dimmed())?;
        if let Some(date) = &event.date {
            writeln!(f, "  Date:       {date}")?;
        }
        if let Some(location) = &event.location {
            writeln!(f, "  Location:   {location}")?;
        }
        if let Some(status) = &event.status {
            writeln!(f, "  Status:     {status}")?;
        }
        let seats = EventColumn::Seats.format(event);
        if seats != "-" {
            writeln!(f, "  Seats:      {seats}")?;
        }
        if let Some(registered) = event.is_registered {
            let text = match registered {
                true => "yes".green(),
                false => "no".normal(),
            };
            writeln!(f, "  Registered: {text}")?;
        }
        if let Some(description) = event.description.as_deref().filter(|d| !d.is_empty()) {
            writeln!(f)?;
            writeln!(f, "{description}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub enum SessionColumn {
    Time,
    Duration,
    Kind,
    Title,
    Location,
    Speakers,
}

impl SessionColumn {
    /// Columns of a session table inside an agenda day.
    pub const AGENDA: [Self; 5] = [
        Self::Time,
        Self::Duration,
        Self::Kind,
        Self::Title,
        Self::Speakers,
    ];

    /// Columns of a flat session list.
    pub const ALL: [Self; 6] = [
        Self::Time,
        Self::Duration,
        Self::Kind,
        Self::Location,
        Self::Title,
        Self::Speakers,
    ];
}

impl Column<Session> for SessionColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            Self::Time => "Time",
            Self::Duration => "Duration",
            Self::Kind => "Type",
            Self::Title => "Title",
            Self::Location => "Room",
            Self::Speakers => "Speakers",
        }
        .into()
    }

    fn format<'a>(&self, session: &'a Session) -> Cow<'a, str> {
        match self {
            Self::Time => session.time.as_deref().unwrap_or("-").into(),
            Self::Duration => session.duration.as_deref().unwrap_or("-").into(),
            Self::Kind => session.kind.as_deref().unwrap_or("-").into(),
            Self::Title => truncate_width(&session.title, MAX_TITLE_WIDTH).into(),
            Self::Location => session.location.as_deref().unwrap_or("-").into(),
            Self::Speakers => session.speakers.join(", ").into(),
        }
    }

    fn get_color(&self, session: &Session) -> Option<Color> {
        match (self, session.kind.as_deref()) {
            (Self::Kind, Some("keynote")) => Some(Color::Magenta),
            (Self::Kind, Some("workshop")) => Some(Color::Blue),
            (Self::Kind, Some("break")) => Some(Color::BrightBlack),
            _ => None,
        }
    }
}

/// Agenda of an event, one block per day.
pub struct Agenda<'a>(pub &'a [AgendaDay]);

impl fmt::Display for Agenda<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut days: Vec<&AgendaDay> = self.0.iter().collect();
        days.sort_by_key(|d| (d.day_number, d.order));

        for (i, day) in days.into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let heading = match (day.day_number, &day.date) {
                (Some(n), Some(date)) => format!("Day {n}: {} ({date})", day.title),
                (Some(n), None) => format!("Day {n}: {}", day.title),
                (None, Some(date)) => format!("{} ({date})", day.title),
                (None, None) => day.title.clone(),
            };
            writeln!(f, "{}", heading.bold())?;

            if day.sessions.is_empty() {
                writeln!(f, "{}", "No sessions".italic())?;
            } else {
                write!(f, "{}", Table::new(&SessionColumn::AGENDA, &day.sessions))?;
            }
        }
        Ok(())
    }
}

/// Venue of an event with map links.
pub struct LocationDetail<'a>(pub &'a EventLocation);

impl fmt::Display for LocationDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let location = self.0;
        let venue = location.venue.as_deref().unwrap_or("Venue to be announced");
        writeln!(f, "{}", venue.bold())?;
        if let Some(address) = &location.address {
            writeln!(f, "  {address}")?;
        }
        if let (Some(maps), Some(directions)) = (location.maps_url(), location.directions_url()) {
            writeln!(f, "  Map:        {}", maps.underline())?;
            writeln!(f, "  Directions: {}", directions.underline())?;
        }

        if !location.venue_maps.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", "Venue maps".bold())?;
            for map in &location.venue_maps {
                write!(f, "  {}", map.title)?;
                if let Some(description) = map.description.as_deref().filter(|d| !d.is_empty()) {
                    write!(f, " {}", format!("({description})").dimmed())?;
                }
                writeln!(f)?;
                if let Some(image) = &map.image {
                    writeln!(f, "    {image}")?;
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub enum SpeakerColumn {
    Name,
    Title,
    Company,
    Expertise,
}

impl SpeakerColumn {
    pub const ALL: [Self; 4] = [Self::Name, Self::Title, Self::Company, Self::Expertise];
}

impl Column<Speaker> for SpeakerColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            Self::Name => "Name",
            Self::Title => "Title",
            Self::Company => "Company",
            Self::Expertise => "Expertise",
        }
        .into()
    }

    fn format<'a>(&self, speaker: &'a Speaker) -> Cow<'a, str> {
        match self {
            Self::Name => speaker.name.as_str().into(),
            Self::Title => speaker.title.as_deref().unwrap_or("-").into(),
            Self::Company => speaker.company.as_deref().unwrap_or("-").into(),
            Self::Expertise => speaker.expertise.join(", ").into(),
        }
    }
}
