//! # Concerts
//!
//! A small built-in list of upcoming concerts, searchable by artist and city.
//! Both filters are case-insensitive substring matches; an empty artist, an
//! empty city, or [`ALL_CITIES`] means "no filter".

use log::{debug, info};
use serde::{Deserialize, Serialize};

/// City picker entry that disables the city filter.
pub const ALL_CITIES: &str = "All Cities";

const TICKET_URL: &str = "https://www.ticketmaster.com";

/// An upcoming concert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concert {
    pub id: String,
    pub artist_name: String,
    pub venue_name: String,
    /// Days from today until the show.
    pub days_from_today: u32,
    #[serde(rename = "ticketURL")]
    pub ticket_url: String,
    pub city: String,
    #[serde(default)]
    pub price_range: Option<String>,
}

impl Concert {
    #[must_use]
    pub fn is_this_week(&self) -> bool {
        self.days_from_today < 7
    }

    /// "Today", "Tomorrow" or "In N days".
    #[must_use]
    pub fn when(&self) -> String {
        match self.days_from_today {
            0 => "Today".to_string(),
            1 => "Tomorrow".to_string(),
            n => format!("In {n} days"),
        }
    }
}

/// No concert matched the filters. The message names the filters in use.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConcertSearchError {
    #[error("No {artist} concerts found in {city}")]
    ArtistInCity { artist: String, city: String },
    #[error("No concerts found for {0}")]
    Artist(String),
    #[error("No concerts found in {0}")]
    City(String),
    #[error("No concerts found")]
    Empty,
}

/// The built-in concert list.
pub fn sample_concerts() -> Vec<Concert> {
    #[rustfmt::skip]
    let rows = [
        ("1", "Taylor Swift", "Chase Center", 15, "San Francisco", "$85-$250 USD"),
        ("2", "Coldplay", "Oracle Park", 22, "San Francisco", "$75-$200 USD"),
        ("3", "Billie Eilish", "The Fillmore", 8, "San Francisco", "$95-$180 USD"),
        ("4", "The Weeknd", "Madison Square Garden", 30, "New York", "$120-$300 USD"),
        ("5", "Ariana Grande", "United Center", 25, "Chicago", "$90-$220 USD"),
        ("6", "Ed Sheeran", "Staples Center", 18, "Los Angeles", "$110-$280 USD"),
        ("7", "Bruno Mars", "Climate Pledge Arena", 35, "Seattle", "$105-$260 USD"),
        ("8", "Dua Lipa", "American Airlines Center", 42, "Dallas", "$80-$190 USD"),
    ];

    rows.into_iter()
        .map(|(id, artist, venue, days, city, price)| Concert {
            id: id.to_string(),
            artist_name: artist.to_string(),
            venue_name: venue.to_string(),
            days_from_today: days,
            ticket_url: TICKET_URL.to_string(),
            city: city.to_string(),
            price_range: Some(price.to_string()),
        })
        .collect()
}

fn active(filter: Option<&str>) -> Option<&str> {
    filter
        .map(str::trim)
        .filter(|f| !f.is_empty() && !f.eq_ignore_ascii_case(ALL_CITIES))
}

/// Concerts whose artist and city contain the given filters.
pub fn search_concerts(
    artist: Option<&str>,
    city: Option<&str>,
) -> Result<Vec<Concert>, ConcertSearchError> {
    let artist = active(artist);
    let city = active(city);
    debug!("Searching concerts - artist: {}, city: {}", artist.unwrap_or("All"), city.unwrap_or("All"));

    let artist_lower = artist.map(str::to_lowercase);
    let city_lower = city.map(str::to_lowercase);

    let found: Vec<Concert> = sample_concerts()
        .into_iter()
        .filter(|c| {
            artist_lower
                .as_deref()
                .map_or(true, |a| c.artist_name.to_lowercase().contains(a))
        })
        .filter(|c| city_lower.as_deref().map_or(true, |q| c.city.to_lowercase().contains(q)))
        .collect();

    if !found.is_empty() {
        info!("Found {} concerts", found.len());
        return Ok(found);
    }

    Err(match (artist, city) {
        (Some(artist), Some(city)) => ConcertSearchError::ArtistInCity {
            artist: artist.to_string(),
            city: city.to_string(),
        },
        (Some(artist), None) => ConcertSearchError::Artist(artist.to_string()),
        (None, Some(city)) => ConcertSearchError::City(city.to_string()),
        (None, None) => ConcertSearchError::Empty,
    })
}
