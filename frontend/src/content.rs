use log::error;
use serde::Deserialize;
use thiserror::Error;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is malformed: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
pub struct Content {
    pub nav_links: Vec<NavLink>,
    pub programs: Vec<Program>,
    pub plans: Vec<Plan>,
    pub currency: String,
    pub timetable: Timetable,
    pub contact: Contact,
    pub booking: BookingOptions,
    pub socials: Vec<SocialLink>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct NavLink {
    pub label: String,
    /// DOM id of the section the link scrolls to.
    pub target: String,
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum ProgramIcon {
    Dumbbell,
    Flame,
    Heart,
}

impl ProgramIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            ProgramIcon::Dumbbell => "🏋️",
            ProgramIcon::Flame => "🔥",
            ProgramIcon::Heart => "❤️",
        }
    }
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Program {
    pub title: String,
    pub description: String,
    pub duration: String,
    pub icon: ProgramIcon,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Plan {
    pub name: String,
    pub price: u32,
    pub period: String,
    pub description: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub popular: bool,
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
pub struct Timetable {
    pub days: Vec<String>,
    pub rows: Vec<TimetableRow>,
    pub mobile_days: Vec<DaySchedule>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct TimetableRow {
    pub time: String,
    /// One slot per entry in [`Timetable::days`]; `None` means no class.
    pub classes: Vec<Option<String>>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct DaySchedule {
    pub day: String,
    pub classes: Vec<ScheduledClass>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct ScheduledClass {
    pub time: String,
    pub name: String,
}

/// Open gym slots get a muted pill.
pub fn is_open_gym(class: &str) -> bool {
    class == "OPEN GYM"
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
pub struct Contact {
    pub phone: String,
    pub address: String,
    pub hours: String,
    pub closed: String,
    pub rating: u8,
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
pub struct BookingOptions {
    pub goals: Vec<SelectOption>,
    pub times: Vec<SelectOption>,
    pub days: Vec<SelectOption>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Instagram,
    Facebook,
    Youtube,
}

impl Network {
    pub fn label(self) -> &'static str {
        match self {
            Network::Instagram => "Instagram",
            Network::Facebook => "Facebook",
            Network::Youtube => "YouTube",
        }
    }
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct SocialLink {
    pub network: Network,
    pub href: String,
}

impl Content {
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Content bundled into the binary at build time.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(SITE_JSON)
    }

    /// Embedded content, or an empty page skeleton if it does not decode.
    pub fn load() -> Self {
        match Self::embedded() {
            Ok(content) => content,
            Err(err) => {
                error!("{}", err);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_decodes() {
        let content = Content::embedded().expect("site.json should decode");
        assert_eq!(content.nav_links.len(), 4);
        assert_eq!(content.programs.len(), 3);
        assert_eq!(content.programs[1].icon, ProgramIcon::Flame);
        assert_eq!(content.currency, "DH");
        assert_eq!(content.contact.rating, 5);
        assert_eq!(content.booking.days.len(), 6);
    }

    #[test]
    fn exactly_one_popular_plan() {
        let content = Content::embedded().unwrap();
        let popular: Vec<&str> = content
            .plans
            .iter()
            .filter(|plan| plan.popular)
            .map(|plan| plan.name.as_str())
            .collect();
        assert_eq!(popular, vec!["5 DAYS / WEEK"]);
    }

    #[test]
    fn timetable_rows_cover_every_day() {
        let timetable = Content::embedded().unwrap().timetable;
        for row in &timetable.rows {
            assert_eq!(row.classes.len(), timetable.days.len(), "row {}", row.time);
        }
        let saturday_evening = &timetable.rows[4].classes[5];
        assert_eq!(saturday_evening, &None);
    }

    #[test]
    fn nav_links_point_at_sections() {
        let content = Content::embedded().unwrap();
        let targets: Vec<&str> = content.nav_links.iter().map(|link| link.target.as_str()).collect();
        assert_eq!(targets, vec!["programs", "timetable", "pricing", "contact"]);
    }

    #[test]
    fn malformed_content_is_an_error() {
        let err = Content::from_json("{\"nav_links\": 3}").unwrap_err();
        assert!(err.to_string().starts_with("site content is malformed"));
    }

    #[test]
    fn open_gym_detection() {
        assert!(is_open_gym("OPEN GYM"));
        assert!(!is_open_gym("HIIT"));
    }
}
