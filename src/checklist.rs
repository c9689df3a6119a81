//! Gear checklist derived from a forecast.

use crate::types::season::Season;
use crate::types::summary::Forecast;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Write;

/// Hourly precipitation above which rain gear is suggested, in mm.
const RAIN_GEAR_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GearCategory {
    Rain,
    Winter,
    Normal,
}

impl GearCategory {
    pub fn title(&self) -> &'static str {
        match self {
            GearCategory::Rain => "For rain",
            GearCategory::Winter => "For snow",
            GearCategory::Normal => "Regular hike",
        }
    }

    pub fn items(&self) -> &'static [&'static str] {
        match self {
            GearCategory::Rain => &[
                "Poncho",
                "Hardshell jacket",
                "Overtrousers",
                "Waterproof boots",
                "Cap or hat",
                "Spare socks",
                "Emergency blanket",
                "Headlamp",
                "Power bank",
            ],
            GearCategory::Winter => &[
                "Gaiters",
                "Softshell trousers",
                "Waterproof boots",
                "Fleece",
                "Microspikes",
                "Merino winter socks",
                "Hardshell jacket",
                "Gloves (liner and waterproof)",
                "Beanie",
                "Sunglasses",
            ],
            GearCategory::Normal => &[
                "Hiking boots",
                "Fleece",
                "Softshell jacket",
                "Long trousers",
                "T-shirt",
                "Socks",
                "First aid kit",
                "Sunglasses",
                "Headlamp",
                "Power bank",
                "Food",
                "Sleepwear",
                "Toiletry kit",
                "Change of clothes",
            ],
        }
    }
}

/// Gear categories to pack, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    pub season: Season,
    pub categories: Vec<GearCategory>,
}

impl Checklist {
    pub fn for_forecast(forecast: &Forecast) -> Self {
        Self::for_conditions(
            Season::of(forecast.date),
            forecast.summary.max_hourly_precipitation,
            forecast.summary.max_snow_depth_cm,
        )
    }

    /// Rain gear when any hour brings more than 0.1 mm, winter gear in the
    /// winter season or on any snow cover, regular gear always.
    pub fn for_conditions(season: Season, max_hourly_precipitation: f64, snow_depth_cm: i32) -> Self {
        let mut categories = Vec::with_capacity(3);
        if max_hourly_precipitation > RAIN_GEAR_THRESHOLD {
            categories.push(GearCategory::Rain);
        }
        if season == Season::Winter || snow_depth_cm > 0 {
            categories.push(GearCategory::Winter);
        }
        categories.push(GearCategory::Normal);
        Self { season, categories }
    }

    pub fn contains(&self, category: GearCategory) -> bool {
        self.categories.contains(&category)
    }

    /// Renders the list as plain text for sharing, marking the items in
    /// `checked` as packed.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use massif_forecast::{Checklist, Season};
    /// use std::collections::HashSet;
    ///
    /// let checklist = Checklist::for_conditions(Season::Summer, 0.0, 0);
    /// let checked = HashSet::from(["Headlamp".to_string()]);
    /// let date = NaiveDate::from_ymd_opt(2026, 7, 12).unwrap();
    /// let text = checklist.share_text("Ceahlău", 1900, date, &checked);
    /// assert!(text.contains("✅ Headlamp"));
    /// assert!(text.contains("⬜ Hiking boots"));
    /// ```
    pub fn share_text(
        &self,
        massif_name: &str,
        altitude: u32,
        date: NaiveDate,
        checked: &HashSet<String>,
    ) -> String {
        let mut text = format!(
            "🎒 Gear list - {} ({}m)\n📅 Date: {}\n\n",
            massif_name,
            altitude,
            date.format("%Y-%m-%d")
        );
        for category in &self.categories {
            // Writing to a String never fails.
            let _ = writeln!(text, "\n📌 {}:", category.title());
            for item in category.items() {
                let mark = if checked.contains(*item) { "✅" } else { "⬜" };
                let _ = writeln!(text, "{} {}", mark, item);
            }
        }
        text.push_str("\nGenerated with massif_forecast");
        text
    }
}
