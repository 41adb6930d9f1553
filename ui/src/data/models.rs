use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

pub type LessonId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Level {
    FirstBac,
    SecondBac,
}

impl Level {
    pub const ALL: [Level; 2] = [Level::SecondBac, Level::FirstBac];

    pub fn label(&self) -> &'static str {
        match self {
            Level::FirstBac => "الأولى باكالوريا",
            Level::SecondBac => "الثانية باكالوريا",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: LessonId,
    pub title: String,
    pub subject: String,
    pub level: Level,
    pub description: String,
    /// a single glyph used as the card artwork
    pub thumbnail: String,
    pub videos_count: u32,
    pub files_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonDetail {
    pub id: LessonId,
    pub title: String,
    pub description: String,
    pub videos: Vec<Video>,
    pub files: Vec<FileItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Youtube,
    Tiktok,
}

impl Platform {
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Youtube => "YouTube",
            Platform::Tiktok => "TikTok",
        }
    }

    /// Tailwind classes sizing the embed frame. TikTok clips are portrait.
    pub fn frame_class(&self) -> &'static str {
        match self {
            Platform::Youtube => "w-full aspect-video",
            Platform::Tiktok => "w-full max-w-xs mx-auto aspect-[9/16]",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: u32,
    pub title: String,
    pub url: String,
    pub platform: Platform,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
}

impl Video {
    /// `1200` → `"1.2K"`, `890` → `"890"`.
    pub fn views_label(&self) -> Option<String> {
        self.views.map(compact_count)
    }
}

/// Abbreviates with `K`, `M` or `B` at one decimal. A value that rounds up to
/// a thousand of one unit is shown in the next one (`999_999` → `"1M"`).
pub fn compact_count(n: u64) -> String {
    const UNITS: [(f64, &str); 3] = [(1e3, "K"), (1e6, "M"), (1e9, "B")];

    if n < 1_000 {
        return n.to_string();
    }

    let round = |scale: f64| (n as f64 / scale * 10.0).round() / 10.0;
    let (rounded, suffix) = UNITS
        .iter()
        .map(|&(scale, suffix)| (round(scale), suffix))
        .find(|&(rounded, _)| rounded < 1_000.0)
        .unwrap_or_else(|| (round(1e9), "B"));

    if rounded.fract() == 0.0 {
        format!("{}{suffix}", rounded as u64)
    } else {
        format!("{rounded:.1}{suffix}")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileItem {
    pub id: u32,
    pub name: String,
    pub category: String,
    /// already formatted for display, e.g. `"3.2 MB"`
    pub size: String,
    pub downloads: u32,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: u32,
    pub student: String,
    /// 1..=5, enforced when decoding
    #[serde(deserialize_with = "one_to_five")]
    pub rating: u8,
    pub comment: String,
    pub date: NaiveDate,
}

fn one_to_five<'de, D: Deserializer<'de>>(de: D) -> std::result::Result<u8, D::Error> {
    let rating = u8::deserialize(de)?;
    if (1..=5).contains(&rating) {
        Ok(rating)
    } else {
        Err(serde::de::Error::custom(format!("rating {rating} is outside 1..=5")))
    }
}

impl Review {
    pub fn stars(&self) -> String {
        let filled = self.rating.min(5) as usize;
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }

    pub fn date_label(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }
}

/// Mean rating rounded to one decimal, `None` for an empty slice.
pub fn average_rating(reviews: &[Review]) -> Option<f32> {
    if reviews.is_empty() {
        return None;
    }
    let total: u32 = reviews.iter().map(|r| r.rating as u32).sum();
    let mean = total as f32 / reviews.len() as f32;
    Some((mean * 10.0).round() / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: u8) -> Review {
        Review {
            id: 1,
            student: "x".into(),
            rating,
            comment: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 11, 5).unwrap(),
        }
    }

    #[test]
    fn compact_count_keeps_small_numbers() {
        assert_eq!(compact_count(0), "0");
        assert_eq!(compact_count(890), "890");
        assert_eq!(compact_count(999), "999");
    }

    #[test]
    fn compact_count_abbreviates_thousands_and_millions() {
        assert_eq!(compact_count(1_000), "1K");
        assert_eq!(compact_count(1_200), "1.2K");
        assert_eq!(compact_count(2_500), "2.5K");
        assert_eq!(compact_count(1_500_000), "1.5M");
    }

    #[test]
    fn compact_count_rolls_over_to_the_next_unit() {
        assert_eq!(compact_count(999_949), "999.9K");
        assert_eq!(compact_count(999_950), "1M");
        assert_eq!(compact_count(999_999), "1M");
        assert_eq!(compact_count(999_999_999), "1B");
        assert_eq!(compact_count(2_500_000_000), "2.5B");
    }

    #[test]
    fn stars_are_clamped_to_five() {
        assert_eq!(review(4).stars(), "★★★★☆");
        assert_eq!(review(9).stars(), "★★★★★");
    }

    #[test]
    fn out_of_range_rating_is_rejected() {
        let json = |rating: u8| {
            format!(r#"{{"id":1,"student":"x","rating":{rating},"comment":"","date":"2024-11-05"}}"#)
        };
        assert_eq!(serde_json::from_str::<Review>(&json(5)).unwrap().rating, 5);
        for bad in [0, 6] {
            let err = serde_json::from_str::<Review>(&json(bad)).unwrap_err();
            assert!(err.to_string().contains("outside 1..=5"), "{err}");
        }
    }

    #[test]
    fn date_label_is_day_first() {
        assert_eq!(review(5).date_label(), "05/11/2024");
    }

    #[test]
    fn average_rating_of_nothing_is_none() {
        assert_eq!(average_rating(&[]), None);
    }

    #[test]
    fn average_rating_rounds_to_one_decimal() {
        let reviews = [review(5), review(4), review(4)];
        assert_eq!(average_rating(&reviews), Some(4.3));
    }

    #[test]
    fn level_and_platform_use_wire_names() {
        assert_eq!(serde_json::to_string(&Level::SecondBac).unwrap(), "\"second-bac\"");
        assert_eq!(serde_json::to_string(&Platform::Tiktok).unwrap(), "\"tiktok\"");
    }
}
