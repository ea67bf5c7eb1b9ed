use colored::*;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use serde::Serialize;
use serde_json::json;

use crate::api::models::{BeatmapExtended, DifficultyAttributes, Event, EventsBundle, Score, UserExtended};
use crate::cli::OutputFormat;
use crate::error::Result;

pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Format a user profile
    pub fn format_user(&self, user: &UserExtended) -> Result<String> {
        match self.format {
            OutputFormat::Table => Ok(self.format_user_table(user)),
            OutputFormat::Json => to_json(user),
        }
    }

    /// Format a page of the event feed
    pub fn format_events(&self, bundle: &EventsBundle) -> Result<String> {
        match self.format {
            OutputFormat::Table => Ok(self.format_events_table(bundle)),
            OutputFormat::Json => to_json(bundle),
        }
    }

    /// Format a beatmap, with its difficulty attributes when they were fetched
    pub fn format_beatmap(
        &self,
        beatmap: &BeatmapExtended,
        attributes: Option<&DifficultyAttributes>,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Table => Ok(self.format_beatmap_table(beatmap, attributes)),
            OutputFormat::Json => match attributes {
                Some(attributes) => to_json(&json!({ "beatmap": beatmap, "attributes": attributes })),
                None => to_json(beatmap),
            },
        }
    }

    /// Format a score
    pub fn format_score(&self, score: &Score) -> Result<String> {
        match self.format {
            OutputFormat::Table => Ok(self.format_score_table(score)),
            OutputFormat::Json => to_json(score),
        }
    }

    fn format_user_table(&self, user: &UserExtended) -> String {
        let mut result = String::new();
        result.push_str(&format!(
            "\n{} {} ({})\n\n",
            "👤".cyan(),
            user.user.username.bold(),
            user.user.country_code
        ));

        let mut table = key_value_table();
        table.add_row(vec![Cell::new("Id"), Cell::new(user.user.id)]);
        if let Some(playmode) = user.playmode {
            table.add_row(vec![Cell::new("Ruleset"), Cell::new(playmode)]);
        }
        if let Some(join_date) = user.join_date {
            table.add_row(vec![Cell::new("Joined"), Cell::new(join_date.format("%Y-%m-%d"))]);
        }
        if let Some(statistics) = &user.user.statistics {
            table.add_row(vec![Cell::new("pp"), Cell::new(format!("{:.2}", statistics.pp))]);
            table.add_row(vec![Cell::new("Global rank"), Cell::new(rank(statistics.global_rank))]);
            table.add_row(vec![Cell::new("Country rank"), Cell::new(rank(statistics.country_rank))]);
            table.add_row(vec![
                Cell::new("Accuracy"),
                Cell::new(format!("{:.2}%", statistics.hit_accuracy)),
            ]);
            table.add_row(vec![Cell::new("Play count"), Cell::new(statistics.play_count)]);
            if let Some(level) = statistics.level {
                table.add_row(vec![
                    Cell::new("Level"),
                    Cell::new(format!("{} ({}%)", level.current, level.progress)),
                ]);
            }
        }
        if !user.previous_usernames.is_empty() {
            table.add_row(vec![
                Cell::new("Previously"),
                Cell::new(user.previous_usernames.join(", ")),
            ]);
        }

        result.push_str(&table.to_string());
        result
    }

    fn format_events_table(&self, bundle: &EventsBundle) -> String {
        let mut table = Table::new();
        table.set_header(vec![
            Cell::new("Id").fg(Color::Cyan),
            Cell::new("Date").fg(Color::Cyan),
            Cell::new("Type").fg(Color::Cyan),
            Cell::new("Event").fg(Color::Cyan),
        ]);

        for event in &bundle.events {
            table.add_row(vec![
                Cell::new(event.id()),
                Cell::new(event.created_at().format("%Y-%m-%d %H:%M")),
                Cell::new(event.event_type()),
                Cell::new(truncate_string(&describe_event(event), 80)),
            ]);
        }
        table.set_content_arrangement(ContentArrangement::Dynamic);

        let mut result = format!(
            "\n{} Events: {}\n\n",
            "📊".cyan(),
            bundle.events.len().to_string().yellow()
        );
        result.push_str(&table.to_string());
        if let Some(cursor) = &bundle.cursor_string {
            result.push_str(&format!("\n\nNext page: --cursor {}", cursor));
        }
        result
    }

    fn format_beatmap_table(&self, beatmap: &BeatmapExtended, attributes: Option<&DifficultyAttributes>) -> String {
        let mut result = String::new();
        let title = match &beatmap.beatmapset {
            Some(set) => format!("{} - {} [{}]", set.artist, set.title, beatmap.beatmap.version),
            None => beatmap.beatmap.version.clone(),
        };
        result.push_str(&format!("\n{} {}\n\n", "🎵".cyan(), title.bold()));

        let mut table = key_value_table();
        table.add_row(vec![Cell::new("Id"), Cell::new(beatmap.beatmap.id)]);
        table.add_row(vec![Cell::new("Ruleset"), Cell::new(beatmap.beatmap.mode)]);
        table.add_row(vec![Cell::new("Status"), Cell::new(beatmap.beatmap.status)]);
        table.add_row(vec![
            Cell::new("Stars"),
            Cell::new(format!("{:.2}", beatmap.beatmap.difficulty_rating)),
        ]);
        table.add_row(vec![Cell::new("Length"), Cell::new(duration(beatmap.beatmap.total_length))]);
        if let Some(bpm) = beatmap.bpm {
            table.add_row(vec![Cell::new("BPM"), Cell::new(bpm)]);
        }
        table.add_row(vec![
            Cell::new("CS / AR / OD / HP"),
            Cell::new(format!(
                "{} / {} / {} / {}",
                beatmap.cs, beatmap.ar, beatmap.accuracy, beatmap.drain
            )),
        ]);
        if let Some(max_combo) = beatmap.beatmap.max_combo {
            table.add_row(vec![Cell::new("Max combo"), Cell::new(max_combo)]);
        }
        table.add_row(vec![Cell::new("Play count"), Cell::new(beatmap.playcount)]);
        result.push_str(&table.to_string());

        if let Some(attributes) = attributes {
            result.push_str(&format!(
                "\n\n{} Difficulty attributes: {:.2}★, max combo {}",
                "📈".cyan(),
                attributes.star_rating,
                attributes.max_combo
            ));
        }
        result
    }

    fn format_score_table(&self, score: &Score) -> String {
        let mut result = String::new();
        let player = score
            .user
            .as_ref()
            .map(|u| u.username.clone())
            .unwrap_or_else(|| score.user_id.to_string());
        result.push_str(&format!("\n{} Score {} by {}\n\n", "🏆".cyan(), score.id, player.bold()));

        let mut table = key_value_table();
        table.add_row(vec![Cell::new("Grade"), Cell::new(format!("{:?}", score.rank))]);
        table.add_row(vec![Cell::new("Score"), Cell::new(score.total_score)]);
        table.add_row(vec![
            Cell::new("Accuracy"),
            Cell::new(format!("{:.2}%", score.accuracy * 100.0)),
        ]);
        table.add_row(vec![Cell::new("Max combo"), Cell::new(score.max_combo)]);
        if let Some(pp) = score.pp {
            table.add_row(vec![Cell::new("pp"), Cell::new(format!("{:.2}", pp))]);
        }
        let mods = if score.mods.is_empty() {
            "NM".to_string()
        } else {
            score.mods.iter().map(|m| m.acronym.as_str()).collect::<Vec<_>>().join("")
        };
        table.add_row(vec![Cell::new("Mods"), Cell::new(mods)]);
        table.add_row(vec![
            Cell::new("Hits"),
            Cell::new(format!(
                "{} / {} / {} / {}",
                score.statistics.great, score.statistics.ok, score.statistics.meh, score.statistics.miss
            )),
        ]);
        table.add_row(vec![Cell::new("Set at"), Cell::new(score.ended_at.format("%Y-%m-%d %H:%M"))]);
        table.add_row(vec![
            Cell::new("Replay"),
            Cell::new(if score.has_replay { "available" } else { "-" }),
        ]);

        result.push_str(&table.to_string());
        result
    }
}

/// One-line description of an event, as shown on osu! profiles.
pub fn describe_event(event: &Event) -> String {
    match event {
        Event::Achievement(e) => format!("{} unlocked the \"{}\" medal", e.user.username, e.achievement.name),
        Event::BeatmapPlaycount(e) => format!("{} has been played {} times", e.beatmap.title, e.count),
        Event::BeatmapsetApprove(e) => format!(
            "{} by {} has been {}",
            e.beatmapset.title, e.user.username, e.approval
        ),
        Event::BeatmapsetDelete(e) => format!("{} has been deleted", e.beatmapset.title),
        Event::BeatmapsetRevive(e) => format!(
            "{} has been revived from eternal slumber by {}",
            e.beatmapset.title, e.user.username
        ),
        Event::BeatmapsetUpdate(e) => format!("{} has updated the beatmap {}", e.user.username, e.beatmapset.title),
        Event::BeatmapsetUpload(e) => format!(
            "{} has submitted a new beatmap {}",
            e.user.username, e.beatmapset.title
        ),
        Event::Rank(e) => format!(
            "{} achieved rank #{} on {} ({})",
            e.user.username, e.rank, e.beatmap.title, e.mode
        ),
        Event::RankLost(e) => format!(
            "{} has lost first place on {} ({})",
            e.user.username, e.beatmap.title, e.mode
        ),
        Event::UsernameChange(e) => format!(
            "{} has changed their username to {}",
            e.user.previous_username.as_deref().unwrap_or("?"),
            e.user.username
        ),
        Event::UserSupportAgain(e) => format!("{} has once again chosen to support osu!", e.user.username),
        Event::UserSupportFirst(e) => format!("{} has become an osu!supporter", e.user.username),
        Event::UserSupportGift(e) => format!("{} has received the gift of osu!supporter", e.user.username),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn key_value_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![Cell::new("Field").fg(Color::Cyan), Cell::new("Value").fg(Color::Cyan)]);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn rank(rank: Option<u32>) -> String {
    rank.map(|r| format!("#{}", r)).unwrap_or_else(|| "-".to_string())
}

/// Seconds as `m:ss`
fn duration(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Truncate string to max length, respecting char boundaries
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn score() -> Score {
        serde_json::from_value(json!({
            "id": 7,
            "user_id": 2,
            "beatmap_id": 75,
            "ruleset_id": 0,
            "accuracy": 0.9876,
            "max_combo": 314,
            "mods": ["HD", "DT"],
            "rank": "S",
            "pp": 123.456,
            "total_score": 1000000,
            "ended_at": "2024-03-04T05:06:07Z",
            "statistics": {"great": 300, "ok": 2, "miss": 1}
        }))
        .unwrap()
    }

    #[test]
    fn test_score_table() {
        colored::control::set_override(false);
        let output = Formatter::new(OutputFormat::Table).format_score(&score()).unwrap();

        assert!(output.contains("Score 7 by 2"));
        assert!(output.contains("98.76%"));
        assert!(output.contains("HDDT"));
        assert!(output.contains("123.46"));
        assert!(output.contains("300 / 2 / 0 / 1"));
    }

    #[test]
    fn test_score_json() {
        let output = Formatter::new(OutputFormat::Json).format_score(&score()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["id"], 7);
        assert_eq!(value["mods"][1]["acronym"], "DT");
    }

    #[test]
    fn test_describe_event() {
        let event: Event = serde_json::from_value(json!({
            "id": 1,
            "created_at": "2024-01-02T03:04:05Z",
            "type": "beatmapsetApprove",
            "approval": "ranked",
            "beatmapset": {"title": "Artist - Song", "url": "/s/1"},
            "user": {"username": "mapper", "url": "/u/1"}
        }))
        .unwrap();

        assert_eq!(describe_event(&event), "Artist - Song by mapper has been ranked");
    }

    #[test]
    fn test_helpers() {
        assert_eq!(duration(125), "2:05");
        assert_eq!(rank(None), "-");
        assert_eq!(rank(Some(12)), "#12");
        assert_eq!(truncate_string("abcdef", 5), "ab...");
        assert_eq!(truncate_string("abc", 5), "abc");
    }
}
