//! Enumerations used by the osu! API and their wire names.
//!
//! Every enum is declared through [`wire_enum!`], which expands the
//! variant/name pairs into a `match` in each direction. The first name is
//! the one written to query strings and JSON, any further names are legacy
//! spellings that are still accepted when decoding.

use std::fmt;

/// Bidirectional mapping between an enum value and its wire name.
pub trait WireName: Sized + Copy + 'static {
    /// Every variant in declaration order.
    const VARIANTS: &'static [Self];

    /// Canonical wire names, in the same order as [`VARIANTS`](Self::VARIANTS).
    const WIRE_NAMES: &'static [&'static str];

    fn wire_name(self) -> &'static str;

    fn from_wire_name(name: &str) -> Option<Self>;
}

/// Returned by `FromStr` when a string is not a known wire name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownWireName {
    pub type_name: &'static str,
    pub value: String,
}

impl fmt::Display for UnknownWireName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a valid {}", self.value, self.type_name)
    }
}

impl std::error::Error for UnknownWireName {}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $wire:literal $(| $alias:literal)*
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::api::enums::WireName for $name {
            const VARIANTS: &'static [Self] = &[$(Self::$variant),+];
            const WIRE_NAMES: &'static [&'static str] = &[$($wire),+];

            fn wire_name(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }

            fn from_wire_name(name: &str) -> Option<Self> {
                match name {
                    $($wire $(| $alias)* => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::api::enums::WireName::wire_name(*self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::api::enums::UnknownWireName;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::api::enums::WireName>::from_wire_name(s).ok_or_else(|| {
                    $crate::api::enums::UnknownWireName {
                        type_name: stringify!($name),
                        value: s.to_string(),
                    }
                })
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::api::enums::WireName::wire_name(*self))
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let name = String::deserialize(deserializer)?;
                <Self as $crate::api::enums::WireName>::from_wire_name(&name).ok_or_else(|| {
                    serde::de::Error::unknown_variant(
                        &name,
                        <Self as $crate::api::enums::WireName>::WIRE_NAMES,
                    )
                })
            }
        }

        impl From<$name> for $crate::api::query::QueryValue {
            fn from(value: $name) -> Self {
                $crate::api::query::QueryValue::Enum($crate::api::enums::WireName::wire_name(value))
            }
        }
    };
}

wire_enum! {
    /// The official rulesets.
    pub enum Ruleset {
        Osu = "osu",
        Taiko = "taiko",
        /// osu!catch
        Catch = "fruits",
        Mania = "mania",
    }
}

wire_enum! {
    /// Type of an event in the "Recent" section of a profile.
    pub enum EventType {
        Achievement = "achievement",
        BeatmapPlaycount = "beatmapPlaycount",
        /// A beatmapset changed state to ranked, approved, qualified or loved.
        BeatmapsetApprove = "beatmapsetApprove",
        BeatmapsetDelete = "beatmapsetDelete",
        /// A beatmapset was updated while in the graveyard.
        BeatmapsetRevive = "beatmapsetRevive",
        BeatmapsetUpdate = "beatmapsetUpdate",
        BeatmapsetUpload = "beatmapsetUpload",
        Rank = "rank",
        /// The user lost first place on a beatmap.
        RankLost = "rankLost",
        UsernameChange = "usernameChange",
        UserSupportAgain = "userSupportAgain",
        UserSupportFirst = "userSupportFirst",
        UserSupportGift = "userSupportGift",
    }
}

wire_enum! {
    pub enum EventSortType {
        IdAscending = "id_asc",
        IdDescending = "id_desc",
    }
}

wire_enum! {
    /// Grade of a score. The API used both `x`/`xh` and `ss`/`ssh` over time,
    /// and score objects spell grades in upper case.
    pub enum Grade {
        XH = "xh" | "ssh" | "XH" | "SSH",
        X = "x" | "ss" | "X" | "SS",
        SH = "sh" | "SH",
        S = "s" | "S",
        A = "a" | "A",
        B = "b" | "B",
        C = "c" | "C",
        D = "d" | "D",
        F = "F" | "f",
    }
}

wire_enum! {
    pub enum RankedStatus {
        Graveyard = "graveyard",
        /// Work in progress.
        Wip = "wip",
        Pending = "pending",
        Ranked = "ranked",
        Approved = "approved",
        Qualified = "qualified",
        Loved = "loved",
    }
}

wire_enum! {
    pub enum BeatmapsetEventApproval {
        Ranked = "ranked",
        Approved = "approved",
        Qualified = "qualified",
        Loved = "loved",
    }
}

wire_enum! {
    pub enum BeatmapPackType {
        Standard = "standard",
        /// Packs of featured artist songs.
        Featured = "featured",
        Tournament = "tournament",
        Loved = "loved",
        /// Packs from the spotlights.
        Chart = "chart",
        Theme = "theme",
        Artist = "artist",
    }
}

wire_enum! {
    /// Beatmapset listing of a user profile. Most played beatmaps have a
    /// different response shape and use their own endpoint.
    pub enum BeatmapType {
        Favourite = "favourite",
        Graveyard = "graveyard",
        Guest = "guest",
        Loved = "loved",
        Nominated = "nominated",
        Pending = "pending",
        Ranked = "ranked",
    }
}

wire_enum! {
    pub enum UserScoreType {
        Recent = "recent",
        Best = "best",
        First = "firsts",
    }
}

wire_enum! {
    pub enum CommentSortType {
        New = "new",
        Old = "old",
        Top = "top",
    }
}

wire_enum! {
    /// Kind of object a comment thread belongs to.
    pub enum CommentableType {
        BeatmapSet = "beatmapset",
        NewsPost = "news_post",
        /// A changelog build.
        Build = "build",
    }
}

wire_enum! {
    pub enum MatchSortType {
        IdAscending = "id_asc",
        IdDescending = "id_desc",
    }
}

wire_enum! {
    pub enum MatchEventType {
        PlayerLeft = "player-left",
        PlayerJoined = "player-joined",
        PlayerKicked = "player-kicked",
        MatchCreated = "match-created",
        MatchDisbanded = "match-disbanded",
        HostChanged = "host-changed",
        /// A game was played. The event carries the game.
        Other = "other",
    }
}

wire_enum! {
    pub enum MatchScoringType {
        Accuracy = "accuracy",
        Combo = "combo",
        Score = "score",
        ScoreV2 = "scorev2",
    }
}

wire_enum! {
    pub enum MatchTeamType {
        HeadToHead = "head-to-head",
        TagCoop = "tag-coop",
        TeamVs = "team-vs",
        TagTeamVs = "tag-team-vs",
    }
}

wire_enum! {
    pub enum ForumTopicType {
        Normal = "normal",
        Sticky = "sticky",
        Announcement = "announcement",
    }
}

wire_enum! {
    pub enum SpotlightType {
        Monthly = "monthly",
        /// Early themed spotlights were typed as "spotlight".
        Theme = "theme" | "spotlight",
        Special = "special",
    }
}
