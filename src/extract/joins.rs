//! Join map extraction.
//!
//! A join map class declares one field per join:
//!
//! ```text
//! [JoinName("PowerOn")]
//! public JoinDataComplete PowerOn = new JoinDataComplete(
//!     new JoinData { JoinNumber = 1, JoinSpan = 1 },
//!     new JoinMetadata
//!     {
//!         Description = "Power On",
//!         JoinCapabilities = eJoinCapabilities.FromSIMPL,
//!         JoinType = eJoinType.Digital
//!     });
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Suffix identifying join map classes
pub const JOIN_MAP_SUFFIX: &str = "JoinMap";

static JOIN_DATA_COMPLETE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"public\s+JoinDataComplete\s+(\w+)\s*=\s*new\s+JoinDataComplete\s*\(\s*new\s+JoinData\s*\{([^}]*)\}\s*,\s*new\s+JoinMetadata\s*\{([^}]*)\}",
    )
    .expect("valid join pattern")
});

static JOIN_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"JoinNumber\s*=\s*(\d+)").expect("valid join number pattern"));

static DESCRIPTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"Description\s*=\s*"([^"]*)""#).expect("valid description pattern"));

static JOIN_TYPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"JoinType\s*=\s*eJoinType\.(\w+)").expect("valid join type pattern"));

static CAPABILITIES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"JoinCapabilities\s*=\s*eJoinCapabilities\.(\w+)").expect("valid capabilities pattern")
});

/// One join of a join map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinEntry {
    pub name: String,
    pub join_number: u32,
    /// `Digital`, `Analog`, `Serial` or a combination such as `DigitalSerial`
    pub join_type: String,
    pub capabilities: Option<String>,
    pub description: String,
}

impl JoinEntry {
    /// Read/write marker for the join table
    pub fn access(&self) -> &'static str {
        match self.capabilities.as_deref() {
            Some("FromSIMPL") => "W",
            Some("ToFromSIMPL") => "R/W",
            _ => "R",
        }
    }
}

/// Class names that name join maps
pub fn find_joinmap_classes<'a>(class_names: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    class_names
        .into_iter()
        .filter(|name| name.ends_with(JOIN_MAP_SUFFIX))
        .collect()
}

/// Every complete join declared in `text`, in source order.
///
/// Declarations missing a number, description or type are skipped.
pub fn parse_join_map(text: &str) -> Vec<JoinEntry> {
    JOIN_DATA_COMPLETE
        .captures_iter(text)
        .filter_map(|caps| {
            let name = caps.get(1)?.as_str();
            let data = caps.get(2)?.as_str();
            let metadata = caps.get(3)?.as_str();

            let join_number = first_group(&JOIN_NUMBER, data)?.parse().ok()?;
            let description = first_group(&DESCRIPTION, metadata)?;
            let join_type = first_group(&JOIN_TYPE, metadata)?;
            let capabilities = first_group(&CAPABILITIES, metadata).map(str::to_string);

            Some(JoinEntry {
                name: name.to_string(),
                join_number,
                join_type: join_type.to_string(),
                capabilities,
                description: description.to_string(),
            })
        })
        .collect()
}

fn first_group<'t>(regex: &Regex, text: &'t str) -> Option<&'t str> {
    regex.captures(text).and_then(|c| c.get(1)).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    const JOIN_MAP: &str = r#"
public class DisplayJoinMap : JoinMapBaseAdvanced
{
    [JoinName("PowerOn")]
    public JoinDataComplete PowerOn = new JoinDataComplete(
        new JoinData { JoinNumber = 1, JoinSpan = 1 },
        new JoinMetadata
        {
            Description = "Power On",
            JoinCapabilities = eJoinCapabilities.FromSIMPL,
            JoinType = eJoinType.Digital
        });

    [JoinName("VolumeLevel")]
    public JoinDataComplete VolumeLevel = new JoinDataComplete(
        new JoinData { JoinNumber = 5, JoinSpan = 1 },
        new JoinMetadata
        {
            JoinType = eJoinType.Analog,
            Description = "Volume level",
            JoinCapabilities = eJoinCapabilities.ToFromSIMPL
        });

    public JoinDataComplete Name = new JoinDataComplete(new JoinData { JoinNumber = 1, JoinSpan = 1 },
        new JoinMetadata { Description = "Device name", JoinType = eJoinType.Serial });
}
"#;

    #[test]
    fn test_parse_join_map() {
        let joins = parse_join_map(JOIN_MAP);
        assert_eq!(joins.len(), 3);

        assert_eq!(joins[0].name, "PowerOn");
        assert_eq!(joins[0].join_number, 1);
        assert_eq!(joins[0].join_type, "Digital");
        assert_eq!(joins[0].description, "Power On");
        assert_eq!(joins[0].access(), "W");

        assert_eq!(joins[1].join_number, 5);
        assert_eq!(joins[1].join_type, "Analog");
        assert_eq!(joins[1].access(), "R/W");

        assert_eq!(joins[2].join_type, "Serial");
        assert_eq!(joins[2].capabilities, None);
        assert_eq!(joins[2].access(), "R");
    }

    #[test]
    fn test_incomplete_join_skipped() {
        let src = r#"
public JoinDataComplete Broken = new JoinDataComplete(
    new JoinData { JoinSpan = 1 },
    new JoinMetadata { Description = "No number", JoinType = eJoinType.Digital });
"#;
        assert!(parse_join_map(src).is_empty());
    }

    #[test]
    fn test_find_joinmap_classes() {
        let names = ["DisplayJoinMap", "Display", "JoinMapBaseAdvanced", "ExtraJoinMap"];
        assert_eq!(find_joinmap_classes(names), vec!["DisplayJoinMap", "ExtraJoinMap"]);
    }
}
