use serde::{Deserialize, Serialize};

/// `rActiveYN` flag carried by every master-data record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ActiveFlag {
    #[default]
    #[serde(rename = "Y")]
    Yes,
    #[serde(rename = "N")]
    No,
}

impl ActiveFlag {
    pub fn from_bool(active: bool) -> Self {
        if active {
            ActiveFlag::Yes
        } else {
            ActiveFlag::No
        }
    }

    pub fn is_active(self) -> bool {
        self == ActiveFlag::Yes
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActiveFlag::Yes => "Y",
            ActiveFlag::No => "N",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Y" => Some(ActiveFlag::Yes),
            "N" => Some(ActiveFlag::No),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_letter() {
        assert_eq!(serde_json::to_string(&ActiveFlag::No).unwrap(), "\"N\"");
        let flag: ActiveFlag = serde_json::from_str("\"Y\"").unwrap();
        assert!(flag.is_active());
    }
}
