text_enum!(
    /// Skill tier a driver races in. `Open` only ever names a race, never a driver.
    Division {
        Division1 => "Division 1",
        Division2 => "Division 2",
        Division3 => "Division 3",
        Division4 => "Division 4",
        New => "New",
        Open => "Open",
    }
);

impl Division {
    /// Divisions that race together in an `Open` race
    const OPEN_MEMBERS: [Division; 3] = [Division::Division3, Division::Division4, Division::New];

    /// Matches a race division against a division filter.
    /// An `Open` filter also takes in every division that races in Open events.
    pub fn matches_race_filter(self, filter: Division) -> bool {
        if filter == Division::Open {
            self == Division::Open || Self::OPEN_MEMBERS.contains(&self)
        } else {
            self == filter
        }
    }

    /// Matches a driver's own division against a division filter.
    pub fn matches_driver_filter(self, filter: Division) -> bool {
        if filter == Division::Open {
            Self::OPEN_MEMBERS.contains(&self)
        } else {
            self == filter
        }
    }
}

text_enum!(
    /// Stage of a round
    RaceType {
        Qualification => "qualification",
        Heat => "heat",
        Final => "final",
    }
);

impl RaceType {
    /// Tie-break order when rows of different stages share the same points
    pub fn priority(self) -> u8 {
        match self {
            RaceType::Final => 0,
            RaceType::Heat => 1,
            RaceType::Qualification => 2,
        }
    }
}

text_enum!(
    ChangeType {
        Promotion => "promotion",
        Demotion => "demotion",
        DivisionStart => "division_start",
        MidSeasonJoin => "mid_season_join",
    }
);

text_enum!(
    DriverStatus {
        Active => "ACTIVE",
        Inactive => "INACTIVE",
        Banned => "BANNED",
    }
);

text_enum!(
    RoundStatus {
        Upcoming => "upcoming",
        Completed => "completed",
        Cancelled => "cancelled",
    }
);

impl Default for DriverStatus {
    fn default() -> Self {
        DriverStatus::Active
    }
}

impl Default for RoundStatus {
    fn default() -> Self {
        RoundStatus::Upcoming
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive_and_trimmed() {
        assert_eq!("division 2".parse::<Division>().unwrap(), Division::Division2);
        assert_eq!(" FINAL ".parse::<RaceType>().unwrap(), RaceType::Final);
        assert_eq!("Mid_Season_Join".parse::<ChangeType>().unwrap(), ChangeType::MidSeasonJoin);
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        assert!("Division 5".parse::<Division>().is_err());
        assert!("sprint".parse::<RaceType>().is_err());
    }

    #[test]
    fn test_serde_uses_display_strings() {
        let json = serde_json::to_string(&Division::Division1).unwrap();
        assert_eq!(json, "\"Division 1\"");

        let status: DriverStatus = serde_json::from_str("\"BANNED\"").unwrap();
        assert_eq!(status, DriverStatus::Banned);
    }

    #[test]
    fn test_open_race_filter_takes_in_lower_divisions() {
        for division in [Division::Division3, Division::Division4, Division::New, Division::Open] {
            assert!(division.matches_race_filter(Division::Open));
        }
        assert!(!Division::Division1.matches_race_filter(Division::Open));
        assert!(!Division::Division2.matches_race_filter(Division::Open));
    }

    #[test]
    fn test_open_driver_filter_excludes_literal_open() {
        assert!(Division::New.matches_driver_filter(Division::Open));
        assert!(!Division::Open.matches_driver_filter(Division::Open));
        assert!(Division::Division1.matches_driver_filter(Division::Division1));
        assert!(!Division::Division1.matches_driver_filter(Division::Division2));
    }

    #[test]
    fn test_race_type_priority_orders_final_first() {
        assert!(RaceType::Final.priority() < RaceType::Heat.priority());
        assert!(RaceType::Heat.priority() < RaceType::Qualification.priority());
    }
}
