//! Recorded events that exercise interesting feed behaviour

use crate::domain::Urn;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleEvent {
    pub description: &'static str,
    pub urn: &'static str,
}

impl SampleEvent {
    pub fn urn(&self) -> Result<Urn> {
        Urn::parse(self.urn)
    }
}

const SAMPLE_EVENTS: &[SampleEvent] = &[
    SampleEvent {
        description: "Soccer Match - English Premier League 2017 (Watford vs Westham)",
        urn: "sr:match:11830662",
    },
    SampleEvent {
        description: "Soccer Match w Overtime - Primavera Cup",
        urn: "sr:match:12865222",
    },
    SampleEvent {
        description: "Soccer Match w Overtime & Penalty Shootout - KNVB beker 17/18 - FC Twente Enschede vs Ajax Amsterdam",
        urn: "sr:match:12873164",
    },
    SampleEvent {
        description: "Soccer Match with Rollback Betsettlement from Prematch Producer",
        urn: "sr:match:11958226",
    },
    SampleEvent {
        description: "Soccer Match aborted mid-game - new match played later (first match considered cancelled according to betting rules}",
        urn: "sr:match:11971876",
    },
    SampleEvent {
        description: "Soccer Match w PlayerProps {prematch odds only}",
        urn: "sr:match:12055466",
    },
    SampleEvent {
        description: "Tennis Match - ATP Paris Final 2017",
        urn: "sr:match:12927908",
    },
    SampleEvent {
        description: "Tennis Match where one of the players retired",
        urn: "sr:match:12675240",
    },
    SampleEvent {
        description: "Tennis Match with bet_cancel adjustments using rollback_bet_cancel",
        urn: "sr:match:13616027",
    },
    SampleEvent {
        description: "Tennis Match w voided markets due to temporary loss of coverage - no ability to verify results",
        urn: "sr:match:13600533",
    },
    SampleEvent {
        description: "Basketball Match - NBA Final 2017 - {Golden State Warriors vs Cleveland Cavaliers}",
        urn: "sr:match:11733773",
    },
    SampleEvent {
        description: "Basketball Match w voided DrawNoBet {2nd half draw}",
        urn: "sr:match:12953638",
    },
    SampleEvent {
        description: "Basketball Match w PlayerProps",
        urn: "sr:match:12233896",
    },
    SampleEvent {
        description: "Icehockey Match - NHL Final 2017 {6th match - {Nashville Predators vs Pittsburg Penguins}",
        urn: "sr:match:11784628",
    },
    SampleEvent {
        description: "Icehockey Match with Rollback BetCancel",
        urn: "sr:match:11878140",
    },
    SampleEvent {
        description: "Icehockey Match with overtime + rollback_bet_cancel + match_status=\"aet\"",
        urn: "sr:match:11878386",
    },
    SampleEvent {
        description: "American Football Game - NFL 2018/2018 {Chicago Bears vs Atlanta Falcons}",
        urn: "sr:match:11538563",
    },
    SampleEvent {
        description: "American Football Game w PlayerProps",
        urn: "sr:match:13552497",
    },
    SampleEvent {
        description: "Handball Match - DHB Pokal 17/18 {SG Flensburg-Handewitt vs Fuchse Berlin}",
        urn: "sr:match:12362564",
    },
    SampleEvent {
        description: "Baseball Game - MLB 2017 {Final Los Angeles Dodgers vs Houston Astros}",
        urn: "sr:match:12906380",
    },
    SampleEvent {
        description: "Badminton Game - Indonesia Masters 2018",
        urn: "sr:match:13600687",
    },
    SampleEvent {
        description: "Snooker - International Championship 2017 {Final Best-of-19 frames}",
        urn: "sr:match:12927314",
    },
    SampleEvent {
        description: "Darts - PDC World Championship 17/18 - {Final}",
        urn: "sr:match:13451765",
    },
    SampleEvent {
        description: "CS:GO {ESL Pro League 2018}",
        urn: "sr:match:13497893",
    },
    SampleEvent {
        description: "Dota2 {The International 2017 - Final}",
        urn: "sr:match:12209528",
    },
    SampleEvent {
        description: "League of Legends Match {LCK Spring 2018}",
        urn: "sr:match:13516251",
    },
    SampleEvent {
        description: "Cricket Match [Premium Cricket] - The Ashes 2017 {Australia vs England}",
        urn: "sr:match:11836360",
    },
    SampleEvent {
        description: "Cricket Match {rain affected} [Premium Cricket] - ODI Series New Zealand vs. Pakistan 2018",
        urn: "sr:match:13073610",
    },
    SampleEvent {
        description: "Volleyball Match {includes bet_cancels}",
        urn: "sr:match:12716714",
    },
    SampleEvent {
        description: "Volleyball match where Betradar loses coverage mid-match - no ability to verify results",
        urn: "sr:match:13582831",
    },
    SampleEvent {
        description: "Aussie Rules Match {AFL 2017 Final}",
        urn: "sr:match:12587650",
    },
    SampleEvent {
        description: "Table Tennis Match {World Cup 2017 Final",
        urn: "sr:match:12820410",
    },
    SampleEvent {
        description: "Squash Match {Qatar Classic 2017}",
        urn: "sr:match:12841530",
    },
    SampleEvent {
        description: "Beach Volleyball",
        urn: "sr:match:13682571",
    },
    SampleEvent {
        description: "Badminton",
        urn: "sr:match:13600687",
    },
    SampleEvent {
        description: "Bowls",
        urn: "sr:match:13530237",
    },
    SampleEvent {
        description: "Rugby League",
        urn: "sr:match:12979908",
    },
    SampleEvent {
        description: "Rugby Union",
        urn: "sr:match:12420636",
    },
    SampleEvent {
        description: "Rugby Union 7s",
        urn: "sr:match:13673067",
    },
    SampleEvent {
        description: "Handball",
        urn: "sr:match:12362564",
    },
    SampleEvent {
        description: "Futsal",
        urn: "sr:match:12363102",
    },
    SampleEvent {
        description: "Golf Winner Events + Three Balls - South African Open {Winner events + Three balls}",
        urn: "sr:simple_tournament:66820",
    },
    SampleEvent {
        description: "Season Outrights {Long-term Outrights} - NFL 2017/18",
        urn: "sr:season:40175",
    },
    SampleEvent {
        description: "Race Outrights {Short-term Outrights} - Cycling Tour Down Under 2018",
        urn: "sr:stage:329361",
    },
];

pub fn sample_events() -> &'static [SampleEvent] {
    SAMPLE_EVENTS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UrnType;

    #[test]
    fn test_sample_urns_parse() {
        assert!(!sample_events().is_empty());
        for sample in sample_events() {
            let urn = sample.urn().unwrap();
            assert_eq!(urn.to_string(), sample.urn);
        }
    }

    #[test]
    fn test_sample_kinds() {
        let first = sample_events()[0].urn().unwrap();
        assert_eq!(first.kind(), UrnType::Match);
        assert_eq!(first.id(), 11830662);

        let kinds: Vec<UrnType> = sample_events()
            .iter()
            .map(|s| s.urn().unwrap().kind())
            .collect();
        assert!(kinds.contains(&UrnType::SimpleTournament));
        assert!(kinds.contains(&UrnType::Season));
        assert!(kinds.contains(&UrnType::Stage));
    }
}
