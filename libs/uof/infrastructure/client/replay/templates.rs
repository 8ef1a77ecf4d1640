//! Replay API request templates.
//!
//! Paths must match the provider's API byte for byte; every request path is
//! produced by [`render`] from one of these.

use super::error::{ReplayError, Result};
use crate::domain::Urn;
use reqwest::Method;

#[derive(Debug, Clone)]
pub struct Template {
    pub method: Method,
    pub path: &'static str,
}

pub const RESET: Template = Template {
    method: Method::POST,
    path: "/v1/replay/reset",
};

pub const STOP: Template = Template {
    method: Method::POST,
    path: "/v1/replay/stop",
};

pub const ADD_EVENT: Template = Template {
    method: Method::PUT,
    path: "/v1/replay/events/{event_urn}",
};

pub const PLAY: Template = Template {
    method: Method::POST,
    path: "/v1/replay/play?speed={speed}&max_delay={max_delay}&use_replay_timestamp={use_replay_timestamp}",
};

pub const START_SCENARIO: Template = Template {
    method: Method::POST,
    path: "/v1/replay/scenario/play/{scenario_id}?speed={speed}&max_delay={max_delay}&use_replay_timestamp={use_replay_timestamp}",
};

/// Values available to placeholders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayParams {
    pub event_urn: Option<Urn>,
    pub scenario_id: Option<u32>,
    pub speed: Option<u32>,
    pub max_delay: Option<u32>,
    pub use_replay_timestamp: bool,
}

impl ReplayParams {
    pub fn event(event_urn: Urn) -> Self {
        Self {
            event_urn: Some(event_urn),
            ..Default::default()
        }
    }

    pub fn play(speed: u32, max_delay: u32, use_replay_timestamp: bool) -> Self {
        Self {
            speed: Some(speed),
            max_delay: Some(max_delay),
            use_replay_timestamp,
            ..Default::default()
        }
    }

    pub fn scenario(scenario_id: u32, speed: u32, max_delay: u32) -> Self {
        Self {
            scenario_id: Some(scenario_id),
            ..Self::play(speed, max_delay, false)
        }
    }

    fn value(&self, name: &str) -> Option<String> {
        match name {
            "event_urn" => self.event_urn.as_ref().map(Urn::to_string),
            "scenario_id" => self.scenario_id.map(|v| v.to_string()),
            "speed" => self.speed.map(|v| v.to_string()),
            "max_delay" => self.max_delay.map(|v| v.to_string()),
            "use_replay_timestamp" => Some(self.use_replay_timestamp.to_string()),
            _ => None,
        }
    }
}

/// Substitute every `{name}` placeholder in `template`
pub fn render(template: &str, params: &ReplayParams) -> Result<String> {
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after
            .find('}')
            .ok_or_else(|| ReplayError::MissingParameter(after.to_string()))?;
        let name = &after[..end];
        let value = params
            .value(name)
            .ok_or_else(|| ReplayError::MissingParameter(name.to_string()))?;
        out.push_str(&value);
        rest = &after[end + 1..];
    }
    out.push_str(rest);

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_path() {
        let path = render(START_SCENARIO.path, &ReplayParams::scenario(1, 2, 3)).unwrap();
        assert_eq!(
            path,
            "/v1/replay/scenario/play/1?speed=2&max_delay=3&use_replay_timestamp=false"
        );
    }

    #[test]
    fn test_play_and_event_paths() {
        assert_eq!(
            render(PLAY.path, &ReplayParams::play(100, 10, true)).unwrap(),
            "/v1/replay/play?speed=100&max_delay=10&use_replay_timestamp=true"
        );

        let urn = Urn::parse("sr:match:11830662").unwrap();
        assert_eq!(
            render(ADD_EVENT.path, &ReplayParams::event(urn)).unwrap(),
            "/v1/replay/events/sr:match:11830662"
        );
        assert_eq!(ADD_EVENT.method, Method::PUT);

        assert_eq!(
            render(RESET.path, &ReplayParams::default()).unwrap(),
            "/v1/replay/reset"
        );
    }

    #[test]
    fn test_missing_parameter() {
        assert!(matches!(
            render(ADD_EVENT.path, &ReplayParams::default()),
            Err(ReplayError::MissingParameter(name)) if name == "event_urn"
        ));
        assert!(matches!(
            render("/x/{unterminated", &ReplayParams::default()),
            Err(ReplayError::MissingParameter(_))
        ));
    }
}
