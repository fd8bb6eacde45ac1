//! Topic catalog module
//!
//! The fixed set of exam topics, their descriptions and worked sample questions.

mod samples;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use samples::{find_sample, samples_for, Sample};

/// Supported exam topics, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topic {
    Probability,
    CoordinateGeometry,
    Calculus,
    Matrices,
}

impl Topic {
    pub const ALL: [Self; 4] = [
        Self::Probability,
        Self::CoordinateGeometry,
        Self::Calculus,
        Self::Matrices,
    ];

    /// Identifier used in URLs and request bodies
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Probability => "probability",
            Self::CoordinateGeometry => "coordinate-geometry",
            Self::Calculus => "calculus",
            Self::Matrices => "matrices",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Probability => {
                "Basics: equally likely outcomes, simple probabilities, complementary events."
            }
            Self::CoordinateGeometry => "Distance, midpoint, gradients, equation of a line.",
            Self::Calculus => "Derivatives and basic integrals.",
            Self::Matrices => "2x2 addition and multiplication.",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown topic: '{s}'"))
    }
}

/// Identifiers of every topic, in catalog order
pub fn topic_ids() -> Vec<&'static str> {
    Topic::ALL.iter().map(|t| t.as_str()).collect()
}

/// Body of `GET /samples/{topic}`
#[derive(Debug, Serialize)]
pub struct TopicSamples {
    pub topic: Topic,
    pub description: &'static str,
    pub samples: &'static [Sample],
}

impl TopicSamples {
    pub fn for_topic(topic: Topic) -> Self {
        Self {
            topic,
            description: topic.description(),
            samples: samples_for(topic),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_ids_order() {
        assert_eq!(
            topic_ids(),
            vec!["probability", "coordinate-geometry", "calculus", "matrices"]
        );
    }

    #[test]
    fn test_parse_topic() {
        for topic in Topic::ALL {
            assert_eq!(topic.as_str().parse::<Topic>(), Ok(topic));
        }
        assert!("statistics".parse::<Topic>().is_err());
        assert!("Probability".parse::<Topic>().is_err());
    }

    #[test]
    fn test_serde_matches_identifier() {
        for topic in Topic::ALL {
            let json = serde_json::to_value(topic).unwrap();
            assert_eq!(json, topic.as_str());
        }
        let parsed: Topic = serde_json::from_str("\"coordinate-geometry\"").unwrap();
        assert_eq!(parsed, Topic::CoordinateGeometry);
    }

    #[test]
    fn test_every_topic_has_question_text() {
        for topic in Topic::ALL {
            let listing = TopicSamples::for_topic(topic);
            assert!(!listing.description.is_empty());
            assert!(!listing.samples.is_empty(), "{topic} has no samples");
            for sample in listing.samples {
                assert!(!sample.question.trim().is_empty());
            }
        }
    }
}
