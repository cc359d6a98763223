//! Authored, rank-aware explanation text for ranked recommendations.

use serde::Serialize;

use crate::scoring::MatchResult;

/// Explanation and training tips for one ranked recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SportInsight {
    pub insight: String,
    pub tips: String,
}

const GENERIC_INSIGHT: &str =
    "Your physical attributes align well with this sport's requirements.";
const GENERIC_TIPS: &str =
    "Focus on balanced training that develops the key physical attributes needed for this sport.";

/// Explain one ranked match. Total: unknown sport names fall back to
/// generic text, `rank` is the 0-based position in the ranking.
pub fn explain(result: &MatchResult, rank: usize) -> SportInsight {
    let base = sport_insight(&result.name).unwrap_or(GENERIC_INSIGHT);
    let rank_note = match rank {
        0 => " This appears to be your top match based on current metrics.",
        1 => " This is a strong secondary option that complements your physical attributes.",
        _ => " While not your top match, you still have significant potential in this area.",
    };
    let tips = sport_tips(&result.name).unwrap_or(GENERIC_TIPS);

    SportInsight {
        insight: format!("{base}{rank_note}"),
        tips: tips.to_string(),
    }
}

fn sport_insight(name: &str) -> Option<&'static str> {
    Some(match name {
        "Sprint Running" => {
            "Your combination of fast-twitch muscle fibers and power output gives you excellent \
             acceleration capability. Your body is built for explosive movements, which is \
             essential for sprint events."
        }
        "Swimming" => {
            "Your cardiovascular endurance and upper body strength are well-balanced, which is \
             ideal for swimming. Your flexibility also gives you an advantage in executing \
             efficient strokes."
        }
        "Basketball" => {
            "Your jumping power and agility make you well-suited for basketball. Your \
             height-to-strength ratio and neuromuscular coordination help with both offensive \
             and defensive play."
        }
        "Weightlifting" => {
            "You have exceptional strength-to-weight ratio and core power. Your body structure \
             allows for generating significant force, which is crucial in weightlifting \
             competitions."
        }
        "Long-Distance Running" => {
            "Your VO2 max and fatigue resistance are standout qualities. Your body efficiently \
             uses oxygen and manages lactic acid buildup, essential for endurance events."
        }
        "Soccer/Football" => {
            "Your combination of endurance, speed, and agility creates a solid foundation for \
             soccer. Your lower body power and coordination help with both sprinting and ball \
             control."
        }
        "Gymnastics" => {
            "Your exceptional flexibility and power-to-weight ratio are key advantages. Your \
             body control and balance make you well-suited for gymnastics disciplines."
        }
        "Cycling" => {
            "Your lower body power output and cardiovascular endurance are particularly strong. \
             Your body efficiently generates sustained power, which is ideal for cycling."
        }
        "Tennis" => {
            "Your hand-eye coordination and full-body power generation work well for tennis. \
             Your agility and reaction time help you cover the court effectively."
        }
        "Martial Arts" => {
            "Your balance of strength, flexibility, and coordination is ideal for martial arts. \
             Your body type supports both striking and grappling techniques."
        }
        _ => return None,
    })
}

fn sport_tips(name: &str) -> Option<&'static str> {
    Some(match name {
        "Sprint Running" => {
            "Focus on explosive power training, proper sprint technique, and start practice. \
             Include plyometrics and weight training to improve power output."
        }
        "Swimming" => {
            "Work on stroke efficiency, breathing techniques, and building shoulder strength. \
             Regular technique drills will help maximize your natural advantages."
        }
        "Basketball" => {
            "Develop your vertical jump, agility drills, and ball handling skills. Combine \
             court practice with plyometric training for optimal results."
        }
        "Weightlifting" => {
            "Prioritize proper form, progressive overload, and periodized training. Include \
             mobility work to maintain flexibility while building strength."
        }
        "Long-Distance Running" => {
            "Build your weekly mileage gradually, include tempo runs, and focus on recovery \
             nutrition. Strength train to prevent injuries."
        }
        "Soccer/Football" => {
            "Practice ball control drills, short sprints, and game situation awareness. \
             Combine cardio endurance work with agility training."
        }
        "Gymnastics" => {
            "Focus on core strength, flexibility training, and skill progression. Regular \
             balance and body control exercises are essential."
        }
        "Cycling" => {
            "Develop a structured training plan with interval work, hill climbs, and recovery \
             rides. Core strength is also important for stability."
        }
        "Tennis" => {
            "Practice footwork drills, stroke consistency, and court movement. Include agility \
             and reaction time training in your routine."
        }
        "Martial Arts" => {
            "Balance strength training with flexibility work, and focus on technique mastery. \
             Include regular sparring to develop practical skills."
        }
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn result_for(name: &str) -> MatchResult {
        MatchResult {
            name: name.to_string(),
            score: 80,
            reason: "Strong Speed Index (100% match)".to_string(),
            icon: "run".to_string(),
        }
    }

    #[test]
    fn test_top_match_suffix() {
        let insight = explain(&result_for("Sprint Running"), 0);
        assert!(insight.insight.starts_with("Your combination of fast-twitch"));
        assert!(insight
            .insight
            .ends_with("This appears to be your top match based on current metrics."));
        assert!(insight.tips.contains("plyometrics"));
    }

    #[test]
    fn test_secondary_suffix() {
        let insight = explain(&result_for("Swimming"), 1);
        assert!(insight.insight.contains("strong secondary option"));
    }

    #[test]
    fn test_lower_ranks_share_suffix() {
        let third = explain(&result_for("Cycling"), 2);
        let tenth = explain(&result_for("Cycling"), 9);
        assert!(third.insight.contains("significant potential"));
        assert_eq!(third, tenth);
    }

    #[test]
    fn test_unknown_sport_falls_back_to_generic() {
        let insight = explain(&result_for("Curling"), 0);
        assert!(insight
            .insight
            .starts_with("Your physical attributes align well"));
        assert!(insight.tips.starts_with("Focus on balanced training"));
    }

    #[test]
    fn test_every_builtin_sport_has_authored_text() {
        for sport in &Catalog::default().sports {
            assert!(sport_insight(&sport.name).is_some(), "{}", sport.name);
            assert!(sport_tips(&sport.name).is_some(), "{}", sport.name);
        }
    }
}
