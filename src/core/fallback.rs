use crate::models::Candidate;

/// Fixed illustrative candidates shown when the backend is unreachable or
/// returns nothing usable
///
/// The data is deliberately static so an offline demo always renders the
/// same deck.
pub fn fallback_candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            profile_id: "fallback-1".to_string(),
            name: "Alex Rivera".to_string(),
            age: Some(29),
            job_title: "Product Designer".to_string(),
            industry: "Technology".to_string(),
            schedule: "Flexible".to_string(),
            work_life_priority: "Balanced".to_string(),
            bio: "Design lead focused on creating equitable experiences for career changers and underrepresented talent.".to_string(),
            skills: vec![
                "UX Research".to_string(),
                "Figma".to_string(),
                "Design Systems".to_string(),
            ],
            goals: vec![
                "Launch a mentoring program".to_string(),
                "Design inclusive products".to_string(),
            ],
            looking_for: "Ambitious leaders who value mentorship and collaboration.".to_string(),
            compatibility_score: Some(87.0),
            match_type: Some("Work-Life Balance Match".to_string()),
            reasons: vec![
                "Shared balanced work-life priorities".to_string(),
                "Overlapping design skills".to_string(),
                "Aligned mentorship goals".to_string(),
            ],
        },
        Candidate {
            profile_id: "fallback-2".to_string(),
            name: "Jordan Lee".to_string(),
            age: Some(33),
            job_title: "Revenue Operations Manager".to_string(),
            industry: "SaaS".to_string(),
            schedule: "Standard".to_string(),
            work_life_priority: "Work-focused".to_string(),
            bio: "Ops pro powering Series B startups; I turn chaos into predictable growth engines.".to_string(),
            skills: vec![
                "RevOps".to_string(),
                "HubSpot".to_string(),
                "SQL".to_string(),
            ],
            goals: vec![
                "Scale GTM operations".to_string(),
                "Build cross-functional alignment".to_string(),
            ],
            looking_for: "Founders and leaders who thrive on scale, experimentation, and sharp feedback loops.".to_string(),
            compatibility_score: Some(75.0),
            match_type: Some("Ambition Match".to_string()),
            reasons: vec![
                "Ambition levels within 1 point".to_string(),
                "Complementary ops skills".to_string(),
                "Shared growth mindset".to_string(),
            ],
        },
        Candidate {
            profile_id: "fallback-3".to_string(),
            name: "Priya Patel".to_string(),
            age: Some(27),
            job_title: "Healthcare Data Scientist".to_string(),
            industry: "Healthcare".to_string(),
            schedule: "Hybrid".to_string(),
            work_life_priority: "Life-focused".to_string(),
            bio: "Building models that actually help clinicians. Off-hours I’m climbing, reading Ursula Le Guin, or teaching girls who code.".to_string(),
            skills: vec![
                "Python".to_string(),
                "Machine Learning".to_string(),
                "Clinical Analytics".to_string(),
            ],
            goals: vec![
                "Build ethical AI for patient outcomes".to_string(),
                "Collaborate with mission-driven founders".to_string(),
            ],
            looking_for: "Impact-first leaders who see tech as a lever for systemic change.".to_string(),
            compatibility_score: Some(92.0),
            match_type: Some("Industry Match".to_string()),
            reasons: vec![
                "Same healthcare focus".to_string(),
                "Shared machine learning skills".to_string(),
                "Aligned mission-driven goals".to_string(),
            ],
        },
    ]
}
