use sp_common::{
    pool::{load_dataset_from_reader, CandidatePool},
    rank, similarity, MatchTier, RecommendationFilter, UserProfile,
};

fn target() -> UserProfile {
    UserProfile {
        cs_interests: "AI, Machine Learning, Data Mining".into(),
        technical_skills: "Python, SQL, R".into(),
        soft_skills: "Communication, Teamwork".into(),
        research_interests: "NLP".into(),
        professional_interests: "Data Science".into(),
        hobbies: "Chess, Hiking".into(),
        preferred_learning_style: "Visual".into(),
        study_partners_preferences: "Small Group".into(),
        preferred_study_hours: "Evening".into(),
        ..UserProfile::new("me")
    }
}

/// Close match: 0.40 + 0.10 + 0.10 + 0.10 + 0.10 + 0.05 * 2/3 + 0.05 + 0.02
fn near_twin() -> UserProfile {
    UserProfile {
        cs_interests: "ai, machine learning, data mining".into(),
        technical_skills: " Python , SQL".into(),
        soft_skills: "teamwork, communication".into(),
        research_interests: "NLP".into(),
        professional_interests: "Data Science".into(),
        hobbies: "Chess, Hiking, Reading".into(),
        preferred_learning_style: "Visual".into(),
        study_partners_preferences: "Pairs".into(),
        preferred_study_hours: "Evening".into(),
        ..UserProfile::new("twin")
    }
}

/// 0.40 * 1/4 + 0.10 * 1/2 + 0.10 + 0.05 + 0.03
fn partial() -> UserProfile {
    UserProfile {
        cs_interests: "AI, Robotics".into(),
        soft_skills: "None".into(),
        research_interests: "NLP, Vision".into(),
        professional_interests: "data science".into(),
        hobbies: "chess, hiking".into(),
        study_partners_preferences: "Small Group".into(),
        preferred_study_hours: "Morning".into(),
        ..UserProfile::new("partial")
    }
}

fn opposite() -> UserProfile {
    UserProfile {
        cs_interests: "Cooking".into(),
        technical_skills: "Excel".into(),
        soft_skills: "Leadership".into(),
        research_interests: "History".into(),
        professional_interests: "Finance".into(),
        hobbies: "Football".into(),
        preferred_learning_style: "Auditory".into(),
        study_partners_preferences: "Pairs".into(),
        preferred_study_hours: "Morning".into(),
        ..UserProfile::new("opposite")
    }
}

fn pool() -> Vec<UserProfile> {
    vec![
        opposite(),
        target(),
        partial(),
        UserProfile::new("blank"),
        near_twin(),
    ]
}

#[test]
fn pins_exact_match_scores() {
    let ranked = rank(&target(), &pool(), None);

    let summary: Vec<_> = ranked
        .iter()
        .map(|r| (r.profile.id.as_str(), r.match_score))
        .collect();
    assert_eq!(
        summary,
        vec![("twin", 90), ("partial", 33), ("opposite", 0), ("blank", 0)]
    );
    assert_eq!(ranked[0].tier(), MatchTier::High);
    assert_eq!(ranked[1].tier(), MatchTier::Low);
}

#[test]
fn limit_returns_prefix_of_full_ranking() {
    let full = rank(&target(), &pool(), None);
    let top = rank(&target(), &pool(), Some(3));

    assert_eq!(top.len(), 3);
    assert_eq!(&full[..3], &top[..]);
    assert!(top.iter().all(|r| r.profile.id != "me"));
}

#[test]
fn pairwise_similarity_is_symmetric_and_reflexive() {
    let t = target();
    for other in pool() {
        assert_eq!(similarity(&t, &other), similarity(&other, &t));
    }

    let copy = UserProfile {
        id: "copy".into(),
        ..target()
    };
    assert_eq!(similarity(&t, &copy), 1.0);
}

#[test]
fn sparse_profiles_match_each_other_strongly() {
    // both-empty list attributes count as agreement
    let a = UserProfile {
        cs_interests: "AI, ML".into(),
        ..UserProfile::new("a")
    };
    let x = UserProfile {
        cs_interests: "AI, ML".into(),
        ..UserProfile::new("x")
    };
    let y = UserProfile {
        cs_interests: "Cooking".into(),
        ..UserProfile::new("y")
    };

    let ranked = rank(&a, &[y, x], None);
    let summary: Vec<_> = ranked
        .iter()
        .map(|r| (r.profile.id.as_str(), r.match_score))
        .collect();
    assert_eq!(summary, vec![("x", 90), ("y", 50)]);
}

#[test]
fn dataset_pool_feeds_the_ranker() {
    let csv = "First Name,Last Name,University,CS and Data Science Interests,Preferred Study Hours\n\
Ada,Lovelace,State University,\"AI, Machine Learning\",Evening\n\
Alan,Turing,Tech Institute,Cryptography,Morning\n";
    let dataset = load_dataset_from_reader(csv.as_bytes()).unwrap();
    let registered = vec![UserProfile {
        first_name: "New".into(),
        cs_interests: "AI".into(),
        ..UserProfile::new("1700000000000")
    }];

    let pool = CandidatePool::new()
        .with_profiles(dataset)
        .with_profiles(registered);
    let me = pool.find("1700000000000").unwrap().clone();

    let ranked = rank(&me, pool.as_slice(), None);
    let ids: Vec<_> = ranked.iter().map(|r| r.profile.id.as_str()).collect();
    assert_eq!(ids, vec!["dataset_0", "dataset_1"]);
    // 0.40 * 1/2 + 0.50 from the unset list attributes
    assert_eq!(ranked[0].match_score, 70);

    let filtered = RecommendationFilter {
        query: Some("state univ".into()),
        tier: None,
    }
    .apply(ranked);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].profile.first_name, "Ada");
}
